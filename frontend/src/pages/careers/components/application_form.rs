use super::success::ApplicationSuccess;
use crate::{
    api::{ApiError, ApplicationRequest, JobPosting},
    components::layout::ErrorMessage,
    pages::{
        careers::{
            repository::CareersRepository,
            utils::{ApplicationFormState, ApplicationStage, RESUME_ACCEPT},
        },
        jobs::utils::job_title,
        people::components::field::INPUT_CLASS,
    },
    utils::file::{read_file, selected_file},
};
use leptos::{ev::SubmitEvent, *};

type Submission = (ApplicationRequest, Option<web_sys::File>);

async fn submit(repo: CareersRepository, (request, resume): Submission) -> Result<(), ApiError> {
    let upload = match resume {
        Some(file) => Some(read_file(&file).await.map_err(ApiError::validation)?),
        None => None,
    };
    repo.submit_application(request, upload).await
}

#[component]
pub fn ApplicationForm(job: JobPosting, on_close: Callback<()>) -> impl IntoView {
    let repository = CareersRepository::from_context();
    let job_id = job.id.clone();
    let form = create_rw_signal(ApplicationFormState::default());
    let resume = create_rw_signal(None::<web_sys::File>);
    let stage = create_rw_signal(ApplicationStage::Form);
    let error = create_rw_signal(None::<String>);

    let apply_action = create_action(move |submission: &Submission| {
        let repo = repository.clone();
        let submission = submission.clone();
        async move { submit(repo, submission).await }
    });
    let pending = apply_action.pending();

    create_effect(move |_| {
        if let Some(result) = apply_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    stage.set(ApplicationStage::Submitted);
                }
                Err(err) => error.set(Some(err.error)),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match form.with_untracked(|f| f.to_request(job_id.clone())) {
            Ok(request) => {
                error.set(None);
                apply_action.dispatch((request, resume.get_untracked()));
            }
            Err(message) => error.set(Some(message)),
        }
    };

    let heading = format!("Apply for \"{}\"", job_title(&job));
    view! {
        <Show
            when=move || stage.get() == ApplicationStage::Form
            fallback=move || view! { <ApplicationSuccess on_close=on_close/> }
        >
            <form class="space-y-4" novalidate on:submit=on_submit.clone()>
                <h3 class="text-xl font-semibold text-fg">{heading.clone()}</h3>
                {move || error.get().map(|message| view! { <ErrorMessage message=message/> })}
                <label class="block text-sm font-medium text-fg">
                    "Full Name *"
                    <input
                        class=INPUT_CLASS
                        placeholder="Enter your full name"
                        prop:value=move || form.with(|f| f.full_name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.full_name = value);
                        }
                    />
                </label>
                <label class="block text-sm font-medium text-fg">
                    "Email *"
                    <input
                        type="email"
                        class=INPUT_CLASS
                        placeholder="Enter your email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.email = value);
                        }
                    />
                </label>
                <label class="block text-sm font-medium text-fg">
                    "Mobile Number"
                    <input
                        type="tel"
                        class=INPUT_CLASS
                        placeholder="Enter mobile number"
                        prop:value=move || form.with(|f| f.phone.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.phone = value);
                        }
                    />
                </label>
                <label class="block text-sm font-medium text-fg">
                    "Resume"
                    <input
                        type="file"
                        accept=RESUME_ACCEPT
                        class="mt-1 block w-full text-sm text-fg"
                        on:change=move |ev| resume.set(selected_file(&ev))
                    />
                </label>
                <div class="flex justify-end gap-2">
                    <button
                        type="button"
                        class="px-4 py-2 rounded-md border border-border text-fg hover:bg-action-ghost-bg-hover"
                        on:click=move |_| on_close.call(())
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="px-4 py-2 rounded-md bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Submitting..." } else { "Submit Application" }}
                    </button>
                </div>
            </form>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::job, ssr::render_to_string};

    #[test]
    fn form_names_the_role() {
        let html = render_to_string(move || {
            view! { <ApplicationForm job=job("9", "Rust Engineer") on_close=Callback::new(|_| {})/> }
        });
        assert!(html.contains("Apply for &quot;Rust Engineer&quot;") || html.contains("Apply for \"Rust Engineer\""));
        assert!(html.contains(".pdf,.doc,.docx"));
        assert!(html.contains("Submit Application"));
        assert!(!html.contains("Application Submitted Successfully!"));
    }

    #[test]
    fn success_panel_has_close() {
        let html = render_to_string(move || {
            view! { <ApplicationSuccess on_close=Callback::new(|_| {})/> }
        });
        assert!(html.contains("Application Submitted Successfully!"));
        assert!(html.contains("Close"));
    }
}
