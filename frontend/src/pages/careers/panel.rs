use super::{
    components::{
        application_form::ApplicationForm,
        job_board::{use_open_jobs, JobBoard},
    },
    repository::CareersRepository,
    utils::{missing_job_id, JobDetailsState},
};
use crate::{
    components::{
        layout::{Layout, LoadingSpinner},
        modal::Modal,
    },
    pages::jobs::JobDetailsView,
    utils::navigation::go_back,
};
use leptos::*;
use leptos_router::use_params_map;

#[component]
pub fn CareersPage() -> impl IntoView {
    let vm = use_open_jobs();
    view! {
        <Layout>
            <JobBoard vm=vm/>
        </Layout>
    }
}

#[component]
pub fn JobDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let repository = CareersRepository::from_context();
    let job = create_local_resource(
        move || params.with(|p| p.get("id").cloned()),
        move |id: Option<String>| {
            let repo = repository.clone();
            async move {
                match id.filter(|id| !id.trim().is_empty()) {
                    Some(id) => repo.fetch_job(id).await,
                    None => Err(missing_job_id()),
                }
            }
        },
    );
    let state = Signal::derive(move || JobDetailsState::from_fetch(job.get()));

    view! {
        <Layout>
            <JobDetailsBody state=state on_back=Callback::new(|_| go_back())/>
        </Layout>
    }
}

/// Loading, not-found and ready renderings of a single posting, with the apply modal.
#[component]
pub fn JobDetailsBody(state: Signal<JobDetailsState>, on_back: Callback<()>) -> impl IntoView {
    let applying = create_rw_signal(false);
    let close = Callback::new(move |_| applying.set(false));

    move || match state.get() {
        JobDetailsState::Loading => view! {
            <div class="flex flex-col items-center gap-2 py-12">
                <LoadingSpinner/>
                <p class="text-fg-muted">"Loading job details..."</p>
            </div>
        }
        .into_view(),
        JobDetailsState::NotFound(message) => view! {
            <div class="max-w-xl mx-auto text-center space-y-3 py-12">
                <h2 class="text-2xl font-semibold text-fg">"Job not found"</h2>
                <p class="text-fg-muted">{message}</p>
                <button
                    type="button"
                    class="px-4 py-2 rounded-md border border-border text-fg hover:bg-action-ghost-bg-hover"
                    on:click=move |_| on_back.call(())
                >
                    "Back"
                </button>
            </div>
        }
        .into_view(),
        JobDetailsState::Ready(job) => {
            let posting = job.clone();
            view! {
                <article class="bg-surface-elevated shadow rounded-lg p-6">
                    <JobDetailsView
                        job=job
                        on_back=on_back
                        on_apply=Callback::new(move |_| applying.set(true))
                    />
                </article>
                <Show when=move || applying.get()>
                    {let posting = posting.clone(); view! {
                        <Modal title="Job Application".to_string() on_close=close>
                            <ApplicationForm job=posting.clone() on_close=close/>
                        </Modal>
                    }}
                </Show>
            }
            .into_view()
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiError;
    use crate::test_support::{helpers::job, ssr::render_to_string};

    fn render_state(state: JobDetailsState) -> String {
        render_to_string(move || {
            view! {
                <JobDetailsBody
                    state=Signal::derive(move || state.clone())
                    on_back=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn loading_placeholder() {
        assert!(render_state(JobDetailsState::Loading).contains("Loading job details..."));
    }

    #[test]
    fn missing_job_offers_back() {
        let state =
            JobDetailsState::from_fetch(Some(Err(ApiError::from_status(404, "No job data available."))));
        let html = render_state(state);
        assert!(html.contains("Job not found"));
        assert!(html.contains("No job data available."));
        assert!(html.contains("Back"));
    }

    #[test]
    fn ready_job_renders_details_without_modal() {
        let html = render_state(JobDetailsState::Ready(job("4", "Rust Engineer")));
        assert!(html.contains("Rust Engineer"));
        assert!(html.contains(">Rust<"));
        assert!(!html.contains("Job Application"));
    }
}
