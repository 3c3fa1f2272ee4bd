use super::detail::JobDetailsView;
use crate::{
    api::JobPosting,
    components::{confirm_dialog::ConfirmDialog, modal::Modal},
    pages::jobs::{
        utils::{delete_prompt, job_domain, job_experience, job_title, DELETE_FAILED},
        view_model::use_jobs_repository,
    },
    state::delete_flow::{confirm_delete, DeleteFlow},
};
use leptos::*;

#[component]
pub fn JobCard(job: JobPosting, on_changed: Callback<()>) -> impl IntoView {
    let repository = use_jobs_repository();
    let job = store_value(job);
    let show_details = create_rw_signal(false);
    let flow = create_rw_signal(DeleteFlow::Idle);

    let on_confirm_delete = Callback::new(move |_| {
        let repo = repository.clone();
        let id = job.with_value(JobPosting::key);
        confirm_delete(
            flow,
            move || async move { repo.remove_job(id).await },
            DELETE_FAILED,
            on_changed,
        );
    });
    let close = Callback::new(move |_| show_details.set(false));

    view! {
        <div class="p-5 bg-surface-elevated rounded-xl shadow-sm border border-border flex items-center justify-between gap-4">
            <div>
                <h4 class="text-lg font-semibold text-fg">{job.with_value(job_title)}</h4>
                <p class="text-sm text-fg-muted mt-1">
                    {job.with_value(|j| format!("{} · {}", job_experience(j), job_domain(j)))}
                </p>
            </div>
            <div class="flex items-center gap-2">
                <button
                    type="button"
                    class="px-4 py-1.5 rounded-lg bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                    on:click=move |_| show_details.set(true)
                >
                    "View Job"
                </button>
                <button
                    type="button"
                    class="px-4 py-1.5 rounded-lg bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
                    disabled=move || flow.get().is_deleting()
                    on:click=move |_| flow.update(|f| *f = f.request())
                >
                    {move || if flow.get().is_deleting() { "Deleting..." } else { "Delete" }}
                </button>
            </div>
        </div>
        <Show when=move || show_details.get()>
            <Modal title=job.with_value(job_title) on_close=close wide=true>
                <JobDetailsView job=job.get_value() on_back=close/>
            </Modal>
        </Show>
        <ConfirmDialog
            is_open=Signal::derive(move || flow.get().is_confirming())
            title="Delete Job".to_string()
            message=job.with_value(delete_prompt)
            confirm_label="Delete".to_string()
            destructive=true
            on_confirm=on_confirm_delete
            on_cancel=Callback::new(move |_| flow.update(|f| *f = f.cancel()))
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::job, ssr::render_to_string};

    #[test]
    fn card_shows_summary_only() {
        let html = render_to_string(move || {
            view! { <JobCard job=job("3", "Data Analyst") on_changed=Callback::new(|_| {})/> }
        });
        assert!(html.contains("Data Analyst"));
        assert!(html.contains("2-4 years · Engineering"));
        assert!(html.contains("View Job"));
        assert!(!html.contains("Description"));
    }
}
