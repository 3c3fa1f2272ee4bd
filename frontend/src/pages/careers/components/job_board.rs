use crate::{
    api::JobPosting,
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::{
        careers::repository::CareersRepository,
        jobs::utils::{job_domain, job_experience, job_title, job_type},
        people::components::field::INPUT_CLASS,
    },
    state::collection::{CollectionViewModel, Fetcher, ListPhase},
};
use futures::FutureExt;
use leptos::*;
use std::rc::Rc;

pub fn use_open_jobs() -> CollectionViewModel<JobPosting> {
    let repository = CareersRepository::from_context();
    let fetcher: Fetcher<JobPosting> = Rc::new(move || {
        let repo = repository.clone();
        async move { repo.fetch_open_jobs().await }.boxed_local()
    });
    CollectionViewModel::new(fetcher)
}

pub fn job_link(job: &JobPosting) -> String {
    format!("/careers/job/{}", job.key())
}

#[component]
fn OpeningCard(job: JobPosting) -> impl IntoView {
    view! {
        <a
            href=job_link(&job)
            class="block bg-surface-elevated border border-border rounded-lg p-5 shadow-sm hover:shadow-md transition"
        >
            <h3 class="text-lg font-semibold text-fg">{job_title(&job)}</h3>
            <p class="text-sm text-fg-muted mt-1">{format!("{} · {}", job_domain(&job), job_type(&job))}</p>
            <p class="text-sm text-fg-muted">{format!("Experience: {}", job_experience(&job))}</p>
            <span class="inline-block mt-3 text-sm font-medium text-action-primary-bg">"View details"</span>
        </a>
    }
}

/// Public list of open positions.
#[component]
pub fn JobBoard(vm: CollectionViewModel<JobPosting>) -> impl IntoView {
    view! {
        <section class="space-y-6">
            <div class="flex flex-col gap-3 md:flex-row md:items-end md:justify-between">
                <div>
                    <h2 class="text-3xl font-bold text-fg">"Open Positions"</h2>
                    <p class="text-fg-muted">"Find a role that fits you and apply in minutes."</p>
                </div>
                <input
                    type="search"
                    class=INPUT_CLASS
                    placeholder="Search by title or domain"
                    prop:value=move || vm.search.get()
                    on:input=move |ev| vm.search.set(event_target_value(&ev))
                />
            </div>
            {move || match vm.phase.get() {
                ListPhase::Loading => view! { <LoadingSpinner/> }.into_view(),
                ListPhase::Failed(message) => view! { <ErrorMessage message=message/> }.into_view(),
                ListPhase::Empty => view! {
                    <EmptyState
                        title="No open positions right now"
                        description="Check back soon for new openings."
                    />
                }
                .into_view(),
                ListPhase::Populated => view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <For
                            each=move || vm.filtered.get()
                            key=JobPosting::key
                            children=move |job: JobPosting| view! { <OpeningCard job=job/> }
                        />
                    </div>
                }
                .into_view(),
            }}
        </section>
    }
}
