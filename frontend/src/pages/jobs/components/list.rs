use super::card::JobCard;
use crate::{
    api::JobPosting,
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::people::components::field::INPUT_CLASS,
    state::collection::{CollectionViewModel, ListPhase},
};
use leptos::*;

#[component]
pub fn JobList(vm: CollectionViewModel<JobPosting>) -> impl IntoView {
    let on_changed = vm.on_changed();
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex flex-col gap-3 md:flex-row md:items-center md:justify-between">
                <h3 class="text-lg font-semibold text-fg">"Job Posts"</h3>
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
                ListPhase::Empty => {
                    view! { <EmptyState title="No job posts found"/> }.into_view()
                }
                ListPhase::Populated => view! {
                    <div class="space-y-3">
                        <For
                            each=move || vm.filtered.get()
                            key=JobPosting::key
                            children=move |job: JobPosting| view! { <JobCard job=job on_changed=on_changed/> }
                        />
                    </div>
                }
                .into_view(),
            }}
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiError;
    use crate::state::collection::{Fetcher, ListState};
    use crate::test_support::{helpers::job, ssr::render_to_string};
    use futures::FutureExt;
    use std::rc::Rc;

    #[test]
    fn ready_jobs_render_cards() {
        let html = render_to_string(move || {
            let fetcher: Fetcher<JobPosting> =
                Rc::new(|| async { Ok::<_, ApiError>(Vec::new()) }.boxed_local());
            let vm = CollectionViewModel::new(fetcher);
            vm.state.set(ListState::Ready(vec![job("1", "Rust Engineer"), job("2", "Recruiter")]));
            view! { <JobList vm=vm/> }
        });
        assert!(html.contains("Rust Engineer"));
        assert!(html.contains("Recruiter"));
    }
}
