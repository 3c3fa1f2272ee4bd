use crate::{
    api::JobPosting,
    pages::jobs::utils::{date_or_na, job_domain, job_experience, job_title, job_type, salary_range},
    utils::format::normalize_list,
};
use leptos::*;

fn bullet_list(items: Vec<String>, empty: &'static str) -> View {
    if items.is_empty() {
        return view! { <p class="text-sm text-fg-muted mt-2">{empty}</p> }.into_view();
    }
    view! {
        <ul class="list-disc list-inside mt-2 text-sm text-fg space-y-1">
            {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
        </ul>
    }
    .into_view()
}

/// Full posting body shared by the HR modal and the public details page.
#[component]
pub fn JobDetailsView(
    job: JobPosting,
    on_back: Callback<()>,
    #[prop(optional)] on_apply: Option<Callback<()>>,
) -> impl IntoView {
    let requirements = normalize_list(job.requirements.as_ref());
    let responsibilities = normalize_list(job.responsibilities.as_ref());
    let description = job
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "No description provided.".to_string());
    let active = job
        .is_active
        .map(|flag| flag.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    view! {
        <div class="space-y-4">
            <div class="flex items-start justify-between gap-4">
                <div>
                    <h2 class="text-2xl font-bold text-fg">{job_title(&job)}</h2>
                    <p class="text-sm text-fg-muted mt-1">
                        {format!("{} · {} · {}", job_domain(&job), job_type(&job), job_experience(&job))}
                    </p>
                </div>
                <div class="text-right text-sm text-fg-muted">
                    <p>{format!("Posted: {}", date_or_na(&job.posted_date))}</p>
                    <p>{format!("Closes: {}", date_or_na(&job.closing_date))}</p>
                </div>
            </div>
            <div>
                <h3 class="font-semibold text-fg">"Description"</h3>
                <p class="mt-2 text-sm text-fg">{description}</p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div>
                    <h4 class="font-semibold text-fg">"Requirements"</h4>
                    {bullet_list(requirements, "No specific requirements listed.")}
                </div>
                <div>
                    <h4 class="font-semibold text-fg">"Responsibilities"</h4>
                    {bullet_list(responsibilities, "No responsibilities provided.")}
                </div>
            </div>
            <div class="flex items-center justify-between">
                <p class="text-sm text-fg-muted">
                    {format!("Salary: {} · Active: {}", salary_range(&job), active)}
                </p>
                <div class="flex gap-3">
                    {on_apply.map(|apply| view! {
                        <button
                            type="button"
                            class="px-4 py-2 rounded-md bg-status-success-text text-white hover:opacity-90"
                            on:click=move |_| apply.call(())
                        >
                            "Apply"
                        </button>
                    })}
                    <button
                        type="button"
                        class="px-3 py-2 rounded-md border border-border text-fg hover:bg-action-ghost-bg-hover"
                        on:click=move |_| on_back.call(())
                    >
                        "Back"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::job, ssr::render_to_string};

    #[test]
    fn details_split_free_text_lists() {
        let html = render_to_string(move || {
            view! { <JobDetailsView job=job("4", "Rust Engineer") on_back=Callback::new(|_| {})/> }
        });
        assert!(html.contains("Rust Engineer"));
        assert!(html.contains(">Rust<"));
        assert!(html.contains(">SQL<"));
        assert!(html.contains("No responsibilities provided."));
        assert!(html.contains("Closes: N&#x2F;A"));
        assert!(html.contains("Active: true"));
        assert!(!html.contains("Apply"));
    }

    #[test]
    fn apply_button_only_when_offered() {
        let html = render_to_string(move || {
            view! {
                <JobDetailsView
                    job=job("4", "Rust Engineer")
                    on_back=Callback::new(|_| {})
                    on_apply=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Apply"));
    }
}
