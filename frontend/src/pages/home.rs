use crate::{components::layout::{Layout, APP_NAME}, state::session::Role};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Layout>
            <div class="py-12 text-center">
                <h1 class="text-4xl font-extrabold text-fg sm:text-5xl">{APP_NAME}</h1>
                <p class="mt-3 max-w-2xl mx-auto text-lg text-fg-muted">
                    "People, payroll and hiring in one place."
                </p>
                <div class="mt-8 flex flex-col sm:flex-row justify-center gap-3">
                    {Role::ALL
                        .into_iter()
                        .map(|role| view! {
                            <a
                                href=role.login_path()
                                class="px-8 py-3 rounded-md text-base font-medium bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                            >
                                {format!("{} Login", role.label())}
                            </a>
                        })
                        .collect_view()}
                    <a
                        href="/careers"
                        class="px-8 py-3 rounded-md text-base font-medium border border-border text-fg hover:bg-action-ghost-bg-hover"
                    >
                        "View Open Positions"
                    </a>
                </div>
            </div>
        </Layout>
    }
}
