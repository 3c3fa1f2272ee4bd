use leptos::*;

pub const APP_NAME: &str = "Nebulytix HR Portal";

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-fg">{APP_NAME}</a>
                    <nav class="flex space-x-4">
                        <a href="/careers" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                            "Careers"
                        </a>
                        <a href="/login" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                            "Login"
                        </a>
                    </nav>
                </div>
            </div>
        </header>
    }
}

/// Shell for public pages.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[derive(Clone)]
pub struct SidebarLink {
    pub label: &'static str,
    pub on_select: Callback<()>,
}

#[derive(Clone)]
pub enum SidebarEntry {
    Link(SidebarLink),
    Group {
        label: &'static str,
        links: Vec<SidebarLink>,
    },
}

impl SidebarEntry {
    pub fn link(label: &'static str, on_select: Callback<()>) -> Self {
        SidebarEntry::Link(SidebarLink { label, on_select })
    }
}

const SIDEBAR_ITEM_CLASS: &str =
    "w-full text-left px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover";

#[component]
fn SidebarGroup(label: &'static str, links: Vec<SidebarLink>, collapsed: RwSignal<bool>) -> impl IntoView {
    let expanded = create_rw_signal(false);
    let links = store_value(links);
    view! {
        <div>
            <button
                type="button"
                class=SIDEBAR_ITEM_CLASS
                aria-expanded=move || expanded.get()
                on:click=move |_| expanded.update(|open| *open = !*open)
            >
                <Show when=move || !collapsed.get() fallback=move || label.chars().next().unwrap_or(' ').to_string()>
                    {label}
                    <span class="float-right">{move || if expanded.get() { "▾" } else { "▸" }}</span>
                </Show>
            </button>
            <Show when=move || expanded.get() && !collapsed.get()>
                <div class="ml-4 space-y-1">
                    {links
                        .get_value()
                        .into_iter()
                        .map(|link| {
                            let on_select = link.on_select;
                            view! {
                                <button type="button" class=SIDEBAR_ITEM_CLASS on:click=move |_| on_select.call(())>
                                    {link.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

/// Sidebar + main content frame used by the three dashboards.
#[component]
pub fn DashboardLayout(
    #[prop(into)] title: String,
    entries: Vec<SidebarEntry>,
    on_logout: Callback<()>,
    children: Children,
) -> impl IntoView {
    let collapsed = create_rw_signal(false);
    let rendered_entries = entries
        .into_iter()
        .map(|entry| match entry {
            SidebarEntry::Link(SidebarLink { label, on_select }) => {
                view! {
                    <button type="button" class=SIDEBAR_ITEM_CLASS on:click=move |_| on_select.call(())>
                        <Show when=move || !collapsed.get() fallback=move || label.chars().next().unwrap_or(' ').to_string()>
                            {label}
                        </Show>
                    </button>
                }
                .into_view()
            }
            SidebarEntry::Group { label, links } => {
                view! { <SidebarGroup label=label links=links collapsed=collapsed/> }.into_view()
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen bg-surface flex">
            <aside
                class="bg-surface-elevated border-r border-border p-4 flex flex-col gap-2 transition-all"
                class=("w-64", move || !collapsed.get())
                class=("w-16", move || collapsed.get())
            >
                <div class="flex items-center justify-between mb-4">
                    <Show when=move || !collapsed.get()>
                        <span class="text-lg font-semibold text-fg">{APP_NAME}</span>
                    </Show>
                    <button
                        type="button"
                        aria-label="Toggle sidebar"
                        class="text-fg-muted hover:text-fg"
                        on:click=move |_| collapsed.update(|c| *c = !*c)
                    >
                        "☰"
                    </button>
                </div>
                <nav class="flex-1 space-y-1">{rendered_entries}</nav>
                <button
                    type="button"
                    class="w-full text-left px-3 py-2 rounded-md text-sm font-medium text-status-error-text hover:bg-status-error-bg"
                    on:click=move |_| on_logout.call(())
                >
                    {move || if collapsed.get() { "⎋" } else { "Logout" }}
                </button>
            </aside>
            <main class="flex-1 p-6 space-y-6 overflow-x-hidden">
                <h1 class="text-2xl font-semibold text-fg">{title}</h1>
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

/// Inline success / error banner with a dismiss button.
#[component]
pub fn MessageBanner(
    #[prop(into)] success: Signal<Option<String>>,
    #[prop(into)] error: Signal<Option<String>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || success.get().is_some() || error.get().is_some()>
            <div class="relative">
                <button
                    type="button"
                    aria-label="Dismiss"
                    class="absolute right-2 top-2 text-xs text-fg-muted hover:text-fg"
                    on:click=move |_| on_dismiss.call(())
                >
                    "✕"
                </button>
                {move || success.get().map(|message| view! { <SuccessMessage message=message/> })}
                {move || error.get().map(|message| view! { <ErrorMessage message=message/> })}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn layout_renders_header_and_children() {
        let html = render_to_string(move || view! { <Layout><div>"child"</div></Layout> });
        assert!(html.contains(APP_NAME));
        assert!(html.contains("Careers"));
        assert!(html.contains("child"));
    }

    #[test]
    fn dashboard_layout_lists_entries_and_logout() {
        let html = render_to_string(move || {
            let noop = Callback::new(|_| {});
            let entries = vec![
                SidebarEntry::link("Add HR", noop),
                SidebarEntry::Group {
                    label: "Daily Report",
                    links: vec![SidebarLink {
                        label: "Generate",
                        on_select: noop,
                    }],
                },
            ];
            view! {
                <DashboardLayout title="Admin Dashboard" entries=entries on_logout=noop>
                    <p>"body"</p>
                </DashboardLayout>
            }
        });
        assert!(html.contains("Admin Dashboard"));
        assert!(html.contains("Add HR"));
        assert!(html.contains("Daily Report"));
        assert!(!html.contains("Generate"));
        assert!(html.contains("Logout"));
        assert!(html.contains("body"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error" />
                    <SuccessMessage message="ok" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
    }

    #[test]
    fn message_banner_hidden_without_messages() {
        let html = render_to_string(move || {
            view! {
                <MessageBanner
                    success=Signal::derive(|| None::<String>)
                    error=Signal::derive(|| None::<String>)
                    on_dismiss=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("Dismiss"));

        let html = render_to_string(move || {
            view! {
                <MessageBanner
                    success=Signal::derive(|| None::<String>)
                    error=Signal::derive(|| Some("Failed to add HR. Please check details.".to_string()))
                    on_dismiss=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Failed to add HR. Please check details."));
    }
}
