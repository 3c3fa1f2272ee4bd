use leptos::ev::KeyboardEvent;
use leptos::*;

/// Overlay dialog. The owner decides whether it is mounted.
#[component]
pub fn Modal(
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    #[prop(optional)] wide: bool,
    children: Children,
) -> impl IntoView {
    let panel_class = if wide {
        "relative z-[61] w-full max-w-3xl max-h-[90vh] overflow-y-auto rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
    } else {
        "relative z-[61] w-full max-w-lg max-h-[90vh] overflow-y-auto rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
    };
    view! {
        <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
            <button
                type="button"
                aria-label="Close"
                class="absolute inset-0 bg-overlay-backdrop"
                on:click=move |_| on_close.call(())
            ></button>
            <div
                class=panel_class
                role="dialog"
                aria-modal="true"
                tabindex="-1"
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Escape" {
                        on_close.call(());
                    }
                }
            >
                <div class="flex items-start justify-between gap-3">
                    <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                    <button
                        type="button"
                        aria-label="Close"
                        class="text-fg-muted hover:text-fg"
                        on:click=move |_| on_close.call(())
                    >
                        "✕"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn modal_renders_title_and_body() {
        let html = render_to_string(move || {
            view! {
                <Modal title="Employee Details" on_close=Callback::new(|_| {})>
                    <p>"body"</p>
                </Modal>
            }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("Employee Details"));
        assert!(html.contains("body"));
    }
}
