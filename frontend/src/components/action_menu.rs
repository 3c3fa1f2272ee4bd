use leptos::*;

/// Kebab menu that closes on any mouse press outside its bounds.
#[component]
pub fn ActionMenu(open: RwSignal<bool>, children: ChildrenFn) -> impl IntoView {
    let container = create_node_ref::<html::Div>();

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let handle = window_event_listener(ev::mousedown, move |ev| {
            if !open.get_untracked() {
                return;
            }
            let Some(root) = container.get_untracked() else {
                return;
            };
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            if !root.contains(target.as_ref()) {
                open.set(false);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="relative" node_ref=container>
            <button
                type="button"
                aria-label="Actions"
                aria-haspopup="menu"
                aria-expanded=move || open.get()
                class="px-2 py-1 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                "⋮"
            </button>
            <Show when=move || open.get()>
                <div
                    role="menu"
                    class="absolute right-0 z-20 mt-2 w-48 rounded-md bg-surface-elevated shadow-lg border border-border py-1"
                >
                    {children()}
                </div>
            </Show>
        </div>
    }
}

/// One entry of an [`ActionMenu`]. Selecting it also closes the menu.
#[component]
pub fn MenuItem(
    #[prop(into)] label: MaybeSignal<String>,
    menu: RwSignal<bool>,
    on_select: Callback<()>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let class = if destructive {
        "block w-full text-left px-4 py-2 text-sm text-status-error-text hover:bg-status-error-bg disabled:opacity-50"
    } else {
        "block w-full text-left px-4 py-2 text-sm text-fg hover:bg-action-ghost-bg-hover disabled:opacity-50"
    };
    view! {
        <button
            type="button"
            role="menuitem"
            class=class
            disabled=move || disabled.get()
            on:click=move |_| {
                menu.set(false);
                on_select.call(());
            }
        >
            {move || label.get()}
        </button>
    }
}
