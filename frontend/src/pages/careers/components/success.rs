use leptos::*;

#[component]
pub fn ApplicationSuccess(on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="p-6 text-center space-y-4 bg-surface-elevated rounded-xl shadow-md border border-border">
            <h2 class="text-2xl font-semibold text-status-success-text">
                "Application Submitted Successfully!"
            </h2>
            <p class="text-fg">"Thank you for applying. Our team will contact you soon."</p>
            <button
                type="button"
                class="px-6 py-2 rounded-lg bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                on:click=move |_| on_close.call(())
            >
                "Close"
            </button>
        </div>
    }
}
