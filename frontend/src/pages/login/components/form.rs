use crate::{
    components::layout::ErrorMessage,
    pages::{login::view_model::LoginViewModel, people::components::field::INPUT_CLASS},
    state::session::Role,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    vm: LoginViewModel,
    /// Hides the role picker when the route already names the role.
    #[prop(optional)]
    role_locked: bool,
) -> impl IntoView {
    let pending = vm.login_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="max-w-md w-full mx-auto bg-surface-elevated shadow rounded-lg p-8 space-y-6">
            <div class="text-center">
                <h2 class="text-3xl font-extrabold text-fg">
                    {move || format!("{} Login", vm.role.get().label())}
                </h2>
                <p class="mt-2 text-sm text-fg-muted">"Sign in to continue to your dashboard"</p>
            </div>
            <form class="space-y-4" novalidate on:submit=on_submit>
                {(!role_locked).then(|| view! {
                    <label class="block text-sm font-medium text-fg">
                        "Login as"
                        <select
                            class=INPUT_CLASS
                            prop:value=move || vm.role.get().as_str()
                            on:change=move |ev| {
                                if let Some(role) = Role::parse(&event_target_value(&ev)) {
                                    vm.role.set(role);
                                }
                            }
                        >
                            {Role::ALL
                                .into_iter()
                                .map(|role| view! {
                                    <option value=role.as_str() selected=move || vm.role.get() == role>
                                        {role.label()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </label>
                })}
                <label class="block text-sm font-medium text-fg">
                    "Email"
                    <input
                        type="email"
                        autocomplete="username"
                        class=INPUT_CLASS
                        placeholder="you@example.com"
                        prop:value=move || vm.email.get()
                        on:input=move |ev| vm.email.set(event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm font-medium text-fg">
                    "Password"
                    <div class="relative">
                        <input
                            type=move || if vm.show_password.get() { "text" } else { "password" }
                            autocomplete="current-password"
                            class=INPUT_CLASS
                            prop:value=move || vm.password.get()
                            on:input=move |ev| vm.password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="absolute inset-y-0 right-2 text-xs text-fg-muted hover:text-fg"
                            on:click=move |_| vm.show_password.update(|shown| *shown = !*shown)
                        >
                            {move || if vm.show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                </label>
                {move || vm.error.get().map(|message| view! { <ErrorMessage message=message/> })}
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                >
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::login::view_model::use_login_view_model;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn role_picker_lists_every_role() {
        let html = render_to_string(|| {
            let vm = use_login_view_model(Role::Employee);
            view! { <LoginForm vm=vm/> }
        });
        assert!(html.contains("Employee Login"));
        assert!(html.contains("Login as"));
        for label in ["Admin", "HR", "Employee"] {
            assert!(html.contains(label), "missing {label}");
        }
        assert!(html.contains("Sign in"));
    }

    #[test]
    fn locked_role_hides_picker() {
        let html = render_to_string(|| {
            let vm = use_login_view_model(Role::Admin);
            view! { <LoginForm vm=vm role_locked=true/> }
        });
        assert!(html.contains("Admin Login"));
        assert!(!html.contains("Login as"));
    }
}
