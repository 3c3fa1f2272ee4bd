use crate::{
    components::layout::Layout,
    pages::login::{components::form::LoginForm, view_model::use_login_view_model},
    state::session::Role,
};
use leptos::*;
use leptos_router::use_params_map;

/// `/login`: role picked on the form, employee by default.
#[component]
pub fn LoginPage() -> impl IntoView {
    let vm = use_login_view_model(Role::Employee);
    view! {
        <Layout>
            <div class="py-12">
                <LoginForm vm=vm/>
            </div>
        </Layout>
    }
}

/// `/login/:role`; an unknown role segment falls back to the picker.
#[component]
pub fn RoleLoginPage() -> impl IntoView {
    let params = use_params_map();
    let role = params.with_untracked(|p| p.get("role").and_then(|r| Role::parse(r)));
    let vm = use_login_view_model(role.unwrap_or(Role::Employee));
    view! {
        <Layout>
            <div class="py-12">
                <LoginForm vm=vm role_locked=role.is_some()/>
            </div>
        </Layout>
    }
}
