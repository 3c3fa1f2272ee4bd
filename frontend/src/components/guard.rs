use crate::{
    state::session::{use_session, Role},
    utils::navigation::redirect,
};
use leptos::*;

/// Renders children only for a session of `role`; anyone else is sent to that role's login.
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let allowed = create_memo(move |_| should_render_children(session.role(), role));
    create_effect(move |_| {
        if !allowed.get() {
            redirect(&role.login_path());
        }
    });
    view! {
        <Show when=move || allowed.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

fn should_render_children(current: Option<Role>, required: Role) -> bool {
    current == Some(required)
}

#[cfg(test)]
mod tests {
    use super::should_render_children;
    use crate::state::session::Role;

    #[test]
    fn guard_requires_matching_role() {
        assert!(!should_render_children(None, Role::Admin));
        assert!(!should_render_children(Some(Role::Hr), Role::Admin));
        assert!(should_render_children(Some(Role::Admin), Role::Admin));
        assert!(should_render_children(Some(Role::Employee), Role::Employee));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RequireRole;
    use crate::state::session::Role;
    use crate::test_support::{helpers::session, ssr::render_with_session};
    use leptos::*;

    #[test]
    fn renders_children_for_matching_role() {
        let html = render_with_session(Some(session(Role::Hr)), move || {
            view! {
                <RequireRole role=Role::Hr>
                    {|| view! { <div>"hr-only"</div> }}
                </RequireRole>
            }
        });
        assert!(html.contains("hr-only"));
    }

    #[test]
    fn hides_children_for_other_roles_and_anonymous() {
        let html = render_with_session(Some(session(Role::Employee)), move || {
            view! {
                <RequireRole role=Role::Admin>
                    {|| view! { <div>"admin-only"</div> }}
                </RequireRole>
            }
        });
        assert!(!html.contains("admin-only"));

        let html = render_with_session(None, move || {
            view! {
                <RequireRole role=Role::Admin>
                    {|| view! { <div>"admin-only"</div> }}
                </RequireRole>
            }
        });
        assert!(!html.contains("admin-only"));
    }
}
