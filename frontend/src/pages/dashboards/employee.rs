use super::view_model::use_logout;
use crate::{
    components::layout::{DashboardLayout, ErrorMessage},
    pages::{payslips::PayslipList, profile::ProfileCard},
    state::session::{use_session, Role},
};
use leptos::*;

#[component]
pub fn EmployeeDashboard() -> impl IntoView {
    let session = use_session();
    let own_id = session
        .cached_profile(Role::Employee)
        .and_then(|profile| profile.id)
        .filter(|id| !id.trim().is_empty());

    view! {
        <DashboardLayout title="Employee Dashboard" entries=Vec::new() on_logout=use_logout()>
            <ProfileCard role=Role::Employee/>
            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <h3 class="text-lg font-semibold text-fg">"My Payslips"</h3>
                {match own_id {
                    Some(id) => view! { <PayslipList employee_id=id can_delete=false/> }.into_view(),
                    None => view! { <ErrorMessage message="Profile not available."/> }.into_view(),
                }}
            </section>
        </DashboardLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::session, ssr::render_with_session};

    #[test]
    fn employee_sees_profile_and_payslips() {
        let html = render_with_session(Some(session(Role::Employee)), || view! { <EmployeeDashboard/> });
        assert!(html.contains("Employee Dashboard"));
        assert!(html.contains("My Payslips"));
        assert!(!html.contains("Profile not available."));
    }

    #[test]
    fn missing_profile_id_is_reported() {
        let html = render_with_session(None, || view! { <EmployeeDashboard/> });
        assert!(html.contains("Profile not available."));
    }
}
