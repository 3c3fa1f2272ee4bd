use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{guard::RequireRole, layout::APP_NAME},
    pages::{
        careers::{CareersPage, JobDetailsPage},
        dashboards::{AdminDashboard, EmployeeDashboard, HrDashboard},
        home::HomePage,
        login::{LoginPage, RoleLoginPage},
        reports::{DailyReportPage, ReportViewerPage},
    },
    state::session::{Role, SessionProvider, SessionStore},
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/login/:role",
    "/careers",
    "/careers/job/:id",
    "/admin",
    "/admin/view-report",
    "/hr",
    "/view-daily-report",
    "/employee",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/admin",
    "/admin/view-report",
    "/hr",
    "/view-daily-report",
    "/employee",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/login/:role", "/careers", "/careers/job/:id"];

pub fn mount_app() {
    mount_to_body(app_root);
}

/// One session store is shared by the session context and the API client.
pub fn app_root() -> impl IntoView {
    let store = SessionStore::browser();
    provide_context(ApiClient::new().with_session(store.clone()));
    provide_meta_context();
    view! {
        <Title text=APP_NAME/>
        <SessionProvider store=store>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/login/:role" view=RoleLoginPage/>
                    <Route path="/careers" view=CareersPage/>
                    <Route path="/careers/job/:id" view=JobDetailsPage/>
                    <Route path="/admin" view=ProtectedAdmin/>
                    <Route path="/admin/view-report" view=ProtectedReportViewer/>
                    <Route path="/hr" view=ProtectedHr/>
                    <Route path="/view-daily-report" view=ProtectedDailyReport/>
                    <Route path="/employee" view=ProtectedEmployee/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn ProtectedAdmin() -> impl IntoView {
    view! { <RequireRole role=Role::Admin><AdminDashboard/></RequireRole> }
}

#[component]
fn ProtectedReportViewer() -> impl IntoView {
    view! { <RequireRole role=Role::Admin><ReportViewerPage/></RequireRole> }
}

#[component]
fn ProtectedHr() -> impl IntoView {
    view! { <RequireRole role=Role::Hr><HrDashboard/></RequireRole> }
}

#[component]
fn ProtectedDailyReport() -> impl IntoView {
    view! { <RequireRole role=Role::Hr><DailyReportPage/></RequireRole> }
}

#[component]
fn ProtectedEmployee() -> impl IntoView {
    view! { <RequireRole role=Role::Employee><EmployeeDashboard/></RequireRole> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn dashboards_match_role_routes() {
        for role in Role::ALL {
            assert!(ROUTE_PATHS.contains(&role.dashboard_path()));
            assert!(PROTECTED_ROUTE_PATHS.contains(&role.dashboard_path()));
        }
    }

    #[test]
    fn every_route_is_public_or_protected() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        let split: HashSet<&str> = PROTECTED_ROUTE_PATHS
            .iter()
            .chain(PUBLIC_ROUTE_PATHS)
            .copied()
            .collect();
        assert_eq!(all, split);
        assert!(PUBLIC_ROUTE_PATHS
            .iter()
            .all(|path| !PROTECTED_ROUTE_PATHS.contains(path)));
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
