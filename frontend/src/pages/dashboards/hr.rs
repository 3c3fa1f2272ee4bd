use super::{
    utils::{hr_sidebar, AddModal, HR_REPORT_PATH},
    view_model::{use_logout, use_report_generation},
};
use crate::{
    api::{PeopleSource, PersonKind},
    components::{layout::DashboardLayout, modal::Modal},
    pages::{
        jobs::{use_job_list, AddJobForm, JobList},
        people::{use_people_list, AddPersonForm, PeopleList},
        profile::ProfileCard,
    },
    state::session::Role,
    utils::navigation::redirect,
};
use leptos::*;

#[component]
pub fn HrDashboard() -> impl IntoView {
    let employee_list = use_people_list(PeopleSource::HrEmployeeList);
    let job_list = use_job_list();
    let modal = create_rw_signal(None::<AddModal>);
    let close = Callback::new(move |_| modal.set(None));
    let employees_changed = employee_list.on_changed();
    let jobs_changed = job_list.on_changed();

    let entries = hr_sidebar(
        Callback::new(move |_| modal.set(Some(AddModal::Person))),
        Callback::new(move |_| modal.set(Some(AddModal::Job))),
        use_report_generation(Role::Hr),
        Callback::new(|_| redirect(HR_REPORT_PATH)),
    );

    view! {
        <DashboardLayout title="HR Dashboard" entries=entries on_logout=use_logout()>
            <ProfileCard role=Role::Hr/>
            <PeopleList source=PeopleSource::HrEmployeeList vm=employee_list/>
            <JobList vm=job_list/>
            {move || match modal.get() {
                Some(AddModal::Person) => view! {
                    <Modal title="Add Employee".to_string() on_close=close wide=true>
                        <AddPersonForm kind=PersonKind::Employee on_added=employees_changed/>
                    </Modal>
                }
                .into_view(),
                Some(AddModal::Job) => view! {
                    <Modal title="Add Job".to_string() on_close=close wide=true>
                        <AddJobForm on_added=jobs_changed/>
                    </Modal>
                }
                .into_view(),
                None => ().into_view(),
            }}
        </DashboardLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::session, ssr::render_with_session};

    #[test]
    fn hr_dashboard_lists_employees_and_jobs() {
        let html = render_with_session(Some(session(Role::Hr)), || view! { <HrDashboard/> });
        assert!(html.contains("HR Dashboard"));
        assert!(html.contains("Employee List"));
        assert!(html.contains("Job Posts"));
        assert!(html.contains("Add Job"));
        assert!(!html.contains("HR List"));
    }
}
