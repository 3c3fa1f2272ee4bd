use super::{
    utils::{admin_sidebar, ADMIN_REPORT_PATH},
    view_model::{use_logout, use_report_generation},
};
use crate::{
    api::{PeopleSource, PersonKind},
    components::{layout::DashboardLayout, modal::Modal},
    pages::{
        people::{use_people_list, AddPersonForm, PeopleList},
        profile::ProfileCard,
    },
    state::session::Role,
    utils::navigation::redirect,
};
use leptos::*;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let hr_list = use_people_list(PeopleSource::AdminHrList);
    let employee_list = use_people_list(PeopleSource::AdminEmployeeList);
    let adding = create_rw_signal(false);

    // A new HR account can show up in both lists.
    let refresh_hr = hr_list.on_changed();
    let refresh_employees = employee_list.on_changed();
    let on_added = Callback::new(move |_| {
        refresh_hr.call(());
        refresh_employees.call(());
    });

    let entries = admin_sidebar(
        Callback::new(move |_| adding.set(true)),
        use_report_generation(Role::Admin),
        Callback::new(|_| redirect(ADMIN_REPORT_PATH)),
    );

    view! {
        <DashboardLayout title="Admin Dashboard" entries=entries on_logout=use_logout()>
            <ProfileCard role=Role::Admin/>
            <PeopleList source=PeopleSource::AdminHrList vm=hr_list/>
            <PeopleList source=PeopleSource::AdminEmployeeList vm=employee_list/>
            <Show when=move || adding.get()>
                <Modal title="Add HR".to_string() on_close=Callback::new(move |_| adding.set(false)) wide=true>
                    <AddPersonForm kind=PersonKind::Hr on_added=on_added/>
                </Modal>
            </Show>
        </DashboardLayout>
    }
}
