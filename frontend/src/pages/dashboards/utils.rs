use crate::components::layout::{SidebarEntry, SidebarLink};
use leptos::Callback;

pub const ADMIN_REPORT_PATH: &str = "/admin/view-report";
pub const HR_REPORT_PATH: &str = "/view-daily-report";

/// Which add modal a dashboard has open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddModal {
    Person,
    Job,
}

pub fn report_group(on_generate: Callback<()>, on_view: Callback<()>) -> SidebarEntry {
    SidebarEntry::Group {
        label: "Daily Report",
        links: vec![
            SidebarLink {
                label: "Generate",
                on_select: on_generate,
            },
            SidebarLink {
                label: "View Reports",
                on_select: on_view,
            },
        ],
    }
}

pub fn admin_sidebar(
    on_add_hr: Callback<()>,
    on_generate: Callback<()>,
    on_view: Callback<()>,
) -> Vec<SidebarEntry> {
    vec![
        SidebarEntry::link("Add HR", on_add_hr),
        report_group(on_generate, on_view),
    ]
}

pub fn hr_sidebar(
    on_add_employee: Callback<()>,
    on_add_job: Callback<()>,
    on_generate: Callback<()>,
    on_view: Callback<()>,
) -> Vec<SidebarEntry> {
    vec![
        SidebarEntry::link("Add Employee", on_add_employee),
        SidebarEntry::link("Add Job", on_add_job),
        report_group(on_generate, on_view),
    ]
}
