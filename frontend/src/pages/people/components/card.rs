use super::{
    attendance_modal::AttendanceModal, detail_modal::PersonDetailModal,
    generate_payslip_modal::GeneratePayslipModal,
};
use crate::{
    api::{PeopleSource, PersonRecord},
    components::{
        action_menu::{ActionMenu, MenuItem},
        confirm_dialog::ConfirmDialog,
    },
    pages::{
        payslips::PayslipListModal,
        people::{
            utils::{delete_failure, delete_prompt, person_avatar},
            view_model::use_people_repository,
        },
    },
    state::delete_flow::{confirm_delete, DeleteFlow},
    utils::format::display_or_dash,
};
use leptos::*;

/// Which card modal is open. Only one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardModal {
    Details,
    Attendance,
    Payslips,
    GeneratePayslip,
}

#[component]
pub fn PersonCard(
    person: PersonRecord,
    source: PeopleSource,
    on_changed: Callback<()>,
    /// Latest copy of this person from the owning list, applied after each re-fetch.
    #[prop(optional)]
    fresh: Option<Signal<Option<PersonRecord>>>,
) -> impl IntoView {
    let kind = source.kind();
    let repository = use_people_repository();
    let record = create_rw_signal(person);
    if let Some(fresh) = fresh {
        create_effect(move |_| {
            if let Some(latest) = fresh.get() {
                if record.with_untracked(|current| current != &latest) {
                    record.set(latest);
                }
            }
        });
    }
    let menu_open = create_rw_signal(false);
    let modal = create_rw_signal(None::<CardModal>);
    let flow = create_rw_signal(DeleteFlow::Idle);
    let close_modal = Callback::new(move |_| modal.set(None));

    let on_confirm_delete = Callback::new(move |_| {
        let repo = repository.clone();
        let id = record.with_untracked(PersonRecord::key);
        confirm_delete(
            flow,
            move || async move { repo.remove_person(kind, id).await },
            delete_failure(kind),
            on_changed,
        );
    });

    let full_name = move || record.with(|p| display_or_dash(Some(&p.full_name())));
    let avatar = move || record.with(person_avatar);
    let email = move || record.with(|p| display_or_dash(p.email.as_deref()));
    let card_number = move || record.with(|p| display_or_dash(p.card_number.as_deref()));
    let job_role = move || {
        record.with(|p| display_or_dash(p.job_role.as_deref().or(p.domain.as_deref())))
    };
    let role_badge = move || record.with(|p| p.login_role.clone());

    let open = move |which: CardModal| Callback::new(move |_| modal.set(Some(which)));

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 flex items-start gap-4 border border-border">
            <img src=avatar alt=full_name class="h-12 w-12 rounded-full object-cover"/>
            <div class="flex-1 min-w-0">
                <div class="flex items-center gap-2">
                    <h4 class="text-base font-semibold text-fg truncate">{full_name}</h4>
                    {move || role_badge().map(|role| view! {
                        <span class="text-xs px-2 py-0.5 rounded-full bg-status-info-bg text-status-info-text">{role}</span>
                    })}
                </div>
                <p class="text-sm text-fg-muted truncate">{email}</p>
                <p class="text-xs text-fg-muted">{move || format!("Card: {}", card_number())}</p>
                <p class="text-xs text-fg-muted">{job_role}</p>
            </div>
            <ActionMenu open=menu_open>
                <MenuItem label="View Details" menu=menu_open on_select=open(CardModal::Details)/>
                <MenuItem label="Add Attendance" menu=menu_open on_select=open(CardModal::Attendance)/>
                <MenuItem label="Payslips" menu=menu_open on_select=open(CardModal::Payslips)/>
                <MenuItem
                    label="Generate Payslip"
                    menu=menu_open
                    on_select=open(CardModal::GeneratePayslip)
                />
                <MenuItem
                    label=Signal::derive(move || {
                        if flow.get().is_deleting() { "Deleting...".to_string() } else { "Delete".to_string() }
                    })
                    menu=menu_open
                    disabled=Signal::derive(move || flow.get().is_deleting())
                    destructive=true
                    on_select=Callback::new(move |_| flow.update(|f| *f = f.request()))
                />
            </ActionMenu>
        </div>
        {move || {
            modal.get().map(|which| {
                // Untracked so a saved edit does not remount the open modal.
                let person = record.get_untracked();
                match which {
                    CardModal::Details => view! {
                        <PersonDetailModal
                            person=person
                            kind=kind
                            on_close=close_modal
                            on_updated=Callback::new(move |updated: PersonRecord| {
                                record.set(updated);
                                on_changed.call(());
                            })
                        />
                    }
                    .into_view(),
                    CardModal::Attendance => view! {
                        <AttendanceModal person=person kind=kind on_close=close_modal on_recorded=on_changed/>
                    }
                    .into_view(),
                    CardModal::Payslips => view! {
                        <PayslipListModal
                            employee=person
                            can_delete=source == PeopleSource::HrEmployeeList
                            on_close=close_modal
                        />
                    }
                    .into_view(),
                    CardModal::GeneratePayslip => view! {
                        <GeneratePayslipModal person=person on_close=close_modal on_generated=on_changed/>
                    }
                    .into_view(),
                }
            })
        }}
        <ConfirmDialog
            is_open=Signal::derive(move || flow.get().is_confirming())
            title=format!("Delete {}", kind.label())
            message=delete_prompt(kind).to_string()
            confirm_label="Delete".to_string()
            destructive=true
            on_confirm=on_confirm_delete
            on_cancel=Callback::new(move |_| flow.update(|f| *f = f.cancel()))
        />
    }
}
