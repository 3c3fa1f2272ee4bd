use super::edit_form::{EditPersonForm, EditTarget};
use crate::{
    api::{PersonKind, PersonRecord},
    components::modal::Modal,
    utils::format::{display_or_dash, mask_sensitive},
};
use leptos::*;

pub const ACCOUNT_VISIBLE: usize = 4;
pub const PAN_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
    General,
    Bank,
}

fn detail_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex justify-between gap-4 py-1 border-b border-border">
            <dt class="text-sm text-fg-muted">{label}</dt>
            <dd class="text-sm text-fg text-right">{value}</dd>
        </div>
    }
}

fn general_rows(person: &PersonRecord) -> Vec<(&'static str, String)> {
    let text = |v: &Option<String>| display_or_dash(v.as_deref());
    vec![
        ("Name", display_or_dash(Some(&person.full_name()))),
        ("Email", text(&person.email)),
        ("Mobile", text(&person.mobile)),
        ("Card Number", text(&person.card_number)),
        ("Job Role", text(&person.job_role)),
        ("Domain", text(&person.domain)),
        ("Gender", text(&person.gender)),
        ("Joining Date", text(&person.joining_date)),
        (
            "Salary",
            person
                .salary
                .map(|s| format!("{:.2}", s))
                .unwrap_or_else(|| display_or_dash(None)),
        ),
        (
            "Days Present",
            person.days_present.unwrap_or_default().to_string(),
        ),
        ("Paid Leaves", person.paid_leaves.unwrap_or_default().to_string()),
    ]
}

/// Banking and statutory rows. Account and PAN numbers stay masked unless `reveal`.
pub fn bank_rows(person: &PersonRecord, reveal: bool) -> Vec<(&'static str, String)> {
    let text = |v: &Option<String>| display_or_dash(v.as_deref());
    vec![
        ("Bank Name", text(&person.bank_name)),
        (
            "Account Number",
            mask_sensitive(
                person.bank_account_number.as_deref().unwrap_or_default(),
                ACCOUNT_VISIBLE,
                reveal,
            ),
        ),
        ("IFSC Code", text(&person.ifsc_code)),
        (
            "PAN Number",
            mask_sensitive(person.pan_number.as_deref().unwrap_or_default(), PAN_VISIBLE, reveal),
        ),
        ("PF Number", text(&person.pf_number)),
        ("UAN Number", text(&person.uan_number)),
        ("EPS Number", text(&person.eps_number)),
        ("ESI Number", text(&person.esi_number)),
    ]
}

/// Read-only record view with an edit sub-view. Reveal state lives only while mounted.
#[component]
pub fn PersonDetailModal(
    person: PersonRecord,
    kind: PersonKind,
    on_close: Callback<()>,
    on_updated: Callback<PersonRecord>,
) -> impl IntoView {
    let current = create_rw_signal(person);
    let tab = create_rw_signal(DetailTab::General);
    let reveal = create_rw_signal(false);
    let editing = create_rw_signal(false);

    let title = Signal::derive(move || {
        if editing.get() {
            format!("Edit {}", kind.label())
        } else {
            format!("{} Details", kind.label())
        }
    });

    let on_saved = Callback::new(move |updated: PersonRecord| {
        current.set(updated.clone());
        editing.set(false);
        on_updated.call(updated);
    });

    let tab_class = move |which: DetailTab| {
        if tab.get() == which {
            "px-3 py-2 text-sm font-medium border-b-2 border-action-primary-bg text-fg"
        } else {
            "px-3 py-2 text-sm font-medium text-fg-muted hover:text-fg"
        }
    };

    view! {
        <Modal title=title on_close=on_close wide=true>
            <Show
                when=move || !editing.get()
                fallback=move || {
                    view! {
                        <EditPersonForm
                            person=current.get_untracked()
                            target=EditTarget::Person(kind)
                            on_saved=on_saved
                            on_cancel=Callback::new(move |_| editing.set(false))
                        />
                    }
                }
            >
                <div class="flex items-center justify-between border-b border-border">
                    <div class="flex gap-2" role="tablist">
                        <button
                            type="button"
                            role="tab"
                            class=move || tab_class(DetailTab::General)
                            on:click=move |_| tab.set(DetailTab::General)
                        >
                            "General"
                        </button>
                        <button
                            type="button"
                            role="tab"
                            class=move || tab_class(DetailTab::Bank)
                            on:click=move |_| tab.set(DetailTab::Bank)
                        >
                            "Bank"
                        </button>
                    </div>
                    <button
                        type="button"
                        class="px-3 py-1 rounded-md bg-action-primary-bg text-action-primary-text text-sm hover:bg-action-primary-bg-hover"
                        on:click=move |_| editing.set(true)
                    >
                        "Edit"
                    </button>
                </div>
                <Show when=move || tab.get() == DetailTab::Bank>
                    <label class="flex items-center gap-2 text-sm text-fg-muted">
                        <input
                            type="checkbox"
                            prop:checked=move || reveal.get()
                            on:change=move |ev| reveal.set(event_target_checked(&ev))
                        />
                        "Show sensitive details"
                    </label>
                </Show>
                <dl class="space-y-1">
                    {move || {
                        let rows = current.with(|person| match tab.get() {
                            DetailTab::General => general_rows(person),
                            DetailTab::Bank => bank_rows(person, reveal.get()),
                        });
                        rows.into_iter()
                            .map(|(label, value)| detail_row(label, value))
                            .collect_view()
                    }}
                </dl>
            </Show>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::person;

    fn value_of(rows: &[(&'static str, String)], label: &str) -> String {
        rows.iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    }

    #[test]
    fn sensitive_fields_masked_until_revealed() {
        let record = person("1", "Asha", "HR");
        let masked = bank_rows(&record, false);
        assert_eq!(value_of(&masked, "Account Number"), "******7890");
        assert_eq!(value_of(&masked, "PAN Number"), "*******34F");

        let revealed = bank_rows(&record, true);
        assert_eq!(value_of(&revealed, "Account Number"), "1234567890");
        assert_eq!(value_of(&revealed, "PAN Number"), "ABCDE1234F");
    }

    #[test]
    fn missing_values_render_as_dash() {
        let record = PersonRecord::default();
        let rows = bank_rows(&record, false);
        assert_eq!(value_of(&rows, "Bank Name"), "—");
        assert_eq!(value_of(&rows, "Account Number"), "—");
        assert_eq!(value_of(&rows, "PAN Number"), "—");
        let general = general_rows(&record);
        assert_eq!(value_of(&general, "Name"), "—");
        assert_eq!(value_of(&general, "Days Present"), "0");
    }
}
