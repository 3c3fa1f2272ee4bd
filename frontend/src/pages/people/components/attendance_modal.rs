use crate::{
    api::{ApiError, AttendanceRequest, PersonKind, PersonRecord},
    components::{layout::MessageBanner, modal::Modal},
    pages::people::{utils::AttendanceFormState, view_model::use_people_repository},
    state::message::MessageState,
};
use leptos::{ev::SubmitEvent, *};

use super::field::INPUT_CLASS;

#[component]
pub fn AttendanceModal(
    person: PersonRecord,
    kind: PersonKind,
    on_close: Callback<()>,
    on_recorded: Callback<()>,
) -> impl IntoView {
    let repository = use_people_repository();
    let person_id = person.key();
    let form = create_rw_signal(AttendanceFormState {
        days_present: person.days_present.unwrap_or_default().to_string(),
        paid_leaves: person.paid_leaves.unwrap_or_default().to_string(),
    });
    let messages = create_rw_signal(MessageState::default());

    let record_action = create_action(move |request: &AttendanceRequest| {
        let repo = repository.clone();
        let id = person_id.clone();
        let request = request.clone();
        async move { repo.add_attendance(kind, id, request).await }
    });
    let pending = record_action.pending();

    create_effect(move |_| {
        if let Some(result) = record_action.value().get() {
            match result {
                Ok(message) => {
                    messages.update(|m| {
                        m.set_success(message.unwrap_or_else(|| "Attendance added.".into()))
                    });
                    on_recorded.call(());
                }
                Err(ApiError { error, .. }) => messages.update(|m| m.set_error(error)),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match form.with_untracked(AttendanceFormState::to_request) {
            Ok(request) => {
                messages.update(MessageState::clear);
                record_action.dispatch(request);
            }
            Err(err) => messages.update(|m| m.set_error(err)),
        }
    };

    let title = format!("Add Attendance: {}", person.full_name());
    view! {
        <Modal title=title on_close=on_close>
            <MessageBanner
                success=Signal::derive(move || messages.with(|m| m.success.clone()))
                error=Signal::derive(move || messages.with(|m| m.error.clone()))
                on_dismiss=Callback::new(move |_| messages.update(MessageState::clear))
            />
            <form class="space-y-4" on:submit=on_submit>
                <label class="block text-sm font-medium text-fg">
                    "Days Present"
                    <input
                        type="number"
                        min="0"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.days_present.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.days_present = value);
                        }
                    />
                </label>
                <label class="block text-sm font-medium text-fg">
                    "Paid Leaves"
                    <input
                        type="number"
                        min="0"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.paid_leaves.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.paid_leaves = value);
                        }
                    />
                </label>
                <div class="flex justify-end">
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="px-4 py-2 rounded-md bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Saving..." } else { "Save Attendance" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
