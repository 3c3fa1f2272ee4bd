use crate::{
    api::PersonRecord,
    components::{layout::MessageBanner, modal::Modal},
    pages::people::{utils::validate_payslip_month, view_model::use_people_repository},
    state::message::MessageState,
};
use leptos::{ev::SubmitEvent, *};

use super::field::INPUT_CLASS;

#[component]
pub fn GeneratePayslipModal(
    person: PersonRecord,
    on_close: Callback<()>,
    on_generated: Callback<()>,
) -> impl IntoView {
    let repository = use_people_repository();
    let person_id = person.key();
    let month = create_rw_signal(String::new());
    let messages = create_rw_signal(MessageState::default());

    let generate_action = create_action(move |month: &String| {
        let repo = repository.clone();
        let id = person_id.clone();
        let month = month.clone();
        async move { repo.generate_payslip(id, month).await }
    });
    let pending = generate_action.pending();

    create_effect(move |_| {
        if let Some(result) = generate_action.value().get() {
            match result {
                Ok(message) => {
                    messages.update(|m| {
                        m.set_success(message.unwrap_or_else(|| "Payslip generated.".into()))
                    });
                    on_generated.call(());
                }
                Err(err) => messages.update(|m| m.set_error(err.error)),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match validate_payslip_month(&month.get_untracked()) {
            Ok(value) => {
                messages.update(MessageState::clear);
                generate_action.dispatch(value);
            }
            Err(err) => messages.update(|m| m.set_error(err)),
        }
    };

    let title = format!("Generate Payslip: {}", person.full_name());
    view! {
        <Modal title=title on_close=on_close>
            <MessageBanner
                success=Signal::derive(move || messages.with(|m| m.success.clone()))
                error=Signal::derive(move || messages.with(|m| m.error.clone()))
                on_dismiss=Callback::new(move |_| messages.update(MessageState::clear))
            />
            <form class="space-y-4" on:submit=on_submit>
                <label class="block text-sm font-medium text-fg">
                    "Payslip Month"
                    <input
                        type="month"
                        class=INPUT_CLASS
                        placeholder="YYYY-MM"
                        prop:value=move || month.get()
                        on:input=move |ev| month.set(event_target_value(&ev))
                    />
                </label>
                <div class="flex justify-end">
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="px-4 py-2 rounded-md bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Generating..." } else { "Generate" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
