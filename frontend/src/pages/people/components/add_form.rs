use super::field::PersonFieldInput;
use crate::{
    api::PersonKind,
    components::layout::MessageBanner,
    pages::people::{
        utils::{PersonField, WizardStep, STEP_ONE_FIELDS, STEP_TWO_FIELDS},
        view_model::{use_add_person_view_model, AddPersonViewModel},
    },
    state::message::MessageState,
    utils::focus::advance_focus_on_enter,
};
use leptos::{ev::SubmitEvent, *};

fn field_inputs(vm: AddPersonViewModel, fields: &'static [PersonField]) -> View {
    fields
        .iter()
        .map(|field| {
            let field = *field;
            let value = Signal::derive(move || vm.form.with(|s| s.fields.get(field).to_string()));
            let on_input = Callback::new(move |text: String| {
                vm.form.update(|s| s.fields.set(field, text));
            });
            view! { <PersonFieldInput field=field value=value on_input=on_input/> }
        })
        .collect_view()
}

/// Two-step add form. `kind` picks the endpoint and copy; behavior is otherwise the same.
#[component]
pub fn AddPersonForm(kind: PersonKind, on_added: Callback<()>) -> impl IntoView {
    let vm = use_add_person_view_model(kind, on_added);
    let pending = vm.submit_action.pending();
    let step = create_memo(move |_| vm.form.with(|s| s.step));
    let success = Signal::derive(move || vm.messages.with(|m| m.success.clone()));
    let error = Signal::derive(move || vm.messages.with(|m| m.error.clone()));
    let dismiss = Callback::new(move |_| vm.messages.update(MessageState::clear));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if step.get_untracked() == WizardStep::Details {
            vm.next_step();
        } else {
            vm.submit();
        }
    };

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h3 class="text-lg font-semibold text-fg">{format!("Add {}", kind.label())}</h3>
                <span class="text-sm text-fg-muted">
                    {move || format!("Step {} of 2", step.get().number())}
                </span>
            </div>
            <MessageBanner success=success error=error on_dismiss=dismiss/>
            <form
                class="space-y-4"
                novalidate
                on:submit=on_submit
                on:keydown=move |ev| advance_focus_on_enter(&ev)
            >
                <Show
                    when=move || step.get() == WizardStep::Details
                    fallback=move || {
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                {field_inputs(vm, &STEP_TWO_FIELDS)}
                            </div>
                            <div class="flex justify-between">
                                <button
                                    type="button"
                                    class="px-4 py-2 rounded-md border border-border text-fg hover:bg-action-ghost-bg-hover"
                                    on:click=move |_| vm.previous_step()
                                >
                                    "Back"
                                </button>
                                <button
                                    type="submit"
                                    disabled=move || pending.get()
                                    class="px-4 py-2 rounded-md bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                                >
                                    {move || {
                                        if pending.get() {
                                            "Submitting...".to_string()
                                        } else {
                                            format!("Add {}", kind.label())
                                        }
                                    }}
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {field_inputs(vm, &STEP_ONE_FIELDS)}
                    </div>
                    <div class="flex justify-end">
                        <button
                            type="button"
                            class="px-4 py-2 rounded-md bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                            on:click=move |_| vm.next_step()
                        >
                            "Next"
                        </button>
                    </div>
                </Show>
            </form>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn first_step_shows_identity_fields() {
        let html = render_to_string(move || {
            view! { <AddPersonForm kind=PersonKind::Hr on_added=Callback::new(|_| {})/> }
        });
        assert!(html.contains("Add HR"));
        assert!(html.contains("Step 1 of 2"));
        assert!(html.contains("First Name *"));
        assert!(html.contains("Next"));
        assert!(!html.contains("Bank Name"));
    }

    #[test]
    fn employee_mode_only_changes_copy() {
        let html = render_to_string(move || {
            view! { <AddPersonForm kind=PersonKind::Employee on_added=Callback::new(|_| {})/> }
        });
        assert!(html.contains("Add Employee"));
        assert!(html.contains("Joining Date"));
    }
}
