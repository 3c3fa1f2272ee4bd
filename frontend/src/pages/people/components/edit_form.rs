use super::field::PersonFieldInput;
use crate::{
    api::{ApiError, PersonKind, PersonRecord},
    components::layout::ErrorMessage,
    pages::people::{
        repository::PeopleRepository,
        utils::{EditPersonFormState, EDITABLE_FIELDS},
        view_model::use_people_repository,
    },
    state::session::Role,
};
use leptos::{ev::SubmitEvent, *};

/// Where an edited record is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Person(PersonKind),
    OwnProfile(Role),
}

impl EditTarget {
    async fn save(self, repo: PeopleRepository, record: PersonRecord) -> Result<PersonRecord, ApiError> {
        match self {
            EditTarget::Person(kind) => repo.save_person(kind, record).await,
            EditTarget::OwnProfile(role) => repo.save_own_profile(role, record).await,
        }
    }
}

#[component]
pub fn EditPersonForm(
    person: PersonRecord,
    target: EditTarget,
    on_saved: Callback<PersonRecord>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let repository = use_people_repository();
    let form = create_rw_signal(EditPersonFormState::new(&person));
    let error = create_rw_signal(None::<String>);

    let save_action = create_action(move |record: &PersonRecord| {
        let repo = repository.clone();
        let record = record.clone();
        async move { target.save(repo, record).await }
    });
    let pending = save_action.pending();

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(updated) => {
                    error.set(None);
                    on_saved.call(updated);
                }
                Err(err) => error.set(Some(err.error)),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match form.with_untracked(EditPersonFormState::to_record) {
            Ok(record) => {
                error.set(None);
                save_action.dispatch(record);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <form class="space-y-4" novalidate on:submit=on_submit>
            {move || error.get().map(|message| view! { <ErrorMessage message=message/> })}
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {EDITABLE_FIELDS
                    .iter()
                    .map(|field| {
                        let field = *field;
                        let value = Signal::derive(move || {
                            form.with(|s| s.fields.get(field).to_string())
                        });
                        let on_input = Callback::new(move |text: String| {
                            form.update(|s| s.fields.set(field, text));
                        });
                        view! { <PersonFieldInput field=field value=value on_input=on_input/> }
                    })
                    .collect_view()}
            </div>
            <div class="flex justify-end gap-2">
                <button
                    type="button"
                    class="px-4 py-2 rounded-md border border-border text-fg hover:bg-action-ghost-bg-hover"
                    on:click=move |_| on_cancel.call(())
                >
                    "Cancel"
                </button>
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="px-4 py-2 rounded-md bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                >
                    {move || if pending.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::person, ssr::render_to_string};

    #[test]
    fn edit_form_lists_fields_without_password() {
        let html = render_to_string(move || {
            view! {
                <EditPersonForm
                    person=person("4", "Meera", "Employee")
                    target=EditTarget::Person(PersonKind::Employee)
                    on_saved=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("First Name *"));
        assert!(html.contains("IFSC Code"));
        assert!(!html.contains("Password"));
        assert!(html.contains("Save"));
    }
}
