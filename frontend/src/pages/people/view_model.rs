use super::{
    repository::PeopleRepository,
    utils::{add_success_fallback, AddPersonFormState},
};
use crate::{
    api::{ApiClient, ApiError, CreatePersonRequest, PeopleSource, PersonKind, PersonRecord},
    state::{
        collection::{CollectionViewModel, Fetcher},
        message::MessageState,
    },
};
use futures::FutureExt;
use leptos::*;
use std::rc::Rc;

pub fn use_people_repository() -> PeopleRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    PeopleRepository::new_with_client(Rc::new(api))
}

/// Collection model for one people list. The owner keeps it so sibling actions can refresh it.
pub fn use_people_list(source: PeopleSource) -> CollectionViewModel<PersonRecord> {
    let repository = use_people_repository();
    let fetcher: Fetcher<PersonRecord> = Rc::new(move || {
        let repo = repository.clone();
        async move { repo.fetch_people(source).await }.boxed_local()
    });
    CollectionViewModel::new(fetcher)
}

#[derive(Clone, Copy)]
pub struct AddPersonViewModel {
    pub kind: PersonKind,
    pub form: RwSignal<AddPersonFormState>,
    pub messages: RwSignal<MessageState>,
    /// Resolves to whether the create call succeeded.
    pub submit_action: Action<CreatePersonRequest, bool>,
}

impl AddPersonViewModel {
    pub fn next_step(&self) {
        let mut outcome = Ok(());
        self.form.update(|state| outcome = state.next());
        match outcome {
            Ok(()) => self.messages.update(MessageState::clear),
            Err(err) => self.messages.update(|m| m.set_error(err)),
        }
    }

    pub fn previous_step(&self) {
        self.form.update(AddPersonFormState::back);
    }

    /// Validates the whole draft and dispatches it; invalid drafts never reach the network.
    pub fn submit(&self) -> bool {
        if self.submit_action.pending().get_untracked() {
            return false;
        }
        match self.form.with_untracked(AddPersonFormState::to_request) {
            Ok(request) => {
                self.messages.update(MessageState::clear);
                self.submit_action.dispatch(request);
                true
            }
            Err(err) => {
                self.messages.update(|m| m.set_error(err));
                false
            }
        }
    }
}

/// Applies a finished create call: success resets the wizard, failure keeps the draft.
pub fn apply_add_result(
    kind: PersonKind,
    form: RwSignal<AddPersonFormState>,
    messages: RwSignal<MessageState>,
    result: Result<Option<String>, ApiError>,
) -> bool {
    match result {
        Ok(message) => {
            let text = message.unwrap_or_else(|| add_success_fallback(kind));
            messages.update(|m| m.set_success(text));
            form.update(AddPersonFormState::reset);
            true
        }
        Err(err) => {
            log::warn!("adding {} failed: {}", kind.label(), err.error);
            messages.update(|m| m.set_error(err.error));
            false
        }
    }
}

pub fn use_add_person_view_model(kind: PersonKind, on_added: Callback<()>) -> AddPersonViewModel {
    let repository = use_people_repository();
    let form = create_rw_signal(AddPersonFormState::default());
    let messages = create_rw_signal(MessageState::default());

    // Each dispatch settles exactly once, so `on_added` fires once per successful create.
    let submit_action = create_action(move |request: &CreatePersonRequest| {
        let repo = repository.clone();
        let request = request.clone();
        async move {
            let result = repo.add_person(kind, request).await;
            let added = apply_add_result(kind, form, messages, result);
            if added {
                on_added.call(());
            }
            added
        }
    });

    AddPersonViewModel {
        kind,
        form,
        messages,
        submit_action,
    }
}
