use super::{repository::JobsRepository, utils::AddJobFormState};
use crate::{
    api::{ApiClient, ApiError, CreateJobRequest, JobPosting},
    state::{
        collection::{CollectionViewModel, Fetcher},
        message::MessageState,
    },
};
use futures::FutureExt;
use leptos::*;
use std::rc::Rc;

pub fn use_jobs_repository() -> JobsRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    JobsRepository::new_with_client(Rc::new(api))
}

pub fn use_job_list() -> CollectionViewModel<JobPosting> {
    let repository = use_jobs_repository();
    let fetcher: Fetcher<JobPosting> = Rc::new(move || {
        let repo = repository.clone();
        async move { repo.fetch_jobs().await }.boxed_local()
    });
    CollectionViewModel::new(fetcher)
}

#[derive(Clone, Copy)]
pub struct AddJobViewModel {
    pub form: RwSignal<AddJobFormState>,
    pub messages: RwSignal<MessageState>,
    pub submit_action: Action<CreateJobRequest, Result<Option<String>, ApiError>>,
}

impl AddJobViewModel {
    pub fn submit(&self) -> bool {
        if self.submit_action.pending().get_untracked() {
            return false;
        }
        match self.form.with_untracked(AddJobFormState::to_request) {
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

pub fn apply_job_result(
    form: RwSignal<AddJobFormState>,
    messages: RwSignal<MessageState>,
    result: Result<Option<String>, ApiError>,
) -> bool {
    match result {
        Ok(message) => {
            messages.update(|m| m.set_success(message.unwrap_or_else(|| "Job posted successfully.".into())));
            form.update(AddJobFormState::reset);
            true
        }
        Err(err) => {
            log::warn!("posting job failed: {}", err.error);
            messages.update(|m| m.set_error(err.error));
            false
        }
    }
}

pub fn use_add_job_view_model(on_added: Callback<()>) -> AddJobViewModel {
    let repository = use_jobs_repository();
    let form = create_rw_signal(AddJobFormState::default());
    let messages = create_rw_signal(MessageState::default());

    let submit_action = create_action(move |request: &CreateJobRequest| {
        let repo = repository.clone();
        let request = request.clone();
        async move { repo.post_job(request).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            if apply_job_result(form, messages, result) {
                on_added.call(());
            }
        }
    });

    AddJobViewModel {
        form,
        messages,
        submit_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn invalid_job_is_not_dispatched() {
        with_runtime(|| {
            let vm = use_add_job_view_model(Callback::new(|_| {}));
            assert!(!vm.submit());
            assert_eq!(
                vm.messages.get_untracked().error.as_deref(),
                Some("Job title is required.")
            );
            assert_eq!(vm.submit_action.version().get_untracked(), 0);
        });
    }

    #[test]
    fn job_result_resets_on_success_only() {
        with_runtime(|| {
            let form = create_rw_signal(AddJobFormState::default());
            let messages = create_rw_signal(MessageState::default());
            form.update(|f| f.job_title = "QA Lead".into());

            assert!(!apply_job_result(form, messages, Err(ApiError::from_status(500, "boom"))));
            assert_eq!(form.get_untracked().job_title, "QA Lead");

            assert!(apply_job_result(form, messages, Ok(Some("Job created".into()))));
            assert!(form.get_untracked().job_title.is_empty());
            assert_eq!(messages.get_untracked().success.as_deref(), Some("Job created"));
        });
    }
}
