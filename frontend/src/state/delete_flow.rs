use crate::{api::ApiError, utils::dialog::alert};
use leptos::*;
use std::future::Future;

/// Confirm-then-delete lifecycle of one entity. At most one request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteFlow {
    #[default]
    Idle,
    Confirming,
    Deleting,
}

impl DeleteFlow {
    pub fn request(self) -> Self {
        match self {
            DeleteFlow::Idle => DeleteFlow::Confirming,
            other => other,
        }
    }

    pub fn cancel(self) -> Self {
        match self {
            DeleteFlow::Confirming => DeleteFlow::Idle,
            other => other,
        }
    }

    /// `Some(Deleting)` only from `Confirming`; anything else must not reach the network.
    pub fn confirm(self) -> Option<Self> {
        match self {
            DeleteFlow::Confirming => Some(DeleteFlow::Deleting),
            _ => None,
        }
    }

    pub fn is_confirming(self) -> bool {
        self == DeleteFlow::Confirming
    }

    pub fn is_deleting(self) -> bool {
        self == DeleteFlow::Deleting
    }
}

/// Awaits an already-confirmed delete. Success runs `on_success`; failure raises a blocking alert.
pub async fn perform_delete<Fut>(
    flow: RwSignal<DeleteFlow>,
    request: Fut,
    failure_alert: &str,
    on_success: impl FnOnce(),
) -> bool
where
    Fut: Future<Output = Result<(), ApiError>>,
{
    let result = request.await;
    flow.set(DeleteFlow::Idle);
    match result {
        Ok(()) => {
            on_success();
            true
        }
        Err(err) => {
            log::error!("delete failed: {} ({})", err.error, err.code);
            alert(failure_alert);
            false
        }
    }
}

/// Moves a confirming flow to deleting and runs the request in the background.
pub fn confirm_delete<F, Fut>(
    flow: RwSignal<DeleteFlow>,
    make_request: F,
    failure_alert: &'static str,
    on_success: Callback<()>,
) where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let Some(next) = flow.get_untracked().confirm() else {
        return;
    };
    flow.set(next);
    let request = make_request();
    spawn_local(async move {
        perform_delete(flow, request, failure_alert, move || on_success.call(())).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_transitions() {
        let flow = DeleteFlow::default();
        assert_eq!(flow.confirm(), None);
        let flow = flow.request();
        assert!(flow.is_confirming());
        assert_eq!(flow.cancel(), DeleteFlow::Idle);
        let deleting = flow.confirm().unwrap();
        assert!(deleting.is_deleting());
        assert_eq!(deleting.request(), DeleteFlow::Deleting);
        assert_eq!(deleting.cancel(), DeleteFlow::Deleting);
        assert_eq!(deleting.confirm(), None);
    }
}
