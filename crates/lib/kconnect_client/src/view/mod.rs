//! Resource views.
//!
//! A view owns its list and form state and reaches the backend through the
//! [`ViewContext`] it was mounted with. Failures never escape a view action:
//! they are logged, reported to the user through [`Prompt`] and summarised as
//! an [`ActionOutcome`].

pub mod departments;
pub mod employees;
pub mod reports;

#[cfg(test)]
pub(crate) mod testing;

use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use kconnect_core::models::Identity;

use crate::error::{ClientError, ClientResult};
use crate::gateway::Gateway;
use crate::session::{CredentialStore, Session};

pub use departments::DepartmentsView;
pub use employees::EmployeesView;
pub use reports::ReportsView;

/// User-facing notifications and confirmations.
pub trait Prompt: Send + Sync {
    fn alert(&self, message: &str);
    fn confirm(&self, question: &str) -> bool;
}

/// What a view action ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    /// The backend call failed; the user was alerted.
    Failed,
    /// The user refused the confirmation.
    Declined,
    /// The identity's role may not perform this action. Nothing was sent.
    NotPermitted,
    /// A required field is empty or out of range. Nothing was sent.
    Incomplete(&'static str),
    /// The view was torn down while the call was in flight.
    Cancelled,
}

/// Everything a mounted view needs: the backend, who is asking, how to talk
/// to the user and the token that ends the view's lifetime.
pub struct ViewContext<G, P> {
    gateway: G,
    identity: Identity,
    prompt: P,
    cancel: CancellationToken,
}

impl<G: Gateway, P: Prompt> ViewContext<G, P> {
    pub fn new(gateway: G, identity: Identity, prompt: P) -> Self {
        Self {
            gateway,
            identity,
            prompt,
            cancel: CancellationToken::new(),
        }
    }

    /// Context for the session's identity, or `None` when logged out.
    ///
    /// `gateway` should carry the session's credential.
    pub fn for_session<S: CredentialStore>(
        session: &Session<S>,
        gateway: G,
        prompt: P,
    ) -> Option<Self> {
        let identity = session.identity()?.clone();
        Some(Self::new(gateway, identity, prompt))
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn is_admin(&self) -> bool {
        self.identity.is_admin()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// A handle that tears the view down when cancelled.
    pub fn cancellation(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// End the view's lifetime. In-flight and later calls resolve to
    /// [`ClientError::Cancelled`].
    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Run a backend call unless the view is torn down first. The call's
    /// future is dropped on teardown.
    pub async fn call<T, F>(&self, fut: F) -> ClientResult<T>
    where
        F: Future<Output = ClientResult<T>>,
    {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(ClientError::Cancelled),
            result = fut => result,
        }
    }

    /// Log and alert a failed action. Cancellation is neither logged as an
    /// error nor shown to the user.
    pub(crate) fn fail(&self, action: &str, err: &ClientError) -> ActionOutcome {
        if err.is_cancelled() {
            debug!(action, "view torn down, result discarded");
            return ActionOutcome::Cancelled;
        }
        error!(action, error = %err, "request failed");
        self.prompt.alert(&format!("Error {action}"));
        ActionOutcome::Failed
    }

    pub(crate) fn alert(&self, message: &str) {
        self.prompt.alert(message);
    }

    pub(crate) fn confirm(&self, question: &str) -> bool {
        self.prompt.confirm(question)
    }
}

/// First required field that is empty, in declaration order.
pub(crate) fn first_empty(fields: &[(&'static str, &str)]) -> Option<&'static str> {
    fields
        .iter()
        .find(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
}
