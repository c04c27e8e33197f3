//! Session store.
//!
//! Holds the credential and the identity decoded from it. The session is the
//! only writer of the credential: views get an [`Identity`] and a gateway
//! built from [`Session::credential`], never the session itself.

pub mod store;

use tracing::{info, warn};

use kconnect_core::auth::decode_identity;
use kconnect_core::models::{Identity, LoginRequest};

use crate::error::ClientResult;
use crate::gateway::Gateway;
use crate::nav::Route;

pub use store::{CookieJar, CredentialStore, MemoryStore, TOKEN_COOKIE};

/// Credential plus the identity derived from it.
#[derive(Debug)]
pub struct Session<S> {
    store: S,
    credential: Option<String>,
    identity: Option<Identity>,
}

impl<S: CredentialStore> Session<S> {
    /// Restore the session from the store.
    ///
    /// Never fails: an unreadable store or undecodable credential is logged
    /// and the session starts logged out.
    pub fn init(store: S) -> Self {
        let mut session = Self {
            store,
            credential: None,
            identity: None,
        };

        let token = match session.store.load() {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "failed to read persisted credential");
                None
            }
        };

        if let Some(token) = token {
            match decode_identity(&token) {
                Ok(identity) => {
                    session.credential = Some(token);
                    session.identity = Some(identity);
                }
                Err(e) => warn!(error = %e, "failed to decode persisted credential"),
            }
        }

        session
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Exchange email and password for a credential.
    ///
    /// Errors propagate unchanged; the caller decides what to tell the user.
    pub async fn login<G: Gateway + ?Sized>(
        &mut self,
        gateway: &G,
        email: &str,
        password: &str,
    ) -> ClientResult<&Identity> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = gateway.login(&request).await?;
        let identity = decode_identity(&response.token)?;
        self.store.save(&response.token)?;

        info!(email = %identity.email, role = %identity.role, "logged in");
        self.credential = Some(response.token);
        Ok(self.identity.insert(identity))
    }

    /// Drop the credential and return to the login view.
    pub fn logout(&mut self) -> Route {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear persisted credential");
        }
        if let Some(identity) = self.identity.take() {
            info!(email = %identity.email, "logged out");
        }
        self.credential = None;
        Route::Login
    }
}
