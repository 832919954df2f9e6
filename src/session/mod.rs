//! Signed-in user state shared with whoever needs it.
//!
//! Authentication itself happens behind [`IdentityProvider`]; this crate never
//! stores credentials. [`SessionContext`] is owned by the caller and handed to
//! the parts that care, and each interested party holds a [`SessionSubscription`]
//! that ends when it is dropped or explicitly unsubscribed.

use crate::utils::error::{ExportError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub user_id: String,
    pub email: String,
    pub display_name: Option<String>,
}

/// Passed straight through to the provider and never kept.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_user(&self) -> Result<Option<Identity>>;
    async fn sign_in(&self, credentials: &Credentials) -> Result<Identity>;
    async fn sign_up(&self, credentials: &Credentials) -> Result<Identity>;
    async fn sign_out(&self) -> Result<()>;
}

pub struct SessionContext {
    provider: Arc<dyn IdentityProvider>,
    state: watch::Sender<Option<Identity>>,
}

impl SessionContext {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        let (state, _) = watch::channel(None);
        Self { provider, state }
    }

    /// Asks the provider who is signed in and publishes the answer.
    pub async fn refresh(&self) -> Result<Option<Identity>> {
        let identity = self.provider.current_user().await?;
        self.publish(identity.clone());
        Ok(identity)
    }

    pub fn current(&self) -> Option<Identity> {
        self.state.borrow().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.borrow().is_some()
    }

    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Identity> {
        let identity = self.provider.sign_in(credentials).await?;
        tracing::info!("Signed in as {}", identity.email);
        self.publish(Some(identity.clone()));
        Ok(identity)
    }

    pub async fn sign_up(&self, credentials: &Credentials) -> Result<Identity> {
        let identity = self.provider.sign_up(credentials).await?;
        tracing::info!("Created account for {}", identity.email);
        self.publish(Some(identity.clone()));
        Ok(identity)
    }

    pub async fn sign_out(&self) -> Result<()> {
        self.provider.sign_out().await?;
        tracing::info!("Signed out");
        self.publish(None);
        Ok(())
    }

    pub fn subscribe(&self) -> SessionSubscription {
        SessionSubscription {
            receiver: self.state.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.receiver_count()
    }

    fn publish(&self, identity: Option<Identity>) {
        self.state.send_if_modified(|current| {
            if *current == identity {
                false
            } else {
                *current = identity;
                true
            }
        });
    }
}

/// A live view of the session. Ends on drop or [`SessionSubscription::unsubscribe`].
pub struct SessionSubscription {
    receiver: watch::Receiver<Option<Identity>>,
}

impl SessionSubscription {
    pub fn current(&self) -> Option<Identity> {
        self.receiver.borrow().clone()
    }

    /// Waits for the next sign-in or sign-out. Fails once the context is gone.
    pub async fn changed(&mut self) -> Result<Option<Identity>> {
        self.receiver
            .changed()
            .await
            .map_err(|_| ExportError::IdentityError {
                message: "Session context was dropped".to_string(),
            })?;
        Ok(self.receiver.borrow_and_update().clone())
    }

    pub fn unsubscribe(self) {}
}
