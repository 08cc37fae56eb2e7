//! Auth session context.
//!
//! The identity provider pushes sign-in state changes; the session mirrors each
//! change into the backend profile by exchanging the identity token. The
//! session is an explicit object with a start/shutdown lifecycle that callers
//! pass to whatever needs it.

use crate::client::MoodtuneClient;
use crate::error::{ClientError, Result};
use async_trait::async_trait;
use moodtune_core::DbUser;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// External identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Identity token changes; `None` means signed out.
    ///
    /// The value present at subscription time counts as the first change.
    fn subscribe(&self) -> watch::Receiver<Option<String>>;

    /// Run the interactive sign-in flow. Completion is observed through
    /// [`IdentityProvider::subscribe`].
    async fn sign_in(&self) -> Result<()>;

    /// Sign out. Fire-and-forget from the session's point of view.
    async fn sign_out(&self) -> Result<()>;
}

/// Snapshot of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub identity_token: Option<String>,
    pub profile: Option<DbUser>,
    /// True until the provider reported its initial state
    pub is_resolving: bool,
}

impl SessionState {
    fn resolving() -> Self {
        Self {
            is_resolving: true,
            ..Self::default()
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.identity_token.is_some()
    }
}

struct SessionInner {
    client: MoodtuneClient,
    provider: Arc<dyn IdentityProvider>,
    state: watch::Sender<SessionState>,
}

impl SessionInner {
    async fn apply_identity(&self, identity_token: Option<String>) {
        self.state
            .send_modify(|s| s.identity_token = identity_token.clone());

        match identity_token {
            Some(token) => {
                self.client.set_identity_token(Some(token.clone())).await;
                match self.client.login(&token).await {
                    Ok(user) => self.state.send_modify(|s| s.profile = Some(user)),
                    // The session stays usable without a backend profile
                    Err(e) => error!(error = %e, "Backend auth sync failed"),
                }
            }
            None => {
                self.client.set_identity_token(None).await;
                self.state.send_modify(|s| s.profile = None);
            }
        }

        self.state.send_modify(|s| s.is_resolving = false);
    }
}

/// Auth session bound to one client and one identity provider.
///
/// Dropping the session stops listening to the provider.
pub struct AuthSession {
    inner: Arc<SessionInner>,
    listener: Option<JoinHandle<()>>,
}

impl AuthSession {
    /// Start listening to `provider`. Must be called inside a tokio runtime.
    pub fn start(client: MoodtuneClient, provider: Arc<dyn IdentityProvider>) -> Self {
        let (state, _) = watch::channel(SessionState::resolving());
        let mut changes = provider.subscribe();

        let inner = Arc::new(SessionInner {
            client,
            provider,
            state,
        });

        let worker = Arc::clone(&inner);
        let listener = tokio::spawn(async move {
            loop {
                let token = changes.borrow_and_update().clone();
                debug!(signed_in = token.is_some(), "Identity state changed");
                worker.apply_identity(token).await;

                if changes.changed().await.is_err() {
                    break;
                }
            }
        });

        Self {
            inner,
            listener: Some(listener),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    pub fn identity_token(&self) -> Option<String> {
        self.inner.state.borrow().identity_token.clone()
    }

    pub fn profile(&self) -> Option<DbUser> {
        self.inner.state.borrow().profile.clone()
    }

    pub fn is_resolving(&self) -> bool {
        self.inner.state.borrow().is_resolving
    }

    /// The client whose bearer token this session maintains.
    pub fn client(&self) -> &MoodtuneClient {
        &self.inner.client
    }

    /// Observe state changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    /// Wait until the provider's initial state has been applied.
    pub async fn resolved(&self) -> SessionState {
        let mut rx = self.subscribe();
        let state = match rx.wait_for(|s| !s.is_resolving).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        state
    }

    /// Start the provider's sign-in flow.
    pub async fn login(&self) -> Result<()> {
        self.inner.provider.sign_in().await
    }

    /// Sign out and forget the backend profile.
    pub async fn logout(&self) -> Result<()> {
        self.inner.provider.sign_out().await?;
        self.inner.client.clear_identity_token().await;
        self.inner.state.send_modify(|s| {
            s.identity_token = None;
            s.profile = None;
        });
        info!("Logged out");
        Ok(())
    }

    /// Stop listening to the provider.
    pub fn shutdown(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.abort();
        }
    }
}

impl Drop for AuthSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Provider backed by a pre-issued identity token (configuration or
/// environment), for non-interactive hosts.
pub struct StaticIdentityProvider {
    token: Option<String>,
    changes: watch::Sender<Option<String>>,
}

impl StaticIdentityProvider {
    /// Provider that is already signed in with `token`.
    pub fn signed_in(token: impl Into<String>) -> Self {
        let token = token.into();
        let (changes, _) = watch::channel(Some(token.clone()));
        Self {
            token: Some(token),
            changes,
        }
    }

    /// Provider that starts signed out; `sign_in` publishes `token` if any.
    pub fn signed_out(token: Option<String>) -> Self {
        let (changes, _) = watch::channel(None);
        Self { token, changes }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.changes.subscribe()
    }

    async fn sign_in(&self) -> Result<()> {
        let token = self
            .token
            .clone()
            .ok_or_else(|| ClientError::AuthFailed("No identity token configured".into()))?;
        self.changes.send_replace(Some(token));
        Ok(())
    }

    async fn sign_out(&self) -> Result<()> {
        self.changes.send_replace(None);
        Ok(())
    }
}
