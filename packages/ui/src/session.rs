//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the application's [`store::SessionStore`] and
//! the gateway built over it, restores any persisted session synchronously
//! before the first render, and shares a [`SessionHandle`] through context.
//! Views read authentication state reactively via `use_session().state` and
//! perform the login/register/logout exchanges through the handle's
//! methods.

use dioxus::prelude::*;

use api::{ApiClient, ApiConfig, ApiError, Credentials, Registration};
use store::{SessionStore, UserProfile};

use crate::client::{platform_storage, Client};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    /// True until the persisted session has been examined.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Context handle combining the reactive state with the session actions.
///
/// `Copy`, so view closures can capture it freely — the non-`Copy` gateway
/// lives behind a signal.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    /// Reactive authentication state; updates on every establish/clear.
    pub state: Signal<SessionState>,
    client: Signal<Client>,
}

impl SessionHandle {
    /// A gateway handle sharing this session.
    pub fn client(&self) -> Client {
        self.client.peek().clone()
    }

    /// Exchange credentials for a session and adopt it.
    pub async fn login(&self, credentials: Credentials) -> Result<(), ApiError> {
        let client = self.client();
        let session = client.authenticate(&credentials).await?.into_session();
        client.session().establish(session.clone());
        let mut state = self.state;
        state.set(SessionState {
            user: Some(session.user),
            loading: false,
        });
        tracing::info!("session established");
        Ok(())
    }

    /// Register a new account and adopt the returned session.
    pub async fn register(&self, registration: Registration) -> Result<(), ApiError> {
        let client = self.client();
        let session = client.register(&registration).await?.into_session();
        client.session().establish(session.clone());
        let mut state = self.state;
        state.set(SessionState {
            user: Some(session.user),
            loading: false,
        });
        tracing::info!("session established via registration");
        Ok(())
    }

    /// Drop the session. Navigation back to the login entry point is done
    /// by [`LogoutButton`] / [`crate::SessionGate`], which observe the
    /// cleared state.
    pub fn logout(&self) {
        self.client().session().clear();
        let mut state = self.state;
        state.set(SessionState {
            user: None,
            loading: false,
        });
        tracing::info!("session cleared");
    }
}

/// Get the current session handle.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Provider component that manages session state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    // Synchronous startup barrier: the persisted session is restored
    // before any admission decision is made.
    let handle = use_hook(|| {
        let store = SessionStore::new(platform_storage());
        store.initialize();
        let state = Signal::new(SessionState {
            user: store.current().map(|session| session.user),
            loading: false,
        });
        let client = Signal::new(ApiClient::new(ApiConfig::from_env(), store));
        SessionHandle { state, client }
    });

    use_context_provider(|| handle);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();

    let onclick = move |_| {
        session.logout();
        // Redirect to login
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
