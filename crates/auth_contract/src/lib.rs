//! Contract between authentication-aware pages and the auth provider that backs them.
//!
//! The provider owns the sign-in status and the credential-collection widgets and
//! exposes them as an [`AuthContext`] capability. Pages consume that capability plus a
//! [`Navigator`] and run a [`RedirectGuard`] that moves signed-in visitors off the
//! auth pages exactly once.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod guard;

use leptos::{provide_context, use_context, Signal, SignalGet, View, ViewFn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use guard::{AuthPage, GuardState, RedirectGuard};

/// Route signed-in visitors are sent to from the auth pages.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Sign-in status reported by the auth provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthStatus {
    /// The provider has not settled yet.
    #[default]
    Unknown,
    /// No active session.
    SignedOut,
    /// An active session exists.
    SignedIn,
}

impl AuthStatus {
    /// Stable token used in logs and DOM attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::SignedOut => "signed-out",
            Self::SignedIn => "signed-in",
        }
    }

    /// Returns `true` for [`AuthStatus::SignedIn`].
    pub fn is_signed_in(self) -> bool {
        matches!(self, Self::SignedIn)
    }
}

/// Fire-and-forget navigation capability.
pub trait Navigator {
    /// Requests navigation to `path`. The result is never inspected.
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path)
    }
}

/// Errors raised when a required capability is not installed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// No auth provider is mounted above the caller.
    #[error("auth capability not provided; mount an auth provider above this view")]
    MissingAuth,
}

/// Auth capability installed by a provider and read by auth-aware pages.
#[derive(Clone)]
pub struct AuthContext {
    /// Reactive sign-in status. Every change is one observation for subscribers.
    pub status: Signal<AuthStatus>,
    /// Renders the provider's sign-in form.
    pub sign_in_widget: ViewFn,
    /// Renders the provider's sign-up form.
    pub sign_up_widget: ViewFn,
}

impl AuthContext {
    /// Reads the status and subscribes the running effect to its changes.
    pub fn current_user(&self) -> AuthStatus {
        self.status.get()
    }

    /// Renders the credential widget that belongs on `page`.
    pub fn widget_for(&self, page: AuthPage) -> View {
        match page {
            AuthPage::SignIn => self.sign_in_widget.run(),
            AuthPage::SignUp => self.sign_up_widget.run(),
        }
    }
}

/// Installs `auth` for descendant views.
pub fn provide_auth(auth: AuthContext) {
    provide_context(auth);
}

/// Returns the installed [`AuthContext`].
///
/// # Errors
///
/// Returns [`CapabilityError::MissingAuth`] outside an auth provider.
pub fn try_use_auth() -> Result<AuthContext, CapabilityError> {
    use_context::<AuthContext>().ok_or(CapabilityError::MissingAuth)
}

/// Returns the installed [`AuthContext`].
///
/// # Panics
///
/// Panics if called outside an auth provider.
pub fn use_auth() -> AuthContext {
    match try_use_auth() {
        Ok(auth) => auth,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn status_defaults_to_unknown() {
        assert_eq!(AuthStatus::default(), AuthStatus::Unknown);
        assert!(!AuthStatus::Unknown.is_signed_in());
        assert!(AuthStatus::SignedIn.is_signed_in());
    }

    #[test]
    fn status_serializes_with_its_token() {
        for status in [AuthStatus::Unknown, AuthStatus::SignedOut, AuthStatus::SignedIn] {
            let json = serde_json::to_string(&status).expect("serialize status");
            assert_eq!(json, format!("\"{}\"", status.token()));
            let back: AuthStatus = serde_json::from_str(&json).expect("deserialize status");
            assert_eq!(back, status);
        }
    }

    #[test]
    fn closures_act_as_navigators() {
        let visited = std::cell::RefCell::new(Vec::new());
        let navigator = |path: &str| visited.borrow_mut().push(path.to_string());
        navigator.navigate(DASHBOARD_PATH);
        assert_eq!(visited.into_inner(), vec![DASHBOARD_PATH.to_string()]);
    }

    #[test]
    fn current_user_follows_the_provider_status() {
        let _ = leptos::create_runtime();
        let status = leptos::create_rw_signal(AuthStatus::Unknown);
        let auth = AuthContext {
            status: status.into(),
            sign_in_widget: ViewFn::from(|| ()),
            sign_up_widget: ViewFn::from(|| ()),
        };
        assert_eq!(auth.current_user(), AuthStatus::Unknown);
        leptos::SignalSet::set(&status, AuthStatus::SignedIn);
        assert_eq!(auth.current_user(), AuthStatus::SignedIn);
    }

    #[test]
    fn missing_capability_has_actionable_message() {
        assert!(CapabilityError::MissingAuth
            .to_string()
            .contains("mount an auth provider"));
    }
}
