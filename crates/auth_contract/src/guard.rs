//! One-shot redirect guard for the sign-in and sign-up pages.

use leptos::logging;

use crate::{AuthStatus, Navigator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Auth pages that carry a redirect guard.
pub enum AuthPage {
    /// Existing-account sign-in.
    SignIn,
    /// New-account registration.
    SignUp,
}

impl AuthPage {
    /// Stable token used in logs and DOM attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::SignIn => "sign-in",
            Self::SignUp => "sign-up",
        }
    }

    /// Route the page is mounted at.
    pub fn route(self) -> &'static str {
        match self {
            Self::SignIn => "/auth/sign-in",
            Self::SignUp => "/auth/sign-up",
        }
    }

    /// Page heading.
    pub fn heading(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
            Self::SignUp => "Create an account",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Guard lifecycle.
pub enum GuardState {
    /// Constructed, not mounted yet.
    #[default]
    Idle,
    /// Mounted and waiting for a signed-in observation.
    Watching,
    /// Navigation has been requested; terminal for this mount.
    Redirected,
}

impl GuardState {
    fn token(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Watching => "watching",
            Self::Redirected => "redirected",
        }
    }
}

/// Watches auth status for one page instance and redirects once on sign-in.
///
/// The guard owns nothing but its own state. The credential widget stays visible
/// while the guard is idle or watching, whatever the observed status is; only the
/// redirect hides it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectGuard {
    page: AuthPage,
    target: String,
    state: GuardState,
}

impl RedirectGuard {
    /// Creates an idle guard that will send signed-in visitors to `target`.
    pub fn new(page: AuthPage, target: impl Into<String>) -> Self {
        Self {
            page,
            target: target.into(),
            state: GuardState::Idle,
        }
    }

    /// Page the guard belongs to.
    pub fn page(&self) -> AuthPage {
        self.page
    }

    /// Redirect destination.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Current lifecycle state.
    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Starts watching. Has no effect once mounted.
    pub fn mount(&mut self) {
        if self.state == GuardState::Idle {
            self.transition(GuardState::Watching, None);
        }
    }

    /// Feeds one status observation to the guard and returns the resulting state.
    ///
    /// The first `SignedIn` observation requests navigation to the target; every
    /// observation after that is ignored. An observation delivered before
    /// [`RedirectGuard::mount`] mounts the guard first.
    pub fn observe<N>(&mut self, status: AuthStatus, navigator: &N) -> GuardState
    where
        N: Navigator + ?Sized,
    {
        if self.state == GuardState::Redirected {
            return self.state;
        }
        self.mount();
        if status.is_signed_in() {
            // State flips before navigating so a re-entrant observation is a no-op.
            self.transition(GuardState::Redirected, Some(status));
            navigator.navigate(&self.target);
        }
        self.state
    }

    /// Whether the credential widget should be on screen.
    pub fn shows_widget(&self) -> bool {
        self.state != GuardState::Redirected
    }

    /// Stops observing. The guard cannot be fed after this.
    pub fn unmount(self) {
        logging::log!(
            "auth guard page={} unmount state={}",
            self.page.token(),
            self.state.token()
        );
    }

    fn transition(&mut self, next: GuardState, status: Option<AuthStatus>) {
        logging::log!(
            "auth guard page={} transition={}->{} status={} target={}",
            self.page.token(),
            self.state.token(),
            next.token(),
            status.map_or("-", AuthStatus::token),
            self.target
        );
        self.state = next;
    }
}
