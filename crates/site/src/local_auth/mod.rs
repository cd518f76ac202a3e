//! Local development auth provider.
//!
//! Accounts live in memory for the lifetime of the page. The provider installs the
//! [`AuthContext`] capability consumed by the guarded auth pages, plus a
//! [`LocalAuthHandle`] for pages that need the account itself.

use auth_contract::{provide_auth, AuthContext, AuthStatus};
use leptos::*;

mod store;
mod widgets;

pub use store::{normalize_email, Account, AccountStore, AuthError};
pub use widgets::{SignInForm, SignUpForm};

#[derive(Clone, Copy)]
/// Reactive handle onto the local provider's session.
pub struct LocalAuthHandle {
    account: RwSignal<Option<Account>>,
    settled: RwSignal<bool>,
    store: StoredValue<AccountStore>,
}

impl LocalAuthHandle {
    fn new(store: AccountStore) -> Self {
        Self {
            account: create_rw_signal(None),
            settled: create_rw_signal(false),
            store: store_value(store),
        }
    }

    /// Status derived from the session; `Unknown` until the provider settles.
    pub fn status(&self) -> AuthStatus {
        session_status(self.settled.get(), self.account.with(Option::is_some))
    }

    /// Signed-in account, if any.
    pub fn account(&self) -> Option<Account> {
        self.account.get()
    }

    /// Minimum password length enforced by the store.
    pub fn min_password_len(&self) -> usize {
        self.store.with_value(AccountStore::min_password_len)
    }

    /// Signs in an existing account.
    ///
    /// # Errors
    ///
    /// Propagates the store's [`AuthError`].
    pub fn sign_in(&self, email: &str, password: &str) -> Result<Account, AuthError> {
        let account = self
            .store
            .with_value(|store| store.sign_in(email, password))?;
        self.start_session(account.clone());
        Ok(account)
    }

    /// Registers an account and signs it in.
    ///
    /// # Errors
    ///
    /// Propagates the store's [`AuthError`].
    pub fn sign_up(&self, email: &str, password: &str, confirm: &str) -> Result<Account, AuthError> {
        let account = self
            .store
            .with_value(|store| store.sign_up(email, password, confirm))?;
        self.start_session(account.clone());
        Ok(account)
    }

    /// Ends the current session.
    pub fn sign_out(&self) {
        if let Some(account) = self.account.get_untracked() {
            logging::log!("local auth sign-out account={}", account.email);
        }
        self.account.set(None);
    }

    fn start_session(&self, account: Account) {
        logging::log!("local auth session started account={}", account.email);
        self.account.set(Some(account));
    }

    fn settle(&self) {
        if !self.settled.get_untracked() {
            self.settled.set(true);
        }
    }
}

fn session_status(settled: bool, has_account: bool) -> AuthStatus {
    match (settled, has_account) {
        (false, _) => AuthStatus::Unknown,
        (true, false) => AuthStatus::SignedOut,
        (true, true) => AuthStatus::SignedIn,
    }
}

#[component]
/// Provides the local [`AuthContext`] and [`LocalAuthHandle`] to descendants.
///
/// Status starts `Unknown` and settles once the provider has mounted.
pub fn LocalAuthProvider(
    #[prop(default = crate::config::DEFAULT_MIN_PASSWORD_LEN)] min_password_len: usize,
    children: Children,
) -> impl IntoView {
    let handle = LocalAuthHandle::new(AccountStore::new(min_password_len));
    provide_context(handle);
    provide_auth(AuthContext {
        status: Signal::derive(move || handle.status()),
        sign_in_widget: ViewFn::from(|| view! { <SignInForm /> }),
        sign_up_widget: ViewFn::from(|| view! { <SignUpForm /> }),
    });

    create_effect(move |_| handle.settle());

    children().into_view()
}

/// Returns the current [`LocalAuthHandle`].
///
/// # Panics
///
/// Panics if called outside [`LocalAuthProvider`].
pub fn use_local_auth() -> LocalAuthHandle {
    use_context::<LocalAuthHandle>().expect("LocalAuthHandle not provided")
}
