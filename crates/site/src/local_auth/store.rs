//! In-memory account registry backing the local auth provider.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Reasons a credential submission is rejected.
pub enum AuthError {
    /// No email was entered.
    #[error("Enter your email address.")]
    MissingEmail,
    /// The email is not of the form `name@domain.tld`.
    #[error("`{0}` is not a valid email address.")]
    InvalidEmail(String),
    /// The password is shorter than the configured minimum.
    #[error("Passwords must be at least {min} characters long.")]
    PasswordTooShort {
        /// Configured minimum length.
        min: usize,
    },
    /// Sign-up password and confirmation differ.
    #[error("Passwords do not match.")]
    PasswordMismatch,
    /// Sign-up for an email that is already registered.
    #[error("An account for {0} already exists.")]
    AccountExists(String),
    /// Sign-in for an email nobody registered.
    #[error("No account found for {0}.")]
    UnknownAccount(String),
    /// Sign-in with the wrong password.
    #[error("Incorrect password.")]
    WrongPassword,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A signed-in account.
pub struct Account {
    /// Normalized email address.
    pub email: String,
}

#[derive(Debug, Clone)]
/// Shared registry of accounts created during this page session.
pub struct AccountStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
    min_password_len: usize,
}

impl AccountStore {
    /// Creates an empty store enforcing `min_password_len`.
    pub fn new(min_password_len: usize) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HashMap::new())),
            min_password_len,
        }
    }

    /// Minimum accepted password length.
    pub fn min_password_len(&self) -> usize {
        self.min_password_len
    }

    #[cfg(test)]
    fn contains(&self, email: &str) -> bool {
        normalize_email(email)
            .map(|email| self.inner.borrow().contains_key(&email))
            .unwrap_or(false)
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] for invalid input or an already registered email.
    pub fn sign_up(&self, email: &str, password: &str, confirm: &str) -> Result<Account, AuthError> {
        let email = normalize_email(email)?;
        if password.chars().count() < self.min_password_len {
            return Err(AuthError::PasswordTooShort {
                min: self.min_password_len,
            });
        }
        if password != confirm {
            return Err(AuthError::PasswordMismatch);
        }

        let mut accounts = self.inner.borrow_mut();
        if accounts.contains_key(&email) {
            return Err(AuthError::AccountExists(email));
        }
        accounts.insert(email.clone(), password.to_string());
        Ok(Account { email })
    }

    /// Checks credentials for an existing account.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] for invalid input, an unknown email, or a wrong password.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<Account, AuthError> {
        let email = normalize_email(email)?;
        let accounts = self.inner.borrow();
        match accounts.get(&email) {
            None => Err(AuthError::UnknownAccount(email)),
            Some(stored) if stored != password => Err(AuthError::WrongPassword),
            Some(_) => Ok(Account { email }),
        }
    }
}

/// Trims and lower-cases an email, rejecting obviously malformed input.
///
/// # Errors
///
/// Returns [`AuthError::MissingEmail`] or [`AuthError::InvalidEmail`].
pub fn normalize_email(raw: &str) -> Result<String, AuthError> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err(AuthError::MissingEmail);
    }
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(email)
    } else {
        Err(AuthError::InvalidEmail(email))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn store() -> AccountStore {
        AccountStore::new(8)
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(
            normalize_email("  Ada@Example.COM "),
            Ok("ada@example.com".to_string())
        );
    }

    #[test]
    fn rejects_malformed_emails() {
        assert_eq!(normalize_email("   "), Err(AuthError::MissingEmail));
        for raw in ["ada", "@example.com", "ada@example", "ada@@example.com", "a da@x.io"] {
            assert!(
                matches!(normalize_email(raw), Err(AuthError::InvalidEmail(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn sign_up_then_sign_in_round_trip() {
        let store = store();
        let account = store
            .sign_up("ada@example.com", "correct horse", "correct horse")
            .expect("sign up");
        assert_eq!(account.email, "ada@example.com");
        assert!(store.contains("ADA@example.com"));

        let signed_in = store
            .sign_in(" ada@example.com", "correct horse")
            .expect("sign in");
        assert_eq!(signed_in, account);
    }

    #[test]
    fn sign_up_enforces_password_policy() {
        let store = store();
        assert_eq!(
            store.sign_up("ada@example.com", "short", "short"),
            Err(AuthError::PasswordTooShort { min: 8 })
        );
        assert_eq!(
            store.sign_up("ada@example.com", "long enough", "long enougH"),
            Err(AuthError::PasswordMismatch)
        );
        assert!(!store.contains("ada@example.com"));
    }

    #[test]
    fn duplicate_sign_up_is_rejected() {
        let store = store();
        store
            .sign_up("ada@example.com", "password1", "password1")
            .expect("first sign up");
        assert_eq!(
            store.sign_up("Ada@example.com", "password2", "password2"),
            Err(AuthError::AccountExists("ada@example.com".to_string()))
        );
    }

    #[test]
    fn sign_in_distinguishes_unknown_and_wrong_password() {
        let store = store();
        assert_eq!(
            store.sign_in("ada@example.com", "password1"),
            Err(AuthError::UnknownAccount("ada@example.com".to_string()))
        );
        store
            .sign_up("ada@example.com", "password1", "password1")
            .expect("sign up");
        assert_eq!(
            store.sign_in("ada@example.com", "password2"),
            Err(AuthError::WrongPassword)
        );
    }

    #[test]
    fn clones_share_accounts() {
        let store = store();
        let clone = store.clone();
        store
            .sign_up("ada@example.com", "password1", "password1")
            .expect("sign up");
        assert!(clone.contains("ada@example.com"));
    }
}
