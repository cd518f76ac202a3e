//! Class-name composition shared by every primitive.
//!
//! Tokens are opaque: the composer only cares whether a token is present. An empty
//! string or `None` is absent and dropped; everything else is copied verbatim, in
//! order, separated by a single space. Later tokens win specificity ties in the
//! stylesheet, so callers place overrides last.

use std::borrow::Cow;

/// A value that may contribute one class token to a composed class string.
pub trait ClassToken {
    /// Returns the token text, or `None` when the value is absent.
    fn as_token(&self) -> Option<&str>;
}

impl ClassToken for str {
    fn as_token(&self) -> Option<&str> {
        (!self.is_empty()).then_some(self)
    }
}

impl ClassToken for String {
    fn as_token(&self) -> Option<&str> {
        self.as_str().as_token()
    }
}

impl ClassToken for Cow<'_, str> {
    fn as_token(&self) -> Option<&str> {
        self.as_ref().as_token()
    }
}

impl<T: ClassToken + ?Sized> ClassToken for &T {
    fn as_token(&self) -> Option<&str> {
        (**self).as_token()
    }
}

impl<T: ClassToken> ClassToken for Option<T> {
    fn as_token(&self) -> Option<&str> {
        self.as_ref().and_then(ClassToken::as_token)
    }
}

/// Joins the present tokens with a single space, preserving input order.
///
/// No deduplication, trimming, or validation happens here.
pub fn compose<I, T>(tokens: I) -> String
where
    I: IntoIterator<Item = T>,
    T: ClassToken,
{
    let mut out = String::new();
    for token in tokens {
        if let Some(token) = token.as_token() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(token);
        }
    }
    out
}

/// Composes a heterogeneous list of [`ClassToken`] values.
///
/// ```
/// use ui_kit::classes;
///
/// let extra: Option<String> = None;
/// assert_eq!(classes!("ui-card", "", extra, true.then_some("is-active")), "ui-card is-active");
/// ```
#[macro_export]
macro_rules! classes {
    () => {
        ::std::string::String::new()
    };
    ($($token:expr),+ $(,)?) => {
        $crate::compose([$($crate::ClassToken::as_token(&$token)),+])
    };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty_input_composes_to_empty_string() {
        assert_eq!(compose(Vec::<&str>::new()), "");
        assert_eq!(classes!(), "");
    }

    #[test]
    fn absent_tokens_are_dropped_without_extra_spaces() {
        let tokens = [Some("a"), None, Some(""), Some("b"), None];
        assert_eq!(compose(tokens), "a b");
    }

    #[test]
    fn tokens_are_not_deduplicated_or_trimmed() {
        assert_eq!(compose(["p-4", "p-4", " raw "]), "p-4 p-4  raw ");
    }

    #[test]
    fn macro_accepts_mixed_token_types() {
        let owned = String::from("owned");
        let missing: Option<&str> = None;
        let cow: Cow<'_, str> = Cow::Borrowed("cow");
        assert_eq!(
            classes!("base", owned, missing, cow, false.then_some("never")),
            "base owned cow"
        );
    }

    fn token() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9:-]{0,11}"
    }

    fn maybe_token() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            token().prop_map(Some),
            Just(None),
            Just(Some(String::new())),
        ]
    }

    proptest! {
        #[test]
        fn composed_string_has_single_separators(tokens in prop::collection::vec(maybe_token(), 0..12)) {
            let out = compose(&tokens);
            prop_assert!(!out.starts_with(' '));
            prop_assert!(!out.ends_with(' '));
            prop_assert!(!out.contains("  "));
        }

        #[test]
        fn absent_tokens_do_not_change_output(tokens in prop::collection::vec(maybe_token(), 0..12)) {
            let present: Vec<String> = tokens
                .iter()
                .filter_map(|token| token.clone().filter(|value| !value.is_empty()))
                .collect();
            prop_assert_eq!(compose(&tokens), compose(&present));
            prop_assert_eq!(compose(&present), present.join(" "));
        }
    }
}
