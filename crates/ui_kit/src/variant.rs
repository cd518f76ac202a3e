//! Variant and size resolution for styled primitives.
//!
//! Each primitive declares one [`Recipe`]: a base token that is always present, a
//! variant table, and a size table. Resolution composes base, variant, size, and the
//! caller's override in that order. Unknown keys never fail; they resolve to an
//! absent token and the composer drops them.

use crate::class::compose;

/// Closed set of keys a primitive accepts for one styling axis.
pub trait StyleKey: Copy + Eq + 'static {
    /// Every declared key, in declaration order.
    const ALL: &'static [Self];
    /// Key used when the caller supplies none.
    const DEFAULT: Option<Self>;

    /// Stable string form used in markup and configuration.
    fn key(self) -> &'static str;

    /// Parses a string key. Unrecognized keys return `None`.
    fn from_key(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.key() == raw)
    }
}

/// Uninhabited key for primitives without a variant or size axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoKey {}

impl StyleKey for NoKey {
    const ALL: &'static [Self] = &[];
    const DEFAULT: Option<Self> = None;

    fn key(self) -> &'static str {
        match self {}
    }
}

/// Static styling table for one primitive.
#[derive(Debug, Clone, Copy)]
pub struct Recipe<V: 'static, S: 'static = NoKey> {
    base: &'static str,
    variants: &'static [(V, &'static str)],
    sizes: &'static [(S, &'static str)],
}

impl<V: StyleKey> Recipe<V, NoKey> {
    /// Recipe with a variant axis and no sizes.
    pub const fn with_variants(base: &'static str, variants: &'static [(V, &'static str)]) -> Self {
        Self {
            base,
            variants,
            sizes: &[],
        }
    }
}

impl Recipe<NoKey, NoKey> {
    /// Recipe carrying only base tokens.
    pub const fn base_only(base: &'static str) -> Self {
        Self {
            base,
            variants: &[],
            sizes: &[],
        }
    }
}

impl<V: StyleKey, S: StyleKey> Recipe<V, S> {
    /// Recipe with both a variant and a size axis.
    pub const fn new(
        base: &'static str,
        variants: &'static [(V, &'static str)],
        sizes: &'static [(S, &'static str)],
    ) -> Self {
        Self {
            base,
            variants,
            sizes,
        }
    }

    /// Base tokens, always present in the resolved class.
    pub fn base(&self) -> &'static str {
        self.base
    }

    /// Token for `variant`, or `None` when the table has no entry for it.
    pub fn variant_token(&self, variant: V) -> Option<&'static str> {
        lookup(self.variants, variant)
    }

    /// Token for `size`, or `None` when the table has no entry for it.
    pub fn size_token(&self, size: S) -> Option<&'static str> {
        lookup(self.sizes, size)
    }

    /// Resolves typed keys. `None` falls back to the key type's default.
    pub fn resolve(&self, variant: Option<V>, size: Option<S>, class_name: Option<&str>) -> String {
        let variant = variant.or(V::DEFAULT).and_then(|key| self.variant_token(key));
        let size = size.or(S::DEFAULT).and_then(|key| self.size_token(key));
        compose([Some(self.base), variant, size, class_name])
    }

    /// Resolves string keys.
    ///
    /// A missing key falls back to the default; a key that names nothing in the
    /// table contributes no token.
    pub fn resolve_keys(
        &self,
        variant: Option<&str>,
        size: Option<&str>,
        class_name: Option<&str>,
    ) -> String {
        let variant = match variant {
            Some(raw) => V::from_key(raw).and_then(|key| self.variant_token(key)),
            None => V::DEFAULT.and_then(|key| self.variant_token(key)),
        };
        let size = match size {
            Some(raw) => S::from_key(raw).and_then(|key| self.size_token(key)),
            None => S::DEFAULT.and_then(|key| self.size_token(key)),
        };
        compose([Some(self.base), variant, size, class_name])
    }
}

fn lookup<K: StyleKey>(table: &'static [(K, &'static str)], key: K) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, token)| *token)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tone {
        Calm,
        Loud,
        Unlisted,
    }

    impl StyleKey for Tone {
        const ALL: &'static [Self] = &[Self::Calm, Self::Loud, Self::Unlisted];
        const DEFAULT: Option<Self> = Some(Self::Calm);

        fn key(self) -> &'static str {
            match self {
                Self::Calm => "calm",
                Self::Loud => "loud",
                Self::Unlisted => "unlisted",
            }
        }
    }

    const TONED: Recipe<Tone> =
        Recipe::with_variants("base", &[(Tone::Calm, "calm-x"), (Tone::Loud, "loud-x")]);

    #[test]
    fn from_key_rejects_unknown_keys() {
        assert_eq!(Tone::from_key("loud"), Some(Tone::Loud));
        assert_eq!(Tone::from_key("LOUD"), None);
        assert_eq!(NoKey::from_key("anything"), None);
    }

    #[test]
    fn missing_variant_uses_default() {
        assert_eq!(TONED.resolve(None, None, None), "base calm-x");
        assert_eq!(TONED.resolve_keys(None, None, None), "base calm-x");
    }

    #[test]
    fn unknown_string_key_keeps_base_only() {
        assert_eq!(TONED.resolve_keys(Some("shouting"), None, Some("extra")), "base extra");
    }

    #[test]
    fn key_without_table_entry_is_absent() {
        assert_eq!(TONED.variant_token(Tone::Unlisted), None);
        assert_eq!(TONED.resolve(Some(Tone::Unlisted), None, None), "base");
    }

    #[test]
    fn base_only_recipe_appends_override() {
        const PLAIN: Recipe<NoKey> = Recipe::base_only("plain");
        assert_eq!(PLAIN.resolve(None, None, Some("wide")), "plain wide");
        assert_eq!(PLAIN.resolve(None, None, Some("")), "plain");
    }
}
