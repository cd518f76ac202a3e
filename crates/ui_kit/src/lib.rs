//! Styled UI primitives built on a class-name composer.
//!
//! Every primitive resolves its class string from a static [`Recipe`]: base tokens,
//! then the variant token, then the size token, then the caller's `class_name`
//! override. Unknown keys degrade to an absent token instead of failing. Rendered
//! elements also carry the `data-ui-*` DOM contract (`data-ui-kind`,
//! `data-ui-variant`, `data-ui-size`) used by stylesheets and tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class;
mod primitives;
mod variant;

pub use class::{compose, ClassToken};
pub use primitives::{
    indexed_links, Alert, AlertVariant, Button, ButtonSize, ButtonVariant, Card, Input, Modal,
    NavLink, Navbar, ALERT, BUTTON, CARD, INPUT,
};
pub use variant::{NoKey, Recipe, StyleKey};

/// Convenience imports for crates rendering the primitive set.
pub mod prelude {
    pub use crate::{
        classes, compose, Alert, AlertVariant, Button, ButtonSize, ButtonVariant, Card, Input,
        Modal, NavLink, Navbar, StyleKey,
    };
}
