//! Routed pages.

mod auth;
mod dashboard;
mod home;

pub use auth::{SignInPage, SignUpPage};
pub use dashboard::DashboardPage;
pub use home::{HomePage, NotFoundPage};
