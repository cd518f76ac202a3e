pub mod config;
pub mod local_auth;
mod pages;
mod web_app;

pub use pages::{DashboardPage, HomePage, NotFoundPage, SignInPage, SignUpPage};
pub use web_app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
