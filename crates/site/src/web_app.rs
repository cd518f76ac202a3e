use auth_contract::AuthPage;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::config::{provide_site_config, SiteConfig};
use crate::local_auth::LocalAuthProvider;
use crate::pages::{DashboardPage, HomePage, NotFoundPage, SignInPage, SignUpPage};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let config = SiteConfig::load_or_default();
    provide_site_config(config.clone());

    view! {
        <Title text=config.title.clone() />
        <Meta name="description" content=config.description.clone() />

        <LocalAuthProvider min_password_len=config.min_password_len>
            <Router>
                <main class="site-root">
                    <Routes>
                        <Route path="" view=HomePage />
                        <Route path=AuthPage::SignIn.route() view=SignInPage />
                        <Route path=AuthPage::SignUp.route() view=SignUpPage />
                        <Route path=config.redirect_path.clone() view=DashboardPage />
                        <Route path="/*any" view=NotFoundPage />
                    </Routes>
                </main>
            </Router>
        </LocalAuthProvider>
    }
}
