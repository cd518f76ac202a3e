use auth_contract::AuthPage;
use leptos::*;
use leptos_router::{use_location, A};
use ui_kit::{Alert, AlertVariant, Card, Navbar, BUTTON};

use crate::config::{use_site_config, CallToAction};

fn cta_class(cta: &CallToAction) -> String {
    BUTTON.resolve_keys(cta.variant.as_deref(), None, Some("no-underline"))
}

#[component]
/// Public landing page.
pub fn HomePage() -> impl IntoView {
    let config = use_site_config();
    let links = config.nav_links();
    let cta = config.cta.clone();

    view! {
        <Navbar title=config.title.clone() links=links />
        <section class="max-w-2xl mx-auto py-12 space-y-6" data-page="home">
            <Card>
                <h1 class="text-2xl font-bold mb-2">{config.title}</h1>
                <p class="text-gray-600 mb-6">{config.description}</p>
                {cta.map(|cta| {
                    view! {
                        <A href=cta.href.clone() class=cta_class(&cta)>
                            {cta.label}
                        </A>
                    }
                })}
            </Card>
            <Alert variant=AlertVariant::Info>
                "Already have an account? "
                <A href=AuthPage::SignIn.route() class="underline">"Sign in"</A>
            </Alert>
        </section>
    }
}

#[component]
/// Fallback for unmatched routes.
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    view! {
        <section class="max-w-md mx-auto py-12" data-page="not-found">
            <Alert variant=AlertVariant::Warning>
                {move || format!("Nothing lives at {}.", location.pathname.get())}
                " "
                <A href="/" class="underline">"Go home"</A>
            </Alert>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn cta(variant: Option<&str>) -> CallToAction {
        CallToAction {
            label: "Go".to_string(),
            href: "/go".to_string(),
            variant: variant.map(str::to_string),
        }
    }

    #[test]
    fn cta_without_variant_uses_button_default() {
        assert_eq!(
            cta_class(&cta(None)),
            BUTTON.resolve(None, None, Some("no-underline"))
        );
    }

    #[test]
    fn cta_with_unknown_variant_keeps_base_size_and_override() {
        let class = cta_class(&cta(Some("neon")));
        assert_eq!(
            class,
            format!("{} px-4 py-2 text-base no-underline", BUTTON.base())
        );
    }
}
