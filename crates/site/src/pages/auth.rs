//! Sign-in and sign-up pages guarded against already signed-in visitors.

use auth_contract::{use_auth, AuthPage, AuthStatus, Navigator, RedirectGuard};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

use crate::config::use_site_config;

/// Mounts `guard` and feeds it every `status` change.
///
/// The returned signal says whether the credential widget may render. The render
/// effect runs once on creation, so the first decision precedes the first widget render.
fn watch_guard<N>(
    mut guard: RedirectGuard,
    status: impl Fn() -> AuthStatus + 'static,
    navigator: N,
) -> (StoredValue<RedirectGuard>, ReadSignal<bool>)
where
    N: Navigator + 'static,
{
    guard.mount();
    let guard = store_value(guard);
    let (shows_widget, set_shows_widget) = create_signal(true);

    create_render_effect(move |_| {
        let observed = status();
        let visible = guard
            .try_update_value(|guard| {
                guard.observe(observed, &navigator);
                guard.shows_widget()
            })
            .unwrap_or(false);
        set_shows_widget.set(visible);
    });

    (guard, shows_widget)
}

#[component]
fn GuardedAuthPage(page: AuthPage) -> impl IntoView {
    let auth = use_auth();
    let target = use_site_config().redirect_path;
    let navigate = use_navigate();
    logging::log!("auth page={} loaded", page.token());

    let observed = auth.clone();
    let (guard, shows_widget) = watch_guard(
        RedirectGuard::new(page, target),
        move || observed.current_user(),
        move |path: &str| navigate(path, NavigateOptions::default()),
    );

    on_cleanup(move || {
        if let Some(guard) = guard.try_get_value() {
            guard.unmount();
        }
    });

    view! {
        <section class="max-w-md mx-auto py-12" data-auth-page=page.token()>
            <h1 class="text-2xl font-bold mb-6">{page.heading()}</h1>
            {move || shows_widget.get().then(|| auth.widget_for(page))}
        </section>
    }
}

#[component]
/// Sign-in page; signed-in visitors are redirected to the configured path.
pub fn SignInPage() -> impl IntoView {
    view! { <GuardedAuthPage page=AuthPage::SignIn /> }
}

#[component]
/// Sign-up page; signed-in visitors are redirected to the configured path.
pub fn SignUpPage() -> impl IntoView {
    view! { <GuardedAuthPage page=AuthPage::SignUp /> }
}
