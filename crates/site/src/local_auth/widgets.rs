//! Credential-collection widgets rendered by the auth pages.

use auth_contract::AuthPage;
use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::A;
use ui_kit::{Alert, AlertVariant, Button, Card, Input};

use super::{use_local_auth, AuthError};

#[component]
fn CredentialField(
    label: &'static str,
    name: &'static str,
    input_type: &'static str,
    autocomplete: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="block mb-4" data-ui-slot="field">
            <span class="block text-sm font-medium text-gray-700 mb-1">{label}</span>
            <Input
                input_type=input_type
                value=value
                on_input=Callback::new(move |ev| value.set(event_target_value(&ev)))
                attr:name=name
                attr:autocomplete=autocomplete
                attr:required=true
            />
        </label>
    }
}

#[component]
fn FormError(error: RwSignal<Option<AuthError>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! {
                <Alert variant=AlertVariant::Error class_name="mb-4">
                    {err.to_string()}
                </Alert>
            }
        })
    }
}

fn report(error: RwSignal<Option<AuthError>>, action: &str, result: Result<(), AuthError>) {
    match result {
        Ok(()) => error.set(None),
        Err(err) => {
            logging::warn!("local auth {action} rejected: {err}");
            error.set(Some(err));
        }
    }
}

#[component]
/// Email and password form for existing accounts.
pub fn SignInForm() -> impl IntoView {
    let auth = use_local_auth();
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<AuthError>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let result = auth
            .sign_in(&email.get_untracked(), &password.get_untracked())
            .map(|_| ());
        report(error, "sign-in", result);
    };

    view! {
        <Card class_name="max-w-md w-full">
            <form on:submit=on_submit data-ui-slot="sign-in-form">
                <FormError error=error />
                <CredentialField
                    label="Email"
                    name="email"
                    input_type="email"
                    autocomplete="email"
                    value=email
                />
                <CredentialField
                    label="Password"
                    name="password"
                    input_type="password"
                    autocomplete="current-password"
                    value=password
                />
                <Button button_type="submit" class_name="w-full">
                    "Sign in"
                </Button>
            </form>
            <p class="mt-4 text-sm text-gray-600">
                "No account yet? "
                <A href=AuthPage::SignUp.route() class="text-blue-600 hover:underline">
                    "Create one"
                </A>
            </p>
        </Card>
    }
}

#[component]
/// Registration form; a successful sign-up also signs the account in.
pub fn SignUpForm() -> impl IntoView {
    let auth = use_local_auth();
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm = create_rw_signal(String::new());
    let error = create_rw_signal(None::<AuthError>);
    let min_password_len = auth.min_password_len();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let result = auth
            .sign_up(
                &email.get_untracked(),
                &password.get_untracked(),
                &confirm.get_untracked(),
            )
            .map(|_| ());
        report(error, "sign-up", result);
    };

    view! {
        <Card class_name="max-w-md w-full">
            <form on:submit=on_submit data-ui-slot="sign-up-form">
                <FormError error=error />
                <CredentialField
                    label="Email"
                    name="email"
                    input_type="email"
                    autocomplete="email"
                    value=email
                />
                <CredentialField
                    label="Password"
                    name="password"
                    input_type="password"
                    autocomplete="new-password"
                    value=password
                />
                <CredentialField
                    label="Confirm password"
                    name="confirm"
                    input_type="password"
                    autocomplete="new-password"
                    value=confirm
                />
                <p class="mb-4 text-xs text-gray-500">
                    {format!("At least {min_password_len} characters.")}
                </p>
                <Button button_type="submit" class_name="w-full">
                    "Create account"
                </Button>
            </form>
            <p class="mt-4 text-sm text-gray-600">
                "Already registered? "
                <A href=AuthPage::SignIn.route() class="text-blue-600 hover:underline">
                    "Sign in"
                </A>
            </p>
        </Card>
    }
}
