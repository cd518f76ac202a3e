use auth_contract::AuthPage;
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, A};
use ui_kit::{Alert, AlertVariant, Button, ButtonVariant, Card, Modal};

use crate::local_auth::use_local_auth;

#[component]
/// Landing page for signed-in accounts.
pub fn DashboardPage() -> impl IntoView {
    let auth = use_local_auth();
    let navigate = use_navigate();
    let confirm_open = create_rw_signal(false);

    let open_confirm = Callback::new(move |_: ev::MouseEvent| confirm_open.set(true));
    let close_confirm = Callback::new(move |_: ()| confirm_open.set(false));
    let confirm_sign_out = Callback::new(move |_: ev::MouseEvent| {
        confirm_open.set(false);
        auth.sign_out();
        navigate(AuthPage::SignIn.route(), NavigateOptions::default());
    });

    view! {
        <section class="max-w-2xl mx-auto py-12 space-y-6" data-page="dashboard">
            <h1 class="text-2xl font-bold">"Dashboard"</h1>
            {move || match auth.account() {
                Some(account) => view! {
                    <Card>
                        <p class="mb-4">"Signed in as " <strong>{account.email}</strong></p>
                        <Button variant=ButtonVariant::Destructive on_click=open_confirm>
                            "Sign out"
                        </Button>
                    </Card>
                }
                .into_view(),
                None => view! {
                    <Alert variant=AlertVariant::Warning>
                        "You are not signed in. "
                        <A href=AuthPage::SignIn.route() class="underline">"Sign in"</A>
                    </Alert>
                }
                .into_view(),
            }}
            <Modal is_open=confirm_open on_close=close_confirm title="Sign out?" close_label="Cancel">
                <p class="mb-4">"You will need to sign in again to reach the dashboard."</p>
                <Button variant=ButtonVariant::Destructive on_click=confirm_sign_out>
                    "Sign out"
                </Button>
            </Modal>
        </section>
    }
}
