use super::*;

#[component]
/// Content card with shadow and padding.
pub fn Card(
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=CARD.resolve(None, None, class_name.as_deref())
            data-ui-primitive="true"
            data-ui-kind="card"
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Inline notice tinted by severity.
pub fn Alert(
    #[prop(default = AlertVariant::Info)] variant: AlertVariant,
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=ALERT.resolve(Some(variant), None, class_name.as_deref())
            data-ui-primitive="true"
            data-ui-kind="alert"
            data-ui-variant=variant.key()
            {..attrs}
        >
            {children()}
        </div>
    }
}
