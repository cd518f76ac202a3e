use super::*;

#[component]
/// Styled button with variant and size tokens.
///
/// Attributes the component does not name (`id`, `name`, `aria-*`, `form`, ...) are
/// forwarded verbatim to the `<button>` element.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let class = BUTTON.resolve(Some(variant), Some(size), class_name.as_deref());
    view! {
        <button
            type=button_type.unwrap_or("button")
            class=class
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.key()
            data-ui-size=size.key()
            on:click=move |ev| emit_click(on_click.as_ref(), ev)
            {..attrs}
        >
            {children()}
        </button>
    }
}

#[component]
/// Styled text input.
pub fn Input(
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<ev::Event>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let class = INPUT.resolve(None, None, class_name.as_deref());
    view! {
        <input
            class=class
            type=input_type.unwrap_or("text")
            placeholder=placeholder
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="input"
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
            {..attrs}
        />
    }
}
