#![allow(clippy::clone_on_copy)]

use super::*;

const OVERLAY_CLASS: &str =
    "fixed inset-0 z-50 flex items-center justify-center bg-black bg-opacity-50";
const DIALOG_CLASS: &str = "bg-white rounded-lg shadow-lg max-w-lg w-full";
const HEADER_CLASS: &str = "flex justify-between items-center border-b p-4";
const DISMISS_CLASS: &str = "text-gray-500 hover:text-gray-700 text-2xl leading-none";
const FOOTER_CLASS: &str = "flex justify-end border-t p-4";

/// Shared by both close controls: one activation, one `on_close` call.
fn dismiss(on_close: &Callback<()>) {
    on_close.call(());
}

#[component]
/// Dialog rendered over the page while `is_open` is true.
///
/// Visibility belongs to the caller; the modal renders nothing when closed and keeps
/// no state of its own. The header close control and the footer button both invoke
/// `on_close` once per activation.
pub fn Modal(
    #[prop(into)] is_open: MaybeSignal<bool>,
    on_close: Callback<()>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(default = "Close")] close_label: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    move || {
        if !is_open.get() {
            return None;
        }
        let title = title.clone();
        let children = children.clone();
        let header_close = on_close.clone();
        let footer_close = on_close.clone();
        Some(view! {
            <div
                class=OVERLAY_CLASS
                data-ui-primitive="true"
                data-ui-kind="modal"
            >
                <div class=DIALOG_CLASS role="dialog" data-ui-slot="dialog">
                    <div class=HEADER_CLASS data-ui-slot="header">
                        <h3 class="text-lg font-medium" data-ui-slot="title">
                            {move || title.get()}
                        </h3>
                        <button
                            type="button"
                            class=DISMISS_CLASS
                            data-ui-slot="close"
                            on:click=move |_| dismiss(&header_close)
                        >
                            "×"
                        </button>
                    </div>
                    <div class="p-4" data-ui-slot="body">
                        {children()}
                    </div>
                    <div class=FOOTER_CLASS data-ui-slot="footer">
                        <Button
                            variant=ButtonVariant::Secondary
                            on_click=Callback::new(move |_| dismiss(&footer_close))
                            attr:data-ui-slot="close"
                        >
                            {close_label}
                        </Button>
                    </div>
                </div>
            </div>
        })
    }
}
