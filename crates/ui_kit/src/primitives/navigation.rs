use super::*;

use crate::class::compose;

const NAVBAR_CLASS: &str = "bg-blue-600 text-white p-4";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// One navigation entry.
pub struct NavLink {
    /// Link target.
    pub href: String,
    /// Visible text.
    pub label: String,
}

impl NavLink {
    /// Builds a link descriptor.
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Pairs every link with its position. Positions are the render identity, so equal
/// descriptors stay separate entries.
pub fn indexed_links(links: &[NavLink]) -> Vec<(usize, NavLink)> {
    links.iter().cloned().enumerate().collect()
}

#[component]
/// Top navigation bar: title, ordered links, and a static sign-in button.
pub fn Navbar(
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(optional, into)] links: MaybeSignal<Vec<NavLink>>,
    #[prop(default = "Sign in")] sign_in_label: &'static str,
    #[prop(optional, into)] class_name: Option<String>,
) -> impl IntoView {
    view! {
        <nav
            class=compose([Some(NAVBAR_CLASS), class_name.as_deref()])
            data-ui-primitive="true"
            data-ui-kind="navbar"
        >
            <div class="container mx-auto flex justify-between items-center">
                <div class="text-xl font-bold" data-ui-slot="title">
                    {move || title.get()}
                </div>
                <div class="space-x-4" data-ui-slot="links">
                    <For
                        each=move || links.with(|links| indexed_links(links))
                        key=|(index, link)| (*index, link.clone())
                        children=|(index, link)| {
                            view! {
                                <a href=link.href class="hover:underline" data-ui-index=index>
                                    {link.label}
                                </a>
                            }
                        }
                    />
                </div>
                <div data-ui-slot="actions">
                    <Button variant=ButtonVariant::Secondary>{sign_in_label}</Button>
                </div>
            </div>
        </nav>
    }
}
