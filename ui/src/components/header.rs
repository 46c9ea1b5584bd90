use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::core::nav::{self, NavItem, HOME_URI, LOGIN_URI};
use crate::t;

/// Platforms register a `LinkBuilder` so header links go through their
/// router (`ui` does not know each platform's `Route` enum).
///
/// ```ignore
/// fn router_link(class: &str, uri: &str, body: Element) -> Element {
///     rsx!(Link { class: "{class}", to: uri.to_string(), {body} })
/// }
/// ui::components::register_links(LinkBuilder { link: router_link });
/// ```
///
/// Without a registered builder the header falls back to plain anchors.
pub struct LinkBuilder {
    pub link: fn(class: &str, uri: &str, body: Element) -> Element,
}

static LINK_BUILDER: OnceCell<LinkBuilder> = OnceCell::new();

pub fn register_links(builder: LinkBuilder) {
    let _ = LINK_BUILDER.set(builder);
}

fn build_link(class: &str, uri: &str, body: Element) -> Element {
    match LINK_BUILDER.get() {
        Some(builder) => (builder.link)(class, uri, body),
        None => rsx! {
            a { class: "{class}", href: "{uri}", {body} }
        },
    }
}

/// Header bar: home icon, one link per item in order, login icon.
#[component]
pub fn Header(items: Vec<NavItem>) -> Element {
    crate::i18n::init();

    let home_label = t!("nav-home");
    let login_label = t!("nav-login");
    let nav_label = t!("nav-label");

    let home = build_link(
        "header__icon-link",
        HOME_URI,
        rsx! {
            span {
                class: "header__icon header__icon--home",
                role: "img",
                aria_label: "{home_label}",
            }
        },
    );
    let login = build_link(
        "header__icon-link",
        LOGIN_URI,
        rsx! {
            span {
                class: "header__icon header__icon--login",
                role: "img",
                aria_label: "{login_label}",
            }
        },
    );

    rsx! {
        header { class: "header",
            nav { class: "header__links", aria_label: "{nav_label}",
                {home}
                for item in items.iter() {
                    {build_link("header__link", &item.uri, rsx! { "{item.title}" })}
                }
                {login}
            }
        }
    }
}

/// Page chrome shared by every route: the header over the routed content.
#[component]
pub fn Shell(children: Element) -> Element {
    crate::i18n::init();
    // Built once per session; the list never changes after start-up.
    let items = use_hook(nav::default_items);

    rsx! {
        Header { items }
        main { class: "shell__content", {children} }
    }
}
