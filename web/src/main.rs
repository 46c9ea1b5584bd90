use dioxus::prelude::*;

use ui::components::{register_links, LinkBuilder, Shell};
use ui::routes::{path_from_segments, RouteOutlet};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/:..segments")]
    Page { segments: Vec<String> },
}

fn router_link(class: &str, uri: &str, body: Element) -> Element {
    rsx!(Link {
        class: "{class}",
        to: uri.to_string(),
        {body}
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_links(LinkBuilder { link: router_link });
    }

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: ui::HEADER_CSS }

        Router::<Route> {}
    }
}

/// Wraps the shared `Shell` so the router can use it as the layout of the
/// web-specific `Route` enum.
#[component]
fn WebShell() -> Element {
    rsx! {
        Shell {
            Outlet::<Route> {}
        }
    }
}

/// Every path lands here; the shared route table decides what renders.
#[component]
fn Page(segments: Vec<String>) -> Element {
    let path = path_from_segments(&segments);
    rsx! {
        RouteOutlet { path }
    }
}
