#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{register_links, LinkBuilder, Shell};
use ui::routes::{path_from_segments, RouteOutlet};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/:..segments")]
    Page { segments: Vec<String> },
}

// Shared stylesheets, embedded so packaged builds need no asset directory.
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/header.css"
));

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Shopfront – v{}", env!("CARGO_PKG_VERSION"))),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn router_link(class: &str, uri: &str, body: Element) -> Element {
    rsx!(Link { class: "{class}", to: uri.to_string(), {body} })
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_links(LinkBuilder { link: router_link });

    rsx! {
        document::Style { "{THEME_CSS_INLINE}" }
        document::Style { "{HEADER_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Desktop layout around the shared `Shell`.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        Shell {
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Page(segments: Vec<String>) -> Element {
    let path = path_from_segments(&segments);
    rsx! {
        RouteOutlet { path }
    }
}
