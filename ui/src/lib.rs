//! Shared UI crate for the shop front end: header shell, route table and views.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod routes;
pub mod views;

pub mod components {
    pub mod header;
    pub use header::{register_links, Header, LinkBuilder, Shell};
}

#[cfg(test)]
pub(crate) mod testing;

pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
pub const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
