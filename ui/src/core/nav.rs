//! Static navigation configuration for the header shell.

use crate::t;

pub const HOME_URI: &str = "/";
pub const LOGIN_URI: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub title: String,
    pub uri: String,
}

impl NavItem {
    pub fn new(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            uri: uri.into(),
        }
    }
}

/// Links shown between the home and login icons, in display order.
pub fn default_items() -> Vec<NavItem> {
    vec![
        NavItem::new(t!("nav-categories"), "/categories"),
        NavItem::new(t!("nav-products"), "/products"),
        NavItem::new(t!("nav-users"), "/users"),
    ]
}
