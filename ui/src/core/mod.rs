//! Platform-agnostic state and data plumbing behind the views.

pub mod feed;
pub mod lifecycle;
pub mod load_state;
pub mod nav;
