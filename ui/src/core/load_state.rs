//! Load flag owned by the categories view.

use crate::t;

/// `is_loaded` starts `false` and is written once, when the request settles.
///
/// The flag reads inverted: a failed request sets it, a successful one leaves
/// it cleared. The rendered heading follows the flag, so a failure shows the
/// loading text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewLoadState {
    pub is_loaded: bool,
}

impl ViewLoadState {
    pub const fn new() -> Self {
        Self { is_loaded: false }
    }

    pub fn settle<T, E>(&mut self, outcome: &Result<T, E>) {
        self.is_loaded = outcome.is_err();
    }

    /// Expects the bundles to be loaded already (see [`crate::i18n::init`]).
    pub fn heading(&self) -> String {
        if self.is_loaded {
            t!("categories-loading")
        } else {
            t!("categories-title")
        }
    }
}
