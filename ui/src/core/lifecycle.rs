//! Mount-scoped cancellation for async work started by a view.
//!
//! A view creates a [`MountToken`] when it mounts and cancels it from its drop
//! hook. Work spawned during the mount goes through [`settle_once`], which only
//! hands the result back while the token is live, so a response that arrives
//! after teardown never touches the view's state.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct MountToken {
    cancelled: Rc<Cell<bool>>,
}

impl MountToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_live(&self) -> bool {
        !self.cancelled.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Applied,
    Discarded,
}

/// Await `request` once and pass its output to `apply` if the mount is still
/// live. A token cancelled before the call starts skips the request entirely.
pub async fn settle_once<T, F, A>(token: &MountToken, request: F, apply: A) -> Settled
where
    F: Future<Output = T>,
    A: FnOnce(T),
{
    if !token.is_live() {
        tracing::debug!("mount cancelled before request started");
        return Settled::Discarded;
    }

    let outcome = request.await;

    if token.is_live() {
        apply(outcome);
        Settled::Applied
    } else {
        tracing::debug!("discarding response for unmounted view");
        Settled::Discarded
    }
}
