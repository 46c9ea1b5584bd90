//! Headless rendering helpers for component tests.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use api::{ApiError, Listing};
use dioxus::prelude::*;
use futures::future::{self, LocalBoxFuture};
use serde_json::json;

use crate::core::feed::{CategoryFeed, CategorySource};
use crate::routes::RouteOutlet;

const SHORT_WAIT: Duration = Duration::from_millis(250);

/// Canned behaviour for the categories request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Succeed,
    Fail,
    Hang,
}

impl CategorySource for Script {
    fn fetch_listing(&self) -> LocalBoxFuture<'_, Result<Listing, ApiError>> {
        match self {
            Script::Succeed => Box::pin(future::ready(Ok(Listing {
                status: 200,
                body: json!({ "success": true, "data": [], "msg": null }),
            }))),
            Script::Fail => Box::pin(future::ready(Err(ApiError::Status {
                status: 503,
                message: "Service Unavailable".to_string(),
            }))),
            Script::Hang => Box::pin(future::pending()),
        }
    }
}

/// How often a [`Counted`] source was asked, and how often it answered.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    started: Rc<Cell<usize>>,
    finished: Rc<Cell<usize>>,
}

impl CallLog {
    pub fn started(&self) -> usize {
        self.started.get()
    }

    pub fn finished(&self) -> usize {
        self.finished.get()
    }
}

/// Runs `script` and records every call in a shared [`CallLog`].
pub struct Counted {
    pub script: Script,
    pub log: CallLog,
}

impl CategorySource for Counted {
    fn fetch_listing(&self) -> LocalBoxFuture<'_, Result<Listing, ApiError>> {
        self.log.started.set(self.log.started.get() + 1);
        let finished = self.log.finished.clone();
        let request = self.script.fetch_listing();
        Box::pin(async move {
            let outcome = request.await;
            finished.set(finished.get() + 1);
            outcome
        })
    }
}

#[derive(Props, Clone, PartialEq)]
struct HarnessProps {
    feed: CategoryFeed,
    path: String,
}

#[allow(non_snake_case)]
fn Harness(props: HarnessProps) -> Element {
    use_context_provider(|| props.feed.clone());
    rsx! {
        RouteOutlet { path: props.path.clone() }
    }
}

/// Build and render `path` once with `feed` in context.
pub fn mount(feed: CategoryFeed, path: &str) -> VirtualDom {
    let mut dom = VirtualDom::new_with_props(
        Harness,
        HarnessProps {
            feed,
            path: path.to_string(),
        },
    );
    dom.rebuild_in_place();
    dom
}

/// Poll spawned tasks until they go quiet or `patience` runs out, then apply
/// pending renders and return the markup.
pub async fn settle(dom: &mut VirtualDom, patience: Duration) -> String {
    let _ = tokio::time::timeout(patience, dom.wait_for_work()).await;
    dom.render_immediate_to_vec();
    dioxus_ssr::render(dom)
}

/// Mount `path`, let the categories request settle (or give up after a short
/// wait), and return the rendered markup.
pub async fn render_route(script: Script, path: &str) -> String {
    let mut dom = mount(CategoryFeed::new(script), path);
    settle(&mut dom, SHORT_WAIT).await
}

/// Mount `path` and tear the tree down before the request can settle.
pub async fn mount_and_drop(script: Script, path: &str) {
    let dom = mount(CategoryFeed::new(script), path);
    drop(dom);
    tokio::task::yield_now().await;
}
