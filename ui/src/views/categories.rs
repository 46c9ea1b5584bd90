use dioxus::prelude::*;

use crate::core::feed::CategoryFeed;
use crate::core::lifecycle::{settle_once, MountToken};
use crate::core::load_state::ViewLoadState;

/// Fetches the category list once per mount and shows a heading that tracks
/// the load flag. The fetched payload is only counted.
#[component]
pub fn CategoriesView() -> Element {
    crate::i18n::init();
    let feed = use_hook(|| try_consume_context::<CategoryFeed>().unwrap_or_default());
    let state = use_signal(ViewLoadState::new);
    let token = use_hook(MountToken::new);

    {
        let token = token.clone();
        use_drop(move || token.cancel());
    }

    use_hook(move || {
        tracing::debug!("categories view mounted");
        spawn(async move {
            let mut state = state;
            let request = async {
                let outcome = feed.fetch_listing().await;
                match &outcome {
                    Ok(listing) => match listing.category_count() {
                        Some(count) => {
                            tracing::debug!(status = listing.status, count, "categories fetched")
                        }
                        None => tracing::debug!(status = listing.status, "categories body has no list"),
                    },
                    Err(err) => tracing::warn!("categories request failed: {err}"),
                }
                outcome
            };
            settle_once(&token, request, move |outcome| {
                state.with_mut(|s| s.settle(&outcome))
            })
            .await;
        })
    });

    let heading = state().heading();

    rsx! {
        section { class: "page page-categories",
            h2 { class: "page-categories__heading", "{heading}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use api::{ApiConfig, CategoriesClient};
    use dioxus::prelude::ScopeId;
    use httpmock::prelude::*;

    use crate::core::feed::CategoryFeed;
    use crate::testing::{mount, mount_and_drop, render_route, settle, CallLog, Counted, Script};

    const PATIENCE: Duration = Duration::from_secs(5);

    async fn render_against(server: &MockServer) -> String {
        let client = CategoriesClient::new(ApiConfig::new(server.base_url()));
        let mut dom = mount(CategoryFeed::new(client), "/categories");
        settle(&mut dom, PATIENCE).await
    }

    async fn render_with_body(status: u16, body: &'static str) -> String {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/categories");
                then.status(status)
                    .header("Content-Type", "application/json")
                    .body(body);
            })
            .await;
        let html = render_against(&server).await;
        mock.assert_async().await;
        html
    }

    #[tokio::test]
    async fn successful_fetch_renders_title() {
        let html = render_route(Script::Succeed, "/categories").await;
        assert!(html.contains(">Categories<"), "{html}");
        assert!(!html.contains("Loading..."), "{html}");
    }

    #[tokio::test]
    async fn failed_fetch_renders_loading_text() {
        let html = render_route(Script::Fail, "/categories").await;
        assert!(html.contains(">Loading...<"), "{html}");
        assert!(!html.contains(">Categories<"), "{html}");
    }

    #[tokio::test]
    async fn pending_fetch_keeps_initial_heading() {
        let html = render_route(Script::Hang, "/categories").await;
        assert!(html.contains(">Categories<"), "{html}");
    }

    #[tokio::test]
    async fn unmount_before_settle_is_quiet() {
        mount_and_drop(Script::Hang, "/categories").await;
    }

    #[tokio::test]
    async fn bare_array_body_counts_as_success() {
        let html = render_with_body(200, "[]").await;
        assert!(html.contains(">Categories<"), "{html}");
    }

    #[tokio::test]
    async fn rejected_envelope_body_counts_as_success() {
        let body = r#"{"success":false,"data":null,"msg":"Failed to get categories"}"#;
        let html = render_with_body(200, body).await;
        assert!(html.contains(">Categories<"), "{html}");
    }

    #[tokio::test]
    async fn json_error_response_still_settles_as_success() {
        let body = r#"{"success":false,"msg":"Failed to get categories"}"#;
        let html = render_with_body(500, body).await;
        assert!(html.contains(">Categories<"), "{html}");
    }

    #[tokio::test]
    async fn non_json_body_renders_loading_text() {
        let html = render_with_body(200, "<html>maintenance</html>").await;
        assert!(html.contains(">Loading...<"), "{html}");
    }

    #[tokio::test]
    async fn unreachable_service_renders_loading_text() {
        let client = CategoriesClient::new(ApiConfig::new("http://127.0.0.1:9"));
        let mut dom = mount(CategoryFeed::new(client), "/categories");
        let html = settle(&mut dom, PATIENCE).await;
        assert!(html.contains(">Loading...<"), "{html}");
    }

    #[tokio::test]
    async fn one_request_per_mount_across_rerenders() {
        let log = CallLog::default();
        let feed = CategoryFeed::new(Counted {
            script: Script::Succeed,
            log: log.clone(),
        });
        let mut dom = mount(feed, "/categories");
        assert_eq!(log.started(), 1);

        let html = settle(&mut dom, PATIENCE).await;
        assert_eq!(log.finished(), 1);
        assert!(html.contains(">Categories<"), "{html}");

        dom.mark_dirty(ScopeId::ROOT);
        dom.render_immediate_to_vec();
        let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
        assert_eq!(log.started(), 1);
        assert_eq!(log.finished(), 1);
    }

    #[tokio::test]
    async fn settling_rerender_does_not_refetch() {
        let log = CallLog::default();
        let feed = CategoryFeed::new(Counted {
            script: Script::Fail,
            log: log.clone(),
        });
        let mut dom = mount(feed, "/categories");

        // The failure flips the heading, so the view has rendered again.
        let html = settle(&mut dom, PATIENCE).await;
        assert!(html.contains(">Loading...<"), "{html}");
        assert_eq!(log.started(), 1);
        assert_eq!(log.finished(), 1);
    }

    #[tokio::test]
    async fn each_mount_fetches_once() {
        let log = CallLog::default();
        for _ in 0..2 {
            let feed = CategoryFeed::new(Counted {
                script: Script::Succeed,
                log: log.clone(),
            });
            let mut dom = mount(feed, "/categories");
            settle(&mut dom, PATIENCE).await;
        }
        assert_eq!(log.started(), 2);
        assert_eq!(log.finished(), 2);
    }
}
