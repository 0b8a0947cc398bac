use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use mdi_picker::loader::{CatalogLoader, CatalogSource, StaticCatalogSource};
use mdi_picker::{runtime, Config, FocusTarget, Icon, PickerError, PickerViewModel};
use std::time::Duration;
use tokio::sync::watch;

fn icon(id: &str, name: &str) -> Icon {
    Icon {
        id: id.to_string(),
        name: name.to_string(),
        codepoint: "F0001".to_string(),
        aliases: vec![],
        tags: vec![],
        author: "Test".to_string(),
        version: "1.0.0".to_string(),
    }
}

fn icons() -> Vec<Icon> {
    vec![icon("a", "account"), icon("b", "account-alert"), icon("c", "bell")]
}

/// Resolves after one second of (paused) time.
struct SlowSource;

impl CatalogSource for SlowSource {
    fn describe(&self) -> String {
        "slow".to_string()
    }

    fn fetch(&self) -> BoxFuture<'_, mdi_picker::Result<Vec<Icon>>> {
        async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            Ok(icons())
        }
        .boxed()
    }
}

struct UnreachableSource;

impl CatalogSource for UnreachableSource {
    fn describe(&self) -> String {
        "unreachable".to_string()
    }

    fn fetch(&self) -> BoxFuture<'_, mdi_picker::Result<Vec<Icon>>> {
        futures_util::future::ready(Err(PickerError::HttpStatus {
            status: 404,
            url: "http://localhost/meta.json".to_string(),
        }))
        .boxed()
    }
}

fn empty_message(view: &PickerViewModel) -> Option<&str> {
    view.empty_state.as_ref().map(|e| e.message.as_str())
}

async fn wait_until_loaded(views: &mut watch::Receiver<PickerViewModel>) {
    views
        .wait_for(|v| empty_message(v) != Some("Loading icons"))
        .await
        .expect("event loop alive");
}

fn static_picker() -> runtime::PickerHandle {
    runtime::spawn(&Config::default(), CatalogLoader::new(StaticCatalogSource::new(icons())))
}

#[tokio::test(start_paused = true)]
async fn search_results_are_published() {
    let picker = static_picker();
    let mut views = picker.subscribe();
    wait_until_loaded(&mut views).await;

    picker.search("acc");
    let view = views
        .wait_for(|v| v.search_bar.query == "acc")
        .await
        .expect("event loop alive")
        .clone();

    let ids: Vec<&str> = view.display_items.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert!(view.popup_visible);
    assert_eq!(view.display_items[0].css_class, "mdi mdi-account");
}

#[tokio::test(start_paused = true)]
async fn query_typed_during_load_is_answered_once_loaded() {
    let picker = runtime::spawn(&Config::default(), CatalogLoader::new(SlowSource));
    let mut views = picker.subscribe();

    picker.search("bel");
    let early = views
        .wait_for(|v| v.search_bar.query == "bel")
        .await
        .expect("event loop alive")
        .clone();
    assert!(early.display_items.is_empty());
    assert_eq!(empty_message(&early), Some("Loading icons"));

    let loaded = views
        .wait_for(|v| !v.display_items.is_empty())
        .await
        .expect("event loop alive")
        .clone();
    assert_eq!(loaded.display_items[0].id, "c");
}

#[tokio::test(start_paused = true)]
async fn popup_closes_after_grace_window() {
    let picker = static_picker();
    let mut views = picker.subscribe();
    wait_until_loaded(&mut views).await;

    picker.focus_gained(FocusTarget::Trigger);
    views.wait_for(|v| v.popup_visible).await.expect("event loop alive");

    let start = tokio::time::Instant::now();
    picker.focus_lost();
    views.wait_for(|v| !v.popup_visible).await.expect("event loop alive");

    assert!(start.elapsed() >= Duration::from_millis(100));
}

#[tokio::test(start_paused = true)]
async fn focus_returning_within_window_never_hides_popup() {
    let picker = static_picker();
    let mut views = picker.subscribe();
    wait_until_loaded(&mut views).await;

    picker.open();
    views.wait_for(|v| v.popup_visible).await.expect("event loop alive");

    picker.focus_lost();
    tokio::time::sleep(Duration::from_millis(50)).await;
    picker.focus_gained(FocusTarget::Results);
    tokio::time::sleep(Duration::from_millis(500)).await;

    assert!(!views.has_changed().expect("event loop alive"), "no view was published");
    assert!(picker.view().popup_visible);
}

#[tokio::test(start_paused = true)]
async fn selection_is_forwarded_and_closes_popup() {
    let mut picker = static_picker();
    let mut views = picker.subscribe();
    wait_until_loaded(&mut views).await;

    picker.search("bell");
    picker.select(icon("c", "bell"));

    let selected = picker.next_selection().await.expect("selection");
    assert_eq!(selected.id, "c");

    let view = views
        .wait_for(|v| v.trigger.selected_name.is_some())
        .await
        .expect("event loop alive")
        .clone();
    assert_eq!(view.trigger.selected_name.as_deref(), Some("bell"));
    assert!(!view.popup_visible);
}

#[tokio::test(start_paused = true)]
async fn unknown_selection_does_not_stop_the_loop() {
    let picker = static_picker();
    let mut views = picker.subscribe();
    wait_until_loaded(&mut views).await;

    picker.select(icon("zz", "ghost"));
    picker.search("bel");

    let view = views
        .wait_for(|v| v.search_bar.query == "bel")
        .await
        .expect("event loop alive")
        .clone();
    assert_eq!(view.trigger.selected_name, None);
    assert_eq!(view.display_items.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn failed_load_leaves_picker_degraded_but_alive() {
    let picker = runtime::spawn(&Config::default(), CatalogLoader::new(UnreachableSource));
    let mut views = picker.subscribe();

    let view = views
        .wait_for(|v| empty_message(v) == Some("Icon catalog unavailable"))
        .await
        .expect("event loop alive")
        .clone();
    assert!(view.empty_state.is_some_and(|e| e.subtitle.contains("404")));

    picker.search("acc");
    let view = views
        .wait_for(|v| v.search_bar.query == "acc")
        .await
        .expect("event loop alive")
        .clone();
    assert!(view.display_items.is_empty());
    assert!(view.popup_visible);
}
