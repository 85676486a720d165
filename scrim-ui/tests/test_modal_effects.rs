//! Drives a mounted `Modal` through its effects against a shared fake document.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_core::NoOpMutations;
use scrim_common::testing::FakeDocument;
use scrim_common::{EffectHost, OverflowStyle};
use scrim_ui::{use_effect_host_provider, Modal};

thread_local! {
    static DOCUMENT: RefCell<FakeDocument> = RefCell::new(FakeDocument::new());
    static REQUESTED_OPEN: Cell<bool> = const { Cell::new(false) };
    static MOUNTED: Cell<bool> = const { Cell::new(true) };
    static CLOSE_REQUESTS: Cell<usize> = const { Cell::new(0) };
}

fn document() -> FakeDocument {
    DOCUMENT.with(|document| document.borrow().clone())
}

fn close_requests() -> usize {
    CLOSE_REQUESTS.with(Cell::get)
}

fn reset(document: &FakeDocument) {
    DOCUMENT.with(|shared| *shared.borrow_mut() = document.clone());
    REQUESTED_OPEN.with(|open| open.set(false));
    MOUNTED.with(|mounted| mounted.set(true));
    CLOSE_REQUESTS.with(|count| count.set(0));
}

fn app() -> Element {
    use_effect_host_provider(|| -> Rc<dyn EffectHost> { Rc::new(document()) });
    let is_open = REQUESTED_OPEN.with(Cell::get);
    let mounted = MOUNTED.with(Cell::get);

    rsx! {
        if mounted {
            Modal {
                is_open,
                on_close: |_| CLOSE_REQUESTS.with(|count| count.set(count.get() + 1)),
                title: Some("Delete Item".to_string()),
                "Body"
            }
        }
    }
}

/// Re-render the app and let queued effects run.
async fn settle(dom: &mut VirtualDom) {
    dom.mark_dirty(ScopeId::APP);
    for _ in 0..4 {
        dom.render_immediate(&mut NoOpMutations);
        let _ = tokio::time::timeout(Duration::from_millis(10), dom.wait_for_work()).await;
    }
    dom.render_immediate(&mut NoOpMutations);
}

#[tokio::test]
async fn test_effects_follow_open_flag() {
    let document = FakeDocument::new();
    document.set_body_overflow(OverflowStyle::uniform("auto"));
    reset(&document);

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    settle(&mut dom).await;
    assert_eq!(document.listener_count(), 0);
    assert!(!document.is_scroll_locked());

    REQUESTED_OPEN.with(|open| open.set(true));
    settle(&mut dom).await;
    assert_eq!(document.listener_count(), 1);
    assert!(document.is_scroll_locked());
    assert_eq!(document.body_overflow(), OverflowStyle::locked());

    // Re-rendering while open does not install a second listener
    settle(&mut dom).await;
    assert_eq!(document.listener_count(), 1);

    document.press_key("Escape");
    assert_eq!(close_requests(), 1);
    document.press_key("Enter");
    assert_eq!(close_requests(), 1);
    // The dialog does not close itself
    assert_eq!(document.listener_count(), 1);

    REQUESTED_OPEN.with(|open| open.set(false));
    settle(&mut dom).await;
    assert_eq!(document.listener_count(), 0);
    assert!(!document.is_scroll_locked());
    assert_eq!(document.body_overflow(), OverflowStyle::uniform("auto"));

    document.press_key("Escape");
    assert_eq!(close_requests(), 1);
}

#[tokio::test]
async fn test_unmount_while_open_releases_effects() {
    let document = FakeDocument::new();
    reset(&document);
    REQUESTED_OPEN.with(|open| open.set(true));

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    settle(&mut dom).await;
    assert_eq!(document.listener_count(), 1);
    assert!(document.is_scroll_locked());

    MOUNTED.with(|mounted| mounted.set(false));
    settle(&mut dom).await;
    assert_eq!(document.listener_count(), 0);
    assert!(!document.is_scroll_locked());
    assert_eq!(document.body_overflow(), OverflowStyle::default());

    document.press_key("Escape");
    assert_eq!(close_requests(), 0);
}

#[tokio::test]
async fn test_dropping_the_dom_releases_effects() {
    let document = FakeDocument::new();
    reset(&document);
    REQUESTED_OPEN.with(|open| open.set(true));

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    settle(&mut dom).await;
    assert!(document.is_scroll_locked());

    drop(dom);
    assert_eq!(document.listener_count(), 0);
    assert!(!document.is_scroll_locked());
}
