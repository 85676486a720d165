use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_core::NoOpMutations;
use scrim_common::testing::FakeDocument;
use scrim_common::EffectHost;
use scrim_ui::{use_effect_host_provider, ConfirmDialog, Modal, ModalSize};

/// Keeps the browser document out of the tree under test
#[component]
fn FakeHost(children: Element) -> Element {
    use_effect_host_provider(|| -> Rc<dyn EffectHost> { Rc::new(FakeDocument::new()) });
    rsx! {
        {children}
    }
}

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn test_closed_modal_renders_nothing() {
    fn app() -> Element {
        rsx! {
            FakeHost {
                Modal { is_open: false, on_close: |_| {}, "Hidden body" }
            }
        }
    }

    let html = render(app);
    assert!(!html.contains("Hidden body"));
    assert!(!html.contains("role=\"dialog\""));
}

#[test]
fn test_open_modal_defaults() {
    fn app() -> Element {
        rsx! {
            FakeHost {
                Modal { is_open: true, on_close: |_| {}, "Visible body" }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("Visible body"));
    assert!(html.contains("role=\"dialog\""));
    assert!(html.contains("role=\"presentation\""));
    assert!(html.contains("max-w-md"));
    assert!(html.contains("Close dialog"));
    // No title, nothing to label the dialog with
    assert!(!html.contains("aria-labelledby"));
}

#[test]
fn test_small_titled_modal() {
    fn app() -> Element {
        rsx! {
            FakeHost {
                Modal {
                    is_open: true,
                    on_close: |_| {},
                    title: Some("Delete Item".to_string()),
                    size: ModalSize::Small,
                    "Body"
                }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("max-w-sm"));
    assert!(!html.contains("max-w-md"));
    assert!(html.contains("Delete Item"));
    assert!(html.contains("aria-labelledby"));
}

#[test]
fn test_headerless_modal() {
    fn app() -> Element {
        rsx! {
            FakeHost {
                Modal {
                    is_open: true,
                    on_close: |_| {},
                    show_close_button: false,
                    "Body only"
                }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("Body only"));
    assert!(!html.contains("Close dialog"));
    assert!(!html.contains("border-b"));
}

#[test]
fn test_title_without_close_button_keeps_header() {
    fn app() -> Element {
        rsx! {
            FakeHost {
                Modal {
                    is_open: true,
                    on_close: |_| {},
                    title: Some("Rename".to_string()),
                    size: ModalSize::Large,
                    show_close_button: false,
                    "Body"
                }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("max-w-lg"));
    assert!(html.contains("border-b"));
    assert!(html.contains("Rename"));
    assert!(!html.contains("Close dialog"));
}

#[test]
fn test_dangerous_confirm_uses_destructive_style() {
    fn app() -> Element {
        rsx! {
            FakeHost {
                ConfirmDialog {
                    is_open: true,
                    on_close: |_| {},
                    on_confirm: |_| {},
                    title: "Delete Item".to_string(),
                    description: Some("This cannot be undone.".to_string()),
                    confirm_label: "Delete".to_string(),
                    is_dangerous: true,
                }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("max-w-sm"));
    assert!(html.contains("bg-red-600"));
    assert!(html.contains("Delete"));
    assert!(html.contains("Cancel"));
    assert!(html.contains("This cannot be undone."));
}

#[test]
fn test_safe_confirm_uses_primary_style() {
    fn app() -> Element {
        rsx! {
            FakeHost {
                ConfirmDialog {
                    is_open: true,
                    on_close: |_| {},
                    title: "Save changes?".to_string(),
                }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("bg-indigo-600"));
    assert!(!html.contains("bg-red-600"));
    assert!(html.contains("Confirm"));
}

#[test]
fn test_loading_disables_both_actions() {
    fn app() -> Element {
        rsx! {
            FakeHost {
                ConfirmDialog {
                    is_open: true,
                    on_close: |_| {},
                    on_confirm: |_| {},
                    title: "Delete Item".to_string(),
                    is_loading: true,
                }
            }
        }
    }

    let html = render(app);
    assert_eq!(html.matches("aria-disabled=\"true\"").count(), 2);
    assert_eq!(html.matches("aria-busy=\"true\"").count(), 1);
    assert!(html.contains("loader-icon"));
}

#[test]
fn test_idle_confirm_has_enabled_actions() {
    fn app() -> Element {
        rsx! {
            FakeHost {
                ConfirmDialog {
                    is_open: true,
                    on_close: |_| {},
                    on_confirm: |_| {},
                    title: "Delete Item".to_string(),
                }
            }
        }
    }

    let html = render(app);
    assert_eq!(html.matches("aria-disabled=\"true\"").count(), 0);
    assert!(!html.contains("loader-icon"));
}

#[test]
fn test_custom_content_is_rendered() {
    fn app() -> Element {
        rsx! {
            FakeHost {
                ConfirmDialog {
                    is_open: true,
                    on_close: |_| {},
                    title: "Move files".to_string(),
                    content: rsx! {
                        ul {
                            li { "a.flac" }
                        }
                    },
                }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("a.flac"));
}

thread_local! {
    static REQUESTED_OPEN: Cell<bool> = const { Cell::new(false) };
}

fn toggled_app() -> Element {
    let is_open = REQUESTED_OPEN.with(Cell::get);
    rsx! {
        FakeHost {
            Modal { is_open, on_close: |_| {}, "Toggled body" }
        }
    }
}

#[test]
fn test_render_follows_latest_request() {
    REQUESTED_OPEN.with(|open| open.set(false));
    let mut dom = VirtualDom::new(toggled_app);
    dom.rebuild_in_place();
    assert!(!dioxus_ssr::render(&dom).contains("Toggled body"));

    for value in [true, true, false, true, false, false] {
        REQUESTED_OPEN.with(|open| open.set(value));
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut NoOpMutations);
        assert_eq!(dioxus_ssr::render(&dom).contains("Toggled body"), value);
    }
}
