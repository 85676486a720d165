//! Component mocks with interactive controls

mod confirm_dialog;
pub mod framework;
mod modal;
pub mod url_state;

pub use confirm_dialog::ConfirmDialogMock;
pub use modal::ModalMock;

/// Wait without blocking the UI thread
#[cfg(target_arch = "wasm32")]
pub(crate) async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
