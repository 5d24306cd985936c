// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// Shows `message` in a blocking browser alert.
    pub fn notify(message: &str) {
        let shown = web_sys::window()
            .map(|win| win.alert_with_message(message).is_ok())
            .unwrap_or(false);
        if !shown {
            dioxus_logger::tracing::warn!("could not show notification: {}", message);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use dioxus::prelude::*;
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// Shows `message` via an `alert()` in the desktop webview.
    ///
    /// Must be called from inside the Dioxus runtime.
    pub fn notify(message: &str) {
        match serde_json::to_string(message) {
            Ok(quoted) => {
                let alert = document::eval(&format!("alert({quoted});"));
                spawn(async move {
                    if let Err(e) = alert.await {
                        dioxus_logger::tracing::warn!("could not show notification: {:?}", e);
                    }
                });
            }
            Err(e) => {
                dioxus_logger::tracing::warn!("could not show notification: {}", e);
            }
        }
    }
}
