use dioxus::prelude::*;

/// Wait `ms` milliseconds on the renderer's event loop.
pub async fn sleep_ms(ms: u64) {
    let script = format!("await new Promise(r => setTimeout(r, {ms})); return true;");
    if let Err(e) = document::eval(&script).await {
        tracing::warn!(error = ?e, ms, "timer eval failed, continuing without delay");
    }
}
