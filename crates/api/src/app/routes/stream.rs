//! Live-update channel: one SSE connection per browser client.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Extension,
    response::sse::{Event as SseEvent, KeepAlive, Sse},
    routing::get,
    Router,
};
use tokio_stream::{wrappers::BroadcastStream, StreamExt};

use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/stream", get(order_stream))
}

struct ConnectionLog;

impl Drop for ConnectionLog {
    fn drop(&mut self) {
        tracing::info!("live-update client disconnected");
    }
}

/// GET /api/orders/stream
///
/// Pushes `{"type":"NEW_ORDER","data":Order}` whenever an order is created.
/// No client-to-server messages are defined; a lagging client simply misses
/// events (the feed is lossy).
pub async fn order_stream(
    Extension(services): Extension<Arc<AppServices>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<SseEvent, Infallible>>> {
    tracing::info!("live-update client connected");
    let rx = services.feed().subscribe();

    // The stream owns the guard; dropping the connection logs the disconnect.
    let guard = ConnectionLog;
    let stream = BroadcastStream::new(rx).filter_map(move |msg| {
        let _ = &guard;
        match msg {
            Ok(event) => {
                let data = serde_json::to_string(&event).unwrap_or_else(|_| "{}".to_string());
                Some(Ok(SseEvent::default().data(data)))
            }
            // Lagged receiver: skip, the channel keeps no backlog for it.
            Err(_) => None,
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(15)))
}
