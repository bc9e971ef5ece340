//! Server-sent events: live store changes for one user.

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
};
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::state::AppState;
use crate::store::StoreEvent;

const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(15);

/// GET /api/v1/users/:user_id/events
///
/// Streams `profile_updated`, `job_added` and `job_deleted` events for the
/// user. A lagging client skips missed events and keeps streaming.
pub async fn handle_events(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    debug!("Opening event stream for user {user_id}");
    let rx = state.store.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(
        move |result: Result<StoreEvent, BroadcastStreamRecvError>| match result {
            Ok(event) if event.user_id == user_id => to_sse_event(&event).map(Ok),
            Ok(_) => None,
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                warn!("Event stream for user {user_id} lagged, skipped {skipped} events");
                None
            }
        },
    );

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(KEEP_ALIVE_INTERVAL)
            .text("keepalive"),
    )
}

fn to_sse_event(event: &StoreEvent) -> Option<Event> {
    Event::default()
        .event(event.kind.name())
        .json_data(event)
        .ok()
}
