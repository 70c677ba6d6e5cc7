//! Cooperative driver for one controller.
//!
//! Everything runs on the calling task. The single dataset read is in flight
//! while input events keep being handled, exactly one at a time, so a user
//! typing before the load resolves sees the placeholder until the load
//! completes and renders the full dataset.

use crate::controller::SearchController;
use crate::error::LoadError;
use crate::page::{InputSurface, ResultsSurface};
use crate::source::EntitySource;
use futures::{Stream, StreamExt};

/// Something happened on the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The text input's value changed; the controller reads it back.
    Changed,
}

/// Loads the dataset from `source` while dispatching `events`.
///
/// Returns once the load has resolved and the event stream has ended. The
/// load outcome is returned; input events keep being handled after a failed
/// load, filtering the empty dataset.
pub async fn run<I, R, S, E>(
    controller: &mut SearchController<I, R>,
    source: &S,
    mut events: E,
) -> Result<(), LoadError>
where
    I: InputSurface,
    R: ResultsSurface,
    S: EntitySource,
    E: Stream<Item = InputEvent> + Unpin,
{
    if !controller.begin_load() {
        tracing::debug!("Controller not bound, ignoring input");
        return Ok(());
    }

    let fetch = source.fetch_all();
    tokio::pin!(fetch);

    let mut loaded: Option<Result<(), LoadError>> = None;
    let mut events_open = true;

    while loaded.is_none() || events_open {
        tokio::select! {
            // Pending keystrokes go first, as they were queued before the
            // response arrived.
            biased;

            event = events.next(), if events_open => match event {
                Some(InputEvent::Changed) => controller.on_input(),
                None => events_open = false,
            },
            outcome = &mut fetch, if loaded.is_none() => {
                loaded = Some(controller.finish_load(outcome));
            }
        }
    }

    loaded.unwrap_or(Ok(()))
}
