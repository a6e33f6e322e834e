//! Background fetch tasks and the messages they send back to the UI thread.
//!
//! Each key action spawns one tokio task for the HTTP round trip; the UI
//! loop drains the channel between draws, so the terminal never blocks on
//! the network.

use std::sync::mpsc::{Receiver, Sender};

use crate::api::{MetClient, ObjectRecord};

/// Messages sent from fetch tasks to the UI thread.
///
/// Every event carries the sequence stamp of the request that produced
/// it; the app discards events from superseded requests.
#[derive(Debug, Clone)]
pub enum FetchEvent {
    /// Catalog listed and one identifier drawn.
    SelectionPicked { seq: u64, id: u64, total: u64 },

    /// Catalog listing (or the draw itself) failed.
    SelectionFailed { seq: u64, message: String },

    /// Object record fetched for the current selection.
    ArtworkLoaded { seq: u64, record: ObjectRecord },

    /// Object record fetch failed.
    ArtworkFailed { seq: u64, message: String },
}

impl FetchEvent {
    pub fn seq(&self) -> u64 {
        match self {
            FetchEvent::SelectionPicked { seq, .. }
            | FetchEvent::SelectionFailed { seq, .. }
            | FetchEvent::ArtworkLoaded { seq, .. }
            | FetchEvent::ArtworkFailed { seq, .. } => *seq,
        }
    }
}

/// Channel pair connecting fetch tasks to the UI loop.
pub struct FetchChannels {
    /// Cloned into every spawned task.
    pub tx: Sender<FetchEvent>,

    /// Drained by the UI loop between draws.
    pub rx: Receiver<FetchEvent>,
}

impl FetchChannels {
    pub fn new() -> Self {
        let (tx, rx) = std::sync::mpsc::channel();
        Self { tx, rx }
    }
}

impl Default for FetchChannels {
    fn default() -> Self {
        Self::new()
    }
}

/// List the catalog and draw one identifier at random.
pub fn spawn_pick(client: MetClient, seq: u64, tx: Sender<FetchEvent>) {
    tokio::spawn(async move {
        let event = match client.list_objects().await {
            Ok(index) => match index.draw(&mut rand::thread_rng()) {
                Ok(id) => FetchEvent::SelectionPicked {
                    seq,
                    id,
                    total: index.total,
                },
                Err(err) => FetchEvent::SelectionFailed {
                    seq,
                    message: err.user_message(),
                },
            },
            Err(err) => FetchEvent::SelectionFailed {
                seq,
                message: err.user_message(),
            },
        };
        // Receiver may be gone during shutdown.
        let _ = tx.send(event);
    });
}

/// Fetch the record for the selected identifier.
pub fn spawn_reveal(client: MetClient, seq: u64, id: u64, tx: Sender<FetchEvent>) {
    tokio::spawn(async move {
        let event = match client.get_object(id).await {
            Ok(record) => FetchEvent::ArtworkLoaded { seq, record },
            Err(err) => FetchEvent::ArtworkFailed {
                seq,
                message: err.user_message(),
            },
        };
        let _ = tx.send(event);
    });
}
