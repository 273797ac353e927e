//! Per-view load state with a stale-response guard.
//!
//! Each view (catalog listing, product detail) owns one [`ViewSlot`]. Starting
//! a load hands out a [`LoadTicket`]; the fetched outcome is applied only if
//! that ticket is still the latest one and the view has not been torn down.
//! This keeps a slow response for a view the user already left, or one
//! superseded by a newer load, from overwriting what is on screen.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{CatalogError, ErrorKind};

/// What a view currently has to show.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    NotFound,
    /// Load failed; carries the message to display.
    Failed(String),
}

/// Proof that a load was started; redeemed by [`ViewSlot::complete`].
#[derive(Debug)]
#[must_use = "a load ticket must be redeemed with ViewSlot::complete"]
pub struct LoadTicket {
    generation: u64,
}

#[derive(Debug)]
struct Slot<T> {
    generation: u64,
    torn_down: bool,
    state: ViewState<T>,
}

/// Shared handle to one view's state. Clones refer to the same view.
#[derive(Debug)]
pub struct ViewSlot<T> {
    inner: Arc<Mutex<Slot<T>>>,
}

impl<T> Clone for ViewSlot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for ViewSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewSlot<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Slot {
                generation: 0,
                torn_down: false,
                state: ViewState::Idle,
            })),
        }
    }

    /// Marks the view as loading and invalidates any earlier ticket.
    pub async fn begin_load(&self) -> LoadTicket {
        let mut slot = self.inner.lock().await;
        slot.generation += 1;
        if !slot.torn_down {
            slot.state = ViewState::Loading;
        }
        LoadTicket {
            generation: slot.generation,
        }
    }

    /// Applies a load outcome if `ticket` is still current.
    ///
    /// Returns `false` (leaving the state untouched) when the ticket was
    /// superseded or the view was torn down. A [`CatalogError`] of kind
    /// [`ErrorKind::NotFound`] becomes [`ViewState::NotFound`]; any other
    /// error becomes [`ViewState::Failed`].
    pub async fn complete(&self, ticket: LoadTicket, outcome: Result<T, CatalogError>) -> bool {
        let mut slot = self.inner.lock().await;
        if slot.torn_down || slot.generation != ticket.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = slot.generation,
                torn_down = slot.torn_down,
                "discarding stale load result"
            );
            return false;
        }
        slot.state = match outcome {
            Ok(value) => ViewState::Ready(value),
            Err(err) if err.kind() == ErrorKind::NotFound => ViewState::NotFound,
            Err(err) => {
                tracing::warn!(error = %err, "view load failed");
                ViewState::Failed(err.display_message())
            }
        };
        true
    }

    /// Detaches the view. Outstanding and future tickets will not apply.
    pub async fn teardown(&self) {
        let mut slot = self.inner.lock().await;
        slot.torn_down = true;
        slot.generation += 1;
    }

    pub async fn is_torn_down(&self) -> bool {
        self.inner.lock().await.torn_down
    }
}

impl<T: Clone> ViewSlot<T> {
    /// Snapshot of the current state.
    pub async fn state(&self) -> ViewState<T> {
        self.inner.lock().await.state.clone()
    }
}
