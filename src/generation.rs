//! Latest-request-wins bookkeeping.
//!
//! Requests are never aborted. Instead every request takes a [`Ticket`] and
//! its response is only applied if no newer request started in the meantime.

use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Monotonic request counter for one view.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    current: AtomicU64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request, superseding every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }

    /// Supersedes all outstanding tickets without starting a request.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Applied,
    Stale,
}

#[derive(Debug)]
struct SlotState<T> {
    applied: Option<Ticket>,
    value: Option<T>,
}

/// Holds the response of the latest request only.
#[derive(Debug)]
pub struct LatestSlot<T> {
    generation: RequestGeneration,
    state: Mutex<SlotState<T>>,
}

impl<T> Default for LatestSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LatestSlot<T> {
    pub fn new() -> Self {
        Self {
            generation: RequestGeneration::new(),
            state: Mutex::new(SlotState {
                applied: None,
                value: None,
            }),
        }
    }

    pub fn begin(&self) -> Ticket {
        self.generation.begin()
    }

    pub fn invalidate(&self) {
        self.generation.invalidate();
    }

    /// Stores `value` if `ticket` is still the latest request.
    pub fn apply(&self, ticket: Ticket, value: T) -> Applied {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if !self.generation.is_current(ticket) {
            tracing::debug!("Dropping stale response {:?}", ticket);
            return Applied::Stale;
        }
        state.applied = Some(ticket);
        state.value = Some(value);
        Applied::Applied
    }

    /// Runs `request` under a fresh ticket and applies its result if it is
    /// still the latest when it resolves. Errors from stale requests are
    /// swallowed along with their responses.
    pub async fn load<F>(&self, request: F) -> Result<Applied>
    where
        F: Future<Output = Result<T>>,
    {
        let ticket = self.begin();
        let outcome = request.await;
        if !self.generation.is_current(ticket) {
            return Ok(Applied::Stale);
        }
        Ok(self.apply(ticket, outcome?))
    }

    pub fn applied_ticket(&self) -> Option<Ticket> {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).applied
    }
}

impl<T: Clone> LatestSlot<T> {
    pub fn get(&self) -> Option<T> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .value
            .clone()
    }
}
