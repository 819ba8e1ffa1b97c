// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Modal overlays and their navigation history.
//!
//! Each open modal owns one history entry so that "back" dismisses the modal
//! instead of leaving the page. The history is reached only through the
//! [`DismissableOverlay`] trait; [`HistoryStack`] is the in-process adapter.

use serde::{Deserialize, Serialize};
use std::sync::mpsc::{channel, Receiver, Sender};

/// Which modal a history entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayMarker {
    Project,
    About,
}

impl OverlayMarker {
    pub fn other(self) -> Self {
        match self {
            OverlayMarker::Project => OverlayMarker::About,
            OverlayMarker::About => OverlayMarker::Project,
        }
    }
}

/// Sent to subscribers after a back navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissEvent {
    /// History top after the navigation.
    pub top: Option<OverlayMarker>,
}

/// An overlay whose visibility is bound to a navigation stack.
pub trait DismissableOverlay {
    /// Record a newly opened overlay.
    fn open(&mut self, marker: OverlayMarker);

    /// Swap the current entry for another overlay without growing the stack.
    fn replace(&mut self, marker: OverlayMarker);

    /// Navigate back. Subscribers learn about it asynchronously.
    fn close(&mut self);

    /// Marker of the current entry, if it belongs to an overlay.
    fn top(&self) -> Option<OverlayMarker>;

    /// Receive a [`DismissEvent`] for every back navigation.
    fn subscribe_external_dismiss(&mut self) -> Receiver<DismissEvent>;
}

/// Browser-style history: a base page entry plus one entry per push.
pub struct HistoryStack {
    entries: Vec<Option<OverlayMarker>>,
    subscribers: Vec<Sender<DismissEvent>>,
    /// Number of push/replace calls, for diagnostics.
    mutations: usize,
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStack {
    pub fn new() -> Self {
        Self {
            entries: vec![None],
            subscribers: Vec::new(),
            mutations: 0,
        }
    }

    /// Entries including the base page.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn mutations(&self) -> usize {
        self.mutations
    }

    /// Back navigation from outside the modals (mouse back button, keyboard).
    /// Returns false at the base entry, which is never popped.
    pub fn back(&mut self) -> bool {
        if self.entries.len() <= 1 {
            log::debug!("history: back at base entry ignored");
            return false;
        }
        self.entries.pop();
        let event = DismissEvent { top: self.top() };
        log::debug!("history: back, top now {:?}", event.top);
        self.subscribers.retain(|tx| tx.send(event).is_ok());
        true
    }
}

impl DismissableOverlay for HistoryStack {
    fn open(&mut self, marker: OverlayMarker) {
        self.entries.push(Some(marker));
        self.mutations += 1;
        log::debug!("history: push {:?} (depth {})", marker, self.entries.len());
    }

    fn replace(&mut self, marker: OverlayMarker) {
        if let Some(top) = self.entries.last_mut() {
            *top = Some(marker);
        }
        self.mutations += 1;
        log::debug!("history: replace top with {:?}", marker);
    }

    fn close(&mut self) {
        self.back();
    }

    fn top(&self) -> Option<OverlayMarker> {
        self.entries.last().copied().flatten()
    }

    fn subscribe_external_dismiss(&mut self) -> Receiver<DismissEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }
}
