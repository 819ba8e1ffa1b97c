// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! State container that applies transition effects.

use super::modal::{DismissEvent, DismissableOverlay};
use super::{reduce, Action, AppState, Effect, ReduceContext, Transition};
use std::sync::mpsc::Receiver;

/// Owns the [`AppState`] and the platform pieces its effects touch.
pub struct Store<O: DismissableOverlay> {
    state: AppState,
    overlay: O,
    dismissals: Receiver<DismissEvent>,
    scroll_locked: bool,
    /// Bumped on every reveal rescan request.
    reveal_generation: u64,
}

impl<O: DismissableOverlay> Store<O> {
    pub fn new(state: AppState, mut overlay: O) -> Self {
        let dismissals = overlay.subscribe_external_dismiss();
        Self {
            state,
            overlay,
            dismissals,
            scroll_locked: false,
            reveal_generation: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut O {
        &mut self.overlay
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn reveal_generation(&self) -> u64 {
        self.reveal_generation
    }

    /// Run `action` through the reducer and apply its effects.
    pub fn dispatch(&mut self, action: Action) {
        let ctx = ReduceContext {
            history_top: self.overlay.top(),
        };
        let Transition { state, effects } = reduce(&self.state, action, &ctx);
        if state != self.state {
            log::debug!("state: {:?} -> {:?}", action, state);
        }
        self.state = state;
        for effect in effects {
            self.apply(effect);
        }
    }

    /// Deliver pending back navigations. Returns how many were handled.
    pub fn pump_external(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.dismissals.try_recv() {
            log::debug!("external dismiss, history top {:?}", event.top);
            self.dispatch(Action::ExternalDismiss);
            handled += 1;
        }
        handled
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::PushHistory(marker) => self.overlay.open(marker),
            Effect::ReplaceHistory(marker) => self.overlay.replace(marker),
            Effect::NavigateBack => self.overlay.close(),
            Effect::LockScroll => self.scroll_locked = true,
            Effect::UnlockScroll => self.scroll_locked = false,
            Effect::RescanReveal => self.reveal_generation += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::modal::{HistoryStack, OverlayMarker};

    fn store() -> Store<HistoryStack> {
        Store::new(AppState::default(), HistoryStack::new())
    }

    #[test]
    fn test_close_button_goes_through_history() {
        let mut store = store();
        store.dispatch(Action::OpenProject(2));
        assert_eq!(store.overlay().len(), 2);
        assert!(store.scroll_locked());

        store.dispatch(Action::RequestClose(OverlayMarker::Project));
        // Back was requested; the modal waits for the notification.
        assert_eq!(store.overlay().len(), 1);
        assert_eq!(store.state().selected_project, Some(2));

        assert_eq!(store.pump_external(), 1);
        assert_eq!(store.state().selected_project, None);
        assert!(!store.scroll_locked());
        assert_eq!(store.overlay().mutations(), 1);
    }

    #[test]
    fn test_back_navigation_closes_about() {
        let mut store = store();
        store.dispatch(Action::OpenAbout);
        let mutations = store.overlay().mutations();

        assert!(store.overlay_mut().back());
        store.pump_external();

        assert!(!store.state().about_open);
        assert!(!store.scroll_locked());
        assert_eq!(store.overlay().mutations(), mutations);
        assert_eq!(store.overlay().len(), 1);
    }

    #[test]
    fn test_modals_are_mutually_exclusive() {
        let mut store = store();
        store.dispatch(Action::OpenProject(1));
        store.dispatch(Action::OpenAbout);

        assert!(store.state().about_open);
        assert_eq!(store.state().selected_project, None);
        assert_eq!(store.overlay().len(), 2);
        assert_eq!(store.overlay().top(), Some(OverlayMarker::About));

        // One back returns to the page.
        store.overlay_mut().back();
        store.pump_external();
        assert!(!store.state().any_modal_open());
        assert!(!store.scroll_locked());
    }

    #[test]
    fn test_close_after_entry_consumed_closes_directly() {
        let mut store = store();
        store.dispatch(Action::OpenProject(4));
        // Entry consumed elsewhere; the notification has not been delivered yet.
        store.overlay_mut().back();
        store.dispatch(Action::RequestClose(OverlayMarker::Project));
        assert_eq!(store.state().selected_project, None);
        assert_eq!(store.overlay().len(), 1);

        // The late notification finds nothing left to close.
        store.pump_external();
        assert!(!store.state().any_modal_open());
    }

    #[test]
    fn test_rescan_generation() {
        let mut store = store();
        store.dispatch(Action::ToggleLabExpanded);
        store.dispatch(Action::ToggleLabExpanded);
        assert_eq!(store.reveal_generation(), 2);
    }
}
