// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application UI state and its transitions.
//!
//! All transient UI state lives in [`AppState`]. Changes go through
//! [`reduce`], a pure function from (state, action, context) to a new state
//! plus a list of [`Effect`]s. Effects are the only way state reaches the
//! outside world (navigation history, scroll lock, reveal rescans); the
//! [`store::Store`] applies them.

pub mod modal;
pub mod playback;
pub mod reveal;
pub mod scroller;
pub mod store;

use crate::models::localized::Lang;
use modal::OverlayMarker;
use serde::{Deserialize, Serialize};

/// Transient UI state owned by the root view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppState {
    pub lang: Lang,
    pub menu_open: bool,
    pub selected_project: Option<u32>,
    pub about_open: bool,
    pub lab_expanded: bool,
    pub embed_loading: bool,
    pub current_slide: usize,
}

impl AppState {
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            ..Default::default()
        }
    }

    pub fn is_open(&self, marker: OverlayMarker) -> bool {
        match marker {
            OverlayMarker::Project => self.selected_project.is_some(),
            OverlayMarker::About => self.about_open,
        }
    }

    pub fn any_modal_open(&self) -> bool {
        self.selected_project.is_some() || self.about_open
    }

    fn set_closed(&mut self, marker: OverlayMarker) {
        match marker {
            OverlayMarker::Project => self.selected_project = None,
            OverlayMarker::About => self.about_open = false,
        }
    }
}

/// Something the user (or the platform) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleLang,
    ToggleMenu,
    CloseMenu,
    OpenProject(u32),
    OpenAbout,
    /// Close button pressed on a modal.
    RequestClose(OverlayMarker),
    /// Back navigation happened; the history top has already changed.
    ExternalDismiss,
    ToggleLabExpanded,
    EmbedLoaded,
    SlideChanged(usize),
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    PushHistory(OverlayMarker),
    ReplaceHistory(OverlayMarker),
    NavigateBack,
    LockScroll,
    UnlockScroll,
    RescanReveal,
}

/// Read-only facts about the platform needed to decide a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReduceContext {
    pub history_top: Option<OverlayMarker>,
}

/// Result of [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: AppState,
    pub effects: Vec<Effect>,
}

/// Compute the next state for `action`.
pub fn reduce(state: &AppState, action: Action, ctx: &ReduceContext) -> Transition {
    let mut next = state.clone();
    let mut effects = Vec::new();

    match action {
        Action::ToggleLang => next.lang = state.lang.toggled(),
        Action::ToggleMenu => next.menu_open = !state.menu_open,
        Action::CloseMenu => next.menu_open = false,
        Action::OpenProject(id) => {
            if state.selected_project != Some(id) {
                open_modal(state, &mut next, OverlayMarker::Project, ctx, &mut effects);
                next.selected_project = Some(id);
                next.embed_loading = true;
            }
        }
        Action::OpenAbout => {
            if !state.about_open {
                open_modal(state, &mut next, OverlayMarker::About, ctx, &mut effects);
                next.about_open = true;
            }
        }
        Action::RequestClose(marker) => {
            if state.is_open(marker) {
                if ctx.history_top == Some(marker) {
                    // The modal closes when the back navigation is reported.
                    effects.push(Effect::NavigateBack);
                } else {
                    next.set_closed(marker);
                    if !next.any_modal_open() {
                        effects.push(Effect::UnlockScroll);
                    }
                }
            }
        }
        Action::ExternalDismiss => {
            for marker in [OverlayMarker::Project, OverlayMarker::About] {
                if state.is_open(marker) && ctx.history_top != Some(marker) {
                    next.set_closed(marker);
                }
            }
            if state.any_modal_open() && !next.any_modal_open() {
                effects.push(Effect::UnlockScroll);
            }
        }
        Action::ToggleLabExpanded => {
            next.lab_expanded = !state.lab_expanded;
            next.current_slide = 0;
            effects.push(Effect::RescanReveal);
        }
        Action::EmbedLoaded => next.embed_loading = false,
        Action::SlideChanged(index) => next.current_slide = index,
    }

    Transition {
        state: next,
        effects,
    }
}

/// Shared open logic. The two modals are mutually exclusive: opening one
/// closes the other and reuses its history entry.
fn open_modal(
    state: &AppState,
    next: &mut AppState,
    marker: OverlayMarker,
    ctx: &ReduceContext,
    effects: &mut Vec<Effect>,
) {
    next.menu_open = false;

    let other = marker.other();
    let top_is_open_modal = ctx.history_top.is_some_and(|top| state.is_open(top));
    if state.is_open(other) {
        next.set_closed(other);
    }

    if top_is_open_modal {
        effects.push(Effect::ReplaceHistory(marker));
    } else {
        effects.push(Effect::PushHistory(marker));
    }

    if !state.any_modal_open() {
        effects.push(Effect::LockScroll);
    }
}
