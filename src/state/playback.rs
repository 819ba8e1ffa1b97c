// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hover-driven playback for card videos.
//!
//! Each card owns its own playback. Pointer enter starts it, pointer leave
//! pauses and rewinds. Cards never coordinate with each other.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Playback {
    playing: bool,
    /// Seconds since the start of the clip.
    position: f32,
}

impl Playback {
    pub fn pointer_enter(&mut self) {
        self.playing = true;
    }

    pub fn pointer_leave(&mut self) {
        self.playing = false;
        self.position = 0.0;
    }

    /// Advance the clock by `dt` seconds while playing.
    pub fn advance(&mut self, dt: f32) {
        if self.playing && dt > 0.0 {
            self.position += dt;
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn position(&self) -> f32 {
        self.position
    }
}

/// Per-card playback, keyed by project id.
#[derive(Debug, Default)]
pub struct HoverPlayback {
    cards: HashMap<u32, Playback>,
}

impl HoverPlayback {
    /// Feed this frame's hover state for one card.
    pub fn update(&mut self, id: u32, hovered: bool, dt: f32) -> Playback {
        let playback = self.cards.entry(id).or_default();
        match (playback.is_playing(), hovered) {
            (false, true) => playback.pointer_enter(),
            (true, false) => playback.pointer_leave(),
            _ => {}
        }
        playback.advance(dt);
        *playback
    }

    pub fn get(&self, id: u32) -> Playback {
        self.cards.get(&id).copied().unwrap_or_default()
    }

    pub fn any_playing(&self) -> bool {
        self.cards.values().any(Playback::is_playing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_rewinds() {
        let mut p = Playback::default();
        p.pointer_enter();
        p.advance(1.5);
        assert!(p.is_playing());
        assert_eq!(p.position(), 1.5);
        p.pointer_leave();
        assert!(!p.is_playing());
        assert_eq!(p.position(), 0.0);
    }

    #[test]
    fn test_paused_clock_does_not_move() {
        let mut p = Playback::default();
        p.advance(2.0);
        assert_eq!(p.position(), 0.0);
    }

    #[test]
    fn test_cards_are_independent() {
        let mut hover = HoverPlayback::default();
        hover.update(1, true, 0.0);
        hover.update(2, true, 0.0);
        hover.update(1, true, 0.5);
        assert!(hover.get(1).is_playing());
        assert!(hover.get(2).is_playing());

        hover.update(1, false, 0.5);
        assert!(!hover.get(1).is_playing());
        assert_eq!(hover.get(1).position(), 0.0);
        assert!(hover.get(2).is_playing());
        assert!(hover.any_playing());
    }
}
