// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! One-shot reveal of elements as they scroll into view.
//!
//! Every revealable element starts `Pending` and becomes `Shown` the first
//! time it intersects the viewport. `Shown` is terminal and the element
//! stops being observed.

use crate::util::geometry::intersection_ratio;
use std::collections::{HashMap, HashSet};

/// Identifies a revealable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealKey {
    Project(u32),
    Lab(u32),
    Section(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Pending,
    Shown,
}

/// Observation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Minimum visible fraction that counts as intersecting.
    pub threshold: f32,
    /// Pixels the viewport is grown by before testing.
    pub margin: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            margin: 50.0,
        }
    }
}

/// A visibility notification for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEvent {
    pub key: RevealKey,
    /// Visible fraction of the element, `0.0..=1.0`.
    pub ratio: f32,
}

/// Anything that can report element visibility.
pub trait VisibilitySource {
    fn drain(&mut self) -> Vec<VisibilityEvent>;
}

/// Tracks the reveal phase of every registered element.
#[derive(Debug, Default)]
pub struct RevealTracker {
    config: RevealConfig,
    phases: HashMap<RevealKey, RevealPhase>,
    observed: HashSet<RevealKey>,
}

impl RevealTracker {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            phases: HashMap::new(),
            observed: HashSet::new(),
        }
    }

    pub fn config(&self) -> RevealConfig {
        self.config
    }

    /// Replace the observed set with `keys`. Elements already shown stay
    /// shown and are not observed again.
    pub fn observe<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = RevealKey>,
    {
        self.observed.clear();
        for key in keys {
            let phase = self.phases.entry(key).or_insert(RevealPhase::Pending);
            if *phase == RevealPhase::Pending {
                self.observed.insert(key);
            }
        }
        log::debug!("reveal: observing {} elements", self.observed.len());
    }

    /// Apply one notification. Returns true when the element was revealed.
    pub fn on_visibility(&mut self, event: VisibilityEvent) -> bool {
        if !self.observed.contains(&event.key) {
            return false;
        }
        if event.ratio <= 0.0 || event.ratio < self.config.threshold {
            return false;
        }
        self.phases.insert(event.key, RevealPhase::Shown);
        self.observed.remove(&event.key);
        true
    }

    /// Drain `source` and apply every event. Returns how many elements were
    /// revealed.
    pub fn pump(&mut self, source: &mut impl VisibilitySource) -> usize {
        source
            .drain()
            .into_iter()
            .filter(|event| self.on_visibility(*event))
            .count()
    }

    pub fn phase(&self, key: RevealKey) -> Option<RevealPhase> {
        self.phases.get(&key).copied()
    }

    /// Unregistered elements are treated as shown.
    pub fn is_shown(&self, key: RevealKey) -> bool {
        self.phase(key) != Some(RevealPhase::Pending)
    }

    pub fn is_observing(&self, key: RevealKey) -> bool {
        self.observed.contains(&key)
    }
}

/// Visibility computed from widget rectangles laid out during a frame.
pub struct FrameVisibility {
    viewport: egui::Rect,
    margin: f32,
    events: Vec<VisibilityEvent>,
}

impl FrameVisibility {
    pub fn new(viewport: egui::Rect, margin: f32) -> Self {
        Self {
            viewport,
            margin,
            events: Vec::new(),
        }
    }

    /// Note where `key` was laid out this frame.
    pub fn record(&mut self, key: RevealKey, rect: egui::Rect) {
        let ratio = intersection_ratio(rect, self.viewport, self.margin);
        self.events.push(VisibilityEvent { key, ratio });
    }

    /// Like [`record`](Self::record) for an element inside a clipping
    /// container such as a scroll area.
    pub fn record_in(&mut self, key: RevealKey, rect: egui::Rect, clip: egui::Rect) {
        let root = clip.intersect(self.viewport);
        let ratio = intersection_ratio(rect, root, self.margin);
        self.events.push(VisibilityEvent { key, ratio });
    }
}

impl VisibilitySource for FrameVisibility {
    fn drain(&mut self) -> Vec<VisibilityEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2, Rect};

    struct Scripted(Vec<VisibilityEvent>);

    impl VisibilitySource for Scripted {
        fn drain(&mut self) -> Vec<VisibilityEvent> {
            std::mem::take(&mut self.0)
        }
    }

    fn seen(key: RevealKey, ratio: f32) -> VisibilityEvent {
        VisibilityEvent { key, ratio }
    }

    #[test]
    fn test_reveal_is_one_way() {
        let mut tracker = RevealTracker::new(RevealConfig::default());
        let key = RevealKey::Project(1);
        tracker.observe([key]);
        assert_eq!(tracker.phase(key), Some(RevealPhase::Pending));

        assert!(tracker.on_visibility(seen(key, 0.5)));
        assert!(tracker.is_shown(key));
        assert!(!tracker.is_observing(key));

        // Leaving and re-entering does nothing.
        assert!(!tracker.on_visibility(seen(key, 0.0)));
        assert!(!tracker.on_visibility(seen(key, 1.0)));
        assert_eq!(tracker.phase(key), Some(RevealPhase::Shown));
    }

    #[test]
    fn test_below_threshold_stays_pending() {
        let mut tracker = RevealTracker::new(RevealConfig::default());
        let key = RevealKey::Lab(3);
        tracker.observe([key]);
        assert!(!tracker.on_visibility(seen(key, 0.05)));
        assert!(!tracker.on_visibility(seen(key, 0.0)));
        assert!(tracker.is_observing(key));
        assert!(tracker.on_visibility(seen(key, 0.1)));
    }

    #[test]
    fn test_rescan_keeps_shown_and_adds_new() {
        let mut tracker = RevealTracker::new(RevealConfig::default());
        tracker.observe([RevealKey::Lab(1), RevealKey::Lab(2)]);
        tracker.on_visibility(seen(RevealKey::Lab(1), 1.0));

        tracker.observe([RevealKey::Lab(1), RevealKey::Lab(2), RevealKey::Lab(7)]);
        assert!(tracker.is_shown(RevealKey::Lab(1)));
        assert!(!tracker.is_observing(RevealKey::Lab(1)));
        assert!(tracker.is_observing(RevealKey::Lab(2)));
        assert!(tracker.is_observing(RevealKey::Lab(7)));
    }

    #[test]
    fn test_unobserved_events_are_ignored() {
        let mut tracker = RevealTracker::new(RevealConfig::default());
        tracker.observe([RevealKey::Lab(1)]);
        tracker.observe([RevealKey::Lab(2)]);
        assert!(!tracker.on_visibility(seen(RevealKey::Lab(1), 1.0)));
        assert_eq!(tracker.phase(RevealKey::Lab(1)), Some(RevealPhase::Pending));
    }

    #[test]
    fn test_pump_from_frame_rects() {
        let mut tracker = RevealTracker::new(RevealConfig::default());
        tracker.observe([RevealKey::Project(1), RevealKey::Project(2)]);

        let viewport = Rect::from_min_size(pos2(0.0, 0.0), vec2(1000.0, 800.0));
        let mut frame = FrameVisibility::new(viewport, tracker.config().margin);
        frame.record(
            RevealKey::Project(1),
            Rect::from_min_size(pos2(0.0, 100.0), vec2(300.0, 300.0)),
        );
        // Just past the margin.
        frame.record(
            RevealKey::Project(2),
            Rect::from_min_size(pos2(0.0, 900.0), vec2(300.0, 300.0)),
        );

        assert_eq!(tracker.pump(&mut frame), 1);
        assert!(tracker.is_shown(RevealKey::Project(1)));
        assert!(!tracker.is_shown(RevealKey::Project(2)));
        assert!(frame.drain().is_empty());
    }

    #[test]
    fn test_clipped_container_hides_overflow() {
        let viewport = Rect::from_min_size(pos2(0.0, 0.0), vec2(1000.0, 800.0));
        let strip = Rect::from_min_size(pos2(0.0, 200.0), vec2(400.0, 300.0));
        let mut frame = FrameVisibility::new(viewport, 0.0);
        // Scrolled far to the right inside the strip.
        frame.record_in(
            RevealKey::Lab(9),
            Rect::from_min_size(pos2(600.0, 200.0), vec2(280.0, 300.0)),
            strip,
        );
        assert_eq!(frame.drain(), vec![seen(RevealKey::Lab(9), 0.0)]);
    }

    #[test]
    fn test_scripted_source() {
        let mut tracker = RevealTracker::new(RevealConfig::default());
        tracker.observe([RevealKey::Section("arsenal")]);
        let mut source = Scripted(vec![
            seen(RevealKey::Section("arsenal"), 0.3),
            seen(RevealKey::Section("arsenal"), 0.9),
        ]);
        assert_eq!(tracker.pump(&mut source), 1);
    }
}
