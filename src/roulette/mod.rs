//! Roulette session state
//!
//! [`Roulette`] owns the name list, the wheel's orientation and the spin in
//! progress. All transitions go through [`Roulette::add`],
//! [`Roulette::remove`], [`Roulette::spin`], [`Roulette::on_frame`] and
//! [`Roulette::teardown`].

mod names;
mod spin;
pub mod svg;

pub use names::{Entry, NameList};
pub use spin::{select_index, SpinMotion};

use crate::animation::{FrameHandle, FrameScheduler};

/// Minimum number of entries needed to spin
pub const MIN_ENTRIES: usize = 2;

/// A spin waiting for its next frame
#[derive(Debug, Clone, Copy)]
struct SpinTask {
    motion: SpinMotion,
    frame: FrameHandle,
    /// Number of wedges when the spin started
    sections: usize,
}

/// Result of servicing a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// The handle does not belong to the current spin
    Ignored,
    /// The wheel moved and another frame was requested
    Spinning { rotation: f64 },
    /// The wheel came to rest
    Stopped { rotation: f64, selected: Option<usize> },
}

/// Widget state for one roulette wheel
#[derive(Debug, Default)]
pub struct Roulette {
    names: NameList,
    is_spinning: bool,
    selected_index: usize,
    rotation_degrees: f64,
    task: Option<SpinTask>,
}

impl Roulette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name; blank input is ignored
    pub fn add(&mut self, text: &str) -> Option<&Entry> {
        let entry = self.names.add(text)?;
        log::info!("Added '{}' ({})", entry.text, entry.id);
        Some(entry)
    }

    /// Remove a name by id.
    ///
    /// The selected index is left untouched, so after a removal it may point
    /// at a different entry or past the end of the list until the next spin.
    pub fn remove(&mut self, id: &str) -> Option<Entry> {
        let entry = self.names.remove(id)?;
        log::info!("Removed '{}' ({})", entry.text, entry.id);
        Some(entry)
    }

    pub fn names(&self) -> &NameList {
        &self.names
    }

    pub fn is_spinning(&self) -> bool {
        self.is_spinning
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }

    /// Whether a spin may start now
    pub fn can_spin(&self) -> bool {
        !self.is_spinning && self.names.len() >= MIN_ENTRIES
    }

    /// Whether the minimum-entries notice should be shown
    pub fn needs_more_entries(&self) -> bool {
        self.names.len() < MIN_ENTRIES
    }

    /// Index to highlight as the winner, if a winner is displayed at all
    pub fn winner_index(&self) -> Option<usize> {
        if self.is_spinning || self.names.len() < MIN_ENTRIES {
            None
        } else {
            Some(self.selected_index)
        }
    }

    /// The highlighted entry, if the selected index still points at one
    pub fn winner(&self) -> Option<&Entry> {
        self.winner_index().and_then(|i| self.names.get(i))
    }

    /// Start spinning. Returns false if the wheel cannot spin right now.
    pub fn spin(&mut self, frames: &mut FrameScheduler) -> bool {
        if !self.can_spin() {
            return false;
        }

        self.is_spinning = true;
        self.task = Some(SpinTask {
            motion: SpinMotion::new(self.rotation_degrees),
            frame: frames.request(),
            sections: self.names.len(),
        });
        log::info!(
            "Spinning {} names from {:.1}°",
            self.names.len(),
            self.rotation_degrees
        );
        true
    }

    /// Advance the spin for a serviced frame
    pub fn on_frame(&mut self, handle: FrameHandle, frames: &mut FrameScheduler) -> FrameOutcome {
        let task = match self.task {
            Some(task) if task.frame == handle => task,
            _ => return FrameOutcome::Ignored,
        };

        let motion = task.motion.step();
        self.rotation_degrees = motion.rotation;

        if motion.is_moving() {
            self.task = Some(SpinTask {
                motion,
                frame: frames.request(),
                ..task
            });
            return FrameOutcome::Spinning {
                rotation: motion.rotation,
            };
        }

        // Sections are fixed at spin start; names changed mid-spin leave the
        // index stale like any other removal.
        self.task = None;
        let selected = select_index(motion.rotation, task.sections);
        if let Some(index) = selected {
            self.selected_index = index;
        }
        self.is_spinning = false;

        match self.winner() {
            Some(entry) => log::info!("Stopped at {:.1}°: '{}'", motion.rotation, entry.text),
            None => log::info!("Stopped at {:.1}° with no winner", motion.rotation),
        }

        FrameOutcome::Stopped {
            rotation: motion.rotation,
            selected,
        }
    }

    /// Cancel any pending frame before the hosting view goes away
    pub fn teardown(&mut self, frames: &mut FrameScheduler) {
        if let Some(task) = self.task.take() {
            frames.cancel(task.frame);
            log::debug!("Cancelled pending spin frame");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Service frames until the wheel stops, returning the number of frames
    fn run_spin(roulette: &mut Roulette, frames: &mut FrameScheduler) -> usize {
        let mut count = 0;
        while frames.has_pending() {
            for handle in frames.take_due() {
                roulette.on_frame(handle, frames);
            }
            count += 1;
            assert!(count < 10_000, "spin never stopped");
        }
        count
    }

    fn with_names(names: &[&str]) -> Roulette {
        let mut roulette = Roulette::new();
        for name in names {
            roulette.add(name);
        }
        roulette
    }

    #[test]
    fn test_spin_requires_two_entries() {
        let mut frames = FrameScheduler::new();
        let mut roulette = with_names(&["Alice"]);

        assert!(!roulette.can_spin());
        assert!(!roulette.spin(&mut frames));
        assert!(!roulette.is_spinning());
        assert!(!frames.has_pending());
        assert_eq!(roulette.rotation_degrees(), 0.0);
        assert!(roulette.needs_more_entries());
    }

    #[test]
    fn test_spin_rejected_while_spinning() {
        let mut frames = FrameScheduler::new();
        let mut roulette = with_names(&["Alice", "Bob"]);

        assert!(roulette.spin(&mut frames));
        assert!(!roulette.can_spin());
        assert!(!roulette.spin(&mut frames));
        assert_eq!(frames.take_due().len(), 1);
    }

    #[test]
    fn test_spin_runs_to_completion() {
        let mut frames = FrameScheduler::new();
        let mut roulette = with_names(&["Alice", "Bob", "Carol"]);

        roulette.spin(&mut frames);
        assert!(roulette.is_spinning());
        assert_eq!(roulette.winner_index(), None);

        let count = run_spin(&mut roulette, &mut frames);
        assert!(count > 1);
        assert!(!roulette.is_spinning());
        assert!(roulette.selected_index() < 3);
        assert_eq!(
            Some(roulette.selected_index()),
            select_index(roulette.rotation_degrees(), 3)
        );
        assert!(roulette.winner().is_some());
    }

    #[test]
    fn test_rotation_accumulates_across_spins() {
        let mut frames = FrameScheduler::new();
        let mut roulette = with_names(&["Alice", "Bob"]);

        roulette.spin(&mut frames);
        run_spin(&mut roulette, &mut frames);
        let first = roulette.rotation_degrees();
        assert!(first > 360.0);

        roulette.spin(&mut frames);
        run_spin(&mut roulette, &mut frames);
        assert!(roulette.rotation_degrees() > first);
    }

    #[test]
    fn test_rotation_published_every_frame() {
        let mut frames = FrameScheduler::new();
        let mut roulette = with_names(&["Alice", "Bob"]);
        roulette.spin(&mut frames);

        let handle = frames.take_due()[0];
        let outcome = roulette.on_frame(handle, &mut frames);
        assert_eq!(outcome, FrameOutcome::Spinning { rotation: 45.0 });
        assert_eq!(roulette.rotation_degrees(), 45.0);
        assert!(roulette.is_spinning());
    }

    #[test]
    fn test_stale_frame_ignored() {
        let mut frames = FrameScheduler::new();
        let mut roulette = with_names(&["Alice", "Bob"]);
        roulette.spin(&mut frames);

        let handle = frames.take_due()[0];
        roulette.on_frame(handle, &mut frames);
        assert_eq!(roulette.on_frame(handle, &mut frames), FrameOutcome::Ignored);
    }

    #[test]
    fn test_teardown_cancels_pending_frame() {
        let mut frames = FrameScheduler::new();
        let mut roulette = with_names(&["Alice", "Bob"]);
        roulette.spin(&mut frames);
        assert!(frames.has_pending());

        roulette.teardown(&mut frames);
        assert!(!frames.has_pending());
        let rotation = roulette.rotation_degrees();
        assert_eq!(rotation, 0.0);
    }

    #[test]
    fn test_remove_keeps_stale_selected_index() {
        // Known quirk: removal never adjusts the selected index.
        let mut frames = FrameScheduler::new();
        let mut roulette = with_names(&["Alice", "Bob", "Carol", "Dave"]);
        roulette.spin(&mut frames);
        run_spin(&mut roulette, &mut frames);

        let selected = roulette.selected_index();
        let ids: Vec<String> = roulette.names().entries().iter().map(|e| e.id.clone()).collect();
        for id in &ids[..3] {
            roulette.remove(id);
        }

        assert_eq!(roulette.selected_index(), selected);
        assert_eq!(roulette.names().len(), 1);
        assert_eq!(roulette.winner_index(), None);
    }

    #[test]
    fn test_stale_index_past_end_highlights_nothing() {
        let mut frames = FrameScheduler::new();
        let mut roulette = with_names(&["A", "B", "C", "D"]);
        // Coming to rest at 45° leaves wedge 3 under the pointer.
        roulette.rotation_degrees = 45.0 - spin_travel();
        roulette.spin(&mut frames);
        run_spin(&mut roulette, &mut frames);
        assert_eq!(roulette.selected_index(), 3);

        let last = roulette.names().entries()[3].id.clone();
        let first = roulette.names().entries()[0].id.clone();
        roulette.remove(&last);
        roulette.remove(&first);

        assert_eq!(roulette.winner_index(), Some(3));
        assert!(roulette.winner().is_none());
    }

    /// Total rotation added by one undisturbed spin
    fn spin_travel() -> f64 {
        let mut motion = SpinMotion::new(0.0);
        loop {
            motion = motion.step();
            if !motion.is_moving() {
                return motion.rotation;
            }
        }
    }

    #[test]
    fn test_initial_winner_is_first_entry() {
        let roulette = with_names(&["Alice", "Bob"]);
        assert_eq!(roulette.winner_index(), Some(0));
        assert_eq!(roulette.winner().map(|e| e.text.as_str()), Some("Alice"));
    }

    #[test]
    fn test_end_to_end_alice_and_bob() {
        let mut frames = FrameScheduler::new();
        let mut roulette = Roulette::new();

        roulette.add("Alice");
        roulette.add("Bob");
        assert_eq!(roulette.names().len(), 2);
        assert!(roulette.can_spin());

        assert!(roulette.spin(&mut frames));
        assert!(roulette.is_spinning());
        run_spin(&mut roulette, &mut frames);
        assert!(!roulette.is_spinning());
        assert!(roulette.selected_index() < 2);

        let alice = roulette.names().entries()[0].id.clone();
        roulette.remove(&alice);
        assert_eq!(roulette.names().len(), 1);
        assert!(!roulette.can_spin());
        assert!(roulette.needs_more_entries());
    }

    #[test]
    fn test_names_added_mid_spin_do_not_change_sections() {
        let mut frames = FrameScheduler::new();
        let mut roulette = with_names(&["Alice", "Bob"]);
        // At rest at 45°: wedge 1 of two, but wedge 4 of five.
        roulette.rotation_degrees = 45.0 - spin_travel();
        roulette.spin(&mut frames);
        for name in ["Carol", "Dave", "Eve"] {
            roulette.add(name);
        }
        run_spin(&mut roulette, &mut frames);

        assert_eq!(select_index(roulette.rotation_degrees(), 5), Some(4));
        assert_eq!(roulette.selected_index(), 1);
        assert_eq!(roulette.winner().map(|e| e.text.as_str()), Some("Bob"));
    }

    #[test]
    fn test_list_emptied_mid_spin_leaves_stale_index() {
        let mut frames = FrameScheduler::new();
        let mut roulette = with_names(&["Alice", "Bob"]);
        roulette.spin(&mut frames);

        let ids: Vec<String> = roulette.names().entries().iter().map(|e| e.id.clone()).collect();
        for id in &ids {
            roulette.remove(id);
        }
        run_spin(&mut roulette, &mut frames);

        assert!(!roulette.is_spinning());
        assert_eq!(
            Some(roulette.selected_index()),
            select_index(roulette.rotation_degrees(), 2)
        );
        assert_eq!(roulette.winner_index(), None);
        assert!(roulette.winner().is_none());
    }
}
