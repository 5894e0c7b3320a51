//! Frame sequencer: an ordered list of timed frames whose actions fire once.
//!
//! A frame is a set of action tags plus a duration. The sequencer advances
//! by elapsed time and, whenever playback moves into a later frame, hands
//! back the actions of every frame it entered, in order. Frames skipped
//! over by a long `dt` still fire, and zero-length frames fire the moment
//! they are reached. The caller decides what an action means; the sequencer
//! holds no game logic.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Actions fired by a single `update`.
pub type Fired<A> = SmallVec<[A; 4]>;

/// One timed entry of a timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame<A> {
    actions: SmallVec<[A; 2]>,
    duration: f32,
}

impl<A> Frame<A> {
    /// A frame lasting `duration` seconds. Negative durations count as zero.
    #[must_use]
    pub fn new(duration: f32) -> Self {
        Self {
            actions: SmallVec::new(),
            duration: duration.max(0.0),
        }
    }

    /// Add an action fired on entry.
    #[must_use]
    pub fn with_action(mut self, action: A) -> Self {
        self.actions.push(action);
        self
    }

    #[must_use]
    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }
}

/// Plays a list of frames against elapsed time.
///
/// ## Usage
///
/// ```
/// use fusion_duel::timeline::{Frame, Sequencer};
///
/// let mut seq = Sequencer::new([
///     Frame::new(0.5).with_action("a"),
///     Frame::new(0.5).with_action("b"),
/// ]);
///
/// assert_eq!(seq.update(0.0).as_slice(), &["a"]);
/// assert!(seq.update(0.1).is_empty());
/// assert_eq!(seq.update(2.0).as_slice(), &["b"]);
/// assert!(seq.is_done());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Sequencer<A> {
    frames: Vec<Frame<A>>,
    /// End time of each frame, non-decreasing.
    ends: Vec<f32>,
    total: f32,
    elapsed: f32,
    /// `None` before the first update after a reset.
    current: Option<usize>,
    done: bool,
}

impl<A: Clone> Sequencer<A> {
    /// Build a sequencer, ready to play from the first frame.
    #[must_use]
    pub fn new(frames: impl IntoIterator<Item = Frame<A>>) -> Self {
        let frames: Vec<Frame<A>> = frames.into_iter().collect();
        let ends: Vec<f32> = frames
            .iter()
            .scan(0.0_f32, |acc, frame| {
                *acc += frame.duration;
                Some(*acc)
            })
            .collect();
        let total = ends.last().copied().unwrap_or(0.0);

        Self {
            frames,
            ends,
            total,
            elapsed: 0.0,
            current: None,
            done: false,
        }
    }

    /// Rewind to before the first frame. The next `update`, even with a
    /// zero `dt`, fires the first frame again.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.current = None;
        self.done = false;
    }

    /// Advance by `dt` seconds and return the actions of every frame
    /// entered, in frame order. Does nothing once done.
    pub fn update(&mut self, dt: f32) -> Fired<A> {
        let mut fired = Fired::new();
        if self.done {
            return fired;
        }

        self.elapsed += dt.max(0.0);
        if self.elapsed >= self.total {
            self.elapsed = self.total;
            self.done = true;
        }

        let Some(active) = self.active_index() else {
            return fired;
        };

        let first = self.current.map_or(0, |index| index + 1);
        if first <= active {
            for frame in &self.frames[first..=active] {
                fired.extend(frame.actions.iter().cloned());
            }
            self.current = Some(active);
        }
        fired
    }

    /// Frame containing the elapsed time; the last frame once done.
    fn active_index(&self) -> Option<usize> {
        let last = self.frames.len().checked_sub(1)?;
        if self.done {
            return Some(last);
        }
        // First frame whose span ends after `elapsed`. Zero-length frames
        // have no span and are passed over here, then fired on the way by.
        let index = self.ends.partition_point(|&end| end <= self.elapsed);
        Some(index.min(last))
    }
}

impl<A> Sequencer<A> {
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Index of the frame that last fired, `None` before the first update.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Time spent inside the current frame.
    #[must_use]
    pub fn frame_elapsed(&self) -> f32 {
        let Some(index) = self.current else {
            return 0.0;
        };
        let start = index.checked_sub(1).map_or(0.0, |prev| self.ends[prev]);
        (self.elapsed - start).max(0.0)
    }

    /// Sum of all frame durations.
    #[must_use]
    pub fn total_duration(&self) -> f32 {
        self.total
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(durations: &[f32]) -> Sequencer<usize> {
        Sequencer::new(
            durations
                .iter()
                .enumerate()
                .map(|(i, &d)| Frame::new(d).with_action(i)),
        )
    }

    #[test]
    fn test_first_frame_fires_on_zero_dt() {
        let mut s = seq(&[1.0, 1.0]);
        assert_eq!(s.current_index(), None);
        assert_eq!(s.update(0.0).as_slice(), &[0]);
        assert_eq!(s.current_index(), Some(0));
        assert!(s.update(0.0).is_empty());
    }

    #[test]
    fn test_frame_fires_once_while_active() {
        let mut s = seq(&[1.0, 1.0]);
        s.update(0.0);
        for _ in 0..5 {
            assert!(s.update(0.1).is_empty());
        }
        assert_eq!(s.update(0.6).as_slice(), &[1]);
    }

    #[test]
    fn test_large_dt_fires_every_skipped_frame() {
        let mut s = seq(&[0.2, 0.2, 0.2, 0.2]);
        assert_eq!(s.update(0.5).as_slice(), &[0, 1, 2]);
        assert_eq!(s.update(10.0).as_slice(), &[3]);
        assert!(s.is_done());
        assert_eq!(s.elapsed(), s.total_duration());
    }

    #[test]
    fn test_zero_duration_frame_fires_when_reached() {
        let mut s = seq(&[0.5, 0.0, 0.5]);
        assert_eq!(s.update(0.0).as_slice(), &[0]);
        assert_eq!(s.update(0.5).as_slice(), &[1, 2]);
    }

    #[test]
    fn test_trailing_zero_frame_fires_on_completion() {
        let mut s = seq(&[0.3, 0.0]);
        s.update(0.0);
        assert!(s.update(0.2).is_empty());
        assert_eq!(s.update(0.1).as_slice(), &[1]);
        assert!(s.is_done());
        assert_eq!(s.current_index(), Some(1));
    }

    #[test]
    fn test_all_zero_frames_fire_on_first_update() {
        let mut s = seq(&[0.0, 0.0, 0.0]);
        assert_eq!(s.update(0.0).as_slice(), &[0, 1, 2]);
        assert!(s.is_done());
    }

    #[test]
    fn test_empty_sequencer_completes_silently() {
        let mut s: Sequencer<usize> = Sequencer::new([]);
        assert!(s.update(0.1).is_empty());
        assert!(s.is_done());
        assert_eq!(s.current_index(), None);
    }

    #[test]
    fn test_done_ignores_updates() {
        let mut s = seq(&[0.1]);
        s.update(1.0);
        assert!(s.update(1.0).is_empty());
        assert_eq!(s.elapsed(), 0.1);
    }

    #[test]
    fn test_reset_refires_first_frame() {
        let mut s = seq(&[0.5, 0.5]);
        s.update(0.7);
        s.reset();
        assert!(!s.is_done());
        assert_eq!(s.elapsed(), 0.0);
        assert_eq!(s.update(0.0).as_slice(), &[0]);
    }

    #[test]
    fn test_frame_elapsed_restarts_per_frame() {
        let mut s = seq(&[0.5, 0.5]);
        assert_eq!(s.frame_elapsed(), 0.0);
        s.update(0.25);
        assert!((s.frame_elapsed() - 0.25).abs() < 1e-6);
        s.update(0.5);
        assert!((s.frame_elapsed() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_negative_duration_treated_as_zero() {
        let s = seq(&[-1.0, 0.5]);
        assert_eq!(s.total_duration(), 0.5);
    }

    #[test]
    fn test_multiple_actions_per_frame_keep_order() {
        let mut s = Sequencer::new([Frame::new(0.1).with_action('a').with_action('b')]);
        assert_eq!(s.update(0.0).as_slice(), &['a', 'b']);
    }
}
