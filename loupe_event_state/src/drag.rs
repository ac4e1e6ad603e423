// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Captured drag sequences: exclusive pointer tracking with movement deltas.
//!
//! ## Usage
//!
//! 1) On pointer down, call [`DragSequence::begin`]; the first pointer to go
//!    down captures the sequence.
//! 2) On each move event, call [`DragSequence::update`]; it returns the delta
//!    since the last update for the captured pointer and `None` for any other.
//! 3) On pointer up, call [`DragSequence::finish`]; on capture loss, call
//!    [`DragSequence::cancel`]. Both end the sequence, after which further
//!    moves for that pointer are discarded.
//! 4) Optionally call [`DragSequence::total_offset`] for the cumulative offset
//!    from the capture position.
//!
//! Cancellation is unconditional and is the only way a sequence ends other
//! than an explicit up; there is no timeout path.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use loupe_event_state::drag::{DragSequence, PointerId};
//!
//! let mut drag = DragSequence::default();
//! drag.begin(PointerId(1), Point::new(0.0, 0.0));
//!
//! let d1 = drag.update(PointerId(1), Point::new(5.0, 3.0)).unwrap();
//! assert_eq!((d1.x, d1.y), (5.0, 3.0));
//!
//! // Cancel discards the sequence; later moves produce nothing.
//! drag.cancel(PointerId(1));
//! assert!(drag.update(PointerId(1), Point::new(50.0, 50.0)).is_none());
//! ```

use kurbo::{Point, Vec2};

/// Opaque identifier of a pointing device, assigned by the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// Tracks one exclusive drag sequence captured by a single pointer.
///
/// At most one pointer owns the sequence at a time. Events from other
/// pointers are ignored until the owning pointer finishes or is cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragSequence {
    captured: Option<Capture>,
}

#[derive(Debug, Clone, Copy)]
struct Capture {
    pointer: PointerId,
    start_pos: Point,
    last_pos: Point,
}

impl DragSequence {
    /// Attempts to start a drag captured by `pointer` at `pos`.
    ///
    /// Returns `true` if the pointer captured the sequence. A down event
    /// while another pointer holds the capture is ignored and returns
    /// `false`.
    pub fn begin(&mut self, pointer: PointerId, pos: Point) -> bool {
        if self.captured.is_some() {
            return false;
        }
        self.captured = Some(Capture {
            pointer,
            start_pos: pos,
            last_pos: pos,
        });
        true
    }

    /// Feeds a move event, returning the delta since the previous position.
    ///
    /// Returns `None` when no sequence is active or when `pointer` is not
    /// the captured pointer.
    pub fn update(&mut self, pointer: PointerId, pos: Point) -> Option<Vec2> {
        let capture = self.captured.as_mut()?;
        if capture.pointer != pointer {
            return None;
        }
        let delta = pos - capture.last_pos;
        capture.last_pos = pos;
        Some(delta)
    }

    /// Gets the total offset from the capture position for the captured pointer.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.captured.map(|c| current_pos - c.start_pos)
    }

    /// Ends the sequence on pointer up.
    ///
    /// Returns `true` if `pointer` held the capture and the sequence ended.
    pub fn finish(&mut self, pointer: PointerId) -> bool {
        self.release(pointer)
    }

    /// Ends the sequence on cancellation (including loss of capture).
    ///
    /// Returns `true` if `pointer` held the capture and the sequence ended.
    /// Subsequent moves for the pointer are discarded.
    pub fn cancel(&mut self, pointer: PointerId) -> bool {
        self.release(pointer)
    }

    /// Returns `true` while a drag sequence is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.captured.is_some()
    }

    /// Returns the pointer currently holding the capture, if any.
    #[must_use]
    pub fn captured_pointer(&self) -> Option<PointerId> {
        self.captured.map(|c| c.pointer)
    }

    fn release(&mut self, pointer: PointerId) -> bool {
        match self.captured {
            Some(c) if c.pointer == pointer => {
                self.captured = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sequence_is_inactive() {
        let drag = DragSequence::default();
        assert!(!drag.is_active());
        assert!(drag.captured_pointer().is_none());
    }

    #[test]
    fn begin_captures_the_pointer() {
        let mut drag = DragSequence::default();

        assert!(drag.begin(PointerId(3), Point::new(10.0, 20.0)));

        assert!(drag.is_active());
        assert_eq!(drag.captured_pointer(), Some(PointerId(3)));
    }

    #[test]
    fn second_pointer_cannot_steal_capture() {
        let mut drag = DragSequence::default();
        drag.begin(PointerId(1), Point::new(0.0, 0.0));

        assert!(!drag.begin(PointerId(2), Point::new(5.0, 5.0)));
        assert_eq!(drag.captured_pointer(), Some(PointerId(1)));
    }

    #[test]
    fn update_returns_delta_for_captured_pointer() {
        let mut drag = DragSequence::default();
        drag.begin(PointerId(1), Point::new(10.0, 20.0));

        let delta = drag.update(PointerId(1), Point::new(15.0, 25.0));

        assert_eq!(delta, Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn update_discards_other_pointers() {
        let mut drag = DragSequence::default();
        drag.begin(PointerId(1), Point::new(0.0, 0.0));

        assert_eq!(drag.update(PointerId(2), Point::new(50.0, 50.0)), None);

        // The captured pointer's tracking is unaffected.
        let delta = drag.update(PointerId(1), Point::new(1.0, 2.0));
        assert_eq!(delta, Some(Vec2::new(1.0, 2.0)));
    }

    #[test]
    fn update_without_active_sequence_returns_none() {
        let mut drag = DragSequence::default();

        assert_eq!(drag.update(PointerId(1), Point::new(15.0, 25.0)), None);
    }

    #[test]
    fn multiple_updates_track_incremental_deltas() {
        let mut drag = DragSequence::default();
        drag.begin(PointerId(1), Point::new(0.0, 0.0));

        assert_eq!(
            drag.update(PointerId(1), Point::new(5.0, 3.0)),
            Some(Vec2::new(5.0, 3.0))
        );
        assert_eq!(
            drag.update(PointerId(1), Point::new(8.0, 7.0)),
            Some(Vec2::new(3.0, 4.0))
        );
        assert_eq!(
            drag.update(PointerId(1), Point::new(10.0, 10.0)),
            Some(Vec2::new(2.0, 3.0))
        );
    }

    #[test]
    fn total_offset_measures_from_capture_position() {
        let mut drag = DragSequence::default();
        drag.begin(PointerId(1), Point::new(10.0, 20.0));
        drag.update(PointerId(1), Point::new(15.0, 25.0));

        let total = drag.total_offset(Point::new(20.0, 35.0));

        assert_eq!(total, Some(Vec2::new(10.0, 15.0)));
    }

    #[test]
    fn total_offset_without_active_sequence_returns_none() {
        let drag = DragSequence::default();

        assert_eq!(drag.total_offset(Point::new(100.0, 200.0)), None);
    }

    #[test]
    fn finish_ends_sequence_for_captured_pointer() {
        let mut drag = DragSequence::default();
        drag.begin(PointerId(1), Point::new(0.0, 0.0));

        assert!(drag.finish(PointerId(1)));
        assert!(!drag.is_active());
    }

    #[test]
    fn finish_ignores_other_pointers() {
        let mut drag = DragSequence::default();
        drag.begin(PointerId(1), Point::new(0.0, 0.0));

        assert!(!drag.finish(PointerId(2)));
        assert!(drag.is_active());
    }

    #[test]
    fn cancel_discards_later_moves() {
        let mut drag = DragSequence::default();
        drag.begin(PointerId(1), Point::new(0.0, 0.0));

        assert!(drag.cancel(PointerId(1)));

        assert_eq!(drag.update(PointerId(1), Point::new(50.0, 50.0)), None);
        assert!(!drag.is_active());
    }

    #[test]
    fn cancel_on_fresh_sequence_is_safe() {
        let mut drag = DragSequence::default();

        assert!(!drag.cancel(PointerId(1)));
        assert!(!drag.is_active());
    }

    #[test]
    fn new_capture_after_finish_starts_fresh() {
        let mut drag = DragSequence::default();
        drag.begin(PointerId(1), Point::new(0.0, 0.0));
        drag.update(PointerId(1), Point::new(10.0, 10.0));
        drag.finish(PointerId(1));

        assert!(drag.begin(PointerId(2), Point::new(50.0, 60.0)));
        assert_eq!(
            drag.total_offset(Point::new(55.0, 65.0)),
            Some(Vec2::new(5.0, 5.0))
        );
    }

    #[test]
    fn negative_and_zero_movement_deltas() {
        let mut drag = DragSequence::default();
        drag.begin(PointerId(1), Point::new(100.0, 100.0));

        assert_eq!(
            drag.update(PointerId(1), Point::new(90.0, 85.0)),
            Some(Vec2::new(-10.0, -15.0))
        );
        assert_eq!(
            drag.update(PointerId(1), Point::new(90.0, 85.0)),
            Some(Vec2::new(0.0, 0.0))
        );
    }
}
