// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One ordered event surface over the viewer.
//!
//! All three external event sources (pointer input, layout notifications,
//! discrete button gestures) funnel into a single [`ViewerEvent`] stream
//! consumed by [`Viewer::handle`], one event at a time, in arrival order.
//! Event sequences are therefore replayable: the same sequence applied to a
//! fresh viewer always produces the same transform, which is how the test
//! suite exercises interleavings without depending on timing.
//!
//! Pointer events follow a captured-sequence model: a down event with no
//! active sequence captures that pointer; move events from any other pointer
//! are discarded; an up or cancel event for the captured pointer ends the
//! sequence. Cancellation (including loss of capture) is the only path that
//! ends a sequence early, and there is no timeout path.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use loupe_viewport::{Viewer, ViewerEvent};
//! use loupe_event_state::drag::PointerId;
//!
//! let mut viewer = Viewer::new();
//! for event in [
//!     ViewerEvent::ContainerResized(Size::new(500.0, 500.0)),
//!     ViewerEvent::ContentLoaded(Size::new(1000.0, 500.0)),
//!     ViewerEvent::PointerDown { pointer: PointerId(1), pos: Point::new(100.0, 100.0) },
//!     ViewerEvent::PointerMove { pointer: PointerId(1), pos: Point::new(130.0, 90.0) },
//!     ViewerEvent::PointerUp { pointer: PointerId(1) },
//!     ViewerEvent::ZoomStep(0.2),
//! ] {
//!     viewer.handle(event);
//! }
//! assert_eq!(viewer.transform().scale, 0.7);
//! ```

use kurbo::{Point, Size};

use loupe_event_state::drag::PointerId;

use crate::anchor::GridAnchor;
use crate::viewer::Viewer;

/// A discrete external trigger fed to [`Viewer::handle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewerEvent {
    /// A pointer went down at `pos`, opening a drag sequence if none is
    /// active.
    PointerDown {
        /// Pointer reporting the event.
        pointer: PointerId,
        /// Position in device pixels.
        pos: Point,
    },
    /// A pointer moved; only the captured pointer's moves accumulate into
    /// the offset.
    PointerMove {
        /// Pointer reporting the event.
        pointer: PointerId,
        /// Position in device pixels.
        pos: Point,
    },
    /// A pointer was released, ending its drag sequence.
    PointerUp {
        /// Pointer reporting the event.
        pointer: PointerId,
    },
    /// A pointer's sequence was cancelled (including loss of capture);
    /// further moves from it are discarded.
    PointerCancel {
        /// Pointer reporting the event.
        pointer: PointerId,
    },
    /// A zoom step of the given scale delta (wheel tick or zoom button).
    ZoomStep(f64),
    /// A rotation step in quarter turns (negative is counter-clockwise).
    RotateStep(i32),
    /// A nine-grid cell pick as raw `(row, col)` indices; out-of-range
    /// cells are discarded.
    GridSelect(usize, usize),
    /// Reset to the best-fit center view.
    Reset,
    /// The host observed a new container size.
    ContainerResized(Size),
    /// The content finished loading and reported its intrinsic size.
    ContentLoaded(Size),
    /// A different content item was assigned to the viewer.
    ContentReplaced {
        /// Anchor the initial fit of the new content should focus.
        initial_anchor: Option<GridAnchor>,
    },
}

impl Viewer {
    /// Applies one event, synchronously and to completion.
    ///
    /// This is the single transition function behind every state change;
    /// the gesture methods it dispatches to can also be called directly by
    /// hosts that do their own event routing.
    pub fn handle(&mut self, event: ViewerEvent) {
        match event {
            ViewerEvent::PointerDown { pointer, pos } => {
                self.drag.begin(pointer, pos);
            }
            ViewerEvent::PointerMove { pointer, pos } => {
                if let Some(delta) = self.drag.update(pointer, pos) {
                    self.drag_by(delta);
                }
            }
            ViewerEvent::PointerUp { pointer } => {
                self.drag.finish(pointer);
            }
            ViewerEvent::PointerCancel { pointer } => {
                self.drag.cancel(pointer);
            }
            ViewerEvent::ZoomStep(delta) => self.zoom_by(delta),
            ViewerEvent::RotateStep(quarter_turns) => self.rotate_by(quarter_turns),
            ViewerEvent::GridSelect(row, col) => {
                if let Some(anchor) = GridAnchor::from_cell(row, col) {
                    self.navigate_to(anchor);
                }
            }
            ViewerEvent::Reset => self.reset(),
            ViewerEvent::ContainerResized(size) => self.set_container_size(size),
            ViewerEvent::ContentLoaded(size) => self.set_content_size(size),
            ViewerEvent::ContentReplaced { initial_anchor } => {
                self.replace_content(initial_anchor);
            }
        }
    }
}
