// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Event State: pointer-sequence state managers for viewer interactions.
//!
//! This crate provides small, focused state machines for pointer interactions
//! that require stateful tracking across multiple events. It currently covers
//! one pattern:
//!
//! - [`drag`]: Track an exclusive, captured drag sequence keyed by pointer id,
//!   producing movement deltas and total offsets.
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: it handles one interaction pattern.
//! - **Stateful but simple**: it tracks just enough state to compute deltas.
//! - **Integration-friendly**: it works with any event routing layer; callers
//!   feed it raw positions and pointer ids, it never reads input devices.
//!
//! The crate does not assume any particular UI framework or event system.
//! Position and delta types come from `kurbo` ([`kurbo::Point`],
//! [`kurbo::Vec2`]).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use loupe_event_state::drag::{DragSequence, PointerId};
//!
//! let mut drag = DragSequence::default();
//!
//! // Pointer 7 goes down at (10, 20) and captures the sequence.
//! assert!(drag.begin(PointerId(7), Point::new(10.0, 20.0)));
//!
//! // A different pointer cannot steal the capture.
//! assert!(!drag.begin(PointerId(8), Point::new(0.0, 0.0)));
//!
//! // Moves from the captured pointer yield deltas; others are discarded.
//! let delta = drag.update(PointerId(7), Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(delta.x, 5.0);
//! assert!(drag.update(PointerId(8), Point::new(99.0, 99.0)).is_none());
//!
//! // Releasing the captured pointer ends the sequence.
//! assert!(drag.finish(PointerId(7)));
//! assert!(!drag.is_active());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
