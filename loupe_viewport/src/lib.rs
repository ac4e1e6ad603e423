// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Viewport: a headless viewer engine for a single image or document page.
//!
//! This crate provides a small, headless model of a zoom/pan/rotate view over
//! one piece of rectangular content inside a resizable container. It focuses
//! on:
//! - Authoritative view state (scale, quarter-turn rotation, offset, active
//!   anchor, fitted flag).
//! - Aspect-preserving fit of the content into the container, decoupled from
//!   rasterized density by a render multiplier.
//! - Anchored offset clamping: nine-grid anchors pin content edges flush
//!   against the container while zooming.
//! - Nine-grid navigation to the corners, edge midpoints, and center.
//! - A single ordered [`ViewerEvent`] stream so interleaved gestures and
//!   layout notifications replay deterministically.
//!
//! It does **not** fetch, decode, or draw anything. Callers are expected to:
//! - Load content and report its intrinsic size via
//!   [`Viewer::set_content_size`] (or [`ViewerEvent::ContentLoaded`]).
//! - Observe the host element's layout and report it via
//!   [`Viewer::set_container_size`] (or [`ViewerEvent::ContainerResized`]).
//! - Apply the produced [`ViewTransform`] to the content's display layer,
//!   laid out unrotated at baseline size, centered in the container.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use loupe_viewport::{GridAnchor, Viewer};
//!
//! let mut viewer = Viewer::new();
//!
//! // Sizes arrive asynchronously; whichever lands last triggers the fit.
//! viewer.set_container_size(Size::new(500.0, 500.0));
//! viewer.set_content_size(Size::new(1000.0, 500.0));
//! assert_eq!(viewer.transform().scale, 0.5);
//!
//! // Jump to the top-left region at full render resolution.
//! viewer.navigate_to(GridAnchor::TOP_LEFT);
//! assert_eq!(viewer.transform().scale, 1.0);
//!
//! // The host applies this to the display layer.
//! let transform = viewer.transform();
//! ```
//!
//! ## Design notes
//!
//! - Sizing is rotation-naïve: the baseline footprint is always that of the
//!   unrotated content, and rotation is applied as a visual transform on
//!   top. Rotating therefore never re-clamps the offset.
//! - Dragging is free: clamping is deferred to the next zoom or grid
//!   navigation, keeping pointer movement responsive.
//! - Incomplete geometry (zero or unknown sizes) short-circuits every
//!   computation to a safe no-op; there are no error states and no panics.
//! - Pointer sequences are captured per pointer id via
//!   [`loupe_event_state::drag::DragSequence`]; see [`events`].
//!
//! This crate is `no_std`.

#![no_std]

mod anchor;
pub mod events;
mod transform;
mod viewer;

pub use anchor::{AnchorCell, Axis, EdgeConstraint, GridAnchor, PinnedEdge};
pub use events::ViewerEvent;
pub use transform::{Rotation, ViewTransform};
pub use viewer::{ViewState, Viewer, ViewerDebugInfo};
