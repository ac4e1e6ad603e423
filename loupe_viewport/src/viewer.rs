// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use loupe_event_state::drag::DragSequence;

use crate::anchor::{Axis, EdgeConstraint, GridAnchor, PinnedEdge};
use crate::transform::{Rotation, ViewTransform};

/// Snapshot of the authoritative view state.
///
/// The record is mutated exclusively through [`Viewer`] transitions and is
/// recreated with defaults when the content is replaced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// On-screen scale relative to the baseline size.
    pub scale: f64,
    /// Quarter-turn rotation of the content.
    pub rotation: Rotation,
    /// Offset from the centered position, in device pixels.
    pub offset: Vec2,
    /// Anchor that constrains zoom re-clamping, if any.
    pub active_anchor: Option<GridAnchor>,
    /// Whether the initial fit has run since content and container became known.
    pub fitted: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation: Rotation::Deg0,
            offset: Vec2::ZERO,
            active_anchor: None,
            fitted: false,
        }
    }
}

/// Headless viewer engine for a single piece of rectangular content.
///
/// `Viewer` consumes two size measurements (content intrinsic size, container
/// size) and discrete gestures (zoom, quarter-turn rotation, drag, nine-grid
/// navigation, reset), and produces a [`ViewTransform`] for a rendering
/// collaborator to apply. It never fetches data or decodes pixels.
///
/// All transitions run synchronously to completion; the state is owned by one
/// viewer instance and is never shared.
#[derive(Clone, Debug)]
pub struct Viewer {
    state: ViewState,
    content_size: Option<Size>,
    container_size: Size,
    min_scale: f64,
    max_scale: f64,
    render_multiplier: f64,
    zoom_step: f64,
    initial_anchor: GridAnchor,
    pub(crate) drag: DragSequence,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewer {
    /// Default lower bound on the scale.
    pub const DEFAULT_MIN_SCALE: f64 = 0.25;
    /// Default upper bound on the scale.
    pub const DEFAULT_MAX_SCALE: f64 = 3.0;
    /// Default factor by which content is rasterized above its on-screen size.
    pub const DEFAULT_RENDER_MULTIPLIER: f64 = 2.0;
    /// Default scale change per zoom-in/zoom-out step.
    pub const DEFAULT_ZOOM_STEP: f64 = 0.2;

    /// Creates a viewer with default limits and a centered initial fit.
    ///
    /// - Content size is unknown until [`Viewer::set_content_size`].
    /// - Container size is zero until [`Viewer::set_container_size`].
    /// - Scale is clamped to `[0.25, 3.0]` by default.
    #[must_use]
    pub fn new() -> Self {
        Self::with_initial_anchor(GridAnchor::CENTER)
    }

    /// Creates a viewer whose initial fit focuses the given anchor.
    ///
    /// An off-center anchor makes the first fit jump straight to that region
    /// of the content instead of the whole-content center view.
    #[must_use]
    pub fn with_initial_anchor(initial_anchor: GridAnchor) -> Self {
        Self {
            state: ViewState::default(),
            content_size: None,
            container_size: Size::ZERO,
            min_scale: Self::DEFAULT_MIN_SCALE,
            max_scale: Self::DEFAULT_MAX_SCALE,
            render_multiplier: Self::DEFAULT_RENDER_MULTIPLIER,
            zoom_step: Self::DEFAULT_ZOOM_STEP,
            initial_anchor,
            drag: DragSequence::default(),
        }
    }

    /// Returns the current view state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Returns the transform to apply to the content's display layer.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            scale: self.state.scale,
            rotation: self.state.rotation,
            translation: self.state.offset,
        }
    }

    /// Returns the active grid anchor, for hosts rendering a 3×3 indicator.
    #[must_use]
    pub fn active_anchor(&self) -> Option<GridAnchor> {
        self.state.active_anchor
    }

    /// Returns the intrinsic content size, if known.
    #[must_use]
    pub fn content_size(&self) -> Option<Size> {
        self.content_size
    }

    /// Returns the current container size (zero before first layout).
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container_size
    }

    /// Sets the minimum and maximum scale factors.
    ///
    /// The provided range is normalized so that `min_scale <= max_scale`. The
    /// current scale is clamped into the new range.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.state.scale = self.state.scale.clamp(min_scale, max_scale);
    }

    /// Sets the render multiplier used for baseline sizing.
    ///
    /// The multiplier decouples rasterized density from on-screen scale, so
    /// content can be rasterized sharper than the viewport while a fit still
    /// displays it 1:1 visually.
    pub fn set_render_multiplier(&mut self, render_multiplier: f64) {
        self.render_multiplier = render_multiplier;
    }

    /// Sets the scale change applied per [`Viewer::zoom_in`]/[`Viewer::zoom_out`] step.
    pub fn set_zoom_step(&mut self, zoom_step: f64) {
        self.zoom_step = zoom_step;
    }

    /// Baseline rendered size of the content at scale 1.
    ///
    /// `None` while either size has a zero or unknown dimension; every
    /// computation that depends on geometry short-circuits through this.
    /// The baseline is always computed for the unrotated content.
    fn baseline(&self) -> Option<Size> {
        let content = self.content_size.filter(|s| s.width > 0.0 && s.height > 0.0)?;
        if self.container_size.width <= 0.0 || self.container_size.height <= 0.0 {
            return None;
        }
        let base_w = self.container_size.width * self.render_multiplier;
        let base_h = base_w * content.height / content.width;
        Some(Size::new(base_w, base_h))
    }

    /// Computes the scale that inscribes the content in the container,
    /// preserving aspect ratio.
    ///
    /// Returns `None` while either size is unknown. The result is clamped
    /// into the configured scale range.
    #[must_use]
    pub fn fit_scale(&self) -> Option<f64> {
        let base = self.baseline()?;
        let scale = (self.container_size.width / base.width)
            .min(self.container_size.height / base.height);
        Some(scale.clamp(self.min_scale, self.max_scale))
    }

    /// Pulls `offset` back so the anchor's pinned edges stay flush against
    /// the container at the given scale.
    ///
    /// Identity while either size is unknown. Each axis is constrained
    /// independently via [`GridAnchor::edge_constraint`], and only when the
    /// scaled content covers the container on that axis; smaller content is
    /// left unconstrained.
    #[must_use]
    pub fn clamp_offset(&self, offset: Vec2, scale: f64, anchor: GridAnchor) -> Vec2 {
        let Some(base) = self.baseline() else {
            return offset;
        };
        Vec2::new(
            clamp_axis(
                offset.x,
                base.width * scale,
                self.container_size.width,
                anchor.edge_constraint(Axis::X),
            ),
            clamp_axis(
                offset.y,
                base.height * scale,
                self.container_size.height,
                anchor.edge_constraint(Axis::Y),
            ),
        )
    }

    /// Jumps to one of the nine grid cells.
    ///
    /// The center cell fits the whole content (scale falls back to `1.0`
    /// while sizes are unknown), zeroes the offset, and resets rotation. The
    /// other eight cells show the content at full render-multiplier
    /// resolution (scale `1.0`), offset by thirds of the baseline size toward
    /// the requested region and clamped so the region's edges sit flush.
    pub fn navigate_to(&mut self, anchor: GridAnchor) {
        if anchor.is_center() {
            let scale = self.fit_scale().unwrap_or(1.0);
            self.state.scale = scale;
            self.state.rotation = Rotation::Deg0;
            self.state.offset = self.clamp_offset(Vec2::ZERO, scale, anchor);
        } else {
            self.state.scale = 1.0;
            if let Some(base) = self.baseline() {
                let target = Vec2::new(
                    anchor.col.factor() * base.width / 3.0,
                    anchor.row.factor() * base.height / 3.0,
                );
                self.state.offset = self.clamp_offset(-target, 1.0, anchor);
            }
        }
        self.state.active_anchor = Some(anchor);
    }

    /// Changes the scale by `delta`, clamped into the scale range.
    ///
    /// The offset is immediately re-clamped at the new scale against the
    /// active anchor (center when none is active), so zooming never leaves a
    /// pinned edge floating.
    pub fn zoom_by(&mut self, delta: f64) {
        let next = (self.state.scale + delta).clamp(self.min_scale, self.max_scale);
        self.state.scale = next;
        let anchor = self.state.active_anchor.unwrap_or(GridAnchor::CENTER);
        self.state.offset = self.clamp_offset(self.state.offset, next, anchor);
    }

    /// Zooms in by one step.
    pub fn zoom_in(&mut self) {
        self.zoom_by(self.zoom_step);
    }

    /// Zooms out by one step.
    pub fn zoom_out(&mut self) {
        self.zoom_by(-self.zoom_step);
    }

    /// Rotates by the given number of quarter turns (negative turns
    /// counter-clockwise).
    ///
    /// Scale and offset are untouched and no re-clamping occurs; the clamp
    /// footprint stays rotation-naïve.
    pub fn rotate_by(&mut self, quarter_turns: i32) {
        self.state.rotation = self.state.rotation.turned(quarter_turns);
    }

    /// Rotates a quarter turn clockwise.
    pub fn rotate_cw(&mut self) {
        self.rotate_by(1);
    }

    /// Rotates a quarter turn counter-clockwise.
    pub fn rotate_ccw(&mut self) {
        self.rotate_by(-1);
    }

    /// Accumulates raw pointer movement into the offset.
    ///
    /// No clamping is applied during a drag; the content may be dragged
    /// arbitrarily far off-screen until the next zoom or grid navigation
    /// re-clamps it.
    pub fn drag_by(&mut self, delta: Vec2) {
        self.state.offset += delta;
    }

    /// Resets to the best-fit center view, equivalent to navigating to the
    /// center cell.
    pub fn reset(&mut self) {
        self.navigate_to(GridAnchor::CENTER);
    }

    /// Reports a new container size from the host's layout observer.
    ///
    /// The first time both sizes are known, the initial fit runs and the
    /// viewer is marked fitted. Once fitted, layout changes never re-fit
    /// automatically; manual interaction is assumed to have taken over.
    pub fn set_container_size(&mut self, size: Size) {
        if self.container_size == size {
            return;
        }
        self.container_size = size;
        self.maybe_initial_fit();
    }

    /// Reports the intrinsic content size once the content finishes loading.
    ///
    /// Triggers the initial fit when the container size is already known.
    pub fn set_content_size(&mut self, size: Size) {
        if self.content_size == Some(size) {
            return;
        }
        self.content_size = Some(size);
        self.maybe_initial_fit();
    }

    /// Assigns a different content item to the viewer.
    ///
    /// The view state is discarded and recreated with defaults, the content
    /// size is cleared until the new content reports its own, and the active
    /// anchor becomes the caller-supplied initial anchor. An off-center
    /// anchor requests an initial off-center focus. The container size
    /// survives the swap.
    pub fn replace_content(&mut self, initial_anchor: Option<GridAnchor>) {
        self.initial_anchor = initial_anchor.unwrap_or(GridAnchor::CENTER);
        self.content_size = None;
        self.state = ViewState {
            active_anchor: initial_anchor,
            ..ViewState::default()
        };
    }

    /// Snapshot of the current viewer configuration and state for debugging.
    #[must_use]
    pub fn debug_info(&self) -> ViewerDebugInfo {
        ViewerDebugInfo {
            state: self.state,
            content_size: self.content_size,
            container_size: self.container_size,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            render_multiplier: self.render_multiplier,
            zoom_step: self.zoom_step,
            initial_anchor: self.initial_anchor,
        }
    }

    fn maybe_initial_fit(&mut self) {
        if self.state.fitted || self.baseline().is_none() {
            return;
        }
        self.navigate_to(self.initial_anchor);
        self.state.fitted = true;
    }
}

/// Constrains one axis of the offset against a pinned edge.
///
/// Applies only when the displayed footprint covers the container on the
/// axis; a pinned start edge may not drift inward past the container start,
/// and symmetrically for the end edge. The content is laid out centered, so
/// the start edge sits at `(container - displayed) / 2 + offset`.
fn clamp_axis(offset: f64, displayed: f64, container: f64, constraint: EdgeConstraint) -> f64 {
    if displayed < container {
        return offset;
    }
    let slack = (displayed - container) / 2.0;
    match constraint {
        EdgeConstraint::Free => offset,
        EdgeConstraint::Pinned(PinnedEdge::Start) => offset.min(slack),
        EdgeConstraint::Pinned(PinnedEdge::End) => offset.max(-slack),
    }
}

/// Debug snapshot of a [`Viewer`].
#[derive(Clone, Copy, Debug)]
pub struct ViewerDebugInfo {
    /// Current view state.
    pub state: ViewState,
    /// Intrinsic content size, if known.
    pub content_size: Option<Size>,
    /// Current container size.
    pub container_size: Size,
    /// Minimum scale factor.
    pub min_scale: f64,
    /// Maximum scale factor.
    pub max_scale: f64,
    /// Baseline render multiplier.
    pub render_multiplier: f64,
    /// Scale change per zoom step.
    pub zoom_step: f64,
    /// Anchor focused by the initial fit.
    pub initial_anchor: GridAnchor,
}
