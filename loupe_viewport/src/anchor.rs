// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Axis selector for per-axis anchor constraints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis (columns, width).
    X,
    /// Vertical axis (rows, height).
    Y,
}

/// Position of an anchor along one axis of the 3×3 grid.
///
/// `Start`/`Middle`/`End` correspond to grid indices 0/1/2: left/center/right
/// for columns, top/center/bottom for rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorCell {
    /// Index 0: left column or top row.
    Start,
    /// Index 1: the center column or row.
    Middle,
    /// Index 2: right column or bottom row.
    End,
}

impl AnchorCell {
    /// Maps a grid index in `0..=2` to a cell; `None` outside that range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Start),
            1 => Some(Self::Middle),
            2 => Some(Self::End),
            _ => None,
        }
    }

    /// Returns the grid index (`0..=2`) of this cell.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Start => 0,
            Self::Middle => 1,
            Self::End => 2,
        }
    }

    /// Signed direction factor of this cell: `-1`, `0`, or `1`.
    ///
    /// This is `index - 1` as a float and drives the thirds-of-content
    /// offset used by grid navigation.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::Start => -1.0,
            Self::Middle => 0.0,
            Self::End => 1.0,
        }
    }
}

/// Which edge of the content an anchor pins on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinnedEdge {
    /// The start edge: left for X, top for Y.
    Start,
    /// The end edge: right for X, bottom for Y.
    End,
}

/// Constraint an anchor imposes on one axis of the offset.
///
/// Evaluated once per axis by the offset clamper, so the nine anchor cases
/// reduce to two three-way decisions instead of branching on anchor identity
/// at every edge comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeConstraint {
    /// No constraint; the offset may move freely on this axis.
    Free,
    /// The given content edge is kept flush against the matching container
    /// edge whenever the content covers the container on this axis.
    Pinned(PinnedEdge),
}

/// One of the nine named reference points of the content: four corners, four
/// edge midpoints, and the center.
///
/// Anchors serve two roles: they are targets for quick navigation, and they
/// decide which content edges are kept flush against the viewport while
/// zooming (via [`GridAnchor::edge_constraint`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridAnchor {
    /// Vertical grid position (top/center/bottom).
    pub row: AnchorCell,
    /// Horizontal grid position (left/center/right).
    pub col: AnchorCell,
}

impl GridAnchor {
    /// Top-left corner, `(0, 0)`.
    pub const TOP_LEFT: Self = Self::new(AnchorCell::Start, AnchorCell::Start);
    /// Top edge midpoint, `(0, 1)`.
    pub const TOP_CENTER: Self = Self::new(AnchorCell::Start, AnchorCell::Middle);
    /// Top-right corner, `(0, 2)`.
    pub const TOP_RIGHT: Self = Self::new(AnchorCell::Start, AnchorCell::End);
    /// Left edge midpoint, `(1, 0)`.
    pub const CENTER_LEFT: Self = Self::new(AnchorCell::Middle, AnchorCell::Start);
    /// The center cell, `(1, 1)`.
    pub const CENTER: Self = Self::new(AnchorCell::Middle, AnchorCell::Middle);
    /// Right edge midpoint, `(1, 2)`.
    pub const CENTER_RIGHT: Self = Self::new(AnchorCell::Middle, AnchorCell::End);
    /// Bottom-left corner, `(2, 0)`.
    pub const BOTTOM_LEFT: Self = Self::new(AnchorCell::End, AnchorCell::Start);
    /// Bottom edge midpoint, `(2, 1)`.
    pub const BOTTOM_CENTER: Self = Self::new(AnchorCell::End, AnchorCell::Middle);
    /// Bottom-right corner, `(2, 2)`.
    pub const BOTTOM_RIGHT: Self = Self::new(AnchorCell::End, AnchorCell::End);

    /// Creates an anchor from its row and column cells.
    #[must_use]
    pub const fn new(row: AnchorCell, col: AnchorCell) -> Self {
        Self { row, col }
    }

    /// Creates an anchor from untrusted `(row, col)` grid indices.
    ///
    /// Returns `None` when either index is outside `0..=2`.
    #[must_use]
    pub fn from_cell(row: usize, col: usize) -> Option<Self> {
        Some(Self {
            row: AnchorCell::from_index(row)?,
            col: AnchorCell::from_index(col)?,
        })
    }

    /// Returns the `(row, col)` grid indices of this anchor.
    #[must_use]
    pub fn cell(self) -> (usize, usize) {
        (self.row.index(), self.col.index())
    }

    /// Returns `true` for the center cell `(1, 1)`.
    #[must_use]
    pub fn is_center(self) -> bool {
        self == Self::CENTER
    }

    /// Returns the constraint this anchor imposes on the given axis.
    ///
    /// Corner anchors pin an edge on both axes, edge midpoints on one, and
    /// the center on neither.
    #[must_use]
    pub fn edge_constraint(self, axis: Axis) -> EdgeConstraint {
        let cell = match axis {
            Axis::X => self.col,
            Axis::Y => self.row,
        };
        match cell {
            AnchorCell::Start => EdgeConstraint::Pinned(PinnedEdge::Start),
            AnchorCell::Middle => EdgeConstraint::Free,
            AnchorCell::End => EdgeConstraint::Pinned(PinnedEdge::End),
        }
    }
}
