// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Size, Vec2};

/// Rotation of the content in quarter turns, normalized into `[0°, 360°)`.
///
/// Rotation is a visual transform layered on top of the unrotated layout; it
/// never feeds back into fit or clamp computations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Rotation {
    /// No rotation.
    #[default]
    Deg0,
    /// Quarter turn clockwise.
    Deg90,
    /// Half turn.
    Deg180,
    /// Three quarter turns clockwise.
    Deg270,
}

impl Rotation {
    /// Returns the rotation in degrees: `0.0`, `90.0`, `180.0`, or `270.0`.
    #[must_use]
    pub fn degrees(self) -> f64 {
        match self {
            Self::Deg0 => 0.0,
            Self::Deg90 => 90.0,
            Self::Deg180 => 180.0,
            Self::Deg270 => 270.0,
        }
    }

    /// Returns the rotation in radians.
    #[must_use]
    pub fn radians(self) -> f64 {
        self.degrees().to_radians()
    }

    /// Returns this rotation advanced by `quarter_turns` (negative turns
    /// counter-clockwise), wrapping modulo a full turn.
    #[must_use]
    pub fn turned(self, quarter_turns: i32) -> Self {
        let index = match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        };
        match (index + quarter_turns).rem_euclid(4) {
            0 => Self::Deg0,
            1 => Self::Deg90,
            2 => Self::Deg180,
            _ => Self::Deg270,
        }
    }
}

/// Transform descriptor applied by the rendering collaborator to the
/// content's display layer.
///
/// The content is assumed to be laid out unrotated at its baseline size,
/// centered in the container; `scale` and `rotation` apply about the
/// container center and `translation` shifts the result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// On-screen scale relative to the baseline size.
    pub scale: f64,
    /// Quarter-turn rotation.
    pub rotation: Rotation,
    /// Offset from the centered position, in device pixels.
    pub translation: Vec2,
}

impl ViewTransform {
    /// Composes the transform as an affine about the center of `container`.
    ///
    /// Renderers that consume matrices can apply this directly to content
    /// laid out centered in the container at baseline size.
    #[must_use]
    pub fn affine(&self, container: Size) -> Affine {
        let center = container.to_vec2() / 2.0;
        Affine::translate(self.translation + center)
            * Affine::rotate(self.rotation.radians())
            * Affine::scale(self.scale)
            * Affine::translate(-center)
    }
}
