// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Normalized seek position.

use crate::util::geometry::normalize_position;

/// A seek position normalized to the closed range 0.0 to 1.0.
///
/// Every constructor clamps, so a `Progress` can be used to size drawing
/// primitives without further checks. NaN becomes 0.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Progress(f32);

impl Progress {
    pub const START: Progress = Progress(0.0);
    pub const END: Progress = Progress(1.0);

    /// Create a progress value, clamping it to 0.0..=1.0.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Progress of a pointer at `pointer_x` on a track `width` points wide.
    pub fn from_position(pointer_x: f32, width: f32) -> Self {
        Self(normalize_position(pointer_x, width))
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// Scale onto `0.0..=max`.
    pub fn scaled(self, max: f32) -> f32 {
        self.0 * max
    }

    /// Move by `delta`, staying within range.
    pub fn offset(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }
}

impl From<f32> for Progress {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Progress> for f32 {
    fn from(progress: Progress) -> Self {
        progress.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps() {
        assert_eq!(Progress::new(-0.5), Progress::START);
        assert_eq!(Progress::new(1.5), Progress::END);
        assert_eq!(Progress::new(f32::NAN), Progress::START);
        assert_eq!(Progress::new(f32::INFINITY), Progress::END);
        assert_eq!(Progress::new(0.25).value(), 0.25);
    }

    #[test]
    fn test_from_position() {
        let progress = Progress::from_position(210.0, 300.0);
        assert!((progress.value() - 0.7).abs() < 0.0001);

        // Zero-width track is treated as the start
        assert_eq!(Progress::from_position(50.0, 0.0), Progress::START);
    }

    #[test]
    fn test_offset_stays_in_range() {
        assert_eq!(Progress::new(0.995).offset(0.01), Progress::END);
        assert_eq!(Progress::new(0.005).offset(-0.01), Progress::START);
        assert!((Progress::new(0.5).offset(0.01).value() - 0.51).abs() < 0.0001);
    }
}
