// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides conversions between track-relative pointer
//! positions and normalized positions, and between physical pixels and
//! density-independent points.

/// Convert a track-relative pointer X position to a normalized position
/// (0.0 to 1.0).
///
/// A zero, negative or non-finite width yields 0.0 instead of dividing by
/// zero. Positions outside the track are clamped to its ends.
pub fn normalize_position(pointer_x: f32, width: f32) -> f32 {
    if !(width > 0.0 && width.is_finite()) || !pointer_x.is_finite() {
        return 0.0;
    }
    (pointer_x / width).clamp(0.0, 1.0)
}

/// Convert a normalized position back to a track-relative X position.
pub fn denormalize_position(position: f32, width: f32) -> f32 {
    let position = if position.is_finite() {
        position.clamp(0.0, 1.0)
    } else {
        0.0
    };
    position * width.max(0.0)
}

/// Convert a physical pixel length to density-independent points.
pub fn pixels_to_points(pixels: u32, pixels_per_point: f32) -> f32 {
    if pixels_per_point > 0.0 {
        pixels as f32 / pixels_per_point
    } else {
        pixels as f32
    }
}

/// Convert a length in points to whole physical pixels (rounded).
pub fn points_to_pixels(points: f32, pixels_per_point: f32) -> u32 {
    let scale = if pixels_per_point > 0.0 { pixels_per_point } else { 1.0 };
    (points.max(0.0) * scale).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_denormalize_roundtrip() {
        let width = 300.0;
        let pointer_x = 210.0;

        let normalized = normalize_position(pointer_x, width);
        assert!((normalized - 0.7).abs() < 0.0001);

        let denormalized = denormalize_position(normalized, width);
        assert!((denormalized - pointer_x).abs() < 0.001);
    }

    #[test]
    fn test_normalize_track_ends() {
        assert_eq!(normalize_position(0.0, 300.0), 0.0);
        assert_eq!(normalize_position(300.0, 300.0), 1.0);
    }

    #[test]
    fn test_normalize_outside_track_is_clamped() {
        assert_eq!(normalize_position(-25.0, 300.0), 0.0);
        assert_eq!(normalize_position(450.0, 300.0), 1.0);
    }

    #[test]
    fn test_normalize_zero_width_fails_safe() {
        assert_eq!(normalize_position(10.0, 0.0), 0.0);
        assert_eq!(normalize_position(10.0, -4.0), 0.0);
        assert_eq!(normalize_position(f32::NAN, 300.0), 0.0);
    }

    #[test]
    fn test_pixel_point_conversion() {
        assert_eq!(pixels_to_points(600, 2.0), 300.0);
        assert_eq!(points_to_pixels(300.0, 2.0), 600);
        // Degenerate scale factors fall back to 1:1
        assert_eq!(pixels_to_points(600, 0.0), 600.0);
        assert_eq!(points_to_pixels(-5.0, 2.0), 0);
    }
}
