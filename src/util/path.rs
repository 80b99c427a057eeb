// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Polyline path construction.
//!
//! egui paints paths as point lists, so arcs are flattened into short
//! line segments as they are appended.

use egui::{Pos2, Rect};

/// Number of line segments used to flatten a quarter circle.
pub const SEGMENTS_PER_QUARTER: usize = 8;

/// Points closer than this are treated as the same point.
const EPSILON: f32 = 1e-4;

/// Incrementally builds a closed outline out of arcs and straight segments.
#[derive(Debug, Default, Clone)]
pub struct PathBuilder {
    points: Vec<Pos2>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an elliptical arc inscribed in `oval`.
    ///
    /// Angles are in degrees, measured clockwise from the positive X axis
    /// (screen coordinates, Y down). If the path already has points, the arc
    /// start is joined to the previous point with a straight segment.
    pub fn arc_to(&mut self, oval: Rect, start_degrees: f32, sweep_degrees: f32) {
        let center = oval.center();
        let radius_x = oval.width() / 2.0;
        let radius_y = oval.height() / 2.0;

        let quarters = (sweep_degrees.abs() / 90.0).ceil().max(1.0) as usize;
        let segments = quarters * SEGMENTS_PER_QUARTER;

        for i in 0..=segments {
            let t = i as f32 / segments as f32;
            let angle = (start_degrees + sweep_degrees * t).to_radians();
            self.push(Pos2::new(
                center.x + radius_x * angle.cos(),
                center.y + radius_y * angle.sin(),
            ));
        }
    }

    /// Append a straight segment to `point`.
    pub fn line_to(&mut self, point: Pos2) {
        self.push(point);
    }

    /// Finish the outline. The closing segment back to the first point is
    /// implied, so a trailing copy of the first point is dropped.
    pub fn close(mut self) -> Vec<Pos2> {
        if self.points.len() > 1 {
            let first = self.points[0];
            if let Some(&last) = self.points.last() {
                if same_point(first, last) {
                    self.points.pop();
                }
            }
        }
        self.points
    }

    fn push(&mut self, point: Pos2) {
        match self.points.last() {
            Some(&last) if same_point(last, point) => {}
            _ => self.points.push(point),
        }
    }
}

fn same_point(a: Pos2, b: Pos2) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn approx(a: Pos2, b: Pos2) -> bool {
        (a.x - b.x).abs() < 0.001 && (a.y - b.y).abs() < 0.001
    }

    #[test]
    fn test_quarter_arc_endpoints() {
        let mut path = PathBuilder::new();
        // Top-left corner of a 16x16 square, from the left edge to the top edge
        path.arc_to(Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(16.0, 16.0)), -180.0, 90.0);

        let points = path.close();
        assert_eq!(points.len(), SEGMENTS_PER_QUARTER + 1);
        assert!(approx(points[0], pos2(0.0, 8.0)));
        assert!(approx(*points.last().unwrap(), pos2(8.0, 0.0)));
    }

    #[test]
    fn test_duplicate_points_are_skipped() {
        let mut path = PathBuilder::new();
        path.line_to(pos2(1.0, 1.0));
        path.line_to(pos2(1.0, 1.0));
        path.line_to(pos2(2.0, 1.0));
        assert_eq!(path.close().len(), 2);
    }

    #[test]
    fn test_close_drops_repeated_start() {
        let mut path = PathBuilder::new();
        path.line_to(pos2(0.0, 0.0));
        path.line_to(pos2(4.0, 0.0));
        path.line_to(pos2(4.0, 4.0));
        path.line_to(pos2(0.0, 0.0));

        let points = path.close();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], pos2(0.0, 0.0));
    }
}
