// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Floating value tooltip.
//!
//! The bubble is laid out in two phases. [`TooltipLayout::measure`] places
//! it from the progress and the bubble width measured on the previous
//! frame, then [`BubbleOutline`] builds the outline that gets painted
//! behind the content.

use crate::models::{
    progress::Progress,
    style::{StrokeJoin, TooltipStyle},
};
use crate::util::path::PathBuilder;
use egui::{pos2, vec2, Frame, Id, InnerResponse, Pos2, Rect, Shape, Stroke, Ui, Vec2};

/// Horizontal placement of the bubble within its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipLayout {
    /// Offset of the bubble's left edge from the parent's left edge
    pub left: f32,
    /// How far the tail is shifted right to keep pointing at the progress
    pub anchor_offset: f32,
    pub bubble_width: f32,
}

impl TooltipLayout {
    /// Place a bubble `bubble_width` wide above `progress` of the parent.
    ///
    /// With `clamp_to_edges` the bubble stays within the parent and the
    /// difference is carried by `anchor_offset`. Without it the bubble
    /// starts exactly at the progress position and may overflow on the
    /// right.
    pub fn measure(progress: Progress, parent_width: f32, bubble_width: f32, clamp_to_edges: bool) -> Self {
        let parent_width = parent_width.max(0.0);
        let bubble_width = bubble_width.max(0.0);
        let anchor = progress.scaled(parent_width);

        let left = if clamp_to_edges {
            anchor.min(parent_width - bubble_width).max(0.0)
        } else {
            anchor
        };

        Self {
            left,
            anchor_offset: anchor - left,
            bubble_width,
        }
    }

    /// Position the tail points at, relative to the parent.
    pub fn anchor(&self) -> f32 {
        self.left + self.anchor_offset
    }
}

/// Closed outline of a bubble, relative to the bubble's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleOutline {
    /// Full boundary, starting at the top-left arc
    pub points: Vec<Pos2>,
    /// Boundary without the tail apex (a convex polygon)
    pub body: Vec<Pos2>,
    /// Right base, apex and left base of the tail
    pub tail: [Pos2; 3],
}

impl BubbleOutline {
    /// Build the outline for a bubble of `size` (tail included).
    ///
    /// `corner_radius` is the side of the square each corner arc is
    /// inscribed in. The tail sits on the bottom edge, `anchor_offset`
    /// right of the bottom-left arc.
    pub fn new(size: Vec2, corner_radius: f32, arrow_size: f32, anchor_offset: f32) -> Self {
        let width = size.x.max(0.0);
        let height = size.y.max(0.0);
        let arrow = arrow_size.clamp(0.0, height);
        let bottom = height - arrow;
        let c = corner_radius.clamp(0.0, width.min(bottom));
        let half = c / 2.0;

        // Keep the whole tail on the straight part of the bottom edge
        let x = anchor_offset.clamp(0.0, (width - c - arrow).max(0.0));

        let tail = [
            pos2(half + arrow + x, bottom),
            pos2(half + arrow / 2.0 + x, bottom + arrow),
            pos2(half + x, bottom),
        ];

        let corner = vec2(c, c);
        let mut path = PathBuilder::new();
        path.arc_to(Rect::from_min_size(pos2(0.0, 0.0), corner), -180.0, 90.0);
        path.arc_to(Rect::from_min_size(pos2(width - c, 0.0), corner), -90.0, 90.0);
        path.arc_to(Rect::from_min_size(pos2(width - c, bottom - c), corner), 0.0, 90.0);
        for point in tail {
            path.line_to(point);
        }
        path.line_to(pos2(half, bottom));
        path.arc_to(Rect::from_min_size(pos2(0.0, bottom - c), corner), 90.0, 90.0);
        let points = path.close();

        let body = points
            .iter()
            .copied()
            .filter(|p| arrow == 0.0 || *p != tail[1])
            .collect();

        Self { points, body, tail }
    }

    /// Fill and stroke shapes with the outline placed at `origin`.
    pub fn shapes(&self, origin: Pos2, style: &TooltipStyle) -> Shape {
        let offset = origin.to_vec2();
        let moved = |points: &[Pos2]| points.iter().map(|p| *p + offset).collect::<Vec<_>>();

        let mut shapes = vec![Shape::convex_polygon(moved(&self.body), style.inner_color, Stroke::NONE)];
        if self.tail[1].y > self.tail[0].y {
            shapes.push(Shape::convex_polygon(moved(&self.tail), style.inner_color, Stroke::NONE));
        }

        if style.stroke_width > 0.0 {
            let stroke = Stroke::new(style.stroke_width, style.stroke_color);
            shapes.push(Shape::closed_line(moved(&self.points), stroke));

            // Arcs are smooth; only the tail has sharp corners to round off
            if style.stroke_join == StrokeJoin::Round {
                for point in moved(&self.tail) {
                    shapes.push(Shape::circle_filled(point, style.stroke_width / 2.0, style.stroke_color));
                }
            }
        }

        Shape::Vec(shapes)
    }
}

/// Rounded bubble with a tail, floating above a position of its parent.
pub struct TooltipBubble<'a> {
    progress: Progress,
    parent_width: f32,
    style: &'a TooltipStyle,
    id_source: Id,
}

impl<'a> TooltipBubble<'a> {
    pub fn new(progress: Progress, parent_width: f32, style: &'a TooltipStyle) -> Self {
        Self {
            progress,
            parent_width,
            style,
            id_source: Id::new("tooltip_bubble"),
        }
    }

    /// Distinguish several bubbles in the same `Ui`.
    pub fn id_source(mut self, id_source: impl std::hash::Hash) -> Self {
        self.id_source = Id::new(id_source);
        self
    }

    /// Show the bubble with `add_contents` inside it.
    ///
    /// Placement uses the width measured on the previous frame. When the
    /// width changes another frame is requested so the placement settles.
    pub fn show<R>(self, ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
        let style = self.style;
        let width_id = ui.make_persistent_id(self.id_source);
        let measured: f32 = ui.data(|d| d.get_temp(width_id)).unwrap_or(0.0);
        let layout = TooltipLayout::measure(self.progress, self.parent_width, measured, style.clamp_to_edges);

        // Reserve a slot so the bubble is painted behind its content
        let where_to_put_background = ui.painter().add(Shape::Noop);

        let inner = ui
            .horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                ui.add_space(layout.left);
                Frame::none()
                    .inner_margin(style.inner_margin())
                    .show(ui, add_contents)
            })
            .inner;

        let bubble_rect = inner.response.rect;
        if bubble_rect.width() != measured {
            log::trace!("Tooltip width changed from {} to {}", measured, bubble_rect.width());
            ui.data_mut(|d| d.insert_temp(width_id, bubble_rect.width()));
            ui.ctx().request_repaint();
        }

        if ui.is_rect_visible(bubble_rect) {
            let outline = BubbleOutline::new(
                bubble_rect.size(),
                style.corner_radius,
                style.arrow_size,
                layout.anchor_offset,
            );
            ui.painter()
                .set(where_to_put_background, outline.shapes(bubble_rect.min, style));
        }

        inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Pos2, b: Pos2) -> bool {
        (a.x - b.x).abs() < 0.001 && (a.y - b.y).abs() < 0.001
    }

    #[test]
    fn test_clamped_scenario() {
        let layout = TooltipLayout::measure(Progress::new(0.99), 300.0, 120.0, true);
        assert!((layout.left - 180.0).abs() < 0.001);
        assert!((layout.anchor_offset - 117.0).abs() < 0.001);
        assert!((layout.anchor() - 297.0).abs() < 0.001);
    }

    #[test]
    fn test_unclamped_follows_progress() {
        let layout = TooltipLayout::measure(Progress::new(0.99), 300.0, 120.0, false);
        assert!((layout.left - 297.0).abs() < 0.001);
        assert_eq!(layout.anchor_offset, 0.0);
    }

    #[test]
    fn test_clamped_left_stays_inside_parent() {
        for step in 0..=100 {
            let progress = Progress::new(step as f32 / 100.0);
            let layout = TooltipLayout::measure(progress, 300.0, 120.0, true);
            assert!(layout.left >= 0.0);
            assert!(layout.left <= 180.0 + 0.001);
            assert!((layout.anchor() - progress.scaled(300.0)).abs() < 0.001);
        }
    }

    #[test]
    fn test_bubble_wider_than_parent_sticks_left() {
        let layout = TooltipLayout::measure(Progress::new(0.5), 100.0, 160.0, true);
        assert_eq!(layout.left, 0.0);
        assert!((layout.anchor_offset - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_outline_is_closed_loop() {
        let outline = BubbleOutline::new(vec2(120.0, 64.0), 16.0, 8.0, 0.0);
        let first = outline.points[0];
        let last = *outline.points.last().unwrap();

        // Starts on the left edge at the top-left arc, ends at the bottom-left arc
        assert!(approx(first, pos2(0.0, 8.0)));
        assert!(approx(last, pos2(0.0, 48.0)));
        // The closing segment runs straight up the left edge
        assert!((first.x - last.x).abs() < 0.001);
    }

    #[test]
    fn test_tail_geometry() {
        let outline = BubbleOutline::new(vec2(120.0, 64.0), 16.0, 8.0, 20.0);
        let [right, apex, left] = outline.tail;

        assert!(approx(right, pos2(8.0 + 8.0 + 20.0, 56.0)));
        assert!(approx(apex, pos2(8.0 + 4.0 + 20.0, 64.0)));
        assert!(approx(left, pos2(8.0 + 20.0, 56.0)));
        assert!(outline.points.contains(&apex));
        assert!(!outline.body.contains(&apex));
        assert_eq!(outline.body.len() + 1, outline.points.len());
    }

    #[test]
    fn test_tail_stays_on_bottom_edge() {
        let outline = BubbleOutline::new(vec2(120.0, 64.0), 16.0, 8.0, 500.0);
        let [right, _, _] = outline.tail;
        // Right base may reach, but not pass, the bottom-right arc
        assert!(right.x <= 120.0 - 8.0 + 0.001);

        let outline = BubbleOutline::new(vec2(120.0, 64.0), 16.0, 8.0, -30.0);
        assert!(approx(outline.tail[2], pos2(8.0, 56.0)));
    }

    #[test]
    fn test_outline_stays_within_size() {
        let size = vec2(90.0, 50.0);
        let outline = BubbleOutline::new(size, 16.0, 8.0, 40.0);
        for p in &outline.points {
            assert!(p.x >= -0.001 && p.x <= size.x + 0.001);
            assert!(p.y >= -0.001 && p.y <= size.y + 0.001);
        }
    }

    #[test]
    fn test_oversized_corner_radius_is_limited() {
        let outline = BubbleOutline::new(vec2(20.0, 30.0), 100.0, 8.0, 0.0);
        for p in &outline.points {
            assert!(p.x >= -0.001 && p.x <= 20.001);
        }
    }

    #[test]
    fn test_outline_is_deterministic() {
        let a = BubbleOutline::new(vec2(120.0, 64.0), 16.0, 8.0, 12.5);
        let b = BubbleOutline::new(vec2(120.0, 64.0), 16.0, 8.0, 12.5);
        assert_eq!(a, b);

        let layout_a = TooltipLayout::measure(Progress::new(0.42), 300.0, 120.0, true);
        let layout_b = TooltipLayout::measure(Progress::new(0.42), 300.0, 120.0, true);
        assert_eq!(layout_a, layout_b);
    }

    #[test]
    fn test_bubble_settles_inside_parent_after_one_frame() {
        let ctx = egui::Context::default();
        let style = TooltipStyle::default();
        let mut rects = Vec::new();
        let mut parent = Rect::NOTHING;

        for _ in 0..3 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    parent = ui.max_rect();
                    let response = TooltipBubble::new(Progress::END, ui.available_width(), &style)
                        .show(ui, |ui| ui.label("val: 100"));
                    rects.push(response.response.rect);
                });
            });
        }

        // The first frame has no measurement yet; later frames are clamped and stable
        assert!(rects[1].right() <= parent.right() + 0.5);
        assert_eq!(rects[1], rects[2]);
        assert!(rects[1].width() > style.arrow_size);
    }
}
