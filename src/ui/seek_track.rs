// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Seek track control.
//!
//! This module provides the horizontal track with its fill, and the drag
//! state machine that turns pointer presses, moves and releases into
//! normalized seek positions.

use crate::models::{progress::Progress, style::TrackStyle};
use crate::util::geometry::{denormalize_position, pixels_to_points};
use egui::{Id, Rect, Response, Rounding, Sense, Ui, Vec2};

/// Layout of the track for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Track width in points
    pub width: f32,
    pub progress: Progress,
}

impl TrackGeometry {
    pub fn new(width: f32, progress: Progress) -> Self {
        Self {
            width: width.max(0.0),
            progress,
        }
    }

    /// Build from a width measured in physical pixels.
    pub fn from_pixels(width_px: u32, progress: Progress, pixels_per_point: f32) -> Self {
        Self::new(pixels_to_points(width_px, pixels_per_point), progress)
    }

    /// Width of the filled part of the track.
    pub fn fill_width(&self) -> f32 {
        denormalize_position(self.progress.value(), self.width)
    }

    /// Progress under a pointer at `pointer_x` (relative to the track start).
    pub fn position_to_progress(&self, pointer_x: f32) -> Progress {
        Progress::from_position(pointer_x, self.width)
    }
}

/// Pointer events the track reacts to. Positions are track-relative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(f32),
    Move(f32),
    Release(f32),
    /// Press and release delivered in the same frame
    Tap(f32),
    /// The press ended without this track seeing the release
    Cancel,
}

/// Drag state of a track, kept between frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        last_x: f32,
    },
}

impl DragState {
    /// Apply a pointer event. Returns the next state and the position to
    /// report, if any.
    pub fn handle(self, event: PointerEvent, width: f32) -> (DragState, Option<Progress>) {
        match (self, event) {
            (_, PointerEvent::Press(x)) => (
                DragState::Dragging { last_x: x },
                Some(Progress::from_position(x, width)),
            ),
            (_, PointerEvent::Tap(x)) => (DragState::Idle, Some(Progress::from_position(x, width))),
            (DragState::Dragging { .. }, PointerEvent::Move(x)) => (
                DragState::Dragging { last_x: x },
                Some(Progress::from_position(x, width)),
            ),
            (DragState::Dragging { .. }, PointerEvent::Release(x)) => {
                (DragState::Idle, Some(Progress::from_position(x, width)))
            }
            // Hover moves, stray releases and cancels are not seeks
            (DragState::Idle, PointerEvent::Move(_))
            | (DragState::Idle, PointerEvent::Release(_))
            | (_, PointerEvent::Cancel) => (DragState::Idle, None),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Translate this frame's pointer interaction on the track into an event.
    fn pointer_event(self, response: &Response, track_rect: Rect) -> Option<PointerEvent> {
        let x = response
            .interact_pointer_pos()
            .map(|pos| pos.x - track_rect.min.x);
        let down = response.is_pointer_button_down_on();

        match (self, down, x) {
            (DragState::Idle, true, Some(x)) => Some(PointerEvent::Press(x)),
            (DragState::Idle, false, Some(x)) if response.clicked() => Some(PointerEvent::Tap(x)),
            (DragState::Dragging { last_x }, true, Some(x)) if x != last_x => {
                Some(PointerEvent::Move(x))
            }
            (DragState::Dragging { .. }, false, Some(x)) => Some(PointerEvent::Release(x)),
            // Released while the track was not shown
            (DragState::Dragging { .. }, false, None) => Some(PointerEvent::Cancel),
            _ => None,
        }
    }
}

/// What the track reported this frame.
pub struct SeekTrackOutput {
    pub response: Response,
    /// New position requested by the pointer
    pub seek: Option<Progress>,
}

/// Horizontal seek track with a fill proportional to the progress.
pub struct SeekTrack<'a> {
    progress: Progress,
    style: &'a TrackStyle,
    id_source: Id,
}

impl<'a> SeekTrack<'a> {
    pub fn new(progress: Progress, style: &'a TrackStyle) -> Self {
        Self {
            progress,
            style,
            id_source: Id::new("seek_track"),
        }
    }

    /// Distinguish several tracks in the same `Ui`.
    pub fn id_source(mut self, id_source: impl std::hash::Hash) -> Self {
        self.id_source = Id::new(id_source);
        self
    }

    /// Lay out, handle pointer input and paint the track.
    pub fn show(self, ui: &mut Ui) -> SeekTrackOutput {
        let style = self.style;
        let height = style.interact_height.max(style.height);
        let desired_size = Vec2::new(ui.available_width().max(0.0), height);
        let (rect, mut response) = ui.allocate_exact_size(desired_size, Sense::click_and_drag());

        let track_rect = Rect::from_center_size(rect.center(), Vec2::new(rect.width(), style.height));
        let state_id = ui.make_persistent_id(self.id_source);

        // Pointer handling
        let state: DragState = ui.data(|d| d.get_temp(state_id)).unwrap_or_default();
        let mut seek = None;
        if let Some(event) = state.pointer_event(&response, track_rect) {
            let (next, reported) = state.handle(event, track_rect.width());
            match event {
                PointerEvent::Press(_) => log::debug!("Seek started at {:?}", reported),
                PointerEvent::Release(_) => log::debug!("Seek finished at {:?}", reported),
                PointerEvent::Tap(_) => log::debug!("Seek tapped at {:?}", reported),
                PointerEvent::Move(_) => log::trace!("Seek moved to {:?}", reported),
                PointerEvent::Cancel => log::debug!("Seek cancelled"),
            }
            ui.data_mut(|d| d.insert_temp(state_id, next));
            seek = reported;
        }
        if seek.is_some() {
            response.mark_changed();
        }
        if response.hovered() || response.is_pointer_button_down_on() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        // Paint with the newest position so the fill follows the pointer
        if ui.is_rect_visible(rect) {
            let geometry = TrackGeometry::new(track_rect.width(), seek.unwrap_or(self.progress));
            let rounding = Rounding::same(style.rounding);
            let painter = ui.painter();

            painter.rect_filled(track_rect, rounding, style.background_color);

            let fill_width = geometry.fill_width();
            if fill_width > 0.0 {
                let fill_rect = Rect::from_min_size(track_rect.min, Vec2::new(fill_width, style.height));
                painter.rect_filled(fill_rect, rounding, style.fill_color);
            }
        }

        SeekTrackOutput { response, seek }
    }
}
