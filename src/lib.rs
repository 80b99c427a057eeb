// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! seektip - seek bar with a floating value tooltip for egui.
//!
//! The [`SeekBar`] widget stacks a [`TooltipBubble`] above a
//! [`SeekTrack`]. The host owns the [`Progress`] and updates it from the
//! positions the track reports.

pub mod io;
pub mod models;
pub mod ui;
pub mod util;

pub use models::progress::Progress;
pub use models::style::{LabelStyle, SeekBarConfig, StrokeJoin, TooltipStyle, TrackStyle};
pub use ui::seek_bar::SeekBar;
pub use ui::seek_track::{DragState, PointerEvent, SeekTrack, SeekTrackOutput, TrackGeometry};
pub use ui::tooltip::{BubbleOutline, TooltipBubble, TooltipLayout};
