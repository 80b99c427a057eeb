// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Seek bar style configuration.
//!
//! This module defines the serializable style settings for the track,
//! the tooltip bubble and its default value label. All lengths are in
//! egui points.

use super::progress::Progress;
use anyhow::{ensure, Result};
use egui::{Color32, Margin};
use serde::{Deserialize, Serialize};

/// How the corners where outline segments meet are stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeJoin {
    Miter,
    #[default]
    Round,
}

/// Style of the seek track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackStyle {
    /// Painted height of the track
    pub height: f32,
    /// Corner radius of both the background and the fill
    pub rounding: f32,
    /// Height of the area that reacts to the pointer
    pub interact_height: f32,
    pub background_color: Color32,
    pub fill_color: Color32,
}

impl Default for TrackStyle {
    fn default() -> Self {
        Self {
            height: 4.0,
            rounding: 4.0,
            interact_height: 16.0,
            background_color: Color32::RED,
            fill_color: Color32::WHITE,
        }
    }
}

/// Style of the tooltip bubble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipStyle {
    /// Side of the square each corner arc is inscribed in
    pub corner_radius: f32,
    /// Height (and base width) of the tail
    pub arrow_size: f32,
    /// Space between the bubble outline and its content
    pub content_padding: Margin,
    pub stroke_width: f32,
    pub stroke_color: Color32,
    pub stroke_join: StrokeJoin,
    pub inner_color: Color32,
    /// Keep the bubble inside the parent, shifting the tail instead
    pub clamp_to_edges: bool,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            corner_radius: 16.0,
            arrow_size: 8.0,
            content_padding: Margin::same(8.0),
            stroke_width: 1.0,
            stroke_color: Color32::WHITE,
            stroke_join: StrokeJoin::Round,
            inner_color: Color32::WHITE,
            clamp_to_edges: true,
        }
    }
}

impl TooltipStyle {
    /// Total margin around the bubble content, including room for the tail.
    pub fn inner_margin(&self) -> Margin {
        let mut margin = self.content_padding;
        margin.bottom += self.arrow_size;
        margin
    }
}

/// Style and formatting of the default value label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    pub prefix: String,
    /// Progress is multiplied by this before rounding
    pub scale: f32,
    pub font_size: f32,
    pub color: Color32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            prefix: "val: ".to_string(),
            scale: 100.0,
            font_size: 32.0,
            color: Color32::GRAY,
        }
    }
}

impl LabelStyle {
    /// Label text for the given progress.
    pub fn format(&self, progress: Progress) -> String {
        format!("{}{}", self.prefix, progress.scaled(self.scale).round() as i64)
    }
}

/// Complete seek bar configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeekBarConfig {
    pub track: TrackStyle,
    pub tooltip: TooltipStyle,
    pub label: LabelStyle,
    /// Vertical space between the bubble and the track
    pub gap: f32,
    pub min_height: f32,
    /// Horizontal inset applied to both the bubble area and the track
    pub horizontal_margin: f32,
}

impl Default for SeekBarConfig {
    fn default() -> Self {
        Self {
            track: TrackStyle::default(),
            tooltip: TooltipStyle::default(),
            label: LabelStyle::default(),
            gap: 4.0,
            min_height: 100.0,
            horizontal_margin: 12.0,
        }
    }
}

impl SeekBarConfig {
    /// Check that every length is usable for layout.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("track.height", self.track.height),
            ("track.rounding", self.track.rounding),
            ("track.interact_height", self.track.interact_height),
            ("tooltip.corner_radius", self.tooltip.corner_radius),
            ("tooltip.arrow_size", self.tooltip.arrow_size),
            ("tooltip.stroke_width", self.tooltip.stroke_width),
            ("tooltip.content_padding.left", self.tooltip.content_padding.left),
            ("tooltip.content_padding.right", self.tooltip.content_padding.right),
            ("tooltip.content_padding.top", self.tooltip.content_padding.top),
            ("tooltip.content_padding.bottom", self.tooltip.content_padding.bottom),
            ("label.font_size", self.label.font_size),
            ("gap", self.gap),
            ("min_height", self.min_height),
            ("horizontal_margin", self.horizontal_margin),
        ];

        for (name, value) in lengths {
            ensure!(
                value.is_finite() && value >= 0.0,
                "{} must be a finite, non-negative length (got {})",
                name,
                value
            );
        }

        ensure!(self.track.height > 0.0, "track.height must be greater than zero");
        ensure!(self.label.scale.is_finite(), "label.scale must be finite");
        ensure!(self.label.font_size > 0.0, "label.font_size must be greater than zero");

        Ok(())
    }
}
