// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Seek bar: a tooltip bubble stacked above a seek track.

use super::{seek_track::SeekTrack, tooltip::TooltipBubble};
use crate::models::{progress::Progress, style::SeekBarConfig};
use egui::{Frame, Id, Margin, Response, RichText, Ui};

/// Tooltip bubble, gap and track sharing one horizontal extent.
pub struct SeekBar<'a> {
    progress: Progress,
    config: &'a SeekBarConfig,
    id_source: Id,
}

impl<'a> SeekBar<'a> {
    pub fn new(progress: Progress, config: &'a SeekBarConfig) -> Self {
        Self {
            progress,
            config,
            id_source: Id::new("seek_bar"),
        }
    }

    /// Distinguish several seek bars in the same `Ui`.
    pub fn id_source(mut self, id_source: impl std::hash::Hash) -> Self {
        self.id_source = Id::new(id_source);
        self
    }

    /// Show the seek bar with the configured value label in the bubble.
    ///
    /// `on_seek` is called with every position the pointer requests.
    pub fn show(self, ui: &mut Ui, on_seek: impl FnMut(Progress)) -> Response {
        let label = &self.config.label;
        let text = RichText::new(label.format(self.progress))
            .size(label.font_size)
            .color(label.color);

        self.show_with_content(
            ui,
            |ui| {
                ui.label(text);
            },
            on_seek,
        )
    }

    /// Show the seek bar with custom bubble content.
    pub fn show_with_content(
        self,
        ui: &mut Ui,
        add_contents: impl FnOnce(&mut Ui),
        mut on_seek: impl FnMut(Progress),
    ) -> Response {
        let config = self.config;
        let id = self.id_source;
        let progress = self.progress;

        Frame::none()
            .inner_margin(Margin::symmetric(config.horizontal_margin, 0.0))
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.set_min_height(config.min_height);
                    ui.spacing_mut().item_spacing.y = 0.0;

                    let parent_width = ui.available_width();
                    TooltipBubble::new(progress, parent_width, &config.tooltip)
                        .id_source(id.with("tooltip"))
                        .show(ui, add_contents);

                    ui.add_space(config.gap);

                    let output = SeekTrack::new(progress, &config.track)
                        .id_source(id.with("track"))
                        .show(ui);
                    if let Some(seek) = output.seek {
                        on_seek(seek);
                    }
                    output.response
                })
                .inner
            })
            .inner
    }
}
