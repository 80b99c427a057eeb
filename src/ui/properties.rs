// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Style properties panel.
//!
//! This module provides the side panel for editing the seek bar style
//! live: track and tooltip sizes, colors and the value label.

use crate::models::style::{SeekBarConfig, StrokeJoin};

/// Result of properties panel interaction.
pub enum PropertiesAction {
    None,
    ResetStyle,
}

/// Display the style properties panel.
pub fn show(ui: &mut egui::Ui, config: &mut SeekBarConfig) -> PropertiesAction {
    let mut action = PropertiesAction::None;

    ui.heading("Style");
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::CollapsingHeader::new("Track")
            .default_open(true)
            .show(ui, |ui| {
                let track = &mut config.track;
                egui::Grid::new("track_style").num_columns(2).show(ui, |ui| {
                    ui.label("Height");
                    ui.add(egui::Slider::new(&mut track.height, 1.0..=64.0));
                    ui.end_row();

                    ui.label("Rounding");
                    ui.add(egui::Slider::new(&mut track.rounding, 0.0..=32.0));
                    ui.end_row();

                    ui.label("Hit height");
                    ui.add(egui::Slider::new(&mut track.interact_height, 0.0..=96.0));
                    ui.end_row();

                    ui.label("Background");
                    ui.color_edit_button_srgba(&mut track.background_color);
                    ui.end_row();

                    ui.label("Fill");
                    ui.color_edit_button_srgba(&mut track.fill_color);
                    ui.end_row();
                });
            });

        egui::CollapsingHeader::new("Tooltip")
            .default_open(true)
            .show(ui, |ui| {
                let tooltip = &mut config.tooltip;
                egui::Grid::new("tooltip_style").num_columns(2).show(ui, |ui| {
                    ui.label("Corner radius");
                    ui.add(egui::Slider::new(&mut tooltip.corner_radius, 0.0..=64.0));
                    ui.end_row();

                    ui.label("Arrow size");
                    ui.add(egui::Slider::new(&mut tooltip.arrow_size, 0.0..=48.0));
                    ui.end_row();

                    ui.label("Padding");
                    let mut padding = tooltip.content_padding.top;
                    if ui
                        .add(egui::Slider::new(&mut padding, 0.0..=48.0))
                        .changed()
                    {
                        tooltip.content_padding = egui::Margin::same(padding);
                    }
                    ui.end_row();

                    ui.label("Stroke width");
                    ui.add(egui::Slider::new(&mut tooltip.stroke_width, 0.0..=12.0));
                    ui.end_row();

                    ui.label("Stroke");
                    ui.color_edit_button_srgba(&mut tooltip.stroke_color);
                    ui.end_row();

                    ui.label("Join");
                    ui.horizontal(|ui| {
                        ui.selectable_value(&mut tooltip.stroke_join, StrokeJoin::Round, "Round");
                        ui.selectable_value(&mut tooltip.stroke_join, StrokeJoin::Miter, "Miter");
                    });
                    ui.end_row();

                    ui.label("Fill");
                    ui.color_edit_button_srgba(&mut tooltip.inner_color);
                    ui.end_row();

                    ui.label("Clamp to edges");
                    ui.checkbox(&mut tooltip.clamp_to_edges, "");
                    ui.end_row();
                });
            });

        egui::CollapsingHeader::new("Label")
            .default_open(false)
            .show(ui, |ui| {
                let label = &mut config.label;
                egui::Grid::new("label_style").num_columns(2).show(ui, |ui| {
                    ui.label("Prefix");
                    ui.text_edit_singleline(&mut label.prefix);
                    ui.end_row();

                    ui.label("Scale");
                    ui.add(egui::DragValue::new(&mut label.scale).speed(1.0));
                    ui.end_row();

                    ui.label("Font size");
                    ui.add(egui::Slider::new(&mut label.font_size, 4.0..=96.0));
                    ui.end_row();

                    ui.label("Color");
                    ui.color_edit_button_srgba(&mut label.color);
                    ui.end_row();
                });
            });

        egui::CollapsingHeader::new("Layout")
            .default_open(false)
            .show(ui, |ui| {
                egui::Grid::new("layout_style").num_columns(2).show(ui, |ui| {
                    ui.label("Gap");
                    ui.add(egui::Slider::new(&mut config.gap, 0.0..=64.0));
                    ui.end_row();

                    ui.label("Min height");
                    ui.add(egui::Slider::new(&mut config.min_height, 0.0..=400.0));
                    ui.end_row();

                    ui.label("Side margin");
                    ui.add(egui::Slider::new(&mut config.horizontal_margin, 0.0..=200.0));
                    ui.end_row();
                });
            });

        ui.add_space(8.0);
        if ui.button("Reset style").clicked() {
            action = PropertiesAction::ResetStyle;
        }
    });

    action
}
