// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar with quick seek buttons.
//!
//! This module provides the toolbar interface for jumping to fixed
//! positions and reading the current value.

use crate::models::{progress::Progress, style::LabelStyle};

/// Display the toolbar. Returns the position to seek to, if a jump
/// button was clicked.
pub fn show(
    ui: &mut egui::Ui,
    progress: Progress,
    label: &LabelStyle,
) -> Option<Progress> {
    let mut seek = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Seek:");

        ui.separator();

        if ui.button("|< Start").clicked() {
            seek = Some(Progress::START);
        }

        if ui.button("Middle").clicked() {
            seek = Some(Progress::new(0.5));
        }

        if ui.button("End >|").clicked() {
            seek = Some(Progress::END);
        }

        ui.separator();

        ui.label(egui::RichText::new(label.format(progress)).monospace().weak());
    });

    seek
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click_at(pos: egui::Pos2) -> [egui::RawInput; 2] {
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        };
        [
            egui::RawInput {
                events: vec![egui::Event::PointerMoved(pos), button(true)],
                ..Default::default()
            },
            egui::RawInput {
                events: vec![button(false)],
                ..Default::default()
            },
        ]
    }

    fn run_toolbar(ctx: &egui::Context, input: egui::RawInput, seeks: &mut Vec<Progress>) -> egui::Rect {
        let mut rect = egui::Rect::NOTHING;
        let _ = ctx.run(input, |ctx| {
            let inner = egui::TopBottomPanel::top("toolbar")
                .show(ctx, |ui| show(ui, Progress::new(0.25), &LabelStyle::default()));
            rect = inner.response.rect;
            seeks.extend(inner.inner);
        });
        rect
    }

    #[test]
    fn test_buttons_only_jump() {
        let ctx = egui::Context::default();
        let mut seeks = Vec::new();
        let panel = run_toolbar(&ctx, egui::RawInput::default(), &mut seeks);
        assert!(seeks.is_empty());

        // Sweep clicks along the row; every hit must be one of the jumps
        let mut x = panel.left();
        while x < panel.left() + 400.0 {
            for input in click_at(egui::pos2(x, panel.center().y)) {
                run_toolbar(&ctx, input, &mut seeks);
            }
            x += 4.0;
        }

        seeks.dedup();
        assert_eq!(seeks, vec![Progress::START, Progress::new(0.5), Progress::END]);
    }
}
