// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Demo application state and egui App implementation.
//!
//! This module contains the host application: it owns the seek position,
//! feeds it to the seek bar every frame and applies the positions the bar
//! reports. It also owns the style being edited.

use seektip::io::config;
use seektip::ui::{properties, toolbar};
use seektip::util::geometry::points_to_pixels;
use seektip::{Progress, SeekBar, SeekBarConfig};
use std::path::PathBuf;

/// Keyboard nudge step.
const NUDGE_STEP: f32 = 0.01;

/// Main application state.
pub struct SeekTipApp {
    /// Current seek position (owned by the host, not the widget)
    progress: Progress,

    /// Style currently applied to the seek bar
    config: SeekBarConfig,

    /// File the style was last loaded from or saved to
    style_path: Option<PathBuf>,

    /// Number of positions reported by the seek bar
    seek_count: usize,

    /// Width of the seek bar in physical pixels, from the last frame
    track_width_px: u32,

    /// Last style file error, shown in the status bar
    last_error: Option<String>,
}

impl Default for SeekTipApp {
    fn default() -> Self {
        Self::new()
    }
}

impl SeekTipApp {
    /// Create a new demo application instance.
    pub fn new() -> Self {
        Self {
            progress: Progress::START,
            config: SeekBarConfig::default(),
            style_path: None,
            seek_count: 0,
            track_width_px: 0,
            last_error: None,
        }
    }

    /// Apply a seek position.
    fn seek(&mut self, progress: Progress) {
        self.progress = progress;
        self.seek_count += 1;
    }

    /// Load a style file, keeping the current style on failure.
    fn load_style(&mut self, path: PathBuf) {
        match config::load(&path) {
            Ok(loaded) => {
                log::info!("Loaded style from {}", path.display());
                self.config = loaded;
                self.style_path = Some(path);
                self.last_error = None;
            }
            Err(e) => {
                log::error!("Failed to load style: {:#}", e);
                self.last_error = Some(format!("Failed to load style: {:#}", e));
            }
        }
    }

    /// Save the current style.
    fn save_style(&mut self, path: PathBuf) {
        match config::save(&self.config, &path) {
            Ok(()) => {
                log::info!("Saved style to {}", path.display());
                self.style_path = Some(path);
                self.last_error = None;
            }
            Err(e) => {
                log::error!("Failed to save style: {:#}", e);
                self.last_error = Some(format!("Failed to save style: {:#}", e));
            }
        }
    }

    fn reset_style(&mut self) {
        self.config = SeekBarConfig::default();
        log::info!("Style reset to defaults");
    }
}

/// Arrow keys belong to a focused widget (text field, slider) when there is one.
fn keyboard_seek_allowed(ctx: &egui::Context) -> bool {
    !ctx.wants_keyboard_input() && !ctx.memory(|m| m.focused().is_some())
}

impl eframe::App for SeekTipApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Load Style...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Styles", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.load_style(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    ui.menu_button("Save Style", |ui| {
                        if ui.button("Save as YAML...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("YAML", &["yaml", "yml"])
                                .set_file_name("seekbar.yaml")
                                .save_file()
                            {
                                self.save_style(path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Save as JSON...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("seekbar.json")
                                .save_file()
                            {
                                self.save_style(path);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Reset Style").clicked() {
                        self.reset_style();
                        ui.close_menu();
                    }
                });
            });
        });

        // Toolbar
        let toolbar_seek = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                toolbar::show(ui, self.progress, &self.config.label)
            })
            .inner;
        if let Some(progress) = toolbar_seek {
            self.seek(progress);
        }

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Track: {} px", self.track_width_px));
                ui.separator();
                ui.label(format!("Seeks: {}", self.seek_count));
                if let Some(ref path) = self.style_path {
                    ui.separator();
                    ui.label(format!("Style: {}", path.display()));
                }
                if let Some(ref error) = self.last_error {
                    ui.separator();
                    ui.colored_label(egui::Color32::LIGHT_RED, error);
                }
            });
        });

        // Properties panel (right side)
        let properties_action = egui::SidePanel::right("properties")
            .default_width(280.0)
            .show(ctx, |ui| properties::show(ui, &mut self.config))
            .inner;

        match properties_action {
            properties::PropertiesAction::ResetStyle => self.reset_style(),
            properties::PropertiesAction::None => {}
        }

        // Handle keyboard seeking, unless another widget has focus
        if keyboard_seek_allowed(ctx) {
            let key_seek = ctx.input(|i| {
                if i.key_pressed(egui::Key::ArrowLeft) {
                    Some(self.progress.offset(-NUDGE_STEP))
                } else if i.key_pressed(egui::Key::ArrowRight) {
                    Some(self.progress.offset(NUDGE_STEP))
                } else if i.key_pressed(egui::Key::Home) {
                    Some(Progress::START)
                } else if i.key_pressed(egui::Key::End) {
                    Some(Progress::END)
                } else {
                    None
                }
            });
            if let Some(progress) = key_seek {
                self.seek(progress);
            }
        }

        // Seek bar (center)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(24.0);

            let mut reported = None;
            let response = SeekBar::new(self.progress, &self.config).show(ui, |progress| {
                reported = Some(progress);
            });
            if let Some(progress) = reported {
                self.seek(progress);
            }

            self.track_width_px = points_to_pixels(response.rect.width(), ctx.pixels_per_point());
        });
    }
}
