// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! seektip demo
//!
//! A desktop application hosting a seek bar with a floating value
//! tooltip, with a live style editor and style file loading/saving.

mod app;

use anyhow::Result;
use app::SeekTipApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 400.0])
            .with_min_inner_size([480.0, 240.0])
            .with_title("seektip - Seek Bar Tooltip Demo"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "seektip",
        options,
        Box::new(|_cc| Ok(Box::new(SeekTipApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
