// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Widgets and demo panels.

pub mod properties;
pub mod seek_bar;
pub mod seek_track;
pub mod toolbar;
pub mod tooltip;
