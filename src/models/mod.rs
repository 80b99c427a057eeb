// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: the seek position and the style configuration.

pub mod progress;
pub mod style;
