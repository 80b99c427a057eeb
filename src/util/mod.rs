// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometry and path helpers shared by the widgets.

pub mod geometry;
pub mod path;
