// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Small helpers shared by the state and UI layers.

pub mod geometry;
pub mod layout;
