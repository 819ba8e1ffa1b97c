// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Content data model.

pub mod about;
pub mod catalog;
pub mod lab;
pub mod localized;
pub mod project;
