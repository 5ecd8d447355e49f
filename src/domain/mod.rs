// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Domain layer: pure data and arithmetic, no UI concerns.

pub mod crop;
