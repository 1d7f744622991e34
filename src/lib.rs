// SPDX-License-Identifier: GPL-3.0-only

//! ThaiVkb - the core of an on-screen Thai keyboard
//!
//! This crate turns pointer input on a drawn keyboard into Thai characters.
//! Drawing, the window, the font dialog and settings storage belong to the
//! host GUI framework and are reached through the traits in [`host`].
//!
//! # Architecture
//!
//! 1. **Keymap** (`keymap`): Two 15 x 5 grids of legacy Thai codes, their
//!    conversion to Unicode and the dotted-circle guard for combining marks.
//!
//! 2. **Geometry** (`geometry`): Per-row key boundaries, hit testing and the
//!    minimum size / icon tier derived from font metrics.
//!
//! 3. **Controller** (`controller`): The press/release state machine. It
//!    emits key presses, pass-through key events, size changes and redraw
//!    requests over a channel.
//!
//! # Modules
//!
//! - `app_settings`: Centralized application constants
//! - `config`: Deployment configuration (guard policy, space band, keymap file)
//! - `controller`: Keyboard state machine and its signals
//! - `geometry`: Layout geometry, hit testing and size policy
//! - `host`: Collaborator traits and headless implementations
//! - `input`: Key outputs, XKB keysyms and font accelerators
//! - `keymap`: Keymap tables, code conversion and keymap files
//! - `state`: Keyboard font and its persistence

pub mod app_settings;
pub mod config;
pub mod controller;
pub mod geometry;
pub mod host;
pub mod input;
pub mod keymap;
pub mod state;

// ============================================================================
// Integration Tests
// ============================================================================
