// SPDX-License-Identifier: GPL-3.0-only

//! Input handling for the Thai keyboard.
//!
//! This module covers both directions of key traffic between the keyboard and
//! its host: the outputs a pressed on-screen key emits, and the physical
//! keyboard events the host forwards to the keyboard.
//!
//! # Features
//!
//! - **Key outputs**: Thai characters, reserved ASCII and control keys, with XKB keysyms
//! - **Modifier sets**: Which modifiers accompany a physical key event
//! - **Accelerators**: Ctrl+0 / Ctrl+9 / Ctrl+8 font shortcuts; everything else passes through
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use thaivkb::input::{Accelerator, HostKeyEvent, KeyOutput};
//! use thaivkb::keymap::KeyCode;
//!
//! let output = KeyOutput::from_code(KeyCode(161)).unwrap();
//! println!("Inject keysym {:?}", output.keysym());
//!
//! let event = HostKeyEvent::parse("ctrl+9").unwrap();
//! assert_eq!(Accelerator::recognize(&event), Some(Accelerator::IncreaseSize));
//! ```

// Sub-modules
pub mod accelerator;
pub mod keycode;
pub mod modifier;

// Re-export public API
pub use accelerator::{Accelerator, HostKeyEvent};
pub use keycode::{ControlKey, KeyOutput};
pub use modifier::{Modifier, ModifierSet};

// ============================================================================
// Module Tests
// ============================================================================
