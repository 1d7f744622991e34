// SPDX-License-Identifier: GPL-3.0-only

//! Signals sent from the keyboard controller to its host.

use crate::geometry::SizeRequirement;
use crate::input::{HostKeyEvent, KeyOutput};

/// What the drawing layer has to repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// The pressed-key highlight appeared or went away.
    Highlight,

    /// The keyboard image of one layer (`true` = shifted) must be rendered
    /// again at the current widget size.
    Layer(bool),

    /// Both layer images must be rendered again, e.g. after a font change.
    AllLayers,
}

/// Signals emitted by the keyboard controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardSignal {
    /// An on-screen key was pressed. Emitted on press, not on release.
    KeyPressed(KeyOutput),

    /// A physical key event that is not a font accelerator, returned
    /// unchanged for the host to handle.
    PassThroughKeyEvent(HostKeyEvent),

    /// The font changed and the widget must not be smaller than this.
    MinimumSizeChanged(SizeRequirement),

    /// Part of the keyboard needs repainting.
    RedrawRequested(Redraw),
}
