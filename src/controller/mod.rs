// SPDX-License-Identifier: GPL-3.0-only

//! The keyboard controller state machine.
//!
//! The controller owns the keymap, the shift state, the press state and the
//! current font. The host feeds it pointer presses and releases, widget
//! resizes and physical key events; the controller answers with
//! [`KeyboardSignal`]s on an unbounded channel.
//!
//! # Press and release
//!
//! Presses and releases are separate phases:
//!
//! - `press(x, y)` resolves the key and emits `KeyPressed` right away for any
//!   code above 3. Shift and the font selector emit nothing.
//! - `release()` acts on the key held since the press. Shift toggles the
//!   layer, the font selector opens the font chooser, and every other key
//!   drops back to the unshifted layer.
//!
//! # Size
//!
//! The widget never gets smaller than the minimum size. Every font change
//! resizes it to the new minimum; the font accelerators then redraw only the
//! active layer, while an accepted font dialog redraws both.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use thaivkb::config::Config;
//! use thaivkb::controller::{Collaborators, KeyboardController};
//! use thaivkb::keymap::KeymapTable;
//! use thaivkb::state::RenderFont;
//!
//! let (mut keyboard, mut signals) = KeyboardController::new(
//!     &Config::default(),
//!     KeymapTable::kedmanee(),
//!     RenderFont::default(),
//!     Collaborators::headless(),
//! );
//! keyboard.resize(450, 200);
//! keyboard.press(440.0, 10.0);
//! keyboard.release();
//! ```

pub mod message;
pub mod state;

pub use message::{KeyboardSignal, Redraw};
pub use state::PressState;

use futures::channel::mpsc;

use crate::app_settings::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::config::Config;
use crate::geometry::{
    ActionKey, HitTester, IconTier, LayoutGeometry, PixelSize, SizePolicy, SizeRequirement,
    SpaceBand,
};
use crate::host::{
    DecliningChooser, EstimatedMetrics, FixedScriptSupport, FontChooser, FontMetrics,
    PreferenceError, PreferenceStore, ScriptSupportProbe,
};
use crate::input::{Accelerator, HostKeyEvent, KeyOutput};
use crate::keymap::{CodeConverter, KeyCode, KeymapTable, LogicalKey};
use crate::state::RenderFont;

/// Host-supplied services the controller calls into.
pub struct Collaborators {
    /// Glyph measurement for the size policy
    pub metrics: Box<dyn FontMetrics>,
    /// Modal font dialog opened by the font-selector key
    pub chooser: Box<dyn FontChooser>,
    /// Font script coverage, consulted once for the dotted-circle guard
    pub probe: Box<dyn ScriptSupportProbe>,
}

impl Collaborators {
    /// Collaborators that need no GUI toolkit.
    #[must_use]
    pub fn headless() -> Self {
        Self {
            metrics: Box::new(EstimatedMetrics::default()),
            chooser: Box::new(DecliningChooser),
            probe: Box::new(FixedScriptSupport(true)),
        }
    }
}

/// Thai keyboard state machine.
pub struct KeyboardController {
    keymap: KeymapTable,
    converter: CodeConverter,
    space_band: SpaceBand,
    metrics: Box<dyn FontMetrics>,
    chooser: Box<dyn FontChooser>,

    font: RenderFont,
    /// Font at construction, restored by Ctrl+0
    previous_font: RenderFont,
    requirement: SizeRequirement,

    shifted: bool,
    press: Option<PressState>,

    widget_size: PixelSize,
    /// Size each layer image was last rendered at, indexed by shift state
    image_sizes: [PixelSize; 2],

    signals: mpsc::UnboundedSender<KeyboardSignal>,
}

impl KeyboardController {
    /// Creates a controller and the receiving end of its signal channel.
    ///
    /// The dotted-circle guard is resolved here, once, from the configured
    /// policy and the initial font. The widget starts at the minimum size,
    /// which is also the first signal on the channel.
    pub fn new(
        config: &Config,
        keymap: KeymapTable,
        font: RenderFont,
        collaborators: Collaborators,
    ) -> (Self, mpsc::UnboundedReceiver<KeyboardSignal>) {
        let Collaborators {
            metrics,
            chooser,
            probe,
        } = collaborators;

        let guard = config.nsm_guard.resolve(probe.as_ref(), &font.family);
        tracing::info!(
            "Dotted-circle guard {} ({:?} policy, font {})",
            if guard { "on" } else { "off" },
            config.nsm_guard,
            font
        );

        let requirement = SizePolicy::compute(metrics.as_ref(), &font, guard);
        let size = requirement.min_size();
        let (signals, receiver) = mpsc::unbounded();

        let controller = Self {
            keymap,
            converter: CodeConverter::new(guard),
            space_band: config.space_band,
            metrics,
            chooser,
            previous_font: font.clone(),
            font,
            requirement,
            shifted: false,
            press: None,
            widget_size: size,
            image_sizes: [size; 2],
            signals,
        };

        controller.emit(KeyboardSignal::MinimumSizeChanged(requirement));
        (controller, receiver)
    }

    fn emit(&self, signal: KeyboardSignal) {
        if let Err(e) = self.signals.unbounded_send(signal) {
            tracing::warn!("Dropped keyboard signal, receiver is gone: {:?}", e.into_inner());
        }
    }

    fn layer_index(&self) -> usize {
        usize::from(self.shifted)
    }

    // ========================================================================
    // Pointer input
    // ========================================================================

    /// Handles a pointer press at widget coordinates.
    ///
    /// Returns the pressed key, or `None` when the point is outside the
    /// widget or in a dead zone; such presses change nothing.
    pub fn press(&mut self, x: f32, y: f32) -> Option<LogicalKey> {
        let Some(hit) = HitTester::resolve(x, y, &self.geometry()) else {
            tracing::debug!("Press at ({}, {}) hit no key", x, y);
            return None;
        };

        let code = self.key_code(hit.key);
        self.press = Some(PressState {
            key: hit.key,
            highlight: hit.bounds,
            code,
        });
        tracing::debug!("Pressed {} (code {})", hit.key, code);

        if code.emits_on_press() {
            if let Some(output) = KeyOutput::from_code(code) {
                self.emit(KeyboardSignal::KeyPressed(output));
            }
        }

        self.emit(KeyboardSignal::RedrawRequested(Redraw::Highlight));
        Some(hit.key)
    }

    /// Handles the pointer release that ends the current press.
    ///
    /// Does nothing when no key is held.
    pub fn release(&mut self) {
        let Some(press) = self.press.take() else {
            return;
        };

        if press.key.is_shift() {
            self.shifted = !self.shifted;
            tracing::info!("Shift {}", if self.shifted { "on" } else { "off" });
        } else if press.key.is_font_selector() {
            self.choose_font();
        } else if self.shifted {
            self.shifted = false;
            tracing::debug!("Shift released by {}", press.key);
        }

        self.emit(KeyboardSignal::RedrawRequested(Redraw::Highlight));

        let layer = self.layer_index();
        if self.image_sizes[layer] != self.widget_size {
            tracing::debug!(
                "Rescaling layer image from {:?} to {:?}",
                self.image_sizes[layer],
                self.widget_size
            );
            self.redraw_active_layer();
        }
    }

    fn choose_font(&mut self) {
        let Some(font) = self.chooser.choose(&self.font) else {
            tracing::debug!("Font selection cancelled");
            return;
        };

        tracing::info!("Font changed from {} to {}", self.font, font);
        self.font = font;
        self.recompute_size();
        self.image_sizes = [self.widget_size; 2];
        self.emit(KeyboardSignal::RedrawRequested(Redraw::AllLayers));
    }

    /// Records a new widget size and redraws the active layer at that size.
    ///
    /// Sizes below the minimum are raised to it.
    pub fn resize(&mut self, width: i32, height: i32) {
        let requested = PixelSize::new(width, height);
        let size = self.requirement.clamp(requested);
        if size != requested {
            tracing::warn!(
                "Widget resized to {}x{}, below the minimum; using {}x{}",
                width,
                height,
                size.width,
                size.height
            );
        }

        self.widget_size = size;
        self.redraw_active_layer();
    }

    fn redraw_active_layer(&mut self) {
        let layer = self.layer_index();
        self.image_sizes[layer] = self.widget_size;
        self.emit(KeyboardSignal::RedrawRequested(Redraw::Layer(self.shifted)));
    }

    // ========================================================================
    // Physical keyboard
    // ========================================================================

    /// Handles a physical key event.
    ///
    /// Returns `true` if the event was a font accelerator. Anything else is
    /// sent back unchanged as [`KeyboardSignal::PassThroughKeyEvent`].
    pub fn key_event(&mut self, event: HostKeyEvent) -> bool {
        let Some(accelerator) = Accelerator::recognize(&event) else {
            self.emit(KeyboardSignal::PassThroughKeyEvent(event));
            return false;
        };

        match accelerator {
            Accelerator::ResetFont => {
                self.font = self.previous_font.clone();
            }
            Accelerator::IncreaseSize => {
                if self.font.point_size >= MAX_FONT_SIZE {
                    tracing::debug!("Font already at {}pt, not growing", self.font.point_size);
                    return true;
                }
                self.font.point_size += 1;
            }
            Accelerator::DecreaseSize => {
                if self.font.point_size <= MIN_FONT_SIZE {
                    tracing::debug!("Font already at {}pt, not shrinking", self.font.point_size);
                    return true;
                }
                self.font.point_size -= 1;
            }
        }

        tracing::info!("{:?}: font is now {}", accelerator, self.font);
        self.recompute_size();
        self.redraw_active_layer();
        true
    }

    /// Recomputes the minimum size for the current font and resizes the
    /// widget to it.
    fn recompute_size(&mut self) {
        self.requirement =
            SizePolicy::compute(self.metrics.as_ref(), &self.font, self.converter.guard_enabled());
        self.emit(KeyboardSignal::MinimumSizeChanged(self.requirement));
        self.widget_size = self.requirement.min_size();
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Key geometry at the current widget size.
    #[must_use]
    pub fn geometry(&self) -> LayoutGeometry {
        LayoutGeometry::from_size(self.widget_size, self.space_band)
    }

    #[must_use]
    pub fn minimum_size(&self) -> PixelSize {
        self.requirement.min_size()
    }

    #[must_use]
    pub fn size_requirement(&self) -> SizeRequirement {
        self.requirement
    }

    #[must_use]
    pub fn icon_tier(&self) -> IconTier {
        self.requirement.tier
    }

    #[must_use]
    pub fn widget_size(&self) -> PixelSize {
        self.widget_size
    }

    #[must_use]
    pub fn shifted(&self) -> bool {
        self.shifted
    }

    /// The key held down, or `None` when idle.
    #[must_use]
    pub fn press_state(&self) -> Option<&PressState> {
        self.press.as_ref()
    }

    #[must_use]
    pub fn font(&self) -> &RenderFont {
        &self.font
    }

    #[must_use]
    pub fn previous_font(&self) -> &RenderFont {
        &self.previous_font
    }

    #[must_use]
    pub fn nsm_guard(&self) -> bool {
        self.converter.guard_enabled()
    }

    #[must_use]
    pub fn keymap(&self) -> &KeymapTable {
        &self.keymap
    }

    /// Code of a key in the active layer.
    #[must_use]
    pub fn key_code(&self, key: LogicalKey) -> KeyCode {
        self.keymap.code(self.shifted, key.row, key.column)
    }

    /// Text drawn on a key in the active layer.
    #[must_use]
    pub fn keycap(&self, key: LogicalKey) -> Option<String> {
        self.converter.keycap(self.key_code(key), key.row)
    }

    /// Icon drawn on a key in the active layer, if it is an action key.
    #[must_use]
    pub fn action_key(&self, key: LogicalKey) -> Option<ActionKey> {
        ActionKey::for_code(self.key_code(key))
    }

    /// Persists the current font. Called when the keyboard closes.
    pub fn save_preferences(&self, store: &mut dyn PreferenceStore) -> Result<(), PreferenceError> {
        self.font.save(store)?;
        tracing::debug!("Saved font preference {}", self.font);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
