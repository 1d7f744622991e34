// SPDX-License-Identifier: GPL-3.0-only

//! Thai virtual keyboard, headless inspection tool.
//!
//! Builds a keyboard with estimated font metrics, prints its size
//! requirement and key table, then replays pointer taps and key
//! combinations given on the command line and prints every signal the
//! keyboard emits.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use futures::channel::mpsc::UnboundedReceiver;

use thaivkb::config::Config;
use thaivkb::controller::{Collaborators, KeyboardController, KeyboardSignal};
use thaivkb::geometry::PixelSize;
use thaivkb::host::{
    EstimatedMetrics, JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore,
};
use thaivkb::input::HostKeyEvent;
use thaivkb::state::RenderFont;

#[derive(Parser, Debug)]
#[command(name = "thaivkb", version, about = "Inspect the Thai virtual keyboard without a GUI")]
struct Cli {
    /// JSON configuration file
    #[arg(long)]
    config: Option<String>,

    /// JSON preference file holding the font; saved again on exit
    #[arg(long)]
    prefs: Option<PathBuf>,

    /// Widget width in pixels (defaults to the minimum)
    #[arg(long)]
    width: Option<i32>,

    /// Widget height in pixels (defaults to the minimum)
    #[arg(long)]
    height: Option<i32>,

    /// Screen resolution used to estimate glyph sizes
    #[arg(long, default_value_t = 96.0)]
    dpi: f32,

    /// Tap (press and release) at x,y; may be repeated
    #[arg(long = "press", value_name = "X,Y", value_parser = parse_point)]
    presses: Vec<(f32, f32)>,

    /// Send a physical key combination such as ctrl+9; may be repeated
    #[arg(long = "key", value_name = "COMBO")]
    keys: Vec<String>,
}

fn parse_point(text: &str) -> Result<(f32, f32), String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", text))?;
    let x = x.trim().parse().map_err(|e| format!("bad x '{}': {}", x, e))?;
    let y = y.trim().parse().map_err(|e| format!("bad y '{}': {}", y, e))?;
    Ok((x, y))
}

fn print_signals(signals: &mut UnboundedReceiver<KeyboardSignal>) {
    while let Ok(signal) = signals.try_recv() {
        match signal {
            KeyboardSignal::KeyPressed(output) => println!("  key pressed: {}", output),
            KeyboardSignal::PassThroughKeyEvent(event) => println!("  pass through: {}", event),
            KeyboardSignal::MinimumSizeChanged(req) => println!(
                "  minimum size: {}x{} ({} icons)",
                req.min_width, req.min_height, req.tier
            ),
            KeyboardSignal::RedrawRequested(redraw) => println!("  redraw: {:?}", redraw),
        }
    }
}

fn print_keys(keyboard: &KeyboardController) {
    let tier = keyboard.icon_tier();
    println!(
        "Keys ({} layer):",
        if keyboard.shifted() { "shifted" } else { "unshifted" }
    );

    for physical in keyboard.geometry().keys() {
        let rect = physical.bounds.primary.snapped();
        let label = keyboard
            .keycap(physical.key)
            .or_else(|| keyboard.action_key(physical.key).map(|a| a.asset_name(tier)))
            .unwrap_or_else(|| "space".to_string());

        println!(
            "  {:<6} [{:>4}, {:>4}) x [{:>4}, {:>4})  code {:>3}  {}",
            physical.key.to_string(),
            rect.left,
            rect.right,
            rect.top,
            rect.bottom,
            keyboard.key_code(physical.key),
            label
        );
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("thaivkb=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let mut store: Box<dyn PreferenceStore> = match &cli.prefs {
        Some(path) => Box::new(JsonPreferenceStore::open(path)?),
        None => Box::new(MemoryPreferenceStore::new()),
    };
    let font = RenderFont::load(store.as_ref());

    let collaborators = Collaborators {
        metrics: Box::new(EstimatedMetrics::new(cli.dpi)),
        ..Collaborators::headless()
    };
    let (mut keyboard, mut signals) =
        KeyboardController::new(&config, config.keymap()?, font, collaborators);

    let requirement = keyboard.size_requirement();
    let size = requirement.clamp(PixelSize::new(
        cli.width.unwrap_or(requirement.min_width),
        cli.height.unwrap_or(requirement.min_height),
    ));
    keyboard.resize(size.width, size.height);

    println!("Font: {}", keyboard.font());
    println!(
        "Glyph box {}x{}, minimum size {}x{}, widget {}x{}, {} icons, guard {}",
        requirement.glyph.width,
        requirement.glyph.height,
        requirement.min_width,
        requirement.min_height,
        size.width,
        size.height,
        requirement.tier,
        if keyboard.nsm_guard() { "on" } else { "off" }
    );
    print_signals(&mut signals);
    print_keys(&keyboard);

    for (x, y) in &cli.presses {
        println!("Tap at ({}, {}):", x, y);
        match keyboard.press(*x, *y) {
            Some(key) => println!("  hit {}", key),
            None => println!("  no key"),
        }
        keyboard.release();
        print_signals(&mut signals);
    }

    for combo in &cli.keys {
        let event = HostKeyEvent::parse(combo)
            .ok_or_else(|| format!("unrecognized key combination '{}'", combo))?;
        println!("Key {}:", event);
        keyboard.key_event(event);
        print_signals(&mut signals);
    }

    if cli.prefs.is_some() {
        keyboard.save_preferences(store.as_mut())?;
    }

    Ok(())
}
