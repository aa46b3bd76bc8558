//! Tuning configuration loaded from `data/config/sim.toml`.
//!
//! Missing file falls back to defaults; individual fields can be tuned
//! quickly via env vars without touching the file.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Wobble integrator tuning for the carrier's liquid mesh.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct WobbleCfg {
    /// Cap on the per-tick velocity contribution (shader units).
    pub max_wobble: f32,
    /// Sine pulse frequency multiplier.
    pub speed: f32,
    /// Exponential recovery rate toward rest.
    pub recovery: f32,
}

impl Default for WobbleCfg {
    fn default() -> Self {
        Self {
            max_wobble: 0.03,
            speed: 1.0,
            recovery: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SimTuning {
    /// Seconds to draw a vial into the carrier to capacity.
    pub draw_sample_time_s: f32,
    /// Seconds to inject a destination container to capacity.
    pub inject_time_s: f32,
    /// Placement tween duration when the sequence presents a vessel.
    pub fall_duration_s: f32,
    pub wobble: WobbleCfg,
}

impl Default for SimTuning {
    fn default() -> Self {
        Self {
            draw_sample_time_s: 1.5,
            inject_time_s: 3.0,
            fall_duration_s: 1.5,
            wobble: WobbleCfg::default(),
        }
    }
}

impl SimTuning {
    /// Floor non-positive durations to 1 ms; progress math requires a
    /// positive duration and config mistakes should not panic a session.
    pub fn sanitize(&mut self) {
        for (name, v) in [
            ("draw_sample_time_s", &mut self.draw_sample_time_s),
            ("inject_time_s", &mut self.inject_time_s),
            ("fall_duration_s", &mut self.fall_duration_s),
        ] {
            if *v <= 0.0 {
                tracing::warn!(target: "config", field = name, value = *v, "non-positive duration floored to 1ms");
                *v = 1e-3;
            }
        }
    }
}

fn data_root() -> PathBuf {
    // Prefer top-level workspace `data/` so tests and tools can run from any crate.
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() {
        ws
    } else {
        here.join("data")
    }
}

pub fn load_default() -> Result<SimTuning> {
    let path = data_root().join("config/sim.toml");
    let mut cfg = if path.is_file() {
        let txt =
            std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<SimTuning>(&txt).context("parse sim TOML")?
    } else {
        SimTuning::default()
    };
    // Env overrides for quick tuning (optional)
    if let Ok(s) = std::env::var("DRAW_TIME_S") {
        if let Ok(v) = s.parse() {
            cfg.draw_sample_time_s = v;
        }
    }
    if let Ok(s) = std::env::var("INJECT_TIME_S") {
        if let Ok(v) = s.parse() {
            cfg.inject_time_s = v;
        }
    }
    cfg.sanitize();
    Ok(cfg)
}
