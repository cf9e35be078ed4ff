//! Site configuration, read from an inline JSON block in the page.
//!
//! Every field has a default so an absent or partial block still yields a
//! working page.

use crate::constants::{
    GLITCH_ACTIVE_MS, GLITCH_PERIOD_MS, INTRO_MAX_STEP, INTRO_TICK_MS, SCROLL_LERP,
    TRACK_BREAKPOINT_PX, TRACK_CENTER_BAND,
};
use crate::form::FormPolicy;
use crate::intro::IntroVariant;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// When the scroll scene attaches relative to the intro gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollSetup {
    /// Register bindings from the intro gate's completion hook.
    #[default]
    AfterIntro,
    /// Register at startup, independent of the intro.
    Immediate,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    pub variant: IntroVariant,
    pub tick_ms: u32,
    pub max_step: f32,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            variant: IntroVariant::default(),
            tick_ms: INTRO_TICK_MS,
            max_step: INTRO_MAX_STEP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub setup: ScrollSetup,
    pub lerp: f32,
    pub wheel_multiplier: f32,
    pub breakpoint_px: f32,
    pub center_band: [f32; 2],
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            setup: ScrollSetup::default(),
            lerp: SCROLL_LERP,
            wheel_multiplier: 1.0,
            breakpoint_px: TRACK_BREAKPOINT_PX,
            center_band: TRACK_CENTER_BAND,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GlitchConfig {
    pub period_ms: u32,
    pub active_ms: u32,
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self {
            period_ms: GLITCH_PERIOD_MS,
            active_ms: GLITCH_ACTIVE_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub intro: IntroConfig,
    pub scroll: ScrollConfig,
    pub glitch: GlitchConfig,
    pub form: FormPolicy,
    pub background_image: Option<String>,
    /// Fixed seed for the intro's random progress steps; entropy when absent.
    pub seed: Option<u64>,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            intro: IntroConfig::default(),
            scroll: ScrollConfig::default(),
            glitch: GlitchConfig::default(),
            form: FormPolicy::default(),
            background_image: None,
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(text)?)
    }

    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level
            .parse::<log::LevelFilter>()
            .unwrap_or(log::LevelFilter::Info)
    }
}
