//! Playback configuration.

use std::time::Duration;

use algostory_steps::BubbleOptions;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::AlgorithmId;
use crate::playback::PlaybackSpeed;

const TICK_MS: &str = "ALGOSTORY_TICK_MS";
const SPEED: &str = "ALGOSTORY_SPEED";
const BUBBLE_EARLY_EXIT: &str = "ALGOSTORY_BUBBLE_EARLY_EXIT";

/// Settings shared by every walkthrough session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisConfig {
    /// Replaces every family's base interval when set
    pub tick_override: Option<Duration>,
    /// Initial playback speed
    pub speed: PlaybackSpeed,
    /// Bubble sort tuning
    pub bubble: BubbleOptions,
}

impl Default for VisConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl VisConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    ///
    /// Values that fail to parse are logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tick_override = lookup(TICK_MS).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(0) | Err(_) => {
                warn!(key = TICK_MS, value = %raw, "invalid tick interval, using per-algorithm default");
                None
            }
            Ok(ms) => Some(Duration::from_millis(ms)),
        });

        let speed = lookup(SPEED)
            .map(|raw| {
                PlaybackSpeed::parse(&raw).unwrap_or_else(|| {
                    warn!(key = SPEED, value = %raw, "invalid playback speed, using normal");
                    PlaybackSpeed::Normal
                })
            })
            .unwrap_or_default();

        let early_exit = lookup(BUBBLE_EARLY_EXIT)
            .map(|raw| match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    warn!(key = BUBBLE_EARLY_EXIT, value = %raw, "invalid flag, leaving early exit off");
                    false
                }
            })
            .unwrap_or(false);

        Self {
            tick_override,
            speed,
            bubble: BubbleOptions { early_exit },
        }
    }

    /// Interval between ticks at normal speed for `id`.
    pub fn base_interval(&self, id: AlgorithmId) -> Option<Duration> {
        id.base_interval().map(|base| self.tick_override.unwrap_or(base))
    }
}
