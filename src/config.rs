use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::core::DEFAULT_FADE_DURATION;
use crate::scenes::SceneKind;

/// Tunables for the built-in scenes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Visible height of the cube scene's orthographic view, in world units
    pub frustum_size: f32,
    /// Cube translation speed, world units per second
    pub cube_move_speed: f32,
    /// Vertical field of view of the sphere scene, in degrees
    pub sphere_fov: f32,
    pub sphere_texture: PathBuf,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            frustum_size: 10.0,
            cube_move_speed: 5.0,
            sphere_fov: 75.0,
            sphere_texture: PathBuf::from("assets/wall.ppm"),
        }
    }
}

/// Application configuration, read from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Fixed update rate in Hz
    pub tick_rate: f32,
    /// Seconds for each of fade-out and fade-in
    pub fade_duration: f32,
    pub start_scene: SceneKind,
    /// Cycle scenes every N seconds when set
    pub auto_switch_secs: Option<f32>,
    pub scenes: SceneSettings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "scene-switcher".to_string(),
            width: 800,
            height: 600,
            tick_rate: 60.0,
            fade_duration: DEFAULT_FADE_DURATION,
            start_scene: SceneKind::Cube,
            auto_switch_secs: None,
            scenes: SceneSettings::default(),
        }
    }
}

impl GameConfig {
    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_json(&text).with_context(|| format!("Invalid config file: {:?}", path))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.tick_rate > 0.0, "tick_rate must be positive, got {}", self.tick_rate);
        ensure!(
            self.fade_duration >= 0.0,
            "fade_duration must not be negative, got {}",
            self.fade_duration
        );
        if let Some(secs) = self.auto_switch_secs {
            ensure!(secs > 0.0, "auto_switch_secs must be positive, got {secs}");
        }
        ensure!(
            self.scenes.frustum_size > 0.0,
            "frustum_size must be positive, got {}",
            self.scenes.frustum_size
        );
        Ok(())
    }

    /// Fixed update interval in seconds
    pub fn interval(&self) -> f32 {
        1.0 / self.tick_rate
    }

    /// Layer command-line overrides on top of the file values
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(scene) = cli.scene {
            self.start_scene = scene;
        }
        if let Some(secs) = cli.auto_switch {
            self.auto_switch_secs = Some(secs);
        }
        if let Some(texture) = &cli.texture {
            self.scenes.sphere_texture = texture.clone();
        }
        if let Some(width) = cli.width {
            self.width = width;
        }
        if let Some(height) = cli.height {
            self.height = height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.tick_rate, 60.0);
        assert_eq!(config.fade_duration, 0.6);
        assert_eq!(config.start_scene, SceneKind::Cube);
        assert!(config.auto_switch_secs.is_none());
        assert!((config.interval() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_rejects_zero_tick_rate() {
        assert!(GameConfig::from_json(r#"{ "tick_rate": 0 }"#).is_err());
    }
}
