mod cube;
mod sphere;

pub use cube::CubeScene;
pub use sphere::SphereScene;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::config::SceneSettings;
use crate::traits::Scene;

/// The built-in scenes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    #[default]
    Cube,
    Sphere,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown scene '{0}', expected one of: cube, sphere")]
pub struct UnknownScene(String);

impl SceneKind {
    pub const ALL: [SceneKind; 2] = [SceneKind::Cube, SceneKind::Sphere];

    /// Construct a fresh, inert scene of this kind
    pub fn build(self, settings: &SceneSettings) -> Box<dyn Scene> {
        match self {
            Self::Cube => Box::new(CubeScene::new(settings)),
            Self::Sphere => Box::new(SphereScene::new(settings)),
        }
    }

    /// Next scene in cycle order
    pub fn next(self) -> Self {
        match self {
            Self::Cube => Self::Sphere,
            Self::Sphere => Self::Cube,
        }
    }

    /// Digit key that selects this scene
    pub fn from_shortcut(key: &str) -> Option<Self> {
        match key {
            "1" => Some(Self::Cube),
            "2" => Some(Self::Sphere),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Sphere => "sphere",
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneKind {
    type Err = UnknownScene;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownScene(s.to_string()))
    }
}
