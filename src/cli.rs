// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::scenes::SceneKind;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "scene-switcher")]
#[command(about = "Switch between 3D scenes with fade transitions", long_about = None)]
pub struct Cli {
    /// JSON config file; defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Scene to start with
    #[arg(short, long, value_enum)]
    pub scene: Option<SceneKind>,

    /// Cycle to the next scene every N seconds
    #[arg(long = "auto-switch", value_name = "SECS")]
    pub auto_switch: Option<f32>,

    /// Texture image for the sphere scene
    #[arg(long)]
    pub texture: Option<PathBuf>,

    /// Initial window width
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height
    #[arg(long)]
    pub height: Option<u32>,
}
