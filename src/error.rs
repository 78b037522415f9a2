use std::path::PathBuf;
use thiserror::Error;

/// Fatal startup failures - there is no degraded mode for these
#[derive(Debug, Error)]
pub enum GameError {
    #[error("couldn't find a surface to attach the renderer: {0}")]
    SurfaceUnavailable(String),
    #[error("no compatible graphics adapter: {0}")]
    GraphicsUnavailable(String),
    #[error("failed to create graphics device: {0}")]
    DeviceRequest(String),
    #[error("event loop failure: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

/// Texture loading failures
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("texture load was canceled before it completed")]
    Canceled,
}

/// Recoverable scene initialization failure
///
/// The scene stays partially populated; update and render become no-ops.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Render failure; per-frame errors are logged and the frame skipped
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("surface unavailable: {0}")]
    Surface(#[from] wgpu::SurfaceError),
    #[error("{width}x{height} texture exceeds the device limit of {max}")]
    TextureTooLarge { width: u32, height: u32, max: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_mentions_path() {
        let err = AssetError::Io {
            path: PathBuf::from("assets/missing.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let message = err.to_string();
        assert!(message.contains("assets/missing.png"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn test_texture_too_large_reports_sizes() {
        let err: SceneError = RenderError::TextureTooLarge {
            width: 10_000,
            height: 512,
            max: 8192,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "10000x512 texture exceeds the device limit of 8192"
        );
    }

    #[test]
    fn test_scene_error_is_transparent() {
        let err: SceneError = AssetError::Canceled.into();
        assert_eq!(err.to_string(), AssetError::Canceled.to_string());
    }
}
