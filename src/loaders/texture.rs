use futures::channel::oneshot;
use futures::future::{self, FutureExt};
use log::{debug, error};
use std::path::{Path, PathBuf};
use std::thread;

use crate::error::AssetError;
use crate::material::TextureData;
use crate::traits::{AssetLoader, TextureFuture};

/// Read and decode an image file into RGBA8 pixels
pub fn decode_texture(path: impl AsRef<Path>) -> Result<TextureData, AssetError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let image = image::load_from_memory(&bytes)
        .map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let (width, height) = image.dimensions();
    debug!("decoded {:?}: {}x{}", path, width, height);
    Ok(TextureData::new(width, height, image.into_raw()))
}

/// Loads assets from disk on a background thread
///
/// Relative paths resolve against `base_dir`.
#[derive(Debug, Clone)]
pub struct FileAssetLoader {
    base_dir: PathBuf,
}

impl FileAssetLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }
}

impl Default for FileAssetLoader {
    fn default() -> Self {
        Self::new(".")
    }
}

impl AssetLoader for FileAssetLoader {
    fn load_texture(&self, path: &Path) -> TextureFuture {
        let path = self.resolve(path);
        let (sender, receiver) = oneshot::channel();

        let worker_path = path.clone();
        let spawned = thread::Builder::new()
            .name("texture-loader".into())
            .spawn(move || {
                let result = decode_texture(&worker_path);
                if let Err(err) = &result {
                    error!("texture load failed: {err}");
                }
                // Receiver is gone if the requesting scene was disposed
                let _ = sender.send(result);
            });

        match spawned {
            Ok(_) => receiver
                .map(|received| received.unwrap_or(Err(AssetError::Canceled)))
                .boxed(),
            Err(source) => future::ready(Err(AssetError::Io { path, source })).boxed(),
        }
    }
}
