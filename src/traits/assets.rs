use crate::error::AssetError;
use crate::material::TextureData;
use futures::future::BoxFuture;
use std::path::Path;

/// Pending texture decode
pub type TextureFuture = BoxFuture<'static, Result<TextureData, AssetError>>;

/// Source of scene assets
pub trait AssetLoader {
    /// Start loading a texture; the returned future resolves once decoded
    fn load_texture(&self, path: &Path) -> TextureFuture;
}
