pub mod texture;

pub use texture::{decode_texture, FileAssetLoader};
