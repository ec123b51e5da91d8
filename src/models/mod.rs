pub mod order;
pub mod parsed;
pub mod texture;

pub use order::{CleanedOrder, InputOrder, MergeKey};
pub use parsed::{ParsedProductId, ProductAttributes};
pub use texture::Texture;
