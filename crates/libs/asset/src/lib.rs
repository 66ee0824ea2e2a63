pub mod binary;
pub mod error;
pub mod loadable;
pub mod text;
pub mod yaml;

pub use binary::BinaryAsset;
pub use error::LoadError;
pub use loadable::{check_extension, load_new, FileLoadable};
pub use text::TextAsset;
pub use yaml::YamlAsset;
