pub mod hdr_loader;

pub use hdr_loader::HdrTextureSource;
