pub mod source;
pub mod loader;
