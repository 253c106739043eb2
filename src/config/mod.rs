mod filesystem;
mod loader;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigFormat, ConfigLoader, FileConfigLoader};
