// Adapters layer: concrete implementations of the domain ports.

pub mod fs;

pub use fs::LocalDirectory;
