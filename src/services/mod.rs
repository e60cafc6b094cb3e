pub mod directory;

pub use directory::NamespaceDirectory;
