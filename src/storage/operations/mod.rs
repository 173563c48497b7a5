// Storage operation traits and implementations
pub mod download;
pub mod list;
pub mod read;
pub mod upload;
pub mod write;

// Re-export all operation traits
pub use download::Downloader;
pub use list::Lister;
pub use read::TableReader;
pub use upload::Uploader;
pub use write::TableWriter;
