//! API clients: thin pass-through layers over the transport adapter.

pub mod app;
pub mod bulk;
pub mod file;
pub mod record;
pub mod url;

// Re-export commonly used items
pub use app::AppClient;
pub use bulk::BulkRequestClient;
pub use file::{FileClient, UploadFileParams};
pub use record::RecordClient;
pub use url::{build_path, BuildPathParams};
