pub mod error;
pub mod models;
pub mod sync;
pub mod traits;

pub use error::{CloneError, ListError, Result};
pub use models::*;
pub use sync::{CloneTarget, SyncConfig, SyncEvent, SyncReport, Synchronizer};
pub use traits::{CloneTool, RepositoryLister};
