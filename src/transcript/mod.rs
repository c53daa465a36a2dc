mod store;
mod turn;

pub use store::{StorageError, TranscriptStore};
pub use turn::{Role, Turn};
