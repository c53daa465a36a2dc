mod chat;
mod core;

pub use chat::chat;
pub use self::core::{CompletionResponse, UpstreamError, completion};
