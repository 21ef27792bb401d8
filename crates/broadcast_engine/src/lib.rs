//! Broadcast engine: listing fetch and effect execution.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::{decode_body, DecodeError, DecodedBody};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_ENDPOINT, DEFAULT_MAX_ENTRIES};
pub use types::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput};
