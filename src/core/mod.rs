pub mod mapper;
pub mod orchestrator;
pub mod pacer;
pub mod reader;
pub mod sender;

pub use crate::domain::model::{BatchResponse, PersonPayload, RunStats, SourceRow};
pub use crate::domain::ports::{BatchTransport, Pacer};
pub use crate::utils::error::Result;
