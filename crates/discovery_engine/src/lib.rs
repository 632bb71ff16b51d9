//! Discovery engine: HTTP query dispatch and pipeline tickers behind a command channel.
mod dispatch;
mod engine;
mod sink;
mod ticker;
mod types;

pub use dispatch::{DispatchSettings, QueryDispatcher, ReqwestDispatcher};
pub use engine::{EngineHandle, EngineSettings};
pub use sink::{ChannelEventSink, EventSink};
pub use ticker::TickerRegistry;
pub use types::{
    DispatchError, EngineError, EngineEvent, FailureKind, PipelineId, QueryId, TIMEOUT_MESSAGE,
};
