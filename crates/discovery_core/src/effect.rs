use crate::{PipelineId, QueryId};

/// Side effects requested by [`crate::update`]; executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send `query` to the remote endpoint and report back with `query_id`.
    DispatchQuery { query_id: QueryId, query: String },
    /// Start the recurring progress tick for a freshly submitted pipeline.
    StartPipelineTicker { pipeline_id: PipelineId },
    /// Dispose the tick handle of a pipeline that no longer needs it.
    StopPipelineTicker { pipeline_id: PipelineId },
    /// Dispose every remaining tick handle (view teardown).
    StopAllTickers,
    /// Leave the run loop.
    Quit,
}
