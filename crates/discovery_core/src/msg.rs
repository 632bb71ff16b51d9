use chrono::{DateTime, Local};

use crate::{DownloadFormat, EnrichmentField, PipelineId, QueryFailure, QueryId, Tab};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User switched to another tab.
    TabSelected(Tab),
    /// User edited the query input box.
    InputChanged(String),
    /// User picked another download format.
    DownloadFormatChanged(DownloadFormat),
    /// User submitted the current query input.
    QuerySubmitted,
    /// User clicked Clear on the query panel.
    InputCleared,
    /// Engine settled a dispatched query.
    QueryCompleted {
        query_id: QueryId,
        outcome: Result<String, QueryFailure>,
        completed_at: DateTime<Local>,
    },
    /// User clicked Clear History.
    HistoryCleared,
    /// User set or unset one of the enrichment fields.
    ///
    /// For select fields `value` is a catalog id; for the description it is
    /// the full text.
    EnrichmentFieldChanged {
        field: EnrichmentField,
        value: Option<String>,
    },
    /// User moved keyboard focus inside the enrichment panel.
    EnrichmentFocusChanged(EnrichmentField),
    /// User clicked Submit Enrichment Pipeline.
    PipelineSubmitted { submitted_at: DateTime<Local> },
    /// Engine ticker fired for a pipeline.
    PipelineTick { pipeline_id: PipelineId },
    /// UI tick; ages the transient notice.
    Tick,
    /// User asked to quit.
    ShutdownRequested,
    /// Fallback for unmapped input.
    NoOp,
}
