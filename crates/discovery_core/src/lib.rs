//! Discovery core: pure dashboard state machine and view-model helpers.
mod catalog;
mod effect;
mod history;
mod msg;
mod pipeline;
mod reports;
mod state;
mod update;
mod view_model;

pub use catalog::{
    availability_for, name_of, options_for, relevancy_for, selection_key, Availability,
    AvailabilityLevel, CatalogEntry, SourcePipelineStatus, CAMPAIGNS, RELEVANCY_THRESHOLD,
    SCHEDULES, SOURCES, SOURCE_PIPELINE_STATUS, STATUSES,
};
pub use effect::Effect;
pub use history::{QueryResult, QueryStatus, ResponseHistory};
pub use msg::Msg;
pub use pipeline::{
    demo_jobs, PipelineBoard, PipelineJob, PipelineStatus, TickOutcome, PROGRESS_COMPLETE,
    PROGRESS_STEP,
};
pub use reports::{
    campaign_shares, CampaignShare, DataSourceStat, MetadataPresence, ACTIVE_CAMPAIGNS,
    DATA_SOURCES, METADATA_PRESENCE,
};
pub use state::{
    AppState, DownloadFormat, EnrichmentField, FailureClass, Notice, NoticeKind, PipelineId,
    QueryFailure, QueryId, Tab, DEFAULT_NOTICE_TICKS,
};
pub use update::update;
pub use view_model::{
    AppViewModel, AvailabilityView, EnrichmentView, ExplorationView, FieldView, HistoryRowView,
    HistoryView, PipelineListView, PipelineRowView, RelevancyView, ReportsView,
    HISTORY_PLACEHOLDER, PIPELINES_PLACEHOLDER,
};
