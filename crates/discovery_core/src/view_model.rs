use crate::catalog::{
    availability_for, name_of, options_for, relevancy_for, selection_key, AvailabilityLevel,
    SourcePipelineStatus, CAMPAIGNS, RELEVANCY_THRESHOLD, SOURCES, SOURCE_PIPELINE_STATUS,
};
use crate::reports::{
    campaign_shares, CampaignShare, DataSourceStat, MetadataPresence, ACTIVE_CAMPAIGNS,
    DATA_SOURCES, METADATA_PRESENCE,
};
use crate::state::EnrichmentState;
use crate::{
    AppState, DownloadFormat, EnrichmentField, Notice, PipelineId, PipelineStatus, QueryId,
    QueryResult, QueryStatus, ResponseHistory, Tab,
};

pub const HISTORY_PLACEHOLDER: &str = "Submit a query to see responses...";
pub const PIPELINES_PLACEHOLDER: &str = "No pipelines submitted yet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub active_tab: Tab,
    pub exploration: ExplorationView,
    pub enrichment: EnrichmentView,
    pub reports: ReportsView,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorationView {
    pub input: String,
    pub download_format: DownloadFormat,
    pub loading: bool,
    pub pending_queries: usize,
    /// Mirrors the Submit button: enabled for non-blank input while idle.
    pub can_submit: bool,
    pub history: HistoryView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryView {
    Placeholder(&'static str),
    Table {
        title: String,
        rows: Vec<HistoryRowView>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRowView {
    pub id: QueryId,
    pub timestamp: String,
    pub status: QueryStatus,
    pub query: String,
    pub response: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: EnrichmentField,
    pub label: &'static str,
    /// Catalog id for select fields, the text for the description.
    pub value: Option<String>,
    /// What the control shows: option name, text, or placeholder.
    pub display: String,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityView {
    pub source_percent: u8,
    pub source_level: AvailabilityLevel,
    pub source_caption: String,
    pub campaign_percent: u8,
    pub campaign_level: AvailabilityLevel,
    pub campaign_caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevancyView {
    pub score: u8,
    pub threshold: u8,
    pub above_threshold: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRowView {
    pub id: PipelineId,
    pub campaign_name: String,
    pub source_name: String,
    pub status: PipelineStatus,
    pub progress: u8,
    pub submitted_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineListView {
    Placeholder(&'static str),
    Rows(Vec<PipelineRowView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentView {
    pub fields: Vec<FieldView>,
    pub focus: EnrichmentField,
    pub availability: AvailabilityView,
    pub relevancy: RelevancyView,
    pub can_submit_pipeline: bool,
    pub source_status: &'static [SourcePipelineStatus],
    pub pipelines: PipelineListView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportsView {
    pub data_sources: &'static [DataSourceStat],
    pub campaign_shares: Vec<CampaignShare>,
    pub metadata_presence: &'static [MetadataPresence],
}

pub(crate) fn build(state: &AppState) -> AppViewModel {
    AppViewModel {
        active_tab: state.active_tab,
        exploration: build_exploration(state),
        enrichment: build_enrichment(&state.enrichment),
        reports: build_reports(),
        notice: state.notice.clone(),
    }
}

fn build_exploration(state: &AppState) -> ExplorationView {
    let exploration = &state.exploration;
    let loading = !exploration.pending.is_empty();
    ExplorationView {
        input: exploration.input.clone(),
        download_format: exploration.download_format,
        loading,
        pending_queries: exploration.pending.len(),
        can_submit: !loading && !exploration.input.trim().is_empty(),
        history: build_history(&exploration.history),
    }
}

fn build_history(history: &ResponseHistory) -> HistoryView {
    if history.is_empty() {
        return HistoryView::Placeholder(HISTORY_PLACEHOLDER);
    }
    HistoryView::Table {
        title: format!("Response History ({})", history.len()),
        rows: history.iter().map(history_row).collect(),
    }
}

fn history_row(result: &QueryResult) -> HistoryRowView {
    HistoryRowView {
        id: result.id,
        timestamp: result
            .timestamp
            .format("%-m/%-d/%y, %-I:%M:%S %p")
            .to_string(),
        status: result.status,
        query: result.query.clone(),
        response: result.response.clone(),
    }
}

fn build_enrichment(enrichment: &EnrichmentState) -> EnrichmentView {
    let fields = EnrichmentField::ALL
        .iter()
        .map(|&field| field_view(enrichment, field))
        .collect();

    let key = selection_key(enrichment.campaign.as_deref(), enrichment.source.as_deref());
    let availability = availability_for(&key);
    let score = relevancy_for(&key);

    let source_caption = enrichment
        .source
        .as_deref()
        .and_then(|id| name_of(SOURCES, id))
        .unwrap_or("Select a source")
        .to_string();
    let campaign_caption = enrichment
        .campaign
        .as_deref()
        .and_then(|id| name_of(CAMPAIGNS, id))
        .unwrap_or("Select a campaign")
        .to_string();

    let jobs = enrichment.pipelines.jobs();
    let pipelines = if jobs.is_empty() {
        PipelineListView::Placeholder(PIPELINES_PLACEHOLDER)
    } else {
        PipelineListView::Rows(
            jobs.iter()
                .map(|job| PipelineRowView {
                    id: job.id,
                    campaign_name: job.campaign_name.clone(),
                    source_name: job.source_name.clone(),
                    status: job.status,
                    progress: job.progress,
                    submitted_at: job.submitted_at.clone(),
                })
                .collect(),
        )
    };

    EnrichmentView {
        fields,
        focus: enrichment.focus,
        availability: AvailabilityView {
            source_percent: availability.source,
            source_level: AvailabilityLevel::from_percent(availability.source),
            source_caption,
            campaign_percent: availability.campaign,
            campaign_level: AvailabilityLevel::from_percent(availability.campaign),
            campaign_caption,
        },
        relevancy: RelevancyView {
            score,
            threshold: RELEVANCY_THRESHOLD,
            above_threshold: score >= RELEVANCY_THRESHOLD,
        },
        can_submit_pipeline: enrichment.can_submit_pipeline(),
        source_status: SOURCE_PIPELINE_STATUS,
        pipelines,
    }
}

fn field_view(enrichment: &EnrichmentState, field: EnrichmentField) -> FieldView {
    let (value, display) = if field.is_text() {
        let text = enrichment.description.clone();
        let display = if text.is_empty() {
            field.placeholder().to_string()
        } else {
            text.clone()
        };
        ((!text.is_empty()).then_some(text), display)
    } else {
        let value = enrichment.select_value(field).map(str::to_string);
        let display = value
            .as_deref()
            .and_then(|id| name_of(options_for(field), id))
            .unwrap_or(field.placeholder())
            .to_string();
        (value, display)
    };

    FieldView {
        field,
        label: field.label(),
        value,
        display,
        focused: enrichment.focus == field,
    }
}

fn build_reports() -> ReportsView {
    ReportsView {
        data_sources: DATA_SOURCES,
        campaign_shares: campaign_shares(ACTIVE_CAMPAIGNS),
        metadata_presence: METADATA_PRESENCE,
    }
}

impl AppViewModel {
    pub fn field(&self, field: EnrichmentField) -> Option<&FieldView> {
        self.enrichment.fields.iter().find(|f| f.field == field)
    }

    pub fn history_len(&self) -> usize {
        match &self.exploration.history {
            HistoryView::Placeholder(_) => 0,
            HistoryView::Table { rows, .. } => rows.len(),
        }
    }
}
