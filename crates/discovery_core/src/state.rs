use std::collections::BTreeMap;

use chrono::{DateTime, Local};

use crate::catalog::{name_of, options_for, CAMPAIGNS, SOURCES};
use crate::pipeline::{PipelineBoard, TickOutcome};
use crate::view_model::{self, AppViewModel};
use crate::{QueryResult, QueryStatus, ResponseHistory};

pub type QueryId = u64;
pub type PipelineId = u64;

/// UI ticks a notice stays visible unless configured otherwise.
pub const DEFAULT_NOTICE_TICKS: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Exploration,
    Enrichment,
    Reports,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Exploration, Tab::Enrichment, Tab::Reports];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Exploration => "Data Exploration",
            Tab::Enrichment => "Enrichment",
            Tab::Reports => "Reports",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Exploration => 0,
            Tab::Enrichment => 1,
            Tab::Reports => 2,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DownloadFormat {
    #[default]
    Csv,
    Json,
    Excel,
}

impl DownloadFormat {
    pub fn label(self) -> &'static str {
        match self {
            DownloadFormat::Csv => "CSV",
            DownloadFormat::Json => "JSON",
            DownloadFormat::Excel => "Excel",
        }
    }

    pub fn next(self) -> DownloadFormat {
        match self {
            DownloadFormat::Csv => DownloadFormat::Json,
            DownloadFormat::Json => DownloadFormat::Excel,
            DownloadFormat::Excel => DownloadFormat::Csv,
        }
    }
}

/// Coarse failure taxonomy surfaced by the dispatch boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    Timeout,
    NetworkOrServer,
    Unknown,
}

impl FailureClass {
    /// Title of the error notice raised for this class of failure.
    pub fn notice_title(self) -> &'static str {
        match self {
            FailureClass::Timeout => "Request Timeout",
            FailureClass::NetworkOrServer => "Request Failed",
            FailureClass::Unknown => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFailure {
    pub class: FailureClass,
    /// User-facing text stored as the history row's response.
    pub message: String,
}

impl QueryFailure {
    pub fn new(class: FailureClass, message: impl Into<String>) -> Self {
        Self {
            class,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Transient notification; disappears after `ticks_remaining` UI ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
    pub ticks_remaining: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnrichmentField {
    #[default]
    Campaign,
    Source,
    Status,
    ConfigSource,
    ConfigCampaign,
    Schedule,
    Description,
}

impl EnrichmentField {
    pub const ALL: [EnrichmentField; 7] = [
        EnrichmentField::Campaign,
        EnrichmentField::Source,
        EnrichmentField::Status,
        EnrichmentField::ConfigSource,
        EnrichmentField::ConfigCampaign,
        EnrichmentField::Schedule,
        EnrichmentField::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EnrichmentField::Campaign => "Campaign",
            EnrichmentField::Source => "Source",
            EnrichmentField::Status => "Status",
            EnrichmentField::ConfigSource => "Config Source",
            EnrichmentField::ConfigCampaign => "Config Campaign",
            EnrichmentField::Schedule => "Schedule",
            EnrichmentField::Description => "Campaign Description",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            EnrichmentField::Campaign | EnrichmentField::ConfigCampaign => "Select a campaign",
            EnrichmentField::Source | EnrichmentField::ConfigSource => "Select a source",
            EnrichmentField::Status => "Select status",
            EnrichmentField::Schedule => "Select schedule",
            EnrichmentField::Description => "Describe the campaign...",
        }
    }

    pub fn is_text(self) -> bool {
        self == EnrichmentField::Description
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> EnrichmentField {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> EnrichmentField {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct ExplorationState {
    pub(crate) input: String,
    pub(crate) download_format: DownloadFormat,
    pub(crate) pending: BTreeMap<QueryId, String>,
    pub(crate) history: ResponseHistory,
    pub(crate) next_query_id: QueryId,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct EnrichmentState {
    pub(crate) campaign: Option<String>,
    pub(crate) source: Option<String>,
    pub(crate) status: Option<String>,
    pub(crate) config_source: Option<String>,
    pub(crate) config_campaign: Option<String>,
    pub(crate) schedule: Option<String>,
    pub(crate) description: String,
    pub(crate) focus: EnrichmentField,
    pub(crate) pipelines: PipelineBoard,
}

impl EnrichmentState {
    pub(crate) fn select_value(&self, field: EnrichmentField) -> Option<&str> {
        match field {
            EnrichmentField::Campaign => self.campaign.as_deref(),
            EnrichmentField::Source => self.source.as_deref(),
            EnrichmentField::Status => self.status.as_deref(),
            EnrichmentField::ConfigSource => self.config_source.as_deref(),
            EnrichmentField::ConfigCampaign => self.config_campaign.as_deref(),
            EnrichmentField::Schedule => self.schedule.as_deref(),
            EnrichmentField::Description => None,
        }
    }

    fn select_slot(&mut self, field: EnrichmentField) -> Option<&mut Option<String>> {
        match field {
            EnrichmentField::Campaign => Some(&mut self.campaign),
            EnrichmentField::Source => Some(&mut self.source),
            EnrichmentField::Status => Some(&mut self.status),
            EnrichmentField::ConfigSource => Some(&mut self.config_source),
            EnrichmentField::ConfigCampaign => Some(&mut self.config_campaign),
            EnrichmentField::Schedule => Some(&mut self.schedule),
            EnrichmentField::Description => None,
        }
    }

    pub(crate) fn can_submit_pipeline(&self) -> bool {
        self.campaign.is_some() && self.source.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub(crate) active_tab: Tab,
    pub(crate) exploration: ExplorationState,
    pub(crate) enrichment: EnrichmentState,
    pub(crate) notice: Option<Notice>,
    notice_ticks: u32,
    quitting: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            active_tab: Tab::default(),
            exploration: ExplorationState {
                next_query_id: 1,
                ..ExplorationState::default()
            },
            enrichment: EnrichmentState::default(),
            notice: None,
            notice_ticks: DEFAULT_NOTICE_TICKS,
            quitting: false,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State as the interactive dashboard starts: demo pipelines pre-seeded.
    pub fn with_demo_pipelines() -> Self {
        let mut state = Self::new();
        state.enrichment.pipelines = PipelineBoard::with_demo_jobs();
        state
    }

    /// Overrides how many UI ticks a notice stays visible.
    pub fn with_notice_ticks(mut self, ticks: u32) -> Self {
        self.notice_ticks = ticks;
        self
    }

    pub fn view(&self) -> AppViewModel {
        view_model::build(self)
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn history(&self) -> &ResponseHistory {
        &self.exploration.history
    }

    pub fn pipelines(&self) -> &PipelineBoard {
        &self.enrichment.pipelines
    }

    pub fn input(&self) -> &str {
        &self.exploration.input
    }

    pub fn is_loading(&self) -> bool {
        !self.exploration.pending.is_empty()
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            self.active_tab = tab;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.exploration.input != text {
            self.exploration.input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_download_format(&mut self, format: DownloadFormat) {
        if self.exploration.download_format != format {
            self.exploration.download_format = format;
            self.mark_dirty();
        }
    }

    /// Records `query` as in flight and returns its freshly allocated id.
    pub(crate) fn begin_query(&mut self, query: String) -> QueryId {
        let query_id = self.exploration.next_query_id;
        self.exploration.next_query_id += 1;
        self.exploration.pending.insert(query_id, query);
        self.mark_dirty();
        query_id
    }

    /// Turns a settled dispatch into a history row. Unknown ids are ignored.
    pub(crate) fn complete_query(
        &mut self,
        query_id: QueryId,
        outcome: Result<String, QueryFailure>,
        completed_at: DateTime<Local>,
    ) -> bool {
        let Some(query) = self.exploration.pending.remove(&query_id) else {
            return false;
        };

        let (status, response) = match outcome {
            Ok(text) => {
                self.exploration.input.clear();
                self.show_notice(
                    "Query Submitted",
                    "Your query has been processed successfully.",
                    NoticeKind::Info,
                );
                (QueryStatus::Success, text)
            }
            Err(failure) => {
                self.show_notice(
                    failure.class.notice_title(),
                    failure.message.clone(),
                    NoticeKind::Error,
                );
                (QueryStatus::Error, failure.message)
            }
        };

        self.exploration.history.append(QueryResult {
            id: query_id,
            query,
            response,
            timestamp: completed_at,
            status,
        });
        self.mark_dirty();
        true
    }

    pub(crate) fn clear_history(&mut self) {
        self.exploration.history.clear();
        self.show_notice(
            "History Cleared",
            "All query responses have been cleared.",
            NoticeKind::Info,
        );
        self.mark_dirty();
    }

    /// Applies an enrichment field edit; select values outside the catalog are rejected.
    pub(crate) fn set_enrichment_field(&mut self, field: EnrichmentField, value: Option<String>) {
        if field.is_text() {
            let text = value.unwrap_or_default();
            if self.enrichment.description != text {
                self.enrichment.description = text;
                self.mark_dirty();
            }
            return;
        }

        if let Some(id) = value.as_deref() {
            if name_of(options_for(field), id).is_none() {
                return;
            }
        }
        let Some(slot) = self.enrichment.select_slot(field) else {
            return;
        };
        if *slot != value {
            *slot = value;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_enrichment_focus(&mut self, field: EnrichmentField) {
        if self.enrichment.focus != field {
            self.enrichment.focus = field;
            self.mark_dirty();
        }
    }

    /// Creates a pipeline job from the current selection, if complete.
    pub(crate) fn submit_pipeline(&mut self, submitted_at: DateTime<Local>) -> Option<PipelineId> {
        let campaign = self.enrichment.campaign.as_deref()?;
        let source = self.enrichment.source.as_deref()?;

        let campaign_name = name_of(CAMPAIGNS, campaign).unwrap_or(campaign).to_string();
        let source_name = name_of(SOURCES, source).unwrap_or(source).to_string();
        let stamp = submitted_at.format("%Y-%m-%d %H:%M").to_string();

        let id = self
            .enrichment
            .pipelines
            .submit(campaign_name, source_name, stamp);
        self.mark_dirty();
        Some(id)
    }

    pub(crate) fn advance_pipeline(&mut self, pipeline_id: PipelineId) -> TickOutcome {
        let outcome = self.enrichment.pipelines.advance(pipeline_id);
        if outcome != TickOutcome::Ignored {
            self.mark_dirty();
        }
        outcome
    }

    fn show_notice(&mut self, title: &str, description: impl Into<String>, kind: NoticeKind) {
        self.notice = Some(Notice {
            title: title.to_string(),
            description: description.into(),
            kind,
            ticks_remaining: self.notice_ticks,
        });
    }

    /// Ages the current notice by one tick, dropping it when it runs out.
    pub(crate) fn tick_notice(&mut self) {
        let Some(notice) = self.notice.as_mut() else {
            return;
        };
        notice.ticks_remaining = notice.ticks_remaining.saturating_sub(1);
        if notice.ticks_remaining == 0 {
            self.notice = None;
            self.mark_dirty();
        }
    }

    /// Returns false when a quit was already under way.
    pub(crate) fn begin_quit(&mut self) -> bool {
        if self.quitting {
            return false;
        }
        self.quitting = true;
        self.mark_dirty();
        true
    }
}
