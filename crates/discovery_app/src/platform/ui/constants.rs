use ratatui::style::{Color, Modifier, Style};

pub const APP_TITLE: &str = "Marketing Data Discovery - Prototype";
pub const APP_SUBTITLE: &str =
    "An Agentic approach to discover contextual data for marketing initiatives.";

pub const QUERY_TITLE: &str = "Data Query";
pub const QUERY_PLACEHOLDER: &str = "Enter your query here...";
pub const ENRICHMENT_TITLE: &str = "Enrichment Configuration";
pub const AVAILABILITY_TITLE: &str = "Metadata Availability";
pub const RELEVANCY_TITLE: &str = "Contextual Relevancy";
pub const SOURCE_STATUS_TITLE: &str = "Pipeline Status by Source";
pub const PIPELINES_TITLE: &str = "Enrichment Pipelines";
pub const DATA_SOURCES_TITLE: &str = "Attributes by Data Source";
pub const CAMPAIGNS_TITLE: &str = "Active Campaigns";
pub const METADATA_TITLE: &str = "Metadata Presence by Campaign";

pub const HINT_EXPLORATION: &str =
    "Enter submit | Alt-Enter newline | Esc clear | Ctrl-D clear history | Ctrl-F format | Tab switch | Ctrl-C quit";
pub const HINT_ENRICHMENT: &str =
    "Up/Down field | Left/Right choose | Esc unset | Enter submit pipeline | Tab switch | q quit";
pub const HINT_REPORTS: &str = "Tab/F1-F3 switch | q quit";

/// Number of history rows whose response is shown expanded.
pub const HISTORY_PREVIEW_LINES: usize = 3;

pub const ACCENT: Color = Color::Cyan;
pub const MUTED: Color = Color::Gray;
pub const SUCCESS: Color = Color::Green;
pub const WARNING: Color = Color::Yellow;
pub const DANGER: Color = Color::Red;

pub fn title_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn muted_style() -> Style {
    Style::default().fg(MUTED)
}

pub fn focused_style() -> Style {
    Style::default().fg(WARNING).add_modifier(Modifier::BOLD)
}
