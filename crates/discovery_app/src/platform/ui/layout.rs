use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level screen regions.
pub struct Screen {
    pub header: Rect,
    pub tabs: Rect,
    pub body: Rect,
    pub notice: Rect,
    pub hints: Rect,
}

pub fn screen(area: Rect, has_notice: bool) -> Screen {
    let notice_height = if has_notice { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(notice_height),
            Constraint::Length(1),
        ])
        .split(area);
    Screen {
        header: chunks[0],
        tabs: chunks[1],
        body: chunks[2],
        notice: chunks[3],
        hints: chunks[4],
    }
}

pub struct ExplorationAreas {
    pub query: Rect,
    pub history: Rect,
}

pub fn exploration(body: Rect, input_lines: u16) -> ExplorationAreas {
    // Borders plus one status line under the text.
    let query_height = input_lines.clamp(1, 6) + 3;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(query_height), Constraint::Min(0)])
        .split(body);
    ExplorationAreas {
        query: chunks[0],
        history: chunks[1],
    }
}

pub struct EnrichmentAreas {
    pub form: Rect,
    pub availability: Rect,
    pub relevancy: Rect,
    pub source_status: Rect,
    pub pipelines: Rect,
}

pub fn enrichment(body: Rect) -> EnrichmentAreas {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(body);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(columns[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(columns[1]);
    EnrichmentAreas {
        form: left[0],
        pipelines: left[1],
        availability: right[0],
        relevancy: right[1],
        source_status: right[2],
    }
}

pub struct ReportsAreas {
    pub data_sources: Rect,
    pub campaigns: Rect,
    pub metadata: Rect,
}

pub fn reports(body: Rect) -> ReportsAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[0]);
    ReportsAreas {
        data_sources: top[0],
        campaigns: top[1],
        metadata: rows[1],
    }
}
