use discovery_core::{
    AppViewModel, AvailabilityLevel, EnrichmentView, ExplorationView, HistoryRowView, HistoryView,
    Notice, NoticeKind, PipelineListView, PipelineStatus, QueryStatus, ReportsView, Tab,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Cell, Gauge, Paragraph, Row, Table, Tabs, Wrap,
    },
    Frame,
};

use super::constants::*;
use super::layout;

pub fn render(f: &mut Frame, view: &AppViewModel) {
    let screen = layout::screen(f.area(), view.notice.is_some());

    draw_header(f, screen.header);
    draw_tabs(f, screen.tabs, view.active_tab);
    match view.active_tab {
        Tab::Exploration => draw_exploration(f, screen.body, &view.exploration),
        Tab::Enrichment => draw_enrichment(f, screen.body, &view.enrichment),
        Tab::Reports => draw_reports(f, screen.body, &view.reports),
    }
    if let Some(notice) = &view.notice {
        draw_notice(f, screen.notice, notice);
    }

    let hints = match view.active_tab {
        Tab::Exploration => HINT_EXPLORATION,
        Tab::Enrichment => HINT_ENRICHMENT,
        Tab::Reports => HINT_REPORTS,
    };
    f.render_widget(Paragraph::new(hints).style(muted_style()), screen.hints);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from(Span::styled(APP_TITLE, title_style())),
        Line::from(Span::styled(APP_SUBTITLE, muted_style())),
    ]);
    f.render_widget(Paragraph::new(text), area);
}

fn draw_tabs(f: &mut Frame, area: Rect, active: Tab) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("F{} {}", i + 1, tab.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(active.index())
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(focused_style());
    f.render_widget(tabs, area);
}

fn draw_notice(f: &mut Frame, area: Rect, notice: &Notice) {
    let color = match notice.kind {
        NoticeKind::Info => SUCCESS,
        NoticeKind::Error => DANGER,
    };
    let paragraph = Paragraph::new(notice.description.as_str())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(Span::styled(
                    notice.title.as_str(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
        );
    f.render_widget(paragraph, area);
}

fn draw_exploration(f: &mut Frame, area: Rect, view: &ExplorationView) {
    let input_lines = view.input.split('\n').count() as u16;
    let areas = layout::exploration(area, input_lines);

    let mut lines: Vec<Line> = if view.input.is_empty() {
        vec![Line::from(Span::styled(QUERY_PLACEHOLDER, muted_style()))]
    } else {
        view.input.split('\n').map(|l| Line::from(l.to_string())).collect()
    };
    let status = if view.loading {
        Span::styled(
            format!("Submitting... ({} pending)", view.pending_queries),
            Style::default().fg(WARNING),
        )
    } else if view.can_submit {
        Span::styled("Ready", Style::default().fg(SUCCESS))
    } else {
        Span::styled("Type a query", muted_style())
    };
    lines.push(Line::from(vec![
        status,
        Span::styled(
            format!("  |  Download format: {}", view.download_format.label()),
            muted_style(),
        ),
    ]));

    let query = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(QUERY_TITLE)
            .border_style(Style::default().fg(ACCENT)),
    );
    f.render_widget(query, areas.query);

    match &view.history {
        HistoryView::Placeholder(text) => {
            let placeholder = Paragraph::new(*text)
                .style(muted_style())
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Response History"));
            f.render_widget(placeholder, areas.history);
        }
        HistoryView::Table { title, rows } => {
            let table = Table::new(
                rows.iter().map(history_row),
                [
                    Constraint::Length(22),
                    Constraint::Length(8),
                    Constraint::Percentage(30),
                    Constraint::Min(20),
                ],
            )
            .header(
                Row::new(["Timestamp", "Status", "Query", "Response"])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(Block::default().borders(Borders::ALL).title(title.as_str()));
            f.render_widget(table, areas.history);
        }
    }
}

fn history_row(row: &HistoryRowView) -> Row<'static> {
    let status_color = match row.status {
        QueryStatus::Success => SUCCESS,
        QueryStatus::Error => DANGER,
    };
    let height = row
        .response
        .lines()
        .count()
        .max(row.query.lines().count())
        .clamp(1, HISTORY_PREVIEW_LINES) as u16;
    Row::new(vec![
        Cell::from(row.timestamp.clone()).style(muted_style()),
        Cell::from(row.status.label()).style(Style::default().fg(status_color)),
        Cell::from(Text::from(row.query.clone())),
        Cell::from(Text::from(row.response.clone())),
    ])
    .height(height)
}

fn draw_enrichment(f: &mut Frame, area: Rect, view: &EnrichmentView) {
    let areas = layout::enrichment(area);

    let form: Vec<Line> = view
        .fields
        .iter()
        .map(|field| {
            let marker = if field.focused { "> " } else { "  " };
            let label_style = if field.focused {
                focused_style()
            } else {
                Style::default()
            };
            let value_style = if field.value.is_some() {
                Style::default()
            } else {
                muted_style()
            };
            Line::from(vec![
                Span::styled(format!("{marker}{:<22}", field.label), label_style),
                Span::styled(field.display.clone(), value_style),
            ])
        })
        .collect();
    let submit_hint = if view.can_submit_pipeline {
        Span::styled(" Enter: submit pipeline ", Style::default().fg(SUCCESS))
    } else {
        Span::styled(" select campaign and source ", muted_style())
    };
    f.render_widget(
        Paragraph::new(form).block(
            Block::default()
                .borders(Borders::ALL)
                .title(ENRICHMENT_TITLE)
                .title_bottom(submit_hint),
        ),
        areas.form,
    );

    draw_availability(f, areas.availability, view);

    let relevancy = &view.relevancy;
    let relevancy_color = if relevancy.above_threshold {
        SUCCESS
    } else {
        WARNING
    };
    f.render_widget(
        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(RELEVANCY_TITLE))
            .gauge_style(Style::default().fg(relevancy_color))
            .percent(u16::from(relevancy.score.min(100)))
            .label(format!(
                "{}% (threshold {}%)",
                relevancy.score, relevancy.threshold
            )),
        areas.relevancy,
    );

    let status_rows = view.source_status.iter().map(|s| {
        Row::new(vec![
            Cell::from(s.source),
            Cell::from(s.complete.to_string()).style(Style::default().fg(SUCCESS)),
            Cell::from(s.in_progress.to_string()).style(Style::default().fg(ACCENT)),
            Cell::from(s.queued.to_string()),
            Cell::from(s.in_review.to_string()).style(Style::default().fg(WARNING)),
            Cell::from(s.failed.to_string()).style(Style::default().fg(DANGER)),
        ])
    });
    f.render_widget(
        Table::new(
            status_rows,
            [
                Constraint::Min(16),
                Constraint::Length(9),
                Constraint::Length(12),
                Constraint::Length(7),
                Constraint::Length(10),
                Constraint::Length(7),
            ],
        )
        .header(
            Row::new(["Source", "Complete", "In Progress", "Queued", "In Review", "Failed"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(SOURCE_STATUS_TITLE)),
        areas.source_status,
    );

    draw_pipelines(f, areas.pipelines, &view.pipelines);
}

fn draw_availability(f: &mut Frame, area: Rect, view: &EnrichmentView) {
    let block = Block::default().borders(Borders::ALL).title(AVAILABILITY_TITLE);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(inner);

    let availability = &view.availability;
    let gauges = [
        (
            "Source",
            &availability.source_caption,
            availability.source_percent,
            availability.source_level,
        ),
        (
            "Campaign",
            &availability.campaign_caption,
            availability.campaign_percent,
            availability.campaign_level,
        ),
    ];
    for ((kind, caption, percent, level), row) in gauges.into_iter().zip(rows.iter()) {
        let gauge = Gauge::default()
            .block(Block::default().title(format!("{kind}: {caption}")))
            .gauge_style(Style::default().fg(level_color(level)))
            .percent(u16::from(percent.min(100)))
            .label(format!("{percent}% ({})", level_label(level)));
        f.render_widget(gauge, *row);
    }
}

fn level_color(level: AvailabilityLevel) -> Color {
    match level {
        AvailabilityLevel::High => SUCCESS,
        AvailabilityLevel::Medium => WARNING,
        AvailabilityLevel::Low => DANGER,
    }
}

fn level_label(level: AvailabilityLevel) -> &'static str {
    match level {
        AvailabilityLevel::High => "High",
        AvailabilityLevel::Medium => "Medium",
        AvailabilityLevel::Low => "Low",
    }
}

fn draw_pipelines(f: &mut Frame, area: Rect, pipelines: &PipelineListView) {
    let block = Block::default().borders(Borders::ALL).title(PIPELINES_TITLE);
    match pipelines {
        PipelineListView::Placeholder(text) => {
            f.render_widget(
                Paragraph::new(*text)
                    .style(muted_style())
                    .alignment(Alignment::Center)
                    .block(block),
                area,
            );
        }
        PipelineListView::Rows(rows) => {
            let rows = rows.iter().map(|job| {
                let status_color = match job.status {
                    PipelineStatus::Complete => SUCCESS,
                    PipelineStatus::InProgress => ACCENT,
                };
                Row::new(vec![
                    Cell::from(job.campaign_name.clone()),
                    Cell::from(job.source_name.clone()),
                    Cell::from(job.status.label()).style(Style::default().fg(status_color)),
                    Cell::from(progress_bar(job.progress)),
                    Cell::from(job.submitted_at.clone()).style(muted_style()),
                ])
            });
            let table = Table::new(
                rows,
                [
                    Constraint::Min(14),
                    Constraint::Min(14),
                    Constraint::Length(11),
                    Constraint::Length(15),
                    Constraint::Length(16),
                ],
            )
            .header(
                Row::new(["Campaign", "Source", "Status", "Progress", "Submitted"])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(block);
            f.render_widget(table, area);
        }
    }
}

/// Ten-cell text bar followed by the percentage.
fn progress_bar(progress: u8) -> String {
    let filled = usize::from(progress.min(100)) / 10;
    format!("{}{} {:>3}%", "#".repeat(filled), ".".repeat(10 - filled), progress)
}

fn draw_reports(f: &mut Frame, area: Rect, view: &ReportsView) {
    let areas = layout::reports(area);

    let source_bars: Vec<Bar> = view
        .data_sources
        .iter()
        .map(|source| {
            Bar::default()
                .value(u64::from(source.attributes))
                .label(Line::from(source.name))
                .style(Style::default().fg(ACCENT))
        })
        .collect();
    f.render_widget(
        BarChart::default()
            .block(Block::default().borders(Borders::ALL).title(DATA_SOURCES_TITLE))
            .data(BarGroup::default().bars(&source_bars))
            .bar_width(9)
            .bar_gap(2),
        areas.data_sources,
    );

    let campaign_rows = view.campaign_shares.iter().map(|share| {
        Row::new(vec![
            Cell::from(share.name),
            Cell::from(share.value.to_string()),
            Cell::from(progress_bar(share.percent)),
        ])
    });
    f.render_widget(
        Table::new(
            campaign_rows,
            [
                Constraint::Min(16),
                Constraint::Length(6),
                Constraint::Length(15),
            ],
        )
        .header(
            Row::new(["Campaign", "Value", "Share"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(CAMPAIGNS_TITLE)),
        areas.campaigns,
    );

    let mut chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(METADATA_TITLE)
                .title_bottom(Line::from(vec![
                    Span::styled(" available ", Style::default().fg(SUCCESS)),
                    Span::styled(" unavailable ", Style::default().fg(DANGER)),
                    Span::styled(" contextual score ", Style::default().fg(ACCENT)),
                ])),
        )
        .bar_width(3)
        .bar_gap(1)
        .group_gap(3)
        .max(100);
    for presence in view.metadata_presence {
        let bars = [
            Bar::default()
                .value(u64::from(presence.available))
                .style(Style::default().fg(SUCCESS)),
            Bar::default()
                .value(u64::from(presence.unavailable))
                .style(Style::default().fg(DANGER)),
            Bar::default()
                .value(u64::from(presence.contextual_score))
                .style(Style::default().fg(ACCENT)),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(presence.campaign))
                .bars(&bars),
        );
    }
    f.render_widget(chart, areas.metadata);
}
