use chrono::{Local, TimeZone};
use discovery_core::{
    update, AppState, AvailabilityLevel, EnrichmentField, HistoryView, Msg, QueryStatus, Tab,
    HISTORY_PLACEHOLDER, RELEVANCY_THRESHOLD,
};
use pretty_assertions::assert_eq;

fn select(state: AppState, field: EnrichmentField, id: &str) -> AppState {
    update(
        state,
        Msg::EnrichmentFieldChanged {
            field,
            value: Some(id.to_string()),
        },
    )
    .0
}

#[test]
fn empty_history_renders_placeholder() {
    let view = AppState::new().view();
    assert_eq!(
        view.exploration.history,
        HistoryView::Placeholder(HISTORY_PLACEHOLDER)
    );
    assert_eq!(view.history_len(), 0);
    assert_eq!(view.active_tab, Tab::Exploration);
}

#[test]
fn history_table_has_title_and_formatted_rows() {
    let (state, _) = update(AppState::new(), Msg::InputChanged("q".to_string()));
    let (state, _) = update(state, Msg::QuerySubmitted);
    let (state, _) = update(
        state,
        Msg::QueryCompleted {
            query_id: 1,
            outcome: Ok("done".to_string()),
            completed_at: Local
                .with_ymd_and_hms(2024, 1, 5, 14, 7, 9)
                .single()
                .expect("unambiguous local time"),
        },
    );

    match state.view().exploration.history {
        HistoryView::Table { title, rows } => {
            assert_eq!(title, "Response History (1)");
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].timestamp, "1/5/24, 2:07:09 PM");
            assert_eq!(rows[0].status, QueryStatus::Success);
            assert_eq!(rows[0].status.label(), "Success");
            assert_eq!(rows[0].response, "done");
        }
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn availability_follows_selection() {
    let view = AppState::new().view();
    assert_eq!(view.enrichment.availability.source_percent, 75);
    assert_eq!(view.enrichment.availability.campaign_percent, 70);
    assert_eq!(view.enrichment.availability.source_caption, "Select a source");
    assert_eq!(view.enrichment.relevancy.score, RELEVANCY_THRESHOLD);
    assert!(view.enrichment.relevancy.above_threshold);

    let state = select(AppState::new(), EnrichmentField::Campaign, "camp3");
    let state = select(state, EnrichmentField::Source, "src4");
    let view = state.view();
    let availability = &view.enrichment.availability;
    assert_eq!(availability.source_percent, 65);
    assert_eq!(availability.source_level, AvailabilityLevel::Medium);
    assert_eq!(availability.campaign_percent, 72);
    assert_eq!(availability.source_caption, "Email Platform");
    assert_eq!(availability.campaign_caption, "Brand Awareness Q1");
    assert_eq!(view.enrichment.relevancy.score, 65);
    assert!(!view.enrichment.relevancy.above_threshold);
}

#[test]
fn config_fields_do_not_drive_availability() {
    let state = select(AppState::new(), EnrichmentField::ConfigCampaign, "camp1");
    let state = select(state, EnrichmentField::ConfigSource, "src1");
    let view = state.view();
    assert_eq!(view.enrichment.availability.source_percent, 75);
    assert!(!view.enrichment.can_submit_pipeline);
}

#[test]
fn tabs_cycle_in_both_directions() {
    assert_eq!(Tab::Exploration.next(), Tab::Enrichment);
    assert_eq!(Tab::Reports.next(), Tab::Exploration);
    assert_eq!(Tab::Exploration.prev(), Tab::Reports);

    let (mut state, _) = update(AppState::new(), Msg::TabSelected(Tab::Reports));
    assert!(state.consume_dirty());
    assert_eq!(state.view().active_tab, Tab::Reports);
    let (mut state, _) = update(state, Msg::TabSelected(Tab::Reports));
    assert!(!state.consume_dirty());
}

#[test]
fn reports_expose_static_datasets() {
    let reports = AppState::new().view().reports;
    assert_eq!(reports.data_sources.len(), 6);
    assert_eq!(reports.campaign_shares[0].name, "Summer Sale 2024");
    assert_eq!(reports.campaign_shares[0].percent, 35);
    assert_eq!(reports.metadata_presence.len(), 5);
}

#[test]
fn error_rows_keep_status() {
    let (state, _) = update(AppState::new(), Msg::InputChanged("q".to_string()));
    let (state, _) = update(state, Msg::QuerySubmitted);
    let (state, _) = update(
        state,
        Msg::QueryCompleted {
            query_id: 1,
            outcome: Err(discovery_core::QueryFailure::new(
                discovery_core::FailureClass::NetworkOrServer,
                "API Error: 500 Internal Server Error",
            )),
            completed_at: Local::now(),
        },
    );
    let view = state.view();
    match view.exploration.history {
        HistoryView::Table { rows, .. } => {
            assert_eq!(rows[0].status, QueryStatus::Error);
            assert!(rows[0].response.contains("500"));
        }
        other => panic!("expected table, got {other:?}"),
    }
    assert!(view.exploration.can_submit);
}
