use crate::{AppState, Effect, Msg, TickOutcome};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TabSelected(tab) => {
            state.set_tab(tab);
            Vec::new()
        }
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::DownloadFormatChanged(format) => {
            state.set_download_format(format);
            Vec::new()
        }
        Msg::QuerySubmitted => {
            let query = state.input().trim();
            if query.is_empty() {
                return (state, Vec::new());
            }
            let query = query.to_string();
            let query_id = state.begin_query(query.clone());
            vec![Effect::DispatchQuery { query_id, query }]
        }
        Msg::InputCleared => {
            state.set_input(String::new());
            Vec::new()
        }
        Msg::QueryCompleted {
            query_id,
            outcome,
            completed_at,
        } => {
            state.complete_query(query_id, outcome, completed_at);
            Vec::new()
        }
        Msg::HistoryCleared => {
            state.clear_history();
            Vec::new()
        }
        Msg::EnrichmentFieldChanged { field, value } => {
            state.set_enrichment_field(field, value);
            Vec::new()
        }
        Msg::EnrichmentFocusChanged(field) => {
            state.set_enrichment_focus(field);
            Vec::new()
        }
        Msg::PipelineSubmitted { submitted_at } => match state.submit_pipeline(submitted_at) {
            Some(pipeline_id) => vec![Effect::StartPipelineTicker { pipeline_id }],
            None => Vec::new(),
        },
        Msg::PipelineTick { pipeline_id } => match state.advance_pipeline(pipeline_id) {
            TickOutcome::Advanced { .. } => Vec::new(),
            // A tick for a finished or unknown job means its handle is still live.
            TickOutcome::Completed | TickOutcome::Ignored => {
                vec![Effect::StopPipelineTicker { pipeline_id }]
            }
        },
        Msg::Tick => {
            state.tick_notice();
            Vec::new()
        }
        Msg::ShutdownRequested => {
            if state.begin_quit() {
                vec![Effect::StopAllTickers, Effect::Quit]
            } else {
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
