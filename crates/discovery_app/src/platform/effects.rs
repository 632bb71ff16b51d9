use std::sync::{mpsc, Arc};

use chrono::Local;
use discovery_core::{Effect, FailureClass, Msg, QueryFailure};
use discovery_engine::{EngineEvent, EngineHandle, EngineSettings, EventSink, FailureKind};
use discovery_logging::{discovery_debug, discovery_info};

/// What the run loop should do after a batch of effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: EngineSettings, msg_tx: mpsc::Sender<Msg>) -> anyhow::Result<Self> {
        let engine = EngineHandle::new(settings, Arc::new(MsgSink::new(msg_tx)))?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) -> Flow {
        let mut flow = Flow::Continue;
        for effect in effects {
            match effect {
                Effect::DispatchQuery { query_id, query } => {
                    discovery_info!("DispatchQuery query_id={} query_len={}", query_id, query.len());
                    self.engine.dispatch(query_id, query);
                }
                Effect::StartPipelineTicker { pipeline_id } => {
                    discovery_info!("StartPipelineTicker pipeline_id={}", pipeline_id);
                    self.engine.start_ticker(pipeline_id);
                }
                Effect::StopPipelineTicker { pipeline_id } => {
                    discovery_debug!("StopPipelineTicker pipeline_id={}", pipeline_id);
                    self.engine.stop_ticker(pipeline_id);
                }
                Effect::StopAllTickers => {
                    self.engine.stop_all_tickers();
                }
                Effect::Quit => flow = Flow::Quit,
            }
        }
        flow
    }
}

/// Forwards engine events into the run loop's message queue.
pub struct MsgSink {
    msg_tx: mpsc::Sender<Msg>,
}

impl MsgSink {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        Self { msg_tx }
    }
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.msg_tx.send(map_event(event));
    }
}

/// Translates an engine event into a core message, stamping completion time.
pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::QueryCompleted { query_id, result } => Msg::QueryCompleted {
            query_id,
            outcome: result.map_err(|err| QueryFailure::new(map_failure(err.kind), err.message)),
            completed_at: Local::now(),
        },
        EngineEvent::PipelineTick { pipeline_id } => Msg::PipelineTick { pipeline_id },
    }
}

fn map_failure(kind: FailureKind) -> FailureClass {
    match kind {
        FailureKind::Timeout => FailureClass::Timeout,
        FailureKind::HttpStatus(_) | FailureKind::Network => FailureClass::NetworkOrServer,
        FailureKind::InvalidResponse | FailureKind::InvalidConfig => FailureClass::Unknown,
    }
}
