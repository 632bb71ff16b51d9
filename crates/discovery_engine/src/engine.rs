use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use discovery_logging::{discovery_debug, discovery_info, discovery_warn};

use crate::dispatch::{DispatchSettings, QueryDispatcher, ReqwestDispatcher};
use crate::ticker::TickerRegistry;
use crate::{EngineError, EngineEvent, EventSink, PipelineId, QueryId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    pub dispatch: DispatchSettings,
    /// Cadence of the pipeline progress simulation.
    pub tick_interval: Duration,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            dispatch: DispatchSettings::default(),
            tick_interval: Duration::from_secs(1),
        }
    }
}

enum EngineCommand {
    Dispatch { query_id: QueryId, query: String },
    StartTicker { pipeline_id: PipelineId },
    StopTicker { pipeline_id: PipelineId },
    StopAllTickers,
}

/// Handle to the engine thread.
///
/// Dropping the handle closes the command channel; the engine thread then
/// aborts its tickers and shuts its runtime down, cancelling in-flight work.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: EngineSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        discovery_info!(
            "engine starting endpoint={} timeout_ms={} tick_ms={}",
            settings.dispatch.endpoint(),
            settings.dispatch.timeout.as_millis(),
            settings.tick_interval.as_millis()
        );
        let dispatcher = ReqwestDispatcher::new(settings.dispatch)?;
        Self::with_dispatcher(Arc::new(dispatcher), settings.tick_interval, sink)
    }

    /// Starts the engine around any dispatcher implementation.
    pub fn with_dispatcher(
        dispatcher: Arc<dyn QueryDispatcher>,
        tick_interval: Duration,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            let mut tickers = TickerRegistry::new();
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Dispatch { query_id, query } => {
                        let dispatcher = dispatcher.clone();
                        let sink = sink.clone();
                        runtime.spawn(async move {
                            let result = dispatcher.dispatch(&query).await;
                            if let Err(err) = &result {
                                discovery_warn!(
                                    "query {} failed ({}): {}",
                                    query_id,
                                    err.kind,
                                    err.message
                                );
                            }
                            sink.emit(EngineEvent::QueryCompleted { query_id, result });
                        });
                    }
                    EngineCommand::StartTicker { pipeline_id } => {
                        tickers.start(runtime.handle(), pipeline_id, tick_interval, sink.clone());
                    }
                    EngineCommand::StopTicker { pipeline_id } => {
                        tickers.stop(pipeline_id);
                    }
                    EngineCommand::StopAllTickers => {
                        let stopped = tickers.stop_all();
                        discovery_debug!("stopped {} ticker(s)", stopped);
                    }
                }
            }
            drop(tickers);
            discovery_info!("engine stopped");
        });

        Ok(Self { cmd_tx })
    }

    pub fn dispatch(&self, query_id: QueryId, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Dispatch {
            query_id,
            query: query.into(),
        });
    }

    pub fn start_ticker(&self, pipeline_id: PipelineId) {
        let _ = self.cmd_tx.send(EngineCommand::StartTicker { pipeline_id });
    }

    pub fn stop_ticker(&self, pipeline_id: PipelineId) {
        let _ = self.cmd_tx.send(EngineCommand::StopTicker { pipeline_id });
    }

    pub fn stop_all_tickers(&self) {
        let _ = self.cmd_tx.send(EngineCommand::StopAllTickers);
    }
}
