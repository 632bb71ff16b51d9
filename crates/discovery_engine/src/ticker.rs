use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use discovery_logging::discovery_debug;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::{EngineEvent, EventSink, PipelineId};

/// Live pipeline tickers keyed by pipeline id.
///
/// Every handle is aborted on [`TickerRegistry::stop`], [`TickerRegistry::stop_all`]
/// or when the registry is dropped.
#[derive(Default)]
pub struct TickerRegistry {
    handles: HashMap<PipelineId, JoinHandle<()>>,
}

impl TickerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns a ticker on `runtime` emitting one `PipelineTick` per `period`.
    ///
    /// The first tick fires one full period after the start. Restarting a live
    /// id replaces its previous ticker.
    pub fn start(
        &mut self,
        runtime: &Handle,
        pipeline_id: PipelineId,
        period: Duration,
        sink: Arc<dyn EventSink>,
    ) {
        let handle = runtime.spawn(run_ticker(pipeline_id, period, sink));
        if let Some(previous) = self.handles.insert(pipeline_id, handle) {
            previous.abort();
        }
        discovery_debug!(
            "ticker started pipeline_id={} period_ms={}",
            pipeline_id,
            period.as_millis()
        );
    }

    /// Aborts the ticker for `pipeline_id`; false if none was running.
    pub fn stop(&mut self, pipeline_id: PipelineId) -> bool {
        match self.handles.remove(&pipeline_id) {
            Some(handle) => {
                handle.abort();
                discovery_debug!("ticker stopped pipeline_id={}", pipeline_id);
                true
            }
            None => false,
        }
    }

    /// Aborts every ticker and returns how many were running.
    pub fn stop_all(&mut self) -> usize {
        let count = self.handles.len();
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
        count
    }

    pub fn is_running(&self, pipeline_id: PipelineId) -> bool {
        self.handles.contains_key(&pipeline_id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl Drop for TickerRegistry {
    fn drop(&mut self) {
        self.stop_all();
    }
}

async fn run_ticker(pipeline_id: PipelineId, period: Duration, sink: Arc<dyn EventSink>) {
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        sink.emit(EngineEvent::PipelineTick { pipeline_id });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct CountingSink {
        ticks: Mutex<Vec<PipelineId>>,
    }

    impl EventSink for CountingSink {
        fn emit(&self, event: EngineEvent) {
            if let EngineEvent::PipelineTick { pipeline_id } = event {
                self.ticks.lock().unwrap().push(pipeline_id);
            }
        }
    }

    impl CountingSink {
        fn count(&self, id: PipelineId) -> usize {
            self.ticks.lock().unwrap().iter().filter(|t| **t == id).count()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period_until_stopped() {
        let sink = Arc::new(CountingSink::default());
        let mut registry = TickerRegistry::new();
        registry.start(&Handle::current(), 7, Duration::from_secs(1), sink.clone());

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        assert_eq!(sink.count(7), 3);

        assert!(registry.stop(7));
        assert!(!registry.is_running(7));
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(sink.count(7), 3);
        assert!(!registry.stop(7));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_all_disposes_every_handle() {
        let sink = Arc::new(CountingSink::default());
        let mut registry = TickerRegistry::new();
        for id in 1..=3 {
            registry.start(&Handle::current(), id, Duration::from_secs(1), sink.clone());
        }
        assert_eq!(registry.len(), 3);

        assert_eq!(registry.stop_all(), 3);
        assert!(registry.is_empty());
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(sink.ticks.lock().unwrap().len(), 0);
    }
}
