use std::sync::Arc;

use polyglot_core::{JobSeq, TranslationJob};
use polyglot_logging::{polyglot_info, polyglot_warn};
use tokio::sync::mpsc;

use crate::{EngineEvent, Gateway};

/// Runs dispatched jobs in the background and reports completions.
///
/// Jobs are never cancelled: a superseded job still completes and is reported,
/// and the reconciler decides whether it still counts. Events arrive in
/// completion order, which need not match dispatch order.
pub struct EngineHandle {
    gateway: Arc<dyn Gateway>,
    event_tx: mpsc::UnboundedSender<EngineEvent>,
    event_rx: mpsc::UnboundedReceiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            gateway,
            event_tx,
            event_rx,
        }
    }

    /// Spawns the job onto the current Tokio runtime.
    pub fn enqueue(&self, seq: JobSeq, job: TranslationJob) {
        polyglot_info!(
            "Dispatch job seq={} source={} targets={}",
            seq,
            job.source_language(),
            job.target_languages().len()
        );
        let gateway = self.gateway.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = gateway.translate(&job).await;
            if let Err(err) = &result {
                polyglot_warn!("Job seq={} failed at the gateway: {}", seq, err);
            }
            let _ = event_tx.send(EngineEvent::JobCompleted { seq, result });
        });
    }

    pub async fn next_event(&mut self) -> Option<EngineEvent> {
        self.event_rx.recv().await
    }

    pub fn try_recv(&mut self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}
