use std::sync::Arc;

use polyglot_core::{Effect, Msg};
use polyglot_engine::{EngineEvent, EngineHandle, Gateway};
use polyglot_logging::polyglot_debug;

/// Executes reconciler effects and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            engine: EngineHandle::new(gateway),
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::DispatchJob { seq, job } => self.engine.enqueue(seq, job),
            }
        }
    }

    /// Waits for the next completed job.
    pub async fn next_msg(&mut self) -> Option<Msg> {
        self.engine.next_event().await.map(into_msg)
    }
}

fn into_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::JobCompleted { seq, result } => {
            polyglot_debug!("Job seq={} completed ok={}", seq, result.is_ok());
            Msg::JobDone {
                seq,
                result: result.map_err(|err| err.to_string()),
            }
        }
    }
}
