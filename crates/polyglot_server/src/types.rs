use std::sync::Arc;

use polyglot_engine::{Capability, FanOutDispatcher};
use serde::{Deserialize, Serialize};

/// Shared per-process state handed to every handler.
pub struct ServerState {
    pub dispatcher: FanOutDispatcher,
}

impl ServerState {
    pub fn new(capability: Arc<dyn Capability>) -> Self {
        Self {
            dispatcher: FanOutDispatcher::new(capability),
        }
    }
}

/// Body of every non-success response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
