use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use twdata_core::{FetchRequest, Fetcher, Payload};
use twdata_types::TwdataError;

/// Instruction for how requests to one endpoint should behave.
#[derive(Clone)]
pub enum MockBehavior {
    /// Return the provided body immediately.
    Return(Payload),
    /// Fail immediately with the provided error.
    Fail(TwdataError),
    /// Never answer (simulate a stalled upstream).
    Hang,
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<String, MockBehavior>,
    requests: Vec<FetchRequest>,
}

/// Controller handle used by tests to drive a [`DynamicFetcher`].
pub struct DynamicFetcherController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicFetcherController {
    /// Set the behavior for requests whose last URL segment is `endpoint`.
    pub async fn set_behavior(&self, endpoint: impl Into<String>, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.rules.insert(endpoint.into(), behavior);
    }

    /// Copy of every request received so far.
    pub async fn requests(&self) -> Vec<FetchRequest> {
        self.state.lock().await.requests.clone()
    }

    /// Clear all configured behaviors and the request log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.requests.clear();
    }
}

/// A fetcher that defers all behavior to an external controller.
///
/// Endpoints without a configured behavior fail with `NotFound`.
pub struct DynamicFetcher {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicFetcher {
    /// Create a fetcher and its controller.
    #[must_use]
    pub fn new_with_controller() -> (Arc<dyn Fetcher>, DynamicFetcherController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicFetcherController {
            state: Arc::clone(&state),
        };
        (Arc::new(Self { state }) as Arc<dyn Fetcher>, controller)
    }
}

#[async_trait]
impl Fetcher for DynamicFetcher {
    async fn fetch(&self, req: &FetchRequest) -> Result<Payload, TwdataError> {
        // Snapshot the rule so the lock is not held while hanging
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push(req.clone());
            guard.rules.get(req.endpoint()).cloned()
        };
        match behavior {
            Some(MockBehavior::Return(body)) => Ok(body),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Err(TwdataError::not_found(format!(
                "no behavior for {}",
                req.endpoint()
            ))),
        }
    }
}
