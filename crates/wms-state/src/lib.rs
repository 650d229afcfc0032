//! # wms-state
//!
//! Reactive query state for the dashboard views. Every data-bearing view
//! shares one adapter ([`use_remote`]) instead of reimplementing its own
//! loading/error/result bookkeeping, and reaches the backend through a
//! context-provided [`BackendClient`] so tests can substitute endpoints.

use std::future::Future;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use wms_client::{BackendClient, ClientConfig, FetchError};

// ============================================================================
// VIEW STATE MACHINE
// ============================================================================

/// Per-view fetch state: `Idle → Loading → {Ready | Failed}`.
///
/// Entered once per mount. There is no transition back to `Loading`; a
/// failed view stays failed until the user navigates away and back.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RemoteData<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> RemoteData<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Payload, if the fetch settled successfully
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Error message, if the fetch settled with a failure
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Collapse a settled fetch into view state
    pub fn from_result(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

// ============================================================================
// FETCH-ON-MOUNT ADAPTER
// ============================================================================

/// Drive a fetch future into a [`RemoteData`] signal.
///
/// The query starts immediately (views call this during setup, i.e. on
/// mount), the signal moves to `Loading`, and settles exactly once. The
/// in-flight future is not cancelled on unmount.
pub fn use_remote<T, F, Fut>(fetch: F) -> RwSignal<RemoteData<T>>
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let state = RwSignal::new(RemoteData::Loading);
    let future = fetch();

    spawn_local(async move {
        let result = future.await;
        if let Err(err) = &result {
            tracing::error!(%err, "query settled with failure");
        }
        state.set(RemoteData::from_result(result));
    });

    state
}

// ============================================================================
// CONTEXT HELPERS
// ============================================================================

/// Construct the backend client and provide it to the component tree
pub fn provide_client(config: ClientConfig) -> BackendClient {
    let client = BackendClient::new(config);
    provide_context(client.clone());
    client
}

/// Use the backend client from context
pub fn use_client() -> BackendClient {
    expect_context::<BackendClient>()
}

/// Try to get the backend client from context (returns None if not provided)
pub fn try_use_client() -> Option<BackendClient> {
    use_context::<BackendClient>()
}
