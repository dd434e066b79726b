use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

use super::ApiError;

/// Cancellation scope for backend requests. Requests run through a scope
/// resolve to [`ApiError::Cancelled`] once the scope is cancelled or dropped.
#[derive(Debug)]
pub struct RequestScope {
    signal: Arc<watch::Sender<bool>>,
}

/// Cloneable trigger for cancelling a [`RequestScope`] from elsewhere.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    signal: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.signal.send_replace(true);
    }
}

impl Default for RequestScope {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestScope {
    pub fn new() -> Self {
        let (signal, _) = watch::channel(false);
        Self {
            signal: Arc::new(signal),
        }
    }

    pub fn handle(&self) -> CancelHandle {
        CancelHandle {
            signal: Arc::clone(&self.signal),
        }
    }

    pub fn cancel(&self) {
        self.signal.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.signal.borrow()
    }

    /// Drives `request` until it finishes or the scope is cancelled.
    pub async fn run<T, F>(&self, request: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let mut cancelled = self.signal.subscribe();
        if *cancelled.borrow_and_update() {
            return Err(ApiError::Cancelled);
        }
        tokio::select! {
            result = request => result,
            _ = cancelled.wait_for(|flag| *flag) => Err(ApiError::Cancelled),
        }
    }
}

impl Drop for RequestScope {
    fn drop(&mut self) {
        self.signal.send_replace(true);
    }
}
