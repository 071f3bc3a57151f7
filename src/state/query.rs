//! Reusable request primitive: every consumer-facing lookup shares one
//! shape (`data`/`loading`/`error`), one ordering rule (last request wins),
//! and one cancellation scope (dropping the query cancels in-flight work),
//! instead of each call site restating the plumbing.

use crate::state::cache::CacheKey;
use leagues_api::client::ApiError;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct QueryState<T> {
    pub data: Option<T>,
    /// True exactly while a request this query issued is unresolved.
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self { data: None, loading: false, error: None }
    }
}

pub struct Query<T> {
    state: Arc<Mutex<QueryState<T>>>,
    /// Monotonic request sequence. A completion whose sequence is no longer
    /// the latest issued is discarded, so a slow stale response can never
    /// overwrite a fresher one.
    seq: Arc<AtomicU64>,
    last_key: Option<CacheKey>,
    cancel: watch::Sender<bool>,
}

impl<T: Send + 'static> Query<T> {
    pub fn new() -> Self {
        let (cancel, _) = watch::channel(false);
        Self {
            state: Arc::new(Mutex::new(QueryState::default())),
            seq: Arc::new(AtomicU64::new(0)),
            last_key: None,
            cancel,
        }
    }

    pub fn snapshot(&self) -> QueryState<T>
    where
        T: Clone,
    {
        self.state.lock().expect("query state lock poisoned").clone()
    }

    /// Issue a fetch for `key`. A repeat call with the same key is a no-op
    /// — this guards against refetch storms from re-renders with identical
    /// inputs, independent of whether a result has arrived yet.
    pub fn run<Fut>(&mut self, key: CacheKey, fetch: Fut)
    where
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        if self.last_key.as_ref() == Some(&key) {
            return;
        }
        self.last_key = Some(key);
        self.spawn(fetch);
    }

    /// Manual retry: re-issues regardless of the parameter guard. The only
    /// retry mechanism there is — nothing retries automatically.
    pub fn refetch<Fut>(&mut self, fetch: Fut)
    where
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        self.spawn(fetch);
    }

    fn spawn<Fut>(&self, fetch: Fut)
    where
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let this_seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.lock().expect("query state lock poisoned");
            state.loading = true;
            state.error = None;
        }

        let seq = Arc::clone(&self.seq);
        let state = Arc::clone(&self.state);
        let mut cancelled = self.cancel.subscribe();
        tokio::spawn(async move {
            tokio::select! {
                // Cancelled (or the query was dropped): no state update.
                _ = cancelled.changed() => {}
                result = fetch => {
                    if seq.load(Ordering::SeqCst) != this_seq {
                        // A newer request was issued while this one was in
                        // flight; its completion owns the state.
                        return;
                    }
                    let mut state = state.lock().expect("query state lock poisoned");
                    match result {
                        Ok(data) => {
                            state.data = Some(data);
                            state.error = None;
                        }
                        Err(err) => state.error = Some(err.to_string()),
                    }
                    state.loading = false;
                }
            }
        });
    }
}

impl<T> Drop for Query<T> {
    fn drop(&mut self) {
        let _ = self.cancel.send(true);
    }
}
