use std::{sync::Arc, time::Duration};
use tokio::time::Instant;

pub(crate) struct Snapshot<T> {
    value: Arc<T>,
    fetched_at: Instant,
}

impl<T> Snapshot<T> {
    pub(crate) fn new(value: Arc<T>) -> Self {
        Self {
            value,
            fetched_at: Instant::now(),
        }
    }
    pub(crate) fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
    pub(crate) fn value(&self) -> Arc<T> {
        Arc::clone(&self.value)
    }
}
