use crate::{
    config::retry::{LIMIT_DELAY, RETRY_COUNT, RETRY_DELAY},
    error::Result,
};
use log::warn;
use std::future::Future;
use tokio::time::sleep;

/// Runs `fun` until it succeeds, fails permanently, or the attempts run out.
pub(super) async fn async_retry<F, U, Out>(fun: F) -> Result<Out>
where
    F: Fn() -> U,
    U: Future<Output = Result<Out>>,
{
    for attempt in 1..RETRY_COUNT {
        match fun().await {
            Ok(v) => return Ok(v),
            Err(e) if e.is_transient() => {
                warn!(
                    target: "cforge::network",
                    "Attempt {}/{} failed: {}", attempt, RETRY_COUNT, e
                );
                if e.is_rate_limit() {
                    sleep(LIMIT_DELAY).await;
                } else {
                    sleep(RETRY_DELAY).await;
                }
            }
            Err(e) => return Err(e),
        }
    }
    fun().await
}
