mod iterative;
mod multi;
mod recursive;
mod resolve_domain;

pub use iterative::IterativeLookup;
pub use multi::{is_non_existent, pick_faster, MultiLookup};
pub use recursive::RecursiveLookup;
pub use resolve_domain::ResolveDomainUseCase;

use std::future::Future;
use tokio::time::Instant;

/// Await `fut` and report how long it took in whole milliseconds.
async fn timed<F: Future>(fut: F) -> (F::Output, u64) {
    let started = Instant::now();
    let output = fut.await;
    (output, elapsed_ms(started))
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
