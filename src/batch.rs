//! Bounded worker pool for dependency extraction over sentence batches.
//!
//! Each extraction call is stateless and free of shared mutable state,
//! so already-segmented sentences can be analyzed concurrently. Results
//! complete in no particular order; every result carries its row key, and
//! callers re-join on that key before persistence.

use crate::dep::extractor::extract_text;
use crate::dep::DependencyParser;
use crate::roles::RoleSet;
use crossbeam_channel::{bounded, unbounded};
use std::fmt::Display;

/// Number of workers to use when the caller has no preference.
///
/// Falls back to 4 when the host parallelism cannot be queried.
#[must_use]
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(4)
}

/// Apply the dependency role extractor to keyed sentences concurrently.
///
/// Spawns `workers` scoped threads fed from a bounded channel. Rows whose
/// parse fails are dropped with a warning, matching the per-item
/// containment of the corpus path. Returned pairs are in completion
/// order, not input order.
pub fn extract_batch<P, K>(
    parser: &P,
    rows: Vec<(K, String)>,
    workers: usize,
) -> Vec<(K, Vec<RoleSet>)>
where
    P: DependencyParser + Sync,
    K: Send + Display,
{
    let workers = workers.max(1);
    let (task_tx, task_rx) = bounded::<(K, String)>(workers * 2);
    let (result_tx, result_rx) = unbounded();

    std::thread::scope(|scope| {
        for _ in 0..workers {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                for (key, text) in task_rx.iter() {
                    match extract_text(parser, &text) {
                        Ok(sets) => {
                            let _ = result_tx.send((key, sets));
                        }
                        Err(err) => {
                            log::warn!("dropping row {key}: {err}");
                        }
                    }
                }
            });
        }
        // Only the workers' clones remain; the results channel closes
        // when the last worker finishes.
        drop(result_tx);
        drop(task_rx);

        for row in rows {
            if task_tx.send(row).is_err() {
                break;
            }
        }
        drop(task_tx);

        result_rx.iter().collect()
    })
}
