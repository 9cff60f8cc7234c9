//! Concurrent batch re-encoding.
//!
//! Every photo in a batch gets its own task; a semaphore caps how many run at
//! once. Results come back in input order with one outcome per photo, and a
//! failing photo never aborts the rest of the batch.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::{self, JoinSet};
use tracing::{debug, info, warn};

use crate::core::{ImageAsset, Progress, ProgressType, ScrubReport, ScrubSettings};
use crate::utils::{ScrubError, ScrubResult, validate_asset};

use super::reencode::reencode_with_report;

/// Outcome for one photo of a batch.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub filename: String,
    pub result: ScrubResult<(ImageAsset, ScrubReport)>,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn report(&self) -> Option<&ScrubReport> {
        self.result.as_ref().ok().map(|(_, report)| report)
    }

    pub fn asset(&self) -> Option<&ImageAsset> {
        self.result.as_ref().ok().map(|(asset, _)| asset)
    }

    pub fn error(&self) -> Option<&ScrubError> {
        self.result.as_ref().err()
    }
}

/// Validates and re-encodes photos with bounded concurrency.
#[derive(Clone)]
pub struct BatchExecutor {
    settings: Arc<ScrubSettings>,
    semaphore: Arc<Semaphore>,
}

impl BatchExecutor {
    pub fn new(settings: ScrubSettings) -> ScrubResult<Self> {
        settings.validate()?;
        let permits = settings.max_concurrency;
        Ok(Self {
            settings: Arc::new(settings),
            semaphore: Arc::new(Semaphore::new(permits)),
        })
    }

    pub fn settings(&self) -> &ScrubSettings {
        &self.settings
    }

    /// Validates and re-encodes a single photo, waiting for a free slot first.
    pub async fn process(&self, asset: &ImageAsset) -> ScrubResult<(ImageAsset, ScrubReport)> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|e| ScrubError::processing(format!("Failed to acquire worker: {e}")))?;

        debug!(
            "Worker started - Available permits: {}, File: {}",
            self.semaphore.available_permits(),
            asset.filename()
        );

        validate_asset(asset, &self.settings)?;
        reencode_with_report(asset, &self.settings).await
    }

    /// Processes every asset concurrently, reporting progress as each one finishes.
    pub async fn execute_batch(
        &self,
        assets: Vec<ImageAsset>,
        progress: Option<UnboundedSender<Progress>>,
    ) -> Vec<BatchOutcome> {
        let total = assets.len();
        info!("Processing batch of {} photos (concurrency {})", total, self.settings.max_concurrency);

        emit(progress.as_ref(), Progress::new(ProgressType::Start, 0, total, "processing"));

        let filenames: Vec<String> = assets.iter().map(|a| a.filename().to_string()).collect();
        let mut join_set = JoinSet::new();
        let mut slot_of = HashMap::with_capacity(total);
        for (idx, asset) in assets.into_iter().enumerate() {
            let executor = self.clone();
            let handle = join_set.spawn(async move { (idx, executor.process(&asset).await) });
            slot_of.insert(handle.id(), idx);
        }

        collect_outcomes(join_set, slot_of, filenames, progress.as_ref()).await
    }
}

type Scrubbed = ScrubResult<(ImageAsset, ScrubReport)>;

fn emit(progress: Option<&UnboundedSender<Progress>>, event: Progress) {
    if let Some(tx) = progress {
        let _ = tx.send(event);
    }
}

/// Drains `join_set`, emitting one event per finished file and a final
/// `Complete`. A task that fails to join is reported against its own slot.
async fn collect_outcomes(
    mut join_set: JoinSet<(usize, Scrubbed)>,
    slot_of: HashMap<task::Id, usize>,
    filenames: Vec<String>,
    progress: Option<&UnboundedSender<Progress>>,
) -> Vec<BatchOutcome> {
    let total = filenames.len();
    let mut slots: Vec<Option<Scrubbed>> = vec![None; total];

    let mut completed = 0;
    while let Some(joined) = join_set.join_next_with_id().await {
        let (idx, result) = match joined {
            Ok((_, pair)) => pair,
            Err(e) => {
                let Some(&idx) = slot_of.get(&e.id()) else {
                    warn!("Batch task {} failed to join: {}", e.id(), e);
                    continue;
                };
                (idx, Err(ScrubError::processing(format!("Task panicked: {e}"))))
            }
        };
        completed += 1;

        let event = match &result {
            Ok((_, report)) => Progress::new(ProgressType::Progress, completed, total, "processing")
                .with_filename(&report.filename),
            Err(e) => {
                warn!("Re-encoding failed for {}: {}", filenames[idx], e);
                Progress::new(ProgressType::Error, completed, total, "error")
                    .with_filename(&filenames[idx])
                    .with_error(e.to_string())
            }
        };
        emit(progress, event);
        slots[idx] = Some(result);
    }

    let outcomes: Vec<BatchOutcome> = filenames
        .into_iter()
        .zip(slots)
        .map(|(filename, slot)| BatchOutcome {
            result: slot.unwrap_or_else(|| Err(ScrubError::processing("Task panicked"))),
            filename,
        })
        .collect();

    let failed = outcomes.iter().filter(|o| !o.is_success()).count();
    info!("Batch complete: {} succeeded, {} failed", total - failed, failed);
    emit(progress, Progress::new(ProgressType::Complete, total, total, "complete"));

    outcomes
}
