use crate::database::medium::StorageMedium;
use crate::database::seed::default_candidates;
use crate::error::{Error, Result};
use crate::models::candidate::{Candidate, CandidatePatch, NewCandidate};
use crate::utils::{id::next_candidate_id, time};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const CANDIDATES_KEY: &str = "nexushire_candidates";
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(300);

/// Source of truth for the candidate collection.
///
/// Every operation waits out the simulated latency and then rewrites the
/// whole collection in one step. The work runs on its own task, so a caller
/// that stops waiting does not abort a write already under way.
#[derive(Clone)]
pub struct CandidateService {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    medium: Arc<dyn StorageMedium>,
    latency: Duration,
    write_gate: Mutex<()>,
}

impl CandidateService {
    pub fn new(medium: Arc<dyn StorageMedium>) -> Self {
        Self::with_latency(medium, DEFAULT_LATENCY)
    }

    pub fn with_latency(medium: Arc<dyn StorageMedium>, latency: Duration) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                medium,
                latency,
                write_gate: Mutex::new(()),
            }),
        }
    }

    pub fn latency(&self) -> Duration {
        self.inner.latency
    }

    pub async fn list(&self) -> Result<Vec<Candidate>> {
        self.run(|store| store.load()).await
    }

    pub async fn create(&self, data: NewCandidate) -> Result<Candidate> {
        self.run(move |store| {
            let mut candidates = store.load()?;
            let created_at = time::now();
            let id = next_candidate_id(created_at, candidates.iter().map(|c| c.id.as_str()));
            let candidate = Candidate::from_new(id, created_at, data);

            candidates.push(candidate.clone());
            store.save(&candidates)?;

            tracing::info!(
                "Created candidate {} ({}) at {}",
                candidate.id,
                candidate.name,
                time::to_rfc3339(candidate.created_at)
            );
            Ok(candidate)
        })
        .await
    }

    pub async fn update(&self, id: &str, patch: CandidatePatch) -> Result<Candidate> {
        let id = id.to_string();
        self.run(move |store| {
            let mut candidates = store.load()?;
            let Some(existing) = candidates.iter_mut().find(|c| c.id == id) else {
                tracing::warn!("Update rejected, candidate {} not found", id);
                return Err(Error::NotFound(format!("Candidate {} not found", id)));
            };

            existing.apply_patch(patch);
            let updated = existing.clone();
            store.save(&candidates)?;

            tracing::info!("Updated candidate {}", updated.id);
            Ok(updated)
        })
        .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        self.run(move |store| {
            let candidates = store.load()?;
            let before = candidates.len();
            let remaining: Vec<Candidate> = candidates.into_iter().filter(|c| c.id != id).collect();

            if remaining.len() == before {
                tracing::warn!("Delete rejected, candidate {} not found", id);
                return Err(Error::NotFound(format!("Candidate {} not found", id)));
            }

            store.save(&remaining)?;
            tracing::info!("Deleted candidate {}", id);
            Ok(())
        })
        .await
    }

    pub async fn flush(&self) -> Result<()> {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || {
            let _gate = inner.lock_gate()?;
            inner.medium.flush()
        })
        .await
        .map_err(|e| Error::Internal(format!("Candidate store flush failed: {}", e)))?
    }

    async fn run<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&StoreInner) -> Result<T> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        let task = tokio::spawn(async move {
            if !inner.latency.is_zero() {
                tokio::time::sleep(inner.latency).await;
            }
            // The medium may fsync; keep it off the async workers.
            tokio::task::spawn_blocking(move || {
                let _gate = inner.lock_gate()?;
                op(inner.as_ref())
            })
            .await
            .map_err(|e| Error::Internal(format!("Candidate store task failed: {}", e)))?
        });

        task.await
            .map_err(|e| Error::Internal(format!("Candidate store task failed: {}", e)))?
    }
}

impl StoreInner {
    fn lock_gate(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
        self.write_gate
            .lock()
            .map_err(|_| Error::Internal("Candidate store gate poisoned".to_string()))
    }

    /// Reads the collection, writing the default dataset first if the medium
    /// has never held one.
    fn load(&self) -> Result<Vec<Candidate>> {
        match self.medium.get(CANDIDATES_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                Error::Storage(format!("Stored candidate collection is unreadable: {}", e))
            }),
            None => {
                let seeded = default_candidates()?;
                self.save(&seeded)?;
                tracing::info!("Seeded candidate storage with {} records", seeded.len());
                Ok(seeded)
            }
        }
    }

    fn save(&self, candidates: &[Candidate]) -> Result<()> {
        let raw = serde_json::to_string(candidates)?;
        self.medium.set(CANDIDATES_KEY, &raw)
    }
}
