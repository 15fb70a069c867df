//! Storyline regeneration orchestration.

use derive_getters::Getters;
use std::collections::HashMap;
use storydeck_core::Section;
use storydeck_error::{
    RegenerationError, RegenerationErrorKind, RetryableError, StorydeckError, StorydeckResult,
};
use storydeck_interface::{LockedSummary, RegenerationRequestBuilder, RegenerationService};
use storydeck_normalize::normalize_section;
use storydeck_rate_limit::{RetryPolicy, run_with_backoff};
use storydeck_store::{SectionCommand, StorylineStore};

/// Observable phase of a regeneration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum RegenerationPhase {
    /// No run started
    #[default]
    Idle,
    /// Partitioning locked and draft sections
    Preparing,
    /// Waiting on the regeneration service
    Requesting,
    /// Merging replacement sections into the store
    Merging,
    /// Last run finished successfully
    Done,
    /// Last run failed; the storyline was left unmodified
    Failed,
}

/// Result of a successful regeneration run.
#[derive(Debug, Clone, Getters)]
pub struct RegenerationOutcome {
    /// Pre-regeneration backup of the full section list
    backup: Vec<Section>,
    /// Ids of draft sections replaced by service output
    replaced: Vec<String>,
    /// Ids of locked sections carried through untouched
    preserved: Vec<String>,
}

/// Drives regeneration of a storyline's draft sections.
///
/// Locked sections are partitioned out and sent along only as context
/// summaries; replacement sections merge back by id; locked content always
/// wins even when the service echoes it back. Any failure leaves the
/// storyline unmodified; there is no partial merge.
pub struct RegenerationOrchestrator<R: RegenerationService> {
    service: R,
    phase: RegenerationPhase,
    in_flight: Option<String>,
}

impl<R: RegenerationService> RegenerationOrchestrator<R> {
    /// Create an orchestrator over a regeneration service.
    pub fn new(service: R) -> Self {
        Self {
            service,
            phase: RegenerationPhase::Idle,
            in_flight: None,
        }
    }

    /// Current phase of the last or running regeneration.
    pub fn phase(&self) -> RegenerationPhase {
        self.phase
    }

    fn set_phase(&mut self, phase: RegenerationPhase) {
        tracing::debug!(from = %self.phase, to = %phase, "Regeneration phase transition");
        self.phase = phase;
    }

    fn fail<T>(&mut self, error: impl Into<StorydeckError>) -> StorydeckResult<T> {
        self.in_flight = None;
        self.set_phase(RegenerationPhase::Failed);
        Err(error.into())
    }

    /// Regenerate every draft section of the stored storyline.
    ///
    /// # Errors
    ///
    /// - `UnsavedStoryline` when the storyline has no persisted id
    /// - `AlreadyRunning` when a run for the same storyline is in flight
    /// - `NothingToRegenerate` when every section is locked
    /// - `RateLimited` after bounded backoff retries exhaust
    /// - `ServiceFailure` with the service's error detail, surfaced verbatim
    ///
    /// On any error the store is untouched and its dirty flag unchanged.
    #[tracing::instrument(skip(self, store), fields(sections = store.sections().len()))]
    pub async fn regenerate(
        &mut self,
        store: &mut StorylineStore,
    ) -> StorydeckResult<RegenerationOutcome> {
        let Some(storyline_id) = store.storyline().id().clone() else {
            return self.fail(RegenerationError::new(
                RegenerationErrorKind::UnsavedStoryline,
            ));
        };

        if self.in_flight.as_deref() == Some(storyline_id.as_str()) {
            // Guard rejection: the running regeneration keeps its phase.
            return Err(RegenerationError::new(RegenerationErrorKind::AlreadyRunning(
                storyline_id,
            ))
            .into());
        }

        self.set_phase(RegenerationPhase::Preparing);
        let (locked, drafts): (Vec<Section>, Vec<Section>) = store
            .sections()
            .iter()
            .cloned()
            .partition(|section| *section.locked());

        if drafts.is_empty() {
            return self.fail(RegenerationError::new(
                RegenerationErrorKind::NothingToRegenerate,
            ));
        }

        let backup = store.snapshot();

        let request = RegenerationRequestBuilder::default()
            .storyline_id(storyline_id.clone())
            .draft_sections(drafts)
            .locked_context(
                locked
                    .iter()
                    .map(LockedSummary::from_section)
                    .collect::<Vec<_>>(),
            )
            .build()
            .expect("all regeneration request fields set");

        self.in_flight = Some(storyline_id.clone());
        self.set_phase(RegenerationPhase::Requesting);

        let attempt = {
            let service = &self.service;
            match service.regenerate(&request).await {
                Err(e) if e.is_retryable() => {
                    let policy = RetryPolicy::for_error(&e);
                    tracing::info!(
                        error = %e,
                        initial_backoff_ms = *policy.initial_backoff_ms(),
                        max_retries = *policy.max_retries(),
                        "Regeneration rate limited, retrying with backoff"
                    );
                    run_with_backoff(&policy, || service.regenerate(&request)).await
                }
                other => other,
            }
        };
        let response = match attempt {
            Ok(response) => response,
            Err(e) => return self.fail(e),
        };

        if let Some(detail) = response.error() {
            return self.fail(RegenerationError::new(
                RegenerationErrorKind::ServiceFailure(detail.clone()),
            ));
        }

        self.set_phase(RegenerationPhase::Merging);
        let outcome = match merge(store, backup, response.sections()) {
            Ok(outcome) => outcome,
            Err(e) => return self.fail(e),
        };

        self.in_flight = None;
        self.set_phase(RegenerationPhase::Done);
        tracing::info!(
            replaced = outcome.replaced().len(),
            preserved = outcome.preserved().len(),
            "Regeneration merged"
        );
        Ok(outcome)
    }
}

/// Merge replacement sections into the store by id.
///
/// Locked sections always keep their original content; response sections
/// matching no draft are ignored with a warning.
fn merge(
    store: &mut StorylineStore,
    backup: Vec<Section>,
    raw_sections: &[serde_json::Value],
) -> StorydeckResult<RegenerationOutcome> {
    let mut replacements: HashMap<String, Section> = raw_sections
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let section = normalize_section(raw, index);
            (section.id().clone(), section)
        })
        .collect();

    let mut replaced = Vec::new();
    let mut preserved = Vec::new();

    let merged: Vec<Section> = backup
        .iter()
        .map(|original| {
            if *original.locked() {
                if replacements.remove(original.id()).is_some() {
                    tracing::warn!(
                        section = %original.id(),
                        "Service echoed a locked section back; locked content wins"
                    );
                }
                preserved.push(original.id().clone());
                return original.clone();
            }

            match replacements.remove(original.id()) {
                Some(mut replacement) => {
                    replacement.set_order(*original.order());
                    if *replacement.locked() {
                        replacement.unlock();
                    }
                    replaced.push(original.id().clone());
                    replacement
                }
                None => original.clone(),
            }
        })
        .collect();

    for unknown in replacements.keys() {
        tracing::warn!(section = %unknown, "Ignoring response section with unknown id");
    }

    store.apply(SectionCommand::SetSections(merged))?;

    Ok(RegenerationOutcome {
        backup,
        replaced,
        preserved,
    })
}
