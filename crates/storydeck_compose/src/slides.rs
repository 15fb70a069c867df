//! Sequential per-section slide generation.

use derive_getters::Getters;
use storydeck_core::{Section, SectionPatchBuilder, Slide};
use storydeck_error::{SlideError, SlideErrorKind, StorydeckResult};
use storydeck_interface::{SlideRequestBuilder, SlideService};
use storydeck_layout::recommended_layout;
use storydeck_normalize::normalize_slide;
use storydeck_store::{SectionCommand, StorylineStore};

/// Default cohort predicate: sections with no slides yet.
pub fn needs_slides(section: &Section) -> bool {
    section.slides().is_empty()
}

/// One isolated per-section failure.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct SlideFailure {
    /// Section the failure belongs to
    section_id: String,
    /// Error detail
    error: String,
}

/// Result of one cohort run.
#[derive(Debug, Clone, Getters)]
pub struct SlideGenerationReport {
    /// Sections processed (success or failure)
    completed: usize,
    /// Cohort size
    total: usize,
    /// Isolated per-section failures
    failures: Vec<SlideFailure>,
    /// Ids of sections whose decks were committed
    updated: Vec<String>,
}

impl SlideGenerationReport {
    /// Every targeted section failed.
    pub fn is_total_failure(&self) -> bool {
        self.total > 0 && self.failures.len() == self.total
    }

    /// Some, but not all, targeted sections failed.
    pub fn is_partial_failure(&self) -> bool {
        !self.failures.is_empty() && self.failures.len() < self.total
    }
}

/// Requests per-section slide decks and commits the successes in one pass.
///
/// The cohort is processed sequentially, not in parallel, so the
/// `{completed, total}` progress counter stays monotonic and the external
/// service sees backpressure. This is a policy choice.
pub struct SlideCoordinator<S: SlideService> {
    service: S,
}

impl<S: SlideService> SlideCoordinator<S> {
    /// Create a coordinator over a slide generation service.
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Generate decks for every section matching the predicate.
    ///
    /// Equivalent to [`generate_with_progress`](Self::generate_with_progress)
    /// with a no-op progress sink.
    pub async fn generate_for_sections(
        &self,
        store: &mut StorylineStore,
        predicate: impl Fn(&Section) -> bool,
    ) -> StorydeckResult<SlideGenerationReport> {
        self.generate_with_progress(store, predicate, |_, _| {}).await
    }

    /// Generate decks, reporting `{completed, total}` after each section.
    ///
    /// Per-section failures are recorded without aborting the cohort; a
    /// response with zero slides counts as a failure even when the service
    /// claims success. Successful decks are merged into the store in one
    /// pass at the end; zero successes means zero store mutation.
    #[tracing::instrument(skip_all)]
    pub async fn generate_with_progress(
        &self,
        store: &mut StorylineStore,
        predicate: impl Fn(&Section) -> bool,
        mut on_progress: impl FnMut(usize, usize),
    ) -> StorydeckResult<SlideGenerationReport> {
        let targets: Vec<Section> = store
            .sections()
            .iter()
            .filter(|section| predicate(section))
            .cloned()
            .collect();
        let total = targets.len();
        let summary = store.storyline().brief();

        tracing::info!(total, "Starting slide generation cohort");

        let mut completed = 0usize;
        let mut failures = Vec::new();
        let mut pending: Vec<(String, Vec<Slide>)> = Vec::new();

        for section in &targets {
            match self.generate_one(section, &summary).await {
                Ok(slides) => pending.push((section.id().clone(), slides)),
                Err(error) => {
                    tracing::warn!(
                        section = %section.id(),
                        error = %error,
                        "Slide generation failed for section, continuing cohort"
                    );
                    failures.push(SlideFailure {
                        section_id: section.id().clone(),
                        error: error.kind.to_string(),
                    });
                }
            }
            completed += 1;
            on_progress(completed, total);
        }

        let mut updated = Vec::new();
        for (section_id, slides) in pending {
            store.apply(SectionCommand::UpdateSection {
                id: section_id.clone(),
                patch: SectionPatchBuilder::default()
                    .slides(slides)
                    .build()
                    .expect("slide patch builds from defaults"),
            })?;
            updated.push(section_id);
        }

        tracing::info!(
            completed,
            total,
            failed = failures.len(),
            committed = updated.len(),
            "Slide generation cohort finished"
        );

        Ok(SlideGenerationReport {
            completed,
            total,
            failures,
            updated,
        })
    }

    /// Generate and canonicalize one section's deck.
    ///
    /// Returns the failure as a typed error; the caller records it in the
    /// report instead of raising it.
    async fn generate_one(
        &self,
        section: &Section,
        summary: &str,
    ) -> Result<Vec<Slide>, SlideError> {
        let layout = (*section.layout()).unwrap_or_else(|| recommended_layout(section));

        let request = SlideRequestBuilder::default()
            .section(section.clone())
            .storyline_summary(summary)
            .layout(layout)
            .build()
            .expect("all slide request fields set");

        let response = self.service.generate_slides(&request).await.map_err(|e| {
            SlideError::new(SlideErrorKind::ServiceFailure {
                section: section.id().clone(),
                message: e.to_string(),
            })
        })?;

        if !response.success() {
            return Err(SlideError::new(SlideErrorKind::ServiceFailure {
                section: section.id().clone(),
                message: response
                    .error()
                    .clone()
                    .unwrap_or_else(|| "service reported failure".to_string()),
            }));
        }

        let slides: Vec<Slide> = response
            .slides()
            .iter()
            .enumerate()
            .map(|(index, raw)| normalize_slide(raw, index, layout))
            .collect();

        if slides.is_empty() {
            // The service claimed success but delivered nothing usable.
            return Err(SlideError::new(SlideErrorKind::EmptyDeck(
                section.id().clone(),
            )));
        }

        Ok(slides)
    }
}
