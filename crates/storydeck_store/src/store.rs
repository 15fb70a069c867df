//! The storyline store and its reducer.

use crate::SectionCommand;
use chrono::Utc;
use derive_getters::Getters;
use storydeck_core::{Section, Storyline};
use storydeck_error::{StoreError, StoreErrorKind, StorydeckResult};

/// Owner of the live ordered section list.
///
/// All mutations are synchronous; the order invariant (`order` values exactly
/// `0..n-1`) holds immediately after each [`apply`](StorylineStore::apply).
/// The dirty flag tracks unsaved changes for the persistence caller.
///
/// # Examples
///
/// ```
/// use storydeck_core::{SectionBuilder, StorylineBuilder};
/// use storydeck_store::{SectionCommand, StorylineStore};
///
/// let storyline = StorylineBuilder::default()
///     .sections(vec![
///         SectionBuilder::default().id("s1").build().unwrap(),
///         SectionBuilder::default().id("s2").build().unwrap(),
///     ])
///     .build()
///     .unwrap();
/// let mut store = StorylineStore::new(storyline);
///
/// store
///     .apply(SectionCommand::RemoveSection { id: "s1".to_string() })
///     .unwrap();
/// assert_eq!(store.sections().len(), 1);
/// assert_eq!(*store.sections()[0].order(), 0);
/// assert!(store.is_dirty());
/// ```
#[derive(Debug, Clone, Getters)]
pub struct StorylineStore {
    /// The owned storyline
    storyline: Storyline,
    /// Whether unsaved mutations exist
    #[getter(skip)]
    dirty: bool,
}

impl StorylineStore {
    /// Take ownership of a storyline, reindexing section order contiguously.
    pub fn new(mut storyline: Storyline) -> Self {
        reindex(storyline.sections_mut());
        Self {
            storyline,
            dirty: false,
        }
    }

    /// The owned section list.
    pub fn sections(&self) -> &[Section] {
        self.storyline.sections()
    }

    /// Look up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.storyline.section(id)
    }

    /// Whether unsaved mutations exist.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag after a successful save.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Record the repository-assigned id after the first save.
    pub fn adopt_id(&mut self, id: impl Into<String>) {
        self.storyline.set_id(id);
    }

    /// Clone the current section list for a pre-mutation backup.
    pub fn snapshot(&self) -> Vec<Section> {
        self.storyline.sections().to_vec()
    }

    /// Replace the section list from a backup, reindexing order.
    ///
    /// Marks the storyline dirty: restored state still differs from what was
    /// last persisted.
    pub fn restore(&mut self, sections: Vec<Section>) {
        *self.storyline.sections_mut() = sections;
        reindex(self.storyline.sections_mut());
        self.dirty = true;
    }

    /// Clamp an externally-tracked section index into the valid range.
    ///
    /// View state like "currently previewed section" is caller-owned; after
    /// removals the caller passes its index through here.
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.sections().len().saturating_sub(1))
    }

    /// Apply one named mutation command.
    ///
    /// # Errors
    ///
    /// Returns `StoreErrorKind::SectionNotFound` when an id-addressed command
    /// names a section the storyline does not contain.
    #[tracing::instrument(skip(self, command), fields(command = command.name(), target = ?command.target()))]
    pub fn apply(&mut self, command: SectionCommand) -> StorydeckResult<()> {
        match command {
            SectionCommand::UpdateSection { id, patch } => {
                let section = self.section_mut(&id)?;
                section.apply_patch(&patch, Utc::now());
                tracing::debug!(section = %id, "Merged section patch");
            }
            SectionCommand::ToggleLock { id, locked } => {
                let section = self.section_mut(&id)?;
                if locked {
                    section.lock(Utc::now());
                } else {
                    section.unlock();
                }
                tracing::debug!(section = %id, locked, "Toggled section lock");
            }
            SectionCommand::RemoveSection { id } => {
                if self.storyline.section(&id).is_none() {
                    return Err(StoreError::new(StoreErrorKind::SectionNotFound(id)).into());
                }
                self.storyline.sections_mut().retain(|s| s.id() != &id);
                reindex(self.storyline.sections_mut());
                tracing::debug!(section = %id, remaining = self.sections().len(), "Removed section");
            }
            SectionCommand::ApplyLayout { id, layout } => {
                let section = self.section_mut(&id)?;
                section.set_layout(Some(layout));
                section.touch(Utc::now());
                tracing::debug!(section = %id, layout = %layout, "Applied layout");
            }
            SectionCommand::SetPreview { id, preview } => {
                let section = self.section_mut(&id)?;
                section.set_preview(preview);
                tracing::debug!(section = %id, "Replaced layout preview");
            }
            SectionCommand::SetSections(sections) => {
                *self.storyline.sections_mut() = sections;
                reindex(self.storyline.sections_mut());
                tracing::debug!(count = self.sections().len(), "Replaced section list");
            }
        }

        self.dirty = true;
        debug_assert!(order_is_contiguous(self.sections()));
        Ok(())
    }

    fn section_mut(&mut self, id: &str) -> StorydeckResult<&mut Section> {
        self.storyline
            .sections_mut()
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or_else(|| StoreError::new(StoreErrorKind::SectionNotFound(id.to_string())).into())
    }
}

/// Rewrite `order` to the contiguous sequence `0..n-1`.
fn reindex(sections: &mut [Section]) {
    for (index, section) in sections.iter_mut().enumerate() {
        section.set_order(index);
    }
}

fn order_is_contiguous(sections: &[Section]) -> bool {
    sections
        .iter()
        .enumerate()
        .all(|(index, section)| *section.order() == index)
}
