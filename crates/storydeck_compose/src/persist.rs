//! Storyline persistence plumbing.
//!
//! Persistence itself lives behind [`StorylineRepository`]; these helpers
//! own the create-versus-update decision and the dirty flag, which the
//! regeneration orchestrator depends on ("save before regenerating").

use storydeck_error::StorydeckResult;
use storydeck_interface::StorylineRepository;
use storydeck_store::StorylineStore;

/// Save the stored storyline, creating it on first save.
///
/// A storyline without an id is created and adopts the repository-assigned
/// id; a persisted one is updated in place. On success the store's dirty
/// flag is cleared. Returns the persisted id.
///
/// # Errors
///
/// Returns the repository error unchanged; the dirty flag is left set.
#[tracing::instrument(skip(store, repository))]
pub async fn save_storyline<P: StorylineRepository>(
    store: &mut StorylineStore,
    repository: &P,
) -> StorydeckResult<String> {
    let id = match store.storyline().id().clone() {
        Some(id) => {
            repository.update(&id, store.storyline()).await?;
            tracing::debug!(storyline = %id, "Updated persisted storyline");
            id
        }
        None => {
            let id = repository.create(store.storyline()).await?;
            store.adopt_id(id.clone());
            tracing::info!(storyline = %id, "Created storyline");
            id
        }
    };

    store.mark_clean();
    Ok(id)
}

/// Load the storylines attached to one deliverable.
///
/// # Errors
///
/// Returns the repository error unchanged.
pub async fn load_storylines<P: StorylineRepository>(
    repository: &P,
    deliverable_id: &str,
) -> StorydeckResult<Vec<StorylineStore>> {
    let storylines = repository.list_by_deliverable(deliverable_id).await?;
    tracing::debug!(
        deliverable = %deliverable_id,
        count = storylines.len(),
        "Loaded storylines"
    );
    Ok(storylines.into_iter().map(StorylineStore::new).collect())
}
