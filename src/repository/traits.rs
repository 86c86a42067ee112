//! Repository Layer - Core Traits
//!
//! Abstract interface the command layer programs against. The shipped
//! implementations are SQLite-backed, but nothing above this trait knows
//! that.

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity};

/// CRUD contract for the wardrobe stores.
///
/// All operations are async. Implementations must uphold:
/// - `create` ignores the entity's incoming id and returns the copy with
///   the store-assigned one.
/// - `list` returns a stable, documented order (garments: category then
///   id; outfits: most recently updated first) so screens need no
///   re-sorting.
/// - `update` never touches fields outside the entity's editable set; in
///   particular, outfit wear counters move only through their dedicated
///   operation.
/// - `delete` of an absent id is not an error.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Persist a new entity, returning it with its assigned id
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities in the store's documented order
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Write back an edited entity
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}
