//! Repository Layer
//!
//! Data access abstractions and implementations.

mod db;
mod garment_repo;
mod outfit_repo;
mod traits;

#[cfg(test)]
mod tests;

pub use db::{init_db, DbState};
pub use garment_repo::GarmentRepository;
pub use outfit_repo::{OutfitRepository, ResolvedOutfit};
pub use traits::Repository;
