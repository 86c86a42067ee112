//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde/chrono for
//! serialization and the outfit-canvas placement type).

mod entity;
mod garment;
mod outfit;
mod weather;

pub use entity::{DomainError, DomainResult, Entity};
pub use garment::Garment;
pub use outfit::{Outfit, Schedule};
pub use weather::{Season, WeatherContext};
