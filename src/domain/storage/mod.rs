//! Storage abstraction - entity traits and the generic CRUD seam

mod entity;
mod repository;

pub use entity::{StorageEntity, StorageKey};
pub use repository::Storage;
