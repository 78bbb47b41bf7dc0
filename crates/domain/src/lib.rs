pub mod entities;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::Person;
