//! Repository layer for the panel collections.
//!
//! Storage is an explicit interface ([`repository::Repository`]) with an
//! in-memory implementation; the scheduling core never touches it.
//! Durability is out of scope: records live for the lifetime of the
//! process, like the original backend's in-memory maps.

pub mod memory;
pub mod model;
pub mod repository;

pub use memory::MemoryStore;
