//! Adapters implementing domain ports.
//!
//! Storage backends for [`crate::ports::QTableRepository`]: a MessagePack
//! file and an in-memory map for tests.

pub mod in_memory_repository;
pub mod msgpack_repository;

pub use in_memory_repository::InMemoryRepository;
pub use msgpack_repository::MsgPackRepository;
