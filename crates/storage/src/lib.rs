#![forbid(unsafe_code)]

pub mod repository;

pub use repository::{DisabledSessionStorage, InMemorySessionStorage, SessionStorage, StorageError};
