//! Durable key-value persistence port for Vitrine.
//!
//! The cart (and anything else that needs to survive a page reload) is
//! persisted through the [`KeyValue`] port rather than against a concrete
//! browser/storage API, so the domain crates stay testable with an in-memory
//! backend.
//!
//! # Example
//!
//! ```rust
//! use vitrine_kv::{KeyValueExt, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.set_json("greeting", &"ola").unwrap();
//! let value: Option<String> = store.get_json("greeting").unwrap();
//! assert_eq!(value.as_deref(), Some("ola"));
//! ```

mod error;
mod kv;

pub use error::KvError;
pub use kv::{KeyValue, KeyValueExt, MemoryStore};
