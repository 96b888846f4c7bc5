//! Persistence layer for GTD Map.
//!
//! This crate defines the [`WorkItemSource`] collaborator the engine reads
//! from and a file-backed [`ItemStore`] implementing it. Writes are
//! crash-safe (write to temp file, then rename).
//!
//! # Example
//!
//! ```no_run
//! use gtdmap_models::{OrganizationId, WorkItem};
//! use gtdmap_persistence::{ItemStore, WorkItemSource};
//!
//! let store = ItemStore::new("/home/user/.gtd-map");
//! let org = OrganizationId::from("acme");
//!
//! store.save_item(&org, &WorkItem::new("Send quote")).unwrap();
//! let active = store.fetch_active_work_items(&org).unwrap();
//! ```

pub mod atomic;
pub mod error;
pub mod item_store;
pub mod source;

pub use error::{PersistenceError, Result};
pub use item_store::{path_segment, stream_efficiency, ItemStore};
pub use source::WorkItemSource;
