//! The content store: single owner of the live site content.
//!
//! Pages read through `&` access; the admin surface mutates through the
//! store's operations, which apply in memory, notify subscribers, and write
//! through to the persistence adapter. Single-threaded by design: every
//! mutation runs to completion before the next event, so mutations are
//! atomic with respect to each other and no locking exists.

pub mod content_store;
pub mod subscription;

pub use content_store::ContentStore;
pub use subscription::{ChangeEvent, Subscription};
