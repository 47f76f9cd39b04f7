//! Content schema (pure).
//!
//! All types in this module are plain data: the site-wide configuration
//! singleton, the editable section hierarchy, the patch types used for
//! partial updates, and the error taxonomy. No I/O happens here.
//!
//! # Wire compatibility
//!
//! Every serializable type renames its fields to camelCase so persisted
//! snapshots keep the layout the site has always written. Optional string
//! and list fields use the empty value as "absent": a reader checks
//! `is_empty()` instead of unwrapping an `Option`, and a freshly defaulted
//! object is always total.

pub mod error;
pub mod identifiers;
pub mod section;
pub mod site_config;

pub use error::{PersistError, StoreError};
pub use identifiers::{InvalidSectionId, InvalidSubSectionId, SectionId, SubSectionId};
pub use section::{
    default_sections, IconName, MenuItem, MenuSection, NavItem, RoomItem, SectionContent,
    SectionPatch, SubSection, SubSectionBody,
};
pub use site_config::{SiteConfig, SiteConfigPatch, DEFAULT_SITE_TITLE};
