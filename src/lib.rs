//! Albergo — content store and presentation engine for a small hotel
//! marketing site.
//!
//! The crate owns the editable content model behind the site: a global
//! [`model::SiteConfig`] plus a hierarchy of [`model::SectionContent`]
//! sections (rooms, restaurant menus, experiences) an operator edits
//! without redeploying. Pages read from the [`store::ContentStore`]; the
//! admin surface mutates through it after the single-secret check in
//! [`admin`]; [`presentation`] computes header/logo visual state as pure
//! functions of content flags and the transient [`viewport`] signal.
//!
//! Route handling and page markup live outside this crate and consume it
//! read-only.

pub mod admin;
pub mod effects;
pub mod logging;
pub mod model;
pub mod persist;
pub mod presentation;
pub mod store;
pub mod viewport;
