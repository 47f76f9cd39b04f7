//! Process-wide holder of the live content model.

use crate::model::{
    PersistError, SectionContent, SectionId, SectionPatch, SiteConfig, SiteConfigPatch,
    StoreError,
};
use crate::persist::{PersistenceAdapter, SnapshotBackend};
use crate::store::subscription::{ChangeEvent, SubscriberRegistry, Subscription};
use std::collections::HashSet;
use tracing::{info, warn};

/// The single owner of the live [`SiteConfig`] and section collection.
///
/// Constructed once at application start via [`ContentStore::open`], which
/// loads the last durable snapshot (or schema defaults). Torn down only at
/// process exit; the in-memory state is disposable.
///
/// Every mutation follows the same sequence: apply in memory, notify
/// subscribers in registration order, then write through to the persistence
/// adapter. The write is best-effort — a failure is logged, retained for
/// the admin surface, and never rolls back the in-memory change: the
/// editor's in-session view is authoritative even if durability briefly
/// fails. Failed mutations (unknown id, malformed reorder) change nothing
/// and notify nobody.
pub struct ContentStore<B> {
    config: SiteConfig,
    sections: Vec<SectionContent>,
    adapter: PersistenceAdapter<B>,
    subscribers: SubscriberRegistry,
    persist_warning: Option<PersistError>,
}

impl<B: SnapshotBackend> ContentStore<B> {
    /// Load the last snapshot through the adapter and take ownership of it.
    pub fn open(adapter: PersistenceAdapter<B>) -> Self {
        let (config, sections) = adapter.load();
        info!(sections = sections.len(), "content store opened");
        Self {
            config,
            sections,
            adapter,
            subscribers: SubscriberRegistry::new(),
            persist_warning: None,
        }
    }

    // ===== Reads =====

    /// The current site configuration. Callers must treat it as an
    /// immutable snapshot.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The current sections in display order.
    pub fn sections(&self) -> &[SectionContent] {
        &self.sections
    }

    /// Look up one section by id.
    pub fn section(&self, id: &SectionId) -> Option<&SectionContent> {
        self.sections.iter().find(|section| &section.id == id)
    }

    // ===== Subscription =====

    /// Register a change listener, invoked once after every successful
    /// mutation. Multiple independent subscribers are supported;
    /// cancellation is explicit and idempotent.
    pub fn subscribe(&self, listener: impl FnMut(&ChangeEvent) + 'static) -> Subscription {
        self.subscribers.subscribe(listener)
    }

    // ===== Mutations =====

    /// Merge a partial update into the configuration. Fields absent from
    /// the patch are untouched.
    pub fn update_config(&mut self, patch: SiteConfigPatch) {
        patch.apply_to(&mut self.config);
        self.committed(ChangeEvent::ConfigChanged);
    }

    /// Append a section at the end of the display order.
    pub fn add_section(&mut self, section: SectionContent) -> Result<(), StoreError> {
        if self.section(&section.id).is_some() {
            return Err(StoreError::DuplicateSection(section.id));
        }
        let id = section.id.clone();
        self.sections.push(section);
        self.committed(ChangeEvent::SectionAdded(id));
        Ok(())
    }

    /// Merge a partial update into one section.
    pub fn update_section(
        &mut self,
        id: &SectionId,
        patch: SectionPatch,
    ) -> Result<(), StoreError> {
        let Some(section) = self.sections.iter_mut().find(|section| &section.id == id) else {
            return Err(StoreError::SectionNotFound(id.clone()));
        };
        patch.apply_to(section);
        self.committed(ChangeEvent::SectionUpdated(id.clone()));
        Ok(())
    }

    /// Remove one section. Re-adding the same id later creates a distinct
    /// entity; nothing of the removed section is retained.
    pub fn remove_section(&mut self, id: &SectionId) -> Result<(), StoreError> {
        let Some(position) = self.sections.iter().position(|section| &section.id == id) else {
            return Err(StoreError::SectionNotFound(id.clone()));
        };
        self.sections.remove(position);
        self.committed(ChangeEvent::SectionRemoved(id.clone()));
        Ok(())
    }

    /// Rearrange the display order. The id list must be an exact
    /// permutation of the current ids; anything else is rejected whole.
    pub fn reorder_sections(&mut self, order: &[SectionId]) -> Result<(), StoreError> {
        let mismatch = StoreError::ReorderMismatch {
            provided: order.len(),
            current: self.sections.len(),
        };
        if order.len() != self.sections.len() {
            return Err(mismatch);
        }
        let mut seen = HashSet::with_capacity(order.len());
        for id in order {
            if !seen.insert(id) || self.section(id).is_none() {
                return Err(mismatch);
            }
        }

        // Equal length, no duplicates, all present: an exact permutation.
        let mut current = std::mem::take(&mut self.sections);
        let mut reordered = Vec::with_capacity(order.len());
        for id in order {
            if let Some(position) = current.iter().position(|section| &section.id == id) {
                reordered.push(current.remove(position));
            }
        }
        debug_assert!(current.is_empty());
        self.sections = reordered;
        self.committed(ChangeEvent::SectionsReordered);
        Ok(())
    }

    /// Replace the whole content model (snapshot import or factory reset).
    pub fn replace_all(&mut self, config: SiteConfig, sections: Vec<SectionContent>) {
        self.config = config;
        self.sections = sections;
        self.committed(ChangeEvent::SnapshotReplaced);
    }

    // ===== Persistence warning channel =====

    /// The most recent write-through failure, if any. The in-memory state
    /// is still authoritative; this exists so the admin surface can show a
    /// durability warning.
    pub fn last_persist_warning(&self) -> Option<&PersistError> {
        self.persist_warning.as_ref()
    }

    /// Consume the pending durability warning.
    pub fn take_persist_warning(&mut self) -> Option<PersistError> {
        self.persist_warning.take()
    }

    /// Notify subscribers of a committed mutation, then write through.
    /// Subscribers run before durability is confirmed; a write failure
    /// never unwinds the already-applied change.
    fn committed(&mut self, event: ChangeEvent) {
        self.subscribers.notify(&event);
        match self.adapter.save(&self.config, &self.sections) {
            Ok(()) => {}
            Err(error) => {
                warn!(%error, "snapshot write failed; in-memory state kept");
                self.persist_warning = Some(error);
            }
        }
    }
}

impl<B> ContentStore<B> {
    /// Read access to the persistence adapter (the CLI exports through it).
    pub fn adapter(&self) -> &PersistenceAdapter<B> {
        &self.adapter
    }
}
