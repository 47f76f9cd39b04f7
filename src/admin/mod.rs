//! Single-secret admin gateway.
//!
//! The entire authorization model is one comparison against
//! `config.admin_password` — no sessions, tokens or roles; the site is a
//! single-operator, single-device editor. The gateway borrows the store
//! mutably for the duration of an editing interaction and re-exposes the
//! mutation API plus the durability-warning channel.

use crate::model::{
    PersistError, SectionContent, SectionId, SectionPatch, SiteConfig, SiteConfigPatch,
    StoreError,
};
use crate::persist::SnapshotBackend;
use crate::store::ContentStore;
use thiserror::Error;

/// Rejected admin access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    /// The supplied secret does not match `config.admin_password`.
    #[error("incorrect admin password")]
    IncorrectPassword,
}

/// Mutable access to the store, granted after the secret comparison.
pub struct AdminGateway<'a, B> {
    store: &'a mut ContentStore<B>,
}

impl<B> core::fmt::Debug for AdminGateway<'_, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AdminGateway").finish_non_exhaustive()
    }
}

impl<B: SnapshotBackend> ContentStore<B> {
    /// Compare the secret and, on success, hand out the mutation surface.
    pub fn admin(&mut self, password: &str) -> Result<AdminGateway<'_, B>, AdminError> {
        if password == self.config().admin_password {
            Ok(AdminGateway { store: self })
        } else {
            Err(AdminError::IncorrectPassword)
        }
    }
}

impl<B: SnapshotBackend> AdminGateway<'_, B> {
    /// See [`ContentStore::config`].
    pub fn config(&self) -> &SiteConfig {
        self.store.config()
    }

    /// See [`ContentStore::sections`].
    pub fn sections(&self) -> &[SectionContent] {
        self.store.sections()
    }

    /// See [`ContentStore::update_config`].
    pub fn update_config(&mut self, patch: SiteConfigPatch) {
        self.store.update_config(patch);
    }

    /// See [`ContentStore::add_section`].
    pub fn add_section(&mut self, section: SectionContent) -> Result<(), StoreError> {
        self.store.add_section(section)
    }

    /// See [`ContentStore::update_section`].
    pub fn update_section(
        &mut self,
        id: &SectionId,
        patch: SectionPatch,
    ) -> Result<(), StoreError> {
        self.store.update_section(id, patch)
    }

    /// See [`ContentStore::remove_section`].
    pub fn remove_section(&mut self, id: &SectionId) -> Result<(), StoreError> {
        self.store.remove_section(id)
    }

    /// See [`ContentStore::reorder_sections`].
    pub fn reorder_sections(&mut self, order: &[SectionId]) -> Result<(), StoreError> {
        self.store.reorder_sections(order)
    }

    /// See [`ContentStore::replace_all`].
    pub fn replace_all(&mut self, config: SiteConfig, sections: Vec<SectionContent>) {
        self.store.replace_all(config, sections)
    }

    /// See [`ContentStore::take_persist_warning`]. Durability warnings are
    /// surfaced only here; pages never see them.
    pub fn take_persist_warning(&mut self) -> Option<PersistError> {
        self.store.take_persist_warning()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::{MemoryBackend, PersistenceAdapter};

    fn open_default() -> ContentStore<MemoryBackend> {
        ContentStore::open(PersistenceAdapter::new(MemoryBackend::new()))
    }

    #[test]
    fn wrong_password_is_rejected() {
        let mut store = open_default();
        assert_eq!(
            store.admin("not-the-password").unwrap_err(),
            AdminError::IncorrectPassword
        );
    }

    #[test]
    fn default_password_grants_access() {
        let mut store = open_default();
        assert!(store.admin("admin").is_ok());
    }

    #[test]
    fn gateway_mutations_reach_the_store() {
        let mut store = open_default();
        {
            let mut gateway = store.admin("admin").unwrap();
            gateway.update_config(SiteConfigPatch {
                home_title: Some("Edited via admin".into()),
                ..SiteConfigPatch::default()
            });
        }
        assert_eq!(store.config().home_title, "Edited via admin");
    }

    #[test]
    fn changing_the_password_invalidates_the_old_one() {
        let mut store = open_default();
        store
            .admin("admin")
            .unwrap()
            .update_config(SiteConfigPatch {
                admin_password: Some("new-secret".into()),
                ..SiteConfigPatch::default()
            });
        assert!(store.admin("admin").is_err());
        assert!(store.admin("new-secret").is_ok());
    }
}
