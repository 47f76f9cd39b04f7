//! Property-based tests for store and persistence invariants.
//!
//! Properties validated:
//! 1. `update_config` is a field-by-field merge: carried fields replace,
//!    absent fields are byte-for-byte unchanged.
//! 2. `save` then `load` is the identity on valid content.
//! 3. `reorder_sections` accepts exactly the permutations of the current
//!    ids and rejects everything else unchanged.
//! 4. The light visual context is always filter-free except the
//!    white-box multiply case.

use albergo::model::{SectionId, SiteConfig, SiteConfigPatch};
use albergo::persist::{MemoryBackend, PersistenceAdapter};
use albergo::presentation::{resolve_header_logo, BlendMode, LogoFilter, LogoFlags};
use albergo::store::ContentStore;
use proptest::prelude::*;

fn open_default() -> ContentStore<MemoryBackend> {
    ContentStore::open(PersistenceAdapter::new(MemoryBackend::new()))
}

fn default_ids() -> Vec<SectionId> {
    albergo::model::default_sections()
        .into_iter()
        .map(|section| section.id)
        .collect()
}

// ===== Property 1: Partial config update is a pure merge =====

proptest! {
    #[test]
    fn update_config_replaces_carried_fields_and_nothing_else(
        home_title in proptest::option::of(any::<String>()),
        booking_url in proptest::option::of(any::<String>()),
        enable_inversion in proptest::option::of(any::<bool>()),
    ) {
        let mut store = open_default();
        let before = store.config().clone();
        let patch = SiteConfigPatch {
            home_title: home_title.clone(),
            booking_url: booking_url.clone(),
            enable_logo_inversion: enable_inversion,
            ..SiteConfigPatch::default()
        };
        store.update_config(patch);
        let after = store.config();

        prop_assert_eq!(
            &after.home_title,
            home_title.as_ref().unwrap_or(&before.home_title)
        );
        prop_assert_eq!(
            &after.booking_url,
            booking_url.as_ref().unwrap_or(&before.booking_url)
        );
        prop_assert_eq!(
            after.enable_logo_inversion,
            enable_inversion.unwrap_or(before.enable_logo_inversion)
        );
        // A sample of untouched fields stays identical.
        prop_assert_eq!(&after.contact_email, &before.contact_email);
        prop_assert_eq!(&after.admin_password, &before.admin_password);
        prop_assert_eq!(&after.footer_text, &before.footer_text);
    }
}

// ===== Property 2: save ∘ load = id =====

proptest! {
    #[test]
    fn load_after_save_is_identity(
        home_title in any::<String>(),
        seo_description in any::<String>(),
        footer_text in any::<String>(),
    ) {
        let mut config = SiteConfig::default();
        config.home_title = home_title;
        config.seo_description = seo_description;
        config.footer_text = footer_text;
        let sections = albergo::model::default_sections();

        let mut adapter = PersistenceAdapter::new(MemoryBackend::new());
        adapter.save(&config, &sections).unwrap();
        let (loaded_config, loaded_sections) = adapter.load();
        prop_assert_eq!(loaded_config, config);
        prop_assert_eq!(loaded_sections, sections);
    }
}

// ===== Property 3: reorder accepts exactly permutations =====

proptest! {
    #[test]
    fn any_permutation_of_current_ids_is_accepted(
        order in Just(default_ids()).prop_shuffle(),
    ) {
        let mut store = open_default();
        store.reorder_sections(&order).unwrap();
        let ids: Vec<SectionId> =
            store.sections().iter().map(|section| section.id.clone()).collect();
        prop_assert_eq!(ids, order);
    }

    #[test]
    fn dropping_one_id_is_rejected_unchanged(
        order in Just(default_ids()).prop_shuffle(),
        drop_at in 0usize..3,
    ) {
        let mut store = open_default();
        let before: Vec<SectionId> =
            store.sections().iter().map(|section| section.id.clone()).collect();

        let mut short = order;
        short.remove(drop_at % short.len());
        prop_assert!(store.reorder_sections(&short).is_err());

        let after: Vec<SectionId> =
            store.sections().iter().map(|section| section.id.clone()).collect();
        prop_assert_eq!(after, before, "rejected reorder must leave order unchanged");
    }

    #[test]
    fn duplicating_an_id_is_rejected_unchanged(
        order in Just(default_ids()).prop_shuffle(),
        dup_at in 0usize..3,
    ) {
        let mut store = open_default();
        let before = store.sections().to_vec();

        let mut with_dup = order;
        let dup = with_dup[dup_at % with_dup.len()].clone();
        let last = with_dup.len() - 1;
        with_dup[last] = dup;
        // Either the duplicate collides with the last slot's own id (making
        // the list a permutation again) or it must be rejected.
        if with_dup.iter().collect::<std::collections::HashSet<_>>().len() < with_dup.len() {
            prop_assert!(store.reorder_sections(&with_dup).is_err());
            prop_assert_eq!(store.sections(), before.as_slice());
        }
    }
}

// ===== Property 4: light context is filter-free except multiply =====

proptest! {
    #[test]
    fn light_context_never_filters(
        white_bg in any::<bool>(),
        invert in any::<bool>(),
        white_asset in any::<bool>(),
        scrolled in any::<bool>(),
        home in any::<bool>(),
    ) {
        // Restrict to light contexts.
        prop_assume!(scrolled || !home);
        let treatment = resolve_header_logo(home, scrolled, LogoFlags {
            has_white_background: white_bg,
            enable_inversion: invert,
            white_asset_available: white_asset,
        });
        prop_assert_eq!(treatment.filter, LogoFilter::None);
        if white_bg {
            prop_assert_eq!(treatment.blend, BlendMode::Multiply);
        } else {
            prop_assert_eq!(treatment.blend, BlendMode::Normal);
        }
    }
}
