//! Change-triggered synchronization of the document head.
//!
//! Abstractly: on every change to the site configuration, run an idempotent
//! synchronization routine against an external resource — the document
//! title, the SEO meta tag, and the injected head script. The shell calls
//! [`HeadSync::sync`] from its store subscription; the routine skips any
//! resource whose value is unchanged since the last round.
//!
//! The script injection is idempotent in one direction only: once injected
//! it is never removed, and an emptied config value leaves the last
//! injected content in place.

use crate::model::{SiteConfig, DEFAULT_SITE_TITLE};

/// The mutable document-head resource the engine synchronizes against.
///
/// The browser shell implements this over the real DOM; tests use a
/// recording fake.
pub trait DocumentHead {
    /// Replace the document title.
    fn set_title(&mut self, title: &str);
    /// Create or update the SEO meta description.
    fn set_meta_description(&mut self, description: &str);
    /// Create the injected script element on first call, replace its
    /// content on later calls.
    fn upsert_script(&mut self, script: &str);
}

/// Idempotent synchronizer between a [`SiteConfig`] and a [`DocumentHead`].
pub struct HeadSync<H> {
    head: H,
    last_title: Option<String>,
    last_description: Option<String>,
    last_script: Option<String>,
}

impl<H: DocumentHead> HeadSync<H> {
    /// Wrap a head resource; nothing is written until the first `sync`.
    pub fn new(head: H) -> Self {
        Self {
            head,
            last_title: None,
            last_description: None,
            last_script: None,
        }
    }

    /// Bring the head resource up to date with the given configuration.
    ///
    /// The title is the first line of `home_title`, falling back to the
    /// schema default when empty. The meta description always tracks
    /// `seo_description`. The head script is injected only while
    /// `custom_head_script` is non-empty and is never removed.
    pub fn sync(&mut self, config: &SiteConfig) {
        let title = config
            .home_title
            .lines()
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .unwrap_or(DEFAULT_SITE_TITLE)
            .to_string();
        if self.last_title.as_deref() != Some(&title) {
            self.head.set_title(&title);
            self.last_title = Some(title);
        }

        if self.last_description.as_deref() != Some(&config.seo_description) {
            self.head.set_meta_description(&config.seo_description);
            self.last_description = Some(config.seo_description.clone());
        }

        if !config.custom_head_script.is_empty()
            && self.last_script.as_deref() != Some(&config.custom_head_script)
        {
            self.head.upsert_script(&config.custom_head_script);
            self.last_script = Some(config.custom_head_script.clone());
        }
    }

    /// The wrapped head resource.
    pub fn head(&self) -> &H {
        &self.head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every call so tests can assert on idempotence.
    #[derive(Default)]
    struct RecordingHead {
        titles: Vec<String>,
        descriptions: Vec<String>,
        scripts: Vec<String>,
    }

    impl DocumentHead for RecordingHead {
        fn set_title(&mut self, title: &str) {
            self.titles.push(title.to_string());
        }
        fn set_meta_description(&mut self, description: &str) {
            self.descriptions.push(description.to_string());
        }
        fn upsert_script(&mut self, script: &str) {
            self.scripts.push(script.to_string());
        }
    }

    #[test]
    fn title_is_first_line_of_home_title() {
        let mut sync = HeadSync::new(RecordingHead::default());
        let config = SiteConfig {
            home_title: "A quiet stay\nby the sea".into(),
            ..SiteConfig::default()
        };
        sync.sync(&config);
        assert_eq!(sync.head().titles, ["A quiet stay"]);
    }

    #[test]
    fn empty_home_title_falls_back_to_default_site_title() {
        let mut sync = HeadSync::new(RecordingHead::default());
        let config = SiteConfig {
            home_title: String::new(),
            ..SiteConfig::default()
        };
        sync.sync(&config);
        assert_eq!(sync.head().titles, [DEFAULT_SITE_TITLE]);
    }

    #[test]
    fn repeated_sync_with_unchanged_config_writes_nothing() {
        let mut sync = HeadSync::new(RecordingHead::default());
        let config = SiteConfig::default();
        sync.sync(&config);
        sync.sync(&config);
        sync.sync(&config);
        assert_eq!(sync.head().titles.len(), 1);
        assert_eq!(sync.head().descriptions.len(), 1);
    }

    #[test]
    fn script_is_injected_once_and_kept_in_sync() {
        let mut sync = HeadSync::new(RecordingHead::default());
        let mut config = SiteConfig::default();

        sync.sync(&config);
        assert!(sync.head().scripts.is_empty(), "empty script: no injection");

        config.custom_head_script = "window.widget = 1;".into();
        sync.sync(&config);
        sync.sync(&config);
        assert_eq!(sync.head().scripts, ["window.widget = 1;"]);

        config.custom_head_script = "window.widget = 2;".into();
        sync.sync(&config);
        assert_eq!(
            sync.head().scripts,
            ["window.widget = 1;", "window.widget = 2;"]
        );
    }

    #[test]
    fn emptied_script_value_leaves_injection_in_place() {
        let mut sync = HeadSync::new(RecordingHead::default());
        let mut config = SiteConfig {
            custom_head_script: "window.widget = 1;".into(),
            ..SiteConfig::default()
        };
        sync.sync(&config);
        config.custom_head_script = String::new();
        sync.sync(&config);
        // No removal call exists on the trait; the last content stands.
        assert_eq!(sync.head().scripts, ["window.widget = 1;"]);
    }

    #[test]
    fn description_tracks_config_changes() {
        let mut sync = HeadSync::new(RecordingHead::default());
        let mut config = SiteConfig::default();
        sync.sync(&config);
        config.seo_description = "New description".into();
        sync.sync(&config);
        assert_eq!(sync.head().descriptions.last().unwrap(), "New description");
    }
}
