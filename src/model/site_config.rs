//! Site-wide configuration singleton and its partial-update patch.
//!
//! `SiteConfig` holds everything the operator can edit that is not part of
//! the section hierarchy: branding, home-page copy, contacts, booking link,
//! SEO fields, the injectable head script, the admin secret and footer text.
//!
//! Every field has a schema default, so a page never observes a missing
//! value: a snapshot written by an older schema acquires defaults for any
//! field it lacks when merged through [`SiteConfigPatch`].

use serde::{Deserialize, Serialize};

/// Fallback document title used when `home_title` is empty.
pub const DEFAULT_SITE_TITLE: &str = "Albergo Santa Chiara";

/// Global site configuration. Singleton: created with defaults at first
/// load, mutated only through the content store, never deleted.
///
/// Optional string fields (`logo_white_url`, `booking_url`, the social
/// links, `custom_head_script`) use the empty string as "absent".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// Primary logo asset URL.
    pub logo_url: String,
    /// Dedicated white logo for dark backgrounds; empty when none exists.
    pub logo_white_url: String,
    /// Allow CSS-filter recoloring of the primary logo on dark backgrounds.
    pub enable_logo_inversion: bool,
    /// The logo asset has an opaque white box that must be blended away.
    pub logo_has_white_background: bool,

    /// Home hero image URL.
    pub home_hero_url: String,
    /// Target of the hero call-to-action link.
    pub home_cta_url: String,
    /// Main home title; the first line also becomes the document title.
    pub home_title: String,
    /// Small line shown above the home title.
    pub home_eyebrow: String,
    /// Editable hero description paragraph.
    pub home_hero_text: String,

    /// Contact phone number shown in the footer.
    pub contact_phone: String,
    /// Contact e-mail address shown in the footer.
    pub contact_email: String,
    /// Street address shown in the footer.
    pub contact_address: String,

    /// Title of the home philosophy block.
    pub home_philosophy_title: String,
    /// Body of the home philosophy block.
    pub home_philosophy_text: String,
    /// Title of the home call-to-action block.
    pub home_cta_title: String,
    /// Body of the home call-to-action block.
    pub home_cta_text: String,
    /// Label of the home call-to-action button.
    pub home_cta_button_label: String,

    /// External booking engine URL for the "book" buttons; empty disables them.
    pub booking_url: String,
    /// Meta description for search engines.
    pub seo_description: String,
    /// Raw script injected into the document head (booking widget,
    /// analytics). Empty means nothing is injected.
    pub custom_head_script: String,
    /// Shared secret compared before any mutation through the admin surface.
    pub admin_password: String,
    /// Editable footer blurb.
    pub footer_text: String,

    /// Instagram profile URL; empty hides the icon.
    pub social_instagram: String,
    /// Facebook page URL; empty hides the icon.
    pub social_facebook: String,
    /// Newsletter button label; empty hides the button.
    pub newsletter_text: String,
    /// Copyright line.
    pub copyright_text: String,
}

impl SiteConfig {
    /// Whether a dedicated white logo asset is configured.
    pub fn has_white_logo(&self) -> bool {
        !self.logo_white_url.is_empty()
    }

    /// Consume a patch, replacing exactly the fields it carries.
    pub fn apply(&mut self, patch: SiteConfigPatch) {
        patch.apply_to(self);
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            logo_url: "/assets/logo.svg".into(),
            logo_white_url: String::new(),
            enable_logo_inversion: true,
            logo_has_white_background: false,
            home_hero_url: "/assets/hero.jpg".into(),
            home_cta_url: "/section/rooms".into(),
            home_title: "A quiet stay by the sea".into(),
            home_eyebrow: "Boutique hotel & restaurant".into(),
            home_hero_text: "Rooms, seasonal cooking and slow mornings a short walk from the shore."
                .into(),
            contact_phone: "+39 06 000 0000".into(),
            contact_email: "info@albergosantachiara.example".into(),
            contact_address: "Via del Porto 1, Maccarese".into(),
            home_philosophy_title: "Our philosophy".into(),
            home_philosophy_text:
                "A small family house where the kitchen follows the garden and the day follows the tide."
                    .into(),
            home_cta_title: "Plan your stay".into(),
            home_cta_text: "Check availability for your dates or write to us directly.".into(),
            home_cta_button_label: "Book now".into(),
            booking_url: String::new(),
            seo_description:
                "Boutique hotel with restaurant and garden, a short walk from the sea.".into(),
            custom_head_script: String::new(),
            admin_password: "admin".into(),
            footer_text: "Family run since 1962. Open all year.".into(),
            social_instagram: String::new(),
            social_facebook: String::new(),
            newsletter_text: "Join the newsletter".into(),
            copyright_text: "\u{a9} Albergo Santa Chiara. All rights reserved.".into(),
        }
    }
}

/// Partial update for [`SiteConfig`].
///
/// Every field mirrors a config field as an `Option`; `None` means "leave
/// unchanged". The same type performs the load-time default-merge: a stored
/// snapshot deserializes into a patch, which is then applied over
/// `SiteConfig::default()` so fields introduced after the snapshot was
/// written silently acquire their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfigPatch {
    /// See [`SiteConfig::logo_url`].
    pub logo_url: Option<String>,
    /// See [`SiteConfig::logo_white_url`].
    pub logo_white_url: Option<String>,
    /// See [`SiteConfig::enable_logo_inversion`].
    pub enable_logo_inversion: Option<bool>,
    /// See [`SiteConfig::logo_has_white_background`].
    pub logo_has_white_background: Option<bool>,
    /// See [`SiteConfig::home_hero_url`].
    pub home_hero_url: Option<String>,
    /// See [`SiteConfig::home_cta_url`].
    pub home_cta_url: Option<String>,
    /// See [`SiteConfig::home_title`].
    pub home_title: Option<String>,
    /// See [`SiteConfig::home_eyebrow`].
    pub home_eyebrow: Option<String>,
    /// See [`SiteConfig::home_hero_text`].
    pub home_hero_text: Option<String>,
    /// See [`SiteConfig::contact_phone`].
    pub contact_phone: Option<String>,
    /// See [`SiteConfig::contact_email`].
    pub contact_email: Option<String>,
    /// See [`SiteConfig::contact_address`].
    pub contact_address: Option<String>,
    /// See [`SiteConfig::home_philosophy_title`].
    pub home_philosophy_title: Option<String>,
    /// See [`SiteConfig::home_philosophy_text`].
    pub home_philosophy_text: Option<String>,
    /// See [`SiteConfig::home_cta_title`].
    pub home_cta_title: Option<String>,
    /// See [`SiteConfig::home_cta_text`].
    pub home_cta_text: Option<String>,
    /// See [`SiteConfig::home_cta_button_label`].
    pub home_cta_button_label: Option<String>,
    /// See [`SiteConfig::booking_url`].
    pub booking_url: Option<String>,
    /// See [`SiteConfig::seo_description`].
    pub seo_description: Option<String>,
    /// See [`SiteConfig::custom_head_script`].
    pub custom_head_script: Option<String>,
    /// See [`SiteConfig::admin_password`].
    pub admin_password: Option<String>,
    /// See [`SiteConfig::footer_text`].
    pub footer_text: Option<String>,
    /// See [`SiteConfig::social_instagram`].
    pub social_instagram: Option<String>,
    /// See [`SiteConfig::social_facebook`].
    pub social_facebook: Option<String>,
    /// See [`SiteConfig::newsletter_text`].
    pub newsletter_text: Option<String>,
    /// See [`SiteConfig::copyright_text`].
    pub copyright_text: Option<String>,
}

impl SiteConfigPatch {
    /// Replace exactly the fields carried by this patch; everything else is
    /// left byte-for-byte unchanged.
    pub fn apply_to(self, config: &mut SiteConfig) {
        if let Some(v) = self.logo_url {
            config.logo_url = v;
        }
        if let Some(v) = self.logo_white_url {
            config.logo_white_url = v;
        }
        if let Some(v) = self.enable_logo_inversion {
            config.enable_logo_inversion = v;
        }
        if let Some(v) = self.logo_has_white_background {
            config.logo_has_white_background = v;
        }
        if let Some(v) = self.home_hero_url {
            config.home_hero_url = v;
        }
        if let Some(v) = self.home_cta_url {
            config.home_cta_url = v;
        }
        if let Some(v) = self.home_title {
            config.home_title = v;
        }
        if let Some(v) = self.home_eyebrow {
            config.home_eyebrow = v;
        }
        if let Some(v) = self.home_hero_text {
            config.home_hero_text = v;
        }
        if let Some(v) = self.contact_phone {
            config.contact_phone = v;
        }
        if let Some(v) = self.contact_email {
            config.contact_email = v;
        }
        if let Some(v) = self.contact_address {
            config.contact_address = v;
        }
        if let Some(v) = self.home_philosophy_title {
            config.home_philosophy_title = v;
        }
        if let Some(v) = self.home_philosophy_text {
            config.home_philosophy_text = v;
        }
        if let Some(v) = self.home_cta_title {
            config.home_cta_title = v;
        }
        if let Some(v) = self.home_cta_text {
            config.home_cta_text = v;
        }
        if let Some(v) = self.home_cta_button_label {
            config.home_cta_button_label = v;
        }
        if let Some(v) = self.booking_url {
            config.booking_url = v;
        }
        if let Some(v) = self.seo_description {
            config.seo_description = v;
        }
        if let Some(v) = self.custom_head_script {
            config.custom_head_script = v;
        }
        if let Some(v) = self.admin_password {
            config.admin_password = v;
        }
        if let Some(v) = self.footer_text {
            config.footer_text = v;
        }
        if let Some(v) = self.social_instagram {
            config.social_instagram = v;
        }
        if let Some(v) = self.social_facebook {
            config.social_facebook = v;
        }
        if let Some(v) = self.newsletter_text {
            config.newsletter_text = v;
        }
        if let Some(v) = self.copyright_text {
            config.copyright_text = v;
        }
    }
}
