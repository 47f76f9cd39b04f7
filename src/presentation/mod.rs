//! Pure presentation resolvers for the layout shell.
//!
//! The header, footer and logo styling is a finite state machine over three
//! content flags and the transient viewport context. Every combination is a
//! distinct visual contract, so the resolution is written as one exhaustive
//! match — no chained conditionals, no hidden branches — and is trivially
//! testable without any rendering layer.
//!
//! Two independent resolutions exist:
//! - header chrome (background + text tone), a function of route and scroll
//!   only;
//! - logo treatment (asset + filter + blend), a function of the visual
//!   context and the logo flags.
//!
//! They are combined only at render time.

use crate::model::SiteConfig;

/// The two mutually exclusive visual regimes.
///
/// `Dark` is the transparent hero overlay (home route, not scrolled);
/// `Light` is the opaque scrolled/non-home background. The footer always
/// renders in `Dark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualContext {
    /// Transparent header over the dark hero image.
    Dark,
    /// Opaque light header background.
    Light,
}

/// Which logo asset to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoAsset {
    /// The primary logo (`logo_url`).
    Primary,
    /// The dedicated white logo (`logo_white_url`).
    White,
}

/// CSS filter applied to the logo image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoFilter {
    /// No filter.
    None,
    /// `invert(1)`: flips a white-box logo to white-on-black so the box can
    /// be blended away with [`BlendMode::Screen`].
    Invert,
    /// `brightness(0) invert(1)`: recolors a transparent dark logo to a
    /// white silhouette.
    SilhouetteWhite,
}

/// CSS blend mode applied to the logo image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// No blending.
    Normal,
    /// `screen`: removes an (inverted) black box against a dark background.
    Screen,
    /// `multiply`: removes a white box against a light background.
    Multiply,
}

/// Resolved logo rendering for one context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoTreatment {
    /// Which asset to load.
    pub asset: LogoAsset,
    /// Filter to apply.
    pub filter: LogoFilter,
    /// Blend mode to apply.
    pub blend: BlendMode,
}

impl LogoTreatment {
    /// The URL of the resolved asset within the given configuration.
    pub fn source_url<'a>(&self, config: &'a SiteConfig) -> &'a str {
        match self.asset {
            LogoAsset::Primary => &config.logo_url,
            LogoAsset::White => &config.logo_white_url,
        }
    }
}

/// Header background mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderBackground {
    /// Transparent over the hero.
    Transparent,
    /// Opaque light background.
    Solid,
}

/// Header text tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTone {
    /// White text over the hero.
    Light,
    /// Dark text on the opaque background.
    Dark,
}

/// Resolved header chrome, independent of the logo resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderChrome {
    /// Background mode.
    pub background: HeaderBackground,
    /// Text tone.
    pub text: TextTone,
}

/// The three content flags feeding the logo table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoFlags {
    /// The logo asset has an opaque white box.
    pub has_white_background: bool,
    /// Filter recoloring is allowed as a fallback.
    pub enable_inversion: bool,
    /// A dedicated white logo asset exists.
    pub white_asset_available: bool,
}

impl LogoFlags {
    /// Extract the flags from the live configuration.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            has_white_background: config.logo_has_white_background,
            enable_inversion: config.enable_logo_inversion,
            white_asset_available: config.has_white_logo(),
        }
    }
}

/// Visual context of the header for the given route and scroll state.
pub fn header_visual_context(is_home_route: bool, is_scrolled: bool) -> VisualContext {
    if is_home_route && !is_scrolled {
        VisualContext::Dark
    } else {
        VisualContext::Light
    }
}

/// Header background and text tone. `scrolled ∨ ¬home` forces the opaque
/// light background with dark text; only the unscrolled home hero is
/// transparent with white text.
pub fn resolve_header_chrome(is_home_route: bool, is_scrolled: bool) -> HeaderChrome {
    match header_visual_context(is_home_route, is_scrolled) {
        VisualContext::Dark => HeaderChrome {
            background: HeaderBackground::Transparent,
            text: TextTone::Light,
        },
        VisualContext::Light => HeaderChrome {
            background: HeaderBackground::Solid,
            text: TextTone::Dark,
        },
    }
}

/// The full logo state table. Exhaustive over
/// (context × white-box flag × inversion flag × white-asset presence).
fn resolve_logo(context: VisualContext, flags: LogoFlags) -> LogoTreatment {
    use BlendMode::{Multiply, Normal, Screen};
    use LogoAsset::{Primary, White};
    use VisualContext::{Dark, Light};

    match (
        context,
        flags.has_white_background,
        flags.enable_inversion,
        flags.white_asset_available,
    ) {
        // White-box logo on dark: invert to a black box, screen it away.
        // A dark context still prefers the dedicated white asset when one
        // exists; the white-box treatment applies to whichever asset loads.
        (Dark, true, _, false) => LogoTreatment {
            asset: Primary,
            filter: LogoFilter::Invert,
            blend: Screen,
        },
        (Dark, true, _, true) => LogoTreatment {
            asset: White,
            filter: LogoFilter::Invert,
            blend: Screen,
        },
        // Transparent logo on dark with a dedicated white asset: use it
        // unfiltered, whatever the inversion flag says.
        (Dark, false, _, true) => LogoTreatment {
            asset: White,
            filter: LogoFilter::None,
            blend: Normal,
        },
        // Transparent logo on dark, no white asset: recolor if allowed.
        (Dark, false, true, false) => LogoTreatment {
            asset: Primary,
            filter: LogoFilter::SilhouetteWhite,
            blend: Normal,
        },
        (Dark, false, false, false) => LogoTreatment {
            asset: Primary,
            filter: LogoFilter::None,
            blend: Normal,
        },
        // White-box logo on light: multiply the white box away.
        (Light, true, _, _) => LogoTreatment {
            asset: Primary,
            filter: LogoFilter::None,
            blend: Multiply,
        },
        // Light context is otherwise always filter-free.
        (Light, false, _, _) => LogoTreatment {
            asset: Primary,
            filter: LogoFilter::None,
            blend: Normal,
        },
    }
}

/// Header logo treatment for the given route, scroll state and flags.
pub fn resolve_header_logo(
    is_home_route: bool,
    is_scrolled: bool,
    flags: LogoFlags,
) -> LogoTreatment {
    resolve_logo(header_visual_context(is_home_route, is_scrolled), flags)
}

/// Footer logo treatment. The footer is always a dark context and never
/// sees route or scroll state.
pub fn resolve_footer_logo(flags: LogoFlags) -> LogoTreatment {
    resolve_logo(VisualContext::Dark, flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(white_bg: bool, invert: bool, white_asset: bool) -> LogoFlags {
        LogoFlags {
            has_white_background: white_bg,
            enable_inversion: invert,
            white_asset_available: white_asset,
        }
    }

    // ===== Header chrome =====

    #[test]
    fn home_unscrolled_is_transparent_with_light_text() {
        let chrome = resolve_header_chrome(true, false);
        assert_eq!(chrome.background, HeaderBackground::Transparent);
        assert_eq!(chrome.text, TextTone::Light);
    }

    #[test]
    fn scroll_or_leaving_home_forces_solid_dark_chrome() {
        for (home, scrolled) in [(true, true), (false, false), (false, true)] {
            let chrome = resolve_header_chrome(home, scrolled);
            assert_eq!(chrome.background, HeaderBackground::Solid);
            assert_eq!(chrome.text, TextTone::Dark);
        }
    }

    // ===== Logo table: dark context =====

    #[test]
    fn dark_white_box_inverts_and_screens() {
        let t = resolve_header_logo(true, false, flags(true, false, false));
        assert_eq!(t.filter, LogoFilter::Invert);
        assert_eq!(t.blend, BlendMode::Screen);
        assert_eq!(t.asset, LogoAsset::Primary);
    }

    #[test]
    fn dark_with_white_asset_uses_it_unfiltered() {
        let t = resolve_header_logo(true, false, flags(false, true, true));
        assert_eq!(
            t,
            LogoTreatment {
                asset: LogoAsset::White,
                filter: LogoFilter::None,
                blend: BlendMode::Normal,
            }
        );
        // Same even when inversion is disabled: asset presence wins.
        let t = resolve_header_logo(true, false, flags(false, false, true));
        assert_eq!(t.asset, LogoAsset::White);
        assert_eq!(t.filter, LogoFilter::None);
    }

    #[test]
    fn dark_inversion_fallback_recolors_silhouette() {
        let t = resolve_header_logo(true, false, flags(false, true, false));
        assert_eq!(t.filter, LogoFilter::SilhouetteWhite);
        assert_eq!(t.blend, BlendMode::Normal);
    }

    #[test]
    fn dark_without_any_treatment_is_plain() {
        let t = resolve_header_logo(true, false, flags(false, false, false));
        assert_eq!(t.filter, LogoFilter::None);
        assert_eq!(t.blend, BlendMode::Normal);
        assert_eq!(t.asset, LogoAsset::Primary);
    }

    // ===== Logo table: light context =====

    #[test]
    fn light_white_box_multiplies() {
        let t = resolve_header_logo(false, false, flags(true, false, false));
        assert_eq!(t.blend, BlendMode::Multiply);
        assert_eq!(t.filter, LogoFilter::None);
    }

    #[test]
    fn light_context_is_filter_free_except_multiply() {
        for invert in [false, true] {
            for white_asset in [false, true] {
                let t = resolve_header_logo(false, false, flags(false, invert, white_asset));
                assert_eq!(t.filter, LogoFilter::None);
                assert_eq!(t.blend, BlendMode::Normal);
                assert_eq!(t.asset, LogoAsset::Primary);
            }
        }
    }

    #[test]
    fn scrolling_home_flips_context_to_light() {
        // Inversion enabled, but scroll turns the context light: no filter.
        let t = resolve_header_logo(true, true, flags(false, true, false));
        assert_eq!(t.filter, LogoFilter::None);
    }

    // ===== Footer =====

    #[test]
    fn footer_always_prefers_white_asset() {
        let t = resolve_footer_logo(flags(false, false, true));
        assert_eq!(t.asset, LogoAsset::White);
        assert_eq!(t.filter, LogoFilter::None);
    }

    #[test]
    fn footer_matches_dark_header_for_every_flag_combination() {
        for white_bg in [false, true] {
            for invert in [false, true] {
                for white_asset in [false, true] {
                    let f = flags(white_bg, invert, white_asset);
                    assert_eq!(
                        resolve_footer_logo(f),
                        resolve_header_logo(true, false, f),
                        "footer is the dark-context column of the same table"
                    );
                }
            }
        }
    }

    // ===== Glue =====

    #[test]
    fn source_url_follows_the_resolved_asset() {
        let config = SiteConfig {
            logo_url: "/logo.svg".into(),
            logo_white_url: "/logo-white.svg".into(),
            ..SiteConfig::default()
        };
        let dark = resolve_header_logo(true, false, LogoFlags::from_config(&config));
        assert_eq!(dark.source_url(&config), "/logo-white.svg");
        let light = resolve_header_logo(false, false, LogoFlags::from_config(&config));
        assert_eq!(light.source_url(&config), "/logo.svg");
    }

    #[test]
    fn flags_derive_white_asset_presence_from_non_empty_url() {
        let mut config = SiteConfig::default();
        assert!(!LogoFlags::from_config(&config).white_asset_available);
        config.logo_white_url = "/logo-white.svg".into();
        assert!(LogoFlags::from_config(&config).white_asset_available);
    }
}
