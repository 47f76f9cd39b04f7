//! The editable section hierarchy.
//!
//! A [`SectionContent`] is a navigable topic (rooms, restaurant,
//! experiences); its optional [`SubSection`]s carry typed payloads: plain
//! text blocks, a restaurant menu, or a room listing. The payload lives in
//! [`SubSectionBody`], an internally tagged enum, so "exactly one payload,
//! matching the `type` tag" holds by construction — readers match on the
//! body instead of defensively probing optional fields.

use crate::model::identifiers::{SectionId, SubSectionId};
use serde::{Deserialize, Serialize};

/// Icon selector for a section, drawn from the fixed set the layout shell
/// knows how to render. Wire names match the icon library's PascalCase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IconName {
    /// Bed icon, used for room sections.
    Bed,
    /// Gift package icon.
    Package,
    /// Sparkles icon.
    #[default]
    Sparkles,
    /// Cutlery icon, used for restaurant sections.
    Utensils,
    /// Wine glass icon.
    Wine,
    /// Cocktail icon.
    Martini,
    /// Seedling icon.
    Sprout,
    /// Hands-and-heart icon.
    HeartHandshake,
    /// Shopping bag icon.
    ShoppingBag,
    /// Calendar icon.
    Calendar,
    /// Map pin icon.
    MapPin,
}

/// One dish or drink on a menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuItem {
    /// Dish name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Display price (free-form, e.g. "18" or "from 12").
    pub price: String,
    /// Allergen codes; empty when not declared.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allergens: Vec<String>,
}

/// A titled group of menu items (e.g. "Starters").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuSection {
    /// Group title.
    pub title: String,
    /// Items in display order.
    pub items: Vec<MenuItem>,
}

/// One bookable room in a room listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomItem {
    /// Room name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Display price range (free-form, e.g. "120–160 / night").
    pub price_range: String,
    /// Feature list shown as bullet points.
    pub features: Vec<String>,
    /// Primary image URL.
    pub image_url: String,
    /// Extra gallery images; empty when only the primary exists.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// Room-specific booking URL; empty falls back to the site-wide one.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub booking_url: String,
}

/// Typed payload of a subsection, tagged by `type` on the wire.
///
/// `standard` and `packages` share the text-block shape; `menu` and `rooms`
/// carry structured listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SubSectionBody {
    /// Free-form text paragraphs.
    Standard {
        /// Paragraphs in display order.
        #[serde(default)]
        content: Vec<String>,
    },
    /// Restaurant or wine menu.
    Menu {
        /// Menu groups in display order.
        #[serde(default)]
        menu: Vec<MenuSection>,
    },
    /// Room listing.
    Rooms {
        /// Rooms in display order.
        #[serde(default)]
        rooms: Vec<RoomItem>,
    },
    /// Package deals, rendered like standard text blocks.
    Packages {
        /// Paragraphs in display order.
        #[serde(default)]
        content: Vec<String>,
    },
}

impl SubSectionBody {
    /// The wire tag of this payload.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Standard { .. } => "standard",
            Self::Menu { .. } => "menu",
            Self::Rooms { .. } => "rooms",
            Self::Packages { .. } => "packages",
        }
    }
}

/// A nested, typed piece of a section (rendered as a tab or sub-page).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubSection {
    /// Stable identifier within the parent section.
    pub id: SubSectionId,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// The typed payload, flattened so the wire keeps `type` at this level.
    #[serde(flatten)]
    pub body: SubSectionBody,
}

/// A top-level editable content section.
///
/// The collection in the store is keyed by `id`; insertion order is display
/// order. Every field other than `id` defaults independently, so a stored
/// element written by an older schema still deserializes whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionContent {
    /// Stable identifier, also the route parameter (`/section/<id>`).
    pub id: SectionId,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Subtitle shown under the title.
    #[serde(default)]
    pub subtitle: String,
    /// One-line teaser used on the home page.
    #[serde(default)]
    pub short_description: String,
    /// Full description paragraphs.
    #[serde(default)]
    pub full_description: Vec<String>,
    /// Hero image URL.
    #[serde(default)]
    pub image_url: String,
    /// Icon selector.
    #[serde(default)]
    pub icon_name: IconName,
    /// Flat detail list (amenities, opening hours); empty when unused.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    /// Ordered nested subsections; empty when the section is flat.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_sections: Vec<SubSection>,
}

/// Partial update for one [`SectionContent`]; `None` leaves a field
/// unchanged. The `id` itself is not patchable — remove and re-add instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionPatch {
    /// See [`SectionContent::title`].
    pub title: Option<String>,
    /// See [`SectionContent::subtitle`].
    pub subtitle: Option<String>,
    /// See [`SectionContent::short_description`].
    pub short_description: Option<String>,
    /// See [`SectionContent::full_description`].
    pub full_description: Option<Vec<String>>,
    /// See [`SectionContent::image_url`].
    pub image_url: Option<String>,
    /// See [`SectionContent::icon_name`].
    pub icon_name: Option<IconName>,
    /// See [`SectionContent::details`].
    pub details: Option<Vec<String>>,
    /// See [`SectionContent::sub_sections`].
    pub sub_sections: Option<Vec<SubSection>>,
}

impl SectionPatch {
    /// Replace exactly the fields carried by this patch.
    pub fn apply_to(self, section: &mut SectionContent) {
        if let Some(v) = self.title {
            section.title = v;
        }
        if let Some(v) = self.subtitle {
            section.subtitle = v;
        }
        if let Some(v) = self.short_description {
            section.short_description = v;
        }
        if let Some(v) = self.full_description {
            section.full_description = v;
        }
        if let Some(v) = self.image_url {
            section.image_url = v;
        }
        if let Some(v) = self.icon_name {
            section.icon_name = v;
        }
        if let Some(v) = self.details {
            section.details = v;
        }
        if let Some(v) = self.sub_sections {
            section.sub_sections = v;
        }
    }
}

/// A navigation entry consumed by the layout shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Link label.
    pub label: String,
    /// Route path (e.g. `/section/rooms`).
    pub path: String,
}

/// Schema-default section set for a fresh or unrecoverable install: rooms,
/// restaurant and experiences, each with enough seeded content to render a
/// whole site before the operator's first edit.
pub fn default_sections() -> Vec<SectionContent> {
    let id = |raw: &str| SectionId::new(raw).expect("seed ids are non-empty");
    let sub_id = |raw: &str| SubSectionId::new(raw).expect("seed ids are non-empty");

    vec![
        SectionContent {
            id: id("rooms"),
            title: "Rooms & Suites".into(),
            subtitle: "Eleven rooms, no two alike".into(),
            short_description: "Quiet rooms overlooking the garden or the sea.".into(),
            full_description: vec![
                "Each room keeps the bones of the old house: terracotta floors, linen curtains, windows that actually open.".into(),
            ],
            image_url: "/assets/sections/rooms.jpg".into(),
            icon_name: IconName::Bed,
            details: vec!["Breakfast included".into(), "Free parking".into()],
            sub_sections: vec![SubSection {
                id: sub_id("our-rooms"),
                title: "Our rooms".into(),
                body: SubSectionBody::Rooms {
                    rooms: vec![
                        RoomItem {
                            name: "Garden Double".into(),
                            description: "Ground floor, opening onto the citrus garden.".into(),
                            price_range: "110–140".into(),
                            features: vec!["Queen bed".into(), "Garden terrace".into()],
                            image_url: "/assets/rooms/garden-double.jpg".into(),
                            ..RoomItem::default()
                        },
                        RoomItem {
                            name: "Sea View Suite".into(),
                            description: "Top floor, with a reading corner under the eaves.".into(),
                            price_range: "180–230".into(),
                            features: vec!["King bed".into(), "Sea view".into(), "Bathtub".into()],
                            image_url: "/assets/rooms/sea-view-suite.jpg".into(),
                            ..RoomItem::default()
                        },
                    ],
                },
            }],
        },
        SectionContent {
            id: id("restaurant"),
            title: "Restaurant".into(),
            subtitle: "The kitchen follows the garden".into(),
            short_description: "Seasonal cooking, most of it grown a few steps away.".into(),
            full_description: vec![
                "Dinner is a short menu that changes with the market; lunch is whatever the garden insists on.".into(),
            ],
            image_url: "/assets/sections/restaurant.jpg".into(),
            icon_name: IconName::Utensils,
            details: vec!["Open 19:30–22:30".into(), "Closed Mondays".into()],
            sub_sections: vec![SubSection {
                id: sub_id("dinner-menu"),
                title: "Dinner".into(),
                body: SubSectionBody::Menu {
                    menu: vec![MenuSection {
                        title: "Starters".into(),
                        items: vec![
                            MenuItem {
                                name: "Garden tomatoes, burrata".into(),
                                description: "With basil oil and toasted bread.".into(),
                                price: "14".into(),
                                allergens: vec!["milk".into(), "gluten".into()],
                            },
                            MenuItem {
                                name: "Marinated anchovies".into(),
                                description: "Lemon, parsley, new potatoes.".into(),
                                price: "12".into(),
                                allergens: vec!["fish".into()],
                            },
                        ],
                    }],
                },
            }],
        },
        SectionContent {
            id: id("experiences"),
            title: "Experiences".into(),
            subtitle: "Days worth staying for".into(),
            short_description: "Bicycles, boats and the long way to the lighthouse.".into(),
            full_description: vec![
                "We keep a small fleet of bicycles and know who to call for a morning on the water.".into(),
            ],
            image_url: "/assets/sections/experiences.jpg".into(),
            icon_name: IconName::Sparkles,
            details: Vec::new(),
            sub_sections: vec![SubSection {
                id: sub_id("around-us"),
                title: "Around us".into(),
                body: SubSectionBody::Standard {
                    content: vec![
                        "The nature reserve starts at the end of the lane; the lighthouse walk takes about two hours.".into(),
                    ],
                },
            }],
        },
    ]
}
