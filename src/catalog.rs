//! Display data for every page of the site.
//!
//! Everything here is `'static` literal data compiled into the binary. No
//! record is created, mutated or destroyed at run time: pages read these
//! slices in source order and map them to markup. Nothing is sorted or
//! filtered on the way.
//!
//! Outbound channel values (Instagram, WhatsApp, email) are not literals;
//! they come from [`SiteConfig`] so one `site.toml` can point every CTA at
//! the right account. [`contact_methods`] builds the three contact cards
//! from it.

use crate::config::SiteConfig;
use serde::Serialize;

// ============================================================================
// Types
// ============================================================================

/// Badge shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tag {
    New,
    Bestseller,
}

impl Tag {
    pub fn label(self) -> &'static str {
        match self {
            Tag::New => "New",
            Tag::Bestseller => "Bestseller",
        }
    }

    /// BEM modifier used by the badge styles.
    pub fn modifier(self) -> &'static str {
        match self {
            Tag::New => "badge--new",
            Tag::Bestseller => "badge--bestseller",
        }
    }
}

/// Pastel background behind placeholder imagery.
///
/// Each variant maps to a `.swatch-*` rule in `static/style.css`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Swatch {
    Amber,
    Blue,
    Cyan,
    Green,
    Neutral,
    Orange,
    Pink,
    Purple,
    Rose,
    Sky,
    Teal,
    Yellow,
}

impl Swatch {
    pub fn class(self) -> &'static str {
        match self {
            Swatch::Amber => "swatch-amber",
            Swatch::Blue => "swatch-blue",
            Swatch::Cyan => "swatch-cyan",
            Swatch::Green => "swatch-green",
            Swatch::Neutral => "swatch-neutral",
            Swatch::Orange => "swatch-orange",
            Swatch::Pink => "swatch-pink",
            Swatch::Purple => "swatch-purple",
            Swatch::Rose => "swatch-rose",
            Swatch::Sky => "swatch-sky",
            Swatch::Teal => "swatch-teal",
            Swatch::Yellow => "swatch-yellow",
        }
    }
}

/// A product listing on a category page.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    /// Price in whole rupees.
    pub price: u32,
    pub description: &'static str,
    pub tag: Option<Tag>,
    pub swatch: Swatch,
}

/// Render a price the way every card shows it: `₹249`.
pub fn format_price(price: u32) -> String {
    format!("\u{20b9}{price}")
}

/// The three audience segments, each with its own category page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Women,
    Kids,
    Pets,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Women, Category::Kids, Category::Pets];

    /// Breadcrumb label and nav name.
    pub fn name(self) -> &'static str {
        match self {
            Category::Women => "Women",
            Category::Kids => "Kids",
            Category::Pets => "Pets",
        }
    }

    pub fn products(self) -> &'static [Product] {
        match self {
            Category::Women => WOMEN_PRODUCTS,
            Category::Kids => KIDS_PRODUCTS,
            Category::Pets => PET_PRODUCTS,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Category::Women => "Women's Collection",
            Category::Kids => "Kids Collection",
            Category::Pets => "Pet Jewelry",
        }
    }

    /// Browser tab title.
    pub fn page_title(self) -> &'static str {
        match self {
            Category::Women => "Women's Jewelry Collection",
            Category::Kids => "Kids Jewelry Collection",
            Category::Pets => "Pet Jewelry Collection",
        }
    }

    pub fn intro(self) -> &'static str {
        match self {
            Category::Women => {
                "Elegant, everyday jewelry that doesn't break the bank. \
                 From minimal pieces to statement makers."
            }
            Category::Kids => {
                "Playful, safe, and absolutely adorable. Jewelry that makes \
                 little ones smile."
            }
            Category::Pets => {
                "India's first fashion jewelry collection for your furry friends. \
                 Safe, comfortable, and absolutely adorable."
            }
        }
    }

    /// Placeholder glyph drawn where product photography will go.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Women => "\u{1f48e}",
            Category::Kids => "\u{1f98b}",
            Category::Pets => "\u{1f43e}",
        }
    }

    pub fn hero_swatch(self) -> Swatch {
        match self {
            Category::Women => Swatch::Rose,
            Category::Kids => Swatch::Sky,
            Category::Pets => Swatch::Amber,
        }
    }

    /// Filter labels shown under the hero. The first one renders as active.
    pub fn filters(self) -> &'static [&'static str] {
        match self {
            Category::Women => &["All", "Earrings", "Necklaces", "Bracelets", "Rings"],
            Category::Kids => &["All", "Bracelets", "Hair Accessories", "Necklaces", "Rings"],
            Category::Pets => &["All", "Dogs", "Cats", "New Arrivals"],
        }
    }
}

/// A collection tile linking to a category page.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionCard {
    pub category: Category,
    /// Short line used on the home page.
    pub blurb: &'static str,
    /// Longer copy used on the collections index.
    pub description: &'static str,
    pub icon: &'static str,
    /// Badge on the home page tile.
    pub home_badge: Option<&'static str>,
    /// Badge on the collections index tile.
    pub index_badge: Option<&'static str>,
    pub design_count: &'static str,
    pub swatch: Swatch,
}

/// Primary navigation entry.
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// A way to reach the shop, rendered as a card on the contact page.
#[derive(Debug, Clone, Serialize)]
pub struct ContactMethod {
    pub name: &'static str,
    pub description: &'static str,
    pub value: String,
    pub href: String,
    pub icon: &'static str,
    pub cta: &'static str,
}

/// One row of the pet size chart.
#[derive(Debug, Clone, Serialize)]
pub struct SizeRow {
    pub size: &'static str,
    pub neck: &'static str,
    pub breeds: &'static str,
    pub icon: &'static str,
}

/// Icon + title + copy tile (home "why choose us", about "values").
#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MeasurementStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tip {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub swatch: Swatch,
}

/// Shopping perk in the collections-index banner.
#[derive(Debug, Clone, Serialize)]
pub struct Perk {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub figure: &'static str,
    pub label: &'static str,
}

/// Input control kind for the order form.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Tel,
    Select {
        prompt: &'static str,
        options: &'static [(&'static str, &'static str)],
    },
    Textarea {
        rows: u8,
    },
}

/// One field of the order form.
#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    /// Used for both `id` and `name`.
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<&'static str>,
    /// Fields sharing a row on wide screens (city + pincode).
    pub paired: bool,
}

// ============================================================================
// Data
// ============================================================================

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Collections", href: "/collections/" },
    NavLink { label: "Pets", href: "/collections/pets/" },
    NavLink { label: "About", href: "/about/" },
    NavLink { label: "Size Guide", href: "/size-guide/" },
    NavLink { label: "Contact", href: "/contact/" },
];

pub const WOMEN_PRODUCTS: &[Product] = &[
    Product {
        id: "women-001",
        name: "Pearl Drop Earrings",
        price: 249,
        description: "Classic pearl drops for everyday elegance",
        tag: Some(Tag::Bestseller),
        swatch: Swatch::Rose,
    },
    Product {
        id: "women-002",
        name: "Gold Layered Necklace",
        price: 399,
        description: "Delicate layered chains with minimalist charm",
        tag: Some(Tag::New),
        swatch: Swatch::Amber,
    },
    Product {
        id: "women-003",
        name: "Crystal Stud Set",
        price: 199,
        description: "Set of 3 sparkling crystal studs",
        tag: None,
        swatch: Swatch::Purple,
    },
    Product {
        id: "women-004",
        name: "Charm Bracelet",
        price: 349,
        description: "Adjustable bracelet with cute charms",
        tag: Some(Tag::New),
        swatch: Swatch::Pink,
    },
    Product {
        id: "women-005",
        name: "Statement Hoops",
        price: 299,
        description: "Bold hoops that make a statement",
        tag: None,
        swatch: Swatch::Orange,
    },
    Product {
        id: "women-006",
        name: "Dainty Ring Set",
        price: 279,
        description: "Set of 5 stackable minimal rings",
        tag: Some(Tag::Bestseller),
        swatch: Swatch::Teal,
    },
];

pub const KIDS_PRODUCTS: &[Product] = &[
    Product {
        id: "kids-001",
        name: "Rainbow Bracelet",
        price: 149,
        description: "Colorful beaded bracelet kids love",
        tag: Some(Tag::Bestseller),
        swatch: Swatch::Yellow,
    },
    Product {
        id: "kids-002",
        name: "Butterfly Clips Set",
        price: 129,
        description: "Set of 4 sparkly butterfly hair clips",
        tag: Some(Tag::New),
        swatch: Swatch::Pink,
    },
    Product {
        id: "kids-003",
        name: "Star Pendant Necklace",
        price: 179,
        description: "Cute star pendant on safe cord",
        tag: None,
        swatch: Swatch::Purple,
    },
    Product {
        id: "kids-004",
        name: "Flower Ring Set",
        price: 99,
        description: "Adjustable rings with flower designs",
        tag: Some(Tag::New),
        swatch: Swatch::Green,
    },
    Product {
        id: "kids-005",
        name: "Princess Tiara",
        price: 249,
        description: "Sparkling tiara for special occasions",
        tag: None,
        swatch: Swatch::Blue,
    },
    Product {
        id: "kids-006",
        name: "Charm Anklet",
        price: 129,
        description: "Cute anklet with dangling charms",
        tag: Some(Tag::Bestseller),
        swatch: Swatch::Orange,
    },
];

pub const PET_PRODUCTS: &[Product] = &[
    Product {
        id: "pet-001",
        name: "Golden Paw Necklace",
        price: 299,
        description: "Elegant gold-tone necklace for small dogs",
        tag: Some(Tag::Bestseller),
        swatch: Swatch::Amber,
    },
    Product {
        id: "pet-002",
        name: "Pearl Collar Charm",
        price: 199,
        description: "Delicate pearl charm for any collar",
        tag: Some(Tag::New),
        swatch: Swatch::Rose,
    },
    Product {
        id: "pet-003",
        name: "Royal Blue Beads",
        price: 349,
        description: "Statement piece for medium dogs",
        tag: None,
        swatch: Swatch::Blue,
    },
    Product {
        id: "pet-004",
        name: "Silver Star Pendant",
        price: 249,
        description: "Cute star pendant for cats and small dogs",
        tag: Some(Tag::New),
        swatch: Swatch::Purple,
    },
    Product {
        id: "pet-005",
        name: "Floral Collar Set",
        price: 399,
        description: "Beautiful floral design collar accessory",
        tag: None,
        swatch: Swatch::Pink,
    },
    Product {
        id: "pet-006",
        name: "Diamond Bow Charm",
        price: 279,
        description: "Sparkling bow charm for special occasions",
        tag: Some(Tag::Bestseller),
        swatch: Swatch::Cyan,
    },
];

/// Collection tiles, pets first: the pet line is what sets the brand apart.
pub const COLLECTIONS: &[CollectionCard] = &[
    CollectionCard {
        category: Category::Pets,
        blurb: "India's first fashion jewelry for your furry friends",
        description: "India's first fashion jewelry for your furry friends. \
                      Necklaces, collar charms, and accessories for dogs and cats.",
        icon: "\u{1f43e}",
        home_badge: Some("NEW"),
        index_badge: Some("NEW IN INDIA"),
        design_count: "20+ designs",
        swatch: Swatch::Amber,
    },
    CollectionCard {
        category: Category::Women,
        blurb: "Elegant everyday pieces that make you shine",
        description: "Elegant everyday jewelry that makes you shine. \
                      From minimal pieces to statement makers.",
        icon: "\u{1f48e}",
        home_badge: None,
        index_badge: None,
        design_count: "50+ designs",
        swatch: Swatch::Rose,
    },
    CollectionCard {
        category: Category::Kids,
        blurb: "Playful, safe, and adorable accessories",
        description: "Safe, playful, and adorable accessories for little ones. \
                      Made with child-safe materials.",
        icon: "\u{1f98b}",
        home_badge: None,
        index_badge: None,
        design_count: "30+ designs",
        swatch: Swatch::Sky,
    },
];

pub const WHY_CHOOSE_US: &[Feature] = &[
    Feature {
        icon: "\u{1f43e}",
        title: "First in India",
        description: "Pioneering fashion jewelry for pets. Your furry friends deserve to shine too.",
    },
    Feature {
        icon: "\u{2728}",
        title: "Premium Quality",
        description: "Carefully crafted pieces that look expensive but are surprisingly affordable.",
    },
    Feature {
        icon: "\u{1f6e1}\u{fe0f}",
        title: "Pet Safe",
        description: "All pet jewelry is lightweight, comfortable, and safe for your furry companions.",
    },
    Feature {
        icon: "\u{1f49d}",
        title: "Matching Sets",
        description: "Twin with your pet! Coordinated pieces for the whole family.",
    },
];

pub const BRAND_VALUES: &[Feature] = &[
    Feature {
        icon: "\u{2728}",
        title: "Quality First",
        description: "Every piece is carefully inspected to ensure it meets our high standards.",
    },
    Feature {
        icon: "\u{1f6e1}\u{fe0f}",
        title: "Pet Safety",
        description: "All pet jewelry is designed with your furry friend's comfort in mind.",
    },
    Feature {
        icon: "\u{1f48e}",
        title: "Affordable Luxury",
        description: "Looking good shouldn't cost a fortune. Premium looks, friendly prices.",
    },
    Feature {
        icon: "\u{1f49d}",
        title: "Customer Love",
        description: "Your satisfaction is our priority. We're here to help, always.",
    },
];

pub const PERKS: &[Perk] = &[
    Perk { icon: "\u{1f69a}", title: "Free Shipping", detail: "Above \u{20b9}499" },
    Perk { icon: "\u{1f4b3}", title: "COD Available", detail: "Pay on delivery" },
    Perk { icon: "\u{21a9}\u{fe0f}", title: "Easy Returns", detail: "7-day returns" },
    Perk { icon: "\u{2728}", title: "Quality Promise", detail: "Premium materials" },
];

pub const STATS: &[Stat] = &[
    Stat { figure: "500+", label: "Happy Pet Parents" },
    Stat { figure: "50+", label: "Unique Designs" },
    Stat { figure: "10+", label: "Cities Delivered" },
    Stat { figure: "4.8\u{2605}", label: "Customer Rating" },
];

pub const SIZE_CHART: &[SizeRow] = &[
    SizeRow {
        size: "XS",
        neck: "15-20 cm",
        breeds: "Chihuahua, Pomeranian, Kittens",
        icon: "\u{1f415}",
    },
    SizeRow {
        size: "S",
        neck: "20-28 cm",
        breeds: "Shih Tzu, Pug, Adult Cats",
        icon: "\u{1f429}",
    },
    SizeRow {
        size: "M",
        neck: "28-38 cm",
        breeds: "Beagle, Cocker Spaniel, Indian Spitz",
        icon: "\u{1f415}\u{200d}\u{1f9ba}",
    },
    SizeRow {
        size: "L",
        neck: "38-48 cm",
        breeds: "Labrador, Golden Retriever, German Shepherd",
        icon: "\u{1f9ae}",
    },
    SizeRow {
        size: "XL",
        neck: "48-58 cm",
        breeds: "Great Dane, Saint Bernard, Rottweiler",
        icon: "\u{1f415}",
    },
];

pub const MEASUREMENT_STEPS: &[MeasurementStep] = &[
    MeasurementStep {
        step: 1,
        title: "Get a Measuring Tape",
        description: "Use a soft measuring tape. If you don't have one, use a string \
                      and measure it against a ruler.",
    },
    MeasurementStep {
        step: 2,
        title: "Measure the Neck",
        description: "Wrap the tape around the base of your pet's neck where a collar \
                      would normally sit. Keep it snug but not tight.",
    },
    MeasurementStep {
        step: 3,
        title: "Add Comfort Room",
        description: "Add 2-3 cm to the measurement for comfort. Your pet should be \
                      able to breathe and move freely.",
    },
    MeasurementStep {
        step: 4,
        title: "Check the Chart",
        description: "Match your measurement to our size chart below. When in doubt, size up!",
    },
];

pub const SIZING_TIPS: &[Tip] = &[
    Tip {
        icon: "\u{2705}",
        title: "When in Doubt, Size Up",
        description: "It's better to have a slightly loose fit than too tight. \
                      Your pet's comfort comes first.",
        swatch: Swatch::Green,
    },
    Tip {
        icon: "\u{1f4a1}",
        title: "Consider Fur Length",
        description: "For fluffy breeds, measure closer to the skin. The jewelry will \
                      rest on top of the fur.",
        swatch: Swatch::Blue,
    },
    Tip {
        icon: "\u{26a0}\u{fe0f}",
        title: "Supervise Your Pet",
        description: "Always supervise your pet when they're wearing jewelry. \
                      Remove it during play, sleep, and meals.",
        swatch: Swatch::Amber,
    },
    Tip {
        icon: "\u{1f4f8}",
        title: "Perfect for Photos",
        description: "Our jewelry is ideal for photoshoots and special occasions. \
                      Make memories that last!",
        swatch: Swatch::Purple,
    },
];

pub const ORDER_CATEGORIES: &[(&str, &str)] = &[
    ("pets", "Pet Jewelry"),
    ("women", "Women's Jewelry"),
    ("kids", "Kids' Jewelry"),
    ("matching", "Matching Sets (Pet + Owner)"),
    ("multiple", "Multiple Categories"),
];

pub const ORDER_FORM: &[FormField] = &[
    FormField {
        id: "name",
        label: "Your Name *",
        kind: FieldKind::Text,
        required: true,
        placeholder: Some("Enter your full name"),
        paired: false,
    },
    FormField {
        id: "phone",
        label: "WhatsApp Number *",
        kind: FieldKind::Tel,
        required: true,
        placeholder: Some("+91 XXXXX XXXXX"),
        paired: false,
    },
    FormField {
        id: "city",
        label: "City *",
        kind: FieldKind::Text,
        required: true,
        placeholder: Some("Your city"),
        paired: true,
    },
    FormField {
        id: "pincode",
        label: "Pincode *",
        kind: FieldKind::Text,
        required: true,
        placeholder: Some("XXXXXX"),
        paired: true,
    },
    FormField {
        id: "category",
        label: "Interested In *",
        kind: FieldKind::Select {
            prompt: "Select category",
            options: ORDER_CATEGORIES,
        },
        required: true,
        placeholder: None,
        paired: false,
    },
    FormField {
        id: "message",
        label: "Your Message",
        kind: FieldKind::Textarea { rows: 4 },
        required: false,
        placeholder: Some(
            "Tell us what you're looking for, any specific products, or questions you have...",
        ),
        paired: false,
    },
];

/// Markdown sources for the long-form copy.
pub const ABOUT_STORY_MD: &str = include_str!("../content/about-story.md");
pub const PET_ARTICLE_MD: &str = include_str!("../content/pet-jewelry.md");

/// Contact cards, in display order: WhatsApp, Instagram, Email.
pub fn contact_methods(config: &SiteConfig) -> Vec<ContactMethod> {
    let links = &config.links;
    vec![
        ContactMethod {
            name: "WhatsApp",
            description: "Fastest way to order",
            value: links.whatsapp_display.clone(),
            href: links.whatsapp_url(),
            icon: "\u{1f4ac}",
            cta: "Chat Now",
        },
        ContactMethod {
            name: "Instagram",
            description: "DM us to order",
            value: format!("@{}", links.instagram_handle),
            href: links.instagram_url(),
            icon: "\u{1f4f8}",
            cta: "Send DM",
        },
        ContactMethod {
            name: "Email",
            description: "For business inquiries",
            value: links.email.clone(),
            href: format!("mailto:{}", links.email),
            icon: "\u{2709}\u{fe0f}",
            cta: "Send Email",
        },
    ]
}

/// Everything above, in one serializable snapshot for `mulyam catalog`.
#[derive(Debug, Serialize)]
pub struct CatalogSnapshot {
    pub navigation: &'static [NavLink],
    pub collections: &'static [CollectionCard],
    pub women: &'static [Product],
    pub kids: &'static [Product],
    pub pets: &'static [Product],
    pub size_chart: &'static [SizeRow],
    pub contact_methods: Vec<ContactMethod>,
    pub why_choose_us: &'static [Feature],
    pub brand_values: &'static [Feature],
}

pub fn snapshot(config: &SiteConfig) -> CatalogSnapshot {
    CatalogSnapshot {
        navigation: NAV_LINKS,
        collections: COLLECTIONS,
        women: WOMEN_PRODUCTS,
        kids: KIDS_PRODUCTS,
        pets: PET_PRODUCTS,
        size_chart: SIZE_CHART,
        contact_methods: contact_methods(config),
        why_choose_us: WHY_CHOOSE_US,
        brand_values: BRAND_VALUES,
    }
}
