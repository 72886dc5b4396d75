//! Presentational sections shared by the page assemblies.
//!
//! Each function maps literal data to markup and nothing else: no I/O, no
//! clock, no randomness. Slices are iterated in source order.

use crate::catalog::{
    CollectionCard, ContactMethod, Feature, FieldKind, FormField, MeasurementStep, Perk, Product,
    SizeRow, Stat, Swatch, Tip, format_price,
};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

const INSTAGRAM_ICON: &str = include_str!("../static/instagram.svg");

/// One breadcrumb step. The last step is the current page and has no link.
pub struct Crumb<'a> {
    pub label: &'a str,
    pub href: Option<&'a str>,
}

impl<'a> Crumb<'a> {
    pub fn link(label: &'a str, href: &'a str) -> Self {
        Self {
            label,
            href: Some(href),
        }
    }

    pub fn here(label: &'a str) -> Self {
        Self { label, href: None }
    }
}

/// Button styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Dark filled pill.
    Dark,
    /// Brand-colored filled pill.
    Brand,
    /// Outlined pill.
    Outline,
}

impl ButtonStyle {
    fn modifier(self) -> &'static str {
        match self {
            ButtonStyle::Dark => "btn--dark",
            ButtonStyle::Brand => "btn--brand",
            ButtonStyle::Outline => "btn--outline",
        }
    }
}

/// A link styled as a button. External links open in a new browsing context.
pub fn button_link(href: &str, label: &str, style: ButtonStyle, external: bool) -> Markup {
    let class = crate::classes!["btn", style.modifier()];
    html! {
        @if external {
            a class=(class) href=(href) target="_blank" rel="noopener noreferrer" { (label) }
        } @else {
            a class=(class) href=(href) { (label) }
        }
    }
}

/// Render markdown to HTML.
pub fn markdown(source: &str) -> Markup {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(source));
    PreEscaped(out)
}

pub fn breadcrumb(trail: &[Crumb]) -> Markup {
    html! {
        nav.breadcrumb aria-label="Breadcrumb" {
            ol {
                @for (i, crumb) in trail.iter().enumerate() {
                    @if i > 0 {
                        li.breadcrumb-sep aria-hidden="true" { "/" }
                    }
                    @match crumb.href {
                        Some(href) => li { a href=(href) { (crumb.label) } },
                        None => li aria-current="page" { (crumb.label) },
                    }
                }
            }
        }
    }
}

/// Small uppercase label above a heading.
pub fn eyebrow(text: &str) -> Markup {
    html! { p.eyebrow { (text) } }
}

/// Centered section heading with optional eyebrow and subtitle.
pub fn section_header(eyebrow_text: Option<&str>, heading: &str, subtitle: Option<&str>) -> Markup {
    html! {
        div.section-header {
            @if let Some(text) = eyebrow_text {
                (eyebrow(text))
            }
            h2 { (heading) }
            @if let Some(sub) = subtitle {
                p.section-subtitle { (sub) }
            }
        }
    }
}

/// Page-top banner with breadcrumb, title and intro. `extra` renders below
/// the intro (filter bars).
pub fn page_hero(
    swatch: Swatch,
    trail: &[Crumb],
    heading: &str,
    intro: &str,
    extra: Option<Markup>,
) -> Markup {
    html! {
        section class={ "page-hero " (swatch.class()) } {
            div.container.container--narrow {
                (breadcrumb(trail))
                h1 { (heading) }
                p.lead { (intro) }
                @if let Some(extra) = extra {
                    (extra)
                }
            }
        }
    }
}

/// Category filter labels.
///
/// These are decoration: the first renders as active and none of them
/// filters anything.
pub fn filter_bar(labels: &[&str]) -> Markup {
    html! {
        div.filter-bar role="group" aria-label="Filters" {
            @for (i, label) in labels.iter().enumerate() {
                @let class = crate::classes!["chip", ("chip--active", i == 0)];
                button type="button" class=(class) aria-pressed=(if i == 0 { "true" } else { "false" }) {
                    (label)
                }
            }
        }
    }
}

/// A single product card.
pub fn product_card(product: &Product, icon: &str, order_href: &str) -> Markup {
    html! {
        article.product-card data-product-id=(product.id) {
            div class={ "product-media " (product.swatch.class()) } {
                @if let Some(tag) = product.tag {
                    span class=(crate::classes!["badge", tag.modifier()]) { (tag.label()) }
                }
                span.product-icon aria-hidden="true" { (icon) }
            }
            div.product-info {
                h3.product-name { (product.name) }
                p.product-description { (product.description) }
                p.product-price { (format_price(product.price)) }
            }
            a.btn.btn--outline.btn--block href=(order_href) target="_blank" rel="noopener noreferrer" {
                "Order on Instagram"
            }
        }
    }
}

/// Product grid: exactly one card per product, in source order.
pub fn product_grid(products: &[Product], icon: &str, order_href: &str) -> Markup {
    html! {
        section.section {
            div.container {
                div.product-grid {
                    @for product in products {
                        (product_card(product, icon, order_href))
                    }
                }
            }
        }
    }
}

/// Home page collection tiles.
pub fn featured_collections(cards: &[CollectionCard]) -> Markup {
    html! {
        section.section {
            div.container {
                (section_header(None, "Shop by Collection", Some("Find the perfect piece for everyone in your family")))
                div.collection-grid {
                    @for card in cards {
                        a.collection-tile href=(crate::routes::Route::Category(card.category).path()) {
                            div class={ "collection-media " (card.swatch.class()) } {
                                @if let Some(badge) = card.home_badge {
                                    span.badge.badge--new { (badge) }
                                }
                                div.collection-caption {
                                    h3 { (card.category.name()) }
                                    p { (card.blurb) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Collections index tiles: larger copy, icon, and design count.
pub fn collection_index(cards: &[CollectionCard]) -> Markup {
    html! {
        section.section {
            div.container {
                div.collection-grid {
                    @for card in cards {
                        a.collection-tile href=(crate::routes::Route::Category(card.category).path()) {
                            div class={ "collection-media " (card.swatch.class()) } {
                                @if let Some(badge) = card.index_badge {
                                    span.badge.badge--new { (badge) }
                                }
                                span.collection-icon aria-hidden="true" { (card.icon) }
                                div.collection-caption {
                                    h2 { (card.category.name()) }
                                    p { (card.description) }
                                    p.collection-count { (card.design_count) }
                                }
                            }
                            p.collection-more { "View Collection \u{2192}" }
                        }
                    }
                }
            }
        }
    }
}

/// Grid of icon/title/description tiles.
pub fn feature_grid(features: &[Feature]) -> Markup {
    html! {
        div.feature-grid {
            @for feature in features {
                div.feature {
                    div.feature-icon aria-hidden="true" { (feature.icon) }
                    h3 { (feature.title) }
                    p { (feature.description) }
                }
            }
        }
    }
}

/// Dark band of shopping perks.
pub fn perks_band(heading: &str, perks: &[Perk]) -> Markup {
    html! {
        section.section.band-dark {
            div.container.container--narrow {
                h2 { (heading) }
                div.perk-grid {
                    @for perk in perks {
                        div.perk {
                            div.perk-icon aria-hidden="true" { (perk.icon) }
                            p.perk-title { (perk.title) }
                            p.perk-detail { (perk.detail) }
                        }
                    }
                }
            }
        }
    }
}

/// Dark band of headline numbers.
pub fn stats_band(stats: &[Stat]) -> Markup {
    html! {
        section.section.band-dark {
            div.container {
                div.stat-grid {
                    @for stat in stats {
                        div.stat {
                            p.stat-figure { (stat.figure) }
                            p.stat-label { (stat.label) }
                        }
                    }
                }
            }
        }
    }
}

pub fn measurement_steps(steps: &[MeasurementStep]) -> Markup {
    html! {
        div.step-grid {
            @for item in steps {
                div.step {
                    div.step-number { (item.step) }
                    h3 { (item.title) }
                    p { (item.description) }
                }
            }
        }
    }
}

/// Size chart table, followed by the breed list shown on narrow screens
/// where the table hides its third column.
pub fn size_chart(rows: &[SizeRow]) -> Markup {
    html! {
        div.table-card {
            table.size-table {
                thead {
                    tr {
                        th { "Size" }
                        th { "Neck Circumference" }
                        th.wide-only { "Suitable For" }
                    }
                }
                tbody {
                    @for row in rows {
                        tr {
                            td {
                                span.size-icon aria-hidden="true" { (row.icon) }
                                " "
                                strong { (row.size) }
                            }
                            td { (row.neck) }
                            td.wide-only { (row.breeds) }
                        }
                    }
                }
            }
        }
        div.breed-list.narrow-only {
            p.breed-list-title { "Breed Examples:" }
            @for row in rows {
                p { strong { (row.size) ":" } " " (row.breeds) }
            }
        }
    }
}

pub fn tips_list(tips: &[Tip]) -> Markup {
    html! {
        div.tip-list {
            @for tip in tips {
                div class={ "tip " (tip.swatch.class()) } {
                    span.tip-icon aria-hidden="true" { (tip.icon) }
                    div {
                        h3 { (tip.title) }
                        p { (tip.description) }
                    }
                }
            }
        }
    }
}

pub fn contact_cards(methods: &[ContactMethod]) -> Markup {
    html! {
        div.contact-grid {
            @for method in methods {
                a.contact-card href=(method.href) target="_blank" rel="noopener noreferrer" {
                    div.contact-icon aria-hidden="true" { (method.icon) }
                    h3 { (method.name) }
                    p.contact-description { (method.description) }
                    p.contact-value { (method.value) }
                    span.contact-cta { (method.cta) " \u{2192}" }
                }
            }
        }
    }
}

fn form_control(field: &FormField) -> Markup {
    html! {
        @match &field.kind {
            FieldKind::Text => {
                input type="text" id=(field.id) name=(field.id) required[field.required] placeholder=[field.placeholder];
            }
            FieldKind::Tel => {
                input type="tel" id=(field.id) name=(field.id) required[field.required] placeholder=[field.placeholder];
            }
            FieldKind::Select { prompt, options } => {
                select id=(field.id) name=(field.id) required[field.required] {
                    option value="" { (prompt) }
                    @for (value, label) in options.iter() {
                        option value=(value) { (label) }
                    }
                }
            }
            FieldKind::Textarea { rows } => {
                textarea id=(field.id) name=(field.id) rows=(rows) required[field.required] placeholder=[field.placeholder] {}
            }
        }
    }
}

fn form_field(field: &FormField) -> Markup {
    html! {
        div.form-field {
            label for=(field.id) { (field.label) }
            (form_control(field))
        }
    }
}

/// The order-intake form. Consecutive `paired` fields share one row.
///
/// With no `action` the form has no submission target.
pub fn order_form(fields: &[FormField], action: Option<&str>) -> Markup {
    let method = action.map(|_| "post");
    let mut rows: Vec<&[FormField]> = Vec::new();
    let mut i = 0;
    while i < fields.len() {
        let run = fields[i..].iter().take_while(|f| f.paired).count();
        let len = run.max(1);
        rows.push(&fields[i..i + len]);
        i += len;
    }

    html! {
        form.order-form action=[action] method=[method] {
            @for row in rows {
                @if row.len() > 1 {
                    div.form-row {
                        @for field in row {
                            (form_field(field))
                        }
                    }
                } @else {
                    @for field in row {
                        (form_field(field))
                    }
                }
            }
            button.btn.btn--dark.btn--block type="submit" { "Send Message" }
            p.form-note {
                "By submitting, you agree to be contacted via WhatsApp. "
                "We typically respond within 2 hours during business hours."
            }
        }
    }
}

/// Centered closing section with heading, copy and actions.
pub fn cta_section(heading: &str, body: &str, actions: Markup, surface: bool) -> Markup {
    let class = crate::classes!["section", "cta", ("section--surface", surface)];
    html! {
        section class=(class) {
            div.container.container--narrow {
                h2 { (heading) }
                p { (body) }
                div.cta-actions { (actions) }
            }
        }
    }
}

/// Instagram follow button with the glyph.
pub fn instagram_follow(href: &str, handle: &str) -> Markup {
    html! {
        a.btn.btn--brand.btn--icon href=(href) target="_blank" rel="noopener noreferrer" {
            (PreEscaped(INSTAGRAM_ICON))
            "Follow @" (handle)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        Category, ORDER_FORM, PET_PRODUCTS, SIZE_CHART, Tag, WOMEN_PRODUCTS,
    };

    #[test]
    fn product_grid_renders_one_card_per_product() {
        let html = product_grid(WOMEN_PRODUCTS, "x", "#").into_string();
        assert_eq!(html.matches("<article").count(), WOMEN_PRODUCTS.len());
    }

    #[test]
    fn product_grid_keeps_source_order() {
        let html = product_grid(PET_PRODUCTS, "x", "#").into_string();
        let positions: Vec<usize> = PET_PRODUCTS
            .iter()
            .map(|p| html.find(p.name).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn product_card_shows_name_price_and_tag() {
        let product = &WOMEN_PRODUCTS[0];
        let html = product_card(product, "x", "#").into_string();
        assert!(html.contains("Pearl Drop Earrings"));
        assert!(html.contains("\u{20b9}249"));
        assert!(html.contains(r#"class="badge badge--bestseller""#));
        assert!(html.contains(">Bestseller<"));
    }

    #[test]
    fn product_card_without_tag_has_no_badge() {
        let product = WOMEN_PRODUCTS.iter().find(|p| p.tag.is_none()).unwrap();
        let html = product_card(product, "x", "#").into_string();
        assert!(!html.contains("badge"));
    }

    #[test]
    fn new_tag_uses_new_modifier() {
        let product = PET_PRODUCTS.iter().find(|p| p.tag == Some(Tag::New)).unwrap();
        let html = product_card(product, "x", "#").into_string();
        assert!(html.contains(r#"class="badge badge--new""#));
    }

    #[test]
    fn filter_bar_marks_first_active_only() {
        let html = filter_bar(Category::Pets.filters()).into_string();
        assert_eq!(html.matches("chip--active").count(), 1);
        assert_eq!(html.matches("<button").count(), 4);
        assert!(html.contains(r#"type="button""#));
    }

    #[test]
    fn breadcrumb_last_step_is_current() {
        let html = breadcrumb(&[Crumb::link("Home", "/"), Crumb::here("About")]).into_string();
        assert!(html.contains(r#"<a href="/">Home</a>"#));
        assert!(html.contains(r#"aria-current="page""#));
        assert_eq!(html.matches("breadcrumb-sep").count(), 1);
    }

    #[test]
    fn size_chart_has_row_per_size() {
        let html = size_chart(SIZE_CHART).into_string();
        assert_eq!(html.matches("<tr>").count(), SIZE_CHART.len() + 1);
        assert!(html.contains("48-58 cm"));
    }

    #[test]
    fn order_form_without_action_has_no_target() {
        let html = order_form(ORDER_FORM, None).into_string();
        assert!(!html.contains("action="));
        assert!(!html.contains("method="));
        assert!(html.contains(r#"name="pincode""#));
    }

    #[test]
    fn order_form_with_action_posts() {
        let html = order_form(ORDER_FORM, Some("https://example.com/o")).into_string();
        assert!(html.contains(r#"action="https://example.com/o""#));
        assert!(html.contains(r#"method="post""#));
    }

    #[test]
    fn order_form_pairs_city_and_pincode() {
        let html = order_form(ORDER_FORM, None).into_string();
        assert_eq!(html.matches("form-row").count(), 1);
        let row_start = html.find("form-row").unwrap();
        let city = html.find(r#"id="city""#).unwrap();
        let pincode = html.find(r#"id="pincode""#).unwrap();
        assert!(row_start < city && city < pincode);
    }

    #[test]
    fn order_form_lists_every_category_option() {
        let html = order_form(ORDER_FORM, None).into_string();
        assert!(html.contains(r#"<option value="">Select category</option>"#));
        assert!(html.contains(r#"<option value="matching">"#));
        assert_eq!(html.matches("<option").count(), 6);
    }

    #[test]
    fn message_field_is_optional() {
        let html = order_form(ORDER_FORM, None).into_string();
        let textarea = &html[html.find("<textarea").unwrap()..];
        let tag_end = textarea.find('>').unwrap();
        assert!(!textarea[..tag_end].contains("required"));
    }

    #[test]
    fn markdown_renders_lists_and_emphasis() {
        let html = markdown("- **Safety First:** light").into_string();
        assert!(html.contains("<li><strong>Safety First:</strong> light</li>"));
    }

    #[test]
    fn external_button_opens_new_context() {
        let html = button_link("https://wa.me/1", "Chat", ButtonStyle::Dark, true).into_string();
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"class="btn btn--dark""#));
        let internal = button_link("/about/", "About", ButtonStyle::Outline, false).into_string();
        assert!(!internal.contains("target="));
    }

    #[test]
    fn cta_section_surface_modifier() {
        let html = cta_section("H", "B", html! {}, true).into_string();
        assert!(html.contains(r#"class="section cta section--surface""#));
        let plain = cta_section("H", "B", html! {}, false).into_string();
        assert!(plain.contains(r#"class="section cta""#));
    }
}
