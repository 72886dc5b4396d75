//! Page assemblies, one per route.
//!
//! Each assembly stacks presentational sections in a fixed vertical order and
//! hands the result to the shell. Given the same config and year, every page
//! renders byte-identical output.

use crate::catalog::{
    self, BRAND_VALUES, COLLECTIONS, Category, MEASUREMENT_STEPS, ORDER_FORM, PERKS, SIZE_CHART,
    SIZING_TIPS, STATS, Swatch, WHY_CHOOSE_US,
};
use crate::routes::Route;
use crate::sections::{
    ButtonStyle, Crumb, button_link, collection_index, contact_cards, cta_section, eyebrow,
    feature_grid, featured_collections, filter_bar, instagram_follow, markdown,
    measurement_steps, order_form, page_hero, perks_band, product_grid, section_header,
    size_chart, stats_band, tips_list,
};
use crate::shell::{RenderContext, render_shell};
use maud::{Markup, html};

const PETS_PATH: &str = "/collections/pets/";

/// Render a complete HTML document for `route`.
pub fn render_page(route: Route, ctx: &RenderContext) -> Markup {
    let main = match route {
        Route::Home => home(ctx),
        Route::Collections => collections(),
        Route::Category(category) => category_page(category, ctx),
        Route::About => about(ctx),
        Route::SizeGuide => size_guide(ctx),
        Route::Contact => contact(ctx),
    };
    render_shell(route, ctx, main)
}

fn home(ctx: &RenderContext) -> Markup {
    let links = &ctx.config.links;
    let instagram = links.instagram_url();
    html! {
        main.home {
            section.hero {
                div.container.container--narrow {
                    (eyebrow("India's First"))
                    h1 {
                        "Fashion Jewelry for"
                        span.hero-emphasis { "You & Your Pets" }
                    }
                    p.lead {
                        "Elegant, affordable jewelry crafted for women, kids, and your furry friends. "
                        "Because everyone deserves to shine."
                    }
                    div.cta-actions {
                        (button_link(&instagram, "Shop on Instagram", ButtonStyle::Dark, true))
                        (button_link(PETS_PATH, "Explore Pet Collection", ButtonStyle::Outline, false))
                    }
                    p.trust-note { "Trusted by 500+ pet parents across India" }
                }
            }

            (featured_collections(COLLECTIONS))

            section.section.section--surface {
                div.container {
                    (section_header(Some("Why Mulyam"), "What Makes Us Different", None))
                    (feature_grid(WHY_CHOOSE_US))
                }
            }

            section.section.cta {
                div.container.container--narrow {
                    h2 {
                        "Ready to make your pet the "
                        span.block { "most stylish in the park?" }
                    }
                    p {
                        "Follow us on Instagram to see our latest collections and order directly via DM. "
                        "New pieces added every week!"
                    }
                    div.cta-actions {
                        (instagram_follow(&instagram, &links.instagram_handle))
                    }
                    p.trust-note {
                        "Free shipping on orders above \u{20b9}499 \u{2022} Easy returns \u{2022} COD available"
                    }
                }
            }
        }
    }
}

fn collections() -> Markup {
    html! {
        main.collections {
            (page_hero(
                Swatch::Neutral,
                &[Crumb::link("Home", "/"), Crumb::here("Collections")],
                "Our Collections",
                "Beautiful jewelry for everyone in your family \u{2014} including your pets!",
                None,
            ))
            (collection_index(COLLECTIONS))
            (perks_band("Why Shop with Mulyam?", PERKS))
            (cta_section(
                "Not Sure Where to Start?",
                "Our pet collection is what makes us unique! Check out India's first fashion jewelry for furry friends.",
                button_link(PETS_PATH, "Explore Pet Jewelry", ButtonStyle::Brand, false),
                false,
            ))
        }
    }
}

fn category_page(category: Category, ctx: &RenderContext) -> Markup {
    let instagram = ctx.config.links.instagram_url();
    let trail = [
        Crumb::link("Home", "/"),
        Crumb::link("Collections", Route::Collections.path()),
        Crumb::here(category.name()),
    ];
    html! {
        main.category data-category=(category.name()) {
            (page_hero(
                category.hero_swatch(),
                &trail,
                category.heading(),
                category.intro(),
                Some(filter_bar(category.filters())),
            ))
            (product_grid(category.products(), category.icon(), &instagram))
            (category_closing(category, ctx))
        }
    }
}

/// The section(s) after the product grid differ per category.
fn category_closing(category: Category, ctx: &RenderContext) -> Markup {
    let links = &ctx.config.links;
    match category {
        Category::Women => cta_section(
            "Want to Twin with Your Pet?",
            "Check out our matching sets - coordinated jewelry for you and your furry friend!",
            button_link(PETS_PATH, "Explore Pet Collection", ButtonStyle::Dark, false),
            true,
        ),
        Category::Kids => html! {
            section.section.swatch-green {
                div.container.container--narrow.safety-note {
                    div.feature-icon aria-hidden="true" { "\u{1f6e1}\u{fe0f}" }
                    h2 { "Safety First" }
                    p {
                        "All our kids jewelry is made with child-safe materials. "
                        "No sharp edges, no small detachable parts, and hypoallergenic."
                    }
                    p.fine-print { "Recommended for ages 3 and above. Adult supervision advised." }
                }
            }
        },
        Category::Pets => html! {
            section.section.section--surface {
                article.container.container--narrow.prose {
                    (markdown(catalog::PET_ARTICLE_MD))
                }
            }
            (cta_section(
                "Can't Find What You're Looking For?",
                "We're constantly adding new designs. Follow us on Instagram for the latest arrivals or DM us for custom requests!",
                button_link(
                    &links.instagram_url(),
                    &format!("Follow @{}", links.instagram_handle),
                    ButtonStyle::Dark,
                    true,
                ),
                false,
            ))
        },
    }
}

fn about(ctx: &RenderContext) -> Markup {
    let links = &ctx.config.links;
    html! {
        main.about {
            (page_hero(
                Swatch::Neutral,
                &[Crumb::link("Home", "/"), Crumb::here("About")],
                "Our Story",
                "How a simple idea became India's first pet jewelry brand",
                None,
            ))

            section.section {
                div.container.container--narrow {
                    p.quote {
                        "\u{201c}We believe everyone deserves to shine \u{2014}"
                        span.accent { " including your pets." }
                        "\u{201d}"
                    }
                    div.prose.story {
                        (markdown(catalog::ABOUT_STORY_MD))
                    }
                }
            }

            section.section.section--surface {
                div.container {
                    (section_header(Some("What We Stand For"), "Our Values", None))
                    (feature_grid(BRAND_VALUES))
                }
            }

            section.section {
                div.container.container--narrow {
                    (eyebrow("Our Mission"))
                    h2 {
                        "To make beautiful jewelry accessible to everyone \u{2014} "
                        "women, kids, and pets alike."
                    }
                    p {
                        "We're on a mission to bring joy through affordable fashion. "
                        "Because looking good shouldn't be a luxury."
                    }
                }
            }

            (stats_band(STATS))

            (cta_section(
                "Want to be part of our journey?",
                "Follow us on Instagram for behind-the-scenes, new launches, and adorable pet photos from our community.",
                html! {
                    (button_link(
                        &links.instagram_url(),
                        &format!("Follow @{}", links.instagram_handle),
                        ButtonStyle::Dark,
                        true,
                    ))
                    (button_link(PETS_PATH, "Shop Pet Collection", ButtonStyle::Outline, false))
                },
                false,
            ))
        }
    }
}

fn size_guide(ctx: &RenderContext) -> Markup {
    let links = &ctx.config.links;
    html! {
        main.size-guide {
            (page_hero(
                Swatch::Neutral,
                &[Crumb::link("Home", "/"), Crumb::here("Size Guide")],
                "Size Guide",
                "Find the perfect fit for your furry friend. Follow our simple guide to measure your pet correctly.",
                None,
            ))

            section.section {
                div.container {
                    (section_header(Some("Step by Step"), "How to Measure Your Pet", None))
                    (measurement_steps(MEASUREMENT_STEPS))
                    div.visual-note.swatch-amber {
                        div.visual-note-icon aria-hidden="true" { "\u{1f4cf}\u{1f415}" }
                        p { "Measure around the base of the neck, where a collar sits naturally." }
                    }
                }
            }

            section.section.section--surface {
                div.container.container--narrow {
                    (section_header(Some("Reference"), "Pet Size Chart", None))
                    (size_chart(SIZE_CHART))
                }
            }

            section.section {
                div.container.container--narrow {
                    (section_header(None, "Helpful Tips", None))
                    (tips_list(SIZING_TIPS))
                }
            }

            (cta_section(
                "Still Not Sure?",
                "Send us a photo of your pet on WhatsApp and we'll help you pick the right size!",
                html! {
                    (button_link(&links.whatsapp_url(), "Chat on WhatsApp", ButtonStyle::Dark, true))
                    (button_link(PETS_PATH, "Browse Pet Collection", ButtonStyle::Outline, false))
                },
                true,
            ))
        }
    }
}

fn contact(ctx: &RenderContext) -> Markup {
    let methods = catalog::contact_methods(ctx.config);
    html! {
        main.contact {
            (page_hero(
                Swatch::Neutral,
                &[Crumb::link("Home", "/"), Crumb::here("Contact")],
                "Get in Touch",
                "Have a question or ready to order? We're here to help! Reach out through any of the channels below.",
                None,
            ))

            section.section {
                div.container {
                    (contact_cards(&methods))
                }
            }

            section.section.section--surface {
                div.container.container--form {
                    (section_header(
                        None,
                        "Place an Order",
                        Some("Fill out the form below and we'll get back to you on WhatsApp within 2 hours."),
                    ))
                    (order_form(ORDER_FORM, ctx.config.form.action.as_deref()))
                }
            }
        }
    }
}
