//! The navigation shell: document wrapper, header bar, mobile drawer, footer.
//!
//! Every page is wrapped in the same shell. The header shows the wordmark,
//! the five nav links and the Instagram CTA on wide screens; on narrow
//! screens the links and CTA move into a drawer toggled by the hamburger.
//!
//! The drawer is a checkbox drawer: `#nav-toggle` is a hidden checkbox that
//! precedes the backdrop and the panel, and CSS sibling selectors slide the
//! panel in while it is checked. The hamburger and the backdrop are both
//! `<label for="nav-toggle">`. `static/drawer.js` clears the checkbox on
//! link activation, Escape, and `pageshow`.

use crate::catalog::NAV_LINKS;
use crate::config::SiteConfig;
use crate::drawer::Drawer;
use crate::routes::Route;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const DRAWER_JS: &str = include_str!("../static/drawer.js");

/// Everything a page needs besides its own data.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a SiteConfig,
    /// Full stylesheet, inlined into every page.
    pub css: &'a str,
    /// Year shown in copyright lines.
    pub year: i32,
}

/// `<title>` text for a route.
pub fn page_title(route: Route, config: &SiteConfig) -> String {
    match route.title() {
        Some(title) => format!("{} | {}", title, config.site_name),
        None => format!(
            "{} | Fashion Jewelry for Women, Kids & Pets",
            config.site_name
        ),
    }
}

/// Renders the base HTML document structure
pub fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the header bar, backdrop and drawer in the state `drawer` is in.
pub fn render_navbar(route: Route, drawer: &Drawer, ctx: &RenderContext) -> Markup {
    let instagram = ctx.config.links.instagram_url();
    let open = drawer.is_open();

    html! {
        input.nav-toggle type="checkbox" id="nav-toggle" checked[open] aria-hidden="true";

        header.site-header {
            nav.site-nav {
                a.brand href="/" data-drawer-close { (ctx.config.brand_mark) }
                ul.nav-links {
                    @for link in NAV_LINKS {
                        li {
                            a.current[route.is_current(link.href)] href=(link.href) { (link.label) }
                        }
                    }
                }
                a.btn.btn--dark.nav-cta href=(instagram) target="_blank" rel="noopener noreferrer" {
                    "Shop on Instagram"
                }
                label.nav-hamburger for="nav-toggle" role="button" aria-label=(drawer.toggle_label()) {
                    span.hamburger-line {}
                    span.hamburger-line {}
                    span.hamburger-line {}
                }
            }
        }

        label.nav-backdrop for="nav-toggle" aria-hidden="true" {}

        aside.nav-drawer data-state=(if open { "open" } else { "closed" }) {
            nav.drawer-links {
                @for link in NAV_LINKS {
                    a.current[route.is_current(link.href)] href=(link.href) data-drawer-close {
                        (link.label)
                    }
                }
            }
            div.drawer-spacer {}
            a.btn.btn--dark.btn--block href=(instagram) target="_blank" rel="noopener noreferrer" data-drawer-close {
                "Shop on Instagram"
            }
            p.drawer-copyright { "\u{a9} " (ctx.year) " " (ctx.config.site_name) }
        }
    }
}

/// Renders the site footer.
pub fn render_footer(ctx: &RenderContext) -> Markup {
    let links = &ctx.config.links;
    html! {
        footer.site-footer {
            div.footer-inner {
                div.footer-brand {
                    a.brand href="/" { (ctx.config.brand_mark) }
                    p { "Fashion jewelry for women, kids, and pets." }
                }
                nav.footer-links {
                    @for link in NAV_LINKS {
                        a href=(link.href) { (link.label) }
                    }
                }
                div.footer-channels {
                    a href=(links.instagram_url()) target="_blank" rel="noopener noreferrer" {
                        "Instagram"
                    }
                    a href=(links.whatsapp_url()) target="_blank" rel="noopener noreferrer" {
                        "WhatsApp"
                    }
                    a href={ "mailto:" (links.email) } { (links.email) }
                }
            }
            p.footer-copyright {
                "\u{a9} " (ctx.year) " " (ctx.config.site_name) ". All rights reserved."
            }
        }
    }
}

/// Wraps page content in the full shell. The drawer is mounted fresh, so
/// every page is delivered with it closed.
pub fn render_shell(route: Route, ctx: &RenderContext, main: Markup) -> Markup {
    let drawer = Drawer::mount();
    let content = html! {
        (render_navbar(route, &drawer, ctx))
        div.page {
            (main)
        }
        (render_footer(ctx))
        script { (PreEscaped(DRAWER_JS)) }
    };
    base_document(&page_title(route, ctx.config), ctx.css, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn ctx(config: &SiteConfig) -> RenderContext<'_> {
        RenderContext {
            config,
            css: "",
            year: 2026,
        }
    }

    #[test]
    fn base_document_includes_doctype() {
        let doc = base_document("Test", "body {}", html! { p { "test" } }).into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Test</title>"));
    }

    #[test]
    fn css_is_not_escaped() {
        let doc = base_document("T", "a > b { color: red }", html! {}).into_string();
        assert!(doc.contains("a > b"));
    }

    #[test]
    fn page_titles() {
        let config = SiteConfig::default();
        assert_eq!(page_title(Route::About, &config), "About Us | Mulyam Jewels");
        assert!(page_title(Route::Home, &config).starts_with("Mulyam Jewels | "));
    }

    #[test]
    fn navbar_renders_all_links_twice() {
        let config = SiteConfig::default();
        let html = render_navbar(Route::Home, &Drawer::mount(), &ctx(&config)).into_string();
        for link in NAV_LINKS {
            let needle = format!(r#"href="{}""#, link.href);
            assert_eq!(html.matches(&needle).count(), 2, "{}", link.href);
        }
    }

    #[test]
    fn closed_drawer_renders_unchecked() {
        let config = SiteConfig::default();
        let html = render_navbar(Route::Home, &Drawer::mount(), &ctx(&config)).into_string();
        assert!(!html.contains("checked"));
        assert!(html.contains(r#"data-state="closed""#));
        assert!(html.contains(r#"aria-label="Open menu""#));
    }

    #[test]
    fn open_drawer_renders_checked() {
        let config = SiteConfig::default();
        let mut drawer = Drawer::mount();
        drawer.toggle();
        let html = render_navbar(Route::Home, &drawer, &ctx(&config)).into_string();
        assert!(html.contains("checked"));
        assert!(html.contains(r#"data-state="open""#));
        assert!(html.contains(r#"aria-label="Close menu""#));
    }

    #[test]
    fn drawer_script_keeps_rendered_state_in_sync() {
        // The script mirrors both attributes the shell renders from `Drawer`.
        assert!(
            DRAWER_JS.contains("drawer.dataset.state = toggle.checked ? 'open' : 'closed'")
        );
        assert!(DRAWER_JS.contains("toggle.checked ? 'Close menu' : 'Open menu'"));
        let mut drawer = Drawer::mount();
        drawer.toggle();
        assert_eq!(drawer.toggle_label(), "Close menu");
    }

    #[test]
    fn drawer_links_close_the_drawer() {
        let config = SiteConfig::default();
        let html = render_navbar(Route::Home, &Drawer::mount(), &ctx(&config)).into_string();
        // Brand + 5 drawer links + drawer CTA
        assert_eq!(html.matches("data-drawer-close").count(), NAV_LINKS.len() + 2);
    }

    #[test]
    fn navbar_marks_current_route() {
        let config = SiteConfig::default();
        let html = render_navbar(Route::SizeGuide, &Drawer::mount(), &ctx(&config)).into_string();
        assert!(html.contains(r#"<a class="current" href="/size-guide/""#));
        assert!(!html.contains(r#"<a class="current" href="/about/""#));
    }

    #[test]
    fn women_page_highlights_collections() {
        let config = SiteConfig::default();
        let route = Route::Category(Category::Women);
        let html = render_navbar(route, &Drawer::mount(), &ctx(&config)).into_string();
        assert!(html.contains(r#"<a class="current" href="/collections/""#));
    }

    #[test]
    fn cta_uses_configured_instagram() {
        let mut config = SiteConfig::default();
        config.links.instagram_handle = "mulyamjewelry".to_string();
        let html = render_navbar(Route::Home, &Drawer::mount(), &ctx(&config)).into_string();
        assert!(html.contains("https://instagram.com/mulyamjewelry"));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn copyright_uses_supplied_year() {
        let config = SiteConfig::default();
        let c = RenderContext {
            config: &config,
            css: "",
            year: 2031,
        };
        let nav = render_navbar(Route::Home, &Drawer::mount(), &c).into_string();
        let footer = render_footer(&c).into_string();
        assert!(nav.contains("\u{a9} 2031 Mulyam Jewels"));
        assert!(footer.contains("\u{a9} 2031 Mulyam Jewels"));
    }

    #[test]
    fn shell_starts_with_closed_drawer_and_script() {
        let config = SiteConfig::default();
        let doc = render_shell(Route::Contact, &ctx(&config), html! { main { "x" } }).into_string();
        assert!(doc.contains(r#"data-state="closed""#));
        assert!(doc.contains("nav-toggle"));
        assert!(doc.contains("data-drawer-close"));
        assert!(doc.contains("<title>Contact Us | Mulyam Jewels</title>"));
    }

    #[test]
    fn brand_mark_is_escaped() {
        let mut config = SiteConfig::default();
        config.brand_mark = "<b>M</b>".to_string();
        let html = render_navbar(Route::Home, &Drawer::mount(), &ctx(&config)).into_string();
        assert!(html.contains("&lt;b&gt;M&lt;/b&gt;"));
    }
}
