//! Site generation.
//!
//! Renders every route in [`Route::ALL`] and writes the output tree.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── collections/
//! │   ├── index.html
//! │   ├── women/index.html
//! │   ├── kids/index.html
//! │   └── pets/index.html
//! ├── about/index.html
//! ├── size-guide/index.html
//! ├── contact/index.html
//! └── ...                  # files copied from the assets directory
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time and inlined into every page:
//! - `static/style.css`: base styles (colors injected from config)
//! - `static/drawer.js`: closes the mobile drawer on navigation
//!
//! Routes are independent, so they render in parallel with rayon. Each
//! output file is written exactly once.

use crate::catalog::Category;
use crate::config::{self, SiteConfig};
use crate::pages::render_page;
use crate::routes::Route;
use crate::shell::RenderContext;
use chrono::Datelike;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Check failed: {0}")]
    Check(String),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

const CARD_MARKER: &str = r#"<article class="product-card""#;

/// A rendered page, not yet written.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub route: Route,
    pub html: String,
}

/// One written page.
#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub route: Route,
    /// Path relative to the output root.
    pub file: PathBuf,
    pub bytes: usize,
}

/// What a build produced.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub year: i32,
    /// Pages in route order.
    pub pages: Vec<PageReport>,
    /// Copied asset files, relative to the output root, sorted.
    pub assets: Vec<PathBuf>,
}

/// Product card count for one category page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCheck {
    pub category: Category,
    pub expected: usize,
    pub rendered: usize,
}

/// Result of a successful in-memory check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub pages: usize,
    pub categories: Vec<CategoryCheck>,
}

/// The current calendar year in local time, used for copyright lines.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// The full stylesheet: color variables from config, then the base styles.
pub fn stylesheet(config: &SiteConfig) -> String {
    let color_css = config::generate_color_css(&config.colors);
    format!("{}\n\n{}", color_css, CSS_STATIC)
}

/// Render every route in memory, in route order.
pub fn render_site(config: &SiteConfig, year: i32) -> Vec<RenderedPage> {
    let css = stylesheet(config);
    let ctx = RenderContext {
        config,
        css: &css,
        year,
    };
    Route::ALL
        .par_iter()
        .map(|&route| {
            tracing::debug!(path = route.path(), "rendering");
            RenderedPage {
                route,
                html: render_page(route, &ctx).into_string(),
            }
        })
        .collect()
}

/// Render the site and write it to `output_dir`.
///
/// If `assets_dir` is given and exists, its files are copied to the output
/// root after the pages are written.
pub fn generate(
    config: &SiteConfig,
    assets_dir: Option<&Path>,
    output_dir: &Path,
    year: i32,
) -> Result<BuildReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let rendered = render_site(config, year);
    let pages = rendered
        .par_iter()
        .map(|page| write_page(page, output_dir))
        .collect::<Result<Vec<_>, _>>()?;

    let assets = match assets_dir {
        Some(dir) if dir.is_dir() => copy_assets(dir, output_dir)?,
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "no assets directory, skipping");
            Vec::new()
        }
        None => Vec::new(),
    };

    tracing::info!(
        pages = pages.len(),
        assets = assets.len(),
        output = %output_dir.display(),
        "site generated"
    );

    Ok(BuildReport {
        output_dir: output_dir.to_path_buf(),
        year,
        pages,
        assets,
    })
}

fn write_page(page: &RenderedPage, output_dir: &Path) -> Result<PageReport, GenerateError> {
    let file = page.route.output_file();
    let path = output_dir.join(&file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, &page.html)?;
    tracing::debug!(file = %file.display(), bytes = page.html.len(), "wrote page");
    Ok(PageReport {
        route: page.route,
        file,
        bytes: page.html.len(),
    })
}

/// Copy every file under `src` into `dst`, keeping relative paths.
///
/// An asset whose path matches a route's output file is skipped; generated
/// pages are never overwritten.
fn copy_assets(src: &Path, dst: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    let mut copied = Vec::new();
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| std::io::Error::other(e.to_string()))?
            .to_path_buf();
        if Route::ALL.iter().any(|r| r.output_file() == relative) {
            tracing::warn!(
                asset = %relative.display(),
                "asset collides with a generated page, skipping"
            );
            continue;
        }
        let target = dst.join(&relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &target)?;
        tracing::debug!(asset = %relative.display(), "copied asset");
        copied.push(relative);
    }
    Ok(copied)
}

/// Render every route in memory and verify the rendered output.
///
/// Fails if a category page does not render exactly one card per product,
/// if a page is delivered with the drawer open, or if a copyright line
/// shows a year other than `year`. Writes nothing.
pub fn check(config: &SiteConfig, year: i32) -> Result<CheckReport, GenerateError> {
    let rendered = render_site(config, year);
    let copyright = maud::html! { "\u{a9} " (year) " " (config.site_name) }.into_string();
    let mut categories = Vec::new();

    for page in &rendered {
        let path = page.route.path();
        if !page.html.contains(r#"data-state="closed""#) {
            return Err(GenerateError::Check(format!(
                "{path}: drawer is not closed on load"
            )));
        }
        if !page.html.contains(&copyright) {
            return Err(GenerateError::Check(format!(
                "{path}: copyright line does not show {year}"
            )));
        }
        if let Route::Category(category) = page.route {
            let expected = category.products().len();
            let cards = page.html.matches(CARD_MARKER).count();
            if cards != expected {
                return Err(GenerateError::Check(format!(
                    "{path}: rendered {cards} product cards, expected {expected}"
                )));
            }
            categories.push(CategoryCheck {
                category,
                expected,
                rendered: cards,
            });
        }
    }

    Ok(CheckReport {
        pages: rendered.len(),
        categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn stylesheet_starts_with_color_variables() {
        let css = stylesheet(&SiteConfig::default());
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--color-brand: #b45309;"));
        assert!(css.contains(".nav-toggle:checked ~ .nav-drawer"));
    }

    #[test]
    fn render_site_keeps_route_order() {
        let pages = render_site(&SiteConfig::default(), 2026);
        let routes: Vec<Route> = pages.iter().map(|p| p.route).collect();
        assert_eq!(routes, Route::ALL.to_vec());
    }

    #[test]
    fn render_site_is_deterministic() {
        let config = SiteConfig::default();
        let first = render_site(&config, 2026);
        let second = render_site(&config, 2026);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.html, b.html);
        }
    }

    #[test]
    fn generate_writes_every_route() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("dist");
        let report = generate(&SiteConfig::default(), None, &out, 2026).unwrap();

        assert_eq!(report.pages.len(), 8);
        for route in Route::ALL {
            let file = out.join(route.output_file());
            assert!(file.exists(), "missing {}", file.display());
        }
        assert!(out.join("collections/pets/index.html").exists());
        assert!(report.assets.is_empty());
    }

    #[test]
    fn generated_pages_inline_config_colors() {
        let tmp = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.colors.brand = "#123456".to_string();
        generate(&config, None, tmp.path(), 2026).unwrap();

        let html = fs::read_to_string(tmp.path().join("about/index.html")).unwrap();
        assert!(html.contains("--color-brand: #123456;"));
        assert!(html.contains("\u{a9} 2026 Mulyam Jewels"));
    }

    #[test]
    fn generate_reports_page_sizes() {
        let tmp = TempDir::new().unwrap();
        let report = generate(&SiteConfig::default(), None, tmp.path(), 2026).unwrap();
        for page in &report.pages {
            let on_disk = fs::metadata(tmp.path().join(&page.file)).unwrap().len();
            assert_eq!(on_disk as usize, page.bytes);
        }
    }

    #[test]
    fn generate_copies_assets() {
        let tmp = TempDir::new().unwrap();
        let assets = tmp.path().join("assets");
        fs::create_dir_all(assets.join("img")).unwrap();
        fs::write(assets.join("favicon.ico"), b"icon").unwrap();
        fs::write(assets.join("img/logo.svg"), b"<svg/>").unwrap();

        let out = tmp.path().join("dist");
        let report = generate(&SiteConfig::default(), Some(&assets), &out, 2026).unwrap();

        assert_eq!(
            report.assets,
            vec![PathBuf::from("favicon.ico"), PathBuf::from("img/logo.svg")]
        );
        assert_eq!(fs::read(out.join("img/logo.svg")).unwrap(), b"<svg/>");
    }

    #[test]
    fn assets_never_replace_generated_pages() {
        let tmp = TempDir::new().unwrap();
        let assets = tmp.path().join("assets");
        fs::create_dir_all(assets.join("about")).unwrap();
        fs::write(assets.join("index.html"), b"stale home").unwrap();
        fs::write(assets.join("about/index.html"), b"stale about").unwrap();
        fs::write(assets.join("about/team.jpg"), b"jpg").unwrap();

        let out = tmp.path().join("dist");
        let report = generate(&SiteConfig::default(), Some(&assets), &out, 2026).unwrap();

        assert_eq!(report.assets, vec![PathBuf::from("about/team.jpg")]);
        let home = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(home.starts_with("<!DOCTYPE html>"));
        let about = fs::read_to_string(out.join("about/index.html")).unwrap();
        assert!(about.contains("<title>"));
        assert!(!about.contains("stale about"));
        assert_eq!(fs::read(out.join("about/team.jpg")).unwrap(), b"jpg");
    }

    #[test]
    fn missing_assets_dir_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let report = generate(
            &SiteConfig::default(),
            Some(&tmp.path().join("nope")),
            &tmp.path().join("dist"),
            2026,
        )
        .unwrap();
        assert!(report.assets.is_empty());
    }

    #[test]
    fn regenerating_overwrites_previous_output() {
        let tmp = TempDir::new().unwrap();
        generate(&SiteConfig::default(), None, tmp.path(), 2025).unwrap();
        generate(&SiteConfig::default(), None, tmp.path(), 2026).unwrap();
        let html = fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert!(html.contains("\u{a9} 2026"));
        assert!(!html.contains("\u{a9} 2025"));
    }

    #[test]
    fn check_passes_for_default_config() {
        let report = check(&SiteConfig::default(), 2026).unwrap();
        assert_eq!(report.pages, 8);
        assert_eq!(report.categories.len(), 3);
        for c in &report.categories {
            assert_eq!(c.expected, 6);
            assert_eq!(c.rendered, c.expected);
        }
    }

    #[test]
    fn check_escapes_site_name_like_the_pages_do() {
        let mut config = SiteConfig::default();
        config.site_name = "Mulyam & Co".to_string();
        assert!(check(&config, 2026).is_ok());
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
