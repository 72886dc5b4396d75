//! CLI output formatting.
//!
//! Output is **page-centric, not file-centric**: every line leads with the
//! route's positional index and label, with the output path as context after
//! an arrow.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! 001 Home → index.html (48.2 KB)
//! 002 Collections → collections/index.html (41.7 KB)
//! 003 Women → collections/women/index.html (44.0 KB)
//! ...
//!
//! Assets
//!     favicon.ico
//!
//! Generated 8 pages, 1 asset → dist
//! ```
//!
//! ## Check
//!
//! ```text
//! Women: 6 product cards
//! Kids: 6 product cards
//! Pets: 6 product cards
//! Rendered 8 pages
//! ```
//!
//! ## Routes
//!
//! ```text
//! 001 /                    Home
//! 002 /collections/        Collections
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::generate::{BuildReport, CheckReport};
use crate::routes::Route;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Human-readable byte count: bytes below 1 KiB, KB with one decimal above.
fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{} {}", n, word)
    } else {
        format!("{} {}s", n, word)
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, page) in report.pages.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {} ({})",
            format_index(i + 1),
            page.route.label(),
            page.file.display(),
            format_size(page.bytes)
        ));
    }

    if !report.assets.is_empty() {
        lines.push(String::new());
        lines.push("Assets".to_string());
        for asset in &report.assets {
            lines.push(format!("{}{}", indent(1), asset.display()));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {} \u{2192} {}",
        plural(report.pages.len(), "page"),
        plural(report.assets.len(), "asset"),
        report.output_dir.display()
    ));

    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(report: &CheckReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .categories
        .iter()
        .map(|c| {
            format!(
                "{}: {}",
                c.category.name(),
                plural(c.rendered, "product card")
            )
        })
        .collect();
    lines.push(format!("Rendered {}", plural(report.pages, "page")));
    lines
}

pub fn print_check_output(report: &CheckReport) {
    for line in format_check_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Routes
// ============================================================================

/// The route table: index, path, label, and the `<title>` page name.
pub fn format_routes() -> Vec<String> {
    let width = Route::ALL
        .iter()
        .map(|r| r.path().len())
        .max()
        .unwrap_or(0);

    Route::ALL
        .iter()
        .enumerate()
        .map(|(i, route)| {
            let line = format!(
                "{} {:<width$} {}",
                format_index(i + 1),
                route.path(),
                route.label(),
                width = width
            );
            match route.title() {
                Some(title) if title != route.label() => format!("{} ({})", line, title),
                _ => line,
            }
        })
        .collect()
}

pub fn print_routes() {
    for line in format_routes() {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::generate::{CategoryCheck, PageReport};
    use std::path::PathBuf;

    fn report(assets: Vec<PathBuf>) -> BuildReport {
        BuildReport {
            output_dir: PathBuf::from("dist"),
            year: 2026,
            pages: vec![
                PageReport {
                    route: Route::Home,
                    file: PathBuf::from("index.html"),
                    bytes: 2048,
                },
                PageReport {
                    route: Route::Category(Category::Pets),
                    file: PathBuf::from("collections/pets/index.html"),
                    bytes: 512,
                },
            ],
            assets,
        }
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn format_size_units() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
    }

    #[test]
    fn build_output_lists_pages_in_order() {
        let lines = format_build_output(&report(vec![]));
        assert_eq!(lines[0], "001 Home \u{2192} index.html (2.0 KB)");
        assert_eq!(lines[1], "002 Pets \u{2192} collections/pets/index.html (512 B)");
        assert_eq!(
            lines.last().unwrap(),
            "Generated 2 pages, 0 assets \u{2192} dist"
        );
        assert!(!lines.iter().any(|l| l == "Assets"));
    }

    #[test]
    fn build_output_lists_assets() {
        let lines = format_build_output(&report(vec![PathBuf::from("favicon.ico")]));
        let at = lines.iter().position(|l| l == "Assets").unwrap();
        assert_eq!(lines[at + 1], "    favicon.ico");
        assert!(lines.last().unwrap().contains("1 asset \u{2192}"));
    }

    #[test]
    fn check_output() {
        let report = CheckReport {
            pages: 8,
            categories: vec![CategoryCheck {
                category: Category::Kids,
                expected: 6,
                rendered: 6,
            }],
        };
        assert_eq!(
            format_check_output(&report),
            vec!["Kids: 6 product cards", "Rendered 8 pages"]
        );
    }

    #[test]
    fn routes_table_aligns_paths() {
        let lines = format_routes();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("001 /    "));
        assert!(lines[0].ends_with("Home"));
        assert!(lines[2].contains("/collections/women/ Women (Women's Jewelry Collection)"));
        // Size Guide's title equals its label, so no suffix.
        assert!(lines[6].ends_with("Size Guide"));
    }
}
