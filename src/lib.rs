//! # Mulyam
//!
//! Static site generator for the Mulyam Jewels storefront: fashion jewelry
//! for women, kids and pets. Every page is rendered from literal data
//! compiled into the binary; the only inputs at build time are an optional
//! `site.toml` and an optional assets directory.
//!
//! # Architecture
//!
//! ```text
//! catalog   literal display data (products, collections, size chart, copy)
//!    │
//! sections  data → markup fragments (cards, grids, bands, form)
//!    │
//! pages     one assembly per route, sections in fixed order
//!    │
//! shell     document, header bar, mobile drawer, footer
//!    │
//! generate  render all routes in parallel, write dist/, copy assets
//! ```
//!
//! Rendering is pure: the same config and year always produce byte-identical
//! HTML. The only clock read happens once per build, in
//! [`generate::current_year`], and flows down through
//! [`shell::RenderContext`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Products, collection tiles, nav links, size chart and all page copy |
//! | [`classes`] | Class-string composition with conditionals and BEM modifier resolution |
//! | [`config`] | `site.toml` loading, merging over stock defaults, validation, color CSS |
//! | [`drawer`] | Mobile navigation drawer state machine |
//! | [`routes`] | Fixed route table: paths, output files, titles |
//! | [`shell`] | Document wrapper, header, drawer and footer around every page |
//! | [`sections`] | Presentational building blocks shared by pages |
//! | [`pages`] | Per-route page assemblies |
//! | [`generate`] | Writes the site to disk and runs the in-memory `check` |
//! | [`output`] | CLI output formatting |
//! | [`serve`] | Local preview server for the built site |
//!
//! # Output
//!
//! Plain HTML with the stylesheet inlined and a few lines of vanilla
//! JavaScript for the drawer. Pretty URLs (`/about/`) map to
//! `about/index.html`, so the output needs no server rewrites.

pub mod catalog;
pub mod classes;
pub mod config;
pub mod drawer;
pub mod generate;
pub mod output;
pub mod pages;
pub mod routes;
pub mod sections;
pub mod serve;
pub mod shell;
