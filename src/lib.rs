//! # Adorna Site
//!
//! A static site generator for a handcrafted-goods studio: one-of-a-kind
//! earrings and small-batch botanical skincare. The studio's data files are
//! the source: a CSV of earring attributes, a plain-text file of artist
//! statements, and JSON lists of products and market locations.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Content moves through two independent stages joined by a JSON manifest:
//!
//! ```text
//! 1. Scan      content/  →  catalog.json   (data files → joined, classified catalog)
//! 2. Generate  catalog   →  dist/          (final HTML site)
//! ```
//!
//! The manifest is human-readable, so every decision the scan made (which
//! pieces were excluded, which view fell back to placeholder data) can be
//! inspected before anything is rendered.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: loads every data source and produces the catalog manifest |
//! | [`generate`] | Stage 2: renders the site from the manifest using Maud |
//! | [`records`] | Joins attribute rows with artist statements into catalog items |
//! | [`classify`] | Ordered collection rules for earring filenames |
//! | [`exclusion`] | Denylist and dice cap applied before the join |
//! | [`catalog`] | Resource loading, load errors, and placeholder fallback |
//! | [`presenter`] | Search, category filter, and load-more paging for a view |
//! | [`appointment`] | Appointment requests and the notifiers that deliver them |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`types`] | Shared types serialized in the manifest |
//! | [`naming`] | Filename parsing and title humanizing |
//! | [`output`] | CLI output formatting for every command |
//!
//! # Design Decisions
//!
//! ## Placeholder Over Empty Page
//!
//! A view whose data cannot be read, or reads as empty, never renders blank.
//! It falls back to a small built-in placeholder set and shows a notice. The
//! failure is logged and recorded in the manifest next to the items.
//!
//! ## Load More as Static Pages
//!
//! Paging is modeled by [`presenter::CatalogView`]. Generation walks the same
//! presenter, so each "Load More" link points at the next pre-rendered page,
//! which shows everything the previous page did plus one more page of items.
//! Live search narrows the displayed cards in the browser without a server.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup is
//! a build error and all interpolation is auto-escaped, which matters for
//! artist statements that arrive as free text.

pub mod appointment;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod exclusion;
pub mod generate;
pub mod naming;
pub mod output;
pub mod presenter;
pub mod records;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
