//! WestVPN Localization
//!
//! Maps a selected display language to a table of UI strings.
//!
//! # Design
//!
//! - [`LanguageKey`] is a closed enum over the three supported locales.
//!   The persisted form is the display name ("Русский", "English", "Türkçe"),
//!   matching what earlier builds of the client stored.
//! - [`MessageId`] is a closed set of message identifiers. Every view looks
//!   strings up by id; no view carries its own string table.
//! - [`Catalog`] resolves a language to its static table, falling back to the
//!   default locale for anything unknown. A missing or empty entry is a
//!   configuration defect, caught once at startup by [`Catalog::validate`],
//!   never a runtime condition to recover from.

mod catalog;
mod language;

pub use catalog::{Catalog, CatalogError, MessageId, Strings};
pub use language::{LanguageKey, UnknownLanguage};
