//! Beta code to polytonic Greek transliteration.
//!
//! Converts the ASCII beta code convention used in classical-studies
//! typesetting into Unicode Greek with full diacritics: breathings,
//! accents, iota subscript, diaeresis, vowel length marks and capitals.
//! Conversion is total -- malformed or unsupported sequences pass through
//! unchanged instead of raising errors.
//!
//! # Architecture
//!
//! - [`modifier`] -- modifier flags, mutual exclusion, the modifier reader
//! - [`tables`] -- precomposed glyph tables, one per vowel family
//! - [`variant`] -- slot computation into the glyph tables
//! - [`capital`] -- legality rules for capital-marker tokens
//! - [`convert`] -- the per-character dispatch loop
//!
//! # Example
//!
//! ```
//! use bcgreek_core::{Converter, Options};
//!
//! let converter = Converter::new(Options::default());
//! assert_eq!(converter.convert_str("mh=nin"), "μῆνιν");
//! ```

pub mod capital;
pub mod convert;
pub mod modifier;
pub mod tables;
pub mod variant;

pub use convert::{Converter, Options};
