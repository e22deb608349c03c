#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod builder;
mod character_sets;
mod checkers;
mod compare;
mod error;
mod helpers;
mod ipv6;
mod parser;
mod path;
mod percent;
mod text_range;
mod types;
mod uri;
mod uri_components;

// Public API
pub use builder::{BlockLayout, build};
pub use compare::{compare, compare_field};
pub use error::ParseError;
pub use parser::{ParsedUri, parse_uri_reference};
pub use text_range::TextRange;
pub use types::Component;
pub use uri::Uri;

pub type Result<T> = core::result::Result<T, ParseError>;
