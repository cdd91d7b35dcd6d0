//! Wildcard name matching for evkit events.
//!
//! Event names are flat strings. A subscription pattern may contain:
//!
//! - `*` — zero or more characters, including `.` separators
//! - `?` — exactly one character
//!
//! Every other character matches itself. Matching is anchored at both ends:
//! the whole name must be consumed by the whole pattern.
//!
//! # Modules
//!
//! - [`matcher`] — The [`wild_match`] function and [`has_wildcard`] helper
//! - [`pattern`] — Precompiled [`Pattern`] for repeated matching

pub mod matcher;
pub mod pattern;

pub use matcher::{has_wildcard, wild_match, ANY_ONE, ANY_RUN};
pub use pattern::Pattern;
