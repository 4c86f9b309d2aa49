//! Helpers for nested key-value data.
//!
//! This crate works on a small dynamic value model ([`Value`], [`Key`], [`Map`])
//! and provides:
//! - path lookup with default fallback ([`get_path`], [`Path`])
//! - masking or transforming values by key name at any depth ([`mask_values`],
//!   [`transform_values`], [`Traversal`])
//! - key whitelisting with redaction or removal ([`Whitelist`], [`AllowList`])
//! - lookup in maps keyed by `"low-high"` integer ranges ([`lookup_range`])
//! - stringification and normalization of leaf values ([`stringify_values`])
//! - a map that records how it is read and written ([`LoggedMap`])
//! - attribute-style access over a map ([`AttrMap`], `#[derive(Attributes)]`)
//!
//! What it does not do:
//! - perform I/O or configure logging backends
//! - synchronize access; every type here is meant for single-threaded use
//!
//! Integrations with `serde_json`, `slog`, and `tracing` live behind feature flags.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[cfg(feature = "derive")]
pub use dictwalk_derive::Attributes;

#[allow(unused_extern_crates)]
extern crate self as dictwalk;

// Module declarations
mod attr;
mod error;
#[cfg(feature = "json")]
mod json;
mod logged;
mod path;
mod push;
mod range;
mod search;
#[cfg(feature = "slog")]
pub mod slog;
mod stringify;
#[cfg(feature = "tracing")]
pub mod tracing;
mod transform;
mod value;
mod whitelist;

pub use attr::{AttrMap, AttrRef};
pub use error::DictError;
pub use logged::{Access, AccessOp, LoggedMap};
pub use path::{PATH_DELIMITERS, Path, get_path, get_path_ref};
pub use push::{PushedKeys, push_keys};
pub use range::{RangeKey, RangeKeyError, lookup_range, range_entries};
pub use search::{contains_key_nested, find_key_paths, has_non_empty_value};
pub use stringify::{normalize, stringify_map, stringify_values};
pub use transform::{
    FnMapper, MASK_MARKER, Mask, PII_KEYS, TargetKeys, Traversal, ValueMapper, mask_values,
    mask_values_in_place, transform_values, transform_values_in_place,
};
pub use value::{Key, Map, Value};
pub use whitelist::{AllowList, Disallowed, REDACTED_PLACEHOLDER, Whitelist, whitelist};
