//! Derive macros for `dictwalk`.
//!
//! This crate generates the code behind `#[derive(Attributes)]`. It:
//! - reads the `#[attributes(...)]` list on a newtype around `dictwalk::AttrMap`
//! - emits one getter and one setter per listed attribute
//!
//! It does **not** define `AttrMap` or its error type. Those live in the main
//! `dictwalk` crate; generated code calls into them at runtime.

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

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input, spanned::Spanned};

mod accessors;
mod container;
use accessors::expand_accessors;
use container::{inner_member, parse_attribute_entries};

/// Derives named accessors for a newtype around `dictwalk::AttrMap`.
///
/// # Container Attributes
///
/// - `#[attributes(name, email)]` - one getter/setter pair per listed name. The
///   map key is the name itself.
/// - `#[attributes(tax_id = "business_tax_id")]` - the method is `tax_id` but the
///   map key is `"business_tax_id"`.
///
/// Several `#[attributes(...)]` lists may be given; they are concatenated.
///
/// # Generated Items
///
/// For each attribute `name`:
/// - `fn name(&self) -> Result<&Value, DictError>`, failing with
///   `DictError::NotFound` when the key is absent
/// - `fn set_name(&mut self, value: impl Into<Value>) -> Option<Value>`
///
/// Plus `ATTRIBUTE_KEYS`, `missing_attributes()`, `From<AttrMap>`, and
/// `AsRef<AttrMap>`.
///
/// The struct must have exactly one field (named or unnamed) of type `AttrMap`.
/// Enums and unions are rejected at compile time.
#[proc_macro_derive(Attributes, attributes(attributes))]
pub fn derive_attributes(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let inner = match &data {
        Data::Struct(data) => inner_member(&data.fields, ident.span())?,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "`Attributes` can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "`Attributes` can only be derived for structs",
            ));
        }
    };

    let entries = parse_attribute_entries(&attrs)?;
    if entries.is_empty() {
        return Err(syn::Error::new(
            ident.span(),
            "missing attribute list: add #[attributes(name, ...)] to the struct",
        ));
    }

    Ok(expand_accessors(&ident, &generics, &inner, &entries))
}

/// Returns the token stream to reference the dictwalk crate root.
///
/// Handles crate renaming (e.g., `dw = { package = "dictwalk", ... }`)
/// and internal usage (when the derive is used inside dictwalk itself).
fn crate_root() -> TokenStream {
    match crate_name("dictwalk") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::dictwalk },
    }
}
