//! Parsing of the `#[attributes(...)]` container attribute.
//!
//! Each entry is either a bare method name or `method = "map key"`.

use proc_macro2::Span;
use syn::{
    Attribute, Fields, Ident, Index, LitStr, Member, Meta, Result, Token,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
};

/// One generated attribute accessor.
pub(crate) struct AttributeEntry {
    /// Getter name; the setter is `set_<method>`.
    pub(crate) method: Ident,
    /// Map key read and written by the accessors.
    pub(crate) key: LitStr,
}

impl Parse for AttributeEntry {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let method: Ident = input.parse()?;
        let key = if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            input.parse::<LitStr>()?
        } else {
            LitStr::new(&method.unraw().to_string(), method.span())
        };
        if key.value().is_empty() {
            return Err(syn::Error::new(key.span(), "attribute key must not be empty"));
        }
        Ok(Self { method, key })
    }
}

pub(crate) fn parse_attribute_entries(attrs: &[Attribute]) -> Result<Vec<AttributeEntry>> {
    let mut entries: Vec<AttributeEntry> = Vec::new();
    for attr in attrs {
        if !attr.path().is_ident("attributes") {
            continue;
        }

        if !matches!(attr.meta, Meta::List(_)) {
            return Err(syn::Error::new(
                attr.span(),
                "expected #[attributes(name, ...)] syntax",
            ));
        }

        let parsed =
            attr.parse_args_with(Punctuated::<AttributeEntry, Token![,]>::parse_terminated)?;
        for entry in parsed {
            if entries
                .iter()
                .any(|existing| existing.method.unraw() == entry.method.unraw())
            {
                return Err(syn::Error::new(
                    entry.method.span(),
                    format!("duplicate attribute `{}`", entry.method.unraw()),
                ));
            }
            if entries
                .iter()
                .any(|existing| existing.key.value() == entry.key.value())
            {
                return Err(syn::Error::new(
                    entry.key.span(),
                    format!("duplicate attribute key \"{}\"", entry.key.value()),
                ));
            }
            entries.push(entry);
        }
    }
    Ok(entries)
}

/// Locates the single field that holds the `AttrMap`.
pub(crate) fn inner_member(fields: &Fields, span: Span) -> Result<Member> {
    let member = match fields {
        Fields::Named(named) if named.named.len() == 1 => named
            .named
            .first()
            .and_then(|field| field.ident.clone())
            .map(Member::Named),
        Fields::Unnamed(unnamed) if unnamed.unnamed.len() == 1 => {
            Some(Member::Unnamed(Index::from(0)))
        }
        _ => None,
    };
    member.ok_or_else(|| {
        syn::Error::new(
            span,
            "`Attributes` requires a struct with exactly one field holding the `AttrMap`",
        )
    })
}
