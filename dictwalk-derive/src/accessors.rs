//! Code generation for attribute accessors.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Generics, Ident, Member, ext::IdentExt};

use crate::{container::AttributeEntry, crate_root};

pub(crate) fn expand_accessors(
    ident: &Ident,
    generics: &Generics,
    inner: &Member,
    entries: &[AttributeEntry],
) -> TokenStream {
    let root = crate_root();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let methods = entries.iter().map(|entry| {
        let getter = &entry.method;
        let setter = format_ident!("set_{}", getter.unraw(), span = getter.span());
        let key = &entry.key;
        let getter_doc = format!("Reads the `{}` attribute.", key.value());
        let setter_doc = format!(
            "Writes the `{}` attribute, returning the previous value.",
            key.value()
        );
        quote! {
            #[doc = #getter_doc]
            pub fn #getter(&self) -> ::core::result::Result<&#root::Value, #root::DictError> {
                self.#inner.get_attr(#key)
            }

            #[doc = #setter_doc]
            pub fn #setter(
                &mut self,
                value: impl ::core::convert::Into<#root::Value>,
            ) -> ::core::option::Option<#root::Value> {
                self.#inner.set_attr(#key, value)
            }
        }
    });
    let keys = entries.iter().map(|entry| &entry.key);

    let construct = match inner {
        Member::Named(name) => quote! { Self { #name: map } },
        Member::Unnamed(_) => quote! { Self(map) },
    };

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            /// Map keys with generated accessors, in declaration order.
            pub const ATTRIBUTE_KEYS: &'static [&'static str] = &[#(#keys),*];

            #(#methods)*

            /// Declared attribute keys absent from the map.
            pub fn missing_attributes(&self) -> ::std::vec::Vec<&'static str> {
                Self::ATTRIBUTE_KEYS
                    .iter()
                    .copied()
                    .filter(|key| !self.#inner.has_attr(key))
                    .collect()
            }
        }

        impl #impl_generics ::core::convert::From<#root::AttrMap> for #ident #ty_generics #where_clause {
            fn from(map: #root::AttrMap) -> Self {
                #construct
            }
        }

        impl #impl_generics ::core::convert::AsRef<#root::AttrMap> for #ident #ty_generics #where_clause {
            fn as_ref(&self) -> &#root::AttrMap {
                &self.#inner
            }
        }
    }
}
