//! `#[derive(CheckType)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitStr, Variant};

/// Parsed `#[check(...)]` options of one variant.
struct VariantArgs {
    all: bool,
    group: Option<Ident>,
    name: Option<LitStr>,
}

impl VariantArgs {
    fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut args = VariantArgs {
            all: false,
            group: None,
            name: None,
        };

        for attr in attrs.iter().filter(|a| a.path().is_ident("check")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("all") {
                    args.all = true;
                    Ok(())
                } else if meta.path.is_ident("group") {
                    args.group = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("name") {
                    args.name = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    let key = meta
                        .path
                        .get_ident()
                        .map(ToString::to_string)
                        .unwrap_or_default();
                    Err(meta.error(format!("unknown attribute: {}", key)))
                }
            })?;
        }

        Ok(args)
    }
}

struct Node<'a> {
    variant: &'a Variant,
    args: VariantArgs,
}

/// Implementation of `#[derive(CheckType)]`.
pub(crate) fn derive_check_type_impl(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    let variants = match &input.data {
        Data::Enum(data_enum) => &data_enum.variants,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "CheckType can only be derived for enums",
            ));
        }
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "CheckType cannot be derived for generic enums",
        ));
    }

    let mut nodes = Vec::with_capacity(variants.len());
    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "CheckType variants must not carry data",
            ));
        }
        nodes.push(Node {
            variant,
            args: VariantArgs::parse(&variant.attrs)?,
        });
    }

    let mut universal = nodes.iter().filter(|n| n.args.all);
    let all_variant = match (universal.next(), universal.next()) {
        (Some(node), None) => &node.variant.ident,
        (None, _) => {
            return Err(syn::Error::new_spanned(
                name,
                "one variant must be marked #[check(all)]",
            ));
        }
        (Some(_), Some(second)) => {
            return Err(syn::Error::new_spanned(
                &second.variant.ident,
                "only one variant may be marked #[check(all)]",
            ));
        }
    };

    for node in &nodes {
        let Some(group) = &node.args.group else {
            continue;
        };
        if node.args.all {
            return Err(syn::Error::new_spanned(
                group,
                "the #[check(all)] variant cannot belong to a group",
            ));
        }
        if !nodes.iter().any(|n| n.variant.ident == *group) {
            return Err(syn::Error::new_spanned(
                group,
                format!("unknown group `{}`", group),
            ));
        }
        if *group == node.variant.ident {
            return Err(syn::Error::new_spanned(
                group,
                "a check type cannot be its own group",
            ));
        }
    }

    let values = nodes.iter().map(|n| {
        let ident = &n.variant.ident;
        quote! { #name::#ident }
    });

    let group_arms = nodes.iter().map(|n| {
        let ident = &n.variant.ident;
        match &n.args.group {
            Some(group) => quote! { #name::#ident => ::core::option::Option::Some(#name::#group), },
            None => quote! { #name::#ident => ::core::option::Option::None, },
        }
    });

    let name_arms = nodes.iter().map(|n| {
        let ident = &n.variant.ident;
        let display = n
            .args
            .name
            .as_ref()
            .map(LitStr::value)
            .unwrap_or_else(|| ident.to_string());
        quote! { #name::#ident => #display, }
    });

    Ok(quote! {
        impl ::checkhook::CheckType for #name {
            const ALL: Self = #name::#all_variant;

            fn values() -> &'static [Self] {
                &[#(#values),*]
            }

            fn group(self) -> ::core::option::Option<Self> {
                match self {
                    #(#group_arms)*
                }
            }

            fn name(self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }
        }
    })
}
