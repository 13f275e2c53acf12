// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{
    parse_macro_input, parse_quote, Attribute, Data, DeriveInput, Fields, Ident, LitStr, Token,
    Visibility,
};

/// `#[derive(Shape)]` macro: generates `Shape` + `Record` impls
///
/// Records, for every declared field in order:
/// - the identifier and whether it is plain `pub`
/// - the raw `#[db("...")]` tag (`"-"`, `"name"`, `"name,json"`, `",json"`)
/// - `#[db(flatten)]` embedding
/// - the record type reachable from the field type, if any
///
/// Column rules are applied at runtime by `sqlshape::resolve`.
///
/// Example:
/// ```ignore
/// use sqlshape::Shape;
///
/// #[derive(Shape)]
/// pub struct User {
///     pub username: String,
///     #[db("id")]
///     pub alias: String,
///     #[db("theme,json")]
///     pub theme: Theme,
///     #[db(flatten)]
///     pub audit: Audit,
///     #[db("-")]
///     pub last_seen: u64,
/// }
/// ```
#[proc_macro_derive(Shape, attributes(db))]
pub fn derive_shape(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// One `db` attribute argument.
enum DbArg {
    Tag(LitStr),
    Flatten,
}

impl Parse for DbArg {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        if input.peek(LitStr) {
            return Ok(Self::Tag(input.parse()?));
        }
        let ident: Ident = input.parse()?;
        if ident == "flatten" {
            Ok(Self::Flatten)
        } else {
            Err(syn::Error::new(
                ident.span(),
                "expected a tag string or `flatten`",
            ))
        }
    }
}

#[derive(Default)]
struct FieldAttrs {
    tag: Option<LitStr>,
    flatten: bool,
}

fn field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut parsed = FieldAttrs::default();
    let mut seen: Option<&Attribute> = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("db")) {
        if seen.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "only one #[db(...)] attribute per field",
            ));
        }
        seen = Some(attr);

        let args = attr.parse_args_with(Punctuated::<DbArg, Token![,]>::parse_terminated)?;
        for arg in args {
            match arg {
                DbArg::Tag(lit) => {
                    if parsed.tag.is_some() {
                        return Err(syn::Error::new_spanned(lit, "duplicate tag string"));
                    }
                    parsed.tag = Some(lit);
                }
                DbArg::Flatten => parsed.flatten = true,
            }
        }
    }

    if parsed.flatten {
        if let Some(tag) = &parsed.tag {
            if tag.value() != "-" {
                return Err(syn::Error::new_spanned(
                    tag,
                    "flatten fields take no column name or options (only \"-\")",
                ));
            }
        }
    }

    Ok(parsed)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let type_name = name.to_string();

    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "Shape types must be 'static, lifetime parameters are not supported",
        ));
    }

    let fields: Vec<&syn::Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Only structs with named fields are supported",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Only structs are supported",
            ))
        }
    };

    let mut descriptors = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "Field must have a name"));
        };
        let ident_str = ident.unraw().to_string();
        let exported = matches!(field.vis, Visibility::Public(_));
        let attrs = field_attrs(&field.attrs)?;
        let ty = &field.ty;

        let tag = match &attrs.tag {
            Some(lit) => quote! { ::core::option::Option::Some(#lit) },
            None => quote! { ::core::option::Option::None },
        };
        let embedded = attrs.flatten;

        // Flattened fields must lead to a record; other fields are probed.
        let nested = if embedded {
            quote! { <#ty as ::sqlshape::Record>::record_type() }
        } else {
            quote! { (&::sqlshape::__private::Probe::<#ty>::new()).record_type() }
        };

        descriptors.push(quote! {
            ::sqlshape::FieldDescriptor {
                ident: #ident_str,
                exported: #exported,
                tag: #tag,
                embedded: #embedded,
                nested: #nested,
            }
        });
    }

    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!('static));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::sqlshape::Shape for #name #ty_generics #where_clause {
            fn describe() -> ::sqlshape::ShapeDescriptor {
                #[allow(unused_imports)]
                use ::sqlshape::__private::{RecordProbe as _, ScalarProbe as _};

                ::sqlshape::ShapeDescriptor::new::<Self>(
                    #type_name,
                    ::std::vec![#(#descriptors),*],
                )
            }
        }

        impl #impl_generics ::sqlshape::Record for #name #ty_generics #where_clause {
            fn record_type() -> ::core::option::Option<::sqlshape::RecordType> {
                ::core::option::Option::Some(::sqlshape::RecordType::of::<Self>())
            }
        }
    })
}
