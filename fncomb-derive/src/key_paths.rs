//! Implementation of the `#[derive(KeyPaths)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, Generics, Ident, parse_macro_input};

/// Main implementation of the `KeyPaths` derive macro.
pub fn derive_key_paths_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Struct(data_struct) => generate_key_paths(name, generics, &data_struct.fields)
            .unwrap_or_else(syn::Error::into_compile_error),
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "KeyPaths can only be derived for structs, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "KeyPaths cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_key_paths(
    name: &Ident,
    generics: &Generics,
    fields: &Fields,
) -> syn::Result<TokenStream2> {
    let named_fields = match fields {
        Fields::Named(named_fields) => &named_fields.named,
        Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "KeyPaths can only be derived for structs with named fields, not tuple structs.",
            ));
        }
        Fields::Unit => {
            return Err(syn::Error::new_spanned(
                name,
                "KeyPaths cannot be derived for unit structs (structs with no fields).",
            ));
        }
    };

    let mut accessors = Vec::with_capacity(named_fields.len());
    for field in named_fields {
        if is_skipped(&field.attrs)? {
            continue;
        }
        if let Some(accessor) = generate_accessor(field) {
            accessors.push(accessor);
        }
    }

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#accessors)*
        }
    })
}

fn generate_accessor(field: &Field) -> Option<TokenStream2> {
    let field_name = field.ident.as_ref()?;
    let field_type = &field.ty;
    let method_name = format_ident!("{}_path", field_name);
    let documentation = format!("Returns a key path to the `{field_name}` field.");

    Some(quote! {
        #[doc = #documentation]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::fncomb::keypath::KeyPath<Self, #field_type> + Clone {
            ::fncomb::keypath::FieldPath::new(
                |root: &Self| &root.#field_name,
                |root: &mut Self| &mut root.#field_name,
            )
        }
    })
}

/// Returns whether the field carries `#[key_path(skip)]`.
fn is_skipped(attributes: &[Attribute]) -> syn::Result<bool> {
    let mut skipped = false;
    for attribute in attributes {
        if !attribute.path().is_ident("key_path") {
            continue;
        }
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skipped = true;
                Ok(())
            } else {
                Err(meta.error("unsupported key_path attribute, expected `skip`"))
            }
        })?;
    }
    Ok(skipped)
}
