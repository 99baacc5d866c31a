//! Implementation of the `#[derive(Lenses)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Field, Fields, Generics, Ident, parse_macro_input};

pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Struct(data_struct) => generate_struct_lenses(name, generics, &data_struct.fields)
            .unwrap_or_else(syn::Error::into_compile_error),
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Lenses can only be derived for structs, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Lenses cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_struct_lenses(
    name: &Ident,
    generics: &Generics,
    fields: &Fields,
) -> syn::Result<TokenStream2> {
    let named_fields = match fields {
        Fields::Named(named_fields) => &named_fields.named,
        Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Lenses can only be derived for structs with named fields, not tuple structs.",
            ));
        }
        Fields::Unit => {
            return Err(syn::Error::new_spanned(
                name,
                "Lenses cannot be derived for unit structs (structs with no fields).",
            ));
        }
    };

    let mut lens_methods = Vec::with_capacity(named_fields.len());
    for field in named_fields {
        if is_skipped(field)? {
            continue;
        }
        lens_methods.push(generate_field_lens(field)?);
    }

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#lens_methods)*
        }
    })
}

fn generate_field_lens(field: &Field) -> syn::Result<TokenStream2> {
    let Some(field_name) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(field, "expected a named field"));
    };
    let field_type = &field.ty;
    let method_name = format_ident!("{}_lens", field_name);
    let doc = format!("Returns a lens focusing on the `{field_name}` field.");

    Ok(quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::fnkit::optics::Lens<Self, #field_type> + Clone {
            ::fnkit::optics::FunctionLens::new(
                |source: &Self| &source.#field_name,
                |mut source: Self, value: #field_type| {
                    source.#field_name = value;
                    source
                },
            )
        }
    })
}

/// Reads `#[lens(skip)]`; any other option inside `#[lens(..)]` is an error.
fn is_skipped(field: &Field) -> syn::Result<bool> {
    let mut skipped = false;
    for attribute in field.attrs.iter().filter(|attribute| attribute.path().is_ident("lens")) {
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skipped = true;
                Ok(())
            } else {
                Err(meta.error("unsupported lens option, expected `skip`"))
            }
        })?;
    }
    Ok(skipped)
}
