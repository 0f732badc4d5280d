use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Error, LitStr};

use crate::utils::parse_options;

/// Main entry point for the TypeName derive macro.
pub(crate) fn derive_type_name(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match derive_type_name_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_type_name_impl(input: DeriveInput) -> Result<TokenStream2, Error> {
    let name = &input.ident;
    let options = parse_options(&input.attrs)?;

    // A name is rendered without template arguments, so it must denote a single type.
    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "TypeName derive macro does not support generic types",
        ));
    }

    let crate_path = options.crate_path();
    let type_name = options
        .rename
        .unwrap_or_else(|| LitStr::new(&name.to_string(), name.span()));

    let expanded = quote! {
        impl #crate_path::TypeName for #name {
            const TYPE: &'static #crate_path::Type<'static> =
                &#crate_path::Type::Object(#crate_path::Object::Named(#type_name));
        }

        impl #crate_path::ObjectName for #name {}
    };

    Ok(expanded)
}
