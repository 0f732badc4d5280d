use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{parse::Parser, punctuated::Punctuated, Error, Expr, Ident, Token};

use crate::utils::{is_lvalue, string_array_len};

/// What a value macro reports for each argument.
#[derive(Clone, Copy)]
pub(crate) enum Form {
    /// The declared type of the expression, `exact!`.
    Exact,
    /// The deduced template argument, `full!`.
    Deduced,
    /// The forwarding parameter type, `forwarded!`.
    Parameter,
}

/// Main entry point for the value macros.
pub(crate) fn expand(input: proc_macro::TokenStream, form: Form) -> proc_macro::TokenStream {
    match expand_impl(input.into(), form) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_impl(input: TokenStream2, form: Form) -> Result<TokenStream2, Error> {
    let args = Punctuated::<Expr, Token![,]>::parse_terminated.parse2(input)?;

    let expanded = match form {
        Form::Exact => {
            let descriptors = args.iter().map(exact_descriptor);
            quote! { ::tyname::join(&[#(#descriptors),*]) }
        }
        Form::Deduced => {
            let forwarded = args.iter().map(forwarded);
            quote! { ::tyname::deduced(&[#(#forwarded),*]) }
        }
        Form::Parameter => {
            let forwarded = args.iter().map(forwarded);
            quote! { ::tyname::parameters(&[#(#forwarded),*]) }
        }
    };

    Ok(expanded)
}

/// The type of a string literal of `len` characters: an array of constant `char`.
fn string_literal_type(len: usize) -> TokenStream2 {
    quote! { [::tyname::Const<::tyname::Char>; #len] }
}

/// A `TypeDescriptor` expression for the declared type of `expr`, which is not evaluated.
fn exact_descriptor(expr: &Expr) -> TokenStream2 {
    // A string literal is an lvalue of array type, so its declared type is a reference to it.
    if let Some(len) = string_array_len(expr) {
        let ty = string_literal_type(len);
        return quote! { ::tyname::descriptor::<::tyname::LRef<#ty>>() };
    }

    // Mixed-site hygiene keeps the local from shadowing a caller variable of the same name.
    let slot = Ident::new("capture", Span::mixed_site());
    quote! {
        {
            let #slot = ::tyname::Capture::new();
            if false {
                #slot.capture(&(#expr));
            }
            #slot.descriptor()
        }
    }
}

/// A `Forwarded` expression for `expr` bound to a forwarding parameter.
fn forwarded(expr: &Expr) -> TokenStream2 {
    if let Some(len) = string_array_len(expr) {
        let ty = string_literal_type(len);
        return quote! {
            ::tyname::Forwarded::new::<#ty>(::tyname::ValueCategory::Lvalue)
        };
    }

    if is_lvalue(expr) {
        quote! { ::tyname::Forwarded::lvalue(&(#expr)) }
    } else {
        quote! { ::tyname::Forwarded::rvalue(&(#expr)) }
    }
}
