use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Error, Expr, Lit, LitStr};

/// Options given through `#[tyname(...)]` attributes.
#[derive(Default)]
pub(crate) struct Options {
    /// The crate path, from `crate = "..."`.
    pub(crate) crate_path: Option<TokenStream2>,
    /// The rendered name, from `rename = "..."`.
    pub(crate) rename: Option<LitStr>,
}

impl Options {
    /// The crate path, defaulting to `::tyname`.
    pub(crate) fn crate_path(&self) -> TokenStream2 {
        self.crate_path.clone().unwrap_or_else(|| quote! { ::tyname })
    }
}

/// Parse the `#[tyname(...)]` attributes.
///
/// Looks for `#[tyname(crate = "...")]` and `#[tyname(rename = "...")]`. Any other key is an
/// error.
///
/// # Examples
///
/// ```ignore
/// #[derive(TypeName)]
/// #[tyname(crate = "crate", rename = "ns::Widget")]
/// struct Widget;
/// ```
pub(crate) fn parse_options(attrs: &[Attribute]) -> Result<Options, Error> {
    let mut options = Options::default();

    for attr in attrs {
        if !attr.path().is_ident("tyname") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit_str: LitStr = meta.value()?.parse()?;
                options.crate_path = Some(syn::parse_str(&lit_str.value())?);
            } else if meta.path.is_ident("rename") {
                let lit_str: LitStr = meta.value()?.parse()?;
                if lit_str.value().trim().is_empty() {
                    return Err(Error::new_spanned(lit_str, "type name must not be empty"));
                }
                options.rename = Some(lit_str);
            } else {
                return Err(meta.error("unsupported tyname attribute"));
            }
            Ok(())
        })?;
    }

    Ok(options)
}

/// Whether `expr` designates an existing object rather than a temporary.
///
/// Variables, fields, elements and dereferences are lvalues, as are string literals. So is any
/// of those in parentheses. Paths ending in an uppercase identifier name constants, unit
/// structs or variants, which are values.
pub(crate) fn is_lvalue(expr: &Expr) -> bool {
    match expr {
        Expr::Path(path) => !path.path.segments.last().is_some_and(|segment| {
            segment
                .ident
                .to_string()
                .starts_with(|c: char| c.is_ascii_uppercase())
        }),
        Expr::Field(_) | Expr::Index(_) => true,
        Expr::Unary(unary) => matches!(unary.op, syn::UnOp::Deref(_)),
        Expr::Paren(paren) => is_lvalue(&paren.expr),
        Expr::Group(group) => is_lvalue(&group.expr),
        Expr::Lit(lit) => string_literal_len(&lit.lit).is_some(),
        _ => false,
    }
}

/// The length of the character array a string literal denotes, terminator included.
///
/// Returns `None` for other literals. Byte strings are left to their Rust type.
fn string_literal_len(lit: &Lit) -> Option<usize> {
    match lit {
        Lit::Str(s) => Some(s.value().len() + 1),
        Lit::CStr(s) => Some(s.value().as_bytes_with_nul().len()),
        _ => None,
    }
}

/// The array length of the string literal `expr`, looking through parentheses.
pub(crate) fn string_array_len(expr: &Expr) -> Option<usize> {
    match expr {
        Expr::Lit(lit) => string_literal_len(&lit.lit),
        Expr::Paren(paren) => string_array_len(&paren.expr),
        Expr::Group(group) => string_array_len(&group.expr),
        _ => None,
    }
}
