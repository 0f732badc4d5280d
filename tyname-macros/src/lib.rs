#![deny(
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![warn(unreachable_pub)]
#![doc = include_str!("../README.md")]

use proc_macro::TokenStream;

mod expr;
mod type_name;
mod utils;

/// Derives `TypeName` for a user-defined type, rendering it under its own name.
///
/// The type also gets `ObjectName`, so it can be qualified, pointed to and stored in arrays.
///
/// # Attributes
///
/// - `#[tyname(rename = "...")]`: render the type under the given name instead.
/// - `#[tyname(crate = "...")]`: path of the `tyname` crate, `::tyname` by default.
///
/// # Limitations
///
/// Generic types are not supported, as their name would not include the type arguments.
///
/// ```rust,compile_fail
/// # use tyname::TypeName;
/// #[derive(TypeName)]  // This will fail to compile
/// struct Wrapper<T>(T);
/// ```
///
/// # Examples
///
/// ```rust
/// use tyname::{type_name, Const, TypeName};
///
/// #[derive(TypeName)]
/// struct Widget {
///     id: u32,
/// }
///
/// #[derive(TypeName)]
/// #[tyname(rename = "ns::Gadget")]
/// enum Gadget {
///     On,
///     Off,
/// }
///
/// assert_eq!(type_name::<Widget>(), "Widget");
/// assert_eq!(type_name::<*const Widget>(), "Widget const*");
/// assert_eq!(type_name::<&Const<*mut Gadget>>(), "ns::Gadget* const&");
/// ```
#[proc_macro_derive(TypeName, attributes(tyname))]
pub fn derive_type_name(input: TokenStream) -> TokenStream {
    type_name::derive_type_name(input)
}

/// Renders the declared types of the given expressions, separated by `", "`.
///
/// The expressions are not evaluated. A variable reports its declared type, references
/// included, and a string literal reports a reference to its character array.
///
/// ```rust
/// use tyname::{exact, Const};
///
/// let a = 5;
/// let r = &a;
/// let p = Const::new(&a as *const i32);
///
/// assert_eq!(exact!(a), "int");
/// assert_eq!(exact!(r), "int const&");
/// assert_eq!(exact!(p, 42), "int const* const, int");
/// assert_eq!(exact!("hello"), "char [6] const&");
/// assert_eq!(exact!(), "");
/// ```
#[proc_macro]
pub fn exact(input: TokenStream) -> TokenStream {
    expr::expand(input, expr::Form::Exact)
}

/// Renders the template arguments deduced for the given expressions when forwarded, separated
/// by `", "`.
///
/// Variables, fields, elements, dereferences and string literals are lvalues and deduce an
/// lvalue reference. Any other expression is an rvalue and deduces its plain type.
///
/// The category is decided from the syntax alone. A path whose last segment starts with an
/// uppercase letter is taken for a constant, a unit struct or a variant, so it is an rvalue.
/// This includes `static` items. Write `*&STATIC` to pass a static as an lvalue.
///
/// ```rust
/// use tyname::full;
///
/// let a = 5;
///
/// assert_eq!(full!(a), "int&");
/// assert_eq!(full!(1), "int");
/// assert_eq!(full!(1, "hello"), "int, char [6] const&");
///
/// static LIMIT: i32 = 3;
/// assert_eq!(full!(LIMIT), "int");
/// assert_eq!(full!(*&LIMIT), "int&");
/// ```
#[proc_macro]
pub fn full(input: TokenStream) -> TokenStream {
    expr::expand(input, expr::Form::Deduced)
}

/// Renders the forwarding parameter types for the given expressions, separated by `", "`.
///
/// ```rust
/// use tyname::forwarded;
///
/// let a = 5;
///
/// assert_eq!(forwarded!(a, 42), "int&, int&&");
/// ```
#[proc_macro]
pub fn forwarded(input: TokenStream) -> TokenStream {
    expr::expand(input, expr::Form::Parameter)
}
