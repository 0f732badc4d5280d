//! Value categories and the two ways of asking for the type of an expression.
//!
//! [`Capture`] reports the static type of an expression as declared, without evaluating it.
//! [`Forwarded`] models binding an argument to a forwarding parameter (`T&&` with `T` deduced):
//! what gets reported then depends on whether the argument is an lvalue or an rvalue.

use core::{fmt, marker::PhantomData};
use serde::{Deserialize, Serialize};

use crate::{descriptor, ReferenceKind, TypeDescriptor, TypeName};

/// Whether an argument names an existing object or is a temporary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueCategory {
    /// An addressable, existing object: a variable, a field, an element or a string literal.
    Lvalue,
    /// A temporary, such as a literal or the result of a call.
    Rvalue,
}

/// An argument bound to a forwarding parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forwarded {
    declared: TypeDescriptor,
    category: ValueCategory,
}

impl Forwarded {
    /// An argument of declared type `T` and the given category.
    pub fn new<T: TypeName + ?Sized>(category: ValueCategory) -> Self {
        Self {
            declared: descriptor::<T>(),
            category,
        }
    }

    /// An existing object passed as argument.
    pub fn lvalue<T: TypeName + ?Sized>(_value: &T) -> Self {
        Self::new::<T>(ValueCategory::Lvalue)
    }

    /// A temporary passed as argument.
    pub fn rvalue<T: TypeName + ?Sized>(_value: &T) -> Self {
        Self::new::<T>(ValueCategory::Rvalue)
    }

    /// The declared type of the argument.
    pub fn declared(&self) -> &TypeDescriptor {
        &self.declared
    }

    /// The value category of the argument.
    pub fn category(&self) -> ValueCategory {
        self.category
    }

    /// The deduced template argument `T`.
    ///
    /// Lvalues always deduce an lvalue reference, whether the argument was declared as a plain
    /// value or as a reference. Rvalues deduce their plain type, unless the expression has an
    /// lvalue reference type, which makes it an lvalue.
    pub fn deduced(&self) -> TypeDescriptor {
        let declared = self.declared.clone();
        match (self.category, declared.reference_kind()) {
            (ValueCategory::Lvalue, _) => declared.with_reference(ReferenceKind::Lvalue),
            (ValueCategory::Rvalue, ReferenceKind::Lvalue) => declared,
            (ValueCategory::Rvalue, _) => declared.without_reference(),
        }
    }

    /// The type of the forwarding parameter, `T&&` after reference collapsing.
    ///
    /// This is `U&` for lvalues and `U&&` for rvalues.
    pub fn parameter(&self) -> TypeDescriptor {
        self.deduced().with_reference(ReferenceKind::Rvalue)
    }
}

/// Captures the static type of an expression without evaluating it.
///
/// The type parameter is inferred from a call to [`Capture::capture`] that never runs:
///
/// ```
/// use tyname_core::Capture;
///
/// let value = 5;
/// let ptr: *const i32 = &value;
///
/// let capture = Capture::new();
/// if false {
///     capture.capture(&ptr);
/// }
/// assert_eq!(capture.descriptor().to_string(), "int const*");
/// ```
///
/// This is what the `exact!` macro expands to.
pub struct Capture<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> Capture<T> {
    /// Creates a capture whose type is yet to be inferred.
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    /// Pins the captured type to the type of `value`.
    pub fn capture(&self, _value: &T) {}
}

impl<T: TypeName + ?Sized> Capture<T> {
    /// The descriptor of the captured type.
    pub fn descriptor(&self) -> TypeDescriptor {
        descriptor::<T>()
    }
}

impl<T: ?Sized> Default for Capture<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Capture<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Capture")
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use super::*;
    use crate::{Const, RRef, Volatile};

    fn deduced<T: TypeName + ?Sized>(category: ValueCategory) -> (String, String) {
        let arg = Forwarded::new::<T>(category);
        (arg.deduced().to_string(), arg.parameter().to_string())
    }

    #[test]
    fn lvalues_deduce_lvalue_references() {
        let a = 5;
        let mut b = 5;

        assert_eq!(Forwarded::lvalue(&a).deduced().to_string(), "int&");
        assert_eq!(Forwarded::lvalue(&&mut b).deduced().to_string(), "int&");
        assert_eq!(Forwarded::lvalue(&&a).deduced().to_string(), "int const&");

        let ptr: *const i32 = &a;
        assert_eq!(Forwarded::lvalue(&ptr).deduced().to_string(), "int const*&");

        let const_ptr = Const::new(&mut b as *mut i32);
        assert_eq!(
            Forwarded::lvalue(&const_ptr).deduced().to_string(),
            "int* const&"
        );

        let volatile = Volatile::new(5);
        assert_eq!(
            Forwarded::lvalue(&volatile).deduced().to_string(),
            "int volatile&"
        );
    }

    #[test]
    fn rvalues() {
        assert_eq!(
            deduced::<i32>(ValueCategory::Rvalue),
            ("int".into(), "int&&".into())
        );
        // An expression of lvalue reference type is an lvalue, even when it is a temporary.
        assert_eq!(
            deduced::<&mut i32>(ValueCategory::Rvalue),
            ("int&".into(), "int&".into())
        );
        assert_eq!(
            deduced::<RRef<i32>>(ValueCategory::Rvalue),
            ("int".into(), "int&&".into())
        );
    }

    #[test]
    fn named_rvalue_reference_is_an_lvalue() {
        assert_eq!(
            deduced::<RRef<i32>>(ValueCategory::Lvalue),
            ("int&".into(), "int&".into())
        );
    }

    #[test]
    fn plain_value_gains_exactly_one_reference() {
        let declared = Forwarded::new::<i32>(ValueCategory::Lvalue);
        assert_eq!(
            declared.deduced().to_string(),
            declared.declared().to_string() + "&"
        );
        let literal = Forwarded::rvalue(&42);
        assert_eq!(
            literal.parameter().to_string(),
            literal.declared().to_string() + "&&"
        );
    }

    #[test]
    fn capture_does_not_evaluate() {
        fn explode() -> i32 {
            panic!("evaluated");
        }

        let capture = Capture::new();
        if false {
            capture.capture(&explode());
        }
        assert_eq!(capture.descriptor().to_string(), "int");
    }
}
