//! Compile-time type trees.

mod type_name;
pub use type_name::{descriptor, type_name, ObjectName, TypeName};

use core::fmt;
use serde::Serialize;

use crate::TypeDescriptor;

/// A type as written in a declaration.
///
/// References can only wrap an [`Object`], so a reference to a reference, a pointer to a
/// reference or a cv-qualified reference cannot be expressed. Use [`Type::lvalue_reference`] and
/// [`Type::rvalue_reference`] to add a reference to an existing type; they apply the reference
/// collapsing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type<'a> {
    /// A non-reference type.
    Object(Object<'a>),
    /// `T&`.
    LvalueRef(&'a Object<'a>),
    /// `T&&`.
    RvalueRef(&'a Object<'a>),
}

/// A non-reference type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Object<'a> {
    /// An unqualified named type, such as `int` or a user-defined struct.
    Named(&'a str),
    /// `T const`.
    Const(&'a Object<'a>),
    /// `T volatile`.
    Volatile(&'a Object<'a>),
    /// `T*`.
    Pointer(&'a Object<'a>),
    /// `T [N]`.
    Array(&'a Object<'a>, usize),
}

impl<'a> Type<'a> {
    /// The object type, or the referred-to type for references.
    pub const fn object(&self) -> &Object<'a> {
        match *self {
            Type::Object(ref object) => object,
            Type::LvalueRef(object) | Type::RvalueRef(object) => object,
        }
    }

    /// `T&` with the reference collapsing rules applied.
    ///
    /// Adding an lvalue reference to any reference yields an lvalue reference.
    pub const fn lvalue_reference(&'a self) -> Type<'a> {
        match *self {
            Type::Object(ref object) => Type::LvalueRef(object),
            Type::LvalueRef(object) | Type::RvalueRef(object) => Type::LvalueRef(object),
        }
    }

    /// `T&&` with the reference collapsing rules applied.
    ///
    /// An rvalue reference to an lvalue reference stays an lvalue reference.
    pub const fn rvalue_reference(&'a self) -> Type<'a> {
        match *self {
            Type::Object(ref object) => Type::RvalueRef(object),
            Type::LvalueRef(object) => Type::LvalueRef(object),
            Type::RvalueRef(object) => Type::RvalueRef(object),
        }
    }

    /// Whether this is a reference type.
    pub const fn is_reference(&self) -> bool {
        !matches!(self, Type::Object(_))
    }
}

impl fmt::Display for Type<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TypeDescriptor::from(self))
    }
}

impl fmt::Display for Object<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Type::Object(*self))
    }
}

impl Serialize for Type<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
