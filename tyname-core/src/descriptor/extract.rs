//! Flattening of [`Type`] trees into descriptors.

use alloc::string::ToString;

use super::{Cv, ReferenceKind, TypeDescriptor};
use crate::{Object, Type};

impl From<&Type<'_>> for TypeDescriptor {
    fn from(ty: &Type<'_>) -> Self {
        match ty {
            Type::Object(object) => extract(object),
            Type::LvalueRef(object) => extract(object).with_reference(ReferenceKind::Lvalue),
            Type::RvalueRef(object) => extract(object).with_reference(ReferenceKind::Rvalue),
        }
    }
}

impl From<Type<'_>> for TypeDescriptor {
    fn from(ty: Type<'_>) -> Self {
        TypeDescriptor::from(&ty)
    }
}

impl From<&Object<'_>> for TypeDescriptor {
    fn from(object: &Object<'_>) -> Self {
        extract(object)
    }
}

fn extract(object: &Object<'_>) -> TypeDescriptor {
    match object {
        Object::Named(name) => TypeDescriptor::named(*name),
        Object::Const(inner) => extract(inner).qualified(Cv::CONST),
        Object::Volatile(inner) => extract(inner).qualified(Cv::VOLATILE),
        Object::Pointer(inner) => extract(inner).pointer(),
        Object::Array(element, len) => array(extract(element), *len),
    }
}

/// An array of `len` elements of type `element`.
///
/// The qualifiers of an array are those of its element, so they are moved up to the array level.
/// An element that already is an array gets the new extent in front of its own.
fn array(mut element: TypeDescriptor, len: usize) -> TypeDescriptor {
    let top_cv = match element.pointers.pop() {
        Some(cv) => cv,
        None => {
            element.extents.insert(0, len);
            return element;
        }
    };

    // An array of pointers: the unqualified element type becomes the base.
    element.pointers.push(Cv::NONE);
    let mut array = TypeDescriptor::named(element.to_string());
    array.extents.push(len);
    array.base_cv = top_cv;
    array
}
