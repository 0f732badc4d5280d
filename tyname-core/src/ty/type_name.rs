use alloc::string::{String, ToString};

use super::{Object, Type};
use crate::{Char, Const, LRef, RRef, TypeDescriptor, Volatile};

/// Compile-time type name.
///
/// Implemented for the Rust primitives, raw pointers, references, arrays and the qualifier
/// wrappers of this crate. Use `#[derive(TypeName)]` for your own types.
pub trait TypeName {
    /// The type as it would be declared.
    const TYPE: &'static Type<'static>;
}

/// A [`TypeName`] that is not a reference.
///
/// Only object types can be pointed to, cv-qualified or stored in arrays, so wrappers that build
/// on another type require this bound. Forming a pointer to a reference is therefore rejected at
/// compile time.
pub trait ObjectName: TypeName {}

/// The descriptor of `T`.
pub fn descriptor<T: TypeName + ?Sized>() -> TypeDescriptor {
    TypeDescriptor::from(T::TYPE)
}

/// The canonical name of `T`, exactly as declared.
///
/// ```
/// use tyname_core::{type_name, Const};
///
/// assert_eq!(type_name::<Const<*mut i32>>(), "int* const");
/// assert_eq!(type_name::<&i32>(), "int const&");
/// ```
pub fn type_name<T: TypeName + ?Sized>() -> String {
    descriptor::<T>().to_string()
}

/// Macro to implement TypeName for multiple types with the same name.
macro_rules! impl_type_name {
    ($($ty:ty),* => $name:expr) => {
        $(
            impl TypeName for $ty {
                const TYPE: &'static Type<'static> = &Type::Object(Object::Named($name));
            }

            impl ObjectName for $ty {}
        )*
    };
}

// Fundamental types.
impl_type_name!(bool => "bool");
impl_type_name!(Char => "char");
impl_type_name!(i8 => "signed char");
impl_type_name!(u8 => "unsigned char");
impl_type_name!(i16 => "short");
impl_type_name!(u16 => "unsigned short");
impl_type_name!(i32 => "int");
impl_type_name!(u32 => "unsigned int");
impl_type_name!(i64 => "long long");
impl_type_name!(u64 => "unsigned long long");
impl_type_name!(i128 => "__int128");
impl_type_name!(u128 => "unsigned __int128");
impl_type_name!(isize => "std::ptrdiff_t");
impl_type_name!(usize => "std::size_t");
impl_type_name!(f32 => "float");
impl_type_name!(f64 => "double");
impl_type_name!(char => "char32_t");
impl_type_name!(core::ffi::c_void => "void");

// Qualifiers.
impl<T: ObjectName> TypeName for Const<T> {
    const TYPE: &'static Type<'static> = &Type::Object(Object::Const(T::TYPE.object()));
}

impl<T: ObjectName> ObjectName for Const<T> {}

impl<T: ObjectName> TypeName for Volatile<T> {
    const TYPE: &'static Type<'static> = &Type::Object(Object::Volatile(T::TYPE.object()));
}

impl<T: ObjectName> ObjectName for Volatile<T> {}

// Pointers. A `*const T` points to a `T const`.
impl<T: ObjectName> TypeName for *mut T {
    const TYPE: &'static Type<'static> = &Type::Object(Object::Pointer(T::TYPE.object()));
}

impl<T: ObjectName> ObjectName for *mut T {}

impl<T: ObjectName> TypeName for *const T {
    const TYPE: &'static Type<'static> = &Type::Object(Object::Pointer(<Const<T>>::TYPE.object()));
}

impl<T: ObjectName> ObjectName for *const T {}

// Arrays.
impl<T: ObjectName, const N: usize> TypeName for [T; N] {
    const TYPE: &'static Type<'static> = &Type::Object(Object::Array(T::TYPE.object(), N));
}

impl<T: ObjectName, const N: usize> ObjectName for [T; N] {}

// References. A shared reference refers to a `T const`.
impl<T: ObjectName> TypeName for &mut T {
    const TYPE: &'static Type<'static> = &Type::LvalueRef(T::TYPE.object());
}

impl<T: ObjectName> TypeName for &T {
    const TYPE: &'static Type<'static> = &Type::LvalueRef(<Const<T>>::TYPE.object());
}

// Reference markers, which may wrap another reference.
impl<T: TypeName + ?Sized> TypeName for LRef<T> {
    const TYPE: &'static Type<'static> = &T::TYPE.lvalue_reference();
}

impl<T: TypeName + ?Sized> TypeName for RRef<T> {
    const TYPE: &'static Type<'static> = &T::TYPE.rvalue_reference();
}
