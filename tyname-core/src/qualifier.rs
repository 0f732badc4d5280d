//! Wrappers that carry qualifiers Rust has no syntax for.

use core::{fmt, marker::PhantomData, ops::Deref};

/// A value whose type is `T const`.
///
/// Rust bindings are immutable unless declared `mut`, so a `Const` only matters for the type it
/// reports: `Const<*mut i32>` is the constant pointer `int* const`, while `*const i32` is the
/// pointer to constant `int const*`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Const<T>(T);

impl<T> Const<T> {
    /// Wraps `value`.
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// The wrapped value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Const<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

/// A value whose type is `T volatile`.
///
/// Accesses through [`Volatile::read`] and [`Volatile::write`] are volatile memory accesses.
#[derive(Default)]
#[repr(transparent)]
pub struct Volatile<T>(T);

impl<T: Copy> Volatile<T> {
    /// Wraps `value`.
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Performs a volatile read of the value.
    pub fn read(&self) -> T {
        // SAFETY: `self.0` is a valid, aligned and initialized `T`.
        unsafe { core::ptr::read_volatile(&self.0) }
    }

    /// Performs a volatile write of `value`.
    pub fn write(&mut self, value: T) {
        // SAFETY: `self.0` is a valid and aligned `T` that we borrow mutably.
        unsafe { core::ptr::write_volatile(&mut self.0, value) }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Volatile<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Volatile").field(&self.read()).finish()
    }
}

/// The C `char` type.
///
/// `core::ffi::c_char` is an alias of either `i8` or `u8`, which name `signed char` and
/// `unsigned char`, so plain `char` needs its own type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Char(pub core::ffi::c_char);

/// The type `T&`. Only used as a type argument.
pub struct LRef<T: ?Sized>(PhantomData<T>);

/// The type `T&&`. Only used as a type argument.
pub struct RRef<T: ?Sized>(PhantomData<T>);

impl<T: ?Sized> fmt::Debug for LRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LRef")
    }
}

impl<T: ?Sized> fmt::Debug for RRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RRef")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volatile_access() {
        let mut value = Volatile::new(5);
        assert_eq!(value.read(), 5);
        value.write(7);
        assert_eq!(value.read(), 7);
    }

    #[test]
    fn const_derefs() {
        let value = Const::new(5);
        assert_eq!(*value + 1, 6);
        assert_eq!(value.into_inner(), 5);
    }
}
