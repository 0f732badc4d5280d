//! Rendering of several types as one string.
//!
//! All the list forms join individual renderings with [`SEPARATOR`], in argument order. The
//! explicit-type form ([`type_names`]) and the value forms ([`deduced`], the `full!` macro)
//! agree for the same list of types.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt;
use serde::Serialize;

use crate::{descriptor, Forwarded, TypeDescriptor, TypeName};

/// The separator between the types of a list.
pub const SEPARATOR: &str = ", ";

/// Number of leading positions [`forward_as_tuple`] forwards with their qualifiers intact.
pub const FORWARDED_HEAD: usize = 2;

/// An ordered list of type descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentList(Vec<TypeDescriptor>);

impl ArgumentList {
    /// The descriptors of the types of `L`.
    pub fn of<L: TypeList>() -> Self {
        Self(L::descriptors())
    }

    /// Returns an iterator over the descriptors.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.0.iter()
    }

    /// Returns the number of types in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ArgumentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for ty in self.iter() {
            if !first {
                f.write_str(SEPARATOR)?;
            }
            first = false;
            write!(f, "{ty}")?;
        }
        Ok(())
    }
}

impl From<Vec<TypeDescriptor>> for ArgumentList {
    fn from(descriptors: Vec<TypeDescriptor>) -> Self {
        Self(descriptors)
    }
}

impl FromIterator<TypeDescriptor> for ArgumentList {
    fn from_iter<I: IntoIterator<Item = TypeDescriptor>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ArgumentList {
    type Item = TypeDescriptor;
    type IntoIter = alloc::vec::IntoIter<TypeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for ArgumentList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "parse")]
impl core::str::FromStr for ArgumentList {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        crate::descriptor::parse::parse_type_list(s).map(Self)
    }
}

#[cfg(feature = "parse")]
impl<'de> serde::Deserialize<'de> for ArgumentList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Renders `descriptors` in order, separated by [`SEPARATOR`].
pub fn join(descriptors: &[TypeDescriptor]) -> String {
    let joined = descriptors.iter().cloned().collect::<ArgumentList>().to_string();
    trace!("joined {} types: `{}`", descriptors.len(), joined);

    joined
}

/// A list of types, given as a tuple.
///
/// Implemented for `()` and tuples of up to twelve [`TypeName`] elements.
pub trait TypeList {
    /// The descriptor of each element, in order.
    fn descriptors() -> Vec<TypeDescriptor>;
}

impl TypeList for () {
    fn descriptors() -> Vec<TypeDescriptor> {
        Vec::new()
    }
}

/// Macro to implement TypeList for tuples of the given element names.
macro_rules! impl_type_list {
    ($($ty:ident),+) => {
        impl<$($ty: TypeName),+> TypeList for ($($ty,)+) {
            fn descriptors() -> Vec<TypeDescriptor> {
                alloc::vec![$(descriptor::<$ty>()),+]
            }
        }
    };
}

impl_type_list!(A);
impl_type_list!(A, B);
impl_type_list!(A, B, C);
impl_type_list!(A, B, C, D);
impl_type_list!(A, B, C, D, E);
impl_type_list!(A, B, C, D, E, F);
impl_type_list!(A, B, C, D, E, F, G);
impl_type_list!(A, B, C, D, E, F, G, H);
impl_type_list!(A, B, C, D, E, F, G, H, I);
impl_type_list!(A, B, C, D, E, F, G, H, I, J);
impl_type_list!(A, B, C, D, E, F, G, H, I, J, K);
impl_type_list!(A, B, C, D, E, F, G, H, I, J, K, L);

/// The names of the types of `L`, exactly as declared.
///
/// ```
/// use tyname_core::{type_names, Const};
///
/// assert_eq!(type_names::<(i32, Const<i32>)>(), "int, int const");
/// assert_eq!(type_names::<()>(), "");
/// ```
pub fn type_names<L: TypeList>() -> String {
    join(&L::descriptors())
}

/// The deduced template arguments of forwarded arguments.
///
/// This is what `full!` expands to.
pub fn deduced(args: &[Forwarded]) -> String {
    let descriptors: Vec<_> = args.iter().map(Forwarded::deduced).collect();
    join(&descriptors)
}

/// The forwarding parameter types of forwarded arguments.
///
/// This is what `forwarded!` expands to.
pub fn parameters(args: &[Forwarded]) -> String {
    let descriptors: Vec<_> = args.iter().map(Forwarded::parameter).collect();
    join(&descriptors)
}

/// A tuple of values forwarded as one pack.
///
/// Each element is an rvalue of its declared type. Only the first [`FORWARDED_HEAD`] elements
/// keep their qualifiers: the rest of the pack is taken by value and every later position
/// is reported decayed. For instance `(1, 2, &c)` with `c: i32` renders as `int, int, int`
/// rather than `int, int, int const&`. Use [`deduced`] or the `full!` macro when every
/// position must be exact.
pub trait ArgPack {
    /// The forwarded elements, in order.
    fn forwarded() -> Vec<Forwarded>;
}

impl ArgPack for () {
    fn forwarded() -> Vec<Forwarded> {
        Vec::new()
    }
}

/// Macro to implement ArgPack for tuples of the given element names.
macro_rules! impl_arg_pack {
    ($($ty:ident),+) => {
        impl<$($ty: TypeName),+> ArgPack for ($($ty,)+) {
            fn forwarded() -> Vec<Forwarded> {
                alloc::vec![$(Forwarded::new::<$ty>(crate::ValueCategory::Rvalue)),+]
            }
        }
    };
}

impl_arg_pack!(A);
impl_arg_pack!(A, B);
impl_arg_pack!(A, B, C);
impl_arg_pack!(A, B, C, D);
impl_arg_pack!(A, B, C, D, E);
impl_arg_pack!(A, B, C, D, E, F);
impl_arg_pack!(A, B, C, D, E, F, G);
impl_arg_pack!(A, B, C, D, E, F, G, H);
impl_arg_pack!(A, B, C, D, E, F, G, H, I);
impl_arg_pack!(A, B, C, D, E, F, G, H, I, J);
impl_arg_pack!(A, B, C, D, E, F, G, H, I, J, K);
impl_arg_pack!(A, B, C, D, E, F, G, H, I, J, K, L);

/// The deduced types of the elements of `pack`, forwarded as one tuple.
///
/// See [`ArgPack`] for why positions past [`FORWARDED_HEAD`] are decayed.
pub fn forward_as_tuple<P: ArgPack>(_pack: &P) -> String {
    let descriptors: Vec<_> = P::forwarded()
        .iter()
        .enumerate()
        .map(|(position, arg)| {
            let deduced = arg.deduced();
            if position < FORWARDED_HEAD {
                return deduced;
            }

            let decayed = deduced.clone().decay();
            if decayed != deduced {
                debug!(
                    "tuple position {} decays from `{}` to `{}`",
                    position, deduced, decayed
                );
            }
            decayed
        })
        .collect();

    join(&descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Const, LRef, ValueCategory};

    #[test]
    fn empty() {
        assert_eq!(join(&[]), "");
        assert_eq!(type_names::<()>(), "");
        assert_eq!(deduced(&[]), "");
        assert!(ArgumentList::of::<()>().is_empty());
    }

    #[test_log::test]
    fn explicit_types() {
        assert_eq!(type_names::<(i32,)>(), "int");
        assert_eq!(type_names::<(i32, Const<i32>)>(), "int, int const");
        assert_eq!(type_names::<(&mut i32, &i32)>(), "int&, int const&");
        assert_eq!(
            type_names::<(*mut i32, *const i32, Const<*mut i32>)>(),
            "int*, int const*, int* const"
        );
    }

    #[test]
    fn list_matches_individual_renderings() {
        let list = ArgumentList::of::<(u8, &f64, [i32; 2])>();
        assert_eq!(list.len(), 3);

        let individual: Vec<_> = list.iter().map(ToString::to_string).collect();
        assert_eq!(individual, ["unsigned char", "double const&", "int [2]"]);
        assert_eq!(list.to_string(), individual.join(SEPARATOR));
    }

    #[test_log::test]
    fn explicit_and_value_forms_agree() {
        let a = 1;
        let literal = Forwarded::new::<LRef<[Const<crate::Char>; 6]>>(ValueCategory::Lvalue);

        assert_eq!(
            deduced(&[Forwarded::rvalue(&1), literal.clone()]),
            type_names::<(i32, LRef<[Const<crate::Char>; 6]>)>()
        );
        assert_eq!(
            deduced(&[Forwarded::lvalue(&a), Forwarded::rvalue(&2)]),
            type_names::<(&mut i32, i32)>()
        );
        assert_eq!(deduced(&[Forwarded::rvalue(&1), literal]), "int, char [6] const&");
    }

    #[test]
    fn parameter_types() {
        let a = 1;
        assert_eq!(
            parameters(&[Forwarded::lvalue(&a), Forwarded::rvalue(&a)]),
            "int&, int&&"
        );
    }

    #[test_log::test]
    fn tuple_forwarding_decays_past_the_head() {
        let a = 5;
        let c = &a;

        assert_eq!(forward_as_tuple(&(1, c)), "int, int const&");
        // Known limitation: the third position loses its reference and qualifiers.
        assert_eq!(forward_as_tuple(&(1, 2, c)), "int, int, int");
        assert_eq!(
            forward_as_tuple(&(1, 2, c, Const::new(3))),
            "int, int, int, int"
        );
        assert_eq!(forward_as_tuple(&()), "");
    }

    #[test]
    fn serializes_as_string() {
        let list = ArgumentList::of::<(i32, *const i32)>();
        assert_eq!(
            serde_json::to_string(&list).unwrap(),
            r#""int, int const*""#
        );
    }
}
