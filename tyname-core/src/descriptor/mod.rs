//! Flattened type descriptors and their canonical rendering.
//!
//! A [`TypeDescriptor`] is what the rendering works on: the base name, the cv-qualifiers of the
//! base, one entry per pointer level (innermost first) and the outermost reference. It is
//! built from a [`Type`](crate::Type) tree and rendered through its `Display` implementation:
//!
//! ```
//! use tyname_core::{descriptor, Cv, ReferenceKind};
//!
//! let ptr = descriptor::<&*const i32>();
//! assert_eq!(ptr.base_name(), "int");
//! assert_eq!(ptr.base_cv(), Cv::CONST);
//! assert_eq!(ptr.pointer_chain(), &[Cv::CONST]);
//! assert_eq!(ptr.reference_kind(), ReferenceKind::Lvalue);
//! assert_eq!(ptr.to_string(), "int const* const&");
//! ```

mod extract;
#[cfg(feature = "parse")]
pub(crate) mod parse;
mod render;

use alloc::{borrow::Cow, string::String, vec::Vec};
use serde::{Deserialize, Serialize};

/// The reference category of the outermost level of a type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    /// Not a reference.
    #[default]
    None,
    /// `&`.
    Lvalue,
    /// `&&`.
    Rvalue,
}

impl ReferenceKind {
    /// The reference marker, empty for [`ReferenceKind::None`].
    pub const fn marker(self) -> &'static str {
        match self {
            ReferenceKind::None => "",
            ReferenceKind::Lvalue => "&",
            ReferenceKind::Rvalue => "&&",
        }
    }

    /// Adds a reference of kind `added` on top of this one.
    ///
    /// An lvalue reference on either side wins.
    pub const fn collapse(self, added: ReferenceKind) -> ReferenceKind {
        match (self, added) {
            (ReferenceKind::None, added) => added,
            (current, ReferenceKind::None) => current,
            (ReferenceKind::Lvalue, _) | (_, ReferenceKind::Lvalue) => ReferenceKind::Lvalue,
            (ReferenceKind::Rvalue, ReferenceKind::Rvalue) => ReferenceKind::Rvalue,
        }
    }
}

/// Const/volatile qualification of a single level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cv {
    is_const: bool,
    is_volatile: bool,
}

impl Cv {
    /// Unqualified.
    pub const NONE: Cv = Cv::new(false, false);
    /// `const`.
    pub const CONST: Cv = Cv::new(true, false);
    /// `volatile`.
    pub const VOLATILE: Cv = Cv::new(false, true);
    /// `const volatile`.
    pub const CONST_VOLATILE: Cv = Cv::new(true, true);

    /// Creates a qualification.
    pub const fn new(is_const: bool, is_volatile: bool) -> Self {
        Self {
            is_const,
            is_volatile,
        }
    }

    /// Whether `const` is present.
    pub const fn is_const(self) -> bool {
        self.is_const
    }

    /// Whether `volatile` is present.
    pub const fn is_volatile(self) -> bool {
        self.is_volatile
    }

    /// Whether neither qualifier is present.
    pub const fn is_empty(self) -> bool {
        !self.is_const && !self.is_volatile
    }

    /// Both sets of qualifiers. Qualifying twice is the same as qualifying once.
    pub const fn union(self, other: Cv) -> Cv {
        Cv::new(
            self.is_const || other.is_const,
            self.is_volatile || other.is_volatile,
        )
    }
}

/// The shape of a type, ready to be rendered.
///
/// Descriptors are plain values: build them with [`descriptor`](crate::descriptor) or from a
/// [`Type`](crate::Type), transform them with the methods below and render them with
/// `to_string()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    base: String,
    // Array extents of the base, outermost first.
    extents: Vec<usize>,
    base_cv: Cv,
    pointers: Vec<Cv>,
    reference: ReferenceKind,
}

impl TypeDescriptor {
    /// An unqualified named type.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            base: name.into(),
            extents: Vec::new(),
            base_cv: Cv::NONE,
            pointers: Vec::new(),
            reference: ReferenceKind::None,
        }
    }

    /// The name of the underlying type, including array extents (e.g `char [6]`).
    pub fn base_name(&self) -> Cow<'_, str> {
        if self.extents.is_empty() {
            return Cow::Borrowed(&self.base);
        }

        let mut name = self.base.clone();
        render::write_extents(&mut name, &self.extents);
        Cow::Owned(name)
    }

    /// The qualification of the base type, or of the innermost pointee.
    pub fn base_cv(&self) -> Cv {
        self.base_cv
    }

    /// The qualification of each pointer level, innermost first.
    pub fn pointer_chain(&self) -> &[Cv] {
        &self.pointers
    }

    /// The reference category of the outermost level.
    pub fn reference_kind(&self) -> ReferenceKind {
        self.reference
    }

    /// Whether the base is an array.
    pub fn is_array(&self) -> bool {
        !self.extents.is_empty()
    }

    /// Adds `cv` to the outermost level.
    ///
    /// A reference itself cannot be qualified, so this does nothing on references.
    pub fn qualified(mut self, cv: Cv) -> Self {
        if self.reference != ReferenceKind::None {
            return self;
        }

        match self.pointers.last_mut() {
            Some(level) => *level = level.union(cv),
            None => self.base_cv = self.base_cv.union(cv),
        }
        self
    }

    /// A pointer to this type. A reference is removed first.
    pub fn pointer(mut self) -> Self {
        self.reference = ReferenceKind::None;
        self.pointers.push(Cv::NONE);
        self
    }

    /// A reference of kind `kind` to this type, with the reference collapsing rules applied.
    pub fn with_reference(mut self, kind: ReferenceKind) -> Self {
        self.reference = self.reference.collapse(kind);
        self
    }

    /// The referred-to type, or this type if it is not a reference.
    pub fn without_reference(mut self) -> Self {
        self.reference = ReferenceKind::None;
        self
    }

    /// The type a by-value parameter gets for this type.
    ///
    /// The reference is removed, an array becomes a pointer to its element, and otherwise the
    /// top-level qualifiers are removed.
    pub fn decay(mut self) -> Self {
        self.reference = ReferenceKind::None;
        if self.is_array() {
            // The element keeps its qualifiers; the new pointer does not have any.
            self.extents.remove(0);
            self.pointers.push(Cv::NONE);
            return self;
        }

        match self.pointers.last_mut() {
            Some(level) => *level = Cv::NONE,
            None => self.base_cv = Cv::NONE,
        }
        self
    }
}

impl From<String> for TypeDescriptor {
    fn from(name: String) -> Self {
        TypeDescriptor::named(name)
    }
}

impl From<&str> for TypeDescriptor {
    fn from(name: &str) -> Self {
        TypeDescriptor::named(name)
    }
}

impl Serialize for TypeDescriptor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "parse")]
impl core::str::FromStr for TypeDescriptor {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        parse::parse_type(s)
    }
}

#[cfg(feature = "parse")]
impl<'de> Deserialize<'de> for TypeDescriptor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
