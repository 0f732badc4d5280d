#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![warn(unreachable_pub, clippy::std_instead_of_core)]
#![doc = include_str!("../README.md")]

extern crate alloc;

#[macro_use]
mod log;

mod error;
pub use error::{Error, Result};
mod ty;
pub use ty::{descriptor, type_name, Object, ObjectName, Type, TypeName};
mod qualifier;
pub use qualifier::{Char, Const, LRef, RRef, Volatile};
pub mod descriptor;
pub use descriptor::{Cv, ReferenceKind, TypeDescriptor};
mod forward;
pub use forward::{Capture, Forwarded, ValueCategory};
pub mod list;
pub use list::{
    deduced, forward_as_tuple, join, parameters, type_names, ArgPack, ArgumentList, TypeList,
};
