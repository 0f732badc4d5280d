#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![warn(unreachable_pub)]
#![doc = include_str!("../README.md")]

pub use tyname_core::*;
// The macros expand to `::tyname` paths, so they are only exported from here.
pub use tyname_macros::{exact, forwarded, full, TypeName};
