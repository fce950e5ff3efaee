#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A fixed-capacity string type with no heap allocation.
//!
//! The capacity of a [`FixedString`] is a const generic parameter, so the
//! content lives inline wherever the string is placed. Input that does not
//! fit is silently truncated to the longest fitting prefix; the `try_`
//! variants of the mutators report overflow instead. The byte-level search
//! and comparison routines backing the string methods are also exported
//! directly from the [`algorithms`] module, and [`convert`] covers
//! formatting and parsing of numbers.
//!
//! ```
//! use fixstr::FixedString;
//!
//! let mut path = FixedString::<32>::from("/usr/local");
//! path.append("/bin");
//! assert_eq!(path, "/usr/local/bin");
//! assert_eq!(path.rfind("/"), Some(10));
//!
//! let truncated = FixedString::<10>::from("HelloWorld!");
//! assert_eq!(truncated, "HelloWorld");
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod algorithms;
pub mod convert;
pub mod string;

pub use crate::convert::{parse_i64, parse_u64, ParseIntError};
pub use crate::string::{concat, substr, CapacityError, FixedString};
