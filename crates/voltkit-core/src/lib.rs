//! Numeric core for the Voltkit circuit sketcher.
//!
//! Two leaf utilities shared by the drawing UI and the solver: engineering
//! notation literals (`4.7k`, `100n`, `2.5e-2`) evaluated to `f64`, and
//! tagged 64-bit words that pack small indices together with a category bit
//! pattern.
//!
//! # Example
//!
//! ```
//! use voltkit_core::{notation, tag::Tag};
//!
//! assert_eq!(notation::parse("4.7k"), 4700.0);
//! assert!(notation::parse("abc").is_nan());
//!
//! let branches = Tag::new(0xFFFF_FFFF_0000_0000, 32).unwrap();
//! let word = branches.encode(7).unwrap();
//! assert!(branches.is_tagged(word));
//! assert_eq!(branches.decode(word), 7);
//! ```

pub mod error;
pub mod notation;
pub mod select;
pub mod tag;
pub mod units;

pub use error::{Error, Result};
pub use notation::{SplitNumber, matches, parse, split_number};
pub use select::{SelectEntry, default_select_list, select_list};
pub use tag::Tag;
pub use units::{Magnitude, format_value};
