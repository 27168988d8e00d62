//! Sequence traversal primitives.
//!
//! Every operation takes a borrowed slice and a caller-supplied callback, walks the slice once
//! in order, and returns a fresh result. The input is never mutated and nothing is retained
//! between calls.
//!
//! Currently implemented:
//!
//! - [`find()`]: first element matching a predicate, or `None`
//! - [`map()`]: element-wise transform
//! - [`filter()`]: elements matching a predicate, in order
//! - [`some()`] / [`every()`]: short-circuiting existential/universal checks
//! - [`reduce()`] / [`reduce_default()`]: left fold with an explicit or `Default` initial value
//!
//! Each has a `try_*` form whose callback returns a `Result`; the first error ends the traversal
//! and is handed back to the caller as-is.
//!
//! ## Example: filter → map → reduce
//!
//! ```rust
//! use rust_enumeration::processing::{every, filter, find, map, reduce, some};
//!
//! let balances: [f64; 4] = [120.0, -15.5, 300.0, 42.0];
//!
//! let in_credit = filter(&balances, |v| *v >= 0.0);
//! let with_interest = map(&in_credit, |v| v * 1.1);
//! let total = reduce(&with_interest, 0.0, |acc, v| acc + v);
//! assert!((total - 508.2).abs() < 1e-9);
//!
//! assert_eq!(find(&balances, |v| *v < 0.0), Some(&-15.5));
//! assert!(some(&balances, |v| *v > 250.0));
//! assert!(!every(&balances, |v| *v >= 0.0));
//! ```

pub mod filter;
pub mod find;
pub mod map;
pub mod quantify;
pub mod reduce;

pub use filter::{filter, try_filter};
pub use find::{find, try_find};
pub use map::{map, try_map};
pub use quantify::{every, some, try_every, try_some};
pub use reduce::{reduce, reduce_default, try_reduce};
