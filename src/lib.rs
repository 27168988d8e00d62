//! `rust-enumeration` provides hand-written `find`/`map`/`filter`/`some`/`every`/`reduce` over
//! in-memory sequences, plus the small programs that were built on them: a bank account report
//! and a hero's task list.
//!
//! The core lives in [`processing`]. Each operation borrows a slice, walks it once in order,
//! and returns a new value. Nothing is mutated and no state is kept between calls.
//!
//! ## Quick example
//!
//! ```rust
//! use rust_enumeration::processing::{every, filter, find, map, reduce, some};
//!
//! assert_eq!(map(&[1, 2, 3], |x| x * 2), vec![2, 4, 6]);
//! assert_eq!(filter(&[1, 2, 3, 4], |x| x % 2 == 0), vec![2, 4]);
//! assert_eq!(find(&[1, 2, 3], |x| *x > 5), None);
//! assert!(some(&[1, 2, 3], |x| *x > 2));
//! assert!(every(&[1, 2, 3], |x| *x > 0));
//! assert!(!every(&[1, -2, 3], |x| *x > 0));
//! assert_eq!(reduce(&[1, 2, 3, 4], 0, |acc, x| acc + x), 10);
//! ```
//!
//! ## Callbacks that can fail
//!
//! The `try_*` forms accept callbacks returning `Result`. The first error stops the traversal
//! and comes back to the caller untouched:
//!
//! ```rust
//! use rust_enumeration::processing::try_map;
//!
//! let parsed: Result<Vec<i32>, _> = try_map(&["1", "2", "x"], |s| s.parse::<i32>());
//! assert!(parsed.is_err());
//! ```
//!
//! ## Modules
//!
//! - [`processing`]: the sequence operations
//! - [`types`]: account, food and task types
//! - [`bank`]: account book reports built on [`processing`]
//! - [`hero`]: hero with a sortable, filterable task list
//! - [`ingestion`]: load accounts from CSV/JSON files, with observer hooks
//! - [`execution`]: chunked parallel versions of the operations, with metrics
//! - [`error`]: error types
//!
//! ## Loading a bank from disk
//!
//! ```no_run
//! use rust_enumeration::bank::Bank;
//! use rust_enumeration::ingestion::{ingest_from_glob, IngestionOptions};
//!
//! # fn main() -> Result<(), rust_enumeration::IngestionError> {
//! let accounts = ingest_from_glob("exports/*.csv", &IngestionOptions::default())?;
//! let bank = Bank::from_accounts(accounts);
//! if let Some(largest) = bank.largest_account() {
//!     println!("largest: {} ({})", largest.name, largest.value);
//! }
//! println!("average: {:?}", bank.average_value());
//! # Ok(())
//! # }
//! ```

pub mod bank;
pub mod error;
pub mod execution;
pub mod hero;
pub mod ingestion;
pub mod processing;
pub mod types;

pub use error::{IngestionError, IngestionResult, ProcessingError, ProcessingResult};
