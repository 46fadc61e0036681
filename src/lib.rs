//! Short, URL-friendly slugs derived from the current time and strong randomness
//!
//! ```rust
//! use unique_slug::unique_slug;
//!
//! let slug = unique_slug()?;
//! println!("{}", slug); // e.g. "QJUuqSjJ-cCwqPUGx"
//! println!("{}", slug.timestamp_digits()); // e.g. "1732056789102346"
//! # Ok::<(), unique_slug::Error>(())
//! ```
//!
//! # Encoding
//!
//! A slug is derived from the current Unix timestamp rendered as a fixed-width decimal number at
//! one of four precisions:
//!
//! | Length | Precision    | Example                |
//! | ------ | ------------ | ---------------------- |
//! | 10     | seconds      | `QJUuq-SjJcC`          |
//! | 13     | milliseconds | `QJUuqS-jJcCwqP`       |
//! | 16     | microseconds | `QJUuqSjJ-cCwqPUGx`    |
//! | 19     | nanoseconds  | `QJUuqSjJc-CwqPUGxeIo` |
//!
//! Each digit is replaced by a letter picked with a cryptographically strong random byte from the
//! bucket of that digit:
//!
//! ```text
//! 0: qWeRtY   1: QwErTy   2: uIoPa   3: UiOpA   4: sDfGh
//! 5: SdFgH    6: jKlZx    7: JkLzX   8: cVbNm   9: CvBnM
//! ```
//!
//! A `-` separator is inserted before the letter at index `length / 2`.
//!
//! Since the buckets are pairwise disjoint, slugs generated from different timestamps never
//! coincide, and every slug can be decoded back to its timestamp. Slugs generated within the same
//! time unit differ only by chance: with ten letters drawn from buckets of five or six, two
//! second-precision slugs of the same second collide about once in ten million pairs. Storing
//! slugs in a column with a uniqueness constraint remains the caller's responsibility.
//!
//! # Crate features
//!
//! - `std` enables the system clock, [`std::error::Error`] implementations, and `String`
//!   conversions. Without it, the encoder is usable in `no_std` environments with custom
//!   [`TimeSource`] and [`RandSource`] implementations.
//! - `global_gen` (default) enables the thread-local default generator and the
//!   [`unique_slug()`] family of functions.
//! - `serde` enables serialization of [`Slug`] as a string.
//! - `cli` builds the `unique-slug` command.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{Error, ParseError};

mod precision;
pub use precision::Precision;

pub mod bucket;

mod timestamp;
#[cfg(feature = "std")]
pub use timestamp::StdSystemTime;
pub use timestamp::{TimeSource, TimestampDigits};

mod slug;
pub use slug::{Slug, SEPARATOR};

pub mod generator;
pub use generator::{RandSource, Sampling, SlugGenerator};

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{unique_slug, unique_slug_at, unique_slug_of_length};
