//! Lazy sequence generators.
//!
//! A generator is a stateful producer that yields one value per poll and
//! reports exhaustion unambiguously. This crate provides three shapes behind
//! the common [`Generator`] trait, plus a driver that consumes any of them.
//!
//! # Architecture
//!
//! ```text
//!  CollectionGenerator   IntegerRangeGenerator   FloatRangeGenerator
//!           │                     │                      │
//!           └─────────────┬───────┴──────────────────────┘
//!                         ▼
//!                  trait Generator ──► GeneratorState
//!                         │
//!              ┌──────────┴──────────┐
//!              ▼                     ▼
//!      for_in / try_for_in     GeneratorIter
//! ```
//!
//! # Example
//!
//! ```rust
//! use seqgen_core::{for_in, Generator, IntegerRangeGenerator};
//!
//! let mut generator = IntegerRangeGenerator::new(1, 15, 3);
//! assert_eq!(generator.next_value(), Some(1));
//!
//! let mut rest = Vec::new();
//! for_in(&mut generator, |n| rest.push(n)).unwrap();
//! assert_eq!(rest, vec![4, 7, 10, 13]);
//! assert!(generator.is_exhausted());
//! ```
//!
//! # States
//!
//! - `Generating` - may still yield values
//! - `Exhausted` - terminal until `reset`
//! - `Created`, `Waiting` - never observable after construction; polling a
//!   generator in one of them is a [`GeneratorError::InvalidState`]

pub mod collection;
pub mod driver;
mod error;
pub mod generator;
pub mod range;
mod state;

// Re-exports for convenience
pub use collection::CollectionGenerator;
pub use driver::{for_in, try_for_in};
pub use error::GeneratorError;
pub use generator::{Generator, GeneratorIter};
pub use range::{FloatRangeGenerator, IntegerRangeGenerator, RangeFloat, RangeInt};
pub use state::GeneratorState;
