//! Generators over arithmetic progressions.
//!
//! Both shapes yield `from, from + step, from + 2 * step, ...` for as long as
//! the cursor is not greater than the inclusive bound `to`. A zero step would
//! produce `from` forever, so such a range starts out exhausted.
//!
//! The bound check only looks at `current > to`. A negative step paired with
//! `from <= to` therefore never reaches the bound; the caller is expected to
//! pick a step whose sign matches the direction from `from` to `to`, or to
//! stop the generator with
//! [`force_complete`](crate::Generator::force_complete).

mod float;
mod integer;

pub use float::{FloatRangeGenerator, RangeFloat};
pub use integer::{IntegerRangeGenerator, RangeInt};

mod sealed {
    pub trait Sealed {}
}
