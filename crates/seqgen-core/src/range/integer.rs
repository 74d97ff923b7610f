//! Integer arithmetic progressions.

use std::fmt::Debug;

use super::sealed::Sealed;
use crate::generator::poll_with;
use crate::{Generator, GeneratorError, GeneratorState};

/// Primitive integer types an [`IntegerRangeGenerator`] can run over.
pub trait RangeInt: Copy + PartialOrd + Debug + Sealed {
    const ZERO: Self;

    /// `self + step`, or `None` on overflow.
    fn checked_step(self, step: Self) -> Option<Self>;
}

macro_rules! impl_range_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sealed for $t {}

            impl RangeInt for $t {
                const ZERO: Self = 0;

                fn checked_step(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

impl_range_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Yields `from, from + step, ...` up to and including `to`.
///
/// Advancing past the representable range of `T` does not wrap: the value
/// that would overflow is never computed and the next poll exhausts.
#[derive(Debug, Clone)]
pub struct IntegerRangeGenerator<T: RangeInt> {
    from: T,
    to: T,
    step: T,
    /// `None` once advancing the cursor overflowed `T`.
    current: Option<T>,
    state: GeneratorState,
}

impl<T: RangeInt> IntegerRangeGenerator<T> {
    pub fn new(from: T, to: T, step: T) -> Self {
        let mut generator = Self {
            from,
            to,
            step,
            current: Some(from),
            state: GeneratorState::Created,
        };
        generator.arm();
        generator
    }

    /// The `(from, to)` pair this range was built with.
    pub fn bounds(&self) -> (T, T) {
        (self.from, self.to)
    }

    pub fn step(&self) -> T {
        self.step
    }

    fn arm(&mut self) {
        let producible = self.step != T::ZERO;
        if !producible {
            tracing::debug!(
                from = ?self.from,
                to = ?self.to,
                "Zero step, integer range starts exhausted"
            );
        }
        self.current = Some(self.from);
        self.state = GeneratorState::armed(producible);
    }
}

impl<T: RangeInt> Generator for IntegerRangeGenerator<T> {
    type Item = T;

    fn try_next(&mut self) -> Result<Option<T>, GeneratorError> {
        poll_with(&mut self.state, || {
            let current = self.current?;
            if current > self.to {
                return None;
            }
            self.current = current.checked_step(self.step);
            if self.current.is_none() {
                tracing::trace!(value = ?current, "Integer range reached the end of its type");
            }
            Some(current)
        })
    }

    fn reset(&mut self) {
        tracing::trace!("Resetting integer range");
        self.arm();
    }

    fn force_complete(&mut self) {
        tracing::trace!("Forcing integer range to complete");
        self.state = GeneratorState::Exhausted;
    }

    fn state(&self) -> GeneratorState {
        self.state
    }
}
