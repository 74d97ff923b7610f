//! Floating-point arithmetic progressions.

use std::fmt::Debug;
use std::ops::Add;

use super::sealed::Sealed;
use crate::generator::poll_with;
use crate::{Generator, GeneratorError, GeneratorState};

/// Floating-point types a [`FloatRangeGenerator`] can run over.
pub trait RangeFloat: Copy + PartialOrd + Debug + Add<Output = Self> + Sealed {
    const ZERO: Self;

    fn is_nan(self) -> bool;

    fn is_finite(self) -> bool;
}

macro_rules! impl_range_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sealed for $t {}

            impl RangeFloat for $t {
                const ZERO: Self = 0.0;

                fn is_nan(self) -> bool {
                    <$t>::is_nan(self)
                }

                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }
            }
        )*
    };
}

impl_range_float!(f32, f64);

/// Yields `from, from + step, ...` while the cursor is not greater than `to`.
///
/// The cursor is advanced by repeated addition and compared with plain
/// floating-point ordering. Rounding error accumulates, so near the bound the
/// range can yield one value more or one value fewer than the exact
/// progression would. For example `0.0..=1.0` by `0.1` over `f64` yields
/// eleven values, the last being `0.9999999999999999`.
///
/// A zero step, a NaN parameter or a non-finite `from` make the range start
/// exhausted: none of them can ever reach the bound.
///
/// The cursor must move on every yield. When adding `step` leaves it
/// unchanged (the step is below the precision of `current`) or leaves the
/// finite range, the value just yielded is the last one and the next poll
/// exhausts, the same way an integer range stops on overflow.
#[derive(Debug, Clone)]
pub struct FloatRangeGenerator<T: RangeFloat> {
    from: T,
    to: T,
    step: T,
    current: Option<T>,
    state: GeneratorState,
}

impl<T: RangeFloat> FloatRangeGenerator<T> {
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

    fn producible(&self) -> bool {
        self.step != T::ZERO
            && !self.step.is_nan()
            && !self.to.is_nan()
            && self.from.is_finite()
    }

    fn arm(&mut self) {
        let producible = self.producible();
        if !producible {
            tracing::debug!(
                from = ?self.from,
                to = ?self.to,
                step = ?self.step,
                "Degenerate float range starts exhausted"
            );
        }
        self.current = Some(self.from);
        self.state = GeneratorState::armed(producible);
    }
}

impl<T: RangeFloat> Generator for FloatRangeGenerator<T> {
    type Item = T;

    fn try_next(&mut self) -> Result<Option<T>, GeneratorError> {
        poll_with(&mut self.state, || {
            let current = self.current.filter(|current| *current <= self.to)?;
            let next = current + self.step;
            self.current = (next.is_finite() && next != current).then_some(next);
            Some(current)
        })
    }

    fn reset(&mut self) {
        tracing::trace!("Resetting float range");
        self.arm();
    }

    fn force_complete(&mut self) {
        tracing::trace!("Forcing float range to complete");
        self.state = GeneratorState::Exhausted;
    }

    fn state(&self) -> GeneratorState {
        self.state
    }
}
