//! The contract shared by every generator shape.

use std::iter::FusedIterator;

use crate::{GeneratorError, GeneratorState};

/// A stateful producer of values, polled one value at a time.
///
/// A generator yields values while it is [`GeneratorState::Generating`]. The
/// first poll that finds nothing left moves it to
/// [`GeneratorState::Exhausted`], after which every poll returns `Ok(None)`
/// until [`reset`](Generator::reset) is called.
pub trait Generator {
    /// Type of the produced values.
    type Item;

    /// Attempt to produce the next value.
    ///
    /// Returns `Ok(None)` once the generator is exhausted. An `Err` means the
    /// generator was polled in a state outside its transition set.
    fn try_next(&mut self) -> Result<Option<Self::Item>, GeneratorError>;

    /// Produce the next value, treating a contract violation as fatal.
    ///
    /// # Panics
    ///
    /// Panics if [`try_next`](Generator::try_next) reports
    /// [`GeneratorError::InvalidState`].
    fn next_value(&mut self) -> Option<Self::Item> {
        match self.try_next() {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }

    /// Rewind to the initial position so the full sequence is produced again.
    fn reset(&mut self);

    /// Stop producing values, regardless of what is left.
    fn force_complete(&mut self);

    /// Current production state.
    fn state(&self) -> GeneratorState;

    fn is_exhausted(&self) -> bool {
        self.state() == GeneratorState::Exhausted
    }

    /// Borrow this generator as an [`Iterator`].
    fn iter(&mut self) -> GeneratorIter<&mut Self> {
        GeneratorIter::new(self)
    }

    /// Convert this generator into an [`Iterator`].
    fn into_values(self) -> GeneratorIter<Self>
    where
        Self: Sized,
    {
        GeneratorIter::new(self)
    }
}

impl<G: Generator + ?Sized> Generator for &mut G {
    type Item = G::Item;

    fn try_next(&mut self) -> Result<Option<Self::Item>, GeneratorError> {
        (**self).try_next()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn force_complete(&mut self) {
        (**self).force_complete()
    }

    fn state(&self) -> GeneratorState {
        (**self).state()
    }
}

/// Iterator that lazily pulls values from a generator.
///
/// Values are yielded as `Ok`. A contract violation is yielded once as `Err`,
/// after which the iterator ends.
#[derive(Debug)]
pub struct GeneratorIter<G> {
    generator: G,
    failed: bool,
}

impl<G: Generator> GeneratorIter<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            failed: false,
        }
    }

    /// Get the underlying generator back.
    pub fn into_inner(self) -> G {
        self.generator
    }
}

impl<G: Generator> Iterator for GeneratorIter<G> {
    type Item = Result<G::Item, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.generator.try_next() {
            Ok(value) => value.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl<G: Generator> FusedIterator for GeneratorIter<G> {}

/// Run one step of the production state machine.
///
/// `produce` is only called while `Generating`; when it returns `None` the
/// state moves to `Exhausted`.
pub(crate) fn poll_with<T>(
    state: &mut GeneratorState,
    produce: impl FnOnce() -> Option<T>,
) -> Result<Option<T>, GeneratorError> {
    match *state {
        GeneratorState::Generating => {
            let value = produce();
            if value.is_none() {
                tracing::trace!("Generator exhausted");
                *state = GeneratorState::Exhausted;
            }
            Ok(value)
        }
        GeneratorState::Exhausted => Ok(None),
        other => Err(GeneratorError::InvalidState(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts down from `start` to 1.
    struct Countdown {
        start: u32,
        remaining: u32,
        state: GeneratorState,
    }

    impl Countdown {
        fn new(start: u32) -> Self {
            Self {
                start,
                remaining: start,
                state: GeneratorState::Generating,
            }
        }
    }

    impl Generator for Countdown {
        type Item = u32;

        fn try_next(&mut self) -> Result<Option<u32>, GeneratorError> {
            poll_with(&mut self.state, || {
                if self.remaining == 0 {
                    return None;
                }
                let value = self.remaining;
                self.remaining -= 1;
                Some(value)
            })
        }

        fn reset(&mut self) {
            self.remaining = self.start;
            self.state = GeneratorState::Generating;
        }

        fn force_complete(&mut self) {
            self.state = GeneratorState::Exhausted;
        }

        fn state(&self) -> GeneratorState {
            self.state
        }
    }

    #[test]
    fn test_poll_with_exhausts_once() {
        let mut state = GeneratorState::Generating;
        assert_eq!(poll_with(&mut state, || Some(1)), Ok(Some(1)));
        assert_eq!(state, GeneratorState::Generating);

        assert_eq!(poll_with(&mut state, || None::<i32>), Ok(None));
        assert_eq!(state, GeneratorState::Exhausted);

        let mut called = false;
        assert_eq!(
            poll_with(&mut state, || {
                called = true;
                Some(2)
            }),
            Ok(None)
        );
        assert!(!called);
    }

    #[test]
    fn test_poll_with_rejects_reserved_states() {
        for reserved in [GeneratorState::Created, GeneratorState::Waiting] {
            let mut state = reserved;
            assert_eq!(
                poll_with(&mut state, || Some(1)),
                Err(GeneratorError::InvalidState(reserved))
            );
            assert_eq!(state, reserved);
        }
    }

    fn take_one<G: Generator>(mut generator: G) -> Option<G::Item> {
        generator.next_value()
    }

    #[test]
    fn test_mut_ref_is_a_generator() {
        let mut countdown = Countdown::new(2);
        assert_eq!(take_one(&mut countdown), Some(2));
        assert_eq!(countdown.next_value(), Some(1));
        assert_eq!(countdown.next_value(), None);
        assert!(countdown.is_exhausted());
    }

    #[test]
    fn test_iter_borrows_generator() {
        let mut countdown = Countdown::new(3);
        let values: Vec<u32> = countdown.iter().map(Result::unwrap).collect();
        assert_eq!(values, vec![3, 2, 1]);
        assert!(countdown.is_exhausted());

        countdown.reset();
        let values: Vec<u32> = countdown.into_values().map(Result::unwrap).collect();
        assert_eq!(values, vec![3, 2, 1]);
    }

    #[test]
    fn test_iter_stops_after_contract_violation() {
        let mut countdown = Countdown::new(3);
        countdown.state = GeneratorState::Waiting;

        let mut iter = countdown.iter();
        assert_eq!(
            iter.next(),
            Some(Err(GeneratorError::InvalidState(GeneratorState::Waiting)))
        );
        assert_eq!(iter.next(), None);
    }

    #[test]
    #[should_panic(expected = "Invalid generator state: created")]
    fn test_next_value_panics_on_contract_violation() {
        let mut countdown = Countdown::new(1);
        countdown.state = GeneratorState::Created;
        countdown.next_value();
    }
}
