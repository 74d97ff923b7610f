//! Drive a generator to exhaustion.
//!
//! Both drivers take the generator by value. Pass `&mut generator` to keep
//! it afterwards, e.g. to check that it ended up exhausted.

use crate::{Generator, GeneratorError};

/// Call `callback` with every value `generator` yields, in yield order.
///
/// Stops at the first empty poll. A panic inside `callback` is not caught.
pub fn for_in<G, F>(mut generator: G, mut callback: F) -> Result<(), GeneratorError>
where
    G: Generator,
    F: FnMut(G::Item),
{
    while let Some(value) = generator.try_next()? {
        callback(value);
    }
    Ok(())
}

/// Like [`for_in`], for a callback that can fail.
///
/// The first error returned by `callback` stops polling and is handed back
/// unchanged.
pub fn try_for_in<G, F, E>(mut generator: G, mut callback: F) -> Result<(), E>
where
    G: Generator,
    F: FnMut(G::Item) -> Result<(), E>,
    E: From<GeneratorError>,
{
    while let Some(value) = generator.try_next()? {
        callback(value)?;
    }
    Ok(())
}
