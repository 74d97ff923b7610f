//! Behaviour every generator shape shares.

use seqgen_core::{
    for_in, CollectionGenerator, FloatRangeGenerator, Generator, GeneratorState,
    IntegerRangeGenerator,
};

fn drain<G: Generator>(mut generator: G) -> Vec<G::Item> {
    let mut values = Vec::new();
    while let Some(value) = generator.next_value() {
        values.push(value);
    }
    values
}

/// Consumes `generator` partially, then fully, checking that `reset`
/// always replays the sequence a fresh generator would produce.
fn check_replayable<G>(mut generator: G, fresh: Vec<G::Item>)
where
    G: Generator,
    G::Item: PartialEq + std::fmt::Debug,
{
    let _ = generator.next_value();
    generator.reset();
    assert_eq!(drain(&mut generator), fresh);
    assert!(generator.is_exhausted());

    generator.reset();
    assert_eq!(generator.state(), GeneratorState::Generating);
    assert_eq!(drain(&mut generator), fresh);
}

fn check_force_complete<G: Generator>(mut generator: G) {
    assert!(generator.next_value().is_some());
    generator.force_complete();
    for _ in 0..3 {
        assert!(generator.next_value().is_none());
    }
    assert_eq!(generator.state(), GeneratorState::Exhausted);
}

#[test]
fn test_collection_contract() {
    let source = vec!["3;".to_string(), "2;".to_string(), "1;".to_string()];

    let fresh = drain(CollectionGenerator::borrowed(&source));
    assert_eq!(fresh, source);

    check_replayable(CollectionGenerator::borrowed(&source), fresh.clone());
    check_replayable(CollectionGenerator::owned(source.clone()), fresh);
    check_force_complete(CollectionGenerator::owned(source));
}

#[test]
fn test_integer_range_contract() {
    let fresh = drain(IntegerRangeGenerator::new(1, 15, 3));
    assert_eq!(fresh, vec![1, 4, 7, 10, 13]);

    check_replayable(IntegerRangeGenerator::new(1, 15, 3), fresh);
    check_force_complete(IntegerRangeGenerator::new(1, 15, 3));
}

#[test]
fn test_float_range_contract() {
    let fresh = drain(FloatRangeGenerator::new(-2.0f64, 2.0, 0.5));
    assert_eq!(fresh.len(), 9);

    check_replayable(FloatRangeGenerator::new(-2.0f64, 2.0, 0.5), fresh);
    check_force_complete(FloatRangeGenerator::new(-2.0f64, 2.0, 0.5));
}

#[test]
fn test_integer_count_property() {
    for from in -10i32..=10 {
        for to in from..=from + 25 {
            for step in 1..=7 {
                let values = drain(IntegerRangeGenerator::new(from, to, step));
                assert_eq!(values.len() as i32, (to - from) / step + 1);
                assert_eq!(values.first(), Some(&from));
                assert!(values.iter().all(|v| *v <= to));
                assert!(values.windows(2).all(|w| w[1] - w[0] == step));
                assert!(values.last().is_some_and(|last| last + step > to));
            }
        }
    }
}

#[test]
fn test_zero_step_yields_nothing() {
    let mut calls = 0;
    for_in(IntegerRangeGenerator::new(1, 1, 0), |_| calls += 1).unwrap();
    for_in(FloatRangeGenerator::new(-5.0, 5.0, 0.0), |_| calls += 1).unwrap();
    assert_eq!(calls, 0);
}

#[test]
fn test_generator_iter_adapter() {
    let mut generator = CollectionGenerator::owned(1..=4);
    let evens: Vec<i32> = generator
        .iter()
        .filter_map(Result::ok)
        .filter(|n| n % 2 == 0)
        .collect();
    assert_eq!(evens, vec![2, 4]);
    assert!(generator.is_exhausted());

    let total: Result<i32, _> = IntegerRangeGenerator::new(1, 100, 1).into_values().sum();
    assert_eq!(total, Ok(5050));
}
