//! Built-in demonstration of every generator shape.

use std::collections::LinkedList;
use std::io::Write;

use seqgen_core::{
    try_for_in, CollectionGenerator, FloatRangeGenerator, Generator, IntegerRangeGenerator,
};

/// Poll `generator` until it is empty, writing each value with `prefix`.
fn drain<G, W>(mut generator: G, prefix: &str, out: &mut W) -> anyhow::Result<()>
where
    G: Generator,
    G::Item: std::fmt::Display,
    W: Write,
{
    while let Some(value) = generator.try_next()? {
        writeln!(out, "{prefix}{value}")?;
    }
    Ok(())
}

/// Run the demonstration, writing everything to `out`.
pub fn run<W: Write>(out: &mut W) -> anyhow::Result<()> {
    tracing::info!("Running demonstration");

    // The list is moved into the generator.
    drain(
        CollectionGenerator::owned(LinkedList::from([1, 2, 3])),
        "Next value: ",
        out,
    )?;

    writeln!(out, "list<int>")?;
    let values: Vec<i32> = vec![1, 2, 3];
    drain(CollectionGenerator::borrowed(&values), "Next value: ", out)?;

    writeln!(out, "vector<string>")?;
    let strings = vec!["3;".to_string(), "2;".to_string(), "1;".to_string()];
    drain(CollectionGenerator::borrowed(&strings), "Next value: ", out)?;

    writeln!(out, "range<int>")?;
    drain(IntegerRangeGenerator::new(1, 15, 3), "", out)?;

    // Accumulated in double precision and narrowed on output.
    writeln!(out, "range<f32>")?;
    let mut floats = FloatRangeGenerator::new(-3.0f64, 1.0, 0.2);
    while let Some(value) = floats.try_next()? {
        writeln!(out, "{}", value as f32)?;
    }

    writeln!(out, "range<f64>")?;
    drain(FloatRangeGenerator::new(-2.0f64, 2.0, 0.5), "", out)?;

    let numbers = vec![1, 2, 3, 4, 5];
    let mut sum = 0;
    try_for_in(
        CollectionGenerator::borrowed(&numbers),
        |n| -> anyhow::Result<()> {
            writeln!(out, "Current number: {n}")?;
            sum += n;
            Ok(())
        },
    )?;
    writeln!(out, "Sum: {sum}")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        let mut buf: Vec<u8> = Vec::new();
        run(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            &lines[..10],
            &[
                "Next value: 1",
                "Next value: 2",
                "Next value: 3",
                "list<int>",
                "Next value: 1",
                "Next value: 2",
                "Next value: 3",
                "vector<string>",
                "Next value: 3;",
                "Next value: 2;",
            ]
        );

        let ints = lines.iter().position(|l| *l == "range<int>").unwrap();
        assert_eq!(&lines[ints + 1..ints + 6], &["1", "4", "7", "10", "13"]);
        assert_eq!(lines[ints + 6], "range<f32>");
        assert_eq!(&lines[ints + 7..ints + 10], &["-3", "-2.8", "-2.6"]);

        let doubles = lines.iter().position(|l| *l == "range<f64>").unwrap();
        assert_eq!(lines[doubles + 1], "-2");
        assert_eq!(lines[doubles + 9], "2");

        assert_eq!(lines[lines.len() - 2], "Current number: 5");
        assert_eq!(lines.last().copied(), Some("Sum: 15"));
    }
}
