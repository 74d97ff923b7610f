//! Run generators and write their values out.

use std::fmt::Display;
use std::io::Write;

use seqgen_core::{
    try_for_in, CollectionGenerator, FloatRangeGenerator, Generator, GeneratorError,
    GeneratorState, IntegerRangeGenerator,
};

use crate::config::{GeneratorConfig, Scenario};
use crate::RunOpts;

/// Caps a generator at a fixed number of values.
///
/// Once the cap is reached the inner generator is polled once more. If it
/// still has a value it is force-completed, so a progression that never
/// reaches its bound by itself still terminates.
pub struct Capped<G> {
    inner: G,
    limit: Option<usize>,
    emitted: usize,
    forced: bool,
}

impl<G: Generator> Capped<G> {
    pub fn new(inner: G, limit: Option<usize>) -> Self {
        Self {
            inner,
            limit,
            emitted: 0,
            forced: false,
        }
    }

    /// Whether the cap dropped values the inner generator still had.
    pub fn hit_limit(&self) -> bool {
        self.forced
    }
}

impl<G: Generator> Generator for Capped<G> {
    type Item = G::Item;

    fn try_next(&mut self) -> Result<Option<G::Item>, GeneratorError> {
        if self.limit.is_some_and(|limit| self.emitted >= limit) {
            if !self.inner.is_exhausted() && self.inner.try_next()?.is_some() {
                tracing::info!(
                    limit = self.emitted,
                    "Limit reached, forcing generator to complete"
                );
                self.inner.force_complete();
                self.forced = true;
            }
            return Ok(None);
        }

        let value = self.inner.try_next()?;
        if value.is_some() {
            self.emitted += 1;
        }
        Ok(value)
    }

    fn reset(&mut self) {
        self.emitted = 0;
        self.forced = false;
        self.inner.reset();
    }

    fn force_complete(&mut self) {
        self.inner.force_complete();
    }

    fn state(&self) -> GeneratorState {
        self.inner.state()
    }
}

/// Outcome of a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Number of values written
    pub emitted: usize,
    /// Whether the run stopped because of the limit
    pub truncated: bool,
    /// Total of the values, for summing runs
    pub total: Option<Total>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Total {
    Int(i128),
    Float(f64),
}

impl Display for Total {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Total::Int(v) => write!(f, "{v}"),
            Total::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Write every value of `generator` on its own line.
pub fn emit<G, W>(generator: G, limit: Option<usize>, out: &mut W) -> anyhow::Result<RunReport>
where
    G: Generator,
    G::Item: Display,
    W: Write,
{
    let mut capped = Capped::new(generator, limit);
    try_for_in(&mut capped, |value| -> anyhow::Result<()> {
        writeln!(out, "{value}")?;
        Ok(())
    })?;

    Ok(RunReport {
        emitted: capped.emitted,
        truncated: capped.hit_limit(),
        total: None,
    })
}

/// Write every value of `generator`, then their sum.
pub fn emit_sum<G, W>(
    generator: G,
    limit: Option<usize>,
    out: &mut W,
    zero: Total,
) -> anyhow::Result<RunReport>
where
    G: Generator,
    G::Item: Display + Into<Accumulate>,
    W: Write,
{
    let mut capped = Capped::new(generator, limit);
    let mut total = zero;
    try_for_in(&mut capped, |value| -> anyhow::Result<()> {
        writeln!(out, "Current number: {value}")?;
        let value: Accumulate = value.into();
        total = value.add_to(&total);
        Ok(())
    })?;
    writeln!(out, "Sum: {total}")?;

    Ok(RunReport {
        emitted: capped.emitted,
        truncated: capped.hit_limit(),
        total: Some(total),
    })
}

/// A single value folded into a [`Total`].
pub enum Accumulate {
    Int(i64),
    Float(f64),
}

impl Accumulate {
    fn add_to(self, total: &Total) -> Total {
        match (self, total) {
            (Accumulate::Int(v), Total::Int(t)) => Total::Int(t + i128::from(v)),
            (Accumulate::Int(v), Total::Float(t)) => Total::Float(t + v as f64),
            (Accumulate::Float(v), Total::Int(t)) => Total::Float(*t as f64 + v),
            (Accumulate::Float(v), Total::Float(t)) => Total::Float(t + v),
        }
    }
}

impl From<i64> for Accumulate {
    fn from(v: i64) -> Self {
        Accumulate::Int(v)
    }
}

impl From<f64> for Accumulate {
    fn from(v: f64) -> Self {
        Accumulate::Float(v)
    }
}

/// Run an integer progression with the given options.
pub fn run_int_range<W: Write>(
    from: i64,
    to: i64,
    step: i64,
    opts: &RunOpts,
    out: &mut W,
) -> anyhow::Result<RunReport> {
    tracing::debug!(from, to, step, "Running integer range");
    let generator = IntegerRangeGenerator::new(from, to, step);
    if opts.sum {
        emit_sum(generator, opts.limit, out, Total::Int(0))
    } else {
        emit(generator, opts.limit, out)
    }
}

/// Run a floating-point progression with the given options.
pub fn run_float_range<W: Write>(
    from: f64,
    to: f64,
    step: f64,
    opts: &RunOpts,
    out: &mut W,
) -> anyhow::Result<RunReport> {
    tracing::debug!(from, to, step, "Running float range");
    let generator = FloatRangeGenerator::new(from, to, step);
    if opts.sum {
        emit_sum(generator, opts.limit, out, Total::Float(0.0))
    } else {
        emit(generator, opts.limit, out)
    }
}

/// Run one scenario from a scenario file.
pub fn run_scenario<W: Write>(scenario: &Scenario, out: &mut W) -> anyhow::Result<RunReport> {
    tracing::info!(name = %scenario.name, "Running scenario");
    writeln!(out, "[{}]", scenario.name)?;

    let opts = RunOpts {
        limit: scenario.limit,
        sum: scenario.sum,
    };

    let report = match &scenario.generator {
        GeneratorConfig::Collection { items } => match scenario.integer_items() {
            Some(numbers) if scenario.sum => emit_sum(
                CollectionGenerator::owned(numbers),
                scenario.limit,
                out,
                Total::Int(0),
            )?,
            _ => emit(CollectionGenerator::borrowed(items), scenario.limit, out)?,
        },
        GeneratorConfig::IntRange { from, to, step } => {
            run_int_range(*from, *to, *step, &opts, out)?
        }
        GeneratorConfig::FloatRange { from, to, step } => {
            run_float_range(*from, *to, *step, &opts, out)?
        }
    };

    tracing::info!(
        name = %scenario.name,
        emitted = report.emitted,
        truncated = report.truncated,
        "Scenario completed"
    );
    Ok(report)
}
