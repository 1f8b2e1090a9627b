use crate::analysis::{Pipeline, Scenario};
use crate::cache::{InputKey, ResultCache};
use crate::presentation::render_analysis;
use anyhow::{Context, bail};
use configuration::{MessageSet, QuantitySlider};
use core_types::UnitEconomics;
use std::io::{BufRead, Write};

/// Everything an interactive session needs besides its input and output streams.
pub struct Session<'a> {
    pub pipeline: &'a Pipeline,
    pub messages: &'a MessageSet,
    pub slider: QuantitySlider,
    pub preview_rows: usize,
    pub cache: ResultCache,
}

/// What a single input line asks for.
#[derive(Debug, PartialEq)]
pub enum Command {
    Analyze(Scenario),
    Skip,
    Quit,
}

impl Session<'_> {
    /// Reads `price unit_cost fixed_cost max_quantity` lines until `quit` or EOF,
    /// printing a report for each. Bad lines are reported and skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        writeln!(output, "{}", self.messages.title)?;
        writeln!(output, "{}", self.messages.about)?;

        for line in input.lines() {
            let line = line.context("Failed to read session input")?;
            match parse_line(&line, &self.slider) {
                Ok(Command::Quit) => break,
                Ok(Command::Skip) => continue,
                Ok(Command::Analyze(scenario)) => {
                    let key = InputKey::new(&scenario, self.pipeline.num_points());
                    let pipeline = self.pipeline;
                    match self.cache.get_or_compute(key, || pipeline.run(&scenario)) {
                        Ok(analysis) => {
                            let text = render_analysis(analysis, self.messages, self.preview_rows);
                            writeln!(output, "{}", text)?;
                        }
                        Err(e) => writeln!(output, "error: {}", e)?,
                    }
                }
                Err(e) => writeln!(output, "error: {:#}", e)?,
            }
        }

        tracing::info!(
            entries = self.cache.len(),
            hits = self.cache.hits(),
            misses = self.cache.misses(),
            "Session finished."
        );
        Ok(())
    }
}

/// Parses one session line.
pub fn parse_line(line: &str, slider: &QuantitySlider) -> anyhow::Result<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(Command::Skip);
    }
    if matches!(trimmed, "quit" | "exit" | "q") {
        return Ok(Command::Quit);
    }

    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    if fields.len() != 4 {
        bail!(
            "expected 4 values (price unit_cost fixed_cost max_quantity), got {}",
            fields.len()
        );
    }

    let mut values = [0.0; 4];
    for (slot, (name, raw)) in values.iter_mut().zip(
        ["price", "unit_cost", "fixed_cost", "max_quantity"]
            .into_iter()
            .zip(fields),
    ) {
        *slot = raw
            .parse::<f64>()
            .with_context(|| format!("{} '{}' is not a number", name, raw))?;
    }

    let [price, unit_cost, fixed_cost, max_quantity] = values;
    Ok(Command::Analyze(build_scenario(
        price,
        unit_cost,
        fixed_cost,
        max_quantity,
        slider,
    )?))
}

/// Validates raw inputs into a `Scenario`, enforcing the quantity slider bounds.
pub fn build_scenario(
    price: f64,
    unit_cost: f64,
    fixed_cost: f64,
    max_quantity: f64,
    slider: &QuantitySlider,
) -> anyhow::Result<Scenario> {
    let economics = UnitEconomics::new(price, unit_cost, fixed_cost)?;
    if !slider.accepts(max_quantity) {
        bail!(
            "max_quantity must be between {} and {} in steps of {}, got {}",
            slider.min,
            slider.max,
            slider.step,
            max_quantity
        );
    }
    Ok(Scenario {
        economics,
        max_quantity,
    })
}
