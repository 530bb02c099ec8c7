//! Run command implementation.

use std::time::Duration;

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use unravel_hal::{Provider, dispatch};

use super::common::{build, describe, print_results, registry};
use crate::{BuildArgs, OutputFormat};

/// Execute the run command.
pub async fn execute(
    args: &BuildArgs,
    provider: Provider,
    backend: Option<&str>,
    shots: u32,
    format: OutputFormat,
) -> Result<()> {
    let spec = match backend {
        Some(name) => provider.backend(name)?,
        None => provider.default_backend(),
    };
    let built = build(args)?;

    if format == OutputFormat::Json {
        let result = dispatch(&registry(), spec, &built.circuit, shots, args.seed).await?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "{} Running {} on {} / {} ({} shots)",
        style("→").cyan().bold(),
        style(args.algorithm.kind.title()).green(),
        style(provider.display_name()).yellow(),
        style(spec.name).yellow(),
        shots
    );
    println!("  {}", describe(&built));
    println!("\n{}\n", built.circuit.draw());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message(format!("Simulating with the {} method...", spec.method));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = dispatch(&registry(), spec, &built.circuit, shots, args.seed).await;
    spinner.finish_and_clear();
    let result = result?;

    print_results(&result);

    if let Some(expected) = built.expected_outcome() {
        if result.counts.get(&expected) == result.counts.total_shots() {
            println!(
                "\n{} Every shot read {}, as predicted.",
                style("✓").green().bold(),
                style(&expected).cyan()
            );
        } else {
            println!(
                "\n{} Expected every shot to read {}.",
                style("✗").red().bold(),
                style(&expected).cyan()
            );
        }
    }

    Ok(())
}
