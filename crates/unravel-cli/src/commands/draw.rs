//! Draw command implementation.

use anyhow::Result;
use console::style;

use super::common::{build, describe};
use crate::BuildArgs;

/// Execute the draw command.
pub fn execute(args: &BuildArgs, oracle_only: bool) -> Result<()> {
    let built = build(args)?;

    let circuit = if oracle_only {
        built.oracle.as_ref().ok_or_else(|| {
            anyhow::anyhow!("{} has no oracle to draw", args.algorithm.kind.title())
        })?
    } else {
        &built.circuit
    };

    println!("{} {}", style("→").cyan().bold(), describe(&built));
    println!("\n{}", circuit.draw());
    Ok(())
}
