//! Backends command implementation.

use anyhow::Result;
use console::style;
use unravel_hal::{Backend, Provider};

use super::common::registry;

/// Execute the backends command.
pub async fn execute() -> Result<()> {
    println!("{} Available backends:\n", style("Unravel").cyan().bold());

    let registry = registry();
    for provider in Provider::ALL {
        println!("  {}", style(provider.display_name()).bold());

        for spec in provider.backends() {
            let backend: Box<dyn Backend> = registry.create(spec.name, spec.config())?;
            let caps = backend.capabilities();
            let available = backend.availability().await?.is_available;

            println!(
                "    {} {} ({})",
                if available {
                    style("●").green()
                } else {
                    style("○").red()
                },
                style(spec.name).bold(),
                spec.method
            );
            println!("      {}", spec.description);
            println!(
                "      Qubits: {}, max shots: {}",
                caps.num_qubits, caps.max_shots
            );
            println!(
                "      Gates: {}",
                caps.gate_set
                    .single_qubit
                    .iter()
                    .chain(&caps.gate_set.two_qubit)
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        println!();
    }

    Ok(())
}
