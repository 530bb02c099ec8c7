//! Algorithms command implementation.

use console::style;
use unravel_algos::{AlgorithmKind, DjFunction, Scheme};

/// Execute the algorithms command.
pub fn execute() {
    println!("{} Algorithms:\n", style("Unravel").cyan().bold());

    for kind in AlgorithmKind::ALL {
        let descriptor = kind.descriptor();
        println!(
            "  {} ({})",
            style(descriptor.title).bold(),
            style(descriptor.slug).cyan()
        );
        println!(
            "    Qubits: {}..={}, default {}",
            descriptor.min_qubits, descriptor.max_qubits, descriptor.default_qubits
        );
        match kind {
            AlgorithmKind::DeutschJozsa => {
                for function in DjFunction::ALL {
                    println!("    --function {:<10} {}", function.slug(), function.label());
                }
            }
            AlgorithmKind::BernsteinVazirani => {
                println!("    --secret <BITS>       random when omitted");
            }
            AlgorithmKind::Entanglement => {
                for scheme in Scheme::ALL {
                    println!("    --scheme {:<12} {}", scheme.slug(), scheme.label());
                }
            }
        }
        for reference in descriptor.references {
            println!("    {} {}", style("↗").dim(), style(reference.url).underlined());
        }
        println!();
    }
}
