//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - quantum algorithms, one circuit at a time",
        style("Unravel").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  unravel-ir           Circuit representation and text drawer");
    println!("  unravel-hal          Backend abstraction, providers and dispatch");
    println!("  unravel-adapter-sim  Statevector simulator backends");
    println!("  unravel-algos        Deutsch-Jozsa, Bernstein-Vazirani, GHZ and W circuits");
    println!("  unravel-cli          Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
