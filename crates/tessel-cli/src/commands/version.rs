//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - stabilizer circuit layer viewer",
        style("Tessel").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  tessel-ir      Circuit model and fault mechanism types");
    println!("  tessel-text    Circuit text format parser and emitter");
    println!("  tessel-viewer  Layered SVG/HTML renderer");
    println!("  tessel-cli     Command-line interface");
    println!();
    println!("License:    {}", style(env!("CARGO_PKG_LICENSE")).dim());
}
