//! Distance KS Tester - Main CLI Application
//!
//! Reads one column from each of two distance files, runs the two-sample
//! Kolmogorov-Smirnov test and writes the CDF chart.

use distance_ks_tester::{app::App, cli::Cli, error::ErrorReporter};
use std::process;

fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(99);
    }));

    let cli = Cli::parse_normalized();

    if let Err(message) = cli.validate() {
        eprintln!("Error: {}", message);
        process::exit(2);
    }

    let reporter = ErrorReporter::new(cli.use_colors(), cli.verbose || cli.debug);

    let result = App::new(cli).and_then(|app| app.run());
    if let Err(e) = result {
        reporter.report_error(&e);
        process::exit(e.exit_code());
    }
}
