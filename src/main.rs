use std::io;

use ac_impedance::circuits::analysis::{sweep_circuit_impedance, write_frequency_points_csv};
use ac_impedance::circuits::{Circuit, EntryNotation};
use ac_impedance::errors::CircuitError;
use ac_impedance::report;
use ac_impedance::sweep::SweepConfig;
use clap::Parser;

/// Impedance and current of a series/parallel passive circuit
#[derive(Parser)]
#[command(name = "acz", version)]
struct Cli {
    /// Signal frequency in hertz
    #[arg(short, long)]
    frequency: f64,

    /// Source voltage in volts
    #[arg(short, long, default_value_t = 1.0)]
    voltage: f64,

    /// Entries in circuit order, e.g. `R:100:s` or `c:1e-6,0.1,1e-9:pn`
    #[arg(required = true)]
    entries: Vec<EntryNotation>,

    /// Print the ASCII circuit diagram
    #[arg(long)]
    diagram: bool,

    /// Omit the per-component listing
    #[arg(long)]
    quiet: bool,

    /// First frequency of an impedance sweep written as CSV
    #[arg(long, requires = "sweep_stop")]
    sweep_start: Option<f64>,

    /// Last frequency of the sweep
    #[arg(long, requires = "sweep_start")]
    sweep_stop: Option<f64>,

    /// Number of sweep points
    #[arg(long, default_value_t = 51)]
    points: usize,

    /// Use logarithmic sweep spacing
    #[arg(long)]
    log: bool,
}

fn build(cli: &Cli) -> Result<Circuit, CircuitError> {
    let mut circuit = Circuit::new(cli.frequency, cli.voltage)?;
    for entry in &cli.entries {
        circuit.add(&entry.component()?, entry.connection, entry.nested);
    }
    Ok(circuit)
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let circuit = build(&cli).unwrap_or_else(|e| {
        eprintln!("Circuit error: {e}");
        std::process::exit(1);
    });

    print!("{}", report::circuit_info(&circuit));
    if !cli.quiet {
        println!();
        print!("{}", report::component_listing(&circuit));
    }
    if cli.diagram {
        println!();
        println!("Note: UPPERCASE = ideal / lowercase = non-ideal.");
        print!("{}", report::diagram(&circuit));
    }

    if let (Some(start), Some(stop)) = (cli.sweep_start, cli.sweep_stop) {
        let config = if cli.log {
            SweepConfig::logarithmic(start, stop, cli.points)
        } else {
            SweepConfig::linear(start, stop, cli.points)
        };
        let frequencies = config.frequencies().unwrap_or_else(|e| {
            eprintln!("Sweep error: {e}");
            std::process::exit(1);
        });
        let points = sweep_circuit_impedance(&circuit, frequencies);
        println!();
        write_frequency_points_csv(io::stdout().lock(), &points).unwrap_or_else(|e| {
            eprintln!("Output error: {e}");
            std::process::exit(1);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_limits_come_as_a_pair() {
        let cli = Cli::try_parse_from([
            "acz", "-f", "1000", "--sweep-start", "10", "--sweep-stop", "1e6", "--log", "R:100:s",
        ])
        .expect("valid arguments");
        assert_eq!((cli.sweep_start, cli.sweep_stop), (Some(10.0), Some(1.0e6)));
        assert!(cli.log);
        assert_eq!(cli.points, 51);

        assert!(Cli::try_parse_from(["acz", "-f", "1000", "--sweep-start", "10", "R:100:s"]).is_err());
        assert!(Cli::try_parse_from(["acz", "-f", "1000", "--csv", "R:100:s"]).is_err());
    }

    #[test]
    fn entries_build_the_circuit() {
        let cli = Cli::try_parse_from(["acz", "-f", "50", "-v", "230", "R:10:s", "c:1e-6,0.1,1e-9:pn"])
            .expect("valid arguments");
        let circuit = build(&cli).expect("valid circuit");
        assert_eq!(circuit.len(), 2);
        assert!(circuit.entries()[1].nested);
        assert_eq!(circuit.voltage(), 230.0);
    }
}
