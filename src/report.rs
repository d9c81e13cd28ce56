//! Plain-text rendering of circuits for terminal front ends.

use std::fmt::Write as _;

use crate::circuits::{Circuit, ConnectionKind};
use crate::constants::{FIXED_NOTATION_LOWER, FIXED_NOTATION_UPPER};
use crate::math::Scalar;

/// Formats `value` with six decimals, switching to scientific notation for very
/// small or very large magnitudes.
#[must_use]
pub fn format_value(value: Scalar) -> String {
    let magnitude = value.abs();
    if value == 0.0 || !value.is_finite() {
        format!("{value:.6}")
    } else if magnitude <= FIXED_NOTATION_LOWER || magnitude >= FIXED_NOTATION_UPPER {
        format!("{value:.6e}")
    } else {
        format!("{value:.6}")
    }
}

/// Frequency, voltage, total impedance and current of a circuit.
#[must_use]
pub fn circuit_info(circuit: &Circuit) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Circuit information:");
    let _ = writeln!(out, "    Frequency, f = {} Hz,", format_value(circuit.frequency()));
    let _ = writeln!(out, "    Voltage, V = {} V.", format_value(circuit.voltage()));

    if circuit.is_empty() {
        let _ = writeln!(out, "No components: add some to view impedance and current.");
        return out;
    }
    if circuit.is_open() {
        let _ = writeln!(out, "A parallel block is open at this frequency (infinite impedance).");
    }
    let _ = writeln!(out, "Total impedance:");
    let _ = writeln!(out, "    Magnitude = {} Ohms,", format_value(circuit.magnitude()));
    let _ = writeln!(out, "    Phase = {} radians.", format_value(circuit.phase()));
    match (circuit.current(), circuit.current_phase()) {
        (Some(current), Some(phase)) if phase != 0.0 => {
            let _ = writeln!(
                out,
                "Total current, I = {} A, at {} radians relative to the voltage.",
                format_value(current),
                format_value(phase)
            );
        }
        (Some(current), _) => {
            let _ = writeln!(
                out,
                "Total current, I = {} A, in phase with the voltage.",
                format_value(current)
            );
        }
        (None, _) => {
            let _ = writeln!(out, "Total current is unbounded (zero impedance).");
        }
    }
    out
}

/// One block per entry: position, connection, kind, values and impedance.
#[must_use]
pub fn component_listing(circuit: &Circuit) -> String {
    let mut out = String::new();
    for (i, (entry, summary)) in circuit
        .entries()
        .iter()
        .zip(circuit.summaries())
        .enumerate()
    {
        let nested = if summary.nested { "nested " } else { "" };
        let _ = writeln!(
            out,
            "Component {} is in {nested}{} - {}:",
            i + 1,
            summary.connection.label(),
            summary.kind
        );
        for ((parameter, _), value) in summary
            .kind
            .parameters()
            .iter()
            .zip(entry.component.parameters())
        {
            let _ = writeln!(
                out,
                "    {} = {} {}",
                parameter,
                format_value(value),
                parameter.unit()
            );
        }
        let _ = writeln!(
            out,
            "    Magnitude = {} Ohms, phase = {} radians.",
            format_value(summary.impedance.norm()),
            format_value(summary.impedance.arg())
        );
    }
    out
}

/// ASCII schematic: the source at the top, series entries stacked vertically and each
/// parallel run drawn on one line. Uppercase symbols are ideal, lowercase non-ideal.
#[must_use]
pub fn diagram(circuit: &Circuit) -> String {
    let mut out = String::from(" O\n |\n(~)\n");
    let mut in_parallel_run = false;
    for entry in circuit.entries() {
        let symbol = entry.component.symbol();
        match entry.connection {
            ConnectionKind::Series => {
                if in_parallel_run {
                    out.push('\n');
                    in_parallel_run = false;
                }
                let _ = write!(out, " |\n[{symbol}]\n");
            }
            ConnectionKind::Parallel => {
                if in_parallel_run {
                    let _ = write!(out, "--[{symbol}]");
                } else {
                    let _ = write!(out, " |\n o--[{symbol}]");
                    in_parallel_run = true;
                }
            }
        }
    }
    if in_parallel_run {
        out.push('\n');
    }
    out.push_str(" |\n O\n");
    out
}
