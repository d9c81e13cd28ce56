use ac_impedance::circuits::analysis::sweep_circuit_impedance;
use ac_impedance::circuits::{Circuit, Component, ComponentKind, ConnectionKind};
use ac_impedance::errors::CircuitError;
use ac_impedance::sweep::SweepConfig;

fn main() -> Result<(), CircuitError> {
    // Series R-L followed by a non-ideal capacitor shunted by a resistor.
    let mut circuit = Circuit::new(1.0e3, 1.0)?;
    circuit.add(&Component::new(ComponentKind::Resistor, &[50.0])?, ConnectionKind::Series, false); // 50 Ω
    circuit.add(&Component::new(ComponentKind::Inductor, &[1e-6])?, ConnectionKind::Series, false); // 1 µH
    circuit.add(
        &Component::new(ComponentKind::NonIdealCapacitor, &[1e-9, 0.05, 2e-9])?, // 1 nF
        ConnectionKind::Parallel,
        false,
    );
    circuit.add(&Component::new(ComponentKind::Resistor, &[1e3])?, ConnectionKind::Parallel, false);

    // Sweep 1 MHz .. 100 MHz, five points per decade.
    let freqs = SweepConfig::logarithmic(1.0e6, 1.0e8, 11).frequencies()?;
    let data = sweep_circuit_impedance(&circuit, freqs);

    println!("f(Hz), Z_real(ohm), Z_imag(ohm), |Z|(ohm)");
    for p in data {
        println!(
            "{:.6e}, {:.6e}, {:.6e}, {:.6e}",
            p.frequency,
            p.impedance.re,
            p.impedance.im,
            p.magnitude()
        );
    }
    Ok(())
}
