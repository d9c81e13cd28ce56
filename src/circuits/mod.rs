//! Passive components, series/parallel reduction and driven circuits.

/// Frequency sweeps of whole circuits and CSV export.
pub mod analysis;
/// Driven circuits owning component snapshots.
pub mod circuit;
/// Lumped component definitions and traits.
pub mod component;
/// Admissible parameter ranges.
pub mod domain;
/// Series/parallel run reduction.
pub mod network;
/// Textual entry notation.
pub mod notation;

pub use analysis::{sweep_circuit_impedance, FrequencyPoint};
pub use circuit::{Circuit, CircuitEntry, EntrySummary};
pub use component::{
    Capacitor, Component, ComponentKind, ComponentRecord, Inductor, NonIdealCapacitor,
    NonIdealInductor, NonIdealResistor, Passive, Resistor,
};
pub use network::{reduce, ConnectionKind};
pub use notation::EntryNotation;
