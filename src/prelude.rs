//! Convenience re-exports for building and evaluating circuits.

pub use crate::circuits::{
    analysis::{sweep_circuit_impedance, write_frequency_points_csv, FrequencyPoint},
    circuit::{Circuit, CircuitEntry, EntrySummary},
    component::{
        Capacitor, Component, ComponentKind, ComponentRecord, Inductor, NonIdealCapacitor,
        NonIdealInductor, NonIdealResistor, Passive, Resistor,
    },
    network::{reduce, ConnectionKind},
    notation::EntryNotation,
};
pub use crate::constants::angular_frequency;
pub use crate::errors::{
    ArityError, Bound, CircuitError, DivisionError, DomainError, IndexError, Parameter,
};
pub use crate::library::Library;
pub use crate::math::{CScalar, Scalar};
pub use crate::report::{circuit_info, component_listing, diagram, format_value};
pub use crate::sweep::{linspace, logspace_hz, Spacing, SweepConfig};
