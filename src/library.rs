//! Owned workspace of created components and circuits.
//!
//! A front end keeps one [`Library`] value and passes it where it is needed; there is
//! no process-wide state. Circuits never borrow from the library: adding a library
//! component to a circuit stores a copy, so later edits in the library do not reach
//! circuits built earlier.

use crate::circuits::{Circuit, Component, ComponentKind, ConnectionKind};
use crate::errors::{IndexError, Result};
use crate::math::Scalar;

/// Components and circuits created during a session.
#[derive(Debug, Clone, Default)]
pub struct Library {
    components: Vec<Component>,
    circuits: Vec<Circuit>,
}

fn check(index: usize, len: usize) -> Result<(), IndexError> {
    if index < len {
        Ok(())
    } else {
        Err(IndexError { index, len })
    }
}

impl Library {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a new component, returning its index.
    pub fn create_component(&mut self, kind: ComponentKind, parameters: &[Scalar]) -> Result<usize> {
        let component = Component::new(kind, parameters)?;
        Ok(self.add_component(component))
    }

    /// Stores an already validated component, returning its index.
    pub fn add_component(&mut self, component: Component) -> usize {
        self.components.push(component);
        self.components.len() - 1
    }

    /// Stored components in creation order.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Component at `index`.
    pub fn component(&self, index: usize) -> Result<&Component, IndexError> {
        check(index, self.components.len())?;
        Ok(&self.components[index])
    }

    /// Changes the primary value of a stored component. Circuits are unaffected.
    pub fn set_component_value(&mut self, index: usize, value: Scalar) -> Result<()> {
        check(index, self.components.len())?;
        self.components[index].set_value(value)?;
        Ok(())
    }

    /// Removes and returns a stored component.
    pub fn remove_component(&mut self, index: usize) -> Result<Component, IndexError> {
        check(index, self.components.len())?;
        Ok(self.components.remove(index))
    }

    /// Creates an empty circuit, returning its index.
    pub fn create_circuit(&mut self, frequency_hz: Scalar, voltage_v: Scalar) -> Result<usize> {
        Ok(self.add_circuit(Circuit::new(frequency_hz, voltage_v)?))
    }

    /// Stores an existing circuit, returning its index.
    pub fn add_circuit(&mut self, circuit: Circuit) -> usize {
        self.circuits.push(circuit);
        self.circuits.len() - 1
    }

    /// Stored circuits in creation order.
    #[must_use]
    pub fn circuits(&self) -> &[Circuit] {
        &self.circuits
    }

    /// Circuit at `index`.
    pub fn circuit(&self, index: usize) -> Result<&Circuit, IndexError> {
        check(index, self.circuits.len())?;
        Ok(&self.circuits[index])
    }

    /// Mutable circuit at `index`.
    pub fn circuit_mut(&mut self, index: usize) -> Result<&mut Circuit, IndexError> {
        check(index, self.circuits.len())?;
        Ok(&mut self.circuits[index])
    }

    /// Removes and returns a stored circuit.
    pub fn remove_circuit(&mut self, index: usize) -> Result<Circuit, IndexError> {
        check(index, self.circuits.len())?;
        Ok(self.circuits.remove(index))
    }

    /// Copies component `component` into circuit `circuit`.
    pub fn add_to_circuit(
        &mut self,
        circuit: usize,
        component: usize,
        connection: ConnectionKind,
        nested: bool,
    ) -> Result<(), IndexError> {
        check(component, self.components.len())?;
        check(circuit, self.circuits.len())?;
        let snapshot = self.components[component];
        self.circuits[circuit].add(&snapshot, connection, nested);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::errors::CircuitError;

    #[test]
    fn library_edits_do_not_reach_circuits() {
        let mut library = Library::new();
        let r = library
            .create_component(ComponentKind::Resistor, &[100.0])
            .expect("valid resistor");
        let c = library.create_circuit(50.0, 10.0).expect("valid circuit");
        library
            .add_to_circuit(c, r, ConnectionKind::Series, false)
            .expect("indices exist");
        library.set_component_value(r, 200.0).expect("valid resistance");

        assert_relative_eq!(library.circuit(c).expect("exists").impedance().re, 100.0);
        assert_eq!(library.component(r).expect("exists").parameters(), vec![200.0]);
    }

    #[test]
    fn bad_indices_are_reported() {
        let mut library = Library::new();
        assert_eq!(
            library.add_to_circuit(0, 0, ConnectionKind::Series, false),
            Err(IndexError { index: 0, len: 0 })
        );
        assert!(matches!(
            library.set_component_value(2, 1.0),
            Err(CircuitError::Index(IndexError { index: 2, len: 0 }))
        ));
        assert!(library.remove_circuit(0).is_err());
    }

    #[test]
    fn invalid_components_are_not_stored() {
        let mut library = Library::new();
        assert!(library
            .create_component(ComponentKind::Capacitor, &[1.0e3])
            .is_err());
        assert!(library.components().is_empty());
    }

    #[test]
    fn circuits_can_be_edited_in_place() {
        let mut library = Library::new();
        let c = library.create_circuit(1.0e3, 1.0).expect("valid circuit");
        library
            .circuit_mut(c)
            .expect("exists")
            .set_voltage(5.0)
            .expect("valid voltage");
        assert_eq!(library.circuits()[c].voltage(), 5.0);
        let removed = library.remove_circuit(c).expect("exists");
        assert_eq!(removed.voltage(), 5.0);
        assert!(library.circuits().is_empty());
        assert_eq!(library.add_circuit(removed), 0);
    }
}
