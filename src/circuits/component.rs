use std::fmt;

use num_complex::Complex;

use crate::circuits::domain::{
    Domain, CAPACITANCE, INDUCTANCE, NON_IDEAL_RESISTANCE, PARASITIC_CAPACITANCE,
    PARASITIC_INDUCTANCE, PARASITIC_RESISTANCE, RESISTANCE,
};
use crate::constants::angular_frequency;
use crate::errors::{ArityError, DomainError, Parameter, Result};
use crate::math::Scalar;

/// Trait implemented by every passive component that can provide a frequency-domain impedance.
pub trait Passive {
    /// Returns the component's impedance for an angular frequency `omega` (rad/s).
    ///
    /// Not defined for negative `omega`; no clamping is applied.
    fn impedance(&self, omega: Scalar) -> Complex<Scalar>;

    /// Variant tag of the component.
    fn kind(&self) -> ComponentKind;

    /// Primary value (resistance, capacitance or inductance).
    fn value(&self) -> Scalar;
}

/// The closed set of supported component kinds.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Ideal resistor.
    Resistor,
    /// Ideal capacitor.
    Capacitor,
    /// Ideal inductor.
    Inductor,
    /// Resistor with parasitic inductance and capacitance.
    NonIdealResistor,
    /// Capacitor with parasitic resistance and inductance.
    NonIdealCapacitor,
    /// Inductor with parasitic resistance and capacitance.
    NonIdealInductor,
}

impl ComponentKind {
    /// Every kind, ideal variants first.
    pub const ALL: [Self; 6] = [
        Self::Resistor,
        Self::Capacitor,
        Self::Inductor,
        Self::NonIdealResistor,
        Self::NonIdealCapacitor,
        Self::NonIdealInductor,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Resistor => "resistor",
            Self::Capacitor => "capacitor",
            Self::Inductor => "inductor",
            Self::NonIdealResistor => "non-ideal resistor",
            Self::NonIdealCapacitor => "non-ideal capacitor",
            Self::NonIdealInductor => "non-ideal inductor",
        }
    }

    /// Diagram symbol: uppercase for ideal kinds, lowercase for non-ideal ones.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Resistor => 'R',
            Self::Capacitor => 'C',
            Self::Inductor => 'L',
            Self::NonIdealResistor => 'r',
            Self::NonIdealCapacitor => 'c',
            Self::NonIdealInductor => 'l',
        }
    }

    /// Inverse of [`ComponentKind::symbol`].
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.symbol() == symbol)
    }

    /// True for the three ideal kinds.
    #[must_use]
    pub const fn is_ideal(self) -> bool {
        matches!(self, Self::Resistor | Self::Capacitor | Self::Inductor)
    }

    /// Ordered parameter list accepted by [`Component::new`], primary value first.
    #[must_use]
    pub fn parameters(self) -> &'static [(Parameter, Domain)] {
        match self {
            Self::Resistor => &[(Parameter::Resistance, RESISTANCE)],
            Self::Capacitor => &[(Parameter::Capacitance, CAPACITANCE)],
            Self::Inductor => &[(Parameter::Inductance, INDUCTANCE)],
            Self::NonIdealResistor => &[
                (Parameter::Resistance, NON_IDEAL_RESISTANCE),
                (Parameter::ParasiticInductance, PARASITIC_INDUCTANCE),
                (Parameter::ParasiticCapacitance, PARASITIC_CAPACITANCE),
            ],
            Self::NonIdealCapacitor => &[
                (Parameter::Capacitance, CAPACITANCE),
                (Parameter::ParasiticResistance, PARASITIC_RESISTANCE),
                (Parameter::ParasiticInductance, PARASITIC_INDUCTANCE),
            ],
            Self::NonIdealInductor => &[
                (Parameter::Inductance, INDUCTANCE),
                (Parameter::ParasiticResistance, PARASITIC_RESISTANCE),
                (Parameter::ParasiticCapacitance, PARASITIC_CAPACITANCE),
            ],
        }
    }

    /// Domain of the primary value.
    #[must_use]
    pub fn primary(self) -> (Parameter, Domain) {
        self.parameters()[0]
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lumped resistor model (ideal).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resistor {
    resistance: Scalar,
}

impl Resistor {
    /// Creates a resistor.
    pub fn new(resistance_ohms: Scalar) -> Result<Self, DomainError> {
        Ok(Self {
            resistance: RESISTANCE.check(Parameter::Resistance, resistance_ohms)?,
        })
    }

    /// Resistance in ohms.
    #[must_use]
    pub const fn resistance(&self) -> Scalar {
        self.resistance
    }

    /// Replaces the resistance after validating it.
    pub fn set_resistance(&mut self, resistance_ohms: Scalar) -> Result<(), DomainError> {
        self.resistance = RESISTANCE.check(Parameter::Resistance, resistance_ohms)?;
        Ok(())
    }
}

impl Passive for Resistor {
    fn impedance(&self, _omega: Scalar) -> Complex<Scalar> {
        Complex::new(self.resistance, 0.0)
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Resistor
    }

    fn value(&self) -> Scalar {
        self.resistance
    }
}

/// Lumped capacitor model (ideal).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capacitor {
    capacitance: Scalar,
}

impl Capacitor {
    /// Creates a capacitor.
    pub fn new(capacitance_f: Scalar) -> Result<Self, DomainError> {
        Ok(Self {
            capacitance: CAPACITANCE.check(Parameter::Capacitance, capacitance_f)?,
        })
    }

    /// Returns the capacitance in farads.
    #[must_use]
    pub const fn capacitance(&self) -> Scalar {
        self.capacitance
    }

    /// Replaces the capacitance after validating it.
    pub fn set_capacitance(&mut self, capacitance_f: Scalar) -> Result<(), DomainError> {
        self.capacitance = CAPACITANCE.check(Parameter::Capacitance, capacitance_f)?;
        Ok(())
    }
}

impl Passive for Capacitor {
    // At omega = 0 this is 0 - j∞.
    fn impedance(&self, omega: Scalar) -> Complex<Scalar> {
        Complex::new(0.0, -1.0 / (omega * self.capacitance))
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Capacitor
    }

    fn value(&self) -> Scalar {
        self.capacitance
    }
}

/// Lumped inductor model (ideal).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inductor {
    inductance: Scalar,
}

impl Inductor {
    /// Creates an inductor.
    pub fn new(inductance_h: Scalar) -> Result<Self, DomainError> {
        Ok(Self {
            inductance: INDUCTANCE.check(Parameter::Inductance, inductance_h)?,
        })
    }

    /// Returns the inductance in henries.
    #[must_use]
    pub const fn inductance(&self) -> Scalar {
        self.inductance
    }

    /// Replaces the inductance after validating it.
    pub fn set_inductance(&mut self, inductance_h: Scalar) -> Result<(), DomainError> {
        self.inductance = INDUCTANCE.check(Parameter::Inductance, inductance_h)?;
        Ok(())
    }
}

impl Passive for Inductor {
    fn impedance(&self, omega: Scalar) -> Complex<Scalar> {
        Complex::new(0.0, omega * self.inductance)
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Inductor
    }

    fn value(&self) -> Scalar {
        self.inductance
    }
}

/// Closed form shared by all non-ideal components.
///
/// With `a = 1 - ω²CL` and `b = ωRC`:
/// `Re Z = R / (a² + b²)` and `Im Z = (ωL + ω³CL² - ωCR²) / (a² + b²)`.
/// The denominator is strictly positive for `R, C > 0`.
#[must_use]
pub fn parasitic_impedance(
    omega: Scalar,
    resistance: Scalar,
    inductance: Scalar,
    capacitance: Scalar,
) -> Complex<Scalar> {
    let a = 1.0 - omega * omega * capacitance * inductance;
    let b = omega * resistance * capacitance;
    let denominator = a.mul_add(a, b * b);
    let reactance = omega * inductance + omega.powi(3) * capacitance * inductance * inductance
        - omega * capacitance * resistance * resistance;
    Complex::new(resistance / denominator, reactance / denominator)
}

/// Resistor with parasitic lead inductance and shunt capacitance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonIdealResistor {
    resistance: Scalar,
    inductance: Scalar,
    capacitance: Scalar,
}

impl NonIdealResistor {
    /// Creates a non-ideal resistor; every parameter is validated before construction.
    pub fn new(
        resistance_ohms: Scalar,
        parasitic_inductance_h: Scalar,
        parasitic_capacitance_f: Scalar,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            resistance: NON_IDEAL_RESISTANCE.check(Parameter::Resistance, resistance_ohms)?,
            inductance: PARASITIC_INDUCTANCE
                .check(Parameter::ParasiticInductance, parasitic_inductance_h)?,
            capacitance: PARASITIC_CAPACITANCE
                .check(Parameter::ParasiticCapacitance, parasitic_capacitance_f)?,
        })
    }

    /// Resistance in ohms.
    #[must_use]
    pub const fn resistance(&self) -> Scalar {
        self.resistance
    }

    /// Parasitic inductance in henries.
    #[must_use]
    pub const fn parasitic_inductance(&self) -> Scalar {
        self.inductance
    }

    /// Parasitic capacitance in farads.
    #[must_use]
    pub const fn parasitic_capacitance(&self) -> Scalar {
        self.capacitance
    }

    /// Replaces the resistance after validating it.
    pub fn set_resistance(&mut self, resistance_ohms: Scalar) -> Result<(), DomainError> {
        self.resistance = NON_IDEAL_RESISTANCE.check(Parameter::Resistance, resistance_ohms)?;
        Ok(())
    }

    /// Replaces the parasitic inductance after validating it.
    pub fn set_parasitic_inductance(&mut self, inductance_h: Scalar) -> Result<(), DomainError> {
        self.inductance = PARASITIC_INDUCTANCE.check(Parameter::ParasiticInductance, inductance_h)?;
        Ok(())
    }

    /// Replaces the parasitic capacitance after validating it.
    pub fn set_parasitic_capacitance(&mut self, capacitance_f: Scalar) -> Result<(), DomainError> {
        self.capacitance =
            PARASITIC_CAPACITANCE.check(Parameter::ParasiticCapacitance, capacitance_f)?;
        Ok(())
    }
}

impl Passive for NonIdealResistor {
    fn impedance(&self, omega: Scalar) -> Complex<Scalar> {
        parasitic_impedance(omega, self.resistance, self.inductance, self.capacitance)
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::NonIdealResistor
    }

    fn value(&self) -> Scalar {
        self.resistance
    }
}

/// Capacitor with parasitic series resistance and lead inductance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonIdealCapacitor {
    capacitance: Scalar,
    resistance: Scalar,
    inductance: Scalar,
}

impl NonIdealCapacitor {
    /// Creates a non-ideal capacitor; every parameter is validated before construction.
    pub fn new(
        capacitance_f: Scalar,
        parasitic_resistance_ohms: Scalar,
        parasitic_inductance_h: Scalar,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            capacitance: CAPACITANCE.check(Parameter::Capacitance, capacitance_f)?,
            resistance: PARASITIC_RESISTANCE
                .check(Parameter::ParasiticResistance, parasitic_resistance_ohms)?,
            inductance: PARASITIC_INDUCTANCE
                .check(Parameter::ParasiticInductance, parasitic_inductance_h)?,
        })
    }

    /// Capacitance in farads.
    #[must_use]
    pub const fn capacitance(&self) -> Scalar {
        self.capacitance
    }

    /// Parasitic resistance in ohms.
    #[must_use]
    pub const fn parasitic_resistance(&self) -> Scalar {
        self.resistance
    }

    /// Parasitic inductance in henries.
    #[must_use]
    pub const fn parasitic_inductance(&self) -> Scalar {
        self.inductance
    }

    /// Replaces the capacitance after validating it.
    pub fn set_capacitance(&mut self, capacitance_f: Scalar) -> Result<(), DomainError> {
        self.capacitance = CAPACITANCE.check(Parameter::Capacitance, capacitance_f)?;
        Ok(())
    }

    /// Replaces the parasitic resistance after validating it.
    pub fn set_parasitic_resistance(&mut self, resistance_ohms: Scalar) -> Result<(), DomainError> {
        self.resistance =
            PARASITIC_RESISTANCE.check(Parameter::ParasiticResistance, resistance_ohms)?;
        Ok(())
    }

    /// Replaces the parasitic inductance after validating it.
    pub fn set_parasitic_inductance(&mut self, inductance_h: Scalar) -> Result<(), DomainError> {
        self.inductance = PARASITIC_INDUCTANCE.check(Parameter::ParasiticInductance, inductance_h)?;
        Ok(())
    }
}

impl Passive for NonIdealCapacitor {
    fn impedance(&self, omega: Scalar) -> Complex<Scalar> {
        parasitic_impedance(omega, self.resistance, self.inductance, self.capacitance)
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::NonIdealCapacitor
    }

    fn value(&self) -> Scalar {
        self.capacitance
    }
}

/// Inductor with parasitic winding resistance and inter-winding capacitance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonIdealInductor {
    inductance: Scalar,
    resistance: Scalar,
    capacitance: Scalar,
}

impl NonIdealInductor {
    /// Creates a non-ideal inductor; every parameter is validated before construction.
    pub fn new(
        inductance_h: Scalar,
        parasitic_resistance_ohms: Scalar,
        parasitic_capacitance_f: Scalar,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            inductance: INDUCTANCE.check(Parameter::Inductance, inductance_h)?,
            resistance: PARASITIC_RESISTANCE
                .check(Parameter::ParasiticResistance, parasitic_resistance_ohms)?,
            capacitance: PARASITIC_CAPACITANCE
                .check(Parameter::ParasiticCapacitance, parasitic_capacitance_f)?,
        })
    }

    /// Inductance in henries.
    #[must_use]
    pub const fn inductance(&self) -> Scalar {
        self.inductance
    }

    /// Parasitic resistance in ohms.
    #[must_use]
    pub const fn parasitic_resistance(&self) -> Scalar {
        self.resistance
    }

    /// Parasitic capacitance in farads.
    #[must_use]
    pub const fn parasitic_capacitance(&self) -> Scalar {
        self.capacitance
    }

    /// Replaces the inductance after validating it.
    pub fn set_inductance(&mut self, inductance_h: Scalar) -> Result<(), DomainError> {
        self.inductance = INDUCTANCE.check(Parameter::Inductance, inductance_h)?;
        Ok(())
    }

    /// Replaces the parasitic resistance after validating it.
    pub fn set_parasitic_resistance(&mut self, resistance_ohms: Scalar) -> Result<(), DomainError> {
        self.resistance =
            PARASITIC_RESISTANCE.check(Parameter::ParasiticResistance, resistance_ohms)?;
        Ok(())
    }

    /// Replaces the parasitic capacitance after validating it.
    pub fn set_parasitic_capacitance(&mut self, capacitance_f: Scalar) -> Result<(), DomainError> {
        self.capacitance =
            PARASITIC_CAPACITANCE.check(Parameter::ParasiticCapacitance, capacitance_f)?;
        Ok(())
    }
}

impl Passive for NonIdealInductor {
    fn impedance(&self, omega: Scalar) -> Complex<Scalar> {
        parasitic_impedance(omega, self.resistance, self.inductance, self.capacitance)
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::NonIdealInductor
    }

    fn value(&self) -> Scalar {
        self.inductance
    }
}

/// Any supported component, each variant carrying its own validated parameters.
///
/// Values are plain data: cloning a component yields an independent snapshot.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ComponentRecord", into = "ComponentRecord")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Component {
    /// Ideal resistor.
    Resistor(Resistor),
    /// Ideal capacitor.
    Capacitor(Capacitor),
    /// Ideal inductor.
    Inductor(Inductor),
    /// Non-ideal resistor.
    NonIdealResistor(NonIdealResistor),
    /// Non-ideal capacitor.
    NonIdealCapacitor(NonIdealCapacitor),
    /// Non-ideal inductor.
    NonIdealInductor(NonIdealInductor),
}

impl Component {
    /// Creates a component of `kind` from its ordered parameter list
    /// (see [`ComponentKind::parameters`]).
    pub fn new(kind: ComponentKind, parameters: &[Scalar]) -> Result<Self> {
        let expected = kind.parameters().len();
        if parameters.len() != expected {
            return Err(ArityError {
                kind,
                expected,
                found: parameters.len(),
            }
            .into());
        }
        let p = parameters;
        let component = match kind {
            ComponentKind::Resistor => Self::Resistor(Resistor::new(p[0])?),
            ComponentKind::Capacitor => Self::Capacitor(Capacitor::new(p[0])?),
            ComponentKind::Inductor => Self::Inductor(Inductor::new(p[0])?),
            ComponentKind::NonIdealResistor => {
                Self::NonIdealResistor(NonIdealResistor::new(p[0], p[1], p[2])?)
            }
            ComponentKind::NonIdealCapacitor => {
                Self::NonIdealCapacitor(NonIdealCapacitor::new(p[0], p[1], p[2])?)
            }
            ComponentKind::NonIdealInductor => {
                Self::NonIdealInductor(NonIdealInductor::new(p[0], p[1], p[2])?)
            }
        };
        Ok(component)
    }

    /// Current parameter values, in the order accepted by [`Component::new`].
    #[must_use]
    pub fn parameters(&self) -> Vec<Scalar> {
        match self {
            Self::Resistor(r) => vec![r.resistance()],
            Self::Capacitor(c) => vec![c.capacitance()],
            Self::Inductor(l) => vec![l.inductance()],
            Self::NonIdealResistor(r) => vec![
                r.resistance(),
                r.parasitic_inductance(),
                r.parasitic_capacitance(),
            ],
            Self::NonIdealCapacitor(c) => vec![
                c.capacitance(),
                c.parasitic_resistance(),
                c.parasitic_inductance(),
            ],
            Self::NonIdealInductor(l) => vec![
                l.inductance(),
                l.parasitic_resistance(),
                l.parasitic_capacitance(),
            ],
        }
    }

    /// Replaces the primary value. On failure the component is left unchanged.
    pub fn set_value(&mut self, value: Scalar) -> Result<(), DomainError> {
        match self {
            Self::Resistor(r) => r.set_resistance(value),
            Self::Capacitor(c) => c.set_capacitance(value),
            Self::Inductor(l) => l.set_inductance(value),
            Self::NonIdealResistor(r) => r.set_resistance(value),
            Self::NonIdealCapacitor(c) => c.set_capacitance(value),
            Self::NonIdealInductor(l) => l.set_inductance(value),
        }
    }

    /// Diagram symbol of this component's kind.
    #[must_use]
    pub fn symbol(&self) -> char {
        self.kind().symbol()
    }

    /// Impedance at a linear frequency in hertz.
    #[must_use]
    pub fn impedance_at(&self, frequency_hz: Scalar) -> Complex<Scalar> {
        self.impedance(angular_frequency(frequency_hz))
    }

    /// Impedance magnitude at `frequency_hz`.
    #[must_use]
    pub fn magnitude(&self, frequency_hz: Scalar) -> Scalar {
        self.impedance_at(frequency_hz).norm()
    }

    /// Impedance phase in radians at `frequency_hz`.
    #[must_use]
    pub fn phase(&self, frequency_hz: Scalar) -> Scalar {
        self.impedance_at(frequency_hz).arg()
    }
}

impl Passive for Component {
    fn impedance(&self, omega: Scalar) -> Complex<Scalar> {
        match self {
            Self::Resistor(r) => r.impedance(omega),
            Self::Capacitor(c) => c.impedance(omega),
            Self::Inductor(l) => l.impedance(omega),
            Self::NonIdealResistor(r) => r.impedance(omega),
            Self::NonIdealCapacitor(c) => c.impedance(omega),
            Self::NonIdealInductor(l) => l.impedance(omega),
        }
    }

    fn kind(&self) -> ComponentKind {
        match self {
            Self::Resistor(_) => ComponentKind::Resistor,
            Self::Capacitor(_) => ComponentKind::Capacitor,
            Self::Inductor(_) => ComponentKind::Inductor,
            Self::NonIdealResistor(_) => ComponentKind::NonIdealResistor,
            Self::NonIdealCapacitor(_) => ComponentKind::NonIdealCapacitor,
            Self::NonIdealInductor(_) => ComponentKind::NonIdealInductor,
        }
    }

    fn value(&self) -> Scalar {
        match self {
            Self::Resistor(r) => r.value(),
            Self::Capacitor(c) => c.value(),
            Self::Inductor(l) => l.value(),
            Self::NonIdealResistor(r) => r.value(),
            Self::NonIdealCapacitor(c) => c.value(),
            Self::NonIdealInductor(l) => l.value(),
        }
    }
}

impl From<Resistor> for Component {
    fn from(value: Resistor) -> Self {
        Self::Resistor(value)
    }
}

impl From<Capacitor> for Component {
    fn from(value: Capacitor) -> Self {
        Self::Capacitor(value)
    }
}

impl From<Inductor> for Component {
    fn from(value: Inductor) -> Self {
        Self::Inductor(value)
    }
}

impl From<NonIdealResistor> for Component {
    fn from(value: NonIdealResistor) -> Self {
        Self::NonIdealResistor(value)
    }
}

impl From<NonIdealCapacitor> for Component {
    fn from(value: NonIdealCapacitor) -> Self {
        Self::NonIdealCapacitor(value)
    }
}

impl From<NonIdealInductor> for Component {
    fn from(value: NonIdealInductor) -> Self {
        Self::NonIdealInductor(value)
    }
}

/// Unvalidated serialized form of a [`Component`]: its kind plus ordered parameters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRecord {
    /// Component kind.
    pub kind: ComponentKind,
    /// Parameters in [`ComponentKind::parameters`] order.
    pub parameters: Vec<Scalar>,
}

impl From<Component> for ComponentRecord {
    fn from(component: Component) -> Self {
        Self {
            kind: component.kind(),
            parameters: component.parameters(),
        }
    }
}

impl TryFrom<ComponentRecord> for Component {
    type Error = crate::errors::CircuitError;

    fn try_from(record: ComponentRecord) -> Result<Self> {
        Self::new(record.kind, &record.parameters)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    use super::*;
    use crate::errors::{Bound, CircuitError};

    #[test]
    fn resistor_impedance_is_real() {
        let r = Resistor::new(100.0).expect("valid resistance");
        for omega in [0.0, 1.0, 1.0e6] {
            let z = r.impedance(omega);
            assert_relative_eq!(z.re, 100.0);
            assert_relative_eq!(z.im, 0.0);
        }
    }

    #[test]
    fn capacitor_impedance_is_reactive() {
        let c = Component::from(Capacitor::new(1e-6).expect("valid capacitance"));
        let f = 1.0e3;
        let z = c.impedance_at(f);
        assert_relative_eq!(z.re, 0.0, epsilon = 1.0e-12);
        assert!(z.im < 0.0);
        assert_relative_eq!(c.magnitude(f), 1.0 / (2.0 * PI * f * 1e-6), max_relative = 1.0e-12);
        assert_relative_eq!(c.phase(f), -PI / 2.0, epsilon = 1.0e-12);
    }

    #[test]
    fn capacitor_is_open_at_dc() {
        let c = Capacitor::new(1e-6).expect("valid capacitance");
        let z = c.impedance(0.0);
        assert_eq!(z.re, 0.0);
        assert!(z.im.is_infinite() && z.im < 0.0);
    }

    #[test]
    fn inductor_impedance_grows_with_frequency() {
        let l = Inductor::new(1e-3).expect("valid inductance");
        assert_relative_eq!(l.impedance(1.0e3).im, 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(l.impedance(2.0e3).im, 2.0, epsilon = 1.0e-12);
    }

    #[test]
    fn parasitic_form_reduces_to_resistance_at_dc() {
        let r = NonIdealResistor::new(0.5, 1e-9, 1e-12).expect("valid parameters");
        let z = r.impedance(0.0);
        assert_relative_eq!(z.re, 0.5);
        assert_relative_eq!(z.im, 0.0);
    }

    #[test]
    fn parasitic_form_matches_hand_computation() {
        let omega = 2.0 * PI * 1.0e6;
        let (r, l, c) = (0.5, 5.0e-9, 2.0e-12);
        let a = 1.0 - omega * omega * c * l;
        let b = omega * r * c;
        let den = a * a + b * b;
        let expected_im = (omega * l + omega.powi(3) * c * l * l - omega * c * r * r) / den;

        let inductor = NonIdealInductor::new(l * 1.0e3, r, c).expect("valid parameters");
        let z = parasitic_impedance(omega, r, l, c);
        assert_relative_eq!(z.re, r / den, max_relative = 1.0e-12);
        assert_relative_eq!(z.im, expected_im, max_relative = 1.0e-12);
        // Same closed form, different binding: the inductance takes the L slot.
        let zi = inductor.impedance(omega);
        let zr = parasitic_impedance(omega, r, l * 1.0e3, c);
        assert_relative_eq!(zi.re, zr.re, max_relative = 1.0e-12);
        assert_relative_eq!(zi.im, zr.im, max_relative = 1.0e-12);
    }

    fn closed_form(omega: Scalar, r: Scalar, l: Scalar, c: Scalar) -> Complex<Scalar> {
        let a = 1.0 - omega * omega * c * l;
        let b = omega * r * c;
        let den = a * a + b * b;
        Complex::new(
            r / den,
            (omega * l + omega.powi(3) * c * l * l - omega * c * r * r) / den,
        )
    }

    #[test]
    fn non_ideal_capacitor_binds_its_own_roles() {
        let omega = 2.0 * PI * 50.0e3;
        let (c, r, l) = (2.2e-6, 0.2, 4.0e-9);
        let z = NonIdealCapacitor::new(c, r, l)
            .expect("valid parameters")
            .impedance(omega);
        let expected = closed_form(omega, r, l, c);
        assert_relative_eq!(z.re, expected.re, max_relative = 1.0e-12);
        assert_relative_eq!(z.im, expected.im, max_relative = 1.0e-12);
        // Swapping any two roles gives a visibly different result.
        assert!((closed_form(omega, r, c, l) - expected).norm() > 1.0e-3 * expected.norm());
    }

    #[test]
    fn non_ideal_resistor_binds_its_own_roles() {
        let omega = 2.0 * PI * 100.0e6;
        let (r, l, c) = (0.75, 8.0e-9, 5.0e-12);
        let z = NonIdealResistor::new(r, l, c)
            .expect("valid parameters")
            .impedance(omega);
        let expected = closed_form(omega, r, l, c);
        assert_relative_eq!(z.re, expected.re, max_relative = 1.0e-12);
        assert_relative_eq!(z.im, expected.im, max_relative = 1.0e-12);
        assert!(expected.im.abs() > 1.0e-3);
    }

    #[test]
    fn construction_rejects_boundaries() {
        for value in [1.0e-9, 10.0e9, 0.0, -5.0, Scalar::NAN] {
            assert!(Resistor::new(value).is_err(), "{value} should be rejected");
        }
        let err = NonIdealCapacitor::new(1e-6, 0.1, 10.0e-9).unwrap_err();
        assert_eq!(err.parameter, Parameter::ParasiticInductance);
        assert_eq!(err.bound, Bound::Below(10.0e-9));
    }

    #[test]
    fn generic_constructor_checks_arity() {
        let err = Component::new(ComponentKind::NonIdealInductor, &[1e-3]).unwrap_err();
        assert!(matches!(
            err,
            CircuitError::Arity(ArityError { expected: 3, found: 1, .. })
        ));
    }

    #[test]
    fn record_round_trip_preserves_impedance() {
        let original = Component::new(ComponentKind::NonIdealCapacitor, &[4.7e-6, 0.05, 2e-9])
            .expect("valid parameters");
        let record = ComponentRecord::from(original);
        let rebuilt = Component::try_from(record).expect("record is valid");
        assert_eq!(rebuilt, original);
        assert_eq!(rebuilt.impedance_at(12_345.0), original.impedance_at(12_345.0));
    }

    #[test]
    fn failed_set_value_keeps_previous_state() {
        let mut c = Component::new(ComponentKind::Inductor, &[1e-3]).expect("valid");
        assert!(c.set_value(20.0e3).is_err());
        assert_eq!(c.value(), 1e-3);
        c.set_value(2e-3).expect("valid inductance");
        assert_eq!(c.value(), 2e-3);
    }

    #[test]
    fn symbols_round_trip() {
        for kind in ComponentKind::ALL {
            assert_eq!(ComponentKind::from_symbol(kind.symbol()), Some(kind));
            assert_eq!(kind.is_ideal(), kind.symbol().is_ascii_uppercase());
        }
        assert_eq!(ComponentKind::from_symbol('x'), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn json_round_trip_keeps_parameters() {
        let original = Component::new(ComponentKind::NonIdealInductor, &[2.2e-3, 0.3, 4.0e-12])
            .expect("valid parameters");
        let json = serde_json::to_string(&original).expect("serializable");
        assert!(json.contains("\"NonIdealInductor\""));
        let rebuilt: Component = serde_json::from_str(&json).expect("valid record");
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn deserializing_revalidates_parameters() {
        let err = serde_json::from_str::<Component>(r#"{"kind":"Resistor","parameters":[0.0]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("resistance"));
        assert!(serde_json::from_str::<Component>(r#"{"kind":"Capacitor","parameters":[]}"#)
            .is_err());
        let ok: Component =
            serde_json::from_str(r#"{"kind":"Resistor","parameters":[47.0]}"#).expect("valid");
        assert_eq!(ok.value(), 47.0);
    }
}
