//! Compact textual form of a circuit entry: `<symbol>:<values>:<connection>`.
//!
//! * `symbol` is one of `R C L` (ideal) or `r c l` (non-ideal).
//! * `values` is a comma-separated list of plain floating point numbers in the
//!   order of [`ComponentKind::parameters`]. No SI prefixes.
//! * `connection` is `s` (series) or `p` (parallel), optionally followed by `n` to mark
//!   the entry as nested.
//!
//! ```
//! use ac_impedance::circuits::notation::EntryNotation;
//!
//! let entry: EntryNotation = "c:1e-6,0.1,1e-9:pn".parse().unwrap();
//! assert!(entry.nested);
//! assert_eq!(entry.to_string(), "c:0.000001,0.1,0.000000001:pn");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::circuits::component::{Component, ComponentKind};
use crate::circuits::network::ConnectionKind;
use crate::errors::{CircuitError, Result};
use crate::math::Scalar;

/// Parsed, not yet validated, circuit entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryNotation {
    /// Component kind selected by the symbol.
    pub kind: ComponentKind,
    /// Raw parameter values.
    pub parameters: Vec<Scalar>,
    /// Series or parallel.
    pub connection: ConnectionKind,
    /// Nested flag.
    pub nested: bool,
}

impl EntryNotation {
    /// Validates the parameters and builds the component.
    pub fn component(&self) -> Result<Component> {
        Component::new(self.kind, &self.parameters)
    }
}

fn notation_error(input: &str, reason: impl fmt::Display) -> CircuitError {
    CircuitError::Notation(format!("`{input}`: {reason}"))
}

impl FromStr for EntryNotation {
    type Err = CircuitError;

    fn from_str(input: &str) -> Result<Self> {
        let mut fields = input.trim().split(':');
        let (Some(symbol), Some(values), Some(tag), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(notation_error(input, "expected <symbol>:<values>:<s|p>[n]"));
        };

        let mut chars = symbol.chars();
        let kind = match (chars.next(), chars.next()) {
            (Some(c), None) => ComponentKind::from_symbol(c),
            _ => None,
        }
        .ok_or_else(|| notation_error(input, format!("unknown component symbol `{symbol}`")))?;

        let parameters = values
            .split(',')
            .map(|v| {
                v.trim()
                    .parse::<Scalar>()
                    .map_err(|e| notation_error(input, format!("`{v}`: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        let (connection, nested) = match tag {
            "s" => (ConnectionKind::Series, false),
            "p" => (ConnectionKind::Parallel, false),
            "sn" => (ConnectionKind::Series, true),
            "pn" => (ConnectionKind::Parallel, true),
            other => {
                return Err(notation_error(
                    input,
                    format!("connection must be s, p, sn or pn, got `{other}`"),
                ))
            }
        };

        Ok(Self {
            kind,
            parameters,
            connection,
            nested,
        })
    }
}

impl fmt::Display for EntryNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.kind.symbol())?;
        for (i, value) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        let tag = match self.connection {
            ConnectionKind::Series => 's',
            ConnectionKind::Parallel => 'p',
        };
        write!(f, ":{tag}")?;
        if self.nested {
            f.write_str("n")?;
        }
        Ok(())
    }
}
