//! Supported vendor frameworks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A quantum programming framework a circuit can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    /// IBM Qiskit.
    Qiskit,
    /// Google Cirq.
    Cirq,
    /// Amazon Braket SDK.
    Braket,
}

impl Vendor {
    /// All vendors, in a fixed order.
    pub const ALL: [Vendor; 3] = [Vendor::Qiskit, Vendor::Cirq, Vendor::Braket];

    /// Lowercase package name.
    pub fn as_str(self) -> &'static str {
        match self {
            Vendor::Qiskit => "qiskit",
            Vendor::Cirq => "cirq",
            Vendor::Braket => "braket",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known vendor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vendor '{0}'")]
pub struct UnknownVendor(pub String);

impl FromStr for Vendor {
    type Err = UnknownVendor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "qiskit" => Ok(Vendor::Qiskit),
            "cirq" => Ok(Vendor::Cirq),
            "braket" | "amazon_braket" => Ok(Vendor::Braket),
            _ => Err(UnknownVendor(s.to_string())),
        }
    }
}
