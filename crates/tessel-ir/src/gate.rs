//! Gate name tables.

use serde::{Deserialize, Serialize};

/// Single-qubit gates, resets and measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SingleQubitGate {
    // Paulis
    /// Identity.
    I,
    X,
    Y,
    Z,

    // Resets and measurements
    /// Reset to |0⟩.
    R,
    /// Reset to |+⟩.
    RX,
    /// Reset to |i⟩.
    RY,
    /// Z-basis measurement.
    M,
    MX,
    MY,
    /// Measure then reset, Z basis.
    MR,
    MRX,
    MRY,

    // Cliffords
    /// Hadamard.
    H,
    /// Hadamard-like swapping Y and Z.
    HYz,
    /// Hadamard-like swapping X and Y.
    HXy,
    S,
    SqrtX,
    SqrtY,
    SDag,
    SqrtXDag,
    SqrtYDag,
    /// Axis cycle X→Y→Z.
    CXyz,
    /// Axis cycle Z→Y→X.
    CZyx,
}

impl SingleQubitGate {
    /// Every single-qubit gate, in table order.
    pub const ALL: [SingleQubitGate; 24] = [
        SingleQubitGate::I,
        SingleQubitGate::X,
        SingleQubitGate::Y,
        SingleQubitGate::Z,
        SingleQubitGate::R,
        SingleQubitGate::RX,
        SingleQubitGate::RY,
        SingleQubitGate::M,
        SingleQubitGate::MX,
        SingleQubitGate::MY,
        SingleQubitGate::MR,
        SingleQubitGate::MRX,
        SingleQubitGate::MRY,
        SingleQubitGate::H,
        SingleQubitGate::HYz,
        SingleQubitGate::HXy,
        SingleQubitGate::S,
        SingleQubitGate::SqrtX,
        SingleQubitGate::SqrtY,
        SingleQubitGate::SDag,
        SingleQubitGate::SqrtXDag,
        SingleQubitGate::SqrtYDag,
        SingleQubitGate::CXyz,
        SingleQubitGate::CZyx,
    ];

    /// Get the canonical name of this gate.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            SingleQubitGate::I => "I",
            SingleQubitGate::X => "X",
            SingleQubitGate::Y => "Y",
            SingleQubitGate::Z => "Z",
            SingleQubitGate::R => "R",
            SingleQubitGate::RX => "RX",
            SingleQubitGate::RY => "RY",
            SingleQubitGate::M => "M",
            SingleQubitGate::MX => "MX",
            SingleQubitGate::MY => "MY",
            SingleQubitGate::MR => "MR",
            SingleQubitGate::MRX => "MRX",
            SingleQubitGate::MRY => "MRY",
            SingleQubitGate::H => "H",
            SingleQubitGate::HYz => "H_YZ",
            SingleQubitGate::HXy => "H_XY",
            SingleQubitGate::S => "S",
            SingleQubitGate::SqrtX => "SQRT_X",
            SingleQubitGate::SqrtY => "SQRT_Y",
            SingleQubitGate::SDag => "S_DAG",
            SingleQubitGate::SqrtXDag => "SQRT_X_DAG",
            SingleQubitGate::SqrtYDag => "SQRT_Y_DAG",
            SingleQubitGate::CXyz => "C_XYZ",
            SingleQubitGate::CZyx => "C_ZYX",
        }
    }

    /// Look up a gate by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.name() == name)
    }

    /// Whether this gate produces a measurement result.
    pub fn is_measurement(self) -> bool {
        matches!(
            self,
            SingleQubitGate::M
                | SingleQubitGate::MX
                | SingleQubitGate::MY
                | SingleQubitGate::MR
                | SingleQubitGate::MRX
                | SingleQubitGate::MRY
        )
    }
}

/// Two-qubit gates.
///
/// The Pauli-controlled family `PCQ` is named by the control basis `P` and
/// the target basis `Q`; `CX` is `ZCX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TwoQubitGate {
    CX,
    CY,
    CZ,
    XCX,
    XCY,
    XCZ,
    YCX,
    YCY,
    YCZ,
    ISwap,
    ISwapDag,
    Swap,
}

impl TwoQubitGate {
    /// Every two-qubit gate, in table order.
    pub const ALL: [TwoQubitGate; 12] = [
        TwoQubitGate::CX,
        TwoQubitGate::CY,
        TwoQubitGate::CZ,
        TwoQubitGate::XCX,
        TwoQubitGate::XCY,
        TwoQubitGate::XCZ,
        TwoQubitGate::YCX,
        TwoQubitGate::YCY,
        TwoQubitGate::YCZ,
        TwoQubitGate::ISwap,
        TwoQubitGate::ISwapDag,
        TwoQubitGate::Swap,
    ];

    /// Get the canonical name of this gate.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            TwoQubitGate::CX => "CX",
            TwoQubitGate::CY => "CY",
            TwoQubitGate::CZ => "CZ",
            TwoQubitGate::XCX => "XCX",
            TwoQubitGate::XCY => "XCY",
            TwoQubitGate::XCZ => "XCZ",
            TwoQubitGate::YCX => "YCX",
            TwoQubitGate::YCY => "YCY",
            TwoQubitGate::YCZ => "YCZ",
            TwoQubitGate::ISwap => "ISWAP",
            TwoQubitGate::ISwapDag => "ISWAP_DAG",
            TwoQubitGate::Swap => "SWAP",
        }
    }

    /// Look up a gate by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_qubit_names_roundtrip() {
        for gate in SingleQubitGate::ALL {
            assert_eq!(SingleQubitGate::from_name(gate.name()), Some(gate));
        }
        assert_eq!(SingleQubitGate::from_name("CX"), None);
    }

    #[test]
    fn test_measurement_class() {
        let measuring: Vec<_> = SingleQubitGate::ALL
            .into_iter()
            .filter(|g| g.is_measurement())
            .map(SingleQubitGate::name)
            .collect();
        assert_eq!(measuring, vec!["M", "MX", "MY", "MR", "MRX", "MRY"]);
        assert!(!SingleQubitGate::R.is_measurement());
    }

    #[test]
    fn test_two_qubit_lookup() {
        assert_eq!(TwoQubitGate::from_name("ISWAP_DAG"), Some(TwoQubitGate::ISwapDag));
        assert_eq!(TwoQubitGate::from_name("cx"), None);
        assert_eq!(TwoQubitGate::ALL.len(), 12);
    }
}
