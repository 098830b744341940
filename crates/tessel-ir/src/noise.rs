//! Declared noise channels.
//!
//! Noise instructions carry no drawing of their own. The viewer only notes
//! where they occur, so this module is a name table plus the short code shown
//! next to the affected qubit.

use serde::{Deserialize, Serialize};

/// A stochastic error instruction inserted by a noise model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoiseChannel {
    /// Bit flip with probability `p`.
    XError,
    /// Y flip with probability `p`.
    YError,
    /// Phase flip with probability `p`.
    ZError,
    /// Correlated Pauli-product error.
    CorrelatedError,
    /// Correlated error that fires only if the previous one did not.
    ElseCorrelatedError,
    /// Single-qubit depolarizing channel.
    Depolarize1,
    /// Two-qubit depolarizing channel.
    Depolarize2,
}

impl NoiseChannel {
    pub const ALL: [NoiseChannel; 7] = [
        NoiseChannel::XError,
        NoiseChannel::YError,
        NoiseChannel::ZError,
        NoiseChannel::CorrelatedError,
        NoiseChannel::ElseCorrelatedError,
        NoiseChannel::Depolarize1,
        NoiseChannel::Depolarize2,
    ];

    /// Get the canonical instruction name.
    pub fn name(self) -> &'static str {
        match self {
            NoiseChannel::XError => "X_ERROR",
            NoiseChannel::YError => "Y_ERROR",
            NoiseChannel::ZError => "Z_ERROR",
            NoiseChannel::CorrelatedError => "E",
            NoiseChannel::ElseCorrelatedError => "ELSE_CORRELATED_ERROR",
            NoiseChannel::Depolarize1 => "DEPOLARIZE1",
            NoiseChannel::Depolarize2 => "DEPOLARIZE2",
        }
    }

    /// Look up a channel by instruction name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.name() == name)
    }

    /// Short annotation drawn beside each affected qubit.
    ///
    /// Codes are per channel (`X`, `Y`, `Z`, `E`, `D1`, `D2`) rather than a
    /// single generic `E` marker, so the note names the channel that fired.
    /// Both correlated-error forms share `E`.
    pub fn short_code(self) -> &'static str {
        match self {
            NoiseChannel::XError => "X",
            NoiseChannel::YError => "Y",
            NoiseChannel::ZError => "Z",
            NoiseChannel::CorrelatedError | NoiseChannel::ElseCorrelatedError => "E",
            NoiseChannel::Depolarize1 => "D1",
            NoiseChannel::Depolarize2 => "D2",
        }
    }
}

impl std::fmt::Display for NoiseChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
