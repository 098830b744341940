//! Error overlay: maps a fault mechanism onto qubits, layers and detectors.

use rustc_hash::FxHashSet;
use tessel_ir::{Circuit, FaultMechanism, FaultSearch, Pauli, QubitId};
use tracing::{debug, warn};

/// What a large overlay glyph marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkKind {
    /// A physical Pauli flip from the fault mechanism.
    Flip(Pauli),
    /// A classically controlled gate acting on this qubit.
    Correction,
}

impl MarkKind {
    pub fn glyph(self) -> char {
        match self {
            MarkKind::Flip(pauli) => pauli.letter(),
            MarkKind::Correction => 'C',
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            MarkKind::Flip(_) => "red",
            MarkKind::Correction => "yellow",
        }
    }
}

/// A large glyph drawn over a qubit on one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorMark {
    pub qubit: QubitId,
    pub layer: usize,
    pub kind: MarkKind,
}

/// Overlay data gathered before the walk.
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    pub flips: Vec<ErrorMark>,
    pub highlighted_detectors: FxHashSet<u64>,
}

impl Overlay {
    /// Use the supplied mechanism, or ask `search` for one.
    ///
    /// A failed search is logged and yields an empty overlay.
    pub fn resolve(
        circuit: &Circuit,
        known: Option<&FaultMechanism>,
        search: Option<&dyn FaultSearch>,
    ) -> Self {
        if let Some(mechanism) = known {
            return Self::from_mechanism(mechanism);
        }
        let Some(search) = search else {
            return Self::default();
        };
        match search.shortest_error(circuit) {
            Ok(mechanism) => {
                debug!(errors = mechanism.len(), "fault search found a mechanism");
                Self::from_mechanism(&mechanism)
            }
            Err(e) => {
                warn!(error = %e, "fault search failed; rendering without error overlay");
                Self::default()
            }
        }
    }

    pub fn from_mechanism(mechanism: &FaultMechanism) -> Self {
        let mut overlay = Self::default();
        for error in &mechanism.errors {
            match error.locations.first() {
                Some(location) => {
                    for flip in &location.flipped {
                        debug!(
                            qubit = %flip.qubit,
                            layer = location.tick_offset,
                            basis = %flip.pauli,
                            "overlay flip"
                        );
                        overlay.flips.push(ErrorMark {
                            qubit: flip.qubit,
                            layer: location.tick_offset,
                            kind: MarkKind::Flip(flip.pauli),
                        });
                    }
                }
                None => warn!("fault mechanism error has no circuit location; not drawn"),
            }
            overlay.highlighted_detectors.extend(error.detectors());
        }
        overlay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_ir::{DemTarget, ErrorLocation, ExplainedError, PauliFlip, SearchError};

    fn mechanism() -> FaultMechanism {
        FaultMechanism {
            errors: vec![
                ExplainedError {
                    locations: vec![
                        ErrorLocation {
                            tick_offset: 2,
                            flipped: vec![
                                PauliFlip {
                                    qubit: QubitId(1),
                                    pauli: Pauli::X,
                                },
                                PauliFlip {
                                    qubit: QubitId(4),
                                    pauli: Pauli::Z,
                                },
                            ],
                        },
                        ErrorLocation {
                            tick_offset: 9,
                            flipped: vec![PauliFlip {
                                qubit: QubitId(7),
                                pauli: Pauli::Y,
                            }],
                        },
                    ],
                    dem_targets: vec![DemTarget::Detector(3), DemTarget::Observable(0)],
                },
                ExplainedError {
                    locations: vec![],
                    dem_targets: vec![DemTarget::Detector(5)],
                },
            ],
        }
    }

    struct FixedSearch(Option<FaultMechanism>);

    impl FaultSearch for FixedSearch {
        fn shortest_error(&self, _circuit: &Circuit) -> Result<FaultMechanism, SearchError> {
            self.0.clone().ok_or_else(|| "no graphlike error".into())
        }
    }

    #[test]
    fn test_only_first_location_is_drawn() {
        let overlay = Overlay::from_mechanism(&mechanism());
        assert_eq!(
            overlay.flips,
            vec![
                ErrorMark {
                    qubit: QubitId(1),
                    layer: 2,
                    kind: MarkKind::Flip(Pauli::X)
                },
                ErrorMark {
                    qubit: QubitId(4),
                    layer: 2,
                    kind: MarkKind::Flip(Pauli::Z)
                },
            ]
        );
        let mut detectors: Vec<u64> = overlay.highlighted_detectors.into_iter().collect();
        detectors.sort_unstable();
        assert_eq!(detectors, vec![3, 5]);
    }

    #[test]
    fn test_known_mechanism_wins_over_search() {
        let search = FixedSearch(None);
        let overlay = Overlay::resolve(&Circuit::new(), Some(&mechanism()), Some(&search));
        assert_eq!(overlay.flips.len(), 2);
    }

    #[test]
    fn test_search_result_is_used() {
        let search = FixedSearch(Some(mechanism()));
        let overlay = Overlay::resolve(&Circuit::new(), None, Some(&search));
        assert!(overlay.highlighted_detectors.contains(&3));
    }

    #[test]
    fn test_failed_search_is_not_fatal() {
        let search = FixedSearch(None);
        let overlay = Overlay::resolve(&Circuit::new(), None, Some(&search));
        assert!(overlay.flips.is_empty());
        assert!(overlay.highlighted_detectors.is_empty());
        assert!(Overlay::resolve(&Circuit::new(), None, None).flips.is_empty());
    }

    #[test]
    fn test_mark_glyphs() {
        assert_eq!(MarkKind::Flip(Pauli::Y).glyph(), 'Y');
        assert_eq!(MarkKind::Correction.glyph(), 'C');
        assert_eq!(MarkKind::Correction.color(), "yellow");
    }
}
