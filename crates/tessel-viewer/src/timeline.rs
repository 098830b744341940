//! The global measurement timeline.

/// Every measurement of the run, in program order, with the layer that owns it.
///
/// Lookbacks are resolved against the timeline as it stands when the
/// referring operation is processed: `-1` is the most recent measurement
/// emitted so far, not the last one of the run.
#[derive(Debug, Clone, Default)]
pub struct MeasurementTimeline {
    owners: Vec<usize>,
}

impl MeasurementTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a measurement on `layer`, returning its global index.
    pub fn push(&mut self, layer: usize) -> usize {
        self.owners.push(layer);
        self.owners.len() - 1
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Resolve a negative lookback to a global measurement index.
    ///
    /// Returns `None` when the lookback reaches before the first measurement.
    pub fn resolve(&self, offset: i32) -> Option<usize> {
        let index = self.owners.len() as i64 + i64::from(offset);
        if offset >= 0 || index < 0 {
            return None;
        }
        usize::try_from(index).ok()
    }

    /// The layer owning a measurement.
    pub fn layer_of(&self, index: usize) -> Option<usize> {
        self.owners.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_against_current_state() {
        let mut timeline = MeasurementTimeline::new();
        assert_eq!(timeline.push(0), 0);
        assert_eq!(timeline.push(0), 1);
        assert_eq!(timeline.resolve(-1), Some(1));

        assert_eq!(timeline.push(2), 2);
        assert_eq!(timeline.resolve(-1), Some(2));
        assert_eq!(timeline.resolve(-3), Some(0));
        assert_eq!(timeline.layer_of(2), Some(2));
    }

    #[test]
    fn test_dangling_lookback() {
        let mut timeline = MeasurementTimeline::new();
        assert!(timeline.is_empty());
        assert_eq!(timeline.resolve(-1), None);
        timeline.push(0);
        assert_eq!(timeline.resolve(-2), None);
        assert_eq!(timeline.resolve(0), None);
        assert_eq!(timeline.layer_of(5), None);
    }
}
