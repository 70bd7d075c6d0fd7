use tracing::info;

/// One-way latch that holds the army back until enough supply is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivationGate {
    threshold: f32,
    open: bool,
}

impl ActivationGate {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            open: false,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Records the current army supply and returns whether the gate opened
    /// on this call. Once open it never closes.
    pub fn observe(&mut self, army_supply: f32) -> bool {
        if self.open || army_supply < self.threshold {
            return false;
        }
        self.open = true;
        info!(army_supply, threshold = self.threshold, "activation gate opened");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_at_threshold() {
        let mut gate = ActivationGate::new(6.0);
        assert!(!gate.observe(5.5));
        assert!(!gate.is_open());
        assert!(gate.observe(6.0));
        assert!(gate.is_open());
    }

    #[test]
    fn stays_open_after_losses() {
        let mut gate = ActivationGate::new(3.0);
        gate.observe(4.0);
        for supply in [2.0, 0.0, 1.0] {
            assert!(!gate.observe(supply));
            assert!(gate.is_open());
        }
    }
}
