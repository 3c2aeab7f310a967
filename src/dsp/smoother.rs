//! One-pole exponential output smoother.

/*
One-Pole Smoothing
==================

The square and random-hold waveforms step instantly between values, and a
step in a control signal becomes a click or zipper noise in whatever it
modulates. The smoother is a first-order low-pass filter applied to the
engine's output:

    value = target + (1 - coefficient) * (value - target)

  coefficient = 1.0    transparent, value == target every sample,
                       bit-exactly (the residue term is scaled by zero)
  coefficient near 0   heavy smoothing, value crawls toward the target
  coefficient = 0.0    frozen, the output holds its last value

For a constant target the value converges exponentially and never
overshoots, which is exactly the behavior you want on a control line.

The filter memory deliberately survives phase resets and parameter
changes. Clearing it on reset would itself produce a step at the output,
reintroducing the click the smoother exists to remove.

Hosts set smoothing as an "amount" in [0, 1] where 0 means none and 1
means maximal; internally that is stored as coefficient = 1 - amount.
*/

#[derive(Debug, Clone)]
pub struct OnePoleSmoother {
    value: f32,
    coefficient: f32,
}

impl OnePoleSmoother {
    /// New smoother with transparent coefficient (1.0) and zeroed memory.
    pub fn new() -> Self {
        Self {
            value: 0.0,
            coefficient: 1.0,
        }
    }

    /// Set the smoothing amount in `[0, 1]` (clamped). 0 disables
    /// smoothing, 1 is maximal. Stored internally as `1 - amount`.
    pub fn set_amount(&mut self, amount: f32) {
        self.coefficient = 1.0 - amount.clamp(0.0, 1.0);
    }

    /// The internal filter coefficient (1.0 means transparent).
    #[inline]
    pub fn coefficient(&self) -> f32 {
        self.coefficient
    }

    /// The current filter memory.
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Pull the memory one step toward `target` and return it.
    ///
    /// Written as `target + (1 - c) * (value - target)` rather than the
    /// textbook `value + c * (target - value)`: algebraically the same
    /// filter, but at coefficient 1.0 the residue term is multiplied by
    /// an exact 0.0, so transparency is bit-exact instead of off by a
    /// rounding ulp whenever the memory is nonzero.
    #[inline]
    pub fn next(&mut self, target: f32) -> f32 {
        self.value = target + (1.0 - self.coefficient) * (self.value - target);
        self.value
    }
}

impl Default for OnePoleSmoother {
    fn default() -> Self {
        Self::new()
    }
}
