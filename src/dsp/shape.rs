//! Shape curve: convex/concave remapping of the unit interval.

/*
Waveform Shaping
================

The ramp-family waveforms (ramp up, ramp down, triangle) are built from a
linear sweep of the unit interval. The shape curve bends that sweep before
it is scaled to bipolar output, turning a straight ramp into an exponential-
feeling rise or a logarithmic-feeling one.

  shape = 0     identity, the ramp stays linear
  shape > 0     convex: x^(1 + 4*shape), slow start then fast finish
  shape < 0     concave: 1 - (1-x)^(1 - 4*shape), fast start then slow finish

The 4x scaling means the useful musical range of the shape parameter is
about [-1, +1], giving exponents from 1 up to 5 in either direction.

At the endpoints the curve is pinned for every shape value:

  shaped(0) == 0    and    shaped(1) == 1

so shaping never changes a waveform's peak levels, only the path between
them.

Callers must hand in x already clamped to [0, 1]. A negative base raised to
a fractional power is NaN territory, and the phase accumulator guarantees
its output lives in [0, 1), so the clamp is a caller-side precondition
rather than a branch paid on every sample.
*/

/// Remap `x` in `[0, 1]` through a convex (`shape > 0`) or concave
/// (`shape < 0`) curve. `shape == 0` is the identity.
///
/// Precondition: `x` must already be in `[0, 1]`.
#[inline]
pub fn shaped_ramp(x: f32, shape: f32) -> f32 {
    if shape == 0.0 {
        x
    } else if shape > 0.0 {
        x.powf(1.0 + shape * 4.0)
    } else {
        1.0 - (1.0 - x).powf(1.0 - shape * 4.0)
    }
}
