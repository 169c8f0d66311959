//! Phase-tapered scaling of material deltas.

use crate::eval::score::Score;

/// Scales a packed midgame/endgame delta to one value for the given phase.
///
/// Exchange evaluation converts every material swing through this trait, so
/// an engine with its own tapering can plug it in.
pub trait TaperedEval {
    fn scaled(&self, raw: Score, phase: i32) -> i32;
}

/// Linear blend between the midgame and endgame components.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseTaper;

impl TaperedEval for PhaseTaper {
    #[inline]
    fn scaled(&self, raw: Score, phase: i32) -> i32 {
        raw.taper(phase)
    }
}

impl<T: TaperedEval + ?Sized> TaperedEval for &T {
    #[inline]
    fn scaled(&self, raw: Score, phase: i32) -> i32 {
        (**self).scaled(raw, phase)
    }
}
