//! Packed middlegame/endgame score.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use ordo_core::MAX_PHASE;

/// Two `i16` values packed into one `i32`: middlegame high, endgame low.
///
/// The packing is additive, so sums and differences of scores are taken on
/// the raw `i32`. Extracting `mg` adds `0x8000` to undo the borrow a
/// negative `eg` leaves in the upper half.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Score(i32);

impl Score {
    pub const ZERO: Score = Score(0);

    #[inline]
    pub const fn new(mg: i16, eg: i16) -> Score {
        Score(((mg as i32) << 16).wrapping_add(eg as i32))
    }

    #[inline]
    pub const fn mg(self) -> i16 {
        (self.0.wrapping_add(0x8000) >> 16) as i16
    }

    #[inline]
    pub const fn eg(self) -> i16 {
        self.0 as i16
    }

    /// Blend into a single value: `phase == MAX_PHASE` is pure middlegame,
    /// `phase == 0` pure endgame.
    #[inline]
    pub const fn taper(self, phase: i32) -> i32 {
        let phase = if phase > MAX_PHASE { MAX_PHASE } else if phase < 0 { 0 } else { phase };
        (self.mg() as i32 * phase + self.eg() as i32 * (MAX_PHASE - phase)) / MAX_PHASE
    }
}

/// `S(mg, eg)` is shorthand for [`Score::new`].
#[allow(non_snake_case)]
#[inline]
pub const fn S(mg: i16, eg: i16) -> Score {
    Score::new(mg, eg)
}

impl Add for Score {
    type Output = Score;

    #[inline]
    fn add(self, rhs: Score) -> Score {
        Score(self.0 + rhs.0)
    }
}

impl AddAssign for Score {
    #[inline]
    fn add_assign(&mut self, rhs: Score) {
        self.0 += rhs.0;
    }
}

impl Sub for Score {
    type Output = Score;

    #[inline]
    fn sub(self, rhs: Score) -> Score {
        Score(self.0 - rhs.0)
    }
}

impl SubAssign for Score {
    #[inline]
    fn sub_assign(&mut self, rhs: Score) {
        self.0 -= rhs.0;
    }
}

impl Neg for Score {
    type Output = Score;

    #[inline]
    fn neg(self) -> Score {
        Score::new(-self.mg(), -self.eg())
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S({}, {})", self.mg(), self.eg())
    }
}

#[cfg(test)]
mod tests {
    use super::{S, Score};
    use ordo_core::MAX_PHASE;

    #[test]
    fn components_survive_mixed_signs() {
        let s = S(-100, 50);
        assert_eq!((s.mg(), s.eg()), (-100, 50));
        let s = S(100, -50);
        assert_eq!((s.mg(), s.eg()), (100, -50));
    }

    #[test]
    fn arithmetic_is_componentwise() {
        assert_eq!(S(900, 950) + S(100, 120), S(1000, 1070));
        assert_eq!(S(320, 310) - S(100, 120), S(220, 190));
        assert_eq!(-S(10, -20), S(-10, 20));
        let mut s = Score::ZERO;
        s += S(3, 4);
        s -= S(1, 1);
        assert_eq!(s, S(2, 3));
    }

    #[test]
    fn taper_endpoints_and_midpoint() {
        let s = S(300, 100);
        assert_eq!(s.taper(MAX_PHASE), 300);
        assert_eq!(s.taper(0), 100);
        assert_eq!(s.taper(MAX_PHASE / 2), 200);
    }

    #[test]
    fn taper_clamps_phase() {
        let s = S(300, 100);
        assert_eq!(s.taper(MAX_PHASE + 10), 300);
        assert_eq!(s.taper(-3), 100);
    }
}
