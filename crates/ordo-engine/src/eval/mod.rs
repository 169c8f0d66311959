//! Material values and the tapering collaborator.

pub mod material;
pub mod score;
pub mod taper;

pub use material::{PIECE_VALUE, piece_value};
pub use score::{S, Score};
pub use taper::{PhaseTaper, TaperedEval};
