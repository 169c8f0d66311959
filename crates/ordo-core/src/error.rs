//! Error types for the reference board's text parsers.

/// Errors from parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// Fewer than the two mandatory fields (placement and side to move).
    #[error("expected at least 2 FEN fields, found {found}")]
    MissingFields {
        found: usize,
    },
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based FEN rank index (0 = rank 8).
        rank_index: usize,
        length: usize,
    },
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        character: char,
    },
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        found: String,
    },
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        character: char,
    },
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        found: String,
    },
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        color: &'static str,
        count: usize,
    },
}

/// Errors from resolving a UCI move string against a position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    #[error("malformed UCI move: \"{uci}\"")]
    Malformed {
        uci: String,
    },
    #[error("no piece of the side to move on {square}")]
    EmptyOrigin {
        square: String,
    },
    #[error("destination {square} holds a friendly piece")]
    OwnPieceCaptured {
        square: String,
    },
    #[error("invalid promotion in \"{uci}\"")]
    InvalidPromotion {
        uci: String,
    },
}
