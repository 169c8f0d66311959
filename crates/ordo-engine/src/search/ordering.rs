//! Move scoring (hash move, killers, MVV-LVA, promotions, capped history)
//! and lazy best-first selection.

use ordo_core::{Move, MoveList, PieceKind, Position, ScoredMove};
use tracing::trace;

use crate::config::OrderingConfig;
use crate::eval::material::ORDINAL_VALUE;
use crate::search::heuristics::{HistoryTable, KillerTable};

const MVV_LVA_OFFSET: i32 = 6;
const MVV_LVA_ATTACKER_SCALE: i32 = 100;

const fn build_mvv_lva() -> [[i32; PieceKind::COUNT]; PieceKind::COUNT] {
    let mut table = [[0; PieceKind::COUNT]; PieceKind::COUNT];
    let mut victim = 0;
    while victim < PieceKind::COUNT {
        let mut attacker = 0;
        while attacker < PieceKind::COUNT {
            table[victim][attacker] =
                ORDINAL_VALUE[victim] + MVV_LVA_OFFSET - ORDINAL_VALUE[attacker] / MVV_LVA_ATTACKER_SCALE;
            attacker += 1;
        }
        victim += 1;
    }
    table
}

/// MVV-LVA scores indexed by `[victim][attacker]`.
///
/// `victim_value + 6 - attacker_value / 100` over the ordinal values
/// 100..600: the victim decides the band, the attacker breaks ties.
pub const MVV_LVA: [[i32; PieceKind::COUNT]; PieceKind::COUNT] = build_mvv_lva();

/// MVV-LVA score for `victim` taken by `attacker`.
#[inline]
pub fn mvv_lva(victim: PieceKind, attacker: PieceKind) -> i32 {
    MVV_LVA[victim.index()][attacker.index()]
}

/// MVV-LVA of `mv`, using the pieces on its source and destination.
fn capture_score<P: Position + ?Sized>(pos: &P, mv: Move) -> i32 {
    match (pos.piece_on(mv.dest()), pos.piece_on(mv.source())) {
        (Some(victim), Some(attacker)) => mvv_lva(victim, attacker),
        _ => {
            debug_assert!(false, "capture {mv} without victim or attacker");
            0
        }
    }
}

/// Add ordering bonuses to every move in `moves`.
///
/// Bonuses accumulate onto the existing scores, so call this once per
/// freshly generated list. Per move:
///
/// - hash move: `hash_move_bonus`
/// - killer at `(side, ply)`: `killer_bonus`
/// - capture with a victim on the destination: `capture_bonus` + MVV-LVA
/// - promotion: `promotion_bonus` (a promotion-capture also took the capture bonus)
/// - anything else, en passant included: history, capped at `killer_bonus`
pub fn score_moves<P, const N: usize>(
    pos: &P,
    moves: &mut MoveList,
    ply: usize,
    hash_move: Option<Move>,
    killers: &KillerTable<N>,
    history: &HistoryTable,
    config: &OrderingConfig,
) where
    P: Position + ?Sized,
{
    if moves.is_empty() {
        return;
    }
    let side = pos.side_to_move();

    for entry in moves.as_mut_slice() {
        let mv = entry.mv;
        let mut score = 0;

        if hash_move == Some(mv) {
            score += config.hash_move_bonus;
        }
        if killers.is_killer(side, ply, mv) {
            score += config.killer_bonus;
        }

        // En passant leaves the destination empty; it is ordered with the quiets.
        let takes_on_dest = mv.is_capture() && !mv.is_en_passant();
        if takes_on_dest {
            score += config.capture_bonus + capture_score(pos, mv);
        }
        if mv.is_promotion() {
            score += config.promotion_bonus;
        }
        if !takes_on_dest && !mv.is_promotion() {
            score += history.score(mv).min(config.killer_bonus);
        }

        entry.score += score;
    }

    trace!(ply, moves = moves.len(), ?hash_move, "scored moves");
}

/// Move the highest-scored entry of `moves[from..]` to `from`.
///
/// Ties go to the earliest entry. The entries it jumps over shift back one
/// place instead of being swapped, so the pending suffix stays in
/// generation order and repeated selection matches a stable sort by
/// descending score.
///
/// # Panics
///
/// Panics if `from >= moves.len()`.
pub fn select_next_best(moves: &mut MoveList, from: usize) {
    assert!(from < moves.len(), "select index {from} past {} moves", moves.len());
    let pending = &mut moves.as_mut_slice()[from..];

    let mut best = 0;
    for i in 1..pending.len() {
        if pending[i].score > pending[best].score {
            best = i;
        }
    }
    pending[..=best].rotate_right(1);
}

/// Incremental picker over a scored list.
///
/// Yields moves best-first, selecting one at a time so a cutoff stops the
/// work early. With a floor, stops at the first move scoring below it.
pub struct MovePicker<'a> {
    moves: &'a mut MoveList,
    cursor: usize,
    min_score: i32,
}

impl<'a> MovePicker<'a> {
    /// Picker over every move in `moves`.
    pub fn new(moves: &'a mut MoveList) -> Self {
        Self::with_floor(moves, i32::MIN)
    }

    /// Picker that stops once the best remaining score is below `min_score`.
    pub fn with_floor(moves: &'a mut MoveList, min_score: i32) -> Self {
        Self {
            moves,
            cursor: 0,
            min_score,
        }
    }

    /// Index of the next move to be yielded; everything before it is settled.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Select and return the best remaining move, or `None` once the list
    /// is exhausted or the best remaining score is below the floor.
    pub fn pick_next(&mut self) -> Option<ScoredMove> {
        if self.cursor >= self.moves.len() {
            return None;
        }
        select_next_best(self.moves, self.cursor);
        let next = self.moves[self.cursor];
        if next.score < self.min_score {
            return None;
        }
        self.cursor += 1;
        Some(next)
    }
}

impl Iterator for MovePicker<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        self.pick_next().map(|entry| entry.mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordo_core::{Board, Color, MoveFlag, Square};

    fn scored(list: &MoveList) -> Vec<(String, i32)> {
        list.iter().map(|sm| (sm.mv.to_string(), sm.score)).collect()
    }

    fn list_with_scores(scores: &[i32]) -> MoveList {
        let mut list = MoveList::new();
        for (i, &score) in scores.iter().enumerate() {
            let to = Square::from_index(i as u8 + 16).unwrap();
            list.push(Move::new(Square::A1, to, MoveFlag::Quiet));
            list[i].score = score;
        }
        list
    }

    #[test]
    fn mvv_lva_prefers_valuable_victims_and_cheap_attackers() {
        for victim in PieceKind::ALL {
            for pair in PieceKind::ALL.windows(2) {
                // cheaper attacker scores strictly higher
                assert!(mvv_lva(victim, pair[0]) > mvv_lva(victim, pair[1]));
            }
        }
        for attacker in PieceKind::ALL {
            for pair in PieceKind::ALL.windows(2) {
                assert!(mvv_lva(pair[1], attacker) > mvv_lva(pair[0], attacker));
            }
        }
    }

    #[test]
    fn mvv_lva_reference_values() {
        assert_eq!(mvv_lva(PieceKind::Queen, PieceKind::Pawn), 505);
        assert_eq!(mvv_lva(PieceKind::Pawn, PieceKind::Queen), 101);
        assert_eq!(mvv_lva(PieceKind::King, PieceKind::King), 600);
    }

    #[test]
    fn scoring_empty_list_is_a_no_op() {
        let board: Board = "4k3/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let mut list = MoveList::new();
        score_moves(
            &board,
            &mut list,
            0,
            None,
            &KillerTable::<1>::new(),
            &HistoryTable::new(),
            &OrderingConfig::default(),
        );
        assert!(list.is_empty());
    }

    #[test]
    fn promotion_capture_takes_both_bonuses() {
        let board: Board = "r3k3/1P6/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let config = OrderingConfig::default();
        let mut list: MoveList = ["b7a8q", "b7b8q"]
            .into_iter()
            .map(|uci| board.parse_move(uci).unwrap())
            .collect();
        score_moves(&board, &mut list, 0, None, &KillerTable::<1>::new(), &HistoryTable::new(), &config);

        let rook_by_pawn = mvv_lva(PieceKind::Rook, PieceKind::Pawn);
        assert_eq!(
            scored(&list),
            vec![
                ("b7a8q".to_string(), config.capture_bonus + rook_by_pawn + config.promotion_bonus),
                ("b7b8q".to_string(), config.promotion_bonus),
            ]
        );
    }

    #[test]
    fn history_is_capped_at_killer_bonus() {
        let board: Board = "4k3/8/8/8/8/8/8/4K1N1 w - - 0 1".parse().unwrap();
        let config = OrderingConfig::default();
        let hot = board.parse_move("g1f3").unwrap();
        let mild = board.parse_move("g1h3").unwrap();
        let mut history = HistoryTable::new();
        history.record(hot, 50);
        history.record(mild, 3);

        let mut list: MoveList = [hot, mild].into_iter().collect();
        score_moves(&board, &mut list, 0, None, &KillerTable::<1>::new(), &history, &config);
        assert_eq!(list[0].score, config.killer_bonus);
        assert_eq!(list[1].score, 9);
    }

    #[test]
    fn en_passant_is_scored_as_quiet() {
        let board: Board = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1".parse().unwrap();
        let ep = board.parse_move("e5d6").unwrap();
        let mut history = HistoryTable::new();
        history.record(ep, 2);
        let mut list: MoveList = [ep].into_iter().collect();
        score_moves(&board, &mut list, 0, None, &KillerTable::<1>::new(), &history, &OrderingConfig::default());
        assert_eq!(list[0].score, 4);
    }

    #[test]
    fn scoring_twice_doubles_bonuses() {
        let board: Board = "4k3/8/8/3n4/4P3/8/8/4K3 w - - 0 1".parse().unwrap();
        let mut list: MoveList = [board.parse_move("e4d5").unwrap()].into_iter().collect();
        let (killers, history, config) = (KillerTable::<1>::new(), HistoryTable::new(), OrderingConfig::default());
        score_moves(&board, &mut list, 0, None, &killers, &history, &config);
        let once = list[0].score;
        score_moves(&board, &mut list, 0, None, &killers, &history, &config);
        assert_eq!(list[0].score, 2 * once);
    }

    #[test]
    fn killer_lookup_uses_side_to_move() {
        let board: Board = "4k3/8/8/8/8/8/8/4K1N1 b - - 0 1".parse().unwrap();
        let mv = board.parse_move("e8d8").unwrap();
        let mut killers = KillerTable::<1>::new();
        killers.record(Color::White, 2, mv);
        let mut list: MoveList = [mv].into_iter().collect();
        score_moves(&board, &mut list, 2, None, &killers, &HistoryTable::new(), &OrderingConfig::default());
        assert_eq!(list[0].score, 0);

        killers.record(Color::Black, 2, mv);
        list.clear_scores();
        score_moves(&board, &mut list, 2, None, &killers, &HistoryTable::new(), &OrderingConfig::default());
        assert_eq!(list[0].score, OrderingConfig::default().killer_bonus);
    }

    #[test]
    fn select_next_best_promotes_maximum() {
        let mut list = list_with_scores(&[3, 9, 1, 9, 4]);
        select_next_best(&mut list, 0);
        assert_eq!(list[0].score, 9);
        // the first of the two nines wins
        assert_eq!(list[0].mv.dest(), Square::B3);
        assert_eq!(list.iter().map(|sm| sm.score).collect::<Vec<_>>(), vec![9, 3, 1, 9, 4]);
    }

    #[test]
    fn repeated_selection_matches_stable_sort() {
        let scores = [1, 1, 2, 7, 0, 7, 2, -5, 1, 7];
        let mut list = list_with_scores(&scores);
        let mut expected: Vec<ScoredMove> = list.iter().copied().collect();
        expected.sort_by(|a, b| b.score.cmp(&a.score));

        for i in 0..list.len() {
            select_next_best(&mut list, i);
        }
        assert_eq!(list.as_slice(), expected.as_slice());
    }

    #[test]
    #[should_panic(expected = "past")]
    fn select_past_end_panics() {
        let mut list = list_with_scores(&[1, 2]);
        select_next_best(&mut list, 2);
    }

    #[test]
    fn picker_yields_best_first_and_stops_at_floor() {
        let mut list = list_with_scores(&[5, 300, -2, 40]);
        let picked: Vec<i32> = {
            let mut picker = MovePicker::with_floor(&mut list, 0);
            std::iter::from_fn(|| picker.pick_next()).map(|sm| sm.score).collect()
        };
        assert_eq!(picked, vec![300, 40, 5]);

        let mut list = list_with_scores(&[5, 300, -2, 40]);
        assert_eq!(MovePicker::new(&mut list).count(), 4);
    }
}
