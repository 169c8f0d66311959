use anyhow::{Context, Result, bail};
use ordo_core::{Board, MoveList};
use ordo_engine::search::{MoveOrderer, MovePicker, TranspositionTable, see_capture};
use ordo_engine::PhaseTaper;
use tracing::info;

const USAGE: &str = "usage: ordo <fen> <uci-move>...";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let Some(fen) = args.next() else {
        bail!(USAGE);
    };
    let mut board: Board = fen.parse().with_context(|| format!("invalid FEN {fen:?}"))?;

    let mut moves = MoveList::new();
    for uci in args {
        let mv = board
            .parse_move(&uci)
            .with_context(|| format!("cannot play {uci} here"))?;
        moves.push(mv);
    }
    if moves.is_empty() {
        bail!(USAGE);
    }
    info!(moves = moves.len(), "ordering moves");

    let orderer: MoveOrderer = MoveOrderer::default();
    let tt = TranspositionTable::new(1);
    orderer.score_moves(&board, &tt, &mut moves, 0);

    let mut ranked = Vec::with_capacity(moves.len());
    let mut picker = MovePicker::new(&mut moves);
    while let Some(entry) = picker.pick_next() {
        ranked.push(entry);
    }
    for entry in ranked {
        if entry.mv.is_quiet() {
            println!("{:<6} {:>6}", entry.mv, entry.score);
        } else {
            let see = see_capture(&mut board, &PhaseTaper, entry.mv);
            println!("{:<6} {:>6}  see {see}", entry.mv, entry.score);
        }
    }
    Ok(())
}
