use crate::game::Game;
use crate::types::{Move, PieceId, Rank, Side, Square};

/// Step directions for dark men, toward row 0.
const DARK_MAN_DIRS: [(isize, isize); 2] = [(-1, -1), (-1, 1)];

/// Step directions for light men, toward the last row.
const LIGHT_MAN_DIRS: [(isize, isize); 2] = [(1, -1), (1, 1)];

/// Kings step on every diagonal.
const KING_DIRS: [(isize, isize); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

/// Returns the candidate single-step directions for a piece of the given
/// side and rank.
pub const fn directions(side: Side, rank: Rank) -> &'static [(isize, isize)] {
    match (rank, side) {
        (Rank::King, _) => &KING_DIRS,
        (Rank::Man, Side::Dark) => &DARK_MAN_DIRS,
        (Rank::Man, Side::Light) => &LIGHT_MAN_DIRS,
    }
}

/// Computes the full set of legal move sequences for a single piece.
///
/// Each direction is probed once: an empty adjacent cell yields a quiet
/// single step, while an enemy neighbor with an empty cell beyond it starts
/// the capture chain search. The chain search runs at most once per piece
/// and covers all of its directions, so no chain is enumerated twice. If any
/// capture exists, every quiet move is discarded afterwards: a piece that
/// can jump must jump.
///
/// A dead handle yields no moves.
pub fn piece_legal_moves(game: &Game, id: PieceId) -> Vec<Move> {
    let piece = match game.piece(id) {
        Some(piece) => piece,
        None => return Vec::new(),
    };
    let dims = game.dims();

    let mut moves = Vec::new();
    let mut has_jump = false;
    for &(dr, dc) in directions(piece.side, piece.rank) {
        let adjacent = match piece.square.offset(dr, dc, dims) {
            Some(square) => square,
            None => continue,
        };
        match game.side_at(adjacent) {
            None => moves.push(Move::single(adjacent)),
            Some(side) if side != piece.side => {
                let jumpable = adjacent
                    .offset(dr, dc, dims)
                    .map_or(false, |landing| game.side_at(landing).is_none());
                if jumpable && !has_jump {
                    has_jump = true;
                    for chain in jump_chains(game, piece.side, piece.rank, piece.square, &[]) {
                        moves.push(Move::new(chain));
                    }
                }
            }
            Some(_) => {}
        }
    }

    if has_jump {
        moves.retain(|mv| mv.is_jump_from(piece.square));
    }
    moves
}

/// Depth-first enumeration of the maximal capture chains playable from
/// `from`.
///
/// The search never touches the board. The mover's position is the `from`
/// argument and the enemies consumed on the current branch are carried in
/// `captured`, so sibling branches still see every enemy in place and a
/// piece can never jump the same enemy twice in one chain. Landing squares
/// are checked against the live board, which still shows the mover on its
/// origin cell; an empty landing may be revisited by different branches.
/// The rank is fixed for the whole enumeration: promotion only applies once
/// a move commits.
fn jump_chains(
    game: &Game,
    side: Side,
    rank: Rank,
    from: Square,
    captured: &[PieceId],
) -> Vec<Vec<Square>> {
    let dims = game.dims();
    let mut chains = Vec::new();

    for &(dr, dc) in directions(side, rank) {
        let adjacent = match from.offset(dr, dc, dims) {
            Some(square) => square,
            None => continue,
        };
        let enemy = match game.board().occupant(adjacent) {
            Some(id) => id,
            None => continue,
        };
        let is_enemy = game.piece(enemy).map_or(false, |piece| piece.side != side);
        if !is_enemy || captured.contains(&enemy) {
            continue;
        }
        let landing = match adjacent.offset(dr, dc, dims) {
            Some(square) => square,
            None => continue,
        };
        if game.board().occupant(landing).is_some() {
            continue;
        }

        let mut consumed = captured.to_vec();
        consumed.push(enemy);
        let continuations = jump_chains(game, side, rank, landing, &consumed);
        if continuations.is_empty() {
            chains.push(vec![landing]);
        } else {
            for mut continuation in continuations {
                continuation.insert(0, landing);
                chains.push(continuation);
            }
        }
    }
    chains
}

/// Collects every piece of `side` with at least one legal move, pairing each
/// with its move list, then applies the forced-capture rule across the whole
/// side: if any piece anywhere on the list can jump, every non-capture move
/// is dropped and pieces left with nothing disappear from the list. A quiet
/// move of one piece becomes illegal the moment another piece must jump.
pub fn player_legal_moves(game: &Game, side: Side) -> Vec<(PieceId, Vec<Move>)> {
    let mut all: Vec<(PieceId, Square, Vec<Move>)> = Vec::new();
    for (id, piece) in game.pieces(side) {
        let moves = piece_legal_moves(game, id);
        if !moves.is_empty() {
            all.push((id, piece.square, moves));
        }
    }

    let any_jump = all
        .iter()
        .any(|(_, origin, moves)| moves.iter().any(|mv| mv.is_jump_from(*origin)));
    if any_jump {
        for (_, origin, moves) in &mut all {
            moves.retain(|mv| mv.is_jump_from(*origin));
        }
        all.retain(|(_, _, moves)| !moves.is_empty());
    }

    all.into_iter().map(|(id, _, moves)| (id, moves)).collect()
}
