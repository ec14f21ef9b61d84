//! Kill diff between two board snapshots.

use crate::rules::{Color, Grid, PieceType};

fn black_counts(grid: &Grid) -> [usize; 6] {
    let mut counts = [0; 6];
    for piece in grid.iter().flatten().flatten() {
        if piece.color == Color::Black
            && let Some(i) = PieceType::ALL.iter().position(|&k| k == piece.kind)
        {
            counts[i] += 1;
        }
    }
    counts
}

/// Black pieces present in `before` but missing from `after`, one entry per
/// missing piece, weakest kind first.
///
/// Only counts are compared, so a black pawn that promoted shows up as a
/// lost pawn.
#[must_use]
pub fn list_kills(before: &Grid, after: &Grid) -> Vec<PieceType> {
    let before = black_counts(before);
    let after = black_counts(after);
    PieceType::ALL
        .iter()
        .zip(before.iter().zip(after.iter()))
        .flat_map(|(&kind, (&b, &a))| std::iter::repeat_n(kind, b.saturating_sub(a)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Position, RulesEngine};

    fn grid(fen: &str) -> Grid {
        Position::from_fen(fen).unwrap().board()
    }

    #[test]
    fn test_no_kills() {
        let g = grid("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        assert!(list_kills(&g, &g).is_empty());
    }

    #[test]
    fn test_counts_missing_black_pieces() {
        let before = grid("r3k3/pp6/8/8/8/8/8/4K3 w - - 0 1");
        let after = grid("4k3/1p6/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(list_kills(&before, &after), vec![PieceType::Pawn, PieceType::Rook]);
    }

    #[test]
    fn test_white_losses_ignored() {
        let before = grid("4k3/8/8/8/8/8/PPPP4/4K3 w - - 0 1");
        let after = grid("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert!(list_kills(&before, &after).is_empty());
    }

    #[test]
    fn test_gained_pieces_not_negative() {
        let before = grid("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        let after = grid("4k3/8/8/8/8/8/8/q3K3 w - - 0 1");
        assert!(list_kills(&before, &after).is_empty());
    }
}
