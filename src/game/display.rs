//! Text board
//!
//! White pieces print uppercase and Black lowercase; empty squares are `.`. Rank 8 is at the top.

use std::fmt::Write;

use chess_engine::{Board, Square};

const FILE_LABELS: &str = "  a b c d e f g h";

/// Render `board` as eight labelled ranks plus a file row
pub fn board_to_string(board: &Board) -> String {
    render(board, &[])
}

/// Same as [`board_to_string`] with `marks` shown as `*` where empty and `x` where occupied
pub fn board_with_marks(board: &Board, marks: &[Square]) -> String {
    render(board, marks)
}

fn render(board: &Board, marks: &[Square]) -> String {
    let mut out = String::with_capacity(180);
    for rank in (0..8).rev() {
        let _ = write!(out, "{}", rank + 1);
        for file in 0..8 {
            let marked = Square::new(file, rank).is_some_and(|square| marks.contains(&square));
            let symbol = match (board.piece_at_coords(file, rank), marked) {
                (Some(_), true) => 'x',
                (Some(piece), false) => piece.symbol(),
                (None, true) => '*',
                (None, false) => '.',
            };
            let _ = write!(out, " {}", symbol);
        }
        out.push('\n');
    }
    out.push_str(FILE_LABELS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position() {
        let text = board_to_string(&Board::standard());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8 r n b q k b n r");
        assert_eq!(lines[1], "7 p p p p p p p p");
        assert_eq!(lines[4], "4 . . . . . . . .");
        assert_eq!(lines[6], "2 P P P P P P P P");
        assert_eq!(lines[7], "1 R N B Q K B N R");
        assert_eq!(lines[8], FILE_LABELS);
    }

    #[test]
    fn test_marks() {
        let board = Board::standard();
        let e3 = Square::from_algebraic("e3").unwrap();
        let d7 = Square::from_algebraic("d7").unwrap();
        let text = board_with_marks(&board, &[e3, d7]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[5], "3 . . . . * . . .");
        assert_eq!(lines[1], "7 p p p x p p p p");
    }
}
