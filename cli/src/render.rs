use tictactoe_engine::board::Board;
use tictactoe_engine::types::{Cell, GRID_SIZE, Position, WinningLine};

/// Renders the grid with coordinate headers:
///
/// ```text
///     0   1   2
/// 0   X | O | .
///    ---+---+---
/// 1   . | X | .
///    ---+---+---
/// 2   . | . | O
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("    0   1   2\n");

    for row in 0..GRID_SIZE {
        let cells: Vec<String> = (0..GRID_SIZE)
            .map(|col| match board.get(Position::new(col, row)) {
                Cell::Empty => ".".to_string(),
                Cell::Marked(player) => player.to_string(),
            })
            .collect();

        out.push_str(&format!("{}   {}\n", row, cells.join(" | ")));
        if row + 1 < GRID_SIZE {
            out.push_str("   ---+---+---\n");
        }
    }

    out
}

pub fn describe_line(line: &WinningLine) -> String {
    let cells: Vec<String> = line
        .cells
        .iter()
        .map(|pos| format!("({}, {})", pos.col, pos.row))
        .collect();
    format!("{} across {}", line.winner, cells.join(", "))
}
