use common::games::snake::{Cell, Direction, GridBounds, SnakeBody};

fn head_glyph(direction: Direction) -> char {
    match direction {
        Direction::Up => '^',
        Direction::Down => 'v',
        Direction::Left => '<',
        Direction::Right => '>',
    }
}

/// Text picture of the board, top row first.
pub fn render_board(bounds: &GridBounds, body: &SnakeBody, food: Option<Cell>) -> String {
    let half = bounds.half_extent();
    let border = format!("+{}+", "-".repeat(bounds.side()));

    let mut lines = Vec::with_capacity(bounds.side() + 2);
    lines.push(border.clone());

    for y in (-half..=half).rev() {
        let row: String = (-half..=half)
            .map(|x| {
                let cell = Cell::new(x, y);
                if cell == body.head() {
                    head_glyph(body.direction())
                } else if body.segments().iter().any(|s| s.cell == cell) {
                    'o'
                } else if food == Some(cell) {
                    '*'
                } else {
                    '.'
                }
            })
            .collect();
        lines.push(format!("|{}|", row));
    }

    lines.push(border);
    lines.join("\n")
}
