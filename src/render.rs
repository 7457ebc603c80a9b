use macroquad::prelude::*;

use crate::board::Tile;
use crate::game::GameState;

const EMPTY_COLOR: Color = BLACK;
const FOOD_COLOR: Color = RED;
const SNAKE_COLOR: Color = GREEN;
const SCORE_COLOR: Color = LIGHTGRAY;
const SCORE_FONT_SIZE: f32 = 20.0;

/// Draws one rectangle per board cell, one per segment, then the score.
pub fn draw(game: &GameState) {
    let cell_size = game.config().cell_size as f32;

    clear_background(EMPTY_COLOR);

    for (cell, tile) in game.board().tiles() {
        let color = match tile {
            Tile::Empty => EMPTY_COLOR,
            Tile::Food => FOOD_COLOR,
        };
        fill(cell.to_rect(cell_size), color);
    }

    for cell in game.snake().cells() {
        fill(cell.to_rect(cell_size), SNAKE_COLOR);
    }

    // draw_text positions the baseline, not the top edge.
    draw_text(
        &format!("Score: {}", game.score()),
        10.0,
        10.0 + SCORE_FONT_SIZE,
        SCORE_FONT_SIZE,
        SCORE_COLOR,
    );
}

fn fill(r: Rect, color: Color) {
    draw_rectangle(r.x, r.y, r.w, r.h, color);
}
