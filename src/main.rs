use anyhow::Result;
use macroquad::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod board;
mod clock;
mod config;
mod game;
mod grid;
mod input;
mod render;
mod snake;

use crate::clock::FrameClock;
use crate::config::{Config, WINDOW_TITLE};
use crate::game::GameState;
use crate::input::DirectionKeys;

fn window_conf(config: &Config) -> Conf {
    let (width, height) = config.window_size();
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: width,
        window_height: height,
        window_resizable: false,
        ..Default::default()
    }
}

/// Input is latched every render frame; the game itself advances at the
/// configured rate.
async fn run(mut game: GameState) {
    let mut clock = FrameClock::new(game.config().frame_interval());
    let mut keys = DirectionKeys::default();

    loop {
        keys.poll();

        for _ in 0..clock.tick(get_frame_time() as f64) {
            game.step(keys.take());
        }

        render::draw(&game);
        next_frame().await;
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = Config::default_path();
    let config = Config::load(&path)?;
    info!(
        config = %path.display(),
        grid = ?(config.grid_width, config.grid_height),
        fps = config.frames_per_second,
        keep_score_on_restart = config.keep_score_on_restart,
        food_avoids_snake = config.food_avoids_snake,
        "starting snake"
    );

    let conf = window_conf(&config);
    let game = GameState::new(config)?;
    macroquad::Window::from_config(conf, run(game));
    Ok(())
}
