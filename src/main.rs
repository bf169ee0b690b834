use log::{info, warn};
use macroquad::prelude::*;

use snake_macroquad::audio::{Silent, SoundEffects, ToneSounds};
use snake_macroquad::config::{CONFIG_FILE, GameConfig};
use snake_macroquad::game::Game;
use snake_macroquad::input::{InputEvent, SwipeTracker, poll_events};
use snake_macroquad::render::Renderer;
use snake_macroquad::storage::ScoreStore;

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake - Macroquad".to_owned(),
        window_width: 800,
        window_height: 648,
        high_dpi: true,
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {}

#[cfg(not(target_arch = "wasm32"))]
fn open_store(config: &GameConfig) -> Box<dyn ScoreStore> {
    Box::new(snake_macroquad::storage::JsonSaveFile::open(&config.save_path))
}

#[cfg(target_arch = "wasm32")]
fn open_store(_config: &GameConfig) -> Box<dyn ScoreStore> {
    Box::new(snake_macroquad::storage::LocalStorageStore::open(
        snake_macroquad::storage::STORAGE_KEY,
    ))
}

async fn load_sounds() -> Box<dyn SoundEffects> {
    match ToneSounds::load(1.0).await {
        Ok(sounds) => Box::new(sounds),
        Err(e) => {
            warn!("Sound disabled: {:?}", e);
            Box::new(Silent::default())
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();

    let config = GameConfig::load_or_default(CONFIG_FILE);
    // Seeds the global RNG used for food placement
    macroquad::rand::srand((macroquad::miniquad::date::now() * 1000.0) as u64);

    let store = open_store(&config);
    let sounds = load_sounds().await;
    let mut game = match Game::new(config, store, sounds) {
        Ok(game) => game,
        Err(e) => {
            warn!("Cannot start: {}", e);
            return;
        }
    };

    let renderer = Renderer::new(game.config().cell_size);
    let mut swipe = SwipeTracker::new(game.config().swipe_min_distance);

    loop {
        for event in poll_events(&mut swipe) {
            if event == InputEvent::Quit {
                info!("Quit, best score {}", game.high_score());
                return;
            }
            game.handle_input(event);
        }

        game.update(get_time() * 1000.0);
        renderer.draw(&game.snapshot());

        next_frame().await;
    }
}
