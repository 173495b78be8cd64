//! Browser bridge. Holds the page's single session and exposes it to JS.
//!
//! The page calls `game_init()` once, wires its buttons and keys to the
//! command exports, and after each call polls `game_take_events()` to render
//! score, level, timer and game-over changes. `game_start_ticker()` drives the
//! countdown from a 1 s `setInterval`.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::config::GameConfig;
use crate::entity::Direction;
use crate::game::Game;

thread_local! {
    static SESSION: RefCell<Option<Game>> = const { RefCell::new(None) };
    static TICKER: RefCell<Option<Ticker>> = const { RefCell::new(None) };
}

struct Ticker {
    handle: i32,
    // Dropping the closure would invalidate the JS callback.
    _callback: Closure<dyn FnMut()>,
}

fn with_session<R>(f: impl FnOnce(&mut Game) -> R) -> Result<R, JsValue> {
    SESSION.with(|cell| {
        cell.borrow_mut()
            .as_mut()
            .map(f)
            .ok_or_else(|| JsValue::from_str("game not initialized; call game_init() first"))
    })
}

fn read_session<R: Default>(f: impl FnOnce(&Game) -> R) -> R {
    SESSION.with(|cell| cell.borrow().as_ref().map(f).unwrap_or_default())
}

/// Build (or rebuild) the session. `config_json` overrides the default arena and levels.
#[wasm_bindgen]
pub fn game_init(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        #[cfg(feature = "serde_json")]
        Some(json) => GameConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
        #[cfg(not(feature = "serde_json"))]
        Some(_) => return Err(JsValue::from_str("config JSON requires the serde_json feature")),
        None => GameConfig::default(),
    };
    let game = Game::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    SESSION.with(|cell| *cell.borrow_mut() = Some(game));
    log::info!("square-strike: session initialized");
    Ok(())
}

#[wasm_bindgen]
pub fn game_start() -> Result<(), JsValue> {
    with_session(Game::start_game)
}

#[wasm_bindgen]
pub fn game_toggle_pause() -> Result<(), JsValue> {
    with_session(Game::toggle_pause)
}

/// Accepts "up"/"down"/"left"/"right" or the matching `KeyboardEvent.key` names.
#[wasm_bindgen]
pub fn game_move(direction: &str) -> Result<bool, JsValue> {
    let dir = direction
        .parse::<Direction>()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    with_session(|g| g.move_player(dir))
}

#[wasm_bindgen]
pub fn game_tick() -> Result<(), JsValue> {
    with_session(Game::tick)
}

/// Repaint the player with a random preset colour; returns its CSS name.
#[wasm_bindgen]
pub fn game_recolor_player() -> Result<String, JsValue> {
    with_session(|g| g.recolor_player().css_name().to_string())
}

/// Drain pending notifications as a JSON array.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn game_take_events() -> Result<String, JsValue> {
    let events = with_session(Game::drain_events)?;
    serde_json::to_string(&events).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn game_score() -> u32 {
    read_session(Game::score)
}

#[wasm_bindgen]
pub fn game_level() -> u8 {
    read_session(Game::level)
}

#[wasm_bindgen]
pub fn game_goal() -> u32 {
    read_session(Game::goal)
}

#[wasm_bindgen]
pub fn game_time_left() -> u32 {
    read_session(Game::time_left)
}

#[wasm_bindgen]
pub fn game_is_paused() -> bool {
    read_session(Game::is_paused)
}

#[wasm_bindgen]
pub fn game_is_over() -> bool {
    read_session(Game::is_game_over)
}

#[wasm_bindgen]
pub fn game_status_line() -> String {
    read_session(Game::status_line)
}

/// End-of-run banner text; empty while the run is live.
#[wasm_bindgen]
pub fn game_outcome_message() -> String {
    read_session(|g| g.outcome().map(|o| o.message(g.score())).unwrap_or_default())
}

/// Player position as `[x, y]`.
#[wasm_bindgen]
pub fn game_player_position() -> Vec<f64> {
    read_session(|g| {
        let p = g.player().position;
        vec![p.x, p.y]
    })
}

/// Enemy position as `[x, y]`, empty when no enemy is on the field.
#[wasm_bindgen]
pub fn game_enemy_position() -> Vec<f64> {
    read_session(|g| g.enemy().map(|e| vec![e.position().x, e.position().y]).unwrap_or_default())
}

/// Call `game_tick` once per second until `game_stop_ticker`.
#[wasm_bindgen]
pub fn game_start_ticker() -> Result<(), JsValue> {
    game_stop_ticker();
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let callback = Closure::wrap(Box::new(|| {
        if let Err(err) = game_tick() {
            log::warn!("tick skipped: {:?}", err);
        }
    }) as Box<dyn FnMut()>);
    let handle = win.set_interval_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        1000,
    )?;
    TICKER.with(|cell| {
        *cell.borrow_mut() = Some(Ticker { handle, _callback: callback });
    });
    Ok(())
}

#[wasm_bindgen]
pub fn game_stop_ticker() {
    if let Some(ticker) = TICKER.with(|cell| cell.borrow_mut().take()) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(ticker.handle);
        }
    }
}
