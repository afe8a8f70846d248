//! JS bridge: lets a hand-rolled canvas page load replays and pull render
//! commands as JSON. Navigation state (the replay cursor) lives on this
//! side; the page owns only the viewport transform it passes per frame.

use std::sync::Mutex;

use hexplay_core::model::Replay;
use hexplay_core::{parser, scene};
use hexplay_protocol::{ViewTransform, Viewport};
use wasm_bindgen::prelude::*;

static REPLAYS: Mutex<Vec<Replay>> = Mutex::new(Vec::new());

fn store() -> std::sync::MutexGuard<'static, Vec<Replay>> {
    REPLAYS.lock().unwrap_or_else(|e| e.into_inner())
}

fn with_replay<T>(
    handle: usize,
    f: impl FnOnce(&mut Replay) -> T,
) -> Result<T, JsError> {
    let mut replays = store();
    let replay = replays
        .get_mut(handle)
        .ok_or_else(|| JsError::new("invalid replay handle"))?;
    Ok(f(replay))
}

/// Parse a replay from bytes (a JSON array of snapshots). Returns a handle
/// for later calls. A parse failure allocates nothing, so any replay the
/// page already holds stays valid.
#[wasm_bindgen]
pub fn load_replay(data: &[u8]) -> Result<usize, JsError> {
    let replay = parser::parse_replay(data).map_err(|e| JsError::new(&e.to_string()))?;
    let mut replays = store();
    let handle = replays.len();
    replays.push(replay);
    Ok(handle)
}

#[wasm_bindgen]
pub fn snapshot_count(handle: usize) -> Result<usize, JsError> {
    with_replay(handle, |r| r.len())
}

#[wasm_bindgen]
pub fn current_index(handle: usize) -> Result<usize, JsError> {
    with_replay(handle, |r| r.position())
}

/// Step forward (clamped). Returns the new index.
#[wasm_bindgen]
pub fn next(handle: usize) -> Result<usize, JsError> {
    with_replay(handle, |r| {
        r.next();
        r.position()
    })
}

/// Step backward (clamped). Returns the new index.
#[wasm_bindgen]
pub fn previous(handle: usize) -> Result<usize, JsError> {
    with_replay(handle, |r| {
        r.previous();
        r.position()
    })
}

#[wasm_bindgen]
pub fn at_start(handle: usize) -> Result<bool, JsError> {
    with_replay(handle, |r| r.at_start())
}

#[wasm_bindgen]
pub fn at_end(handle: usize) -> Result<bool, JsError> {
    with_replay(handle, |r| r.at_end())
}

/// Render the current snapshot under the given transform, returning the
/// command list as JSON.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn render_snapshot(
    handle: usize,
    offset_x: f64,
    offset_y: f64,
    scale: f64,
    width: f64,
    height: f64,
    dpr: f64,
) -> Result<String, JsError> {
    let commands = with_replay(handle, |r| {
        let transform = ViewTransform {
            offset_x,
            offset_y,
            scale,
        };
        let viewport = Viewport { width, height, dpr };
        scene::render_scene(r.current(), &transform, &viewport)
    })?;
    serde_json::to_string(&commands).map_err(|e| JsError::new(&e.to_string()))
}

/// The status readout for the current snapshot.
#[wasm_bindgen]
pub fn status_text(handle: usize) -> Result<String, JsError> {
    with_replay(handle, |r| {
        scene::status_line(r.current(), r.position(), r.len())
    })
}

/// Per-player rows for the host page's table, as JSON.
#[wasm_bindgen]
pub fn player_rows(handle: usize) -> Result<String, JsError> {
    let players = with_replay(handle, |r| r.current().players.clone())?;
    serde_json::to_string(&players).map_err(|e| JsError::new(&e.to_string()))
}
