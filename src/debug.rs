use crate::state::CarState;
#[cfg(feature = "debug")]
use serde_json::json;

#[cfg(feature = "debug")]
thread_local!(
    static DEBUG_FRAME: std::cell::RefCell<Vec<serde_json::Value>> = Default::default();
);

/// Records a state expanded by the search.
#[allow(unused)]
pub fn debug_expansion(state: &CarState) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "x": state.pos.x,
            "y": state.pos.y,
            "vx": state.vel.x,
            "vy": state.vel.y,
            "steps": state.steps,
        }))
    })
}

/// Takes the states recorded since the last call as a JSON array.
#[cfg(feature = "debug")]
pub fn take_debug_frame() -> serde_json::Value {
    json!(DEBUG_FRAME.with(|frame| frame.take()))
}
