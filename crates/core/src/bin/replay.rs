use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use boxhop_core::{step, Buttons, Params, Rect, State};

fn number(obj: &Value, key: &str, default: Option<f32>) -> f32 {
    match obj.get(key) {
        Some(v) => v
            .as_f64()
            .unwrap_or_else(|| panic!("invalid number for key {key}")) as f32,
        None => default.unwrap_or_else(|| panic!("missing key: {key}")),
    }
}

fn integer(obj: &Value, key: &str, default: Option<i64>) -> i64 {
    match obj.get(key) {
        Some(v) => v
            .as_i64()
            .unwrap_or_else(|| panic!("invalid integer for key {key}")),
        None => default.unwrap_or_else(|| panic!("missing key: {key}")),
    }
}

fn parse_params(doc: &Value) -> Params {
    let defaults = Params::default();
    let p = doc.get("params").cloned().unwrap_or(Value::Null);
    Params {
        move_speed: number(&p, "move_speed", Some(defaults.move_speed)),
        jump_velocity: number(&p, "jump_velocity", Some(defaults.jump_velocity)),
        gravity: number(&p, "gravity", Some(defaults.gravity)),
        ground_y: number(&p, "ground_y", Some(defaults.ground_y)),
        view_w: number(&p, "view_w", Some(defaults.view_w)),
        view_h: number(&p, "view_h", Some(defaults.view_h)),
    }
}

fn parse_world(doc: &Value) -> Vec<Rect> {
    let arr = doc
        .get("world")
        .and_then(Value::as_array)
        .expect("missing key: world");
    arr.iter()
        .map(|obj| Rect {
            x: number(obj, "x", None),
            y: number(obj, "y", None),
            w: number(obj, "w", None),
            h: number(obj, "h", None),
        })
        .collect()
}

fn parse_state(doc: &Value) -> State {
    let s = doc.get("initial_state").expect("missing key: initial_state");
    State {
        x: number(s, "x", None),
        y: number(s, "y", None),
        vy: number(s, "vy", Some(0.0)),
        size: number(s, "size", None),
        jumping: integer(s, "jumping", Some(0)) as u8,
    }
}

fn parse_inputs(doc: &Value) -> Vec<u8> {
    let arr = doc
        .get("inputs")
        .and_then(Value::as_array)
        .expect("missing key: inputs");
    arr.iter()
        .map(|v| v.as_u64().expect("invalid input bits") as u8)
        .collect()
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .expect("usage: cargo run -p boxhop_core --bin replay -- <replay.json>");
    let raw = fs::read_to_string(path).expect("failed to read replay json");
    let doc: Value = serde_json::from_str(&raw).expect("failed to parse replay json");

    let params = parse_params(&doc);
    let world = parse_world(&doc);
    let mut state = parse_state(&doc);
    let inputs = parse_inputs(&doc);

    println!("frame,x,y,vy,jumping,jumped,landed,bonked");
    for (frame, bits) in inputs.iter().enumerate() {
        let buttons = Buttons::from_bits_truncate(*bits);
        let ev = step(&params, &world, &mut state, buttons);
        println!(
            "{},{},{},{},{},{},{},{}",
            frame, state.x, state.y, state.vy, state.jumping, ev.jumped, ev.landed, ev.bonked
        );
    }
}
