use boxhop_core::{Buttons, Events, Params, Rect, State};

#[no_mangle]
pub extern "C" fn core_default_params(out: *mut Params) {
    unsafe { *out = Params::default(); }
}

#[no_mangle]
pub extern "C" fn core_init_state(out: *mut State, x: f32, y: f32, size: f32) {
    let mut s = State::default();
    s.x = x;
    s.y = y;
    s.size = size;
    s.jumping = 0;
    unsafe { *out = s; }
}

#[no_mangle]
pub extern "C" fn core_step(
    params: *const Params,
    world_rects: *const Rect,
    world_len: usize,
    state: *mut State,
    input_bits: u8,
) -> Events {
    let p = unsafe { &*params };
    let s = unsafe { &mut *state };
    let world = unsafe { std::slice::from_raw_parts(world_rects, world_len) };
    let buttons = Buttons::from_bits_truncate(input_bits);

    boxhop_core::step(p, world, s, buttons)
}

/// Writes at most `cap` draw rectangles into `out_rects` and returns the
/// full count the frame needs (ground bar + player + platforms).
#[no_mangle]
pub extern "C" fn core_draw_list(
    params: *const Params,
    world_rects: *const Rect,
    world_len: usize,
    state: *const State,
    out_rects: *mut Rect,
    cap: usize,
) -> usize {
    let p = unsafe { &*params };
    let s = unsafe { &*state };
    let world = unsafe { std::slice::from_raw_parts(world_rects, world_len) };

    let mut rects = Vec::new();
    boxhop_core::draw_list(p, world, s, &mut rects);

    let n = rects.len().min(cap);
    let dst = unsafe { std::slice::from_raw_parts_mut(out_rects, n) };
    dst.copy_from_slice(&rects[..n]);
    rects.len()
}
