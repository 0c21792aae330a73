#![allow(clippy::many_single_char_names)]

/// Assumed host tick rate. All tunables are pixels per frame at this cadence.
pub const HZ: f32 = 60.0;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[inline]
pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Params {
    // Horizontal
    pub move_speed: f32,

    // Vertical
    pub jump_velocity: f32,
    pub gravity: f32,

    // World
    pub ground_y: f32,
    pub view_w: f32,
    pub view_h: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            move_speed: 2.0,

            jump_velocity: 10.0,
            gravity: 0.5,

            ground_y: 500.0,
            view_w: 800.0,
            view_h: 800.0,
        }
    }
}

bitflags::bitflags! {
    #[repr(transparent)]
    pub struct Buttons: u8 {
        const LEFT  = 1 << 0;
        const RIGHT = 1 << 1;
        const JUMP  = 1 << 2;
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default)]
pub struct State {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
    pub size: f32,

    /// 1 only while airborne because of a jump. Walking off a ledge does
    /// NOT set it; only a top landing or the ground clamp clears it.
    pub jumping: u8,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default)]
pub struct Events {
    pub jumped: u8,
    pub landed: u8,
    pub bonked: u8,
}

/// One fixed-cadence step. Host calls this exactly once per frame.
/// Infallible; the only state it touches is `s`.
///
/// Order is load-bearing: input, jump trigger, move-then-accelerate
/// integration, platform resolution in list order, ground clamp last.
/// The top/bottom collision branches use the current post-gravity `vy`
/// as a positional tolerance instead of last frame's box; that
/// approximation is kept verbatim, quirks included.
pub fn step(params: &Params, world: &[Rect], s: &mut State, buttons: Buttons) -> Events {
    let mut ev = Events::default();

    let left = buttons.contains(Buttons::LEFT);
    let right = buttons.contains(Buttons::RIGHT);
    let jump = buttons.contains(Buttons::JUMP);

    // Downward speed carried into this frame; event reporting only.
    let entry_vy = s.vy;

    // Both directions may apply in one frame (net zero).
    if left {
        s.x -= params.move_speed;
    }
    if right {
        s.x += params.move_speed;
    }

    // Level-triggered, debounced by the airborne flag alone. Holding or
    // re-pressing jump while the flag is set does nothing.
    if jump && s.jumping == 0 {
        s.vy = -params.jump_velocity;
        s.jumping = 1;
        ev.jumped = 1;
    }

    // Move first, accelerate second.
    s.y += s.vy;
    s.vy += params.gravity;

    // Every platform is checked, in list order, with no short-circuit; a
    // later platform may override an earlier one's resolution. One branch
    // fires per overlapping platform, in this priority order.
    for p in world {
        let player = Rect {
            x: s.x,
            y: s.y,
            w: s.size,
            h: s.size,
        };
        if !rects_intersect(&player, p) {
            continue;
        }

        if s.y + s.size <= p.y + s.vy {
            // Landed on top.
            s.y = p.y - s.size;
            if entry_vy > params.gravity {
                ev.landed = 1;
            }
            s.vy = 0.0;
            s.jumping = 0;
        } else if s.y >= p.y + p.h - s.vy {
            // Bumped the underside. Jump flag stays as-is.
            s.y = p.y + p.h;
            s.vy = 0.0;
            ev.bonked = 1;
        } else if s.x < p.x {
            s.x = p.x - s.size;
        } else if s.x + s.size > p.x + p.w {
            s.x = p.x + p.w;
        }
    }

    // Ground clamp runs unconditionally after platform resolution and
    // overrides it when it fires.
    if s.y >= params.ground_y {
        if entry_vy > params.gravity {
            ev.landed = 1;
        }
        s.y = params.ground_y;
        s.vy = 0.0;
        s.jumping = 0;
    }

    ev
}

/// Fills `out` with the frame's rectangles in paint order: ground bar,
/// player square, then each platform. Colour is the host's business.
pub fn draw_list(params: &Params, world: &[Rect], s: &State, out: &mut Vec<Rect>) {
    out.clear();
    out.push(Rect {
        x: 0.0,
        y: params.ground_y + 50.0,
        w: params.view_w,
        h: 15.0,
    });
    out.push(Rect {
        x: s.x,
        y: s.y,
        w: s.size,
        h: s.size,
    });
    out.extend_from_slice(world);
}
