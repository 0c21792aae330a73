use boxhop_core::{step, Buttons, Params, Rect, State};

fn main() {
    let params = Params::default();

    let world = [
        Rect {
            x: 100.0,
            y: 450.0,
            w: 200.0,
            h: 20.0,
        },
        Rect {
            x: 350.0,
            y: 350.0,
            w: 200.0,
            h: 20.0,
        },
    ];

    let mut state = State {
        x: 300.0,
        y: 500.0,
        size: 50.0,
        ..State::default()
    };

    let mut jumped: u32 = 0;
    let mut landed: u32 = 0;
    let mut bonked: u32 = 0;

    for frame in 0..180 {
        let mut buttons = Buttons::empty();
        if frame < 80 {
            buttons |= Buttons::LEFT;
        }
        if (100..160).contains(&frame) {
            buttons |= Buttons::RIGHT;
        }
        if frame == 10 {
            buttons |= Buttons::JUMP;
        }

        let ev = step(&params, &world, &mut state, buttons);
        jumped += ev.jumped as u32;
        landed += ev.landed as u32;
        bonked += ev.bonked as u32;
    }

    println!(
        "{{\"x\":{},\"y\":{},\"vy\":{},\"jumping\":{},\"jumped\":{},\"landed\":{},\"bonked\":{}}}",
        state.x, state.y, state.vy, state.jumping, jumped, landed, bonked
    );
}
