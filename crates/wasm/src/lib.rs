use wasm_bindgen::prelude::*;
use boxhop_core::{Buttons, Params, Rect, State};

#[wasm_bindgen]
pub struct Core {
    params: Params,
    state: State,
    world: Vec<Rect>,
    scratch: Vec<Rect>,
}

#[wasm_bindgen]
impl Core {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Core {
        let params = Params::default();

        let mut state = State::default();
        state.x = 300.0;
        state.y = params.ground_y;
        state.size = 50.0;

        let world = vec![
            Rect { x: 100.0, y: 450.0, w: 200.0, h: 20.0 },
            Rect { x: 350.0, y: 350.0, w: 200.0, h: 20.0 },
        ];

        Core { params, state, world, scratch: Vec::new() }
    }

    pub fn reset(&mut self, x: f32, y: f32, size: f32) {
        self.state = State::default();
        self.state.x = x;
        self.state.y = y;
        self.state.size = size;
    }

    /// Packed rects: [x,y,w,h, x,y,w,h, ...]
    pub fn set_world(&mut self, rects: Box<[f32]>) {
        let a = rects.into_vec();
        self.world.clear();
        for c in a.chunks_exact(4) {
            self.world.push(Rect { x: c[0], y: c[1], w: c[2], h: c[3] });
        }
    }

    /// Minimal params update: expects JSON with matching field names.
    pub fn set_params_json(&mut self, json: &str) {
        if let Ok(v) = js_sys::JSON::parse(json) {
            let o = v.unchecked_into::<js_sys::Object>();
            macro_rules! setf {
                ($k:literal, $field:ident) => {
                    if let Ok(val) = js_sys::Reflect::get(&o, &JsValue::from_str($k)) {
                        if let Some(f) = val.as_f64() {
                            self.params.$field = f as f32;
                        }
                    }
                };
            }
            setf!("move_speed", move_speed);
            setf!("jump_velocity", jump_velocity);
            setf!("gravity", gravity);
            setf!("ground_y", ground_y);
            setf!("view_w", view_w);
            setf!("view_h", view_h);
        }
    }

    /// Step once and return state+events as a JS object.
    pub fn step(&mut self, input_bits: u8) -> JsValue {
        let buttons = Buttons::from_bits_truncate(input_bits);
        let ev = boxhop_core::step(&self.params, &self.world, &mut self.state, buttons);

        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"x".into(), &JsValue::from_f64(self.state.x as f64)).unwrap();
        js_sys::Reflect::set(&obj, &"y".into(), &JsValue::from_f64(self.state.y as f64)).unwrap();
        js_sys::Reflect::set(&obj, &"vy".into(), &JsValue::from_f64(self.state.vy as f64)).unwrap();
        js_sys::Reflect::set(&obj, &"jumping".into(), &JsValue::from_bool(self.state.jumping != 0)).unwrap();
        js_sys::Reflect::set(&obj, &"jumped".into(), &JsValue::from_bool(ev.jumped != 0)).unwrap();
        js_sys::Reflect::set(&obj, &"landed".into(), &JsValue::from_bool(ev.landed != 0)).unwrap();
        js_sys::Reflect::set(&obj, &"bonked".into(), &JsValue::from_bool(ev.bonked != 0)).unwrap();

        JsValue::from(obj)
    }

    /// The frame's draw rectangles, packed [x,y,w,h, ...] in paint order:
    /// ground bar, player, platforms. The host fills them on its canvas.
    pub fn draw_rects(&mut self) -> Box<[f32]> {
        boxhop_core::draw_list(&self.params, &self.world, &self.state, &mut self.scratch);

        let mut packed = Vec::with_capacity(self.scratch.len() * 4);
        for r in &self.scratch {
            packed.extend_from_slice(&[r.x, r.y, r.w, r.h]);
        }
        packed.into_boxed_slice()
    }
}
