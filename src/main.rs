//! Flappy Orb entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{AddEventListenerOptions, Document, KeyboardEvent, MouseEvent, TouchEvent, Window};

    use flappy_orb::input::{self, InputEvent};
    use flappy_orb::platform::canvas::Canvas2d;
    use flappy_orb::platform::web;
    use flappy_orb::sim::Session;
    use flappy_orb::{Activation, GameError, GameLoop, LoopControl};

    /// Game instance plus the browser resources it draws to
    struct App {
        game: GameLoop,
        surface: Canvas2d,
        /// Handle of the requested animation frame, if one is queued
        pending_frame: Option<i32>,
    }

    impl App {
        fn frame(&mut self) -> LoopControl {
            self.pending_frame = None;
            let control = self.game.frame(&mut self.surface);
            if control == LoopControl::Halt {
                self.cancel_pending_frame();
            }
            control
        }

        fn cancel_pending_frame(&mut self) {
            if let Some(id) = self.pending_frame.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(id);
                }
            }
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.surface.set_size(width, height);
            self.game.resize(width, height);
        }
    }

    fn js_err(e: JsValue) -> GameError {
        GameError::Platform(format!("{:?}", e))
    }

    pub fn run() -> Result<(), GameError> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| GameError::Platform(format!("failed to init logger: {e}")))?;

        log::info!("Flappy Orb starting...");

        let window = web::window()?;
        let document = web::document(&window)?;
        let surface = Canvas2d::new(web::canvas(&document)?)?;

        let (width, height) = web::viewport_size(&window);
        surface.set_size(width, height);

        let tuning = web::load_tuning(&document);
        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            game: GameLoop::new(Session::new(seed, tuning, width, height)),
            surface,
            pending_frame: None,
        }));

        setup_input_handlers(&document, app.clone())?;
        setup_resize_handler(&window, app.clone())?;

        // First frame runs now; it schedules the rest
        game_loop(app);

        log::info!("Flappy Orb running!");
        Ok(())
    }

    /// Translate and apply an input event. Returns true if it was handled.
    fn handle_input(app: &Rc<RefCell<App>>, event: InputEvent<'_>) -> bool {
        let Some(command) = input::translate(event) else {
            return false;
        };
        let activation = input::dispatch(&mut app.borrow_mut().game, command);
        if activation == Some(Activation::Restarted) {
            game_loop(app.clone());
        }
        true
    }

    fn setup_input_handlers(document: &Document, app: Rc<RefCell<App>>) -> Result<(), GameError> {
        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if handle_input(&app, InputEvent::Key(&event.code())) {
                    event.prevent_default();
                }
            });
            document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                .map_err(js_err)?;
            closure.forget();
        }

        // Touch start; registered non-passive so preventDefault stops scrolling
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if handle_input(&app, InputEvent::TouchStart) {
                    event.prevent_default();
                }
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            document
                .add_event_listener_with_callback_and_add_event_listener_options(
                    "touchstart",
                    closure.as_ref().unchecked_ref(),
                    &options,
                )
                .map_err(js_err)?;
            closure.forget();
        }

        // Mouse
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if handle_input(&app, InputEvent::PointerDown) {
                    event.prevent_default();
                }
            });
            document
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
                .map_err(js_err)?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_resize_handler(window: &Window, app: Rc<RefCell<App>>) -> Result<(), GameError> {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (width, height) = web::viewport_size(&window);
            app.borrow_mut().resize(width, height);
        });
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let next = app.clone();
        let closure = Closure::once(move |_time: f64| {
            game_loop(next);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => app.borrow_mut().pending_frame = Some(id),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let control = app.borrow_mut().frame();
        if control == LoopControl::Continue {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        web_sys::console::error_1(&format!("Flappy Orb failed to start: {e}").into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::{SystemTime, UNIX_EPOCH};

    use flappy_orb::renderer::RecordingSurface;
    use flappy_orb::sim::Session;
    use flappy_orb::{GameError, GameLoop, LoopControl, Tuning};

    const WIDTH: u32 = 800;
    const HEIGHT: u32 = 600;
    const MAX_TICKS: u32 = 3000;

    /// Headless idle-mode run; prints the final session snapshot as JSON
    pub fn run() -> Result<(), GameError> {
        log::info!("Flappy Orb (native) starting...");
        log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

        let tuning = match std::env::args().nth(1) {
            Some(path) => {
                log::info!("Loading tuning from {}", path);
                Tuning::from_file(&path)?
            }
            None => Tuning::default(),
        };

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let mut game = GameLoop::new(Session::new(seed, tuning, WIDTH, HEIGHT));
        game.set_idle_mode(true);

        let mut surface = RecordingSurface::new();
        let mut frames = 0u32;
        let mut draw_calls = 0usize;
        while frames < MAX_TICKS {
            let control = game.frame(&mut surface);
            draw_calls += surface.drain().len();
            frames += 1;
            if control == LoopControl::Halt {
                break;
            }
        }

        let session = game.session();
        log::info!(
            "Ran {} frames ({} draw calls): score {}, phase {:?}",
            frames,
            draw_calls,
            session.score.value,
            session.phase
        );
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    if let Err(e) = native::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
