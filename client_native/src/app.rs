//! winit application driver: window, surface, and the frame loop.
//!
//! One frame per `RedrawRequested`: sample input, update the active screen,
//! rasterize into the softbuffer backbuffer, present.

use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Instant;

use anyhow::anyhow;
use log::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use game_core::{FrameInput, Params};

use crate::fsm::{Screen, ScreenAction, ScreenFsm};
use crate::game::LocalGame;
use crate::input::InputState;
use crate::menu::{MenuChoice, MenuState};
use crate::render::{self, Frame};

pub const WINDOW_TITLE: &str = "JLPong by @rvnztolentino";

struct Gfx {
    window: Rc<Window>,
    surface: softbuffer::Surface<Rc<Window>, Rc<Window>>,
    _context: softbuffer::Context<Rc<Window>>,
}

impl Gfx {
    fn new(event_loop: &ActiveEventLoop) -> anyhow::Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(
                Params::ARENA_WIDTH as f64,
                Params::ARENA_HEIGHT as f64,
            ))
            .with_resizable(false);
        let window = Rc::new(event_loop.create_window(attrs)?);

        let context = softbuffer::Context::new(window.clone())
            .map_err(|err| anyhow!("create graphics context: {err}"))?;
        let mut surface = softbuffer::Surface::new(&context, window.clone())
            .map_err(|err| anyhow!("create surface: {err}"))?;

        let size = window.inner_size();
        if let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) {
            surface
                .resize(w, h)
                .map_err(|err| anyhow!("size surface: {err}"))?;
        }

        Ok(Self {
            window,
            surface,
            _context: context,
        })
    }
}

pub struct App {
    gfx: Option<Gfx>,
    input: InputState,
    fsm: ScreenFsm,
    menu: MenuState,
    game: LocalGame,
    last_frame: Instant,
    init_failed: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            gfx: None,
            input: InputState::new(),
            fsm: ScreenFsm::new(),
            menu: MenuState::new(),
            game: LocalGame::new(rand::random()),
            last_frame: Instant::now(),
            init_failed: false,
        }
    }

    pub fn init_failed(&self) -> bool {
        self.init_failed
    }

    fn update_menu(&mut self, event_loop: &ActiveEventLoop) {
        if self.input.just_pressed(KeyCode::ArrowUp) {
            self.menu.move_up();
        }
        if self.input.just_pressed(KeyCode::ArrowDown) {
            self.menu.move_down();
        }
        if self.input.just_pressed(KeyCode::Enter) {
            match self.menu.choice() {
                MenuChoice::Start => {
                    self.game.init_match();
                    let (_pos, vel) = self.game.ball();
                    info!("game start, serving with vx={:.0}", vel.x);
                    self.fsm.transition(ScreenAction::StartGame);
                }
                MenuChoice::Exit => {
                    info!("exit selected");
                    event_loop.exit();
                }
            }
        }
    }

    fn update_gameplay(&mut self, dt: f32) {
        if self.input.just_pressed(KeyCode::Escape) {
            info!("back to menu");
            self.fsm.transition(ScreenAction::LeaveGame);
            return;
        }

        let frame_input = FrameInput {
            left_dir: self.input.axis(KeyCode::KeyW, KeyCode::KeyS),
            right_dir: self.input.axis(KeyCode::ArrowUp, KeyCode::ArrowDown),
            reset: self.input.just_pressed(KeyCode::Space),
        };
        self.game.step_frame(&frame_input, dt);

        if self.game.events.scores_reset {
            let (_pos, vel) = self.game.ball();
            info!("scores reset, serving with vx={:.0}", vel.x);
        }
        if self.game.events.left_scored || self.game.events.right_scored {
            info!("score: {} - {}", self.game.score.left, self.game.score.right);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        match self.fsm.state() {
            Screen::Menu => self.update_menu(event_loop),
            Screen::Playing => self.update_gameplay(dt),
        }
        self.input.end_frame();

        let Some(gfx) = self.gfx.as_mut() else {
            return;
        };
        let size = gfx.window.inner_size();
        let (width, height) = (size.width as usize, size.height as usize);
        if width == 0 || height == 0 {
            return;
        }

        let mut buffer = match gfx.surface.buffer_mut() {
            Ok(buffer) => buffer,
            Err(err) => {
                warn!("backbuffer unavailable: {err}");
                return;
            }
        };
        let mut frame = Frame {
            data: &mut buffer[..],
            width,
            height,
        };
        match self.fsm.state() {
            Screen::Menu => render::draw_menu(&mut frame, &self.menu),
            Screen::Playing => render::draw_gameplay(&mut frame, &self.game),
        }
        if let Err(err) = buffer.present() {
            warn!("present failed: {err}");
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }
        match Gfx::new(event_loop) {
            Ok(gfx) => {
                info!(
                    "window created: {}x{}",
                    Params::ARENA_WIDTH,
                    Params::ARENA_HEIGHT
                );
                self.gfx = Some(gfx);
            }
            Err(err) => {
                error!("window setup failed: {err:#}");
                self.init_failed = true;
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let own_id = match &self.gfx {
            Some(gfx) => gfx.window.id(),
            None => return,
        };
        if window_id != own_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                info!("window closed");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(gfx) = self.gfx.as_mut() {
                    if let (Some(w), Some(h)) =
                        (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                    {
                        if let Err(err) = gfx.surface.resize(w, h) {
                            warn!("surface resize failed: {err}");
                        }
                    }
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if !event.repeat {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        self.input.on_key(code, event.state.is_pressed());
                    }
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gfx) = &self.gfx {
            gfx.window.request_redraw();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
