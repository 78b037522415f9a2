use anyhow::Result;
use clap::Parser;
use log::{error, info};
use std::time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::WindowId,
};

use scene_switcher::cli::Cli;
use scene_switcher::config::GameConfig;
use scene_switcher::core::input_adapter;
use scene_switcher::core::keys;
use scene_switcher::error::GameError;
use scene_switcher::game::Game;
use scene_switcher::renderer::GpuRenderer;
use scene_switcher::startup;
use scene_switcher::traits::{HostEvent, WindowContext};
use scene_switcher::window::Window;

// === Application ===

struct App {
    config: GameConfig,
    window: Option<Window>,
    game: Option<Game<GpuRenderer>>,
    startup_error: Option<GameError>,
    /// Earliest time the next redraw is worth requesting
    next_redraw: Instant,
}

impl App {
    fn new(config: GameConfig) -> Self {
        Self {
            config,
            window: None,
            game: None,
            startup_error: None,
            next_redraw: Instant::now(),
        }
    }

    fn exit(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(game) = &mut self.game {
            game.shutdown();
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match startup::start(event_loop, &self.config) {
            Ok((window, game)) => {
                self.window = Some(window);
                self.game = Some(game);
            }
            Err(err) => {
                error!("Failed to start: {err}");
                self.startup_error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.exit(event_loop),
            WindowEvent::RedrawRequested => {
                if let Some(game) = &mut self.game {
                    game.frame();
                    self.next_redraw =
                        Instant::now() + Duration::from_secs_f32(game.until_next_step());
                }
            }
            event => {
                let Some(host_event) = input_adapter::translate(&event) else {
                    return;
                };
                if matches!(&host_event, HostEvent::KeyDown(key) if key == keys::ESCAPE) {
                    self.exit(event_loop);
                    return;
                }
                if let Some(game) = &mut self.game {
                    game.handle_event(host_event);
                }
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };

        // Sleep until the next fixed step instead of spinning on redraws
        let now = Instant::now();
        if now >= self.next_redraw {
            window.request_redraw();
            self.next_redraw = now + Duration::from_secs_f32(self.config.interval());
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_redraw));
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    config.apply_cli(&cli);
    config.validate()?;

    let event_loop = EventLoop::new().map_err(GameError::from)?;
    let mut app = App::new(config);

    info!("Scene switcher - Controls: arrows/WASD move, Enter or 1/2 switch, Escape to quit");
    event_loop.run_app(&mut app).map_err(GameError::from)?;

    match app.startup_error {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
