mod app;
mod fsm;
mod game;
mod input;
mod menu;
mod render;

use log::error;
use winit::event_loop::{ControlFlow, EventLoop};

use crate::app::App;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    if let Err(err) = run() {
        error!("fatal: {err:#}");
        std::process::exit(-1);
    }
}

fn run() -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    if app.init_failed() {
        anyhow::bail!("window or surface creation failed");
    }
    Ok(())
}
