use std::sync::Arc;

use anyhow::{Context, Result};
use winit::window::Window;

use crate::device::{Gpu, GpuInit};
use crate::input::EventSource;
use crate::render::{present_once, RenderCtx, RenderState};
use crate::runloop::{LoopStats, MainLoop};
use crate::window::{native_handle, native_handle_kind, WindowConfig, WinitPlatform};

use super::DemoConfig;

/// Windowing subsystem contract: one window plus a non-blocking event queue.
pub trait Platform: EventSource {
    type Window;

    fn create_window(&mut self, config: &WindowConfig) -> Result<Self::Window>;
}

/// Startup failure, by phase.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// The windowing subsystem could not start; nothing else was attempted.
    #[error("couldn't initialize the windowing subsystem: {0:#}")]
    Init(anyhow::Error),

    #[error("couldn't create the window: {0:#}")]
    Window(anyhow::Error),

    #[error("graphics setup failed: {0:#}")]
    Graphics(anyhow::Error),
}

/// Runs the startup sequence and the event loop.
///
/// `init` brings up the windowing subsystem, `present` builds the graphics
/// context and render state for the window and presents the single frame.
/// Whatever `present` returns stays alive until the loop stops.
pub fn run_demo<P, I, G, R>(config: &DemoConfig, init: I, present: G) -> Result<LoopStats, DemoError>
where
    P: Platform,
    I: FnOnce() -> Result<P>,
    G: FnOnce(&P::Window, &GpuInit) -> Result<R>,
{
    let mut platform = init().map_err(DemoError::Init)?;
    log::info!("windowing subsystem initialized");

    let window = platform
        .create_window(&config.window)
        .map_err(DemoError::Window)?;

    // Dropping the frame resources would tear down the surface showing it.
    let _frame = present(&window, &config.gpu).map_err(DemoError::Graphics)?;

    let stats = MainLoop::new(config.run_loop.clone()).run(&mut platform);
    log::info!(
        "stopped after {} iterations, {} events",
        stats.iterations,
        stats.events
    );

    Ok(stats)
}

/// The graphics context and render state behind the presented frame.
///
/// Only held; dropping it tears down the surface.
pub struct StaticFrame {
    _gpu: Gpu<'static>,
    _state: RenderState,
}

impl StaticFrame {
    /// Binds a graphics context to `window`, builds the render resources and
    /// presents the one frame.
    pub fn present(window: &Arc<Window>, init: &GpuInit) -> Result<Self> {
        let handle = native_handle(window)?;
        log::info!("native window handle: {}", native_handle_kind(&handle));

        let size = window.inner_size();
        let mut gpu = pollster::block_on(Gpu::new(Arc::clone(window), size, init.clone()))
            .context("failed to create graphics context")?;

        let state = RenderState::new(&RenderCtx::for_gpu(&gpu))?;
        present_once(&mut gpu, &state, window)?;

        Ok(Self {
            _gpu: gpu,
            _state: state,
        })
    }
}

/// Runs the demo on winit + wgpu.
pub fn run(config: DemoConfig) -> Result<LoopStats, DemoError> {
    run_demo(&config, WinitPlatform::init, StaticFrame::present)
}
