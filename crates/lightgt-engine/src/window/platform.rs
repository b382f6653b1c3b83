use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use raw_window_handle::{HasWindowHandle, RawWindowHandle};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::core::Platform;
use crate::input::{translate_window_event, Event, EventSource};

use super::config::{centered_position, WindowConfig};

/// Upper bound on zero-timeout pumps spent waiting for `resumed`.
const WINDOW_CREATE_PUMPS: usize = 64;

/// Windowing subsystem backed by a pumped winit event loop.
///
/// winit normally owns the thread through `run_app`; here the loop is pumped
/// with a zero timeout instead, which gives a poll-style queue the main loop
/// can drain without blocking. Pumping is available on desktop targets only.
pub struct WinitPlatform {
    event_loop: EventLoop<()>,
    pump: PumpHandler,
}

/// Receives winit callbacks during a pump and buffers them.
#[derive(Default)]
struct PumpHandler {
    pending_window: Option<WindowConfig>,
    window: Option<Arc<Window>>,
    create_error: Option<String>,
    queue: VecDeque<Event>,
}

impl WinitPlatform {
    /// Initializes the windowing subsystem.
    pub fn init() -> Result<Self> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        log::debug!("winit event loop created");

        Ok(Self {
            event_loop,
            pump: PumpHandler::default(),
        })
    }

    fn pump_events(&mut self, timeout: Option<Duration>) -> PumpStatus {
        self.event_loop.pump_app_events(timeout, &mut self.pump)
    }
}

impl Platform for WinitPlatform {
    type Window = Arc<Window>;

    /// Creates the single application window.
    ///
    /// winit only allows window creation from inside a callback, so the request
    /// is parked and the loop is pumped until `resumed` has serviced it.
    fn create_window(&mut self, config: &WindowConfig) -> Result<Arc<Window>> {
        anyhow::ensure!(self.pump.window.is_none(), "a window has already been created");
        self.pump.pending_window = Some(config.clone());

        for _ in 0..WINDOW_CREATE_PUMPS {
            if let PumpStatus::Exit(code) = self.pump_events(Some(Duration::ZERO)) {
                anyhow::bail!("event loop exited with code {code} before the window was created");
            }
            if let Some(err) = self.pump.create_error.take() {
                anyhow::bail!("failed to create window: {err}");
            }
            if let Some(window) = &self.pump.window {
                return Ok(Arc::clone(window));
            }
        }

        anyhow::bail!("window was not created after {WINDOW_CREATE_PUMPS} event pumps")
    }
}

impl EventSource for WinitPlatform {
    /// Pops a buffered event, pumping the OS queue once when the buffer is empty.
    fn poll_event(&mut self) -> Option<Event> {
        if self.pump.queue.is_empty() {
            if let PumpStatus::Exit(code) = self.pump_events(Some(Duration::ZERO)) {
                log::debug!("event loop exited with code {code}");
                self.pump.queue.push_back(Event::Quit);
            }
        }
        self.pump.queue.pop_front()
    }
}

impl ApplicationHandler for PumpHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(config) = self.pending_window.take() else {
            return;
        };

        let mut attrs = config.attributes();
        if let Some(monitor) = event_loop.primary_monitor() {
            let size = config.logical_size().to_physical::<u32>(monitor.scale_factor());
            attrs = attrs.with_position(centered_position(monitor.position(), monitor.size(), size));
        }

        match event_loop.create_window(attrs) {
            Ok(window) => {
                log::info!(
                    "window {:?} created: {:?} {}x{}",
                    window.id(),
                    config.title,
                    config.width,
                    config.height
                );
                self.window = Some(Arc::new(window));
            }
            Err(e) => self.create_error = Some(e.to_string()),
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.queue.push_back(translate_window_event(&event));
    }
}

/// Returns the OS-native handle of `window`.
pub fn native_handle(window: &Window) -> Result<RawWindowHandle> {
    let handle = window
        .window_handle()
        .context("window has no native handle")?;
    Ok(handle.as_raw())
}

/// Short name of the windowing system behind a native handle.
pub fn native_handle_kind(handle: &RawWindowHandle) -> &'static str {
    match handle {
        RawWindowHandle::Win32(_) => "win32",
        RawWindowHandle::WinRt(_) => "winrt",
        RawWindowHandle::AppKit(_) => "appkit",
        RawWindowHandle::UiKit(_) => "uikit",
        RawWindowHandle::Xlib(_) => "xlib",
        RawWindowHandle::Xcb(_) => "xcb",
        RawWindowHandle::Wayland(_) => "wayland",
        RawWindowHandle::AndroidNdk(_) => "android",
        RawWindowHandle::Web(_) => "web",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raw_window_handle::{XcbWindowHandle, XlibWindowHandle};
    use std::num::NonZeroU32;

    #[test]
    fn native_handle_kind_names_x11_variants() {
        let xlib = RawWindowHandle::Xlib(XlibWindowHandle::new(7));
        assert_eq!(native_handle_kind(&xlib), "xlib");

        let xcb = RawWindowHandle::Xcb(XcbWindowHandle::new(NonZeroU32::new(7).unwrap()));
        assert_eq!(native_handle_kind(&xcb), "xcb");
    }
}
