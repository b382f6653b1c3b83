use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::window::{Window, WindowAttributes};

/// Window configuration.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    /// Client-area width in logical pixels.
    pub width: u32,
    /// Client-area height in logical pixels.
    pub height: u32,
    pub resizable: bool,
    /// Show the window as soon as it is created.
    pub visible: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "LightGT".to_string(),
            width: 1024,
            height: 768,
            resizable: true,
            visible: true,
        }
    }
}

impl WindowConfig {
    pub fn logical_size(&self) -> LogicalSize<f64> {
        LogicalSize::new(f64::from(self.width), f64::from(self.height))
    }

    pub fn attributes(&self) -> WindowAttributes {
        Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(self.logical_size())
            .with_resizable(self.resizable)
            .with_visible(self.visible)
    }
}

/// Top-left position that centers `window` on a monitor.
///
/// A window larger than the monitor is pinned to the monitor's origin.
pub fn centered_position(
    monitor_origin: PhysicalPosition<i32>,
    monitor_size: PhysicalSize<u32>,
    window: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    let dx = monitor_size.width.saturating_sub(window.width) / 2;
    let dy = monitor_size.height.saturating_sub(window.height) / 2;
    PhysicalPosition::new(
        monitor_origin.x.saturating_add(dx as i32),
        monitor_origin.y.saturating_add(dy as i32),
    )
}
