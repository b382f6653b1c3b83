use crate::device::GpuInit;
use crate::runloop::LoopConfig;
use crate::window::WindowConfig;

/// Everything the demo can be configured with.
#[derive(Debug, Clone, Default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub gpu: GpuInit,
    pub run_loop: LoopConfig,
}
