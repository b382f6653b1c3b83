use anyhow::{Context, Result};
use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};

use super::{RenderState, RenderTarget};

/// Draws `state` into the next swapchain image and presents it.
///
/// A lost or outdated surface is reconfigured and acquired once more; a
/// transient failure skips the frame.
pub fn present_once(gpu: &mut Gpu<'_>, state: &RenderState, window: &Window) -> Result<()> {
    let mut frame = match gpu.acquire_frame() {
        Ok(frame) => frame,
        Err(err) => match gpu.handle_surface_error(err) {
            SurfaceErrorAction::Reconfigured => gpu
                .acquire_frame()
                .context("failed to acquire a frame after reconfiguring the surface")?,
            SurfaceErrorAction::SkipFrame => {
                log::warn!("static frame skipped; the window stays blank");
                return Ok(());
            }
            SurfaceErrorAction::Fatal => anyhow::bail!("surface failed beyond recovery"),
        },
    };

    let size = gpu.size();
    let viewport = Viewport::full(size.width, size.height);

    // RenderTarget borrows frame.encoder; dropped before swap_buffers() takes frame.
    {
        let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
        state.draw(&mut target, viewport);
    }

    window.pre_present_notify();
    gpu.swap_buffers(frame);
    log::debug!("frame presented at {}x{}", size.width, size.height);

    Ok(())
}
