/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// The mock device keeps every descriptor it is asked to build, so tests can
/// inspect exactly what a backend would have received.

use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::graphics_device::{
    check_frame_buffer_compatibility, AttachmentDescription, Config, Extent2D, Format,
    FrameBuffer, FrameBufferAttachment, GraphicsDevice, RenderPass, RenderPassCreateInfo,
    SampleCount, SubpassDependency, SubpassDescription, TextureView,
};

// ============================================================================
// Mock TextureView
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct MockTextureView {
    pub format: Format,
    pub samples: SampleCount,
    pub extent: Extent2D,
}

impl MockTextureView {
    pub fn new(format: Format, samples: SampleCount, width: u32, height: u32) -> Self {
        Self { format, samples, extent: Extent2D::new(width, height) }
    }

    /// View matching `description`, `width` x `height` pixels
    pub fn matching(description: &AttachmentDescription, width: u32, height: u32) -> Self {
        Self::new(description.format, description.samples, width, height)
    }
}

impl TextureView for MockTextureView {
    fn format(&self) -> Format {
        self.format
    }

    fn samples(&self) -> SampleCount {
        self.samples
    }

    fn extent(&self) -> Extent2D {
        self.extent
    }
}

// ============================================================================
// Mock FrameBuffer
// ============================================================================

pub struct MockFrameBuffer {
    pub dimensions: Extent2D,
    pub render_pass: Arc<dyn RenderPass>,
    pub attachments: Vec<FrameBufferAttachment>,
}

impl FrameBuffer for MockFrameBuffer {
    fn dimensions(&self) -> Extent2D {
        self.dimensions
    }

    fn render_pass(&self) -> &Arc<dyn RenderPass> {
        &self.render_pass
    }

    fn attachments(&self) -> &[FrameBufferAttachment] {
        &self.attachments
    }
}

// ============================================================================
// Mock RenderPass
// ============================================================================

#[derive(Debug)]
pub struct MockRenderPass {
    pub info: RenderPassCreateInfo,
}

impl MockRenderPass {
    pub fn new(info: RenderPassCreateInfo) -> Self {
        Self { info }
    }
}

impl RenderPass for MockRenderPass {
    fn attachments(&self) -> &[AttachmentDescription] {
        &self.info.attachments
    }

    fn subpasses(&self) -> &[SubpassDescription] {
        &self.info.subpasses
    }

    fn dependencies(&self) -> &[SubpassDependency] {
        &self.info.dependencies
    }

    fn create_frame_buffer(
        self: Arc<Self>,
        dimensions: Extent2D,
        attaches: Vec<FrameBufferAttachment>,
    ) -> Result<Arc<dyn FrameBuffer>> {
        check_frame_buffer_compatibility(&self.info.attachments, dimensions, &attaches)?;

        Ok(Arc::new(MockFrameBuffer {
            dimensions,
            render_pass: self,
            attachments: attaches,
        }))
    }
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

/// Mock graphics device
///
/// Records every `RenderPassCreateInfo` passed to `create_render_pass`.
pub struct MockGraphicsDevice {
    pub config: Config,
    pub created_render_passes: Mutex<Vec<RenderPassCreateInfo>>,
}

impl MockGraphicsDevice {
    /// Mock device with validation enabled
    pub fn new() -> Self {
        Self::with_validation(true)
    }

    pub fn with_validation(enable_validation: bool) -> Self {
        Self {
            config: Config { enable_validation, ..Config::default() },
            created_render_passes: Mutex::new(Vec::new()),
        }
    }

    /// Number of render passes created so far
    pub fn render_pass_count(&self) -> usize {
        self.created_render_passes.lock().map(|list| list.len()).unwrap_or(0)
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn config(&self) -> &Config {
        &self.config
    }

    fn create_render_pass(&self, info: RenderPassCreateInfo) -> Result<Arc<dyn RenderPass>> {
        if let Ok(mut list) = self.created_render_passes.lock() {
            list.push(info.clone());
        }
        Ok(Arc::new(MockRenderPass::new(info)))
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
