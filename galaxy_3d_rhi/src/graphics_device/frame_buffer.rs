/// FrameBuffer trait - binds image views to the attachments of a render pass
///
/// A frame buffer is created from a render pass and is only usable with
/// render passes whose attachments it matches (same count, formats and
/// sample counts). It holds an `Arc` to its render pass, so the render pass
/// outlives it.

use std::sync::Arc;
use crate::error::Result;
use crate::graphics_device::{
    AttachmentDescription, Format, RenderPass, SampleCount, ATTACHMENT_UNUSED,
};

/// 2D extent in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent2D {
    pub width: u32,
    pub height: u32,
}

impl Extent2D {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if `other` fits inside this extent
    pub fn covers(&self, other: Extent2D) -> bool {
        self.width >= other.width && self.height >= other.height
    }
}

/// 3D extent in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent3D {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl Extent3D {
    pub fn new(width: u32, height: u32, depth: u32) -> Self {
        Self { width, height, depth }
    }
}

/// Texture view trait
///
/// A single-mip 2D view of a backend image, as bound to a frame buffer slot.
pub trait TextureView: Send + Sync {
    /// Pixel format of the view
    fn format(&self) -> Format;

    /// Number of samples of the underlying image
    fn samples(&self) -> SampleCount;

    /// Extent of the viewed mip level
    fn extent(&self) -> Extent2D;
}

/// One image view bound to one render pass attachment
#[derive(Clone)]
pub struct FrameBufferAttachment {
    /// Index of the render pass attachment, or `ATTACHMENT_UNUSED`
    pub attachment: u32,
    /// View bound to that attachment
    pub view: Arc<dyn TextureView>,
}

impl FrameBufferAttachment {
    /// Bind `view` to the attachment described by `description`
    pub fn new(description: &AttachmentDescription, view: Arc<dyn TextureView>) -> Self {
        Self { attachment: description.index, view }
    }

    /// Bind `view` to attachment `attachment`
    pub fn with_index(attachment: u32, view: Arc<dyn TextureView>) -> Self {
        Self { attachment, view }
    }

    pub fn is_unused(&self) -> bool {
        self.attachment == ATTACHMENT_UNUSED
    }
}

/// Frame buffer resource trait
///
/// Implemented by backend-specific frame buffer types. Created through
/// `RenderPass::create_frame_buffer()`.
pub trait FrameBuffer: Send + Sync {
    /// Dimensions in pixels
    fn dimensions(&self) -> Extent2D;

    /// Render pass this frame buffer was created from
    fn render_pass(&self) -> &Arc<dyn RenderPass>;

    /// Bound attachments, as supplied at creation
    fn attachments(&self) -> &[FrameBufferAttachment];
}

/// Check that `attaches` may back a frame buffer for `attachments`
///
/// Attaches referring to `ATTACHMENT_UNUSED` are skipped. Every other attach
/// must name a distinct declared attachment; together they must cover all
/// declared attachments, with matching format and sample count, and each
/// view must be at least `dimensions` large.
///
/// # Errors
///
/// `Error::IncompatibleAttachments` describing the first mismatch.
pub fn check_frame_buffer_compatibility(
    attachments: &[AttachmentDescription],
    dimensions: Extent2D,
    attaches: &[FrameBufferAttachment],
) -> Result<()> {
    const SOURCE: &str = "galaxy3d::rhi::FrameBuffer";

    if dimensions.width == 0 || dimensions.height == 0 {
        crate::engine_bail!(SOURCE, IncompatibleAttachments =>
            "frame buffer dimensions {}x{} must be non-zero", dimensions.width, dimensions.height);
    }

    let mut bound = vec![false; attachments.len()];
    let mut bound_count = 0usize;

    for attach in attaches.iter().filter(|a| !a.is_unused()) {
        let index = attach.attachment as usize;
        let Some(description) = attachments.get(index) else {
            crate::engine_bail!(SOURCE, IncompatibleAttachments =>
                "attachment {} does not exist (render pass declares {})",
                attach.attachment, attachments.len());
        };

        if bound[index] {
            crate::engine_bail!(SOURCE, IncompatibleAttachments =>
                "attachment {} is bound more than once", attach.attachment);
        }
        bound[index] = true;
        bound_count += 1;

        let view_format = attach.view.format();
        if view_format != description.format {
            crate::engine_bail!(SOURCE, IncompatibleAttachments =>
                "attachment {} expects format {} but the view is {}",
                attach.attachment, description.format, view_format);
        }

        let view_samples = attach.view.samples();
        if view_samples != description.samples {
            crate::engine_bail!(SOURCE, IncompatibleAttachments =>
                "attachment {} expects {} samples but the view has {}",
                attach.attachment, description.samples.count(), view_samples.count());
        }

        let extent = attach.view.extent();
        if !extent.covers(dimensions) {
            crate::engine_bail!(SOURCE, IncompatibleAttachments =>
                "attachment {} view is {}x{}, smaller than the {}x{} frame buffer",
                attach.attachment, extent.width, extent.height, dimensions.width, dimensions.height);
        }
    }

    if bound_count != attachments.len() {
        crate::engine_bail!(SOURCE, IncompatibleAttachments =>
            "{} attachments bound but the render pass declares {}", bound_count, attachments.len());
    }

    Ok(())
}

#[cfg(test)]
#[path = "frame_buffer_tests.rs"]
mod tests;
