/// RenderPass trait and the descriptors a render pass is built from
///
/// A render pass is an ordered sequence of subpasses over a fixed set of
/// attachments. Each subpass declares which attachments it reads and
/// writes, and `SubpassDependency` edges order the subpasses against each
/// other and against the work outside the pass.

use std::sync::Arc;
use rustc_hash::FxHashSet;
use crate::error::Result;
use crate::graphics_device::{
    Format, PipelineStageFlags, AccessFlags, DependencyFlags,
    RenderPassCreateFlags, SubpassDescriptionFlags,
    Extent2D, FrameBuffer, FrameBufferAttachment,
};

/// Attachment index meaning "slot declared but intentionally not bound"
pub const ATTACHMENT_UNUSED: u32 = !0u32;

/// Subpass index meaning "outside the render pass" (before or after it)
pub const EXTERNAL_SUBPASS: u32 = !0u32;

// ===== ATTACHMENT ENUMS =====

/// Image layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ImageLayout {
    /// Contents undefined (only valid as an initial layout)
    Undefined = 0,
    /// Supports every access, optimal for none
    General = 1,
    /// Optimal for colour attachment writes
    ColourAttachmentOptimal = 2,
    /// Optimal for depth/stencil attachment reads and writes
    DepthStencilAttachmentOptimal = 3,
    /// Optimal for read-only depth/stencil use
    DepthStencilReadOnlyOptimal = 4,
    /// Optimal for shader reads (sampled or input attachment)
    ShaderReadOnlyOptimal = 5,
    /// Optimal as a transfer source
    TransferSrcOptimal = 6,
    /// Optimal as a transfer destination
    TransferDstOptimal = 7,
    /// Host-written contents, not yet transitioned
    Preinitialized = 8,
    /// Ready for presentation to a swapchain
    PresentSrc = 1_000_001_002,
}

impl ImageLayout {
    pub fn name(&self) -> &'static str {
        match self {
            ImageLayout::Undefined => "Undefined",
            ImageLayout::General => "General",
            ImageLayout::ColourAttachmentOptimal => "ColourAttachmentOptimal",
            ImageLayout::DepthStencilAttachmentOptimal => "DepthStencilAttachmentOptimal",
            ImageLayout::DepthStencilReadOnlyOptimal => "DepthStencilReadOnlyOptimal",
            ImageLayout::ShaderReadOnlyOptimal => "ShaderReadOnlyOptimal",
            ImageLayout::TransferSrcOptimal => "TransferSrcOptimal",
            ImageLayout::TransferDstOptimal => "TransferDstOptimal",
            ImageLayout::Preinitialized => "Preinitialized",
            ImageLayout::PresentSrc => "PresentSrc",
        }
    }

    pub fn as_raw(&self) -> u32 {
        *self as u32
    }

    /// Convert a raw `VkImageLayout`-compatible value
    pub fn from_raw(value: u32) -> Result<ImageLayout> {
        Ok(match value {
            0 => ImageLayout::Undefined,
            1 => ImageLayout::General,
            2 => ImageLayout::ColourAttachmentOptimal,
            3 => ImageLayout::DepthStencilAttachmentOptimal,
            4 => ImageLayout::DepthStencilReadOnlyOptimal,
            5 => ImageLayout::ShaderReadOnlyOptimal,
            6 => ImageLayout::TransferSrcOptimal,
            7 => ImageLayout::TransferDstOptimal,
            8 => ImageLayout::Preinitialized,
            1_000_001_002 => ImageLayout::PresentSrc,
            other => crate::engine_bail!("galaxy3d::rhi::ImageLayout",
                InvalidEnumValue => "{} is not an ImageLayout value", other),
        })
    }
}

/// Load operation for an attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentLoadOp {
    /// Load existing content
    Load,
    /// Clear the content
    Clear,
    /// Don't care about existing content
    DontCare,
}

impl AttachmentLoadOp {
    pub fn name(&self) -> &'static str {
        match self {
            AttachmentLoadOp::Load => "Load",
            AttachmentLoadOp::Clear => "Clear",
            AttachmentLoadOp::DontCare => "DontCare",
        }
    }
}

/// Store operation for an attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentStoreOp {
    /// Store the rendered content
    Store,
    /// Don't care about storing the content
    DontCare,
}

impl AttachmentStoreOp {
    pub fn name(&self) -> &'static str {
        match self {
            AttachmentStoreOp::Store => "Store",
            AttachmentStoreOp::DontCare => "DontCare",
        }
    }
}

/// Multisample count (discriminant is the sample count)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum SampleCount {
    S1 = 1,
    S2 = 2,
    S4 = 4,
    S8 = 8,
    S16 = 16,
    S32 = 32,
    S64 = 64,
}

impl SampleCount {
    /// Number of samples per pixel
    pub fn count(&self) -> u32 {
        *self as u32
    }

    pub fn name(&self) -> &'static str {
        match self {
            SampleCount::S1 => "S1",
            SampleCount::S2 => "S2",
            SampleCount::S4 => "S4",
            SampleCount::S8 => "S8",
            SampleCount::S16 => "S16",
            SampleCount::S32 => "S32",
            SampleCount::S64 => "S64",
        }
    }
}

/// Pipeline kind a subpass binds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineBindPoint {
    Graphics,
    Compute,
}

impl PipelineBindPoint {
    pub fn name(&self) -> &'static str {
        match self {
            PipelineBindPoint::Graphics => "Graphics",
            PipelineBindPoint::Compute => "Compute",
        }
    }
}

// ===== ATTACHMENT DESCRIPTORS =====

/// One image slot of a render pass
///
/// The position in `RenderPassCreateInfo::attachments` is the identity used
/// by every `AttachmentReference`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttachmentDescription {
    /// Attachment index
    pub index: u32,
    /// Pixel format
    pub format: Format,
    /// Number of samples
    pub samples: SampleCount,
    /// Load operation for colour or depth
    pub load_op: AttachmentLoadOp,
    /// Store operation for colour or depth
    pub store_op: AttachmentStoreOp,
    /// Load operation for stencil
    pub stencil_load_op: AttachmentLoadOp,
    /// Store operation for stencil
    pub stencil_store_op: AttachmentStoreOp,
    /// Layout the image is in when the pass begins
    pub initial_layout: ImageLayout,
    /// Layout the image is transitioned to when the pass ends
    pub final_layout: ImageLayout,
}

/// Reference from a subpass to one attachment, in a given layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttachmentReference {
    /// Attachment index, or `ATTACHMENT_UNUSED`
    pub attachment: u32,
    /// Layout used during the subpass
    pub layout: ImageLayout,
}

impl AttachmentReference {
    pub fn new(attachment: u32, layout: ImageLayout) -> Self {
        Self { attachment, layout }
    }

    /// Declared slot that is deliberately left unbound (writes discarded)
    pub fn unused() -> Self {
        Self { attachment: ATTACHMENT_UNUSED, layout: ImageLayout::Undefined }
    }

    pub fn is_unused(&self) -> bool {
        self.attachment == ATTACHMENT_UNUSED
    }
}

/// Per-subpass attachment usage
///
/// Invariant: `resolve_attachments` is either empty or exactly as long as
/// `color_attachments` (resolve `i` pairs with colour `i`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubpassDescription {
    flags: SubpassDescriptionFlags,
    pipeline_bind_point: PipelineBindPoint,
    input_attachments: Vec<AttachmentReference>,
    color_attachments: Vec<AttachmentReference>,
    resolve_attachments: Vec<AttachmentReference>,
    depth_stencil_attachment: Option<AttachmentReference>,
    reserve_attachments: Vec<u32>,
}

impl SubpassDescription {
    /// Build a subpass description
    ///
    /// # Errors
    ///
    /// `Error::ContractViolation` if `resolve_attachments` is non-empty and
    /// its length differs from `color_attachments`.
    pub fn new(
        pipeline_bind_point: PipelineBindPoint,
        input_attachments: Vec<AttachmentReference>,
        color_attachments: Vec<AttachmentReference>,
        resolve_attachments: Vec<AttachmentReference>,
        depth_stencil_attachment: Option<AttachmentReference>,
        reserve_attachments: Vec<u32>,
    ) -> Result<Self> {
        check_resolve_count(color_attachments.len(), resolve_attachments.len())?;

        Ok(Self {
            flags: SubpassDescriptionFlags::empty(),
            pipeline_bind_point,
            input_attachments,
            color_attachments,
            resolve_attachments,
            depth_stencil_attachment,
            reserve_attachments,
        })
    }

    /// Subpass writing only colour attachments
    pub fn with_colour(
        pipeline_bind_point: PipelineBindPoint,
        color_attachments: Vec<AttachmentReference>,
    ) -> Self {
        Self {
            flags: SubpassDescriptionFlags::empty(),
            pipeline_bind_point,
            input_attachments: Vec::new(),
            color_attachments,
            resolve_attachments: Vec::new(),
            depth_stencil_attachment: None,
            reserve_attachments: Vec::new(),
        }
    }

    /// Attach a depth/stencil reference
    pub fn with_depth_stencil(mut self, depth_stencil_attachment: AttachmentReference) -> Self {
        self.depth_stencil_attachment = Some(depth_stencil_attachment);
        self
    }

    /// Replace the backend-specific description flags
    pub fn with_flags(mut self, flags: SubpassDescriptionFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn flags(&self) -> SubpassDescriptionFlags {
        self.flags
    }

    pub fn pipeline_bind_point(&self) -> PipelineBindPoint {
        self.pipeline_bind_point
    }

    pub fn input_attachments(&self) -> &[AttachmentReference] {
        &self.input_attachments
    }

    pub fn color_attachments(&self) -> &[AttachmentReference] {
        &self.color_attachments
    }

    pub fn resolve_attachments(&self) -> &[AttachmentReference] {
        &self.resolve_attachments
    }

    pub fn depth_stencil_attachment(&self) -> Option<&AttachmentReference> {
        self.depth_stencil_attachment.as_ref()
    }

    /// Attachments whose contents must survive this subpass untouched
    pub fn reserve_attachments(&self) -> &[u32] {
        &self.reserve_attachments
    }

    /// Every attachment reference of the subpass, unused slots included
    pub fn references(&self) -> impl Iterator<Item = &AttachmentReference> {
        self.input_attachments
            .iter()
            .chain(self.color_attachments.iter())
            .chain(self.resolve_attachments.iter())
            .chain(self.depth_stencil_attachment.iter())
    }
}

fn check_resolve_count(colour_count: usize, resolve_count: usize) -> Result<()> {
    if resolve_count != 0 && resolve_count != colour_count {
        crate::engine_bail!("galaxy3d::rhi::SubpassDescription",
            ContractViolation => "{} resolve attachments given for {} colour attachments",
            resolve_count, colour_count);
    }
    Ok(())
}

/// Ordering edge between two subpasses
///
/// `src_subpass` / `dst_subpass` are subpass indices or `EXTERNAL_SUBPASS`.
/// When both are real indices, `src_subpass <= dst_subpass`; equal indices
/// express ordering inside one subpass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubpassDependency {
    pub src_subpass: u32,
    pub dst_subpass: u32,
    pub src_stage_mask: PipelineStageFlags,
    pub dst_stage_mask: PipelineStageFlags,
    pub src_access_mask: AccessFlags,
    pub dst_access_mask: AccessFlags,
    pub dependency_flags: DependencyFlags,
}

// ===== RENDER PASS DESCRIPTOR =====

/// Descriptor for creating a render pass
///
/// Consumed by `GraphicsDevice::create_render_pass`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPassCreateInfo {
    pub flags: RenderPassCreateFlags,
    pub attachments: Vec<AttachmentDescription>,
    pub subpasses: Vec<SubpassDescription>,
    pub dependencies: Vec<SubpassDependency>,
}

impl Default for RenderPassCreateInfo {
    fn default() -> Self {
        Self {
            flags: RenderPassCreateFlags::empty(),
            attachments: Vec::new(),
            subpasses: Vec::new(),
            dependencies: Vec::new(),
        }
    }
}

impl RenderPassCreateInfo {
    pub fn new(
        attachments: Vec<AttachmentDescription>,
        subpasses: Vec<SubpassDescription>,
        dependencies: Vec<SubpassDependency>,
    ) -> Self {
        Self {
            flags: RenderPassCreateFlags::empty(),
            attachments,
            subpasses,
            dependencies,
        }
    }

    /// Check cross-subpass consistency
    ///
    /// Unused references (`ATTACHMENT_UNUSED`) are ignored. Fails with
    /// `Error::ContractViolation` on:
    /// - no subpass at all
    /// - an attachment whose `index` differs from its position
    /// - a reference or reserve index past the last attachment
    /// - a resolve/colour count mismatch
    /// - a reserve index listed twice, unused, or referenced by the same subpass
    /// - a dependency naming a missing subpass, `EXTERNAL_SUBPASS` on both
    ///   ends, or pointing backwards
    pub fn validate(&self) -> Result<()> {
        const SOURCE: &str = "galaxy3d::rhi::RenderPassCreateInfo";

        if self.subpasses.is_empty() {
            crate::engine_bail!(SOURCE, ContractViolation => "render pass declares no subpass");
        }

        for (position, attachment) in self.attachments.iter().enumerate() {
            if attachment.index as usize != position {
                crate::engine_bail!(SOURCE, ContractViolation =>
                    "attachment at position {} declares index {}", position, attachment.index);
            }
        }

        let attachment_count = self.attachments.len() as u32;

        for (subpass_index, subpass) in self.subpasses.iter().enumerate() {
            check_resolve_count(subpass.color_attachments.len(), subpass.resolve_attachments.len())?;

            let mut referenced = FxHashSet::default();
            for reference in subpass.references().filter(|r| !r.is_unused()) {
                if reference.attachment >= attachment_count {
                    crate::engine_bail!(SOURCE, ContractViolation =>
                        "subpass {} references attachment {} but only {} are declared",
                        subpass_index, reference.attachment, attachment_count);
                }
                referenced.insert(reference.attachment);
            }

            let mut reserved = FxHashSet::default();
            for &index in &subpass.reserve_attachments {
                if index == ATTACHMENT_UNUSED {
                    crate::engine_bail!(SOURCE, ContractViolation =>
                        "subpass {} reserves an unused attachment", subpass_index);
                }
                if index >= attachment_count {
                    crate::engine_bail!(SOURCE, ContractViolation =>
                        "subpass {} reserves attachment {} but only {} are declared",
                        subpass_index, index, attachment_count);
                }
                if referenced.contains(&index) {
                    crate::engine_bail!(SOURCE, ContractViolation =>
                        "subpass {} both uses and reserves attachment {}", subpass_index, index);
                }
                if !reserved.insert(index) {
                    crate::engine_bail!(SOURCE, ContractViolation =>
                        "subpass {} reserves attachment {} twice", subpass_index, index);
                }
            }
        }

        let subpass_count = self.subpasses.len() as u32;
        let in_range = |index: u32| index == EXTERNAL_SUBPASS || index < subpass_count;

        for (dependency_index, dependency) in self.dependencies.iter().enumerate() {
            if !in_range(dependency.src_subpass) || !in_range(dependency.dst_subpass) {
                crate::engine_bail!(SOURCE, ContractViolation =>
                    "dependency {} links subpass {} to {} but only {} subpasses exist",
                    dependency_index, dependency.src_subpass, dependency.dst_subpass, subpass_count);
            }

            match (dependency.src_subpass, dependency.dst_subpass) {
                (EXTERNAL_SUBPASS, EXTERNAL_SUBPASS) => {
                    crate::engine_bail!(SOURCE, ContractViolation =>
                        "dependency {} is external on both ends", dependency_index);
                }
                (EXTERNAL_SUBPASS, _) | (_, EXTERNAL_SUBPASS) => {}
                (src, dst) if src > dst => {
                    crate::engine_bail!(SOURCE, ContractViolation =>
                        "dependency {} points backwards ({} -> {})", dependency_index, src, dst);
                }
                _ => {}
            }
        }

        Ok(())
    }
}

// ===== RENDER PASS TRAIT =====

/// Render pass resource trait
///
/// Implemented by backend-specific render pass types. Owns its attachment,
/// subpass and dependency sequences by value; nothing changes after
/// creation.
pub trait RenderPass: Send + Sync {
    /// Attachment descriptions, in attachment-index order
    fn attachments(&self) -> &[AttachmentDescription];

    /// Subpass descriptions, in execution order
    fn subpasses(&self) -> &[SubpassDescription];

    /// Dependencies between subpasses
    fn dependencies(&self) -> &[SubpassDependency];

    fn attachment_count(&self) -> usize {
        self.attachments().len()
    }

    fn subpass_count(&self) -> usize {
        self.subpasses().len()
    }

    /// Create a frame buffer compatible with this render pass
    ///
    /// Implementations must reject incompatible views (see
    /// `check_frame_buffer_compatibility`) before touching the native API.
    /// The returned frame buffer keeps this render pass alive.
    ///
    /// # Errors
    ///
    /// `Error::IncompatibleAttachments` when `attaches` does not match the
    /// declared attachments.
    fn create_frame_buffer(
        self: Arc<Self>,
        dimensions: Extent2D,
        attaches: Vec<FrameBufferAttachment>,
    ) -> Result<Arc<dyn FrameBuffer>>;
}

#[cfg(test)]
#[path = "render_pass_tests.rs"]
mod tests;
