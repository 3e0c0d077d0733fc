/// RenderSubpass - a subpass description plus the pipeline state it needs
///
/// The needed state is what the subpass's shader work exercises on entry
/// (e.g. colour-attachment output + colour-attachment write for a plain
/// draw). `GraphicsDevice::create_render_pass_from_subpasses` compares
/// consecutive needed states to decide where dependencies go, so it never
/// has to re-derive usage from bind points.

use crate::error::Result;
use crate::graphics_device::{
    AccessFlags, AttachmentReference, PipelineBindPoint, PipelineStageFlags,
    SubpassDescription,
};

/// Pipeline stage and access mask a subpass begins (or leaves) with
///
/// Two states are equal only if both fields are bit-for-bit equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderSubpassState {
    pub pipeline_stage: PipelineStageFlags,
    pub access: AccessFlags,
}

impl RenderSubpassState {
    pub fn new(pipeline_stage: PipelineStageFlags, access: AccessFlags) -> Self {
        Self { pipeline_stage, access }
    }
}

/// Immutable subpass: structural description + needed state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSubpass {
    description: SubpassDescription,
    needed_state: RenderSubpassState,
}

impl RenderSubpass {
    /// Full form
    ///
    /// # Errors
    ///
    /// `Error::ContractViolation` if `resolve_attachments` is non-empty and
    /// not as long as `color_attachments`.
    pub fn new(
        pipeline_bind_point: PipelineBindPoint,
        needed_state: RenderSubpassState,
        input_attachments: Vec<AttachmentReference>,
        color_attachments: Vec<AttachmentReference>,
        resolve_attachments: Vec<AttachmentReference>,
        depth_stencil_attachment: Option<AttachmentReference>,
        reserve_attachments: Vec<u32>,
    ) -> Result<Self> {
        let description = SubpassDescription::new(
            pipeline_bind_point,
            input_attachments,
            color_attachments,
            resolve_attachments,
            depth_stencil_attachment,
            reserve_attachments,
        )?;

        Ok(Self { description, needed_state })
    }

    /// Colour attachments only
    pub fn with_colour(
        pipeline_bind_point: PipelineBindPoint,
        needed_state: RenderSubpassState,
        color_attachments: Vec<AttachmentReference>,
    ) -> Self {
        Self {
            description: SubpassDescription::with_colour(pipeline_bind_point, color_attachments),
            needed_state,
        }
    }

    /// Colour attachments plus one depth/stencil attachment
    pub fn with_colour_and_depth(
        pipeline_bind_point: PipelineBindPoint,
        needed_state: RenderSubpassState,
        color_attachments: Vec<AttachmentReference>,
        depth_stencil_attachment: AttachmentReference,
    ) -> Self {
        Self {
            description: SubpassDescription::with_colour(pipeline_bind_point, color_attachments)
                .with_depth_stencil(depth_stencil_attachment),
            needed_state,
        }
    }

    pub fn description(&self) -> &SubpassDescription {
        &self.description
    }

    pub fn needed_state(&self) -> &RenderSubpassState {
        &self.needed_state
    }

    /// Give up the description (used when assembling a render pass)
    pub fn into_description(self) -> SubpassDescription {
        self.description
    }
}

#[cfg(test)]
#[path = "render_subpass_tests.rs"]
mod tests;
