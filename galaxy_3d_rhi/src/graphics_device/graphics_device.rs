/// GraphicsDevice trait - render pass factory interface
///
/// Backends implement `create_render_pass` only. Building a render pass from
/// `RenderSubpass`es goes through `create_render_pass_from_subpasses`, which
/// synthesizes the subpass dependencies before handing the descriptor over.

use std::sync::Arc;
use crate::error::Result;
use crate::graphics_device::{
    flag_names, AttachmentDescription, DependencyFlags, RenderPass, RenderPassCreateInfo,
    RenderSubpass, RenderSubpassState, SubpassDependency, EXTERNAL_SUBPASS,
};

// ============================================================================
// Configuration
// ============================================================================

/// Graphics device configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Validate render pass descriptors before creation
    pub enable_validation: bool,
    /// Application name
    pub app_name: String,
    /// Application version (major, minor, patch)
    pub app_version: (u32, u32, u32),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_validation: cfg!(debug_assertions),
            app_name: "Galaxy3D Application".to_string(),
            app_version: (1, 0, 0),
        }
    }
}

// ============================================================================
// Dependency synthesis
// ============================================================================

fn subpass_label(index: u32) -> String {
    if index == EXTERNAL_SUBPASS {
        "EXTERNAL".to_string()
    } else {
        index.to_string()
    }
}

fn transition(
    src_subpass: u32,
    dst_subpass: u32,
    from: &RenderSubpassState,
    to: &RenderSubpassState,
) -> SubpassDependency {
    let dependency = SubpassDependency {
        src_subpass,
        dst_subpass,
        src_stage_mask: from.pipeline_stage,
        dst_stage_mask: to.pipeline_stage,
        src_access_mask: from.access,
        dst_access_mask: to.access,
        dependency_flags: DependencyFlags::BY_REGION,
    };

    crate::engine_debug!("galaxy3d::rhi::GraphicsDevice",
        "Subpass dependency {} -> {}: [{}] [{}] -> [{}] [{}]",
        subpass_label(src_subpass), subpass_label(dst_subpass),
        flag_names(from.pipeline_stage), flag_names(from.access),
        flag_names(to.pipeline_stage), flag_names(to.access));

    dependency
}

/// Assemble a render pass descriptor from ordered subpasses
///
/// Walks the subpasses keeping track of the current (stage, access) pair,
/// starting from `initial_state`. Whenever the next subpass needs a
/// different pair, a `BY_REGION` dependency from the previous subpass (or
/// `EXTERNAL_SUBPASS` for the first) to that subpass is emitted. A last
/// dependency to `EXTERNAL_SUBPASS` is emitted if the state left by the final
/// subpass differs from `final_state`.
///
/// States are compared for exact equality: a superset of the previous
/// access mask still produces a dependency. With no subpass at all the
/// initial and final states are compared directly, and a difference yields a
/// single `EXTERNAL_SUBPASS -> EXTERNAL_SUBPASS` edge (which `validate()`
/// then rejects).
pub fn synthesize_render_pass(
    attachments: Vec<AttachmentDescription>,
    subpasses: Vec<RenderSubpass>,
    initial_state: RenderSubpassState,
    final_state: RenderSubpassState,
) -> RenderPassCreateInfo {
    let mut current = initial_state;
    let mut subpass_index = EXTERNAL_SUBPASS;
    let mut descriptions = Vec::with_capacity(subpasses.len());
    let mut dependencies = Vec::new();

    for subpass in subpasses {
        let needed = *subpass.needed_state();
        let next_index = subpass_index.wrapping_add(1);

        if current != needed {
            dependencies.push(transition(subpass_index, next_index, &current, &needed));
        }

        current = needed;
        subpass_index = next_index;
        descriptions.push(subpass.into_description());
    }

    if current != final_state {
        dependencies.push(transition(subpass_index, EXTERNAL_SUBPASS, &current, &final_state));
    }

    crate::engine_trace!("galaxy3d::rhi::GraphicsDevice",
        "Synthesized {} dependencies for {} subpasses",
        dependencies.len(), descriptions.len());

    RenderPassCreateInfo::new(attachments, descriptions, dependencies)
}

// ============================================================================
// GraphicsDevice trait
// ============================================================================

/// Main graphics device trait
///
/// This is the factory interface for render passes.
/// Implemented by backend-specific devices (e.g., a Vulkan device).
pub trait GraphicsDevice: Send + Sync {
    /// Device configuration
    fn config(&self) -> &Config;

    /// Create a render pass from a complete descriptor
    ///
    /// # Arguments
    ///
    /// * `info` - Render pass descriptor, translated 1:1 by the backend
    ///
    /// # Returns
    ///
    /// A shared pointer to the created render pass
    fn create_render_pass(&self, info: RenderPassCreateInfo) -> Result<Arc<dyn RenderPass>>;

    /// Create a render pass from ordered subpasses
    ///
    /// Dependencies are synthesized with `synthesize_render_pass`. When
    /// `Config::enable_validation` is set, the descriptor is validated before
    /// `create_render_pass` sees it.
    ///
    /// # Arguments
    ///
    /// * `attachments` - Attachment descriptions, in index order
    /// * `subpasses` - Subpasses, in execution order
    /// * `initial_state` - State of the resources before the pass
    /// * `final_state` - State expected by the work after the pass
    ///
    /// # Errors
    ///
    /// `Error::ContractViolation` on a validation failure, or whatever the
    /// backend's `create_render_pass` reports.
    fn create_render_pass_from_subpasses(
        &self,
        attachments: Vec<AttachmentDescription>,
        subpasses: Vec<RenderSubpass>,
        initial_state: RenderSubpassState,
        final_state: RenderSubpassState,
    ) -> Result<Arc<dyn RenderPass>> {
        let info = synthesize_render_pass(attachments, subpasses, initial_state, final_state);

        if self.config().enable_validation {
            info.validate()?;
        }

        self.create_render_pass(info)
    }
}

#[cfg(test)]
#[path = "graphics_device_tests.rs"]
mod tests;
