/// Vulkan render pass descriptor
///
/// `vk::RenderPassCreateInfo` and `vk::SubpassDescription` only hold
/// pointers. `VulkanRenderPassCreateInfo` owns every array they point to and
/// lends the assembled native struct through `with_native`, so nothing can
/// dangle.

use ash::vk;
use galaxy_3d_rhi::galaxy3d::render::{
    AttachmentDescription, AttachmentReference, RenderPassCreateInfo, SubpassDependency,
    SubpassDescription, ATTACHMENT_UNUSED, EXTERNAL_SUBPASS,
};

use crate::vulkan_format::{
    access_to_vk, dependency_flags_to_vk, format_to_vk, image_layout_to_vk, load_op_to_vk,
    pipeline_bind_point_to_vk, pipeline_stage_to_vk, render_pass_flags_to_vk, sample_count_to_vk,
    store_op_to_vk, subpass_flags_to_vk,
};
use crate::LOG_SOURCE;

// ===== ELEMENT CONVERSIONS =====

pub fn attachment_description_to_vk(description: &AttachmentDescription) -> vk::AttachmentDescription {
    vk::AttachmentDescription::default()
        .format(format_to_vk(description.format))
        .samples(sample_count_to_vk(description.samples))
        .load_op(load_op_to_vk(description.load_op))
        .store_op(store_op_to_vk(description.store_op))
        .stencil_load_op(load_op_to_vk(description.stencil_load_op))
        .stencil_store_op(store_op_to_vk(description.stencil_store_op))
        .initial_layout(image_layout_to_vk(description.initial_layout))
        .final_layout(image_layout_to_vk(description.final_layout))
}

pub fn attachment_reference_to_vk(reference: &AttachmentReference) -> vk::AttachmentReference {
    let attachment = if reference.attachment == ATTACHMENT_UNUSED {
        vk::ATTACHMENT_UNUSED
    } else {
        reference.attachment
    };

    vk::AttachmentReference::default()
        .attachment(attachment)
        .layout(image_layout_to_vk(reference.layout))
}

fn subpass_index_to_vk(index: u32) -> u32 {
    if index == EXTERNAL_SUBPASS {
        vk::SUBPASS_EXTERNAL
    } else {
        index
    }
}

pub fn subpass_dependency_to_vk(dependency: &SubpassDependency) -> vk::SubpassDependency {
    vk::SubpassDependency::default()
        .src_subpass(subpass_index_to_vk(dependency.src_subpass))
        .dst_subpass(subpass_index_to_vk(dependency.dst_subpass))
        .src_stage_mask(pipeline_stage_to_vk(dependency.src_stage_mask))
        .dst_stage_mask(pipeline_stage_to_vk(dependency.dst_stage_mask))
        .src_access_mask(access_to_vk(dependency.src_access_mask))
        .dst_access_mask(access_to_vk(dependency.dst_access_mask))
        .dependency_flags(dependency_flags_to_vk(dependency.dependency_flags))
}

// ===== OWNED SUBPASS =====

/// Native arrays of one subpass
#[derive(Debug, Clone)]
struct VulkanSubpass {
    flags: vk::SubpassDescriptionFlags,
    bind_point: vk::PipelineBindPoint,
    input: Vec<vk::AttachmentReference>,
    colour: Vec<vk::AttachmentReference>,
    resolve: Vec<vk::AttachmentReference>,
    depth_stencil: Option<vk::AttachmentReference>,
    preserve: Vec<u32>,
}

impl VulkanSubpass {
    fn new(subpass: &SubpassDescription) -> Self {
        let convert = |refs: &[AttachmentReference]| -> Vec<vk::AttachmentReference> {
            refs.iter().map(attachment_reference_to_vk).collect()
        };

        Self {
            flags: subpass_flags_to_vk(subpass.flags()),
            bind_point: pipeline_bind_point_to_vk(subpass.pipeline_bind_point()),
            input: convert(subpass.input_attachments()),
            colour: convert(subpass.color_attachments()),
            resolve: convert(subpass.resolve_attachments()),
            depth_stencil: subpass.depth_stencil_attachment().map(attachment_reference_to_vk),
            preserve: subpass.reserve_attachments().to_vec(),
        }
    }

    fn native(&self) -> vk::SubpassDescription<'_> {
        let mut description = vk::SubpassDescription::default()
            .flags(self.flags)
            .pipeline_bind_point(self.bind_point)
            .input_attachments(&self.input)
            .color_attachments(&self.colour)
            .preserve_attachments(&self.preserve);

        // Resolves share color_attachment_count; an empty slice would reset it
        if !self.resolve.is_empty() {
            description = description.resolve_attachments(&self.resolve);
        }

        if let Some(depth_stencil) = &self.depth_stencil {
            description = description.depth_stencil_attachment(depth_stencil);
        }

        description
    }
}

// ===== RENDER PASS CREATE INFO =====

/// Owned Vulkan translation of a `RenderPassCreateInfo`
#[derive(Debug, Clone)]
pub struct VulkanRenderPassCreateInfo {
    flags: vk::RenderPassCreateFlags,
    attachments: Vec<vk::AttachmentDescription>,
    subpasses: Vec<VulkanSubpass>,
    dependencies: Vec<vk::SubpassDependency>,
}

impl VulkanRenderPassCreateInfo {
    /// Translate `info` element by element
    ///
    /// The sentinels `ATTACHMENT_UNUSED` and `EXTERNAL_SUBPASS` already have
    /// Vulkan's values and are passed through.
    pub fn new(info: &RenderPassCreateInfo) -> Self {
        let translated = Self {
            flags: render_pass_flags_to_vk(info.flags),
            attachments: info.attachments.iter().map(attachment_description_to_vk).collect(),
            subpasses: info.subpasses.iter().map(VulkanSubpass::new).collect(),
            dependencies: info.dependencies.iter().map(subpass_dependency_to_vk).collect(),
        };

        galaxy_3d_rhi::engine_debug!(LOG_SOURCE,
            "Translated render pass: {} attachments, {} subpasses, {} dependencies",
            translated.attachments.len(), translated.subpasses.len(), translated.dependencies.len());

        translated
    }

    pub fn attachments(&self) -> &[vk::AttachmentDescription] {
        &self.attachments
    }

    pub fn dependencies(&self) -> &[vk::SubpassDependency] {
        &self.dependencies
    }

    pub fn subpass_count(&self) -> usize {
        self.subpasses.len()
    }

    /// Native subpass descriptions, borrowing this descriptor's arrays
    pub fn native_subpasses(&self) -> Vec<vk::SubpassDescription<'_>> {
        self.subpasses.iter().map(VulkanSubpass::native).collect()
    }

    /// Call `f` with the assembled `vk::RenderPassCreateInfo`
    ///
    /// The pointers inside the create info are only valid during `f`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let render_pass = vulkan_info.with_native(|info| unsafe {
    ///     device.create_render_pass(info, None)
    /// })?;
    /// ```
    pub fn with_native<R>(&self, f: impl FnOnce(&vk::RenderPassCreateInfo<'_>) -> R) -> R {
        let subpasses = self.native_subpasses();
        let info = vk::RenderPassCreateInfo::default()
            .flags(self.flags)
            .attachments(&self.attachments)
            .subpasses(&subpasses)
            .dependencies(&self.dependencies);
        f(&info)
    }
}

#[cfg(test)]
#[path = "vulkan_render_pass_tests.rs"]
mod tests;
