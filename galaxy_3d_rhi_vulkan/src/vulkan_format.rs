/// Vocabulary conversions (RHI -> Vulkan)
///
/// RHI formats, layouts and flag bits carry Vulkan's numeric values, so most
/// conversions are raw casts. Enumerations without a numeric identity are
/// matched explicitly.

use ash::vk;
use galaxy_3d_rhi::galaxy3d::render::{
    AccessFlags, AttachmentLoadOp, AttachmentStoreOp, ColourComponentFlags, DependencyFlags,
    Format, ImageAspectFlags, ImageLayout, PipelineBindPoint, PipelineStageFlags,
    RenderPassCreateFlags, SampleCount, SubpassDescriptionFlags,
};

// ===== ENUMERATIONS =====

pub fn format_to_vk(format: Format) -> vk::Format {
    vk::Format::from_raw(format.as_raw() as i32)
}

pub fn image_layout_to_vk(layout: ImageLayout) -> vk::ImageLayout {
    match layout {
        ImageLayout::Undefined => vk::ImageLayout::UNDEFINED,
        ImageLayout::General => vk::ImageLayout::GENERAL,
        ImageLayout::ColourAttachmentOptimal => vk::ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
        ImageLayout::DepthStencilAttachmentOptimal => vk::ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL,
        ImageLayout::DepthStencilReadOnlyOptimal => vk::ImageLayout::DEPTH_STENCIL_READ_ONLY_OPTIMAL,
        ImageLayout::ShaderReadOnlyOptimal => vk::ImageLayout::SHADER_READ_ONLY_OPTIMAL,
        ImageLayout::TransferSrcOptimal => vk::ImageLayout::TRANSFER_SRC_OPTIMAL,
        ImageLayout::TransferDstOptimal => vk::ImageLayout::TRANSFER_DST_OPTIMAL,
        ImageLayout::Preinitialized => vk::ImageLayout::PREINITIALIZED,
        ImageLayout::PresentSrc => vk::ImageLayout::PRESENT_SRC_KHR,
    }
}

/// Convert AttachmentLoadOp to Vulkan
pub fn load_op_to_vk(load_op: AttachmentLoadOp) -> vk::AttachmentLoadOp {
    match load_op {
        AttachmentLoadOp::Load => vk::AttachmentLoadOp::LOAD,
        AttachmentLoadOp::Clear => vk::AttachmentLoadOp::CLEAR,
        AttachmentLoadOp::DontCare => vk::AttachmentLoadOp::DONT_CARE,
    }
}

/// Convert AttachmentStoreOp to Vulkan
pub fn store_op_to_vk(store_op: AttachmentStoreOp) -> vk::AttachmentStoreOp {
    match store_op {
        AttachmentStoreOp::Store => vk::AttachmentStoreOp::STORE,
        AttachmentStoreOp::DontCare => vk::AttachmentStoreOp::DONT_CARE,
    }
}

pub fn sample_count_to_vk(count: SampleCount) -> vk::SampleCountFlags {
    match count {
        SampleCount::S1 => vk::SampleCountFlags::TYPE_1,
        SampleCount::S2 => vk::SampleCountFlags::TYPE_2,
        SampleCount::S4 => vk::SampleCountFlags::TYPE_4,
        SampleCount::S8 => vk::SampleCountFlags::TYPE_8,
        SampleCount::S16 => vk::SampleCountFlags::TYPE_16,
        SampleCount::S32 => vk::SampleCountFlags::TYPE_32,
        SampleCount::S64 => vk::SampleCountFlags::TYPE_64,
    }
}

pub fn pipeline_bind_point_to_vk(bind_point: PipelineBindPoint) -> vk::PipelineBindPoint {
    match bind_point {
        PipelineBindPoint::Graphics => vk::PipelineBindPoint::GRAPHICS,
        PipelineBindPoint::Compute => vk::PipelineBindPoint::COMPUTE,
    }
}

// ===== FLAG SETS =====

pub fn pipeline_stage_to_vk(flags: PipelineStageFlags) -> vk::PipelineStageFlags {
    vk::PipelineStageFlags::from_raw(flags.bits())
}

pub fn access_to_vk(flags: AccessFlags) -> vk::AccessFlags {
    vk::AccessFlags::from_raw(flags.bits())
}

pub fn dependency_flags_to_vk(flags: DependencyFlags) -> vk::DependencyFlags {
    vk::DependencyFlags::from_raw(flags.bits())
}

pub fn colour_components_to_vk(flags: ColourComponentFlags) -> vk::ColorComponentFlags {
    vk::ColorComponentFlags::from_raw(flags.bits())
}

pub fn aspect_mask_to_vk(flags: ImageAspectFlags) -> vk::ImageAspectFlags {
    vk::ImageAspectFlags::from_raw(flags.bits())
}

pub fn render_pass_flags_to_vk(flags: RenderPassCreateFlags) -> vk::RenderPassCreateFlags {
    vk::RenderPassCreateFlags::from_raw(flags.bits())
}

pub fn subpass_flags_to_vk(flags: SubpassDescriptionFlags) -> vk::SubpassDescriptionFlags {
    vk::SubpassDescriptionFlags::from_raw(flags.bits())
}

#[cfg(test)]
#[path = "vulkan_format_tests.rs"]
mod tests;
