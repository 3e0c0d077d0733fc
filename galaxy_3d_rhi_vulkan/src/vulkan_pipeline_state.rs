/// Pipeline state conversions (RHI -> Vulkan)
///
/// State objects without arrays convert to `'static` create infos. States
/// that point at arrays borrow them, so the caller keeps the source (or the
/// converted attachment list) alive while the create info is in use.

use ash::vk;
use galaxy_3d_rhi::galaxy3d::Result;
use galaxy_3d_rhi::galaxy3d::render::{
    BlendFactor, BlendOp, ColourBlendState, ColourBlendStateAttachment, CompareOp, CullMode,
    DepthStencilState, FrontFace, InputAssemblyState, LogicOp, MultisampleState, PolygonMode,
    PrimitiveTopology, RasterisationState, StencilOp, StencilOpState, TessellationState,
    VertexInputAttributeDescription, VertexInputBindingDescription, VertexInputRate,
};

use crate::vulkan_format::{colour_components_to_vk, format_to_vk, sample_count_to_vk};
use crate::LOG_SOURCE;

// ===== ENUMERATIONS =====

pub fn compare_op_to_vk(op: CompareOp) -> vk::CompareOp {
    match op {
        CompareOp::Never => vk::CompareOp::NEVER,
        CompareOp::Less => vk::CompareOp::LESS,
        CompareOp::Equal => vk::CompareOp::EQUAL,
        CompareOp::LessOrEqual => vk::CompareOp::LESS_OR_EQUAL,
        CompareOp::Greater => vk::CompareOp::GREATER,
        CompareOp::NotEqual => vk::CompareOp::NOT_EQUAL,
        CompareOp::GreaterOrEqual => vk::CompareOp::GREATER_OR_EQUAL,
        CompareOp::Always => vk::CompareOp::ALWAYS,
    }
}

pub fn stencil_op_to_vk(op: StencilOp) -> vk::StencilOp {
    match op {
        StencilOp::Keep => vk::StencilOp::KEEP,
        StencilOp::Zero => vk::StencilOp::ZERO,
        StencilOp::Replace => vk::StencilOp::REPLACE,
        StencilOp::IncrementAndClamp => vk::StencilOp::INCREMENT_AND_CLAMP,
        StencilOp::DecrementAndClamp => vk::StencilOp::DECREMENT_AND_CLAMP,
        StencilOp::Invert => vk::StencilOp::INVERT,
        StencilOp::IncrementAndWrap => vk::StencilOp::INCREMENT_AND_WRAP,
        StencilOp::DecrementAndWrap => vk::StencilOp::DECREMENT_AND_WRAP,
    }
}

pub fn cull_mode_to_vk(mode: CullMode) -> vk::CullModeFlags {
    match mode {
        CullMode::None => vk::CullModeFlags::NONE,
        CullMode::Front => vk::CullModeFlags::FRONT,
        CullMode::Back => vk::CullModeFlags::BACK,
        CullMode::FrontAndBack => vk::CullModeFlags::FRONT_AND_BACK,
    }
}

pub fn front_face_to_vk(face: FrontFace) -> vk::FrontFace {
    match face {
        FrontFace::CounterClockwise => vk::FrontFace::COUNTER_CLOCKWISE,
        FrontFace::Clockwise => vk::FrontFace::CLOCKWISE,
    }
}

pub fn polygon_mode_to_vk(mode: PolygonMode) -> vk::PolygonMode {
    match mode {
        PolygonMode::Fill => vk::PolygonMode::FILL,
        PolygonMode::Line => vk::PolygonMode::LINE,
        PolygonMode::Point => vk::PolygonMode::POINT,
    }
}

pub fn blend_factor_to_vk(factor: BlendFactor) -> vk::BlendFactor {
    match factor {
        BlendFactor::Zero => vk::BlendFactor::ZERO,
        BlendFactor::One => vk::BlendFactor::ONE,
        BlendFactor::SrcColour => vk::BlendFactor::SRC_COLOR,
        BlendFactor::OneMinusSrcColour => vk::BlendFactor::ONE_MINUS_SRC_COLOR,
        BlendFactor::DstColour => vk::BlendFactor::DST_COLOR,
        BlendFactor::OneMinusDstColour => vk::BlendFactor::ONE_MINUS_DST_COLOR,
        BlendFactor::SrcAlpha => vk::BlendFactor::SRC_ALPHA,
        BlendFactor::OneMinusSrcAlpha => vk::BlendFactor::ONE_MINUS_SRC_ALPHA,
        BlendFactor::DstAlpha => vk::BlendFactor::DST_ALPHA,
        BlendFactor::OneMinusDstAlpha => vk::BlendFactor::ONE_MINUS_DST_ALPHA,
        BlendFactor::ConstantColour => vk::BlendFactor::CONSTANT_COLOR,
        BlendFactor::OneMinusConstantColour => vk::BlendFactor::ONE_MINUS_CONSTANT_COLOR,
        BlendFactor::ConstantAlpha => vk::BlendFactor::CONSTANT_ALPHA,
        BlendFactor::OneMinusConstantAlpha => vk::BlendFactor::ONE_MINUS_CONSTANT_ALPHA,
        BlendFactor::SrcAlphaSaturate => vk::BlendFactor::SRC_ALPHA_SATURATE,
        BlendFactor::Src1Colour => vk::BlendFactor::SRC1_COLOR,
        BlendFactor::OneMinusSrc1Colour => vk::BlendFactor::ONE_MINUS_SRC1_COLOR,
        BlendFactor::Src1Alpha => vk::BlendFactor::SRC1_ALPHA,
        BlendFactor::OneMinusSrc1Alpha => vk::BlendFactor::ONE_MINUS_SRC1_ALPHA,
    }
}

pub fn blend_op_to_vk(op: BlendOp) -> vk::BlendOp {
    match op {
        BlendOp::Add => vk::BlendOp::ADD,
        BlendOp::Subtract => vk::BlendOp::SUBTRACT,
        BlendOp::ReverseSubtract => vk::BlendOp::REVERSE_SUBTRACT,
        BlendOp::Min => vk::BlendOp::MIN,
        BlendOp::Max => vk::BlendOp::MAX,
    }
}

pub fn logic_op_to_vk(op: LogicOp) -> vk::LogicOp {
    match op {
        LogicOp::Clear => vk::LogicOp::CLEAR,
        LogicOp::And => vk::LogicOp::AND,
        LogicOp::AndReverse => vk::LogicOp::AND_REVERSE,
        LogicOp::Copy => vk::LogicOp::COPY,
        LogicOp::AndInverted => vk::LogicOp::AND_INVERTED,
        LogicOp::NoOp => vk::LogicOp::NO_OP,
        LogicOp::Xor => vk::LogicOp::XOR,
        LogicOp::Or => vk::LogicOp::OR,
        LogicOp::Nor => vk::LogicOp::NOR,
        LogicOp::Equivalent => vk::LogicOp::EQUIVALENT,
        LogicOp::Invert => vk::LogicOp::INVERT,
        LogicOp::OrReverse => vk::LogicOp::OR_REVERSE,
        LogicOp::CopyInverted => vk::LogicOp::COPY_INVERTED,
        LogicOp::OrInverted => vk::LogicOp::OR_INVERTED,
        LogicOp::Nand => vk::LogicOp::NAND,
        LogicOp::Set => vk::LogicOp::SET,
    }
}

pub fn primitive_topology_to_vk(topology: PrimitiveTopology) -> vk::PrimitiveTopology {
    match topology {
        PrimitiveTopology::PointList => vk::PrimitiveTopology::POINT_LIST,
        PrimitiveTopology::LineList => vk::PrimitiveTopology::LINE_LIST,
        PrimitiveTopology::LineStrip => vk::PrimitiveTopology::LINE_STRIP,
        PrimitiveTopology::TriangleList => vk::PrimitiveTopology::TRIANGLE_LIST,
        PrimitiveTopology::TriangleStrip => vk::PrimitiveTopology::TRIANGLE_STRIP,
        PrimitiveTopology::TriangleFan => vk::PrimitiveTopology::TRIANGLE_FAN,
        PrimitiveTopology::LineListWithAdjacency => vk::PrimitiveTopology::LINE_LIST_WITH_ADJACENCY,
        PrimitiveTopology::LineStripWithAdjacency => vk::PrimitiveTopology::LINE_STRIP_WITH_ADJACENCY,
        PrimitiveTopology::TriangleListWithAdjacency => vk::PrimitiveTopology::TRIANGLE_LIST_WITH_ADJACENCY,
        PrimitiveTopology::TriangleStripWithAdjacency => vk::PrimitiveTopology::TRIANGLE_STRIP_WITH_ADJACENCY,
        PrimitiveTopology::PatchList => vk::PrimitiveTopology::PATCH_LIST,
    }
}

pub fn vertex_input_rate_to_vk(rate: VertexInputRate) -> vk::VertexInputRate {
    match rate {
        VertexInputRate::Vertex => vk::VertexInputRate::VERTEX,
        VertexInputRate::Instance => vk::VertexInputRate::INSTANCE,
    }
}

// ===== STATE OBJECTS =====

pub fn stencil_op_state_to_vk(state: &StencilOpState) -> vk::StencilOpState {
    vk::StencilOpState {
        fail_op: stencil_op_to_vk(state.fail_op),
        pass_op: stencil_op_to_vk(state.pass_op),
        depth_fail_op: stencil_op_to_vk(state.depth_fail_op),
        compare_op: compare_op_to_vk(state.compare_op),
        compare_mask: state.compare_mask,
        write_mask: state.write_mask,
        reference: state.reference,
    }
}

pub fn depth_stencil_state_to_vk(state: &DepthStencilState) -> vk::PipelineDepthStencilStateCreateInfo<'static> {
    vk::PipelineDepthStencilStateCreateInfo::default()
        .depth_test_enable(state.depth_test_enable)
        .depth_write_enable(state.depth_write_enable)
        .depth_compare_op(compare_op_to_vk(state.depth_compare_op))
        .depth_bounds_test_enable(state.depth_bounds_test_enable)
        .stencil_test_enable(state.stencil_test_enable)
        .front(stencil_op_state_to_vk(&state.front))
        .back(stencil_op_state_to_vk(&state.back))
        .min_depth_bounds(state.min_depth_bounds)
        .max_depth_bounds(state.max_depth_bounds)
}

pub fn rasterisation_state_to_vk(state: &RasterisationState) -> vk::PipelineRasterizationStateCreateInfo<'static> {
    vk::PipelineRasterizationStateCreateInfo::default()
        .depth_clamp_enable(state.depth_clamp_enable)
        .rasterizer_discard_enable(state.rasteriser_discard_enable)
        .polygon_mode(polygon_mode_to_vk(state.polygon_mode))
        .cull_mode(cull_mode_to_vk(state.cull_mode))
        .front_face(front_face_to_vk(state.front_face))
        .depth_bias_enable(state.depth_bias_enable)
        .depth_bias_constant_factor(state.depth_bias_constant_factor)
        .depth_bias_clamp(state.depth_bias_clamp)
        .depth_bias_slope_factor(state.depth_bias_slope_factor)
        .line_width(state.line_width)
}

/// A zero sample mask means "every sample" and is left unset
///
/// # Errors
///
/// `Error::ContractViolation` for a non-zero mask with more than 32 samples:
/// Vulkan would read a second mask word that `MultisampleState` does not hold.
pub fn multisample_state_to_vk(state: &MultisampleState) -> Result<vk::PipelineMultisampleStateCreateInfo<'_>> {
    if state.sample_mask != 0 && state.rasterisation_samples.count() > 32 {
        galaxy_3d_rhi::engine_bail!(LOG_SOURCE, ContractViolation =>
            "sample mask 0x{:x} only covers 32 samples but {} are rasterised",
            state.sample_mask, state.rasterisation_samples.count());
    }

    let info = vk::PipelineMultisampleStateCreateInfo::default()
        .rasterization_samples(sample_count_to_vk(state.rasterisation_samples))
        .sample_shading_enable(state.sample_shading_enable)
        .min_sample_shading(state.min_sample_shading)
        .alpha_to_coverage_enable(state.alpha_to_coverage_enable)
        .alpha_to_one_enable(state.alpha_to_one_enable);

    if state.sample_mask == 0 {
        Ok(info)
    } else {
        Ok(info.sample_mask(std::slice::from_ref(&state.sample_mask)))
    }
}

pub fn colour_blend_attachment_to_vk(state: &ColourBlendStateAttachment) -> vk::PipelineColorBlendAttachmentState {
    vk::PipelineColorBlendAttachmentState::default()
        .blend_enable(state.blend_enable)
        .src_color_blend_factor(blend_factor_to_vk(state.src_colour_blend_factor))
        .dst_color_blend_factor(blend_factor_to_vk(state.dst_colour_blend_factor))
        .color_blend_op(blend_op_to_vk(state.colour_blend_op))
        .src_alpha_blend_factor(blend_factor_to_vk(state.src_alpha_blend_factor))
        .dst_alpha_blend_factor(blend_factor_to_vk(state.dst_alpha_blend_factor))
        .alpha_blend_op(blend_op_to_vk(state.alpha_blend_op))
        .color_write_mask(colour_components_to_vk(state.colour_write_mask))
}

/// Per-attachment blend states of `state`, in attachment order
pub fn colour_blend_attachments_to_vk(state: &ColourBlendState) -> Vec<vk::PipelineColorBlendAttachmentState> {
    state.attachments.iter().map(colour_blend_attachment_to_vk).collect()
}

/// `attachments` usually comes from `colour_blend_attachments_to_vk(state)`
pub fn colour_blend_state_to_vk<'a>(
    state: &ColourBlendState,
    attachments: &'a [vk::PipelineColorBlendAttachmentState],
) -> vk::PipelineColorBlendStateCreateInfo<'a> {
    vk::PipelineColorBlendStateCreateInfo::default()
        .logic_op_enable(state.logic_op_enable)
        .logic_op(logic_op_to_vk(state.logic_op))
        .attachments(attachments)
        .blend_constants(state.blend_constants)
}

pub fn input_assembly_state_to_vk(state: &InputAssemblyState) -> vk::PipelineInputAssemblyStateCreateInfo<'static> {
    vk::PipelineInputAssemblyStateCreateInfo::default()
        .topology(primitive_topology_to_vk(state.topology))
        .primitive_restart_enable(state.primitive_restart_enable)
}

pub fn tessellation_state_to_vk(state: &TessellationState) -> vk::PipelineTessellationStateCreateInfo<'static> {
    vk::PipelineTessellationStateCreateInfo::default()
        .patch_control_points(state.patch_control_points)
}

pub fn vertex_binding_to_vk(binding: &VertexInputBindingDescription) -> vk::VertexInputBindingDescription {
    vk::VertexInputBindingDescription {
        binding: binding.binding,
        stride: binding.stride,
        input_rate: vertex_input_rate_to_vk(binding.input_rate),
    }
}

pub fn vertex_attribute_to_vk(attribute: &VertexInputAttributeDescription) -> vk::VertexInputAttributeDescription {
    vk::VertexInputAttributeDescription {
        location: attribute.location,
        binding: attribute.binding,
        format: format_to_vk(attribute.format),
        offset: attribute.offset,
    }
}

/// Both arrays usually come from `vertex_binding_to_vk` / `vertex_attribute_to_vk`
pub fn vertex_input_state_to_vk<'a>(
    bindings: &'a [vk::VertexInputBindingDescription],
    attributes: &'a [vk::VertexInputAttributeDescription],
) -> vk::PipelineVertexInputStateCreateInfo<'a> {
    vk::PipelineVertexInputStateCreateInfo::default()
        .vertex_binding_descriptions(bindings)
        .vertex_attribute_descriptions(attributes)
}

#[cfg(test)]
#[path = "vulkan_pipeline_state_tests.rs"]
mod tests;
