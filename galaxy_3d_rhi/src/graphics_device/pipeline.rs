/// Graphics pipeline fixed-function state objects
///
/// Every state is a flat value type with a `Default` matching the usual
/// forward-rendering setup (depth test + write with `Less`, back-face
/// culling, counter-clockwise front faces, RGBA writes without blending).
/// Equality compares every field literally: two states that would behave
/// the same but differ in an unused field (e.g. the blend factors of a
/// disabled attachment) are not equal. Pipeline caches rely on this.

use crate::graphics_device::{ColourComponentFlags, Format, SampleCount};

// ===== INPUT ASSEMBLY ENUMS =====

/// Primitive topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTopology {
    PointList,
    LineList,
    LineStrip,
    TriangleList,
    TriangleStrip,
    TriangleFan,
    LineListWithAdjacency,
    LineStripWithAdjacency,
    TriangleListWithAdjacency,
    TriangleStripWithAdjacency,
    /// Tessellation patches (see `TessellationState`)
    PatchList,
}

/// Vertex input rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexInputRate {
    /// Data is per-vertex
    Vertex,
    /// Data is per-instance
    Instance,
}

// ===== RASTERISATION ENUMS =====

/// Face culling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CullMode {
    /// No culling
    None,
    /// Cull front faces
    Front,
    /// Cull back faces
    Back,
    /// Cull every polygon
    FrontAndBack,
}

/// Front face winding order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrontFace {
    /// Counter-clockwise vertices define front face
    CounterClockwise,
    /// Clockwise vertices define front face
    Clockwise,
}

/// Polygon rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolygonMode {
    /// Fill polygons
    Fill,
    /// Draw edges only (wireframe)
    Line,
    /// Draw vertices only
    Point,
}

// ===== DEPTH/STENCIL ENUMS =====

/// Comparison operator for depth and stencil tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// Never pass
    Never,
    /// Pass if value < reference
    Less,
    /// Pass if value == reference
    Equal,
    /// Pass if value <= reference
    LessOrEqual,
    /// Pass if value > reference
    Greater,
    /// Pass if value != reference
    NotEqual,
    /// Pass if value >= reference
    GreaterOrEqual,
    /// Always pass
    Always,
}

/// Stencil operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StencilOp {
    /// Keep current value
    Keep,
    /// Set to zero
    Zero,
    /// Replace with reference value
    Replace,
    /// Increment and clamp to max
    IncrementAndClamp,
    /// Decrement and clamp to zero
    DecrementAndClamp,
    /// Bitwise invert
    Invert,
    /// Increment and wrap around
    IncrementAndWrap,
    /// Decrement and wrap around
    DecrementAndWrap,
}

// ===== COLOUR BLEND ENUMS =====

/// Blend factor for colour blending equations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    Zero,
    One,
    SrcColour,
    OneMinusSrcColour,
    DstColour,
    OneMinusDstColour,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
    ConstantColour,
    OneMinusConstantColour,
    ConstantAlpha,
    OneMinusConstantAlpha,
    SrcAlphaSaturate,
    Src1Colour,
    OneMinusSrc1Colour,
    Src1Alpha,
    OneMinusSrc1Alpha,
}

/// Blend operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendOp {
    /// result = src * srcFactor + dst * dstFactor
    Add,
    /// result = src * srcFactor - dst * dstFactor
    Subtract,
    /// result = dst * dstFactor - src * srcFactor
    ReverseSubtract,
    /// result = min(src, dst)
    Min,
    /// result = max(src, dst)
    Max,
}

/// Framebuffer logic operation (replaces blending when enabled)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicOp {
    Clear,
    And,
    AndReverse,
    Copy,
    AndInverted,
    NoOp,
    Xor,
    Or,
    Nor,
    Equivalent,
    Invert,
    OrReverse,
    CopyInverted,
    OrInverted,
    Nand,
    Set,
}

// ===== VERTEX INPUT STATE =====

/// Vertex attribute description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexInputAttributeDescription {
    /// Attribute location in shader
    pub location: u32,
    /// Binding index
    pub binding: u32,
    /// Format of the attribute (data type and component count)
    pub format: Format,
    /// Offset in bytes from the start of the vertex
    pub offset: u32,
}

/// Vertex binding description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexInputBindingDescription {
    /// Binding index
    pub binding: u32,
    /// Stride in bytes between consecutive elements
    pub stride: u32,
    /// Input rate (per-vertex or per-instance)
    pub input_rate: VertexInputRate,
}

impl VertexInputBindingDescription {
    /// Per-vertex binding
    pub fn new(binding: u32, stride: u32) -> Self {
        Self { binding, stride, input_rate: VertexInputRate::Vertex }
    }
}

/// Vertex input layout
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct VertexInputState {
    /// Vertex bindings
    pub bindings: Vec<VertexInputBindingDescription>,
    /// Vertex attributes
    pub attributes: Vec<VertexInputAttributeDescription>,
}

impl VertexInputState {
    /// Total size of the vertex attributes fed by `binding`
    ///
    /// Block-compressed attribute formats are rejected.
    pub fn attributes_size(&self, binding: u32) -> crate::error::Result<u32> {
        let mut size = 0;
        for attribute in self.attributes.iter().filter(|a| a.binding == binding) {
            size += attribute.format.size()?;
        }
        Ok(size)
    }
}

// ===== INPUT ASSEMBLY STATE =====

/// Primitive assembly state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputAssemblyState {
    pub topology: PrimitiveTopology,
    pub primitive_restart_enable: bool,
}

impl Default for InputAssemblyState {
    fn default() -> Self {
        Self {
            topology: PrimitiveTopology::TriangleList,
            primitive_restart_enable: false,
        }
    }
}

// ===== TESSELLATION STATE =====

/// Tessellation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TessellationState {
    /// Control points per patch (0 when tessellation is unused)
    pub patch_control_points: u32,
}

// ===== RASTERISATION STATE =====

/// Rasterisation fixed-function state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterisationState {
    /// Clamp fragment depth instead of clipping
    pub depth_clamp_enable: bool,
    /// Discard primitives before rasterisation
    pub rasteriser_discard_enable: bool,
    /// Polygon rendering mode
    pub polygon_mode: PolygonMode,
    /// Face culling mode
    pub cull_mode: CullMode,
    /// Front face winding order
    pub front_face: FrontFace,
    /// Enable depth bias
    pub depth_bias_enable: bool,
    /// Constant depth offset
    pub depth_bias_constant_factor: f32,
    /// Maximum depth bias clamp
    pub depth_bias_clamp: f32,
    /// Slope-based depth offset
    pub depth_bias_slope_factor: f32,
    /// Rasterised line width
    pub line_width: f32,
}

impl Default for RasterisationState {
    fn default() -> Self {
        Self {
            depth_clamp_enable: false,
            rasteriser_discard_enable: false,
            polygon_mode: PolygonMode::Fill,
            cull_mode: CullMode::Back,
            front_face: FrontFace::CounterClockwise,
            depth_bias_enable: false,
            depth_bias_constant_factor: 0.0,
            depth_bias_clamp: 0.0,
            depth_bias_slope_factor: 0.0,
            line_width: 1.0,
        }
    }
}

// ===== DEPTH/STENCIL STATE =====

/// Stencil operation state (per-face)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StencilOpState {
    /// Action on stencil test fail
    pub fail_op: StencilOp,
    /// Action on stencil pass + depth pass
    pub pass_op: StencilOp,
    /// Action on stencil pass + depth fail
    pub depth_fail_op: StencilOp,
    /// Comparison operator
    pub compare_op: CompareOp,
    /// Bits of stencil buffer read for compare
    pub compare_mask: u32,
    /// Bits of stencil buffer written
    pub write_mask: u32,
    /// Reference value for compare/replace
    pub reference: u32,
}

impl Default for StencilOpState {
    fn default() -> Self {
        Self {
            fail_op: StencilOp::Keep,
            pass_op: StencilOp::Keep,
            depth_fail_op: StencilOp::Keep,
            compare_op: CompareOp::Always,
            compare_mask: 0xFFFF_FFFF,
            write_mask: 0xFFFF_FFFF,
            reference: 0,
        }
    }
}

/// Depth and stencil testing state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthStencilState {
    /// Enable depth testing
    pub depth_test_enable: bool,
    /// Enable writing to depth buffer
    pub depth_write_enable: bool,
    /// Depth comparison operator
    pub depth_compare_op: CompareOp,
    /// Enable depth bounds testing
    pub depth_bounds_test_enable: bool,
    /// Enable stencil testing
    pub stencil_test_enable: bool,
    /// Stencil operations for front faces
    pub front: StencilOpState,
    /// Stencil operations for back faces
    pub back: StencilOpState,
    /// Lower depth bound
    pub min_depth_bounds: f32,
    /// Upper depth bound
    pub max_depth_bounds: f32,
}

impl Default for DepthStencilState {
    fn default() -> Self {
        Self {
            depth_test_enable: true,
            depth_write_enable: true,
            depth_compare_op: CompareOp::Less,
            depth_bounds_test_enable: false,
            stencil_test_enable: false,
            front: StencilOpState::default(),
            back: StencilOpState::default(),
            min_depth_bounds: 0.0,
            max_depth_bounds: 1.0,
        }
    }
}

impl DepthStencilState {
    pub fn is_depth_test_enabled(&self) -> bool {
        self.depth_test_enable
    }

    pub fn is_depth_write_enabled(&self) -> bool {
        self.depth_write_enable
    }

    pub fn depth_compare_op(&self) -> CompareOp {
        self.depth_compare_op
    }

    pub fn is_depth_bounds_test_enabled(&self) -> bool {
        self.depth_bounds_test_enable
    }

    pub fn is_stencil_test_enabled(&self) -> bool {
        self.stencil_test_enable
    }
}

// ===== COLOUR BLEND STATE =====

/// Blending for one colour attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColourBlendStateAttachment {
    /// Enable blending
    pub blend_enable: bool,
    /// Source colour blend factor
    pub src_colour_blend_factor: BlendFactor,
    /// Destination colour blend factor
    pub dst_colour_blend_factor: BlendFactor,
    /// Colour blend operation
    pub colour_blend_op: BlendOp,
    /// Source alpha blend factor
    pub src_alpha_blend_factor: BlendFactor,
    /// Destination alpha blend factor
    pub dst_alpha_blend_factor: BlendFactor,
    /// Alpha blend operation
    pub alpha_blend_op: BlendOp,
    /// Channels written
    pub colour_write_mask: ColourComponentFlags,
}

impl Default for ColourBlendStateAttachment {
    fn default() -> Self {
        Self {
            blend_enable: false,
            src_colour_blend_factor: BlendFactor::One,
            dst_colour_blend_factor: BlendFactor::Zero,
            colour_blend_op: BlendOp::Add,
            src_alpha_blend_factor: BlendFactor::One,
            dst_alpha_blend_factor: BlendFactor::Zero,
            alpha_blend_op: BlendOp::Add,
            colour_write_mask: ColourComponentFlags::RGBA,
        }
    }
}

impl ColourBlendStateAttachment {
    /// Classic "over" alpha blending (src_alpha, 1 - src_alpha)
    pub fn alpha_blending() -> Self {
        Self {
            blend_enable: true,
            src_colour_blend_factor: BlendFactor::SrcAlpha,
            dst_colour_blend_factor: BlendFactor::OneMinusSrcAlpha,
            colour_blend_op: BlendOp::Add,
            src_alpha_blend_factor: BlendFactor::One,
            dst_alpha_blend_factor: BlendFactor::OneMinusSrcAlpha,
            alpha_blend_op: BlendOp::Add,
            colour_write_mask: ColourComponentFlags::RGBA,
        }
    }
}

/// Colour blending state for all attachments of a subpass
#[derive(Debug, Clone, PartialEq)]
pub struct ColourBlendState {
    /// Use `logic_op` instead of blending
    pub logic_op_enable: bool,
    pub logic_op: LogicOp,
    /// One entry per colour attachment
    pub attachments: Vec<ColourBlendStateAttachment>,
    /// RGBA constant used by the constant blend factors
    pub blend_constants: [f32; 4],
}

impl Default for ColourBlendState {
    fn default() -> Self {
        Self {
            logic_op_enable: false,
            logic_op: LogicOp::Copy,
            attachments: Vec::new(),
            blend_constants: [0.0; 4],
        }
    }
}

impl ColourBlendState {
    /// Default state with a single default attachment
    pub fn create_default() -> Self {
        Self {
            attachments: vec![ColourBlendStateAttachment::default()],
            ..Self::default()
        }
    }
}

// ===== MULTISAMPLE STATE =====

/// Multisampling state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultisampleState {
    /// Number of samples per pixel
    pub rasterisation_samples: SampleCount,
    /// Enable per-sample shading
    pub sample_shading_enable: bool,
    /// Minimum fraction of samples shaded individually
    pub min_sample_shading: f32,
    /// Coverage mask for samples 0..32 (0 = all samples)
    ///
    /// A non-zero mask cannot be combined with more than 32 samples.
    pub sample_mask: u32,
    /// Enable alpha-to-coverage
    pub alpha_to_coverage_enable: bool,
    /// Force alpha to one after coverage
    pub alpha_to_one_enable: bool,
}

impl Default for MultisampleState {
    fn default() -> Self {
        Self {
            rasterisation_samples: SampleCount::S1,
            sample_shading_enable: false,
            min_sample_shading: 1.0,
            sample_mask: 0,
            alpha_to_coverage_enable: false,
            alpha_to_one_enable: false,
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
