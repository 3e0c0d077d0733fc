/// Strongly typed flag sets
///
/// Each set keeps the bit values of its Vulkan counterpart. Mixing sets
/// (e.g. OR-ing an `AccessFlags` into a `PipelineStageFlags`) does not
/// compile.

use bitflags::bitflags;

bitflags! {
    /// Logical GPU pipeline stages used as synchronization scopes
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PipelineStageFlags: u32 {
        const TOP_OF_PIPE = 0x0000_0001;
        const DRAW_INDIRECT = 0x0000_0002;
        const VERTEX_INPUT = 0x0000_0004;
        const VERTEX_SHADER = 0x0000_0008;
        const TESSELLATION_CONTROL_SHADER = 0x0000_0010;
        const TESSELLATION_EVALUATION_SHADER = 0x0000_0020;
        const GEOMETRY_SHADER = 0x0000_0040;
        const FRAGMENT_SHADER = 0x0000_0080;
        const EARLY_FRAGMENT_TESTS = 0x0000_0100;
        const LATE_FRAGMENT_TESTS = 0x0000_0200;
        const COLOUR_ATTACHMENT_OUTPUT = 0x0000_0400;
        const COMPUTE_SHADER = 0x0000_0800;
        const TRANSFER = 0x0000_1000;
        const BOTTOM_OF_PIPE = 0x0000_2000;
        const HOST = 0x0000_4000;
        const ALL_GRAPHICS = 0x0000_8000;
        const ALL_COMMANDS = 0x0001_0000;
    }
}

bitflags! {
    /// Kinds of memory access synchronized at a stage boundary
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AccessFlags: u32 {
        const INDIRECT_COMMAND_READ = 0x0000_0001;
        const INDEX_READ = 0x0000_0002;
        const VERTEX_ATTRIBUTE_READ = 0x0000_0004;
        const UNIFORM_READ = 0x0000_0008;
        const INPUT_ATTACHMENT_READ = 0x0000_0010;
        const SHADER_READ = 0x0000_0020;
        const SHADER_WRITE = 0x0000_0040;
        const COLOUR_ATTACHMENT_READ = 0x0000_0080;
        const COLOUR_ATTACHMENT_WRITE = 0x0000_0100;
        const DEPTH_STENCIL_ATTACHMENT_READ = 0x0000_0200;
        const DEPTH_STENCIL_ATTACHMENT_WRITE = 0x0000_0400;
        const TRANSFER_READ = 0x0000_0800;
        const TRANSFER_WRITE = 0x0000_1000;
        const HOST_READ = 0x0000_2000;
        const HOST_WRITE = 0x0000_4000;
        const MEMORY_READ = 0x0000_8000;
        const MEMORY_WRITE = 0x0001_0000;
    }
}

bitflags! {
    /// Subpass dependency modifiers
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DependencyFlags: u32 {
        /// Scope restricted to the same framebuffer region
        const BY_REGION = 0x0000_0001;
    }
}

bitflags! {
    /// Colour channels written by a blend attachment
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ColourComponentFlags: u32 {
        const R = 0x0000_0001;
        const G = 0x0000_0002;
        const B = 0x0000_0004;
        const A = 0x0000_0008;
        const RGBA = Self::R.bits() | Self::G.bits() | Self::B.bits() | Self::A.bits();
    }
}

bitflags! {
    /// Image aspects (colour, depth, stencil)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ImageAspectFlags: u32 {
        const COLOUR = 0x0000_0001;
        const DEPTH = 0x0000_0002;
        const STENCIL = 0x0000_0004;
        const METADATA = 0x0000_0008;
    }
}

bitflags! {
    /// Render pass creation flags, reserved for backend extensions
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RenderPassCreateFlags: u32 {
        const _ = !0;
    }
}

bitflags! {
    /// Subpass description flags, reserved for backend extensions
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SubpassDescriptionFlags: u32 {
        const _ = !0;
    }
}

/// Names of the flags set in `flags`, joined with `" | "`
///
/// Bits without a name are appended in hex. An empty set is reported as
/// `"NONE"`.
pub fn flag_names<F>(flags: F) -> String
where
    F: bitflags::Flags,
    F::Bits: std::fmt::LowerHex,
{
    let mut iter = flags.iter_names();
    let mut names: Vec<String> = iter.by_ref().map(|(name, _)| name.to_string()).collect();

    let remaining = iter.remaining();
    if !remaining.is_empty() {
        names.push(format!("0x{:x}", remaining.bits()));
    }

    if names.is_empty() {
        "NONE".to_string()
    } else {
        names.join(" | ")
    }
}

#[cfg(test)]
#[path = "flags_tests.rs"]
mod tests;
