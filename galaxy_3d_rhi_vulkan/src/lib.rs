/*!
# Galaxy 3D RHI - Vulkan translation layer

Maps the backend-agnostic RHI descriptors onto Ash (`ash::vk`) structures.

Nothing here talks to a device: every function is a pure value mapping, so
the whole crate is testable without a GPU. A Vulkan device implementation
feeds the results straight into `vkCreateRenderPass` /
`vkCreateGraphicsPipelines`.

- `vulkan_format`: formats, layouts, load/store ops, samples, flag sets
- `vulkan_pipeline_state`: fixed-function pipeline state create infos
- `vulkan_render_pass`: `VulkanRenderPassCreateInfo`, which owns every
  native array a `vk::RenderPassCreateInfo` points to
*/

mod vulkan_format;
mod vulkan_pipeline_state;
mod vulkan_render_pass;

pub use vulkan_format::*;
pub use vulkan_pipeline_state::*;
pub use vulkan_render_pass::*;

/// Log source used by this backend
pub(crate) const LOG_SOURCE: &str = "galaxy3d::vulkan";

// Main galaxy3d namespace module
pub mod galaxy3d {
    pub use crate::vulkan_render_pass::VulkanRenderPassCreateInfo;
}
