/*!
# Galaxy 3D RHI

Backend-agnostic render pass model for the Galaxy 3D rendering engine.

This crate describes what a graphics backend (Vulkan, OpenGL, Direct3D) must
build, without calling any GPU API itself:

- **Vocabularies**: `Format`, `ImageLayout`, load/store ops, and the
  `PipelineStageFlags` / `AccessFlags` / `DependencyFlags` flag sets
- **State objects**: `DepthStencilState`, `RasterisationState`,
  `ColourBlendStateAttachment`, `MultisampleState`, `VertexInputState`, ...
- **Descriptors**: `AttachmentDescription`, `AttachmentReference`,
  `SubpassDescription`, `SubpassDependency`, `RenderPassCreateInfo`
- **RenderSubpass**: a subpass description bundled with the pipeline state it
  needs on entry
- **GraphicsDevice**: backend factory trait; assembles a render pass from
  ordered subpasses and inserts a dependency at every state transition
- **RenderPass / FrameBuffer / TextureView**: backend resource traits

Backend crates implement the resource traits and translate the descriptors
1:1 into native objects.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod graphics_device;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine (logging facade)
    pub use crate::engine::Engine;

    // Graphics device factory trait
    pub use crate::graphics_device::GraphicsDevice;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Render sub-module with all render pass and pipeline state types
    pub mod render {
        pub use crate::graphics_device::*;
    }
}

