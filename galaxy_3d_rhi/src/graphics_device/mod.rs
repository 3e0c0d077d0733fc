/// Graphics device module - render pass model and pipeline state types

// Module declarations
pub mod graphics_device;
pub mod format;
pub mod flags;
pub mod pipeline;
pub mod render_pass;
pub mod render_subpass;
pub mod frame_buffer;

// Re-export everything from graphics_device.rs
pub use graphics_device::*;

// Re-export from other modules
pub use format::*;
pub use flags::*;
pub use pipeline::*;
pub use render_pass::*;
pub use render_subpass::*;
pub use frame_buffer::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
