/// Unit tests for graphics_device.rs
///
/// Covers dependency synthesis, device configuration, and the validation
/// gate in `create_render_pass_from_subpasses`.

use std::sync::{Arc, Mutex};
use serial_test::serial;
use crate::error::Error;
use crate::galaxy3d::Engine;
use crate::galaxy3d::log::{Logger, LogEntry, LogSeverity};
use crate::graphics_device::mock_graphics_device::MockGraphicsDevice;
use crate::graphics_device::{
    synthesize_render_pass, AccessFlags, AttachmentDescription, AttachmentLoadOp,
    AttachmentReference, AttachmentStoreOp, Config, DependencyFlags, Format, GraphicsDevice,
    ImageLayout, PipelineBindPoint, PipelineStageFlags, RenderSubpass, RenderSubpassState,
    SampleCount, SubpassDependency, EXTERNAL_SUBPASS,
};

// ============================================================================
// Helpers
// ============================================================================

fn colour_write() -> RenderSubpassState {
    RenderSubpassState::new(
        PipelineStageFlags::COLOUR_ATTACHMENT_OUTPUT,
        AccessFlags::COLOUR_ATTACHMENT_WRITE,
    )
}

fn shader_read() -> RenderSubpassState {
    RenderSubpassState::new(PipelineStageFlags::FRAGMENT_SHADER, AccessFlags::SHADER_READ)
}

fn top_of_pipe() -> RenderSubpassState {
    RenderSubpassState::new(PipelineStageFlags::TOP_OF_PIPE, AccessFlags::empty())
}

fn colour_attachments(count: u32) -> Vec<AttachmentDescription> {
    (0..count)
        .map(|index| AttachmentDescription {
            index,
            format: Format::R8G8B8A8_UNORM,
            samples: SampleCount::S1,
            load_op: AttachmentLoadOp::Clear,
            store_op: AttachmentStoreOp::Store,
            stencil_load_op: AttachmentLoadOp::DontCare,
            stencil_store_op: AttachmentStoreOp::DontCare,
            initial_layout: ImageLayout::Undefined,
            final_layout: ImageLayout::ShaderReadOnlyOptimal,
        })
        .collect()
}

fn subpass(state: RenderSubpassState, attachment: u32) -> RenderSubpass {
    RenderSubpass::with_colour(
        PipelineBindPoint::Graphics,
        state,
        vec![AttachmentReference::new(attachment, ImageLayout::ColourAttachmentOptimal)],
    )
}

fn edge(src: u32, dst: u32, from: RenderSubpassState, to: RenderSubpassState) -> SubpassDependency {
    SubpassDependency {
        src_subpass: src,
        dst_subpass: dst,
        src_stage_mask: from.pipeline_stage,
        dst_stage_mask: to.pipeline_stage,
        src_access_mask: from.access,
        dst_access_mask: to.access,
        dependency_flags: DependencyFlags::BY_REGION,
    }
}

// ============================================================================
// Synthesis Tests
// ============================================================================

#[test]
fn test_synthesis_no_transition_no_dependency() {
    let info = synthesize_render_pass(
        colour_attachments(1),
        vec![subpass(colour_write(), 0), subpass(colour_write(), 0), subpass(colour_write(), 0)],
        colour_write(),
        colour_write(),
    );

    assert_eq!(info.subpasses.len(), 3);
    assert!(info.dependencies.is_empty());
}

#[test]
fn test_synthesis_single_internal_transition() {
    let info = synthesize_render_pass(
        colour_attachments(2),
        vec![subpass(colour_write(), 0), subpass(shader_read(), 1)],
        colour_write(),
        shader_read(),
    );

    assert_eq!(info.dependencies, vec![edge(0, 1, colour_write(), shader_read())]);
}

#[test]
fn test_synthesis_external_edges_around_single_subpass() {
    let info = synthesize_render_pass(
        colour_attachments(1),
        vec![subpass(colour_write(), 0)],
        top_of_pipe(),
        shader_read(),
    );

    assert_eq!(info.dependencies, vec![
        edge(EXTERNAL_SUBPASS, 0, top_of_pipe(), colour_write()),
        edge(0, EXTERNAL_SUBPASS, colour_write(), shader_read()),
    ]);
}

#[test]
fn test_synthesis_full_chain() {
    let info = synthesize_render_pass(
        colour_attachments(2),
        vec![subpass(colour_write(), 0), subpass(shader_read(), 1), subpass(colour_write(), 0)],
        top_of_pipe(),
        top_of_pipe(),
    );

    assert_eq!(info.dependencies, vec![
        edge(EXTERNAL_SUBPASS, 0, top_of_pipe(), colour_write()),
        edge(0, 1, colour_write(), shader_read()),
        edge(1, 2, shader_read(), colour_write()),
        edge(2, EXTERNAL_SUBPASS, colour_write(), top_of_pipe()),
    ]);
    assert!(info.validate().is_ok());
}

#[test]
fn test_synthesis_superset_access_is_a_transition() {
    let read_write = RenderSubpassState::new(
        PipelineStageFlags::COLOUR_ATTACHMENT_OUTPUT,
        AccessFlags::COLOUR_ATTACHMENT_READ | AccessFlags::COLOUR_ATTACHMENT_WRITE,
    );
    let info = synthesize_render_pass(
        colour_attachments(1),
        vec![subpass(colour_write(), 0), subpass(read_write, 0)],
        colour_write(),
        read_write,
    );

    assert_eq!(info.dependencies, vec![edge(0, 1, colour_write(), read_write)]);
}

#[test]
fn test_synthesis_stage_change_alone_is_a_transition() {
    let late = RenderSubpassState::new(
        PipelineStageFlags::LATE_FRAGMENT_TESTS,
        AccessFlags::COLOUR_ATTACHMENT_WRITE,
    );
    let info = synthesize_render_pass(
        colour_attachments(1),
        vec![subpass(colour_write(), 0)],
        late,
        colour_write(),
    );

    assert_eq!(info.dependencies, vec![edge(EXTERNAL_SUBPASS, 0, late, colour_write())]);
}

#[test]
fn test_synthesis_every_edge_is_by_region() {
    let info = synthesize_render_pass(
        colour_attachments(2),
        vec![subpass(shader_read(), 1), subpass(colour_write(), 0), subpass(shader_read(), 1)],
        top_of_pipe(),
        colour_write(),
    );

    assert_eq!(info.dependencies.len(), 4);
    for dependency in &info.dependencies {
        assert_eq!(dependency.dependency_flags, DependencyFlags::BY_REGION);
    }
}

#[test]
fn test_synthesis_keeps_attachments_and_order() {
    let first = subpass(colour_write(), 1);
    let second = subpass(shader_read(), 0);
    let info = synthesize_render_pass(
        colour_attachments(2),
        vec![first.clone(), second.clone()],
        colour_write(),
        shader_read(),
    );

    assert_eq!(info.attachments, colour_attachments(2));
    assert_eq!(&info.subpasses[0], first.description());
    assert_eq!(&info.subpasses[1], second.description());
    assert!(info.flags.is_empty());
}

#[test]
fn test_synthesis_without_subpasses() {
    let same = synthesize_render_pass(Vec::new(), Vec::new(), top_of_pipe(), top_of_pipe());
    assert!(same.dependencies.is_empty());

    let different = synthesize_render_pass(Vec::new(), Vec::new(), top_of_pipe(), shader_read());
    assert_eq!(different.dependencies, vec![
        edge(EXTERNAL_SUBPASS, EXTERNAL_SUBPASS, top_of_pipe(), shader_read()),
    ]);
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.enable_validation, cfg!(debug_assertions));
    assert_eq!(config.app_name, "Galaxy3D Application");
    assert_eq!(config.app_version, (1, 0, 0));
}

// ============================================================================
// create_render_pass_from_subpasses Tests
// ============================================================================

#[test]
fn test_create_from_subpasses_passes_synthesized_info() {
    let device = MockGraphicsDevice::new();
    let render_pass = device.create_render_pass_from_subpasses(
        colour_attachments(2),
        vec![subpass(colour_write(), 0), subpass(shader_read(), 1)],
        top_of_pipe(),
        shader_read(),
    ).unwrap();

    assert_eq!(render_pass.subpass_count(), 2);
    assert_eq!(render_pass.dependencies().len(), 2);
    assert_eq!(device.render_pass_count(), 1);

    let created = device.created_render_passes.lock().unwrap();
    assert_eq!(created[0].dependencies, render_pass.dependencies());
}

#[test]
fn test_create_from_subpasses_validates_when_enabled() {
    let device = MockGraphicsDevice::with_validation(true);
    let result = device.create_render_pass_from_subpasses(
        colour_attachments(1),
        vec![subpass(colour_write(), 3)],
        colour_write(),
        colour_write(),
    );

    assert!(matches!(result, Err(Error::ContractViolation(_))));
    assert_eq!(device.render_pass_count(), 0);
}

#[test]
fn test_create_from_subpasses_skips_validation_when_disabled() {
    let device = MockGraphicsDevice::with_validation(false);
    let render_pass = device.create_render_pass_from_subpasses(
        Vec::new(),
        Vec::new(),
        top_of_pipe(),
        shader_read(),
    ).unwrap();

    assert_eq!(render_pass.subpass_count(), 0);
    assert_eq!(render_pass.dependencies()[0].src_subpass, EXTERNAL_SUBPASS);
    assert_eq!(render_pass.dependencies()[0].dst_subpass, EXTERNAL_SUBPASS);
}

#[test]
fn test_graphics_device_trait_object() {
    let device: Arc<dyn GraphicsDevice> = Arc::new(MockGraphicsDevice::new());
    assert!(device.config().enable_validation);
}

// ============================================================================
// Logging Tests
// ============================================================================

struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

#[test]
#[serial]
fn test_synthesis_logs_each_dependency() {
    Engine::reset_logger();
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(CaptureLogger { entries: Arc::clone(&entries) });

    synthesize_render_pass(
        colour_attachments(2),
        vec![subpass(colour_write(), 0), subpass(shader_read(), 1)],
        top_of_pipe(),
        shader_read(),
    );
    Engine::reset_logger();

    let entries = entries.lock().unwrap();
    let debug: Vec<&String> = entries
        .iter()
        .filter(|e| e.source == "galaxy3d::rhi::GraphicsDevice" && e.severity == LogSeverity::Debug)
        .map(|e| &e.message)
        .collect();

    assert!(debug.iter().any(|m| m.as_str()
        == "Subpass dependency EXTERNAL -> 0: [TOP_OF_PIPE] [NONE] -> [COLOUR_ATTACHMENT_OUTPUT] [COLOUR_ATTACHMENT_WRITE]"));
    assert!(debug.iter().any(|m| m.as_str()
        == "Subpass dependency 0 -> 1: [COLOUR_ATTACHMENT_OUTPUT] [COLOUR_ATTACHMENT_WRITE] -> [FRAGMENT_SHADER] [SHADER_READ]"));
    assert!(entries.iter().any(|e| e.severity == LogSeverity::Trace
        && e.message == "Synthesized 2 dependencies for 2 subpasses"));
}
