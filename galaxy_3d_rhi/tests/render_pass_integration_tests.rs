//! Integration tests for building render passes through the public API
//!
//! Runs against the headless device: subpasses in, synthesized render pass
//! out, then frame buffers created from it.
//!
//! Run with: cargo test --test render_pass_integration_tests


use galaxy_3d_rhi::galaxy3d::render::{
    AccessFlags, AttachmentReference, DependencyFlags, Extent2D, Format, FrameBufferAttachment,
    GraphicsDevice, ImageLayout, PipelineBindPoint, PipelineStageFlags, RenderPass,
    RenderSubpass, RenderSubpassState, ATTACHMENT_UNUSED, EXTERNAL_SUBPASS,
};
use galaxy_3d_rhi::galaxy3d::Error;
use headless_test_utils::{colour_attachment, create_view, depth_attachment, get_test_device};
use std::sync::Arc;

fn colour_output() -> RenderSubpassState {
    RenderSubpassState::new(
        PipelineStageFlags::COLOUR_ATTACHMENT_OUTPUT,
        AccessFlags::COLOUR_ATTACHMENT_WRITE,
    )
}

fn fragment_read() -> RenderSubpassState {
    RenderSubpassState::new(PipelineStageFlags::FRAGMENT_SHADER, AccessFlags::SHADER_READ)
}

fn idle() -> RenderSubpassState {
    RenderSubpassState::new(PipelineStageFlags::TOP_OF_PIPE, AccessFlags::empty())
}

// ============================================================================
// THREE-SUBPASS WORKFLOW
// ============================================================================

/// Geometry -> lighting (reads the geometry output) -> overlay
fn three_subpass_render_pass() -> Arc<dyn RenderPass> {
    let device = get_test_device();

    let attachments = vec![
        colour_attachment(0, Format::R16G16B16A16_SFLOAT),
        colour_attachment(1, Format::B8G8R8A8_SRGB),
        depth_attachment(2),
    ];

    let geometry = RenderSubpass::with_colour_and_depth(
        PipelineBindPoint::Graphics,
        colour_output(),
        vec![AttachmentReference::new(0, ImageLayout::ColourAttachmentOptimal)],
        AttachmentReference::new(2, ImageLayout::DepthStencilAttachmentOptimal),
    );
    let lighting = RenderSubpass::new(
        PipelineBindPoint::Graphics,
        fragment_read(),
        vec![AttachmentReference::new(0, ImageLayout::ShaderReadOnlyOptimal)],
        vec![AttachmentReference::new(1, ImageLayout::ColourAttachmentOptimal)],
        Vec::new(),
        None,
        vec![2],
    ).unwrap();
    let overlay = RenderSubpass::with_colour(
        PipelineBindPoint::Graphics,
        colour_output(),
        vec![AttachmentReference::new(1, ImageLayout::ColourAttachmentOptimal)],
    );

    device
        .create_render_pass_from_subpasses(attachments, vec![geometry, lighting, overlay], idle(), idle())
        .unwrap()
}

#[test]
fn test_integration_three_subpass_dependencies() {
    let render_pass = three_subpass_render_pass();

    assert_eq!(render_pass.attachment_count(), 3);
    assert_eq!(render_pass.subpass_count(), 3);

    let edges: Vec<(u32, u32)> = render_pass
        .dependencies()
        .iter()
        .map(|d| (d.src_subpass, d.dst_subpass))
        .collect();
    assert_eq!(edges, vec![(EXTERNAL_SUBPASS, 0), (0, 1), (1, 2), (2, EXTERNAL_SUBPASS)]);

    let geometry_to_lighting = &render_pass.dependencies()[1];
    assert_eq!(geometry_to_lighting.src_stage_mask, PipelineStageFlags::COLOUR_ATTACHMENT_OUTPUT);
    assert_eq!(geometry_to_lighting.dst_stage_mask, PipelineStageFlags::FRAGMENT_SHADER);
    assert_eq!(geometry_to_lighting.src_access_mask, AccessFlags::COLOUR_ATTACHMENT_WRITE);
    assert_eq!(geometry_to_lighting.dst_access_mask, AccessFlags::SHADER_READ);

    assert!(render_pass
        .dependencies()
        .iter()
        .all(|d| d.dependency_flags == DependencyFlags::BY_REGION));
}

#[test]
fn test_integration_three_subpass_frame_buffer() {
    let render_pass = three_subpass_render_pass();
    let attaches: Vec<FrameBufferAttachment> = render_pass
        .attachments()
        .iter()
        .map(|description| FrameBufferAttachment::new(description, create_view(description, 1280, 720)))
        .collect();

    let frame_buffer = Arc::clone(&render_pass)
        .create_frame_buffer(Extent2D::new(1280, 720), attaches)
        .unwrap();

    assert_eq!(frame_buffer.dimensions(), Extent2D::new(1280, 720));
    assert_eq!(frame_buffer.attachments().len(), 3);
    assert!(Arc::ptr_eq(frame_buffer.render_pass(), &render_pass));
}

#[test]
fn test_integration_frame_buffer_outlives_caller_render_pass() {
    let render_pass = three_subpass_render_pass();
    let attaches: Vec<FrameBufferAttachment> = render_pass
        .attachments()
        .iter()
        .map(|description| FrameBufferAttachment::new(description, create_view(description, 64, 64)))
        .collect();

    let frame_buffer = render_pass.create_frame_buffer(Extent2D::new(64, 64), attaches).unwrap();

    assert_eq!(frame_buffer.render_pass().subpass_count(), 3);
    assert_eq!(frame_buffer.render_pass().dependencies().len(), 4);
}

#[test]
fn test_integration_frame_buffer_with_swapped_views_fails() {
    let render_pass = three_subpass_render_pass();
    let descriptions = render_pass.attachments();
    let attaches = vec![
        FrameBufferAttachment::with_index(0, create_view(&descriptions[1], 64, 64)),
        FrameBufferAttachment::with_index(1, create_view(&descriptions[0], 64, 64)),
        FrameBufferAttachment::new(&descriptions[2], create_view(&descriptions[2], 64, 64)),
    ];

    let result = Arc::clone(&render_pass).create_frame_buffer(Extent2D::new(64, 64), attaches);
    assert!(matches!(result, Err(Error::IncompatibleAttachments(_))));
}

// ============================================================================
// SINGLE-SUBPASS WORKFLOW
// ============================================================================

#[test]
fn test_integration_matching_states_need_no_dependency() {
    let device = get_test_device();
    let subpass = RenderSubpass::with_colour(
        PipelineBindPoint::Graphics,
        colour_output(),
        vec![AttachmentReference::new(0, ImageLayout::ColourAttachmentOptimal)],
    );

    let render_pass = device
        .create_render_pass_from_subpasses(
            vec![colour_attachment(0, Format::R8G8B8A8_UNORM)],
            vec![subpass],
            colour_output(),
            colour_output(),
        )
        .unwrap();

    assert!(render_pass.dependencies().is_empty());
}

#[test]
fn test_integration_unused_colour_slot() {
    let device = get_test_device();
    let subpass = RenderSubpass::with_colour(
        PipelineBindPoint::Graphics,
        colour_output(),
        vec![
            AttachmentReference::new(0, ImageLayout::ColourAttachmentOptimal),
            AttachmentReference::unused(),
        ],
    );

    let render_pass = device
        .create_render_pass_from_subpasses(
            vec![colour_attachment(0, Format::R8G8B8A8_UNORM)],
            vec![subpass],
            idle(),
            fragment_read(),
        )
        .unwrap();
    assert_eq!(render_pass.subpasses()[0].color_attachments()[1].attachment, ATTACHMENT_UNUSED);

    let description = render_pass.attachments()[0];
    let attaches = vec![FrameBufferAttachment::new(&description, create_view(&description, 32, 32))];
    assert!(render_pass.create_frame_buffer(Extent2D::new(32, 32), attaches).is_ok());
}

#[test]
fn test_integration_invalid_reference_is_rejected() {
    let device = get_test_device();
    let subpass = RenderSubpass::with_colour(
        PipelineBindPoint::Graphics,
        colour_output(),
        vec![AttachmentReference::new(4, ImageLayout::ColourAttachmentOptimal)],
    );

    let result = device.create_render_pass_from_subpasses(
        vec![colour_attachment(0, Format::R8G8B8A8_UNORM)],
        vec![subpass],
        idle(),
        idle(),
    );

    match result {
        Err(Error::ContractViolation(msg)) => assert!(msg.contains("attachment 4")),
        Err(other) => panic!("expected ContractViolation, got {:?}", other),
        Ok(_) => panic!("expected ContractViolation, got a render pass"),
    }
}

#[test]
fn test_integration_empty_render_pass_is_rejected() {
    let device = get_test_device();
    let result = device.create_render_pass_from_subpasses(Vec::new(), Vec::new(), idle(), fragment_read());
    assert!(matches!(result, Err(Error::ContractViolation(_))));
}
