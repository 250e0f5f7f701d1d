// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Render pass begin: clears, discards and the masks clears depend on.

use state_and_commands::bindings::{SampleCount, TextureInfo};
use state_and_commands::images::pipeline_state::{ColorMask, StencilFaceState};
use state_and_commands::images::render_pass::{ColorAttachment, DepthStencilAttachment, LoadOp};
use state_and_commands::images::shader::{ShaderStage, ShaderStageFlag};
use state_and_commands::images::{
    Device, DeviceConfig, FramebufferId, FramebufferInfo, PipelineStateInfo, Rect, RenderPassId,
    RenderPassInfo, ShaderInfo,
};
use state_and_commands::imp::gl;
use state_and_commands::imp::recording::{GlCall, RecordingBackend};
use state_and_commands::pixel_formats::Format;

const AREA: Rect = Rect::new(0, 0, 64, 64);
const CLEAR_COLOR: [f32; 4] = [0.1, 0.2, 0.3, 1.0];

fn render_pass(device: &mut Device<RecordingBackend>, color: LoadOp, depth: LoadOp, stencil: LoadOp) -> RenderPassId {
    device.create_render_pass(RenderPassInfo {
        color_attachments: vec![ColorAttachment {
            format: Format::RGBA8,
            load_op: color,
            ..Default::default()
        }],
        depth_stencil_attachment: Some(DepthStencilAttachment {
            format: Format::D24S8,
            depth_load_op: depth,
            stencil_load_op: stencil,
            ..Default::default()
        }),
    })
}

fn onscreen(device: &mut Device<RecordingBackend>, pass: RenderPassId) -> FramebufferId {
    device.create_framebuffer(FramebufferInfo {
        render_pass: pass,
        color_textures: vec![],
        depth_stencil_texture: None,
    })
}

fn offscreen(device: &mut Device<RecordingBackend>, pass: RenderPassId) -> FramebufferId {
    let color = device.create_texture(TextureInfo {
        width: 64,
        height: 64,
        ..Default::default()
    });
    let depth = device.create_texture(TextureInfo {
        format: Format::D24S8,
        width: 64,
        height: 64,
        samples: SampleCount::X1,
        ..Default::default()
    });
    device.create_framebuffer(FramebufferInfo {
        render_pass: pass,
        color_textures: vec![Some(color)],
        depth_stencil_texture: Some(depth),
    })
}

fn begin(device: &mut Device<RecordingBackend>, pass: RenderPassId, framebuffer: FramebufferId) {
    device.backend_mut().clear_calls();
    let mut package = device.create_command_package();
    package.begin_render_pass(pass, framebuffer, AREA, &[CLEAR_COLOR], 1.0, 0);
    package.end_render_pass();
    device.execute_commands(&package);
}

fn invalidates(calls: &[GlCall]) -> Vec<&Vec<u32>> {
    calls
        .iter()
        .filter_map(|c| match c {
            GlCall::InvalidateFramebuffer(attachments) => Some(attachments),
            _ => None,
        })
        .collect()
}

#[test]
fn offscreen_discard_invalidates_in_one_call() {
    let mut device = Device::new(RecordingBackend::new(), DeviceConfig::default());
    let pass = render_pass(&mut device, LoadOp::Discard, LoadOp::Discard, LoadOp::Discard);
    let framebuffer = offscreen(&mut device, pass);
    begin(&mut device, pass, framebuffer);

    let calls = device.backend().calls();
    assert_eq!(
        invalidates(calls),
        vec![&vec![
            gl::COLOR_ATTACHMENT0,
            gl::DEPTH_ATTACHMENT,
            gl::STENCIL_ATTACHMENT
        ]]
    );
    assert!(!calls.iter().any(|c| matches!(c, GlCall::Clear(_))));
}

#[test]
fn onscreen_discard_names_default_buffers() {
    let mut device = Device::new(RecordingBackend::new(), DeviceConfig::default());
    let pass = render_pass(&mut device, LoadOp::Discard, LoadOp::Discard, LoadOp::Load);
    let framebuffer = onscreen(&mut device, pass);
    begin(&mut device, pass, framebuffer);

    assert_eq!(
        invalidates(device.backend().calls()),
        vec![&vec![gl::COLOR, gl::DEPTH]]
    );
}

#[test]
fn offscreen_color_clears_per_draw_buffer() {
    let mut device = Device::new(RecordingBackend::new(), DeviceConfig::default());
    let pass = render_pass(&mut device, LoadOp::Clear, LoadOp::Clear, LoadOp::Clear);
    let framebuffer = offscreen(&mut device, pass);
    begin(&mut device, pass, framebuffer);

    let calls = device.backend().calls();
    assert!(calls.contains(&GlCall::ClearBufferFv {
        buffer: gl::COLOR,
        draw_buffer: 0,
        values: CLEAR_COLOR
    }));
    assert!(calls.contains(&GlCall::ClearDepth(1.0)));
    assert!(calls.contains(&GlCall::ClearStencil(0)));
    assert!(calls.contains(&GlCall::Clear(gl::DEPTH_BUFFER_BIT | gl::STENCIL_BUFFER_BIT)));
    assert!(!calls.iter().any(|c| matches!(c, GlCall::ClearColor(_))));
}

#[test]
fn clears_force_masks_on_and_restore_them() {
    let mut device = Device::new(RecordingBackend::new(), DeviceConfig::default());
    let shader = device.create_shader(ShaderInfo {
        name: "masked".to_owned(),
        stages: vec![
            ShaderStage {
                stage: ShaderStageFlag::Vertex,
                source: "void main() {}".to_owned(),
            },
            ShaderStage {
                stage: ShaderStageFlag::Fragment,
                source: "void main() {}".to_owned(),
            },
        ],
        ..Default::default()
    });
    let mut info = PipelineStateInfo::new(shader);
    info.depth_stencil_state.depth_write = false;
    info.depth_stencil_state.stencil_front = StencilFaceState {
        write_mask: 0,
        ..Default::default()
    };
    info.depth_stencil_state.stencil_back = info.depth_stencil_state.stencil_front;
    info.blend_state.targets[0].blend_color_mask = ColorMask::R;
    let pipeline = device.create_pipeline_state(info);

    let mut package = device.create_command_package();
    package.bind_states(|cmd| cmd.pipeline_state = Some(pipeline));
    device.execute_commands(&package);

    let pass = render_pass(&mut device, LoadOp::Clear, LoadOp::Clear, LoadOp::Clear);
    let framebuffer = onscreen(&mut device, pass);
    begin(&mut device, pass, framebuffer);

    assert_eq!(
        device.backend().calls(),
        &[
            GlCall::Viewport {
                x: 0,
                y: 0,
                width: 64,
                height: 64
            },
            GlCall::Scissor {
                x: 0,
                y: 0,
                width: 64,
                height: 64
            },
            GlCall::ColorMask([true, true, true, true]),
            GlCall::ClearColor(CLEAR_COLOR),
            GlCall::DepthMask(true),
            GlCall::ClearDepth(1.0),
            GlCall::StencilMaskSeparate {
                face: gl::FRONT,
                mask: 0xffff
            },
            GlCall::StencilMaskSeparate {
                face: gl::BACK,
                mask: 0xffff
            },
            GlCall::ClearStencil(0),
            GlCall::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT | gl::STENCIL_BUFFER_BIT),
            GlCall::ColorMask([true, false, false, false]),
            GlCall::DepthMask(false),
            GlCall::StencilMaskSeparate {
                face: gl::FRONT,
                mask: 0
            },
            GlCall::StencilMaskSeparate {
                face: gl::BACK,
                mask: 0
            },
        ]
    );
}

#[test]
fn default_masks_are_not_touched() {
    let mut device = Device::new(RecordingBackend::new(), DeviceConfig::default());
    let pass = render_pass(&mut device, LoadOp::Clear, LoadOp::Clear, LoadOp::Clear);
    let framebuffer = onscreen(&mut device, pass);
    begin(&mut device, pass, framebuffer);

    let calls = device.backend().calls();
    assert!(!calls.iter().any(|c| matches!(
        c,
        GlCall::ColorMask(_) | GlCall::DepthMask(_) | GlCall::StencilMaskSeparate { .. }
    )));
    assert!(calls.contains(&GlCall::Clear(
        gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT | gl::STENCIL_BUFFER_BIT
    )));
}

#[test]
fn repeated_render_area_is_cached() {
    let mut device = Device::new(RecordingBackend::new(), DeviceConfig::default());
    let pass = render_pass(&mut device, LoadOp::Load, LoadOp::Load, LoadOp::Load);
    let framebuffer = onscreen(&mut device, pass);
    begin(&mut device, pass, framebuffer);
    assert_eq!(device.backend().calls().len(), 2);

    begin(&mut device, pass, framebuffer);
    assert!(device.backend().calls().is_empty());
}

#[test]
fn incomplete_framebuffer_is_still_created() {
    let mut device = Device::new(RecordingBackend::new(), DeviceConfig::default());
    device
        .backend_mut()
        .set_framebuffer_status(gl::FRAMEBUFFER_UNSUPPORTED);
    let pass = render_pass(&mut device, LoadOp::Load, LoadOp::Load, LoadOp::Load);
    let framebuffer = offscreen(&mut device, pass);

    let framebuffer = device.framebuffer(framebuffer);
    assert!(framebuffer.is_some_and(|f| f.gl_framebuffer().is_some()));
}
