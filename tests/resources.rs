// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Resource creation, update and destruction as seen by the backend.

use state_and_commands::bindings::{
    BufferInfo, BufferSource, BufferUsage, BufferViewInfo, DrawInfo, MemoryUsage, TextureFlags,
    TextureInfo,
};
use state_and_commands::images::shader::{ShaderStage, ShaderStageFlag, Type, UniformSampler};
use state_and_commands::images::{
    Attribute, Device, DeviceConfig, InputAssemblerInfo, PipelineStateInfo, ShaderInfo,
};
use state_and_commands::imp::gl;
use state_and_commands::imp::recording::{GlCall, ProgramReflection, RecordingBackend};
use state_and_commands::pixel_formats::Format;

fn device() -> Device<RecordingBackend> {
    let mut device = Device::new(RecordingBackend::new(), DeviceConfig::default());
    device.backend_mut().clear_calls();
    device
}

fn stages(fragment: &str) -> Vec<ShaderStage> {
    vec![
        ShaderStage {
            stage: ShaderStageFlag::Vertex,
            source: "void main() { gl_Position = vec4(0.0); }".to_owned(),
        },
        ShaderStage {
            stage: ShaderStageFlag::Fragment,
            source: fragment.to_owned(),
        },
    ]
}

fn sampler(name: &str, binding: u32) -> UniformSampler {
    UniformSampler {
        set: 0,
        binding,
        name: name.to_owned(),
        ty: Type::Sampler2D,
        count: 1,
    }
}

#[test]
fn vertex_usage_wins_the_target() {
    let mut device = device();
    let id = device.create_buffer(BufferInfo {
        usage: BufferUsage::VERTEX | BufferUsage::TRANSFER_DST,
        mem_usage: MemoryUsage::DEVICE,
        size: 36,
        stride: 12,
    });
    let buffer = device.buffer(id).and_then(|b| b.gl_buffer());
    assert!(buffer.is_some());
    assert_eq!(device.buffer(id).map(|b| b.gl_target()), Some(gl::ARRAY_BUFFER));
    assert_eq!(
        device.backend().calls(),
        &[
            GlCall::CreateBuffer(buffer.unwrap()),
            GlCall::BindBuffer {
                target: gl::ARRAY_BUFFER,
                buffer
            },
            GlCall::BufferData {
                target: gl::ARRAY_BUFFER,
                size: 36,
                usage: gl::STATIC_DRAW
            },
            GlCall::BindBuffer {
                target: gl::ARRAY_BUFFER,
                buffer: None
            },
        ]
    );
}

#[test]
fn host_uniform_buffer_is_dynamic_and_updates_in_place() {
    let mut device = device();
    let id = device.create_buffer(BufferInfo {
        usage: BufferUsage::UNIFORM,
        mem_usage: MemoryUsage::HOST,
        size: 256,
        stride: 256,
    });
    assert!(device.backend().calls().contains(&GlCall::BufferData {
        target: gl::UNIFORM_BUFFER,
        size: 256,
        usage: gl::DYNAMIC_DRAW
    }));

    device.backend_mut().clear_calls();
    device.update_buffer(id, BufferSource::Bytes(&[7u8; 16]), 0, 16);
    let buffer = device.buffer(id).and_then(|b| b.gl_buffer());
    assert_eq!(
        device.backend().calls(),
        &[
            GlCall::BindBuffer {
                target: gl::UNIFORM_BUFFER,
                buffer
            },
            GlCall::BufferSubData {
                target: gl::UNIFORM_BUFFER,
                offset: 0,
                data: vec![7u8; 16]
            },
        ]
    );
}

#[test]
fn empty_uniform_buffer_gets_a_name_but_no_storage() {
    let mut device = device();
    device.create_buffer(BufferInfo {
        usage: BufferUsage::UNIFORM,
        mem_usage: MemoryUsage::DEVICE,
        size: 0,
        stride: 0,
    });
    let calls = device.backend().calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls[0], GlCall::CreateBuffer(_)));
}

#[test]
fn views_share_storage_at_an_offset() {
    let mut device = device();
    let parent = device.create_buffer(BufferInfo {
        usage: BufferUsage::UNIFORM,
        mem_usage: MemoryUsage::HOST,
        size: 512,
        stride: 512,
    });
    let view = device.create_buffer_view(BufferViewInfo {
        buffer: parent,
        offset: 256,
        range: 256,
    });
    let view = view.and_then(|v| device.buffer(v));
    assert_eq!(view.map(|v| v.gl_offset()), Some(256));
    assert_eq!(view.map(|v| v.size()), Some(256));
    assert_eq!(
        view.and_then(|v| v.gl_buffer()),
        device.buffer(parent).and_then(|p| p.gl_buffer())
    );
}

#[test]
fn texture_mips_halve_down_to_one() {
    let mut device = device();
    device.create_texture(TextureInfo {
        format: Format::RGBA8,
        width: 8,
        height: 8,
        mip_level: 4,
        ..Default::default()
    });
    let images: Vec<(u32, u32, u32)> = device
        .backend()
        .calls()
        .iter()
        .filter_map(|c| match *c {
            GlCall::TexImage2D {
                level,
                width,
                height,
                internal_format,
                format,
                gl_type,
                ..
            } => {
                assert_eq!(
                    (internal_format, format, gl_type),
                    (gl::RGBA8, gl::RGBA, gl::UNSIGNED_BYTE)
                );
                Some((level, width, height))
            }
            _ => None,
        })
        .collect();
    assert_eq!(images, vec![(0, 8, 8), (1, 4, 4), (2, 2, 2), (3, 1, 1)]);
}

#[test]
fn generated_mipmaps_follow_uploads() {
    let mut device = device();
    let texture = device.create_texture(TextureInfo {
        width: 2,
        height: 2,
        mip_level: 2,
        flags: TextureFlags::GEN_MIPMAP,
        ..Default::default()
    });
    device.backend_mut().clear_calls();
    device.copy_buffers_to_texture(
        &[&[0u8; 16]],
        texture,
        &[state_and_commands::bindings::BufferTextureCopy {
            tex_offset: (0, 0),
            tex_extent: (2, 2),
            tex_subres: Default::default(),
        }],
    );
    let calls = device.backend().calls();
    assert!(calls.iter().any(|c| matches!(c, GlCall::TexSubImage2D { len: 16, .. })));
    assert_eq!(calls.last(), Some(&GlCall::GenerateMipmap(gl::TEXTURE_2D)));
}

#[test]
fn indirect_updates_splice_at_the_offset() {
    let mut device = device();
    let id = device.create_buffer(BufferInfo {
        usage: BufferUsage::INDIRECT,
        mem_usage: MemoryUsage::HOST,
        size: 0,
        stride: 0,
    });
    assert!(device.backend().calls().is_empty());

    let draw = |vertex_count| DrawInfo {
        vertex_count,
        ..Default::default()
    };
    device.update_buffer(id, BufferSource::Indirect(&[draw(3), draw(6), draw(9)]), 0, 0);

    let mut package = device.create_command_package();
    package.update_buffer(id, BufferSource::Indirect(&[draw(12)]), 1, 0);
    // past the end appends
    package.update_buffer(id, BufferSource::Indirect(&[draw(15)]), 7, 0);
    device.execute_commands(&package);

    let counts: Vec<u32> = device
        .buffer(id)
        .map(|b| b.indirects().iter().map(|d| d.vertex_count).collect())
        .unwrap_or_default();
    assert_eq!(counts, vec![3, 12, 15]);
}

#[test]
fn direct_updates_honor_the_offset() {
    let mut device = device();
    let vertices = device.create_buffer(BufferInfo {
        usage: BufferUsage::VERTEX,
        mem_usage: MemoryUsage::DEVICE,
        size: 36,
        stride: 12,
    });
    device.backend_mut().clear_calls();
    device.update_buffer(vertices, BufferSource::Bytes(&[1u8; 4]), 8, 4);
    assert_eq!(
        device.backend().calls().last(),
        Some(&GlCall::BufferSubData {
            target: gl::ARRAY_BUFFER,
            offset: 8,
            data: vec![1u8; 4]
        })
    );

    let indirect = device.create_buffer(BufferInfo {
        usage: BufferUsage::INDIRECT,
        mem_usage: MemoryUsage::HOST,
        size: 0,
        stride: 0,
    });
    let draw = |vertex_count| DrawInfo {
        vertex_count,
        ..Default::default()
    };
    device.update_buffer(indirect, BufferSource::Indirect(&[draw(3), draw(6), draw(9)]), 0, 0);
    device.update_buffer(indirect, BufferSource::Indirect(&[draw(4), draw(5)]), 1, 0);

    let counts: Vec<u32> = device
        .buffer(indirect)
        .map(|b| b.indirects().iter().map(|d| d.vertex_count).collect())
        .unwrap_or_default();
    assert_eq!(counts, vec![3, 4, 5]);
}

#[test]
fn indirect_draws_replay_every_entry() {
    let mut device = device();
    device
        .backend_mut()
        .push_reflection(ProgramReflection::new().attribute("a_position", gl::FLOAT_VEC2, 0));
    let shader = device.create_shader(ShaderInfo {
        name: "indirect".to_owned(),
        stages: stages("void main() {}"),
        ..Default::default()
    });
    let pipeline = device.create_pipeline_state(PipelineStateInfo::new(shader));
    let vertices = device.create_buffer(BufferInfo {
        usage: BufferUsage::VERTEX,
        mem_usage: MemoryUsage::DEVICE,
        size: 48,
        stride: 8,
    });
    let indirect = device.create_buffer(BufferInfo {
        usage: BufferUsage::INDIRECT,
        mem_usage: MemoryUsage::HOST,
        size: 0,
        stride: 0,
    });
    device.update_buffer(
        indirect,
        BufferSource::Indirect(&[
            DrawInfo {
                vertex_count: 3,
                ..Default::default()
            },
            DrawInfo {
                vertex_count: 3,
                first_vertex: 3,
                instance_count: 2,
                ..Default::default()
            },
        ]),
        0,
        0,
    );
    let assembler = device.create_input_assembler(InputAssemblerInfo {
        attributes: vec![Attribute::new("a_position", Format::RG32F)],
        vertex_buffers: vec![vertices],
        index_buffer: None,
        indirect_buffer: Some(indirect),
    });
    assert_eq!(device.input_assembler(assembler).map(|a| a.vertex_count()), Some(6));

    let mut package = device.create_command_package();
    package.bind_states(|cmd| {
        cmd.pipeline_state = Some(pipeline);
        cmd.input_assembler = Some(assembler);
    });
    package.draw(&DrawInfo::default());
    device.backend_mut().clear_calls();
    device.execute_commands(&package);

    let draws: Vec<&GlCall> = device.backend().calls().iter().filter(|c| c.is_draw()).collect();
    assert_eq!(
        draws,
        vec![
            &GlCall::DrawArrays {
                mode: gl::TRIANGLES,
                first: 0,
                count: 3
            },
            &GlCall::DrawArraysInstanced {
                mode: gl::TRIANGLES,
                first: 3,
                count: 3,
                instances: 2
            },
        ]
    );
}

#[test]
fn sampler_units_are_shared_by_name() {
    let mut device = device();
    device.backend_mut().push_reflection(
        ProgramReflection::new()
            .sampler("u_albedo")
            .sampler("u_normal"),
    );
    let first = device.create_shader(ShaderInfo {
        name: "lit".to_owned(),
        stages: stages("void main() {}"),
        samplers: vec![sampler("u_albedo", 0), sampler("u_normal", 1)],
        ..Default::default()
    });
    let units: Vec<Vec<i32>> = device
        .shader(first)
        .map(|s| s.samplers().iter().map(|s| s.units.clone()).collect())
        .unwrap_or_default();
    assert_eq!(units, vec![vec![0], vec![1]]);

    let uploads: Vec<Vec<i32>> = device
        .backend()
        .calls()
        .iter()
        .filter_map(|c| match c {
            GlCall::Uniform1iv { values, .. } => Some(values.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(uploads, vec![vec![0], vec![1]]);
    // the program is only current while its units are set
    assert_eq!(
        device.backend().calls().last(),
        Some(&GlCall::UseProgram(None))
    );

    device
        .backend_mut()
        .push_reflection(ProgramReflection::new().sampler("u_normal"));
    let second = device.create_shader(ShaderInfo {
        name: "normals".to_owned(),
        stages: stages("void main() {}"),
        samplers: vec![sampler("u_normal", 0)],
        ..Default::default()
    });
    let units: Vec<Vec<i32>> = device
        .shader(second)
        .map(|s| s.samplers().iter().map(|s| s.units.clone()).collect())
        .unwrap_or_default();
    assert_eq!(units, vec![vec![1]]);
}

#[test]
fn compile_failure_leaves_no_program() {
    let mut device = device();
    let shader = device.create_shader(ShaderInfo {
        name: "broken".to_owned(),
        stages: stages("#error unsupported\nvoid main() {}"),
        ..Default::default()
    });

    let shader = device.shader(shader);
    assert!(shader.is_some_and(|s| !s.is_linked() && s.gl_program().is_none()));
    let calls = device.backend().calls();
    assert!(!calls.iter().any(|c| matches!(c, GlCall::CreateProgram(_))));
    assert_eq!(
        calls.iter().filter(|c| matches!(c, GlCall::DeleteShader(_))).count(),
        2
    );
}

#[test]
fn link_failure_keeps_the_program() {
    let mut device = device();
    device
        .backend_mut()
        .push_reflection(ProgramReflection::new().link_failure("varying mismatch"));
    let shader = device.create_shader(ShaderInfo {
        name: "mismatched".to_owned(),
        stages: stages("void main() {}"),
        ..Default::default()
    });
    let shader = device.shader(shader);
    assert!(shader.is_some_and(|s| !s.is_linked() && s.gl_program().is_some()));
}

#[test]
fn stale_ids_are_ignored() {
    let mut device = device();
    let info = BufferInfo {
        usage: BufferUsage::VERTEX,
        mem_usage: MemoryUsage::DEVICE,
        size: 12,
        stride: 12,
    };
    let stale = device.create_buffer(info.clone());
    device.destroy_buffer(stale);
    let fresh = device.create_buffer(info);
    assert_ne!(stale, fresh);
    assert!(device.buffer(stale).is_none());
    assert!(device.buffer(fresh).is_some());

    device.backend_mut().clear_calls();
    device.update_buffer(stale, BufferSource::Bytes(&[0u8; 12]), 0, 12);
    device.resize_buffer(stale, 24);
    device.destroy_buffer(stale);
    assert!(device
        .create_buffer_view(BufferViewInfo {
            buffer: stale,
            offset: 0,
            range: 12,
        })
        .is_none());
    assert!(device.backend().calls().is_empty());
}

#[test]
fn destroying_a_buffer_releases_its_storage() {
    let mut device = device();
    let id = device.create_buffer(BufferInfo {
        usage: BufferUsage::INDEX,
        mem_usage: MemoryUsage::DEVICE,
        size: 6,
        stride: 2,
    });
    let handle = device.buffer(id).and_then(|b| b.gl_buffer());
    device.backend_mut().clear_calls();
    device.destroy_buffer(id);
    assert_eq!(
        device.backend().calls().last(),
        handle.map(GlCall::DeleteBuffer).as_ref()
    );
}
