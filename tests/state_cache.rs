// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Redundant state is never sent twice.

use state_and_commands::bindings::{
    BufferId, BufferInfo, BufferSource, BufferUsage, DescriptorSetId, DescriptorSetLayoutBinding,
    DescriptorSetLayoutInfo, DescriptorType, DrawInfo, MemoryUsage, PipelineLayout,
};
use state_and_commands::images::commands::CmdType;
use state_and_commands::images::shader::{ShaderStage, ShaderStageFlag, UniformBlock};
use state_and_commands::images::{
    Attribute, Device, DeviceConfig, InputAssemblerId, InputAssemblerInfo, PipelineStateId,
    PipelineStateInfo, ShaderId, ShaderInfo,
};
use state_and_commands::imp::gl;
use state_and_commands::imp::recording::{GlCall, ProgramReflection, RecordingBackend};
use state_and_commands::pixel_formats::Format;

fn layout() -> DescriptorSetLayoutInfo {
    DescriptorSetLayoutInfo {
        bindings: vec![DescriptorSetLayoutBinding {
            binding: 0,
            descriptor_type: DescriptorType::UniformBuffer,
            count: 1,
        }],
    }
}

fn shader(device: &mut Device<RecordingBackend>, name: &str, reflection: ProgramReflection) -> ShaderId {
    device.backend_mut().push_reflection(reflection);
    device.create_shader(ShaderInfo {
        name: name.to_owned(),
        stages: vec![
            ShaderStage {
                stage: ShaderStageFlag::Vertex,
                source: "in vec3 a_position;\nvoid main() { gl_Position = vec4(a_position, 1.0); }".to_owned(),
            },
            ShaderStage {
                stage: ShaderStageFlag::Fragment,
                source: "out highp vec4 o_color;\nvoid main() { o_color = vec4(1.0); }".to_owned(),
            },
        ],
        blocks: vec![UniformBlock {
            set: 0,
            binding: 0,
            name: "Locals".to_owned(),
            count: 1,
        }],
        samplers: vec![],
    })
}

fn pipeline(device: &mut Device<RecordingBackend>, shader: ShaderId) -> PipelineStateId {
    let mut info = PipelineStateInfo::new(shader);
    info.pipeline_layout = PipelineLayout::new(&[layout()]);
    device.create_pipeline_state(info)
}

struct Scene {
    device: Device<RecordingBackend>,
    pipeline: PipelineStateId,
    set: DescriptorSetId,
    assembler: InputAssemblerId,
    vertices: BufferId,
}

fn scene(config: DeviceConfig, index_buffer: bool) -> Scene {
    let mut device = Device::new(RecordingBackend::new(), config);
    let shader = shader(
        &mut device,
        "triangle",
        ProgramReflection::new()
            .attribute("a_position", gl::FLOAT_VEC3, 0)
            .block("Locals", 64),
    );
    let pipeline = pipeline(&mut device, shader);

    let locals = device.create_buffer(BufferInfo {
        usage: BufferUsage::UNIFORM,
        mem_usage: MemoryUsage::HOST,
        size: 64,
        stride: 64,
    });
    let set = device.create_descriptor_set(&layout());
    device.bind_descriptor_buffer(set, 0, 0, locals);

    let vertices = device.create_buffer(BufferInfo {
        usage: BufferUsage::VERTEX,
        mem_usage: MemoryUsage::DEVICE,
        size: 36,
        stride: 12,
    });
    let indices = index_buffer.then(|| {
        device.create_buffer(BufferInfo {
            usage: BufferUsage::INDEX,
            mem_usage: MemoryUsage::DEVICE,
            size: 12,
            stride: 2,
        })
    });
    let assembler = device.create_input_assembler(InputAssemblerInfo {
        attributes: vec![Attribute::new("a_position", Format::RGB32F)],
        vertex_buffers: vec![vertices],
        index_buffer: indices,
        indirect_buffer: None,
    });
    device.backend_mut().clear_calls();
    Scene {
        device,
        pipeline,
        set,
        assembler,
        vertices,
    }
}

fn bind_and_draw(scene: &mut Scene, pipeline: PipelineStateId, draw: DrawInfo) {
    let mut package = scene.device.create_command_package();
    let (set, assembler) = (scene.set, scene.assembler);
    package.bind_states(|cmd| {
        cmd.pipeline_state = Some(pipeline);
        cmd.input_assembler = Some(assembler);
        cmd.descriptor_sets.push(Some(set));
    });
    package.draw(&draw);
    scene.device.execute_commands(&package);
}

fn count(calls: &[GlCall], pred: impl Fn(&GlCall) -> bool) -> usize {
    calls.iter().filter(|c| pred(c)).count()
}

const TRIANGLE: DrawInfo = DrawInfo {
    vertex_count: 3,
    first_vertex: 0,
    index_count: 0,
    first_index: 0,
    vertex_offset: 0,
    instance_count: 0,
    first_instance: 0,
};

#[test]
fn first_bind_sets_everything() {
    let mut scene = scene(DeviceConfig::default(), false);
    let pipeline = scene.pipeline;
    bind_and_draw(&mut scene, pipeline, TRIANGLE);

    let calls = scene.device.backend().calls();
    assert_eq!(count(calls, |c| matches!(c, GlCall::UseProgram(Some(_)))), 1);
    assert_eq!(
        count(calls, |c| matches!(
            c,
            GlCall::BindBufferRange {
                target: gl::UNIFORM_BUFFER,
                index: 0,
                offset: 0,
                size: 64,
                ..
            }
        )),
        1
    );
    assert_eq!(count(calls, |c| matches!(c, GlCall::CreateVertexArray(_))), 1);
    assert_eq!(
        calls.last(),
        Some(&GlCall::DrawArrays {
            mode: gl::TRIANGLES,
            first: 0,
            count: 3
        })
    );
}

#[test]
fn rebinding_identical_state_emits_only_the_draw() {
    let mut scene = scene(DeviceConfig::default(), false);
    let pipeline = scene.pipeline;
    bind_and_draw(&mut scene, pipeline, TRIANGLE);
    scene.device.backend_mut().clear_calls();

    bind_and_draw(&mut scene, pipeline, TRIANGLE);
    assert_eq!(
        scene.device.backend().calls(),
        &[GlCall::DrawArrays {
            mode: gl::TRIANGLES,
            first: 0,
            count: 3
        }]
    );
}

#[test]
fn vertex_arrays_are_memoized_per_program() {
    let mut scene = scene(DeviceConfig::default(), false);
    let first = scene.pipeline;
    let other_shader = shader(
        &mut scene.device,
        "other",
        ProgramReflection::new()
            .attribute("a_position", gl::FLOAT_VEC3, 0)
            .block("Locals", 64),
    );
    let second = pipeline(&mut scene.device, other_shader);

    bind_and_draw(&mut scene, first, TRIANGLE);
    bind_and_draw(&mut scene, second, TRIANGLE);
    bind_and_draw(&mut scene, first, TRIANGLE);

    let calls = scene.device.backend().calls();
    assert_eq!(count(calls, |c| matches!(c, GlCall::CreateVertexArray(_))), 2);
    assert_eq!(count(calls, |c| c.is_draw()), 3);
    let assembler = scene.device.input_assembler(scene.assembler);
    assert_eq!(assembler.map(|a| a.vao_count()), Some(2));
}

#[test]
fn update_between_draws_rebinds_the_vertex_array() {
    let mut scene = scene(DeviceConfig::default(), false);
    let pipeline = scene.pipeline;
    bind_and_draw(&mut scene, pipeline, TRIANGLE);

    let vertices = scene.vertices;
    scene
        .device
        .update_buffer(vertices, BufferSource::Bytes(&[0u8; 36]), 0, 36);
    scene.device.backend_mut().clear_calls();

    bind_and_draw(&mut scene, pipeline, TRIANGLE);
    let calls = scene.device.backend().calls();
    assert_eq!(count(calls, |c| matches!(c, GlCall::BindVertexArray(Some(_)))), 1);
    assert!(calls.last().is_some_and(GlCall::is_draw));
}

#[test]
fn indexed_draws_offset_by_index_stride() {
    let mut scene = scene(DeviceConfig::default(), true);
    let pipeline = scene.pipeline;
    bind_and_draw(
        &mut scene,
        pipeline,
        DrawInfo {
            index_count: 3,
            first_index: 2,
            ..Default::default()
        },
    );
    assert_eq!(
        scene.device.backend().calls().last(),
        Some(&GlCall::DrawElements {
            mode: gl::TRIANGLES,
            count: 3,
            index_type: gl::UNSIGNED_SHORT,
            offset: 4
        })
    );

    bind_and_draw(
        &mut scene,
        pipeline,
        DrawInfo {
            index_count: 6,
            instance_count: 4,
            ..Default::default()
        },
    );
    assert_eq!(
        scene.device.backend().calls().last(),
        Some(&GlCall::DrawElementsInstanced {
            mode: gl::TRIANGLES,
            count: 6,
            index_type: gl::UNSIGNED_SHORT,
            offset: 0,
            instances: 4
        })
    );
}

#[test]
fn without_vertex_arrays_stale_locations_are_disabled() {
    let config = DeviceConfig {
        use_vao: false,
        ..Default::default()
    };
    let mut scene = scene(config, false);
    let first = scene.pipeline;
    bind_and_draw(&mut scene, first, TRIANGLE);
    {
        let calls = scene.device.backend().calls();
        assert!(calls.contains(&GlCall::EnableVertexAttribArray(0)));
        assert!(calls.contains(&GlCall::VertexAttribPointer {
            location: 0,
            size: 3,
            gl_type: gl::FLOAT,
            normalized: false,
            stride: 12,
            offset: 0
        }));
        assert_eq!(count(calls, |c| matches!(c, GlCall::CreateVertexArray(_))), 0);
    }

    let moved = shader(
        &mut scene.device,
        "moved",
        ProgramReflection::new()
            .attribute("a_position", gl::FLOAT_VEC3, 1)
            .block("Locals", 64),
    );
    let second = pipeline(&mut scene.device, moved);
    scene.device.backend_mut().clear_calls();
    bind_and_draw(&mut scene, second, TRIANGLE);

    let calls = scene.device.backend().calls();
    assert!(calls.contains(&GlCall::EnableVertexAttribArray(1)));
    assert!(calls.contains(&GlCall::DisableVertexAttribArray(0)));
}

#[test]
fn command_buffer_flushes_bindings_once() {
    let mut scene = scene(DeviceConfig::default(), false);
    let mut cb = scene.device.create_command_buffer();
    cb.begin();
    cb.bind_pipeline_state(scene.pipeline);
    cb.bind_descriptor_set(0, scene.set, &[]);
    cb.bind_input_assembler(scene.assembler);
    cb.draw(&TRIANGLE);
    cb.bind_pipeline_state(scene.pipeline);
    cb.draw(&TRIANGLE);
    cb.end();

    scene.device.submit(&[&cb]);
    let calls = scene.device.backend().calls();
    assert_eq!(count(calls, |c| matches!(c, GlCall::UseProgram(_))), 1);
    assert_eq!(count(calls, |c| c.is_draw()), 2);
}

#[test]
fn submitted_records_return_to_the_pools_on_begin() {
    let mut scene = scene(DeviceConfig::default(), false);
    let mut cb = scene.device.create_command_buffer();
    cb.begin();
    cb.bind_pipeline_state(scene.pipeline);
    cb.bind_descriptor_set(0, scene.set, &[]);
    cb.bind_input_assembler(scene.assembler);
    cb.draw(&TRIANGLE);
    cb.draw(&TRIANGLE);
    cb.end();

    scene.device.submit(&[&cb]);
    scene.device.submit(&[&cb]);
    let allocator = scene.device.allocator().clone();
    assert_eq!(allocator.free_count(CmdType::Draw), 0);
    assert_eq!(count(scene.device.backend().calls(), |c| c.is_draw()), 4);

    cb.begin();
    assert_eq!(allocator.free_count(CmdType::Draw), 2);
    assert_eq!(allocator.free_count(CmdType::BindStates), 1);
}

#[test]
fn destroying_the_shader_releases_its_vertex_arrays() {
    let mut scene = scene(DeviceConfig::default(), false);
    let pipeline = scene.pipeline;
    bind_and_draw(&mut scene, pipeline, TRIANGLE);
    let shader = scene.device.pipeline_state(pipeline).map(|p| p.shader());
    scene.device.backend_mut().clear_calls();

    if let Some(shader) = shader {
        scene.device.destroy_shader(shader);
    }
    let calls = scene.device.backend().calls();
    assert_eq!(count(calls, |c| matches!(c, GlCall::DeleteVertexArray(_))), 1);
    assert_eq!(count(calls, |c| matches!(c, GlCall::DeleteProgram(_))), 1);
    let assembler = scene.device.input_assembler(scene.assembler);
    assert_eq!(assembler.map(|a| a.vao_count()), Some(0));
}
