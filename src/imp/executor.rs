// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Command replay.

The executor walks a [`CommandPackage`] in recording order and turns each command into
backend calls, consulting the state cache before every call so that state already in
place is never set twice.
*/

use crate::bindings::buffer::DrawInfo;
use crate::images::commands::{BeginRenderPassCmd, BindStatesCmd, CmdType, CommandPackage};
use crate::images::device::Resources;
use crate::images::pipeline_state::{
    BlendState, ColorMask, CullMode, DepthStencilState, DynamicStateFlags, PipelineState, RasterizerState,
    StencilFace, StencilFaceState,
};
use crate::images::render_pass::{LoadOp, Rect};
use crate::images::shader::Shader;
use crate::images::vertex_layout::InputAssembler;
use crate::imp::formats::{
    backend_type_to_component_count, blend_factor, blend_op, comparison_func, stencil_op,
};
use crate::imp::gl::{self, GLenum};
use crate::imp::state_cache::{StateCache, set_color_mask};
use crate::imp::{Backend, GlBuffer, buffer, texture};
use crate::pixel_formats::Format;

/// Replays commands against one backend.
pub(crate) struct Executor<'a, B: Backend> {
    pub backend: &'a mut B,
    pub cache: &'a mut StateCache,
    pub resources: &'a mut Resources,
    pub use_vao: bool,
}

fn set_enabled<B: Backend>(backend: &mut B, cap: GLenum, enabled: bool) {
    if enabled {
        backend.enable(cap);
    } else {
        backend.disable(cap);
    }
}

impl<B: Backend> Executor<'_, B> {
    /// Replays `package` from the start.  Failed commands are logged and skipped.
    pub fn execute(&mut self, package: &CommandPackage) {
        let mut begin_render_pass = package.begin_render_pass_cmds.iter();
        let mut bind_states = package.bind_states_cmds.iter();
        let mut draws = package.draw_cmds.iter();
        let mut updates = package.update_buffer_cmds.iter();
        let mut copies = package.copy_buffer_to_texture_cmds.iter();

        for &cmd in &package.cmds {
            logwise::trace_sync!("execute {cmd}", cmd = logwise::privacy::LogIt(&cmd));
            match cmd {
                CmdType::BeginRenderPass => {
                    if let Some(c) = begin_render_pass.next() {
                        self.begin_render_pass(c);
                    }
                }
                // store ops have no backend equivalent
                CmdType::EndRenderPass => {}
                CmdType::BindStates => {
                    if let Some(c) = bind_states.next() {
                        self.bind_states(c);
                    }
                }
                CmdType::Draw => {
                    if let Some(c) = draws.next() {
                        self.draw(&c.draw_info);
                    }
                }
                CmdType::UpdateBuffer => {
                    let Some(c) = updates.next() else { continue };
                    let Some(target) = c.buffer.and_then(|id| self.resources.buffers.get_mut(id)) else {
                        logwise::warn_sync!("Update of a destroyed buffer skipped");
                        continue;
                    };
                    buffer::update(self.backend, self.cache, target, c.data.as_source(), c.offset, c.size);
                }
                CmdType::CopyBufferToTexture => {
                    let Some(c) = copies.next() else { continue };
                    let Some(target) = c.texture.and_then(|id| self.resources.textures.get(id)) else {
                        logwise::warn_sync!("Copy into a destroyed texture skipped");
                        continue;
                    };
                    let slices: Vec<&[u8]> = c.buffers.iter().map(Vec::as_slice).collect();
                    texture::copy_buffers_to_texture(self.backend, self.cache, &slices, target, &c.regions);
                }
            }
        }
    }

    pub fn begin_render_pass(&mut self, cmd: &BeginRenderPassCmd) {
        let render_pass = cmd.render_pass.and_then(|id| self.resources.render_passes.get(id));
        let framebuffer = cmd.framebuffer.and_then(|id| self.resources.framebuffers.get(id));
        let (Some(render_pass), Some(framebuffer)) = (render_pass, framebuffer) else {
            logwise::warn_sync!("Render pass begun with a destroyed render pass or framebuffer");
            return;
        };
        let backend = &mut *self.backend;
        let cache = &mut *self.cache;

        cache.bind_framebuffer(backend, framebuffer.gl_framebuffer);
        let offscreen = framebuffer.gl_framebuffer.is_some();

        let area = cmd.render_area;
        if cache.viewport != area {
            backend.viewport(area.x, area.y, area.width, area.height);
            cache.viewport = area;
        }
        if cache.scissor != area {
            backend.scissor(area.x, area.y, area.width, area.height);
            cache.scissor = area;
        }

        cache.invalidate_attachments.clear();
        let mut clears: GLenum = 0;
        let mut color_forced = false;
        let mut depth_forced = false;
        let mut stencil_forced = false;

        for (j, attachment) in render_pass.color_attachments().iter().enumerate() {
            if attachment.format == Format::Unknown {
                continue;
            }
            match attachment.load_op {
                LoadOp::Load => {}
                LoadOp::Clear => {
                    if cache.color_mask() != ColorMask::ALL && !color_forced {
                        backend.color_mask(true, true, true, true);
                        color_forced = true;
                    }
                    let color = cmd.clear_colors.get(j).copied().unwrap_or_default();
                    if offscreen {
                        backend.clear_buffer_fv(gl::COLOR, j as u32, color);
                    } else {
                        backend.clear_color(cmd.clear_colors.first().copied().unwrap_or_default());
                        clears |= gl::COLOR_BUFFER_BIT;
                    }
                }
                LoadOp::Discard => cache.invalidate_attachments.push(if offscreen {
                    gl::COLOR_ATTACHMENT0 + j as GLenum
                } else {
                    gl::COLOR
                }),
            }
        }

        if let Some(attachment) = render_pass.depth_stencil_attachment() {
            if attachment.format != Format::Unknown {
                match attachment.depth_load_op {
                    LoadOp::Load => {}
                    LoadOp::Clear => {
                        if !cache.dss.depth_write {
                            backend.depth_mask(true);
                            depth_forced = true;
                        }
                        backend.clear_depth(cmd.clear_depth);
                        clears |= gl::DEPTH_BUFFER_BIT;
                    }
                    LoadOp::Discard => cache.invalidate_attachments.push(if offscreen {
                        gl::DEPTH_ATTACHMENT
                    } else {
                        gl::DEPTH
                    }),
                }
                if attachment.format.info().has_stencil {
                    match attachment.stencil_load_op {
                        LoadOp::Load => {}
                        LoadOp::Clear => {
                            if cache.dss.stencil_front.write_mask == 0 {
                                backend.stencil_mask_separate(gl::FRONT, 0xffff);
                                stencil_forced = true;
                            }
                            if cache.dss.stencil_back.write_mask == 0 {
                                backend.stencil_mask_separate(gl::BACK, 0xffff);
                                stencil_forced = true;
                            }
                            backend.clear_stencil(cmd.clear_stencil);
                            clears |= gl::STENCIL_BUFFER_BIT;
                        }
                        LoadOp::Discard => cache.invalidate_attachments.push(if offscreen {
                            gl::STENCIL_ATTACHMENT
                        } else {
                            gl::STENCIL
                        }),
                    }
                }
            }
        }

        if !cache.invalidate_attachments.is_empty() {
            backend.invalidate_framebuffer(&cache.invalidate_attachments);
        }
        if clears != 0 {
            backend.clear(clears);
        }

        // put back every mask the clears forced on
        if color_forced {
            set_color_mask(backend, cache.color_mask());
        }
        if depth_forced {
            backend.depth_mask(false);
        }
        if stencil_forced {
            backend.stencil_mask_separate(gl::FRONT, cache.dss.stencil_front.write_mask);
            backend.stencil_mask_separate(gl::BACK, cache.dss.stencil_back.write_mask);
        }
    }

    pub fn bind_states(&mut self, cmd: &BindStatesCmd) {
        let Resources {
            buffers,
            textures,
            samplers,
            shaders,
            input_assemblers,
            descriptor_sets,
            pipeline_states,
            ..
        } = &mut *self.resources;
        let backend = &mut *self.backend;
        let cache = &mut *self.cache;

        let pipeline = cmd.pipeline_state.and_then(|id| pipeline_states.get(id).map(|p| (id, p)));
        let shader = pipeline.and_then(|(_, p)| shaders.get(p.shader()));
        let mut shader_changed = false;

        if let Some((id, pipeline)) = pipeline {
            if cache.pipeline_state != Some(id) {
                cache.pipeline_state = Some(id);
                cache.gl_primitive = pipeline.gl_primitive();
                if let Some(program) = shader.and_then(Shader::gl_program) {
                    if cache.gl_program != Some(program) {
                        backend.use_program(Some(program));
                        cache.gl_program = Some(program);
                        shader_changed = true;
                    }
                }
                apply_rasterizer_state(backend, cache, pipeline.rasterizer_state());
                apply_depth_stencil_state(backend, cache, pipeline.depth_stencil_state());
                apply_blend_state(backend, cache, pipeline.blend_state());
            }
        }

        // descriptor sets, every time: they change per draw while the pipeline stays
        if let (Some((_, pipeline)), Some(shader)) = (pipeline, shader) {
            let layout = pipeline.pipeline_layout();
            for block in shader.blocks() {
                let set = cmd
                    .descriptor_sets
                    .get(block.set as usize)
                    .copied()
                    .flatten()
                    .and_then(|id| descriptor_sets.get(id));
                let bound = set
                    .and_then(|s| s.slot(block.binding, 0))
                    .and_then(|d| d.buffer)
                    .and_then(|id| buffers.get(id));
                let Some(bound) = bound else {
                    logwise::error_sync!(
                        "Buffer binding '{name}' at set {set} binding {binding} is not bounded",
                        name = logwise::privacy::LogIt(&block.name),
                        set = block.set,
                        binding = block.binding
                    );
                    continue;
                };
                let mut offset = bound.gl_offset();
                let index = layout.dynamic_offset_index(block.set, block.binding);
                if index >= 0 {
                    offset += cmd.dynamic_offsets.get(index as usize).copied().unwrap_or(0);
                }
                let slot = block.gl_binding as usize;
                if slot >= cache.gl_bind_ubos.len() {
                    logwise::error_sync!(
                        "Uniform binding {slot} exceeds the device limit",
                        slot = block.gl_binding
                    );
                    continue;
                }
                if cache.gl_bind_ubos[slot] != bound.gl_buffer() || cache.gl_bind_ubo_offsets[slot] != offset {
                    backend.bind_buffer_range(
                        gl::UNIFORM_BUFFER,
                        block.gl_binding,
                        bound.gl_buffer(),
                        offset,
                        bound.size(),
                    );
                    cache.gl_uniform_buffer = bound.gl_buffer();
                    cache.gl_bind_ubos[slot] = bound.gl_buffer();
                    cache.gl_bind_ubo_offsets[slot] = offset;
                }
            }

            for sampler in shader.samplers() {
                let set = cmd
                    .descriptor_sets
                    .get(sampler.set as usize)
                    .copied()
                    .flatten()
                    .and_then(|id| descriptor_sets.get(id));
                for (l, &unit) in sampler.units.iter().enumerate() {
                    let descriptor = set.and_then(|s| s.slot(sampler.binding, l as u32));
                    let bound_texture = descriptor.and_then(|d| d.texture).and_then(|id| textures.get(id));
                    let bound_sampler = descriptor.and_then(|d| d.sampler).and_then(|id| samplers.get(id));
                    let (Some(bound_texture), Some(bound_sampler)) = (bound_texture, bound_sampler) else {
                        logwise::error_sync!(
                            "Sampler binding '{name}' at set {set} binding {binding} index {index} is not bounded",
                            name = logwise::privacy::LogIt(&sampler.name),
                            set = sampler.set,
                            binding = sampler.binding,
                            index = l
                        );
                        continue;
                    };
                    if bound_texture.size() == 0 || unit < 0 {
                        continue;
                    }
                    let unit = unit as u32;
                    let Some(&cached) = cache.gl_tex_units.get(unit as usize) else {
                        continue;
                    };
                    if cached != bound_texture.gl_texture() {
                        if cache.tex_unit != unit {
                            backend.active_texture(gl::TEXTURE0 + unit);
                            cache.tex_unit = unit;
                        }
                        backend.bind_texture(bound_texture.gl_target(), bound_texture.gl_texture());
                        cache.gl_tex_units[unit as usize] = bound_texture.gl_texture();
                    }
                    if cache.gl_sampler_units[unit as usize] != bound_sampler.gl_sampler() {
                        backend.bind_sampler(unit, bound_sampler.gl_sampler());
                        cache.gl_sampler_units[unit as usize] = bound_sampler.gl_sampler();
                    }
                }
            }
        }

        // vertex and index buffers
        if let (Some(ia_id), Some(shader)) = (cmd.input_assembler, shader) {
            if shader_changed || cache.input_assembler != Some(ia_id) {
                match input_assemblers.get_mut(ia_id) {
                    Some(assembler) => {
                        cache.input_assembler = Some(ia_id);
                        let index_buffer = assembler
                            .index_buffer()
                            .and_then(|id| buffers.get(id))
                            .and_then(|b| b.gl_buffer());
                        if self.use_vao {
                            bind_vertex_array(backend, cache, shader, assembler, index_buffer);
                        } else {
                            bind_attributes(backend, cache, shader, assembler, index_buffer);
                        }
                    }
                    None => {
                        logwise::warn_sync!(
                            "Bind of a destroyed input assembler {id}",
                            id = logwise::privacy::LogIt(&ia_id)
                        );
                    }
                }
            }
        }

        if let Some((_, pipeline)) = pipeline {
            apply_dynamic_states(backend, cache, pipeline, cmd);
        }
    }

    pub fn draw(&mut self, info: &DrawInfo) {
        let Some(ia_id) = self.cache.input_assembler else {
            return;
        };
        let Some(assembler) = self.resources.input_assemblers.get(ia_id) else {
            return;
        };
        let backend = &mut *self.backend;
        let cache = &mut *self.cache;

        // an update since the bind may have left the vertex array
        if self.use_vao {
            if let Some(vao) = cache.gl_program.and_then(|p| assembler.vao(p)) {
                if cache.gl_vao != Some(vao) {
                    backend.bind_vertex_array(Some(vao));
                    cache.gl_vao = Some(vao);
                }
            }
        }

        let index_buffer = assembler.index_buffer().and_then(|id| self.resources.buffers.get(id));
        let index = index_buffer.map(|b| (b.stride(), b.gl_offset(), assembler.gl_index_type()));
        let mode = cache.gl_primitive;

        match assembler.indirect_buffer().and_then(|id| self.resources.buffers.get(id)) {
            Some(indirect) => {
                for sub in indirect.indirects() {
                    dispatch_draw(backend, mode, index, sub);
                }
            }
            None => dispatch_draw(backend, mode, index, info),
        }
    }
}

/// Emits exactly one of the four draw shapes.
fn dispatch_draw<B: Backend>(
    backend: &mut B,
    mode: GLenum,
    index: Option<(u32, u32, GLenum)>,
    info: &DrawInfo,
) {
    let indexed = index.filter(|_| info.index_count > 0);
    match (indexed, info.instance_count) {
        (Some((stride, base, index_type)), 0) => {
            backend.draw_elements(mode, info.index_count, index_type, base + info.first_index * stride)
        }
        (Some((stride, base, index_type)), instances) => backend.draw_elements_instanced(
            mode,
            info.index_count,
            index_type,
            base + info.first_index * stride,
            instances,
        ),
        (None, 0) => backend.draw_arrays(mode, info.first_vertex, info.vertex_count),
        (None, instances) => {
            backend.draw_arrays_instanced(mode, info.first_vertex, info.vertex_count, instances)
        }
    }
}

fn apply_rasterizer_state<B: Backend>(backend: &mut B, cache: &mut StateCache, rs: &RasterizerState) {
    if cache.rs.cull_mode != rs.cull_mode {
        match rs.cull_mode {
            CullMode::None => backend.disable(gl::CULL_FACE),
            CullMode::Front => {
                backend.enable(gl::CULL_FACE);
                backend.cull_face(gl::FRONT);
            }
            CullMode::Back => {
                backend.enable(gl::CULL_FACE);
                backend.cull_face(gl::BACK);
            }
        }
        cache.rs.cull_mode = rs.cull_mode;
    }
    let ccw = rs.is_front_face_ccw != cache.reverse_cw;
    if cache.rs.is_front_face_ccw != ccw {
        backend.front_face(if ccw { gl::CCW } else { gl::CW });
        cache.rs.is_front_face_ccw = ccw;
    }
    if cache.rs.depth_bias != rs.depth_bias || cache.rs.depth_bias_slop != rs.depth_bias_slop {
        backend.polygon_offset(rs.depth_bias, rs.depth_bias_slop);
        cache.rs.depth_bias = rs.depth_bias;
        cache.rs.depth_bias_slop = rs.depth_bias_slop;
    }
    if cache.rs.line_width != rs.line_width {
        backend.line_width(rs.line_width);
        cache.rs.line_width = rs.line_width;
    }
}

fn apply_stencil_face<B: Backend>(
    backend: &mut B,
    face: GLenum,
    cached: &mut StencilFaceState,
    wanted: &StencilFaceState,
) {
    if cached.func != wanted.func
        || cached.reference != wanted.reference
        || cached.read_mask != wanted.read_mask
    {
        backend.stencil_func_separate(
            face,
            comparison_func(wanted.func),
            wanted.reference as i32,
            wanted.read_mask,
        );
        cached.func = wanted.func;
        cached.reference = wanted.reference;
        cached.read_mask = wanted.read_mask;
    }
    if cached.fail_op != wanted.fail_op
        || cached.z_fail_op != wanted.z_fail_op
        || cached.pass_op != wanted.pass_op
    {
        backend.stencil_op_separate(
            face,
            stencil_op(wanted.fail_op),
            stencil_op(wanted.z_fail_op),
            stencil_op(wanted.pass_op),
        );
        cached.fail_op = wanted.fail_op;
        cached.z_fail_op = wanted.z_fail_op;
        cached.pass_op = wanted.pass_op;
    }
    if cached.write_mask != wanted.write_mask {
        backend.stencil_mask_separate(face, wanted.write_mask);
        cached.write_mask = wanted.write_mask;
    }
}

fn apply_depth_stencil_state<B: Backend>(backend: &mut B, cache: &mut StateCache, dss: &DepthStencilState) {
    if cache.dss.depth_test != dss.depth_test {
        set_enabled(backend, gl::DEPTH_TEST, dss.depth_test);
        cache.dss.depth_test = dss.depth_test;
    }
    if cache.dss.depth_write != dss.depth_write {
        backend.depth_mask(dss.depth_write);
        cache.dss.depth_write = dss.depth_write;
    }
    if cache.dss.depth_func != dss.depth_func {
        backend.depth_func(comparison_func(dss.depth_func));
        cache.dss.depth_func = dss.depth_func;
    }
    if cache.dss.stencil_front.test != dss.stencil_front.test
        || cache.dss.stencil_back.test != dss.stencil_back.test
    {
        set_enabled(
            backend,
            gl::STENCIL_TEST,
            dss.stencil_front.test || dss.stencil_back.test,
        );
        cache.dss.stencil_front.test = dss.stencil_front.test;
        cache.dss.stencil_back.test = dss.stencil_back.test;
    }
    apply_stencil_face(backend, gl::FRONT, &mut cache.dss.stencil_front, &dss.stencil_front);
    apply_stencil_face(backend, gl::BACK, &mut cache.dss.stencil_back, &dss.stencil_back);
}

fn apply_blend_state<B: Backend>(backend: &mut B, cache: &mut StateCache, bs: &BlendState) {
    if cache.bs.is_a2c != bs.is_a2c {
        set_enabled(backend, gl::SAMPLE_ALPHA_TO_COVERAGE, bs.is_a2c);
        cache.bs.is_a2c = bs.is_a2c;
    }
    if cache.bs.blend_color != bs.blend_color {
        backend.blend_color(bs.blend_color);
        cache.bs.blend_color = bs.blend_color;
    }

    let wanted = bs.target0();
    let mut cached = cache.bs.target0();
    if cached.blend != wanted.blend {
        set_enabled(backend, gl::BLEND, wanted.blend);
        cached.blend = wanted.blend;
    }
    if cached.blend_eq != wanted.blend_eq || cached.blend_alpha_eq != wanted.blend_alpha_eq {
        backend.blend_equation_separate(blend_op(wanted.blend_eq), blend_op(wanted.blend_alpha_eq));
        cached.blend_eq = wanted.blend_eq;
        cached.blend_alpha_eq = wanted.blend_alpha_eq;
    }
    if cached.blend_src != wanted.blend_src
        || cached.blend_dst != wanted.blend_dst
        || cached.blend_src_alpha != wanted.blend_src_alpha
        || cached.blend_dst_alpha != wanted.blend_dst_alpha
    {
        backend.blend_func_separate(
            blend_factor(wanted.blend_src),
            blend_factor(wanted.blend_dst),
            blend_factor(wanted.blend_src_alpha),
            blend_factor(wanted.blend_dst_alpha),
        );
        cached.blend_src = wanted.blend_src;
        cached.blend_dst = wanted.blend_dst;
        cached.blend_src_alpha = wanted.blend_src_alpha;
        cached.blend_dst_alpha = wanted.blend_dst_alpha;
    }
    if cached.blend_color_mask != wanted.blend_color_mask {
        set_color_mask(backend, wanted.blend_color_mask);
        cached.blend_color_mask = wanted.blend_color_mask;
    }
    match cache.bs.targets.first_mut() {
        Some(target) => *target = cached,
        None => cache.bs.targets.push(cached),
    }
}

/// Points every shader input at its attribute.  `enable` runs once per location before
/// the pointer is set.
fn for_each_location<B: Backend>(
    backend: &mut B,
    cache: &mut StateCache,
    shader: &Shader,
    assembler: &InputAssembler,
    mut enable: impl FnMut(&mut B, &mut StateCache, u32),
) {
    for input in shader.inputs() {
        let Some(attrib) = assembler.gl_attribs().iter().find(|a| a.name == input.name) else {
            continue;
        };
        if cache.gl_array_buffer != attrib.gl_buffer {
            backend.bind_buffer(gl::ARRAY_BUFFER, attrib.gl_buffer);
            cache.gl_array_buffer = attrib.gl_buffer;
        }
        for c in 0..backend_type_to_component_count(input.gl_type) {
            let location = input.gl_loc + c;
            enable(&mut *backend, &mut *cache, location);
            if let Some(current) = cache.gl_current_attrib_locs.get_mut(location as usize) {
                *current = true;
            }
            backend.vertex_attrib_pointer(
                location,
                attrib.count,
                attrib.gl_type,
                attrib.is_normalized,
                attrib.stride,
                attrib.offset + attrib.size * c,
            );
            backend.vertex_attrib_divisor(location, u32::from(attrib.is_instanced));
        }
    }
}

fn bind_vertex_array<B: Backend>(
    backend: &mut B,
    cache: &mut StateCache,
    shader: &Shader,
    assembler: &mut InputAssembler,
    index_buffer: Option<GlBuffer>,
) {
    let Some(program) = shader.gl_program() else {
        return;
    };
    let vao = match assembler.vao(program) {
        Some(vao) => vao,
        None => {
            let Some(vao) = backend.create_vertex_array() else {
                logwise::error_sync!("The backend could not allocate a vertex array");
                return;
            };
            assembler.realized.vaos.insert(program, vao);

            backend.bind_vertex_array(Some(vao));
            cache.gl_vao = Some(vao);
            backend.bind_buffer(gl::ARRAY_BUFFER, None);
            backend.bind_buffer(gl::ELEMENT_ARRAY_BUFFER, None);
            cache.gl_array_buffer = None;
            cache.gl_element_array_buffer = None;

            for_each_location(backend, cache, shader, assembler, |backend, _, location| {
                backend.enable_vertex_attrib_array(location);
            });
            if index_buffer.is_some() {
                backend.bind_buffer(gl::ELEMENT_ARRAY_BUFFER, index_buffer);
            }

            backend.bind_vertex_array(None);
            cache.gl_vao = None;
            backend.bind_buffer(gl::ARRAY_BUFFER, None);
            backend.bind_buffer(gl::ELEMENT_ARRAY_BUFFER, None);
            cache.gl_array_buffer = None;
            cache.gl_element_array_buffer = None;
            vao
        }
    };
    if cache.gl_vao != Some(vao) {
        backend.bind_vertex_array(Some(vao));
        cache.gl_vao = Some(vao);
    }
}

fn bind_attributes<B: Backend>(
    backend: &mut B,
    cache: &mut StateCache,
    shader: &Shader,
    assembler: &InputAssembler,
    index_buffer: Option<GlBuffer>,
) {
    cache.gl_current_attrib_locs.fill(false);
    for_each_location(backend, cache, shader, assembler, |backend, cache, location| {
        if let Some(enabled) = cache.gl_enabled_attrib_locs.get_mut(location as usize) {
            if !*enabled {
                backend.enable_vertex_attrib_array(location);
                *enabled = true;
            }
        }
    });
    if index_buffer.is_some() {
        cache.bind_buffer(backend, gl::ELEMENT_ARRAY_BUFFER, index_buffer);
    }
    for location in 0..cache.gl_enabled_attrib_locs.len() {
        if cache.gl_enabled_attrib_locs[location] && !cache.gl_current_attrib_locs[location] {
            backend.disable_vertex_attrib_array(location as u32);
            cache.gl_enabled_attrib_locs[location] = false;
        }
    }
}

fn apply_viewport<B: Backend>(backend: &mut B, cached: &mut Rect, wanted: Rect, scissor: bool) {
    if *cached != wanted {
        if scissor {
            backend.scissor(wanted.x, wanted.y, wanted.width, wanted.height);
        } else {
            backend.viewport(wanted.x, wanted.y, wanted.width, wanted.height);
        }
        *cached = wanted;
    }
}

fn apply_dynamic_states<B: Backend>(
    backend: &mut B,
    cache: &mut StateCache,
    pipeline: &PipelineState,
    cmd: &BindStatesCmd,
) {
    let flags = pipeline.dynamic_states();
    if flags.contains(DynamicStateFlags::VIEWPORT) {
        if let Some(viewport) = cmd.viewport {
            apply_viewport(backend, &mut cache.viewport, viewport, false);
        }
    }
    if flags.contains(DynamicStateFlags::SCISSOR) {
        if let Some(scissor) = cmd.scissor {
            apply_viewport(backend, &mut cache.scissor, scissor, true);
        }
    }
    if flags.contains(DynamicStateFlags::LINE_WIDTH) {
        if let Some(width) = cmd.line_width {
            if cache.rs.line_width != width {
                backend.line_width(width);
                cache.rs.line_width = width;
            }
        }
    }
    if flags.contains(DynamicStateFlags::DEPTH_BIAS) {
        if let Some(bias) = cmd.depth_bias {
            if cache.rs.depth_bias != bias.constant || cache.rs.depth_bias_slop != bias.slope {
                backend.polygon_offset(bias.constant, bias.slope);
                cache.rs.depth_bias = bias.constant;
                cache.rs.depth_bias_slop = bias.slope;
            }
        }
    }
    if flags.contains(DynamicStateFlags::BLEND_CONSTANTS) {
        if let Some(constants) = cmd.blend_constants {
            if cache.bs.blend_color != constants {
                backend.blend_color(constants);
                cache.bs.blend_color = constants;
            }
        }
    }
    if flags.contains(DynamicStateFlags::STENCIL_WRITE_MASK) {
        if let Some(mask) = cmd.stencil_write_mask {
            let (front, back) = (&mut cache.dss.stencil_front, &mut cache.dss.stencil_back);
            match mask.face {
                StencilFace::Front => {
                    if front.write_mask != mask.write_mask {
                        backend.stencil_mask_separate(gl::FRONT, mask.write_mask);
                        front.write_mask = mask.write_mask;
                    }
                }
                StencilFace::Back => {
                    if back.write_mask != mask.write_mask {
                        backend.stencil_mask_separate(gl::BACK, mask.write_mask);
                        back.write_mask = mask.write_mask;
                    }
                }
                StencilFace::All => {
                    if front.write_mask != mask.write_mask || back.write_mask != mask.write_mask {
                        backend.stencil_mask(mask.write_mask);
                        front.write_mask = mask.write_mask;
                        back.write_mask = mask.write_mask;
                    }
                }
            }
        }
    }
    if flags.contains(DynamicStateFlags::STENCIL_COMPARE_MASK) {
        if let Some(mask) = cmd.stencil_compare_mask {
            let reference = mask.reference as u32;
            let (front, back) = (&mut cache.dss.stencil_front, &mut cache.dss.stencil_back);
            let differs = |face: &StencilFaceState| {
                face.reference != reference || face.read_mask != mask.compare_mask
            };
            match mask.face {
                StencilFace::Front => {
                    if differs(front) {
                        backend.stencil_func_separate(
                            gl::FRONT,
                            comparison_func(front.func),
                            mask.reference,
                            mask.compare_mask,
                        );
                        front.reference = reference;
                        front.read_mask = mask.compare_mask;
                    }
                }
                StencilFace::Back => {
                    if differs(back) {
                        backend.stencil_func_separate(
                            gl::BACK,
                            comparison_func(back.func),
                            mask.reference,
                            mask.compare_mask,
                        );
                        back.reference = reference;
                        back.read_mask = mask.compare_mask;
                    }
                }
                StencilFace::All => {
                    if differs(front) || differs(back) {
                        backend.stencil_func(comparison_func(back.func), mask.reference, mask.compare_mask);
                        front.reference = reference;
                        front.read_mask = mask.compare_mask;
                        back.reference = reference;
                        back.read_mask = mask.compare_mask;
                    }
                }
            }
        }
    }
}
