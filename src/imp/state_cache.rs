// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Mirror of the backend's bound state.

Every call site that binds or sets backend state compares against this mirror first and
updates it right after emitting the call.  The device owns one cache for its lifetime and
lends it by `&mut` to the lifecycle functions and the executor.
*/

use std::collections::HashMap;

use crate::images::pipeline_state::{
    BlendState, ColorMask, DepthStencilState, PipelineStateId, RasterizerState,
};
use crate::images::render_pass::Rect;
use crate::images::vertex_layout::InputAssemblerId;
use crate::imp::formats::{blend_factor, blend_op, comparison_func, stencil_op};
use crate::imp::gl::{self, GLenum};
use crate::imp::{
    Backend, DeviceCaps, GlBuffer, GlFramebuffer, GlProgram, GlRenderbuffer, GlSampler,
    GlTexture, GlVertexArray,
};

#[derive(Debug)]
pub(crate) struct StateCache {
    pub gl_array_buffer: Option<GlBuffer>,
    pub gl_element_array_buffer: Option<GlBuffer>,
    pub gl_uniform_buffer: Option<GlBuffer>,
    pub gl_bind_ubos: Vec<Option<GlBuffer>>,
    pub gl_bind_ubo_offsets: Vec<u32>,
    pub gl_vao: Option<GlVertexArray>,
    /// Active unit, as an index from `TEXTURE0`.
    pub tex_unit: u32,
    pub gl_tex_units: Vec<Option<GlTexture>>,
    pub gl_sampler_units: Vec<Option<GlSampler>>,
    pub gl_renderbuffer: Option<GlRenderbuffer>,
    pub gl_framebuffer: Option<GlFramebuffer>,
    pub gl_read_framebuffer: Option<GlFramebuffer>,
    pub gl_program: Option<GlProgram>,
    pub gl_enabled_attrib_locs: Vec<bool>,
    pub gl_current_attrib_locs: Vec<bool>,
    pub viewport: Rect,
    pub scissor: Rect,
    pub rs: RasterizerState,
    pub dss: DepthStencilState,
    pub bs: BlendState,
    /// Sampler name to texture unit, kept across shader builds.
    pub tex_unit_cache: HashMap<String, u32>,

    // executor identity
    pub pipeline_state: Option<PipelineStateId>,
    pub gl_primitive: GLenum,
    pub input_assembler: Option<InputAssemblerId>,
    /// Rendering offscreen, where winding is flipped.
    pub reverse_cw: bool,
    pub invalidate_attachments: Vec<GLenum>,
}

impl StateCache {
    pub fn new(caps: &DeviceCaps) -> Self {
        StateCache {
            gl_array_buffer: None,
            gl_element_array_buffer: None,
            gl_uniform_buffer: None,
            gl_bind_ubos: vec![None; caps.max_uniform_buffer_bindings as usize],
            gl_bind_ubo_offsets: vec![0; caps.max_uniform_buffer_bindings as usize],
            gl_vao: None,
            tex_unit: 0,
            gl_tex_units: vec![None; caps.max_texture_units as usize],
            gl_sampler_units: vec![None; caps.max_texture_units as usize],
            gl_renderbuffer: None,
            gl_framebuffer: None,
            gl_read_framebuffer: None,
            gl_program: None,
            gl_enabled_attrib_locs: vec![false; caps.max_vertex_attributes as usize],
            gl_current_attrib_locs: vec![false; caps.max_vertex_attributes as usize],
            viewport: Rect::default(),
            scissor: Rect::default(),
            rs: RasterizerState::default(),
            dss: DepthStencilState::default(),
            bs: BlendState::default(),
            tex_unit_cache: HashMap::new(),
            pipeline_state: None,
            gl_primitive: gl::TRIANGLES,
            input_assembler: None,
            reverse_cw: false,
            invalidate_attachments: Vec::new(),
        }
    }

    /// Pushes the mirror's initial values so backend and cache agree from the start.
    pub fn apply_initial_state<B: Backend>(&self, backend: &mut B) {
        backend.active_texture(gl::TEXTURE0 + self.tex_unit);
        let Rect {
            x,
            y,
            width,
            height,
        } = self.viewport;
        backend.viewport(x, y, width, height);
        let Rect {
            x,
            y,
            width,
            height,
        } = self.scissor;
        backend.scissor(x, y, width, height);
        backend.enable(gl::SCISSOR_TEST);

        backend.enable(gl::CULL_FACE);
        backend.cull_face(gl::BACK);
        backend.front_face(if self.rs.is_front_face_ccw { gl::CCW } else { gl::CW });
        backend.polygon_offset(self.rs.depth_bias, self.rs.depth_bias_slop);

        backend.enable(gl::DEPTH_TEST);
        backend.depth_mask(self.dss.depth_write);
        backend.depth_func(comparison_func(self.dss.depth_func));

        for (face, state) in [
            (gl::FRONT, &self.dss.stencil_front),
            (gl::BACK, &self.dss.stencil_back),
        ] {
            backend.stencil_func_separate(
                face,
                comparison_func(state.func),
                state.reference as i32,
                state.read_mask,
            );
        }
        for (face, state) in [
            (gl::FRONT, &self.dss.stencil_front),
            (gl::BACK, &self.dss.stencil_back),
        ] {
            backend.stencil_op_separate(
                face,
                stencil_op(state.fail_op),
                stencil_op(state.z_fail_op),
                stencil_op(state.pass_op),
            );
        }
        backend.stencil_mask_separate(gl::FRONT, self.dss.stencil_front.write_mask);
        backend.stencil_mask_separate(gl::BACK, self.dss.stencil_back.write_mask);
        backend.disable(gl::STENCIL_TEST);

        backend.disable(gl::SAMPLE_ALPHA_TO_COVERAGE);
        backend.disable(gl::BLEND);
        let target = self.bs.target0();
        backend.blend_equation_separate(blend_op(target.blend_eq), blend_op(target.blend_alpha_eq));
        backend.blend_func_separate(
            blend_factor(target.blend_src),
            blend_factor(target.blend_dst),
            blend_factor(target.blend_src_alpha),
            blend_factor(target.blend_dst_alpha),
        );
        set_color_mask(backend, target.blend_color_mask);
        backend.blend_color(self.bs.blend_color);
    }

    /// Binds `buffer` to `target` unless it is already bound there.
    pub fn bind_buffer<B: Backend>(
        &mut self,
        backend: &mut B,
        target: GLenum,
        buffer: Option<GlBuffer>,
    ) {
        let slot = match target {
            gl::ARRAY_BUFFER => &mut self.gl_array_buffer,
            gl::ELEMENT_ARRAY_BUFFER => &mut self.gl_element_array_buffer,
            gl::UNIFORM_BUFFER => &mut self.gl_uniform_buffer,
            _ => return,
        };
        if *slot != buffer {
            backend.bind_buffer(target, buffer);
            *slot = buffer;
        }
    }

    /// Records that `target` was unbound behind the cache's back.
    pub fn bind_buffer_forget(&mut self, target: GLenum) {
        match target {
            gl::ARRAY_BUFFER => self.gl_array_buffer = None,
            gl::ELEMENT_ARRAY_BUFFER => self.gl_element_array_buffer = None,
            gl::UNIFORM_BUFFER => self.gl_uniform_buffer = None,
            _ => {}
        }
    }

    /// Vertex and index bindings are VAO state: leave any bound VAO before touching them.
    pub fn unbind_vao<B: Backend>(&mut self, backend: &mut B) {
        if self.gl_vao.is_some() {
            backend.bind_vertex_array(None);
            self.gl_vao = None;
        }
    }

    /// Binds `texture` on the active unit unless it is already bound there.
    pub fn bind_texture<B: Backend>(
        &mut self,
        backend: &mut B,
        target: GLenum,
        texture: Option<GlTexture>,
    ) {
        let unit = self.tex_unit as usize;
        if let Some(slot) = self.gl_tex_units.get_mut(unit) {
            if *slot != texture {
                backend.bind_texture(target, texture);
                *slot = texture;
            }
        }
    }

    pub fn bind_renderbuffer<B: Backend>(
        &mut self,
        backend: &mut B,
        renderbuffer: Option<GlRenderbuffer>,
    ) {
        if self.gl_renderbuffer != renderbuffer {
            backend.bind_renderbuffer(renderbuffer);
            self.gl_renderbuffer = renderbuffer;
        }
    }

    /// Binds `framebuffer` for drawing and reading.
    ///
    /// Offscreen targets are rendered upside down, so crossing between the default
    /// framebuffer and an offscreen one flips the front-face winding.
    pub fn bind_framebuffer<B: Backend>(
        &mut self,
        backend: &mut B,
        framebuffer: Option<GlFramebuffer>,
    ) {
        if self.gl_framebuffer == framebuffer {
            return;
        }
        backend.bind_framebuffer(gl::FRAMEBUFFER, framebuffer);
        self.gl_framebuffer = framebuffer;
        self.gl_read_framebuffer = framebuffer;
        let reverse_cw = framebuffer.is_some();
        if reverse_cw != self.reverse_cw {
            self.reverse_cw = reverse_cw;
            let ccw = !self.rs.is_front_face_ccw;
            backend.front_face(if ccw { gl::CCW } else { gl::CW });
            self.rs.is_front_face_ccw = ccw;
        }
    }

    pub fn color_mask(&self) -> ColorMask {
        self.bs.target0().blend_color_mask
    }

    pub fn set_color_mask_cached(&mut self, mask: ColorMask) {
        match self.bs.targets.first_mut() {
            Some(target) => target.blend_color_mask = mask,
            None => {
                let mut target = self.bs.target0();
                target.blend_color_mask = mask;
                self.bs.targets.push(target);
            }
        }
    }
}

pub(crate) fn set_color_mask<B: Backend>(backend: &mut B, mask: ColorMask) {
    backend.color_mask(
        mask.contains(ColorMask::R),
        mask.contains(ColorMask::G),
        mask.contains(ColorMask::B),
        mask.contains(ColorMask::A),
    );
}
