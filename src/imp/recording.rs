// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
A backend that executes nothing and records every state-changing call.

Queries are answered from a small in-memory model: object names are handed out from a
counter, shaders compile unless their source contains `#error`, and program
introspection replays whatever [`ProgramReflection`] was queued before the link.

```
use state_and_commands::imp::recording::{GlCall, RecordingBackend};
use state_and_commands::imp::{gl, Backend};

let mut backend = RecordingBackend::new();
let buffer = backend.create_buffer();
backend.bind_buffer(gl::ARRAY_BUFFER, buffer);
assert!(matches!(backend.calls().last(), Some(GlCall::BindBuffer { target: gl::ARRAY_BUFFER, .. })));
```
*/

use std::collections::{HashMap, VecDeque};
use std::num::NonZeroU32;

use crate::imp::gl::{self, GLenum};
use crate::imp::{
    ActiveAttribute, Backend, DeviceCaps, GlBuffer, GlFramebuffer, GlProgram, GlRenderbuffer,
    GlSampler, GlShader, GlTexture, GlUniformLocation, GlVertexArray,
};

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    CreateBuffer(GlBuffer),
    DeleteBuffer(GlBuffer),
    BindBuffer { target: GLenum, buffer: Option<GlBuffer> },
    BufferData { target: GLenum, size: u32, usage: GLenum },
    BufferSubData { target: GLenum, offset: u32, data: Vec<u8> },
    BindBufferRange { target: GLenum, index: u32, buffer: Option<GlBuffer>, offset: u32, size: u32 },

    CreateVertexArray(GlVertexArray),
    DeleteVertexArray(GlVertexArray),
    BindVertexArray(Option<GlVertexArray>),
    EnableVertexAttribArray(u32),
    DisableVertexAttribArray(u32),
    VertexAttribPointer { location: u32, size: u32, gl_type: GLenum, normalized: bool, stride: u32, offset: u32 },
    VertexAttribDivisor { location: u32, divisor: u32 },

    CreateTexture(GlTexture),
    DeleteTexture(GlTexture),
    ActiveTexture(GLenum),
    BindTexture { target: GLenum, texture: Option<GlTexture> },
    TexImage2D { target: GLenum, level: u32, internal_format: GLenum, width: u32, height: u32, format: GLenum, gl_type: GLenum },
    CompressedTexImage2D { target: GLenum, level: u32, internal_format: GLenum, width: u32, height: u32, len: usize },
    TexSubImage2D { target: GLenum, level: u32, x: u32, y: u32, width: u32, height: u32, format: GLenum, gl_type: GLenum, len: usize },
    CompressedTexSubImage2D { target: GLenum, level: u32, x: u32, y: u32, width: u32, height: u32, format: GLenum, len: usize },
    GenerateMipmap(GLenum),

    CreateRenderbuffer(GlRenderbuffer),
    DeleteRenderbuffer(GlRenderbuffer),
    BindRenderbuffer(Option<GlRenderbuffer>),
    RenderbufferStorageMultisample { samples: u32, internal_format: GLenum, width: u32, height: u32 },

    CreateSampler(GlSampler),
    DeleteSampler(GlSampler),
    SamplerParameterI { sampler: GlSampler, pname: GLenum, param: i32 },
    SamplerParameterF { sampler: GlSampler, pname: GLenum, param: f32 },
    BindSampler { unit: u32, sampler: Option<GlSampler> },

    CreateFramebuffer(GlFramebuffer),
    DeleteFramebuffer(GlFramebuffer),
    BindFramebuffer { target: GLenum, framebuffer: Option<GlFramebuffer> },
    FramebufferTexture2D { attachment: GLenum, tex_target: GLenum, texture: Option<GlTexture>, level: u32 },
    FramebufferRenderbuffer { attachment: GLenum, renderbuffer: Option<GlRenderbuffer> },
    DrawBuffers(Vec<GLenum>),
    InvalidateFramebuffer(Vec<GLenum>),
    BlitFramebuffer { src: [i32; 4], dst: [i32; 4], mask: GLenum, filter: GLenum },

    CreateShader { shader: GlShader, stage: GLenum },
    DeleteShader(GlShader),
    ShaderSource { shader: GlShader, source: String },
    CompileShader(GlShader),
    CreateProgram(GlProgram),
    DeleteProgram(GlProgram),
    AttachShader { program: GlProgram, shader: GlShader },
    DetachShader { program: GlProgram, shader: GlShader },
    LinkProgram(GlProgram),
    UniformBlockBinding { program: GlProgram, index: u32, binding: u32 },
    UseProgram(Option<GlProgram>),
    Uniform1iv { location: GlUniformLocation, values: Vec<i32> },

    Enable(GLenum),
    Disable(GLenum),
    Viewport { x: i32, y: i32, width: u32, height: u32 },
    Scissor { x: i32, y: i32, width: u32, height: u32 },
    CullFace(GLenum),
    FrontFace(GLenum),
    PolygonOffset { factor: f32, units: f32 },
    LineWidth(f32),
    DepthMask(bool),
    DepthFunc(GLenum),
    StencilFunc { func: GLenum, reference: i32, mask: u32 },
    StencilFuncSeparate { face: GLenum, func: GLenum, reference: i32, mask: u32 },
    StencilOpSeparate { face: GLenum, fail: GLenum, zfail: GLenum, zpass: GLenum },
    StencilMask(u32),
    StencilMaskSeparate { face: GLenum, mask: u32 },
    BlendColor([f32; 4]),
    BlendEquationSeparate { rgb: GLenum, alpha: GLenum },
    BlendFuncSeparate { src_rgb: GLenum, dst_rgb: GLenum, src_alpha: GLenum, dst_alpha: GLenum },
    ColorMask([bool; 4]),

    ClearColor([f32; 4]),
    ClearDepth(f32),
    ClearStencil(i32),
    Clear(GLenum),
    ClearBufferFv { buffer: GLenum, draw_buffer: u32, values: [f32; 4] },

    DrawArrays { mode: GLenum, first: u32, count: u32 },
    DrawArraysInstanced { mode: GLenum, first: u32, count: u32, instances: u32 },
    DrawElements { mode: GLenum, count: u32, index_type: GLenum, offset: u32 },
    DrawElementsInstanced { mode: GLenum, count: u32, index_type: GLenum, offset: u32, instances: u32 },
}

impl GlCall {
    /// Whether this is one of the four draw calls.
    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            GlCall::DrawArrays { .. }
                | GlCall::DrawArraysInstanced { .. }
                | GlCall::DrawElements { .. }
                | GlCall::DrawElementsInstanced { .. }
        )
    }
}

/// What introspection reports for the next program linked.
#[derive(Debug, Clone, Default)]
pub struct ProgramReflection {
    attributes: Vec<ActiveAttribute>,
    locations: Vec<i32>,
    blocks: Vec<(String, u32)>,
    samplers: Vec<String>,
    link_failure: Option<String>,
}

impl ProgramReflection {
    pub fn new() -> Self {
        Self::default()
    }
    /// An active attribute at `location`.
    pub fn attribute(mut self, name: &str, gl_type: GLenum, location: i32) -> Self {
        self.attributes.push(ActiveAttribute {
            name: name.to_owned(),
            size: 1,
            gl_type,
        });
        self.locations.push(location);
        self
    }
    /// An active uniform block of `size` bytes.
    pub fn block(mut self, name: &str, size: u32) -> Self {
        self.blocks.push((name.to_owned(), size));
        self
    }
    /// A sampler uniform the program actually uses.
    pub fn sampler(mut self, name: &str) -> Self {
        self.samplers.push(name.to_owned());
        self
    }
    /// Makes the link fail with `log`.
    pub fn link_failure(mut self, log: &str) -> Self {
        self.link_failure = Some(log.to_owned());
        self
    }
}

#[derive(Debug)]
struct ShaderObject {
    source: String,
    compiled: bool,
}

#[derive(Debug)]
struct ProgramObject {
    linked: bool,
    reflection: ProgramReflection,
    /// Sampler name per handed-out uniform location.
    uniforms: HashMap<String, GlUniformLocation>,
}

/// The headless backend.
#[derive(Debug)]
pub struct RecordingBackend {
    caps: DeviceCaps,
    next_name: u32,
    calls: Vec<GlCall>,
    shaders: HashMap<GlShader, ShaderObject>,
    programs: HashMap<GlProgram, ProgramObject>,
    pending_reflections: VecDeque<ProgramReflection>,
    framebuffer_status: GLenum,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::with_caps(DeviceCaps::default())
    }

    pub fn with_caps(caps: DeviceCaps) -> Self {
        RecordingBackend {
            caps,
            next_name: 1,
            calls: Vec::new(),
            shaders: HashMap::new(),
            programs: HashMap::new(),
            pending_reflections: VecDeque::new(),
            framebuffer_status: gl::FRAMEBUFFER_COMPLETE,
        }
    }

    pub fn calls(&self) -> &[GlCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<GlCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Queues introspection results for the next `link_program`.  Programs linked with
    /// nothing queued report no attributes, blocks or samplers.
    pub fn push_reflection(&mut self, reflection: ProgramReflection) {
        self.pending_reflections.push_back(reflection);
    }

    /// What `check_framebuffer_status` answers from now on.
    pub fn set_framebuffer_status(&mut self, status: GLenum) {
        self.framebuffer_status = status;
    }

    fn name(&mut self) -> Option<NonZeroU32> {
        let name = NonZeroU32::new(self.next_name)?;
        self.next_name = self.next_name.checked_add(1)?;
        Some(name)
    }

    fn record(&mut self, call: GlCall) {
        self.calls.push(call);
    }

    fn reflection(&self, program: GlProgram) -> Option<&ProgramReflection> {
        self.programs.get(&program).map(|p| &p.reflection)
    }
}

impl Backend for RecordingBackend {
    fn capabilities(&self) -> DeviceCaps {
        self.caps
    }

    fn create_buffer(&mut self) -> Option<GlBuffer> {
        let buffer = GlBuffer::from_raw(self.name()?);
        self.record(GlCall::CreateBuffer(buffer));
        Some(buffer)
    }
    fn delete_buffer(&mut self, buffer: GlBuffer) {
        self.record(GlCall::DeleteBuffer(buffer));
    }
    fn bind_buffer(&mut self, target: GLenum, buffer: Option<GlBuffer>) {
        self.record(GlCall::BindBuffer { target, buffer });
    }
    fn buffer_data_size(&mut self, target: GLenum, size: u32, usage: GLenum) {
        self.record(GlCall::BufferData { target, size, usage });
    }
    fn buffer_sub_data(&mut self, target: GLenum, offset: u32, data: &[u8]) {
        self.record(GlCall::BufferSubData {
            target,
            offset,
            data: data.to_vec(),
        });
    }
    fn bind_buffer_range(
        &mut self,
        target: GLenum,
        index: u32,
        buffer: Option<GlBuffer>,
        offset: u32,
        size: u32,
    ) {
        self.record(GlCall::BindBufferRange {
            target,
            index,
            buffer,
            offset,
            size,
        });
    }

    fn create_vertex_array(&mut self) -> Option<GlVertexArray> {
        let vao = GlVertexArray::from_raw(self.name()?);
        self.record(GlCall::CreateVertexArray(vao));
        Some(vao)
    }
    fn delete_vertex_array(&mut self, vao: GlVertexArray) {
        self.record(GlCall::DeleteVertexArray(vao));
    }
    fn bind_vertex_array(&mut self, vao: Option<GlVertexArray>) {
        self.record(GlCall::BindVertexArray(vao));
    }
    fn enable_vertex_attrib_array(&mut self, location: u32) {
        self.record(GlCall::EnableVertexAttribArray(location));
    }
    fn disable_vertex_attrib_array(&mut self, location: u32) {
        self.record(GlCall::DisableVertexAttribArray(location));
    }
    fn vertex_attrib_pointer(
        &mut self,
        location: u32,
        size: u32,
        gl_type: GLenum,
        normalized: bool,
        stride: u32,
        offset: u32,
    ) {
        self.record(GlCall::VertexAttribPointer {
            location,
            size,
            gl_type,
            normalized,
            stride,
            offset,
        });
    }
    fn vertex_attrib_divisor(&mut self, location: u32, divisor: u32) {
        self.record(GlCall::VertexAttribDivisor { location, divisor });
    }

    fn create_texture(&mut self) -> Option<GlTexture> {
        let texture = GlTexture::from_raw(self.name()?);
        self.record(GlCall::CreateTexture(texture));
        Some(texture)
    }
    fn delete_texture(&mut self, texture: GlTexture) {
        self.record(GlCall::DeleteTexture(texture));
    }
    fn active_texture(&mut self, unit: GLenum) {
        self.record(GlCall::ActiveTexture(unit));
    }
    fn bind_texture(&mut self, target: GLenum, texture: Option<GlTexture>) {
        self.record(GlCall::BindTexture { target, texture });
    }
    fn tex_image_2d(
        &mut self,
        target: GLenum,
        level: u32,
        internal_format: GLenum,
        width: u32,
        height: u32,
        format: GLenum,
        gl_type: GLenum,
    ) {
        self.record(GlCall::TexImage2D {
            target,
            level,
            internal_format,
            width,
            height,
            format,
            gl_type,
        });
    }
    fn compressed_tex_image_2d(
        &mut self,
        target: GLenum,
        level: u32,
        internal_format: GLenum,
        width: u32,
        height: u32,
        data: &[u8],
    ) {
        self.record(GlCall::CompressedTexImage2D {
            target,
            level,
            internal_format,
            width,
            height,
            len: data.len(),
        });
    }
    fn tex_sub_image_2d(
        &mut self,
        target: GLenum,
        level: u32,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        format: GLenum,
        gl_type: GLenum,
        data: &[u8],
    ) {
        self.record(GlCall::TexSubImage2D {
            target,
            level,
            x,
            y,
            width,
            height,
            format,
            gl_type,
            len: data.len(),
        });
    }
    fn compressed_tex_sub_image_2d(
        &mut self,
        target: GLenum,
        level: u32,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        format: GLenum,
        data: &[u8],
    ) {
        self.record(GlCall::CompressedTexSubImage2D {
            target,
            level,
            x,
            y,
            width,
            height,
            format,
            len: data.len(),
        });
    }
    fn generate_mipmap(&mut self, target: GLenum) {
        self.record(GlCall::GenerateMipmap(target));
    }

    fn create_renderbuffer(&mut self) -> Option<GlRenderbuffer> {
        let renderbuffer = GlRenderbuffer::from_raw(self.name()?);
        self.record(GlCall::CreateRenderbuffer(renderbuffer));
        Some(renderbuffer)
    }
    fn delete_renderbuffer(&mut self, renderbuffer: GlRenderbuffer) {
        self.record(GlCall::DeleteRenderbuffer(renderbuffer));
    }
    fn bind_renderbuffer(&mut self, renderbuffer: Option<GlRenderbuffer>) {
        self.record(GlCall::BindRenderbuffer(renderbuffer));
    }
    fn renderbuffer_storage_multisample(
        &mut self,
        samples: u32,
        internal_format: GLenum,
        width: u32,
        height: u32,
    ) {
        self.record(GlCall::RenderbufferStorageMultisample {
            samples,
            internal_format,
            width,
            height,
        });
    }

    fn create_sampler(&mut self) -> Option<GlSampler> {
        let sampler = GlSampler::from_raw(self.name()?);
        self.record(GlCall::CreateSampler(sampler));
        Some(sampler)
    }
    fn delete_sampler(&mut self, sampler: GlSampler) {
        self.record(GlCall::DeleteSampler(sampler));
    }
    fn sampler_parameter_i(&mut self, sampler: GlSampler, pname: GLenum, param: i32) {
        self.record(GlCall::SamplerParameterI {
            sampler,
            pname,
            param,
        });
    }
    fn sampler_parameter_f(&mut self, sampler: GlSampler, pname: GLenum, param: f32) {
        self.record(GlCall::SamplerParameterF {
            sampler,
            pname,
            param,
        });
    }
    fn bind_sampler(&mut self, unit: u32, sampler: Option<GlSampler>) {
        self.record(GlCall::BindSampler { unit, sampler });
    }

    fn create_framebuffer(&mut self) -> Option<GlFramebuffer> {
        let framebuffer = GlFramebuffer::from_raw(self.name()?);
        self.record(GlCall::CreateFramebuffer(framebuffer));
        Some(framebuffer)
    }
    fn delete_framebuffer(&mut self, framebuffer: GlFramebuffer) {
        self.record(GlCall::DeleteFramebuffer(framebuffer));
    }
    fn bind_framebuffer(&mut self, target: GLenum, framebuffer: Option<GlFramebuffer>) {
        self.record(GlCall::BindFramebuffer {
            target,
            framebuffer,
        });
    }
    fn framebuffer_texture_2d(
        &mut self,
        attachment: GLenum,
        tex_target: GLenum,
        texture: Option<GlTexture>,
        level: u32,
    ) {
        self.record(GlCall::FramebufferTexture2D {
            attachment,
            tex_target,
            texture,
            level,
        });
    }
    fn framebuffer_renderbuffer(&mut self, attachment: GLenum, renderbuffer: Option<GlRenderbuffer>) {
        self.record(GlCall::FramebufferRenderbuffer {
            attachment,
            renderbuffer,
        });
    }
    fn draw_buffers(&mut self, buffers: &[GLenum]) {
        self.record(GlCall::DrawBuffers(buffers.to_vec()));
    }
    fn check_framebuffer_status(&mut self) -> GLenum {
        self.framebuffer_status
    }
    fn invalidate_framebuffer(&mut self, attachments: &[GLenum]) {
        self.record(GlCall::InvalidateFramebuffer(attachments.to_vec()));
    }
    fn blit_framebuffer(&mut self, src: [i32; 4], dst: [i32; 4], mask: GLenum, filter: GLenum) {
        self.record(GlCall::BlitFramebuffer {
            src,
            dst,
            mask,
            filter,
        });
    }

    fn create_shader(&mut self, stage: GLenum) -> Option<GlShader> {
        let shader = GlShader::from_raw(self.name()?);
        self.shaders.insert(
            shader,
            ShaderObject {
                source: String::new(),
                compiled: false,
            },
        );
        self.record(GlCall::CreateShader { shader, stage });
        Some(shader)
    }
    fn delete_shader(&mut self, shader: GlShader) {
        self.shaders.remove(&shader);
        self.record(GlCall::DeleteShader(shader));
    }
    fn shader_source(&mut self, shader: GlShader, source: &str) {
        if let Some(object) = self.shaders.get_mut(&shader) {
            object.source = source.to_owned();
        }
        self.record(GlCall::ShaderSource {
            shader,
            source: source.to_owned(),
        });
    }
    fn compile_shader(&mut self, shader: GlShader) {
        if let Some(object) = self.shaders.get_mut(&shader) {
            object.compiled = !object.source.contains("#error");
        }
        self.record(GlCall::CompileShader(shader));
    }
    fn shader_compile_status(&mut self, shader: GlShader) -> bool {
        self.shaders.get(&shader).is_some_and(|s| s.compiled)
    }
    fn shader_info_log(&mut self, shader: GlShader) -> String {
        match self.shaders.get(&shader) {
            Some(s) if !s.compiled => "ERROR: 0:1: '#error' : user error".to_owned(),
            _ => String::new(),
        }
    }
    fn create_program(&mut self) -> Option<GlProgram> {
        let program = GlProgram::from_raw(self.name()?);
        self.programs.insert(
            program,
            ProgramObject {
                linked: false,
                reflection: ProgramReflection::default(),
                uniforms: HashMap::new(),
            },
        );
        self.record(GlCall::CreateProgram(program));
        Some(program)
    }
    fn delete_program(&mut self, program: GlProgram) {
        self.programs.remove(&program);
        self.record(GlCall::DeleteProgram(program));
    }
    fn attach_shader(&mut self, program: GlProgram, shader: GlShader) {
        self.record(GlCall::AttachShader { program, shader });
    }
    fn detach_shader(&mut self, program: GlProgram, shader: GlShader) {
        self.record(GlCall::DetachShader { program, shader });
    }
    fn link_program(&mut self, program: GlProgram) {
        let reflection = self.pending_reflections.pop_front().unwrap_or_default();
        if let Some(object) = self.programs.get_mut(&program) {
            object.linked = reflection.link_failure.is_none();
            object.reflection = reflection;
        }
        self.record(GlCall::LinkProgram(program));
    }
    fn program_link_status(&mut self, program: GlProgram) -> bool {
        self.programs.get(&program).is_some_and(|p| p.linked)
    }
    fn program_info_log(&mut self, program: GlProgram) -> String {
        self.reflection(program)
            .and_then(|r| r.link_failure.clone())
            .unwrap_or_default()
    }
    fn active_attribute_count(&mut self, program: GlProgram) -> u32 {
        self.reflection(program).map_or(0, |r| r.attributes.len() as u32)
    }
    fn active_attribute(&mut self, program: GlProgram, index: u32) -> Option<ActiveAttribute> {
        self.reflection(program)?.attributes.get(index as usize).cloned()
    }
    fn attrib_location(&mut self, program: GlProgram, name: &str) -> i32 {
        let Some(reflection) = self.reflection(program) else {
            return -1;
        };
        reflection
            .attributes
            .iter()
            .zip(&reflection.locations)
            .find(|(a, _)| a.name.split('[').next() == Some(name))
            .map_or(-1, |(_, &location)| location)
    }
    fn active_uniform_block_count(&mut self, program: GlProgram) -> u32 {
        self.reflection(program).map_or(0, |r| r.blocks.len() as u32)
    }
    fn active_uniform_block_name(&mut self, program: GlProgram, index: u32) -> Option<String> {
        self.reflection(program)?
            .blocks
            .get(index as usize)
            .map(|(name, _)| name.clone())
    }
    fn active_uniform_block_data_size(&mut self, program: GlProgram, index: u32) -> u32 {
        self.reflection(program)
            .and_then(|r| r.blocks.get(index as usize))
            .map_or(0, |&(_, size)| size)
    }
    fn uniform_block_binding(&mut self, program: GlProgram, index: u32, binding: u32) {
        self.record(GlCall::UniformBlockBinding {
            program,
            index,
            binding,
        });
    }
    fn uniform_location(&mut self, program: GlProgram, name: &str) -> Option<GlUniformLocation> {
        let active = self.reflection(program)?.samplers.iter().any(|s| s == name);
        if !active {
            return None;
        }
        if let Some(&location) = self.programs.get(&program)?.uniforms.get(name) {
            return Some(location);
        }
        let location = GlUniformLocation::from_raw(self.name()?);
        self.programs
            .get_mut(&program)?
            .uniforms
            .insert(name.to_owned(), location);
        Some(location)
    }
    fn use_program(&mut self, program: Option<GlProgram>) {
        self.record(GlCall::UseProgram(program));
    }
    fn uniform_1iv(&mut self, location: GlUniformLocation, values: &[i32]) {
        self.record(GlCall::Uniform1iv {
            location,
            values: values.to_vec(),
        });
    }

    fn enable(&mut self, cap: GLenum) {
        self.record(GlCall::Enable(cap));
    }
    fn disable(&mut self, cap: GLenum) {
        self.record(GlCall::Disable(cap));
    }
    fn viewport(&mut self, x: i32, y: i32, width: u32, height: u32) {
        self.record(GlCall::Viewport {
            x,
            y,
            width,
            height,
        });
    }
    fn scissor(&mut self, x: i32, y: i32, width: u32, height: u32) {
        self.record(GlCall::Scissor {
            x,
            y,
            width,
            height,
        });
    }
    fn cull_face(&mut self, face: GLenum) {
        self.record(GlCall::CullFace(face));
    }
    fn front_face(&mut self, mode: GLenum) {
        self.record(GlCall::FrontFace(mode));
    }
    fn polygon_offset(&mut self, factor: f32, units: f32) {
        self.record(GlCall::PolygonOffset { factor, units });
    }
    fn line_width(&mut self, width: f32) {
        self.record(GlCall::LineWidth(width));
    }
    fn depth_mask(&mut self, enabled: bool) {
        self.record(GlCall::DepthMask(enabled));
    }
    fn depth_func(&mut self, func: GLenum) {
        self.record(GlCall::DepthFunc(func));
    }
    fn stencil_func(&mut self, func: GLenum, reference: i32, mask: u32) {
        self.record(GlCall::StencilFunc {
            func,
            reference,
            mask,
        });
    }
    fn stencil_func_separate(&mut self, face: GLenum, func: GLenum, reference: i32, mask: u32) {
        self.record(GlCall::StencilFuncSeparate {
            face,
            func,
            reference,
            mask,
        });
    }
    fn stencil_op_separate(&mut self, face: GLenum, fail: GLenum, zfail: GLenum, zpass: GLenum) {
        self.record(GlCall::StencilOpSeparate {
            face,
            fail,
            zfail,
            zpass,
        });
    }
    fn stencil_mask(&mut self, mask: u32) {
        self.record(GlCall::StencilMask(mask));
    }
    fn stencil_mask_separate(&mut self, face: GLenum, mask: u32) {
        self.record(GlCall::StencilMaskSeparate { face, mask });
    }
    fn blend_color(&mut self, color: [f32; 4]) {
        self.record(GlCall::BlendColor(color));
    }
    fn blend_equation_separate(&mut self, mode_rgb: GLenum, mode_alpha: GLenum) {
        self.record(GlCall::BlendEquationSeparate {
            rgb: mode_rgb,
            alpha: mode_alpha,
        });
    }
    fn blend_func_separate(
        &mut self,
        src_rgb: GLenum,
        dst_rgb: GLenum,
        src_alpha: GLenum,
        dst_alpha: GLenum,
    ) {
        self.record(GlCall::BlendFuncSeparate {
            src_rgb,
            dst_rgb,
            src_alpha,
            dst_alpha,
        });
    }
    fn color_mask(&mut self, r: bool, g: bool, b: bool, a: bool) {
        self.record(GlCall::ColorMask([r, g, b, a]));
    }

    fn clear_color(&mut self, color: [f32; 4]) {
        self.record(GlCall::ClearColor(color));
    }
    fn clear_depth(&mut self, depth: f32) {
        self.record(GlCall::ClearDepth(depth));
    }
    fn clear_stencil(&mut self, stencil: i32) {
        self.record(GlCall::ClearStencil(stencil));
    }
    fn clear(&mut self, mask: GLenum) {
        self.record(GlCall::Clear(mask));
    }
    fn clear_buffer_fv(&mut self, buffer: GLenum, draw_buffer: u32, values: [f32; 4]) {
        self.record(GlCall::ClearBufferFv {
            buffer,
            draw_buffer,
            values,
        });
    }

    fn draw_arrays(&mut self, mode: GLenum, first: u32, count: u32) {
        self.record(GlCall::DrawArrays { mode, first, count });
    }
    fn draw_arrays_instanced(&mut self, mode: GLenum, first: u32, count: u32, instances: u32) {
        self.record(GlCall::DrawArraysInstanced {
            mode,
            first,
            count,
            instances,
        });
    }
    fn draw_elements(&mut self, mode: GLenum, count: u32, index_type: GLenum, offset: u32) {
        self.record(GlCall::DrawElements {
            mode,
            count,
            index_type,
            offset,
        });
    }
    fn draw_elements_instanced(
        &mut self,
        mode: GLenum,
        count: u32,
        index_type: GLenum,
        offset: u32,
        instances: u32,
    ) {
        self.record(GlCall::DrawElementsInstanced {
            mode,
            count,
            index_type,
            offset,
            instances,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique_across_kinds() {
        let mut backend = RecordingBackend::new();
        let buffer = backend.create_buffer().map(GlBuffer::raw);
        let texture = backend.create_texture().map(GlTexture::raw);
        assert_ne!(buffer, texture);
    }

    #[test]
    fn error_directive_fails_compile() {
        let mut backend = RecordingBackend::new();
        let shader = backend.create_shader(gl::VERTEX_SHADER).unwrap();
        backend.shader_source(shader, "#error nope\nvoid main() {}");
        backend.compile_shader(shader);
        assert!(!backend.shader_compile_status(shader));
        assert!(!backend.shader_info_log(shader).is_empty());
    }

    #[test]
    fn reflection_is_consumed_by_link() {
        let mut backend = RecordingBackend::new();
        backend.push_reflection(
            ProgramReflection::new()
                .attribute("a_position", gl::FLOAT_VEC3, 0)
                .sampler("u_tex"),
        );
        let program = backend.create_program().unwrap();
        backend.link_program(program);
        assert!(backend.program_link_status(program));
        assert_eq!(backend.active_attribute_count(program), 1);
        assert_eq!(backend.attrib_location(program, "a_position"), 0);
        let first = backend.uniform_location(program, "u_tex");
        assert!(first.is_some());
        assert_eq!(backend.uniform_location(program, "u_tex"), first);
        assert_eq!(backend.uniform_location(program, "u_other"), None);

        let second = backend.create_program().unwrap();
        backend.link_program(second);
        assert_eq!(backend.active_attribute_count(second), 0);
    }
}
