// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
WebGL2 backend.

Object names are handed out from a counter and mapped to the JavaScript objects
`web_sys` returns, one registry per object kind.  Calls are forwarded one-to-one; the
only translation is integer width.
*/

use std::collections::HashMap;
use std::num::NonZeroU32;

use wasm_bindgen::JsValue;
use web_sys::{
    WebGl2RenderingContext as Gl, WebGlBuffer, WebGlFramebuffer, WebGlProgram,
    WebGlRenderbuffer, WebGlSampler, WebGlShader, WebGlTexture, WebGlUniformLocation,
    WebGlVertexArrayObject,
};

use crate::imp::gl::GLenum;
use crate::imp::{
    ActiveAttribute, Backend, DeviceCaps, GlBuffer, GlFramebuffer, GlProgram, GlRenderbuffer,
    GlSampler, GlShader, GlTexture, GlUniformLocation, GlVertexArray,
};

#[derive(Debug)]
struct Registry<T> {
    objects: HashMap<NonZeroU32, T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Registry {
            objects: HashMap::new(),
        }
    }
}

impl<T> Registry<T> {
    fn get(&self, name: Option<NonZeroU32>) -> Option<&T> {
        self.objects.get(&name?)
    }
}

fn log_js_error(call: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        logwise::error_sync!(
            "{call} failed: {e}",
            call = logwise::privacy::LogIt(call),
            e = logwise::privacy::LogIt(&e)
        );
    }
}

/// Drives a `WebGl2RenderingContext`.
#[derive(Debug)]
pub struct WebGl2Backend {
    gl: Gl,
    next_name: u32,
    buffers: Registry<WebGlBuffer>,
    vaos: Registry<WebGlVertexArrayObject>,
    textures: Registry<WebGlTexture>,
    renderbuffers: Registry<WebGlRenderbuffer>,
    samplers: Registry<WebGlSampler>,
    framebuffers: Registry<WebGlFramebuffer>,
    shaders: Registry<WebGlShader>,
    programs: Registry<WebGlProgram>,
    uniforms: Registry<WebGlUniformLocation>,
}

impl WebGl2Backend {
    pub fn new(gl: Gl) -> Self {
        WebGl2Backend {
            gl,
            next_name: 1,
            buffers: Registry::default(),
            vaos: Registry::default(),
            textures: Registry::default(),
            renderbuffers: Registry::default(),
            samplers: Registry::default(),
            framebuffers: Registry::default(),
            shaders: Registry::default(),
            programs: Registry::default(),
            uniforms: Registry::default(),
        }
    }

    pub fn context(&self) -> &Gl {
        &self.gl
    }

    fn name(&mut self) -> Option<NonZeroU32> {
        let name = NonZeroU32::new(self.next_name)?;
        self.next_name = self.next_name.checked_add(1)?;
        Some(name)
    }

    fn parameter_u32(&self, pname: GLenum) -> u32 {
        self.gl
            .get_parameter(pname)
            .ok()
            .and_then(|v| v.as_f64())
            .map_or(0, |v| v as u32)
    }

    fn program(&self, program: GlProgram) -> Option<&WebGlProgram> {
        self.programs.get(Some(program.raw()))
    }

    fn program_parameter(&self, program: GlProgram, pname: GLenum) -> JsValue {
        match self.program(program) {
            Some(p) => self.gl.get_program_parameter(p, pname),
            None => JsValue::UNDEFINED,
        }
    }
}

fn js_array(values: &[GLenum]) -> js_sys::Array {
    values.iter().map(|&v| JsValue::from(v)).collect()
}

impl Backend for WebGl2Backend {
    fn capabilities(&self) -> DeviceCaps {
        DeviceCaps {
            max_texture_size: self.parameter_u32(Gl::MAX_TEXTURE_SIZE),
            max_cube_map_texture_size: self.parameter_u32(Gl::MAX_CUBE_MAP_TEXTURE_SIZE),
            max_vertex_attributes: self.parameter_u32(Gl::MAX_VERTEX_ATTRIBS),
            max_texture_units: self.parameter_u32(Gl::MAX_COMBINED_TEXTURE_IMAGE_UNITS),
            max_uniform_buffer_bindings: self.parameter_u32(Gl::MAX_UNIFORM_BUFFER_BINDINGS),
        }
    }

    fn create_buffer(&mut self) -> Option<GlBuffer> {
        let object = self.gl.create_buffer()?;
        let name = self.name()?;
        self.buffers.objects.insert(name, object);
        Some(GlBuffer::from_raw(name))
    }
    fn delete_buffer(&mut self, buffer: GlBuffer) {
        let object = self.buffers.objects.remove(&buffer.raw());
        self.gl.delete_buffer(object.as_ref());
    }
    fn bind_buffer(&mut self, target: GLenum, buffer: Option<GlBuffer>) {
        self.gl
            .bind_buffer(target, self.buffers.get(buffer.map(GlBuffer::raw)));
    }
    fn buffer_data_size(&mut self, target: GLenum, size: u32, usage: GLenum) {
        self.gl.buffer_data_with_i32(target, size as i32, usage);
    }
    fn buffer_sub_data(&mut self, target: GLenum, offset: u32, data: &[u8]) {
        self.gl
            .buffer_sub_data_with_i32_and_u8_array(target, offset as i32, data);
    }
    fn bind_buffer_range(
        &mut self,
        target: GLenum,
        index: u32,
        buffer: Option<GlBuffer>,
        offset: u32,
        size: u32,
    ) {
        self.gl.bind_buffer_range_with_i32_and_i32(
            target,
            index,
            self.buffers.get(buffer.map(GlBuffer::raw)),
            offset as i32,
            size as i32,
        );
    }

    fn create_vertex_array(&mut self) -> Option<GlVertexArray> {
        let object = self.gl.create_vertex_array()?;
        let name = self.name()?;
        self.vaos.objects.insert(name, object);
        Some(GlVertexArray::from_raw(name))
    }
    fn delete_vertex_array(&mut self, vao: GlVertexArray) {
        let object = self.vaos.objects.remove(&vao.raw());
        self.gl.delete_vertex_array(object.as_ref());
    }
    fn bind_vertex_array(&mut self, vao: Option<GlVertexArray>) {
        self.gl
            .bind_vertex_array(self.vaos.get(vao.map(GlVertexArray::raw)));
    }
    fn enable_vertex_attrib_array(&mut self, location: u32) {
        self.gl.enable_vertex_attrib_array(location);
    }
    fn disable_vertex_attrib_array(&mut self, location: u32) {
        self.gl.disable_vertex_attrib_array(location);
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
        self.gl.vertex_attrib_pointer_with_i32(
            location,
            size as i32,
            gl_type,
            normalized,
            stride as i32,
            offset as i32,
        );
    }
    fn vertex_attrib_divisor(&mut self, location: u32, divisor: u32) {
        self.gl.vertex_attrib_divisor(location, divisor);
    }

    fn create_texture(&mut self) -> Option<GlTexture> {
        let object = self.gl.create_texture()?;
        let name = self.name()?;
        self.textures.objects.insert(name, object);
        Some(GlTexture::from_raw(name))
    }
    fn delete_texture(&mut self, texture: GlTexture) {
        let object = self.textures.objects.remove(&texture.raw());
        self.gl.delete_texture(object.as_ref());
    }
    fn active_texture(&mut self, unit: GLenum) {
        self.gl.active_texture(unit);
    }
    fn bind_texture(&mut self, target: GLenum, texture: Option<GlTexture>) {
        self.gl
            .bind_texture(target, self.textures.get(texture.map(GlTexture::raw)));
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
        let result = self
            .gl
            .tex_image_2d_with_i32_and_i32_and_i32_and_format_and_type_and_opt_u8_array(
                target,
                level as i32,
                internal_format as i32,
                width as i32,
                height as i32,
                0,
                format,
                gl_type,
                None,
            );
        log_js_error("texImage2D", result);
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
        self.gl.compressed_tex_image_2d_with_u8_array(
            target,
            level as i32,
            internal_format,
            width as i32,
            height as i32,
            0,
            data,
        );
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
        let result = self
            .gl
            .tex_sub_image_2d_with_i32_and_i32_and_u32_and_type_and_opt_u8_array(
                target,
                level as i32,
                x as i32,
                y as i32,
                width as i32,
                height as i32,
                format,
                gl_type,
                Some(data),
            );
        log_js_error("texSubImage2D", result);
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
        self.gl.compressed_tex_sub_image_2d_with_u8_array(
            target,
            level as i32,
            x as i32,
            y as i32,
            width as i32,
            height as i32,
            format,
            data,
        );
    }
    fn generate_mipmap(&mut self, target: GLenum) {
        self.gl.generate_mipmap(target);
    }

    fn create_renderbuffer(&mut self) -> Option<GlRenderbuffer> {
        let object = self.gl.create_renderbuffer()?;
        let name = self.name()?;
        self.renderbuffers.objects.insert(name, object);
        Some(GlRenderbuffer::from_raw(name))
    }
    fn delete_renderbuffer(&mut self, renderbuffer: GlRenderbuffer) {
        let object = self.renderbuffers.objects.remove(&renderbuffer.raw());
        self.gl.delete_renderbuffer(object.as_ref());
    }
    fn bind_renderbuffer(&mut self, renderbuffer: Option<GlRenderbuffer>) {
        self.gl.bind_renderbuffer(
            Gl::RENDERBUFFER,
            self.renderbuffers.get(renderbuffer.map(GlRenderbuffer::raw)),
        );
    }
    fn renderbuffer_storage_multisample(
        &mut self,
        samples: u32,
        internal_format: GLenum,
        width: u32,
        height: u32,
    ) {
        self.gl.renderbuffer_storage_multisample(
            Gl::RENDERBUFFER,
            samples as i32,
            internal_format,
            width as i32,
            height as i32,
        );
    }

    fn create_sampler(&mut self) -> Option<GlSampler> {
        let object = self.gl.create_sampler()?;
        let name = self.name()?;
        self.samplers.objects.insert(name, object);
        Some(GlSampler::from_raw(name))
    }
    fn delete_sampler(&mut self, sampler: GlSampler) {
        let object = self.samplers.objects.remove(&sampler.raw());
        self.gl.delete_sampler(object.as_ref());
    }
    fn sampler_parameter_i(&mut self, sampler: GlSampler, pname: GLenum, param: i32) {
        if let Some(s) = self.samplers.get(Some(sampler.raw())) {
            self.gl.sampler_parameteri(s, pname, param);
        }
    }
    fn sampler_parameter_f(&mut self, sampler: GlSampler, pname: GLenum, param: f32) {
        if let Some(s) = self.samplers.get(Some(sampler.raw())) {
            self.gl.sampler_parameterf(s, pname, param);
        }
    }
    fn bind_sampler(&mut self, unit: u32, sampler: Option<GlSampler>) {
        self.gl
            .bind_sampler(unit, self.samplers.get(sampler.map(GlSampler::raw)));
    }

    fn create_framebuffer(&mut self) -> Option<GlFramebuffer> {
        let object = self.gl.create_framebuffer()?;
        let name = self.name()?;
        self.framebuffers.objects.insert(name, object);
        Some(GlFramebuffer::from_raw(name))
    }
    fn delete_framebuffer(&mut self, framebuffer: GlFramebuffer) {
        let object = self.framebuffers.objects.remove(&framebuffer.raw());
        self.gl.delete_framebuffer(object.as_ref());
    }
    fn bind_framebuffer(&mut self, target: GLenum, framebuffer: Option<GlFramebuffer>) {
        self.gl.bind_framebuffer(
            target,
            self.framebuffers.get(framebuffer.map(GlFramebuffer::raw)),
        );
    }
    fn framebuffer_texture_2d(
        &mut self,
        attachment: GLenum,
        tex_target: GLenum,
        texture: Option<GlTexture>,
        level: u32,
    ) {
        self.gl.framebuffer_texture_2d(
            Gl::FRAMEBUFFER,
            attachment,
            tex_target,
            self.textures.get(texture.map(GlTexture::raw)),
            level as i32,
        );
    }
    fn framebuffer_renderbuffer(&mut self, attachment: GLenum, renderbuffer: Option<GlRenderbuffer>) {
        self.gl.framebuffer_renderbuffer(
            Gl::FRAMEBUFFER,
            attachment,
            Gl::RENDERBUFFER,
            self.renderbuffers.get(renderbuffer.map(GlRenderbuffer::raw)),
        );
    }
    fn draw_buffers(&mut self, buffers: &[GLenum]) {
        self.gl.draw_buffers(&js_array(buffers));
    }
    fn check_framebuffer_status(&mut self) -> GLenum {
        self.gl.check_framebuffer_status(Gl::FRAMEBUFFER)
    }
    fn invalidate_framebuffer(&mut self, attachments: &[GLenum]) {
        let result = self
            .gl
            .invalidate_framebuffer(Gl::FRAMEBUFFER, &js_array(attachments));
        log_js_error("invalidateFramebuffer", result);
    }
    fn blit_framebuffer(&mut self, src: [i32; 4], dst: [i32; 4], mask: GLenum, filter: GLenum) {
        self.gl.blit_framebuffer(
            src[0], src[1], src[2], src[3], dst[0], dst[1], dst[2], dst[3], mask, filter,
        );
    }

    fn create_shader(&mut self, stage: GLenum) -> Option<GlShader> {
        let object = self.gl.create_shader(stage)?;
        let name = self.name()?;
        self.shaders.objects.insert(name, object);
        Some(GlShader::from_raw(name))
    }
    fn delete_shader(&mut self, shader: GlShader) {
        let object = self.shaders.objects.remove(&shader.raw());
        self.gl.delete_shader(object.as_ref());
    }
    fn shader_source(&mut self, shader: GlShader, source: &str) {
        if let Some(s) = self.shaders.get(Some(shader.raw())) {
            self.gl.shader_source(s, source);
        }
    }
    fn compile_shader(&mut self, shader: GlShader) {
        if let Some(s) = self.shaders.get(Some(shader.raw())) {
            self.gl.compile_shader(s);
        }
    }
    fn shader_compile_status(&mut self, shader: GlShader) -> bool {
        self.shaders
            .get(Some(shader.raw()))
            .and_then(|s| self.gl.get_shader_parameter(s, Gl::COMPILE_STATUS).as_bool())
            .unwrap_or(false)
    }
    fn shader_info_log(&mut self, shader: GlShader) -> String {
        self.shaders
            .get(Some(shader.raw()))
            .and_then(|s| self.gl.get_shader_info_log(s))
            .unwrap_or_default()
    }
    fn create_program(&mut self) -> Option<GlProgram> {
        let object = self.gl.create_program()?;
        let name = self.name()?;
        self.programs.objects.insert(name, object);
        Some(GlProgram::from_raw(name))
    }
    fn delete_program(&mut self, program: GlProgram) {
        let object = self.programs.objects.remove(&program.raw());
        self.gl.delete_program(object.as_ref());
    }
    fn attach_shader(&mut self, program: GlProgram, shader: GlShader) {
        if let (Some(p), Some(s)) = (self.program(program), self.shaders.get(Some(shader.raw()))) {
            self.gl.attach_shader(p, s);
        }
    }
    fn detach_shader(&mut self, program: GlProgram, shader: GlShader) {
        if let (Some(p), Some(s)) = (self.program(program), self.shaders.get(Some(shader.raw()))) {
            self.gl.detach_shader(p, s);
        }
    }
    fn link_program(&mut self, program: GlProgram) {
        if let Some(p) = self.program(program) {
            self.gl.link_program(p);
        }
    }
    fn program_link_status(&mut self, program: GlProgram) -> bool {
        self.program_parameter(program, Gl::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }
    fn program_info_log(&mut self, program: GlProgram) -> String {
        self.program(program)
            .and_then(|p| self.gl.get_program_info_log(p))
            .unwrap_or_default()
    }
    fn active_attribute_count(&mut self, program: GlProgram) -> u32 {
        self.program_parameter(program, Gl::ACTIVE_ATTRIBUTES)
            .as_f64()
            .map_or(0, |v| v as u32)
    }
    fn active_attribute(&mut self, program: GlProgram, index: u32) -> Option<ActiveAttribute> {
        let info = self.gl.get_active_attrib(self.program(program)?, index)?;
        Some(ActiveAttribute {
            name: info.name(),
            size: info.size() as u32,
            gl_type: info.type_(),
        })
    }
    fn attrib_location(&mut self, program: GlProgram, name: &str) -> i32 {
        match self.program(program) {
            Some(p) => self.gl.get_attrib_location(p, name),
            None => -1,
        }
    }
    fn active_uniform_block_count(&mut self, program: GlProgram) -> u32 {
        self.program_parameter(program, Gl::ACTIVE_UNIFORM_BLOCKS)
            .as_f64()
            .map_or(0, |v| v as u32)
    }
    fn active_uniform_block_name(&mut self, program: GlProgram, index: u32) -> Option<String> {
        self.gl
            .get_active_uniform_block_name(self.program(program)?, index)
    }
    fn active_uniform_block_data_size(&mut self, program: GlProgram, index: u32) -> u32 {
        self.program(program)
            .and_then(|p| {
                self.gl
                    .get_active_uniform_block_parameter(p, index, Gl::UNIFORM_BLOCK_DATA_SIZE)
                    .ok()
            })
            .and_then(|v| v.as_f64())
            .map_or(0, |v| v as u32)
    }
    fn uniform_block_binding(&mut self, program: GlProgram, index: u32, binding: u32) {
        if let Some(p) = self.program(program) {
            self.gl.uniform_block_binding(p, index, binding);
        }
    }
    fn uniform_location(&mut self, program: GlProgram, name: &str) -> Option<GlUniformLocation> {
        let location = self.gl.get_uniform_location(self.program(program)?, name)?;
        let handle = self.name()?;
        self.uniforms.objects.insert(handle, location);
        Some(GlUniformLocation::from_raw(handle))
    }
    fn use_program(&mut self, program: Option<GlProgram>) {
        self.gl
            .use_program(self.programs.get(program.map(GlProgram::raw)));
    }
    fn uniform_1iv(&mut self, location: GlUniformLocation, values: &[i32]) {
        self.gl
            .uniform1iv_with_i32_array(self.uniforms.get(Some(location.raw())), values);
    }

    fn enable(&mut self, cap: GLenum) {
        self.gl.enable(cap);
    }
    fn disable(&mut self, cap: GLenum) {
        self.gl.disable(cap);
    }
    fn viewport(&mut self, x: i32, y: i32, width: u32, height: u32) {
        self.gl.viewport(x, y, width as i32, height as i32);
    }
    fn scissor(&mut self, x: i32, y: i32, width: u32, height: u32) {
        self.gl.scissor(x, y, width as i32, height as i32);
    }
    fn cull_face(&mut self, face: GLenum) {
        self.gl.cull_face(face);
    }
    fn front_face(&mut self, mode: GLenum) {
        self.gl.front_face(mode);
    }
    fn polygon_offset(&mut self, factor: f32, units: f32) {
        self.gl.polygon_offset(factor, units);
    }
    fn line_width(&mut self, width: f32) {
        self.gl.line_width(width);
    }
    fn depth_mask(&mut self, enabled: bool) {
        self.gl.depth_mask(enabled);
    }
    fn depth_func(&mut self, func: GLenum) {
        self.gl.depth_func(func);
    }
    fn stencil_func(&mut self, func: GLenum, reference: i32, mask: u32) {
        self.gl.stencil_func(func, reference, mask);
    }
    fn stencil_func_separate(&mut self, face: GLenum, func: GLenum, reference: i32, mask: u32) {
        self.gl.stencil_func_separate(face, func, reference, mask);
    }
    fn stencil_op_separate(&mut self, face: GLenum, fail: GLenum, zfail: GLenum, zpass: GLenum) {
        self.gl.stencil_op_separate(face, fail, zfail, zpass);
    }
    fn stencil_mask(&mut self, mask: u32) {
        self.gl.stencil_mask(mask);
    }
    fn stencil_mask_separate(&mut self, face: GLenum, mask: u32) {
        self.gl.stencil_mask_separate(face, mask);
    }
    fn blend_color(&mut self, color: [f32; 4]) {
        self.gl.blend_color(color[0], color[1], color[2], color[3]);
    }
    fn blend_equation_separate(&mut self, mode_rgb: GLenum, mode_alpha: GLenum) {
        self.gl.blend_equation_separate(mode_rgb, mode_alpha);
    }
    fn blend_func_separate(
        &mut self,
        src_rgb: GLenum,
        dst_rgb: GLenum,
        src_alpha: GLenum,
        dst_alpha: GLenum,
    ) {
        self.gl
            .blend_func_separate(src_rgb, dst_rgb, src_alpha, dst_alpha);
    }
    fn color_mask(&mut self, r: bool, g: bool, b: bool, a: bool) {
        self.gl.color_mask(r, g, b, a);
    }

    fn clear_color(&mut self, color: [f32; 4]) {
        self.gl.clear_color(color[0], color[1], color[2], color[3]);
    }
    fn clear_depth(&mut self, depth: f32) {
        self.gl.clear_depth(depth);
    }
    fn clear_stencil(&mut self, stencil: i32) {
        self.gl.clear_stencil(stencil);
    }
    fn clear(&mut self, mask: GLenum) {
        self.gl.clear(mask);
    }
    fn clear_buffer_fv(&mut self, buffer: GLenum, draw_buffer: u32, values: [f32; 4]) {
        self.gl
            .clear_bufferfv_with_f32_array(buffer, draw_buffer as i32, &values);
    }

    fn draw_arrays(&mut self, mode: GLenum, first: u32, count: u32) {
        self.gl.draw_arrays(mode, first as i32, count as i32);
    }
    fn draw_arrays_instanced(&mut self, mode: GLenum, first: u32, count: u32, instances: u32) {
        self.gl
            .draw_arrays_instanced(mode, first as i32, count as i32, instances as i32);
    }
    fn draw_elements(&mut self, mode: GLenum, count: u32, index_type: GLenum, offset: u32) {
        self.gl
            .draw_elements_with_i32(mode, count as i32, index_type, offset as i32);
    }
    fn draw_elements_instanced(
        &mut self,
        mode: GLenum,
        count: u32,
        index_type: GLenum,
        offset: u32,
        instances: u32,
    ) {
        self.gl.draw_elements_instanced_with_i32(
            mode,
            count as i32,
            index_type,
            offset as i32,
            instances as i32,
        );
    }
}
