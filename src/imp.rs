// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Backend seam.

Everything above this module speaks in device-independent records.  Everything in this
module speaks GL: the [`Backend`] trait is the complete set of low-level calls the
translation layer is allowed to emit, and the rest of the module (lifecycle functions,
state cache, executor) decides *which* of those calls to emit and in what order.

Two backends ship with the crate:

* [`recording::RecordingBackend`], always available.  It executes nothing and records
  every state-changing call, which makes it the headless backend and the test backend.
* `webgl2::WebGl2Backend`, on wasm32 with the `backend_webgl2` feature.
*/

pub mod gl;
pub(crate) mod formats;
mod error;
pub(crate) mod state_cache;
pub mod recording;
#[cfg(all(feature = "backend_webgl2", target_arch = "wasm32"))]
pub mod webgl2;

pub(crate) mod buffer;
pub(crate) mod texture;
pub(crate) mod sampler;
pub(crate) mod framebuffer;
pub(crate) mod shader;
pub(crate) mod input_assembler;
pub(crate) mod executor;

pub use error::Error;
pub use gl::GLenum;

use std::num::NonZeroU32;

macro_rules! gl_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(NonZeroU32);

        impl $name {
            /// Wraps a backend object name.
            pub const fn from_raw(raw: NonZeroU32) -> Self {
                Self(raw)
            }
            /// The backend object name.
            pub const fn raw(self) -> NonZeroU32 {
                self.0
            }
        }
    };
}

gl_handle!(
    /// A backend buffer object.
    GlBuffer
);
gl_handle!(
    /// A backend texture object.
    GlTexture
);
gl_handle!(
    /// A backend renderbuffer object.
    GlRenderbuffer
);
gl_handle!(
    /// A backend sampler object.
    GlSampler
);
gl_handle!(
    /// A backend framebuffer object.  The default framebuffer has no handle.
    GlFramebuffer
);
gl_handle!(
    /// A backend shader stage object.
    GlShader
);
gl_handle!(
    /// A backend program object.
    GlProgram
);
gl_handle!(
    /// A backend vertex-array object.
    GlVertexArray
);
gl_handle!(
    /// A resolved uniform location.
    GlUniformLocation
);

/// Read-only limits reported by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceCaps {
    pub max_texture_size: u32,
    pub max_cube_map_texture_size: u32,
    pub max_vertex_attributes: u32,
    pub max_texture_units: u32,
    pub max_uniform_buffer_bindings: u32,
}

impl Default for DeviceCaps {
    /// The minimums guaranteed by OpenGL ES 3.0.
    fn default() -> Self {
        DeviceCaps {
            max_texture_size: 2048,
            max_cube_map_texture_size: 2048,
            max_vertex_attributes: 16,
            max_texture_units: 16,
            max_uniform_buffer_bindings: 24,
        }
    }
}

/// An active attribute reported by program introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveAttribute {
    pub name: String,
    /// Array length; 1 for non-arrays.
    pub size: u32,
    pub gl_type: GLenum,
}

/**
A GL-family command sink.

Each method maps one-to-one to a GL ES 3.0 entry point.  Implementations must not cache
or elide calls: redundancy elimination is the caller's job, and a backend that silently
drops a call desynchronizes the caller's state cache.

Object creation returns `None` when the backend could not allocate (for example a lost
context).
*/
pub trait Backend {
    fn capabilities(&self) -> DeviceCaps;

    // buffers
    fn create_buffer(&mut self) -> Option<GlBuffer>;
    fn delete_buffer(&mut self, buffer: GlBuffer);
    fn bind_buffer(&mut self, target: GLenum, buffer: Option<GlBuffer>);
    /// Allocates `size` zeroed bytes for the buffer bound to `target`.
    fn buffer_data_size(&mut self, target: GLenum, size: u32, usage: GLenum);
    fn buffer_sub_data(&mut self, target: GLenum, offset: u32, data: &[u8]);
    fn bind_buffer_range(
        &mut self,
        target: GLenum,
        index: u32,
        buffer: Option<GlBuffer>,
        offset: u32,
        size: u32,
    );

    // vertex arrays
    fn create_vertex_array(&mut self) -> Option<GlVertexArray>;
    fn delete_vertex_array(&mut self, vao: GlVertexArray);
    fn bind_vertex_array(&mut self, vao: Option<GlVertexArray>);
    fn enable_vertex_attrib_array(&mut self, location: u32);
    fn disable_vertex_attrib_array(&mut self, location: u32);
    fn vertex_attrib_pointer(
        &mut self,
        location: u32,
        size: u32,
        gl_type: GLenum,
        normalized: bool,
        stride: u32,
        offset: u32,
    );
    fn vertex_attrib_divisor(&mut self, location: u32, divisor: u32);

    // textures
    fn create_texture(&mut self) -> Option<GlTexture>;
    fn delete_texture(&mut self, texture: GlTexture);
    /// `unit` is `TEXTURE0 + n`.
    fn active_texture(&mut self, unit: GLenum);
    fn bind_texture(&mut self, target: GLenum, texture: Option<GlTexture>);
    /// Allocates an image with undefined contents.
    #[allow(clippy::too_many_arguments)]
    fn tex_image_2d(
        &mut self,
        target: GLenum,
        level: u32,
        internal_format: GLenum,
        width: u32,
        height: u32,
        format: GLenum,
        gl_type: GLenum,
    );
    fn compressed_tex_image_2d(
        &mut self,
        target: GLenum,
        level: u32,
        internal_format: GLenum,
        width: u32,
        height: u32,
        data: &[u8],
    );
    #[allow(clippy::too_many_arguments)]
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
    );
    #[allow(clippy::too_many_arguments)]
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
    );
    fn generate_mipmap(&mut self, target: GLenum);

    // renderbuffers
    fn create_renderbuffer(&mut self) -> Option<GlRenderbuffer>;
    fn delete_renderbuffer(&mut self, renderbuffer: GlRenderbuffer);
    fn bind_renderbuffer(&mut self, renderbuffer: Option<GlRenderbuffer>);
    fn renderbuffer_storage_multisample(
        &mut self,
        samples: u32,
        internal_format: GLenum,
        width: u32,
        height: u32,
    );

    // samplers
    fn create_sampler(&mut self) -> Option<GlSampler>;
    fn delete_sampler(&mut self, sampler: GlSampler);
    fn sampler_parameter_i(&mut self, sampler: GlSampler, pname: GLenum, param: i32);
    fn sampler_parameter_f(&mut self, sampler: GlSampler, pname: GLenum, param: f32);
    fn bind_sampler(&mut self, unit: u32, sampler: Option<GlSampler>);

    // framebuffers
    fn create_framebuffer(&mut self) -> Option<GlFramebuffer>;
    fn delete_framebuffer(&mut self, framebuffer: GlFramebuffer);
    fn bind_framebuffer(&mut self, target: GLenum, framebuffer: Option<GlFramebuffer>);
    fn framebuffer_texture_2d(
        &mut self,
        attachment: GLenum,
        tex_target: GLenum,
        texture: Option<GlTexture>,
        level: u32,
    );
    fn framebuffer_renderbuffer(&mut self, attachment: GLenum, renderbuffer: Option<GlRenderbuffer>);
    fn draw_buffers(&mut self, buffers: &[GLenum]);
    fn check_framebuffer_status(&mut self) -> GLenum;
    fn invalidate_framebuffer(&mut self, attachments: &[GLenum]);
    /// `src` and `dst` are `[x0, y0, x1, y1]`.
    fn blit_framebuffer(&mut self, src: [i32; 4], dst: [i32; 4], mask: GLenum, filter: GLenum);

    // shaders and programs
    fn create_shader(&mut self, stage: GLenum) -> Option<GlShader>;
    fn delete_shader(&mut self, shader: GlShader);
    fn shader_source(&mut self, shader: GlShader, source: &str);
    fn compile_shader(&mut self, shader: GlShader);
    fn shader_compile_status(&mut self, shader: GlShader) -> bool;
    fn shader_info_log(&mut self, shader: GlShader) -> String;
    fn create_program(&mut self) -> Option<GlProgram>;
    fn delete_program(&mut self, program: GlProgram);
    fn attach_shader(&mut self, program: GlProgram, shader: GlShader);
    fn detach_shader(&mut self, program: GlProgram, shader: GlShader);
    fn link_program(&mut self, program: GlProgram);
    fn program_link_status(&mut self, program: GlProgram) -> bool;
    fn program_info_log(&mut self, program: GlProgram) -> String;
    fn active_attribute_count(&mut self, program: GlProgram) -> u32;
    fn active_attribute(&mut self, program: GlProgram, index: u32) -> Option<ActiveAttribute>;
    /// Returns -1 when the attribute is not active.
    fn attrib_location(&mut self, program: GlProgram, name: &str) -> i32;
    fn active_uniform_block_count(&mut self, program: GlProgram) -> u32;
    fn active_uniform_block_name(&mut self, program: GlProgram, index: u32) -> Option<String>;
    fn active_uniform_block_data_size(&mut self, program: GlProgram, index: u32) -> u32;
    fn uniform_block_binding(&mut self, program: GlProgram, index: u32, binding: u32);
    fn uniform_location(&mut self, program: GlProgram, name: &str) -> Option<GlUniformLocation>;
    fn use_program(&mut self, program: Option<GlProgram>);
    fn uniform_1iv(&mut self, location: GlUniformLocation, values: &[i32]);

    // fixed-function state
    fn enable(&mut self, cap: GLenum);
    fn disable(&mut self, cap: GLenum);
    fn viewport(&mut self, x: i32, y: i32, width: u32, height: u32);
    fn scissor(&mut self, x: i32, y: i32, width: u32, height: u32);
    fn cull_face(&mut self, face: GLenum);
    fn front_face(&mut self, mode: GLenum);
    fn polygon_offset(&mut self, factor: f32, units: f32);
    fn line_width(&mut self, width: f32);
    fn depth_mask(&mut self, enabled: bool);
    fn depth_func(&mut self, func: GLenum);
    fn stencil_func(&mut self, func: GLenum, reference: i32, mask: u32);
    fn stencil_func_separate(&mut self, face: GLenum, func: GLenum, reference: i32, mask: u32);
    fn stencil_op_separate(&mut self, face: GLenum, fail: GLenum, zfail: GLenum, zpass: GLenum);
    fn stencil_mask(&mut self, mask: u32);
    fn stencil_mask_separate(&mut self, face: GLenum, mask: u32);
    fn blend_color(&mut self, color: [f32; 4]);
    fn blend_equation_separate(&mut self, mode_rgb: GLenum, mode_alpha: GLenum);
    fn blend_func_separate(
        &mut self,
        src_rgb: GLenum,
        dst_rgb: GLenum,
        src_alpha: GLenum,
        dst_alpha: GLenum,
    );
    fn color_mask(&mut self, r: bool, g: bool, b: bool, a: bool);

    // clears
    fn clear_color(&mut self, color: [f32; 4]);
    fn clear_depth(&mut self, depth: f32);
    fn clear_stencil(&mut self, stencil: i32);
    fn clear(&mut self, mask: GLenum);
    fn clear_buffer_fv(&mut self, buffer: GLenum, draw_buffer: u32, values: [f32; 4]);

    // draws
    fn draw_arrays(&mut self, mode: GLenum, first: u32, count: u32);
    fn draw_arrays_instanced(&mut self, mode: GLenum, first: u32, count: u32, instances: u32);
    fn draw_elements(&mut self, mode: GLenum, count: u32, index_type: GLenum, offset: u32);
    fn draw_elements_instanced(
        &mut self,
        mode: GLenum,
        count: u32,
        index_type: GLenum,
        offset: u32,
        instances: u32,
    );
}
