// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
The device: every resource lives here.

A [`Device`] owns one backend together with its capabilities, the configuration, the
state cache and one generational table per resource kind.  All entry points take and
return typed ids.  No entry point fails: problems are logged and the call returns
normally, so a stale id or a shader that does not compile never takes the caller down.
*/

use crate::bindings::buffer::{Buffer, BufferId, BufferInfo, BufferSource, BufferViewInfo};
use crate::bindings::descriptor_set::{DescriptorSet, DescriptorSetId, DescriptorSetLayoutInfo};
use crate::bindings::sampler::{Filter, Sampler, SamplerId, SamplerInfo};
use crate::bindings::texture::{BufferTextureCopy, Texture, TextureId, TextureInfo};
use crate::images::command_buffer::CommandBuffer;
use crate::images::commands::{CommandAllocator, CommandPackage};
use crate::images::pipeline_state::{PipelineState, PipelineStateId, PipelineStateInfo};
use crate::images::render_pass::{
    Framebuffer, FramebufferId, FramebufferInfo, Rect, RenderPass, RenderPassId, RenderPassInfo,
};
use crate::images::shader::{Shader, ShaderId, ShaderInfo};
use crate::images::vertex_layout::{InputAssembler, InputAssemblerId, InputAssemblerInfo};
use crate::imp::executor::Executor;
use crate::imp::formats::primitive_mode;
use crate::imp::state_cache::StateCache;
use crate::imp::{self, Backend, DeviceCaps, Error};
use crate::resource_table::ResourceTable;

/// How abstract `(set, binding)` pairs map onto flat backend binding points.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BindingMappingInfo {
    /// Added to a uniform block's binding, per set.
    pub buffer_offsets: Vec<u32>,
    /// Added to a sampler's binding, per set.
    pub sampler_offsets: Vec<u32>,
    /// The set whose sampler units are shifted down by its block count.
    pub flexible_set: u32,
}

/// Device configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Record vertex state into vertex-array objects, one per (assembler, program).
    pub use_vao: bool,
    /// Prepended to every shader stage's source.
    pub shader_header: String,
    pub binding_mapping: BindingMappingInfo,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        DeviceConfig {
            use_vao: true,
            shader_header: "#version 300 es\n".to_string(),
            binding_mapping: BindingMappingInfo::default(),
        }
    }
}

/// Every resource table the device owns.
#[derive(Debug, Default)]
pub(crate) struct Resources {
    pub buffers: ResourceTable<Buffer>,
    pub textures: ResourceTable<Texture>,
    pub samplers: ResourceTable<Sampler>,
    pub render_passes: ResourceTable<RenderPass>,
    pub framebuffers: ResourceTable<Framebuffer>,
    pub shaders: ResourceTable<Shader>,
    pub input_assemblers: ResourceTable<InputAssembler>,
    pub descriptor_sets: ResourceTable<DescriptorSet>,
    pub pipeline_states: ResourceTable<PipelineState>,
}

fn report(err: Error) {
    logwise::error_sync!("{err}", err = logwise::privacy::LogIt(&err));
}

fn stale(kind: &'static str) {
    logwise::warn_sync!(
        "{err}",
        err = logwise::privacy::LogIt(&Error::StaleResource(kind))
    );
}

/// A backend plus everything created on it.
#[derive(Debug)]
pub struct Device<B: Backend> {
    backend: B,
    caps: DeviceCaps,
    config: DeviceConfig,
    cache: StateCache,
    resources: Resources,
    allocator: CommandAllocator,
}

impl<B: Backend> Device<B> {
    /// Wraps `backend`, querying its capabilities once and pushing the initial
    /// fixed-function state.
    pub fn new(mut backend: B, config: DeviceConfig) -> Self {
        let caps = backend.capabilities();
        let cache = StateCache::new(&caps);
        cache.apply_initial_state(&mut backend);
        logwise::info_sync!(
            "Device created with {units} texture units and {attributes} vertex attributes",
            units = caps.max_texture_units,
            attributes = caps.max_vertex_attributes
        );
        Device {
            backend,
            caps,
            config,
            cache,
            resources: Resources::default(),
            allocator: CommandAllocator::default(),
        }
    }

    pub fn caps(&self) -> &DeviceCaps {
        &self.caps
    }
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }
    pub fn backend(&self) -> &B {
        &self.backend
    }
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
    /// The pool new packages and command buffers draw their records from.
    pub fn allocator(&self) -> &CommandAllocator {
        &self.allocator
    }
    pub fn create_command_package(&self) -> CommandPackage {
        CommandPackage::new(&self.allocator)
    }
    pub fn create_command_buffer(&self) -> CommandBuffer {
        CommandBuffer::new(&self.allocator)
    }

    pub fn buffer(&self, id: BufferId) -> Option<&Buffer> {
        self.resources.buffers.get(id)
    }
    pub fn texture(&self, id: TextureId) -> Option<&Texture> {
        self.resources.textures.get(id)
    }
    pub fn sampler(&self, id: SamplerId) -> Option<&Sampler> {
        self.resources.samplers.get(id)
    }
    pub fn render_pass(&self, id: RenderPassId) -> Option<&RenderPass> {
        self.resources.render_passes.get(id)
    }
    pub fn framebuffer(&self, id: FramebufferId) -> Option<&Framebuffer> {
        self.resources.framebuffers.get(id)
    }
    pub fn shader(&self, id: ShaderId) -> Option<&Shader> {
        self.resources.shaders.get(id)
    }
    pub fn input_assembler(&self, id: InputAssemblerId) -> Option<&InputAssembler> {
        self.resources.input_assemblers.get(id)
    }
    pub fn descriptor_set(&self, id: DescriptorSetId) -> Option<&DescriptorSet> {
        self.resources.descriptor_sets.get(id)
    }
    pub fn pipeline_state(&self, id: PipelineStateId) -> Option<&PipelineState> {
        self.resources.pipeline_states.get(id)
    }

    // buffers

    pub fn create_buffer(&mut self, info: BufferInfo) -> BufferId {
        let mut buffer = Buffer::new(info);
        if let Err(e) = imp::buffer::create(&mut self.backend, &mut self.cache, &mut buffer) {
            report(e);
        }
        self.resources.buffers.insert(buffer)
    }

    /// A window onto an existing buffer.  Returns `None` if the parent is gone.
    pub fn create_buffer_view(&mut self, info: BufferViewInfo) -> Option<BufferId> {
        let Some(parent) = self.resources.buffers.get(info.buffer) else {
            stale("buffer");
            return None;
        };
        let view = Buffer::new_view(&info, parent);
        Some(self.resources.buffers.insert(view))
    }

    pub fn resize_buffer(&mut self, id: BufferId, size: u32) {
        let Some(buffer) = self.resources.buffers.get_mut(id) else {
            return stale("buffer");
        };
        imp::buffer::resize(&mut self.backend, &mut self.cache, buffer, size);
    }

    /// Writes `source` at byte `offset`.  Indirect buffers keep their first `offset`
    /// draws and append the rest.
    pub fn update_buffer(&mut self, id: BufferId, source: BufferSource<'_>, offset: u32, size: u32) {
        let Some(buffer) = self.resources.buffers.get_mut(id) else {
            return stale("buffer");
        };
        imp::buffer::update(&mut self.backend, &mut self.cache, buffer, source, offset, size);
    }

    pub fn destroy_buffer(&mut self, id: BufferId) {
        let Some(buffer) = self.resources.buffers.remove(id) else {
            return stale("buffer");
        };
        for (_, assembler) in self.resources.input_assemblers.iter_mut() {
            if assembler.references(id) {
                imp::input_assembler::release_vaos(&mut self.backend, &mut self.cache, assembler);
            }
        }
        imp::buffer::destroy(&mut self.backend, &mut self.cache, &buffer);
    }

    // textures

    pub fn create_texture(&mut self, info: TextureInfo) -> TextureId {
        let mut texture = Texture::new(info);
        if let Err(e) = imp::texture::create(&mut self.backend, &mut self.cache, &self.caps, &mut texture) {
            report(e);
        }
        self.resources.textures.insert(texture)
    }

    pub fn resize_texture(&mut self, id: TextureId, width: u32, height: u32) {
        let Some(texture) = self.resources.textures.get_mut(id) else {
            return stale("texture");
        };
        if let Err(e) =
            imp::texture::resize(&mut self.backend, &mut self.cache, &self.caps, texture, width, height)
        {
            report(e);
        }
    }

    pub fn destroy_texture(&mut self, id: TextureId) {
        let Some(texture) = self.resources.textures.remove(id) else {
            return stale("texture");
        };
        imp::texture::destroy(&mut self.backend, &mut self.cache, &texture);
    }

    /// Uploads one slice per region layer.
    pub fn copy_buffers_to_texture(
        &mut self,
        buffers: &[&[u8]],
        texture: TextureId,
        regions: &[BufferTextureCopy],
    ) {
        let Some(texture) = self.resources.textures.get(texture) else {
            return stale("texture");
        };
        imp::texture::copy_buffers_to_texture(&mut self.backend, &mut self.cache, buffers, texture, regions);
    }

    // samplers

    pub fn create_sampler(&mut self, info: SamplerInfo) -> SamplerId {
        let mut sampler = Sampler::new(info);
        if let Err(e) = imp::sampler::create(&mut self.backend, &mut sampler) {
            report(e);
        }
        self.resources.samplers.insert(sampler)
    }

    pub fn destroy_sampler(&mut self, id: SamplerId) {
        let Some(sampler) = self.resources.samplers.remove(id) else {
            return stale("sampler");
        };
        imp::sampler::destroy(&mut self.backend, &mut self.cache, &sampler);
    }

    // render passes and framebuffers

    pub fn create_render_pass(&mut self, info: RenderPassInfo) -> RenderPassId {
        self.resources.render_passes.insert(RenderPass { info })
    }

    pub fn destroy_render_pass(&mut self, id: RenderPassId) {
        if self.resources.render_passes.remove(id).is_none() {
            stale("render pass");
        }
    }

    /// Builds a framebuffer.  One with no attachments targets the default framebuffer.
    pub fn create_framebuffer(&mut self, info: FramebufferInfo) -> FramebufferId {
        let textures = &self.resources.textures;
        let resolve = |id: Option<TextureId>| {
            let id = id?;
            let texture = textures.get(id);
            if texture.is_none() {
                stale("texture");
            }
            texture
        };
        let colors: Vec<Option<&Texture>> = info.color_textures.iter().map(|&id| resolve(id)).collect();
        let depth_stencil = resolve(info.depth_stencil_texture);

        let mut framebuffer = Framebuffer {
            info,
            gl_framebuffer: None,
        };
        if let Err(e) = imp::framebuffer::create(
            &mut self.backend,
            &mut self.cache,
            &mut framebuffer,
            &colors,
            depth_stencil,
        ) {
            report(e);
        }
        self.resources.framebuffers.insert(framebuffer)
    }

    pub fn destroy_framebuffer(&mut self, id: FramebufferId) {
        let Some(framebuffer) = self.resources.framebuffers.remove(id) else {
            return stale("framebuffer");
        };
        imp::framebuffer::destroy(&mut self.backend, &mut self.cache, &framebuffer);
    }

    /// Copies `src_rect` of `src` into `dst_rect` of `dst`, scaling with `filter`.
    pub fn blit_framebuffer(
        &mut self,
        src: FramebufferId,
        dst: FramebufferId,
        src_rect: Rect,
        dst_rect: Rect,
        filter: Filter,
    ) {
        let framebuffers = &self.resources.framebuffers;
        let (Some(src), Some(dst)) = (framebuffers.get(src), framebuffers.get(dst)) else {
            return stale("framebuffer");
        };
        let src_depth_stencil = src
            .depth_stencil_texture()
            .and_then(|id| self.resources.textures.get(id));
        imp::framebuffer::blit(
            &mut self.backend,
            &mut self.cache,
            src,
            src_depth_stencil,
            dst,
            src_rect,
            dst_rect,
            filter,
        );
    }

    // shaders

    /// Compiles and links `info`.  The id is returned even when the build fails; check
    /// [`Shader::is_linked`].
    pub fn create_shader(&mut self, info: ShaderInfo) -> ShaderId {
        let mut shader = Shader::new(info);
        if let Err(e) = imp::shader::create(
            &mut self.backend,
            &mut self.cache,
            &self.caps,
            &self.config.binding_mapping,
            &self.config.shader_header,
            &mut shader,
        ) {
            // compile failures are logged where they happen, ahead of the source dump
            if !matches!(e, Error::ShaderCompile { .. }) {
                report(e);
            }
        }
        self.resources.shaders.insert(shader)
    }

    pub fn destroy_shader(&mut self, id: ShaderId) {
        let Some(shader) = self.resources.shaders.remove(id) else {
            return stale("shader");
        };
        // vertex-array objects recorded against the program die with it
        if let Some(program) = shader.gl_program() {
            for (_, assembler) in self.resources.input_assemblers.iter_mut() {
                if let Some(vao) = assembler.realized.vaos.remove(&program) {
                    if self.cache.gl_vao == Some(vao) {
                        self.cache.unbind_vao(&mut self.backend);
                    }
                    self.backend.delete_vertex_array(vao);
                }
            }
        }
        imp::shader::destroy(&mut self.backend, &mut self.cache, &shader);
    }

    // input assemblers

    /// Resolves attributes against their buffers.  Default draw counts come from the
    /// first vertex buffer and the index buffer.
    pub fn create_input_assembler(&mut self, info: InputAssemblerInfo) -> InputAssemblerId {
        let buffers = &self.resources.buffers;
        let vertex_buffers: Vec<Option<&Buffer>> = info
            .vertex_buffers
            .iter()
            .map(|&id| {
                let buffer = buffers.get(id);
                if buffer.is_none() {
                    stale("buffer");
                }
                buffer
            })
            .collect();
        let index_buffer = info.index_buffer.and_then(|id| buffers.get(id));
        let vertex_count = vertex_buffers.first().copied().flatten().map_or(0, Buffer::count);
        let index_count = index_buffer.map_or(0, Buffer::count);

        let mut assembler = InputAssembler::new(info, vertex_count, index_count);
        imp::input_assembler::create(&mut assembler, &vertex_buffers, index_buffer);
        self.resources.input_assemblers.insert(assembler)
    }

    pub fn destroy_input_assembler(&mut self, id: InputAssemblerId) {
        let Some(mut assembler) = self.resources.input_assemblers.remove(id) else {
            return stale("input assembler");
        };
        imp::input_assembler::destroy(&mut self.backend, &mut self.cache, &mut assembler);
        if self.cache.input_assembler == Some(id) {
            self.cache.input_assembler = None;
        }
    }

    // descriptor sets

    pub fn create_descriptor_set(&mut self, layout: &DescriptorSetLayoutInfo) -> DescriptorSetId {
        self.resources.descriptor_sets.insert(DescriptorSet::new(layout))
    }

    pub fn bind_descriptor_buffer(&mut self, set: DescriptorSetId, binding: u32, index: u32, buffer: BufferId) {
        match self.descriptor_slot(set, binding, index) {
            Some(slot) => slot.buffer = Some(buffer),
            None => stale("descriptor set"),
        }
    }

    pub fn bind_descriptor_texture(&mut self, set: DescriptorSetId, binding: u32, index: u32, texture: TextureId) {
        match self.descriptor_slot(set, binding, index) {
            Some(slot) => slot.texture = Some(texture),
            None => stale("descriptor set"),
        }
    }

    pub fn bind_descriptor_sampler(&mut self, set: DescriptorSetId, binding: u32, index: u32, sampler: SamplerId) {
        match self.descriptor_slot(set, binding, index) {
            Some(slot) => slot.sampler = Some(sampler),
            None => stale("descriptor set"),
        }
    }

    fn descriptor_slot(
        &mut self,
        set: DescriptorSetId,
        binding: u32,
        index: u32,
    ) -> Option<&mut crate::bindings::descriptor_set::Descriptor> {
        self.resources
            .descriptor_sets
            .get_mut(set)?
            .slot_mut(binding, index)
    }

    pub fn destroy_descriptor_set(&mut self, id: DescriptorSetId) {
        if self.resources.descriptor_sets.remove(id).is_none() {
            stale("descriptor set");
        }
    }

    // pipeline states

    pub fn create_pipeline_state(&mut self, info: PipelineStateInfo) -> PipelineStateId {
        if self.resources.shaders.get(info.shader).is_none() {
            stale("shader");
        }
        let gl_primitive = primitive_mode(info.primitive);
        self.resources
            .pipeline_states
            .insert(PipelineState { info, gl_primitive })
    }

    pub fn destroy_pipeline_state(&mut self, id: PipelineStateId) {
        if self.resources.pipeline_states.remove(id).is_none() {
            return stale("pipeline state");
        }
        if self.cache.pipeline_state == Some(id) {
            self.cache.pipeline_state = None;
        }
    }

    // execution

    /// Replays `package` against the backend.
    ///
    /// The package keeps its records, so it can be replayed again.  They return to the
    /// allocator's pools when the package is cleared or dropped, or when the
    /// [`CommandBuffer`] that owns it calls [`CommandBuffer::begin`].
    pub fn execute_commands(&mut self, package: &CommandPackage) {
        let _interval = logwise::perfwarn_begin!("execute_commands");
        Executor {
            backend: &mut self.backend,
            cache: &mut self.cache,
            resources: &mut self.resources,
            use_vao: self.config.use_vao,
        }
        .execute(package);
    }

    /// Executes each command buffer's package in order.
    pub fn submit(&mut self, command_buffers: &[&CommandBuffer]) {
        for command_buffer in command_buffers {
            self.execute_commands(command_buffer.package());
        }
    }
}
