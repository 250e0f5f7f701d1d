// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Recorded commands and the packages that hold them.

A [`CommandPackage`] is an ordered list of commands of mixed kinds.  It stores one tag
per command in recording order plus one array per command kind, so the executor walks
the tags and pulls the next record of the tagged kind.  Records come from a shared
[`CommandAllocator`] and go back to it, zeroed, when the last package holding them
is cleared.

Records are reference counted.  [`CommandPackage::append`] shares the other
package's records instead of copying them, which is how secondary command buffers
are spliced into a primary one.

```
use state_and_commands::bindings::buffer::DrawInfo;
use state_and_commands::images::commands::{CmdType, CommandAllocator, CommandPackage};

let allocator = CommandAllocator::default();
let mut package = CommandPackage::new(&allocator);
package.draw(&DrawInfo {
    vertex_count: 3,
    ..Default::default()
});
assert_eq!(package.cmd_types(), &[CmdType::Draw]);
package.clear();
assert_eq!(allocator.free_count(CmdType::Draw), 1);
```
*/

use std::cell::RefCell;
use std::rc::Rc;

use crate::bindings::buffer::{BufferData, BufferId, BufferSource, DrawInfo};
use crate::bindings::descriptor_set::DescriptorSetId;
use crate::bindings::texture::{BufferTextureCopy, TextureId};
use crate::images::pipeline_state::{PipelineStateId, StencilFace};
use crate::images::render_pass::{FramebufferId, Rect, RenderPassId};
use crate::images::vertex_layout::InputAssemblerId;

/// Command kind tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmdType {
    BeginRenderPass,
    EndRenderPass,
    BindStates,
    Draw,
    UpdateBuffer,
    CopyBufferToTexture,
}

/// A poolable command record.
pub trait Command: Default {
    const TYPE: CmdType;
    /// Resets the record for reuse.  Keeps allocations.
    fn clear(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub struct BeginRenderPassCmd {
    pub render_pass: Option<RenderPassId>,
    pub framebuffer: Option<FramebufferId>,
    pub render_area: Rect,
    pub clear_colors: Vec<[f32; 4]>,
    pub clear_depth: f32,
    pub clear_stencil: i32,
}

impl Default for BeginRenderPassCmd {
    fn default() -> Self {
        BeginRenderPassCmd {
            render_pass: None,
            framebuffer: None,
            render_area: Rect::default(),
            clear_colors: Vec::new(),
            clear_depth: 1.0,
            clear_stencil: 0,
        }
    }
}

impl Command for BeginRenderPassCmd {
    const TYPE: CmdType = CmdType::BeginRenderPass;
    fn clear(&mut self) {
        self.render_pass = None;
        self.framebuffer = None;
        self.render_area = Rect::default();
        self.clear_colors.clear();
        self.clear_depth = 1.0;
        self.clear_stencil = 0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DepthBias {
    pub constant: f32,
    pub clamp: f32,
    pub slope: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DepthBounds {
    pub min: f32,
    pub max: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StencilWriteMask {
    pub face: StencilFace,
    pub write_mask: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StencilCompareMask {
    pub face: StencilFace,
    pub reference: i32,
    pub compare_mask: u32,
}

/// Everything a draw depends on.  `None` dynamic states leave the backend as it is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BindStatesCmd {
    pub pipeline_state: Option<PipelineStateId>,
    pub input_assembler: Option<InputAssemblerId>,
    /// Indexed by set number.
    pub descriptor_sets: Vec<Option<DescriptorSetId>>,
    /// Flat array numbered by the pipeline layout.
    pub dynamic_offsets: Vec<u32>,
    pub viewport: Option<Rect>,
    pub scissor: Option<Rect>,
    pub line_width: Option<f32>,
    pub depth_bias: Option<DepthBias>,
    pub blend_constants: Option<[f32; 4]>,
    pub depth_bounds: Option<DepthBounds>,
    pub stencil_write_mask: Option<StencilWriteMask>,
    pub stencil_compare_mask: Option<StencilCompareMask>,
}

impl Command for BindStatesCmd {
    const TYPE: CmdType = CmdType::BindStates;
    fn clear(&mut self) {
        self.pipeline_state = None;
        self.input_assembler = None;
        self.descriptor_sets.clear();
        self.dynamic_offsets.clear();
        self.viewport = None;
        self.scissor = None;
        self.line_width = None;
        self.depth_bias = None;
        self.blend_constants = None;
        self.depth_bounds = None;
        self.stencil_write_mask = None;
        self.stencil_compare_mask = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawCmd {
    pub draw_info: DrawInfo,
}

impl Command for DrawCmd {
    const TYPE: CmdType = CmdType::Draw;
    fn clear(&mut self) {
        self.draw_info = DrawInfo::default();
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateBufferCmd {
    pub buffer: Option<BufferId>,
    pub data: BufferData,
    pub offset: u32,
    pub size: u32,
}

impl Command for UpdateBufferCmd {
    const TYPE: CmdType = CmdType::UpdateBuffer;
    fn clear(&mut self) {
        self.buffer = None;
        self.data.clear();
        self.offset = 0;
        self.size = 0;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CopyBufferToTextureCmd {
    pub texture: Option<TextureId>,
    /// One slice per region and layer.
    pub buffers: Vec<Vec<u8>>,
    pub regions: Vec<BufferTextureCopy>,
}

impl Command for CopyBufferToTextureCmd {
    const TYPE: CmdType = CmdType::CopyBufferToTexture;
    fn clear(&mut self) {
        self.texture = None;
        self.buffers.clear();
        self.regions.clear();
    }
}

/// Free records of one kind.
#[derive(Debug)]
pub struct CommandPool<T> {
    free: Vec<T>,
}

impl<T> Default for CommandPool<T> {
    fn default() -> Self {
        CommandPool { free: Vec::new() }
    }
}

impl<T: Command> CommandPool<T> {
    fn alloc(&mut self) -> T {
        self.free.pop().unwrap_or_default()
    }

    /// Takes back a record if `cmd` held the last reference.
    fn release(&mut self, cmd: Rc<T>) {
        if let Ok(mut record) = Rc::try_unwrap(cmd) {
            record.clear();
            self.free.push(record);
        }
    }
}

#[derive(Debug, Default)]
struct Pools {
    begin_render_pass: CommandPool<BeginRenderPassCmd>,
    bind_states: CommandPool<BindStatesCmd>,
    draw: CommandPool<DrawCmd>,
    update_buffer: CommandPool<UpdateBufferCmd>,
    copy_buffer_to_texture: CommandPool<CopyBufferToTextureCmd>,
}

/// Per-kind record pools, shared by every package created from it.
///
/// Cloning yields another handle to the same pools.
#[derive(Debug, Clone, Default)]
pub struct CommandAllocator {
    pools: Rc<RefCell<Pools>>,
}

impl CommandAllocator {
    /// Number of zeroed records of `kind` waiting for reuse.
    pub fn free_count(&self, kind: CmdType) -> usize {
        let pools = self.pools.borrow();
        match kind {
            CmdType::BeginRenderPass => pools.begin_render_pass.free.len(),
            CmdType::BindStates => pools.bind_states.free.len(),
            CmdType::Draw => pools.draw.free.len(),
            CmdType::UpdateBuffer => pools.update_buffer.free.len(),
            CmdType::CopyBufferToTexture => pools.copy_buffer_to_texture.free.len(),
            CmdType::EndRenderPass => 0,
        }
    }
}

/// An ordered command list.  See the module documentation.
#[derive(Debug)]
pub struct CommandPackage {
    allocator: CommandAllocator,
    pub(crate) cmds: Vec<CmdType>,
    pub(crate) begin_render_pass_cmds: Vec<Rc<BeginRenderPassCmd>>,
    pub(crate) bind_states_cmds: Vec<Rc<BindStatesCmd>>,
    pub(crate) draw_cmds: Vec<Rc<DrawCmd>>,
    pub(crate) update_buffer_cmds: Vec<Rc<UpdateBufferCmd>>,
    pub(crate) copy_buffer_to_texture_cmds: Vec<Rc<CopyBufferToTextureCmd>>,
}

impl CommandPackage {
    pub fn new(allocator: &CommandAllocator) -> Self {
        CommandPackage {
            allocator: allocator.clone(),
            cmds: Vec::new(),
            begin_render_pass_cmds: Vec::new(),
            bind_states_cmds: Vec::new(),
            draw_cmds: Vec::new(),
            update_buffer_cmds: Vec::new(),
            copy_buffer_to_texture_cmds: Vec::new(),
        }
    }

    /// Tags in recording order.
    pub fn cmd_types(&self) -> &[CmdType] {
        &self.cmds
    }
    pub fn len(&self) -> usize {
        self.cmds.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn begin_render_pass(
        &mut self,
        render_pass: RenderPassId,
        framebuffer: FramebufferId,
        render_area: Rect,
        clear_colors: &[[f32; 4]],
        clear_depth: f32,
        clear_stencil: i32,
    ) {
        let mut cmd = self.allocator.pools.borrow_mut().begin_render_pass.alloc();
        cmd.render_pass = Some(render_pass);
        cmd.framebuffer = Some(framebuffer);
        cmd.render_area = render_area;
        cmd.clear_colors.extend_from_slice(clear_colors);
        cmd.clear_depth = clear_depth;
        cmd.clear_stencil = clear_stencil;
        self.begin_render_pass_cmds.push(Rc::new(cmd));
        self.cmds.push(CmdType::BeginRenderPass);
    }

    pub fn end_render_pass(&mut self) {
        self.cmds.push(CmdType::EndRenderPass);
    }

    /// Records a bind-states command filled in by `fill` on a zeroed record.
    pub fn bind_states(&mut self, fill: impl FnOnce(&mut BindStatesCmd)) {
        let mut cmd = self.allocator.pools.borrow_mut().bind_states.alloc();
        fill(&mut cmd);
        self.bind_states_cmds.push(Rc::new(cmd));
        self.cmds.push(CmdType::BindStates);
    }

    pub fn draw(&mut self, info: &DrawInfo) {
        let mut cmd = self.allocator.pools.borrow_mut().draw.alloc();
        cmd.draw_info = *info;
        self.draw_cmds.push(Rc::new(cmd));
        self.cmds.push(CmdType::Draw);
    }

    /// Copies `source` into the record; the caller's data may change after this returns.
    pub fn update_buffer(&mut self, buffer: BufferId, source: BufferSource<'_>, offset: u32, size: u32) {
        let mut cmd = self.allocator.pools.borrow_mut().update_buffer.alloc();
        cmd.buffer = Some(buffer);
        cmd.data.assign(source);
        cmd.offset = offset;
        cmd.size = size;
        self.update_buffer_cmds.push(Rc::new(cmd));
        self.cmds.push(CmdType::UpdateBuffer);
    }

    pub fn copy_buffer_to_texture(
        &mut self,
        buffers: &[&[u8]],
        texture: TextureId,
        regions: &[BufferTextureCopy],
    ) {
        let mut cmd = self.allocator.pools.borrow_mut().copy_buffer_to_texture.alloc();
        cmd.texture = Some(texture);
        cmd.buffers.extend(buffers.iter().map(|b| b.to_vec()));
        cmd.regions.extend_from_slice(regions);
        self.copy_buffer_to_texture_cmds.push(Rc::new(cmd));
        self.cmds.push(CmdType::CopyBufferToTexture);
    }

    /// Appends every command of `other`, sharing its records.
    pub fn append(&mut self, other: &CommandPackage) {
        self.cmds.extend_from_slice(&other.cmds);
        self.begin_render_pass_cmds
            .extend(other.begin_render_pass_cmds.iter().cloned());
        self.bind_states_cmds.extend(other.bind_states_cmds.iter().cloned());
        self.draw_cmds.extend(other.draw_cmds.iter().cloned());
        self.update_buffer_cmds
            .extend(other.update_buffer_cmds.iter().cloned());
        self.copy_buffer_to_texture_cmds
            .extend(other.copy_buffer_to_texture_cmds.iter().cloned());
    }

    /// Drops every command.  Records no other package holds return to the pools.
    pub fn clear(&mut self) {
        let mut pools = self.allocator.pools.borrow_mut();
        for cmd in self.begin_render_pass_cmds.drain(..) {
            pools.begin_render_pass.release(cmd);
        }
        for cmd in self.bind_states_cmds.drain(..) {
            pools.bind_states.release(cmd);
        }
        for cmd in self.draw_cmds.drain(..) {
            pools.draw.release(cmd);
        }
        for cmd in self.update_buffer_cmds.drain(..) {
            pools.update_buffer.release(cmd);
        }
        for cmd in self.copy_buffer_to_texture_cmds.drain(..) {
            pools.copy_buffer_to_texture.release(cmd);
        }
        self.cmds.clear();
    }
}

impl Drop for CommandPackage {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(count: u32) -> DrawInfo {
        DrawInfo {
            vertex_count: count,
            ..Default::default()
        }
    }

    #[test]
    fn records_are_reused_zeroed() {
        let allocator = CommandAllocator::default();
        let mut package = CommandPackage::new(&allocator);
        package.bind_states(|cmd| {
            cmd.line_width = Some(2.0);
            cmd.dynamic_offsets.extend_from_slice(&[16, 32]);
        });
        package.clear();
        assert_eq!(allocator.free_count(CmdType::BindStates), 1);

        package.bind_states(|cmd| {
            assert_eq!(cmd, &BindStatesCmd::default());
        });
        assert_eq!(allocator.free_count(CmdType::BindStates), 0);
    }

    #[test]
    fn shared_records_return_with_the_last_holder() {
        let allocator = CommandAllocator::default();
        let mut secondary = CommandPackage::new(&allocator);
        secondary.draw(&draw(3));
        secondary.draw(&draw(6));

        let mut primary = CommandPackage::new(&allocator);
        primary.end_render_pass();
        primary.append(&secondary);
        assert_eq!(
            primary.cmd_types(),
            &[CmdType::EndRenderPass, CmdType::Draw, CmdType::Draw]
        );
        assert_eq!(primary.draw_cmds[1].draw_info.vertex_count, 6);

        secondary.clear();
        assert_eq!(allocator.free_count(CmdType::Draw), 0);
        primary.clear();
        assert_eq!(allocator.free_count(CmdType::Draw), 2);
    }

    #[test]
    fn update_copies_source() {
        let allocator = CommandAllocator::default();
        let mut package = CommandPackage::new(&allocator);
        let mut data = vec![1u8, 2, 3, 4];
        let mut buffers = crate::resource_table::ResourceTable::default();
        let buffer: BufferId =
            buffers.insert(crate::bindings::buffer::Buffer::new(Default::default()));
        package.update_buffer(buffer, BufferSource::Bytes(&data), 0, 4);
        data[0] = 9;
        assert_eq!(
            package.update_buffer_cmds[0].data,
            BufferData::Bytes(vec![1, 2, 3, 4])
        );
    }
}
