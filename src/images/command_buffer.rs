// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
A recorder on top of [`CommandPackage`].

Binding calls only update the recorder's view of what is bound.  The next
[`CommandBuffer::draw`] turns that view into one `BindStates` command, and only if
something changed since the previous draw; back-to-back draws with the same bindings
record nothing but the draws.

```
use state_and_commands::bindings::buffer::DrawInfo;
use state_and_commands::images::command_buffer::CommandBuffer;
use state_and_commands::images::commands::{CmdType, CommandAllocator};
use state_and_commands::images::render_pass::Rect;

let allocator = CommandAllocator::default();
let mut cb = CommandBuffer::new(&allocator);
cb.begin();
cb.set_viewport(Rect::new(0, 0, 640, 480));
cb.draw(&DrawInfo::default());
cb.draw(&DrawInfo::default());
cb.end();
assert_eq!(
    cb.package().cmd_types(),
    &[CmdType::BindStates, CmdType::Draw, CmdType::Draw]
);
```
*/

use crate::bindings::buffer::{BufferId, BufferSource, DrawInfo};
use crate::bindings::descriptor_set::DescriptorSetId;
use crate::bindings::texture::{BufferTextureCopy, TextureId};
use crate::images::commands::{
    CommandAllocator, CommandPackage, DepthBias, DepthBounds, StencilCompareMask,
    StencilWriteMask,
};
use crate::images::pipeline_state::{PipelineStateId, StencilFace};
use crate::images::render_pass::{FramebufferId, Rect, RenderPassId};
use crate::images::vertex_layout::InputAssemblerId;

#[derive(Debug, Clone, Default)]
struct BoundSet {
    set: Option<DescriptorSetId>,
    dynamic_offsets: Vec<u32>,
}

/// Dynamic state set since `begin`.
#[derive(Debug, Clone, Default)]
struct DynamicStates {
    viewport: Option<Rect>,
    scissor: Option<Rect>,
    line_width: Option<f32>,
    depth_bias: Option<DepthBias>,
    blend_constants: Option<[f32; 4]>,
    depth_bounds: Option<DepthBounds>,
    stencil_write_mask: Option<StencilWriteMask>,
    stencil_compare_mask: Option<StencilCompareMask>,
}

#[derive(Debug)]
pub struct CommandBuffer {
    package: CommandPackage,
    pipeline_state: Option<PipelineStateId>,
    input_assembler: Option<InputAssemblerId>,
    descriptor_sets: Vec<BoundSet>,
    dynamic: DynamicStates,
    is_state_invalid: bool,
    is_in_render_pass: bool,
}

impl CommandBuffer {
    pub fn new(allocator: &CommandAllocator) -> Self {
        CommandBuffer {
            package: CommandPackage::new(allocator),
            pipeline_state: None,
            input_assembler: None,
            descriptor_sets: Vec::new(),
            dynamic: DynamicStates::default(),
            is_state_invalid: false,
            is_in_render_pass: false,
        }
    }

    /// The recorded commands.
    pub fn package(&self) -> &CommandPackage {
        &self.package
    }

    /// Starts a fresh recording, dropping anything recorded before.
    pub fn begin(&mut self) {
        self.package.clear();
        self.pipeline_state = None;
        self.input_assembler = None;
        self.descriptor_sets.clear();
        self.dynamic = DynamicStates::default();
        self.is_state_invalid = false;
        self.is_in_render_pass = false;
    }

    pub fn end(&mut self) {
        if self.is_in_render_pass {
            logwise::warn_sync!("Command buffer ended inside a render pass");
            self.end_render_pass();
        }
        self.is_state_invalid = false;
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
        self.is_in_render_pass = true;
        self.package.begin_render_pass(
            render_pass,
            framebuffer,
            render_area,
            clear_colors,
            clear_depth,
            clear_stencil,
        );
    }

    pub fn end_render_pass(&mut self) {
        self.is_in_render_pass = false;
        self.package.end_render_pass();
    }

    pub fn bind_pipeline_state(&mut self, pipeline_state: PipelineStateId) {
        if self.pipeline_state != Some(pipeline_state) {
            self.pipeline_state = Some(pipeline_state);
            self.is_state_invalid = true;
        }
    }

    /// Binds `descriptor_set` at `set`.  `dynamic_offsets` holds one offset per dynamic
    /// binding of the set; the offsets of all bound sets are concatenated in set order.
    pub fn bind_descriptor_set(&mut self, set: u32, descriptor_set: DescriptorSetId, dynamic_offsets: &[u32]) {
        let index = set as usize;
        if self.descriptor_sets.len() <= index {
            self.descriptor_sets.resize_with(index + 1, BoundSet::default);
        }
        let bound = &mut self.descriptor_sets[index];
        if bound.set != Some(descriptor_set) || bound.dynamic_offsets != dynamic_offsets {
            bound.set = Some(descriptor_set);
            bound.dynamic_offsets.clear();
            bound.dynamic_offsets.extend_from_slice(dynamic_offsets);
            self.is_state_invalid = true;
        }
    }

    pub fn bind_input_assembler(&mut self, input_assembler: InputAssemblerId) {
        if self.input_assembler != Some(input_assembler) {
            self.input_assembler = Some(input_assembler);
            self.is_state_invalid = true;
        }
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        if self.dynamic.viewport != Some(viewport) {
            self.dynamic.viewport = Some(viewport);
            self.is_state_invalid = true;
        }
    }

    pub fn set_scissor(&mut self, scissor: Rect) {
        if self.dynamic.scissor != Some(scissor) {
            self.dynamic.scissor = Some(scissor);
            self.is_state_invalid = true;
        }
    }

    pub fn set_line_width(&mut self, width: f32) {
        if self.dynamic.line_width != Some(width) {
            self.dynamic.line_width = Some(width);
            self.is_state_invalid = true;
        }
    }

    pub fn set_depth_bias(&mut self, constant: f32, clamp: f32, slope: f32) {
        let bias = DepthBias {
            constant,
            clamp,
            slope,
        };
        if self.dynamic.depth_bias != Some(bias) {
            self.dynamic.depth_bias = Some(bias);
            self.is_state_invalid = true;
        }
    }

    pub fn set_blend_constants(&mut self, constants: [f32; 4]) {
        if self.dynamic.blend_constants != Some(constants) {
            self.dynamic.blend_constants = Some(constants);
            self.is_state_invalid = true;
        }
    }

    /// Recorded for completeness; the backend has no depth-bounds test.
    pub fn set_depth_bound(&mut self, min: f32, max: f32) {
        let bounds = DepthBounds { min, max };
        if self.dynamic.depth_bounds != Some(bounds) {
            self.dynamic.depth_bounds = Some(bounds);
            self.is_state_invalid = true;
        }
    }

    pub fn set_stencil_write_mask(&mut self, face: StencilFace, write_mask: u32) {
        let mask = StencilWriteMask { face, write_mask };
        if self.dynamic.stencil_write_mask != Some(mask) {
            self.dynamic.stencil_write_mask = Some(mask);
            self.is_state_invalid = true;
        }
    }

    pub fn set_stencil_compare_mask(&mut self, face: StencilFace, reference: i32, compare_mask: u32) {
        let mask = StencilCompareMask {
            face,
            reference,
            compare_mask,
        };
        if self.dynamic.stencil_compare_mask != Some(mask) {
            self.dynamic.stencil_compare_mask = Some(mask);
            self.is_state_invalid = true;
        }
    }

    pub fn draw(&mut self, info: &DrawInfo) {
        if self.is_state_invalid {
            self.flush_states();
        }
        self.package.draw(info);
    }

    pub fn update_buffer(&mut self, buffer: BufferId, source: BufferSource<'_>, offset: u32, size: u32) {
        self.package.update_buffer(buffer, source, offset, size);
    }

    pub fn copy_buffer_to_texture(
        &mut self,
        buffers: &[&[u8]],
        texture: TextureId,
        regions: &[BufferTextureCopy],
    ) {
        self.package.copy_buffer_to_texture(buffers, texture, regions);
    }

    /// Splices secondary command buffers in.  Their records are shared, not copied.
    pub fn execute(&mut self, command_buffers: &[&CommandBuffer]) {
        for cb in command_buffers {
            self.package.append(&cb.package);
        }
        // the secondaries left the backend in a state this recorder did not see
        self.is_state_invalid = true;
    }

    fn flush_states(&mut self) {
        let pipeline_state = self.pipeline_state;
        let input_assembler = self.input_assembler;
        let sets = &self.descriptor_sets;
        let dynamic = &self.dynamic;
        self.package.bind_states(|cmd| {
            cmd.pipeline_state = pipeline_state;
            cmd.input_assembler = input_assembler;
            cmd.descriptor_sets.extend(sets.iter().map(|b| b.set));
            for bound in sets {
                cmd.dynamic_offsets.extend_from_slice(&bound.dynamic_offsets);
            }
            cmd.viewport = dynamic.viewport;
            cmd.scissor = dynamic.scissor;
            cmd.line_width = dynamic.line_width;
            cmd.depth_bias = dynamic.depth_bias;
            cmd.blend_constants = dynamic.blend_constants;
            cmd.depth_bounds = dynamic.depth_bounds;
            cmd.stencil_write_mask = dynamic.stencil_write_mask;
            cmd.stencil_compare_mask = dynamic.stencil_compare_mask;
        });
        self.is_state_invalid = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::descriptor_set::{DescriptorSet, DescriptorSetLayoutInfo};
    use crate::images::commands::CmdType;
    use crate::resource_table::ResourceTable;

    #[test]
    fn unchanged_bindings_record_no_bind() {
        let allocator = CommandAllocator::default();
        let mut cb = CommandBuffer::new(&allocator);
        cb.begin();
        cb.set_line_width(2.0);
        cb.draw(&DrawInfo::default());
        cb.set_line_width(2.0);
        cb.draw(&DrawInfo::default());
        cb.set_line_width(3.0);
        cb.draw(&DrawInfo::default());
        assert_eq!(
            cb.package().cmd_types(),
            &[
                CmdType::BindStates,
                CmdType::Draw,
                CmdType::Draw,
                CmdType::BindStates,
                CmdType::Draw
            ]
        );
    }

    #[test]
    fn dynamic_offsets_concatenate_in_set_order() {
        let mut sets = ResourceTable::default();
        let layout = DescriptorSetLayoutInfo::default();
        let a = sets.insert(DescriptorSet::new(&layout));
        let b = sets.insert(DescriptorSet::new(&layout));

        let allocator = CommandAllocator::default();
        let mut cb = CommandBuffer::new(&allocator);
        cb.begin();
        cb.bind_descriptor_set(1, b, &[256]);
        cb.bind_descriptor_set(0, a, &[0, 64]);
        cb.draw(&DrawInfo::default());

        let cmd = &cb.package().bind_states_cmds[0];
        assert_eq!(cmd.descriptor_sets, vec![Some(a), Some(b)]);
        assert_eq!(cmd.dynamic_offsets, vec![0, 64, 256]);
    }

    #[test]
    fn begin_forgets_previous_recording() {
        let allocator = CommandAllocator::default();
        let mut cb = CommandBuffer::new(&allocator);
        cb.begin();
        cb.draw(&DrawInfo::default());
        cb.begin();
        assert!(cb.package().is_empty());
        assert_eq!(allocator.free_count(CmdType::Draw), 1);
    }
}
