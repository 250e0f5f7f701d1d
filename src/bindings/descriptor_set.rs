// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Descriptor sets and the pipeline layout that numbers their dynamic offsets.

A descriptor set is a flat array of resource slots.  Each binding of its layout owns
`count` consecutive slots; `descriptor_indices[binding]` is the first of them.  The
command layer only reads descriptor sets; the caller fills them through
[`crate::images::Device::bind_descriptor_buffer`] and friends.
*/

use crate::bindings::buffer::BufferId;
use crate::bindings::sampler::SamplerId;
use crate::bindings::texture::TextureId;
use crate::resource_table::Id;

pub type DescriptorSetId = Id<DescriptorSet>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DescriptorType {
    #[default]
    UniformBuffer,
    /// A uniform buffer whose offset is supplied at bind time.
    DynamicUniformBuffer,
    /// A texture and sampler pair.
    Sampler,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DescriptorSetLayoutBinding {
    pub binding: u32,
    pub descriptor_type: DescriptorType,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DescriptorSetLayoutInfo {
    pub bindings: Vec<DescriptorSetLayoutBinding>,
}

impl DescriptorSetLayoutInfo {
    /// First flat slot of each binding number.  Unused binding numbers map to the slot
    /// count so far.
    fn descriptor_indices(&self) -> Vec<u32> {
        let max_binding = self.bindings.iter().map(|b| b.binding + 1).max().unwrap_or(0);
        let mut indices = vec![0; max_binding as usize];
        let mut sorted: Vec<&DescriptorSetLayoutBinding> = self.bindings.iter().collect();
        sorted.sort_by_key(|b| b.binding);
        let mut next = 0;
        let mut cursor = 0;
        for slot in 0..max_binding {
            indices[slot as usize] = next;
            if let Some(b) = sorted.get(cursor).filter(|b| b.binding == slot) {
                next += b.count;
                cursor += 1;
            }
        }
        indices
    }

    fn descriptor_count(&self) -> u32 {
        self.bindings.iter().map(|b| b.count).sum()
    }
}

/// One resource slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Descriptor {
    pub ty: DescriptorType,
    pub buffer: Option<BufferId>,
    pub texture: Option<TextureId>,
    pub sampler: Option<SamplerId>,
}

#[derive(Debug)]
pub struct DescriptorSet {
    pub(crate) descriptors: Vec<Descriptor>,
    pub(crate) descriptor_indices: Vec<u32>,
}

impl DescriptorSet {
    pub(crate) fn new(layout: &DescriptorSetLayoutInfo) -> Self {
        let mut descriptors = vec![Descriptor::default(); layout.descriptor_count() as usize];
        let descriptor_indices = layout.descriptor_indices();
        for b in &layout.bindings {
            let first = descriptor_indices[b.binding as usize] as usize;
            for d in &mut descriptors[first..first + b.count as usize] {
                d.ty = b.descriptor_type;
            }
        }
        DescriptorSet {
            descriptors,
            descriptor_indices,
        }
    }

    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }
    pub fn descriptor_indices(&self) -> &[u32] {
        &self.descriptor_indices
    }

    /// The slot for element `index` of `binding`, if the layout has one.
    pub(crate) fn slot_mut(&mut self, binding: u32, index: u32) -> Option<&mut Descriptor> {
        let first = *self.descriptor_indices.get(binding as usize)?;
        self.descriptors.get_mut((first + index) as usize)
    }

    pub(crate) fn slot(&self, binding: u32, index: u32) -> Option<&Descriptor> {
        let first = *self.descriptor_indices.get(binding as usize)?;
        self.descriptors.get((first + index) as usize)
    }
}

/// Per-set dynamic-offset numbering.
///
/// `dynamic_offset_indices[set][binding]` is the index of that binding's offset in the
/// flat array passed to `bind_descriptor_set`, or -1 for bindings with a fixed offset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PipelineLayout {
    pub(crate) dynamic_offset_indices: Vec<Vec<i32>>,
    pub(crate) dynamic_offset_offsets: Vec<u32>,
    pub(crate) dynamic_offset_count: u32,
}

impl PipelineLayout {
    pub fn new(set_layouts: &[DescriptorSetLayoutInfo]) -> Self {
        let mut dynamic_offset_indices = Vec::with_capacity(set_layouts.len());
        let mut dynamic_offset_offsets = Vec::with_capacity(set_layouts.len());
        let mut dynamic_offset_count = 0u32;
        for layout in set_layouts {
            let max_binding = layout.bindings.iter().map(|b| b.binding + 1).max().unwrap_or(0);
            let mut indices = vec![-1i32; max_binding as usize];
            let set_start = dynamic_offset_count;
            let mut j = 0;
            for b in &layout.bindings {
                if b.descriptor_type == DescriptorType::DynamicUniformBuffer {
                    indices[b.binding as usize] = (set_start + j) as i32;
                    j += b.count.max(1);
                }
            }
            dynamic_offset_offsets.push(set_start);
            dynamic_offset_count += j;
            dynamic_offset_indices.push(indices);
        }
        PipelineLayout {
            dynamic_offset_indices,
            dynamic_offset_offsets,
            dynamic_offset_count,
        }
    }

    /// Global dynamic-offset index for `(set, binding)`, or -1.
    pub fn dynamic_offset_index(&self, set: u32, binding: u32) -> i32 {
        self.dynamic_offset_indices
            .get(set as usize)
            .and_then(|s| s.get(binding as usize))
            .copied()
            .unwrap_or(-1)
    }

    /// Where `set`'s offsets begin in the flat dynamic-offset array.
    pub fn dynamic_offset_offset(&self, set: u32) -> u32 {
        self.dynamic_offset_offsets.get(set as usize).copied().unwrap_or(0)
    }

    pub fn dynamic_offset_count(&self) -> u32 {
        self.dynamic_offset_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(binding: u32, descriptor_type: DescriptorType, count: u32) -> DescriptorSetLayoutBinding {
        DescriptorSetLayoutBinding {
            binding,
            descriptor_type,
            count,
        }
    }

    #[test]
    fn array_bindings_take_consecutive_slots() {
        let layout = DescriptorSetLayoutInfo {
            bindings: vec![
                binding(0, DescriptorType::UniformBuffer, 1),
                binding(1, DescriptorType::Sampler, 3),
                binding(2, DescriptorType::Sampler, 1),
            ],
        };
        let set = DescriptorSet::new(&layout);
        assert_eq!(set.descriptor_indices(), &[0, 1, 4]);
        assert_eq!(set.descriptors().len(), 5);
        assert_eq!(set.descriptors()[3].ty, DescriptorType::Sampler);
    }

    #[test]
    fn dynamic_offsets_number_across_sets() {
        let layouts = [
            DescriptorSetLayoutInfo {
                bindings: vec![
                    binding(0, DescriptorType::DynamicUniformBuffer, 1),
                    binding(1, DescriptorType::UniformBuffer, 1),
                ],
            },
            DescriptorSetLayoutInfo {
                bindings: vec![
                    binding(0, DescriptorType::UniformBuffer, 1),
                    binding(1, DescriptorType::DynamicUniformBuffer, 1),
                    binding(2, DescriptorType::DynamicUniformBuffer, 1),
                ],
            },
        ];
        let layout = PipelineLayout::new(&layouts);
        assert_eq!(layout.dynamic_offset_index(0, 0), 0);
        assert_eq!(layout.dynamic_offset_index(0, 1), -1);
        assert_eq!(layout.dynamic_offset_index(1, 1), 1);
        assert_eq!(layout.dynamic_offset_index(1, 2), 2);
        assert_eq!(layout.dynamic_offset_offset(1), 1);
        assert_eq!(layout.dynamic_offset_count(), 3);
        assert_eq!(layout.dynamic_offset_index(5, 0), -1);
    }
}
