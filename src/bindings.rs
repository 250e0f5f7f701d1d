/*! Defines resource binding types: buffers, textures, samplers and descriptor sets */

pub mod buffer;
pub mod descriptor_set;
pub mod sampler;
pub mod texture;
pub mod visible_to;

pub use buffer::{Buffer, BufferId, BufferInfo, BufferSource, BufferViewInfo, DrawInfo};
pub use descriptor_set::{
    DescriptorSet, DescriptorSetId, DescriptorSetLayoutBinding, DescriptorSetLayoutInfo,
    DescriptorType, PipelineLayout,
};
pub use sampler::{Address, Filter, Sampler, SamplerId, SamplerInfo};
pub use texture::{BufferTextureCopy, Texture, TextureId, TextureInfo, TextureSubres};
pub use visible_to::{BufferUsage, MemoryUsage, SampleCount, TextureFlags, TextureType};
