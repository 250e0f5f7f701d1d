/*! Render-side records, command recording and the device that executes them */

pub mod command_buffer;
pub mod commands;
pub(crate) mod device;
pub mod pipeline_state;
pub mod render_pass;
pub mod shader;
pub mod vertex_layout;

pub use command_buffer::CommandBuffer;
pub use commands::{CmdType, CommandAllocator, CommandPackage};
pub use device::{BindingMappingInfo, Device, DeviceConfig};
pub use pipeline_state::{PipelineState, PipelineStateId, PipelineStateInfo};
pub use render_pass::{
    Framebuffer, FramebufferId, FramebufferInfo, Rect, RenderPass, RenderPassId, RenderPassInfo,
};
pub use shader::{Shader, ShaderId, ShaderInfo};
pub use vertex_layout::{Attribute, InputAssembler, InputAssemblerId, InputAssemblerInfo};
