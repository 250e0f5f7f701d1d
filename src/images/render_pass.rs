// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Render passes and the framebuffers they render into.

A [`RenderPass`] says what happens to each attachment when a pass begins: keep its
contents, clear it, or let the backend throw it away.  A [`Framebuffer`] pairs a render
pass with the textures it writes.  A framebuffer with no attachments is the default
(onscreen) target and owns no backend object.
*/

use crate::bindings::texture::TextureId;
use crate::bindings::visible_to::SampleCount;
use crate::imp::GlFramebuffer;
use crate::pixel_formats::Format;
use crate::resource_table::Id;

pub type RenderPassId = Id<RenderPass>;
pub type FramebufferId = Id<Framebuffer>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoadOp {
    #[default]
    Load,
    Clear,
    /// Previous contents are undefined.  Realized as an invalidate hint.
    Discard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StoreOp {
    #[default]
    Store,
    Discard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorAttachment {
    pub format: Format,
    pub sample_count: SampleCount,
    pub load_op: LoadOp,
    pub store_op: StoreOp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DepthStencilAttachment {
    pub format: Format,
    pub sample_count: SampleCount,
    pub depth_load_op: LoadOp,
    pub depth_store_op: StoreOp,
    pub stencil_load_op: LoadOp,
    pub stencil_store_op: StoreOp,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderPassInfo {
    pub color_attachments: Vec<ColorAttachment>,
    pub depth_stencil_attachment: Option<DepthStencilAttachment>,
}

#[derive(Debug)]
pub struct RenderPass {
    pub(crate) info: RenderPassInfo,
}

impl RenderPass {
    pub fn color_attachments(&self) -> &[ColorAttachment] {
        &self.info.color_attachments
    }
    pub fn depth_stencil_attachment(&self) -> Option<&DepthStencilAttachment> {
        self.info.depth_stencil_attachment.as_ref()
    }
}

/// A pixel rectangle, used for render areas, viewports and scissors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramebufferInfo {
    pub render_pass: RenderPassId,
    /// One per color attachment of the render pass.
    pub color_textures: Vec<Option<TextureId>>,
    pub depth_stencil_texture: Option<TextureId>,
}

#[derive(Debug)]
pub struct Framebuffer {
    pub(crate) info: FramebufferInfo,
    pub(crate) gl_framebuffer: Option<GlFramebuffer>,
}

impl Framebuffer {
    pub fn render_pass(&self) -> RenderPassId {
        self.info.render_pass
    }
    pub fn color_textures(&self) -> &[Option<TextureId>] {
        &self.info.color_textures
    }
    pub fn depth_stencil_texture(&self) -> Option<TextureId> {
        self.info.depth_stencil_texture
    }
    /// False for the default target.
    pub fn is_offscreen(&self) -> bool {
        !self.info.color_textures.is_empty() || self.info.depth_stencil_texture.is_some()
    }
    pub fn gl_framebuffer(&self) -> Option<GlFramebuffer> {
        self.gl_framebuffer
    }
}
