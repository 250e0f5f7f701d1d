// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Texture records.

use crate::bindings::visible_to::{SampleCount, TextureFlags, TextureType};
use crate::imp::{GLenum, GlRenderbuffer, GlTexture};
use crate::pixel_formats::{Format, format_surfaces_size};
use crate::resource_table::Id;

pub type TextureId = Id<Texture>;

/// Creation parameters for a texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureInfo {
    pub ty: TextureType,
    pub format: Format,
    pub width: u32,
    pub height: u32,
    /// Number of mip levels, at least 1.
    pub mip_level: u32,
    pub samples: SampleCount,
    pub flags: TextureFlags,
}

impl Default for TextureInfo {
    fn default() -> Self {
        TextureInfo {
            ty: TextureType::Tex2D,
            format: Format::RGBA8,
            width: 1,
            height: 1,
            mip_level: 1,
            samples: SampleCount::X1,
            flags: TextureFlags::empty(),
        }
    }
}

/// A texture sub-resource selector for copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextureSubres {
    pub mip_level: u32,
    pub base_array_layer: u32,
    pub layer_count: u32,
}

/// One region of a buffer-to-texture copy.
///
/// Each region consumes one source slice per layer it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BufferTextureCopy {
    pub tex_offset: (u32, u32),
    pub tex_extent: (u32, u32),
    pub tex_subres: TextureSubres,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct TextureRealization {
    pub gl_target: GLenum,
    pub gl_internal_fmt: GLenum,
    pub gl_format: GLenum,
    pub gl_type: GLenum,
    pub gl_texture: Option<GlTexture>,
    pub gl_renderbuffer: Option<GlRenderbuffer>,
}

#[derive(Debug)]
pub struct Texture {
    pub(crate) info: TextureInfo,
    pub(crate) realized: TextureRealization,
}

impl Texture {
    pub(crate) fn new(info: TextureInfo) -> Self {
        Texture {
            info,
            realized: TextureRealization::default(),
        }
    }

    pub fn ty(&self) -> TextureType {
        self.info.ty
    }
    pub fn format(&self) -> Format {
        self.info.format
    }
    pub fn width(&self) -> u32 {
        self.info.width
    }
    pub fn height(&self) -> u32 {
        self.info.height
    }
    pub fn mip_level(&self) -> u32 {
        self.info.mip_level
    }
    pub fn samples(&self) -> SampleCount {
        self.info.samples
    }
    pub fn flags(&self) -> TextureFlags {
        self.info.flags
    }
    /// Byte size of every mip of every face.
    pub fn size(&self) -> u32 {
        let faces = match self.info.ty {
            TextureType::Cube => 6,
            _ => 1,
        };
        faces
            * format_surfaces_size(
                self.info.format,
                self.info.width,
                self.info.height,
                1,
                self.info.mip_level,
            )
    }
    pub fn gl_target(&self) -> GLenum {
        self.realized.gl_target
    }
    pub fn gl_internal_fmt(&self) -> GLenum {
        self.realized.gl_internal_fmt
    }
    pub fn gl_format(&self) -> GLenum {
        self.realized.gl_format
    }
    pub fn gl_type(&self) -> GLenum {
        self.realized.gl_type
    }
    pub fn gl_texture(&self) -> Option<GlTexture> {
        self.realized.gl_texture
    }
    pub fn gl_renderbuffer(&self) -> Option<GlRenderbuffer> {
        self.realized.gl_renderbuffer
    }
}
