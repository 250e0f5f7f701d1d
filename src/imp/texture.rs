// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Texture lifecycle.

use crate::bindings::texture::{BufferTextureCopy, Texture};
use crate::bindings::visible_to::{SampleCount, TextureFlags, TextureType};
use crate::imp::formats::{
    format_to_component_type, format_to_internal_format, format_to_wire_format,
    sample_count_to_samples,
};
use crate::imp::gl::{self, GLenum};
use crate::imp::state_cache::StateCache;
use crate::imp::{Backend, DeviceCaps, Error};
use crate::pixel_formats::format_size;

/// Whether creation or resize is allocating.  Creation gives ETC1 a placeholder image.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Allocation {
    Create,
    Resize,
}

fn check_size(texture: &Texture, caps: &DeviceCaps) {
    let max_size = texture.width().max(texture.height());
    let limit = match texture.realized.gl_target {
        gl::TEXTURE_CUBE_MAP => caps.max_cube_map_texture_size,
        _ => caps.max_texture_size,
    };
    if max_size > limit {
        logwise::warn_sync!(
            "Texture size {max_size} exceeds the device limit {limit}",
            max_size = max_size,
            limit = limit
        );
    }
}

/// Uploads the mip chain of one image target.
fn allocate_mips<B: Backend>(backend: &mut B, texture: &Texture, target: GLenum, allocation: Allocation) {
    let realized = &texture.realized;
    let format = texture.format();
    if !format.info().is_compressed {
        let (mut w, mut h) = (texture.width(), texture.height());
        for level in 0..texture.mip_level() {
            backend.tex_image_2d(
                target,
                level,
                realized.gl_internal_fmt,
                w,
                h,
                realized.gl_format,
                realized.gl_type,
            );
            w = (w >> 1).max(1);
            h = (h >> 1).max(1);
        }
    } else if realized.gl_internal_fmt != gl::COMPRESSED_RGB_ETC1_WEBGL {
        let (mut w, mut h) = (texture.width(), texture.height());
        for level in 0..texture.mip_level() {
            let zeros = vec![0u8; format_size(format, w, h, 1) as usize];
            backend.compressed_tex_image_2d(target, level, realized.gl_internal_fmt, w, h, &zeros);
            w = (w >> 1).max(1);
            h = (h >> 1).max(1);
        }
    } else if allocation == Allocation::Create {
        // ETC1 has no mip support
        let zeros = vec![0u8; format_size(format, 2, 2, 1) as usize];
        backend.compressed_tex_image_2d(target, 0, realized.gl_internal_fmt, 2, 2, &zeros);
    }
}

fn allocate<B: Backend>(
    backend: &mut B,
    cache: &mut StateCache,
    caps: &DeviceCaps,
    texture: &mut Texture,
    allocation: Allocation,
) -> Result<(), Error> {
    let format = texture.format();
    texture.realized.gl_internal_fmt = format_to_internal_format(format);
    texture.realized.gl_format = format_to_wire_format(format);
    texture.realized.gl_type = format_to_component_type(format);

    let ty = match texture.ty() {
        TextureType::Tex2D | TextureType::Cube => texture.ty(),
        other => {
            logwise::warn_sync!(
                "Unsupported texture type {ty}, using 2D",
                ty = logwise::privacy::LogIt(&other)
            );
            texture.info.ty = TextureType::Tex2D;
            TextureType::Tex2D
        }
    };
    texture.realized.gl_target = match ty {
        TextureType::Cube => gl::TEXTURE_CUBE_MAP,
        _ => gl::TEXTURE_2D,
    };
    check_size(texture, caps);

    if texture.size() == 0 {
        return Ok(());
    }

    if ty == TextureType::Tex2D && texture.samples() != SampleCount::X1 {
        let renderbuffer = match texture.realized.gl_renderbuffer {
            Some(r) => r,
            None => backend
                .create_renderbuffer()
                .ok_or(Error::BackendObject("renderbuffer"))?,
        };
        texture.realized.gl_renderbuffer = Some(renderbuffer);
        cache.bind_renderbuffer(backend, Some(renderbuffer));
        backend.renderbuffer_storage_multisample(
            sample_count_to_samples(texture.samples()),
            texture.realized.gl_internal_fmt,
            texture.width(),
            texture.height(),
        );
        return Ok(());
    }

    let handle = match texture.realized.gl_texture {
        Some(t) => t,
        None => backend.create_texture().ok_or(Error::BackendObject("texture"))?,
    };
    texture.realized.gl_texture = Some(handle);
    let target = texture.realized.gl_target;
    cache.bind_texture(backend, target, Some(handle));
    if ty == TextureType::Cube {
        for face in 0..6 {
            allocate_mips(backend, texture, gl::TEXTURE_CUBE_MAP_POSITIVE_X + face, allocation);
        }
    } else {
        allocate_mips(backend, texture, gl::TEXTURE_2D, allocation);
    }
    Ok(())
}

pub(crate) fn create<B: Backend>(
    backend: &mut B,
    cache: &mut StateCache,
    caps: &DeviceCaps,
    texture: &mut Texture,
) -> Result<(), Error> {
    allocate(backend, cache, caps, texture, Allocation::Create)
}

pub(crate) fn resize<B: Backend>(
    backend: &mut B,
    cache: &mut StateCache,
    caps: &DeviceCaps,
    texture: &mut Texture,
    width: u32,
    height: u32,
) -> Result<(), Error> {
    texture.info.width = width;
    texture.info.height = height;
    allocate(backend, cache, caps, texture, Allocation::Resize)
}

pub(crate) fn destroy<B: Backend>(backend: &mut B, cache: &mut StateCache, texture: &Texture) {
    if let Some(handle) = texture.realized.gl_texture {
        for unit in cache.gl_tex_units.iter_mut() {
            if *unit == Some(handle) {
                *unit = None;
            }
        }
        backend.delete_texture(handle);
    }
    if let Some(renderbuffer) = texture.realized.gl_renderbuffer {
        if cache.gl_renderbuffer == Some(renderbuffer) {
            cache.gl_renderbuffer = None;
        }
        backend.delete_renderbuffer(renderbuffer);
    }
}

/// Uploads `buffers` into `texture`, one slice per region and layer.
pub(crate) fn copy_buffers_to_texture<B: Backend>(
    backend: &mut B,
    cache: &mut StateCache,
    buffers: &[&[u8]],
    texture: &Texture,
    regions: &[BufferTextureCopy],
) {
    let realized = &texture.realized;
    cache.bind_texture(backend, realized.gl_target, realized.gl_texture);

    let is_compressed = texture.format().info().is_compressed;
    let mut sources = buffers.iter();
    let mut upload = |backend: &mut B, target: GLenum, region: &BufferTextureCopy| {
        let Some(pixels) = sources.next() else {
            logwise::error_sync!("Not enough source buffers, copy buffer to texture failed.");
            return;
        };
        let level = region.tex_subres.mip_level;
        let (x, y) = region.tex_offset;
        let (w, h) = region.tex_extent;
        if !is_compressed {
            backend.tex_sub_image_2d(
                target,
                level,
                x,
                y,
                w,
                h,
                realized.gl_format,
                realized.gl_type,
                pixels,
            );
        } else if realized.gl_internal_fmt != gl::COMPRESSED_RGB_ETC1_WEBGL {
            backend.compressed_tex_sub_image_2d(target, level, x, y, w, h, realized.gl_format, pixels);
        } else {
            backend.compressed_tex_image_2d(target, level, realized.gl_internal_fmt, w, h, pixels);
        }
    };

    match realized.gl_target {
        gl::TEXTURE_2D => {
            for region in regions {
                upload(backend, gl::TEXTURE_2D, region);
            }
        }
        gl::TEXTURE_CUBE_MAP => {
            for region in regions {
                let first = region.tex_subres.base_array_layer;
                for face in first..first + region.tex_subres.layer_count {
                    upload(backend, gl::TEXTURE_CUBE_MAP_POSITIVE_X + face, region);
                }
            }
        }
        _ => {
            logwise::error_sync!("Unsupported texture type, copy buffer to texture failed.");
        }
    }

    if texture.flags().contains(TextureFlags::GEN_MIPMAP) {
        backend.generate_mipmap(realized.gl_target);
    }
}
