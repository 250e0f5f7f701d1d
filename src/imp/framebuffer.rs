// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Framebuffer lifecycle and blits.

use crate::bindings::sampler::Filter;
use crate::bindings::texture::Texture;
use crate::images::render_pass::{Framebuffer, Rect};
use crate::imp::gl::{self, GLenum};
use crate::imp::state_cache::StateCache;
use crate::imp::{Backend, Error};

fn attach<B: Backend>(backend: &mut B, attachment: GLenum, texture: &Texture) {
    match texture.gl_texture() {
        Some(handle) => {
            backend.framebuffer_texture_2d(attachment, texture.gl_target(), Some(handle), 0)
        }
        None => backend.framebuffer_renderbuffer(attachment, texture.gl_renderbuffer()),
    }
}

fn status_name(status: GLenum) -> Option<&'static str> {
    match status {
        gl::FRAMEBUFFER_INCOMPLETE_ATTACHMENT => Some("FRAMEBUFFER_INCOMPLETE_ATTACHMENT"),
        gl::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => {
            Some("FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT")
        }
        gl::FRAMEBUFFER_INCOMPLETE_DIMENSIONS => Some("FRAMEBUFFER_INCOMPLETE_DIMENSIONS"),
        gl::FRAMEBUFFER_UNSUPPORTED => Some("FRAMEBUFFER_UNSUPPORTED"),
        _ => None,
    }
}

/// Builds the backend framebuffer.  `colors` and `depth_stencil` are the resolved
/// attachment textures, in framebuffer order.  Onscreen framebuffers own no backend
/// object and return immediately.
pub(crate) fn create<B: Backend>(
    backend: &mut B,
    cache: &mut StateCache,
    framebuffer: &mut Framebuffer,
    colors: &[Option<&Texture>],
    depth_stencil: Option<&Texture>,
) -> Result<(), Error> {
    if !framebuffer.is_offscreen() {
        return Ok(());
    }
    let handle = backend
        .create_framebuffer()
        .ok_or(Error::BackendObject("framebuffer"))?;
    framebuffer.gl_framebuffer = Some(handle);
    cache.bind_framebuffer(backend, Some(handle));

    let mut attachments = Vec::with_capacity(colors.len());
    for (i, texture) in colors.iter().enumerate() {
        let Some(texture) = texture else { continue };
        let attachment = gl::COLOR_ATTACHMENT0 + i as GLenum;
        attach(backend, attachment, texture);
        attachments.push(attachment);
    }
    if let Some(texture) = depth_stencil {
        let attachment = if texture.format().info().has_stencil {
            gl::DEPTH_STENCIL_ATTACHMENT
        } else {
            gl::DEPTH_ATTACHMENT
        };
        attach(backend, attachment, texture);
    }
    backend.draw_buffers(&attachments);

    let status = backend.check_framebuffer_status();
    if status != gl::FRAMEBUFFER_COMPLETE {
        if let Some(name) = status_name(status) {
            logwise::error_sync!(
                "glCheckFramebufferStatus() - {name}",
                name = logwise::privacy::LogIt(name)
            );
        }
        return Err(Error::FramebufferIncomplete(status));
    }
    Ok(())
}

pub(crate) fn destroy<B: Backend>(backend: &mut B, cache: &mut StateCache, framebuffer: &Framebuffer) {
    let Some(handle) = framebuffer.gl_framebuffer else {
        return;
    };
    if cache.gl_framebuffer == Some(handle) {
        cache.bind_framebuffer(backend, None);
    }
    if cache.gl_read_framebuffer == Some(handle) {
        backend.bind_framebuffer(gl::READ_FRAMEBUFFER, None);
        cache.gl_read_framebuffer = None;
    }
    backend.delete_framebuffer(handle);
}

/// Copies `src_rect` of `src` into `dst_rect` of `dst`.
///
/// `src_depth_stencil` is the source's depth-stencil texture, if any; it selects the
/// depth and stencil bits of the copy mask.
#[allow(clippy::too_many_arguments)]
pub(crate) fn blit<B: Backend>(
    backend: &mut B,
    cache: &mut StateCache,
    src: &Framebuffer,
    src_depth_stencil: Option<&Texture>,
    dst: &Framebuffer,
    src_rect: Rect,
    dst_rect: Rect,
    filter: Filter,
) {
    if cache.gl_read_framebuffer != src.gl_framebuffer {
        backend.bind_framebuffer(gl::READ_FRAMEBUFFER, src.gl_framebuffer);
        cache.gl_read_framebuffer = src.gl_framebuffer;
    }
    let rebind = dst.gl_framebuffer != cache.gl_framebuffer;
    if rebind {
        backend.bind_framebuffer(gl::DRAW_FRAMEBUFFER, dst.gl_framebuffer);
    }

    let mut mask = 0;
    if !src.color_textures().is_empty() {
        mask |= gl::COLOR_BUFFER_BIT;
    }
    if let Some(texture) = src_depth_stencil {
        mask |= gl::DEPTH_BUFFER_BIT;
        if texture.format().info().has_stencil {
            mask |= gl::STENCIL_BUFFER_BIT;
        }
    }
    let gl_filter = match filter {
        Filter::Linear | Filter::Anisotropic => gl::LINEAR,
        _ => gl::NEAREST,
    };

    backend.blit_framebuffer(corners(src_rect), corners(dst_rect), mask, gl_filter);

    if rebind {
        // restores both draw and read bindings to the cached target
        backend.bind_framebuffer(gl::FRAMEBUFFER, cache.gl_framebuffer);
        cache.gl_read_framebuffer = cache.gl_framebuffer;
    }
}

fn corners(rect: Rect) -> [i32; 4] {
    [
        rect.x,
        rect.y,
        rect.x + rect.width as i32,
        rect.y + rect.height as i32,
    ]
}
