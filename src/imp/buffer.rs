// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Buffer lifecycle.

use crate::bindings::buffer::{Buffer, BufferSource};
use crate::bindings::visible_to::{BufferUsage, MemoryUsage};
use crate::imp::gl::{self, GLenum};
use crate::imp::state_cache::StateCache;
use crate::imp::{Backend, Error};

/// Backend target for `usage`, in priority order.
pub(crate) fn target_for_usage(usage: BufferUsage) -> GLenum {
    if usage.contains(BufferUsage::VERTEX) {
        gl::ARRAY_BUFFER
    } else if usage.contains(BufferUsage::INDEX) {
        gl::ELEMENT_ARRAY_BUFFER
    } else if usage.contains(BufferUsage::UNIFORM) {
        gl::UNIFORM_BUFFER
    } else if usage.intersects(
        BufferUsage::INDIRECT | BufferUsage::TRANSFER_DST | BufferUsage::TRANSFER_SRC,
    ) {
        gl::NONE
    } else {
        logwise::warn_sync!(
            "Unsupported buffer usage {usage}, no storage allocated",
            usage = logwise::privacy::LogIt(&usage)
        );
        gl::NONE
    }
}

fn usage_hint(mem_usage: MemoryUsage) -> GLenum {
    if mem_usage.contains(MemoryUsage::HOST) {
        gl::DYNAMIC_DRAW
    } else {
        gl::STATIC_DRAW
    }
}

/// Allocates `buffer.size` bytes on its target, leaving nothing bound.
fn allocate<B: Backend>(backend: &mut B, cache: &mut StateCache, buffer: &Buffer) {
    let target = buffer.realized.gl_target;
    if target == gl::ARRAY_BUFFER || target == gl::ELEMENT_ARRAY_BUFFER {
        cache.unbind_vao(backend);
    }
    cache.bind_buffer(backend, target, buffer.realized.gl_buffer);
    backend.buffer_data_size(target, buffer.size, buffer.realized.gl_usage);
    backend.bind_buffer(target, None);
    cache.bind_buffer_forget(target);
}

pub(crate) fn create<B: Backend>(
    backend: &mut B,
    cache: &mut StateCache,
    buffer: &mut Buffer,
) -> Result<(), Error> {
    let target = target_for_usage(buffer.usage());
    buffer.realized.gl_target = target;
    buffer.realized.gl_usage = usage_hint(buffer.mem_usage());
    if target == gl::NONE {
        return Ok(());
    }
    let handle = backend.create_buffer().ok_or(Error::BackendObject("buffer"))?;
    buffer.realized.gl_buffer = Some(handle);
    if buffer.size > 0 {
        allocate(backend, cache, buffer);
    }
    Ok(())
}

pub(crate) fn resize<B: Backend>(backend: &mut B, cache: &mut StateCache, buffer: &mut Buffer, size: u32) {
    buffer.size = size;
    if buffer.realized.gl_target == gl::NONE || buffer.realized.gl_buffer.is_none() {
        return;
    }
    allocate(backend, cache, buffer);
}

pub(crate) fn update<B: Backend>(
    backend: &mut B,
    cache: &mut StateCache,
    buffer: &mut Buffer,
    source: BufferSource<'_>,
    offset: u32,
    size: u32,
) {
    if buffer.usage().contains(BufferUsage::INDIRECT) {
        match source {
            BufferSource::Indirect(infos) => {
                buffer.indirects.truncate(offset as usize);
                buffer.indirects.extend_from_slice(infos);
            }
            BufferSource::Bytes(_) => {
                logwise::error_sync!("Indirect buffers take draw infos, update buffer failed.");
            }
        }
        return;
    }
    let BufferSource::Bytes(data) = source else {
        logwise::error_sync!("Draw infos can only be written to indirect buffers, update buffer failed.");
        return;
    };
    let target = buffer.realized.gl_target;
    match target {
        gl::ARRAY_BUFFER | gl::ELEMENT_ARRAY_BUFFER => cache.unbind_vao(backend),
        gl::UNIFORM_BUFFER => {}
        _ => {
            logwise::error_sync!("Unsupported buffer type, update buffer failed.");
            return;
        }
    }
    cache.bind_buffer(backend, target, buffer.realized.gl_buffer);
    let len = (size as usize).min(data.len());
    backend.buffer_sub_data(target, buffer.realized.gl_offset + offset, &data[..len]);
}

/// Unbinds `buffer` from every cached slot and releases its storage.  Views own no
/// storage and are only unbound.
pub(crate) fn destroy<B: Backend>(backend: &mut B, cache: &mut StateCache, buffer: &Buffer) {
    let Some(handle) = buffer.realized.gl_buffer else {
        return;
    };
    let target = buffer.realized.gl_target;
    if buffer.view_of().is_none() {
        match target {
            gl::ARRAY_BUFFER | gl::ELEMENT_ARRAY_BUFFER => {
                cache.unbind_vao(backend);
                backend.bind_buffer(target, None);
                cache.bind_buffer_forget(target);
            }
            gl::UNIFORM_BUFFER => {
                backend.bind_buffer(target, None);
                cache.bind_buffer_forget(target);
            }
            _ => {}
        }
    }
    for (slot, offset) in cache
        .gl_bind_ubos
        .iter_mut()
        .zip(cache.gl_bind_ubo_offsets.iter_mut())
    {
        if *slot == Some(handle) {
            *slot = None;
            *offset = 0;
        }
    }
    if buffer.view_of().is_none() {
        backend.delete_buffer(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_wins_over_transfer() {
        assert_eq!(
            target_for_usage(BufferUsage::VERTEX | BufferUsage::TRANSFER_DST),
            gl::ARRAY_BUFFER
        );
        assert_eq!(
            target_for_usage(BufferUsage::INDEX | BufferUsage::UNIFORM),
            gl::ELEMENT_ARRAY_BUFFER
        );
        assert_eq!(target_for_usage(BufferUsage::INDIRECT), gl::NONE);
        assert_eq!(target_for_usage(BufferUsage::STORAGE), gl::NONE);
    }

    #[test]
    fn host_memory_is_dynamic() {
        assert_eq!(usage_hint(MemoryUsage::HOST | MemoryUsage::DEVICE), gl::DYNAMIC_DRAW);
        assert_eq!(usage_hint(MemoryUsage::DEVICE), gl::STATIC_DRAW);
    }
}
