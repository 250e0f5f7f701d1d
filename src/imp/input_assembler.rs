// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Input assembler lifecycle.

use crate::bindings::buffer::Buffer;
use crate::images::vertex_layout::{GlAttrib, InputAssembler};
use crate::imp::formats::format_to_component_type;
use crate::imp::state_cache::StateCache;
use crate::imp::{Backend, gl};

/// Resolves each attribute against its stream's buffer.  `vertex_buffers` follows the
/// assembler's stream order; a missing buffer leaves its attributes unsourced.
pub(crate) fn create(
    assembler: &mut InputAssembler,
    vertex_buffers: &[Option<&Buffer>],
    index_buffer: Option<&Buffer>,
) {
    assembler.realized.gl_index_type = match index_buffer {
        Some(buffer) => buffer.gl_index_type(),
        None => gl::NONE,
    };

    let mut offsets = vec![0u32; vertex_buffers.len()];
    let mut attribs = Vec::with_capacity(assembler.info.attributes.len());
    for attribute in &assembler.info.attributes {
        let stream = attribute.stream as usize;
        let buffer = vertex_buffers.get(stream).copied().flatten();
        if buffer.is_none() {
            logwise::warn_sync!(
                "Attribute '{name}' reads stream {stream}, which has no buffer",
                name = logwise::privacy::LogIt(&attribute.name),
                stream = stream
            );
        }
        let info = attribute.format.info();
        let stream_offset = offsets.get(stream).copied().unwrap_or(0);
        attribs.push(GlAttrib {
            name: attribute.name.clone(),
            gl_buffer: buffer.and_then(Buffer::gl_buffer),
            gl_type: format_to_component_type(attribute.format),
            size: info.size,
            count: info.count,
            stride: buffer.map_or(0, Buffer::stride),
            offset: buffer.map_or(0, Buffer::gl_offset) + stream_offset,
            is_normalized: attribute.is_normalized,
            is_instanced: attribute.is_instanced,
        });
        if let Some(o) = offsets.get_mut(stream) {
            *o += info.size;
        }
    }
    assembler.realized.gl_attribs = attribs;
}

/// Deletes every vertex-array object built for `assembler`, leaving the record usable;
/// the next draw rebuilds what it needs.
pub(crate) fn release_vaos<B: Backend>(backend: &mut B, cache: &mut StateCache, assembler: &mut InputAssembler) {
    if let Some(current) = cache.gl_vao {
        if assembler.realized.vaos.values().any(|&vao| vao == current) {
            cache.unbind_vao(backend);
        }
    }
    for (_, vao) in assembler.realized.vaos.drain() {
        backend.delete_vertex_array(vao);
    }
}

pub(crate) fn destroy<B: Backend>(backend: &mut B, cache: &mut StateCache, assembler: &mut InputAssembler) {
    release_vaos(backend, cache, assembler);
    assembler.realized.gl_attribs.clear();
}
