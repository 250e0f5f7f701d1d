// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Buffer records.
//!
//! A [`Buffer`] pairs the immutable description the caller asked for with the small
//! backend realization (target, handle, offset) that only the lifecycle functions write.

use crate::bindings::visible_to::{BufferUsage, MemoryUsage};
use crate::imp::{GLenum, GlBuffer, gl};
use crate::resource_table::Id;

pub type BufferId = Id<Buffer>;

/// Creation parameters for a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BufferInfo {
    pub usage: BufferUsage,
    pub mem_usage: MemoryUsage,
    /// Size in bytes.
    pub size: u32,
    /// Size of one element in bytes (vertex size, index size, ...).
    pub stride: u32,
}

/// Creation parameters for a view into an existing buffer.
///
/// Views share the parent's backend storage; uniform bindings through a view start at
/// `offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferViewInfo {
    pub buffer: BufferId,
    pub offset: u32,
    pub range: u32,
}

/// One draw call's parameters.
///
/// Indirect buffers hold a list of these instead of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawInfo {
    pub vertex_count: u32,
    pub first_vertex: u32,
    pub index_count: u32,
    pub first_index: u32,
    pub vertex_offset: i32,
    pub instance_count: u32,
    pub first_instance: u32,
}

/// Data for [`crate::images::Device::update_buffer`].
#[derive(Debug, Clone, Copy)]
pub enum BufferSource<'a> {
    Bytes(&'a [u8]),
    /// Draw-info records for an indirect buffer.
    Indirect(&'a [DrawInfo]),
}

/// Owned form of [`BufferSource`], as stored in a recorded command.
#[derive(Debug, Clone, PartialEq)]
pub enum BufferData {
    Bytes(Vec<u8>),
    Indirect(Vec<DrawInfo>),
}

impl Default for BufferData {
    fn default() -> Self {
        BufferData::Bytes(Vec::new())
    }
}

impl BufferData {
    /// Replaces the contents with a copy of `source`, reusing the allocation when the
    /// kind matches.
    pub(crate) fn assign(&mut self, source: BufferSource<'_>) {
        match (self, source) {
            (BufferData::Bytes(bytes), BufferSource::Bytes(src)) => {
                bytes.clear();
                bytes.extend_from_slice(src);
            }
            (BufferData::Indirect(infos), BufferSource::Indirect(src)) => {
                infos.clear();
                infos.extend_from_slice(src);
            }
            (this, BufferSource::Bytes(src)) => *this = BufferData::Bytes(src.to_vec()),
            (this, BufferSource::Indirect(src)) => *this = BufferData::Indirect(src.to_vec()),
        }
    }
    pub(crate) fn as_source(&self) -> BufferSource<'_> {
        match self {
            BufferData::Bytes(bytes) => BufferSource::Bytes(bytes),
            BufferData::Indirect(infos) => BufferSource::Indirect(infos),
        }
    }
    pub(crate) fn clear(&mut self) {
        match self {
            BufferData::Bytes(bytes) => bytes.clear(),
            BufferData::Indirect(infos) => infos.clear(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct BufferRealization {
    pub gl_target: GLenum,
    pub gl_usage: GLenum,
    pub gl_buffer: Option<GlBuffer>,
    pub gl_offset: u32,
}

#[derive(Debug)]
pub struct Buffer {
    info: BufferInfo,
    view_of: Option<BufferId>,
    pub(crate) size: u32,
    pub(crate) realized: BufferRealization,
    pub(crate) indirects: Vec<DrawInfo>,
}

impl Buffer {
    pub(crate) fn new(info: BufferInfo) -> Self {
        Buffer {
            size: info.size,
            info,
            view_of: None,
            realized: BufferRealization::default(),
            indirects: Vec::new(),
        }
    }

    pub(crate) fn new_view(view: &BufferViewInfo, parent: &Buffer) -> Self {
        Buffer {
            info: BufferInfo {
                usage: parent.info.usage,
                mem_usage: parent.info.mem_usage,
                size: view.range,
                stride: parent.info.stride,
            },
            view_of: Some(view.buffer),
            size: view.range,
            realized: BufferRealization {
                gl_offset: view.offset,
                ..parent.realized
            },
            indirects: Vec::new(),
        }
    }

    pub fn usage(&self) -> BufferUsage {
        self.info.usage
    }
    pub fn mem_usage(&self) -> MemoryUsage {
        self.info.mem_usage
    }
    /// Current size in bytes.  Changes on resize.
    pub fn size(&self) -> u32 {
        self.size
    }
    pub fn stride(&self) -> u32 {
        self.info.stride
    }
    /// Number of `stride`-sized elements.
    pub fn count(&self) -> u32 {
        if self.info.stride == 0 {
            0
        } else {
            self.size / self.info.stride
        }
    }
    /// The parent buffer, if this is a view.
    pub fn view_of(&self) -> Option<BufferId> {
        self.view_of
    }
    pub fn gl_target(&self) -> GLenum {
        self.realized.gl_target
    }
    pub fn gl_usage(&self) -> GLenum {
        self.realized.gl_usage
    }
    pub fn gl_buffer(&self) -> Option<GlBuffer> {
        self.realized.gl_buffer
    }
    /// Byte offset into the backend buffer where this buffer begins.
    pub fn gl_offset(&self) -> u32 {
        self.realized.gl_offset
    }
    /// The recorded draw list of an indirect buffer.
    pub fn indirects(&self) -> &[DrawInfo] {
        &self.indirects
    }

    /// Index type for an index buffer of this stride.
    pub(crate) fn gl_index_type(&self) -> GLenum {
        match self.info.stride {
            1 => gl::UNSIGNED_BYTE,
            2 => gl::UNSIGNED_SHORT,
            4 => gl::UNSIGNED_INT,
            _ => gl::NONE,
        }
    }
}
