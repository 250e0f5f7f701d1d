// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Vertex input descriptions.
//!
//! An [`InputAssembler`] binds named vertex attributes to the vertex buffers that feed
//! them, plus optional index and indirect buffers.  Attributes are matched to shader
//! inputs by name when the assembler is first drawn with a given program, and the
//! resulting vertex-array object is kept per program.
//!
//! # Example
//!
//! ```
//! use state_and_commands::images::vertex_layout::{Attribute, InputAssemblerInfo};
//! use state_and_commands::pixel_formats::Format;
//!
//! // position and uv interleaved in stream 0
//! let attributes = vec![
//!     Attribute::new("a_position", Format::RGB32F),
//!     Attribute::new("a_uv", Format::RG32F),
//! ];
//! # let _ = attributes;
//! ```

use std::collections::HashMap;

use crate::bindings::buffer::BufferId;
use crate::imp::{GLenum, GlBuffer, GlProgram, GlVertexArray};
use crate::pixel_formats::Format;
use crate::resource_table::Id;

pub type InputAssemblerId = Id<InputAssembler>;

/// One vertex attribute.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attribute {
    pub name: String,
    pub format: Format,
    pub is_normalized: bool,
    /// Index into [`InputAssemblerInfo::vertex_buffers`].
    pub stream: u32,
    /// Advance once per instance instead of once per vertex.
    pub is_instanced: bool,
}

impl Attribute {
    /// A per-vertex, unnormalized attribute in stream 0.
    pub fn new(name: &str, format: Format) -> Self {
        Attribute {
            name: name.to_string(),
            format,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputAssemblerInfo {
    pub attributes: Vec<Attribute>,
    /// One buffer per stream.
    pub vertex_buffers: Vec<BufferId>,
    pub index_buffer: Option<BufferId>,
    pub indirect_buffer: Option<BufferId>,
}

/// A resolved attribute: where it lives and how the backend reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlAttrib {
    pub name: String,
    pub gl_buffer: Option<GlBuffer>,
    pub gl_type: GLenum,
    /// Bytes per element.
    pub size: u32,
    /// Components per element.
    pub count: u32,
    pub stride: u32,
    pub offset: u32,
    pub is_normalized: bool,
    pub is_instanced: bool,
}

#[derive(Debug, Default)]
pub(crate) struct InputAssemblerRealization {
    pub gl_attribs: Vec<GlAttrib>,
    pub gl_index_type: GLenum,
    pub vaos: HashMap<GlProgram, GlVertexArray>,
}

#[derive(Debug)]
pub struct InputAssembler {
    pub(crate) info: InputAssemblerInfo,
    pub(crate) vertex_count: u32,
    pub(crate) index_count: u32,
    pub(crate) realized: InputAssemblerRealization,
}

impl InputAssembler {
    pub(crate) fn new(info: InputAssemblerInfo, vertex_count: u32, index_count: u32) -> Self {
        InputAssembler {
            info,
            vertex_count,
            index_count,
            realized: InputAssemblerRealization::default(),
        }
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.info.attributes
    }
    pub fn vertex_buffers(&self) -> &[BufferId] {
        &self.info.vertex_buffers
    }
    pub fn index_buffer(&self) -> Option<BufferId> {
        self.info.index_buffer
    }
    pub fn indirect_buffer(&self) -> Option<BufferId> {
        self.info.indirect_buffer
    }
    /// Element count of the first vertex buffer at creation.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
    /// Element count of the index buffer at creation, or 0.
    pub fn index_count(&self) -> u32 {
        self.index_count
    }
    pub fn gl_attribs(&self) -> &[GlAttrib] {
        &self.realized.gl_attribs
    }
    pub fn gl_index_type(&self) -> GLenum {
        self.realized.gl_index_type
    }
    /// The vertex-array object built for `program`, if any.
    pub fn vao(&self, program: GlProgram) -> Option<GlVertexArray> {
        self.realized.vaos.get(&program).copied()
    }
    pub fn vao_count(&self) -> usize {
        self.realized.vaos.len()
    }

    pub(crate) fn references(&self, buffer: BufferId) -> bool {
        self.info.vertex_buffers.contains(&buffer)
            || self.info.index_buffer == Some(buffer)
            || self.info.indirect_buffer == Some(buffer)
    }
}
