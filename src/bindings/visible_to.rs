// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Resource usage declarations.
//!
//! When creating GPU resources, declare how they will be used so the translation layer
//! can pick the backend target and the allocation hint.  This module provides:
//!
//! - [`BufferUsage`] - which pipeline slots a buffer feeds
//! - [`MemoryUsage`] - whether the CPU writes the buffer after creation
//! - [`TextureType`], [`SampleCount`] and [`TextureFlags`] - texture shape and behavior
//!
//! # Examples
//!
//! ```
//! use state_and_commands::bindings::visible_to::{BufferUsage, MemoryUsage};
//!
//! // A vertex buffer that is also a copy destination
//! let usage = BufferUsage::VERTEX | BufferUsage::TRANSFER_DST;
//! // Written from the CPU every frame
//! let memory = MemoryUsage::HOST | MemoryUsage::DEVICE;
//! # let _ = (usage, memory);
//! ```

bitflags::bitflags! {
    /// How a buffer will be consumed by the pipeline.
    ///
    /// A buffer may declare several usages, but only one determines its backend target,
    /// in priority order `VERTEX`, `INDEX`, `UNIFORM`, then `INDIRECT` or transfer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BufferUsage: u32 {
        const TRANSFER_SRC = 0x1;
        const TRANSFER_DST = 0x2;
        const INDEX = 0x4;
        const VERTEX = 0x8;
        const UNIFORM = 0x10;
        const STORAGE = 0x20;
        const INDIRECT = 0x40;
    }
}

bitflags::bitflags! {
    /// Where a buffer's memory lives.
    ///
    /// `HOST` means the CPU keeps writing the buffer, which selects the dynamic
    /// allocation hint.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MemoryUsage: u32 {
        const DEVICE = 0x1;
        const HOST = 0x2;
    }
}

bitflags::bitflags! {
    /// Optional texture behavior.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextureFlags: u32 {
        /// Regenerate the mip chain after every upload.
        const GEN_MIPMAP = 0x1;
    }
}

/// The shape of a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureType {
    Tex1D,
    #[default]
    Tex2D,
    Tex3D,
    Cube,
    Tex1DArray,
    Tex2DArray,
}

/// Multisample count.
///
/// `X1` textures are sampleable.  Anything above `X1` is render-only and realized as a
/// multisampled renderbuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum SampleCount {
    #[default]
    X1,
    X2,
    X4,
    X8,
    X16,
    X32,
    X64,
}
