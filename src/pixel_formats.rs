// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Device-independent pixel formats.
//!
//! Every texture, render-pass attachment and vertex attribute in state_and_commands is
//! described with a [`Format`].  The format itself knows nothing about any backend; the
//! backend enum triples (wire format, internal format, component type) live in the
//! backend translation tables.
//!
//! What a format *does* know is its memory shape, exposed through [`FormatInfo`]:
//!
//! - bytes per pixel (or per block, for block-compressed formats)
//! - number of components
//! - whether it carries depth and/or stencil
//! - whether it is block-compressed
//!
//! and the total byte size of an image through [`format_size`].
//!
//! # Examples
//!
//! ```
//! use state_and_commands::pixel_formats::{Format, format_size};
//!
//! assert_eq!(Format::RGBA8.info().size, 4);
//! assert_eq!(format_size(Format::RGBA8, 8, 8, 1), 256);
//! // 4x4 blocks of 8 bytes
//! assert_eq!(format_size(Format::BC1, 8, 8, 1), 32);
//! ```

pub use half::f16;

const HALF: u32 = std::mem::size_of::<f16>() as u32;

/// An abstract pixel format.
///
/// The declaration order is part of the public contract: it matches the order used by
/// serialized assets and by the lookup tables that index on it.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Unknown,

    A8,
    L8,
    LA8,

    R8,
    R8SN,
    R8UI,
    R8I,
    R16F,
    R16UI,
    R16I,
    R32F,
    R32UI,
    R32I,

    RG8,
    RG8SN,
    RG8UI,
    RG8I,
    RG16F,
    RG16UI,
    RG16I,
    RG32F,
    RG32UI,
    RG32I,

    RGB8,
    SRGB8,
    RGB8SN,
    RGB8UI,
    RGB8I,
    RGB16F,
    RGB16UI,
    RGB16I,
    RGB32F,
    RGB32UI,
    RGB32I,

    RGBA8,
    BGRA8,
    SRGB8_A8,
    RGBA8SN,
    RGBA8UI,
    RGBA8I,
    RGBA16F,
    RGBA16UI,
    RGBA16I,
    RGBA32F,
    RGBA32UI,
    RGBA32I,

    // Special formats
    R5G6B5,
    R11G11B10F,
    RGB5A1,
    RGBA4,
    RGB10A2,
    RGB10A2UI,
    RGB9E5,

    // Depth-stencil formats
    D16,
    D16S8,
    D24,
    D24S8,
    D32F,
    D32F_S8,

    // Block-compressed formats
    BC1,
    BC1_ALPHA,
    BC1_SRGB,
    BC1_SRGB_ALPHA,
    BC2,
    BC2_SRGB,
    BC3,
    BC3_SRGB,
    BC4,
    BC4_SNORM,
    BC5,
    BC5_SNORM,
    BC6H_UF16,
    BC6H_SF16,
    BC7,
    BC7_SRGB,

    // Ericsson texture compression
    ETC_RGB8,
    ETC2_RGB8,
    ETC2_SRGB8,
    ETC2_RGB8_A1,
    ETC2_SRGB8_A1,
    ETC2_RGBA8,
    ETC2_SRGB8_A8,
    EAC_R11,
    EAC_R11SN,
    EAC_RG11,
    EAC_RG11SN,

    // PVRTC (PowerVR)
    PVRTC_RGB2,
    PVRTC_RGBA2,
    PVRTC_RGB4,
    PVRTC_RGBA4,
    PVRTC2_2BPP,
    PVRTC2_4BPP,

    // ASTC (Adaptive Scalable Texture Compression)
    ASTC_RGBA_4x4,
    ASTC_RGBA_5x4,
    ASTC_RGBA_5x5,
    ASTC_RGBA_6x5,
    ASTC_RGBA_6x6,
    ASTC_RGBA_8x5,
    ASTC_RGBA_8x6,
    ASTC_RGBA_8x8,
    ASTC_RGBA_10x5,
    ASTC_RGBA_10x6,
    ASTC_RGBA_10x8,
    ASTC_RGBA_10x10,
    ASTC_RGBA_12x10,
    ASTC_RGBA_12x12,

    // ASTC (Adaptive Scalable Texture Compression) SRGB
    ASTC_SRGBA_4x4,
    ASTC_SRGBA_5x4,
    ASTC_SRGBA_5x5,
    ASTC_SRGBA_6x5,
    ASTC_SRGBA_6x6,
    ASTC_SRGBA_8x5,
    ASTC_SRGBA_8x6,
    ASTC_SRGBA_8x8,
    ASTC_SRGBA_10x5,
    ASTC_SRGBA_10x6,
    ASTC_SRGBA_10x8,
    ASTC_SRGBA_10x10,
    ASTC_SRGBA_12x10,
    ASTC_SRGBA_12x12,
}

/// Memory shape of a [`Format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Bytes per pixel.  For block-compressed formats, bytes per block.
    pub size: u32,
    /// Number of components.
    pub count: u32,
    pub has_depth: bool,
    pub has_stencil: bool,
    pub is_compressed: bool,
}

impl FormatInfo {
    const fn color(size: u32, count: u32) -> Self {
        FormatInfo {
            size,
            count,
            has_depth: false,
            has_stencil: false,
            is_compressed: false,
        }
    }
    const fn depth(size: u32, count: u32, has_stencil: bool) -> Self {
        FormatInfo {
            size,
            count,
            has_depth: true,
            has_stencil,
            is_compressed: false,
        }
    }
    const fn compressed(block_size: u32, count: u32) -> Self {
        FormatInfo {
            size: block_size,
            count,
            has_depth: false,
            has_stencil: false,
            is_compressed: true,
        }
    }
}

impl Format {
    /// All formats, in declaration order.
    pub const ALL: &'static [Format] = &[
        Format::Unknown,
        Format::A8, Format::L8, Format::LA8,
        Format::R8, Format::R8SN, Format::R8UI, Format::R8I, Format::R16F, Format::R16UI,
        Format::R16I, Format::R32F, Format::R32UI, Format::R32I,
        Format::RG8, Format::RG8SN, Format::RG8UI, Format::RG8I, Format::RG16F, Format::RG16UI,
        Format::RG16I, Format::RG32F, Format::RG32UI, Format::RG32I,
        Format::RGB8, Format::SRGB8, Format::RGB8SN, Format::RGB8UI, Format::RGB8I,
        Format::RGB16F, Format::RGB16UI, Format::RGB16I, Format::RGB32F, Format::RGB32UI,
        Format::RGB32I,
        Format::RGBA8, Format::BGRA8, Format::SRGB8_A8, Format::RGBA8SN, Format::RGBA8UI,
        Format::RGBA8I, Format::RGBA16F, Format::RGBA16UI, Format::RGBA16I, Format::RGBA32F,
        Format::RGBA32UI, Format::RGBA32I,
        Format::R5G6B5, Format::R11G11B10F, Format::RGB5A1, Format::RGBA4, Format::RGB10A2,
        Format::RGB10A2UI, Format::RGB9E5,
        Format::D16, Format::D16S8, Format::D24, Format::D24S8, Format::D32F, Format::D32F_S8,
        Format::BC1, Format::BC1_ALPHA, Format::BC1_SRGB, Format::BC1_SRGB_ALPHA, Format::BC2,
        Format::BC2_SRGB, Format::BC3, Format::BC3_SRGB, Format::BC4, Format::BC4_SNORM,
        Format::BC5, Format::BC5_SNORM, Format::BC6H_UF16, Format::BC6H_SF16, Format::BC7,
        Format::BC7_SRGB,
        Format::ETC_RGB8, Format::ETC2_RGB8, Format::ETC2_SRGB8, Format::ETC2_RGB8_A1,
        Format::ETC2_SRGB8_A1, Format::ETC2_RGBA8, Format::ETC2_SRGB8_A8, Format::EAC_R11,
        Format::EAC_R11SN, Format::EAC_RG11, Format::EAC_RG11SN,
        Format::PVRTC_RGB2, Format::PVRTC_RGBA2, Format::PVRTC_RGB4, Format::PVRTC_RGBA4,
        Format::PVRTC2_2BPP, Format::PVRTC2_4BPP,
        Format::ASTC_RGBA_4x4, Format::ASTC_RGBA_5x4, Format::ASTC_RGBA_5x5,
        Format::ASTC_RGBA_6x5, Format::ASTC_RGBA_6x6, Format::ASTC_RGBA_8x5,
        Format::ASTC_RGBA_8x6, Format::ASTC_RGBA_8x8, Format::ASTC_RGBA_10x5,
        Format::ASTC_RGBA_10x6, Format::ASTC_RGBA_10x8, Format::ASTC_RGBA_10x10,
        Format::ASTC_RGBA_12x10, Format::ASTC_RGBA_12x12,
        Format::ASTC_SRGBA_4x4, Format::ASTC_SRGBA_5x4, Format::ASTC_SRGBA_5x5,
        Format::ASTC_SRGBA_6x5, Format::ASTC_SRGBA_6x6, Format::ASTC_SRGBA_8x5,
        Format::ASTC_SRGBA_8x6, Format::ASTC_SRGBA_8x8, Format::ASTC_SRGBA_10x5,
        Format::ASTC_SRGBA_10x6, Format::ASTC_SRGBA_10x8, Format::ASTC_SRGBA_10x10,
        Format::ASTC_SRGBA_12x10, Format::ASTC_SRGBA_12x12,
    ];

    /// Returns the memory shape of this format.
    pub const fn info(self) -> FormatInfo {
        use Format::*;
        match self {
            Unknown => FormatInfo::color(0, 0),

            A8 | L8 => FormatInfo::color(1, 1),
            LA8 => FormatInfo::color(2, 2),

            R8 | R8SN | R8UI | R8I => FormatInfo::color(1, 1),
            R16F => FormatInfo::color(HALF, 1),
            R16UI | R16I => FormatInfo::color(2, 1),
            R32F | R32UI | R32I => FormatInfo::color(4, 1),

            RG8 | RG8SN | RG8UI | RG8I => FormatInfo::color(2, 2),
            RG16F => FormatInfo::color(HALF * 2, 2),
            RG16UI | RG16I => FormatInfo::color(4, 2),
            RG32F | RG32UI | RG32I => FormatInfo::color(8, 2),

            RGB8 | SRGB8 | RGB8SN | RGB8UI | RGB8I => FormatInfo::color(3, 3),
            RGB16F => FormatInfo::color(HALF * 3, 3),
            RGB16UI | RGB16I => FormatInfo::color(6, 3),
            RGB32F | RGB32UI | RGB32I => FormatInfo::color(12, 3),

            RGBA8 | BGRA8 | SRGB8_A8 | RGBA8SN | RGBA8UI | RGBA8I => FormatInfo::color(4, 4),
            RGBA16F => FormatInfo::color(HALF * 4, 4),
            RGBA16UI | RGBA16I => FormatInfo::color(8, 4),
            RGBA32F | RGBA32UI | RGBA32I => FormatInfo::color(16, 4),

            R5G6B5 => FormatInfo::color(2, 3),
            R11G11B10F => FormatInfo::color(4, 3),
            RGB5A1 | RGBA4 => FormatInfo::color(2, 4),
            RGB10A2 | RGB10A2UI => FormatInfo::color(4, 4),
            RGB9E5 => FormatInfo::color(4, 3),

            D16 => FormatInfo::depth(2, 1, false),
            D16S8 => FormatInfo::depth(3, 2, true),
            D24 => FormatInfo::depth(3, 1, false),
            D24S8 => FormatInfo::depth(4, 2, true),
            D32F => FormatInfo::depth(4, 1, false),
            D32F_S8 => FormatInfo::depth(5, 2, true),

            BC1 | BC1_SRGB => FormatInfo::compressed(8, 3),
            BC1_ALPHA | BC1_SRGB_ALPHA => FormatInfo::compressed(8, 4),
            BC2 | BC2_SRGB | BC3 | BC3_SRGB => FormatInfo::compressed(16, 4),
            BC4 | BC4_SNORM => FormatInfo::compressed(8, 1),
            BC5 | BC5_SNORM => FormatInfo::compressed(16, 2),
            BC6H_UF16 | BC6H_SF16 => FormatInfo::compressed(16, 3),
            BC7 | BC7_SRGB => FormatInfo::compressed(16, 4),

            ETC_RGB8 | ETC2_RGB8 | ETC2_SRGB8 => FormatInfo::compressed(8, 3),
            ETC2_RGB8_A1 | ETC2_SRGB8_A1 => FormatInfo::compressed(8, 4),
            ETC2_RGBA8 | ETC2_SRGB8_A8 => FormatInfo::compressed(16, 4),
            EAC_R11 | EAC_R11SN => FormatInfo::compressed(8, 1),
            EAC_RG11 | EAC_RG11SN => FormatInfo::compressed(16, 2),

            PVRTC_RGB2 | PVRTC_RGB4 => FormatInfo::compressed(8, 3),
            PVRTC_RGBA2 | PVRTC_RGBA4 | PVRTC2_2BPP | PVRTC2_4BPP => {
                FormatInfo::compressed(8, 4)
            }

            ASTC_RGBA_4x4 | ASTC_RGBA_5x4 | ASTC_RGBA_5x5 | ASTC_RGBA_6x5 | ASTC_RGBA_6x6
            | ASTC_RGBA_8x5 | ASTC_RGBA_8x6 | ASTC_RGBA_8x8 | ASTC_RGBA_10x5 | ASTC_RGBA_10x6
            | ASTC_RGBA_10x8 | ASTC_RGBA_10x10 | ASTC_RGBA_12x10 | ASTC_RGBA_12x12
            | ASTC_SRGBA_4x4 | ASTC_SRGBA_5x4 | ASTC_SRGBA_5x5 | ASTC_SRGBA_6x5
            | ASTC_SRGBA_6x6 | ASTC_SRGBA_8x5 | ASTC_SRGBA_8x6 | ASTC_SRGBA_8x8
            | ASTC_SRGBA_10x5 | ASTC_SRGBA_10x6 | ASTC_SRGBA_10x8 | ASTC_SRGBA_10x10
            | ASTC_SRGBA_12x10 | ASTC_SRGBA_12x12 => FormatInfo::compressed(16, 4),
        }
    }

    /// Block footprint of an ASTC format, or `None` for every other format.
    pub const fn astc_block(self) -> Option<(u32, u32)> {
        use Format::*;
        match self {
            ASTC_RGBA_4x4 | ASTC_SRGBA_4x4 => Some((4, 4)),
            ASTC_RGBA_5x4 | ASTC_SRGBA_5x4 => Some((5, 4)),
            ASTC_RGBA_5x5 | ASTC_SRGBA_5x5 => Some((5, 5)),
            ASTC_RGBA_6x5 | ASTC_SRGBA_6x5 => Some((6, 5)),
            ASTC_RGBA_6x6 | ASTC_SRGBA_6x6 => Some((6, 6)),
            ASTC_RGBA_8x5 | ASTC_SRGBA_8x5 => Some((8, 5)),
            ASTC_RGBA_8x6 | ASTC_SRGBA_8x6 => Some((8, 6)),
            ASTC_RGBA_8x8 | ASTC_SRGBA_8x8 => Some((8, 8)),
            ASTC_RGBA_10x5 | ASTC_SRGBA_10x5 => Some((10, 5)),
            ASTC_RGBA_10x6 | ASTC_SRGBA_10x6 => Some((10, 6)),
            ASTC_RGBA_10x8 | ASTC_SRGBA_10x8 => Some((10, 8)),
            ASTC_RGBA_10x10 | ASTC_SRGBA_10x10 => Some((10, 10)),
            ASTC_RGBA_12x10 | ASTC_SRGBA_12x10 => Some((12, 10)),
            ASTC_RGBA_12x12 | ASTC_SRGBA_12x12 => Some((12, 12)),
            _ => None,
        }
    }
}

/// Byte size of a `width` x `height` x `depth` image in `format`.
///
/// Block-compressed formats round up to whole blocks.  PVRTC has a minimum footprint
/// of 16x8 (2bpp) or 8x8 (4bpp) pixels.
pub fn format_size(format: Format, width: u32, height: u32, depth: u32) -> u32 {
    use Format::*;
    let info = format.info();
    if !info.is_compressed {
        return width * height * depth * info.size;
    }
    let blocks_4x4 = width.div_ceil(4) * height.div_ceil(4);
    match format {
        BC1 | BC1_ALPHA | BC1_SRGB | BC1_SRGB_ALPHA | BC4 | BC4_SNORM | ETC_RGB8 | ETC2_RGB8
        | ETC2_SRGB8 | ETC2_RGB8_A1 | ETC2_SRGB8_A1 | EAC_R11 | EAC_R11SN => {
            blocks_4x4 * 8 * depth
        }
        BC2 | BC2_SRGB | BC3 | BC3_SRGB | BC5 | BC5_SNORM | BC6H_SF16 | BC6H_UF16 | BC7
        | BC7_SRGB | ETC2_RGBA8 | ETC2_SRGB8_A8 | EAC_RG11 | EAC_RG11SN => {
            blocks_4x4 * 16 * depth
        }
        PVRTC_RGB2 | PVRTC_RGBA2 | PVRTC2_2BPP => {
            (width.max(16) * height.max(8)).div_ceil(4) * depth
        }
        PVRTC_RGB4 | PVRTC_RGBA4 | PVRTC2_4BPP => {
            (width.max(8) * height.max(8)).div_ceil(2) * depth
        }
        _ => match format.astc_block() {
            Some((bw, bh)) => width.div_ceil(bw) * height.div_ceil(bh) * 16 * depth,
            None => 0,
        },
    }
}

/// Byte size of a full mip chain of `mip_levels` images starting at `width` x `height`.
pub fn format_surfaces_size(
    format: Format,
    width: u32,
    height: u32,
    depth: u32,
    mip_levels: u32,
) -> u32 {
    let mut size = 0;
    let (mut w, mut h) = (width, height);
    for _ in 0..mip_levels {
        size += format_size(format, w, h, depth);
        w = (w >> 1).max(1);
        h = (h >> 1).max(1);
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncompressed_sizes() {
        assert_eq!(format_size(Format::R8, 4, 4, 1), 16);
        assert_eq!(format_size(Format::RGBA16F, 2, 2, 1), 32);
        assert_eq!(format_size(Format::RGB32F, 1, 1, 1), 12);
        assert_eq!(format_size(Format::D24S8, 2, 2, 1), 16);
    }

    #[test]
    fn compressed_sizes_round_up_to_blocks() {
        assert_eq!(format_size(Format::BC1, 1, 1, 1), 8);
        assert_eq!(format_size(Format::BC3, 5, 5, 1), 64);
        assert_eq!(format_size(Format::ETC_RGB8, 2, 2, 1), 8);
        assert_eq!(format_size(Format::ASTC_RGBA_8x8, 16, 9, 1), 64);
    }

    #[test]
    fn pvrtc_minimum_footprint() {
        assert_eq!(format_size(Format::PVRTC_RGB2, 1, 1, 1), 32);
        assert_eq!(format_size(Format::PVRTC_RGBA4, 1, 1, 1), 32);
        assert_eq!(format_size(Format::PVRTC_RGBA4, 16, 16, 1), 128);
    }

    #[test]
    fn mip_chain() {
        // 64 + 16 + 4 + 1 pixels of 4 bytes
        assert_eq!(format_surfaces_size(Format::RGBA8, 8, 8, 1, 4), 340);
    }

    #[test]
    fn depth_stencil_flags() {
        assert!(Format::D24S8.info().has_stencil);
        assert!(Format::D24.info().has_depth);
        assert!(!Format::D24.info().has_stencil);
        assert!(!Format::RGBA8.info().has_depth);
    }

    #[test]
    fn half_float_uses_f16_width() {
        assert_eq!(Format::R16F.info().size, 2);
        assert_eq!(Format::RGBA16F.info().size, 8);
    }
}
