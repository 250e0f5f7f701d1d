// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Translation tables from device-independent enums to GL enums.

Every function is total over its input enum.  Inputs the backend cannot express map to a
fallback and log a warning.
*/

use crate::bindings::sampler::Address;
use crate::bindings::visible_to::SampleCount;
use crate::images::pipeline_state::{
    BlendFactor, BlendOp, ComparisonFunc, PrimitiveMode, StencilOp,
};
use crate::images::shader::Type;
use crate::imp::gl::{self, GLenum};
use crate::pixel_formats::Format;

fn warn_unsupported_format(what: &str, format: Format) {
    logwise::warn_sync!(
        "Unsupported {what} for format {format}, falling back",
        what = logwise::privacy::LogIt(what),
        format = logwise::privacy::LogIt(&format)
    );
}

/// Component type of the client data for `format`.
pub fn format_to_component_type(format: Format) -> GLenum {
    use Format::*;
    match format {
        R8 | RG8 | RGB8 | RGBA8 => gl::UNSIGNED_BYTE,
        R8SN | RG8SN | RGB8SN | RGBA8SN => gl::BYTE,
        R8UI | RG8UI | RGB8UI | RGBA8UI => gl::UNSIGNED_BYTE,
        R8I | RG8I | RGB8I | RGBA8I => gl::BYTE,
        R16F | RG16F | RGB16F | RGBA16F => gl::HALF_FLOAT,
        R16UI | RG16UI | RGB16UI | RGBA16UI => gl::UNSIGNED_SHORT,
        R16I | RG16I | RGB16I | RGBA16I => gl::SHORT,
        R32F | RG32F | RGB32F | RGBA32F => gl::FLOAT,
        R32UI | RG32UI | RGB32UI | RGBA32UI => gl::UNSIGNED_INT,
        R32I | RG32I | RGB32I | RGBA32I => gl::INT,

        SRGB8 | BGRA8 | SRGB8_A8 => gl::UNSIGNED_BYTE,

        R5G6B5 => gl::UNSIGNED_SHORT_5_6_5,
        R11G11B10F => gl::UNSIGNED_INT_10F_11F_11F_REV,
        RGB5A1 => gl::UNSIGNED_SHORT_5_5_5_1,
        RGBA4 => gl::UNSIGNED_SHORT_4_4_4_4,
        RGB10A2 | RGB10A2UI => gl::UNSIGNED_INT_2_10_10_10_REV,
        RGB9E5 => gl::FLOAT,

        D16 => gl::UNSIGNED_SHORT,
        D16S8 => gl::UNSIGNED_INT_24_8,
        D24 => gl::UNSIGNED_INT,
        D24S8 => gl::UNSIGNED_INT_24_8,
        D32F => gl::FLOAT,
        D32F_S8 => gl::FLOAT_32_UNSIGNED_INT_24_8_REV,

        BC4_SNORM | BC5_SNORM | EAC_R11SN | EAC_RG11SN => gl::BYTE,
        BC6H_UF16 | BC6H_SF16 => gl::FLOAT,
        BC1 | BC1_ALPHA | BC1_SRGB | BC1_SRGB_ALPHA | BC2 | BC2_SRGB | BC3 | BC3_SRGB | BC4
        | BC5 | BC7 | BC7_SRGB => gl::UNSIGNED_BYTE,
        ETC_RGB8 | ETC2_RGB8 | ETC2_SRGB8 | ETC2_RGB8_A1 | ETC2_SRGB8_A1 | ETC2_RGBA8
        | ETC2_SRGB8_A8 | EAC_R11 | EAC_RG11 => gl::UNSIGNED_BYTE,
        PVRTC_RGB2 | PVRTC_RGBA2 | PVRTC_RGB4 | PVRTC_RGBA4 | PVRTC2_2BPP | PVRTC2_4BPP => {
            gl::UNSIGNED_BYTE
        }
        f if f.astc_block().is_some() => gl::UNSIGNED_BYTE,

        A8 | L8 | LA8 => gl::UNSIGNED_BYTE,
        Unknown => {
            warn_unsupported_format("component type", format);
            gl::UNSIGNED_BYTE
        }
        _ => gl::UNSIGNED_BYTE,
    }
}

/// Compressed internal formats shared by the internal-format and wire-format tables.
fn compressed_format(format: Format) -> Option<GLenum> {
    use Format::*;
    let e = match format {
        BC1 => gl::COMPRESSED_RGB_S3TC_DXT1_EXT,
        BC1_ALPHA => gl::COMPRESSED_RGBA_S3TC_DXT1_EXT,
        BC1_SRGB => gl::COMPRESSED_SRGB_S3TC_DXT1_EXT,
        BC1_SRGB_ALPHA => gl::COMPRESSED_SRGB_ALPHA_S3TC_DXT1_EXT,
        BC2 => gl::COMPRESSED_RGBA_S3TC_DXT3_EXT,
        BC2_SRGB => gl::COMPRESSED_SRGB_ALPHA_S3TC_DXT3_EXT,
        BC3 => gl::COMPRESSED_RGBA_S3TC_DXT5_EXT,
        BC3_SRGB => gl::COMPRESSED_SRGB_ALPHA_S3TC_DXT5_EXT,

        ETC_RGB8 => gl::COMPRESSED_RGB_ETC1_WEBGL,
        ETC2_RGB8 => gl::COMPRESSED_RGB8_ETC2,
        ETC2_SRGB8 => gl::COMPRESSED_SRGB8_ETC2,
        ETC2_RGB8_A1 => gl::COMPRESSED_RGB8_PUNCHTHROUGH_ALPHA1_ETC2,
        ETC2_SRGB8_A1 => gl::COMPRESSED_SRGB8_PUNCHTHROUGH_ALPHA1_ETC2,
        ETC2_RGBA8 => gl::COMPRESSED_RGBA8_ETC2_EAC,
        ETC2_SRGB8_A8 => gl::COMPRESSED_SRGB8_ALPHA8_ETC2_EAC,
        EAC_R11 => gl::COMPRESSED_R11_EAC,
        EAC_R11SN => gl::COMPRESSED_SIGNED_R11_EAC,
        EAC_RG11 => gl::COMPRESSED_RG11_EAC,
        EAC_RG11SN => gl::COMPRESSED_SIGNED_RG11_EAC,

        PVRTC_RGB2 => gl::COMPRESSED_RGB_PVRTC_2BPPV1_IMG,
        PVRTC_RGBA2 => gl::COMPRESSED_RGBA_PVRTC_2BPPV1_IMG,
        PVRTC_RGB4 => gl::COMPRESSED_RGB_PVRTC_4BPPV1_IMG,
        PVRTC_RGBA4 => gl::COMPRESSED_RGBA_PVRTC_4BPPV1_IMG,

        ASTC_RGBA_4x4 => gl::COMPRESSED_RGBA_ASTC_4X4_KHR,
        ASTC_RGBA_5x4 => gl::COMPRESSED_RGBA_ASTC_5X4_KHR,
        ASTC_RGBA_5x5 => gl::COMPRESSED_RGBA_ASTC_5X5_KHR,
        ASTC_RGBA_6x5 => gl::COMPRESSED_RGBA_ASTC_6X5_KHR,
        ASTC_RGBA_6x6 => gl::COMPRESSED_RGBA_ASTC_6X6_KHR,
        ASTC_RGBA_8x5 => gl::COMPRESSED_RGBA_ASTC_8X5_KHR,
        ASTC_RGBA_8x6 => gl::COMPRESSED_RGBA_ASTC_8X6_KHR,
        ASTC_RGBA_8x8 => gl::COMPRESSED_RGBA_ASTC_8X8_KHR,
        ASTC_RGBA_10x5 => gl::COMPRESSED_RGBA_ASTC_10X5_KHR,
        ASTC_RGBA_10x6 => gl::COMPRESSED_RGBA_ASTC_10X6_KHR,
        ASTC_RGBA_10x8 => gl::COMPRESSED_RGBA_ASTC_10X8_KHR,
        ASTC_RGBA_10x10 => gl::COMPRESSED_RGBA_ASTC_10X10_KHR,
        ASTC_RGBA_12x10 => gl::COMPRESSED_RGBA_ASTC_12X10_KHR,
        ASTC_RGBA_12x12 => gl::COMPRESSED_RGBA_ASTC_12X12_KHR,

        ASTC_SRGBA_4x4 => gl::COMPRESSED_SRGB8_ALPHA8_ASTC_4X4_KHR,
        ASTC_SRGBA_5x4 => gl::COMPRESSED_SRGB8_ALPHA8_ASTC_5X4_KHR,
        ASTC_SRGBA_5x5 => gl::COMPRESSED_SRGB8_ALPHA8_ASTC_5X5_KHR,
        ASTC_SRGBA_6x5 => gl::COMPRESSED_SRGB8_ALPHA8_ASTC_6X5_KHR,
        ASTC_SRGBA_6x6 => gl::COMPRESSED_SRGB8_ALPHA8_ASTC_6X6_KHR,
        ASTC_SRGBA_8x5 => gl::COMPRESSED_SRGB8_ALPHA8_ASTC_8X5_KHR,
        ASTC_SRGBA_8x6 => gl::COMPRESSED_SRGB8_ALPHA8_ASTC_8X6_KHR,
        ASTC_SRGBA_8x8 => gl::COMPRESSED_SRGB8_ALPHA8_ASTC_8X8_KHR,
        ASTC_SRGBA_10x5 => gl::COMPRESSED_SRGB8_ALPHA8_ASTC_10X5_KHR,
        ASTC_SRGBA_10x6 => gl::COMPRESSED_SRGB8_ALPHA8_ASTC_10X6_KHR,
        ASTC_SRGBA_10x8 => gl::COMPRESSED_SRGB8_ALPHA8_ASTC_10X8_KHR,
        ASTC_SRGBA_10x10 => gl::COMPRESSED_SRGB8_ALPHA8_ASTC_10X10_KHR,
        ASTC_SRGBA_12x10 => gl::COMPRESSED_SRGB8_ALPHA8_ASTC_12X10_KHR,
        ASTC_SRGBA_12x12 => gl::COMPRESSED_SRGB8_ALPHA8_ASTC_12X12_KHR,
        _ => return None,
    };
    Some(e)
}

/// Storage format the backend allocates for `format`.
pub fn format_to_internal_format(format: Format) -> GLenum {
    use Format::*;
    if let Some(e) = compressed_format(format) {
        return e;
    }
    match format {
        A8 => gl::ALPHA,
        L8 => gl::LUMINANCE,
        LA8 => gl::LUMINANCE_ALPHA,

        R8 => gl::R8,
        R8SN => gl::R8_SNORM,
        R8UI => gl::R8UI,
        R8I => gl::R8I,
        R16F => gl::R16F,
        R16UI => gl::R16UI,
        R16I => gl::R16I,
        R32F => gl::R32F,
        R32UI => gl::R32UI,
        R32I => gl::R32I,

        RG8 => gl::RG8,
        RG8SN => gl::RG8_SNORM,
        RG8UI => gl::RG8UI,
        RG8I => gl::RG8I,
        RG16F => gl::RG16F,
        RG16UI => gl::RG16UI,
        RG16I => gl::RG16I,
        RG32F => gl::RG32F,
        RG32UI => gl::RG32UI,
        RG32I => gl::RG32I,

        RGB8 => gl::RGB8,
        RGB8SN => gl::RGB8_SNORM,
        RGB8UI => gl::RGB8UI,
        RGB8I => gl::RGB8I,
        RGB16F => gl::RGB16F,
        RGB16UI => gl::RGB16UI,
        RGB16I => gl::RGB16I,
        RGB32F => gl::RGB32F,
        RGB32UI => gl::RGB32UI,
        RGB32I => gl::RGB32I,

        RGBA8 | BGRA8 => gl::RGBA8,
        RGBA8SN => gl::RGBA8_SNORM,
        RGBA8UI => gl::RGBA8UI,
        RGBA8I => gl::RGBA8I,
        RGBA16F => gl::RGBA16F,
        RGBA16UI => gl::RGBA16UI,
        RGBA16I => gl::RGBA16I,
        RGBA32F => gl::RGBA32F,
        RGBA32UI => gl::RGBA32UI,
        RGBA32I => gl::RGBA32I,

        R5G6B5 => gl::RGB565,
        RGB5A1 => gl::RGB5_A1,
        RGBA4 => gl::RGBA4,
        RGB10A2 => gl::RGB10_A2,
        RGB10A2UI => gl::RGB10_A2UI,
        R11G11B10F => gl::R11F_G11F_B10F,

        D16 => gl::DEPTH_COMPONENT16,
        D16S8 => gl::DEPTH24_STENCIL8,
        D24 => gl::DEPTH_COMPONENT24,
        D24S8 => gl::DEPTH24_STENCIL8,
        D32F => gl::DEPTH_COMPONENT32F,
        D32F_S8 => gl::DEPTH32F_STENCIL8,

        _ => {
            warn_unsupported_format("internal format", format);
            gl::RGBA
        }
    }
}

/// Client-side pixel layout for `format`.
pub fn format_to_wire_format(format: Format) -> GLenum {
    use Format::*;
    if let Some(e) = compressed_format(format) {
        return e;
    }
    match format {
        A8 => gl::ALPHA,
        L8 => gl::LUMINANCE,
        LA8 => gl::LUMINANCE_ALPHA,

        R8 | R8SN | R8UI | R8I | R16F | R16UI | R16I | R32F | R32UI | R32I => gl::RED,
        RG8 | RG8SN | RG8UI | RG8I | RG16F | RG16UI | RG16I | RG32F | RG32UI | RG32I => gl::RG,
        RGB8 | RGB8SN | RGB8UI | RGB8I | RGB16F | RGB16UI | RGB16I | RGB32F | RGB32UI
        | RGB32I => gl::RGB,
        RGBA8 | BGRA8 | RGBA8SN | RGBA8UI | RGBA8I | RGBA16F | RGBA16UI | RGBA16I | RGBA32F
        | RGBA32UI | RGBA32I => gl::RGBA,

        RGB10A2 => gl::RGBA,
        R11G11B10F => gl::RGB,
        R5G6B5 => gl::RGB,
        RGB5A1 => gl::RGBA,
        RGBA4 => gl::RGBA,

        D16 | D24 | D32F => gl::DEPTH_COMPONENT,
        D16S8 | D24S8 | D32F_S8 => gl::DEPTH_STENCIL,

        _ => {
            warn_unsupported_format("wire format", format);
            gl::RGBA
        }
    }
}

pub fn variable_type_to_backend_type(ty: Type) -> GLenum {
    match ty {
        Type::Bool => gl::BOOL,
        Type::Bool2 => gl::BOOL_VEC2,
        Type::Bool3 => gl::BOOL_VEC3,
        Type::Bool4 => gl::BOOL_VEC4,
        Type::Int => gl::INT,
        Type::Int2 => gl::INT_VEC2,
        Type::Int3 => gl::INT_VEC3,
        Type::Int4 => gl::INT_VEC4,
        Type::Uint => gl::UNSIGNED_INT,
        Type::Float => gl::FLOAT,
        Type::Float2 => gl::FLOAT_VEC2,
        Type::Float3 => gl::FLOAT_VEC3,
        Type::Float4 => gl::FLOAT_VEC4,
        Type::Mat2 => gl::FLOAT_MAT2,
        Type::Mat2x3 => gl::FLOAT_MAT2X3,
        Type::Mat2x4 => gl::FLOAT_MAT2X4,
        Type::Mat3x2 => gl::FLOAT_MAT3X2,
        Type::Mat3 => gl::FLOAT_MAT3,
        Type::Mat3x4 => gl::FLOAT_MAT3X4,
        Type::Mat4x2 => gl::FLOAT_MAT4X2,
        Type::Mat4x3 => gl::FLOAT_MAT4X3,
        Type::Mat4 => gl::FLOAT_MAT4,
        Type::Sampler2D => gl::SAMPLER_2D,
        Type::Sampler2DArray => gl::SAMPLER_2D_ARRAY,
        Type::Sampler3D => gl::SAMPLER_3D,
        Type::SamplerCube => gl::SAMPLER_CUBE,
        _ => {
            logwise::warn_sync!(
                "Unsupported variable type {ty}",
                ty = logwise::privacy::LogIt(&ty)
            );
            gl::NONE
        }
    }
}

pub fn backend_type_to_variable_type(gl_type: GLenum) -> Type {
    match gl_type {
        gl::BOOL => Type::Bool,
        gl::BOOL_VEC2 => Type::Bool2,
        gl::BOOL_VEC3 => Type::Bool3,
        gl::BOOL_VEC4 => Type::Bool4,
        gl::INT => Type::Int,
        gl::INT_VEC2 => Type::Int2,
        gl::INT_VEC3 => Type::Int3,
        gl::INT_VEC4 => Type::Int4,
        gl::UNSIGNED_INT => Type::Uint,
        gl::UNSIGNED_INT_VEC2 => Type::Uint2,
        gl::UNSIGNED_INT_VEC3 => Type::Uint3,
        gl::UNSIGNED_INT_VEC4 => Type::Uint4,
        gl::FLOAT => Type::Float,
        gl::FLOAT_VEC2 => Type::Float2,
        gl::FLOAT_VEC3 => Type::Float3,
        gl::FLOAT_VEC4 => Type::Float4,
        gl::FLOAT_MAT2 => Type::Mat2,
        gl::FLOAT_MAT2X3 => Type::Mat2x3,
        gl::FLOAT_MAT2X4 => Type::Mat2x4,
        gl::FLOAT_MAT3X2 => Type::Mat3x2,
        gl::FLOAT_MAT3 => Type::Mat3,
        gl::FLOAT_MAT3X4 => Type::Mat3x4,
        gl::FLOAT_MAT4X2 => Type::Mat4x2,
        gl::FLOAT_MAT4X3 => Type::Mat4x3,
        gl::FLOAT_MAT4 => Type::Mat4,
        gl::SAMPLER_2D => Type::Sampler2D,
        gl::SAMPLER_2D_ARRAY => Type::Sampler2DArray,
        gl::SAMPLER_3D => Type::Sampler3D,
        gl::SAMPLER_CUBE => Type::SamplerCube,
        _ => {
            logwise::warn_sync!("Unsupported backend type {gl_type}", gl_type = gl_type);
            Type::Unknown
        }
    }
}

/// Bytes occupied by one element of `gl_type`.
pub fn backend_type_to_byte_size(gl_type: GLenum) -> u32 {
    match gl_type {
        gl::BOOL | gl::INT | gl::UNSIGNED_INT | gl::FLOAT => 4,
        gl::BOOL_VEC2 | gl::INT_VEC2 | gl::UNSIGNED_INT_VEC2 | gl::FLOAT_VEC2 => 8,
        gl::BOOL_VEC3 | gl::INT_VEC3 | gl::UNSIGNED_INT_VEC3 | gl::FLOAT_VEC3 => 12,
        gl::BOOL_VEC4 | gl::INT_VEC4 | gl::UNSIGNED_INT_VEC4 | gl::FLOAT_VEC4 => 16,
        gl::FLOAT_MAT2 => 16,
        gl::FLOAT_MAT2X3 => 24,
        gl::FLOAT_MAT2X4 => 32,
        gl::FLOAT_MAT3X2 => 24,
        gl::FLOAT_MAT3 => 36,
        gl::FLOAT_MAT3X4 => 48,
        gl::FLOAT_MAT4X2 => 32,
        gl::FLOAT_MAT4X3 => 48,
        gl::FLOAT_MAT4 => 64,
        gl::SAMPLER_2D
        | gl::SAMPLER_2D_ARRAY
        | gl::SAMPLER_2D_ARRAY_SHADOW
        | gl::SAMPLER_3D
        | gl::SAMPLER_CUBE
        | gl::INT_SAMPLER_2D
        | gl::INT_SAMPLER_2D_ARRAY
        | gl::INT_SAMPLER_3D
        | gl::INT_SAMPLER_CUBE
        | gl::UNSIGNED_INT_SAMPLER_2D
        | gl::UNSIGNED_INT_SAMPLER_2D_ARRAY
        | gl::UNSIGNED_INT_SAMPLER_3D
        | gl::UNSIGNED_INT_SAMPLER_CUBE => 4,
        _ => {
            logwise::warn_sync!("Unsupported backend type {gl_type}", gl_type = gl_type);
            0
        }
    }
}

/// Consecutive attribute locations occupied by one element of `gl_type`.
pub fn backend_type_to_component_count(gl_type: GLenum) -> u32 {
    match gl_type {
        gl::FLOAT_MAT2 | gl::FLOAT_MAT2X3 | gl::FLOAT_MAT2X4 => 2,
        gl::FLOAT_MAT3 | gl::FLOAT_MAT3X2 | gl::FLOAT_MAT3X4 => 3,
        gl::FLOAT_MAT4 | gl::FLOAT_MAT4X2 | gl::FLOAT_MAT4X3 => 4,
        _ => 1,
    }
}

const WRAPS: [GLenum; 4] = [
    gl::REPEAT,
    gl::MIRRORED_REPEAT,
    gl::CLAMP_TO_EDGE,
    gl::CLAMP_TO_EDGE,
];

pub fn address_to_wrap(address: Address) -> GLenum {
    WRAPS[address as usize]
}

const SAMPLES: [u32; 7] = [1, 2, 4, 8, 16, 32, 64];

pub fn sample_count_to_samples(samples: SampleCount) -> u32 {
    SAMPLES[samples as usize]
}

const CMP_FUNCS: [GLenum; 8] = [
    gl::NEVER,
    gl::LESS,
    gl::EQUAL,
    gl::LEQUAL,
    gl::GREATER,
    gl::NOTEQUAL,
    gl::GEQUAL,
    gl::ALWAYS,
];

pub fn comparison_func(func: ComparisonFunc) -> GLenum {
    CMP_FUNCS[func as usize]
}

const STENCIL_OPS: [GLenum; 8] = [
    gl::ZERO,
    gl::KEEP,
    gl::REPLACE,
    gl::INCR,
    gl::DECR,
    gl::INVERT,
    gl::INCR_WRAP,
    gl::DECR_WRAP,
];

pub fn stencil_op(op: StencilOp) -> GLenum {
    STENCIL_OPS[op as usize]
}

const BLEND_OPS: [GLenum; 5] = [
    gl::FUNC_ADD,
    gl::FUNC_SUBTRACT,
    gl::FUNC_REVERSE_SUBTRACT,
    gl::FUNC_ADD,
    gl::FUNC_ADD,
];

pub fn blend_op(op: BlendOp) -> GLenum {
    BLEND_OPS[op as usize]
}

const BLEND_FACTORS: [GLenum; 15] = [
    gl::ZERO,
    gl::ONE,
    gl::SRC_ALPHA,
    gl::DST_ALPHA,
    gl::ONE_MINUS_SRC_ALPHA,
    gl::ONE_MINUS_DST_ALPHA,
    gl::SRC_COLOR,
    gl::DST_COLOR,
    gl::ONE_MINUS_SRC_COLOR,
    gl::ONE_MINUS_DST_COLOR,
    gl::SRC_ALPHA_SATURATE,
    gl::CONSTANT_COLOR,
    gl::ONE_MINUS_CONSTANT_COLOR,
    gl::CONSTANT_ALPHA,
    gl::ONE_MINUS_CONSTANT_ALPHA,
];

pub fn blend_factor(factor: BlendFactor) -> GLenum {
    BLEND_FACTORS[factor as usize]
}

const PRIMITIVES: [GLenum; 7] = [
    gl::POINTS,
    gl::LINES,
    gl::LINE_STRIP,
    gl::LINE_LOOP,
    gl::TRIANGLES,
    gl::TRIANGLE_STRIP,
    gl::TRIANGLE_FAN,
];

pub fn primitive_mode(mode: PrimitiveMode) -> GLenum {
    PRIMITIVES[mode as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncompressed_triples() {
        let cases = [
            (Format::RGBA8, gl::RGBA, gl::RGBA8, gl::UNSIGNED_BYTE),
            (Format::BGRA8, gl::RGBA, gl::RGBA8, gl::UNSIGNED_BYTE),
            (Format::R16F, gl::RED, gl::R16F, gl::HALF_FLOAT),
            (Format::RG32I, gl::RG, gl::RG32I, gl::INT),
            (Format::RGB8SN, gl::RGB, gl::RGB8_SNORM, gl::BYTE),
            (Format::RGBA16UI, gl::RGBA, gl::RGBA16UI, gl::UNSIGNED_SHORT),
            (Format::R5G6B5, gl::RGB, gl::RGB565, gl::UNSIGNED_SHORT_5_6_5),
            (
                Format::R11G11B10F,
                gl::RGB,
                gl::R11F_G11F_B10F,
                gl::UNSIGNED_INT_10F_11F_11F_REV,
            ),
            (Format::A8, gl::ALPHA, gl::ALPHA, gl::UNSIGNED_BYTE),
            (Format::LA8, gl::LUMINANCE_ALPHA, gl::LUMINANCE_ALPHA, gl::UNSIGNED_BYTE),
            (Format::D16, gl::DEPTH_COMPONENT, gl::DEPTH_COMPONENT16, gl::UNSIGNED_SHORT),
            (Format::D24S8, gl::DEPTH_STENCIL, gl::DEPTH24_STENCIL8, gl::UNSIGNED_INT_24_8),
            (
                Format::D32F_S8,
                gl::DEPTH_STENCIL,
                gl::DEPTH32F_STENCIL8,
                gl::FLOAT_32_UNSIGNED_INT_24_8_REV,
            ),
        ];
        for (format, wire, internal, component) in cases {
            assert_eq!(format_to_wire_format(format), wire, "{format:?}");
            assert_eq!(format_to_internal_format(format), internal, "{format:?}");
            assert_eq!(format_to_component_type(format), component, "{format:?}");
        }
    }

    #[test]
    fn compressed_formats_use_one_enum() {
        assert_eq!(
            format_to_internal_format(Format::ETC_RGB8),
            gl::COMPRESSED_RGB_ETC1_WEBGL
        );
        assert_eq!(
            format_to_wire_format(Format::ASTC_SRGBA_8x8),
            gl::COMPRESSED_SRGB8_ALPHA8_ASTC_8X8_KHR
        );
        assert_eq!(format_to_component_type(Format::EAC_RG11SN), gl::BYTE);
        assert_eq!(format_to_component_type(Format::BC6H_SF16), gl::FLOAT);
    }

    #[test]
    fn unmapped_formats_fall_back_to_rgba() {
        for format in [Format::SRGB8, Format::SRGB8_A8, Format::RGB9E5, Format::BC7, Format::Unknown] {
            assert_eq!(format_to_internal_format(format), gl::RGBA, "{format:?}");
            assert_eq!(format_to_wire_format(format), gl::RGBA, "{format:?}");
        }
        assert_eq!(format_to_wire_format(Format::RGB10A2UI), gl::RGBA);
        assert_eq!(format_to_internal_format(Format::RGB10A2UI), gl::RGB10_A2UI);
    }

    #[test]
    fn wider_families_keep_their_triples() {
        let cases = [
            (Format::RGB16I, gl::RGB, gl::RGB16I, gl::SHORT),
            (Format::RGBA32UI, gl::RGBA, gl::RGBA32UI, gl::UNSIGNED_INT),
            (Format::RGB10A2, gl::RGBA, gl::RGB10_A2, gl::UNSIGNED_INT_2_10_10_10_REV),
            (Format::RGB5A1, gl::RGBA, gl::RGB5_A1, gl::UNSIGNED_SHORT_5_5_5_1),
            (Format::RGBA4, gl::RGBA, gl::RGBA4, gl::UNSIGNED_SHORT_4_4_4_4),
            (Format::L8, gl::LUMINANCE, gl::LUMINANCE, gl::UNSIGNED_BYTE),
            (Format::D24, gl::DEPTH_COMPONENT, gl::DEPTH_COMPONENT24, gl::UNSIGNED_INT),
            (Format::D32F, gl::DEPTH_COMPONENT, gl::DEPTH_COMPONENT32F, gl::FLOAT),
            (Format::D16S8, gl::DEPTH_STENCIL, gl::DEPTH24_STENCIL8, gl::UNSIGNED_INT_24_8),
        ];
        for (format, wire, internal, component) in cases {
            assert_eq!(format_to_wire_format(format), wire, "{format:?}");
            assert_eq!(format_to_internal_format(format), internal, "{format:?}");
            assert_eq!(format_to_component_type(format), component, "{format:?}");
        }
    }

    #[test]
    fn etc_and_pvrtc_map_to_their_compressed_enums() {
        let cases = [
            (Format::ETC_RGB8, gl::COMPRESSED_RGB_ETC1_WEBGL),
            (Format::ETC2_RGB8, gl::COMPRESSED_RGB8_ETC2),
            (Format::ETC2_SRGB8, gl::COMPRESSED_SRGB8_ETC2),
            (Format::ETC2_RGB8_A1, gl::COMPRESSED_RGB8_PUNCHTHROUGH_ALPHA1_ETC2),
            (Format::ETC2_SRGB8_A1, gl::COMPRESSED_SRGB8_PUNCHTHROUGH_ALPHA1_ETC2),
            (Format::ETC2_RGBA8, gl::COMPRESSED_RGBA8_ETC2_EAC),
            (Format::ETC2_SRGB8_A8, gl::COMPRESSED_SRGB8_ALPHA8_ETC2_EAC),
            (Format::EAC_R11, gl::COMPRESSED_R11_EAC),
            (Format::EAC_R11SN, gl::COMPRESSED_SIGNED_R11_EAC),
            (Format::EAC_RG11, gl::COMPRESSED_RG11_EAC),
            (Format::EAC_RG11SN, gl::COMPRESSED_SIGNED_RG11_EAC),
            (Format::PVRTC_RGB2, gl::COMPRESSED_RGB_PVRTC_2BPPV1_IMG),
            (Format::PVRTC_RGBA2, gl::COMPRESSED_RGBA_PVRTC_2BPPV1_IMG),
            (Format::PVRTC_RGB4, gl::COMPRESSED_RGB_PVRTC_4BPPV1_IMG),
            (Format::PVRTC_RGBA4, gl::COMPRESSED_RGBA_PVRTC_4BPPV1_IMG),
        ];
        for (format, compressed) in cases {
            assert_eq!(format_to_wire_format(format), compressed, "{format:?}");
            assert_eq!(format_to_internal_format(format), compressed, "{format:?}");
        }
        for format in Format::ALL {
            if let Some(compressed) = compressed_format(*format) {
                assert_eq!(format_to_wire_format(*format), compressed, "{format:?}");
            }
        }
        // no WebGL enum for PVRTC2
        for format in [Format::PVRTC2_2BPP, Format::PVRTC2_4BPP] {
            assert_eq!(format_to_wire_format(format), gl::RGBA, "{format:?}");
            assert_eq!(format_to_internal_format(format), gl::RGBA, "{format:?}");
            assert_eq!(format_to_component_type(format), gl::UNSIGNED_BYTE, "{format:?}");
        }
    }

    #[test]
    fn type_sizes() {
        assert_eq!(backend_type_to_byte_size(gl::FLOAT_VEC3), 12);
        assert_eq!(backend_type_to_byte_size(gl::FLOAT_MAT3X4), 48);
        assert_eq!(backend_type_to_byte_size(gl::UNSIGNED_INT_SAMPLER_CUBE), 4);
        assert_eq!(backend_type_to_byte_size(0xdead), 0);
        assert_eq!(backend_type_to_component_count(gl::FLOAT_MAT4), 4);
        assert_eq!(backend_type_to_component_count(gl::FLOAT_MAT2X4), 2);
        assert_eq!(backend_type_to_component_count(gl::FLOAT_VEC4), 1);
    }

    #[test]
    fn variable_types() {
        assert_eq!(variable_type_to_backend_type(Type::Mat4), gl::FLOAT_MAT4);
        assert_eq!(variable_type_to_backend_type(Type::Uint3), gl::NONE);
        assert_eq!(backend_type_to_variable_type(gl::UNSIGNED_INT_VEC3), Type::Uint3);
        assert_eq!(backend_type_to_variable_type(gl::SAMPLER_CUBE), Type::SamplerCube);
        assert_eq!(backend_type_to_variable_type(gl::SAMPLER_2D_SHADOW), Type::Unknown);
    }

    #[test]
    fn lookup_arrays() {
        assert_eq!(address_to_wrap(Address::Border), gl::CLAMP_TO_EDGE);
        assert_eq!(sample_count_to_samples(SampleCount::X8), 8);
        assert_eq!(comparison_func(ComparisonFunc::GreaterEqual), gl::GEQUAL);
        assert_eq!(stencil_op(StencilOp::Zero), gl::ZERO);
        assert_eq!(blend_op(BlendOp::Max), gl::FUNC_ADD);
        assert_eq!(blend_factor(BlendFactor::OneMinusConstantAlpha), gl::ONE_MINUS_CONSTANT_ALPHA);
        assert_eq!(primitive_mode(PrimitiveMode::LineLoop), gl::LINE_LOOP);
    }
}
