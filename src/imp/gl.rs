// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! GL-family enum values.
//!
//! These are the numeric values shared by OpenGL ES 3.0 and WebGL2, plus the extension
//! enums for compressed texture formats.  Every backend receives these values verbatim.
#![allow(dead_code)]

pub type GLenum = u32;

pub const NONE: GLenum = 0;
pub const ZERO: GLenum = 0;
pub const ONE: GLenum = 1;

// Component types
pub const BYTE: GLenum = 0x1400;
pub const UNSIGNED_BYTE: GLenum = 0x1401;
pub const SHORT: GLenum = 0x1402;
pub const UNSIGNED_SHORT: GLenum = 0x1403;
pub const INT: GLenum = 0x1404;
pub const UNSIGNED_INT: GLenum = 0x1405;
pub const FLOAT: GLenum = 0x1406;
pub const HALF_FLOAT: GLenum = 0x140B;
pub const UNSIGNED_SHORT_4_4_4_4: GLenum = 0x8033;
pub const UNSIGNED_SHORT_5_5_5_1: GLenum = 0x8034;
pub const UNSIGNED_SHORT_5_6_5: GLenum = 0x8363;
pub const UNSIGNED_INT_2_10_10_10_REV: GLenum = 0x8368;
pub const UNSIGNED_INT_10F_11F_11F_REV: GLenum = 0x8C3B;
pub const UNSIGNED_INT_5_9_9_9_REV: GLenum = 0x8C3E;
pub const UNSIGNED_INT_24_8: GLenum = 0x84FA;
pub const FLOAT_32_UNSIGNED_INT_24_8_REV: GLenum = 0x8DAD;

// Pixel formats
pub const DEPTH_COMPONENT: GLenum = 0x1902;
pub const RED: GLenum = 0x1903;
pub const ALPHA: GLenum = 0x1906;
pub const RGB: GLenum = 0x1907;
pub const RGBA: GLenum = 0x1908;
pub const LUMINANCE: GLenum = 0x1909;
pub const LUMINANCE_ALPHA: GLenum = 0x190A;
pub const RG: GLenum = 0x8227;
pub const DEPTH_STENCIL: GLenum = 0x84F9;

// Sized internal formats
pub const R8: GLenum = 0x8229;
pub const RG8: GLenum = 0x822B;
pub const R16F: GLenum = 0x822D;
pub const R32F: GLenum = 0x822E;
pub const RG16F: GLenum = 0x822F;
pub const RG32F: GLenum = 0x8230;
pub const R8I: GLenum = 0x8231;
pub const R8UI: GLenum = 0x8232;
pub const R16I: GLenum = 0x8233;
pub const R16UI: GLenum = 0x8234;
pub const R32I: GLenum = 0x8235;
pub const R32UI: GLenum = 0x8236;
pub const RG8I: GLenum = 0x8237;
pub const RG8UI: GLenum = 0x8238;
pub const RG16I: GLenum = 0x8239;
pub const RG16UI: GLenum = 0x823A;
pub const RG32I: GLenum = 0x823B;
pub const RG32UI: GLenum = 0x823C;
pub const R8_SNORM: GLenum = 0x8F94;
pub const RG8_SNORM: GLenum = 0x8F95;
pub const RGB8_SNORM: GLenum = 0x8F96;
pub const RGBA8_SNORM: GLenum = 0x8F97;
pub const RGB8: GLenum = 0x8051;
pub const RGBA4: GLenum = 0x8056;
pub const RGB5_A1: GLenum = 0x8057;
pub const RGBA8: GLenum = 0x8058;
pub const RGB10_A2: GLenum = 0x8059;
pub const RGB10_A2UI: GLenum = 0x906F;
pub const RGB565: GLenum = 0x8D62;
pub const R11F_G11F_B10F: GLenum = 0x8C3A;
pub const RGB9_E5: GLenum = 0x8C3D;
pub const SRGB8: GLenum = 0x8C41;
pub const SRGB8_ALPHA8: GLenum = 0x8C43;
pub const RGBA32F: GLenum = 0x8814;
pub const RGB32F: GLenum = 0x8815;
pub const RGBA16F: GLenum = 0x881A;
pub const RGB16F: GLenum = 0x881B;
pub const RGBA32UI: GLenum = 0x8D70;
pub const RGB32UI: GLenum = 0x8D71;
pub const RGBA16UI: GLenum = 0x8D76;
pub const RGB16UI: GLenum = 0x8D77;
pub const RGBA8UI: GLenum = 0x8D7C;
pub const RGB8UI: GLenum = 0x8D7D;
pub const RGBA32I: GLenum = 0x8D82;
pub const RGB32I: GLenum = 0x8D83;
pub const RGBA16I: GLenum = 0x8D88;
pub const RGB16I: GLenum = 0x8D89;
pub const RGBA8I: GLenum = 0x8D8E;
pub const RGB8I: GLenum = 0x8D8F;
pub const DEPTH_COMPONENT16: GLenum = 0x81A5;
pub const DEPTH_COMPONENT24: GLenum = 0x81A6;
pub const DEPTH_COMPONENT32F: GLenum = 0x8CAC;
pub const DEPTH24_STENCIL8: GLenum = 0x88F0;
pub const DEPTH32F_STENCIL8: GLenum = 0x8CAD;

// WEBGL_compressed_texture_s3tc and _srgb
pub const COMPRESSED_RGB_S3TC_DXT1_EXT: GLenum = 0x83F0;
pub const COMPRESSED_RGBA_S3TC_DXT1_EXT: GLenum = 0x83F1;
pub const COMPRESSED_RGBA_S3TC_DXT3_EXT: GLenum = 0x83F2;
pub const COMPRESSED_RGBA_S3TC_DXT5_EXT: GLenum = 0x83F3;
pub const COMPRESSED_SRGB_S3TC_DXT1_EXT: GLenum = 0x8C4C;
pub const COMPRESSED_SRGB_ALPHA_S3TC_DXT1_EXT: GLenum = 0x8C4D;
pub const COMPRESSED_SRGB_ALPHA_S3TC_DXT3_EXT: GLenum = 0x8C4E;
pub const COMPRESSED_SRGB_ALPHA_S3TC_DXT5_EXT: GLenum = 0x8C4F;

// WEBGL_compressed_texture_etc1 and _etc
pub const COMPRESSED_RGB_ETC1_WEBGL: GLenum = 0x8D64;
pub const COMPRESSED_R11_EAC: GLenum = 0x9270;
pub const COMPRESSED_SIGNED_R11_EAC: GLenum = 0x9271;
pub const COMPRESSED_RG11_EAC: GLenum = 0x9272;
pub const COMPRESSED_SIGNED_RG11_EAC: GLenum = 0x9273;
pub const COMPRESSED_RGB8_ETC2: GLenum = 0x9274;
pub const COMPRESSED_SRGB8_ETC2: GLenum = 0x9275;
pub const COMPRESSED_RGB8_PUNCHTHROUGH_ALPHA1_ETC2: GLenum = 0x9276;
pub const COMPRESSED_SRGB8_PUNCHTHROUGH_ALPHA1_ETC2: GLenum = 0x9277;
pub const COMPRESSED_RGBA8_ETC2_EAC: GLenum = 0x9278;
pub const COMPRESSED_SRGB8_ALPHA8_ETC2_EAC: GLenum = 0x9279;

// WEBGL_compressed_texture_pvrtc
pub const COMPRESSED_RGB_PVRTC_4BPPV1_IMG: GLenum = 0x8C00;
pub const COMPRESSED_RGB_PVRTC_2BPPV1_IMG: GLenum = 0x8C01;
pub const COMPRESSED_RGBA_PVRTC_4BPPV1_IMG: GLenum = 0x8C02;
pub const COMPRESSED_RGBA_PVRTC_2BPPV1_IMG: GLenum = 0x8C03;

// WEBGL_compressed_texture_astc
pub const COMPRESSED_RGBA_ASTC_4X4_KHR: GLenum = 0x93B0;
pub const COMPRESSED_RGBA_ASTC_5X4_KHR: GLenum = 0x93B1;
pub const COMPRESSED_RGBA_ASTC_5X5_KHR: GLenum = 0x93B2;
pub const COMPRESSED_RGBA_ASTC_6X5_KHR: GLenum = 0x93B3;
pub const COMPRESSED_RGBA_ASTC_6X6_KHR: GLenum = 0x93B4;
pub const COMPRESSED_RGBA_ASTC_8X5_KHR: GLenum = 0x93B5;
pub const COMPRESSED_RGBA_ASTC_8X6_KHR: GLenum = 0x93B6;
pub const COMPRESSED_RGBA_ASTC_8X8_KHR: GLenum = 0x93B7;
pub const COMPRESSED_RGBA_ASTC_10X5_KHR: GLenum = 0x93B8;
pub const COMPRESSED_RGBA_ASTC_10X6_KHR: GLenum = 0x93B9;
pub const COMPRESSED_RGBA_ASTC_10X8_KHR: GLenum = 0x93BA;
pub const COMPRESSED_RGBA_ASTC_10X10_KHR: GLenum = 0x93BB;
pub const COMPRESSED_RGBA_ASTC_12X10_KHR: GLenum = 0x93BC;
pub const COMPRESSED_RGBA_ASTC_12X12_KHR: GLenum = 0x93BD;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_4X4_KHR: GLenum = 0x93D0;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_5X4_KHR: GLenum = 0x93D1;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_5X5_KHR: GLenum = 0x93D2;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_6X5_KHR: GLenum = 0x93D3;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_6X6_KHR: GLenum = 0x93D4;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_8X5_KHR: GLenum = 0x93D5;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_8X6_KHR: GLenum = 0x93D6;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_8X8_KHR: GLenum = 0x93D7;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_10X5_KHR: GLenum = 0x93D8;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_10X6_KHR: GLenum = 0x93D9;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_10X8_KHR: GLenum = 0x93DA;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_10X10_KHR: GLenum = 0x93DB;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_12X10_KHR: GLenum = 0x93DC;
pub const COMPRESSED_SRGB8_ALPHA8_ASTC_12X12_KHR: GLenum = 0x93DD;

// Uniform and attribute types
pub const FLOAT_VEC2: GLenum = 0x8B50;
pub const FLOAT_VEC3: GLenum = 0x8B51;
pub const FLOAT_VEC4: GLenum = 0x8B52;
pub const INT_VEC2: GLenum = 0x8B53;
pub const INT_VEC3: GLenum = 0x8B54;
pub const INT_VEC4: GLenum = 0x8B55;
pub const BOOL: GLenum = 0x8B56;
pub const BOOL_VEC2: GLenum = 0x8B57;
pub const BOOL_VEC3: GLenum = 0x8B58;
pub const BOOL_VEC4: GLenum = 0x8B59;
pub const FLOAT_MAT2: GLenum = 0x8B5A;
pub const FLOAT_MAT3: GLenum = 0x8B5B;
pub const FLOAT_MAT4: GLenum = 0x8B5C;
pub const FLOAT_MAT2X3: GLenum = 0x8B65;
pub const FLOAT_MAT2X4: GLenum = 0x8B66;
pub const FLOAT_MAT3X2: GLenum = 0x8B67;
pub const FLOAT_MAT3X4: GLenum = 0x8B68;
pub const FLOAT_MAT4X2: GLenum = 0x8B69;
pub const FLOAT_MAT4X3: GLenum = 0x8B6A;
pub const UNSIGNED_INT_VEC2: GLenum = 0x8DC6;
pub const UNSIGNED_INT_VEC3: GLenum = 0x8DC7;
pub const UNSIGNED_INT_VEC4: GLenum = 0x8DC8;
pub const SAMPLER_2D: GLenum = 0x8B5E;
pub const SAMPLER_3D: GLenum = 0x8B5F;
pub const SAMPLER_CUBE: GLenum = 0x8B60;
pub const SAMPLER_2D_SHADOW: GLenum = 0x8B62;
pub const SAMPLER_2D_ARRAY: GLenum = 0x8DC1;
pub const SAMPLER_2D_ARRAY_SHADOW: GLenum = 0x8DC4;
pub const SAMPLER_CUBE_SHADOW: GLenum = 0x8DC5;
pub const INT_SAMPLER_2D: GLenum = 0x8DCA;
pub const INT_SAMPLER_3D: GLenum = 0x8DCB;
pub const INT_SAMPLER_CUBE: GLenum = 0x8DCC;
pub const INT_SAMPLER_2D_ARRAY: GLenum = 0x8DCF;
pub const UNSIGNED_INT_SAMPLER_2D: GLenum = 0x8DD2;
pub const UNSIGNED_INT_SAMPLER_3D: GLenum = 0x8DD3;
pub const UNSIGNED_INT_SAMPLER_CUBE: GLenum = 0x8DD4;
pub const UNSIGNED_INT_SAMPLER_2D_ARRAY: GLenum = 0x8DD7;

// Buffers
pub const ARRAY_BUFFER: GLenum = 0x8892;
pub const ELEMENT_ARRAY_BUFFER: GLenum = 0x8893;
pub const UNIFORM_BUFFER: GLenum = 0x8A11;
pub const STATIC_DRAW: GLenum = 0x88E4;
pub const DYNAMIC_DRAW: GLenum = 0x88E8;

// Textures
pub const TEXTURE_2D: GLenum = 0x0DE1;
pub const TEXTURE_CUBE_MAP: GLenum = 0x8513;
pub const TEXTURE_CUBE_MAP_POSITIVE_X: GLenum = 0x8515;
pub const TEXTURE0: GLenum = 0x84C0;
pub const RENDERBUFFER: GLenum = 0x8D41;

// Sampler parameters
pub const TEXTURE_MAG_FILTER: GLenum = 0x2800;
pub const TEXTURE_MIN_FILTER: GLenum = 0x2801;
pub const TEXTURE_WRAP_S: GLenum = 0x2802;
pub const TEXTURE_WRAP_T: GLenum = 0x2803;
pub const TEXTURE_WRAP_R: GLenum = 0x8072;
pub const TEXTURE_MIN_LOD: GLenum = 0x813A;
pub const TEXTURE_MAX_LOD: GLenum = 0x813B;
pub const NEAREST: GLenum = 0x2600;
pub const LINEAR: GLenum = 0x2601;
pub const NEAREST_MIPMAP_NEAREST: GLenum = 0x2700;
pub const LINEAR_MIPMAP_NEAREST: GLenum = 0x2701;
pub const NEAREST_MIPMAP_LINEAR: GLenum = 0x2702;
pub const LINEAR_MIPMAP_LINEAR: GLenum = 0x2703;
pub const REPEAT: GLenum = 0x2901;
pub const MIRRORED_REPEAT: GLenum = 0x8370;
pub const CLAMP_TO_EDGE: GLenum = 0x812F;

// Framebuffers
pub const FRAMEBUFFER: GLenum = 0x8D40;
pub const READ_FRAMEBUFFER: GLenum = 0x8CA8;
pub const DRAW_FRAMEBUFFER: GLenum = 0x8CA9;
pub const COLOR_ATTACHMENT0: GLenum = 0x8CE0;
pub const DEPTH_ATTACHMENT: GLenum = 0x8D00;
pub const STENCIL_ATTACHMENT: GLenum = 0x8D20;
pub const DEPTH_STENCIL_ATTACHMENT: GLenum = 0x821A;
pub const FRAMEBUFFER_COMPLETE: GLenum = 0x8CD5;
pub const FRAMEBUFFER_INCOMPLETE_ATTACHMENT: GLenum = 0x8CD6;
pub const FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT: GLenum = 0x8CD7;
pub const FRAMEBUFFER_INCOMPLETE_DIMENSIONS: GLenum = 0x8CD9;
pub const FRAMEBUFFER_UNSUPPORTED: GLenum = 0x8CDD;
pub const COLOR: GLenum = 0x1800;
pub const DEPTH: GLenum = 0x1801;
pub const STENCIL: GLenum = 0x1802;

// Shaders
pub const FRAGMENT_SHADER: GLenum = 0x8B30;
pub const VERTEX_SHADER: GLenum = 0x8B31;

// Capabilities
pub const CULL_FACE: GLenum = 0x0B44;
pub const DEPTH_TEST: GLenum = 0x0B71;
pub const STENCIL_TEST: GLenum = 0x0B90;
pub const BLEND: GLenum = 0x0BE2;
pub const SCISSOR_TEST: GLenum = 0x0C11;
pub const POLYGON_OFFSET_FILL: GLenum = 0x8037;
pub const SAMPLE_ALPHA_TO_COVERAGE: GLenum = 0x809E;

// Faces and winding
pub const FRONT: GLenum = 0x0404;
pub const BACK: GLenum = 0x0405;
pub const FRONT_AND_BACK: GLenum = 0x0408;
pub const CW: GLenum = 0x0900;
pub const CCW: GLenum = 0x0901;

// Clear masks
pub const DEPTH_BUFFER_BIT: GLenum = 0x0100;
pub const STENCIL_BUFFER_BIT: GLenum = 0x0400;
pub const COLOR_BUFFER_BIT: GLenum = 0x4000;

// Comparison functions
pub const NEVER: GLenum = 0x0200;
pub const LESS: GLenum = 0x0201;
pub const EQUAL: GLenum = 0x0202;
pub const LEQUAL: GLenum = 0x0203;
pub const GREATER: GLenum = 0x0204;
pub const NOTEQUAL: GLenum = 0x0205;
pub const GEQUAL: GLenum = 0x0206;
pub const ALWAYS: GLenum = 0x0207;

// Stencil ops
pub const KEEP: GLenum = 0x1E00;
pub const REPLACE: GLenum = 0x1E01;
pub const INCR: GLenum = 0x1E02;
pub const DECR: GLenum = 0x1E03;
pub const INVERT: GLenum = 0x150A;
pub const INCR_WRAP: GLenum = 0x8507;
pub const DECR_WRAP: GLenum = 0x8508;

// Blending
pub const FUNC_ADD: GLenum = 0x8006;
pub const FUNC_SUBTRACT: GLenum = 0x800A;
pub const FUNC_REVERSE_SUBTRACT: GLenum = 0x800B;
pub const SRC_COLOR: GLenum = 0x0300;
pub const ONE_MINUS_SRC_COLOR: GLenum = 0x0301;
pub const SRC_ALPHA: GLenum = 0x0302;
pub const ONE_MINUS_SRC_ALPHA: GLenum = 0x0303;
pub const DST_ALPHA: GLenum = 0x0304;
pub const ONE_MINUS_DST_ALPHA: GLenum = 0x0305;
pub const DST_COLOR: GLenum = 0x0306;
pub const ONE_MINUS_DST_COLOR: GLenum = 0x0307;
pub const SRC_ALPHA_SATURATE: GLenum = 0x0308;
pub const CONSTANT_COLOR: GLenum = 0x8001;
pub const ONE_MINUS_CONSTANT_COLOR: GLenum = 0x8002;
pub const CONSTANT_ALPHA: GLenum = 0x8003;
pub const ONE_MINUS_CONSTANT_ALPHA: GLenum = 0x8004;

// Primitives
pub const POINTS: GLenum = 0x0000;
pub const LINES: GLenum = 0x0001;
pub const LINE_LOOP: GLenum = 0x0002;
pub const LINE_STRIP: GLenum = 0x0003;
pub const TRIANGLES: GLenum = 0x0004;
pub const TRIANGLE_STRIP: GLenum = 0x0005;
pub const TRIANGLE_FAN: GLenum = 0x0006;

// Queries
pub const MAX_TEXTURE_SIZE: GLenum = 0x0D33;
pub const MAX_CUBE_MAP_TEXTURE_SIZE: GLenum = 0x851C;
pub const MAX_VERTEX_ATTRIBS: GLenum = 0x8869;
pub const MAX_TEXTURE_IMAGE_UNITS: GLenum = 0x8872;
pub const MAX_UNIFORM_BUFFER_BINDINGS: GLenum = 0x8A2F;
pub const COMPILE_STATUS: GLenum = 0x8B81;
pub const LINK_STATUS: GLenum = 0x8B82;
pub const ACTIVE_ATTRIBUTES: GLenum = 0x8B89;
pub const ACTIVE_UNIFORM_BLOCKS: GLenum = 0x8A36;
pub const UNIFORM_BLOCK_DATA_SIZE: GLenum = 0x8A40;
