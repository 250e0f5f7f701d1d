// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Shader programs.

A [`ShaderInfo`] carries GLSL source per stage plus the declared uniform blocks and
samplers with their abstract `(set, binding)` coordinates.  Building the shader (see
[`crate::images::Device::create_shader`]) compiles and links the program and resolves
those coordinates to backend binding points and texture units; the results are read
back through [`Shader::inputs`], [`Shader::blocks`] and [`Shader::samplers`].
*/

use crate::imp::{GLenum, GlProgram, GlUniformLocation};
use crate::resource_table::Id;

pub type ShaderId = Id<Shader>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStageFlag {
    Vertex,
    Control,
    Evaluation,
    Geometry,
    Fragment,
    Compute,
}

impl ShaderStageFlag {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ShaderStageFlag::Vertex => "Vertex Shader",
            ShaderStageFlag::Control => "Control Shader",
            ShaderStageFlag::Evaluation => "Evaluation Shader",
            ShaderStageFlag::Geometry => "Geometry Shader",
            ShaderStageFlag::Fragment => "Fragment Shader",
            ShaderStageFlag::Compute => "Compute Shader",
        }
    }
}

/// Shader variable types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Type {
    #[default]
    Unknown,
    Bool,
    Bool2,
    Bool3,
    Bool4,
    Int,
    Int2,
    Int3,
    Int4,
    Uint,
    Uint2,
    Uint3,
    Uint4,
    Float,
    Float2,
    Float3,
    Float4,
    Mat2,
    Mat2x3,
    Mat2x4,
    Mat3x2,
    Mat3,
    Mat3x4,
    Mat4x2,
    Mat4x3,
    Mat4,
    Sampler1D,
    Sampler1DArray,
    Sampler2D,
    Sampler2DArray,
    Sampler3D,
    SamplerCube,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderStage {
    pub stage: ShaderStageFlag,
    /// GLSL body, without the `#version` line.
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UniformBlock {
    pub set: u32,
    pub binding: u32,
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UniformSampler {
    pub set: u32,
    pub binding: u32,
    pub name: String,
    pub ty: Type,
    /// Array length; 1 for a single sampler.
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShaderInfo {
    pub name: String,
    pub stages: Vec<ShaderStage>,
    pub blocks: Vec<UniformBlock>,
    pub samplers: Vec<UniformSampler>,
}

/// An active vertex input found by introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderInput {
    /// Name with any `[n]` suffix stripped.
    pub name: String,
    pub gl_loc: u32,
    pub ty: Type,
    pub gl_type: GLenum,
    /// Bytes per element.
    pub stride: u32,
    /// Array length.
    pub count: u32,
    pub size: u32,
}

/// A uniform block matched to its declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderBlock {
    pub set: u32,
    pub binding: u32,
    /// Backend block index.
    pub idx: u32,
    pub name: String,
    /// Data size in bytes reported by the backend.
    pub size: u32,
    /// The backend binding point the block is bound to.
    pub gl_binding: u32,
}

/// A sampler with its resolved texture units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSampler {
    pub set: u32,
    pub binding: u32,
    pub name: String,
    pub ty: Type,
    pub gl_type: GLenum,
    /// One texture unit per array element.
    pub units: Vec<i32>,
    pub gl_loc: GlUniformLocation,
}

#[derive(Debug, Default)]
pub(crate) struct ShaderRealization {
    pub gl_program: Option<GlProgram>,
    pub linked: bool,
    pub inputs: Vec<ShaderInput>,
    pub blocks: Vec<ShaderBlock>,
    pub samplers: Vec<ShaderSampler>,
}

#[derive(Debug)]
pub struct Shader {
    pub(crate) info: ShaderInfo,
    pub(crate) realized: ShaderRealization,
}

impl Shader {
    pub(crate) fn new(info: ShaderInfo) -> Self {
        Shader {
            info,
            realized: ShaderRealization::default(),
        }
    }
    pub fn name(&self) -> &str {
        &self.info.name
    }
    pub fn info(&self) -> &ShaderInfo {
        &self.info
    }
    /// The program handle.  Set after every stage compiled, even if linking failed.
    pub fn gl_program(&self) -> Option<GlProgram> {
        self.realized.gl_program
    }
    pub fn is_linked(&self) -> bool {
        self.realized.linked
    }
    pub fn inputs(&self) -> &[ShaderInput] {
        &self.realized.inputs
    }
    pub fn blocks(&self) -> &[ShaderBlock] {
        &self.realized.blocks
    }
    pub fn samplers(&self) -> &[ShaderSampler] {
        &self.realized.samplers
    }
}
