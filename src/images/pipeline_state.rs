// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Pipeline state objects.

A [`PipelineState`] bundles a shader with the fixed-function state that goes with it.
It is immutable once created; the executor compares pipeline states by id and only
re-applies the fixed-function state when a different pipeline is bound.

The enums here are declared in the order the backend lookup tables index them.
*/

use crate::bindings::descriptor_set::PipelineLayout;
use crate::images::shader::ShaderId;
use crate::imp::GLenum;
use crate::resource_table::Id;

pub type PipelineStateId = Id<PipelineState>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveMode {
    PointList,
    LineList,
    LineStrip,
    LineLoop,
    #[default]
    TriangleList,
    TriangleStrip,
    TriangleFan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CullMode {
    None,
    Front,
    #[default]
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComparisonFunc {
    Never,
    #[default]
    Less,
    Equal,
    LessEqual,
    Greater,
    NotEqual,
    GreaterEqual,
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StencilOp {
    Zero,
    #[default]
    Keep,
    Replace,
    Incr,
    Decr,
    Invert,
    IncrWrap,
    DecrWrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendOp {
    #[default]
    Add,
    Sub,
    RevSub,
    /// GL ES 3.0 has no min/max blending here; realized as `Add`.
    Min,
    /// See [`BlendOp::Min`].
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendFactor {
    Zero,
    #[default]
    One,
    SrcAlpha,
    DstAlpha,
    OneMinusSrcAlpha,
    OneMinusDstAlpha,
    SrcColor,
    DstColor,
    OneMinusSrcColor,
    OneMinusDstColor,
    SrcAlphaSaturate,
    ConstantColor,
    OneMinusConstantColor,
    ConstantAlpha,
    OneMinusConstantAlpha,
}

bitflags::bitflags! {
    /// Writable color channels.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ColorMask: u32 {
        const R = 0x1;
        const G = 0x2;
        const B = 0x4;
        const A = 0x8;
        const ALL = 0xf;
    }
}

impl Default for ColorMask {
    fn default() -> Self {
        ColorMask::ALL
    }
}

bitflags::bitflags! {
    /// Pipeline state that may be overridden per draw.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DynamicStateFlags: u32 {
        const VIEWPORT = 0x1;
        const SCISSOR = 0x2;
        const LINE_WIDTH = 0x4;
        const DEPTH_BIAS = 0x8;
        const BLEND_CONSTANTS = 0x10;
        const DEPTH_BOUNDS = 0x20;
        const STENCIL_WRITE_MASK = 0x40;
        const STENCIL_COMPARE_MASK = 0x80;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StencilFace {
    Front,
    Back,
    #[default]
    All,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterizerState {
    pub cull_mode: CullMode,
    pub is_front_face_ccw: bool,
    pub depth_bias: f32,
    pub depth_bias_slop: f32,
    pub line_width: f32,
}

impl Default for RasterizerState {
    fn default() -> Self {
        RasterizerState {
            cull_mode: CullMode::Back,
            is_front_face_ccw: true,
            depth_bias: 0.0,
            depth_bias_slop: 0.0,
            line_width: 1.0,
        }
    }
}

/// Stencil state for one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StencilFaceState {
    pub test: bool,
    pub func: ComparisonFunc,
    pub read_mask: u32,
    pub write_mask: u32,
    pub fail_op: StencilOp,
    pub z_fail_op: StencilOp,
    pub pass_op: StencilOp,
    pub reference: u32,
}

impl Default for StencilFaceState {
    fn default() -> Self {
        StencilFaceState {
            test: false,
            func: ComparisonFunc::Always,
            read_mask: 0xffff,
            write_mask: 0xffff,
            fail_op: StencilOp::Keep,
            z_fail_op: StencilOp::Keep,
            pass_op: StencilOp::Keep,
            reference: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthStencilState {
    pub depth_test: bool,
    pub depth_write: bool,
    pub depth_func: ComparisonFunc,
    pub stencil_front: StencilFaceState,
    pub stencil_back: StencilFaceState,
}

impl Default for DepthStencilState {
    fn default() -> Self {
        DepthStencilState {
            depth_test: true,
            depth_write: true,
            depth_func: ComparisonFunc::Less,
            stencil_front: StencilFaceState::default(),
            stencil_back: StencilFaceState::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlendTarget {
    pub blend: bool,
    pub blend_src: BlendFactor,
    pub blend_dst: BlendFactor,
    pub blend_eq: BlendOp,
    pub blend_src_alpha: BlendFactor,
    pub blend_dst_alpha: BlendFactor,
    pub blend_alpha_eq: BlendOp,
    pub blend_color_mask: ColorMask,
}

impl BlendTarget {
    pub(crate) const DISABLED: BlendTarget = BlendTarget {
        blend: false,
        blend_src: BlendFactor::One,
        blend_dst: BlendFactor::Zero,
        blend_eq: BlendOp::Add,
        blend_src_alpha: BlendFactor::One,
        blend_dst_alpha: BlendFactor::Zero,
        blend_alpha_eq: BlendOp::Add,
        blend_color_mask: ColorMask::ALL,
    };
}

impl Default for BlendTarget {
    fn default() -> Self {
        BlendTarget::DISABLED
    }
}

/// Blend state.  GL ES 3.0 blends every draw buffer alike, so only the first target
/// is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct BlendState {
    pub is_a2c: bool,
    pub blend_color: [f32; 4],
    pub targets: Vec<BlendTarget>,
}

impl Default for BlendState {
    fn default() -> Self {
        BlendState {
            is_a2c: false,
            blend_color: [0.0; 4],
            targets: vec![BlendTarget::DISABLED],
        }
    }
}

impl BlendState {
    pub(crate) fn target0(&self) -> BlendTarget {
        self.targets.first().copied().unwrap_or(BlendTarget::DISABLED)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineStateInfo {
    pub shader: ShaderId,
    pub pipeline_layout: PipelineLayout,
    pub primitive: PrimitiveMode,
    pub rasterizer_state: RasterizerState,
    pub depth_stencil_state: DepthStencilState,
    pub blend_state: BlendState,
    pub dynamic_states: DynamicStateFlags,
}

impl PipelineStateInfo {
    /// Default fixed-function state for `shader`.
    pub fn new(shader: ShaderId) -> Self {
        PipelineStateInfo {
            shader,
            pipeline_layout: PipelineLayout::default(),
            primitive: PrimitiveMode::TriangleList,
            rasterizer_state: RasterizerState::default(),
            depth_stencil_state: DepthStencilState::default(),
            blend_state: BlendState::default(),
            dynamic_states: DynamicStateFlags::empty(),
        }
    }
}

#[derive(Debug)]
pub struct PipelineState {
    pub(crate) info: PipelineStateInfo,
    pub(crate) gl_primitive: GLenum,
}

impl PipelineState {
    pub fn shader(&self) -> ShaderId {
        self.info.shader
    }
    pub fn primitive(&self) -> PrimitiveMode {
        self.info.primitive
    }
    pub fn rasterizer_state(&self) -> &RasterizerState {
        &self.info.rasterizer_state
    }
    pub fn depth_stencil_state(&self) -> &DepthStencilState {
        &self.info.depth_stencil_state
    }
    pub fn blend_state(&self) -> &BlendState {
        &self.info.blend_state
    }
    pub fn dynamic_states(&self) -> DynamicStateFlags {
        self.info.dynamic_states
    }
    pub fn pipeline_layout(&self) -> &PipelineLayout {
        &self.info.pipeline_layout
    }
    pub fn gl_primitive(&self) -> GLenum {
        self.gl_primitive
    }
}
