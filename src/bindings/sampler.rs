// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Sampler records.

use crate::imp::{GLenum, GlSampler};
use crate::resource_table::Id;

pub type SamplerId = Id<Sampler>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    ///No filtering.  Only meaningful as a mip filter, where it disables mipmapping.
    None,
    ///Nearest texel.
    Point,
    #[default]
    Linear,
    ///Treated as linear by GL-family backends.
    Anisotropic,
}

///Out-of-range coordinate handling.  The declaration order indexes the wrap table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Address {
    #[default]
    Wrap,
    Mirror,
    Clamp,
    ///GL-family backends have no border color; treated as clamp.
    Border,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerInfo {
    pub min_filter: Filter,
    pub mag_filter: Filter,
    pub mip_filter: Filter,
    pub address_u: Address,
    pub address_v: Address,
    pub address_w: Address,
    pub min_lod: f32,
    pub max_lod: f32,
}

impl Default for SamplerInfo {
    fn default() -> Self {
        SamplerInfo {
            min_filter: Filter::Linear,
            mag_filter: Filter::Linear,
            mip_filter: Filter::None,
            address_u: Address::Wrap,
            address_v: Address::Wrap,
            address_w: Address::Wrap,
            min_lod: 0.0,
            max_lod: 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct SamplerRealization {
    pub gl_sampler: Option<GlSampler>,
    pub gl_min_filter: GLenum,
    pub gl_mag_filter: GLenum,
    pub gl_wrap_s: GLenum,
    pub gl_wrap_t: GLenum,
    pub gl_wrap_r: GLenum,
}

/// A sampler.  Immutable after creation.
#[derive(Debug)]
pub struct Sampler {
    pub(crate) info: SamplerInfo,
    pub(crate) realized: SamplerRealization,
}

impl Sampler {
    pub(crate) fn new(info: SamplerInfo) -> Self {
        Sampler {
            info,
            realized: SamplerRealization::default(),
        }
    }
    pub fn info(&self) -> &SamplerInfo {
        &self.info
    }
    pub fn gl_sampler(&self) -> Option<GlSampler> {
        self.realized.gl_sampler
    }
    pub fn gl_min_filter(&self) -> GLenum {
        self.realized.gl_min_filter
    }
    pub fn gl_mag_filter(&self) -> GLenum {
        self.realized.gl_mag_filter
    }
    pub fn gl_wraps(&self) -> [GLenum; 3] {
        [
            self.realized.gl_wrap_s,
            self.realized.gl_wrap_t,
            self.realized.gl_wrap_r,
        ]
    }
}
