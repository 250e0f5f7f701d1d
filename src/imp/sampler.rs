// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Sampler lifecycle.

use crate::bindings::sampler::{Filter, Sampler};
use crate::imp::formats::address_to_wrap;
use crate::imp::gl::{self, GLenum};
use crate::imp::state_cache::StateCache;
use crate::imp::{Backend, Error};

fn is_linear(filter: Filter) -> bool {
    matches!(filter, Filter::Linear | Filter::Anisotropic)
}

/// Combines the minification and mip filters into one backend enum.
pub(crate) fn min_filter(min: Filter, mip: Filter) -> GLenum {
    match (is_linear(min), mip) {
        (true, Filter::Linear | Filter::Anisotropic) => gl::LINEAR_MIPMAP_LINEAR,
        (true, Filter::Point) => gl::LINEAR_MIPMAP_NEAREST,
        (true, Filter::None) => gl::LINEAR,
        (false, Filter::Linear | Filter::Anisotropic) => gl::NEAREST_MIPMAP_LINEAR,
        (false, Filter::Point) => gl::NEAREST_MIPMAP_NEAREST,
        (false, Filter::None) => gl::NEAREST,
    }
}

pub(crate) fn mag_filter(mag: Filter) -> GLenum {
    if is_linear(mag) { gl::LINEAR } else { gl::NEAREST }
}

pub(crate) fn create<B: Backend>(backend: &mut B, sampler: &mut Sampler) -> Result<(), Error> {
    let handle = backend.create_sampler().ok_or(Error::BackendObject("sampler"))?;
    let info = sampler.info;
    let realized = &mut sampler.realized;
    realized.gl_sampler = Some(handle);
    realized.gl_min_filter = min_filter(info.min_filter, info.mip_filter);
    realized.gl_mag_filter = mag_filter(info.mag_filter);
    realized.gl_wrap_s = address_to_wrap(info.address_u);
    realized.gl_wrap_t = address_to_wrap(info.address_v);
    realized.gl_wrap_r = address_to_wrap(info.address_w);

    backend.sampler_parameter_i(handle, gl::TEXTURE_MIN_FILTER, realized.gl_min_filter as i32);
    backend.sampler_parameter_i(handle, gl::TEXTURE_MAG_FILTER, realized.gl_mag_filter as i32);
    backend.sampler_parameter_i(handle, gl::TEXTURE_WRAP_S, realized.gl_wrap_s as i32);
    backend.sampler_parameter_i(handle, gl::TEXTURE_WRAP_T, realized.gl_wrap_t as i32);
    backend.sampler_parameter_i(handle, gl::TEXTURE_WRAP_R, realized.gl_wrap_r as i32);
    backend.sampler_parameter_f(handle, gl::TEXTURE_MIN_LOD, info.min_lod);
    backend.sampler_parameter_f(handle, gl::TEXTURE_MAX_LOD, info.max_lod);
    Ok(())
}

pub(crate) fn destroy<B: Backend>(backend: &mut B, cache: &mut StateCache, sampler: &Sampler) {
    let Some(handle) = sampler.realized.gl_sampler else {
        return;
    };
    for unit in cache.gl_sampler_units.iter_mut() {
        if *unit == Some(handle) {
            *unit = None;
        }
    }
    backend.delete_sampler(handle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_combine() {
        assert_eq!(min_filter(Filter::Linear, Filter::Linear), gl::LINEAR_MIPMAP_LINEAR);
        assert_eq!(min_filter(Filter::Anisotropic, Filter::Point), gl::LINEAR_MIPMAP_NEAREST);
        assert_eq!(min_filter(Filter::Linear, Filter::None), gl::LINEAR);
        assert_eq!(min_filter(Filter::Point, Filter::Anisotropic), gl::NEAREST_MIPMAP_LINEAR);
        assert_eq!(min_filter(Filter::Point, Filter::Point), gl::NEAREST_MIPMAP_NEAREST);
        assert_eq!(min_filter(Filter::None, Filter::None), gl::NEAREST);
        assert_eq!(mag_filter(Filter::Anisotropic), gl::LINEAR);
        assert_eq!(mag_filter(Filter::Point), gl::NEAREST);
    }
}
