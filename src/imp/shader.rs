// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Shader program build.

Compiles each stage, links, then introspects the program: active attributes become
[`ShaderInput`]s, active uniform blocks are matched against the declared blocks and
bound to their binding points, and declared samplers are assigned texture units.

Texture units are shared across programs through the cache's name-to-unit map, so a
sampler called `u_albedo` lands on the same unit in every program that declares it
whenever that is possible.  This keeps texture bindings stable across pipeline switches.
*/

use std::collections::HashSet;

use crate::images::device::BindingMappingInfo;
use crate::images::shader::{Shader, ShaderBlock, ShaderInput, ShaderSampler, ShaderStageFlag};
use crate::imp::formats::{
    backend_type_to_byte_size, backend_type_to_variable_type, variable_type_to_backend_type,
};
use crate::imp::gl::{self, GLenum};
use crate::imp::state_cache::StateCache;
use crate::imp::{Backend, DeviceCaps, Error, GlShader, GlUniformLocation};

fn stage_type(stage: ShaderStageFlag) -> Result<GLenum, Error> {
    match stage {
        ShaderStageFlag::Vertex => Ok(gl::VERTEX_SHADER),
        ShaderStageFlag::Fragment => Ok(gl::FRAGMENT_SHADER),
        other => Err(Error::UnsupportedShaderStage(other)),
    }
}

/// Strips an array suffix: `lights[0]` becomes `lights`.
fn base_name(name: &str) -> &str {
    match name.find('[') {
        Some(i) => &name[..i],
        None => name,
    }
}

/// The source with every line prefixed by its number, for compile diagnostics.
fn numbered(source: &str) -> String {
    let mut out = String::with_capacity(source.len() + source.len() / 8);
    for (i, line) in source.lines().enumerate() {
        out.push('\n');
        out.push_str(&(i + 1).to_string());
        out.push(' ');
        out.push_str(line);
    }
    out
}

/// What a failed stage logs: the failure, the numbered source, then the backend log.
fn compile_failure_lines(err: &Error, source: &str) -> Vec<String> {
    let mut lines = vec![
        err.to_string(),
        format!("Shader source dump:{}", numbered(source)),
    ];
    if let Error::ShaderCompile { log, .. } = err
        && !log.is_empty()
    {
        lines.push(log.clone());
    }
    lines
}

fn compile_stages<B: Backend>(
    backend: &mut B,
    shader: &Shader,
    header: &str,
) -> Result<Vec<GlShader>, Error> {
    let mut compiled = Vec::with_capacity(shader.info.stages.len());
    for stage in &shader.info.stages {
        let ty = match stage_type(stage.stage) {
            Ok(ty) => ty,
            Err(e) => {
                for s in compiled {
                    backend.delete_shader(s);
                }
                return Err(e);
            }
        };
        let Some(handle) = backend.create_shader(ty) else {
            for s in compiled {
                backend.delete_shader(s);
            }
            return Err(Error::BackendObject("shader"));
        };
        compiled.push(handle);
        let mut full = String::with_capacity(header.len() + stage.source.len());
        full.push_str(header);
        full.push_str(&stage.source);
        backend.shader_source(handle, &full);
        backend.compile_shader(handle);

        if !backend.shader_compile_status(handle) {
            let err = Error::ShaderCompile {
                stage: stage.stage.label(),
                name: shader.info.name.clone(),
                log: backend.shader_info_log(handle),
            };
            for line in compile_failure_lines(&err, &stage.source) {
                logwise::error_sync!("{line}", line = logwise::privacy::LogIt(&line));
            }
            for s in compiled {
                backend.delete_shader(s);
            }
            return Err(err);
        }
    }
    Ok(compiled)
}

fn reflect_inputs<B: Backend>(backend: &mut B, shader: &mut Shader) {
    let Some(program) = shader.realized.gl_program else {
        return;
    };
    let count = backend.active_attribute_count(program);
    let mut inputs = Vec::with_capacity(count as usize);
    for i in 0..count {
        let Some(attribute) = backend.active_attribute(program, i) else {
            continue;
        };
        let name = base_name(&attribute.name).to_owned();
        let location = backend.attrib_location(program, &name);
        if location < 0 {
            continue;
        }
        let stride = backend_type_to_byte_size(attribute.gl_type);
        inputs.push(ShaderInput {
            gl_loc: location as u32,
            ty: backend_type_to_variable_type(attribute.gl_type),
            gl_type: attribute.gl_type,
            stride,
            count: attribute.size,
            size: stride * attribute.size,
            name,
        });
    }
    shader.realized.inputs = inputs;
}

fn bind_blocks<B: Backend>(backend: &mut B, shader: &mut Shader, mapping: &BindingMappingInfo) {
    let Some(program) = shader.realized.gl_program else {
        return;
    };
    let count = backend.active_uniform_block_count(program);
    let mut blocks = Vec::with_capacity(count as usize);
    for index in 0..count {
        let Some(reported) = backend.active_uniform_block_name(program, index) else {
            continue;
        };
        let name = base_name(&reported);
        let Some(declared) = shader.info.blocks.iter().find(|b| b.name == name) else {
            logwise::error_sync!(
                "Block '{name}' does not bound",
                name = logwise::privacy::LogIt(name)
            );
            continue;
        };
        let size = backend.active_uniform_block_data_size(program, index);
        let gl_binding =
            declared.binding + mapping.buffer_offsets.get(declared.set as usize).copied().unwrap_or(0);
        backend.uniform_block_binding(program, index, gl_binding);
        blocks.push(ShaderBlock {
            set: declared.set,
            binding: declared.binding,
            idx: index,
            name: name.to_owned(),
            size,
            gl_binding,
        });
    }
    shader.realized.blocks = blocks;
}

/// Seeds the name-to-unit map for samplers not seen before.
fn seed_units(cache: &mut StateCache, shader: &Shader, mapping: &BindingMappingInfo, caps: &DeviceCaps) {
    let flexible_base = shader
        .info
        .blocks
        .iter()
        .filter(|b| b.set == mapping.flexible_set)
        .count() as i64;
    let max_units = i64::from(caps.max_texture_units.max(1));
    let mut array_offset: i64 = 0;
    for sampler in &shader.info.samplers {
        if cache.tex_unit_cache.contains_key(&sampler.name) {
            continue;
        }
        let mut binding = i64::from(sampler.binding)
            + i64::from(mapping.sampler_offsets.get(sampler.set as usize).copied().unwrap_or(0))
            + array_offset;
        if sampler.set == mapping.flexible_set {
            binding -= flexible_base;
        }
        if binding >= 0 {
            cache
                .tex_unit_cache
                .insert(sampler.name.clone(), (binding % max_units) as u32);
        }
        array_offset += i64::from(sampler.count) - 1;
    }
}

fn assign_units<B: Backend>(
    backend: &mut B,
    cache: &mut StateCache,
    shader: &mut Shader,
    mapping: &BindingMappingInfo,
    caps: &DeviceCaps,
) {
    let Some(program) = shader.realized.gl_program else {
        return;
    };
    // (declaration index, location) of each sampler the program actually uses
    let mut active: Vec<(usize, GlUniformLocation)> = Vec::new();
    for (i, sampler) in shader.info.samplers.iter().enumerate() {
        if let Some(location) = backend.uniform_location(program, &sampler.name) {
            active.push((i, location));
        }
    }
    seed_units(cache, shader, mapping, caps);
    if active.is_empty() {
        shader.realized.samplers.clear();
        return;
    }

    let mut used: HashSet<u32> = HashSet::new();
    let mut units: Vec<Option<Vec<i32>>> = vec![None; active.len()];

    // reuse existing mappings first
    for (slot, &(i, _)) in active.iter().enumerate() {
        let declared = &shader.info.samplers[i];
        let Some(&cached) = cache.tex_unit_cache.get(&declared.name) else {
            continue;
        };
        let mut assigned = Vec::with_capacity(declared.count as usize);
        let mut offset = 0;
        for t in 0..declared.count {
            while used.contains(&(cached + t + offset)) {
                offset += 1;
            }
            assigned.push((cached + t + offset) as i32);
            used.insert(cached + t + offset);
        }
        units[slot] = Some(assigned);
    }

    // fill in the rest sequentially
    let mut next = 0;
    for (slot, &(i, _)) in active.iter().enumerate() {
        if units[slot].is_some() {
            continue;
        }
        let declared = &shader.info.samplers[i];
        while used.contains(&next) {
            next += 1;
        }
        let assigned = (0..declared.count)
            .map(|t| {
                used.insert(next + t);
                (next + t) as i32
            })
            .collect();
        units[slot] = Some(assigned);
        cache
            .tex_unit_cache
            .entry(declared.name.clone())
            .or_insert(next);
    }

    let samplers: Vec<ShaderSampler> = active
        .iter()
        .zip(units)
        .map(|(&(i, gl_loc), units)| {
            let declared = &shader.info.samplers[i];
            ShaderSampler {
                set: declared.set,
                binding: declared.binding,
                name: declared.name.clone(),
                ty: declared.ty,
                gl_type: variable_type_to_backend_type(declared.ty),
                units: units.unwrap_or_default(),
                gl_loc,
            }
        })
        .collect();

    let switch = cache.gl_program != Some(program);
    if switch {
        backend.use_program(Some(program));
    }
    for sampler in &samplers {
        backend.uniform_1iv(sampler.gl_loc, &sampler.units);
    }
    if switch {
        backend.use_program(cache.gl_program);
    }
    shader.realized.samplers = samplers;
}

/// Compiles, links and introspects `shader`.
///
/// On a link failure the program handle is kept and [`Shader::is_linked`] stays false.
pub(crate) fn create<B: Backend>(
    backend: &mut B,
    cache: &mut StateCache,
    caps: &DeviceCaps,
    mapping: &BindingMappingInfo,
    header: &str,
    shader: &mut Shader,
) -> Result<(), Error> {
    let stages = compile_stages(backend, shader, header)?;

    let Some(program) = backend.create_program() else {
        for s in stages {
            backend.delete_shader(s);
        }
        return Err(Error::BackendObject("program"));
    };
    shader.realized.gl_program = Some(program);
    for &s in &stages {
        backend.attach_shader(program, s);
    }
    backend.link_program(program);
    for s in stages {
        backend.detach_shader(program, s);
        backend.delete_shader(s);
    }

    if !backend.program_link_status(program) {
        return Err(Error::ShaderLink {
            name: shader.info.name.clone(),
            log: backend.program_info_log(program),
        });
    }
    shader.realized.linked = true;
    logwise::info_sync!(
        "Shader '{name}' compilation succeeded.",
        name = logwise::privacy::LogIt(&shader.info.name)
    );

    reflect_inputs(backend, shader);
    bind_blocks(backend, shader, mapping);
    assign_units(backend, cache, shader, mapping, caps);
    Ok(())
}

pub(crate) fn destroy<B: Backend>(backend: &mut B, cache: &mut StateCache, shader: &Shader) {
    let Some(program) = shader.realized.gl_program else {
        return;
    };
    if cache.gl_program == Some(program) {
        backend.use_program(None);
        cache.gl_program = None;
        cache.pipeline_state = None;
    }
    backend.delete_program(program);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_suffix_is_stripped() {
        assert_eq!(base_name("lights[0]"), "lights");
        assert_eq!(base_name("a_position"), "a_position");
    }

    #[test]
    fn dump_numbers_lines() {
        assert_eq!(numbered("void main() {\n}"), "\n1 void main() {\n2 }");
    }

    #[test]
    fn compile_failure_logs_the_stage_before_the_dump() {
        let err = Error::ShaderCompile {
            stage: "Fragment Shader",
            name: "sky".to_owned(),
            log: "ERROR: 0:1: 'x' : undeclared identifier".to_owned(),
        };
        assert_eq!(
            compile_failure_lines(&err, "void main() {\n x;\n}"),
            vec![
                "Fragment Shader in 'sky' compilation failed.".to_owned(),
                "Shader source dump:\n1 void main() {\n2  x;\n3 }".to_owned(),
                "ERROR: 0:1: 'x' : undeclared identifier".to_owned(),
            ]
        );
    }

    #[test]
    fn only_vertex_and_fragment_compile() {
        assert_eq!(stage_type(ShaderStageFlag::Vertex).ok(), Some(gl::VERTEX_SHADER));
        assert!(matches!(
            stage_type(ShaderStageFlag::Compute),
            Err(Error::UnsupportedShaderStage(ShaderStageFlag::Compute))
        ));
    }
}
