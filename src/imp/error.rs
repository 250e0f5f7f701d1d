// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::images::shader::ShaderStageFlag;
use crate::imp::GLenum;

/// Failures inside the translation layer.
///
/// These never escape a [`crate::images::Device`] entry point: the device logs them and
/// carries on.  They are public so that backends and tests can name them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported shader stage {0:?}")]
    UnsupportedShaderStage(ShaderStageFlag),
    #[error("{stage} in '{name}' compilation failed.")]
    ShaderCompile {
        stage: &'static str,
        name: String,
        log: String,
    },
    #[error("Failed to link shader '{name}': {log}")]
    ShaderLink { name: String, log: String },
    #[error("{0} was used after it was destroyed")]
    StaleResource(&'static str),
    #[error("Framebuffer is incomplete (status {0:#x})")]
    FramebufferIncomplete(GLenum),
    #[error("The backend could not allocate a {0}")]
    BackendObject(&'static str),
}
