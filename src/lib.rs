/*! state_and_commands translates device-independent GPU work into a minimal stream of
calls against a GL-family API (WebGL2 / OpenGL ES 3.0).

Callers describe resources with plain records (buffers, textures, samplers, render
passes, framebuffers, shaders, input assemblers, descriptor sets, pipeline states),
record commands into packages, and hand those packages to a [`images::Device`].  The
device replays them against a [`imp::Backend`], consulting a mirror of everything the
backend has bound so that no state is ever set twice.

| Layer              | Module                    | Speaks                             |
|--------------------|---------------------------|------------------------------------|
| Records            | [`bindings`], [`images`]  | ids, formats, usage flags          |
| Commands           | [`images::commands`]      | pooled, reference-counted records  |
| Translation        | [`imp`]                   | GL enums and object names          |
| Backend            | [`imp::Backend`]          | one method per GL entry point      |

# Example

```
use state_and_commands::bindings::{BufferInfo, BufferUsage, DrawInfo, MemoryUsage};
use state_and_commands::images::{Device, DeviceConfig};
use state_and_commands::imp::recording::{GlCall, RecordingBackend};

let mut device = Device::new(RecordingBackend::new(), DeviceConfig::default());
let vertices = device.create_buffer(BufferInfo {
    usage: BufferUsage::VERTEX | BufferUsage::TRANSFER_DST,
    mem_usage: MemoryUsage::DEVICE,
    size: 36,
    stride: 12,
});
assert_eq!(device.buffer(vertices).map(|b| b.count()), Some(3));

let mut package = device.create_command_package();
package.draw(&DrawInfo { vertex_count: 3, ..Default::default() });
device.execute_commands(&package);
// nothing bound an input assembler, so nothing was drawn
assert!(!device.backend().calls().iter().any(GlCall::is_draw));
```

# Backends

[`imp::recording::RecordingBackend`] is always available.  It executes nothing and
records every state-changing call, which makes it both the headless backend and the
test backend.  With the `backend_webgl2` feature on wasm32, `imp::webgl2::WebGl2Backend`
drives a real `WebGl2RenderingContext`.

# Errors

No device entry point returns an error.  Failures (a shader that does not compile, an
incomplete framebuffer, an id whose resource was destroyed) are logged through
[logwise](https://sealedabstract.com/code/logwise) and the call returns normally.
*/

pub mod bindings;
pub mod images;
pub mod imp;
pub mod pixel_formats;
mod resource_table;

pub use resource_table::Id;
