// Backend used by the command line probe.
//
// CPU (ndarray) by default so the probe runs anywhere; build
// with `--features wgpu` to run it on the GPU instead.

use burn::prelude::*;

#[cfg(not(feature = "wgpu"))]
pub type InspectBackend = burn::backend::NdArray;

#[cfg(feature = "wgpu")]
pub type InspectBackend = burn::backend::Wgpu;

pub fn inspect_device() -> <InspectBackend as Backend>::Device {
    Default::default()
}
