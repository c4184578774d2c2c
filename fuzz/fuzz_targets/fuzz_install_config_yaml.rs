#![no_main]

use libfuzzer_sys::fuzz_target;
use terraform_installer::assets::installconfig::{field_errors, InstallConfigSpec};

fuzz_target!(|data: &[u8]| {
    if let Ok(spec) = serde_yaml_ng::from_slice::<InstallConfigSpec>(data) {
        let _ = field_errors(&spec);
    }
});
