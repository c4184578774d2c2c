#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(platform) = std::str::from_utf8(data) {
        if let Ok(stages) = terraform_installer::terraform::stages_for_platform(platform) {
            assert!(!stages.is_empty());
        }
    }
});
