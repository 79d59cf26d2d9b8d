#![no_main]

use gopher::config::AppConfig;
use gopher::controller::ViewController;
use gopher::loader::{ImageReference, Resource, ResourceLoader};
use libfuzzer_sys::fuzz_target;

struct NeverLoads;

impl ResourceLoader for NeverLoads {
    fn load(&self, reference: &ImageReference) -> gopher::Result<Resource> {
        Err(gopher::GopherError::load_failure(
            reference.as_str(),
            "fuzzing",
        ))
    }
}

fuzz_target!(|data: &[u8]| {
    // Any config that parses must either build a controller or be rejected cleanly
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = serde_json::from_str::<AppConfig>(s) {
            let _ = ViewController::from_config(&config, NeverLoads);
        }
    }
});
