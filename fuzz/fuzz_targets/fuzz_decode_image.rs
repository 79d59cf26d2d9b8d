#![no_main]

use gopher::loader::{ImageReference, decode_image};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must decode or fail with a load error, never panic
    let reference = ImageReference::new("fuzz-input");
    if let Ok(resource) = decode_image(&reference, data) {
        let expected = resource.width as usize * resource.height as usize * 4;
        assert_eq!(resource.pixels.len(), expected);
    }
});
