#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine; panics are bugs.
        let decoder = vindecode::OfflineDecoder::new();
        if let Ok(v) = decoder.decode(s) {
            assert_eq!(v.vin.chars().count(), 17);
        }
    }
});
