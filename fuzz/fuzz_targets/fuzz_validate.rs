#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic; validity must agree with the error list.
        let result = vindecode::validate(s);
        assert_eq!(result.valid, result.errors.is_empty());
        let _ = vindecode::calculate_check_digit(s);
    }
});
