#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Extraction is total; for 17 characters it partitions the input.
        let joined = format!(
            "{}{}{}",
            vindecode::wmi(s),
            vindecode::vds(s),
            vindecode::vis(s)
        );
        if s.chars().count() == 17 {
            assert_eq!(joined, s);
        }
        let _ = vindecode::sequential_number(s);
        let _ = vindecode::country(s);
    }
});
