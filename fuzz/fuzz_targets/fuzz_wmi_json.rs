#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(db) = vindecode::WmiDatabase::from_json(s) {
            let _ = db.manufacturer("1HG");
            let _ = db.all_manufacturers();
        }
    }
});
