#![no_main]

use std::io::Cursor;

use codec::CaesarReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Garbage input must produce errors, never panics
    let Ok(mut reader) = CaesarReader::new(Cursor::new(data)) else {
        return;
    };

    for line in reader.lines() {
        if line.is_err() {
            break;
        }
    }
});
