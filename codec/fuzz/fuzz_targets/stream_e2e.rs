#![no_main]

use std::io::Cursor;

use codec::{CaesarReader, CaesarWriter, Offset};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Offset, Vec<String>)| {
    let (offset, lines) = input;

    let mut writer = CaesarWriter::new(Vec::new(), offset).unwrap();
    writer.writelines(&lines).unwrap();
    let stream = writer.close().unwrap();

    let mut reader = CaesarReader::new(Cursor::new(stream)).unwrap();
    assert_eq!(reader.offset(), offset);

    let decoded = reader.read(None).unwrap();
    let plain: String = lines.concat();
    assert_eq!(decoded.chars().count(), plain.chars().count());

    // Only code points in [1, 254] survive every offset unchanged
    for (decoded, plain) in decoded.chars().zip(plain.chars()) {
        if (1..=254).contains(&u32::from(plain)) {
            assert_eq!(decoded, plain);
        }
    }
});
