#![no_main]

use filemagic::SignatureTable;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let table = SignatureTable::builtin();
    if let Some(record) = table.lookup(data) {
        assert!(record.window() <= data.len());
        assert!(record.matches(data));
    }
});
