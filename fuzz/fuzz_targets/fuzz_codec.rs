#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decode arbitrary bytes as a snapshot. Every failure must be a typed
    // error; panics and partial engines are bugs.
    let _ = docdex::index::codec::read_index(&mut &data[..]);
});
