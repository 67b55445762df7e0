#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Tokenize arbitrary text; every produced token must be insertable.
    let mut trie = docdex::index::trie::Trie::new();
    for span in docdex::utils::tokenizer::tokenize(data) {
        trie.insert(
            &span.text,
            docdex::index::types::Occurrence {
                doc_id: 0,
                page_number: 0,
                position: span.offset,
            },
        )
        .unwrap();
    }
});
