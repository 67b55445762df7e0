//! Microbenchmarks for trie insertion, lookup and snapshot round trips.
//!
//! Run with: `cargo bench`

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use docdex::index::codec::{read_index, write_index};
use docdex::index::registry::DocumentRegistry;
use docdex::index::trie::Trie;
use docdex::index::types::Occurrence;

/// Synthetic corpus: pseudo-words spread over a handful of documents.
fn sample_tokens(count: usize) -> Vec<String> {
    let syllables = ["to", "ken", "in", "dex", "al", "go", "ri", "thm", "page"];
    (0..count)
        .map(|i| {
            let a = syllables[i % syllables.len()];
            let b = syllables[(i / syllables.len()) % syllables.len()];
            format!("{a}{b}{}", i % 97)
        })
        .collect()
}

fn build_trie(tokens: &[String]) -> Trie {
    let mut trie = Trie::new();
    for (i, token) in tokens.iter().enumerate() {
        trie.insert(
            token,
            Occurrence {
                doc_id: (i % 8) as u32,
                page_number: (i % 40) as u32,
                position: i as u64,
            },
        )
        .unwrap();
    }
    trie
}

fn bench_insert(c: &mut Criterion) {
    let tokens = sample_tokens(10_000);
    c.bench_function("trie_insert_10k", |b| {
        b.iter(|| build_trie(black_box(&tokens)))
    });
}

fn bench_search(c: &mut Criterion) {
    let tokens = sample_tokens(10_000);
    let trie = build_trie(&tokens);
    c.bench_function("trie_search_hit", |b| {
        b.iter(|| {
            for token in tokens.iter().step_by(101) {
                black_box(trie.search(token));
            }
        })
    });
    c.bench_function("trie_search_miss", |b| {
        b.iter(|| black_box(trie.search("unindexedtoken")))
    });
}

fn bench_round_trip(c: &mut Criterion) {
    let tokens = sample_tokens(10_000);
    let trie = build_trie(&tokens);
    let mut registry = DocumentRegistry::new();
    for i in 0..8 {
        registry.register(format!("/corpus/doc{i}.txt")).unwrap();
    }

    let mut encoded = Vec::new();
    write_index(&trie, &registry, &mut encoded).unwrap();

    c.bench_function("codec_write_10k", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(encoded.len());
            write_index(black_box(&trie), &registry, &mut buf).unwrap();
            buf
        })
    });
    c.bench_function("codec_read_10k", |b| {
        b.iter(|| read_index(&mut black_box(&encoded[..])).unwrap())
    });
}

criterion_group!(benches, bench_insert, bench_search, bench_round_trip);
criterion_main!(benches);
