//! End-to-end test: crawl a corpus on disk, index it, query it, snapshot it.

use docdex::crawl::Crawler;
use docdex::extract::PlainTextExtractor;
use docdex::index::stats;
use docdex::index::types::IndexConfig;
use docdex::{IndexEngine, QueryEngine};
use std::fs;
use std::path::Path;

fn write_corpus(root: &Path) {
    // Two pages separated by a form feed; "glossary" appears on both.
    fs::write(
        root.join("guide.txt"),
        "The Glossary begins here.\u{0c}glossary continues: toolkit, trie",
    )
    .unwrap();
    fs::write(root.join("notes.txt"), "toolkit notes and NOTHING else").unwrap();
    // Not eligible: wrong suffix, hidden-without-suffix, unreadable content is fine
    fs::write(root.join("ignore.dat"), "toolkit toolkit toolkit").unwrap();
    fs::write(root.join(".txt"), "leading dot only").unwrap();
    fs::create_dir(root.join("archive")).unwrap();
    fs::write(root.join("archive").join("old.txt"), "archived glossary").unwrap();
}

#[test]
fn test_crawl_index_query_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path());

    let mut engine = IndexEngine::new();
    let crawler = Crawler::new(&IndexConfig::default()).unwrap();
    let crawled = crawler.crawl(dir.path(), &mut engine).unwrap();
    assert_eq!(crawled.registered, 3);
    assert_eq!(crawled.errors, 0);

    let summary = engine.index_all(&PlainTextExtractor).unwrap();
    assert_eq!(summary.documents_indexed, 3);
    assert_eq!(summary.documents_failed, 0);
    assert!(summary.tokens_inserted > 0);

    // Tokens are case-folded at index time.
    let query = QueryEngine::new(&engine);
    assert!(query.lookup_occurrences("nothing").len() == 1);
    assert!(query.lookup_occurrences("NOTHING").is_empty());

    // "glossary" hits three pages across two documents.
    let glossary = query.lookup_occurrences("glossary");
    assert_eq!(glossary.len(), 3);

    // The occurrence for page 1 of guide.txt records the token's byte
    // offset within that page, not within the file.
    let guide_id = engine
        .registry()
        .iter()
        .position(|p| p.file_name().is_some_and(|n| n == "guide.txt"))
        .unwrap() as u32;
    let page1 = glossary
        .iter()
        .find(|o| o.doc_id == guide_id && o.page_number == 1)
        .unwrap();
    assert_eq!(page1.position, 0);

    // Snapshot and reload: same documents, same tokens, reversed order.
    let snapshot = dir.path().join("index.db");
    engine.save(&snapshot).unwrap();
    let reloaded = IndexEngine::load(&snapshot).unwrap();

    assert_eq!(reloaded.document_count(), engine.document_count());
    let live: Vec<_> = query.lookup_occurrences("glossary");
    let restored = QueryEngine::new(&reloaded).lookup_occurrences("glossary");
    let mut reversed = restored.clone();
    reversed.reverse();
    assert_eq!(live, reversed);

    // Stats agree between the live and reloaded engines.
    let before = stats::collect(&engine);
    let after = stats::collect(&reloaded);
    assert_eq!(before.documents, after.documents);
    assert_eq!(before.tokens, after.tokens);
    assert_eq!(before.occurrences, after.occurrences);
    assert_eq!(before.nodes, after.nodes);
}

#[test]
fn test_unreadable_document_does_not_abort_corpus() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ok.txt"), "alpha beta").unwrap();

    let mut engine = IndexEngine::new();
    let crawler = Crawler::new(&IndexConfig::default()).unwrap();
    crawler.crawl(dir.path(), &mut engine).unwrap();

    // Registered after the crawl, never created on disk: extraction fails.
    engine.register(dir.path().join("phantom.txt")).unwrap();

    let summary = engine.index_all(&PlainTextExtractor).unwrap();
    assert_eq!(summary.documents_indexed, 1);
    assert_eq!(summary.documents_failed, 1);
    assert!(engine.search("alpha").is_some());
}
