use crate::error::Result;
use crate::index::engine::IndexEngine;
use serde::Serialize;

/// Shape of an engine's trie and registry, collected by a read-only walk.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct IndexStats {
    pub documents: usize,
    pub nodes: usize,
    pub tokens: usize,
    pub occurrences: u64,
    pub max_depth: usize,
}

/// Walk the whole trie with an explicit stack and count what it holds.
pub fn collect(engine: &IndexEngine) -> IndexStats {
    let mut stats = IndexStats {
        documents: engine.document_count(),
        ..IndexStats::default()
    };

    let root = &engine.trie().root;
    let mut stack: Vec<(&crate::index::trie::TrieNode, usize)> = root
        .children
        .iter()
        .filter_map(|c| c.as_deref())
        .map(|c| (c, 1))
        .collect();

    while let Some((node, depth)) = stack.pop() {
        stats.nodes += 1;
        stats.max_depth = stats.max_depth.max(depth);
        if node.is_terminal {
            stats.tokens += 1;
            stats.occurrences += node.occurrences.len() as u64;
        }
        stack.extend(
            node.children
                .iter()
                .filter_map(|c| c.as_deref())
                .map(|c| (c, depth + 1)),
        );
    }

    stats
}

/// Display index statistics, human-readable or as JSON.
pub fn show_stats(engine: &IndexEngine, json: bool) -> Result<()> {
    let stats = collect(engine);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats).map_err(std::io::Error::from)?);
        return Ok(());
    }

    println!("Index Statistics");
    println!("================");
    println!();
    println!("Documents:        {}", stats.documents);
    println!("Distinct tokens:  {}", stats.tokens);
    println!("Occurrences:      {}", stats.occurrences);
    println!("Trie nodes:       {}", stats.nodes);
    println!("Deepest token:    {}", stats.max_depth);

    Ok(())
}
