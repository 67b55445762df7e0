//! Binary snapshot codec for the trie index and document registry.
//!
//! A snapshot is a single flat little-endian stream:
//!
//! ```text
//! magic:     u32   = 0xD0C0C0DE
//! version:   u16   = 1
//! doc_count: i32
//! doc_count × { length: i32, path bytes (not NUL-terminated) }
//! root: { is_terminal: u8, child_count: i32 }      -- no slot index
//! child records, recursive pre-order, each:
//!   slot_index:       i32  (0..=127, position in the parent's table)
//!   is_terminal:      u8
//!   child_count:      i32
//!   occurrence_count: i32
//!   occurrence_count × { doc_id: i32, page_number: i32, position: i64 }
//!   child_count × child record
//! ```
//!
//! Only populated slots are written, which is why every non-root record
//! leads with the slot index its parent must place it in. Occurrences are
//! written head-to-tail; decode rebuilds each list with unchecked appends in
//! stream order, so one round trip reverses a list's order. That reversal is
//! part of the contract, not an accident to fix.
//!
//! Both directions traverse with an explicit stack: recursion depth would
//! otherwise be bounded only by the longest shared prefix in the corpus.

use crate::error::{IndexError, Result};
use crate::index::registry::DocumentRegistry;
use crate::index::trie::{ALPHABET_SIZE, Trie, TrieNode};
use crate::index::types::Occurrence;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Sentinel identifying a docdex snapshot.
pub const MAGIC: u32 = 0xD0C0_C0DE;

/// Current snapshot format version.
pub const FORMAT_VERSION: u16 = 1;

/// Write a snapshot of the trie and registry to `writer`.
pub fn write_index<W: Write>(
    trie: &Trie,
    registry: &DocumentRegistry,
    writer: &mut W,
) -> Result<()> {
    write_u32(writer, MAGIC)?;
    write_u16(writer, FORMAT_VERSION)?;

    write_i32(writer, registry.len() as i32)?;
    for path in registry.iter() {
        let path_str = path.to_string_lossy();
        let bytes = path_str.as_bytes();
        write_i32(writer, bytes.len() as i32)?;
        writer.write_all(bytes)?;
    }

    // The root record is asymmetric: no slot index precedes it, and its
    // occurrence list is never written because the root is never terminal.
    write_bool(writer, trie.root.is_terminal)?;
    write_i32(writer, trie.root.child_count() as i32)?;

    let mut stack: Vec<(u8, &TrieNode)> = Vec::new();
    push_children(&trie.root, &mut stack);

    while let Some((slot, node)) = stack.pop() {
        write_i32(writer, slot as i32)?;
        write_bool(writer, node.is_terminal)?;
        write_i32(writer, node.child_count() as i32)?;
        write_i32(writer, node.occurrences.len() as i32)?;
        for occurrence in node.occurrences.iter() {
            write_i32(writer, occurrence.doc_id as i32)?;
            write_i32(writer, occurrence.page_number as i32)?;
            write_i64(writer, occurrence.position as i64)?;
        }
        push_children(node, &mut stack);
    }

    Ok(())
}

/// Push populated children in reverse slot order so the lowest slot is
/// popped first, matching recursive pre-order.
fn push_children<'a>(node: &'a TrieNode, stack: &mut Vec<(u8, &'a TrieNode)>) {
    for (slot, child) in node.children.iter().enumerate().rev() {
        if let Some(child) = child {
            stack.push((slot as u8, child));
        }
    }
}

/// Decode frame: a node whose remaining child records have not been read
/// yet. Once they have, the frame is popped and `(slot, node)` is handed to
/// the parent frame below it for placement.
struct Frame {
    slot: u8,
    node: Box<TrieNode>,
    remaining: usize,
}

/// Read a snapshot, reconstructing an equivalent trie and registry.
pub fn read_index<R: Read>(reader: &mut R) -> Result<(Trie, DocumentRegistry)> {
    let magic = read_u32(reader, "magic")?;
    if magic != MAGIC {
        return Err(IndexError::CorruptFormat {
            found: magic,
            expected: MAGIC,
        });
    }

    let version = read_u16(reader, "version")?;
    if version != FORMAT_VERSION {
        return Err(IndexError::UnsupportedVersion(version));
    }

    let doc_count = read_count(reader, "document count")?;
    let mut registry = DocumentRegistry::new();
    for _ in 0..doc_count {
        let len = read_count(reader, "document path length")?;
        let mut bytes = vec![0u8; len];
        read_exact_field(reader, &mut bytes, "document path")?;
        registry.register(PathBuf::from(String::from_utf8_lossy(&bytes).as_ref()))?;
    }

    let mut root = TrieNode::new();
    root.is_terminal = read_bool(reader, "root terminal flag")?;
    let root_children = read_count(reader, "root child count")?;

    let mut stack = vec![Frame {
        slot: 0, // unused: the root is placed nowhere
        node: Box::new(root),
        remaining: root_children,
    }];

    while let Some(mut frame) = stack.pop() {
        if frame.remaining == 0 {
            match stack.last_mut() {
                Some(parent) => {
                    let slot = frame.slot as usize;
                    if parent.node.children[slot].is_some() {
                        return Err(IndexError::Corrupt("duplicate child slot"));
                    }
                    parent.node.children[slot] = Some(frame.node);
                }
                None => return Ok((Trie { root: *frame.node }, registry)),
            }
            continue;
        }

        frame.remaining -= 1;
        stack.push(frame);

        let slot = read_i32(reader, "slot index")?;
        if slot < 0 || slot as usize >= ALPHABET_SIZE {
            return Err(IndexError::Corrupt("slot index out of range"));
        }

        let mut node = TrieNode::new();
        node.is_terminal = read_bool(reader, "terminal flag")?;
        let child_count = read_count(reader, "child count")?;
        let occurrence_count = read_count(reader, "occurrence count")?;

        for _ in 0..occurrence_count {
            let doc_id = read_i32(reader, "occurrence document id")?;
            let page_number = read_i32(reader, "occurrence page number")?;
            let position = read_i64(reader, "occurrence position")?;
            if doc_id < 0 || page_number < 0 || position < 0 {
                return Err(IndexError::Corrupt("negative occurrence field"));
            }
            node.occurrences.push_unchecked(Occurrence {
                doc_id: doc_id as u32,
                page_number: page_number as u32,
                position: position as u64,
            });
        }

        stack.push(Frame {
            slot: slot as u8,
            node: Box::new(node),
            remaining: child_count,
        });
    }

    Err(IndexError::Corrupt("unbalanced node records"))
}

fn write_u16<W: Write>(writer: &mut W, value: u16) -> io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

fn write_u32<W: Write>(writer: &mut W, value: u32) -> io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

fn write_i32<W: Write>(writer: &mut W, value: i32) -> io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

fn write_i64<W: Write>(writer: &mut W, value: i64) -> io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

fn write_bool<W: Write>(writer: &mut W, value: bool) -> io::Result<()> {
    writer.write_all(&[value as u8])
}

/// A short read is a truncated snapshot, named after the field being read;
/// every other I/O failure passes through unchanged.
fn read_exact_field<R: Read>(reader: &mut R, buf: &mut [u8], field: &'static str) -> Result<()> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            IndexError::Truncated(field)
        } else {
            IndexError::Io(e)
        }
    })
}

fn read_u16<R: Read>(reader: &mut R, field: &'static str) -> Result<u16> {
    let mut buf = [0u8; 2];
    read_exact_field(reader, &mut buf, field)?;
    Ok(u16::from_le_bytes(buf))
}

fn read_u32<R: Read>(reader: &mut R, field: &'static str) -> Result<u32> {
    let mut buf = [0u8; 4];
    read_exact_field(reader, &mut buf, field)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_i32<R: Read>(reader: &mut R, field: &'static str) -> Result<i32> {
    let mut buf = [0u8; 4];
    read_exact_field(reader, &mut buf, field)?;
    Ok(i32::from_le_bytes(buf))
}

fn read_i64<R: Read>(reader: &mut R, field: &'static str) -> Result<i64> {
    let mut buf = [0u8; 8];
    read_exact_field(reader, &mut buf, field)?;
    Ok(i64::from_le_bytes(buf))
}

fn read_bool<R: Read>(reader: &mut R, field: &'static str) -> Result<bool> {
    let mut buf = [0u8; 1];
    read_exact_field(reader, &mut buf, field)?;
    Ok(buf[0] != 0)
}

/// Read a count field: i32 on disk, never validly negative.
fn read_count<R: Read>(reader: &mut R, field: &'static str) -> Result<usize> {
    let value = read_i32(reader, field)?;
    if value < 0 {
        return Err(IndexError::Corrupt("negative count"));
    }
    Ok(value as usize)
}
