//! Disk map compaction and filesystem checksums.
//!
//! The dense map alternates file lengths and free-space lengths. Files are
//! numbered from 0 in the order they appear.

use anyhow::{Result, bail};

/// One block per position; `None` is free space.
pub type Blocks = Vec<Option<usize>>;

/// Expand a dense disk map into individual blocks.
pub fn parse_disk_map(input: &str) -> Result<Blocks> {
    let mut blocks = Vec::new();
    for (index, ch) in input.trim().chars().enumerate() {
        let Some(length) = ch.to_digit(10) else {
            bail!("position {}: invalid length '{ch}'", index + 1);
        };
        let block = (index % 2 == 0).then_some(index / 2);
        blocks.extend(std::iter::repeat_n(block, length as usize));
    }
    Ok(blocks)
}

/// Move file blocks one at a time from the end into the leftmost gap.
pub fn compact_blocks(blocks: &mut [Option<usize>]) {
    if blocks.is_empty() {
        return;
    }
    let mut free = 0;
    let mut tail = blocks.len() - 1;
    loop {
        while free < blocks.len() && blocks[free].is_some() {
            free += 1;
        }
        while tail > 0 && blocks[tail].is_none() {
            tail -= 1;
        }
        if free >= tail {
            break;
        }
        blocks.swap(free, tail);
    }
}

/// Move whole files, highest id first, into the leftmost span of free space
/// to their left that fits. A file that fits nowhere stays put.
pub fn compact_files(blocks: &mut [Option<usize>]) {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    let mut position = 0;
    while position < blocks.len() {
        let Some(id) = blocks[position] else {
            position += 1;
            continue;
        };
        let start = position;
        while position < blocks.len() && blocks[position] == Some(id) {
            position += 1;
        }
        if spans.len() <= id {
            spans.resize(id + 1, (0, 0));
        }
        spans[id] = (start, position - start);
    }

    for (id, &(start, length)) in spans.iter().enumerate().rev() {
        if length == 0 {
            continue;
        }
        if let Some(target) = find_free_span(&blocks[..start], length) {
            for offset in 0..length {
                blocks[target + offset] = Some(id);
                blocks[start + offset] = None;
            }
        }
    }
}

fn find_free_span(blocks: &[Option<usize>], length: usize) -> Option<usize> {
    let mut run = 0;
    for (position, block) in blocks.iter().enumerate() {
        if block.is_some() {
            run = 0;
            continue;
        }
        run += 1;
        if run == length {
            return Some(position + 1 - length);
        }
    }
    None
}

/// Sum of position times file id over occupied blocks.
pub fn checksum(blocks: &[Option<usize>]) -> u64 {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(position, block)| block.map(|id| (position * id) as u64))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::DISK_SAMPLE;

    fn render(blocks: &[Option<usize>]) -> String {
        blocks
            .iter()
            .map(|block| block.map_or('.', |id| char::from(b'0' + id as u8)))
            .collect()
    }

    #[test]
    fn expands_dense_map() {
        let blocks = parse_disk_map("12345").expect("parse");
        assert_eq!(render(&blocks), "0..111....22222");
    }

    #[test]
    fn block_compaction_fills_gaps_from_the_end() {
        let mut blocks = parse_disk_map("12345").expect("parse");
        compact_blocks(&mut blocks);
        assert_eq!(render(&blocks), "022111222......");
    }

    #[test]
    fn sample_block_checksum() {
        let mut blocks = parse_disk_map(DISK_SAMPLE).expect("parse");
        compact_blocks(&mut blocks);
        assert_eq!(checksum(&blocks), 1928);
    }

    #[test]
    fn sample_whole_file_checksum() {
        let mut blocks = parse_disk_map(DISK_SAMPLE).expect("parse");
        compact_files(&mut blocks);
        assert_eq!(
            render(&blocks),
            "00992111777.44.333....5555.6666.....8888.."
        );
        assert_eq!(checksum(&blocks), 2858);
    }

    #[test]
    fn rejects_non_digit() {
        assert!(parse_disk_map("12a4").is_err());
    }
}
