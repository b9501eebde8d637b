use anyhow::Result;

use crate::{Data, PuzzleError};

fn parse_disk_map(input: &str) -> Result<Vec<u64>> {
    input
        .trim()
        .bytes()
        .map(|b| match b {
            b'0'..=b'9' => Ok((b - b'0') as u64),
            _ => Err(anyhow::Error::from(PuzzleError::malformed(
                (b as char).to_string(),
                "disk map digit",
            ))),
        })
        .collect()
}

fn compact_blocks(disk_map: &[u64]) -> u64 {
    let mut blocks: Vec<Option<u64>> = Vec::new();
    for (i, &len) in disk_map.iter().enumerate() {
        let id = (i % 2 == 0).then_some(i as u64 / 2);
        blocks.extend(std::iter::repeat(id).take(len as usize));
    }

    let mut free = 0;
    let mut used = blocks.len();
    loop {
        while free < blocks.len() && blocks[free].is_some() {
            free += 1;
        }
        while used > 0 && blocks[used - 1].is_none() {
            used -= 1;
        }
        if used == 0 || free >= used - 1 {
            break;
        }
        blocks.swap(free, used - 1);
    }

    blocks
        .iter()
        .enumerate()
        .filter_map(|(pos, id)| id.map(|id| pos as u64 * id))
        .sum()
}

#[derive(Clone, Copy, Debug)]
struct Span {
    pos: u64,
    len: u64,
}

/// Files move at most once, highest id first, into the leftmost gap that holds them whole.
fn compact_files(disk_map: &[u64]) -> u64 {
    let mut files = Vec::new();
    let mut gaps = Vec::new();
    let mut pos = 0;
    for (i, &len) in disk_map.iter().enumerate() {
        let span = Span { pos, len };
        if i % 2 == 0 {
            files.push(span);
        } else {
            gaps.push(span);
        }
        pos += len;
    }

    for file in files.iter_mut().rev() {
        if let Some(gap) = gaps
            .iter_mut()
            .take_while(|gap| gap.pos < file.pos)
            .find(|gap| gap.len >= file.len)
        {
            file.pos = gap.pos;
            gap.pos += file.len;
            gap.len -= file.len;
        }
    }

    files
        .iter()
        .enumerate()
        .map(|(id, file)| id as u64 * (file.pos..file.pos + file.len).sum::<u64>())
        .sum()
}

#[tracing::instrument(skip(input))]
pub fn day9(input: &str, _data: Data) -> Result<(u64, u64)> {
    let disk_map = parse_disk_map(input)?;
    Ok((compact_blocks(&disk_map), compact_files(&disk_map)))
}
