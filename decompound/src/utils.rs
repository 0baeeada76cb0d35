use std::io::{self, BufRead};

/// Reads the entries of a line-based resource file.
/// Everything after the first `comment` char is ignored, surrounding whitespace is stripped and
/// lines which are empty after that are skipped.
pub fn read_entries<R: BufRead>(reader: R, comment: char) -> io::Result<Vec<String>> {
    let mut entries = Vec::new();

    for line in reader.lines() {
        let line = line?;

        let line = line[..line.find(comment).unwrap_or_else(|| line.len())].trim();
        if line.is_empty() {
            continue;
        }

        entries.push(line.to_owned());
    }

    Ok(entries)
}

// remove duplicate whitespaces
pub fn normalize_whitespace(string: &str) -> String {
    string.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Byte offset of every char in `string` plus one trailing entry for the end of the string,
/// so `offsets[i]..offsets[j]` is the byte range of chars `i..j`.
pub fn char_offsets(string: &str) -> Vec<usize> {
    string
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(string.len()))
        .collect()
}
