/// Splits `message` into chunks of at most `max_len` characters.
///
/// Lines are kept whole and each keeps its trailing newline. A line that
/// cannot fit in any chunk is cut at character boundaries. A remainder made
/// of whitespace only is dropped. Limits below 2 are raised to 2.
pub fn split(message: &str, max_len: usize) -> Vec<String> {
    let max_len = max_len.max(2);
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut len = 0;

    for line in message.split('\n') {
        let line_len = line.chars().count() + 1;
        if len + line_len <= max_len {
            chunk.push_str(line);
            chunk.push('\n');
            len += line_len;
            continue;
        }

        if !chunk.is_empty() {
            chunks.push(std::mem::take(&mut chunk));
        }

        let mut rest = line;
        while rest.chars().count() >= max_len {
            let at = rest
                .char_indices()
                .nth(max_len)
                .map(|(at, _)| at)
                .unwrap_or(rest.len());
            chunks.push(rest[..at].to_string());
            rest = &rest[at..];
        }
        chunk.push_str(rest);
        chunk.push('\n');
        len = rest.chars().count() + 1;
    }

    if !chunk.trim().is_empty() {
        chunks.push(chunk);
    }

    chunks
}
