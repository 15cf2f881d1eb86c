//! Splitting of rendered roster text into transport-sized messages.
//!
//! Greedy packing over lines: lines accumulate into the current chunk until
//! adding the next one would exceed the size limit, at which point the chunk
//! is closed and a new one starts with that line. A line is never split
//! across two chunks; a single line longer than the limit overflows its own
//! chunk. Chunks are trimmed of leading/trailing whitespace.

/// Message size limit used for Discord delivery, with headroom under the
/// 2000-character transport cap.
pub const MAX_MESSAGE_CHARS: usize = 1950;

/// Splits `text` into chunks of at most `max_chunk_size` characters without
/// breaking lines. Empty or whitespace-only input produces no chunks.
pub fn paginate(text: &str, max_chunk_size: usize) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for line in text.split('\n') {
        let line_len = line.chars().count();
        if current_len + line_len + 1 > max_chunk_size && current_len > 0 {
            let part = current.trim();
            if !part.is_empty() {
                parts.push(part.to_string());
            }
            current.clear();
            current_len = 0;
        }
        current.push_str(line);
        current.push('\n');
        current_len += line_len + 1;
    }

    let tail = current.trim();
    if !tail.is_empty() {
        parts.push(tail.to_string());
    }
    parts
}

/// Like [`paginate`], but guarantees at least one chunk: when the input
/// produces none, a single chunk containing `placeholder` is returned.
pub fn paginate_or_placeholder(
    text: &str,
    max_chunk_size: usize,
    placeholder: &str,
) -> Vec<String> {
    let parts = paginate(text, max_chunk_size);
    if parts.is_empty() {
        vec![placeholder.to_string()]
    } else {
        parts
    }
}
