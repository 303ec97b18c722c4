//! Human-readable buffer dump
//!
//! Renders the queued elements from oldest to newest, marking the first one
//! as head and the last one as tail:
//!
//! ```text
//! Buffer contents (capacity = 5):
//! head -> 10
//!    : 20
//! tail -> 30
//! ---
//! ```

use std::fmt::{self, Display, Write};

use crate::buffer::RingBuffer;

const HEAD_MARKER: &str = "head -> ";
const TAIL_MARKER: &str = "tail -> ";
const BODY_MARKER: &str = "   : ";

/// Render `buffer` without touching its state.
pub fn dump_buffer<T: Display>(buffer: &RingBuffer<T>) -> String {
    buffer.to_string()
}

fn write_dump<W: Write, T: Display>(out: &mut W, buffer: &RingBuffer<T>) -> fmt::Result {
    writeln!(out, "Buffer contents (capacity = {}):", buffer.capacity())?;

    if buffer.is_empty() {
        return writeln!(out, "Buffer is empty.");
    }

    // Walk by count, not by cursor: a full buffer has head == tail
    let last = buffer.len() - 1;
    for (i, item) in buffer.iter().enumerate() {
        let marker = if i == 0 {
            HEAD_MARKER
        } else if i == last {
            TAIL_MARKER
        } else {
            BODY_MARKER
        };
        writeln!(out, "{marker}{item}")?;
    }
    writeln!(out, "---")
}

impl<T: Display> Display for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dump(f, self)
    }
}
