use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Reads whitespace-delimited tokens, carrying leftovers across reads.
///
/// `"Alice KA01"` on one line answers both the name and plate prompts, the
/// same way a `%s` conversion would consume it.
pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub const fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            // bytes that are not UTF-8 become U+FFFD instead of failing the read
            let mut line = Vec::new();
            if self.inner.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_owned),
            );
        }
    }
}
