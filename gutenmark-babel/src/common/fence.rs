//! Code fence tracking for line-oriented scans.
//!
//! DSL fences (`:::box`) written inside a fenced code block are sample text, not
//! decorations, so the extractor has to know when it is inside one.

/// Tracks whether a line-by-line scan is inside a fenced code block.
///
/// A closing fence uses the same character as the opening one and is at least
/// as long.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    open: Option<(char, usize)>,
}

impl FenceTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Feed the next line. Returns `true` if the line opened or closed a fence.
    pub(crate) fn update(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();
        match self.open {
            Some((ch, len)) => {
                if closes(trimmed, ch, len) {
                    self.open = None;
                    return true;
                }
                false
            }
            None => match opens(trimmed) {
                Some(marker) => {
                    self.open = Some(marker);
                    true
                }
                None => false,
            },
        }
    }
}

fn opens(trimmed: &str) -> Option<(char, usize)> {
    let ch = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.chars().take_while(|c| *c == ch).count();
    (len >= 3).then_some((ch, len))
}

fn closes(trimmed: &str, ch: char, min_len: usize) -> bool {
    let len = trimmed.chars().take_while(|c| *c == ch).count();
    // fence chars are ASCII, so `len` is also a byte offset
    len >= min_len && trimmed[len..].trim().is_empty()
}
