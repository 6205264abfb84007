//! Pending-line queue in front of a line source

use std::borrow::Cow;
use std::collections::VecDeque;
use std::str::Lines;

/// Logical line source with a front queue
///
/// Synthetic lines pushed with [`LineQueue::push_front`] are returned before
/// the next physical line.
#[derive(Debug)]
pub struct LineQueue<'a> {
    pending: VecDeque<String>,
    source: Lines<'a>,
}

impl<'a> LineQueue<'a> {
    /// Queue over the physical lines of `source`
    pub fn new(source: &'a str) -> Self {
        Self {
            pending: VecDeque::new(),
            source: source.lines(),
        }
    }

    /// Next logical line
    pub fn next_line(&mut self) -> Option<Cow<'a, str>> {
        match self.pending.pop_front() {
            Some(line) => Some(Cow::Owned(line)),
            None => self.source.next().map(Cow::Borrowed),
        }
    }

    /// Return `line` before anything else
    pub fn push_front(&mut self, line: String) {
        self.pending.push_front(line);
    }
}
