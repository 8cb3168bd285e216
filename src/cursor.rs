/// Position tracking over a normalized (LF-only) source string.
///
/// The position only ever rests on a line start, so byte indexing is safe
/// everywhere a matcher looks.
#[derive(Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Cursor { src, pos: 0 }
    }

    /// Byte offset into the source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Character at the current position, if any.
    pub fn ch(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    /// The current line including its terminator, without consuming it.
    /// The last line of the source may lack a terminator.
    pub fn line(&self) -> &'a str {
        &self.src[self.pos..self.line_end()]
    }

    /// Advance to the start of the next line (no-op at end of input).
    pub fn advance_line(&mut self) {
        self.pos = self.line_end();
    }

    fn line_end(&self) -> usize {
        match self.src[self.pos..].find('\n') {
            Some(i) => self.pos + i + 1,
            None => self.src.len(),
        }
    }
}
