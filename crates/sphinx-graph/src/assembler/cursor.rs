//! Row bookkeeping while walking the calls of one object.

/// Spaces per nesting level.
const INDENT_WIDTH: usize = 4;

/// Tracks block nesting and the next free port of an object label.
///
/// Ports are numbered from 1 and shared by call and override rows. Nesting
/// never goes below zero: closing with no open block is reported to the
/// caller and otherwise ignored.
#[derive(Debug, Default)]
pub(super) struct CallCursor {
    depth: usize,
    port: usize,
}

impl CallCursor {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Claim the next port.
    pub(super) fn next_port(&mut self) -> usize {
        self.port += 1;
        self.port
    }

    pub(super) fn open_block(&mut self) {
        self.depth += 1;
    }

    /// Close the innermost block. Returns `false` if none was open.
    pub(super) fn close_block(&mut self) -> bool {
        match self.depth.checked_sub(1) {
            Some(depth) => {
                self.depth = depth;
                true
            }
            None => false,
        }
    }

    /// Leading whitespace for a row at the current depth.
    pub(super) fn indentation(&self) -> String {
        " ".repeat(self.depth * INDENT_WIDTH)
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        self.depth
    }
}
