//! Two-byte additive byte sequence that drives every random choice in map generation.

/// Fibonacci-style generator over bytes: each value is the wrapping sum of the previous two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ByteSequence {
    previous: u8,
    current: u8,
}

impl ByteSequence {
    pub fn new(first: u8, second: u8) -> Self {
        Self { previous: first, current: second }
    }

    /// Builds a sequence from wider seeds, keeping only their low bytes.
    pub fn from_seeds(first: u32, second: u32) -> Self {
        Self::new((first & 0xFF) as u8, (second & 0xFF) as u8)
    }

    pub fn next_byte(&mut self) -> u8 {
        let value = self.previous.wrapping_add(self.current);
        self.previous = self.current;
        self.current = value;
        value
    }

    pub fn skip_warm_up(&mut self, count: usize) {
        for _ in 0..count {
            self.next_byte();
        }
    }
}

impl Iterator for ByteSequence {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.next_byte())
    }
}
