use arrayvec::ArrayString;
use core::fmt::{self, Write};

/// Capacity of the scratch buffer each message is rendered into.
pub const BUFFER_SIZE: usize = 1024;

/// Rendered content is capped one byte short of capacity, matching
/// bounded C-string formatting.
const MAX_RENDERED: usize = BUFFER_SIZE - 1;

/// Fixed-capacity sink for one rendered message.
///
/// Formatting through it never fails: output that does not fit is
/// silently truncated at a UTF-8 character boundary.
pub(crate) struct Scratch {
    buf: ArrayString<BUFFER_SIZE>,
}

impl Scratch {
    pub const fn new() -> Self {
        Self {
            buf: ArrayString::new_const(),
        }
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        self.buf.as_str()
    }
}

impl Write for Scratch {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = MAX_RENDERED - self.buf.len();
        if s.len() <= remaining {
            self.buf.push_str(s);
        } else {
            let mut end = remaining;
            while end > 0 && !s.is_char_boundary(end) {
                end -= 1;
            }
            self.buf.push_str(&s[..end]);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BUFFER_SIZE, MAX_RENDERED, Scratch};
    use core::fmt::Write;

    #[test]
    fn short_writes_pass_through() {
        let mut scratch = Scratch::new();
        write!(scratch, "value={}", 42).unwrap();
        assert_eq!(scratch.as_str(), "value=42");
    }

    #[test]
    fn overlong_writes_truncate_to_capacity_minus_one() {
        let mut scratch = Scratch::new();
        let long = "x".repeat(BUFFER_SIZE * 2);
        write!(scratch, "{long}").unwrap();
        assert_eq!(scratch.as_bytes().len(), MAX_RENDERED);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let mut scratch = Scratch::new();
        // 1022 ASCII bytes, then a 3-byte character that cannot fit in the
        // single remaining byte.
        let msg = format!("{}€€", "x".repeat(MAX_RENDERED - 1));
        write!(scratch, "{msg}").unwrap();
        assert_eq!(scratch.as_bytes().len(), MAX_RENDERED - 1);
        assert!(scratch.as_str().ends_with('x'));
    }

    #[test]
    fn no_length_overflows_for_any_input() {
        for n in 0..2 * BUFFER_SIZE {
            let mut scratch = Scratch::new();
            write!(scratch, "{}", "y".repeat(n)).unwrap();
            assert_eq!(scratch.as_bytes().len(), n.min(MAX_RENDERED));
        }
    }

    #[test]
    fn clear_resets_between_messages() {
        let mut scratch = Scratch::new();
        write!(scratch, "first").unwrap();
        scratch.clear();
        write!(scratch, "second").unwrap();
        assert_eq!(scratch.as_str(), "second");
    }
}
