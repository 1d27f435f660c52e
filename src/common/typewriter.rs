/// Reveals a string one character per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    /// Number of revealed chars, not bytes.
    revealed: usize,
    len: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            revealed: 0,
            len,
        }
    }

    /// Starts over from an empty prefix if `text` differs from the current one.
    /// Returns whether it restarted.
    pub fn restart(&mut self, text: &str) -> bool {
        if self.text == text {
            return false;
        }

        *self = Self::new(text);
        true
    }

    /// Reveals one more character. Returns false once the whole text is showing.
    pub fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }

        self.revealed += 1;
        true
    }

    pub fn revealed(&self) -> &str {
        match self.text.char_indices().nth(self.revealed) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_prefix_and_monotonic() {
        let text = "欢迎来到我们的网站！";
        let n = text.chars().count();
        let mut tw = Typewriter::new(text);
        assert_eq!(tw.revealed(), "");

        let mut previous = String::new();
        for k in 1..=n + 3 {
            tw.tick();
            let revealed = tw.revealed();
            let expected: String = text.chars().take(k.min(n)).collect();

            assert_eq!(revealed, expected);
            assert!(text.starts_with(revealed));
            assert!(revealed.starts_with(&previous));
            previous = revealed.to_string();
        }

        assert!(tw.is_complete());
        assert!(!tw.tick());
        assert_eq!(tw.revealed(), text);
    }

    #[test]
    fn test_restart_on_new_text() {
        let mut tw = Typewriter::new("hello");
        tw.tick();
        tw.tick();
        assert_eq!(tw.revealed(), "he");

        assert!(!tw.restart("hello"));
        assert_eq!(tw.revealed(), "he");

        assert!(tw.restart("bye"));
        assert_eq!(tw.revealed(), "");
        assert_eq!(tw.text(), "bye");
    }

    #[test]
    fn test_empty_text_is_complete() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_complete());
        assert!(!tw.tick());
        assert_eq!(tw.revealed(), "");
    }
}
