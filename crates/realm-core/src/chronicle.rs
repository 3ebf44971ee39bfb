use std::fmt;

/// A single line spoken by someone in the realm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proclamation {
    /// Name of the technique, watchtower, or warrior that spoke.
    pub source: String,
    /// The text that was spoken.
    pub line: String,
}

impl Proclamation {
    /// Create a new proclamation from a source name and a line of text.
    pub fn new(source: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            line: line.into(),
        }
    }
}

/// Accumulates every line produced while dispatching.
///
/// Variants never print directly; they write here and the caller decides
/// where the lines go.
#[derive(Debug, Default)]
pub struct Chronicle {
    entries: Vec<Proclamation>,
    capacity: usize,
}

impl Chronicle {
    /// Create a chronicle holding at most `capacity` lines (0 = unlimited).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Create a chronicle with no capacity limit.
    pub fn unbounded() -> Self {
        Self::new(0)
    }

    /// Append a line, dropping the oldest lines if the chronicle is full.
    pub fn record(&mut self, source: impl Into<String>, line: impl Into<String>) {
        self.entries.push(Proclamation::new(source, line));
        if self.capacity > 0 && self.entries.len() > self.capacity {
            let drain_count = self.entries.len() - self.capacity;
            self.entries.drain(..drain_count);
        }
    }

    /// All recorded proclamations, oldest first.
    pub fn proclamations(&self) -> &[Proclamation] {
        &self.entries
    }

    /// The text of every recorded line, oldest first.
    pub fn lines(&self) -> Vec<&str> {
        self.entries.iter().map(|p| p.line.as_str()).collect()
    }

    /// Lines spoken by the given source.
    pub fn lines_from(&self, source: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|p| p.source == source)
            .map(|p| p.line.as_str())
            .collect()
    }

    /// Number of recorded lines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every recorded line.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl fmt::Display for Chronicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", entry.line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_read_back() {
        let mut chronicle = Chronicle::unbounded();
        chronicle.record("horn", "sound the horns");
        chronicle.record("bell", "sound the bells");

        assert_eq!(chronicle.len(), 2);
        assert_eq!(chronicle.lines(), vec!["sound the horns", "sound the bells"]);
        assert_eq!(chronicle.lines_from("bell"), vec!["sound the bells"]);
        assert_eq!(chronicle.proclamations()[0].source, "horn");
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut chronicle = Chronicle::new(2);
        chronicle.record("a", "one");
        chronicle.record("a", "two");
        chronicle.record("a", "three");

        assert_eq!(chronicle.lines(), vec!["two", "three"]);
    }

    #[test]
    fn zero_capacity_is_unlimited() {
        let mut chronicle = Chronicle::new(0);
        for i in 0..100 {
            chronicle.record("a", i.to_string());
        }
        assert_eq!(chronicle.len(), 100);
    }

    #[test]
    fn clear_empties() {
        let mut chronicle = Chronicle::unbounded();
        chronicle.record("a", "one");
        chronicle.clear();
        assert!(chronicle.is_empty());
        assert_eq!(chronicle.to_string(), "");
    }

    #[test]
    fn display_joins_lines() {
        let mut chronicle = Chronicle::unbounded();
        chronicle.record("sword", "cut cut!");
        chronicle.record("shield", "KLANG!");
        insta::assert_snapshot!(chronicle.to_string(), @r"
        cut cut!
        KLANG!
        ");
    }
}
