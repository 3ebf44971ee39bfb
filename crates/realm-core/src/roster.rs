/// An append-only, ordered collection.
///
/// Insertion order is iteration order. Members cannot be removed or
/// reordered.
#[derive(Debug)]
pub struct Roster<T> {
    members: Vec<T>,
}

impl<T> Roster<T> {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Append a member to the end of the roster.
    pub fn push(&mut self, member: T) {
        self.members.push(member);
    }

    /// Iterate over members in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.members.iter()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the roster has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<T> Default for Roster<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Roster<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut roster = Roster::new();
        roster.push("first");
        roster.push("second");
        roster.push("first");

        let order: Vec<_> = roster.iter().copied().collect();
        assert_eq!(order, vec!["first", "second", "first"]);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn empty_by_default() {
        let roster: Roster<u8> = Roster::default();
        assert!(roster.is_empty());
        assert_eq!(roster.iter().count(), 0);
    }
}
