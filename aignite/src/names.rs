//! A bidirectional table of display names for network signals.

use std::collections::HashMap;
use std::hash::Hash;

/// Maps signals to the display names an AIGER symbol table gave them.
///
/// The forward direction keeps every name a signal was given, in insertion
/// order, because nothing stops a file from naming the same signal twice. The
/// reverse direction is unique: binding a name that already points at a
/// different signal is reported as a conflict and resolved by overwriting, so
/// reverse lookups see the last binding.
#[derive(Debug, Clone)]
pub struct NameMap<S> {
    names: HashMap<S, Vec<String>>,
    rev_names: HashMap<String, S>,
}

impl<S> Default for NameMap<S> {
    fn default() -> Self {
        Self {
            names: HashMap::new(),
            rev_names: HashMap::new(),
        }
    }
}

impl<S: Copy + Eq + Hash> NameMap<S> {
    /// Creates an empty name map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name` for `signal`.
    ///
    /// Returns the signal that previously held `name` if the reverse binding
    /// had to be taken over from a different signal; the conflict is also
    /// logged. Returns `None` when the name was free (or already bound to
    /// this same signal).
    pub fn insert(&mut self, signal: S, name: &str) -> Option<S> {
        self.names
            .entry(signal)
            .or_insert_with(Vec::new)
            .push(name.to_string());

        let evicted = self
            .rev_names
            .get(name)
            .copied()
            .filter(|bound| *bound != signal);
        if evicted.is_some() {
            tracing::warn!("signal name `{}` is used twice", name);
        }
        self.rev_names.insert(name.to_string(), signal);
        evicted
    }

    /// The names recorded for `signal`, oldest first; empty if it has none.
    #[must_use]
    pub fn names_of(&self, signal: S) -> &[String] {
        self.names.get(&signal).map_or(&[], Vec::as_slice)
    }

    /// Whether `signal` was given `name` at some point.
    #[must_use]
    pub fn has_name(&self, signal: S, name: &str) -> bool {
        self.names_of(signal).iter().any(|n| n == name)
    }

    /// The reverse view: name to the signal that most recently claimed it.
    #[must_use]
    pub fn name_to_signal(&self) -> &HashMap<String, S> {
        &self.rev_names
    }
}

#[cfg(test)]
mod tests {
    use super::NameMap;

    #[test]
    fn forward_keeps_every_name_in_order() {
        let mut names = NameMap::new();
        names.insert(7u32, "sum");
        names.insert(7u32, "carry_in");

        assert_eq!(names.names_of(7), ["sum", "carry_in"]);
        assert!(names.has_name(7, "sum"));
        assert!(names.has_name(7, "carry_in"));
        assert!(!names.has_name(7, "carry_out"));
        assert_eq!(names.names_of(8), Vec::<String>::new());
    }

    #[test]
    fn conflicting_name_is_reported_once_and_overwritten() {
        let mut names = NameMap::new();
        assert_eq!(names.insert(1u32, "clk"), None);
        assert_eq!(names.insert(2u32, "clk"), Some(1));

        // Both signals keep the name in the forward direction.
        assert!(names.has_name(1, "clk"));
        assert!(names.has_name(2, "clk"));
        // The reverse direction resolves to the last writer.
        assert_eq!(names.name_to_signal().get("clk"), Some(&2));
    }

    #[test]
    fn rebinding_to_the_same_signal_is_not_a_conflict() {
        let mut names = NameMap::new();
        assert_eq!(names.insert(3u32, "q"), None);
        assert_eq!(names.insert(3u32, "q"), None);
        assert_eq!(names.names_of(3), ["q", "q"]);
    }
}
