//! Hierarchical pile namespace.
//!
//! The namespace is a tree of tagged nodes. Inner nodes are plain
//! containers; leaves point at piles in the deck's arena. Entries keep
//! insertion order so dumps read the same way every time.
//!
//! ```text
//! root
//! ├── draw        -> Pile(0)
//! ├── discard     -> Pile(1)
//! └── hands
//!     └── alice   -> Pile(2)
//! ```

use crate::core::config::{DISCARD_PILE, DRAW_PILE, HANDS_NAMESPACE};
use crate::core::entity::PileId;
use crate::core::error::DeckError;

use super::path::PilePath;

/// A node in the pile tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Container of further nodes.
    Namespace(Namespace),
    /// Leaf naming a pile.
    Pile(PileId),
}

/// Ordered mapping from a path segment to a node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Namespace {
    entries: Vec<(String, Node)>,
}

impl Namespace {
    /// Create an empty namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The root of a fresh deck: the draw and discard piles plus an empty
    /// `hands` namespace.
    #[must_use]
    pub(crate) fn root(draw: PileId, discard: PileId) -> Self {
        Self {
            entries: vec![
                (DRAW_PILE.to_string(), Node::Pile(draw)),
                (DISCARD_PILE.to_string(), Node::Pile(discard)),
                (HANDS_NAMESPACE.to_string(), Node::Namespace(Namespace::new())),
            ],
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Look up a direct child.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    /// Children in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), n))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get or create the child namespace `key`.
    ///
    /// Fails if `key` already names a pile. `path` is only used for the
    /// error.
    pub(crate) fn namespace_entry(&mut self, key: &str, path: &str) -> Result<&mut Namespace, DeckError> {
        let index = match self.position(key) {
            Some(index) => index,
            None => {
                self.entries.push((key.to_string(), Node::Namespace(Namespace::new())));
                self.entries.len() - 1
            }
        };
        match &mut self.entries[index].1 {
            Node::Namespace(namespace) => Ok(namespace),
            Node::Pile(_) => Err(DeckError::PathConflict(path.to_string())),
        }
    }

    /// Get the pile leaf `key`, or insert `candidate` there.
    ///
    /// Returns the pile id and whether it was just inserted. Fails if `key`
    /// already names a namespace.
    pub(crate) fn pile_entry(
        &mut self,
        key: &str,
        path: &str,
        candidate: PileId,
    ) -> Result<(PileId, bool), DeckError> {
        if let Some(index) = self.position(key) {
            return match &self.entries[index].1 {
                Node::Pile(id) => Ok((*id, false)),
                Node::Namespace(_) => Err(DeckError::PathConflict(path.to_string())),
            };
        }
        self.entries.push((key.to_string(), Node::Pile(candidate)));
        Ok((candidate, true))
    }

    /// Would `pile_entry` walks along `path` succeed? Creates nothing.
    pub(crate) fn check(&self, path: &PilePath<'_>) -> Result<(), DeckError> {
        let conflict = || DeckError::PathConflict(path.as_str().to_string());
        let mut current = self;
        for segment in path.parents() {
            match current.get(segment) {
                Some(Node::Namespace(namespace)) => current = namespace,
                Some(Node::Pile(_)) => return Err(conflict()),
                None => return Ok(()),
            }
        }
        match current.get(path.leaf()) {
            Some(Node::Namespace(_)) => Err(conflict()),
            _ => Ok(()),
        }
    }

    /// Resolve a path without creating anything.
    #[must_use]
    pub fn resolve(&self, path: &PilePath<'_>) -> Option<PileId> {
        let mut current = self;
        for segment in path.parents() {
            match current.get(segment)? {
                Node::Namespace(namespace) => current = namespace,
                Node::Pile(_) => return None,
            }
        }
        match current.get(path.leaf())? {
            Node::Pile(id) => Some(*id),
            Node::Namespace(_) => None,
        }
    }

    /// Every pile id in the tree, depth first.
    #[must_use]
    pub fn pile_ids(&self) -> Vec<PileId> {
        let mut out = Vec::new();
        self.collect_piles(&mut out);
        out
    }

    fn collect_piles(&self, out: &mut Vec<PileId>) {
        for (_, node) in &self.entries {
            match node {
                Node::Pile(id) => out.push(*id),
                Node::Namespace(namespace) => namespace.collect_piles(out),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_entry_creates_once() {
        let mut root = Namespace::new();
        root.namespace_entry("hands", "hands").unwrap();
        root.namespace_entry("hands", "hands").unwrap();
        assert_eq!(root.len(), 1);
        assert!(matches!(root.get("hands"), Some(Node::Namespace(_))));
    }

    #[test]
    fn test_pile_entry_is_idempotent() {
        let mut root = Namespace::new();
        let (first, created) = root.pile_entry("draw", "draw", PileId(0)).unwrap();
        assert!(created);
        let (second, created) = root.pile_entry("draw", "draw", PileId(7)).unwrap();
        assert!(!created);
        assert_eq!(first, second);
    }

    #[test]
    fn test_conflicts() {
        let mut root = Namespace::new();
        root.pile_entry("draw", "draw", PileId(0)).unwrap();
        root.namespace_entry("hands", "hands").unwrap();

        assert_eq!(
            root.namespace_entry("draw", "draw.x").unwrap_err(),
            DeckError::PathConflict("draw.x".into())
        );
        assert_eq!(
            root.pile_entry("hands", "hands", PileId(1)).unwrap_err(),
            DeckError::PathConflict("hands".into())
        );
    }

    #[test]
    fn test_resolve() {
        let mut root = Namespace::new();
        root.namespace_entry("a", "a.b")
            .unwrap()
            .pile_entry("b", "a.b", PileId(3))
            .unwrap();

        assert_eq!(root.resolve(&PilePath::parse("a.b")), Some(PileId(3)));
        assert_eq!(root.resolve(&PilePath::parse("a")), None);
        assert_eq!(root.resolve(&PilePath::parse("a.c")), None);
        assert_eq!(root.resolve(&PilePath::parse("a.b.c")), None);
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut root = Namespace::new();
        root.pile_entry("draw", "draw", PileId(0)).unwrap();
        root.pile_entry("discard", "discard", PileId(1)).unwrap();
        root.namespace_entry("hands", "hands").unwrap();

        let keys: Vec<_> = root.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["draw", "discard", "hands"]);
        assert_eq!(root.pile_ids(), vec![PileId(0), PileId(1)]);
    }

    #[test]
    fn test_root_layout() {
        let root = Namespace::root(PileId(0), PileId(1));
        let keys: Vec<_> = root.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["draw", "discard", "hands"]);
        assert_eq!(root.resolve(&PilePath::parse("draw")), Some(PileId(0)));
        assert_eq!(root.resolve(&PilePath::parse("discard")), Some(PileId(1)));
        assert!(matches!(root.get("hands"), Some(Node::Namespace(ns)) if ns.is_empty()));
    }

    #[test]
    fn test_check_creates_nothing() {
        let root = Namespace::root(PileId(0), PileId(1));
        let before = root.clone();

        assert!(root.check(&PilePath::parse("fresh.pile")).is_ok());
        assert!(root.check(&PilePath::parse("hands.alice")).is_ok());
        assert!(root.check(&PilePath::parse("draw")).is_ok());
        assert_eq!(
            root.check(&PilePath::parse("hands")).unwrap_err(),
            DeckError::PathConflict("hands".into())
        );
        assert_eq!(
            root.check(&PilePath::parse("draw.top")).unwrap_err(),
            DeckError::PathConflict("draw.top".into())
        );
        assert_eq!(root, before);
    }

    #[test]
    fn test_empty_key() {
        let mut root = Namespace::new();
        root.namespace_entry("a", "a..b")
            .unwrap()
            .namespace_entry("", "a..b")
            .unwrap()
            .pile_entry("b", "a..b", PileId(4))
            .unwrap();

        assert_eq!(root.resolve(&PilePath::parse("a..b")), Some(PileId(4)));
        assert_eq!(root.resolve(&PilePath::parse("a.b")), None);
    }
}
