use super::pattern::{Pattern, Segment};
use super::{Leaf, Node, Tree};

use crate::strmap::StrMap;

use std::borrow::Cow;
use std::cmp::Ordering;

use smallvec::SmallVec;

type Hits<'a, H> = SmallVec<[&'a Leaf<H>; 4]>;

impl<H> Node<H> {
    fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            statics: StrMap::new(),
            variables: Vec::new(),
            leaf: None,
        }
    }

    fn descend_or_create(&mut self, pattern: &Pattern) -> &mut Self {
        let mut node = self;
        for segment in pattern.segments() {
            node = match segment {
                Segment::Literal(name) => node.statics.find_mut_with(name, || Node::new(name)),
                Segment::Param(name) => {
                    let pos = node.variables.iter().position(|n| &*n.name == name);
                    let i = match pos {
                        Some(i) => i,
                        None => {
                            node.variables.push(Node::new(name));
                            node.variables.len() - 1
                        }
                    };
                    &mut node.variables[i]
                }
            };
        }
        node
    }

    /// Pushes every leaf reachable by consuming exactly all of `rest`.
    fn collect<'a>(&'a self, rest: &[Cow<'_, str>], hits: &mut Hits<'a, H>) {
        let (head, tail) = match rest.split_first() {
            Some(split) => split,
            None => {
                if let Some(leaf) = &self.leaf {
                    hits.push(leaf);
                }
                return;
            }
        };

        for child in &self.variables {
            child.collect(tail, hits);
        }
        if let Some(child) = self.statics.find(head) {
            child.collect(tail, hits);
        }
    }

    fn leaves<'a>(&'a self, out: &mut Vec<&'a Leaf<H>>) {
        out.extend(self.leaf.as_ref());
        for child in self.statics.values().chain(self.variables.iter()) {
            child.leaves(out);
        }
    }
}

impl<H> Leaf<H> {
    /// `Less` when `self` wins over `other`.
    ///
    /// Longer patterns first, then a literal beats a parameter at the first
    /// position where the two differ, then the earlier registration.
    fn precedence(&self, other: &Self) -> Ordering {
        other
            .pattern
            .field_count()
            .cmp(&self.pattern.field_count())
            .then_with(|| other.literals().cmp(self.literals()))
            .then_with(|| self.order.cmp(&other.order))
    }

    fn literals(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.pattern.field_count()).map(move |i| !self.pattern.is_param(i))
    }
}

impl<H> Tree<H> {
    pub(super) fn new() -> Self {
        Self {
            root: Node::new(""),
            routes: 0,
        }
    }

    pub(super) fn len(&self) -> usize {
        self.routes
    }

    /// Attaches `handler` at the end of `pattern`.
    ///
    /// Returns `false` when an existing attachment was overwritten; it keeps
    /// its registration order.
    pub(super) fn insert(&mut self, pattern: Pattern, handler: H) -> bool {
        let order = self.routes;
        let params = pattern.param_indices();
        let node = self.root.descend_or_create(&pattern);
        match &mut node.leaf {
            Some(leaf) => {
                leaf.handler = handler;
                leaf.pattern = pattern;
                leaf.params = params;
                false
            }
            None => {
                node.leaf = Some(Leaf {
                    handler,
                    pattern,
                    params,
                    order,
                });
                self.routes += 1;
                true
            }
        }
    }

    /// Finds the most specific leaf for the lower-cased path segments.
    ///
    /// Falls back to a root `/` registration when nothing else matches.
    pub(super) fn lookup(&self, folded: &[Cow<'_, str>]) -> Option<&Leaf<H>> {
        let mut hits: Hits<'_, H> = SmallVec::new();
        self.root.collect(folded, &mut hits);

        let best = hits.iter().copied().min_by(|a, b| a.precedence(b));
        if best.is_some() {
            return best;
        }

        self.root.statics.find("").and_then(|n| n.leaf.as_ref())
    }

    pub(super) fn leaves(&self) -> Vec<&Leaf<H>> {
        let mut out = Vec::with_capacity(self.routes);
        self.root.leaves(&mut out);
        out.sort_by_key(|leaf| leaf.order);
        out
    }
}

impl<H> Leaf<H> {
    pub(super) fn handler(&self) -> &H {
        &self.handler
    }

    pub(super) fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub(super) fn params(&self) -> &[usize] {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{clean, fold, segments};

    fn tree(patterns: &[&str]) -> Tree<usize> {
        let mut tree = Tree::new();
        for (i, p) in patterns.iter().enumerate() {
            tree.insert(Pattern::compile(p), i);
        }
        tree
    }

    fn lookup(tree: &Tree<usize>, path: &str) -> Option<usize> {
        let cleaned = clean(path);
        let folded: Vec<Cow<'_, str>> = segments(&cleaned).into_iter().map(fold).collect();
        tree.lookup(&folded).map(|leaf| leaf.handler)
    }

    #[test]
    fn parameter_nodes_are_shared_by_name() {
        let t = tree(&["/u/:id", "/u/:id/p", "/u/:uid/q"]);
        let u = t.root.statics.find("u").unwrap();
        assert_eq!(u.variables.len(), 2);
        assert_eq!(&*u.variables[0].name, "id");
        assert_eq!(&*u.variables[1].name, "uid");
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn overwrite_keeps_order() {
        let mut t = tree(&["/a", "/b"]);
        assert!(!t.insert(Pattern::compile("/A"), 9));
        assert_eq!(t.len(), 2);
        let orders: Vec<(usize, usize)> = t.leaves().iter().map(|l| (l.order, l.handler)).collect();
        assert_eq!(orders, [(0, 9), (1, 1)]);
    }

    #[test]
    fn literal_wins_at_first_difference() {
        let t = tree(&["/:a/x", "/y/:b", "/:c/:d"]);
        assert_eq!(lookup(&t, "/y/x"), Some(1));
        assert_eq!(lookup(&t, "/z/x"), Some(0));
        assert_eq!(lookup(&t, "/z/z"), Some(2));
    }

    #[test]
    fn equal_shape_goes_to_earliest() {
        let t = tree(&["/p/:second", "/p/:first"]);
        assert_eq!(lookup(&t, "/p/1"), Some(0));
    }

    #[test]
    fn partial_consumption_is_not_a_hit() {
        let t = tree(&["/a/b/c"]);
        assert_eq!(lookup(&t, "/a/b"), None);
        assert_eq!(lookup(&t, "/a/b/c/d"), None);
    }

    #[test]
    fn root_registration_is_the_fallback() {
        let t = tree(&["/", "/users/:id"]);
        assert_eq!(lookup(&t, "/"), Some(0));
        assert_eq!(lookup(&t, "/users/1"), Some(1));
        assert_eq!(lookup(&t, "/nothing/here"), Some(0));
    }
}
