use super::params::ParamSink;
use super::pattern::Pattern;
use super::{Router, Tree};

use crate::path::{clean, fold, segments};

use std::borrow::Cow;

use parking_lot::RwLock;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

impl<H> Router<H> {
    /// Creates an empty router answering unmatched lookups with `default`.
    pub fn new(default: H) -> Self {
        Self {
            tree: RwLock::new(Tree::new()),
            default,
        }
    }

    /// Registers `handler` under `pattern`.
    ///
    /// Literal segments match case-insensitively, `:name` and `{name}`
    /// segments match any single segment. Registering the same structural
    /// path again replaces the earlier handler.
    pub fn add(&self, pattern: &str, handler: H) -> &Self {
        let pattern = Pattern::compile(pattern);
        let depth = pattern.field_count();
        let source = pattern.as_str().to_owned();

        let fresh = self.tree.write().insert(pattern, handler);

        info!(depth, pattern = %source, replaced = !fresh, "route registered");
        self
    }

    /// Looks up `path`, binds its parameters into `sink` and returns a clone
    /// of the winning handler with the number of segments its pattern has.
    ///
    /// When nothing matches the default handler is returned with a segment
    /// count of zero.
    ///
    /// ```
    /// use route_trie::{Params, Router};
    ///
    /// let router: Router<&str> = Router::new("not found");
    /// router.add("/users/:id", "user");
    ///
    /// let mut params = Params::new();
    /// assert_eq!(router.find("/users/42", &mut params), ("user", 2));
    /// assert_eq!(params.get("id"), Some("42"));
    ///
    /// assert_eq!(router.find("/posts", &mut ()), ("not found", 0));
    /// ```
    pub fn find<S>(&self, path: &str, sink: &mut S) -> (H, usize)
    where
        H: Clone,
        S: ParamSink + ?Sized,
    {
        self.find_with(path, sink, |h, n| (h.clone(), n))
    }

    /// Like [`find`](Router::find), but lends the handler to `f` instead of
    /// cloning it.
    ///
    /// `f` runs under the read lock, which is not recursive: it must not call
    /// [`add`](Router::add), [`find`](Router::find) or `find_with` on the
    /// same router.
    pub fn find_with<S, F, R>(&self, path: &str, sink: &mut S, f: F) -> R
    where
        S: ParamSink + ?Sized,
        F: FnOnce(&H, usize) -> R,
    {
        let cleaned = clean(path);
        let raw = segments(&cleaned);
        let folded: SmallVec<[Cow<'_, str>; 8]> = raw.iter().map(|s| fold(s)).collect();

        let tree = self.tree.read();
        let leaf = match tree.lookup(&folded) {
            Some(leaf) => leaf,
            None => {
                debug!(path = %cleaned, "no route matched");
                return f(&self.default, 0);
            }
        };

        let fields = leaf.pattern().fields();
        for &i in leaf.params() {
            if let (Some(name), Some(value)) = (fields.get(i), raw.get(i)) {
                sink.bind(name, value);
            }
        }

        trace!(path = %cleaned, route = leaf.pattern().as_str(), "route matched");
        f(leaf.handler(), leaf.pattern().field_count())
    }

    /// Number of distinct registered patterns.
    pub fn len(&self) -> usize {
        self.tree.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered patterns in registration order.
    pub fn routes(&self) -> Vec<String> {
        let tree = self.tree.read();
        let routes = tree
            .leaves()
            .iter()
            .map(|leaf| leaf.pattern().as_str().to_owned())
            .collect();
        routes
    }

    pub fn default_handler(&self) -> &H {
        &self.default
    }
}

impl<H: Default> Default for Router<H> {
    fn default() -> Self {
        Self::new(H::default())
    }
}
