mod core;
mod error;
mod imp;
mod params;
mod pattern;

pub use self::error::ParamError;
pub use self::params::{ParamSink, Params};
pub use self::pattern::{Pattern, Segment};

use crate::strmap::StrMap;

use parking_lot::RwLock;
use smallvec::SmallVec;

/// Segment trie router.
///
/// Registration ([`add`](Router::add)) takes the write lock, lookups
/// ([`find`](Router::find), [`find_with`](Router::find_with)) take the read
/// lock for traversal and parameter binding. A lookup that matches nothing
/// yields the default handler given to [`new`](Router::new).
#[derive(Debug)]
pub struct Router<H> {
    tree: RwLock<Tree<H>>,
    default: H,
}

#[derive(Debug)]
struct Tree<H> {
    root: Node<H>,
    routes: usize,
}

/// One segment position of the trie.
#[derive(Debug)]
struct Node<H> {
    name: Box<str>,
    statics: StrMap<Node<H>>,
    variables: Vec<Node<H>>,
    leaf: Option<Leaf<H>>,
}

/// Terminal attachment of the last node of a registered pattern.
#[derive(Debug)]
struct Leaf<H> {
    handler: H,
    pattern: Pattern,
    params: SmallVec<[usize; 4]>,
    order: usize,
}
