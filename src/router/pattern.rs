use crate::path::{clean, fold, segments};

use smallvec::SmallVec;

const COLON: char = ':';
const LBRACE: char = '{';
const RBRACE: char = '}';

/// A compiled registration pattern.
///
/// Every field is lower-cased. Segments written as `:name` or `{name}` are
/// parameters; anything else, including malformed wrappers such as `{id`,
/// is literal text. Compilation never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: Box<str>,
    fields: Vec<Box<str>>,
    is_param: SmallVec<[bool; 8]>,
}

/// One compiled position of a [`Pattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Param(&'a str),
}

impl Pattern {
    /// Compiles `pattern`.
    ///
    /// ```
    /// use route_trie::{Pattern, Segment};
    ///
    /// let p = Pattern::compile("/Users/:Id/{Tab}/{broken");
    /// let segs: Vec<_> = p.segments().collect();
    /// assert_eq!(
    ///     segs,
    ///     [
    ///         Segment::Literal("users"),
    ///         Segment::Param("id"),
    ///         Segment::Param("tab"),
    ///         Segment::Literal("{broken"),
    ///     ]
    /// );
    /// assert_eq!(Pattern::compile("/").field_count(), 1);
    /// ```
    pub fn compile(pattern: &str) -> Self {
        let cleaned = clean(pattern);
        let parts = segments(&cleaned);

        let mut fields: Vec<Box<str>> = Vec::with_capacity(parts.len());
        let mut is_param: SmallVec<[bool; 8]> = SmallVec::with_capacity(parts.len());

        for part in parts {
            let (name, param) = match param_name(part) {
                Some(name) => (name, true),
                None => (part, false),
            };
            fields.push(fold(name).into());
            is_param.push(param);
        }

        Self {
            raw: cleaned.into(),
            fields,
            is_param,
        }
    }

    /// The cleaned source text, with original casing.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> &[Box<str>] {
        &self.fields
    }

    pub fn is_param(&self, index: usize) -> bool {
        self.is_param.get(index).copied().unwrap_or(false)
    }

    /// Positions of parameter fields, ascending.
    pub fn param_indices(&self) -> SmallVec<[usize; 4]> {
        self.is_param
            .iter()
            .enumerate()
            .filter_map(|(i, &p)| if p { Some(i) } else { None })
            .collect()
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> + '_ {
        self.fields
            .iter()
            .zip(self.is_param.iter())
            .map(|(name, &param)| {
                if param {
                    Segment::Param(name)
                } else {
                    Segment::Literal(name)
                }
            })
    }
}

fn param_name(part: &str) -> Option<&str> {
    if let Some(name) = part.strip_prefix(COLON) {
        if !name.is_empty() {
            return Some(name);
        }
    }
    let inner = part.strip_prefix(LBRACE)?.strip_suffix(RBRACE)?;
    if inner.is_empty() {
        None
    } else {
        Some(inner)
    }
}
