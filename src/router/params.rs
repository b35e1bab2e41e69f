use super::error::ParamError;

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::BuildHasher;
use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Request-scoped receiver of path parameter bindings.
///
/// The router calls [`bind`](ParamSink::bind) once per parameter of the
/// winning route. Names arrive lower-cased, values keep the request's casing.
/// Binding a name that is already present replaces its value.
pub trait ParamSink {
    fn bind(&mut self, name: &str, value: &str);
}

impl<S: ParamSink + ?Sized> ParamSink for &mut S {
    fn bind(&mut self, name: &str, value: &str) {
        (**self).bind(name, value)
    }
}

/// Discards every binding.
impl ParamSink for () {
    fn bind(&mut self, _: &str, _: &str) {}
}

impl<S: BuildHasher> ParamSink for HashMap<String, String, S> {
    fn bind(&mut self, name: &str, value: &str) {
        match self.get_mut(name) {
            Some(v) => value.clone_into(v),
            None => {
                self.insert(name.to_owned(), value.to_owned());
            }
        }
    }
}

impl ParamSink for BTreeMap<String, String> {
    fn bind(&mut self, name: &str, value: &str) {
        match self.get_mut(name) {
            Some(v) => value.clone_into(v),
            None => {
                self.insert(name.to_owned(), value.to_owned());
            }
        }
    }
}

/// Ordered path parameters of one request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Params {
    buf: SmallVec<[(String, String); 4]>,
}

impl Params {
    pub fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find_map(|(k, v)| if k == name { Some(v.as_str()) } else { None })
    }

    /// Parses the value bound to `name`.
    ///
    /// ```
    /// use route_trie::{ParamError, ParamSink, Params};
    ///
    /// let mut params = Params::new();
    /// params.bind("id", "42");
    /// params.bind("slug", "hello");
    ///
    /// assert_eq!(params.parse::<u64>("id"), Ok(42));
    /// assert!(matches!(params.parse::<u64>("slug"), Err(ParamError::Invalid { .. })));
    /// assert!(matches!(params.parse::<u64>("page"), Err(ParamError::Missing { .. })));
    /// ```
    pub fn parse<T>(&self, name: &str) -> Result<T, ParamError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let value = self.get(name).ok_or_else(|| ParamError::Missing {
            name: name.to_owned(),
        })?;
        value.parse::<T>().map_err(|e| ParamError::Invalid {
            name: name.to_owned(),
            value: value.to_owned(),
            reason: e.to_string(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.buf.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn clear(&mut self) {
        self.buf.clear()
    }
}

impl ParamSink for Params {
    fn bind(&mut self, name: &str, value: &str) {
        match self.buf.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => value.clone_into(v),
            None => self.buf.push((name.to_owned(), value.to_owned())),
        }
    }
}

impl Deref for Params {
    type Target = [(String, String)];
    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = smallvec::IntoIter<[(String, String); 4]>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}
