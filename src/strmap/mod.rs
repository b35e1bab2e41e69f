use std::cmp::Ordering;

/// Sorted string-keyed map backed by two parallel vectors.
///
/// Static children of a trie node are few and read far more often than
/// written, so a binary search over a contiguous key list beats hashing.
#[derive(Debug)]
pub struct StrMap<T> {
    keys: Vec<Box<str>>,
    values: Vec<T>,
}

impl<T> StrMap<T> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn find(&self, key: &str) -> Option<&T> {
        match self.find_index(key) {
            Ok(i) => self.values.get(i),
            Err(_) => None,
        }
    }

    pub fn find_mut_with(&mut self, key: &str, f: impl FnOnce() -> T) -> &mut T {
        let i = match self.find_index(key) {
            Ok(i) => i,
            Err(i) => {
                self.values.insert(i, f());
                self.keys.insert(i, key.into());
                i
            }
        };
        &mut self.values[i]
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    fn find_index(&self, key: &str) -> Result<usize, usize> {
        self.keys
            .binary_search_by(|probe| match probe.len().cmp(&key.len()) {
                Ordering::Equal => (**probe).cmp(key),
                ord => ord,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::StrMap;

    #[test]
    fn insert_keeps_keys_sorted() {
        let mut map: StrMap<usize> = StrMap::new();
        for (i, key) in ["users", "", "a", "posts", "ab"].iter().enumerate() {
            *map.find_mut_with(key, || 0) = i;
        }
        assert_eq!(map.values().count(), 5);
        assert_eq!(map.find("users"), Some(&0));
        assert_eq!(map.find(""), Some(&1));
        assert_eq!(map.find("ab"), Some(&4));
        assert_eq!(map.find("abc"), None);
    }

    #[test]
    fn existing_key_is_reused() {
        let mut map: StrMap<Vec<u8>> = StrMap::new();
        map.find_mut_with("x", Vec::new).push(1);
        map.find_mut_with("x", Vec::new).push(2);
        assert_eq!(map.values().count(), 1);
        assert_eq!(map.find("x"), Some(&vec![1, 2]));
    }
}
