//! Route parameters extracted by the page router.

/// Ordered set of named string parameters taken from a page URL.
///
/// Loaders only read them. Inserting a name twice replaces the earlier value
/// in place, so the original order is kept.
///
/// # Example
///
/// ```
/// use inkpage_core::RouteParams;
///
/// let params = RouteParams::new()
///     .with("username", "alice")
///     .with("comic_slug", "my-comic");
/// assert_eq!(params.get("comic_slug"), Some("my-comic"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(String, String)>);

impl RouteParams {
    /// No parameters.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Builder-style [`RouteParams::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((name, value)),
        }
    }

    /// Value of a parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RouteParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for RouteParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let params = RouteParams::from([
            ("username", "alice"),
            ("comic_slug", "my-comic"),
            ("chapter_number", "3"),
        ]);

        let names: Vec<_> = params.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["username", "comic_slug", "chapter_number"]);
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut params = RouteParams::new().with("a", "1").with("b", "2");
        params.insert("a", "3");

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, [("a", "3"), ("b", "2")]);
    }

    #[test]
    fn empty_params() {
        let params = RouteParams::new();
        assert!(params.is_empty());
        assert_eq!(params.get("username"), None);
    }
}
