/// Exact spacecraft names displayed as favorites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteList(Vec<String>);

impl FavoriteList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Case-sensitive exact match.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|favorite| favorite == name)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}
