/// Case-insensitive substring filter over display names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameFilter {
    needle: Option<String>,
}

impl NameFilter {
    /// Blank filter text matches everything
    pub fn new(text: Option<&str>) -> Self {
        let needle = text
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase);
        Self { needle }
    }

    pub fn matches(&self, name: &str) -> bool {
        match &self.needle {
            Some(needle) => name.to_lowercase().contains(needle),
            None => true,
        }
    }
}
