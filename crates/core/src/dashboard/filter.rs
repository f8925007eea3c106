const ALL: &str = "all";

/// Active category filter. Tags compare by exact equality.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a filter button's value; `all` (or empty) shows everything.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(raw.to_string())
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL,
            CategoryFilter::Only(tag) => tag,
        }
    }

    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(tag) => tag == category,
        }
    }

    /// Keep items whose category passes this filter.
    pub fn apply<'a, T, F>(&'a self, items: &'a [T], category: F) -> impl Iterator<Item = &'a T>
    where
        F: Fn(&T) -> &str + 'a,
    {
        items.iter().filter(move |item| self.matches(category(item)))
    }
}

/// A row of filter buttons with exactly one active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterBar {
    options: Vec<CategoryFilter>,
    active: CategoryFilter,
}

impl FilterBar {
    /// `All` always leads; duplicate tags are dropped.
    #[must_use]
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = vec![CategoryFilter::All];
        for tag in tags {
            let option = CategoryFilter::parse(tag.as_ref());
            if !options.contains(&option) {
                options.push(option);
            }
        }
        Self {
            options,
            active: CategoryFilter::All,
        }
    }

    #[must_use]
    pub fn options(&self) -> &[CategoryFilter] {
        &self.options
    }

    #[must_use]
    pub fn active(&self) -> &CategoryFilter {
        &self.active
    }

    #[must_use]
    pub fn is_active(&self, option: &CategoryFilter) -> bool {
        &self.active == option
    }

    pub fn select(&mut self, filter: CategoryFilter) {
        self.active = filter;
    }
}
