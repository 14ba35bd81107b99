use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::bill::Bill;

/// Categories offered by the filter control. Bills may carry any other
/// string as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FoodNDining,
    Utility,
    Shopping,
    Education,
    PersonalCare,
    Travel,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::FoodNDining,
        Category::Utility,
        Category::Shopping,
        Category::Education,
        Category::PersonalCare,
        Category::Travel,
    ];

    /// Value stored in `Bill::category`.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::FoodNDining => "FoodNDining",
            Category::Utility => "Utility",
            Category::Shopping => "Shopping",
            Category::Education => "Education",
            Category::PersonalCare => "Personal Care",
            Category::Travel => "Travel",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::FoodNDining => "Food & Dining",
            other => other.as_str(),
        }
    }

    pub fn parse(s: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which bills the list shows. Never mutates the bill list itself.
///
/// Either every bill or one category. The category can only be set
/// through constructors that map the `"All"` sentinel to [`Filter::ALL`],
/// so a filter always reads back from its wire string unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Filter {
    category: Option<String>,
}

impl Filter {
    pub const ALL_SENTINEL: &'static str = "All";

    pub const ALL: Filter = Filter { category: None };

    pub fn category(category: impl Into<String>) -> Self {
        let category: String = category.into();
        Filter::from(category)
    }

    pub fn is_all(&self) -> bool {
        self.category.is_none()
    }

    /// The selected category, `None` for [`Filter::ALL`].
    pub fn as_category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn matches(&self, bill: &Bill) -> bool {
        match &self.category {
            None => true,
            Some(c) => bill.category == *c,
        }
    }

    pub fn as_str(&self) -> &str {
        self.category.as_deref().unwrap_or(Self::ALL_SENTINEL)
    }
}

impl From<String> for Filter {
    fn from(s: String) -> Self {
        if s == Self::ALL_SENTINEL {
            Filter::ALL
        } else {
            Filter { category: Some(s) }
        }
    }
}

impl From<&str> for Filter {
    fn from(s: &str) -> Self {
        Filter::from(s.to_string())
    }
}

impl From<Category> for Filter {
    fn from(c: Category) -> Self {
        Filter {
            category: Some(c.as_str().to_string()),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// On the wire a filter is the bare string, "All" included.
impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Filter::from)
    }
}
