use std::collections::HashSet;

use crate::error::{PlatformError, Result};

/// A named group of algorithms shown as one framed block in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub algorithms: Vec<String>,
}

/// The immutable mapping from category to its ordered algorithm names.
///
/// Every algorithm name is unique across the whole catalog, so a name alone
/// identifies a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

const BUILTIN: &[(&str, &[&str])] = &[
    (
        "Supervised Learning",
        &[
            "Linear Regression",
            "Logistic Regression",
            "Decision Trees",
            "Random Forest",
            "SVM",
            "KNN",
        ],
    ),
    (
        "Unsupervised Learning",
        &["K-Means", "Hierarchical Clustering", "PCA", "DBSCAN"],
    ),
    ("Neural Networks", &["Perceptron", "MLP", "CNN", "RNN"]),
    (
        "Ensemble Methods",
        &["AdaBoost", "Gradient Boosting", "XGBoost"],
    ),
];

impl Catalog {
    /// Builds a catalog from `(category, algorithms)` groups, preserving order.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::DuplicateAlgorithm` if any algorithm name is
    /// listed twice, in the same category or across categories.
    pub fn new<C, A, I>(groups: I) -> Result<Self>
    where
        C: Into<String>,
        A: Into<String>,
        I: IntoIterator<Item = (C, Vec<A>)>,
    {
        let mut seen = HashSet::new();
        let mut categories = Vec::new();
        for (name, algorithms) in groups {
            let algorithms: Vec<String> = algorithms.into_iter().map(Into::into).collect();
            for algo in &algorithms {
                if !seen.insert(algo.clone()) {
                    return Err(PlatformError::DuplicateAlgorithm { name: algo.clone() });
                }
            }
            categories.push(Category {
                name: name.into(),
                algorithms,
            });
        }
        Ok(Self { categories })
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        let categories = BUILTIN
            .iter()
            .map(|(name, algos)| Category {
                name: (*name).to_string(),
                algorithms: algos.iter().map(|a| (*a).to_string()).collect(),
            })
            .collect();
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All algorithm names in display order.
    pub fn algorithms(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .flat_map(|c| c.algorithms.iter().map(String::as_str))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.algorithms().any(|a| a == name)
    }

    /// The category an algorithm belongs to, if it is in the catalog.
    pub fn category_of(&self, name: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.algorithms.iter().any(|a| a == name))
            .map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.algorithms.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
