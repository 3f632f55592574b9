//! Provider/environment combinations.

use serde::{Deserialize, Serialize};

use crate::config::MatrixDefaults;
use crate::selection::selected_list;

/// Returns every `(outer, inner)` pair, with `outer` as the slower-changing index.
///
/// Duplicates in either input produce duplicate pairs. If either side is
/// empty the result is empty.
///
/// ```
/// use matrix_preview::combinations;
///
/// let pairs = combinations(&["aws", "gcp"], &["dev", "prod"]);
/// assert_eq!(
///     pairs,
///     [("aws", "dev"), ("aws", "prod"), ("gcp", "dev"), ("gcp", "prod")]
/// );
/// ```
pub fn combinations<A, B>(outer: &[A], inner: &[B]) -> Vec<(A, B)>
where
    A: Clone,
    B: Clone,
{
    outer
        .iter()
        .flat_map(|a| inner.iter().map(move |b| (a.clone(), b.clone())))
        .collect()
}

/// A single cell of the matrix, as rendered in structured output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    pub provider: String,
    pub environment: String,
}

impl From<(String, String)> for Combination {
    fn from((provider, environment): (String, String)) -> Self {
        Self {
            provider,
            environment,
        }
    }
}

/// A resolved build matrix: the selected axes plus their product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix {
    pub providers: Vec<String>,
    pub environments: Vec<String>,
    pub combinations: Vec<Combination>,
}

impl Matrix {
    /// Resolves both selection inputs against `defaults` and builds the product.
    pub fn resolve(providers: &str, environments: &str, defaults: &MatrixDefaults) -> Self {
        let providers = selected_list(providers, &defaults.providers);
        let environments = selected_list(environments, &defaults.environments);
        Self::from_axes(providers, environments)
    }

    pub fn from_axes(providers: Vec<String>, environments: Vec<String>) -> Self {
        let combinations = combinations(&providers, &environments)
            .into_iter()
            .map(Combination::from)
            .collect();
        Self {
            providers,
            environments,
            combinations,
        }
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}
