use serde::{Deserialize, Serialize};

/// Lowercase and trim an ingredient label so it can be compared by equality.
pub fn normalize_ingredient(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A recipe from the static dataset. Ingredients are kept as written in the
/// dataset and normalized when matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub link: String,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        link: impl Into<String>,
        ingredients: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }

    /// The recipe's ingredients in dataset order, normalized.
    pub fn normalized_ingredients(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .map(|ingredient| normalize_ingredient(ingredient))
            .collect()
    }
}

/// How one recipe relates to the detected ingredients.
///
/// Both lists hold normalized ingredients in the recipe's own order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub name: String,
    pub link: String,
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
}

impl MatchResult {
    pub fn match_count(&self) -> usize {
        self.matched_ingredients.len()
    }
}

/// Ingredients detected across capture events.
///
/// The list is owned by whoever drives the captures and is handed to the
/// matcher whole. Entries are only ever appended; starting over means
/// replacing the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct DetectedIngredients(Vec<String>);

impl DetectedIngredients {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a classifier label. Returns the stored ingredient, or `None`
    /// when the label is blank after normalization.
    pub fn record(&mut self, label: &str) -> Option<&str> {
        let ingredient = normalize_ingredient(label);
        if ingredient.is_empty() {
            return None;
        }
        self.0.push(ingredient);
        self.0.last().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<S: AsRef<str>> FromIterator<S> for DetectedIngredients {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut detected = Self::new();
        detected.extend(iter);
        detected
    }
}

impl<S: AsRef<str>> Extend<S> for DetectedIngredients {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for label in iter {
            self.record(label.as_ref());
        }
    }
}

impl From<Vec<String>> for DetectedIngredients {
    fn from(labels: Vec<String>) -> Self {
        labels.into_iter().collect()
    }
}

impl From<DetectedIngredients> for Vec<String> {
    fn from(detected: DetectedIngredients) -> Self {
        detected.0
    }
}

impl IntoIterator for DetectedIngredients {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DetectedIngredients {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl AsRef<[String]> for DetectedIngredients {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}
