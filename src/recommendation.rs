use log::debug;
use serde::Serialize;

use crate::matcher::{match_recipes_with, TieBreak};
use crate::model::{normalize_ingredient, MatchResult, Recipe};

/// Outcome of a recommendation request.
///
/// The empty cases are kept apart so a caller can tell "nothing scanned yet"
/// from "nothing matched".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "recipes", rename_all = "snake_case")]
pub enum Recommendation {
    NoIngredients,
    NoRecipes,
    NoMatches,
    Matches(Vec<MatchResult>),
}

impl Recommendation {
    /// Message shown in place of results, `None` when there are matches.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Recommendation::NoIngredients => Some("No ingredients detected."),
            Recommendation::NoRecipes => Some("No recipes available."),
            Recommendation::NoMatches => Some("No recipes found for the detected ingredients."),
            Recommendation::Matches(_) => None,
        }
    }

    pub fn matches(&self) -> &[MatchResult] {
        match self {
            Recommendation::Matches(results) => results,
            _ => &[],
        }
    }

    pub fn into_matches(self) -> Vec<MatchResult> {
        match self {
            Recommendation::Matches(results) => results,
            _ => Vec::new(),
        }
    }
}

/// Match `detected` against `recipes` and classify the outcome.
pub fn recommend<S: AsRef<str>>(
    detected: &[S],
    recipes: &[Recipe],
    tie_break: TieBreak,
) -> Recommendation {
    let has_ingredients = detected
        .iter()
        .any(|ingredient| !normalize_ingredient(ingredient.as_ref()).is_empty());

    if !has_ingredients {
        return Recommendation::NoIngredients;
    }
    if recipes.is_empty() {
        return Recommendation::NoRecipes;
    }

    let results = match_recipes_with(detected, recipes, tie_break);
    debug!(
        "Matched recipes: {:?}",
        results.iter().map(|r| r.name.as_str()).collect::<Vec<_>>()
    );

    if results.is_empty() {
        Recommendation::NoMatches
    } else {
        Recommendation::Matches(results)
    }
}
