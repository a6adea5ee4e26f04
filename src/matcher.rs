use std::cmp::Ordering;
use std::collections::HashSet;
use std::str::FromStr;

use serde::Deserialize;

use crate::model::{normalize_ingredient, MatchResult, Recipe};

/// Ordering used between recipes that match the same number of ingredients
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep the dataset order (stable sort)
    #[default]
    #[serde(alias = "input")]
    InputOrder,
    /// Case-insensitive recipe name, then dataset order
    Name,
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "input" | "input_order" => Ok(TieBreak::InputOrder),
            "name" => Ok(TieBreak::Name),
            other => Err(format!("Unknown tie-break: {}", other)),
        }
    }
}

/// Match detected ingredients against recipes, best match first.
///
/// Recipes with no detected ingredient are dropped. Recipes with the same
/// match count keep their relative dataset order.
pub fn match_recipes<S: AsRef<str>>(detected: &[S], recipes: &[Recipe]) -> Vec<MatchResult> {
    match_recipes_with(detected, recipes, TieBreak::InputOrder)
}

/// Same as [`match_recipes`] with an explicit tie-break.
pub fn match_recipes_with<S: AsRef<str>>(
    detected: &[S],
    recipes: &[Recipe],
    tie_break: TieBreak,
) -> Vec<MatchResult> {
    let detected: HashSet<String> = detected
        .iter()
        .map(|ingredient| normalize_ingredient(ingredient.as_ref()))
        .collect();

    if detected.is_empty() || recipes.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<MatchResult> = recipes
        .iter()
        .filter_map(|recipe| match_one(&detected, recipe))
        .collect();

    // sort_by is stable, so equal keys keep input order
    results.sort_by(|a, b| compare_results(a, b, tie_break));
    results
}

fn match_one(detected: &HashSet<String>, recipe: &Recipe) -> Option<MatchResult> {
    let (matched, missing): (Vec<String>, Vec<String>) = recipe
        .normalized_ingredients()
        .into_iter()
        .partition(|ingredient| detected.contains(ingredient));

    if matched.is_empty() {
        return None;
    }

    Some(MatchResult {
        name: recipe.name.clone(),
        link: recipe.link.clone(),
        matched_ingredients: matched,
        missing_ingredients: missing,
    })
}

fn compare_results(a: &MatchResult, b: &MatchResult, tie_break: TieBreak) -> Ordering {
    let by_count = b.match_count().cmp(&a.match_count());
    match tie_break {
        TieBreak::InputOrder => by_count,
        TieBreak::Name => {
            by_count.then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
    }
}
