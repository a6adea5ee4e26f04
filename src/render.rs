//! HTML and plain-text rendering of a [`Recommendation`].
//!
//! The HTML output is a fragment meant for an embedded web view: one block
//! per recipe, best match first, with a store search link for every missing
//! ingredient. All dataset text is escaped before it is embedded.

use html_escape::{encode_double_quoted_attribute, encode_text};
use log::warn;
use reqwest::Url;

use crate::config::ShoppingConfig;
use crate::model::MatchResult;
use crate::recommendation::Recommendation;

const RECIPE_SEPARATOR: &str = "<br><br>";

/// Render a recommendation as an HTML fragment.
pub fn render_html(recommendation: &Recommendation, shopping: &ShoppingConfig) -> String {
    match recommendation {
        Recommendation::Matches(results) => results
            .iter()
            .map(|result| render_result(result, shopping))
            .collect::<Vec<_>>()
            .join(RECIPE_SEPARATOR),
        other => format!("<p>{}</p>", encode_text(other.message().unwrap_or_default())),
    }
}

fn render_result(result: &MatchResult, shopping: &ShoppingConfig) -> String {
    let name = encode_text(&result.name);
    let href = encode_double_quoted_attribute(&result.link);
    let link_text = encode_text(&result.link);

    let mut lines = vec![
        format!("<b>{}:</b><br>", name),
        format!("<a href=\"{}\">{}</a><br>", href, link_text),
        format!(
            "Matched Ingredients: {}<br>",
            encode_text(&result.matched_ingredients.join(", "))
        ),
        format!(
            "Missing Ingredients: {}<br>",
            encode_text(&result.missing_ingredients.join(", "))
        ),
    ];

    if shopping.enabled {
        let links: Vec<String> = result
            .missing_ingredients
            .iter()
            .filter_map(|ingredient| shopping_anchor(shopping, ingredient))
            .collect();
        if !links.is_empty() {
            lines.push(links.join("<br>"));
        }
    }

    lines.join("\n")
}

fn shopping_anchor(shopping: &ShoppingConfig, ingredient: &str) -> Option<String> {
    let url = shopping_link(shopping, ingredient)?;
    Some(format!(
        "<a href=\"{}\">{} Link for {}</a>",
        encode_double_quoted_attribute(url.as_str()),
        encode_text(&shopping.label),
        encode_text(ingredient)
    ))
}

/// Store search URL for one ingredient, with the ingredient URL-encoded into
/// the configured query parameter.
pub fn shopping_link(shopping: &ShoppingConfig, ingredient: &str) -> Option<Url> {
    match Url::parse_with_params(&shopping.base_url, &[(&shopping.query_param, ingredient)]) {
        Ok(url) => Some(url),
        Err(e) => {
            warn!(
                "Skipping shopping link, invalid base url '{}': {}",
                shopping.base_url, e
            );
            None
        }
    }
}

/// Render a recommendation as plain text for terminals and logs.
pub fn render_text(recommendation: &Recommendation) -> String {
    if let Some(message) = recommendation.message() {
        return message.to_string();
    }

    recommendation
        .matches()
        .iter()
        .map(|result| {
            format!(
                "{} ({}/{})\n  {}\n  Matched: {}\n  Missing: {}",
                result.name,
                result.matched_ingredients.len(),
                result.matched_ingredients.len() + result.missing_ingredients.len(),
                result.link,
                result.matched_ingredients.join(", "),
                result.missing_ingredients.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pancake() -> MatchResult {
        MatchResult {
            name: "Pancake".to_string(),
            link: "http://a.example/pancake".to_string(),
            matched_ingredients: vec!["egg".to_string(), "flour".to_string()],
            missing_ingredients: vec!["milk".to_string()],
        }
    }

    #[test]
    fn test_render_single_result() {
        let html = render_html(
            &Recommendation::Matches(vec![pancake()]),
            &ShoppingConfig::default(),
        );

        assert!(html.starts_with("<b>Pancake:</b><br>"));
        assert!(html.contains(
            "<a href=\"http://a.example/pancake\">http://a.example/pancake</a><br>"
        ));
        assert!(html.contains("Matched Ingredients: egg, flour<br>"));
        assert!(html.contains("Missing Ingredients: milk<br>"));
        assert!(html.contains(
            "<a href=\"https://www.zeptonow.com/search?query=milk\">Zepto Link for milk</a>"
        ));
    }

    #[test]
    fn test_results_joined_with_blank_line() {
        let mut second = pancake();
        second.name = "Crepe".to_string();
        let html = render_html(
            &Recommendation::Matches(vec![pancake(), second]),
            &ShoppingConfig::default(),
        );
        assert_eq!(html.matches(RECIPE_SEPARATOR).count(), 1);
        assert!(html.find("Pancake").unwrap() < html.find("Crepe").unwrap());
    }

    #[test]
    fn test_text_is_escaped() {
        let result = MatchResult {
            name: "Mac & <Cheese>".to_string(),
            link: "http://a.example/?a=1&b=\"2\"".to_string(),
            matched_ingredients: vec!["cheese".to_string()],
            missing_ingredients: vec![],
        };
        let html = render_html(
            &Recommendation::Matches(vec![result]),
            &ShoppingConfig::default(),
        );
        assert!(html.contains("<b>Mac &amp; &lt;Cheese&gt;:</b>"));
        assert!(html.contains("href=\"http://a.example/?a=1&amp;b=&quot;2&quot;\""));
    }

    #[test]
    fn test_shopping_link_encodes_ingredient() {
        let url = shopping_link(&ShoppingConfig::default(), "green chili & lime").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.zeptonow.com/search?query=green+chili+%26+lime"
        );
    }

    #[test]
    fn test_invalid_shopping_base_url_skips_links() {
        let shopping = ShoppingConfig {
            base_url: "not a url".to_string(),
            ..ShoppingConfig::default()
        };
        assert!(shopping_link(&shopping, "milk").is_none());

        let html = render_html(&Recommendation::Matches(vec![pancake()]), &shopping);
        assert!(html.contains("Missing Ingredients: milk<br>"));
        assert!(!html.contains("Link for"));
    }

    #[test]
    fn test_disabled_shopping_links() {
        let shopping = ShoppingConfig {
            enabled: false,
            ..ShoppingConfig::default()
        };
        let html = render_html(&Recommendation::Matches(vec![pancake()]), &shopping);
        assert!(!html.contains("zeptonow"));
    }

    #[test]
    fn test_no_missing_ingredients_has_no_link_line() {
        let mut result = pancake();
        result.missing_ingredients.clear();
        let html = render_html(
            &Recommendation::Matches(vec![result]),
            &ShoppingConfig::default(),
        );
        assert!(html.ends_with("Missing Ingredients: <br>"));
    }

    #[test]
    fn test_render_messages() {
        let shopping = ShoppingConfig::default();
        assert_eq!(
            render_html(&Recommendation::NoMatches, &shopping),
            "<p>No recipes found for the detected ingredients.</p>"
        );
        assert_eq!(
            render_html(&Recommendation::NoIngredients, &shopping),
            "<p>No ingredients detected.</p>"
        );
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&Recommendation::Matches(vec![pancake()]));
        assert!(text.starts_with("Pancake (2/3)"));
        assert!(text.contains("Missing: milk"));
        assert_eq!(render_text(&Recommendation::NoRecipes), "No recipes available.");
    }
}
