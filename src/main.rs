use log::debug;
use std::env;
use std::error::Error;

use recipe_recommender::{
    render_html, render_text, DatasetSource, Recommender, RecommenderConfig, TieBreak,
};

const USAGE: &str = "Usage: recipe-recommender [--html|--json] [--tie-break input|name] [--dataset PATH_OR_URL] INGREDIENT...";

#[derive(Debug, PartialEq)]
enum OutputFormat {
    Text,
    Html,
    Json,
}

#[derive(Debug)]
struct Options {
    format: OutputFormat,
    tie_break: TieBreak,
    dataset: DatasetSource,
    ingredients: Vec<String>,
}

#[derive(Debug)]
enum Command {
    Run(Options),
    Help,
}

fn parse_args(
    args: impl IntoIterator<Item = String>,
    config: &RecommenderConfig,
) -> Result<Command, String> {
    let mut options = Options {
        format: OutputFormat::Text,
        tie_break: config.ranking.tie_break,
        dataset: config.dataset.source(),
        ingredients: Vec::new(),
    };

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--html" => options.format = OutputFormat::Html,
            "--json" => options.format = OutputFormat::Json,
            "--tie-break" => {
                let value = args.next().ok_or(USAGE)?;
                options.tie_break = value.parse::<TieBreak>()?;
            }
            "--dataset" => {
                let value = args.next().ok_or(USAGE)?;
                options.dataset = DatasetSource::from_arg(&value);
            }
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option: {}\n{}", flag, USAGE));
            }
            _ => options.ingredients.push(arg),
        }
    }

    Ok(Command::Run(options))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = RecommenderConfig::load()?;

    let options = match parse_args(env::args().skip(1), &config)? {
        Command::Run(options) => options,
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    debug!("Dataset source: {:?}", options.dataset);

    let recommendation = Recommender::builder()
        .dataset(options.dataset)
        .detected(options.ingredients.into_iter().collect())
        .tie_break(options.tie_break)
        .timeout(config.timeout())
        .build()
        .await?;

    match options.format {
        OutputFormat::Text => println!("{}", render_text(&recommendation)),
        OutputFormat::Html => println!("{}", render_html(&recommendation, &config.shopping)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&recommendation)?),
    }

    Ok(())
}
