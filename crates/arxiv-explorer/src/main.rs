//! arXiv Explorer - command-line entry point.
//!
//! One search per invocation: compile the query, fetch a page, rank it
//! locally when relevance ordering is requested, optionally show the
//! papers most similar to one result.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use arxiv_explorer::config::weights;
use arxiv_explorer::models::{Paper, SearchFilters, SortBy};
use arxiv_explorer::{ArxivClient, Config, ranking};

#[derive(Parser, Debug)]
#[command(name = "arxiv-explorer")]
#[command(about = "Search and rank arXiv papers from the command line")]
#[command(version)]
struct Cli {
    /// Free-text search query
    #[arg(default_value = "")]
    query: String,

    /// Restrict to one arXiv category (e.g. cs.LG)
    #[arg(long)]
    category: Option<String>,

    /// Earliest submission year (inclusive)
    #[arg(long)]
    year_from: Option<u16>,

    /// Latest submission year (inclusive)
    #[arg(long)]
    year_to: Option<u16>,

    /// Match the query against titles
    #[arg(long)]
    title: bool,

    /// Match the query against abstracts
    #[arg(long = "abstract")]
    r#abstract: bool,

    /// Match the query against author names
    #[arg(long)]
    author: bool,

    /// Match the query against journal references
    #[arg(long)]
    journal_ref: bool,

    /// Result ordering
    #[arg(long, value_enum, default_value_t = SortBy::Relevance)]
    sort: SortBy,

    /// Zero-based result page
    #[arg(long, default_value_t = 0)]
    page: usize,

    /// Show the papers most similar to this paper id within the fetched page
    #[arg(long)]
    related_to: Option<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn filters(&self) -> SearchFilters {
        SearchFilters {
            category: self.category.clone(),
            year_from: self.year_from,
            year_to: self.year_to,
            title: self.title,
            r#abstract: self.r#abstract,
            author: self.author,
            journal_ref: self.journal_ref,
            sort_by: self.sort,
        }
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

fn print_papers(papers: &[Paper]) {
    for paper in papers {
        println!("     {}", paper.title);
        println!("     {} | {}", paper.author_names(), paper.primary_category);
        println!("     {}", paper.id);
        println!();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let client = ArxivClient::new(Config::from_env()?)?;
    let papers = client.search(&cli.query, &cli.filters(), cli.page).await?;

    if papers.is_empty() {
        eprintln!("No results.");
        return Ok(());
    }

    if let Some(id) = cli.related_to {
        // The reference must come from the fetched page; related papers are
        // computed over the locally held set, never a fresh fetch.
        let Some(reference) = papers.iter().find(|p| p.id == id || p.id.ends_with(&id)) else {
            anyhow::bail!("paper '{id}' is not in the fetched page");
        };

        let related: Vec<_> = ranking::related_papers(reference, &papers)
            .into_iter()
            .take(weights::RELATED_LIMIT)
            .collect();

        if cli.json {
            println!("{}", serde_json::to_string_pretty(&related)?);
        } else {
            println!("Related to: {}\n", reference.title);
            for result in &related {
                println!("{:>4}  {}", result.similarity, result.paper.title);
                println!("      {}", result.paper.id);
            }
        }
        return Ok(());
    }

    if cli.sort == SortBy::Relevance && !cli.query.trim().is_empty() {
        let ranked = ranking::rank_papers(&cli.query, papers);
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&ranked)?);
        } else {
            for result in &ranked {
                println!("{:>3}%  {}", result.relevance, result.paper.title);
                println!("      {} | {}", result.paper.author_names(), result.paper.primary_category);
                println!("      {}", result.paper.id);
                println!();
            }
        }
    } else if cli.json {
        println!("{}", serde_json::to_string_pretty(&papers)?);
    } else {
        print_papers(&papers);
    }

    Ok(())
}
