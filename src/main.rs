//! Command-line front end: run one Baidu search and print the results.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use baidu_search::{SearchArgs, SearchConfig, SearchTool};

#[derive(Parser, Debug)]
#[command(name = "baidu-search")]
#[command(about = "Search Baidu and print the ranked results")]
#[command(version)]
struct Args {
    /// Query to send to Baidu.
    #[arg(value_name = "QUERY")]
    query: String,

    /// Maximum number of results to return (1-20).
    #[arg(short = 'n', long, default_value_t = 5)]
    num_results: usize,

    /// Print the raw JSON response instead of markdown.
    #[arg(long)]
    json: bool,

    /// HTTP timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Maximum characters to keep per result abstract.
    #[arg(long, default_value_t = 300)]
    abstract_max_length: usize,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.debug {
        EnvFilter::new("baidu_search=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = SearchConfig {
        timeout: Duration::from_secs(args.timeout),
        abstract_max_length: args.abstract_max_length,
        ..Default::default()
    };
    let tool = SearchTool::new(config)?;

    let response = tool.run(&SearchArgs {
        query: args.query,
        num_results: Some(args.num_results),
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", SearchTool::render_markdown(&response.results));
        eprintln!("({} results in {:.3}s)", response.results.len(), response.response_time);
    }

    Ok(())
}
