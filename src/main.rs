use anyhow::Context;
use cat_search::{
    FileSource, HostPage, HttpSource, InputEvent, Rendered, ResultsSurface, SearchConfig,
    SearchController, TextInput,
};
use clap::Parser;
use futures::{StreamExt, stream};
use std::io::Write as _;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Incremental search over the shelter's animal list.
///
/// Loads the list once, then reads one query per line on stdin and prints
/// the results markup after every keystroke-equivalent.
#[derive(Parser)]
#[command(name = "cat-search")]
#[command(version)]
#[command(about = "Incremental search over the shelter's animal list", long_about = None)]
struct Cli {
    /// Config file (defaults to the user config dir when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Data endpoint, overriding the config
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Read the entity list from a JSON file instead of the endpoint
    #[arg(long, conflicts_with = "endpoint")]
    from_file: Option<PathBuf>,
}

/// Prints each render of the results surface as one line of markup.
struct StdoutResults;

impl ResultsSurface for StdoutResults {
    fn replace(&mut self, rendered: Rendered) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", rendered.html()) {
            tracing::warn!("Failed to write results: {}", e);
        }
    }
}

/// A page whose input is fed from stdin and whose results go to stdout.
struct TerminalPage<'a> {
    config: &'a SearchConfig,
    input: TextInput,
}

impl HostPage for TerminalPage<'_> {
    type Input = TextInput;
    type Results = StdoutResults;

    fn text_input(&self, id: &str) -> Option<TextInput> {
        (id == self.config.input_id).then(|| self.input.clone())
    }

    fn container(&self, id: &str) -> Option<StdoutResults> {
        (id == self.config.results_id).then_some(StdoutResults)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    cat_search::logging::init();
    let cli = Cli::parse();

    let mut config = SearchConfig::discover(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }

    let input = TextInput::new();
    let page = TerminalPage {
        config: &config,
        input: input.clone(),
    };
    let mut controller = SearchController::initialize(&page, config.clone());

    let lines = BufReader::new(tokio::io::stdin()).lines();
    let events = stream::unfold(lines, |mut lines| async move {
        match lines.next_line().await {
            Ok(Some(line)) => Some((line, lines)),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Stopped reading stdin: {}", e);
                None
            }
        }
    })
    .map(move |line| {
        input.set_value(line);
        InputEvent::Changed
    })
    .boxed_local();

    let loaded = match cli.from_file {
        Some(path) => cat_search::run(&mut controller, &FileSource::new(path), events).await,
        None => {
            let source = HttpSource::new(&config.endpoint);
            cat_search::run(&mut controller, &source, events).await
        }
    };
    loaded.context("Failed to load the entity list")?;

    Ok(())
}
