use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use journey_core::interface::{normalize_player_name, play, read_player_name};
use journey_core::{JourneySummary, MapRenderer, MapStyle, SvgCanvas, TraversalSession};
use story_graph::{travel_story, StoryGraph};

#[derive(Parser, Debug)]
#[command(name = "journey", version, about = "A choose-your-own-adventure road trip that ends with a map of where you went")]
struct Args {
    /// Traveller name; asked for interactively when omitted
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    /// Story table to play instead of the built-in travel story
    #[arg(long, value_name = "PATH")]
    story: Option<PathBuf>,

    /// Map style overrides
    #[arg(long, value_name = "PATH")]
    style: Option<PathBuf>,

    /// Where to write the SVG map
    #[arg(long, value_name = "PATH", default_value = "travel_map.svg")]
    out: PathBuf,

    /// Also print the map as text
    #[arg(long)]
    ascii: bool,

    /// Print the journey summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so the story on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let custom_story;
    let graph: &StoryGraph = match &args.story {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read story {}", path.display()))?;
            custom_story = StoryGraph::from_toml_str(&source)
                .with_context(|| format!("failed to load story {}", path.display()))?;
            &custom_story
        }
        None => travel_story().context("built-in travel story is invalid")?,
    };
    info!(nodes = graph.len(), choices = graph.choice_count(), "story loaded");

    let style = match &args.style {
        Some(path) => MapStyle::load(path)?,
        None => MapStyle::default(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let player = match &args.name {
        Some(name) => normalize_player_name(name),
        None => read_player_name(&mut input, &mut output)?,
    };

    let mut session = TraversalSession::new(graph)?;
    let outcome = play(&mut session, &player, &mut input, &mut output)?;
    let summary = JourneySummary::new(&player, &session, outcome.finished_story());
    let visit_log = session.finish();

    writeln!(output, "\nDrawing your travel map...")?;
    let renderer = MapRenderer::new(style);

    let mut svg = SvgCanvas::new(renderer.style());
    let rendered = renderer.render(visit_log.as_slice(), &mut svg)?;
    let saved = match svg.save(&args.out) {
        Ok(()) => {
            writeln!(output, "Map saved to {}", args.out.display())?;
            true
        }
        Err(err) => {
            error!(error = %err, "could not save the map, falling back to text");
            false
        }
    };

    if args.ascii || !saved {
        // The text map opens with the headline.
        writeln!(output, "\n{}", renderer.render_text(visit_log.as_slice())?)?;
    } else {
        writeln!(output, "{}", rendered.headline)?;
    }

    if args.json {
        writeln!(output, "{}", summary.to_json()?)?;
    }

    Ok(())
}
