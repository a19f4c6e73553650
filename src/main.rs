//! sectionmap: clickable concept maps from document section headings.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sectionmap::error::Result;
use sectionmap::graph::Graph;
use sectionmap::map::{build_map, MapOptions};
use sectionmap::render::Payload;
use sectionmap::{app_state, config, input, ui};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sectionmap")]
#[command(about = "Clickable concept maps from document section headings", long_about = None)]
struct Args {
    /// Files or directories to map
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Label for the root node (default: text of the root label element or <title>)
    #[arg(long)]
    root_label: Option<String>,

    /// Id of the element enclosing the mapped content
    #[arg(long)]
    content_id: Option<String>,

    /// Class of the content element inside the content id
    #[arg(long)]
    content_class: Option<String>,

    /// Class of the heading sub-element holding its label
    #[arg(long)]
    label_class: Option<String>,

    /// Character budget for section previews
    #[arg(long)]
    budget: Option<usize>,

    /// Viewport width the layout is chosen for, in CSS pixels
    #[arg(long)]
    viewport_width: Option<u32>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Browse the map in the terminal instead of printing JSON
    #[arg(long)]
    browse: bool,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Log progress to stderr
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Only log errors
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn configure_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sectionmap={level},{level}")));

    registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    configure_logging(args.verbose, args.quiet || args.browse);

    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }
    let mut opts = MapOptions::from(&cfg);
    opts.root_label = args.root_label;
    if let Some(content_id) = args.content_id {
        opts.content_id = content_id;
    }
    if let Some(content_class) = args.content_class {
        opts.content_class = content_class;
    }
    if let Some(label_class) = args.label_class {
        opts.label_class = label_class;
    }
    if let Some(budget) = args.budget {
        opts.excerpt_budget = budget;
    }
    let viewport_width = args.viewport_width.unwrap_or(cfg.viewport_width);

    let documents = input::find_documents(args.paths, &cfg.file_extensions)?;

    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    let mut maps: Vec<(PathBuf, Graph)> = Vec::new();
    for path in documents {
        match input::load_document(&path) {
            Ok(doc) => {
                if let Some(graph) = build_map(&doc, &opts) {
                    maps.push((path, graph));
                }
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping document"),
        }
    }

    if maps.is_empty() {
        eprintln!("No section maps could be built");
        return Ok(());
    }

    if args.browse {
        let (path, graph) = maps.swap_remove(0);
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        return run_tui(app_state::AppState::new(graph, name));
    }

    let json = if maps.len() == 1 {
        let payload = Payload::new(&maps[0].1, viewport_width, None);
        to_json(&payload, args.compact)?
    } else {
        let payloads: Vec<Payload> = maps
            .iter()
            .map(|(path, graph)| {
                Payload::new(graph, viewport_width, Some(path.display().to_string()))
            })
            .collect();
        to_json(&payloads, args.compact)?
    };
    println!("{json}");

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}

fn run_tui(mut app: app_state::AppState) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    } else if let Some(anchor) = app.last_navigation() {
        println!("{anchor}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up => app.select(app.find_prev_node()),
                KeyCode::Down => app.select(app.find_next_node()),
                KeyCode::Left => app.select(app.navigate_to_parent()),
                KeyCode::Right => app.select(app.navigate_to_first_child()),
                KeyCode::PageUp => app.select(app.navigate_to_prev_sibling()),
                KeyCode::PageDown => app.select(app.navigate_to_next_sibling()),
                KeyCode::Home => app.select(app.navigate_to_first()),
                KeyCode::End => app.select(app.navigate_to_last()),
                KeyCode::Enter => {
                    app.click_current();
                }
                KeyCode::Char('p') => app.toggle_preview(),
                _ => {}
            }
        }
    }
}
