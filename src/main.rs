use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use freeform::config::{CanvasConfig, ConfigError};
use freeform::doc::{Content, ElementId, ElementKind};
use freeform::engine::{Action, Engine};
use freeform::error::LayoutError;
use freeform::geometry::Point;
use freeform::hit::{Part, Target};
use freeform::persist::{JsonFileSink, load_file, to_json};
use freeform::render::TextRenderer;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Layout(#[from] LayoutError),
    #[error("failed to read script: {0}")]
    Io(#[from] io::Error),
    #[error("script line {line}: {source}")]
    Script { line: usize, source: serde_json::Error },
    #[error("script line {line}: no element at index {index}")]
    UnknownElement { line: usize, index: usize },
}

#[derive(Parser, Debug)]
#[command(name = "freeform", about = "Freeform canvas layout engine CLI")]
struct Cli {
    /// Canvas width in canvas units.
    #[arg(long, env = "FREEFORM_CANVAS_WIDTH")]
    canvas_width: Option<i64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSONL event script against a layout and save the result.
    Replay {
        /// Layout to start from; empty canvas when absent.
        #[arg(long)]
        layout: Option<PathBuf>,
        /// Event script, one JSON object per line; `-` reads stdin.
        #[arg(long, default_value = "-")]
        script: String,
        /// Where to write the resulting layout; stdout when absent.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a layout in paint order.
    Show {
        #[arg(long)]
        layout: PathBuf,
    },
}

/// One line of a replay script. Elements are referenced by their index in
/// insertion order.
#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum ScriptEvent {
    Drop {
        kind: ElementKind,
        x: i64,
        y: i64,
        #[serde(default)]
        origin: Point,
    },
    Down {
        x: i64,
        y: i64,
        element: usize,
        part: Part,
    },
    Move {
        x: i64,
        y: i64,
    },
    Up {
        x: i64,
        y: i64,
    },
    Click {
        element: Option<usize>,
        #[serde(default = "body_part")]
        part: Part,
    },
    ClickAt {
        x: i64,
        y: i64,
    },
    Delete {
        element: Option<usize>,
    },
    Content {
        element: usize,
        content: serde_json::Value,
    },
}

fn body_part() -> Part {
    Part::Body
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut canvas = CanvasConfig::from_env()?;
    if let Some(width) = cli.canvas_width {
        canvas.width = width;
        canvas.validate()?;
    }
    tracing::debug!(width = canvas.width, min_size = canvas.min_size, "canvas configured");

    match cli.command {
        Command::Replay { layout, script, out } => run_replay(canvas, layout, &script, out),
        Command::Show { layout } => run_show(canvas, layout),
    }
}

fn run_replay(canvas: CanvasConfig, layout: Option<PathBuf>, script: &str, out: Option<PathBuf>) -> Result<(), CliError> {
    let mut engine = Engine::new(canvas);
    if let Some(path) = layout {
        engine.load(load_file(&path)?);
    }

    let reader: Box<dyn BufRead> = if script == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        Box::new(BufReader::new(File::open(script)?))
    };

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event: ScriptEvent =
            serde_json::from_str(&line).map_err(|source| CliError::Script { line: line_no, source })?;
        let actions = apply(&mut engine, event, line_no)?;
        for action in actions.iter().filter(|a| !matches!(a, Action::RenderNeeded)) {
            tracing::info!(line = line_no, ?action, "action");
        }
    }

    match out {
        Some(path) => engine.save_to(&mut JsonFileSink::new(path))?,
        None => println!("{}", to_json(&engine.save())?),
    }
    Ok(())
}

fn element_ref(engine: &Engine, index: usize, line: usize) -> Result<(ElementId, ElementKind), CliError> {
    engine
        .elements()
        .get(index)
        .map(|el| (el.id, el.kind()))
        .ok_or(CliError::UnknownElement { line, index })
}

fn apply(engine: &mut Engine, event: ScriptEvent, line: usize) -> Result<Vec<Action>, CliError> {
    let actions = match event {
        ScriptEvent::Drop { kind, x, y, origin } => engine.on_drop(kind, Point::new(x, y), origin),
        ScriptEvent::Down { x, y, element, part } => {
            let (id, _) = element_ref(engine, element, line)?;
            engine.on_pointer_down(Point::new(x, y), Target::element(id, part))
        }
        ScriptEvent::Move { x, y } => engine.on_pointer_move(Point::new(x, y)),
        ScriptEvent::Up { x, y } => engine.on_pointer_up(Point::new(x, y)),
        ScriptEvent::Click { element: None, .. } => engine.on_click(Target::Canvas),
        ScriptEvent::Click { element: Some(element), part } => {
            let (id, _) = element_ref(engine, element, line)?;
            engine.on_click(Target::element(id, part))
        }
        ScriptEvent::ClickAt { x, y } => {
            let target = engine.target_at(Point::new(x, y));
            engine.on_click(target)
        }
        ScriptEvent::Delete { element: None } => engine.delete_selected(),
        ScriptEvent::Delete { element: Some(element) } => {
            let (id, _) = element_ref(engine, element, line)?;
            engine.delete(&id)
        }
        ScriptEvent::Content { element, content } => {
            let (id, kind) = element_ref(engine, element, line)?;
            let content = Content::from_value(kind, content)?;
            engine.set_content(&id, content)
        }
    };
    Ok(actions)
}

fn run_show(canvas: CanvasConfig, layout: PathBuf) -> Result<(), CliError> {
    let mut engine = Engine::new(canvas);
    engine.load(load_file(&layout)?);
    let mut renderer = TextRenderer::default();
    engine.render(&mut renderer);
    for line in renderer.lines {
        println!("{line}");
    }
    Ok(())
}
