//! `imgez`: crop and rotate an image by replaying selection gestures.
//!
//! The input image is loaded (EXIF orientation applied), the script steps
//! are fed to an editor document as pointer events and commands, and the
//! result is saved and/or copied to the system clipboard.

mod script;
mod system_clipboard;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use imgez_core::{CommandError, Document, EditorConfig, Response};

use crate::script::{parse_script, Step};
use crate::system_clipboard::SystemClipboard;

#[derive(Parser, Debug)]
#[command(
    name = "imgez",
    version,
    about = "Crop and rotate images with a scripted rectangular selection"
)]
struct Cli {
    /// Image to edit (PNG, JPEG, BMP or GIF)
    input: PathBuf,

    /// Script file with one step per line
    #[arg(long)]
    script: Option<PathBuf>,

    /// Inline step, e.g. `--step "drag 10 10 200 150"` (repeatable, runs after --script)
    #[arg(short, long = "step")]
    steps: Vec<String>,

    /// Write the final image here (format from the extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Copy the final selection (or whole image) to the system clipboard.
    /// On Linux this waits until another application takes the clipboard over
    #[arg(long, action = ArgAction::SetTrue)]
    copy: bool,

    /// Editor settings as JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grab band around selection edges, in screen pixels
    #[arg(long)]
    edge_tolerance: Option<f64>,

    /// Smallest width/height an edge drag can leave, in image pixels
    #[arg(long)]
    min_selection: Option<f64>,

    /// Maximum history entries including the original (0 = unbounded)
    #[arg(long)]
    max_history: Option<usize>,

    /// JPEG quality when saving
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    jpeg_quality: Option<u8>,

    /// Widget size the pointer coordinates refer to (default: image pixels)
    #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    view: Option<Vec<f64>>,

    /// Stop at the first rejected command instead of reporting and continuing
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,

    /// Verbose logging and a history listing at the end
    #[arg(long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = load_config(&cli)?;
    let steps = load_steps(&cli)?;
    log::debug!("{} steps, config {config:?}", steps.len());

    let mut doc = Document::new(config);
    doc.open(&cli.input)
        .with_context(|| format!("failed to open {}", cli.input.display()))?;
    if let Some([width, height]) = cli.view.as_deref() {
        doc.resize_view(*width, *height);
    }

    let mut clipboard = SystemClipboard::new();
    for (index, step) in steps.iter().enumerate() {
        if let Err(e) = run_step(&mut doc, step, &mut clipboard) {
            if cli.strict {
                return Err(e).with_context(|| format!("step {} ({step:?}) failed", index + 1));
            }
            eprintln!("step {}: {e}", index + 1);
        }
    }

    if let Some(path) = &cli.output {
        doc.save(path)
            .with_context(|| format!("failed to save {}", path.display()))?;
    }
    if cli.copy {
        let mut clipboard = SystemClipboard::until_replaced();
        doc.copy(&mut clipboard).context("failed to copy to clipboard")?;
    }

    report(&doc, cli.debug);
    Ok(())
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

/// Config file first, then individual flags on top.
fn load_config(cli: &Cli) -> Result<EditorConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))?
        }
        None => EditorConfig::default(),
    };

    if let Some(tolerance) = cli.edge_tolerance {
        config.edge_tolerance = tolerance;
    }
    if let Some(size) = cli.min_selection {
        config.min_selection_size = size;
    }
    if let Some(depth) = cli.max_history {
        config.max_history = Some(depth);
    }
    if let Some(quality) = cli.jpeg_quality {
        config.jpeg_quality = quality;
    }
    Ok(config)
}

fn load_steps(cli: &Cli) -> Result<Vec<Step>> {
    let mut steps = match &cli.script {
        Some(path) => read_script(path)?,
        None => Vec::new(),
    };
    for (i, step) in cli.steps.iter().enumerate() {
        steps.push(step.parse().with_context(|| format!("--step #{}: `{step}`", i + 1))?);
    }
    Ok(steps)
}

fn read_script(path: &Path) -> Result<Vec<Step>> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_script(&text).with_context(|| format!("in script {}", path.display()))
}

fn run_step(doc: &mut Document, step: &Step, clipboard: &mut SystemClipboard) -> Result<(), CommandError> {
    let response = match step {
        Step::Down(p) => doc.pointer_down(*p),
        Step::Move(p) => doc.pointer_move(*p),
        Step::Up(p) => doc.pointer_up(*p),
        Step::Drag(from, to) => {
            doc.pointer_down(*from);
            doc.pointer_move(*to);
            doc.pointer_up(*to)
        }
        Step::DoubleClick(p) => doc.double_click(*p)?,
        Step::Hover(p) => {
            let region = doc.hover(*p);
            println!("hover ({}, {}): {region:?}, cursor {:?}", p.x, p.y, region.cursor());
            Response::Unchanged
        }
        Step::View(width, height) => {
            doc.resize_view(*width, *height);
            Response::Unchanged
        }
        Step::Crop => doc.commit_crop()?,
        Step::Rotate(direction) => doc.rotate(*direction)?,
        Step::Undo => doc.undo()?,
        Step::Reset => doc.reset()?,
        Step::Clear => doc.clear_selection(),
        Step::Copy => {
            doc.copy(clipboard)?;
            Response::Unchanged
        }
        Step::Save(path) => {
            doc.save(path)?;
            Response::Unchanged
        }
        Step::Info => {
            print_selection(doc);
            Response::Unchanged
        }
    };

    if response == Response::ImageChanged {
        if let Some(image) = doc.current_image() {
            log::debug!("image now {}x{}", image.width(), image.height());
        }
    }
    Ok(())
}

fn print_selection(doc: &Document) {
    match doc.selection_info() {
        Some(info) => println!(
            "selection x={} y={} w={} h={}",
            info.x, info.y, info.width, info.height
        ),
        None => println!("no selection"),
    }
}

fn report(doc: &Document, debug: bool) {
    let Some(image) = doc.current_image() else {
        return;
    };
    println!("{}x{}", image.width(), image.height());

    if !debug {
        return;
    }
    if let Some(history) = doc.history() {
        eprintln!("history ({} entries):", history.len());
        for entry in history.entries() {
            eprintln!(
                "  #{:<3} {}x{}  quarter turns {}",
                entry.seq,
                entry.state.width(),
                entry.state.height(),
                entry.state.quarter_turns()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from(["imgez", "in.png", "--edge-tolerance", "8", "--max-history", "0"]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.edge_tolerance, 8.0);
        assert_eq!(config.max_history, Some(0));
        assert_eq!(config.jpeg_quality, 90);
    }

    #[test]
    fn test_inline_steps() {
        let cli = Cli::parse_from(["imgez", "in.png", "-s", "drag 0 0 5 5", "--step", "crop"]);
        let steps = load_steps(&cli).unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1], Step::Crop);
    }

    #[test]
    fn test_view_takes_two_values() {
        let cli = Cli::parse_from(["imgez", "in.png", "--view", "640", "480"]);
        assert_eq!(cli.view, Some(vec![640.0, 480.0]));
        assert!(Cli::try_parse_from(["imgez", "in.png", "--jpeg-quality", "0"]).is_err());
    }

    #[test]
    fn test_bad_inline_step() {
        let cli = Cli::parse_from(["imgez", "in.png", "--step", "explode"]);
        assert!(load_steps(&cli).is_err());
    }

    #[test]
    fn test_run_step_reports_command_errors() {
        let mut doc = Document::default();
        let mut clipboard = SystemClipboard::new();
        let result = run_step(&mut doc, &Step::Crop, &mut clipboard);
        assert!(matches!(result, Err(CommandError::NoImage)));
    }
}
