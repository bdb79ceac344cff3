//! Editing scripts: one pointer event or command per line.
//!
//! ```text
//! # select, then crop
//! view 1024 768
//! down 100 100
//! move 300 400
//! up 300 400
//! dblclick 200 200
//! rotate cw
//! save out.png
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use imgez_core::{Point, RotateDirection};

/// One scripted input.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Down(Point),
    Move(Point),
    Up(Point),
    DoubleClick(Point),
    /// Down, move and up in one line.
    Drag(Point, Point),
    Hover(Point),
    View(f64, f64),
    Crop,
    Rotate(RotateDirection),
    Undo,
    Reset,
    Clear,
    Copy,
    Save(PathBuf),
    Info,
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or_else(|| anyhow!("empty step"))?;
        let args: Vec<&str> = words.collect();

        let step = match command.to_ascii_lowercase().as_str() {
            "down" => Step::Down(point(&args)?),
            "move" => Step::Move(point(&args)?),
            "up" => Step::Up(point(&args)?),
            "dblclick" => Step::DoubleClick(point(&args)?),
            "hover" => Step::Hover(point(&args)?),
            "drag" => {
                let n = numbers(&args, 4)?;
                Step::Drag(Point::new(n[0], n[1]), Point::new(n[2], n[3]))
            }
            "view" => {
                let n = numbers(&args, 2)?;
                Step::View(n[0], n[1])
            }
            "crop" => no_args(&args, Step::Crop)?,
            "rotate" => match args.as_slice() {
                ["cw"] | [] => Step::Rotate(RotateDirection::Clockwise),
                ["ccw"] => Step::Rotate(RotateDirection::CounterClockwise),
                _ => bail!("rotate takes `cw` or `ccw`"),
            },
            "undo" => no_args(&args, Step::Undo)?,
            "reset" => no_args(&args, Step::Reset)?,
            "clear" | "esc" => no_args(&args, Step::Clear)?,
            "copy" => no_args(&args, Step::Copy)?,
            "info" => no_args(&args, Step::Info)?,
            "save" => match args.as_slice() {
                [path] => Step::Save(PathBuf::from(path)),
                _ => bail!("save takes one path"),
            },
            other => bail!("unknown step `{other}`"),
        };
        Ok(step)
    }
}

/// Parse a whole script. Blank lines and `#` comments are skipped.
pub fn parse_script(text: &str) -> Result<Vec<Step>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.split('#').next().unwrap_or("").trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(number, line)| line.parse().with_context(|| format!("line {number}: `{line}`")))
        .collect()
}

fn point(args: &[&str]) -> Result<Point> {
    let n = numbers(args, 2)?;
    Ok(Point::new(n[0], n[1]))
}

fn numbers(args: &[&str], count: usize) -> Result<Vec<f64>> {
    if args.len() != count {
        bail!("expected {count} numbers, got {}", args.len());
    }
    args.iter()
        .map(|a| a.parse::<f64>().with_context(|| format!("`{a}` is not a number")))
        .collect()
}

fn no_args(args: &[&str], step: Step) -> Result<Step> {
    if args.is_empty() {
        Ok(step)
    } else {
        bail!("unexpected arguments: {}", args.join(" "))
    }
}
