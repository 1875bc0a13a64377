//! Command line front end: resolve a widget state and print the styles.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use console::style;
use statestyle::{
    resolve_style, select_table, ColorMode, FragmentTable, StateSnapshot, StyleDescriptor,
    Stylesheet,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "statestyle",
    about = "Resolve the input chrome styles for a widget state",
    version
)]
struct Cli {
    /// The control cannot be interacted with
    #[arg(long)]
    disabled: bool,

    /// A validation error is attached to the value
    #[arg(long)]
    error: bool,

    /// A validation warning is attached to the value
    #[arg(long)]
    warning: bool,

    /// The control's popup is open
    #[arg(long)]
    open: bool,

    /// The control has focus
    #[arg(long)]
    focused: bool,

    /// YAML stylesheet with token and fragment overrides
    #[arg(long, value_name = "PATH")]
    stylesheet: Option<PathBuf>,

    /// Color mode for stylesheets with a dark section (detected when omitted)
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Print the selection and composed declarations as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Light,
    Dark,
}

impl From<ModeArg> for ColorMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Light => ColorMode::Light,
            ModeArg::Dark => ColorMode::Dark,
        }
    }
}

impl Cli {
    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::new()
            .with_disabled(self.disabled)
            .with_error(self.error)
            .with_warning(self.warning)
            .with_open(self.open)
            .with_focused(self.focused)
    }

    fn table(&self) -> Result<FragmentTable> {
        let sheet = match &self.stylesheet {
            Some(path) => {
                let yaml = std::fs::read_to_string(path)
                    .with_context(|| format!("reading stylesheet {}", path.display()))?;
                let sheet = Stylesheet::from_yaml(&yaml)
                    .with_context(|| format!("loading stylesheet {}", path.display()))?;
                Some(sheet)
            }
            None => None,
        };
        Ok(select_table(sheet.as_ref(), self.mode.map(ColorMode::from))?)
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_json(descriptor: &StyleDescriptor) -> Result<()> {
    let composed = descriptor.compose();
    let declarations: serde_json::Map<String, serde_json::Value> = composed
        .declarations()
        .iter()
        .map(|d| (d.property.clone(), serde_json::Value::String(d.value.clone())))
        .collect();
    let out = serde_json::json!({
        "selected": descriptor.selected().map(|c| c.fragment_name()),
        "fragments": descriptor.len(),
        "declarations": declarations,
        "css": composed.to_css(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let snapshot = cli.snapshot();
    let table = cli.table()?;
    let descriptor = resolve_style(&snapshot, &table)?;

    if cli.json {
        return print_json(&descriptor);
    }

    let header = match descriptor.selected() {
        Some(condition) => style(condition.to_string()).bold().cyan(),
        None => style("idle".to_string()).dim(),
    };
    println!("/* {} */", header);
    print!("{}", descriptor.to_css());
    Ok(())
}
