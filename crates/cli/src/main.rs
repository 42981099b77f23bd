mod command;
mod logging;
mod script;
mod session;
mod view;

use anyhow::Context;
use command::parse_command;
use icelatro_core::{RngState, RunState};
use icelatro_data::{load_rules_config, load_rules_config_or_default};
use session::{Flow, Session};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use tracing::info;
use view::UiLocale;

const ASSETS_DIR: &str = "assets";

#[derive(Debug, Clone)]
struct CliOptions {
    seed: Option<u64>,
    rules: Option<PathBuf>,
    script: Option<PathBuf>,
    json: bool,
    verbose: bool,
    locale: UiLocale,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut seed = std::env::var("ICELATRO_SEED")
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok());
    let mut locale_arg: Option<String> = std::env::var("ICELATRO_LANG").ok();
    let mut rules = None;
    let mut script = None;
    let mut json = false;
    let mut verbose = false;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--json" => json = true,
            "--verbose" | "-v" => verbose = true,
            "--lang" | "-l" => {
                if let Some(value) = args.get(idx + 1) {
                    locale_arg = Some(value.clone());
                    idx += 1;
                }
            }
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            "--rules" => {
                if let Some(value) = args.get(idx + 1) {
                    rules = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            "--script" => {
                if let Some(value) = args.get(idx + 1) {
                    script = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    CliOptions {
        seed,
        rules,
        script,
        json,
        verbose,
        locale: UiLocale::from_opt(locale_arg.as_deref()),
    }
}

fn build_run(options: &CliOptions, seed: Option<u64>) -> anyhow::Result<RunState> {
    let rules = match options.rules.as_deref() {
        Some(path) => load_rules_config(path)?,
        None => load_rules_config_or_default(Path::new(ASSETS_DIR)).context("load rules")?,
    };
    let rng = seed.map_or_else(RngState::from_entropy, RngState::from_seed);
    let run = RunState::from_rng(rules, rng);
    info!(seed = run.seed(), "run created");
    Ok(run)
}

fn run_script(options: &CliOptions, path: &Path) -> anyhow::Result<()> {
    let script = script::load_script(path)?;
    let run = build_run(options, options.seed.or(script.seed))?;
    let stdout = io::stdout();
    let mut session = Session::new(run, options.locale, options.json, stdout.lock());
    session.show_status()?;
    for action in &script.actions {
        session.apply_script_action(action)?;
    }
    Ok(())
}

fn run_interactive(options: &CliOptions) -> anyhow::Result<()> {
    let run = build_run(options, options.seed)?;
    let stdout = io::stdout();
    let mut session = Session::new(run, options.locale, options.json, stdout.lock());
    session.show_help()?;
    session.show_status()?;
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("read command")?;
        match parse_command(&line) {
            Ok(Some(command)) => {
                if session.apply(&command)? == Flow::Quit {
                    break;
                }
            }
            Ok(None) => {}
            Err(err) => eprintln!("{err}"),
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    logging::init_logging(options.verbose);
    match options.script.as_deref() {
        Some(path) => run_script(&options, path),
        None => run_interactive(&options),
    }
}
