//! Lantern CLI entry point.

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use lantern_parser::stdlib;
use lantern_runtime::{Repl, RuntimeConfig, Session, demo, logging};

/// Options from the command line.
#[derive(Default)]
struct CliArgs {
    batch: Option<PathBuf>,
    show_help: bool,
    show_version: bool,
    trace: bool,
    no_banner: bool,
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliArgs, Box<dyn std::error::Error>> {
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => cli.show_help = true,
            "-V" | "--version" => cli.show_version = true,
            "--trace" => cli.trace = true,
            "--no-banner" => cli.no_banner = true,
            "-b" | "--batch" => {
                i += 1;
                let path = args.get(i).ok_or("--batch requires a file")?;
                cli.batch = Some(PathBuf::from(path));
            }
            "--seed" => {
                i += 1;
                let raw = args.get(i).ok_or("--seed requires a value")?;
                cli.seed = Some(
                    raw.parse()
                        .map_err(|_| format!("invalid --seed value: {raw}"))?,
                );
            }
            arg => return Err(format!("unknown option: {arg}").into()),
        }
        i += 1;
    }

    Ok(cli)
}

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }
    if cli.show_version {
        println!("lantern {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = RuntimeConfig::from_env();
    if cli.trace {
        config = config.with_log_filter("lantern_parser=trace,lantern_runtime=trace");
    }
    if cli.no_banner || cli.batch.is_some() {
        config = config.without_banner();
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    logging::init(&config.log_filter)?;

    let demo = demo::build(config.seed)?;
    let mut dispatcher = stdlib::dispatcher()?;
    if !config.stop_words {
        dispatcher.vocabulary_mut().clear_stop_words();
    }
    let session = Session::new(demo.world, dispatcher)
        .with_ticks_per_command(config.ticks_per_command);

    let mut repl = Repl::new(session, demo.player)?.with_prompt(config.prompt.clone());
    if !config.banner {
        repl = repl.without_banner();
    }

    match cli.batch {
        Some(path) => {
            let file = File::open(&path)
                .map_err(|e| format!("cannot open {}: {e}", path.display()))?;
            repl.run_batch(BufReader::new(file))?;
        }
        None => repl.run()?,
    }
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mLantern\x1b[0m - Text adventure with a backtracking command parser

\x1b[1mUSAGE:\x1b[0m
    lantern [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help          Print help information
    -V, --version       Print version information
    -b, --batch FILE    Run the commands in FILE and exit
    --no-banner         Skip the welcome banner
    --seed N            Seed for combat rolls
    --trace             Log parser and session decisions to stderr

\x1b[1mENVIRONMENT:\x1b[0m
    LANTERN_PROMPT              Prompt string (default \"> \")
    LANTERN_LOG                 tracing filter (default \"warn\"; RUST_LOG wins)
    LANTERN_TICKS_PER_COMMAND   Ticks that pass per command (default 1)
    LANTERN_NO_BANNER           Set to 1 to skip the banner
    LANTERN_SEED                Seed for combat rolls

\x1b[1mEXAMPLES:\x1b[0m
    lantern                     Play in the sample cellar
    lantern -b walkthrough.txt  Replay a script
    lantern --trace             Watch the dispatcher backtrack

\x1b[1mIN THE GAME:\x1b[0m
    help                 List the commands the parser knows
    quit                 Leave
    Ctrl+D               Leave
    Ctrl+C               Discard the current line"
    );
}
