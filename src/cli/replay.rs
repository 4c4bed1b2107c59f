use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::parsing::script::{self, Command, ScriptLine};
use crate::scoreboard::{RankedMatch, Scoreboard, ScoreboardError};

#[derive(Args)]
pub struct ReplayArgs {
    /// Script of scoreboard commands, one per line
    /// Use '-' for stdin
    #[arg(required = true)]
    pub script: PathBuf,

    /// Report rejected commands on stderr and carry on with the rest
    #[arg(long)]
    pub keep_going: bool,
}

pub fn run(args: ReplayArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let commands = read_script(&args.script)?;

    if verbose {
        eprintln!("Loaded {} commands from {}", commands.len(), args.script.display());
    }

    let mut board = Scoreboard::new();
    let mut snapshots = 0;
    let mut rejected = 0;

    for ScriptLine { line, command } in &commands {
        match apply(&mut board, command) {
            Ok(Some(snapshot)) => {
                print_snapshot(&snapshot, format, snapshots > 0)?;
                snapshots += 1;
            }
            Ok(None) => {}
            Err(err) if args.keep_going => {
                rejected += 1;
                eprintln!("Line {line}: {err}");
            }
            Err(err) => {
                return Err(anyhow::Error::new(err).context(format!("Line {line} rejected")));
            }
        }
    }

    // Scripts without an explicit summary still report where they ended up
    if snapshots == 0 {
        let snapshot: Vec<RankedMatch> = board.summary().collect();
        print_snapshot(&snapshot, format, false)?;
    }

    if verbose {
        eprintln!(
            "Replayed {} commands ({} rejected), {} matches in progress",
            commands.len(),
            rejected,
            board.len()
        );
    }

    Ok(())
}

fn read_script(path: &Path) -> anyhow::Result<Vec<ScriptLine>> {
    use std::io::{self, Read};

    // Handle stdin
    if path.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(script::parse_script_text(&buffer)?);
    }

    script::parse_script_file(path)
        .with_context(|| format!("Failed to load script {}", path.display()))
}

/// Run one command; `summary` yields a snapshot to print
fn apply(
    board: &mut Scoreboard,
    command: &Command,
) -> Result<Option<Vec<RankedMatch>>, ScoreboardError> {
    match command {
        Command::Start { home, away } => {
            board.start_match(home, away)?;
        }
        Command::Update {
            home,
            away,
            home_score,
            away_score,
        } => {
            board.update_score(home, away, *home_score, *away_score)?;
        }
        Command::Finish { home, away } => {
            board.finish_match(home, away)?;
        }
        Command::Summary => return Ok(Some(board.summary().collect())),
    }
    Ok(None)
}

/// Print one summary snapshot.
///
/// In text format an empty board prints no lines at all; `separate` adds the
/// blank line that divides it from the previous snapshot. TSV always prints
/// its header, JSON an (possibly empty) array.
fn print_snapshot(
    snapshot: &[RankedMatch],
    format: OutputFormat,
    separate: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            if separate {
                println!();
            }
            for entry in snapshot {
                println!("{entry}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(snapshot)?),
        OutputFormat::Tsv => {
            if separate {
                println!();
            }
            println!("rank\thome_team\thome_score\taway_team\taway_score");
            for entry in snapshot {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    entry.rank,
                    entry.fixture.home_team,
                    entry.fixture.home_score,
                    entry.fixture.away_team,
                    entry.fixture.away_score,
                );
            }
        }
    }
    Ok(())
}
