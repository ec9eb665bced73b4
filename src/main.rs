use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use gravity_four::boundary::{apply_with_outcome, MoveOutcome};
use gravity_four::config::AppConfig;
use gravity_four::game::{Board, Disk};

/// Apply a sequence of drops to a fresh board.
#[derive(Parser)]
#[command(name = "gravity-four", about = "Apply disk drops to a gravity board")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "gravity.toml")]
    config: PathBuf,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Columns to drop into, comma separated. Disks alternate starting with player 1.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    moves: Vec<isize>,

    /// Stop at the first rejected move and report why
    #[arg(long)]
    strict: bool,

    /// Player number (1 or 2) whose disk is dropped first
    #[arg(long, default_value_t = 1)]
    first_player: u8,

    /// Print a JSON report instead of a summary
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_filter: String,
}

#[derive(Debug, Serialize)]
struct MoveRecord {
    disk: Disk,
    column: isize,
    applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    row: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

#[derive(Debug, Serialize)]
struct Report {
    width: usize,
    height: usize,
    moves: Vec<MoveRecord>,
    column_heights: Vec<usize>,
    legal_columns: Vec<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_filter))
        .with_context(|| format!("parsing log filter '{}'", cli.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        app_config.board.width = width;
    }
    if let Some(height) = cli.height {
        app_config.board.height = height;
    }
    app_config.validate().context("validating board dimensions")?;

    let Some(first) = Disk::from_player_number(cli.first_player) else {
        bail!("unknown player {} (expected 1 or 2)", cli.first_player);
    };

    let mut board = app_config.build_board()?;
    let moves = play(&mut board, first, &cli.moves, cli.strict)?;

    let report = Report {
        width: board.width(),
        height: board.height(),
        column_heights: (0..board.width())
            .filter_map(|col| board.column_height(col))
            .collect(),
        legal_columns: board.legal_columns().collect(),
        moves,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let applied = report.moves.iter().filter(|m| m.applied).count();
        println!(
            "{}x{} board: {} of {} moves applied, column heights {:?}",
            report.width,
            report.height,
            applied,
            report.moves.len(),
            report.column_heights
        );
    }
    Ok(())
}

/// Drop disks column by column, alternating players after each applied move.
fn play(
    board: &mut Board,
    first: Disk,
    columns: &[isize],
    strict: bool,
) -> Result<Vec<MoveRecord>> {
    let mut disk = first;
    let mut records = Vec::with_capacity(columns.len());

    for &column in columns {
        let outcome = apply_with_outcome(board, disk, column);
        match &outcome {
            MoveOutcome::Applied { row } => {
                tracing::info!(disk = disk.name(), column, row, "move applied");
            }
            MoveOutcome::Rejected(reason) if strict => {
                bail!("{} dropping into column {column}: {reason}", disk.name());
            }
            MoveOutcome::Rejected(reason) => {
                tracing::info!(disk = disk.name(), column, %reason, "move rejected");
            }
        }

        let applied = outcome.is_applied();
        records.push(MoveRecord {
            disk,
            column,
            applied,
            row: outcome.row(),
            reason: outcome.rejection().map(ToString::to_string),
        });

        if applied {
            disk = disk.other();
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_alternates_on_applied_moves() {
        let mut board = Board::standard();
        let records = play(&mut board, Disk::Player1, &[3, -1, 3, 7, 4], false).unwrap();

        let applied: Vec<_> = records
            .iter()
            .map(|r| (r.disk, r.applied, r.row))
            .collect();
        assert_eq!(
            applied,
            vec![
                (Disk::Player1, true, Some(0)),
                (Disk::Player2, false, None),
                (Disk::Player2, true, Some(1)),
                (Disk::Player1, false, None),
                (Disk::Player1, true, Some(0)),
            ]
        );
        assert_eq!(board.column_height(3), Some(2));
        assert_eq!(
            records[1].reason.as_deref(),
            Some("column -1 is outside the board (width 7)")
        );
        assert_eq!(records[0].reason, None);
    }

    #[test]
    fn test_play_strict_reports_reason() {
        let mut board = Board::new(2, 1).unwrap();
        let err = play(&mut board, Disk::Player1, &[0, 0], true).unwrap_err();
        assert!(format!("{err:#}").contains("column 0 is full"));
        assert_eq!(board.disk_count(), 1);
    }

    #[test]
    fn test_play_starts_with_chosen_player() {
        let mut board = Board::standard();
        let first = Disk::from_player_number(2).unwrap();
        let records = play(&mut board, first, &[0, 0], false).unwrap();
        assert_eq!(records[0].disk, Disk::Player2);
        assert_eq!(records[1].disk, Disk::Player1);
        assert_eq!(records[1].row, Some(1));
    }

    #[test]
    fn test_cli_accepts_negative_columns() {
        let cli = Cli::try_parse_from(["gravity-four", "--moves", "-1,3,7"]).unwrap();
        assert_eq!(cli.moves, vec![-1, 3, 7]);
    }
}
