//! CSV writer for game recordings.
//!
//! One row per move:
//! game_id,turn,player,direction,score_after,spawn_value,spawn_col,spawn_row,
//! final_score,highest_tile,reached_max,board_0..board_{n*n-1}

use crate::game::side::Side;
use crate::recording::game_record::{GameRecord, MoveRecord, PlayerKind};
use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// CSV writer for game recordings with daily rotation
pub struct CsvWriter {
    base_dir: PathBuf,
    board_size: usize,
    current_file: Option<BufWriter<File>>,
    current_date: String,
}

impl CsvWriter {
    /// Create a new CSV writer for boards of the given side length
    pub fn new<P: AsRef<Path>>(base_dir: P, board_size: usize) -> std::io::Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;

        Ok(Self {
            base_dir,
            board_size,
            current_file: None,
            current_date: String::new(),
        })
    }

    /// Get the current date string for file naming
    fn get_date_string() -> String {
        Utc::now().format("%Y%m%d").to_string()
    }

    /// Get the file path for a given date
    fn get_file_path(&self, date: &str) -> PathBuf {
        self.base_dir.join(format!("games_{}.csv", date))
    }

    /// Ensure the file is open for the current date, with rotation
    fn ensure_file_open(&mut self) -> std::io::Result<()> {
        let today = Self::get_date_string();

        if self.current_date != today || self.current_file.is_none() {
            // Close current file if open
            if let Some(mut file) = self.current_file.take() {
                file.flush()?;
            }

            let file_path = self.get_file_path(&today);
            let file_exists = file_path.exists();

            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&file_path)?;

            let mut writer = BufWriter::new(file);

            // Write header if new file
            if !file_exists {
                Self::write_header(&mut writer, self.board_size)?;
            }

            self.current_file = Some(writer);
            self.current_date = today;
        }

        Ok(())
    }

    /// Write the CSV header
    fn write_header<W: Write>(writer: &mut W, board_size: usize) -> std::io::Result<()> {
        let mut header = String::from("game_id,turn,player,direction,score_after");
        header.push_str(",spawn_value,spawn_col,spawn_row");
        header.push_str(",final_score,highest_tile,reached_max");

        // Board columns (size * size cells, column-major)
        for i in 0..board_size * board_size {
            header.push_str(&format!(",board_{}", i));
        }

        writeln!(writer, "{}", header)
    }

    /// Write a single move record
    fn write_move<W: Write>(
        writer: &mut W,
        record: &GameRecord,
        move_record: &MoveRecord,
    ) -> std::io::Result<()> {
        let mut row = format!(
            "{},{},{},{},{}",
            record.game_id,
            move_record.turn,
            record.player,
            move_record.direction,
            move_record.score_after
        );

        row.push_str(&format!(
            ",{},{},{}",
            move_record.spawned.0, move_record.spawned.1, move_record.spawned.2
        ));

        row.push_str(&format!(
            ",{},{},{}",
            record.final_score,
            record.highest_tile,
            if record.reached_max_tile { 1 } else { 0 }
        ));

        for value in &move_record.board_after {
            row.push_str(&format!(",{}", value));
        }

        writeln!(writer, "{}", row)
    }

    /// Write a complete game record
    pub fn write_game(&mut self, record: &GameRecord) -> std::io::Result<()> {
        self.ensure_file_open()?;

        if let Some(ref mut writer) = self.current_file {
            for move_record in &record.moves {
                Self::write_move(writer, record, move_record)?;
            }
            writer.flush()?;
        }

        Ok(())
    }

    /// Flush any buffered data
    pub fn flush(&mut self) -> std::io::Result<()> {
        if let Some(ref mut writer) = self.current_file {
            writer.flush()?;
        }
        Ok(())
    }

    /// Close the writer
    pub fn close(&mut self) -> std::io::Result<()> {
        if let Some(mut writer) = self.current_file.take() {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for CsvWriter {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

fn parse_side(s: &str) -> Side {
    match s.to_lowercase().as_str() {
        "south" => Side::South,
        "east" => Side::East,
        "west" => Side::West,
        _ => Side::North,
    }
}

/// Load recorded moves from a CSV file
pub fn load_games_from_csv<P: AsRef<Path>>(path: P) -> crate::Result<Vec<LoadedMoveRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result?;

        let game_id = record.get(0).unwrap_or("").to_string();
        let turn: usize = record.get(1).unwrap_or("0").parse().unwrap_or(0);
        let player = PlayerKind::from_str(record.get(2).unwrap_or("Human"));
        let direction = parse_side(record.get(3).unwrap_or("North"));
        let score_after: u32 = record.get(4).unwrap_or("0").parse().unwrap_or(0);

        let spawn_value: u32 = record.get(5).unwrap_or("0").parse().unwrap_or(0);
        let spawn_col: usize = record.get(6).unwrap_or("0").parse().unwrap_or(0);
        let spawn_row: usize = record.get(7).unwrap_or("0").parse().unwrap_or(0);

        let final_score: u32 = record.get(8).unwrap_or("0").parse().unwrap_or(0);
        let highest_tile: u32 = record.get(9).unwrap_or("0").parse().unwrap_or(0);
        let reached_max: bool = record.get(10).unwrap_or("0") == "1";

        // The remaining columns are the flattened board.
        let board_after: Vec<u32> = (11..record.len())
            .map(|i| record.get(i).unwrap_or("0").parse().unwrap_or(0))
            .collect();

        records.push(LoadedMoveRecord {
            game_id,
            turn,
            player,
            direction,
            score_after,
            spawned: (spawn_value, spawn_col, spawn_row),
            final_score,
            highest_tile,
            reached_max,
            board_after,
        });
    }

    Ok(records)
}

/// A move record loaded from CSV
#[derive(Debug, Clone)]
pub struct LoadedMoveRecord {
    pub game_id: String,
    pub turn: usize,
    pub player: PlayerKind,
    pub direction: Side,
    pub score_after: u32,
    pub spawned: (u32, usize, usize),
    pub final_score: u32,
    pub highest_tile: u32,
    pub reached_max: bool,
    pub board_after: Vec<u32>,
}
