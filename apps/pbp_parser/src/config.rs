use crate::error::AppError;
use clap::{Parser, ValueEnum};
use nfl_play_parser::ResolverPolicy;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	/// One row per segment
	Csv,
	/// One JSON object per play
	Jsonl,
}

#[derive(Parser, Clone, Debug)]
#[command(author, version, about = "Parses play-by-play descriptions into segments and outcomes", long_about = None)]
pub struct Config {
	/// CSV file with a description column, or a text file with one description per line
	#[arg(long, env = "PBP_INPUT_FILE")]
	pub input_file: PathBuf,

	/// Where to write the results; standard output when omitted
	#[arg(long, env = "PBP_OUTPUT_FILE")]
	pub output_file: Option<PathBuf>,

	#[arg(long, env = "PBP_FORMAT", value_enum, default_value = "csv")]
	pub format: OutputFormat,

	/// Name of the CSV column holding the descriptions
	#[arg(long, env = "PBP_DESCRIPTION_COLUMN", default_value = "description")]
	pub description_column: String,

	/// JSON file with resolver tie-break settings
	#[arg(long, env = "PBP_POLICY_FILE")]
	pub policy: Option<PathBuf>,

	/// Team in possession, used to sign penalties either side can commit
	#[arg(long, env = "PBP_OFFENSE")]
	pub offense: Option<String>,

	/// Descriptions handed to one blocking worker
	#[arg(long, env = "PBP_CHUNK_SIZE", default_value = "512")]
	pub chunk_size: usize,

	/// Use JSON formatting for tracing
	#[arg(long, env = "LOG_JSON", default_value = "false")]
	pub log_json: bool,

	/// Log level
	#[arg(long, env = "RUST_LOG")]
	pub rust_log: Option<String>,
}

impl Config {
	pub fn resolver_policy(&self) -> Result<ResolverPolicy, AppError> {
		let mut policy = match &self.policy {
			Some(path) => {
				let file = File::open(path).map_err(|e| AppError::read_error(path, e))?;
				serde_json::from_reader(BufReader::new(file))?
			}
			None => ResolverPolicy::default(),
		};
		if let Some(offense) = &self.offense {
			policy = policy.with_offense(offense);
		}
		Ok(policy)
	}

	pub fn is_csv_input(&self) -> bool {
		self.input_file.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
	}
}
