use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
	#[error("Failed to read {path}: {source}")]
	Read { path: String, source: io::Error },

	#[error("Column {column} not found in {path}")]
	MissingColumn { column: String, path: String },

	#[error("Parser worker failed: {0}")]
	Worker(#[from] tokio::task::JoinError),

	#[error("Invalid log filter: {0}")]
	LogFilter(#[from] tracing_subscriber::filter::ParseError),

	#[error(transparent)]
	Io(#[from] io::Error),

	#[error(transparent)]
	Csv(#[from] csv::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

impl AppError {
	pub fn read_error(path: &Path, source: io::Error) -> Self {
		Self::Read {
			path: path.display().to_string(),
			source,
		}
	}

	pub fn missing_column(column: &str, path: &Path) -> Self {
		Self::MissingColumn {
			column: column.to_string(),
			path: path.display().to_string(),
		}
	}
}
