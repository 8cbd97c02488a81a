use crate::error::AppError;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Descriptions from a CSV file, taken from the named column.
pub fn read_csv<R: Read>(reader: R, column: &str, path: &Path) -> Result<Vec<String>, AppError> {
	let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
	let index = reader
		.headers()?
		.iter()
		.position(|header| header.trim().eq_ignore_ascii_case(column))
		.ok_or_else(|| AppError::missing_column(column, path))?;

	reader
		.records()
		.map(|record| Ok(record?.get(index).unwrap_or_default().to_string()))
		.collect()
}

/// One description per line.
pub fn read_lines<R: Read>(reader: R) -> Result<Vec<String>, AppError> {
	BufReader::new(reader).lines().map(|line| line.map_err(AppError::from)).collect()
}

pub fn read_descriptions(path: &Path, csv_input: bool, column: &str) -> Result<Vec<String>, AppError> {
	let file = File::open(path).map_err(|e| AppError::read_error(path, e))?;
	if csv_input {
		read_csv(file, column, path)
	} else {
		read_lines(file)
	}
}
