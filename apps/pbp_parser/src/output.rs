use crate::config::OutputFormat;
use crate::error::AppError;
use nfl_play_parser::{BatchReport, ParseError, CSV_ATTRIBUTES};
use std::io::Write;

const NA: &str = "NA";

pub fn write_report<W: Write>(writer: W, report: &BatchReport, descriptions: &[String], format: OutputFormat) -> Result<(), AppError> {
	match format {
		OutputFormat::Csv => write_csv(writer, report, descriptions),
		OutputFormat::Jsonl => write_jsonl(writer, report, descriptions),
	}
}

/// One row per segment: `play_num,segment_num,<attributes>,description`.
/// Blank descriptions and placeholders yield no rows; a malformed one gets a
/// single `ERROR` row.
fn write_csv<W: Write>(writer: W, report: &BatchReport, descriptions: &[String]) -> Result<(), AppError> {
	let mut writer = csv::Writer::from_writer(writer);
	let mut header = vec!["play_num", "segment_num"];
	header.extend(CSV_ATTRIBUTES);
	header.push("description");
	writer.write_record(&header)?;

	for (play_num, (result, description)) in report.results.iter().zip(descriptions).enumerate() {
		let play_num = (play_num + 1).to_string();
		match result {
			Ok(play) => {
				for segment in &play.segments {
					let mut row = vec![play_num.clone(), (segment.index + 1).to_string()];
					row.extend(segment.csv_record());
					row.push(description.clone());
					writer.write_record(&row)?;
				}
			}
			Err(ParseError::EmptyInput) => {}
			Err(error @ ParseError::MalformedInput { .. }) => {
				let mut row = vec![play_num, NA.to_string(), "ERROR".to_string()];
				row.extend(std::iter::repeat(NA.to_string()).take(CSV_ATTRIBUTES.len() - 1));
				row.push(format!("{error}: {description}"));
				writer.write_record(&row)?;
			}
		}
	}
	writer.flush()?;
	Ok(())
}

fn write_jsonl<W: Write>(mut writer: W, report: &BatchReport, descriptions: &[String]) -> Result<(), AppError> {
	for (result, description) in report.results.iter().zip(descriptions) {
		match result {
			Ok(play) => serde_json::to_writer(&mut writer, play)?,
			Err(ParseError::EmptyInput) => continue,
			Err(error) => serde_json::to_writer(&mut writer, &serde_json::json!({ "description": description, "error": error.to_string() }))?,
		}
		writeln!(writer)?;
	}
	writer.flush()?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use nfl_play_parser::parse_plays;

	fn render(descriptions: &[&str], format: OutputFormat) -> String {
		let descriptions: Vec<String> = descriptions.iter().map(ToString::to_string).collect();
		let report = parse_plays(&descriptions);
		let mut buffer = Vec::new();
		write_report(&mut buffer, &report, &descriptions, format).unwrap();
		String::from_utf8(buffer).unwrap()
	}

	#[test]
	fn test_csv_rows() {
		let output = render(
			&["J.Smith pass intercepted by D.Lee, returned 20 yards", "", "J.Smith to DEN 30 (T.Brown"],
			OutputFormat::Csv,
		);
		let lines: Vec<&str> = output.lines().collect();
		assert_eq!(lines.len(), 4);
		assert!(lines[0].starts_with("play_num,segment_num,type,action,primary_name,yardage"));
		assert!(lines[0].ends_with(",reversed,description"));
		assert!(lines[1].starts_with("1,1,PRIMARY_ACTION,Pass,J.Smith,NA,"));
		assert!(lines[2].starts_with("1,2,TURNOVER_RETURN,NA,D.Lee,20,"));
		assert!(lines[3].starts_with("3,NA,ERROR,NA,"));
		assert!(lines[3].contains("unclosed parenthesis"));
	}

	#[test]
	fn test_jsonl_rows() {
		let output = render(&["J.Smith rushed for 5 yards.", "", "J.Smith to DEN 30 (T.Brown"], OutputFormat::Jsonl);
		let rows: Vec<serde_json::Value> = output.lines().map(|line| serde_json::from_str(line).unwrap()).collect();
		assert_eq!(rows.len(), 2);
		assert_eq!(rows[0]["outcome"]["net_yards"], 5);
		assert_eq!(rows[1]["description"], "J.Smith to DEN 30 (T.Brown");
	}
}
