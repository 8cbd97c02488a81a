mod config;
mod error;
mod input;
mod output;

use crate::config::Config;
use crate::error::AppError;
use anyhow::Context;
use clap::Parser;
use futures::future::join_all;
use nfl_play_parser::{parse_plays_with_policy, BatchReport, ResolverPolicy};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{filter::EnvFilter, fmt::format::JsonFields, util::SubscriberInitExt, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	dotenv::dotenv().ok();

	let config = Config::parse();
	init_tracing(&config)?;

	let policy = config.resolver_policy().context("could not load resolver policy")?;
	let descriptions = input::read_descriptions(&config.input_file, config.is_csv_input(), &config.description_column)?;
	info!(count = descriptions.len(), input = %config.input_file.display(), "loaded descriptions");

	let report = parse_in_chunks(&descriptions, config.chunk_size, Arc::new(policy)).await?;

	let writer: Box<dyn Write> = match &config.output_file {
		Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| format!("could not create {}", path.display()))?)),
		None => Box::new(BufWriter::new(io::stdout().lock())),
	};
	output::write_report(writer, &report, &descriptions, config.format)?;

	if report.malformed > 0 {
		warn!(malformed = report.malformed, "some descriptions could not be parsed");
	}
	info!(total = report.total, ok = report.ok, errors = report.errors(), "{report}");

	Ok(())
}

/// Parses on blocking workers, one chunk each, keeping input order.
async fn parse_in_chunks(descriptions: &[String], chunk_size: usize, policy: Arc<ResolverPolicy>) -> Result<BatchReport, AppError> {
	let tasks = descriptions.chunks(chunk_size.max(1)).map(|chunk| {
		let chunk = chunk.to_vec();
		let policy = Arc::clone(&policy);
		tokio::task::spawn_blocking(move || parse_plays_with_policy(&chunk, &policy))
	});

	let mut report = BatchReport::default();
	for partial in join_all(tasks).await {
		report.merge(partial?);
	}
	Ok(report)
}

pub fn init_tracing(config: &Config) -> Result<(), AppError> {
	use tracing_subscriber::layer::SubscriberExt;

	let filter = EnvFilter::try_new(config.rust_log.as_deref().unwrap_or("info"))?;

	tracing_subscriber::registry()
		.with(if config.log_json {
			Box::new(
				tracing_subscriber::fmt::layer()
					.with_writer(io::stderr)
					.fmt_fields(JsonFields::default())
					.event_format(tracing_subscriber::fmt::format().json().flatten_event(true).with_span_list(false))
					.with_filter(filter),
			) as Box<dyn Layer<_> + Send + Sync>
		} else {
			Box::new(tracing_subscriber::fmt::layer().with_writer(io::stderr).with_filter(filter))
		})
		.init();
	Ok(())
}
