use nfl_play_parser::{parse, CSV_ATTRIBUTES};

fn main() {
	let descriptions = [
		"(14:32 - 1st) (Shotgun) K.Cousins pass deep right to K.Pitts to TB 36 for 32 yards (Z.McCollum).",
		"J.Smith rushed for 5 yards. PENALTY on DEN-T.Brown, Holding, 10 yards, offsetting.",
		"J.Smith pass intercepted by D.Lee, returned 20 yards",
	];

	println!("{}", CSV_ATTRIBUTES.join(","));
	for description in descriptions {
		match parse(description) {
			Ok(play) => {
				for segment in &play.segments {
					println!("{}", segment.csv_record().join(","));
				}
				println!("=> {:?} {} yards", play.outcome.kind, play.outcome.net_yards);
			}
			Err(e) => eprintln!("Failed to parse {description:?}: {e}"),
		}
	}
}
