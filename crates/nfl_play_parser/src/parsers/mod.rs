pub mod classifier;
pub mod extractor;
pub mod patterns;
pub mod play_parser;
pub mod resolver;
pub mod segmenter;

pub use classifier::classify;
pub use extractor::{extract, extract_all, leading_annotations};
pub use play_parser::{assemble, is_placeholder, parse, parse_plays, parse_plays_with_policy, parse_with_policy, BatchReport};
pub use resolver::{resolve, resolve_with_policy};
pub use segmenter::{segment, Fragments, RawFragment};
