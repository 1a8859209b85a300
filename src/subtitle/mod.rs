pub mod srt;

pub use srt::{format_timestamp, parse_srt, to_srt, to_srt_with_speakers};
