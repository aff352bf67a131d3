//! Score command grammar for voice transcripts.

use crate::error::{VoiceError, VoiceResult};

/// Keyword every spoken score command starts with.
const COMMAND_WORD: &str = "count";

/// Parse a spoken transcript into a visit total.
///
/// The grammar is two tokens, case-insensitive, surrounding whitespace
/// ignored: `count <integer>` or the literal `count zero`. Anything else
/// fails to parse. Range checking is the caller's job; this only extracts
/// the number.
pub fn parse_score_command(transcript: &str) -> VoiceResult<u32> {
    let trimmed = transcript.trim();
    let mut words = trimmed.split_whitespace();
    let keyword = words.next().unwrap_or("");
    let value = words.next();
    if !keyword.eq_ignore_ascii_case(COMMAND_WORD) || words.next().is_some() {
        return Err(VoiceError::Malformed(trimmed.to_string()));
    }
    let Some(value) = value else {
        return Err(VoiceError::Malformed(trimmed.to_string()));
    };
    if value.eq_ignore_ascii_case("zero") {
        return Ok(0);
    }
    value
        .parse()
        .map_err(|_| VoiceError::NotANumber(value.to_string()))
}
