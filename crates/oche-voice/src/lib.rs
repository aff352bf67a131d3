//! Voice score entry: transcript parsing and the recognition-session
//! lifecycle around an external speech-to-text backend.
//!
//! Speech capture itself lives outside this crate. A backend delivers
//! transcript text; [`VoiceListener`] turns that stream into discrete
//! events for a handler and, in continuous mode, restarts the listen cycle
//! after every utterance until stopped. Pair [`parse_score_command`] with
//! the handler to turn transcripts into scores.

pub mod command;
pub mod error;
pub mod listener;

pub use command::parse_score_command;
pub use error::{VoiceError, VoiceResult};
pub use listener::{SpeechBackend, TranscriptHandler, UnsupportedBackend, VoiceListener};
