//! Recognition-session lifecycle around a speech backend.
//!
//! The backend captures one utterance per listen cycle; the host feeds the
//! resulting platform events into [`VoiceListener`], which forwards
//! transcripts to the armed handler and keeps the cycle alive in
//! continuous mode. Everything is synchronous: each event is handled to
//! completion before the next arrives.

use tracing::debug;

/// Handler invoked with each recognized transcript.
pub type TranscriptHandler = Box<dyn FnMut(&str)>;

/// An external speech-to-text engine, driven one listen cycle at a time.
pub trait SpeechBackend {
    /// Begin capturing one utterance.
    fn listen(&mut self);

    /// Abort any capture in progress.
    fn cancel(&mut self);

    /// Whether the host platform can capture speech at all.
    fn is_supported(&self) -> bool;
}

/// Stand-in backend for hosts without speech capture.
///
/// Never delivers a transcript and reports itself unsupported, so a host
/// can wire the voice path unconditionally and let the capability probe
/// decide whether to surface it.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedBackend;

impl SpeechBackend for UnsupportedBackend {
    fn listen(&mut self) {}

    fn cancel(&mut self) {}

    fn is_supported(&self) -> bool {
        false
    }
}

/// Drives a [`SpeechBackend`] and forwards recognized transcripts to a
/// handler.
///
/// [`start`](Self::start) arms the handler and begins a listen cycle. The
/// host then feeds platform events in through
/// [`transcript`](Self::transcript) and
/// [`utterance_ended`](Self::utterance_ended); in continuous mode every
/// end-of-utterance starts the next listen cycle until
/// [`stop`](Self::stop).
pub struct VoiceListener<B> {
    backend: B,
    handler: Option<TranscriptHandler>,
    continuous: bool,
    active: bool,
}

impl<B: SpeechBackend> VoiceListener<B> {
    /// Wrap a backend. Nothing is captured until [`start`](Self::start).
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            handler: None,
            continuous: false,
            active: false,
        }
    }

    /// Whether the host platform supports voice input at all.
    pub fn is_supported(&self) -> bool {
        self.backend.is_supported()
    }

    /// Whether a listening session is currently armed.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Arm `handler` and begin listening.
    ///
    /// In continuous mode the listener re-arms the backend after every
    /// utterance until [`stop`](Self::stop); otherwise a single utterance
    /// is captured.
    pub fn start(&mut self, handler: impl FnMut(&str) + 'static, continuous: bool) {
        self.handler = Some(Box::new(handler));
        self.continuous = continuous;
        self.active = true;
        debug!(continuous, "voice session started");
        self.backend.listen();
    }

    /// End the listening session. Continuous restarts cease immediately.
    pub fn stop(&mut self) {
        self.continuous = false;
        self.active = false;
        self.backend.cancel();
        debug!("voice session stopped");
    }

    /// Feed one recognized transcript in from the platform.
    ///
    /// Each call is an independent, atomic event; the armed handler decides
    /// what the text means.
    pub fn transcript(&mut self, text: &str) {
        if let Some(handler) = self.handler.as_mut() {
            handler(text);
        }
    }

    /// Signal that the current listen cycle ended naturally.
    ///
    /// Restarts the backend in continuous mode; otherwise the session goes
    /// inactive until the next [`start`](Self::start).
    pub fn utterance_ended(&mut self) {
        if self.continuous {
            debug!("listen cycle restarted");
            self.backend.listen();
        } else {
            self.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct CountingBackend {
        listens: Rc<Cell<usize>>,
        cancels: Rc<Cell<usize>>,
    }

    impl SpeechBackend for CountingBackend {
        fn listen(&mut self) {
            self.listens.set(self.listens.get() + 1);
        }

        fn cancel(&mut self) {
            self.cancels.set(self.cancels.get() + 1);
        }

        fn is_supported(&self) -> bool {
            true
        }
    }

    #[test]
    fn start_begins_a_listen_cycle() {
        let backend = CountingBackend::default();
        let listens = backend.listens.clone();
        let mut listener = VoiceListener::new(backend);
        assert!(!listener.is_active());

        listener.start(|_| {}, false);
        assert!(listener.is_active());
        assert_eq!(listens.get(), 1);
    }

    #[test]
    fn transcripts_reach_the_handler() {
        let heard = Rc::new(RefCell::new(Vec::new()));
        let sink = heard.clone();
        let mut listener = VoiceListener::new(CountingBackend::default());
        listener.start(move |text| sink.borrow_mut().push(text.to_string()), true);

        listener.transcript("count 60");
        listener.transcript("count 45");
        assert_eq!(*heard.borrow(), ["count 60", "count 45"]);
    }

    #[test]
    fn continuous_mode_restarts_after_each_utterance() {
        let backend = CountingBackend::default();
        let listens = backend.listens.clone();
        let mut listener = VoiceListener::new(backend);
        listener.start(|_| {}, true);

        listener.utterance_ended();
        listener.utterance_ended();
        assert_eq!(listens.get(), 3);
        assert!(listener.is_active());
    }

    #[test]
    fn single_shot_does_not_restart() {
        let backend = CountingBackend::default();
        let listens = backend.listens.clone();
        let mut listener = VoiceListener::new(backend);
        listener.start(|_| {}, false);

        listener.utterance_ended();
        assert_eq!(listens.get(), 1);
        assert!(!listener.is_active());
    }

    #[test]
    fn stop_prevents_further_restarts() {
        let backend = CountingBackend::default();
        let listens = backend.listens.clone();
        let cancels = backend.cancels.clone();
        let mut listener = VoiceListener::new(backend);
        listener.start(|_| {}, true);
        listener.utterance_ended();

        listener.stop();
        assert!(!listener.is_active());
        assert_eq!(cancels.get(), 1);

        listener.utterance_ended();
        assert_eq!(listens.get(), 2);
    }

    #[test]
    fn transcript_without_handler_is_noop() {
        let mut listener = VoiceListener::new(CountingBackend::default());
        listener.transcript("count 60");
    }

    #[test]
    fn session_can_start_again_after_stop() {
        let backend = CountingBackend::default();
        let listens = backend.listens.clone();
        let mut listener = VoiceListener::new(backend);
        listener.start(|_| {}, true);
        listener.stop();

        listener.start(|_| {}, false);
        assert!(listener.is_active());
        assert_eq!(listens.get(), 2);
    }

    #[test]
    fn unsupported_backend_reports_itself() {
        let listener = VoiceListener::new(UnsupportedBackend);
        assert!(!listener.is_supported());
    }
}
