//! Spin event stream and the observers that react to it.

use crate::models::Entry;

/// Something that happened during a spin.
#[derive(Debug, Clone, PartialEq)]
pub enum SpinEvent {
    /// A session was created. Any previous winner is cleared.
    Started { candidates: usize, target: f64 },
    /// The rotation passed a pin boundary.
    PinCrossed { pin: usize },
    /// The wheel came to rest on `winner`.
    Settled { index: usize, winner: Entry },
}

/// Receives every [`SpinEvent`] in order.
pub trait SpinObserver {
    fn on_event(&mut self, event: &SpinEvent);
}

impl SpinObserver for () {
    fn on_event(&mut self, _event: &SpinEvent) {}
}

impl SpinObserver for Vec<SpinEvent> {
    fn on_event(&mut self, event: &SpinEvent) {
        self.push(event.clone());
    }
}

impl<A: SpinObserver, B: SpinObserver> SpinObserver for (A, B) {
    fn on_event(&mut self, event: &SpinEvent) {
        self.0.on_event(event);
        self.1.on_event(event);
    }
}

impl<T: SpinObserver + ?Sized> SpinObserver for &mut T {
    fn on_event(&mut self, event: &SpinEvent) {
        (**self).on_event(event);
    }
}

// ── Audio ────────────────────────────────────────────────────────

/// A sound the frontend should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Click,
    Fanfare,
    StopFanfare,
}

/// Plays cues. Fire-and-forget.
pub trait CueSink {
    fn play(&mut self, cue: Cue);
}

impl CueSink for Vec<Cue> {
    fn play(&mut self, cue: Cue) {
        self.push(cue);
    }
}

/// Maps spin events to audio cues, honoring the click and fanfare toggles.
#[derive(Debug)]
pub struct AudioCues<S> {
    sink: S,
    play_clicks: bool,
    play_fanfare: bool,
}

impl<S: CueSink> AudioCues<S> {
    pub fn new(sink: S, play_clicks: bool, play_fanfare: bool) -> Self {
        Self {
            sink,
            play_clicks,
            play_fanfare,
        }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: CueSink> SpinObserver for AudioCues<S> {
    fn on_event(&mut self, event: &SpinEvent) {
        match event {
            SpinEvent::Started { .. } if self.play_fanfare => self.sink.play(Cue::StopFanfare),
            SpinEvent::PinCrossed { .. } if self.play_clicks => self.sink.play(Cue::Click),
            SpinEvent::Settled { .. } if self.play_fanfare => self.sink.play(Cue::Fanfare),
            _ => {}
        }
    }
}

// ── Selection callback ───────────────────────────────────────────

/// Told about the current winner: `None` when a spin starts, the entry when
/// it settles.
pub trait SelectionListener {
    fn on_selection(&mut self, winner: Option<&Entry>);
}

impl<F: FnMut(Option<&Entry>)> SelectionListener for F {
    fn on_selection(&mut self, winner: Option<&Entry>) {
        self(winner)
    }
}

/// Adapts a [`SelectionListener`] into a [`SpinObserver`].
#[derive(Debug)]
pub struct SelectionNotifier<L>(pub L);

impl<L: SelectionListener> SpinObserver for SelectionNotifier<L> {
    fn on_event(&mut self, event: &SpinEvent) {
        match event {
            SpinEvent::Started { .. } => self.0.on_selection(None),
            SpinEvent::Settled { winner, .. } => self.0.on_selection(Some(winner)),
            SpinEvent::PinCrossed { .. } => {}
        }
    }
}
