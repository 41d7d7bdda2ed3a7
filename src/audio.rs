//! Gesture-gated playback coordination
//!
//! Mobile browsers refuse to start audio outside a direct user gesture,
//! while the experience wants music running from the intro tap onward.
//! This coordinator reconciles the two with three flags and pure
//! transitions; the caller owns the actual audio element and acts on the
//! returned [`PlaybackAction`], so the machine is testable without an
//! audio device.
//!
//! Contract:
//! - `request_play()` before the first gesture only arms `pending_play`
//! - the first gesture calls `resume()`, which marks the interaction and
//!   starts any deferred playback
//! - once playing, nothing here ever pauses playback; only volume moves

/// What the caller should do with its audio element after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackAction {
    /// Nothing to do
    None,
    /// Start playback now
    Start,
}

#[derive(Debug)]
pub struct AudioUnlock {
    user_interacted: bool,
    is_playing: bool,
    pending_play: bool,
    volume: f32,
}

/// Default music volume (40%)
const DEFAULT_VOLUME: f32 = 0.4;

impl Default for AudioUnlock {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioUnlock {
    pub fn new() -> Self {
        AudioUnlock {
            user_interacted: false,
            is_playing: false,
            pending_play: false,
            volume: DEFAULT_VOLUME,
        }
    }

    /// Ask for music. Before the first gesture this only arms the
    /// deferred-play flag; afterwards it starts playback unless already
    /// playing.
    pub fn request_play(&mut self) -> PlaybackAction {
        if !self.user_interacted {
            self.pending_play = true;
            return PlaybackAction::None;
        }
        if self.is_playing {
            return PlaybackAction::None;
        }
        PlaybackAction::Start
    }

    /// First qualifying pointer/key event. Marks the interaction (sticky
    /// once set) and releases any deferred playback.
    pub fn resume(&mut self) -> PlaybackAction {
        self.user_interacted = true;
        if self.pending_play && !self.is_playing {
            self.pending_play = false;
            return PlaybackAction::Start;
        }
        PlaybackAction::None
    }

    /// The audio element confirmed playback started.
    pub fn playback_started(&mut self) {
        self.is_playing = true;
    }

    /// The audio element rejected playback. Re-arms the deferred flag so
    /// the next gesture retries.
    pub fn playback_failed(&mut self) {
        self.is_playing = false;
        self.pending_play = true;
    }

    /// Volume for the presentation layer to animate, clamped to 0..=1.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn user_interacted(&self) -> bool {
        self.user_interacted
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn pending_play(&self) -> bool {
        self.pending_play
    }
}
