//! Audio seam: the engine names sound effects, the host plays them.

use serde::{Deserialize, Serialize};

/// Sound effects the battle triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sound {
    /// A dragged card landed on a fusion slot.
    CardPlace,
    /// A round started.
    PlayCard,
    /// A shake phase began.
    CardAttack,
    Victory,
    Lose,
}

/// Sound trigger supplied by the host.
pub trait AudioSink {
    fn play(&mut self, sound: Sound);
}

/// Discards every sound.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _sound: Sound) {}
}

/// Records sounds in trigger order.
impl AudioSink for Vec<Sound> {
    fn play(&mut self, sound: Sound) {
        self.push(sound);
    }
}
