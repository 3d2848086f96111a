//! Display intents
//!
//! Requests from outside the render loop, delivered through a bounded
//! channel and applied between ticks.

use heapless::String;

#[cfg(feature = "log")]
use log::{info, warn};

use crate::channel::{Channel, Receiver, Sender};
use crate::error::Result;
use crate::frame::MAX_DIGITS;
use crate::glyph;

/// Text shown on the display, one symbol per digit
pub type Text = String<MAX_DIGITS>;

/// What the display shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Face {
    /// Current time of day
    #[default]
    Time,
    /// Fixed text
    Text(Text),
    /// Everything dark
    Blank,
}

/// Request to change what the display shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayIntent {
    /// Show the time of day
    ShowTime,
    /// Show fixed text
    ShowText(Text),
    /// Turn every segment off
    Blank,
    /// Blank the display and stop the loop
    Stop,
}

impl DisplayIntent {
    /// Build a text intent
    ///
    /// Symbols past the digit limit are dropped. Fails with
    /// [`crate::Error::UnknownGlyph`] if a kept symbol cannot be displayed.
    pub fn text(message: &str) -> Result<Self> {
        let mut text = Text::new();
        for symbol in message.chars() {
            glyph::lookup(symbol)?;
            if text.push(symbol).is_err() {
                break;
            }
        }
        Ok(Self::ShowText(text))
    }
}

/// Type alias for intent sender
pub type IntentSender<'a, const SIZE: usize> = Sender<'a, DisplayIntent, SIZE>;

/// Type alias for intent receiver
pub type IntentReceiver<'a, const SIZE: usize> = Receiver<'a, DisplayIntent, SIZE>;

/// Type alias for the intent channel
pub type IntentChannel<const SIZE: usize> = Channel<DisplayIntent, SIZE>;

/// Applies queued intents to the current face
pub struct IntentProcessor<'a, const SIZE: usize> {
    intents: IntentReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> IntentProcessor<'a, SIZE> {
    pub const fn new(intents: IntentReceiver<'a, SIZE>) -> Self {
        Self { intents }
    }

    /// Drain all queued intents (non-blocking)
    ///
    /// Returns `true` once a stop was requested. Intents queued after the
    /// stop are discarded.
    pub fn process_pending(&mut self, face: &mut Face) -> bool {
        while let Some(intent) = self.intents.try_receive() {
            match intent {
                DisplayIntent::ShowTime => *face = Face::Time,
                DisplayIntent::ShowText(text) => Self::show_text(face, text),
                DisplayIntent::Blank => *face = Face::Blank,
                DisplayIntent::Stop => {
                    #[cfg(feature = "log")]
                    info!("stop requested");
                    while self.intents.try_receive().is_some() {}
                    *face = Face::Blank;
                    return true;
                }
            }
        }
        false
    }

    /// Switch to text, keeping the current face if any symbol is unsupported
    fn show_text(face: &mut Face, text: Text) {
        match text.chars().try_for_each(|symbol| glyph::lookup(symbol).map(drop)) {
            Ok(()) => {
                #[cfg(feature = "log")]
                info!("showing text {:?}", text.as_str());
                *face = Face::Text(text);
            }
            Err(_err) => {
                #[cfg(feature = "log")]
                warn!("rejected text {:?}: {}", text.as_str(), _err);
            }
        }
    }
}
