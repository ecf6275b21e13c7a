//! The contract a game fulfils to be driven by [`crate::GameRunner`].

use std::time::Duration;

use anyhow::Result;

use crate::input::InputMap;
use crate::types::Drawable;

/// A game driven one frame at a time.
///
/// Games declare their own `Action` type and bind keys to it through
/// [`Game::input_map`]; every bound action is therefore one the game handles.
/// The runner asks for [`Game::entities`] and [`Game::status_text`] once per
/// frame, but a game must give the same answers no matter how often or in
/// which order they are called.
pub trait Game: Sized {
    type Action: Copy;

    /// Build the game for a play area of `width` x `height` interior cells.
    fn new(width: u16, height: u16) -> Result<Self>;

    /// Everything to draw this frame, in drawing order.
    ///
    /// Every entity must lie inside the play area; cells outside it are
    /// clipped.
    fn entities(&self) -> Vec<Drawable>;

    fn input_map(&self) -> &InputMap<Self::Action>;

    /// Handle one bound action.
    fn apply(&mut self, action: Self::Action);

    /// Advance the simulation by one tick. Must not block.
    fn advance(&mut self) -> Result<()>;

    /// Printed once after the terminal is restored.
    fn exit_message(&self) -> String;

    /// Single line shown in the status box.
    fn status_text(&self) -> String;

    /// Pause before the next frame.
    fn frame_delay(&self) -> Duration;
}
