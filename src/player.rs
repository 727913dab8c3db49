use alloc::boxed::Box;
use alloc::string::String;

/// Interface implemented by anything that can take part in a game.
///
/// A Player is responsible for:
/// - Producing the next raw move token when asked
/// - Surfacing the messages the game sends it (board, prompts, results)
pub trait Player {
    /// Name used in prompts and end-of-game notices.
    fn name(&self) -> &str;

    /// Produce the next move token, e.g. `2b`. May block.
    fn step(&mut self) -> anyhow::Result<String>;

    /// Deliver a message to the player.
    fn receive(&mut self, message: &str);
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn step(&mut self) -> anyhow::Result<String> {
        (**self).step()
    }

    fn receive(&mut self, message: &str) {
        (**self).receive(message)
    }
}

impl<P: Player + ?Sized> Player for &mut P {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn step(&mut self) -> anyhow::Result<String> {
        (**self).step()
    }

    fn receive(&mut self, message: &str) {
        (**self).receive(message)
    }
}
