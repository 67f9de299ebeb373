use kickoff_core::{Side, Vector2};

use crate::game::Match;

/// Input from one human side for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamInput {
    /// Requested direction of travel. Each component is `-1`, `0` or `1`; the
    /// controlled player scales it by its own speed.
    pub movement: Vector2,
    /// Whether shoot was pressed this frame. Only true on the frame the button goes
    /// down, never while it is held.
    pub shoot: bool,
}

impl TeamInput {
    pub fn idle() -> Self {
        Self {
            movement: Vector2::zeros(),
            shoot: false,
        }
    }

    pub fn new(movement: Vector2, shoot: bool) -> Self {
        Self { movement, shoot }
    }
}

impl Default for TeamInput {
    fn default() -> Self {
        Self::idle()
    }
}

/// Input from both sides for a single frame. CPU sides ignore theirs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub teams: [TeamInput; 2],
}

impl FrameInput {
    /// No movement and no shots from either side.
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the input of one side.
    pub fn with(mut self, side: Side, input: TeamInput) -> Self {
        self.teams[side.index()] = input;
        self
    }

    pub fn side(&self, side: Side) -> &TeamInput {
        &self.teams[side.index()]
    }

    /// Collect this frame's input from the sources attached to each side. Sides
    /// without a source stay idle.
    pub fn poll(sources: &mut [Option<Box<dyn InputSource>>; 2], game: &Match) -> Self {
        let mut input = Self::none();
        for side in Side::ALL {
            if let Some(source) = sources[side.index()].as_mut() {
                input.teams[side.index()] = source.poll(side, game);
            }
        }
        input
    }
}

/// Something that drives a human side: a keyboard, a gamepad, a script, or a bot.
///
/// Sources are polled exactly once per frame, before the match is stepped.
pub trait InputSource {
    fn poll(&mut self, side: Side, game: &Match) -> TeamInput;
}

/// Turns a held button into a single press event.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTrigger {
    held: bool,
}

impl EdgeTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current button state. Returns `true` only when the button was not
    /// held at the previous call.
    pub fn update(&mut self, held: bool) -> bool {
        let pressed = held && !self.held;
        self.held = held;
        pressed
    }
}

/// The buttons of one controller that are held down right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
}

impl HeldKeys {
    /// Movement requested by the direction keys. Left wins over right and up wins
    /// over down when both are held.
    pub fn movement(&self) -> Vector2 {
        let dx = if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        };
        let dy = if self.up {
            -1.0
        } else if self.down {
            1.0
        } else {
            0.0
        };
        Vector2::new(dx, dy)
    }
}

/// An input source backed by button state, e.g. a keyboard. The caller updates the
/// held keys whenever it reads the device.
#[derive(Debug, Clone, Default)]
pub struct ButtonInput {
    keys: HeldKeys,
    shoot: EdgeTrigger,
}

impl ButtonInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_keys(&mut self, keys: HeldKeys) {
        self.keys = keys;
    }

    pub fn keys(&self) -> HeldKeys {
        self.keys
    }
}

impl InputSource for ButtonInput {
    fn poll(&mut self, _side: Side, _game: &Match) -> TeamInput {
        TeamInput {
            movement: self.keys.movement(),
            shoot: self.shoot.update(self.keys.shoot),
        }
    }
}
