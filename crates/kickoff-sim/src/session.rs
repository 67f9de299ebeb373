use kickoff_core::{DifficultyLevel, MatchOptions};
use serde::Serialize;

use crate::{
    game::Match,
    input::{EdgeTrigger, FrameInput, HeldKeys},
    sound::{NullSink, SoundEffect, SoundSink},
};

/// Top level state of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchState {
    /// The menu is shown over a CPU match.
    Menu,
    Play,
    GameOver,
}

/// Which menu screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MenuPage {
    NumPlayers,
    Difficulty,
}

/// Menu button presses of one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuInput {
    pub up: bool,
    pub down: bool,
    pub confirm: bool,
}

/// Turns held keys into menu presses. Shoot doubles as confirm.
#[derive(Debug, Clone, Default)]
pub struct MenuControls {
    up: EdgeTrigger,
    down: EdgeTrigger,
    confirm: EdgeTrigger,
}

impl MenuControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn poll(&mut self, keys: &HeldKeys) -> MenuInput {
        MenuInput {
            up: self.up.update(keys.up),
            down: self.down.update(keys.down),
            confirm: self.confirm.update(keys.shoot),
        }
    }
}

/// The game around the matches: the menu, the match being played and the game
/// over screen.
#[derive(Debug, Clone)]
pub struct Session {
    state: MatchState,
    menu_page: MenuPage,
    num_players: u8,
    difficulty: DifficultyLevel,
    game: Match,
    next_seed: u64,
}

impl Session {
    /// Start at the menu. Every match gets its own seed, counting up from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            state: MatchState::Menu,
            menu_page: MenuPage::NumPlayers,
            num_players: 1,
            difficulty: DifficultyLevel::Easy,
            game: Match::new(MatchOptions::cpu_only(seed)),
            next_seed: seed.wrapping_add(1),
        }
    }

    fn take_seed(&mut self) -> u64 {
        let seed = self.next_seed;
        self.next_seed = self.next_seed.wrapping_add(1);
        seed
    }

    /// Start playing a match with the given options, skipping the menu.
    pub fn start(&mut self, options: MatchOptions) {
        log::info!("Starting a {}-player match", options.human.iter().filter(|h| **h).count());
        self.state = MatchState::Play;
        self.game = Match::new(options);
    }

    /// Step the session by one frame. `menu` drives the menu and game over screens,
    /// `input` the match.
    pub fn update(&mut self, menu: &MenuInput, input: &FrameInput, sound: &mut dyn SoundSink) {
        match self.state {
            MatchState::Menu => {
                self.update_menu(menu, sound);
                if self.state == MatchState::Menu {
                    // The match behind the menu is silent
                    self.game.update(input, &mut NullSink);
                } else {
                    self.game.update(input, sound);
                }
            }
            MatchState::Play => {
                if self.game.is_finished() {
                    log::info!("Game over ({} - {})", self.game.scores()[0], self.game.scores()[1]);
                    self.state = MatchState::GameOver;
                } else {
                    self.game.update(input, sound);
                }
            }
            MatchState::GameOver => {
                if menu.confirm {
                    self.state = MatchState::Menu;
                    self.menu_page = MenuPage::NumPlayers;
                    let seed = self.take_seed();
                    self.game = Match::new(MatchOptions::cpu_only(seed));
                }
            }
        }
    }

    fn update_menu(&mut self, menu: &MenuInput, sound: &mut dyn SoundSink) {
        if menu.confirm {
            match self.menu_page {
                MenuPage::NumPlayers if self.num_players == 1 => {
                    self.menu_page = MenuPage::Difficulty;
                }
                MenuPage::NumPlayers => {
                    let seed = self.take_seed();
                    self.start(MatchOptions::two_players(seed));
                }
                MenuPage::Difficulty => {
                    let seed = self.take_seed();
                    self.start(MatchOptions::one_player(self.difficulty, seed));
                }
            }
            return;
        }

        let change = if menu.down {
            1
        } else if menu.up {
            -1
        } else {
            return;
        };

        sound.play_effect(SoundEffect::Move);
        match self.menu_page {
            MenuPage::NumPlayers => self.num_players = if self.num_players == 1 { 2 } else { 1 },
            MenuPage::Difficulty => self.difficulty = self.difficulty.cycle(change),
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn menu_page(&self) -> MenuPage {
        self.menu_page
    }

    pub fn num_players(&self) -> u8 {
        self.num_players
    }

    pub fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Match {
        &mut self.game
    }
}
