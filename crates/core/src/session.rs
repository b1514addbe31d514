//! Terminal session - the shell that owns history, input and the active game
//!
//! The session starts behind the loader, then accepts commands. Text output
//! goes through the [`Typewriter`]; launch commands mount one of the games,
//! which takes over key handling until it is exited.

use crate::commands::{self, Dispatch};
use crate::config::AppConfig;
use crate::loader::Loader;
use crate::minesweeper::MinesweeperGame;
use crate::rng::SimpleRng;
use crate::rocket::RocketAnimation;
use crate::snake::SnakeGame;
use crate::tetris::TetrisGame;
use crate::typewriter::{Keystroke, Typewriter};
use crate::types::{GameAction, GameKind, ShellInput};

/// A mounted game and its state.
#[derive(Debug, Clone)]
pub enum ActiveGame {
    Snake(SnakeGame),
    Tetris(TetrisGame),
    Minesweeper(MinesweeperGame),
    Rocket(RocketAnimation),
}

impl ActiveGame {
    pub fn launch(kind: GameKind, seed: u32) -> Self {
        match kind {
            GameKind::Snake => ActiveGame::Snake(SnakeGame::new(seed)),
            GameKind::Tetris => ActiveGame::Tetris(TetrisGame::new(seed)),
            GameKind::Minesweeper => ActiveGame::Minesweeper(MinesweeperGame::new(seed)),
            GameKind::Rocket => ActiveGame::Rocket(RocketAnimation::new()),
        }
    }

    pub fn kind(&self) -> GameKind {
        match self {
            ActiveGame::Snake(_) => GameKind::Snake,
            ActiveGame::Tetris(_) => GameKind::Tetris,
            ActiveGame::Minesweeper(_) => GameKind::Minesweeper,
            ActiveGame::Rocket(_) => GameKind::Rocket,
        }
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        match self {
            ActiveGame::Snake(g) => {
                g.tick(elapsed_ms);
            }
            ActiveGame::Tetris(g) => {
                g.tick(elapsed_ms);
            }
            ActiveGame::Minesweeper(_) => {}
            ActiveGame::Rocket(r) => {
                r.tick(elapsed_ms);
            }
        }
    }

    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match self {
            ActiveGame::Snake(g) => g.apply_action(action),
            ActiveGame::Tetris(g) => g.apply_action(action),
            ActiveGame::Minesweeper(g) => g.apply_action(action),
            ActiveGame::Rocket(_) => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TerminalSession {
    lines: Vec<String>,
    input: String,
    typewriter: Typewriter,
    loader: Option<Loader>,
    active: Option<ActiveGame>,
    rng: SimpleRng,
}

impl TerminalSession {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            lines: vec![commands::WELCOME.to_string()],
            input: String::new(),
            typewriter: Typewriter::with_char_delay(config.type_char_ms),
            loader: if config.skip_loader {
                None
            } else {
                Some(Loader::new())
            },
            active: None,
            rng: SimpleRng::new(config.seed),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_typing(&self) -> bool {
        self.typewriter.is_typing()
    }

    pub fn loader(&self) -> Option<&Loader> {
        self.loader.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_some()
    }

    pub fn active_game(&self) -> Option<&ActiveGame> {
        self.active.as_ref()
    }

    pub fn active_kind(&self) -> Option<GameKind> {
        self.active.as_ref().map(ActiveGame::kind)
    }

    /// True when keys should edit the input line rather than drive a game.
    pub fn accepts_text(&self) -> bool {
        self.loader.is_none() && self.active.is_none()
    }

    /// Edit or submit the input line. Ignored while loading or in a game.
    pub fn handle_input(&mut self, input: ShellInput) {
        if !self.accepts_text() {
            return;
        }
        match input {
            ShellInput::Insert(ch) => self.input.push(ch),
            ShellInput::Backspace => {
                self.input.pop();
            }
            ShellInput::Submit => self.submit(),
        }
    }

    /// Submit the input line. Blank input and submissions while text is
    /// still being typed are ignored; in the latter case the input is kept.
    pub fn submit(&mut self) {
        if self.input.trim().is_empty() || self.is_typing() {
            return;
        }
        let raw = std::mem::take(&mut self.input);
        self.run_command(raw.trim());
    }

    /// Dispatch a trimmed command line. Ignored while text is still typing.
    pub fn run_command(&mut self, cmd: &str) {
        if self.is_typing() {
            return;
        }
        let dispatch = commands::dispatch(cmd);
        tracing::debug!(command = cmd, ?dispatch, "dispatch");

        match dispatch {
            Dispatch::Clear => self.lines.clear(),
            Dispatch::Print(text) => {
                self.lines.push(commands::echo_line(cmd));
                self.typewriter.queue(text.iter().copied());
            }
            Dispatch::Launch { game, banner } => {
                self.lines.push(commands::echo_line(cmd));
                self.lines.push(banner.to_string());
                self.launch(game);
            }
            Dispatch::Unknown => {
                self.lines.push(commands::echo_line(cmd));
                self.typewriter.queue([commands::unknown_command(cmd)]);
            }
        }
    }

    /// Mount a fresh game, replacing any running one.
    pub fn launch(&mut self, kind: GameKind) {
        let seed = self.rng.fork_seed();
        tracing::info!(game = kind.as_str(), seed, "mounting game");
        self.active = Some(ActiveGame::launch(kind, seed));
    }

    /// Route a game key. Exit unmounts the game in any state.
    pub fn handle_action(&mut self, action: GameAction) -> bool {
        let Some(game) = self.active.as_mut() else {
            return false;
        };
        if action == GameAction::Exit {
            tracing::info!(game = game.kind().as_str(), "leaving game");
            self.active = None;
            return true;
        }
        game.apply_action(action)
    }

    /// Advance loader, typewriter and active game by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if let Some(loader) = self.loader.as_mut() {
            if loader.tick(elapsed_ms) {
                self.loader = None;
            }
            return;
        }

        if let Some(game) = self.active.as_mut() {
            game.tick(elapsed_ms);
            return;
        }

        for keystroke in self.typewriter.tick(elapsed_ms) {
            self.apply_keystroke(keystroke);
        }
    }

    /// Type out everything still queued immediately.
    pub fn flush_typing(&mut self) {
        for keystroke in self.typewriter.finish() {
            self.apply_keystroke(keystroke);
        }
    }

    fn apply_keystroke(&mut self, keystroke: Keystroke) {
        if keystroke.starts_line {
            self.lines.push(keystroke.text);
        } else if let Some(last) = self.lines.last_mut() {
            *last = keystroke.text;
        }
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_session() -> TerminalSession {
        TerminalSession::new(&AppConfig {
            skip_loader: true,
            ..AppConfig::default()
        })
    }

    #[test]
    fn test_starts_behind_loader() {
        let mut session = TerminalSession::default();
        assert!(session.is_loading());
        session.handle_input(ShellInput::Insert('x'));
        assert_eq!(session.input(), "");
        session.tick(crate::types::LOADER_MS);
        assert!(!session.is_loading());
        assert_eq!(session.lines(), &["Type 'help' to get started".to_string()]);
    }

    #[test]
    fn test_input_editing() {
        let mut session = ready_session();
        for ch in "hekp".chars() {
            session.handle_input(ShellInput::Insert(ch));
        }
        session.handle_input(ShellInput::Backspace);
        session.handle_input(ShellInput::Backspace);
        session.handle_input(ShellInput::Insert('l'));
        session.handle_input(ShellInput::Insert('p'));
        assert_eq!(session.input(), "help");
    }

    #[test]
    fn test_submit_blocked_while_typing() {
        let mut session = ready_session();
        session.run_command("projects");
        assert!(session.is_typing());
        for ch in "about".chars() {
            session.handle_input(ShellInput::Insert(ch));
        }
        session.handle_input(ShellInput::Submit);
        assert_eq!(session.input(), "about");
        assert!(!session.lines().iter().any(|l| l == "$ about"));
    }

    #[test]
    fn test_commands_wait_for_typing_to_finish() {
        let mut session = ready_session();
        session.run_command("about");
        session.tick(crate::types::TYPE_CHAR_MS);
        let before = session.lines().to_vec();

        session.run_command("snake");
        assert_eq!(session.active_kind(), None);
        assert_eq!(session.lines(), before.as_slice());

        session.flush_typing();
        session.run_command("snake");
        assert_eq!(session.active_kind(), Some(GameKind::Snake));
        let n = session.lines().len();
        assert_eq!(session.lines()[n - 1], "Launching Snake game...");
        assert_eq!(session.lines()[n - 2], "$ snake");
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut session = ready_session();
        session.handle_input(ShellInput::Insert(' '));
        session.handle_input(ShellInput::Submit);
        assert_eq!(session.lines().len(), 1);
    }

    #[test]
    fn test_game_keys_need_a_game() {
        let mut session = ready_session();
        assert!(!session.handle_action(GameAction::Up));
        session.run_command("rocket");
        assert_eq!(session.active_kind(), Some(GameKind::Rocket));
        assert!(!session.accepts_text());
        assert!(session.handle_action(GameAction::Exit));
        assert!(session.accepts_text());
    }
}
