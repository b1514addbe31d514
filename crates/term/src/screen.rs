//! Top-level view: picks the loader, a game or the shell for the session.

use crate::core::{Loader, TerminalSession};
use crate::fb::{CellStyle, FrameBuffer};
use crate::game_view::GameView;
use crate::layout::Viewport;
use crate::shell_view::ShellView;
use crate::theme;

#[derive(Debug, Default, Clone, Copy)]
pub struct SessionView {
    game: GameView,
    shell: ShellView,
}

impl SessionView {
    pub fn new(game: GameView) -> Self {
        Self {
            game,
            shell: ShellView,
        }
    }

    pub fn render_into(&self, session: &TerminalSession, viewport: Viewport, fb: &mut FrameBuffer) {
        if let Some(loader) = session.loader() {
            render_loader(loader, viewport, fb);
        } else if let Some(game) = session.active_game() {
            self.game.render_into(game, viewport, fb);
        } else {
            self.shell.render_into(session, viewport, fb);
        }
    }

    pub fn render(&self, session: &TerminalSession, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }
}

/// Spinner above the message, both centered.
pub fn render_loader(loader: &Loader, viewport: Viewport, fb: &mut FrameBuffer) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(CellStyle::fg(theme::TEXT).into_cell(' '));

    let top = viewport.height.saturating_sub(3) / 2;
    let mut spinner = [0u8; 4];
    fb.put_str_centered(
        0,
        viewport.width,
        top,
        loader.spinner().encode_utf8(&mut spinner),
        theme::text().bold(),
    );
    fb.put_str_centered(0, viewport.width, top + 2, loader.message(), theme::text());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loader::LOADER_MESSAGE;

    #[test]
    fn test_loader_screen() {
        let loader = Loader::new();
        let mut fb = FrameBuffer::new(80, 7);
        render_loader(&loader, Viewport::new(80, 7), &mut fb);
        assert_eq!(fb.row_text(2).trim(), "◐");
        assert_eq!(fb.row_text(4).trim(), LOADER_MESSAGE);
    }
}
