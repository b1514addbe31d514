//! ShellView: the command history and the prompt line.
//!
//! History lines are word-wrapped to the viewport width and the view is
//! scrolled so the prompt is always on screen.

use unicode_width::UnicodeWidthChar;

use crate::core::TerminalSession;
use crate::fb::{str_width, CellStyle, FrameBuffer};
use crate::layout::Viewport;
use crate::theme;
use crate::types::PROMPT;

pub const CURSOR: char = '█';

#[derive(Debug, Default, Clone, Copy)]
pub struct ShellView;

impl ShellView {
    pub fn render_into(&self, session: &TerminalSession, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::fg(theme::TEXT).into_cell(' '));
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }

        let mut rows: Vec<(String, CellStyle)> = Vec::new();
        for line in session.lines() {
            let style = line_style(line);
            for row in wrap_line(line, viewport.width) {
                rows.push((row, style));
            }
        }

        let mut prompt = String::with_capacity(PROMPT.len() + 1 + session.input().len());
        prompt.push_str(PROMPT);
        prompt.push(' ');
        prompt.push_str(session.input());
        let mut prompt_rows = wrap_line(&prompt, viewport.width);
        // The cursor goes after the input, on a fresh row if the last is full.
        let cursor_row = match prompt_rows.last() {
            Some(last) if str_width(last) < viewport.width => prompt_rows.len() - 1,
            _ => {
                prompt_rows.push(String::new());
                prompt_rows.len() - 1
            }
        };

        let history_len = rows.len();
        let prompt_style = theme::text().bold();
        rows.extend(prompt_rows.iter().map(|r| (r.clone(), prompt_style)));

        let skip = rows.len().saturating_sub(viewport.height as usize);
        for (y, (row, style)) in rows.iter().skip(skip).enumerate() {
            fb.put_str(0, y as u16, row, *style);
        }

        if !session.is_typing() {
            if let Some(cy) = (history_len + cursor_row).checked_sub(skip) {
                let cx = str_width(&prompt_rows[cursor_row]);
                fb.put_char(cx, cy as u16, CURSOR, theme::text());
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &TerminalSession, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }
}

fn line_style(line: &str) -> CellStyle {
    if line
        .strip_prefix(PROMPT)
        .is_some_and(|rest| rest.starts_with(' '))
    {
        theme::text().bold()
    } else if line.starts_with("Unknown command:") {
        theme::alert()
    } else {
        theme::text()
    }
}

/// Split `line` into rows no wider than `width` columns, breaking at the last
/// space when there is one and mid-word otherwise.
pub fn wrap_line(line: &str, width: u16) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_w: u16 = 0;
    let mut last_space: Option<usize> = None;

    for ch in line.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
        if row_w + w > width && !row.is_empty() {
            if ch == ' ' {
                rows.push(std::mem::take(&mut row));
                row_w = 0;
                last_space = None;
                continue;
            }
            match last_space {
                Some(i) if i > 0 => {
                    let rest = row.split_off(i + 1);
                    row.truncate(i);
                    rows.push(std::mem::replace(&mut row, rest));
                }
                _ => rows.push(std::mem::take(&mut row)),
            }
            row_w = str_width(&row);
            last_space = row.rfind(' ');
        }
        if ch == ' ' {
            last_space = Some(row.len());
        }
        row.push(ch);
        row_w += w;
    }

    rows.push(row);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_line_is_one_row() {
        assert_eq!(wrap_line("hello", 10), vec!["hello"]);
        assert_eq!(wrap_line("", 10), vec![""]);
    }

    #[test]
    fn test_wraps_at_last_space() {
        assert_eq!(wrap_line("aaa bbb ccc", 7), vec!["aaa bbb", "ccc"]);
    }

    #[test]
    fn test_long_word_breaks_mid_word() {
        assert_eq!(wrap_line("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wide_glyphs_count_two_columns() {
        assert_eq!(wrap_line("🚀🚀🚀", 4), vec!["🚀🚀", "🚀"]);
    }
}
