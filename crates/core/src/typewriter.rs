//! Typewriter effect
//!
//! Queued lines are revealed one character per step. Each step yields a
//! [`Keystroke`]: the first character of a line starts a new history line,
//! later characters replace that line with a longer prefix.

use std::collections::VecDeque;

use crate::types::TYPE_CHAR_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keystroke {
    /// Prefix of the line typed so far
    pub text: String,
    /// True for the first keystroke of a line
    pub starts_line: bool,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    pending: VecDeque<String>,
    /// Line being typed and the number of chars already shown
    current: Option<(String, usize)>,
    char_ms: u32,
    timer_ms: u32,
}

impl Typewriter {
    pub fn new() -> Self {
        Self::with_char_delay(TYPE_CHAR_MS)
    }

    pub fn with_char_delay(char_ms: u32) -> Self {
        Self {
            pending: VecDeque::new(),
            current: None,
            char_ms,
            timer_ms: 0,
        }
    }

    pub fn queue<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pending.extend(lines.into_iter().map(Into::into));
    }

    pub fn is_typing(&self) -> bool {
        self.current.is_some() || !self.pending.is_empty()
    }

    /// Reveal the next character.
    ///
    /// Blank lines are emitted whole in a single keystroke.
    pub fn step(&mut self) -> Option<Keystroke> {
        if self.current.is_none() {
            let line = self.pending.pop_front()?;
            if line.trim().is_empty() {
                return Some(Keystroke {
                    text: line,
                    starts_line: true,
                });
            }
            self.current = Some((line, 0));
        }

        let (line, shown) = self.current.as_mut()?;
        let starts_line = *shown == 0;
        *shown += 1;
        let end = line
            .char_indices()
            .nth(*shown)
            .map(|(i, _)| i)
            .unwrap_or(line.len());
        let text = line[..end].to_string();
        let done = end == line.len();
        if done {
            self.current = None;
        }
        Some(Keystroke { text, starts_line })
    }

    /// Advance by elapsed time; one keystroke per character delay.
    pub fn tick(&mut self, elapsed_ms: u32) -> Vec<Keystroke> {
        let mut out = Vec::new();
        if !self.is_typing() {
            self.timer_ms = 0;
            return out;
        }
        self.timer_ms += elapsed_ms;
        while self.timer_ms >= self.char_ms.max(1) {
            self.timer_ms -= self.char_ms.max(1);
            match self.step() {
                Some(k) => out.push(k),
                None => {
                    self.timer_ms = 0;
                    break;
                }
            }
        }
        out
    }

    /// Run every pending keystroke at once.
    pub fn finish(&mut self) -> Vec<Keystroke> {
        let mut out = Vec::new();
        while let Some(k) = self.step() {
            out.push(k);
        }
        self.timer_ms = 0;
        out
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new()
    }
}
