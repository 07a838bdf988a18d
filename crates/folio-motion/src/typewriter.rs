//! Typewriter greeting
//!
//! Cycles a fixed string forever: type one character per tick, hold at the
//! full string, delete one character per tick, hold at empty, repeat.
//! The caller renders `Frame::text` and schedules the next `tick()` after
//! `Frame::delay_ms`.

use crate::config::TypewriterConfig;

/// One rendered step of the effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay_ms: u32,
}

/// Current animation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Deleting,
}

/// Typewriter cursor state
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    index: usize,
    phase: Phase,
    config: TypewriterConfig,
}

impl Typewriter {
    pub fn new(config: &TypewriterConfig) -> Self {
        Self {
            chars: config.text.chars().collect(),
            index: 0,
            phase: Phase::Typing,
            config: config.clone(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Delay before the first tick
    pub fn start_delay_ms(&self) -> u32 {
        self.config.start_delay_ms
    }

    /// Render the current prefix and advance the cursor.
    ///
    /// Reaching the full string holds for `hold_full_ms` and flips to
    /// deleting; reaching empty while deleting holds for `hold_empty_ms`
    /// and flips back to typing.
    pub fn tick(&mut self) -> Frame {
        let text: String = self.chars[..self.index].iter().collect();
        let len = self.chars.len();

        if len == 0 {
            return Frame {
                text,
                delay_ms: self.config.hold_full_ms,
            };
        }

        let delay_ms = match self.phase {
            Phase::Typing if self.index == len => {
                self.phase = Phase::Deleting;
                self.config.hold_full_ms
            }
            Phase::Deleting if self.index == 0 => {
                self.phase = Phase::Typing;
                self.config.hold_empty_ms
            }
            Phase::Typing => self.config.type_ms,
            Phase::Deleting => self.config.delete_ms,
        };

        match self.phase {
            Phase::Typing => self.index += 1,
            Phase::Deleting => self.index -= 1,
        }

        Frame { text, delay_ms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn config(text: &str) -> TypewriterConfig {
        TypewriterConfig {
            text: text.to_string(),
            ..TypewriterConfig::default()
        }
    }

    fn frames(text: &str, n: usize) -> Vec<(String, u32)> {
        let mut tw = Typewriter::new(&config(text));
        (0..n)
            .map(|_| {
                let f = tw.tick();
                (f.text, f.delay_ms)
            })
            .collect()
    }

    #[test]
    fn test_two_char_cycle() {
        let expected: Vec<(String, u32)> = [
            ("", 150),
            ("H", 150),
            ("Hi", 2500),
            ("H", 75),
            ("", 500),
            ("H", 150),
            ("Hi", 2500),
            ("H", 75),
        ]
        .into_iter()
        .map(|(t, d)| (t.to_string(), d))
        .collect();

        assert_eq!(frames("Hi", 8), expected);
    }

    #[test]
    fn test_steps_over_chars_not_bytes() {
        // Victory hand followed by a variation selector
        let texts: Vec<String> = frames("\u{270C}\u{FE0F}a", 4)
            .into_iter()
            .map(|(t, _)| t)
            .collect();
        assert_eq!(
            texts,
            vec!["", "\u{270C}", "\u{270C}\u{FE0F}", "\u{270C}\u{FE0F}a"]
        );
    }

    #[test]
    fn test_single_char() {
        let texts: Vec<String> = frames("x", 5).into_iter().map(|(t, _)| t).collect();
        assert_eq!(texts, vec!["", "x", "", "x", ""]);
    }

    #[test]
    fn test_empty_text_holds() {
        let mut tw = Typewriter::new(&config(""));
        for _ in 0..3 {
            let f = tw.tick();
            assert_eq!(f.text, "");
            assert_eq!(tw.index(), 0);
        }
    }

    proptest! {
        #[test]
        fn index_moves_by_one_and_flips_at_bounds(text in "[a-z]{1,12}", ticks in 1usize..80) {
            let mut tw = Typewriter::new(&config(&text));
            let len = text.chars().count();
            let mut prev = tw.index();
            let mut prev_phase = tw.phase();
            for _ in 0..ticks {
                tw.tick();
                let idx = tw.index();
                prop_assert_eq!(idx.abs_diff(prev), 1);
                prop_assert!(idx <= len);
                if tw.phase() != prev_phase {
                    prop_assert!(prev == 0 || prev == len);
                }
                prev = idx;
                prev_phase = tw.phase();
            }
        }
    }
}
