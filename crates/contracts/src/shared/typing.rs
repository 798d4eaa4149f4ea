//! Состояние анимации "печатающегося" текста в hero-блоке.

use super::config::TypingConfig;

/// Один кадр анимации: что показать и через сколько запросить следующий
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct TypingAnimator {
    roles: Vec<String>,
    role_index: usize,
    char_index: usize,
    deleting: bool,
    type_delay_ms: u32,
    delete_delay_ms: u32,
    word_pause_ms: u32,
    next_word_pause_ms: u32,
}

impl TypingAnimator {
    pub fn new(config: &TypingConfig) -> Self {
        Self {
            roles: config.roles.clone(),
            role_index: 0,
            char_index: 0,
            deleting: false,
            type_delay_ms: config.type_delay_ms,
            delete_delay_ms: config.delete_delay_ms,
            word_pause_ms: config.word_pause_ms,
            next_word_pause_ms: config.next_word_pause_ms,
        }
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Следующий кадр
    pub fn tick(&mut self) -> TypingFrame {
        let Some(role) = self.roles.get(self.role_index) else {
            return TypingFrame {
                text: String::new(),
                delay_ms: self.next_word_pause_ms,
            };
        };
        let role_len = role.chars().count();

        let mut delay_ms;
        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            delay_ms = self.delete_delay_ms;
        } else {
            self.char_index = (self.char_index + 1).min(role_len);
            delay_ms = self.type_delay_ms;
        }
        let text: String = role.chars().take(self.char_index).collect();

        if !self.deleting && self.char_index == role_len {
            self.deleting = true;
            delay_ms = self.word_pause_ms;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.role_index = (self.role_index + 1) % self.roles.len();
            delay_ms = self.next_word_pause_ms;
        }

        TypingFrame { text, delay_ms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(roles: &[&str]) -> TypingConfig {
        TypingConfig {
            roles: roles.iter().map(|r| r.to_string()).collect(),
            type_delay_ms: 100,
            delete_delay_ms: 50,
            word_pause_ms: 2000,
            next_word_pause_ms: 500,
        }
    }

    #[test]
    fn test_types_then_pauses() {
        let mut animator = TypingAnimator::new(&config(&["Hi!"]));
        assert_eq!(animator.tick(), TypingFrame { text: "H".into(), delay_ms: 100 });
        assert_eq!(animator.tick(), TypingFrame { text: "Hi".into(), delay_ms: 100 });
        assert_eq!(animator.tick(), TypingFrame { text: "Hi!".into(), delay_ms: 2000 });
        assert!(animator.is_deleting());
    }

    #[test]
    fn test_deletes_and_moves_to_next_role() {
        let mut animator = TypingAnimator::new(&config(&["ab", "xyz"]));
        animator.tick();
        animator.tick();
        assert_eq!(animator.tick(), TypingFrame { text: "a".into(), delay_ms: 50 });
        assert_eq!(animator.tick(), TypingFrame { text: "".into(), delay_ms: 500 });
        assert_eq!(animator.role_index(), 1);
        assert_eq!(animator.tick().text, "x");
    }

    #[test]
    fn test_wraps_around_roles() {
        let mut animator = TypingAnimator::new(&config(&["a", "b"]));
        // "a" typed, deleted; "b" typed, deleted
        for _ in 0..4 {
            animator.tick();
        }
        assert_eq!(animator.role_index(), 0);
    }

    #[test]
    fn test_unicode_roles() {
        let mut animator = TypingAnimator::new(&config(&["Привет"]));
        assert_eq!(animator.tick().text, "П");
        assert_eq!(animator.tick().text, "Пр");
    }

    #[test]
    fn test_empty_roles() {
        let mut animator = TypingAnimator::new(&config(&[]));
        assert_eq!(animator.tick(), TypingFrame { text: String::new(), delay_ms: 500 });
    }
}
