/// Общая длительность анимации счётчика
pub const COUNTER_DURATION_MS: u32 = 2000;
/// Количество шагов анимации
pub const COUNTER_STEPS: u32 = 60;

/// Анимация счётчика статистики ("0" -> "15+")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u64,
    has_plus: bool,
    step: u32,
}

impl CounterAnimation {
    /// Разобрать текст счётчика. Берутся все цифры, "+" сохраняется в конце.
    /// Текст без цифр анимации не имеет.
    pub fn from_text(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
        let target = digits.parse::<u64>().ok()?;
        Some(Self {
            target,
            has_plus: text.contains('+'),
            step: 0,
        })
    }

    /// Интервал между шагами
    pub fn interval_ms() -> u32 {
        COUNTER_DURATION_MS / COUNTER_STEPS
    }

    pub fn is_finished(&self) -> bool {
        self.step >= COUNTER_STEPS
    }

    /// Следующий шаг: текст для отображения
    pub fn step(&mut self) -> String {
        self.step = (self.step + 1).min(COUNTER_STEPS);
        let value = if self.is_finished() {
            self.target
        } else {
            // Промежуточное произведение в u128: результат не больше target
            (u128::from(self.target) * u128::from(self.step) / u128::from(COUNTER_STEPS)) as u64
        };
        self.format(value)
    }

    /// Итоговый текст
    pub fn final_text(&self) -> String {
        self.format(self.target)
    }

    fn format(&self, value: u64) -> String {
        if self.has_plus {
            format!("{}+", value)
        } else {
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let counter = CounterAnimation::from_text("15+").unwrap();
        assert_eq!(counter.final_text(), "15+");
        assert_eq!(CounterAnimation::from_text("100").unwrap().final_text(), "100");
        assert!(CounterAnimation::from_text("many").is_none());
        assert!(CounterAnimation::from_text("").is_none());
    }

    #[test]
    fn test_runs_sixty_steps_and_lands_on_target() {
        let mut counter = CounterAnimation::from_text("120+").unwrap();
        let mut frames = Vec::new();
        while !counter.is_finished() {
            frames.push(counter.step());
        }
        assert_eq!(frames.len(), 60);
        assert_eq!(frames[0], "2+");
        assert_eq!(frames[29], "60+");
        assert_eq!(frames.last().unwrap(), "120+");
    }

    #[test]
    fn test_small_targets_floor() {
        let mut counter = CounterAnimation::from_text("9").unwrap();
        assert_eq!(counter.step(), "0");
        assert_eq!(CounterAnimation::interval_ms(), 33);
    }

    #[test]
    fn test_huge_target_does_not_overflow() {
        let mut counter = CounterAnimation::from_text("10000000000000000000+").unwrap();
        assert_eq!(counter.step(), "166666666666666666+");
        assert_eq!(counter.step(), "333333333333333333+");
        while !counter.is_finished() {
            counter.step();
        }
        assert_eq!(counter.final_text(), "10000000000000000000+");

        let mut max = CounterAnimation::from_text(&u64::MAX.to_string()).unwrap();
        let mut last = String::new();
        while !max.is_finished() {
            last = max.step();
        }
        assert_eq!(last, u64::MAX.to_string());
    }
}
