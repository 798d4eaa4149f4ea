//! Навигация при прокрутке: фон и автоскрытие navbar, активный раздел.

/// Порог, после которого navbar получает фон
pub const SCROLLED_THRESHOLD: f64 = 50.0;
/// Ниже этого смещения navbar никогда не скрывается
pub const HIDE_THRESHOLD: f64 = 100.0;
/// Раздел считается активным с опережением на эту величину
pub const SECTION_ACTIVATION_OFFSET: f64 = 100.0;
/// Высота navbar, учитывается при плавной прокрутке к разделу
pub const NAVBAR_HEIGHT: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavbarAppearance {
    pub scrolled: bool,
    pub hidden: bool,
}

/// Хранит последнее смещение между событиями scroll
#[derive(Debug, Clone, Copy, Default)]
pub struct NavbarScroll {
    last_scroll: f64,
}

impl NavbarScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, scroll_y: f64) -> NavbarAppearance {
        let appearance = NavbarAppearance {
            scrolled: scroll_y > SCROLLED_THRESHOLD,
            hidden: scroll_y > self.last_scroll && scroll_y > HIDE_THRESHOLD,
        };
        self.last_scroll = scroll_y;
        appearance
    }
}

/// Положение раздела на странице
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

/// Последний раздел, верх которого уже пройден (с учётом опережения)
pub fn active_section(sections: &[SectionOffset], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.top - SECTION_ACTIVATION_OFFSET)
        .last()
        .map(|s| s.id.as_str())
}

/// Куда прокручивать, чтобы раздел не ушёл под navbar
pub fn scroll_target(section_top: f64) -> f64 {
    (section_top - NAVBAR_HEIGHT).max(0.0)
}
