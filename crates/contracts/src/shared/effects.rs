//! Геометрия декоративных эффектов: наклон карточек, "магнитные" кнопки,
//! курсор с инерцией, частицы и ripple. Только вычисления, без DOM.

/// Точка указателя относительно элемента и размер элемента
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// CSS transform для 3D наклона карточки под курсором
pub fn tilt_transform(p: PointerInRect, scale: f64) -> String {
    let rotate_x = (p.y - p.height / 2.0) / 10.0;
    let rotate_y = (p.width / 2.0 - p.x) / 10.0;
    format!(
        "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d({s}, {s}, {s})",
        rotate_x,
        rotate_y,
        s = scale
    )
}

/// Увеличение карточки проекта при наклоне
pub const CARD_TILT_SCALE: f64 = 1.02;

pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)";

/// Радиус притяжения "магнитной" кнопки
pub const MAGNETIC_RADIUS: f64 = 100.0;

/// Смещение кнопки к курсору; `None`, если курсор вне радиуса
pub fn magnetic_offset(p: PointerInRect) -> Option<(f64, f64)> {
    let x = p.x - p.width / 2.0;
    let y = p.y - p.height / 2.0;
    let distance = (x * x + y * y).sqrt();
    if distance >= MAGNETIC_RADIUS {
        return None;
    }
    let strength = (MAGNETIC_RADIUS - distance) / MAGNETIC_RADIUS;
    Some((x * strength * 0.3, y * strength * 0.3))
}

/// Точка, догоняющая курсор с коэффициентом сглаживания
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Follower {
    pub x: f64,
    pub y: f64,
    ease: f64,
}

impl Follower {
    pub fn new(ease: f64) -> Self {
        Self { x: 0.0, y: 0.0, ease }
    }

    /// Один кадр: линейная интерполяция к цели
    pub fn step(&mut self, target_x: f64, target_y: f64) -> (f64, f64) {
        self.x += (target_x - self.x) * self.ease;
        self.y += (target_y - self.y) * self.ease;
        (self.x, self.y)
    }
}

/// Кольцо курсора и точка в центре
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorTrail {
    pub ring: Follower,
    pub dot: Follower,
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self {
            ring: Follower::new(0.1),
            dot: Follower::new(0.2),
        }
    }
}

/// Не чаще одной частицы за интервал
#[derive(Debug, Clone, Copy)]
pub struct ParticleThrottle {
    interval_ms: f64,
    last_emit_ms: f64,
}

impl ParticleThrottle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_emit_ms: f64::NEG_INFINITY,
        }
    }

    pub fn should_emit(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_emit_ms > self.interval_ms {
            self.last_emit_ms = now_ms;
            true
        } else {
            false
        }
    }
}

pub const CURSOR_PARTICLE_INTERVAL_MS: f64 = 50.0;
pub const CURSOR_PARTICLE_LIFETIME_MS: u32 = 800;

/// Количество фоновых частиц для ширины экрана
pub fn particle_count(viewport_width: f64) -> usize {
    if viewport_width < 768.0 {
        30
    } else {
        60
    }
}

/// Параметры одной фоновой частицы
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSpec {
    /// Проценты от контейнера
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub drift_x_px: f64,
    pub drift_y_px: f64,
}

impl ParticleSpec {
    /// `random` должен возвращать значения из `[0, 1)`
    pub fn generate(mut random: impl FnMut() -> f64) -> Self {
        Self {
            left_pct: random() * 100.0,
            top_pct: random() * 100.0,
            duration_s: 15.0 + random() * 20.0,
            delay_s: random() * 5.0,
            drift_x_px: (random() - 0.5) * 400.0,
            drift_y_px: (random() - 0.5) * 400.0,
            size_px: 2.0 + random() * 4.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {s:.2}px; height: {s:.2}px; --duration: {:.2}s; --delay: {:.2}s; --tx: {:.2}px; --ty: {:.2}px;",
            self.left_pct,
            self.top_pct,
            self.duration_s,
            self.delay_s,
            self.drift_x_px,
            self.drift_y_px,
            s = self.size_px
        )
    }
}

/// Параллакс фото профиля при прокрутке
pub fn photo_parallax(scroll_y: f64) -> String {
    format!("translateY({:.2}px)", scroll_y * 0.1)
}

/// Параллакс плавающих иконок: каждая следующая движется чуть быстрее
pub fn floating_icon_parallax(scroll_y: f64, index: usize) -> String {
    let speed = 0.05 + index as f64 * 0.02;
    format!(
        "translateY({:.2}px) rotate({:.2}deg)",
        scroll_y * speed,
        scroll_y * 0.1
    )
}

/// Каскадная задержка появления бейджей технологий
pub fn tech_badge_delay(index: usize) -> String {
    format!("animation-delay: {:.2}s;", index as f64 * 0.05)
}

/// Каскадная задержка появления бейджей интересов
pub fn passion_badge_delay(index: usize) -> String {
    format!("animation-delay: {:.2}s;", 0.3 + index as f64 * 0.1)
}

/// Период пульсации логотипа
pub const LOGO_PULSE_INTERVAL_MS: u32 = 5000;
/// Пауза между сбросом и перезапуском CSS-анимации
pub const LOGO_PULSE_RESTART_MS: u32 = 10;

/// Квадрат ripple, центрированный в точке клика
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

pub const RIPPLE_LIFETIME_MS: u32 = 600;

impl Ripple {
    pub fn at(p: PointerInRect) -> Self {
        let size = p.width.max(p.height);
        Self {
            size,
            left: p.x - size / 2.0,
            top: p.y - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {s}px; height: {s}px; left: {}px; top: {}px;",
            self.left,
            self.top,
            s = self.size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64) -> PointerInRect {
        PointerInRect {
            x,
            y,
            width: 200.0,
            height: 100.0,
        }
    }

    #[test]
    fn test_tilt_center_is_flat() {
        assert_eq!(
            tilt_transform(rect(100.0, 50.0), 1.05),
            "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg) scale3d(1.05, 1.05, 1.05)"
        );
    }

    #[test]
    fn test_tilt_corner() {
        let t = tilt_transform(rect(0.0, 0.0), 1.02);
        assert!(t.contains("rotateX(-5.00deg)"));
        assert!(t.contains("rotateY(10.00deg)"));
    }

    #[test]
    fn test_card_tilt_scale() {
        let t = tilt_transform(rect(50.0, 50.0), CARD_TILT_SCALE);
        assert!(t.ends_with("scale3d(1.02, 1.02, 1.02)"));
    }

    #[test]
    fn test_parallax() {
        assert_eq!(photo_parallax(0.0), "translateY(0.00px)");
        assert_eq!(photo_parallax(500.0), "translateY(50.00px)");
        assert_eq!(
            floating_icon_parallax(100.0, 0),
            "translateY(5.00px) rotate(10.00deg)"
        );
        assert_eq!(
            floating_icon_parallax(100.0, 2),
            "translateY(9.00px) rotate(10.00deg)"
        );
    }

    #[test]
    fn test_badge_stagger() {
        assert_eq!(tech_badge_delay(0), "animation-delay: 0.00s;");
        assert_eq!(tech_badge_delay(3), "animation-delay: 0.15s;");
        assert_eq!(passion_badge_delay(0), "animation-delay: 0.30s;");
        assert_eq!(passion_badge_delay(2), "animation-delay: 0.50s;");
    }

    #[test]
    fn test_magnetic_offset() {
        assert_eq!(magnetic_offset(rect(100.0, 50.0)), Some((0.0, 0.0)));
        let (dx, dy) = magnetic_offset(rect(150.0, 50.0)).unwrap();
        assert!((dx - 7.5).abs() < 1e-9);
        assert_eq!(dy, 0.0);
        assert_eq!(magnetic_offset(rect(200.0, 50.0)), None);
    }

    #[test]
    fn test_follower_eases() {
        let mut trail = CursorTrail::default();
        assert_eq!(trail.ring.step(100.0, 0.0), (10.0, 0.0));
        assert_eq!(trail.dot.step(100.0, 50.0), (20.0, 10.0));
        trail.ring.step(100.0, 0.0);
        assert!((trail.ring.x - 19.0).abs() < 1e-9);
    }

    #[test]
    fn test_throttle() {
        let mut throttle = ParticleThrottle::new(CURSOR_PARTICLE_INTERVAL_MS);
        assert!(throttle.should_emit(0.0));
        assert!(!throttle.should_emit(30.0));
        assert!(!throttle.should_emit(50.0));
        assert!(throttle.should_emit(51.0));
    }

    #[test]
    fn test_particles() {
        assert_eq!(particle_count(375.0), 30);
        assert_eq!(particle_count(1280.0), 60);

        let spec = ParticleSpec::generate(|| 0.5);
        assert_eq!(spec.left_pct, 50.0);
        assert_eq!(spec.duration_s, 25.0);
        assert_eq!(spec.size_px, 4.0);
        assert_eq!(spec.drift_x_px, 0.0);
        assert!(spec.style().contains("--duration: 25.00s"));
    }

    #[test]
    fn test_ripple_centered_on_click() {
        let ripple = Ripple::at(rect(20.0, 30.0));
        assert_eq!(ripple.size, 200.0);
        assert_eq!(ripple.left, -80.0);
        assert_eq!(ripple.top, -70.0);
    }
}
