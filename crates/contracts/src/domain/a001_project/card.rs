use super::aggregate::{is_real_link, ProjectId, ProjectRecord};

/// Ссылка на карточке: видима, только если это не заглушка
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkAffordance {
    pub href: String,
    pub visible: bool,
}

impl LinkAffordance {
    fn from_href(href: &str) -> Self {
        Self {
            href: href.to_string(),
            visible: is_real_link(href),
        }
    }
}

/// Описание карточки проекта для отрисовки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub image_ref: String,
    pub category: String,
    pub show_featured_badge: bool,
    pub live: LinkAffordance,
    pub source: LinkAffordance,
}

/// Куда пришёлся клик по карточке
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTarget {
    Body,
    LiveLink,
    SourceLink,
}

/// Что должно произойти после клика.
/// Переход по ссылке и открытие деталей взаимоисключающие.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardInteraction {
    OpenDetail(ProjectId),
    FollowLink(String),
}

impl CardView {
    pub fn render(record: &ProjectRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            description: record.description.clone(),
            image_ref: record.image_ref.clone(),
            category: record.category.clone(),
            show_featured_badge: record.featured,
            live: LinkAffordance::from_href(&record.live_url),
            source: LinkAffordance::from_href(&record.source_url),
        }
    }

    pub fn interaction(&self, target: CardTarget) -> CardInteraction {
        match target {
            CardTarget::Body => CardInteraction::OpenDetail(self.id),
            CardTarget::LiveLink => CardInteraction::FollowLink(self.live.href.clone()),
            CardTarget::SourceLink => CardInteraction::FollowLink(self.source.href.clone()),
        }
    }
}

/// Клавиши, которыми карточка активируется с клавиатуры
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Длительность затухания карточки перед скрытием фильтром
pub const FILTER_HIDE_MS: u32 = 300;
/// Задержка перед проявлением: карточка уже в потоке, но ещё прозрачна
pub const FILTER_SHOW_MS: u32 = 10;

/// Фаза видимости карточки при смене фильтра.
///
/// `Shown -> Hiding -> Hidden` при исключении фильтром,
/// `Hidden -> Showing -> Shown` при возврате.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVisibility {
    #[default]
    Shown,
    Showing,
    Hiding,
    Hidden,
}

impl CardVisibility {
    /// Реакция на новый фильтр
    pub fn request(self, matches: bool) -> Self {
        match (self, matches) {
            (CardVisibility::Shown | CardVisibility::Showing, true) => self,
            (CardVisibility::Hidden | CardVisibility::Hiding, true) => CardVisibility::Showing,
            (CardVisibility::Hidden | CardVisibility::Hiding, false) => self,
            (CardVisibility::Shown | CardVisibility::Showing, false) => CardVisibility::Hiding,
        }
    }

    /// Через сколько переходная фаза должна завершиться
    pub fn settle_delay_ms(self) -> Option<u32> {
        match self {
            CardVisibility::Showing => Some(FILTER_SHOW_MS),
            CardVisibility::Hiding => Some(FILTER_HIDE_MS),
            CardVisibility::Shown | CardVisibility::Hidden => None,
        }
    }

    /// Завершить переход, если фаза всё ещё `expected`.
    /// Устаревший таймер (фильтр успели сменить) ничего не меняет.
    pub fn settle(self, expected: CardVisibility) -> Self {
        if self != expected {
            return self;
        }
        match self {
            CardVisibility::Showing => CardVisibility::Shown,
            CardVisibility::Hiding => CardVisibility::Hidden,
            other => other,
        }
    }

    /// Карточка занимает место в сетке
    pub fn is_displayed(self) -> bool {
        self != CardVisibility::Hidden
    }

    /// Прозрачна и уменьшена
    pub fn is_faded(self) -> bool {
        self != CardVisibility::Shown
    }
}

pub fn render(record: &ProjectRecord) -> CardView {
    CardView::render(record)
}

pub fn render_all(records: &[ProjectRecord]) -> Vec<CardView> {
    records.iter().map(CardView::render).collect()
}
