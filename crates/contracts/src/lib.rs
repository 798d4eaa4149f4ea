//! Общие типы и чистая логика портфолио.
//!
//! Всё, что не трогает DOM, живёт здесь и тестируется нативно:
//! каталог проектов, фильтрация, карточки, модальное окно деталей,
//! а также состояния декоративного слоя страницы.

pub mod domain;
pub mod shared;
