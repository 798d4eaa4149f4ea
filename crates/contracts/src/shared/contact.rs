use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Время "отправки" и показа подтверждения (отправка имитируется)
pub const SENDING_DURATION_MS: u32 = 1500;
pub const SENT_DURATION_MS: u32 = 2000;

/// Ошибки валидации формы обратной связи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a subject")]
    MissingSubject,
    #[error("Please enter your message")]
    MissingMessage,
}

impl ContactFormError {
    /// Имя поля, к которому относится ошибка
    pub fn field(&self) -> &'static str {
        match self {
            ContactFormError::MissingName => "name",
            ContactFormError::InvalidEmail => "email",
            ContactFormError::MissingSubject => "subject",
            ContactFormError::MissingMessage => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

impl ContactForm {
    /// Проверка полей по порядку, возвращается первая ошибка
    pub fn validate(&self) -> Result<(), ContactFormError> {
        if self.name.trim().is_empty() {
            return Err(ContactFormError::MissingName);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactFormError::InvalidEmail);
        }
        if self.subject.trim().is_empty() {
            return Err(ContactFormError::MissingSubject);
        }
        if self.message.trim().is_empty() {
            return Err(ContactFormError::MissingMessage);
        }
        Ok(())
    }
}

/// Фаза имитации отправки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmitPhase {
    /// Начать отправку: из `Idle` и только для валидной формы
    pub fn submit(self, form: &ContactForm) -> Result<SubmitPhase, ContactFormError> {
        form.validate()?;
        Ok(match self {
            SubmitPhase::Idle => SubmitPhase::Sending,
            other => other,
        })
    }

    /// Переход по истечении таймера текущей фазы
    pub fn advance(self) -> SubmitPhase {
        match self {
            SubmitPhase::Idle => SubmitPhase::Idle,
            SubmitPhase::Sending => SubmitPhase::Sent,
            SubmitPhase::Sent => SubmitPhase::Idle,
        }
    }

    /// Длительность текущей фазы, `None` для `Idle`
    pub fn duration_ms(self) -> Option<u32> {
        match self {
            SubmitPhase::Idle => None,
            SubmitPhase::Sending => Some(SENDING_DURATION_MS),
            SubmitPhase::Sent => Some(SENT_DURATION_MS),
        }
    }

    pub fn is_busy(self) -> bool {
        self != SubmitPhase::Idle
    }

    pub fn button_label(self) -> &'static str {
        match self {
            SubmitPhase::Idle => "Send Message",
            SubmitPhase::Sending => "Sending...",
            SubmitPhase::Sent => "Message Sent!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Nice portfolio".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_first_error_wins() {
        let empty = ContactForm::default();
        assert_eq!(empty.validate(), Err(ContactFormError::MissingName));

        let form = ContactForm {
            email: "nope".into(),
            subject: " ".into(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(ContactFormError::InvalidEmail));

        let form = ContactForm {
            subject: "   ".into(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(ContactFormError::MissingSubject));

        let form = ContactForm {
            message: "\n".into(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(ContactFormError::MissingMessage));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@c.d"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactFormError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(ContactFormError::MissingMessage.field(), "message");
    }

    #[test]
    fn test_submit_cycle() {
        let phase = SubmitPhase::Idle.submit(&valid_form()).unwrap();
        assert_eq!(phase, SubmitPhase::Sending);
        assert_eq!(phase.duration_ms(), Some(1500));
        assert!(phase.is_busy());

        let phase = phase.advance();
        assert_eq!(phase, SubmitPhase::Sent);
        assert_eq!(phase.duration_ms(), Some(2000));

        assert_eq!(phase.advance(), SubmitPhase::Idle);
    }

    #[test]
    fn test_invalid_submit_stays_idle() {
        let result = SubmitPhase::Idle.submit(&ContactForm::default());
        assert_eq!(result, Err(ContactFormError::MissingName));
        // повторная отправка во время Sending ничего не меняет
        assert_eq!(
            SubmitPhase::Sending.submit(&valid_form()),
            Ok(SubmitPhase::Sending)
        );
    }
}
