//! ViewModel формы обратной связи.
//!
//! Поля как отдельные RwSignal для двусторонней привязки THAW.
//! Отправка имитируется: Idle -> Sending -> Sent -> Idle, затем форма очищается.

use contracts::shared::contact::{ContactForm, ContactFormError, SubmitPhase};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Длительность анимации "встряски" при ошибке
const SHAKE_MS: u32 = 500;

#[derive(Clone, Copy)]
pub struct ContactVm {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub subject: RwSignal<String>,
    pub message: RwSignal<String>,

    pub phase: RwSignal<SubmitPhase>,
    pub error: RwSignal<Option<ContactFormError>>,
    pub shake: RwSignal<bool>,
}

impl ContactVm {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            subject: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
            phase: RwSignal::new(SubmitPhase::Idle),
            error: RwSignal::new(None),
            shake: RwSignal::new(false),
        }
    }

    fn form(&self) -> ContactForm {
        ContactForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            subject: self.subject.get_untracked(),
            message: self.message.get_untracked(),
        }
    }

    fn reset(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.subject.set(String::new());
        self.message.set(String::new());
    }

    pub fn is_busy(&self) -> bool {
        self.phase.get().is_busy()
    }

    /// Текст ошибки для поля, если ошибка относится к нему
    pub fn error_for(&self, field: &str) -> Option<String> {
        self.error
            .get()
            .filter(|e| e.field() == field)
            .map(|e| e.to_string())
    }

    pub fn submit(&self) {
        let current = self.phase.get_untracked();
        if current.is_busy() {
            return;
        }

        match current.submit(&self.form()) {
            Err(e) => {
                log::debug!("contact: validation failed on '{}': {}", e.field(), e);
                self.error.set(Some(e));
                self.start_shake();
            }
            Ok(next) => {
                self.error.set(None);
                self.phase.set(next);
                self.run_phases();
            }
        }
    }

    fn start_shake(&self) {
        let shake = self.shake;
        shake.set(true);
        spawn_local(async move {
            TimeoutFuture::new(SHAKE_MS).await;
            let _ = shake.try_set(false);
        });
    }

    /// Прогоняет таймеры фаз до возврата в Idle
    fn run_phases(&self) {
        let vm = *self;
        spawn_local(async move {
            loop {
                let Some(phase) = vm.phase.try_get_untracked() else {
                    return;
                };
                let Some(duration) = phase.duration_ms() else {
                    return;
                };
                TimeoutFuture::new(duration).await;

                let next = phase.advance();
                if vm.phase.try_set(next).is_some() {
                    return;
                }
                if next == SubmitPhase::Idle {
                    vm.reset();
                    log::info!("contact: message sent (simulated)");
                    return;
                }
            }
        });
    }
}

impl Default for ContactVm {
    fn default() -> Self {
        Self::new()
    }
}
