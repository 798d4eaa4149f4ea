pub mod view_model;

use crate::layout::global_context::use_portfolio;
use crate::shared::effects::Reveal;
use crate::shared::icons::icon;
use contracts::shared::contact::SubmitPhase;
use leptos::prelude::*;
use thaw::*;
use view_model::ContactVm;

#[component]
pub fn Contact() -> impl IntoView {
    let ctx = use_portfolio();
    let (email, socials) = ctx
        .config
        .with_value(|c| (c.owner.email.clone(), c.socials.clone()));
    let vm = ContactVm::new();

    let field_error = move |field: &'static str| {
        move || {
            vm.error_for(field)
                .map(|msg| view! { <span class="form__error" role="alert">{msg}</span> })
        }
    };

    let button_icon = move || match vm.phase.get() {
        SubmitPhase::Idle => icon("send"),
        SubmitPhase::Sending => icon("loader"),
        SubmitPhase::Sent => icon("check"),
    };

    view! {
        <section id="contact" class="contact">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">"Get In " <span class="gradient-text">"Touch"</span></h2>
                </Reveal>
                <div class="contact-content">
                    <Reveal class="contact-info">
                        <p>"Have a project in mind or just want to say hi? My inbox is open."</p>
                        {email.map(|email| view! {
                            <a class="contact-item" href=format!("mailto:{}", email)>
                                {icon("mail")}
                                <span>{email.clone()}</span>
                            </a>
                        })}
                        <div class="contact-socials">
                            {socials
                                .into_iter()
                                .map(|link| view! {
                                    <a href=link.url class="social-link" target="_blank" rel="noopener noreferrer" title=link.label>
                                        {icon(&link.icon)}
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </Reveal>

                    <Reveal class="contact-form-wrapper" delay_ms=100>
                        <div id="contactForm" class="contact-form" class:shake=move || vm.shake.get()>
                            <div class="form__group">
                                <label class="form__label">"Name"</label>
                                <Input value=vm.name placeholder="Your name" />
                                {field_error("name")}
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Email"</label>
                                <Input value=vm.email input_type=InputType::Email placeholder="your@email.com" />
                                {field_error("email")}
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Subject"</label>
                                <Input value=vm.subject placeholder="What's this about?" />
                                {field_error("subject")}
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Message"</label>
                                <Textarea value=vm.message placeholder="Your message..." attr:rows=5 />
                                {field_error("message")}
                            </div>
                            <Button
                                class="btn-submit"
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| vm.submit()
                                disabled=move || vm.is_busy()
                            >
                                {button_icon}
                                " "
                                {move || vm.phase.get().button_label()}
                            </Button>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
