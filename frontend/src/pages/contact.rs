use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::{Motion, Reveal};
use crate::contact::client::{ContactTransport, HttpTransport};
use crate::contact::error::ContactError;
use crate::contact::form::{ContactFormController, Field, ServiceType, SubmissionStatus};

const SUPPORT_EMAIL: &str = "support@g-logistics.site";

struct Office {
    city: &'static str,
    address: &'static str,
    phone: &'static str,
    email: &'static str,
}

const OFFICES: [Office; 4] = [
    Office { city: "USA", address: "USA", phone: SUPPORT_EMAIL, email: SUPPORT_EMAIL },
    Office { city: "USA", address: "USA", phone: SUPPORT_EMAIL, email: SUPPORT_EMAIL },
    Office { city: "London", address: "UK", phone: SUPPORT_EMAIL, email: SUPPORT_EMAIL },
    Office { city: "Singapore", address: "Singapore", phone: SUPPORT_EMAIL, email: SUPPORT_EMAIL },
];

const BUSINESS_HOURS: [(&str, &str); 3] = [
    ("Monday - Friday:", "8:00 AM - 8:00 PM"),
    ("Saturday:", "9:00 AM - 6:00 PM"),
    ("Sunday:", "10:00 AM - 4:00 PM"),
];

/// Inline banner for a settled submission: css class and text.
fn status_banner(status: SubmissionStatus) -> Option<(&'static str, &'static str)> {
    match status {
        SubmissionStatus::Success => Some((
            "status-message success",
            "Message sent successfully! We'll get back to you soon.",
        )),
        SubmissionStatus::Error => Some((
            "status-message error",
            "Failed to send message. Please try again.",
        )),
        SubmissionStatus::Idle | SubmissionStatus::Sending => None,
    }
}

pub enum ContactMsg {
    UpdateField(Field, String),
    Submit,
    Settled(Result<(), ContactError>),
}

#[derive(Properties, PartialEq)]
pub struct ContactPageProps {
    #[prop_or_default]
    pub transport: HttpTransport,
}

/// The option the service select should show. Browsers stop following an
/// option's `selected` attribute once the user has picked one, so the page
/// pushes this value onto the element after every render.
fn service_select_value(form: &ContactFormController) -> &'static str {
    form.draft().service_type.value()
}

pub struct ContactPage {
    form: ContactFormController,
    service_select: NodeRef,
}

impl Component for ContactPage {
    type Message = ContactMsg;
    type Properties = ContactPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactFormController::new(),
            service_select: NodeRef::default(),
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(select) = self.service_select.cast::<HtmlSelectElement>() {
            let value = service_select_value(&self.form);
            if select.value() != value {
                select.set_value(value);
            }
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::UpdateField(field, value) => {
                self.form.update_field(field, value);
                true
            }
            ContactMsg::Submit => match self.form.begin_submit() {
                Ok(submission) => {
                    let transport = ctx.props().transport.clone();
                    ctx.link().send_future(async move {
                        ContactMsg::Settled(transport.send(&submission).await)
                    });
                    true
                }
                Err(e) => {
                    log::warn!("Contact form not submitted: {}", e);
                    false
                }
            },
            ContactMsg::Settled(outcome) => {
                self.form.finish_submit(outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="contact-page">
                <style>{CONTACT_STYLES}</style>
                <section class="page-hero">
                    <Reveal on_load={true}>
                        <h1>{"Contact "}<span class="accent">{"Us"}</span></h1>
                        <p>
                            {"Get in touch with our logistics experts. We're here to help with all your shipping and logistics needs."}
                        </p>
                    </Reveal>
                </section>

                <section class="contact-main">
                    <div class="contact-grid">
                        <Reveal motion={Motion::FromLeft} class="contact-form-card">
                            { self.view_form(ctx) }
                        </Reveal>
                        <Reveal motion={Motion::FromRight} class="contact-info">
                            { self.view_info() }
                        </Reveal>
                    </div>
                </section>

                <section class="offices">
                    <Reveal class="section-heading">
                        <h2>{"Global Offices"}</h2>
                        <p>{"Find our offices worldwide for local support and services"}</p>
                    </Reveal>
                    <div class="offices-grid">
                        { for OFFICES.iter().enumerate().map(|(index, office)| html! {
                            <Reveal delay_ms={index as u32 * 100} class="office-card">
                                <h3>{"🏢 "}{office.city}</h3>
                                <p>{"📍 "}{office.address}</p>
                                <p>{"📞 "}{office.phone}</p>
                                <p>{"✉️ "}{office.email}</p>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section class="map-section">
                    <Reveal class="section-heading">
                        <h2>{"Find Us"}</h2>
                        <p>{"Visit our headquarters"}</p>
                    </Reveal>
                    <div class="map-placeholder">
                        <span class="map-pin">{"📍"}</span>
                        <p>{"Interactive Map Coming Soon"}</p>
                    </div>
                </section>
            </div>
        }
    }
}

impl ContactPage {
    fn input_callback(ctx: &Context<Self>, field: Field) -> Callback<InputEvent> {
        ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactMsg::UpdateField(field, input.value())
        })
    }

    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let draft = self.form.draft();
        let sending = self.form.status().is_sending();

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let on_service = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            ContactMsg::UpdateField(Field::ServiceType, select.value())
        });
        let on_message = ctx.link().callback(|e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::UpdateField(Field::Message, textarea.value())
        });

        html! {
            <>
                <h2>{"💬 Send us a Message"}</h2>
                <form {onsubmit} class="contact-form">
                    <div class="form-row">
                        <input
                            type="text"
                            name="name"
                            placeholder="Full Name *"
                            required={true}
                            value={draft.name.clone()}
                            oninput={Self::input_callback(ctx, Field::Name)}
                        />
                        <input
                            type="email"
                            name="email"
                            placeholder="Email Address *"
                            required={true}
                            value={draft.email.clone()}
                            oninput={Self::input_callback(ctx, Field::Email)}
                        />
                    </div>
                    <div class="form-row">
                        <input
                            type="tel"
                            name="phone"
                            placeholder="Phone Number"
                            value={draft.phone.clone()}
                            oninput={Self::input_callback(ctx, Field::Phone)}
                        />
                        <input
                            type="text"
                            name="company"
                            placeholder="Company Name"
                            value={draft.company.clone()}
                            oninput={Self::input_callback(ctx, Field::Company)}
                        />
                    </div>
                    <div class="form-row">
                        <select
                            ref={self.service_select.clone()}
                            name="serviceType"
                            onchange={on_service}
                        >
                            { for ServiceType::ALL.into_iter().map(|service| html! {
                                <option
                                    value={service.value()}
                                    selected={service == draft.service_type}
                                >
                                    {service.label()}
                                </option>
                            }) }
                        </select>
                        <input
                            type="text"
                            name="subject"
                            placeholder="Subject *"
                            required={true}
                            value={draft.subject.clone()}
                            oninput={Self::input_callback(ctx, Field::Subject)}
                        />
                    </div>
                    <textarea
                        name="message"
                        placeholder="Your Message *"
                        required={true}
                        rows="6"
                        value={draft.message.clone()}
                        oninput={on_message}
                    />

                    if let Some((class, text)) = status_banner(self.form.status()) {
                        <div class={class}>{text}</div>
                    }

                    <button
                        type="submit"
                        class={classes!("send-button", (!self.form.can_submit()).then_some("incomplete"))}
                        disabled={sending}
                    >
                        if sending {
                            <span class="loading-spinner"></span>
                            {" Sending..."}
                        } else {
                            {"➤ Send Message"}
                        }
                    </button>
                </form>
            </>
        }
    }

    fn view_info(&self) -> Html {
        html! {
            <>
                <h2>{"Get in Touch"}</h2>
                <p class="lead">
                    {"Ready to streamline your logistics? Our team of experts is standing by to help you find the perfect shipping solution for your business needs."}
                </p>
                <div class="info-card">
                    <h3>{"Quick Contact"}</h3>
                    <p>{"✉️ "}{SUPPORT_EMAIL}</p>
                    <p>{"🕒 24/7 Customer Support"}</p>
                </div>
                <div class="info-card emergency">
                    <h3>{"Emergency Support"}</h3>
                    <p>{"For urgent shipment issues or emergencies"}</p>
                    <p>{"📞 "}{SUPPORT_EMAIL}</p>
                </div>
                <div class="info-card hours">
                    <h3>{"Business Hours"}</h3>
                    { for BUSINESS_HOURS.iter().map(|(days, hours)| html! {
                        <div class="hours-row">
                            <span>{*days}</span>
                            <span>{*hours}</span>
                        </div>
                    }) }
                </div>
            </>
        }
    }
}

const CONTACT_STYLES: &str = r#"
.contact-main {
    padding: 5rem 1.5rem;
    background: #f9fafb;
}
.contact-grid {
    max-width: 1200px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
}
.contact-form-card {
    background: #fff;
    border-radius: 12px;
    padding: 2rem;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
}
.contact-form {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}
.form-row {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
}
.contact-form input,
.contact-form select,
.contact-form textarea {
    width: 100%;
    padding: 0.75rem 1rem;
    border: 1px solid #d1d5db;
    border-radius: 8px;
    font: inherit;
}
.contact-form input:focus,
.contact-form select:focus,
.contact-form textarea:focus {
    outline: none;
    box-shadow: 0 0 0 2px #10b981;
}
.status-message {
    padding: 1rem;
    border-radius: 8px;
}
.status-message.success {
    background: #d1fae5;
    border: 1px solid #34d399;
    color: #047857;
}
.status-message.error {
    background: #fee2e2;
    border: 1px solid #f87171;
    color: #b91c1c;
}
.send-button {
    background: #059669;
    color: #fff;
    border: none;
    border-radius: 8px;
    padding: 1rem 2rem;
    font-size: 1.1rem;
    font-weight: 600;
    cursor: pointer;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
}
.send-button:hover { background: #047857; }
.send-button.incomplete { background: #6ee7b7; }
.send-button:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}
.loading-spinner {
    display: inline-block;
    width: 20px;
    height: 20px;
    border: 3px solid rgba(255,255,255,.3);
    border-radius: 50%;
    border-top-color: #fff;
    animation: spin 1s ease-in-out infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
.contact-info .lead {
    color: #4b5563;
    font-size: 1.1rem;
    margin-bottom: 2rem;
}
.info-card {
    background: #fff;
    border-radius: 12px;
    padding: 1.5rem;
    margin-bottom: 2rem;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
}
.info-card.emergency {
    background: #fef2f2;
    border: 1px solid #fecaca;
    color: #991b1b;
}
.info-card.hours {
    background: #ecfdf5;
    border: 1px solid #a7f3d0;
    color: #047857;
}
.hours-row {
    display: flex;
    justify-content: space-between;
}
.offices {
    padding: 5rem 1.5rem;
}
.offices-grid {
    max-width: 1200px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 2rem;
}
.office-card {
    background: #f9fafb;
    border-radius: 12px;
    padding: 1.5rem;
    color: #4b5563;
}
.office-card:hover { box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1); }
.map-section {
    padding: 5rem 1.5rem;
    background: #f3f4f6;
}
.map-placeholder {
    max-width: 1200px;
    height: 24rem;
    margin: 0 auto;
    border-radius: 12px;
    background: #d1d5db;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    color: #4b5563;
}
.map-pin { font-size: 4rem; }
@media (max-width: 1024px) {
    .contact-grid { grid-template-columns: 1fr; }
    .offices-grid { grid-template-columns: repeat(2, 1fr); }
}
@media (max-width: 768px) {
    .form-row { grid-template-columns: 1fr; }
    .offices-grid { grid-template-columns: 1fr; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_only_for_settled_submissions() {
        assert_eq!(status_banner(SubmissionStatus::Idle), None);
        assert_eq!(status_banner(SubmissionStatus::Sending), None);

        let (class, text) = status_banner(SubmissionStatus::Success).expect("success banner");
        assert!(class.ends_with("success"));
        assert!(text.starts_with("Message sent successfully"));

        let (class, text) = status_banner(SubmissionStatus::Error).expect("error banner");
        assert!(class.ends_with("error"));
        assert!(text.contains("Please try again"));
    }

    #[test]
    fn service_select_returns_to_general_after_a_successful_send() {
        let mut form = ContactFormController::new();
        form.update_field(Field::Name, "Ada Lovelace".to_string());
        form.update_field(Field::Email, "ada@example.com".to_string());
        form.update_field(Field::Subject, "Quote".to_string());
        form.update_field(Field::Message, "Two crates to London.".to_string());
        form.update_field(Field::ServiceType, "partnership".to_string());
        assert_eq!(service_select_value(&form), "partnership");

        form.begin_submit().expect("complete draft");
        form.finish_submit(Ok(()));

        assert_eq!(service_select_value(&form), "general");
    }

    #[test]
    fn service_select_keeps_the_choice_after_a_failed_send() {
        let mut form = ContactFormController::new();
        form.update_field(Field::Name, "Ada Lovelace".to_string());
        form.update_field(Field::Email, "ada@example.com".to_string());
        form.update_field(Field::Subject, "Quote".to_string());
        form.update_field(Field::Message, "Two crates to London.".to_string());
        form.update_field(Field::ServiceType, "tracking".to_string());

        form.begin_submit().expect("complete draft");
        form.finish_submit(Err(ContactError::Rejected));

        assert_eq!(service_select_value(&form), "tracking");
    }

    #[test]
    fn service_select_starts_on_general_inquiry() {
        let form = ContactFormController::new();
        assert_eq!(form.draft().service_type.label(), "General Inquiry");
        assert_eq!(ServiceType::ALL.len(), 6);
    }
}
