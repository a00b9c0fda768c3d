//! DOM wiring for the contact form.
//!
//! Looks up the form and its three fields by id, reads their declared
//! constraints once, and attaches `input`, `blur` and `submit` listeners that
//! defer every decision to the pure `validation`, `masking` and `countdown`
//! modules. A page without the form, or with any of the three fields
//! missing, gets no listeners at all.
//!
//! The error log handle is passed in by the caller so that controllers
//! re-created after a soft navigation keep appending to the same history.

use std::rc::Rc;

use crate::config::SiteConfig;
use crate::state::error_log::ErrorLog;

#[cfg(feature = "csr")]
use web_sys::{HtmlElement, HtmlFormElement, HtmlInputElement};

#[cfg(feature = "csr")]
use super::countdown::{countdown, truncate_to};
#[cfg(feature = "csr")]
use super::masking::{ILLEGAL_CHARACTER_MESSAGE, MaskOutcome, mask};
#[cfg(feature = "csr")]
use super::validation::{FieldKind, FieldRules, FieldState, SubmitOutcome, first_error, gate_submit, validate_on_blur};
#[cfg(feature = "csr")]
use crate::util::dom::{self, FieldElement};
#[cfg(feature = "csr")]
use crate::util::time::now_iso;

/// Wire the contact form on the current page. Returns `true` if the form
/// and all three fields were found.
pub fn install(config: &Rc<SiteConfig>, errors: &ErrorLog) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(form) = ContactForm::find(config, errors) else {
            log::debug!("no complete #{} on this page; form validation disabled", config.form_id);
            return false;
        };
        form.wire();
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, errors);
        false
    }
}

#[cfg(feature = "csr")]
struct Field {
    kind: FieldKind,
    element: FieldElement,
    log_name: String,
    rules: FieldRules,
}

#[cfg(feature = "csr")]
impl Field {
    fn find(kind: FieldKind, id: &str) -> Option<Self> {
        let element = FieldElement::find(id)?;
        let rules = read_rules(&element);
        let log_name = element.log_name();
        Some(Self { kind, element, log_name, rules })
    }

    fn state<'a>(&'a self, value: &'a str, native_message: &'a str) -> FieldState<'a> {
        FieldState { kind: self.kind, name: &self.log_name, value, rules: &self.rules, native_message }
    }
}

#[cfg(feature = "csr")]
fn read_rules(element: &FieldElement) -> FieldRules {
    let el = element.element();
    let pattern = el.get_attribute("pattern").and_then(|raw| match FieldRules::compile_pattern(&raw) {
        Ok(re) => Some(re),
        Err(e) => {
            log::warn!("ignoring pattern on #{}: {e}", el.id());
            None
        }
    });
    FieldRules {
        required: el.has_attribute("required"),
        min_len: element.usize_attr("minlength"),
        max_len: element.usize_attr("maxlength"),
        email: el.get_attribute("type").is_some_and(|t| t.eq_ignore_ascii_case("email")),
        pattern,
    }
}

#[cfg(feature = "csr")]
struct ContactForm {
    config: Rc<SiteConfig>,
    errors: ErrorLog,
    form: HtmlFormElement,
    fields: [Field; 3],
    error_output: Option<HtmlElement>,
    info_output: Option<HtmlElement>,
    error_log_field: Option<HtmlInputElement>,
    char_count: Option<HtmlElement>,
}

#[cfg(feature = "csr")]
impl ContactForm {
    fn find(config: &Rc<SiteConfig>, errors: &ErrorLog) -> Option<Rc<Self>> {
        let form = dom::by_id_as::<HtmlFormElement>(&config.form_id)?;
        let fields = [
            Field::find(FieldKind::Name, &config.name_field_id)?,
            Field::find(FieldKind::Email, &config.email_field_id)?,
            Field::find(FieldKind::Message, &config.message_field_id)?,
        ];
        Some(Rc::new(Self {
            config: Rc::clone(config),
            errors: errors.clone(),
            form,
            fields,
            error_output: dom::by_id_as(&config.error_output_id),
            info_output: dom::by_id_as(&config.info_output_id),
            error_log_field: dom::by_id_as(&config.error_log_field_id),
            char_count: dom::by_id_as(&config.char_count_id),
        }))
    }

    fn field(&self, kind: FieldKind) -> &Field {
        match kind {
            FieldKind::Name => &self.fields[0],
            FieldKind::Email => &self.fields[1],
            FieldKind::Message => &self.fields[2],
        }
    }

    fn wire(self: Rc<Self>) {
        for output in [&self.error_output, &self.info_output].into_iter().flatten() {
            output.set_text_content(Some(""));
        }
        self.update_countdown();

        for kind in FieldKind::ORDER {
            let target = self.field(kind).element.element().clone();

            let this = Rc::clone(&self);
            dom::listen(&target, "input", move |_| this.on_input(kind));

            let this = Rc::clone(&self);
            dom::listen(&target, "blur", move |_| this.on_blur(kind));
        }

        let this = Rc::clone(&self);
        dom::listen(&self.form, "submit", move |event| this.on_submit(&event));
        log::debug!("contact form validation wired on #{}", self.config.form_id);
    }

    /// Read all three values and browser messages and run `f` over their
    /// field states.
    fn with_states<R>(&self, f: impl FnOnce(&[FieldState<'_>; 3]) -> R) -> R {
        let [name, email, message] = &self.fields;
        let read = |field: &Field| (field.element.value(), field.element.validation_message());
        let [(name_value, name_native), (email_value, email_native), (message_value, message_native)] =
            [read(name), read(email), read(message)];
        f(&[
            name.state(&name_value, &name_native),
            email.state(&email_value, &email_native),
            message.state(&message_value, &message_native),
        ])
    }

    fn on_input(&self, kind: FieldKind) {
        match kind {
            FieldKind::Name => self.apply_mask(),
            FieldKind::Message => self.update_countdown(),
            FieldKind::Email => {}
        }
        self.sync_validity(kind);
        self.show_first_error();
    }

    fn on_blur(&self, kind: FieldKind) {
        self.sync_validity(kind);
        self.with_states(|states| {
            if let Some(state) = states.iter().find(|s| s.kind == kind) {
                validate_on_blur(state, &self.errors, now_iso);
            }
        });
        self.show_first_error();
    }

    fn on_submit(&self, event: &web_sys::Event) {
        for kind in FieldKind::ORDER {
            self.sync_validity(kind);
        }
        let outcome = self.with_states(|states| gate_submit(states, &self.errors, now_iso));
        match outcome {
            Ok(SubmitOutcome::Blocked { message }) => {
                event.prevent_default();
                self.show_error(Some(&message));
                log::debug!("contact form submit blocked: {message}");
            }
            Ok(SubmitOutcome::Allowed { errors_json }) => {
                if let Some(hidden) = &self.error_log_field {
                    hidden.set_value(&errors_json);
                }
            }
            Err(e) => log::warn!("could not serialize form error history: {e}"),
        }
    }

    fn apply_mask(&self) {
        let field = self.field(FieldKind::Name);
        let Some(pattern) = &field.rules.pattern else {
            return;
        };
        let MaskOutcome::Rejected { restored } = mask(pattern, &field.element.value()) else {
            return;
        };
        field.element.set_value(&restored);
        self.flash(field.element.element());
        self.errors.record(&field.log_name, &restored, ILLEGAL_CHARACTER_MESSAGE, now_iso());
    }

    fn flash(&self, element: &web_sys::Element) {
        let class = self.config.flash_class.clone();
        if element.class_list().add_1(&class).is_err() {
            return;
        }
        let element = element.clone();
        gloo_timers::callback::Timeout::new(self.config.flash_ms, move || {
            if element.class_list().remove_1(&class).is_err() {
                log::debug!("could not clear {class}");
            }
        })
        .forget();
    }

    fn update_countdown(&self) {
        let field = self.field(FieldKind::Message);
        let Some(max) = field.rules.max_len else {
            return;
        };
        let mut value = field.element.value();
        if let Some(truncated) = truncate_to(&value, max) {
            field.element.set_value(&truncated);
            value = truncated;
        }
        let Some(display) = &self.char_count else {
            return;
        };
        let state = countdown(&value, max, self.config.countdown_warning);
        display.set_text_content(Some(&state.label()));

        let style = display.style();
        let (color, weight) = if state.emphasized {
            (self.config.countdown_warning_color.as_str(), self.config.countdown_warning_weight.as_str())
        } else {
            ("", "")
        };
        if style.set_property("color", color).and(style.set_property("font-weight", weight)).is_err() {
            log::debug!("could not style #{}", self.config.char_count_id);
        }
    }

    /// Set the field-specific custom message, or clear it so the browser's
    /// own localized message stands for every other failure.
    fn sync_validity(&self, kind: FieldKind) {
        let field = self.field(kind);
        let value = field.element.value();
        field.element.set_custom_validity(field.state(&value, "").custom_validity());
    }

    fn show_first_error(&self) {
        let message = self.with_states(|states| first_error(states));
        self.show_error(message.as_deref());
    }

    fn show_error(&self, message: Option<&str>) {
        if let Some(output) = &self.error_output {
            output.set_text_content(Some(message.unwrap_or("")));
        }
    }
}

