use std::rc::Rc;
use yew::Reducible;

use super::models::{Field, LeadSubmission, SubmitStatus, ValidationErrors};
use super::phone::format_whatsapp;
use super::validation::validate;

pub enum FormAction {
    SetFullName(String),
    SetEmail(String),
    /// Raw input from the WhatsApp field, formatted on the way in.
    SetWhatsApp(String),
    SetConsent(bool),
    Rejected(ValidationErrors),
    Started,
    Finished { delivered: bool },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub lead: LeadSubmission,
    pub errors: ValidationErrors,
    pub status: SubmitStatus,
    pub submitting: bool,
}

impl FormState {
    /// Validates the current values. Returns the payload to send, or the
    /// complete error set that should replace the current one.
    pub fn prepare_submission(&self) -> Result<LeadSubmission, ValidationErrors> {
        let errors = validate(&self.lead);
        if errors.is_empty() {
            Ok(self.lead.clone())
        } else {
            Err(errors)
        }
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SetFullName(value) => {
                self.lead.full_name = value;
                self.errors.clear_field(Field::FullName);
            }
            FormAction::SetEmail(value) => {
                self.lead.email = value;
                self.errors.clear_field(Field::Email);
            }
            FormAction::SetWhatsApp(raw) => {
                self.lead.whatsapp = format_whatsapp(&raw);
                self.errors.clear_field(Field::WhatsApp);
            }
            FormAction::SetConsent(checked) => {
                self.lead.gdpr_consent = checked;
                self.errors.clear_field(Field::GdprConsent);
            }
            FormAction::Rejected(errors) => {
                self.errors = errors;
            }
            FormAction::Started => {
                self.errors = ValidationErrors::default();
                self.submitting = true;
                self.status = SubmitStatus::Idle;
            }
            FormAction::Finished { delivered } => {
                self.submitting = false;
                if delivered {
                    self.status = SubmitStatus::Success;
                    self.lead = LeadSubmission::default();
                    self.errors = ValidationErrors::default();
                } else {
                    self.status = SubmitStatus::Error;
                }
            }
        }
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut state = FormState::default();
        state.apply(FormAction::SetFullName("Rui Almeida".to_string()));
        state.apply(FormAction::SetEmail("rui@empresa.pt".to_string()));
        state.apply(FormAction::SetWhatsApp("912345678".to_string()));
        state.apply(FormAction::SetConsent(true));
        state
    }

    /// Mirrors what the submit handler does before any request goes out.
    fn submit(state: &mut FormState) -> Option<LeadSubmission> {
        if state.submitting {
            return None;
        }
        match state.prepare_submission() {
            Ok(lead) => {
                state.apply(FormAction::Started);
                Some(lead)
            }
            Err(errors) => {
                state.apply(FormAction::Rejected(errors));
                None
            }
        }
    }

    #[test]
    fn invalid_form_sends_nothing_and_flags_every_field() {
        let mut state = FormState::default();
        assert!(submit(&mut state).is_none());
        assert!(!state.submitting);
        assert_eq!(state.errors.len(), 4);
    }

    #[test]
    fn errors_are_replaced_on_each_attempt() {
        let mut state = FormState::default();
        submit(&mut state);
        state.apply(FormAction::SetFullName("Rui".to_string()));
        state.apply(FormAction::SetEmail("rui@x".to_string()));
        submit(&mut state);
        assert!(!state.errors.has(Field::FullName));
        assert_eq!(state.errors.get(Field::Email), Some("Email inválido"));
        assert_eq!(state.errors.len(), 3);
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut state = FormState::default();
        submit(&mut state);
        state.apply(FormAction::SetWhatsApp("9".to_string()));
        assert!(!state.errors.has(Field::WhatsApp));
        assert!(state.errors.has(Field::Email));
        assert_eq!(state.lead.whatsapp, "+351 9");
    }

    #[test]
    fn valid_form_goes_busy_with_the_formatted_payload() {
        let mut state = filled();
        let lead = submit(&mut state).expect("valid form submits");
        assert_eq!(lead.whatsapp, "+351 912 345 678");
        assert!(state.submitting);
        assert_eq!(state.status, SubmitStatus::Idle);
        assert!(submit(&mut state).is_none(), "busy form rejects a second submit");
    }

    #[test]
    fn success_resets_the_form() {
        let mut state = filled();
        submit(&mut state);
        state.apply(FormAction::Finished { delivered: true });
        assert_eq!(state.status, SubmitStatus::Success);
        assert_eq!(state.lead, LeadSubmission::default());
        assert!(state.errors.is_empty());
        assert!(!state.submitting);
    }

    #[test]
    fn failure_keeps_what_the_user_typed() {
        let mut state = filled();
        let sent = submit(&mut state).unwrap();
        state.apply(FormAction::Finished { delivered: false });
        assert_eq!(state.status, SubmitStatus::Error);
        assert_eq!(state.lead, sent);
        assert!(!state.submitting);

        // retry works straight away
        assert!(submit(&mut state).is_some());
        assert_eq!(state.status, SubmitStatus::Idle);
    }

    #[test]
    fn reducer_applies_to_latest_state() {
        let state = Rc::new(filled());
        let state = state.reduce(FormAction::Started);
        let state = state.reduce(FormAction::SetFullName("Rui A.".to_string()));
        let state = state.reduce(FormAction::Finished { delivered: false });
        assert_eq!(state.lead.full_name, "Rui A.");
        assert_eq!(state.status, SubmitStatus::Error);
    }
}
