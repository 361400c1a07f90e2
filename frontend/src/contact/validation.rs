use once_cell::sync::Lazy;
use regex::Regex;

use super::models::{Field, LeadSubmission, ValidationErrors};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

// Portuguese mobile: +351, then 9 digits starting with 9, optional single spaces
// between the 3-digit groups.
static PT_MOBILE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+351\s?9[0-9]{2}\s?[0-9]{3}\s?[0-9]{3}$").expect("phone pattern is valid")
});

pub const FULL_NAME_REQUIRED: &str = "Nome completo é obrigatório";
pub const EMAIL_REQUIRED: &str = "Email é obrigatório";
pub const EMAIL_INVALID: &str = "Email inválido";
pub const WHATSAPP_REQUIRED: &str = "WhatsApp é obrigatório";
pub const WHATSAPP_INVALID: &str = "Número WhatsApp português inválido";
pub const CONSENT_REQUIRED: &str = "Deve aceitar a política de privacidade";

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_pt_mobile(number: &str) -> bool {
    PT_MOBILE_RE.is_match(number)
}

/// Runs every rule and reports all failures at once.
pub fn validate(lead: &LeadSubmission) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if lead.full_name.trim().is_empty() {
        errors.insert(Field::FullName, FULL_NAME_REQUIRED);
    }

    if lead.email.trim().is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&lead.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    if lead.whatsapp.trim().is_empty() {
        errors.insert(Field::WhatsApp, WHATSAPP_REQUIRED);
    } else if !is_valid_pt_mobile(&lead.whatsapp) {
        errors.insert(Field::WhatsApp, WHATSAPP_INVALID);
    }

    if !lead.gdpr_consent {
        errors.insert(Field::GdprConsent, CONSENT_REQUIRED);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_lead() -> LeadSubmission {
        LeadSubmission {
            full_name: "Maria Costa".to_string(),
            email: "maria@empresa.pt".to_string(),
            whatsapp: "+351 912 345 678".to_string(),
            gdpr_consent: true,
        }
    }

    #[test]
    fn complete_lead_passes() {
        assert!(validate(&valid_lead()).is_empty());
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate(&LeadSubmission::default());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::FullName), Some(FULL_NAME_REQUIRED));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(Field::WhatsApp), Some(WHATSAPP_REQUIRED));
        assert_eq!(errors.get(Field::GdprConsent), Some(CONSENT_REQUIRED));
    }

    #[test]
    fn whitespace_name_is_empty() {
        let lead = LeadSubmission { full_name: "   ".to_string(), ..valid_lead() };
        let errors = validate(&lead);
        assert_eq!(errors.get(Field::FullName), Some(FULL_NAME_REQUIRED));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn email_shape() {
        assert!(!is_valid_email("a@b"));
        assert!(is_valid_email("a@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));

        let lead = LeadSubmission { email: "a@b".to_string(), ..valid_lead() };
        assert_eq!(validate(&lead).get(Field::Email), Some(EMAIL_INVALID));
    }

    #[test]
    fn portuguese_mobile_shape() {
        assert!(is_valid_pt_mobile("+351 912 345 678"));
        assert!(is_valid_pt_mobile("+351912345678"));
        assert!(!is_valid_pt_mobile("+351 212 345 678"));
        assert!(!is_valid_pt_mobile("+351 912 345 67"));
        assert!(!is_valid_pt_mobile("+34 612 345 678"));
        assert!(!is_valid_pt_mobile("912 345 678"));

        let lead = LeadSubmission { whatsapp: "+351 2".to_string(), ..valid_lead() };
        assert_eq!(validate(&lead).get(Field::WhatsApp), Some(WHATSAPP_INVALID));
    }

    #[test]
    fn missing_consent_always_fails() {
        let lead = LeadSubmission { gdpr_consent: false, ..valid_lead() };
        let errors = validate(&lead);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::GdprConsent), Some(CONSENT_REQUIRED));

        let errors = validate(&LeadSubmission { gdpr_consent: false, ..LeadSubmission::default() });
        assert!(errors.has(Field::GdprConsent));
    }
}
