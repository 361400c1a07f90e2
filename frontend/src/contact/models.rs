use serde::Serialize;
use std::collections::BTreeMap;

/// What the webhook receives. Field names follow the JSON the n8n flow expects.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub full_name: String,
    pub email: String,
    pub whatsapp: String,
    pub gdpr_consent: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FullName,
    Email,
    WhatsApp,
    GdprConsent,
}

/// Per-field messages shown inline under the offending input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn has(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_webhook_field_names() {
        let lead = LeadSubmission {
            full_name: "João Silva".to_string(),
            email: "joao@empresa.pt".to_string(),
            whatsapp: "+351 912 345 678".to_string(),
            gdpr_consent: true,
        };
        let value = serde_json::to_value(&lead).unwrap();
        assert_eq!(value["fullName"], "João Silva");
        assert_eq!(value["email"], "joao@empresa.pt");
        assert_eq!(value["whatsapp"], "+351 912 345 678");
        assert_eq!(value["gdprConsent"], true);
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn clearing_one_field_keeps_the_others() {
        let mut errors = ValidationErrors::default();
        errors.insert(Field::Email, "Email inválido");
        errors.insert(Field::WhatsApp, "WhatsApp é obrigatório");
        errors.clear_field(Field::Email);
        assert!(!errors.has(Field::Email));
        assert_eq!(errors.get(Field::WhatsApp), Some("WhatsApp é obrigatório"));
        assert_eq!(errors.len(), 1);
    }
}
