//! Owner and pet form validation.
//!
//! Checks are lightweight: non-empty strings and an `@` in the email, no
//! RFC address parsing. Every failing field is reported at once so the form
//! can highlight all of them in one pass.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{PetConfig, PetCount};

const SECOND_PET_NAME: &str = "second_pet_name";

/// Raw form state as entered by the owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "second_pet_named", skip_on_field_errors = false))]
pub struct BookingForm {
    pub pets: PetConfig,
    /// Entry 0 is the first pet, entry 1 the second (used only for two pets)
    #[serde(default)]
    #[validate(custom(function = "first_pet_named"))]
    pub pet_names: Vec<String>,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub owner_name: String,
    #[serde(default)]
    #[validate(length(min = 1), contains(pattern = "@"))]
    pub owner_email: String,
    #[serde(default)]
    pub owner_phone: String,
    #[serde(default)]
    pub special_requests: String,
    #[serde(default)]
    #[validate(custom(function = "must_agree"))]
    pub agreed_to_terms: bool,
}

#[allow(clippy::ptr_arg)]
fn first_pet_named(names: &Vec<String>) -> Result<(), ValidationError> {
    match names.first() {
        Some(name) if !name.is_empty() => Ok(()),
        _ => Err(ValidationError::new("first_pet_name")),
    }
}

fn second_pet_named(form: &BookingForm) -> Result<(), ValidationError> {
    if form.pets.pet_count == PetCount::Two && form.pet_name(1).is_empty() {
        return Err(ValidationError::new(SECOND_PET_NAME));
    }
    Ok(())
}

fn must_agree(agreed: &bool) -> Result<(), ValidationError> {
    if *agreed {
        Ok(())
    } else {
        Err(ValidationError::new("agreed_to_terms"))
    }
}

impl BookingForm {
    /// Blank form for the given pets
    pub fn new(pets: PetConfig) -> Self {
        Self {
            pets,
            pet_names: Vec::new(),
            owner_name: String::new(),
            owner_email: String::new(),
            owner_phone: String::new(),
            special_requests: String::new(),
            agreed_to_terms: false,
        }
    }

    pub(crate) fn pet_name(&self, index: usize) -> &str {
        self.pet_names.get(index).map_or("", String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    OwnerName,
    OwnerEmail,
    FirstPetName,
    SecondPetName,
    AgreedToTerms,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub missing_fields: BTreeSet<FieldId>,
}

impl ValidationReport {
    fn from_missing(missing_fields: BTreeSet<FieldId>) -> Self {
        Self {
            valid: missing_fields.is_empty(),
            missing_fields,
        }
    }

    pub fn is_missing(&self, field: FieldId) -> bool {
        self.missing_fields.contains(&field)
    }
}

/// Maps `validator` errors onto the form's field ids
fn missing_fields(errors: &ValidationErrors) -> BTreeSet<FieldId> {
    let mut missing = BTreeSet::new();
    for (field, field_errors) in errors.field_errors() {
        match field.as_ref() {
            "owner_name" => {
                missing.insert(FieldId::OwnerName);
            }
            "owner_email" => {
                missing.insert(FieldId::OwnerEmail);
            }
            "pet_names" => {
                missing.insert(FieldId::FirstPetName);
            }
            "agreed_to_terms" => {
                missing.insert(FieldId::AgreedToTerms);
            }
            // struct-level checks
            "__all__" => {
                if field_errors.iter().any(|e| e.code == SECOND_PET_NAME) {
                    missing.insert(FieldId::SecondPetName);
                }
            }
            other => tracing::warn!("Unmapped booking form error on {}", other),
        }
    }
    missing
}

pub struct BookingFormValidator;

impl BookingFormValidator {
    pub fn validate(form: &BookingForm) -> ValidationReport {
        let missing = match form.validate() {
            Ok(()) => BTreeSet::new(),
            Err(errors) => missing_fields(&errors),
        };
        ValidationReport::from_missing(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DogSize;

    fn filled(pets: PetConfig) -> BookingForm {
        BookingForm {
            pet_names: vec!["Miso".to_string()],
            owner_name: "Sam Rivera".to_string(),
            owner_email: "sam@example.com".to_string(),
            agreed_to_terms: true,
            ..BookingForm::new(pets)
        }
    }

    #[test]
    fn test_complete_form_is_valid() {
        let report = BookingFormValidator::validate(&filled(PetConfig::cat(PetCount::One)));
        assert!(report.valid);
        assert!(report.missing_fields.is_empty());
    }

    #[test]
    fn test_blank_form_reports_everything() {
        let report = BookingFormValidator::validate(&BookingForm::new(PetConfig::dog(
            DogSize::Small,
            PetCount::Two,
        )));
        assert!(!report.valid);
        assert_eq!(
            report.missing_fields.into_iter().collect::<Vec<_>>(),
            vec![
                FieldId::OwnerName,
                FieldId::OwnerEmail,
                FieldId::FirstPetName,
                FieldId::SecondPetName,
                FieldId::AgreedToTerms,
            ]
        );
    }

    #[test]
    fn test_second_pet_name_required_for_two_pets() {
        let report = BookingFormValidator::validate(&filled(PetConfig::cat(PetCount::Two)));
        assert!(!report.valid);
        assert!(report.is_missing(FieldId::SecondPetName));
        assert_eq!(report.missing_fields.len(), 1);
    }

    #[test]
    fn test_empty_second_name_counts_as_missing() {
        let mut form = filled(PetConfig::cat(PetCount::Two));
        form.pet_names.push(String::new());
        assert!(BookingFormValidator::validate(&form).is_missing(FieldId::SecondPetName));

        form.pet_names[1] = "Tofu".to_string();
        assert!(BookingFormValidator::validate(&form).valid);
    }

    #[test]
    fn test_second_pet_name_ignored_for_one_pet() {
        let mut form = filled(PetConfig::cat(PetCount::One));
        form.pet_names.push(String::new());
        assert!(BookingFormValidator::validate(&form).valid);
    }

    #[test]
    fn test_email_needs_at_sign() {
        let mut form = filled(PetConfig::cat(PetCount::One));
        form.owner_email = "sam.example.com".to_string();
        let report = BookingFormValidator::validate(&form);
        assert_eq!(report.missing_fields, BTreeSet::from([FieldId::OwnerEmail]));

        // syntactic check only
        form.owner_email = "@".to_string();
        assert!(BookingFormValidator::validate(&form).valid);
    }

    #[test]
    fn test_terms_must_be_agreed() {
        let mut form = filled(PetConfig::cat(PetCount::One));
        form.agreed_to_terms = false;
        assert!(BookingFormValidator::validate(&form).is_missing(FieldId::AgreedToTerms));
    }

    #[test]
    fn test_optional_fields_never_reported() {
        let form = filled(PetConfig::dog(DogSize::Large, PetCount::One));
        assert!(form.owner_phone.is_empty());
        assert!(form.special_requests.is_empty());
        assert!(BookingFormValidator::validate(&form).valid);
    }

    #[test]
    fn test_report_serializes_field_ids() {
        let report = BookingFormValidator::validate(&filled(PetConfig::cat(PetCount::Two)));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["missing_fields"][0], "second_pet_name");
    }

    #[test]
    fn test_derived_rules_name_each_failing_field() {
        let mut form = filled(PetConfig::cat(PetCount::Two));
        form.owner_email = "sam.example.com".to_string();
        form.agreed_to_terms = false;

        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("owner_email"));
        assert!(fields.contains_key("agreed_to_terms"));
        assert!(fields.contains_key("__all__"));
        assert!(!fields.contains_key("owner_name"));

        assert_eq!(
            missing_fields(&errors),
            BTreeSet::from([
                FieldId::OwnerEmail,
                FieldId::SecondPetName,
                FieldId::AgreedToTerms,
            ])
        );
    }

    #[test]
    fn test_empty_first_name_fails_even_with_second() {
        let mut form = filled(PetConfig::cat(PetCount::Two));
        form.pet_names = vec![String::new(), "Tofu".to_string()];

        let report = BookingFormValidator::validate(&form);
        assert_eq!(report.missing_fields, BTreeSet::from([FieldId::FirstPetName]));
    }
}
