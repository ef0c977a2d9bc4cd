//! New-hire details captured by the self-service onboarding form.

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::validation::{non_blank, ValidationFailure, EMAIL_PATTERN};

/// Raw consent checkbox value as submitted.
///
/// Only a JSON `true` counts as consent. `false`, `null`, a missing key or any
/// non-boolean value are all kept as "not given" so they surface as a field
/// failure instead of a parse error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Consent(Option<bool>);

impl Consent {
    pub fn is_given(&self) -> bool {
        self.0 == Some(true)
    }
}

impl From<bool> for Consent {
    fn from(value: bool) -> Self {
        Consent(Some(value))
    }
}

impl<'de> Deserialize<'de> for Consent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Bool(b) => Consent(Some(b)),
            _ => Consent(None),
        })
    }
}

fn consent_given(consent: &Consent) -> Result<(), ValidationError> {
    if consent.is_given() {
        return Ok(());
    }
    let mut error = ValidationError::new("consent");
    error.message = Some("You must agree to continue".into());
    Err(error)
}

/// The two pages of the self-service form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum FormStep {
    /// Personal, contact and address details
    Personal,
    /// Employment, education, emergency contact and consents
    Employment,
}

impl FormStep {
    /// Wire names of the fields collected on this page.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            FormStep::Personal => &[
                "firstName",
                "lastName",
                "middleName",
                "preferredName",
                "dateOfBirth",
                "gender",
                "maritalStatus",
                "nationality",
                "email",
                "personalEmail",
                "phoneNumber",
                "alternatePhone",
                "currentAddress",
                "permanentAddress",
                "city",
                "state",
                "postalCode",
                "country",
            ],
            FormStep::Employment => &[
                "position",
                "department",
                "startDate",
                "employmentType",
                "reportingManager",
                "workLocation",
                "highestEducation",
                "institution",
                "graduationYear",
                "fieldOfStudy",
                "emergencyContactName",
                "emergencyContactPhone",
                "emergencyContactRelationship",
                "emergencyContactEmail",
                "skills",
                "previousExperience",
                "additionalNotes",
                "privacyPolicyAgreed",
                "termsAndConditionsAgreed",
                "backgroundCheckConsent",
            ],
        }
    }
}

/// Candidate employee details as received from a form or API client.
///
/// Every key is optional at the shape level; the rules live in the
/// `validate` attributes so that one pass reports every problem.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeDetailsDraft {
    // Personal
    #[validate(custom(function = "non_blank"))]
    pub first_name: String,
    #[validate(custom(function = "non_blank"))]
    pub last_name: String,
    pub middle_name: Option<String>,
    pub preferred_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub nationality: Option<String>,

    // Contact
    #[validate(
        custom(function = "non_blank"),
        regex(path = *EMAIL_PATTERN, code = "email", message = "Invalid email address")
    )]
    pub email: String,
    pub personal_email: Option<String>,
    #[validate(custom(function = "non_blank"))]
    pub phone_number: String,
    pub alternate_phone: Option<String>,

    // Address
    #[validate(custom(function = "non_blank"))]
    pub current_address: String,
    pub permanent_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,

    // Employment
    #[validate(custom(function = "non_blank"))]
    pub position: String,
    #[validate(custom(function = "non_blank"))]
    pub department: String,
    #[validate(custom(function = "non_blank"))]
    pub start_date: String,
    pub employment_type: Option<String>,
    pub reporting_manager: Option<String>,
    pub work_location: Option<String>,

    // Education
    pub highest_education: Option<String>,
    pub institution: Option<String>,
    pub graduation_year: Option<String>,
    pub field_of_study: Option<String>,

    // Emergency contact
    #[validate(custom(function = "non_blank"))]
    pub emergency_contact_name: String,
    #[validate(custom(function = "non_blank"))]
    pub emergency_contact_phone: String,
    pub emergency_contact_relationship: Option<String>,
    pub emergency_contact_email: Option<String>,

    // Free text
    pub skills: Option<String>,
    pub previous_experience: Option<String>,
    pub additional_notes: Option<String>,

    // Consents
    #[validate(custom(function = "consent_given"))]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<bool>))]
    pub privacy_policy_agreed: Consent,
    #[validate(custom(function = "consent_given"))]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<bool>))]
    pub terms_and_conditions_agreed: Consent,
    #[validate(custom(function = "consent_given"))]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<bool>))]
    pub background_check_consent: Consent,
}

impl EmployeeDetailsDraft {
    /// Run every rule and return the complete failure list.
    pub fn check(&self) -> Result<(), ValidationFailure> {
        self.validate()
            .map_err(|e| ValidationFailure::from_validator(&e, None))
    }

    /// Validate only the fields shown on one page of the form.
    pub fn check_step(&self, step: FormStep) -> Result<(), ValidationFailure> {
        let Err(failure) = self.check() else {
            return Ok(());
        };
        let fields = step.fields();
        let remaining = failure
            .into_errors()
            .into_iter()
            .filter(|e| fields.contains(&e.field.as_str()))
            .collect();
        ValidationFailure::check(remaining)
    }
}

/// Employee details that passed validation.
///
/// Only obtainable through `TryFrom<&EmployeeDetailsDraft>` or by
/// deserializing a previously stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetails {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub preferred_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub nationality: Option<String>,
    pub email: String,
    pub personal_email: Option<String>,
    pub phone_number: String,
    pub alternate_phone: Option<String>,
    pub current_address: String,
    pub permanent_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub position: String,
    pub department: String,
    pub start_date: String,
    pub employment_type: Option<String>,
    pub reporting_manager: Option<String>,
    pub work_location: Option<String>,
    pub highest_education: Option<String>,
    pub institution: Option<String>,
    pub graduation_year: Option<String>,
    pub field_of_study: Option<String>,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub emergency_contact_relationship: Option<String>,
    pub emergency_contact_email: Option<String>,
    pub skills: Option<String>,
    pub previous_experience: Option<String>,
    pub additional_notes: Option<String>,
    pub privacy_policy_agreed: bool,
    pub terms_and_conditions_agreed: bool,
    pub background_check_consent: bool,
}

impl EmployeeDetails {
    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Work email in the form used to match submissions: trimmed, lowercase.
    pub fn email_key(&self) -> String {
        self.email.trim().to_lowercase()
    }
}

impl TryFrom<&EmployeeDetailsDraft> for EmployeeDetails {
    type Error = ValidationFailure;

    fn try_from(draft: &EmployeeDetailsDraft) -> Result<Self, Self::Error> {
        draft.check()?;

        let d = draft.clone();
        Ok(Self {
            first_name: d.first_name,
            last_name: d.last_name,
            middle_name: d.middle_name,
            preferred_name: d.preferred_name,
            date_of_birth: d.date_of_birth,
            gender: d.gender,
            marital_status: d.marital_status,
            nationality: d.nationality,
            email: d.email,
            personal_email: d.personal_email,
            phone_number: d.phone_number,
            alternate_phone: d.alternate_phone,
            current_address: d.current_address,
            permanent_address: d.permanent_address,
            city: d.city,
            state: d.state,
            postal_code: d.postal_code,
            country: d.country,
            position: d.position,
            department: d.department,
            start_date: d.start_date,
            employment_type: d.employment_type,
            reporting_manager: d.reporting_manager,
            work_location: d.work_location,
            highest_education: d.highest_education,
            institution: d.institution,
            graduation_year: d.graduation_year,
            field_of_study: d.field_of_study,
            emergency_contact_name: d.emergency_contact_name,
            emergency_contact_phone: d.emergency_contact_phone,
            emergency_contact_relationship: d.emergency_contact_relationship,
            emergency_contact_email: d.emergency_contact_email,
            skills: d.skills,
            previous_experience: d.previous_experience,
            additional_notes: d.additional_notes,
            privacy_policy_agreed: true,
            terms_and_conditions_agreed: true,
            background_check_consent: true,
        })
    }
}

impl TryFrom<EmployeeDetailsDraft> for EmployeeDetails {
    type Error = ValidationFailure;

    fn try_from(draft: EmployeeDetailsDraft) -> Result<Self, Self::Error> {
        EmployeeDetails::try_from(&draft)
    }
}
