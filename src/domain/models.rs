use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// A two-step trade application as the applicant fills it in.
///
/// Drafts and submissions serialize this whole record, so adding a field
/// here keeps old drafts loadable through `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationForm {
    pub business_email: String,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub title: String,
    pub country: String,
    pub phone: String,
    pub street_address: String,
    pub apt_suite: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub role: String,
    pub business_focus: String,
    pub website: String,
    pub source: String,
    pub source_other: String,
    pub message: String,
    pub agree_to_terms: bool,
    pub subscribe_to_updates: bool,
}

impl Default for ApplicationForm {
    fn default() -> Self {
        Self {
            business_email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            company_name: String::new(),
            title: String::new(),
            country: "US".to_string(),
            phone: String::new(),
            street_address: String::new(),
            apt_suite: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            role: String::new(),
            business_focus: String::new(),
            website: String::new(),
            source: String::new(),
            source_other: String::new(),
            message: String::new(),
            agree_to_terms: false,
            subscribe_to_updates: false,
        }
    }
}

/// One choice in a select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
}

const fn opt(label: &'static str, value: &'static str) -> SelectOption {
    SelectOption { label, value }
}

pub const COUNTRY_OPTIONS: &[SelectOption] = &[
    opt("United States", "US"),
    opt("Canada", "CA"),
    opt("United Kingdom", "UK"),
    opt("Australia", "AU"),
];

pub const ROLE_OPTIONS: &[SelectOption] = &[
    opt("Interior Designer / Decorator", "designer"),
    opt("Architect", "architect"),
    opt("Home Stager / Real Estate Styling", "stager"),
    opt("Real Estate Developer / Investor", "developer"),
    opt("Hospitality Professional", "hospitality"),
    opt("Procurement / Sourcing Firm", "procurement"),
    opt("Design Showroom", "showroom"),
    opt("Home Decor Retailer", "retailer"),
    opt("Other", "other"),
];

pub const BUSINESS_FOCUS_OPTIONS: &[SelectOption] = &[
    opt("Residential (Single Family)", "residential_single"),
    opt("Multi-Unit Residential", "residential_multi"),
    opt("Commercial", "commercial"),
    opt("Hospitality", "hospitality"),
    opt("Multi-Disciplinary", "multi"),
];

pub const SOURCE_OPTIONS: &[SelectOption] = &[
    opt("Referral/Word of Mouth", "referral"),
    opt("Online Search", "online_search"),
    opt("Instagram", "instagram"),
    opt("Facebook", "facebook"),
    opt("Amazon", "amazon"),
    opt("Pinterest", "pinterest"),
    opt("Houzz", "houzz"),
    opt("Youtube", "youtube"),
    opt("Tiktok", "tiktok"),
    opt("Facebook group", "facebook_group"),
    opt("Press", "press"),
    opt("Design Professional", "design_professional"),
    opt("Other", "other"),
];

/// How a field is edited in the terminal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select(&'static [SelectOption]),
    Checkbox,
}

/// Every field on the application form, used as the key for values and
/// validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    BusinessEmail,
    FirstName,
    LastName,
    CompanyName,
    Title,
    Country,
    Phone,
    StreetAddress,
    AptSuite,
    City,
    State,
    ZipCode,
    Role,
    BusinessFocus,
    Website,
    Source,
    SourceOther,
    Message,
    AgreeToTerms,
    SubscribeToUpdates,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::BusinessEmail => "Business Email",
            FormField::FirstName => "First Name",
            FormField::LastName => "Last Name",
            FormField::CompanyName => "Company Name",
            FormField::Title => "Title (Optional)",
            FormField::Country => "Country",
            FormField::Phone => "Phone",
            FormField::StreetAddress => "Street Address",
            FormField::AptSuite => "Apt/Suite",
            FormField::City => "City",
            FormField::State => "State",
            FormField::ZipCode => "ZIP Code",
            FormField::Role => "What best describes your role?",
            FormField::BusinessFocus => "Primary Business Focus",
            FormField::Website => "Company website or social media page",
            FormField::Source => "How did you hear about us? (optional)",
            FormField::SourceOther => "Please specify",
            FormField::Message => "Message",
            FormField::AgreeToTerms => "I agree to the Privacy Policy and Terms of Use",
            FormField::SubscribeToUpdates => "Send me bi-weekly Trade Professional updates",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FormField::Country => FieldKind::Select(COUNTRY_OPTIONS),
            FormField::Role => FieldKind::Select(ROLE_OPTIONS),
            FormField::BusinessFocus => FieldKind::Select(BUSINESS_FOCUS_OPTIONS),
            FormField::Source => FieldKind::Select(SOURCE_OPTIONS),
            FormField::AgreeToTerms | FormField::SubscribeToUpdates => FieldKind::Checkbox,
            _ => FieldKind::Text,
        }
    }
}

/// The two pages of the application wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStep {
    Step1,
    Step2,
}

impl FormStep {
    pub fn number(&self) -> u8 {
        match self {
            FormStep::Step1 => 1,
            FormStep::Step2 => 2,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormStep::Step1 => "Account Access",
            FormStep::Step2 => "Business Info",
        }
    }

    /// Fields shown on this step, in display order. `SourceOther` is listed
    /// here but only rendered while `source` is set to "other".
    pub fn fields(&self) -> &'static [FormField] {
        match self {
            FormStep::Step1 => &[
                FormField::BusinessEmail,
                FormField::FirstName,
                FormField::LastName,
                FormField::CompanyName,
                FormField::Title,
            ],
            FormStep::Step2 => &[
                FormField::Country,
                FormField::Phone,
                FormField::StreetAddress,
                FormField::AptSuite,
                FormField::City,
                FormField::State,
                FormField::ZipCode,
                FormField::Role,
                FormField::BusinessFocus,
                FormField::Website,
                FormField::Source,
                FormField::SourceOther,
                FormField::Message,
                FormField::AgreeToTerms,
                FormField::SubscribeToUpdates,
            ],
        }
    }
}

impl ApplicationForm {
    /// Current text of a field. Checkboxes report "yes"/"no" for display.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::BusinessEmail => &self.business_email,
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::CompanyName => &self.company_name,
            FormField::Title => &self.title,
            FormField::Country => &self.country,
            FormField::Phone => &self.phone,
            FormField::StreetAddress => &self.street_address,
            FormField::AptSuite => &self.apt_suite,
            FormField::City => &self.city,
            FormField::State => &self.state,
            FormField::ZipCode => &self.zip_code,
            FormField::Role => &self.role,
            FormField::BusinessFocus => &self.business_focus,
            FormField::Website => &self.website,
            FormField::Source => &self.source,
            FormField::SourceOther => &self.source_other,
            FormField::Message => &self.message,
            FormField::AgreeToTerms => {
                if self.agree_to_terms { "yes" } else { "no" }
            }
            FormField::SubscribeToUpdates => {
                if self.subscribe_to_updates { "yes" } else { "no" }
            }
        }
    }

    /// Replaces a text or select field's value. Checkbox fields are changed
    /// through [`ApplicationForm::toggle`] instead.
    pub fn set_value(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::BusinessEmail => &mut self.business_email,
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::CompanyName => &mut self.company_name,
            FormField::Title => &mut self.title,
            FormField::Country => &mut self.country,
            FormField::Phone => &mut self.phone,
            FormField::StreetAddress => &mut self.street_address,
            FormField::AptSuite => &mut self.apt_suite,
            FormField::City => &mut self.city,
            FormField::State => &mut self.state,
            FormField::ZipCode => &mut self.zip_code,
            FormField::Role => &mut self.role,
            FormField::BusinessFocus => &mut self.business_focus,
            FormField::Website => &mut self.website,
            FormField::Source => &mut self.source,
            FormField::SourceOther => &mut self.source_other,
            FormField::Message => &mut self.message,
            FormField::AgreeToTerms | FormField::SubscribeToUpdates => return,
        };
        *slot = value;
    }

    pub fn is_checked(&self, field: FormField) -> bool {
        match field {
            FormField::AgreeToTerms => self.agree_to_terms,
            FormField::SubscribeToUpdates => self.subscribe_to_updates,
            _ => false,
        }
    }

    /// Flips a checkbox field. No effect on other field kinds.
    pub fn toggle(&mut self, field: FormField) {
        match field {
            FormField::AgreeToTerms => self.agree_to_terms = !self.agree_to_terms,
            FormField::SubscribeToUpdates => {
                self.subscribe_to_updates = !self.subscribe_to_updates
            }
            _ => {}
        }
    }
}

/// Per-field validation messages from the most recent advance or submit
/// attempt. Recomputed in full on every attempt, cleared field-by-field the
/// moment a field is edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: HashMap<FormField, String>,
}

impl ValidationErrors {
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn clear_field(&mut self, field: FormField) {
        self.errors.remove(&field);
    }

    pub fn message(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(|s| s.as_str())
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First invalid field in the step's display order, used to move the
    /// cursor to the error region after a failed advance.
    pub fn first_in(&self, step: FormStep) -> Option<FormField> {
        step.fields().iter().copied().find(|f| self.contains(*f))
    }
}
