//! Required-field validation for the application wizard.
//!
//! Validation runs in full on every advance or submit attempt and produces
//! one message per missing field. It never mutates the form.

use super::models::{ApplicationForm, FormField, FormStep, ValidationErrors};

/// Validates one step of the application form.
///
/// Step 1 requires the account-access identity fields. Step 2 requires the
/// address, professional profile and both consent checkboxes, plus a
/// free-text source when "Other" was picked as the referral source.
///
/// # Examples
///
/// ```
/// use tradeport::domain::{ApplicationForm, FormStep, FormField};
/// use tradeport::domain::validation::validate_step;
///
/// let form = ApplicationForm::default();
/// let errors = validate_step(&form, FormStep::Step1);
/// assert!(errors.contains(FormField::BusinessEmail));
/// assert!(errors.contains(FormField::FirstName));
/// ```
pub fn validate_step(form: &ApplicationForm, step: FormStep) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    match step {
        FormStep::Step1 => {
            if form.business_email.is_empty() {
                errors.insert(FormField::BusinessEmail, "Business Email is required");
            }
            if form.first_name.is_empty() {
                errors.insert(FormField::FirstName, "First Name is required");
            }
            if form.last_name.is_empty() {
                errors.insert(FormField::LastName, "Last Name is required");
            }
            if form.company_name.is_empty() {
                errors.insert(FormField::CompanyName, "Company Name is required");
            }
        }
        FormStep::Step2 => {
            if form.country.is_empty() {
                errors.insert(FormField::Country, "Country is required");
            }
            if form.phone.is_empty() {
                errors.insert(FormField::Phone, "Phone is required");
            }
            if form.street_address.is_empty() {
                errors.insert(FormField::StreetAddress, "Address is required");
            }
            if form.city.is_empty() {
                errors.insert(FormField::City, "City is required");
            }
            if form.state.is_empty() {
                errors.insert(FormField::State, "State is required");
            }
            if form.zip_code.is_empty() {
                errors.insert(FormField::ZipCode, "ZIP Code is required");
            }
            if form.role.is_empty() {
                errors.insert(FormField::Role, "Role is required");
            }
            if form.business_focus.is_empty() {
                errors.insert(FormField::BusinessFocus, "Business focus is required");
            }
            if form.website.is_empty() {
                errors.insert(FormField::Website, "Website or social media is required");
            }
            if form.source == "other" && form.source_other.is_empty() {
                errors.insert(
                    FormField::SourceOther,
                    "Please specify how you heard about us",
                );
            }
            if !form.agree_to_terms {
                errors.insert(FormField::AgreeToTerms, "You must agree to the terms");
            }
            if !form.subscribe_to_updates {
                errors.insert(FormField::SubscribeToUpdates, "Please confirm subscription");
            }
        }
    }

    errors
}
