//! Concrete form definitions for the platform pages.
//!
//! Built once per page; sessions hold them behind an `Arc`. The
//! definitions are static and known-good, so construction failures are
//! programming errors surfaced immediately by the tests below.

use launchpad_engine::partition::StepPartition;
use launchpad_engine::schema::{FieldSchema, FormDefinition, FormSchema};
use launchpad_engine::types::{FieldKind, RawValue};

/// Industries offered in the application form.
pub const INDUSTRIES: [&str; 10] = [
    "FinTech",
    "EdTech",
    "HealthTech",
    "AgriTech",
    "E-commerce",
    "Logistics",
    "AI_ML",
    "IoT",
    "CleanTech",
    "FoodTech",
];

/// Startup stages offered in the application form.
pub const STAGES: [&str; 4] = ["IDEA", "MVP", "GROWTH", "SCALING"];

/// Three-step incubation application posting to `/applications`.
///
/// Step 1: applicant contact details. Step 2: the idea. Step 3:
/// funding, pitch deck, and terms.
pub fn application_form() -> FormDefinition {
    FormDefinition::try_new(
        "application",
        "/applications",
        vec![
            FieldSchema::new("fullName", FieldKind::Text).min_len(2).max_len(100),
            FieldSchema::new("email", FieldKind::Email).max_len(255),
            FieldSchema::new("phone", FieldKind::Phone).min_len(9).max_len(20),
            FieldSchema::new("ideaDescription", FieldKind::Text).min_len(10).max_len(3000),
            FieldSchema::new("industry", FieldKind::Text).one_of(INDUSTRIES),
            FieldSchema::new("stage", FieldKind::Text).one_of(STAGES),
            FieldSchema::new("teamSize", FieldKind::Integer).min(1.0).max(100.0),
            FieldSchema::new("investmentNeeded", FieldKind::Decimal).optional().min(0.0),
            FieldSchema::new("fileUrl", FieldKind::Url).optional(),
            FieldSchema::new("terms", FieldKind::AcceptTrue).machine_only(),
        ],
        vec![
            vec!["fullName", "email", "phone"],
            vec!["ideaDescription", "industry", "stage", "teamSize"],
            vec!["investmentNeeded", "fileUrl", "terms"],
        ],
    )
    .expect("application form is statically valid")
    .with_defaults(vec![("terms".into(), RawValue::Bool(false))])
}

/// Single-step contact form posting to `/contact`.
pub fn contact_form() -> FormDefinition {
    let schema = FormSchema::new(vec![
        FieldSchema::new("fullName", FieldKind::Text).min_len(2).max_len(100),
        FieldSchema::new("email", FieldKind::Email).max_len(255),
        FieldSchema::new("phone", FieldKind::Phone).min_len(9).max_len(20),
        FieldSchema::new("subject", FieldKind::Text).optional().min_len(2).max_len(200),
        FieldSchema::new("message", FieldKind::Text).min_len(10).max_len(1000),
    ])
    .expect("contact schema is statically valid");

    let partition = StepPartition::single(&schema);
    FormDefinition::new("contact", "/contact", schema, partition)
}

/// Single-step registration form posting to `/events/{id}/register`.
pub fn event_registration_form(event_id: &str) -> FormDefinition {
    let schema = FormSchema::new(vec![
        FieldSchema::new("fullName", FieldKind::Text).min_len(2).max_len(100),
        FieldSchema::new("email", FieldKind::Email).max_len(255),
        FieldSchema::new("phone", FieldKind::Phone).min_len(9).max_len(20),
    ])
    .expect("registration schema is statically valid");

    let partition = StepPartition::single(&schema);
    FormDefinition::new(
        "event-registration",
        format!("/events/{event_id}/register"),
        schema,
        partition,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchpad_engine::schema::DEFAULT_SUBMIT_TIMEOUT;
    use launchpad_engine::types::FieldName;

    #[test]
    fn application_form_is_three_steps() {
        let form = application_form();
        assert_eq!(form.partition().len(), 3);
        assert_eq!(form.endpoint(), "/applications");
        assert_eq!(form.submit_timeout(), DEFAULT_SUBMIT_TIMEOUT);

        // Terms defaults to unchecked and never reaches the wire.
        let record = form.initial_record();
        assert_eq!(
            record.get(&FieldName::from("terms")),
            Some(&launchpad_engine::types::RawValue::Bool(false))
        );
        let terms = form.schema().field(&FieldName::from("terms")).unwrap();
        assert!(terms.is_machine_only());
    }

    #[test]
    fn application_steps_follow_the_page_layout() {
        let form = application_form();
        let step_of = |name: &str| form.partition().step_of(&FieldName::from(name));
        assert_eq!(step_of("email"), Some(0));
        assert_eq!(step_of("teamSize"), Some(1));
        assert_eq!(step_of("terms"), Some(2));
    }

    #[test]
    fn contact_form_is_single_step() {
        let form = contact_form();
        assert_eq!(form.partition().len(), 1);
        assert_eq!(form.endpoint(), "/contact");

        let subject = form.schema().field(&FieldName::from("subject")).unwrap();
        assert!(!subject.is_required());
    }

    #[test]
    fn registration_endpoint_embeds_the_event_id() {
        let form = event_registration_form("ev-42");
        assert_eq!(form.endpoint(), "/events/ev-42/register");
        assert_eq!(form.partition().len(), 1);
    }
}
