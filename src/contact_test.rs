use super::*;

fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
    ContactForm {
        name: name.to_owned(),
        email: email.to_owned(),
        subject: subject.to_owned(),
        message: message.to_owned(),
    }
}

#[test]
fn complete_form_with_valid_email_passes() {
    assert_eq!(form("A", "a@b.com", "s", "m").validate(), Ok(()));
}

#[test]
fn empty_name_is_rejected_before_email_check() {
    assert_eq!(form("", "a@b.com", "s", "m").validate(), Err(ContactError::EmptyFields));
    assert_eq!(form("", "nope", "s", "m").validate(), Err(ContactError::EmptyFields));
}

#[test]
fn each_empty_field_is_rejected() {
    assert_eq!(form("A", "", "s", "m").validate(), Err(ContactError::EmptyFields));
    assert_eq!(form("A", "a@b.com", "", "m").validate(), Err(ContactError::EmptyFields));
    assert_eq!(form("A", "a@b.com", "s", "").validate(), Err(ContactError::EmptyFields));
}

#[test]
fn malformed_email_is_rejected() {
    assert_eq!(form("A", "not-an-email", "s", "m").validate(), Err(ContactError::InvalidEmail));
}

#[test]
fn error_messages_match_alert_text() {
    assert_eq!(ContactError::EmptyFields.to_string(), "Please fill in all fields");
    assert_eq!(ContactError::InvalidEmail.to_string(), "Please enter a valid email address");
}

#[test]
fn email_shape_rules() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@sub.example.org"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@@b.com"));
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email("a@b.com "));
}

#[test]
fn form_phase_defaults_to_idle() {
    assert_eq!(FormPhase::default(), FormPhase::Idle);
}
