use super::*;

fn registration() -> RegistrationForm {
    RegistrationForm {
        name: "  Asha Rao ".to_owned(),
        email: "asha@example.com".to_owned(),
        phone: "98765 43210".to_owned(),
        address: "12 Lake Rd".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
    }
}

// =============================================================
// Field checks
// =============================================================

#[test]
fn required_trims_and_rejects_blank() {
    assert_eq!(required("name", "  Asha "), Ok("Asha".to_owned()));
    assert_eq!(required("name", "   "), Err(ValidationError::Missing("name")));
}

#[test]
fn optional_drops_blank() {
    assert_eq!(optional(" LG "), Some("LG".to_owned()));
    assert_eq!(optional(""), None);
}

#[test]
fn email_accepts_plain_addresses() {
    assert_eq!(email(" asha@example.com "), Ok("asha@example.com".to_owned()));
    assert!(email("a.b+tag@mail.example.co").is_ok());
}

#[test]
fn email_rejects_malformed_addresses() {
    for bad in ["asha", "@example.com", "asha@", "asha@example", "asha@@example.com", "a sha@example.com", "asha@.com"] {
        assert_eq!(email(bad), Err(ValidationError::InvalidEmail), "{bad}");
    }
    assert_eq!(email(""), Err(ValidationError::Missing("email")));
}

#[test]
fn phone_normalises_separators() {
    assert_eq!(phone("98765-43210"), Ok("9876543210".to_owned()));
    assert_eq!(phone("+91 98765 43210"), Ok("+919876543210".to_owned()));
    assert_eq!(phone("12345"), Err(ValidationError::InvalidPhone));
    assert_eq!(phone("98765abcde"), Err(ValidationError::InvalidPhone));
}

#[test]
fn password_rules() {
    assert_eq!(new_password("abc", "abc"), Err(ValidationError::PasswordTooShort));
    assert_eq!(new_password("secret1", "secret2"), Err(ValidationError::PasswordMismatch));
    assert_eq!(new_password("secret1", "secret1"), Ok("secret1".to_owned()));
}

#[test]
fn otp_requires_six_digits() {
    assert_eq!(otp(" 123456 "), Ok("123456".to_owned()));
    assert_eq!(otp("12345"), Err(ValidationError::InvalidOtp));
    assert_eq!(otp("12345a"), Err(ValidationError::InvalidOtp));
}

#[test]
fn amount_parses_positive_values() {
    assert_eq!(amount("estimate", "1,250.50"), Ok(1250.5));
    assert_eq!(amount("estimate", "0"), Err(ValidationError::InvalidAmount("estimate")));
    assert_eq!(amount("estimate", "-5"), Err(ValidationError::InvalidAmount("estimate")));
    assert_eq!(amount("estimate", "NaN"), Err(ValidationError::InvalidAmount("estimate")));
    assert_eq!(amount("estimate", ""), Err(ValidationError::InvalidAmount("estimate")));
}

#[test]
fn split_skills_dedups_case_insensitively() {
    assert_eq!(split_skills("AC, Fridge,, ac , Washing Machine"), ["AC", "Fridge", "Washing Machine"]);
    assert!(split_skills(" , ").is_empty());
}

// =============================================================
// Forms
// =============================================================

#[test]
fn registration_prepares_trimmed_payload() {
    let payload = registration().prepare().unwrap();
    assert_eq!(payload.name, "Asha Rao");
    assert_eq!(payload.phone, "9876543210");
}

#[test]
fn registration_reports_first_failure() {
    let mut form = registration();
    form.confirm_password = "other".to_owned();
    assert_eq!(form.prepare(), Err(ValidationError::PasswordMismatch));
    form.name.clear();
    assert_eq!(form.prepare(), Err(ValidationError::Missing("name")));
}

#[test]
fn technician_registration_needs_skills_and_numeric_experience() {
    let mut form = TechnicianRegistrationForm {
        account: registration(),
        skills: "AC, Fridge".to_owned(),
        experience_years: "4".to_owned(),
    };
    let payload = form.prepare().unwrap();
    assert_eq!(payload.skills, ["AC", "Fridge"]);
    assert_eq!(payload.experience_years, 4);

    form.experience_years = "four".to_owned();
    assert_eq!(form.prepare(), Err(ValidationError::InvalidNumber("experience")));

    form.skills = " ".to_owned();
    assert_eq!(form.prepare(), Err(ValidationError::Missing("skills")));
}

#[test]
fn service_request_form_keeps_optional_fields_optional() {
    let form = ServiceRequestForm {
        appliance_type: "Refrigerator".to_owned(),
        brand: " ".to_owned(),
        description: "Not cooling".to_owned(),
        address: "12 Lake Rd".to_owned(),
        preferred_date: "2026-10-20".to_owned(),
    };
    let payload = form.prepare().unwrap();
    assert_eq!(payload.brand, None);
    assert_eq!(payload.preferred_date.as_deref(), Some("2026-10-20"));

    let empty = ServiceRequestForm::default();
    assert_eq!(empty.prepare(), Err(ValidationError::Missing("appliance")));
}

#[test]
fn estimate_and_completion_require_amounts() {
    let estimate = EstimateForm { cost: "800".to_owned(), note: " compressor relay ".to_owned() }
        .prepare()
        .unwrap();
    assert_eq!(estimate.estimated_cost, 800.0);
    assert_eq!(estimate.note, "compressor relay");
    assert!(EstimateForm::default().prepare().is_err());
    assert_eq!(completion("950").unwrap().final_cost, 950.0);
    assert_eq!(completion("x"), Err(ValidationError::InvalidAmount("final cost")));
}

#[test]
fn feedback_with_zero_rating_is_never_prepared() {
    let draft = FeedbackDraft { rating: 0, comment: "great".to_owned() };
    assert_eq!(draft.prepare("r1"), Err(ValidationError::RatingOutOfRange));
    let draft = FeedbackDraft { rating: 6, comment: String::new() };
    assert_eq!(draft.prepare("r1"), Err(ValidationError::RatingOutOfRange));
}

#[test]
fn feedback_in_range_is_prepared() {
    let draft = FeedbackDraft { rating: 5, comment: " Quick fix ".to_owned() };
    let payload = draft.prepare("r1").unwrap();
    assert_eq!(payload.request_id, "r1");
    assert_eq!(payload.rating, 5);
    assert_eq!(payload.comment, "Quick fix");
}

#[test]
fn verify_email_form_checks_both_fields() {
    let form = VerifyEmailForm { email: "asha@example.com".to_owned(), otp: "123456".to_owned() };
    assert!(form.prepare().is_ok());
    let form = VerifyEmailForm { email: "asha@example.com".to_owned(), otp: "12".to_owned() };
    assert_eq!(form.prepare(), Err(ValidationError::InvalidOtp));
}

#[test]
fn profile_form_round_trips_account_fields() {
    let account = Account {
        name: "Ravi".to_owned(),
        phone: Some("9876543210".to_owned()),
        address: Some("4 Hill St".to_owned()),
        skills: vec!["AC".to_owned(), "Fridge".to_owned()],
        experience_years: Some(7),
        ..Account::default()
    };
    let form = ProfileForm::from_account(&account);
    assert_eq!(form.skills, "AC, Fridge");
    assert_eq!(form.experience_years, "7");
    let update = form.prepare_technician().unwrap();
    assert_eq!(update.skills, ["AC", "Fridge"]);
    assert_eq!(update.experience_years, 7);
}

#[test]
fn customer_profile_ignores_technician_fields() {
    let form = ProfileForm {
        name: "Asha".to_owned(),
        phone: "98765 43210".to_owned(),
        address: "12 Lake Rd".to_owned(),
        ..ProfileForm::default()
    };
    assert_eq!(form.prepare().unwrap().phone, "9876543210");
    assert_eq!(form.prepare_technician(), Err(ValidationError::Missing("skills")));
}

#[test]
fn password_change_needs_current_password() {
    let mut form = PasswordChangeForm { current: String::new(), new: "secret2".to_owned(), confirm: "secret2".to_owned() };
    assert_eq!(form.prepare(), Err(ValidationError::Missing("current password")));
    form.current = "secret1".to_owned();
    let payload = form.prepare().unwrap();
    assert_eq!(payload.current_password, "secret1");
    assert_eq!(payload.new_password, "secret2");
}
