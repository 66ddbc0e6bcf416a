use super::*;

#[test]
fn verify_link_encodes_email() {
    assert_eq!(verify_email_href("asha+1@example.com"), "/verify-email?email=asha%2B1%40example.com");
}

#[test]
fn verify_link_encodes_spaces_and_unicode() {
    assert_eq!(verify_email_href("a b@ex.in"), "/verify-email?email=a%20b%40ex.in");
    assert_eq!(verify_email_href("zoë@ex.in"), "/verify-email?email=zo%C3%AB%40ex.in");
}
