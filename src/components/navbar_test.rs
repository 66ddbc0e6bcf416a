use super::*;

#[test]
fn signed_out_links_lead_to_auth_pages() {
    let hrefs: Vec<&str> = links_for(None).iter().map(|(href, _)| *href).collect();
    assert_eq!(hrefs, ["/login", "/register", "/technician/register"]);
}

#[test]
fn each_role_links_to_its_own_dashboard_first() {
    for role in Role::ALL {
        assert_eq!(links_for(Some(role))[0].0, role.dashboard_path());
    }
}
