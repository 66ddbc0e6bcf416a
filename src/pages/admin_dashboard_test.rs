use super::*;

fn technician(name: &str, approved: Option<bool>) -> Account {
    Account { name: name.to_owned(), is_approved: approved, ..Account::default() }
}

#[test]
fn pending_technicians_sort_first() {
    let mut list = vec![
        technician("Zoya", Some(true)),
        technician("Kiran", None),
        technician("Arun", Some(true)),
        technician("Meena", Some(false)),
    ];
    sort_technicians(&mut list);
    let names: Vec<_> = list.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Kiran", "Meena", "Arun", "Zoya"]);
}

#[test]
fn appliance_payload_keeps_optional_fields_optional() {
    let payload = appliance_payload(" Microwave ", "", "").unwrap();
    assert_eq!(payload.name, "Microwave");
    assert_eq!(payload.category, None);
    assert_eq!(payload.base_price, None);

    let payload = appliance_payload("AC", "Cooling", "499").unwrap();
    assert_eq!(payload.category.as_deref(), Some("Cooling"));
    assert_eq!(payload.base_price, Some(499.0));
}

#[test]
fn appliance_payload_rejects_bad_input() {
    assert_eq!(appliance_payload("", "", ""), Err(ValidationError::Missing("name")));
    assert_eq!(appliance_payload("AC", "", "-1"), Err(ValidationError::InvalidAmount("base price")));
}

#[test]
fn every_tab_has_a_label() {
    for tab in AdminTab::ALL {
        assert!(!tab.label().is_empty());
    }
}
