use super::*;
use crate::net::types::ServiceStatus;

fn job(id: &str, status: ServiceStatus) -> ServiceRequest {
    ServiceRequest {
        id: id.to_owned(),
        appliance_type: "AC".to_owned(),
        brand: None,
        description: "No cooling".to_owned(),
        address: "12 Lake Rd".to_owned(),
        preferred_date: None,
        status,
        user: None,
        technician: None,
        estimated_cost: None,
        estimate_note: None,
        final_cost: None,
        created_at: None,
    }
}

#[test]
fn unapproved_or_missing_accounts_cannot_take_jobs() {
    assert!(!can_take_jobs(None));
    let mut account = Account::default();
    assert!(!can_take_jobs(Some(&account)));
    account.is_approved = Some(true);
    assert!(can_take_jobs(Some(&account)));
}

#[test]
fn finished_jobs_are_split_out_in_order() {
    let jobs = vec![
        job("a", ServiceStatus::Completed),
        job("b", ServiceStatus::InProgress),
        job("c", ServiceStatus::Cancelled),
        job("d", ServiceStatus::Accepted),
    ];
    let (active, finished) = partition_jobs(jobs);
    let ids = |v: &[ServiceRequest]| v.iter().map(|j| j.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&active), ["b", "d"]);
    assert_eq!(ids(&finished), ["a", "c"]);
}
