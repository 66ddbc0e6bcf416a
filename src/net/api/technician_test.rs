use super::*;
use crate::net::client::Method;

#[test]
fn register_request_uses_camel_case_payload() {
    let req = register_request(&RegisterTechnician {
        name: "Ravi".to_owned(),
        email: "ravi@example.com".to_owned(),
        phone: "9876543210".to_owned(),
        password: "secret1".to_owned(),
        address: "Sector 5".to_owned(),
        skills: vec!["AC".to_owned(), "Refrigerator".to_owned()],
        experience_years: 4,
    });
    assert_eq!(req.path, "/technician/register");
    let body = req.body.expect("body");
    assert_eq!(body["experienceYears"], 4);
    assert_eq!(body["skills"], serde_json::json!(["AC", "Refrigerator"]));
}

#[test]
fn accept_job_request_has_no_body() {
    let req = accept_job_request("r-7");
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.path, "/technician/requests/r-7/accept");
    assert!(req.body.is_none());
}

#[test]
fn update_status_request_sends_snake_case_status() {
    let req = update_status_request("r-7", ServiceStatus::OnTheWay);
    assert_eq!(req.path, "/technician/requests/r-7/status");
    assert_eq!(req.body, Some(serde_json::json!({ "status": "on_the_way" })));
}

#[test]
fn estimate_and_completion_requests_carry_costs() {
    let estimate = submit_estimate_request(
        "r-7",
        &Estimate { estimated_cost: 850.0, note: "Replace capacitor".to_owned() },
    );
    assert_eq!(estimate.path, "/technician/requests/r-7/estimate");
    assert_eq!(
        estimate.body,
        Some(serde_json::json!({ "estimatedCost": 850.0, "note": "Replace capacitor" }))
    );

    let complete = complete_job_request("r-7", Completion { final_cost: 900.0 });
    assert_eq!(complete.path, "/technician/requests/r-7/complete");
    assert_eq!(complete.body, Some(serde_json::json!({ "finalCost": 900.0 })));
}

#[test]
fn availability_request_toggles_flag() {
    let req = availability_request(false);
    assert_eq!(req.path, "/technician/availability");
    assert_eq!(req.body, Some(serde_json::json!({ "isAvailable": false })));
}

#[test]
fn list_requests_are_gets() {
    assert_eq!(available_jobs_request(), ApiRequest::get("/technician/requests/available"));
    assert_eq!(my_jobs_request(), ApiRequest::get("/technician/requests"));
    assert_eq!(stats_request(), ApiRequest::get("/technician/stats"));
}
