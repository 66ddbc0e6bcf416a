use super::*;

#[test]
fn plain_steps_go_through_the_status_endpoint() {
    assert_eq!(next_step(ServiceStatus::Accepted), NextStep::Advance(ServiceStatus::OnTheWay));
    assert_eq!(next_step(ServiceStatus::Approved), NextStep::Advance(ServiceStatus::InProgress));
}

#[test]
fn estimate_and_completion_close_their_steps() {
    assert_eq!(next_step(ServiceStatus::OnTheWay), NextStep::SubmitEstimate);
    assert_eq!(next_step(ServiceStatus::AwaitingApproval), NextStep::WaitForCustomer);
    assert_eq!(next_step(ServiceStatus::InProgress), NextStep::Complete);
}

#[test]
fn terminal_and_unassigned_jobs_have_no_action() {
    for status in [ServiceStatus::Pending, ServiceStatus::Broadcasted, ServiceStatus::Completed, ServiceStatus::Cancelled] {
        assert_eq!(next_step(status), NextStep::Done, "{status:?}");
    }
}

#[test]
fn advance_labels_name_the_step() {
    assert_eq!(advance_label(ServiceStatus::OnTheWay), "Start travelling");
    assert_eq!(advance_label(ServiceStatus::InProgress), "Start work");
}
