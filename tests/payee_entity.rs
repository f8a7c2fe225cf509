use payee_onboarding::domain::payee::Payee;
use payee_onboarding::domain::status::PayeeStatus;

fn sample_payee() -> Payee {
    Payee::create(
        "John Doe".to_string(),
        "john.doe@example.com".to_string(),
        "GB29NWBK60161331926819".to_string(),
    )
}

#[test]
fn create_starts_pending_without_reference() {
    let payee = sample_payee();

    assert_eq!(payee.status, PayeeStatus::Pending);
    assert_eq!(payee.psp_reference, None);
    assert_eq!(payee.created_at, payee.updated_at);
    assert_eq!(payee.name, "John Doe");
    assert_eq!(payee.email, "john.doe@example.com");
    assert_eq!(payee.bank_account, "GB29NWBK60161331926819");
}

#[test]
fn create_assigns_unique_ids() {
    let a = sample_payee();
    let b = sample_payee();
    assert_ne!(a.id, b.id);
}

#[test]
fn set_psp_reference_bumps_updated_at() {
    let mut payee = sample_payee();
    payee.set_psp_reference("PSP-REF-12345");

    assert_eq!(payee.psp_reference.as_deref(), Some("PSP-REF-12345"));
    assert_eq!(payee.status, PayeeStatus::Pending);
    assert!(payee.updated_at >= payee.created_at);
}

#[test]
fn activate_suspend_reactivate() {
    let mut payee = sample_payee();

    payee.activate().unwrap();
    assert!(payee.is_active());

    payee.suspend().unwrap();
    assert_eq!(payee.status, PayeeStatus::Suspended);
    assert!(!payee.is_active());

    payee.activate().unwrap();
    assert_eq!(payee.status, PayeeStatus::Active);
}

#[test]
fn mark_as_failed_then_retry_from_pending() {
    let mut payee = sample_payee();

    payee.mark_as_failed().unwrap();
    assert_eq!(payee.status, PayeeStatus::Failed);

    payee.transition_to(PayeeStatus::Pending).unwrap();
    assert_eq!(payee.status, PayeeStatus::Pending);
}

#[test]
fn deactivated_payee_accepts_no_further_transitions() {
    let mut payee = sample_payee();
    payee.activate().unwrap();
    payee.deactivate().unwrap();

    for target in PayeeStatus::ALL {
        let before = payee.clone();
        let err = payee.transition_to(target).unwrap_err();
        assert_eq!(err.from, PayeeStatus::Inactive);
        assert_eq!(err.to, target);
        assert_eq!(payee.status, before.status);
        assert_eq!(payee.updated_at, before.updated_at);
    }
}

#[test]
fn illegal_transition_leaves_entity_unchanged() {
    let mut payee = sample_payee();
    let before_updated_at = payee.updated_at;

    let err = payee.suspend().unwrap_err();
    assert_eq!(err.from, PayeeStatus::Pending);
    assert_eq!(err.to, PayeeStatus::Suspended);
    assert_eq!(payee.status, PayeeStatus::Pending);
    assert_eq!(payee.updated_at, before_updated_at);
}

#[test]
fn double_activate_fails() {
    let mut payee = sample_payee();
    payee.activate().unwrap();

    let err = payee.activate().unwrap_err();
    assert_eq!(err.from, PayeeStatus::Active);
    assert_eq!(err.to, PayeeStatus::Active);
    assert_eq!(payee.status, PayeeStatus::Active);
}

#[test]
fn can_receive_payments_requires_active_and_reference() {
    let mut payee = sample_payee();
    assert!(!payee.can_receive_payments());

    // active but never referenced
    let mut unreferenced = sample_payee();
    unreferenced.activate().unwrap();
    assert!(!unreferenced.can_receive_payments());

    payee.set_psp_reference("PSP-REF-12345");
    assert!(!payee.can_receive_payments());

    payee.activate().unwrap();
    assert!(payee.can_receive_payments());

    payee.suspend().unwrap();
    assert!(!payee.can_receive_payments());
}
