//! Helpers shared by the tests of the registry implementations.

use tbtc_depositor_primitives::types::DepositKey;
use tbtc_depositor_test_utils::prelude::generate_deposit_key;

use crate::registry::DepositRegistry;

/// Runs the same two-phase lifecycle checks against any registry implementation.
pub(crate) async fn check_registry_lifecycle(db: &impl DepositRegistry) {
    let deposit_key = generate_deposit_key();
    let other_key = generate_deposit_key();

    assert!(
        db.is_pending(deposit_key)
            .await
            .is_ok_and(|pending| !pending),
        "deposit must not be pending initially"
    );

    assert!(
        db.mark_pending(deposit_key)
            .await
            .expect("must be able to mark deposit as pending"),
        "first mark must create the entry"
    );
    assert!(
        !db.mark_pending(deposit_key)
            .await
            .expect("must be able to mark deposit as pending again"),
        "second mark must not create a new entry"
    );
    assert!(
        db.is_pending(deposit_key).await.is_ok_and(|pending| pending),
        "deposit must be pending after marking"
    );
    assert!(
        db.is_pending(other_key).await.is_ok_and(|pending| !pending),
        "marking one deposit must not affect another"
    );

    assert!(
        db.clear_pending(deposit_key)
            .await
            .expect("must be able to clear pending deposit"),
        "clearing a pending deposit must remove the entry"
    );
    assert!(
        db.is_pending(deposit_key)
            .await
            .is_ok_and(|pending| !pending),
        "deposit must not be pending after clearing"
    );
    assert!(
        !db.clear_pending(deposit_key)
            .await
            .expect("must be able to clear a missing deposit"),
        "clearing an absent deposit must be a no-op"
    );
}

/// Checks that the registry lists exactly the pending deposits, ordered by key.
pub(crate) async fn check_pending_deposits_listing(db: &impl DepositRegistry) {
    let mut keys: Vec<DepositKey> = (0..5).map(|_| generate_deposit_key()).collect();

    for key in &keys {
        db.mark_pending(*key)
            .await
            .expect("must be able to mark deposit as pending");
    }

    let finalized = keys.remove(2);
    db.clear_pending(finalized)
        .await
        .expect("must be able to clear pending deposit");

    keys.sort();
    assert_eq!(
        db.pending_deposits()
            .await
            .expect("must be able to list pending deposits"),
        keys
    );
}
