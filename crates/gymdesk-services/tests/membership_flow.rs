//! End-to-end service flow: register a member, buy and adjust a
//! membership, and watch the derived reports track every step.
//!
//! Run with: cargo test --package gymdesk-services --test membership_flow

use gymdesk_services::{MembershipService, Registration, UserService};
use gymdesk_storage::connection::Database;
use gymdesk_storage::models::Role;

fn registration(username: &str, email: &str, role: &str) -> Registration {
    Registration {
        username: username.to_string(),
        email: email.to_string(),
        phone: "5550100".to_string(),
        address: "1 Gym Way".to_string(),
        role: role.to_string(),
        password: "password123".to_string(),
    }
}

#[tokio::test]
async fn test_member_membership_lifecycle() {
    let db = Database::in_memory().await.unwrap();
    let users = UserService::new(db.pool().clone());
    let memberships = MembershipService::new(db.pool().clone());

    // Create member "Alice".
    let alice = users
        .register(registration("Alice", "a@test.com", "Member"))
        .await
        .unwrap();
    assert_eq!(alice.role, Role::Member);

    // Purchase the Standard plan (49.99) for Alice.
    let plans = memberships.available_plans().await.unwrap();
    let standard = plans.iter().find(|p| p.plan_type == "Standard").unwrap();
    let purchased = memberships
        .purchase_plan(standard.id, alice.id)
        .await
        .unwrap();
    assert_eq!(purchased.cost, 49.99);

    // Listing all memberships contains exactly that row.
    let all = memberships.all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, purchased.id);
    assert_eq!(all[0].member_id, alice.id);
    assert_eq!(all[0].membership_type, "Standard");

    // Update the cost to 59.99.
    let mut updated = all[0].clone();
    updated.cost = 59.99;
    memberships.update(&updated).await.unwrap();

    // Per-member expense reflects the update.
    let expenses = memberships.member_expenses(alice.id).await.unwrap();
    assert!((expenses - 59.99).abs() < 1e-9);

    let revenue = memberships.total_revenue().await.unwrap();
    assert!((revenue - 59.99).abs() < 1e-9);

    // Delete the membership; expenses return to zero.
    memberships.delete(purchased.id).await.unwrap();
    assert_eq!(memberships.member_expenses(alice.id).await.unwrap(), 0.0);
    assert_eq!(memberships.total_revenue().await.unwrap(), 0.0);

    // Alice can still log in afterwards.
    assert!(users.login("Alice", "password123").await.unwrap().is_some());

    db.close().await;
}

#[tokio::test]
async fn test_registration_then_login_for_each_role() {
    let db = Database::in_memory().await.unwrap();
    let users = UserService::new(db.pool().clone());

    for (name, email, role, expected) in [
        ("admin-user", "admin@test.com", "admin", Role::Admin),
        ("trainer-user", "trainer@test.com", "TRAINER", Role::Trainer),
        ("member-user", "member@test.com", " member ", Role::Member),
    ] {
        let user = users
            .register(registration(name, email, role))
            .await
            .unwrap();
        assert_eq!(user.role, expected);

        let logged_in = users.login(name, "password123").await.unwrap().unwrap();
        assert_eq!(logged_in.id, user.id);
    }

    db.close().await;
}
