//! Interactive menus.
//!
//! One submodule per menu family: authentication, admin, trainer, member.
//! [`App`] owns the services and dispatches to whichever menu matches the
//! session's current state.

mod admin;
mod auth;
mod member;
mod trainer;

use gymdesk_services::{
    MembershipService, MerchService, ServiceError, UserService, WorkoutClassService,
};
use gymdesk_storage::Database;
use gymdesk_storage::models::{GymMerch, Membership, Role, User, WorkoutClass};

use crate::input;
use crate::session::{MenuState, Session};

/// The console application: services plus the menu dispatch loop.
pub struct App {
    users: UserService,
    memberships: MembershipService,
    classes: WorkoutClassService,
    merch: MerchService,
}

impl App {
    /// Wire up all services over the given database.
    pub fn new(db: &Database) -> Self {
        Self {
            users: UserService::new(db.pool().clone()),
            memberships: MembershipService::new(db.pool().clone()),
            classes: WorkoutClassService::new(db.pool().clone()),
            merch: MerchService::new(db.pool().clone()),
        }
    }

    /// Run the menu loop until the user chooses Exit at the auth menu.
    pub async fn run(&self) -> anyhow::Result<()> {
        let mut session = Session::new();

        loop {
            match session.state() {
                MenuState::Auth => {
                    if !self.auth_menu(&mut session).await? {
                        return Ok(());
                    }
                }
                MenuState::Admin => self.admin_menu(&mut session).await?,
                MenuState::Trainer => self.trainer_menu(&mut session).await?,
                MenuState::Member => self.member_menu(&mut session).await?,
            }
        }
    }

    /// List every workout class in the system.
    pub(crate) async fn list_all_classes(&self) -> anyhow::Result<()> {
        match self.classes.all().await {
            Ok(classes) if classes.is_empty() => println!("No workout classes found."),
            Ok(classes) => print_classes(&classes),
            Err(err) => report_error("retrieving workout classes", &err),
        }
        Ok(())
    }

    /// List every merchandise item in the system.
    pub(crate) async fn list_all_merch(&self) -> anyhow::Result<()> {
        match self.merch.all().await {
            Ok(items) if items.is_empty() => println!("No merch found."),
            Ok(items) => print_merch(&items),
            Err(err) => report_error("retrieving merch", &err),
        }
        Ok(())
    }

    /// Plan purchase flow for the logged-in user.
    pub(crate) async fn purchase_membership(&self, session: &Session) -> anyhow::Result<()> {
        let Some(user) = session.current_user() else {
            println!("You must be logged in to purchase a membership.");
            return Ok(());
        };

        let plans = match self.memberships.available_plans().await {
            Ok(plans) => plans,
            Err(err) => {
                report_error("retrieving membership plans", &err);
                return Ok(());
            }
        };

        if plans.is_empty() {
            println!("No membership plans available at this time.");
            return Ok(());
        }

        println!("\nAvailable Membership Plans:");
        for (i, plan) in plans.iter().enumerate() {
            println!(
                "{}) {} - {} (${:.2})",
                i + 1,
                plan.plan_type,
                plan.description,
                plan.price
            );
        }
        println!("0) Cancel");

        let Some(choice) = input::prompt_parse::<usize>("Select a membership: ")? else {
            return Ok(());
        };

        if choice == 0 {
            println!("Membership purchase cancelled.");
            return Ok(());
        }

        let Some(plan) = plans.get(choice - 1) else {
            println!("Invalid selection.");
            return Ok(());
        };

        match self.memberships.purchase_plan(plan.id, user.id).await {
            Ok(membership) => println!(
                "Successfully purchased membership: {} (${:.2})",
                membership.membership_type, membership.cost
            ),
            Err(err) => report_error("processing membership purchase", &err),
        }

        Ok(())
    }

    /// Show the logged-in member's total membership expenses.
    pub(crate) async fn view_my_expenses(&self, session: &Session) -> anyhow::Result<()> {
        let Some(user) = session.current_user() else {
            println!("You must be logged in.");
            return Ok(());
        };

        if user.role != Role::Member {
            println!("Access denied. Members only.");
            return Ok(());
        }

        match self.memberships.member_expenses(user.id).await {
            Ok(total) => println!("Your total membership expenses: ${total:.2}"),
            Err(err) => report_error("calculating expenses", &err),
        }

        Ok(())
    }
}

/// Log a service failure and show the user a one-line message.
pub(crate) fn report_error(action: &str, err: &ServiceError) {
    tracing::error!(error = %err, "error {}", action);
    println!("Error {action}: {err}");
}

pub(crate) fn print_users(users: &[User]) {
    println!(
        "{:<5} {:<20} {:<9} {:<28} {:<14}",
        "ID", "Username", "Role", "Email", "Phone"
    );
    for user in users {
        println!(
            "{:<5} {:<20} {:<9} {:<28} {:<14}",
            user.id,
            user.username,
            user.role.as_str(),
            user.email,
            user.phone
        );
    }
}

pub(crate) fn print_memberships(memberships: &[Membership]) {
    println!(
        "{:<5} {:<16} {:>10} {:>8}  {}",
        "ID", "Type", "Cost", "Member", "Description"
    );
    for membership in memberships {
        println!(
            "{:<5} {:<16} {:>10.2} {:>8}  {}",
            membership.id,
            membership.membership_type,
            membership.cost,
            membership.member_id,
            membership.description
        );
    }
}

pub(crate) fn print_classes(classes: &[WorkoutClass]) {
    println!("{:<5} {:<20} {:>8}  {}", "ID", "Type", "Trainer", "Description");
    for class in classes {
        println!(
            "{:<5} {:<20} {:>8}  {}",
            class.id, class.class_type, class.trainer_id, class.description
        );
    }
}

pub(crate) fn print_merch(items: &[GymMerch]) {
    println!(
        "{:<5} {:<24} {:<14} {:>10} {:>8}",
        "ID", "Name", "Category", "Price", "Qty"
    );
    for item in items {
        println!(
            "{:<5} {:<24} {:<14} {:>10.2} {:>8}",
            item.id, item.name, item.category, item.unit_price, item.quantity_in_stock
        );
    }
}
