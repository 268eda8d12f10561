//! Admin menus: user, membership, merchandise, trainer and member
//! management plus the revenue and stock reports.

use gymdesk_services::{Registration, ServiceError};
use gymdesk_storage::models::{GymMerch, Membership, Role, User};

use super::{App, print_memberships, print_users, report_error};
use crate::input;
use crate::session::Session;

impl App {
    pub(crate) async fn admin_menu(&self, session: &mut Session) -> anyhow::Result<()> {
        loop {
            println!("\n--- ADMIN MENU ---");
            println!("1. Manage Users");
            println!("2. Manage Memberships");
            println!("3. Manage Gym Merchandise");
            println!("4. Manage Trainers");
            println!("5. Manage Members");
            println!("6. Logout");

            match input::prompt("Select an option: ")?.as_str() {
                "1" => self.user_crud().await?,
                "2" => self.membership_crud().await?,
                "3" => self.merch_crud().await?,
                "4" => self.person_crud(Role::Trainer).await?,
                "5" => self.person_crud(Role::Member).await?,
                "6" => {
                    session.logout();
                    println!("Logged out successfully.");
                    return Ok(());
                }
                _ => println!("Invalid option."),
            }
        }
    }

    // ----- users (all roles) -----

    async fn user_crud(&self) -> anyhow::Result<()> {
        loop {
            println!("\nUser Options: 1-List Users 2-Update User 3-Delete User 4-Back");
            match input::prompt("Select an option: ")?.as_str() {
                "1" => self.list_all_users().await?,
                "2" => self.update_user().await?,
                "3" => self.delete_user().await?,
                "4" => return Ok(()),
                _ => println!("Invalid choice."),
            }
        }
    }

    async fn list_all_users(&self) -> anyhow::Result<()> {
        match self.users.all_users().await {
            Ok(users) if users.is_empty() => println!("No users found."),
            Ok(users) => print_users(&users),
            Err(err) => report_error("retrieving users", &err),
        }
        Ok(())
    }

    async fn update_user(&self) -> anyhow::Result<()> {
        let Some(id) = input::prompt_parse::<i64>("Enter user ID to update: ")? else {
            return Ok(());
        };

        let existing = match self.users.user_by_id(id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                println!("User not found.");
                return Ok(());
            }
            Err(err) => {
                report_error("retrieving user", &err);
                return Ok(());
            }
        };

        let username = input::prompt_or_keep(
            "New username (blank to keep current): ",
            &existing.username,
        )?;
        let email = input::prompt_or_keep("New email (blank to keep current): ", &existing.email)?;
        let phone = input::prompt_or_keep("New phone (blank to keep current): ", &existing.phone)?;
        let address =
            input::prompt_or_keep("New address (blank to keep current): ", &existing.address)?;

        let role_input = input::prompt("New role (blank to keep current): ")?;
        let role = if role_input.is_empty() {
            existing.role
        } else {
            match Role::parse(&role_input) {
                Some(role) => role,
                None => {
                    println!("Error: Role must be one of Admin, Trainer, or Member.");
                    return Ok(());
                }
            }
        };

        let password = input::prompt("New password (blank to keep current): ")?;
        let password_hash = if password.is_empty() {
            existing.password_hash.clone()
        } else {
            match self.users.hash_password(&password) {
                Ok(hash) => hash,
                Err(err) => {
                    report_error("hashing password", &err);
                    return Ok(());
                }
            }
        };

        let updated = User {
            username,
            email,
            phone,
            address,
            role,
            password_hash,
            ..existing
        };

        match self.users.update_user(&updated).await {
            Ok(()) => println!("User updated successfully."),
            Err(err) => report_error("updating user", &err),
        }
        Ok(())
    }

    async fn delete_user(&self) -> anyhow::Result<()> {
        let Some(id) = input::prompt_parse::<i64>("Enter user ID to delete: ")? else {
            return Ok(());
        };

        match self.users.delete_user(id).await {
            Ok(()) => println!("User deleted successfully."),
            Err(ServiceError::Storage(err)) if err.is_not_found() => println!("User not found."),
            Err(err) => report_error("deleting user", &err),
        }
        Ok(())
    }

    // ----- trainers / members (role-scoped views of the same table) -----

    async fn person_crud(&self, role: Role) -> anyhow::Result<()> {
        loop {
            println!(
                "\n{role} Options: 1-Create {role} 2-List All {role}s 3-Update {role} 4-Delete {role} 5-Back"
            );
            match input::prompt("Select an option: ")?.as_str() {
                "1" => self.create_person(role).await?,
                "2" => self.list_people(role).await?,
                "3" => self.update_person(role).await?,
                "4" => self.delete_person(role).await?,
                "5" => return Ok(()),
                _ => println!("Invalid choice."),
            }
        }
    }

    async fn create_person(&self, role: Role) -> anyhow::Result<()> {
        let username = input::prompt(&format!("Enter {} name: ", role.as_str().to_lowercase()))?;
        let email = input::prompt("Enter email: ")?;
        let phone = input::prompt("Enter phone: ")?;
        let address = input::prompt("Enter address: ")?;
        let password = input::prompt("Enter password: ")?;

        if username.is_empty() || email.is_empty() || password.is_empty() {
            println!("Error: Required fields cannot be empty.");
            return Ok(());
        }

        let registration = Registration {
            username,
            email,
            phone,
            address,
            role: role.as_str().to_string(),
            password,
        };

        match self.users.register(registration).await {
            Ok(_) => println!("{role} created successfully."),
            Err(ServiceError::Storage(err)) if err.is_conflict() => {
                println!("Error: A user with that email already exists.");
            }
            Err(err) => report_error("creating user", &err),
        }
        Ok(())
    }

    async fn list_people(&self, role: Role) -> anyhow::Result<()> {
        match self.users.users_with_role(role).await {
            Ok(users) if users.is_empty() => println!("No {}s found.", role.as_str().to_lowercase()),
            Ok(users) => print_users(&users),
            Err(err) => report_error("retrieving users", &err),
        }
        Ok(())
    }

    async fn update_person(&self, role: Role) -> anyhow::Result<()> {
        let Some(id) = input::prompt_parse::<i64>(&format!("Enter {role} ID to update: "))? else {
            return Ok(());
        };

        let existing = match self.users.user_by_id_with_role(id, role).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                println!("{role} not found.");
                return Ok(());
            }
            Err(err) => {
                report_error("retrieving user", &err);
                return Ok(());
            }
        };

        let username =
            input::prompt_or_keep("New name (blank to keep current): ", &existing.username)?;
        let email = input::prompt_or_keep("New email (blank to keep current): ", &existing.email)?;
        let phone = input::prompt_or_keep("New phone (blank to keep current): ", &existing.phone)?;
        let address =
            input::prompt_or_keep("New address (blank to keep current): ", &existing.address)?;

        let password = input::prompt("New password (blank to keep current): ")?;
        let password_hash = if password.is_empty() {
            existing.password_hash.clone()
        } else {
            match self.users.hash_password(&password) {
                Ok(hash) => hash,
                Err(err) => {
                    report_error("hashing password", &err);
                    return Ok(());
                }
            }
        };

        let updated = User {
            username,
            email,
            phone,
            address,
            password_hash,
            ..existing
        };

        match self.users.update_with_role(&updated, role).await {
            Ok(()) => println!("{role} updated successfully."),
            Err(err) => report_error("updating user", &err),
        }
        Ok(())
    }

    async fn delete_person(&self, role: Role) -> anyhow::Result<()> {
        let Some(id) = input::prompt_parse::<i64>(&format!("Enter {role} ID to delete: "))? else {
            return Ok(());
        };

        match self.users.delete_with_role(id, role).await {
            Ok(()) => println!("{role} deleted successfully."),
            Err(ServiceError::Storage(err)) if err.is_not_found() => {
                println!("{role} not found.");
            }
            Err(err) => report_error("deleting user", &err),
        }
        Ok(())
    }

    // ----- memberships -----

    async fn membership_crud(&self) -> anyhow::Result<()> {
        loop {
            println!(
                "\nMembership Options: 1-Create Membership 2-List All Memberships 3-Update Membership \
                 4-Delete Membership 5-View Total Revenue 6-View Member Expenses 7-Back"
            );
            match input::prompt("Select an option: ")?.as_str() {
                "1" => self.create_membership().await?,
                "2" => self.list_all_memberships().await?,
                "3" => self.update_membership().await?,
                "4" => self.delete_membership().await?,
                "5" => self.view_total_revenue().await?,
                "6" => self.view_member_expenses().await?,
                "7" => return Ok(()),
                _ => println!("Invalid choice."),
            }
        }
    }

    async fn create_membership(&self) -> anyhow::Result<()> {
        let membership_type = input::prompt("Enter membership type (Standard, Premium, VIP): ")?;
        let description = input::prompt("Enter description: ")?;
        let Some(cost) = input::prompt_parse::<f64>("Enter price: ")? else {
            return Ok(());
        };
        let Some(member_id) = input::prompt_parse::<i64>("Enter member ID (owner): ")? else {
            return Ok(());
        };

        if membership_type.is_empty() {
            println!("Error: Membership type required.");
            return Ok(());
        }

        let membership = Membership::new(membership_type, description, cost, member_id);
        match self.memberships.add(&membership).await {
            Ok(created) => println!(
                "Membership created successfully: {} (${:.2}) for member #{}",
                created.membership_type, created.cost, created.member_id
            ),
            Err(ServiceError::Storage(gymdesk_storage::StorageError::ReferentialIntegrity(_))) => {
                println!("Error: No user with ID {member_id}.");
            }
            Err(err) => report_error("creating membership", &err),
        }
        Ok(())
    }

    async fn list_all_memberships(&self) -> anyhow::Result<()> {
        match self.memberships.all().await {
            Ok(memberships) if memberships.is_empty() => println!("No memberships found."),
            Ok(memberships) => print_memberships(&memberships),
            Err(err) => report_error("retrieving memberships", &err),
        }
        Ok(())
    }

    async fn update_membership(&self) -> anyhow::Result<()> {
        let Some(id) = input::prompt_parse::<i64>("Enter membership ID to update: ")? else {
            return Ok(());
        };

        let existing = match self.memberships.get(id).await {
            Ok(Some(membership)) => membership,
            Ok(None) => {
                println!("Membership not found.");
                return Ok(());
            }
            Err(err) => {
                report_error("retrieving membership", &err);
                return Ok(());
            }
        };

        let membership_type = input::prompt_or_keep(
            "New type (blank to keep current): ",
            &existing.membership_type,
        )?;
        let description = input::prompt_or_keep(
            "New description (blank to keep current): ",
            &existing.description,
        )?;
        let Some(cost) =
            input::prompt_parse_or_keep::<f64>("New price (blank to keep current): ", existing.cost)?
        else {
            return Ok(());
        };
        let Some(member_id) = input::prompt_parse_or_keep::<i64>(
            "New member ID (blank to keep current): ",
            existing.member_id,
        )?
        else {
            return Ok(());
        };

        let updated = Membership {
            membership_type,
            description,
            cost,
            member_id,
            ..existing
        };

        match self.memberships.update(&updated).await {
            Ok(()) => println!("Membership updated successfully."),
            Err(err) => report_error("updating membership", &err),
        }
        Ok(())
    }

    async fn delete_membership(&self) -> anyhow::Result<()> {
        let Some(id) = input::prompt_parse::<i64>("Enter membership ID to delete: ")? else {
            return Ok(());
        };

        match self.memberships.delete(id).await {
            Ok(()) => println!("Membership deleted successfully."),
            Err(ServiceError::Storage(err)) if err.is_not_found() => {
                println!("Membership not found.");
            }
            Err(err) => report_error("deleting membership", &err),
        }
        Ok(())
    }

    async fn view_total_revenue(&self) -> anyhow::Result<()> {
        match self.memberships.total_revenue().await {
            Ok(total) => println!("Total Revenue from Memberships: ${total:.2}"),
            Err(err) => report_error("calculating revenue", &err),
        }
        Ok(())
    }

    async fn view_member_expenses(&self) -> anyhow::Result<()> {
        let Some(member_id) = input::prompt_parse::<i64>("Enter member ID: ")? else {
            return Ok(());
        };

        match self.memberships.member_expenses(member_id).await {
            Ok(total) => println!("Total membership expenses for member #{member_id}: ${total:.2}"),
            Err(err) => report_error("calculating expenses", &err),
        }
        Ok(())
    }

    // ----- merchandise -----

    async fn merch_crud(&self) -> anyhow::Result<()> {
        loop {
            println!(
                "\nGymMerch Options: 1-Create GymMerch 2-List All GymMerch 3-Update GymMerch \
                 4-Delete GymMerch 5-Print Stock Report 6-Back"
            );
            match input::prompt("Select an option: ")?.as_str() {
                "1" => self.create_merch().await?,
                "2" => self.list_all_merch().await?,
                "3" => self.update_merch().await?,
                "4" => self.delete_merch().await?,
                "5" => self.print_stock_report().await?,
                "6" => return Ok(()),
                _ => println!("Invalid choice."),
            }
        }
    }

    async fn create_merch(&self) -> anyhow::Result<()> {
        let name = input::prompt("Enter item name: ")?;
        let category = input::prompt("Enter item type: ")?;
        let Some(unit_price) = input::prompt_parse::<f64>("Enter price: ")? else {
            return Ok(());
        };
        let Some(quantity) = input::prompt_parse::<i64>("Enter quantity in stock: ")? else {
            return Ok(());
        };

        if name.is_empty() {
            println!("Error: Item name required.");
            return Ok(());
        }

        let merch = GymMerch::new(name, category, unit_price, quantity);
        match self.merch.add(&merch).await {
            Ok(_) => println!("Merch created successfully."),
            Err(err) => report_error("creating merch", &err),
        }
        Ok(())
    }

    async fn update_merch(&self) -> anyhow::Result<()> {
        let Some(id) = input::prompt_parse::<i64>("Enter merch ID to update: ")? else {
            return Ok(());
        };

        let existing = match self.merch.get(id).await {
            Ok(Some(merch)) => merch,
            Ok(None) => {
                println!("Merch not found.");
                return Ok(());
            }
            Err(err) => {
                report_error("retrieving merch", &err);
                return Ok(());
            }
        };

        let name = input::prompt_or_keep("New name (blank to keep current): ", &existing.name)?;
        let category =
            input::prompt_or_keep("New type (blank to keep current): ", &existing.category)?;
        let Some(unit_price) = input::prompt_parse_or_keep::<f64>(
            "New price (blank to keep current): ",
            existing.unit_price,
        )?
        else {
            return Ok(());
        };
        let Some(quantity) = input::prompt_parse_or_keep::<i64>(
            "New quantity (blank to keep current): ",
            existing.quantity_in_stock,
        )?
        else {
            return Ok(());
        };

        let updated = GymMerch {
            name,
            category,
            unit_price,
            quantity_in_stock: quantity,
            ..existing
        };

        match self.merch.update(&updated).await {
            Ok(()) => println!("Merch updated successfully."),
            Err(err) => report_error("updating merch", &err),
        }
        Ok(())
    }

    async fn delete_merch(&self) -> anyhow::Result<()> {
        let Some(id) = input::prompt_parse::<i64>("Enter merch ID to delete: ")? else {
            return Ok(());
        };

        match self.merch.delete(id).await {
            Ok(()) => println!("Merch deleted successfully."),
            Err(ServiceError::Storage(err)) if err.is_not_found() => println!("Merch not found."),
            Err(err) => report_error("deleting merch", &err),
        }
        Ok(())
    }

    async fn print_stock_report(&self) -> anyhow::Result<()> {
        let report = match self.merch.stock_report().await {
            Ok(report) => report,
            Err(err) => {
                report_error("building stock report", &err);
                return Ok(());
            }
        };

        if report.is_empty() {
            println!("No merchandise in stock.");
            return Ok(());
        }

        println!("\n--- GYM MERCH STOCK REPORT ---");
        println!(
            "{:<5} {:<24} {:>10} {:>10} {:>12}",
            "ID", "Name", "Price", "Quantity", "Value"
        );
        for line in &report {
            println!(
                "{:<5} {:<24} {:>10.2} {:>10} {:>12.2}",
                line.id, line.name, line.unit_price, line.quantity_in_stock, line.value
            );
        }
        Ok(())
    }
}
