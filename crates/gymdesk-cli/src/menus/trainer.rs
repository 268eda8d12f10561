//! Trainer menu: class management plus browsing and purchases.

use gymdesk_services::ServiceError;
use gymdesk_storage::models::WorkoutClass;

use super::{App, print_classes, report_error};
use crate::input;
use crate::session::Session;

impl App {
    pub(crate) async fn trainer_menu(&self, session: &mut Session) -> anyhow::Result<()> {
        loop {
            println!("\n--- TRAINER MENU ---");
            println!("1. Manage My Workout Classes");
            println!("2. View All Workout Classes");
            println!("3. Purchase Membership");
            println!("4. View Gym Merchandise");
            println!("5. View My Membership Expenses");
            println!("6. Logout");

            match input::prompt("Select an option: ")?.as_str() {
                "1" => self.class_crud(session).await?,
                "2" => self.list_all_classes().await?,
                "3" => self.purchase_membership(session).await?,
                "4" => self.list_all_merch().await?,
                "5" => self.view_my_expenses(session).await?,
                "6" => {
                    session.logout();
                    println!("Logged out successfully.");
                    return Ok(());
                }
                _ => println!("Invalid option."),
            }
        }
    }

    async fn class_crud(&self, session: &Session) -> anyhow::Result<()> {
        loop {
            println!("\nWorkoutClass Options: 1-Create 2-View My Classes 3-Update 4-Delete 5-Back");
            match input::prompt("Select an option: ")?.as_str() {
                "1" => self.create_class(session).await?,
                "2" => self.list_my_classes(session).await?,
                "3" => self.update_class().await?,
                "4" => self.delete_class().await?,
                "5" => return Ok(()),
                _ => println!("Invalid choice."),
            }
        }
    }

    async fn create_class(&self, session: &Session) -> anyhow::Result<()> {
        let Some(trainer) = session.current_user() else {
            println!("You must be logged in.");
            return Ok(());
        };

        let class_type = input::prompt("Enter class name/type: ")?;
        let description = input::prompt("Enter description: ")?;

        if class_type.is_empty() {
            println!("Error: Class name required.");
            return Ok(());
        }

        let class = WorkoutClass::new(class_type, description, trainer.id);
        match self.classes.add(&class).await {
            Ok(_) => println!("Workout class created successfully."),
            Err(err) => report_error("creating workout class", &err),
        }
        Ok(())
    }

    async fn list_my_classes(&self, session: &Session) -> anyhow::Result<()> {
        let Some(trainer) = session.current_user() else {
            println!("You must be logged in.");
            return Ok(());
        };

        match self.classes.for_trainer(trainer.id).await {
            Ok(classes) if classes.is_empty() => println!("No classes found for this trainer."),
            Ok(classes) => print_classes(&classes),
            Err(err) => report_error("retrieving classes", &err),
        }
        Ok(())
    }

    async fn update_class(&self) -> anyhow::Result<()> {
        let Some(id) = input::prompt_parse::<i64>("Enter class ID to update: ")? else {
            return Ok(());
        };

        let existing = match self.classes.get(id).await {
            Ok(Some(class)) => class,
            Ok(None) => {
                println!("Workout class not found.");
                return Ok(());
            }
            Err(err) => {
                report_error("retrieving workout class", &err);
                return Ok(());
            }
        };

        let class_type = input::prompt_or_keep(
            "New name/type (blank to keep current): ",
            &existing.class_type,
        )?;
        let description = input::prompt_or_keep(
            "New description (blank to keep current): ",
            &existing.description,
        )?;
        let Some(trainer_id) = input::prompt_parse_or_keep::<i64>(
            "New trainer ID (blank to keep current): ",
            existing.trainer_id,
        )?
        else {
            return Ok(());
        };

        let updated = WorkoutClass {
            class_type,
            description,
            trainer_id,
            ..existing
        };

        match self.classes.update(&updated).await {
            Ok(()) => println!("Workout class updated successfully."),
            Err(err) => report_error("updating workout class", &err),
        }
        Ok(())
    }

    async fn delete_class(&self) -> anyhow::Result<()> {
        let Some(id) = input::prompt_parse::<i64>("Enter class ID to delete: ")? else {
            return Ok(());
        };

        match self.classes.delete(id).await {
            Ok(()) => println!("Workout class deleted successfully."),
            Err(ServiceError::Storage(err)) if err.is_not_found() => {
                println!("Workout class not found.");
            }
            Err(err) => report_error("deleting workout class", &err),
        }
        Ok(())
    }
}
