//! Authentication menu: login, registration, exit.

use gymdesk_services::{Registration, ServiceError};

use super::{App, report_error};
use crate::input;
use crate::session::Session;

impl App {
    /// Show the auth menu once. Returns `false` when the user chose Exit.
    pub(crate) async fn auth_menu(&self, session: &mut Session) -> anyhow::Result<bool> {
        println!("\n1. Login");
        println!("2. Register");
        println!("3. Exit");

        match input::prompt("Select an option: ")?.as_str() {
            "1" => self.login(session).await?,
            "2" => self.register().await?,
            "3" => return Ok(false),
            _ => println!("Invalid option."),
        }

        Ok(true)
    }

    async fn login(&self, session: &mut Session) -> anyhow::Result<()> {
        let username = input::prompt("Enter username: ")?;
        let password = input::prompt("Enter password: ")?;

        if username.is_empty() || password.is_empty() {
            println!("Error: Username and password cannot be empty.");
            return Ok(());
        }

        match self.users.login(&username, &password).await {
            Ok(Some(user)) => {
                println!(
                    "Login successful. Welcome, {} (user #{})!",
                    user.username, user.id
                );
                session.login(user);
            }
            Ok(None) => println!("Error: User not found or invalid password."),
            Err(err) => report_error("during login", &err),
        }

        Ok(())
    }

    async fn register(&self) -> anyhow::Result<()> {
        let username = input::prompt("Enter username: ")?;
        let email = input::prompt("Enter email: ")?;
        let phone = input::prompt("Enter phone number: ")?;
        let address = input::prompt("Enter address: ")?;
        let role = input::prompt("Enter role (Member/Admin/Trainer): ")?;
        let password = input::prompt("Enter password: ")?;

        if username.is_empty() || email.is_empty() || password.is_empty() || role.is_empty() {
            println!("Error: Required fields cannot be empty.");
            return Ok(());
        }
        if !email.contains('@') {
            println!("Error: Invalid email format.");
            return Ok(());
        }

        let registration = Registration {
            username,
            email,
            phone,
            address,
            role,
            password,
        };

        match self.users.register(registration).await {
            Ok(user) => println!(
                "{} created successfully. Please log in with your credentials.",
                user.role
            ),
            Err(ServiceError::InvalidRole(_)) => {
                println!("Error: Role must be one of Admin, Trainer, or Member.");
            }
            Err(ServiceError::Storage(err)) if err.is_conflict() => {
                println!("Error: A user with that email already exists.");
            }
            Err(err) => report_error("creating user", &err),
        }

        Ok(())
    }
}
