//! Member menu: browsing, purchases, and the expense report.

use super::App;
use crate::input;
use crate::session::Session;

impl App {
    pub(crate) async fn member_menu(&self, session: &mut Session) -> anyhow::Result<()> {
        loop {
            println!("\n--- MEMBER MENU ---");
            println!("1. Browse Workout Classes");
            println!("2. Purchase Membership");
            println!("3. View My Membership Expenses");
            println!("4. View Gym Merchandise");
            println!("5. Logout");

            match input::prompt("Select an option: ")?.as_str() {
                "1" => self.list_all_classes().await?,
                "2" => self.purchase_membership(session).await?,
                "3" => self.view_my_expenses(session).await?,
                "4" => self.list_all_merch().await?,
                "5" => {
                    session.logout();
                    println!("Logged out successfully.");
                    return Ok(());
                }
                _ => println!("Invalid option."),
            }
        }
    }
}
