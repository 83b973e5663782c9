use launchpad_ui::DataTable;
use launchpad_ui::demo::{self, User};

use crate::config::Config;

/// Read-only state shared by all handlers.
pub struct AppServices {
    pub config: Config,
    pub users: Vec<User>,
    pub users_table: DataTable<User>,
}

impl AppServices {
    pub fn new(config: Config) -> Self {
        let users_table = DataTable::new(demo::user_columns())
            .with_caption("A list of sample users")
            .with_row_click(|user: &User, index| {
                tracing::info!(user_id = user.id, index, "user row selected");
            });

        Self {
            config,
            users: demo::sample_users(),
            users_table,
        }
    }
}
