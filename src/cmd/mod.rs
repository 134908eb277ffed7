mod ask_ai;
mod create_ftd;
mod create_users;
mod list_devices;
mod onboard_asa;
mod onboard_ftds;
mod register_ftd;

pub use ask_ai::ask_ai;
pub use create_ftd::create_ftd;
pub use create_users::create_users;
pub use list_devices::list_devices;
pub use onboard_asa::onboard_asa;
pub use onboard_ftds::onboard_ftds;
pub use register_ftd::register_ftd;

use anyhow::{ensure, Result};

use crate::util::prompt::prompt;

/// Take the flag value or fall back to an interactive prompt.
fn required(value: Option<String>, label: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => {
            let value = prompt(label, None)?;
            ensure!(!value.is_empty(), "{label} must not be empty");
            Ok(value)
        }
    }
}
