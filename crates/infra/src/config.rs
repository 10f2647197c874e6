use chrono_tz::Tz;
use moyeora_utils::create_random_secret;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Secret code that operators must send to use the admin routes, e.g.
    /// deleting `Event`s or triggering a reminder run by hand
    pub admin_secret_code: String,
    /// Port for the application to run on
    pub port: usize,
    /// Timezone used to decide which calendar day "today" is. Every school
    /// on the platform is in Korea, so this defaults to `Asia/Seoul`.
    pub timezone: Tz,
    /// Local hour of the day (0-23) at which the daily reminder job runs
    pub reminder_run_hour: u32,
}

impl Config {
    pub fn new() -> Self {
        let admin_secret_code = match std::env::var("ADMIN_SECRET_CODE") {
            Ok(code) => code,
            Err(_) => {
                info!("Did not find ADMIN_SECRET_CODE environment variable. Going to create one.");
                let code = create_random_secret(16);
                info!("Secret code for admin routes was generated and set to: {}", code);
                code
            }
        };

        let default_port = 5000;
        let port = match std::env::var("PORT") {
            Ok(port) => match port.parse::<usize>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given PORT: {} is not valid, falling back to the default port: {}.",
                        port, default_port
                    );
                    default_port
                }
            },
            Err(_) => default_port,
        };

        let default_timezone = chrono_tz::Asia::Seoul;
        let timezone = match std::env::var("MOYEORA_TIMEZONE") {
            Ok(tz) => match tz.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    warn!(
                        "The given MOYEORA_TIMEZONE: {} is not valid, falling back to: {}.",
                        tz, default_timezone
                    );
                    default_timezone
                }
            },
            Err(_) => default_timezone,
        };

        let default_run_hour = 9;
        let reminder_run_hour = match std::env::var("REMINDER_RUN_HOUR") {
            Ok(hour) => match hour.parse::<u32>() {
                Ok(hour) if hour < 24 => hour,
                _ => {
                    warn!(
                        "The given REMINDER_RUN_HOUR: {} is not an hour of the day, falling back to: {}.",
                        hour, default_run_hour
                    );
                    default_run_hour
                }
            },
            Err(_) => default_run_hour,
        };

        Self {
            admin_secret_code,
            port,
            timezone,
            reminder_run_hour,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
