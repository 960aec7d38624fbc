use log::Level;

pub const COMPANY_NAME: &str = "IDO Production Company";
pub const CONTACT_EMAIL: &str = "hello@ido-music.com";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn contact_mailto() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}
