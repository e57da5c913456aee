/// Environment variable names - single source of truth
pub mod env_vars {
    pub const API_URL: &str = "NOTES_API_URL";
}

/// Default values
pub mod defaults {
    pub const API_URL: &str = "http://localhost:5000";
}
