pub mod use_auth;
pub mod use_cost_data;
pub mod use_energy_data;
pub mod use_theme;
