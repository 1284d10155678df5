pub mod energy_production;
pub mod home;
pub mod marginal_costs;

pub use energy_production::EnergyProductionPage;
pub use home::HomePage;
pub use marginal_costs::MarginalCostPage;
