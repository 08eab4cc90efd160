pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod engine;
pub mod layout;
pub mod scenario;
pub mod driver;
