pub mod code;
pub mod overview;
pub mod readme;
pub mod shared;
pub mod simulation;

pub use code::CodeView;
pub use overview::OverviewView;
pub use readme::ReadmeView;
pub use simulation::SimulationView;
