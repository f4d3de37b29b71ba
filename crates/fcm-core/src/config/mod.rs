pub mod defaults;
pub mod fcm_config;
pub mod observability_config;
pub mod simulation_config;
pub mod spectral_config;
pub mod stabilization_config;

pub use fcm_config::FcmConfig;
pub use observability_config::ObservabilityConfig;
pub use simulation_config::SimulationConfig;
pub use spectral_config::SpectralConfig;
pub use stabilization_config::StabilizationConfig;
