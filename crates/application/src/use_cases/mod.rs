pub mod dns;
pub mod zone;

// Re-export use cases
pub use dns::{HandleDnsRequestUseCase, ResolutionOutcome, ResolveQueryUseCase};
pub use zone::LoadZoneUseCase;
