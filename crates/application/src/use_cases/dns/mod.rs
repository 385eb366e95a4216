mod handle_dns_request;
mod resolve_query;

pub use handle_dns_request::HandleDnsRequestUseCase;
pub use resolve_query::{ResolutionOutcome, ResolveQueryUseCase};
