use super::ResolveQueryUseCase;
use crate::services::{AssembledResponse, ResponseAssembler};
use simsam_dns_domain::DnsQuery;
use std::sync::Arc;
use tracing::debug;

/// Resolves every question of one request in order and assembles the reply.
pub struct HandleDnsRequestUseCase {
    resolver: Arc<ResolveQueryUseCase>,
}

impl HandleDnsRequestUseCase {
    pub fn new(resolver: Arc<ResolveQueryUseCase>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, queries: &[DnsQuery]) -> AssembledResponse {
        let mut outcomes = Vec::with_capacity(queries.len());
        for query in queries {
            outcomes.push(self.resolver.execute(query).await);
        }

        let response = ResponseAssembler::assemble(outcomes);

        debug!(
            questions = queries.len(),
            answers = response.answers.len(),
            authoritative = response.authoritative,
            status = %response.status,
            "Response assembled"
        );

        response
    }
}
