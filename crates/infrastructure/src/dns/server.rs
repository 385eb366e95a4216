use crate::dns::forwarding::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use simsam_dns_application::use_cases::HandleDnsRequestUseCase;
use simsam_dns_domain::{DnsQuery, ResponseStatus};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::debug;

/// Turns one decoded request into its reply.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsRequestUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsRequestUseCase>) -> Self {
        Self { use_case }
    }

    /// Questions as received: names keep their original spelling and
    /// trailing dot.
    fn questions(request: &Message) -> Vec<DnsQuery> {
        request
            .queries()
            .iter()
            .map(|query| {
                DnsQuery::new(
                    query.name().to_ascii(),
                    RecordTypeMapper::from_hickory(query.query_type()),
                )
            })
            .collect()
    }

    /// Resolves every question of `request` and builds the reply: id, opcode,
    /// RD and CD mirrored, AA from the assembly, RA cleared, question section
    /// copied.
    pub async fn handle(&self, request: &Message, client: SocketAddr) -> Message {
        let questions = Self::questions(request);

        for question in &questions {
            debug!(
                domain = %question.domain,
                record_type = %question.record_type,
                client = %client,
                "DNS query received"
            );
        }

        let assembled = self.use_case.execute(&questions).await;

        let mut response = Message::new();
        response
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .set_op_code(request.op_code())
            .set_recursion_desired(request.recursion_desired())
            .set_checking_disabled(request.checking_disabled())
            .set_authoritative(assembled.authoritative)
            .set_recursion_available(false)
            .set_response_code(status_to_rcode(assembled.status))
            .add_queries(request.queries().to_vec())
            .add_answers(assembled.answers);

        response
    }
}

pub fn status_to_rcode(status: ResponseStatus) -> ResponseCode {
    match status {
        ResponseStatus::NoError => ResponseCode::NoError,
        ResponseStatus::ServFail => ResponseCode::ServFail,
    }
}
