use crate::use_cases::ResolutionOutcome;
use hickory_proto::rr::Record;
use simsam_dns_domain::ResponseStatus;

/// Reply content built from the outcomes of every question of one request.
#[derive(Debug, Clone, Default)]
pub struct AssembledResponse {
    pub answers: Vec<Record>,
    pub authoritative: bool,
    pub status: ResponseStatus,
}

/// Folds per-question outcomes into a single reply.
///
/// - `authoritative` holds only if every question was answered from the zone.
/// - A single forwarding failure turns the whole reply into SERVFAIL; answers
///   of the other questions are still included.
/// - Answers are concatenated in question order, each question's records in
///   zone (or upstream) order.
pub struct ResponseAssembler;

impl ResponseAssembler {
    pub fn assemble<I>(outcomes: I) -> AssembledResponse
    where
        I: IntoIterator<Item = ResolutionOutcome>,
    {
        let mut response = AssembledResponse {
            answers: Vec::new(),
            authoritative: true,
            status: ResponseStatus::NoError,
        };

        for outcome in outcomes {
            if !outcome.is_authoritative() {
                response.authoritative = false;
            }
            if outcome.is_failure() {
                response.status = ResponseStatus::ServFail;
            }
            response.answers.extend(outcome.into_records());
        }

        response
    }
}
