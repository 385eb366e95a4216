use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::Record;
use hickory_proto::serialize::binary::BinEncodable;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock upstream reacts to each query.
#[derive(Clone)]
pub enum MockBehavior {
    /// Reply with these answers, echoing the query id and question.
    Answer(Vec<Record>),
    /// Reply with the given rcode and no answers.
    Rcode(ResponseCode),
    /// Reply with a well-formed response carrying a different id.
    WrongId,
    /// Reply with bytes that are not a DNS message.
    Garbage,
    /// Never reply.
    Silent,
}

/// Upstream resolver stand-in listening on 127.0.0.1.
pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        let received = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&received);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        counter.fetch_add(1, Ordering::SeqCst);
                        if let Some(reply) = Self::reply(&behavior, &buf[..len]) {
                            let _ = socket.send_to(&reply, peer).await;
                        }
                    }
                }
            }
        });

        Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn received(&self) -> usize {
        self.received.load(Ordering::SeqCst)
    }

    fn reply(behavior: &MockBehavior, query: &[u8]) -> Option<Vec<u8>> {
        let request = Message::from_vec(query).ok()?;

        let mut response = Message::new();
        response
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .set_recursion_desired(request.recursion_desired())
            .set_recursion_available(true)
            .add_queries(request.queries().to_vec());

        match behavior {
            MockBehavior::Answer(records) => {
                response.add_answers(records.clone());
            }
            MockBehavior::Rcode(code) => {
                response.set_response_code(*code);
            }
            MockBehavior::WrongId => {
                response.set_id(request.id().wrapping_add(1));
            }
            MockBehavior::Garbage => return Some(vec![0xde, 0xad, 0xbe]),
            MockBehavior::Silent => return None,
        }

        response.to_vec().ok()
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
