pub mod forwarding;
pub mod listener;
pub mod server;
pub mod transport;

pub use forwarding::UdpForwarder;
pub use listener::UdpDnsServer;
pub use server::DnsServerHandler;
