use std::fmt;
use std::str::FromStr;

/// Record type tag as it appears in zone entries and questions.
///
/// Codes without a mnemonic are kept as `Unknown(code)` so that two distinct
/// unnamed types never collapse onto the same lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordType {
    // Basic records
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    PTR,

    // Advanced records
    SRV,
    SOA,
    NS,
    NAPTR,
    SVCB,
    HTTPS,
    DNAME,

    // Security & Modern records
    CAA,
    TLSA,
    SSHFP,
    OPENPGPKEY,

    // DNSSEC records
    DS,
    DNSKEY,
    RRSIG,
    NSEC,
    NSEC3,
    NSEC3PARAM,
    CDS,
    CDNSKEY,

    // Legacy/Informational records
    NULL,
    HINFO,

    // Query-only pseudo types
    OPT,
    ANY,

    Unknown(u16),
}

impl RecordType {
    const NAMED: [(RecordType, u16, &'static str); 29] = [
        (RecordType::A, 1, "A"),
        (RecordType::NS, 2, "NS"),
        (RecordType::CNAME, 5, "CNAME"),
        (RecordType::SOA, 6, "SOA"),
        (RecordType::NULL, 10, "NULL"),
        (RecordType::PTR, 12, "PTR"),
        (RecordType::HINFO, 13, "HINFO"),
        (RecordType::MX, 15, "MX"),
        (RecordType::TXT, 16, "TXT"),
        (RecordType::AAAA, 28, "AAAA"),
        (RecordType::SRV, 33, "SRV"),
        (RecordType::NAPTR, 35, "NAPTR"),
        (RecordType::DNAME, 39, "DNAME"),
        (RecordType::OPT, 41, "OPT"),
        (RecordType::DS, 43, "DS"),
        (RecordType::SSHFP, 44, "SSHFP"),
        (RecordType::RRSIG, 46, "RRSIG"),
        (RecordType::NSEC, 47, "NSEC"),
        (RecordType::DNSKEY, 48, "DNSKEY"),
        (RecordType::NSEC3, 50, "NSEC3"),
        (RecordType::NSEC3PARAM, 51, "NSEC3PARAM"),
        (RecordType::TLSA, 52, "TLSA"),
        (RecordType::CDS, 59, "CDS"),
        (RecordType::CDNSKEY, 60, "CDNSKEY"),
        (RecordType::OPENPGPKEY, 61, "OPENPGPKEY"),
        (RecordType::SVCB, 64, "SVCB"),
        (RecordType::HTTPS, 65, "HTTPS"),
        (RecordType::ANY, 255, "ANY"),
        (RecordType::CAA, 257, "CAA"),
    ];

    /// Zone-file mnemonic, `None` for unnamed codes.
    pub fn mnemonic(&self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(rt, _, _)| rt == self)
            .map(|(_, _, name)| *name)
    }

    /// Convert from wire format number (RFC 1035 and successors).
    pub fn from_u16(value: u16) -> Self {
        Self::NAMED
            .iter()
            .find(|(_, code, _)| *code == value)
            .map(|(rt, _, _)| *rt)
            .unwrap_or(RecordType::Unknown(value))
    }

    /// Convert to wire format number
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::Unknown(code) => *code,
            named => Self::NAMED
                .iter()
                .find(|(rt, _, _)| rt == named)
                .map(|(_, code, _)| *code)
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mnemonic() {
            Some(name) => f.write_str(name),
            None => write!(f, "TYPE{}", self.to_u16()),
        }
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();

        if let Some((rt, _, _)) = Self::NAMED.iter().find(|(_, _, name)| *name == upper) {
            return Ok(*rt);
        }

        upper
            .strip_prefix("TYPE")
            .and_then(|code| code.parse::<u16>().ok())
            .map(RecordType::from_u16)
            .ok_or_else(|| format!("Invalid record type: {}", s))
    }
}
