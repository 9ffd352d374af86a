pub mod output;
pub mod ports;
pub mod script;
pub mod target;
pub mod timing;

/// The probe technique handed to nmap. Exactly one is active per scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanType {
    /// Half-open TCP scan (`-sS`).
    Syn,
    /// Full TCP handshake (`-sT`), works without privileges.
    Connect,
    /// UDP probe scan (`-sU`).
    Udp,
}

impl ScanType {
    pub const fn flag(self) -> &'static str {
        match self {
            ScanType::Syn => "-sS",
            ScanType::Connect => "-sT",
            ScanType::Udp => "-sU",
        }
    }

    /// SYN and UDP probes are crafted on raw sockets and need root.
    pub const fn needs_raw_sockets(self) -> bool {
        !matches!(self, ScanType::Connect)
    }
}
