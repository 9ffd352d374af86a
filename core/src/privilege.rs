//! Detects when a request needs root before nmap is started.
//!
//! Escalation itself is out of scope; the caller decides whether to warn
//! or refuse.

use is_root::is_root;

use crate::request::ScanRequest;

/// Raw-socket techniques: SYN/UDP probes, OS fingerprinting and spoofed
/// decoy sources.
pub fn requires_root(request: &ScanRequest) -> bool {
    request.scan_type.needs_raw_sockets() || request.os_detection || !request.decoys.is_empty()
}

pub fn has_root() -> bool {
    is_root()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{self, RawScanOptions};

    fn request_for(raw: RawScanOptions) -> ScanRequest {
        request::build(raw).unwrap()
    }

    #[test]
    fn test_connect_scan_is_unprivileged() {
        let request = request_for(RawScanOptions {
            target: "example.com".to_string(),
            connect: true,
            ..RawScanOptions::default()
        });
        assert!(!requires_root(&request));
    }

    #[test]
    fn test_raw_socket_techniques_need_root() {
        let syn = request_for(RawScanOptions {
            target: "example.com".to_string(),
            syn: true,
            ..RawScanOptions::default()
        });
        assert!(requires_root(&syn));

        let udp = request_for(RawScanOptions {
            target: "example.com".to_string(),
            udp: true,
            ..RawScanOptions::default()
        });
        assert!(requires_root(&udp));

        let os_detect = request_for(RawScanOptions {
            target: "example.com".to_string(),
            connect: true,
            os_detection: true,
            ..RawScanOptions::default()
        });
        assert!(requires_root(&os_detect));

        let decoys = request_for(RawScanOptions {
            target: "example.com".to_string(),
            connect: true,
            decoys: Some("10.0.0.1".to_string()),
            ..RawScanOptions::default()
        });
        assert!(requires_root(&decoys));
    }
}
