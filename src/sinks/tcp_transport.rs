//! TCP transport for error reports
//!
//! Ships each [`ErrorReport`] as one JSON line to a collector over TCP.
//! Connect and write are bounded by timeouts so a dead collector never
//! stalls the fan-out.

use super::error_tracking::{ErrorReport, Transport};
use crate::core::{LoggerError, Result};
use std::io::Write;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Default connect/write timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// # Example
///
/// ```no_run
/// use rust_adapter_logger::prelude::*;
/// use rust_adapter_logger::sinks::TcpTransport;
///
/// let transport = TcpTransport::connect("127.0.0.1:8080")
///     .expect("Failed to connect to collector");
///
/// let logger = Logger::new();
/// logger.add_sink(ErrorTrackingSink::new(transport));
/// logger.errorln(&[&"This report will be sent to 127.0.0.1:8080"]);
/// ```
pub struct TcpTransport {
    stream: Option<TcpStream>,
    address: SocketAddr,
    timeout: Duration,
    reconnect_on_error: bool,
}

impl TcpTransport {
    /// Connect to `addr` with [`DEFAULT_TIMEOUT`]
    ///
    /// # Errors
    ///
    /// Returns error if the address does not resolve or the connection fails
    pub fn connect(addr: impl ToSocketAddrs) -> Result<Self> {
        Self::connect_timeout(addr, DEFAULT_TIMEOUT)
    }

    pub fn connect_timeout(addr: impl ToSocketAddrs, timeout: Duration) -> Result<Self> {
        let address = addr
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| LoggerError::config("TcpTransport", "address did not resolve"))?;
        let stream = Self::open(&address, timeout)?;

        Ok(Self {
            stream: Some(stream),
            address,
            timeout,
            reconnect_on_error: true,
        })
    }

    /// Enable or disable one reconnect attempt after a failed write
    ///
    /// Default: enabled
    #[must_use]
    pub fn with_reconnect(mut self, enable: bool) -> Self {
        self.reconnect_on_error = enable;
        self
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }

    fn open(address: &SocketAddr, timeout: Duration) -> Result<TcpStream> {
        let stream = TcpStream::connect_timeout(address, timeout)?;
        stream.set_write_timeout(Some(timeout))?;
        stream.set_nodelay(true)?;
        Ok(stream)
    }

    fn reconnect(&mut self) -> Result<()> {
        self.stream = Some(Self::open(&self.address, self.timeout)?);
        Ok(())
    }

    fn write_payload(&mut self, payload: &[u8]) -> std::io::Result<()> {
        match self.stream {
            Some(ref mut stream) => stream.write_all(payload),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "collector stream not connected",
            )),
        }
    }
}

impl Transport for TcpTransport {
    fn send(&mut self, report: &ErrorReport) -> Result<()> {
        let mut payload = serde_json::to_vec(report)?;
        payload.push(b'\n');

        let Err(e) = self.write_payload(&payload) else {
            return Ok(());
        };

        self.stream = None;
        if !self.reconnect_on_error {
            return Err(LoggerError::transport(self.name(), e.to_string()));
        }

        match self.reconnect() {
            Ok(()) => self
                .write_payload(&payload)
                .map_err(|e| LoggerError::transport("tcp", e.to_string())),
            Err(reconnect_err) => Err(LoggerError::transport(
                "tcp",
                format!(
                    "Failed to send report and reconnect: {} (reconnect: {})",
                    e, reconnect_err
                ),
            )),
        }
    }

    fn name(&self) -> &str {
        "tcp"
    }
}
