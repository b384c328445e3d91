//! Mock implementations for testing
//!
//! This module provides a recording [`Interface`] for use in unit and
//! integration tests of the panel driver and the display layer.

#![cfg(any(test, feature = "std"))]

use crate::Interface;
use std::vec::Vec;

/// One call made through the interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transfer {
    /// Bytes sent with `command` / `commands`
    Command(Vec<u8>),
    /// Bytes sent with `data`
    Data(Vec<u8>),
}

/// Error returned once a [`MockInterface`] has been told to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockBusError;

/// Mock wire interface that records every transfer
#[derive(Debug, Default)]
pub struct MockInterface {
    transfers: Vec<Transfer>,
    fail_after: Option<usize>,
}

impl MockInterface {
    /// Create new mock interface
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every transfer after the first `ok_transfers` succeed
    pub fn failing_after(ok_transfers: usize) -> Self {
        Self {
            transfers: Vec::new(),
            fail_after: Some(ok_transfers),
        }
    }

    /// All transfers in call order
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    /// Command transfers only, in call order
    pub fn commands(&self) -> Vec<&[u8]> {
        self.transfers
            .iter()
            .filter_map(|t| match t {
                Transfer::Command(bytes) => Some(bytes.as_slice()),
                Transfer::Data(_) => None,
            })
            .collect()
    }

    /// Every data byte sent, concatenated
    pub fn data_bytes(&self) -> Vec<u8> {
        self.transfers
            .iter()
            .filter_map(|t| match t {
                Transfer::Data(bytes) => Some(bytes.as_slice()),
                Transfer::Command(_) => None,
            })
            .flatten()
            .copied()
            .collect()
    }

    /// Forget everything recorded so far
    pub fn clear(&mut self) {
        self.transfers.clear();
    }

    fn record(&mut self, transfer: Transfer) -> Result<(), MockBusError> {
        if let Some(limit) = self.fail_after {
            if self.transfers.len() >= limit {
                return Err(MockBusError);
            }
        }
        self.transfers.push(transfer);
        Ok(())
    }
}

impl Interface for MockInterface {
    type Error = MockBusError;

    fn commands(&mut self, cmds: &[u8]) -> Result<(), Self::Error> {
        self.record(Transfer::Command(cmds.to_vec()))
    }

    fn data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.record(Transfer::Data(data.to_vec()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_in_order() {
        let mut pif = MockInterface::new();

        pif.command(0xAE).unwrap();
        pif.data(&[1, 2, 3]).unwrap();
        Interface::commands(&mut pif, &[0x21, 0x00, 0x7F]).unwrap();

        assert_eq!(
            pif.transfers(),
            &[
                Transfer::Command(vec![0xAE]),
                Transfer::Data(vec![1, 2, 3]),
                Transfer::Command(vec![0x21, 0x00, 0x7F]),
            ]
        );
        assert_eq!(pif.commands(), vec![&[0xAE][..], &[0x21, 0x00, 0x7F][..]]);
        assert_eq!(pif.data_bytes(), vec![1, 2, 3]);
    }

    #[test]
    fn test_mock_failing_after() {
        let mut pif = MockInterface::failing_after(1);

        assert!(pif.command(0xAE).is_ok());
        assert_eq!(pif.data(&[0xFF]), Err(MockBusError));
        assert_eq!(pif.transfers().len(), 1);
    }

    #[test]
    fn test_mut_ref_is_interface() {
        fn send<I: Interface>(mut i: I) {
            i.command(0xAF).unwrap();
        }
        let mut pif = MockInterface::new();
        send(&mut pif);
        assert_eq!(pif.commands(), vec![&[0xAF][..]]);
    }
}
