//! Base types and error handling.
//!
//! Provides the foundational types shared by the codec, the channel and the
//! dispatcher:
//! - [`BridgeError`](bridgeerror::BridgeError): error taxonomy and channel error codes
//! - [`Capabilities`](capabilities::Capabilities): platform capability flags

pub mod bridgeerror;
pub mod capabilities;
pub mod context;
