//! Method channel plumbing.
//!
//! - [`MethodCall`](methodcall::MethodCall) / [`MethodResult`](methodcall::MethodResult):
//!   one request and its single reply
//! - [`JsonMethodCodec`](jsoncodec::JsonMethodCodec): wire encoding of calls and replies
//! - [`MethodChannel`](methodchannel::MethodChannel): routes calls to the attached handler

#[cfg(feature = "json")]
pub mod jsoncodec;
pub mod methodcall;
pub mod methodchannel;
