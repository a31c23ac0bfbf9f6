//! Chains of zero-copy byte ranges for transport send and retransmission
//! queues.
//!
//! This crate provides `ChainedByteRangeHead`, an ordered run of bytes held
//! as a chain of `ChainedByteRange` views into shared `Bytes` buffers.
//! Its primary purpose is to hold stream data that a transport such as QUIC
//! keeps around for sending, retransmission or reassembly, where the data
//! has to be cut into packet-sized prefixes again and again without copying
//! the payload.
//!
//! A chain is fed with `Bytes` segments, either one at a time or as a whole
//! sequence as produced by a network receive or by an application assembling
//! send data; empty segments are dropped. Two chains can be concatenated
//! in constant time. A prefix of a chain can be split off into a new chain
//! with `split_at_most`, or discarded with `trim_start_at_most`; only the
//! range straddling the cut is sliced, and both of its parts keep sharing
//! the original buffer.
//!
//! `ChainedByteRangeHead` also implements `Buf`, so it can be read by any
//! API that consumes a `Buf`, including vectored output.
//!
//! # Examples
//!
//! ```
//! use bytes::Bytes;
//! use chained_bytes::ChainedByteRangeHead;
//! use tokio::io::{self, AsyncWriteExt};
//!
//! #[tokio::main]
//! async fn main() -> io::Result<()> {
//!     let mut pending: ChainedByteRangeHead = vec![
//!         Bytes::from_static(b"GET / HTTP/1.1\r\n"),
//!         Bytes::new(),
//!         Bytes::from_static(b"Host: example.com\r\n\r\n"),
//!     ]
//!     .into_iter()
//!     .collect();
//!     assert_eq!(pending.chain_length(), 37);
//!
//!     // Cut off a packet's worth of data; the rest stays queued.
//!     let mut packet = pending.split_at_most(20);
//!     assert_eq!(packet.chain_length(), 20);
//!     assert_eq!(pending.chain_length(), 17);
//!
//!     let mut sink = io::sink();
//!     sink.write_all_buf(&mut packet).await?;
//!     assert!(packet.is_empty());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(future_incompatible)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![doc(test(no_crate_inject, attr(deny(warnings, rust_2018_idioms))))]

mod head;
mod iter;
mod range;

pub use self::head::ChainedByteRangeHead;
pub use self::iter::{IntoRanges, Iter};
pub use self::range::ChainedByteRange;
