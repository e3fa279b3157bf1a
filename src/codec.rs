//! Length-prefixed binary framing for protocol messages.
//!
//! A frame is a u32 big-endian payload length followed by the prost-encoded
//! message. Encode and decode are pure and reentrant; nothing here requires
//! synchronization.
//!
//! Decode behavior, documented for compatibility:
//! - unknown field numbers are skipped, never fatal;
//! - a duplicate member of a oneof group takes the last-wins rule, matching
//!   the common codec libraries this protocol interoperates with;
//! - truncated buffers, bad wire types, and length mismatches are rejected
//!   with [`CodecError::MalformedMessage`].

use bytes::{Buf, BufMut, Bytes, BytesMut};
use prost::Message;

/// Hard cap on a single frame payload, guarding against hostile lengths.
pub const MAX_FRAME_LEN: usize = 256 * 1024 * 1024;

/// Byte overhead of the length prefix.
pub const FRAME_HEADER_LEN: usize = 4;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("malformed message: {0}")]
    MalformedMessage(#[from] prost::DecodeError),

    #[error("truncated frame: need {needed} bytes, have {available}")]
    TruncatedFrame { needed: usize, available: usize },

    #[error("frame length {0} exceeds maximum {MAX_FRAME_LEN}")]
    FrameTooLarge(usize),
}

pub type CodecResult<T> = Result<T, CodecError>;

/// Encodes a message into a fresh length-prefixed frame.
pub fn encode_frame<M: Message>(message: &M) -> Bytes {
    let len = message.encoded_len();
    let mut buf = BytesMut::with_capacity(FRAME_HEADER_LEN + len);
    buf.put_u32(len as u32);
    message
        .encode(&mut buf)
        .expect("BytesMut grows on demand, encode cannot fail");
    buf.freeze()
}

/// Decodes one length-prefixed frame, returning the message and the number
/// of bytes consumed. The buffer may hold trailing data (e.g. the next
/// frame); it is left untouched.
pub fn decode_frame<M: Message + Default>(buf: &[u8]) -> CodecResult<(M, usize)> {
    if buf.len() < FRAME_HEADER_LEN {
        return Err(CodecError::TruncatedFrame {
            needed: FRAME_HEADER_LEN,
            available: buf.len(),
        });
    }
    let len = (&buf[..FRAME_HEADER_LEN]).get_u32() as usize;
    if len > MAX_FRAME_LEN {
        return Err(CodecError::FrameTooLarge(len));
    }
    let total = FRAME_HEADER_LEN + len;
    if buf.len() < total {
        return Err(CodecError::TruncatedFrame {
            needed: total,
            available: buf.len(),
        });
    }
    let message = M::decode(&buf[FRAME_HEADER_LEN..total])?;
    Ok((message, total))
}

/// Encodes a bare message without the frame header. Useful where an outer
/// transport already delimits messages.
pub fn encode<M: Message>(message: &M) -> Vec<u8> {
    message.encode_to_vec()
}

/// Decodes a bare message, rejecting malformed input.
pub fn decode<M: Message + Default>(buf: &[u8]) -> CodecResult<M> {
    Ok(M::decode(buf)?)
}
