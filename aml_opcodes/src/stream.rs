use crate::{args::ArgKind, descriptor::OpcodeInfo, table::resolve, AmlError};
use byteorder::{ByteOrder, LittleEndian};
use core::str;
use log::trace;

/// A cursor over a stream of AML that decodes opcodes, and the operands that can be decoded without knowing
/// anything about the structure around them. Package lengths, names, and nested terms are left to the caller,
/// which can use `remaining` to get at the rest of the stream.
///
/// None of the methods move the cursor if they fail.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct OpcodeStream<'a> {
    stream: &'a [u8],
    pc: usize,
}

impl<'a> OpcodeStream<'a> {
    pub fn new(stream: &'a [u8]) -> OpcodeStream<'a> {
        OpcodeStream { stream, pc: 0 }
    }

    /// The offset of the cursor from the start of the stream.
    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn remaining(&self) -> &'a [u8] {
        &self.stream[self.pc..]
    }

    pub fn is_empty(&self) -> bool {
        self.pc >= self.stream.len()
    }

    pub fn peek(&self) -> Result<u8, AmlError> {
        self.stream.get(self.pc).copied().ok_or(AmlError::UnexpectedEndOfStream)
    }

    pub fn next(&mut self) -> Result<u8, AmlError> {
        let byte = self.peek()?;
        self.pc += 1;
        Ok(byte)
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], AmlError> {
        let bytes = self.remaining().get(..n).ok_or(AmlError::UnexpectedEndOfStream)?;
        self.pc += n;
        Ok(bytes)
    }

    /// Decode the opcode at the cursor, and move past it. The opcode's arguments are not consumed.
    pub fn next_opcode(&mut self) -> Result<&'static OpcodeInfo, AmlError> {
        let byte = self.peek()?;
        let info = resolve(byte, self.stream.get(self.pc + 1).copied())?;

        trace!("Decoded opcode {:?} at pc={:#x}", info.op, self.pc);
        self.pc += info.encoded_len();
        Ok(info)
    }

    /// Decode a little-endian fixed-width immediate of the given kind.
    pub fn immediate(&mut self, kind: ArgKind) -> Result<u64, AmlError> {
        let width = kind.immediate_width().ok_or(AmlError::NotAnImmediate(kind))?;
        let bytes = self.take(width)?;

        Ok(match width {
            1 => u64::from(bytes[0]),
            2 => u64::from(LittleEndian::read_u16(bytes)),
            4 => u64::from(LittleEndian::read_u32(bytes)),
            _ => LittleEndian::read_u64(bytes),
        })
    }

    /// Decode a string operand. These are ASCII, terminated with a NUL byte, which is not included in the
    /// returned string.
    pub fn string(&mut self) -> Result<&'a str, AmlError> {
        let remaining = self.remaining();
        let length = remaining.iter().position(|&byte| byte == 0x00).ok_or(AmlError::UnexpectedEndOfStream)?;

        let string = str::from_utf8(&remaining[..length])
            .ok()
            .filter(|string| string.is_ascii())
            .ok_or(AmlError::InvalidStringConstant)?;

        self.pc += length + 1;
        Ok(string)
    }
}
