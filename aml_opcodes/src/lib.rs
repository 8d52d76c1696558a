//! `aml_opcodes` holds the opcode table of an AML interpreter: for every opcode of ACPI Machine Language, the
//! type of object it produces, flags describing how it should be parsed and executed, and the kinds of the
//! arguments that follow it in the stream. It also resolves raw bytes from the stream to entries in that table.
//!
//! The crate is `no_std` and never allocates. The table and the byte maps that index it are immutable statics,
//! and so can be shared freely between threads.
//!
//! ### Usage
//! A term parser reads the next byte of the stream (and the byte after it, in case it is the extended opcode
//! prefix), and passes them to `resolve`. The returned `OpcodeInfo` then tells it how to handle the opcode:
//! ```
//! use aml_opcodes::{resolve, ArgKind, OpFlags, Opcode};
//!
//! let method = resolve(0x14, None).unwrap();
//! assert_eq!(method.op, Opcode::Method);
//! assert!(method.is(OpFlags::NAMED | OpFlags::SCOPED));
//! assert_eq!(method.arg(0), Some(ArgKind::NameString));
//! ```
//! `OpcodeStream` does the same thing over a byte slice, and can also decode the fixed-width and string
//! operands that some opcodes take. Package lengths, names, and the nested terms of an opcode are the business of
//! the term parser.

#![no_std]

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test_utils;

pub mod args;
pub mod descriptor;
pub mod opcode;
pub mod stream;
pub mod table;

pub use args::{ArgKind, ArgList};
pub use descriptor::{ObjectType, OpFlags, OpcodeInfo};
pub use opcode::{Opcode, OpcodeEncoding};
pub use stream::OpcodeStream;
pub use table::{info_for, opcode_info_at, resolve, OPCODE_TABLE};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AmlError {
    /// The byte is not an opcode this crate knows about.
    IllegalOpcode(u8),
    /// The extended opcode prefix was followed by this byte, which is not an extended opcode this crate knows
    /// about.
    IllegalExtOpcode(u8),
    /// The stream ended straight after an extended opcode prefix.
    TruncatedExtOpcode,
    UnexpectedEndOfStream,
    /// An `OpcodeStream` was asked to decode an argument that isn't a fixed-width immediate.
    NotAnImmediate(ArgKind),
    InvalidStringConstant,
}
