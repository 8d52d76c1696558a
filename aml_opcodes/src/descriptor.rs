use crate::{
    args::{ArgKind, ArgList},
    opcode::Opcode,
};
use bitflags::bitflags;

/// The type of object produced by an opcode.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ObjectType {
    Any,
    Integer,
    String,
    Buffer,
    Package,
    Device,
    Event,
    Method,
    Mutex,
    Region,
    Power,
    Processor,
    Thermal,
    BufferField,
    LocalRegionField,
    LocalBankField,
    LocalReference,
    LocalAlias,
    LocalScope,
    LocalVariable,
    MethodArgument,
}

bitflags! {
    /// Describes how the term parser should treat an opcode.
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub struct OpFlags: u16 {
        /// The opcode builds a buffer or package, the contents of which are bounded by a `PkgLength` rather than
        /// by the number of arguments. Opcodes with a `TermList` or `FieldList` argument are also preceded by a
        /// `PkgLength`, but don't carry this flag.
        const HAS_PKG_LENGTH = 1 << 0;
        /// The opcode adds a new name to the namespace.
        const NAMED = 1 << 1;
        const CONSTANT = 1 << 2;
        /// The opcode produces a reference to an existing object, rather than a new value.
        const REFERENCE = 1 << 3;
        const ARITHMETIC = 1 << 4;
        /// The opcode creates a field that aliases part of an existing buffer.
        const CREATE = 1 << 5;
        const RETURN = 1 << 6;
        const EXECUTABLE = 1 << 7;
        /// The opcode has no effect and can be skipped.
        const NO_OP = 1 << 8;
        /// The trailing `TermList` of the opcode is parsed in a new namespace scope.
        const SCOPED = 1 << 9;
    }
}

/// Everything the parser knows about an opcode: what it produces, how it behaves, and the arguments that follow
/// it in the stream.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct OpcodeInfo {
    pub op: Opcode,
    pub object_type: ObjectType,
    pub flags: OpFlags,
    pub args: ArgList,
}

impl OpcodeInfo {
    pub const fn new(op: Opcode, object_type: ObjectType, flags: OpFlags, args: ArgList) -> OpcodeInfo {
        OpcodeInfo { op, object_type, flags, args }
    }

    pub const fn is(&self, flag: OpFlags) -> bool {
        self.flags.contains(flag)
    }

    pub fn arg_count(&self) -> usize {
        self.args.count()
    }

    pub fn arg(&self, n: usize) -> Option<ArgKind> {
        self.args.get(n)
    }

    pub fn has_arg(&self, kind: ArgKind) -> bool {
        self.args.contains(kind)
    }

    /// The number of bytes the opcode itself takes up in the stream, not including its arguments.
    pub const fn encoded_len(&self) -> usize {
        self.op.encoding().len()
    }
}
