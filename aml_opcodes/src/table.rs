use crate::{
    args::{ArgKind as Arg, ArgList},
    descriptor::{ObjectType, OpFlags, OpcodeInfo},
    opcode::{Opcode, OpcodeEncoding, EXT_OPCODE_PREFIX},
    AmlError,
};
use log::trace;

const NAMED_SCOPE: OpFlags = OpFlags::NAMED.union(OpFlags::SCOPED);
const NAMED_CREATE: OpFlags = OpFlags::NAMED.union(OpFlags::CREATE);
const ARITHMETIC: OpFlags = OpFlags::ARITHMETIC.union(OpFlags::EXECUTABLE);
const EXEC: OpFlags = OpFlags::EXECUTABLE;
const REFERENCE: OpFlags = OpFlags::REFERENCE.union(OpFlags::EXECUTABLE);

const TERM_TERM_TARGET: ArgList = ArgList::three(Arg::TermObj, Arg::TermObj, Arg::Target);
const TERM_TARGET: ArgList = ArgList::two(Arg::TermObj, Arg::Target);
const CREATE_FIELD_ARGS: ArgList = ArgList::three(Arg::TermObj, Arg::TermObj, Arg::NameString);

/*
 * One entry for every opcode the parser understands. The table is indexed by position, not by opcode: the byte
 * maps below translate from the bytes in the stream to a position in this table. Nothing may mutate it after
 * it's built.
 */
#[rustfmt::skip]
const TABLE: &[OpcodeInfo] = &[
    /*0x00*/ OpcodeInfo::new(Opcode::Zero, ObjectType::Integer, OpFlags::CONSTANT, ArgList::none()),
    /*0x01*/ OpcodeInfo::new(Opcode::One, ObjectType::Integer, OpFlags::CONSTANT, ArgList::none()),
    /*0x02*/ OpcodeInfo::new(Opcode::Alias, ObjectType::LocalAlias, OpFlags::NAMED, ArgList::two(Arg::NameString, Arg::NameString)),
    /*0x03*/ OpcodeInfo::new(Opcode::Name, ObjectType::Any, OpFlags::NAMED, ArgList::two(Arg::NameString, Arg::DataRefObj)),
    /*0x04*/ OpcodeInfo::new(Opcode::BytePrefix, ObjectType::Integer, OpFlags::CONSTANT, ArgList::one(Arg::ByteData)),
    /*0x05*/ OpcodeInfo::new(Opcode::WordPrefix, ObjectType::Integer, OpFlags::CONSTANT, ArgList::one(Arg::Word)),
    /*0x06*/ OpcodeInfo::new(Opcode::DWordPrefix, ObjectType::Integer, OpFlags::CONSTANT, ArgList::one(Arg::DWord)),
    /*0x07*/ OpcodeInfo::new(Opcode::StringPrefix, ObjectType::String, OpFlags::CONSTANT, ArgList::one(Arg::String)),
    /*0x08*/ OpcodeInfo::new(Opcode::QWordPrefix, ObjectType::Integer, OpFlags::CONSTANT, ArgList::one(Arg::QWord)),
    /*0x09*/ OpcodeInfo::new(Opcode::Scope, ObjectType::LocalScope, NAMED_SCOPE, ArgList::two(Arg::NameString, Arg::TermList)),
    /*0x0a*/ OpcodeInfo::new(Opcode::Buffer, ObjectType::Buffer, OpFlags::HAS_PKG_LENGTH, ArgList::two(Arg::TermObj, Arg::ByteList)),
    /*0x0b*/ OpcodeInfo::new(Opcode::Package, ObjectType::Package, OpFlags::HAS_PKG_LENGTH, ArgList::two(Arg::ByteData, Arg::TermList)),
    /*0x0c*/ OpcodeInfo::new(Opcode::VarPackage, ObjectType::Package, OpFlags::HAS_PKG_LENGTH, ArgList::two(Arg::TermObj, Arg::TermList)),
    /*0x0d*/ OpcodeInfo::new(Opcode::Method, ObjectType::Method, NAMED_SCOPE, ArgList::three(Arg::NameString, Arg::ByteData, Arg::TermList)),
    /*0x0e*/ OpcodeInfo::new(Opcode::External, ObjectType::Any, OpFlags::NAMED, ArgList::three(Arg::NameString, Arg::ByteData, Arg::ByteData)),
    /*0x0f*/ OpcodeInfo::new(Opcode::Local(0), ObjectType::LocalVariable, EXEC, ArgList::none()),
    /*0x10*/ OpcodeInfo::new(Opcode::Local(1), ObjectType::LocalVariable, EXEC, ArgList::none()),
    /*0x11*/ OpcodeInfo::new(Opcode::Local(2), ObjectType::LocalVariable, EXEC, ArgList::none()),
    /*0x12*/ OpcodeInfo::new(Opcode::Local(3), ObjectType::LocalVariable, EXEC, ArgList::none()),
    /*0x13*/ OpcodeInfo::new(Opcode::Local(4), ObjectType::LocalVariable, EXEC, ArgList::none()),
    /*0x14*/ OpcodeInfo::new(Opcode::Local(5), ObjectType::LocalVariable, EXEC, ArgList::none()),
    /*0x15*/ OpcodeInfo::new(Opcode::Local(6), ObjectType::LocalVariable, EXEC, ArgList::none()),
    /*0x16*/ OpcodeInfo::new(Opcode::Local(7), ObjectType::LocalVariable, EXEC, ArgList::none()),
    /*0x17*/ OpcodeInfo::new(Opcode::Arg(0), ObjectType::MethodArgument, EXEC, ArgList::none()),
    /*0x18*/ OpcodeInfo::new(Opcode::Arg(1), ObjectType::MethodArgument, EXEC, ArgList::none()),
    /*0x19*/ OpcodeInfo::new(Opcode::Arg(2), ObjectType::MethodArgument, EXEC, ArgList::none()),
    /*0x1a*/ OpcodeInfo::new(Opcode::Arg(3), ObjectType::MethodArgument, EXEC, ArgList::none()),
    /*0x1b*/ OpcodeInfo::new(Opcode::Arg(4), ObjectType::MethodArgument, EXEC, ArgList::none()),
    /*0x1c*/ OpcodeInfo::new(Opcode::Arg(5), ObjectType::MethodArgument, EXEC, ArgList::none()),
    /*0x1d*/ OpcodeInfo::new(Opcode::Arg(6), ObjectType::MethodArgument, EXEC, ArgList::none()),
    /*0x1e*/ OpcodeInfo::new(Opcode::Store, ObjectType::Any, EXEC, ArgList::two(Arg::TermObj, Arg::SuperName)),
    /*0x1f*/ OpcodeInfo::new(Opcode::RefOf, ObjectType::Any, REFERENCE, ArgList::one(Arg::SuperName)),
    /*0x20*/ OpcodeInfo::new(Opcode::Add, ObjectType::Any, ARITHMETIC, TERM_TERM_TARGET),
    /*0x21*/ OpcodeInfo::new(Opcode::Concat, ObjectType::Any, EXEC, TERM_TERM_TARGET),
    /*0x22*/ OpcodeInfo::new(Opcode::Subtract, ObjectType::Any, ARITHMETIC, TERM_TERM_TARGET),
    /*0x23*/ OpcodeInfo::new(Opcode::Increment, ObjectType::Any, ARITHMETIC, ArgList::one(Arg::SuperName)),
    /*0x24*/ OpcodeInfo::new(Opcode::Decrement, ObjectType::Any, ARITHMETIC, ArgList::one(Arg::SuperName)),
    /*0x25*/ OpcodeInfo::new(Opcode::Multiply, ObjectType::Any, ARITHMETIC, TERM_TERM_TARGET),
    // Divide stores both the remainder and the quotient
    /*0x26*/ OpcodeInfo::new(Opcode::Divide, ObjectType::Any, ARITHMETIC, ArgList::four(Arg::TermObj, Arg::TermObj, Arg::Target, Arg::Target)),
    /*0x27*/ OpcodeInfo::new(Opcode::ShiftLeft, ObjectType::Any, ARITHMETIC, TERM_TERM_TARGET),
    /*0x28*/ OpcodeInfo::new(Opcode::ShiftRight, ObjectType::Any, ARITHMETIC, TERM_TERM_TARGET),
    /*0x29*/ OpcodeInfo::new(Opcode::And, ObjectType::Any, ARITHMETIC, TERM_TERM_TARGET),
    /*0x2a*/ OpcodeInfo::new(Opcode::Nand, ObjectType::Any, ARITHMETIC, TERM_TERM_TARGET),
    /*0x2b*/ OpcodeInfo::new(Opcode::Or, ObjectType::Any, ARITHMETIC, TERM_TERM_TARGET),
    /*0x2c*/ OpcodeInfo::new(Opcode::Nor, ObjectType::Any, ARITHMETIC, TERM_TERM_TARGET),
    /*0x2d*/ OpcodeInfo::new(Opcode::Xor, ObjectType::Any, ARITHMETIC, TERM_TERM_TARGET),
    /*0x2e*/ OpcodeInfo::new(Opcode::Not, ObjectType::Any, ARITHMETIC, TERM_TARGET),
    /*0x2f*/ OpcodeInfo::new(Opcode::FindSetLeftBit, ObjectType::Any, ARITHMETIC, TERM_TARGET),
    /*0x30*/ OpcodeInfo::new(Opcode::FindSetRightBit, ObjectType::Any, ARITHMETIC, TERM_TARGET),
    /*0x31*/ OpcodeInfo::new(Opcode::DerefOf, ObjectType::Any, REFERENCE, ArgList::one(Arg::TermObj)),
    /*0x32*/ OpcodeInfo::new(Opcode::ConcatRes, ObjectType::Any, EXEC, TERM_TERM_TARGET),
    /*0x33*/ OpcodeInfo::new(Opcode::Mod, ObjectType::Any, ARITHMETIC, TERM_TERM_TARGET),
    /*0x34*/ OpcodeInfo::new(Opcode::Notify, ObjectType::Any, EXEC, ArgList::two(Arg::SuperName, Arg::TermObj)),
    /*0x35*/ OpcodeInfo::new(Opcode::SizeOf, ObjectType::Any, EXEC, ArgList::one(Arg::SuperName)),
    /*0x36*/ OpcodeInfo::new(Opcode::Index, ObjectType::Any, REFERENCE, TERM_TERM_TARGET),
    /*0x37*/ OpcodeInfo::new(Opcode::Match, ObjectType::Any, EXEC, ArgList::six(Arg::TermObj, Arg::ByteData, Arg::TermObj, Arg::ByteData, Arg::TermObj, Arg::TermObj)),
    /*0x38*/ OpcodeInfo::new(Opcode::CreateDWordField, ObjectType::BufferField, NAMED_CREATE, CREATE_FIELD_ARGS),
    /*0x39*/ OpcodeInfo::new(Opcode::CreateWordField, ObjectType::BufferField, NAMED_CREATE, CREATE_FIELD_ARGS),
    /*0x3a*/ OpcodeInfo::new(Opcode::CreateByteField, ObjectType::BufferField, NAMED_CREATE, CREATE_FIELD_ARGS),
    /*0x3b*/ OpcodeInfo::new(Opcode::CreateBitField, ObjectType::BufferField, NAMED_CREATE, CREATE_FIELD_ARGS),
    /*0x3c*/ OpcodeInfo::new(Opcode::ObjectType, ObjectType::Any, EXEC, ArgList::one(Arg::SuperName)),
    /*0x3d*/ OpcodeInfo::new(Opcode::CreateQWordField, ObjectType::BufferField, NAMED_CREATE, CREATE_FIELD_ARGS),
    /*0x3e*/ OpcodeInfo::new(Opcode::LAnd, ObjectType::Any, ARITHMETIC, ArgList::two(Arg::TermObj, Arg::TermObj)),
    /*0x3f*/ OpcodeInfo::new(Opcode::LOr, ObjectType::Any, ARITHMETIC, ArgList::two(Arg::TermObj, Arg::TermObj)),
    /*0x40*/ OpcodeInfo::new(Opcode::LNot, ObjectType::Any, ARITHMETIC, ArgList::one(Arg::TermObj)),
    /*0x41*/ OpcodeInfo::new(Opcode::LEqual, ObjectType::Any, ARITHMETIC, ArgList::two(Arg::TermObj, Arg::TermObj)),
    /*0x42*/ OpcodeInfo::new(Opcode::LGreater, ObjectType::Any, ARITHMETIC, ArgList::two(Arg::TermObj, Arg::TermObj)),
    /*0x43*/ OpcodeInfo::new(Opcode::LLess, ObjectType::Any, ARITHMETIC, ArgList::two(Arg::TermObj, Arg::TermObj)),
    /*0x44*/ OpcodeInfo::new(Opcode::ToBuffer, ObjectType::Any, EXEC, TERM_TARGET),
    /*0x45*/ OpcodeInfo::new(Opcode::ToDecimalString, ObjectType::Any, EXEC, TERM_TARGET),
    /*0x46*/ OpcodeInfo::new(Opcode::ToHexString, ObjectType::Any, EXEC, TERM_TARGET),
    /*0x47*/ OpcodeInfo::new(Opcode::ToInteger, ObjectType::Any, EXEC, TERM_TARGET),
    /*0x48*/ OpcodeInfo::new(Opcode::ToString, ObjectType::Any, EXEC, TERM_TARGET),
    /*0x49*/ OpcodeInfo::new(Opcode::CopyObject, ObjectType::Any, EXEC, ArgList::two(Arg::TermObj, Arg::SimpleName)),
    /*0x4a*/ OpcodeInfo::new(Opcode::Mid, ObjectType::Any, EXEC, ArgList::four(Arg::TermObj, Arg::TermObj, Arg::TermObj, Arg::Target)),
    /*0x4b*/ OpcodeInfo::new(Opcode::Continue, ObjectType::Any, EXEC, ArgList::none()),
    /*0x4c*/ OpcodeInfo::new(Opcode::If, ObjectType::Any, EXEC, ArgList::two(Arg::TermObj, Arg::TermList)),
    /*0x4d*/ OpcodeInfo::new(Opcode::Else, ObjectType::Any, EXEC, ArgList::one(Arg::TermList)),
    /*0x4e*/ OpcodeInfo::new(Opcode::While, ObjectType::Any, EXEC, ArgList::two(Arg::TermObj, Arg::TermList)),
    /*0x4f*/ OpcodeInfo::new(Opcode::Noop, ObjectType::Any, OpFlags::NO_OP, ArgList::none()),
    /*0x50*/ OpcodeInfo::new(Opcode::Return, ObjectType::Any, OpFlags::RETURN, ArgList::one(Arg::TermObj)),
    /*0x51*/ OpcodeInfo::new(Opcode::Break, ObjectType::Any, EXEC, ArgList::none()),
    /*0x52*/ OpcodeInfo::new(Opcode::Breakpoint, ObjectType::Any, OpFlags::NO_OP, ArgList::none()),
    /*0x53*/ OpcodeInfo::new(Opcode::Ones, ObjectType::Integer, OpFlags::CONSTANT, ArgList::none()),
    /*0x54*/ OpcodeInfo::new(Opcode::Mutex, ObjectType::Mutex, OpFlags::NAMED, ArgList::two(Arg::NameString, Arg::ByteData)),
    /*0x55*/ OpcodeInfo::new(Opcode::Event, ObjectType::Event, OpFlags::NAMED, ArgList::one(Arg::NameString)),
    /*0x56*/ OpcodeInfo::new(Opcode::CondRefOf, ObjectType::Any, REFERENCE, ArgList::two(Arg::SuperName, Arg::SuperName)),
    /*0x57*/ OpcodeInfo::new(Opcode::CreateField, ObjectType::BufferField, NAMED_CREATE, ArgList::four(Arg::TermObj, Arg::TermObj, Arg::TermObj, Arg::NameString)),
    /*0x58*/ OpcodeInfo::new(Opcode::LoadTable, ObjectType::Any, EXEC, ArgList::six(Arg::TermObj, Arg::TermObj, Arg::TermObj, Arg::TermObj, Arg::TermObj, Arg::TermObj)),
    /*0x59*/ OpcodeInfo::new(Opcode::Load, ObjectType::Any, EXEC, ArgList::two(Arg::NameString, Arg::SuperName)),
    /*0x5a*/ OpcodeInfo::new(Opcode::Stall, ObjectType::Any, EXEC, ArgList::one(Arg::TermObj)),
    /*0x5b*/ OpcodeInfo::new(Opcode::Sleep, ObjectType::Any, EXEC, ArgList::one(Arg::TermObj)),
    /*0x5c*/ OpcodeInfo::new(Opcode::Acquire, ObjectType::Any, EXEC, ArgList::two(Arg::SuperName, Arg::Word)),
    /*0x5d*/ OpcodeInfo::new(Opcode::Signal, ObjectType::Any, EXEC, ArgList::one(Arg::SuperName)),
    /*0x5e*/ OpcodeInfo::new(Opcode::Wait, ObjectType::Any, EXEC, ArgList::two(Arg::SuperName, Arg::TermObj)),
    /*0x5f*/ OpcodeInfo::new(Opcode::Reset, ObjectType::Any, EXEC, ArgList::one(Arg::SuperName)),
    /*0x60*/ OpcodeInfo::new(Opcode::Release, ObjectType::Any, EXEC, ArgList::one(Arg::SuperName)),
    /*0x61*/ OpcodeInfo::new(Opcode::FromBCD, ObjectType::Any, EXEC, TERM_TARGET),
    /*0x62*/ OpcodeInfo::new(Opcode::ToBCD, ObjectType::Any, EXEC, TERM_TARGET),
    /*0x63*/ OpcodeInfo::new(Opcode::Unload, ObjectType::Any, EXEC, ArgList::one(Arg::SuperName)),
    /*0x64*/ OpcodeInfo::new(Opcode::Revision, ObjectType::Integer, OpFlags::CONSTANT.union(EXEC), ArgList::none()),
    /*0x65*/ OpcodeInfo::new(Opcode::Debug, ObjectType::LocalReference, EXEC, ArgList::none()),
    /*0x66*/ OpcodeInfo::new(Opcode::Fatal, ObjectType::Any, EXEC, ArgList::three(Arg::ByteData, Arg::DWord, Arg::TermObj)),
    /*0x67*/ OpcodeInfo::new(Opcode::Timer, ObjectType::Any, EXEC, ArgList::none()),
    /*0x68*/ OpcodeInfo::new(Opcode::OpRegion, ObjectType::Region, OpFlags::NAMED, ArgList::four(Arg::NameString, Arg::ByteData, Arg::TermObj, Arg::TermObj)),
    /*0x69*/ OpcodeInfo::new(Opcode::Field, ObjectType::Any, OpFlags::NAMED, ArgList::three(Arg::NameString, Arg::ByteData, Arg::FieldList)),
    /*0x6a*/ OpcodeInfo::new(Opcode::Device, ObjectType::Device, NAMED_SCOPE, ArgList::two(Arg::NameString, Arg::TermList)),
    /*0x6b*/ OpcodeInfo::new(Opcode::Processor, ObjectType::Processor, NAMED_SCOPE, ArgList::five(Arg::NameString, Arg::ByteData, Arg::DWord, Arg::ByteData, Arg::TermList)),
    /*0x6c*/ OpcodeInfo::new(Opcode::PowerRes, ObjectType::Power, NAMED_SCOPE, ArgList::four(Arg::NameString, Arg::ByteData, Arg::Word, Arg::TermList)),
    /*0x6d*/ OpcodeInfo::new(Opcode::ThermalZone, ObjectType::Thermal, NAMED_SCOPE, ArgList::two(Arg::NameString, Arg::TermList)),
    /*0x6e*/ OpcodeInfo::new(Opcode::IndexField, ObjectType::Any, OpFlags::NAMED, ArgList::four(Arg::NameString, Arg::NameString, Arg::ByteData, Arg::FieldList)),
    /*0x6f*/ OpcodeInfo::new(Opcode::BankField, ObjectType::LocalBankField, OpFlags::NAMED, ArgList::five(Arg::NameString, Arg::NameString, Arg::TermObj, Arg::ByteData, Arg::FieldList)),
    /*0x70*/ OpcodeInfo::new(Opcode::DataRegion, ObjectType::LocalRegionField, OpFlags::NAMED, ArgList::four(Arg::NameString, Arg::TermObj, Arg::TermObj, Arg::TermObj)),
];

pub static OPCODE_TABLE: &[OpcodeInfo] = TABLE;

/// Maps a raw byte to a position in `OPCODE_TABLE`, or `None` if the byte isn't a supported opcode.
pub type OpcodeMap = [Option<u8>; 256];

/// Build the map for either the single-byte or the extended opcode space from the entries of `table`. This
/// refuses (at compile time, for the statics below) a table that is too long to index with a `u8`, and two
/// entries with the same encoding - which also catches an opcode appearing twice.
const fn build_map(table: &[OpcodeInfo], extended: bool) -> OpcodeMap {
    assert!(table.len() <= u8::MAX as usize + 1, "Opcode table is too long to index with a u8");

    let mut map = [None; 256];
    let mut i = 0;
    while i < table.len() {
        let (is_extended, byte) = match table[i].op.encoding() {
            OpcodeEncoding::Single(byte) => (false, byte),
            OpcodeEncoding::Extended(byte) => (true, byte),
        };

        if is_extended == extended {
            assert!(map[byte as usize].is_none(), "Two opcodes in the table have the same encoding");
            map[byte as usize] = Some(i as u8);
        }

        i += 1;
    }

    map
}

const MAP: OpcodeMap = build_map(TABLE, false);
const EXT_MAP: OpcodeMap = build_map(TABLE, true);

// The prefix byte must only ever be handled as the start of an extended opcode.
const _: () = assert!(MAP[EXT_OPCODE_PREFIX as usize].is_none());

pub static OPCODE_MAP: OpcodeMap = MAP;
pub static EXT_OPCODE_MAP: OpcodeMap = EXT_MAP;

/// Find the descriptor for the opcode starting with `byte`. `next` should be the byte after it in the stream, if
/// there is one; it is only looked at if `byte` is the extended opcode prefix.
pub fn resolve(byte: u8, next: Option<u8>) -> Result<&'static OpcodeInfo, AmlError> {
    let index = if byte == EXT_OPCODE_PREFIX {
        let Some(ext) = next else {
            trace!("Stream ends after extended opcode prefix");
            return Err(AmlError::TruncatedExtOpcode);
        };

        match EXT_OPCODE_MAP[ext as usize] {
            Some(index) => index,
            None => {
                trace!("Illegal extended opcode: {:#x} {:#x}", byte, ext);
                return Err(AmlError::IllegalExtOpcode(ext));
            }
        }
    } else {
        match OPCODE_MAP[byte as usize] {
            Some(index) => index,
            None => {
                trace!("Illegal opcode: {:#x}", byte);
                return Err(AmlError::IllegalOpcode(byte));
            }
        }
    };

    Ok(&OPCODE_TABLE[index as usize])
}

/// Get the descriptor of an opcode. Returns `None` for identifiers that don't name a real opcode, such as
/// `Opcode::Local(8)`.
pub fn info_for(op: Opcode) -> Option<&'static OpcodeInfo> {
    let index = match op.encoding() {
        OpcodeEncoding::Single(byte) => OPCODE_MAP[byte as usize],
        OpcodeEncoding::Extended(byte) => EXT_OPCODE_MAP[byte as usize],
    }?;

    let info = &OPCODE_TABLE[index as usize];
    if info.op == op {
        Some(info)
    } else {
        None
    }
}

/// Get the descriptor at a position in `OPCODE_TABLE`.
pub fn opcode_info_at(position: usize) -> Option<&'static OpcodeInfo> {
    OPCODE_TABLE.get(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{opcode::*, test_utils::*};
    use std::vec::Vec;

    fn args_of(info: &OpcodeInfo) -> Vec<Arg> {
        info.args.iter().collect()
    }

    #[test]
    fn zero_constant() {
        let info = check_ok!(resolve(0x00, None), Opcode::Zero);
        assert_eq!(info.object_type, ObjectType::Integer);
        assert!(info.is(OpFlags::CONSTANT));
        assert_eq!(info.arg_count(), 0);
    }

    #[test]
    fn ones_constant() {
        let info = check_ok!(resolve(0xff, None), Opcode::Ones);
        assert_eq!(info.object_type, ObjectType::Integer);
        assert!(info.is(OpFlags::CONSTANT));
        assert_eq!(info.arg_count(), 0);
    }

    #[test]
    fn cond_ref_of() {
        let info = check_ok!(resolve(0x5b, Some(0x12)), Opcode::CondRefOf);
        assert_eq!(info.object_type, ObjectType::Any);
        assert_eq!(args_of(info), [Arg::SuperName, Arg::SuperName]);
        assert_eq!(info.encoded_len(), 2);
    }

    #[test]
    fn method() {
        let info = check_ok!(resolve(DEF_METHOD_OP, None), Opcode::Method);
        assert!(info.is(OpFlags::NAMED));
        assert!(info.is(OpFlags::SCOPED));
        assert_eq!(args_of(info), [Arg::NameString, Arg::ByteData, Arg::TermList]);
        assert_eq!(opcode_info_at(0x0d), Some(info));
    }

    #[test]
    fn divide_has_two_targets() {
        let info = check_ok!(resolve(DEF_DIVIDE_OP, None), Opcode::Divide);
        assert_eq!(args_of(info), [Arg::TermObj, Arg::TermObj, Arg::Target, Arg::Target]);
        assert!(info.is(OpFlags::ARITHMETIC | OpFlags::EXECUTABLE));
        assert_eq!(opcode_info_at(0x26), Some(info));
    }

    #[test]
    fn illegal_opcodes() {
        check_err!(resolve(0x5b, Some(0xff)), AmlError::IllegalExtOpcode(0xff));
        check_err!(resolve(0x5b, Some(0x00)), AmlError::IllegalExtOpcode(0x00));
        check_err!(resolve(0x5b, None), AmlError::TruncatedExtOpcode);
        check_err!(resolve(0x02, None), AmlError::IllegalOpcode(0x02));
        check_err!(resolve(0x9a, None), AmlError::IllegalOpcode(0x9a));
        check_err!(resolve(0x9b, Some(0x00)), AmlError::IllegalOpcode(0x9b));
        // Name characters and prefixes are handled by the name parser, not the opcode table
        check_err!(resolve(b'A', None), AmlError::IllegalOpcode(b'A'));
        check_err!(resolve(b'\\', None), AmlError::IllegalOpcode(b'\\'));
    }

    #[test]
    fn next_byte_ignored_for_simple_opcodes() {
        check_ok!(resolve(DEF_L_NOT_OP, Some(DEF_L_EQUAL_OP)), Opcode::LNot);
        check_ok!(resolve(DEF_STORE_OP, Some(0x5b)), Opcode::Store);
    }

    #[test]
    fn prefix_is_not_an_opcode() {
        assert_eq!(OPCODE_MAP[EXT_OPCODE_PREFIX as usize], None);
        for second in 0..=255u8 {
            match resolve(EXT_OPCODE_PREFIX, Some(second)) {
                Ok(info) => assert_eq!(info.op.encoding(), OpcodeEncoding::Extended(second)),
                Err(err) => assert_eq!(err, AmlError::IllegalExtOpcode(second)),
            }
        }
    }

    #[test]
    fn maps_point_into_table() {
        for (map, extended) in [(&OPCODE_MAP, false), (&EXT_OPCODE_MAP, true)] {
            for (byte, entry) in map.iter().enumerate() {
                let Some(index) = *entry else { continue };
                let info = opcode_info_at(index as usize).unwrap();
                let expected = if extended {
                    OpcodeEncoding::Extended(byte as u8)
                } else {
                    OpcodeEncoding::Single(byte as u8)
                };
                assert_eq!(info.op.encoding(), expected);
            }
        }
    }

    #[test]
    fn every_opcode_is_reachable() {
        for (position, info) in OPCODE_TABLE.iter().enumerate() {
            let index = match info.op.encoding() {
                OpcodeEncoding::Single(byte) => OPCODE_MAP[byte as usize],
                OpcodeEncoding::Extended(byte) => EXT_OPCODE_MAP[byte as usize],
            };
            assert_eq!(index, Some(position as u8), "{:?} can't be resolved", info.op);
            assert_eq!(info_for(info.op), Some(info));
        }

        let mapped = OPCODE_MAP.iter().chain(EXT_OPCODE_MAP.iter()).filter(|entry| entry.is_some()).count();
        assert_eq!(mapped, OPCODE_TABLE.len());
    }

    #[test]
    fn positions_fit_in_map_entries() {
        assert!(OPCODE_TABLE.len() <= u8::MAX as usize + 1);
        let last = OPCODE_TABLE.len() - 1;
        assert_eq!(opcode_info_at(last).map(|info| info.op), Some(Opcode::DataRegion));
        check_ok!(resolve(EXT_OPCODE_PREFIX, Some(EXT_DEF_DATA_REGION_OP)), Opcode::DataRegion);
    }

    #[test]
    fn opcodes_are_unique() {
        for (i, a) in OPCODE_TABLE.iter().enumerate() {
            for b in &OPCODE_TABLE[(i + 1)..] {
                assert_ne!(a.op, b.op);
            }
        }
    }

    #[test]
    fn extended_opcode_space() {
        let expected: &[(u8, Opcode)] = &[
            (0x01, Opcode::Mutex),
            (0x02, Opcode::Event),
            (0x12, Opcode::CondRefOf),
            (0x13, Opcode::CreateField),
            (0x1f, Opcode::LoadTable),
            (0x20, Opcode::Load),
            (0x21, Opcode::Stall),
            (0x22, Opcode::Sleep),
            (0x23, Opcode::Acquire),
            (0x24, Opcode::Signal),
            (0x25, Opcode::Wait),
            (0x26, Opcode::Reset),
            (0x27, Opcode::Release),
            (0x28, Opcode::FromBCD),
            (0x29, Opcode::ToBCD),
            (0x2a, Opcode::Unload),
            (0x30, Opcode::Revision),
            (0x31, Opcode::Debug),
            (0x32, Opcode::Fatal),
            (0x33, Opcode::Timer),
            (0x80, Opcode::OpRegion),
            (0x81, Opcode::Field),
            (0x82, Opcode::Device),
            (0x83, Opcode::Processor),
            (0x84, Opcode::PowerRes),
            (0x85, Opcode::ThermalZone),
            (0x86, Opcode::IndexField),
            (0x87, Opcode::BankField),
            (0x88, Opcode::DataRegion),
        ];

        for second in 0..=255u8 {
            match expected.iter().find(|(byte, _)| *byte == second) {
                Some(&(_, op)) => {
                    check_ok!(resolve(EXT_OPCODE_PREFIX, Some(second)), op);
                }
                None => check_err!(resolve(EXT_OPCODE_PREFIX, Some(second)), AmlError::IllegalExtOpcode(_)),
            }
        }
    }

    #[test]
    fn single_byte_encodings() {
        check_ok!(resolve(DEF_ALIAS_OP, None), Opcode::Alias);
        check_ok!(resolve(DEF_NAME_OP, None), Opcode::Name);
        check_ok!(resolve(BYTE_CONST, None), Opcode::BytePrefix);
        check_ok!(resolve(STRING_PREFIX, None), Opcode::StringPrefix);
        check_ok!(resolve(0x60, None), Opcode::Local(0));
        check_ok!(resolve(0x67, None), Opcode::Local(7));
        check_ok!(resolve(0x68, None), Opcode::Arg(0));
        check_ok!(resolve(0x6e, None), Opcode::Arg(6));
        check_err!(resolve(0x6f, None), AmlError::IllegalOpcode(0x6f));
        check_ok!(resolve(0x96, None), Opcode::ToBuffer);
        check_ok!(resolve(0x99, None), Opcode::ToInteger);
        check_ok!(resolve(0x9c, None), Opcode::ToString);
        check_ok!(resolve(0x9d, None), Opcode::CopyObject);
        check_ok!(resolve(0x9e, None), Opcode::Mid);
        check_ok!(resolve(0x9f, None), Opcode::Continue);
        check_ok!(resolve(0xa5, None), Opcode::Break);
        check_ok!(resolve(0xcc, None), Opcode::Breakpoint);
    }

    #[test]
    fn info_for_identifiers() {
        assert_eq!(info_for(Opcode::Local(8)), None);
        assert_eq!(info_for(Opcode::Arg(7)), None);
        assert_eq!(info_for(Opcode::Arg(200)), None);
        assert_eq!(info_for(Opcode::Device).map(|info| info.object_type), Some(ObjectType::Device));
        assert_eq!(opcode_info_at(OPCODE_TABLE.len()), None);
    }

    #[test]
    fn opcode_categories() {
        for info in OPCODE_TABLE.iter() {
            let op = info.op;

            if info.is(OpFlags::SCOPED) {
                assert!(info.is(OpFlags::NAMED), "{:?}", op);
                assert_eq!(info.args.get(info.arg_count() - 1), Some(Arg::TermList), "{:?}", op);
            }
            if info.is(OpFlags::CREATE) {
                assert_eq!(info.object_type, ObjectType::BufferField);
                assert_eq!(info.args.get(info.arg_count() - 1), Some(Arg::NameString), "{:?}", op);
            }
            if info.is(OpFlags::ARITHMETIC) {
                assert!(info.is(OpFlags::EXECUTABLE), "{:?}", op);
            }
            if info.is(OpFlags::CONSTANT) {
                assert!(info.arg_count() <= 1, "{:?}", op);
                assert!(matches!(info.object_type, ObjectType::Integer | ObjectType::String), "{:?}", op);
            }
        }

        let scoped =
            [Opcode::Scope, Opcode::Method, Opcode::Device, Opcode::Processor, Opcode::PowerRes, Opcode::ThermalZone];
        for op in scoped {
            assert!(info_for(op).unwrap().is(OpFlags::NAMED | OpFlags::SCOPED));
        }
        for op in [Opcode::Buffer, Opcode::Package, Opcode::VarPackage] {
            assert!(info_for(op).unwrap().is(OpFlags::HAS_PKG_LENGTH));
        }
        for op in [Opcode::Noop, Opcode::Breakpoint] {
            let info = info_for(op).unwrap();
            assert!(info.is(OpFlags::NO_OP));
            assert!(!info.is(OpFlags::EXECUTABLE));
        }

        let ret = info_for(Opcode::Return).unwrap();
        assert!(ret.is(OpFlags::RETURN));
        assert!(!ret.is(OpFlags::EXECUTABLE));
    }
}
