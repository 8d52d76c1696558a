/*
 * Raw opcode bytes, as defined by section 20.2 of the ACPI specification. Opcodes in the extended space are
 * encoded as `EXT_OPCODE_PREFIX` followed by the `EXT_*` byte.
 */
pub const EXT_OPCODE_PREFIX: u8 = 0x5b;

pub const ZERO_OP: u8 = 0x00;
pub const ONE_OP: u8 = 0x01;
pub const ONES_OP: u8 = 0xff;
pub const BYTE_CONST: u8 = 0x0a;
pub const WORD_CONST: u8 = 0x0b;
pub const DWORD_CONST: u8 = 0x0c;
pub const STRING_PREFIX: u8 = 0x0d;
pub const QWORD_CONST: u8 = 0x0e;

pub const DEF_ALIAS_OP: u8 = 0x06;
pub const DEF_NAME_OP: u8 = 0x08;
pub const DEF_SCOPE_OP: u8 = 0x10;
pub const DEF_BUFFER_OP: u8 = 0x11;
pub const DEF_PACKAGE_OP: u8 = 0x12;
pub const DEF_VAR_PACKAGE_OP: u8 = 0x13;
pub const DEF_METHOD_OP: u8 = 0x14;
pub const DEF_EXTERNAL_OP: u8 = 0x15;
pub const DEF_CREATE_DWORD_FIELD_OP: u8 = 0x8a;
pub const DEF_CREATE_WORD_FIELD_OP: u8 = 0x8b;
pub const DEF_CREATE_BYTE_FIELD_OP: u8 = 0x8c;
pub const DEF_CREATE_BIT_FIELD_OP: u8 = 0x8d;
pub const DEF_CREATE_QWORD_FIELD_OP: u8 = 0x8f;

pub const EXT_DEF_MUTEX_OP: u8 = 0x01;
pub const EXT_DEF_EVENT_OP: u8 = 0x02;
pub const EXT_DEF_COND_REF_OF_OP: u8 = 0x12;
pub const EXT_DEF_CREATE_FIELD_OP: u8 = 0x13;
pub const EXT_DEF_LOAD_TABLE_OP: u8 = 0x1f;
pub const EXT_DEF_LOAD_OP: u8 = 0x20;
pub const EXT_DEF_STALL_OP: u8 = 0x21;
pub const EXT_DEF_SLEEP_OP: u8 = 0x22;
pub const EXT_DEF_ACQUIRE_OP: u8 = 0x23;
pub const EXT_DEF_SIGNAL_OP: u8 = 0x24;
pub const EXT_DEF_WAIT_OP: u8 = 0x25;
pub const EXT_DEF_RESET_OP: u8 = 0x26;
pub const EXT_DEF_RELEASE_OP: u8 = 0x27;
pub const EXT_DEF_FROM_BCD_OP: u8 = 0x28;
pub const EXT_DEF_TO_BCD_OP: u8 = 0x29;
pub const EXT_DEF_UNLOAD_OP: u8 = 0x2a;
pub const EXT_REVISION_OP: u8 = 0x30;
pub const EXT_DEBUG_OP: u8 = 0x31;
pub const EXT_DEF_FATAL_OP: u8 = 0x32;
pub const EXT_DEF_TIMER_OP: u8 = 0x33;
pub const EXT_DEF_OP_REGION_OP: u8 = 0x80;
pub const EXT_DEF_FIELD_OP: u8 = 0x81;
pub const EXT_DEF_DEVICE_OP: u8 = 0x82;
pub const EXT_DEF_PROCESSOR_OP: u8 = 0x83;
pub const EXT_DEF_POWER_RES_OP: u8 = 0x84;
pub const EXT_DEF_THERMAL_ZONE_OP: u8 = 0x85;
pub const EXT_DEF_INDEX_FIELD_OP: u8 = 0x86;
pub const EXT_DEF_BANK_FIELD_OP: u8 = 0x87;
pub const EXT_DEF_DATA_REGION_OP: u8 = 0x88;

/*
 * Type 1 opcodes
 */
pub const DEF_CONTINUE_OP: u8 = 0x9f;
pub const DEF_IF_ELSE_OP: u8 = 0xa0;
pub const DEF_ELSE_OP: u8 = 0xa1;
pub const DEF_WHILE_OP: u8 = 0xa2;
pub const DEF_NOOP_OP: u8 = 0xa3;
pub const DEF_RETURN_OP: u8 = 0xa4;
pub const DEF_BREAK_OP: u8 = 0xa5;
pub const DEF_BREAKPOINT_OP: u8 = 0xcc;

/*
 * Type 2 opcodes
 */
pub const DEF_STORE_OP: u8 = 0x70;
pub const DEF_REF_OF_OP: u8 = 0x71;
pub const DEF_ADD_OP: u8 = 0x72;
pub const DEF_CONCAT_OP: u8 = 0x73;
pub const DEF_SUBTRACT_OP: u8 = 0x74;
pub const DEF_INCREMENT_OP: u8 = 0x75;
pub const DEF_DECREMENT_OP: u8 = 0x76;
pub const DEF_MULTIPLY_OP: u8 = 0x77;
pub const DEF_DIVIDE_OP: u8 = 0x78;
pub const DEF_SHIFT_LEFT: u8 = 0x79;
pub const DEF_SHIFT_RIGHT: u8 = 0x7a;
pub const DEF_AND_OP: u8 = 0x7b;
pub const DEF_NAND_OP: u8 = 0x7c;
pub const DEF_OR_OP: u8 = 0x7d;
pub const DEF_NOR_OP: u8 = 0x7e;
pub const DEF_XOR_OP: u8 = 0x7f;
pub const DEF_NOT_OP: u8 = 0x80;
pub const DEF_FIND_SET_LEFT_BIT_OP: u8 = 0x81;
pub const DEF_FIND_SET_RIGHT_BIT_OP: u8 = 0x82;
pub const DEF_DEREF_OF_OP: u8 = 0x83;
pub const DEF_CONCAT_RES_OP: u8 = 0x84;
pub const DEF_MOD_OP: u8 = 0x85;
pub const DEF_NOTIFY_OP: u8 = 0x86;
pub const DEF_SIZE_OF_OP: u8 = 0x87;
pub const DEF_INDEX_OP: u8 = 0x88;
pub const DEF_MATCH_OP: u8 = 0x89;
pub const DEF_OBJECT_TYPE_OP: u8 = 0x8e;
pub const DEF_L_AND_OP: u8 = 0x90;
pub const DEF_L_OR_OP: u8 = 0x91;
pub const DEF_L_NOT_OP: u8 = 0x92;
pub const DEF_L_EQUAL_OP: u8 = 0x93;
pub const DEF_L_GREATER_OP: u8 = 0x94;
pub const DEF_L_LESS_OP: u8 = 0x95;
pub const DEF_TO_BUFFER_OP: u8 = 0x96;
pub const DEF_TO_DECIMAL_STRING_OP: u8 = 0x97;
pub const DEF_TO_HEX_STRING_OP: u8 = 0x98;
pub const DEF_TO_INTEGER_OP: u8 = 0x99;
pub const DEF_TO_STRING_OP: u8 = 0x9c;
pub const DEF_COPY_OBJECT_OP: u8 = 0x9d;
pub const DEF_MID_OP: u8 = 0x9e;

/*
 * Miscellaneous objects
 */
pub const LOCAL0_OP: u8 = 0x60;
pub const LOCAL7_OP: u8 = 0x67;
pub const ARG0_OP: u8 = 0x68;
pub const ARG6_OP: u8 = 0x6e;

/// Identifies an AML opcode, independently of how it is encoded in the byte stream.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Opcode {
    Zero,
    One,
    Alias,
    Name,
    BytePrefix,
    WordPrefix,
    DWordPrefix,
    StringPrefix,
    QWordPrefix,
    Scope,
    Buffer,
    Package,
    VarPackage,
    Method,
    External,
    /// `Local0` through `Local7`
    Local(u8),
    /// `Arg0` through `Arg6`
    Arg(u8),
    Store,
    RefOf,
    Add,
    Concat,
    Subtract,
    Increment,
    Decrement,
    Multiply,
    Divide,
    ShiftLeft,
    ShiftRight,
    And,
    Nand,
    Or,
    Nor,
    Xor,
    Not,
    FindSetLeftBit,
    FindSetRightBit,
    DerefOf,
    ConcatRes,
    Mod,
    Notify,
    SizeOf,
    Index,
    Match,
    CreateDWordField,
    CreateWordField,
    CreateByteField,
    CreateBitField,
    ObjectType,
    CreateQWordField,
    LAnd,
    LOr,
    LNot,
    LEqual,
    LGreater,
    LLess,
    ToBuffer,
    ToDecimalString,
    ToHexString,
    ToInteger,
    ToString,
    CopyObject,
    Mid,
    Continue,
    If,
    Else,
    While,
    Noop,
    Return,
    Break,
    Breakpoint,
    Ones,
    Mutex,
    Event,
    CondRefOf,
    CreateField,
    LoadTable,
    Load,
    Stall,
    Sleep,
    Acquire,
    Signal,
    Wait,
    Reset,
    Release,
    FromBCD,
    ToBCD,
    Unload,
    Revision,
    Debug,
    Fatal,
    Timer,
    OpRegion,
    Field,
    Device,
    Processor,
    PowerRes,
    ThermalZone,
    IndexField,
    BankField,
    DataRegion,
}

/// How an opcode appears in the AML byte stream.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OpcodeEncoding {
    /// A single byte.
    Single(u8),
    /// `EXT_OPCODE_PREFIX` followed by the contained byte.
    Extended(u8),
}

impl OpcodeEncoding {
    /// The number of bytes the opcode takes up in the stream.
    pub const fn len(self) -> usize {
        match self {
            OpcodeEncoding::Single(_) => 1,
            OpcodeEncoding::Extended(_) => 2,
        }
    }
}

impl Opcode {
    /// Get the encoding of this opcode. `Local(n)` and `Arg(n)` are only meaningful for `n` in `0..=7` and
    /// `0..=6` respectively - out-of-range numbers produce an encoding that doesn't belong to them, and are never
    /// found in the opcode table.
    pub const fn encoding(self) -> OpcodeEncoding {
        use OpcodeEncoding::{Extended, Single};

        match self {
            Opcode::Zero => Single(ZERO_OP),
            Opcode::One => Single(ONE_OP),
            Opcode::Alias => Single(DEF_ALIAS_OP),
            Opcode::Name => Single(DEF_NAME_OP),
            Opcode::BytePrefix => Single(BYTE_CONST),
            Opcode::WordPrefix => Single(WORD_CONST),
            Opcode::DWordPrefix => Single(DWORD_CONST),
            Opcode::StringPrefix => Single(STRING_PREFIX),
            Opcode::QWordPrefix => Single(QWORD_CONST),
            Opcode::Scope => Single(DEF_SCOPE_OP),
            Opcode::Buffer => Single(DEF_BUFFER_OP),
            Opcode::Package => Single(DEF_PACKAGE_OP),
            Opcode::VarPackage => Single(DEF_VAR_PACKAGE_OP),
            Opcode::Method => Single(DEF_METHOD_OP),
            Opcode::External => Single(DEF_EXTERNAL_OP),
            Opcode::Local(n) => Single(LOCAL0_OP.wrapping_add(n)),
            Opcode::Arg(n) => Single(ARG0_OP.wrapping_add(n)),
            Opcode::Store => Single(DEF_STORE_OP),
            Opcode::RefOf => Single(DEF_REF_OF_OP),
            Opcode::Add => Single(DEF_ADD_OP),
            Opcode::Concat => Single(DEF_CONCAT_OP),
            Opcode::Subtract => Single(DEF_SUBTRACT_OP),
            Opcode::Increment => Single(DEF_INCREMENT_OP),
            Opcode::Decrement => Single(DEF_DECREMENT_OP),
            Opcode::Multiply => Single(DEF_MULTIPLY_OP),
            Opcode::Divide => Single(DEF_DIVIDE_OP),
            Opcode::ShiftLeft => Single(DEF_SHIFT_LEFT),
            Opcode::ShiftRight => Single(DEF_SHIFT_RIGHT),
            Opcode::And => Single(DEF_AND_OP),
            Opcode::Nand => Single(DEF_NAND_OP),
            Opcode::Or => Single(DEF_OR_OP),
            Opcode::Nor => Single(DEF_NOR_OP),
            Opcode::Xor => Single(DEF_XOR_OP),
            Opcode::Not => Single(DEF_NOT_OP),
            Opcode::FindSetLeftBit => Single(DEF_FIND_SET_LEFT_BIT_OP),
            Opcode::FindSetRightBit => Single(DEF_FIND_SET_RIGHT_BIT_OP),
            Opcode::DerefOf => Single(DEF_DEREF_OF_OP),
            Opcode::ConcatRes => Single(DEF_CONCAT_RES_OP),
            Opcode::Mod => Single(DEF_MOD_OP),
            Opcode::Notify => Single(DEF_NOTIFY_OP),
            Opcode::SizeOf => Single(DEF_SIZE_OF_OP),
            Opcode::Index => Single(DEF_INDEX_OP),
            Opcode::Match => Single(DEF_MATCH_OP),
            Opcode::CreateDWordField => Single(DEF_CREATE_DWORD_FIELD_OP),
            Opcode::CreateWordField => Single(DEF_CREATE_WORD_FIELD_OP),
            Opcode::CreateByteField => Single(DEF_CREATE_BYTE_FIELD_OP),
            Opcode::CreateBitField => Single(DEF_CREATE_BIT_FIELD_OP),
            Opcode::ObjectType => Single(DEF_OBJECT_TYPE_OP),
            Opcode::CreateQWordField => Single(DEF_CREATE_QWORD_FIELD_OP),
            Opcode::LAnd => Single(DEF_L_AND_OP),
            Opcode::LOr => Single(DEF_L_OR_OP),
            Opcode::LNot => Single(DEF_L_NOT_OP),
            Opcode::LEqual => Single(DEF_L_EQUAL_OP),
            Opcode::LGreater => Single(DEF_L_GREATER_OP),
            Opcode::LLess => Single(DEF_L_LESS_OP),
            Opcode::ToBuffer => Single(DEF_TO_BUFFER_OP),
            Opcode::ToDecimalString => Single(DEF_TO_DECIMAL_STRING_OP),
            Opcode::ToHexString => Single(DEF_TO_HEX_STRING_OP),
            Opcode::ToInteger => Single(DEF_TO_INTEGER_OP),
            Opcode::ToString => Single(DEF_TO_STRING_OP),
            Opcode::CopyObject => Single(DEF_COPY_OBJECT_OP),
            Opcode::Mid => Single(DEF_MID_OP),
            Opcode::Continue => Single(DEF_CONTINUE_OP),
            Opcode::If => Single(DEF_IF_ELSE_OP),
            Opcode::Else => Single(DEF_ELSE_OP),
            Opcode::While => Single(DEF_WHILE_OP),
            Opcode::Noop => Single(DEF_NOOP_OP),
            Opcode::Return => Single(DEF_RETURN_OP),
            Opcode::Break => Single(DEF_BREAK_OP),
            Opcode::Breakpoint => Single(DEF_BREAKPOINT_OP),
            Opcode::Ones => Single(ONES_OP),
            Opcode::Mutex => Extended(EXT_DEF_MUTEX_OP),
            Opcode::Event => Extended(EXT_DEF_EVENT_OP),
            Opcode::CondRefOf => Extended(EXT_DEF_COND_REF_OF_OP),
            Opcode::CreateField => Extended(EXT_DEF_CREATE_FIELD_OP),
            Opcode::LoadTable => Extended(EXT_DEF_LOAD_TABLE_OP),
            Opcode::Load => Extended(EXT_DEF_LOAD_OP),
            Opcode::Stall => Extended(EXT_DEF_STALL_OP),
            Opcode::Sleep => Extended(EXT_DEF_SLEEP_OP),
            Opcode::Acquire => Extended(EXT_DEF_ACQUIRE_OP),
            Opcode::Signal => Extended(EXT_DEF_SIGNAL_OP),
            Opcode::Wait => Extended(EXT_DEF_WAIT_OP),
            Opcode::Reset => Extended(EXT_DEF_RESET_OP),
            Opcode::Release => Extended(EXT_DEF_RELEASE_OP),
            Opcode::FromBCD => Extended(EXT_DEF_FROM_BCD_OP),
            Opcode::ToBCD => Extended(EXT_DEF_TO_BCD_OP),
            Opcode::Unload => Extended(EXT_DEF_UNLOAD_OP),
            Opcode::Revision => Extended(EXT_REVISION_OP),
            Opcode::Debug => Extended(EXT_DEBUG_OP),
            Opcode::Fatal => Extended(EXT_DEF_FATAL_OP),
            Opcode::Timer => Extended(EXT_DEF_TIMER_OP),
            Opcode::OpRegion => Extended(EXT_DEF_OP_REGION_OP),
            Opcode::Field => Extended(EXT_DEF_FIELD_OP),
            Opcode::Device => Extended(EXT_DEF_DEVICE_OP),
            Opcode::Processor => Extended(EXT_DEF_PROCESSOR_OP),
            Opcode::PowerRes => Extended(EXT_DEF_POWER_RES_OP),
            Opcode::ThermalZone => Extended(EXT_DEF_THERMAL_ZONE_OP),
            Opcode::IndexField => Extended(EXT_DEF_INDEX_FIELD_OP),
            Opcode::BankField => Extended(EXT_DEF_BANK_FIELD_OP),
            Opcode::DataRegion => Extended(EXT_DEF_DATA_REGION_OP),
        }
    }
}
