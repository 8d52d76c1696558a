use bit_field::BitField;
use core::fmt;

/// The kind of an argument expected by an opcode. The term parser uses this to work out how to consume each
/// argument that follows the opcode in the stream.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArgKind {
    /// A list of terms, bounded by the package length of the enclosing construct.
    TermList = 1,
    TermObj = 2,
    /// Raw bytes, bounded by the package length of the enclosing construct.
    ByteList = 3,
    Package = 4,
    /// A NUL-terminated ASCII string.
    String = 5,
    ByteData = 6,
    Word = 7,
    DWord = 8,
    QWord = 9,
    NameString = 10,
    SuperName = 11,
    SimpleName = 12,
    DataRefObj = 13,
    /// Where to store the result of an operation. This can be a `NullName`, in which case the result is
    /// discarded.
    Target = 14,
    FieldList = 15,
}

impl ArgKind {
    pub const fn from_raw(raw: u8) -> Option<ArgKind> {
        Some(match raw {
            1 => ArgKind::TermList,
            2 => ArgKind::TermObj,
            3 => ArgKind::ByteList,
            4 => ArgKind::Package,
            5 => ArgKind::String,
            6 => ArgKind::ByteData,
            7 => ArgKind::Word,
            8 => ArgKind::DWord,
            9 => ArgKind::QWord,
            10 => ArgKind::NameString,
            11 => ArgKind::SuperName,
            12 => ArgKind::SimpleName,
            13 => ArgKind::DataRefObj,
            14 => ArgKind::Target,
            15 => ArgKind::FieldList,
            _ => return None,
        })
    }

    /// The width in bytes of a fixed-width immediate argument, or `None` if this kind isn't one.
    pub const fn immediate_width(self) -> Option<usize> {
        match self {
            ArgKind::ByteData => Some(1),
            ArgKind::Word => Some(2),
            ArgKind::DWord => Some(4),
            ArgKind::QWord => Some(8),
            _ => None,
        }
    }

    /// Returns `true` if a missing argument of this kind is not a parse error.
    pub const fn is_optional(self) -> bool {
        matches!(self, ArgKind::Target)
    }
}

/// The kinds of the arguments an opcode takes, in order.
///
/// Up to `ArgList::MAX_ARGS` kinds are packed into a `u64`, with the kind of argument `n` in byte `n`. The first
/// zero byte terminates the list. Only the low four bits of each byte are read back, and so every `ArgKind` must
/// fit in four bits. Lists can only be built with the fixed-arity constructors, so a list can never hold more
/// than seven kinds or have a gap in the middle.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ArgList(u64);

const SLOT_BITS: usize = 8;
const KIND_BITS: usize = 4;

impl ArgList {
    pub const MAX_ARGS: usize = 7;

    const fn slot(kind: ArgKind, n: usize) -> u64 {
        (kind as u64) << (n * SLOT_BITS)
    }

    pub const fn none() -> ArgList {
        ArgList(0)
    }

    pub const fn one(a: ArgKind) -> ArgList {
        ArgList(Self::slot(a, 0))
    }

    pub const fn two(a: ArgKind, b: ArgKind) -> ArgList {
        ArgList(Self::slot(a, 0) | Self::slot(b, 1))
    }

    pub const fn three(a: ArgKind, b: ArgKind, c: ArgKind) -> ArgList {
        ArgList(Self::two(a, b).0 | Self::slot(c, 2))
    }

    pub const fn four(a: ArgKind, b: ArgKind, c: ArgKind, d: ArgKind) -> ArgList {
        ArgList(Self::three(a, b, c).0 | Self::slot(d, 3))
    }

    pub const fn five(a: ArgKind, b: ArgKind, c: ArgKind, d: ArgKind, e: ArgKind) -> ArgList {
        ArgList(Self::four(a, b, c, d).0 | Self::slot(e, 4))
    }

    pub const fn six(a: ArgKind, b: ArgKind, c: ArgKind, d: ArgKind, e: ArgKind, f: ArgKind) -> ArgList {
        ArgList(Self::five(a, b, c, d, e).0 | Self::slot(f, 5))
    }

    pub const fn seven(
        a: ArgKind,
        b: ArgKind,
        c: ArgKind,
        d: ArgKind,
        e: ArgKind,
        f: ArgKind,
        g: ArgKind,
    ) -> ArgList {
        ArgList(Self::six(a, b, c, d, e, f).0 | Self::slot(g, 6))
    }

    fn raw_kind(&self, n: usize) -> u8 {
        let start = n * SLOT_BITS;
        self.0.get_bits(start..(start + KIND_BITS)) as u8
    }

    /// The number of arguments in the list.
    pub fn count(&self) -> usize {
        let mut count = 0;
        while count < Self::MAX_ARGS && self.raw_kind(count) != 0 {
            count += 1;
        }
        count
    }

    /// Get the kind of argument `n`, or `None` if the list has `n` or fewer arguments.
    pub fn get(&self, n: usize) -> Option<ArgKind> {
        if n >= Self::MAX_ARGS {
            return None;
        }
        /*
         * A kind past the terminator would be a bug in a constructor, but check anyway so a zero byte is always
         * the end of the list.
         */
        if (0..n).any(|i| self.raw_kind(i) == 0) {
            return None;
        }
        ArgKind::from_raw(self.raw_kind(n))
    }

    /// Returns `true` if any argument in the list is of the given kind.
    pub fn contains(&self, kind: ArgKind) -> bool {
        for n in 0..Self::MAX_ARGS {
            match self.raw_kind(n) {
                0 => return false,
                raw if raw == kind as u8 => return true,
                _ => (),
            }
        }
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = ArgKind> + '_ {
        (0..self.count()).filter_map(move |n| self.get(n))
    }
}

impl fmt::Debug for ArgList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
