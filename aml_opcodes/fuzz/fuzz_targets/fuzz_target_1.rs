#![no_main]
use libfuzzer_sys::fuzz_target;
extern crate aml_opcodes;

use aml_opcodes::{ArgKind, OpcodeStream};
use std::sync::atomic::{AtomicBool, Ordering};

static INITIALIZED: AtomicBool = AtomicBool::new(false);

fuzz_target!(|data: &[u8]| {
    if let Ok(false) = INITIALIZED.compare_exchange(false, true, Ordering::Relaxed, Ordering::Relaxed) {
        simplelog::SimpleLogger::init(simplelog::LevelFilter::Trace, simplelog::Config::default()).unwrap();
    }

    /*
     * Decode opcodes and whatever operands can be decoded without a term parser. When we hit an illegal opcode,
     * or an operand we can't handle, skip a byte and carry on.
     */
    let mut stream = OpcodeStream::new(data);
    while !stream.is_empty() {
        let info = match stream.next_opcode() {
            Ok(info) => info,
            Err(_) => {
                let _ = stream.next();
                continue;
            }
        };

        for kind in info.args.iter() {
            let decoded = match kind {
                ArgKind::String => stream.string().map(|_| ()),
                kind if kind.immediate_width().is_some() => stream.immediate(kind).map(|_| ()),
                _ => break,
            };
            if decoded.is_err() {
                break;
            }
        }
    }
});
