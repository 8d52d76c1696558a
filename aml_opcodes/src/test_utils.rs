/// Check that an opcode resolves successfully to the given `Opcode`, and evaluate to its descriptor.
macro_rules! check_ok {
    ($resolved: expr, $op: expr) => {
        match $resolved {
            Ok(info) => {
                assert_eq!(info.op, $op);
                info
            }
            Err(err) => panic!("Expected Ok({:?}), got Err({:?})", $op, err),
        }
    };
}

macro_rules! check_err {
    ($result: expr, $error: pat) => {
        match $result {
            Ok(result) => panic!("Expected Err, got {:#?}", result),
            Err($error) => (),
            Err(other) => panic!("Got wrong error: {:?}", other),
        }
    };
}

pub(crate) use check_err;
pub(crate) use check_ok;
