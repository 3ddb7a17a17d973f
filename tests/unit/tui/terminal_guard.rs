use super::*;
use std::sync::Mutex;

#[derive(Default)]
struct MockOps {
    calls: Mutex<Vec<&'static str>>,
}

impl TerminalOps for MockOps {
    fn enter(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("enter");
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("leave");
        Ok(())
    }
}

struct FailingOps;

impl TerminalOps for FailingOps {
    fn enter(&self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "not a tty"))
    }

    fn leave(&self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn guard_leaves_on_drop() {
    let ops = Arc::new(MockOps::default());
    {
        let _guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    }
    assert_eq!(&*ops.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn restorer_leaves_once_across_clones() {
    let ops = Arc::new(MockOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();

    restorer.clone().restore().unwrap();
    restorer.restore().unwrap();
    drop(guard);

    assert_eq!(&*ops.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn failed_enter_returns_error() {
    assert!(TerminalGuard::with_ops(Arc::new(FailingOps)).is_err());
}

#[test]
fn exit_codes_follow_shell_convention() {
    assert_eq!(TerminationSignal::SigInt.exit_code(), 130);
    assert_eq!(TerminationSignal::SigTerm.exit_code(), 143);
}

#[test]
fn signal_exit_overrides_clean_exit_status() {
    assert_eq!(exit_status(None), 0);
    assert_eq!(exit_status(Some(TerminationSignal::SigTerm)), 143);
    assert_eq!(exit_status(Some(TerminationSignal::SigInt)), 130);
}
