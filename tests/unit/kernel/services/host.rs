use super::*;
use crate::kernel::services::ports::{AccountFuture, BoxFuture};
use crate::kernel::Account;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
struct QueuedExecutor {
    tasks: Mutex<Vec<BoxFuture>>,
}

impl QueuedExecutor {
    fn run_all(&self) {
        let tasks: Vec<BoxFuture> = std::mem::take(&mut *self.tasks.lock().unwrap());
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        for task in tasks {
            rt.block_on(task);
        }
    }
}

impl AsyncExecutor for QueuedExecutor {
    fn spawn(&self, task: BoxFuture) {
        self.tasks.lock().unwrap().push(task);
    }
}

struct CountingAccounts {
    calls: AtomicUsize,
    result: Option<Account>,
    fail: bool,
}

impl AccountService for CountingAccounts {
    fn current_account(&self) -> AccountFuture {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let result = self.result.clone();
        let fail = self.fail;
        Box::pin(async move {
            if fail {
                Err(crate::kernel::services::ports::AccountError::Unavailable(
                    "503".to_string(),
                ))
            } else {
                Ok(result)
            }
        })
    }
}

fn host_with(accounts: CountingAccounts) -> (KernelServiceHost, Arc<QueuedExecutor>, Arc<CountingAccounts>) {
    let executor = Arc::new(QueuedExecutor::default());
    let accounts = Arc::new(accounts);
    let host = KernelServiceHost::new(executor.clone(), accounts.clone());
    (host, executor, accounts)
}

#[test]
fn fetch_posts_resolved_action_tagged_with_generation() {
    let (mut host, executor, accounts) = host_with(CountingAccounts {
        calls: AtomicUsize::new(0),
        result: Some(Account::new(3)),
        fail: false,
    });

    host.context().fetch_current_account(4);
    assert_eq!(accounts.calls.load(Ordering::SeqCst), 1);
    assert!(matches!(host.try_recv(), Err(TryRecvError::Empty)));

    executor.run_all();
    match host.try_recv() {
        Ok(KernelMessage::Action(Action::AccountResolved {
            generation,
            account,
        })) => {
            assert_eq!(generation, 4);
            assert_eq!(account, Some(Account::new(3)));
        }
        other => panic!("unexpected message: {other:?}"),
    }
}

#[test]
fn fetch_failure_posts_failed_action() {
    let (mut host, executor, _accounts) = host_with(CountingAccounts {
        calls: AtomicUsize::new(0),
        result: None,
        fail: true,
    });

    host.context().fetch_current_account(1);
    executor.run_all();
    match host.try_recv() {
        Ok(KernelMessage::Action(Action::AccountFetchFailed { generation, error })) => {
            assert_eq!(generation, 1);
            assert!(error.contains("503"));
        }
        other => panic!("unexpected message: {other:?}"),
    }
}

#[test]
fn context_dispatch_reaches_host() {
    let (mut host, _executor, _accounts) = host_with(CountingAccounts {
        calls: AtomicUsize::new(0),
        result: None,
        fail: false,
    });
    host.context().dispatch(Action::SearchClear);
    assert!(matches!(
        host.recv_timeout(Duration::from_millis(10)),
        Ok(KernelMessage::Action(Action::SearchClear))
    ));
}
