mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;
    use std::time::Duration;

    use neopixel_dma::{TransferSignal, TransferState};

    static SIGNAL: TransferSignal = TransferSignal::new();

    #[test]
    fn test_starts_idle() {
        let signal = TransferSignal::default();
        assert_eq!(signal.state(), TransferState::Idle);
        assert!(!signal.is_busy());
    }

    #[test]
    fn test_single_outstanding_transfer() {
        let signal = TransferSignal::new();
        assert!(signal.try_begin());
        assert_eq!(signal.state(), TransferState::Busy);
        assert!(!signal.try_begin());

        signal.complete();
        assert_eq!(signal.state(), TransferState::Idle);
        assert!(signal.try_begin());
    }

    #[test]
    fn test_duplicate_completion_is_ignored() {
        let signal = TransferSignal::new();
        signal.complete();
        assert_eq!(signal.state(), TransferState::Idle);

        assert!(signal.try_begin());
        let completer = signal.completer();
        completer.notify_complete();
        completer.notify_complete();
        assert_eq!(signal.state(), TransferState::Idle);
    }

    #[test]
    fn test_static_signal_completed_from_other_thread() {
        assert!(SIGNAL.try_begin());
        let completer = SIGNAL.completer();
        thread::spawn(move || completer.notify_complete())
            .join()
            .unwrap();
        assert!(!SIGNAL.is_busy());
    }

    #[test]
    fn test_wait_and_begin_blocks_until_complete() {
        let signal = TransferSignal::new();
        let claimed = AtomicBool::new(false);
        assert!(signal.try_begin());

        thread::scope(|s| {
            let waiter = s.spawn(|| {
                signal.wait_and_begin();
                claimed.store(true, Ordering::SeqCst);
            });

            thread::sleep(Duration::from_millis(50));
            assert!(!claimed.load(Ordering::SeqCst));

            signal.completer().notify_complete();
            waiter.join().unwrap();
        });

        assert!(claimed.load(Ordering::SeqCst));
        // The waiter claimed the signal again
        assert_eq!(signal.state(), TransferState::Busy);
    }
}
