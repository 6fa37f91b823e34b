//! Host test helpers: a no-op-waker executor and recording mocks.

extern crate std;

use crate::output::{LineSink, OutputError};
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};
use embedded_hal_async::delay::DelayNs;
use std::string::String;
use std::sync::{Arc, Mutex};
use std::vec::Vec;

fn noop_waker() -> Waker {
    fn noop_raw_waker() -> RawWaker {
        fn noop(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            noop_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
        RawWaker::new(core::ptr::null(), &VTABLE)
    }

    unsafe { Waker::from_raw(noop_raw_waker()) }
}

/// Poll a pinned future once.
pub fn poll_once<F: Future>(f: Pin<&mut F>) -> Poll<F::Output> {
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);
    f.poll(&mut cx)
}

/// Run a future that completes without ever returning `Pending`.
pub fn block_on<F: Future>(f: F) -> F::Output {
    let mut f = core::pin::pin!(f);
    match poll_once(f.as_mut()) {
        Poll::Ready(result) => result,
        Poll::Pending => panic!("Mock future returned Pending unexpectedly"),
    }
}

/// Shared view of everything a [`MockSink`] received.
#[derive(Clone, Default)]
pub struct SinkHandle {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SinkHandle {
    /// Received text split into lines, terminators removed.
    pub fn lines(&self) -> Vec<String> {
        let bytes = self.bytes.lock().unwrap();
        let text = core::str::from_utf8(&bytes).unwrap();
        text.split_terminator("\r\n").map(String::from).collect()
    }

    pub fn raw(&self) -> Vec<u8> {
        self.bytes.lock().unwrap().clone()
    }
}

/// Console stand-in that records every byte, or rejects every write.
pub struct MockSink {
    handle: SinkHandle,
    fail: bool,
}

impl MockSink {
    pub fn new() -> Self {
        Self {
            handle: SinkHandle::default(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            handle: SinkHandle::default(),
            fail: true,
        }
    }

    pub fn handle(&self) -> SinkHandle {
        self.handle.clone()
    }
}

impl LineSink for MockSink {
    fn write(&mut self, bytes: &[u8]) -> impl Future<Output = Result<(), OutputError>> {
        let result = if self.fail {
            Err(OutputError::Io)
        } else {
            self.handle.bytes.lock().unwrap().extend_from_slice(bytes);
            Ok(())
        };
        core::future::ready(result)
    }
}

/// Delay that returns immediately and records each request in milliseconds.
#[derive(Clone, Default)]
pub struct MockDelay {
    calls: Arc<Mutex<Vec<u32>>>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<u32> {
        self.calls.lock().unwrap().clone()
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.calls.lock().unwrap().push(ns / 1_000_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.calls.lock().unwrap().push(ms);
    }
}
