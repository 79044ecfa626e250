//! Encoding and decoding from many threads at once.

use std::thread;

use idewire_protocol::types::{Request, Response};
use idewire_protocol::{api_docs, decode, encode};

use crate::common;

#[test]
fn parallel_round_trips_agree() {
    let requests = common::requests();
    let responses = common::responses();
    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for request in &requests {
                    assert_eq!(decode::<Request>(&encode(request)).as_ref(), Ok(request));
                }
                for response in &responses {
                    assert_eq!(decode::<Response>(&encode(response)).as_ref(), Ok(response));
                }
            });
        }
    });
}

#[test]
fn docs_are_identical_across_threads() {
    let expected = api_docs().to_string();
    let rendered: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| api_docs().to_string()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });
    assert!(rendered.iter().all(|docs| *docs == expected));
}
