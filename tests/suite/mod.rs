mod concurrency;
mod docs;
mod exclusivity;
mod roundtrip;
mod scenarios;
