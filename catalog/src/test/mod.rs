//! Test suites and proptest generators for the catalog pipeline.


#[cfg(test)]
mod unit;
