use super::*;
use crate::error::{Error, IntrospectError};
use std::time::Duration;

#[test]
fn ranks_blocks_by_total_time() -> Result<(), Error> {
    let mut session = quiet_session();
    let sleep = |ms| move || std::thread::sleep(Duration::from_millis(ms));
    let results = session.benchmark(1, &mut [&mut sleep(50), &mut sleep(10), &mut sleep(100)])?;

    let order: Vec<usize> = results.iter().map(|r| r.block_index).collect();
    test_eq!(got: order, expected: vec![1, 0, 2]);
    assert!(results[0].total >= Duration::from_millis(10));
    assert!(results[2].total >= Duration::from_millis(100));

    let out = written(&session);
    let first = out.find("block index 1:");
    let last = out.find("block index 2:");
    assert!(first.is_some() && last.is_some() && first < last);
    Ok(())
}

#[test]
fn runs_each_block_exactly_n_times() -> Result<(), Error> {
    let mut session = quiet_session();
    let (mut a, mut b) = (0, 0);
    let results = session.benchmark(7, &mut [&mut || a += 1, &mut || b += 2])?;
    test_eq!(got: (a, b), expected: (7, 14));
    test_eq!(got: results.len(), expected: 2);
    for r in &results {
        test_eq!(got: r.per_iteration(), expected: r.total / 7);
    }
    Ok(())
}

#[test]
fn needs_iterations() {
    let mut session = quiet_session();
    let got = session.benchmark(0, &mut [&mut || {}]);
    assert!(matches!(
        got,
        Err(Error::Introspect(IntrospectError::ZeroIterations))
    ));
}
