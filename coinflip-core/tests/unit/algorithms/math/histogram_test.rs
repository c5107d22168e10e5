use super::*;

#[test]
fn can_bucket_values_with_clamping() {
    let histogram = Histogram::new(10);

    assert_eq!(histogram.bucket_of(0.), 0);
    assert_eq!(histogram.bucket_of(0.05), 0);
    assert_eq!(histogram.bucket_of(0.35), 3);
    assert_eq!(histogram.bucket_of(0.999999), 9);
    assert_eq!(histogram.bucket_of(1.), 9);
}

#[test]
fn can_preserve_total_count() {
    let mut histogram = Histogram::new(10);
    let values = [0., 0.11, 0.25, 0.5, 0.5, 0.77, 0.999];

    values.iter().for_each(|&value| histogram.observe(value));

    assert_eq!(histogram.total(), values.len());
    assert_eq!(histogram.buckets().iter().sum::<usize>(), values.len());
    assert_eq!(histogram.buckets()[5], 2);
}
