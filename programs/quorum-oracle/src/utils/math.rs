/// Median of the collected observation values.
///
/// Copies the input, sorts ascending and returns the element at index
/// `len / 2`. Callers hand in the full reporter set, whose size is odd by
/// construction, so the middle element is unique and no tie-break is needed.
/// The set is small (bounded by the reporter cap), so sort cost is irrelevant.
pub fn median(values: &[i64]) -> Option<i64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort();
    Some(sorted[sorted.len() / 2])
}
