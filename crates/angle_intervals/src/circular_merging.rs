/// Combines neighbouring elements of sorted data, left to right.
/// Elements the merge function refuses to combine are kept as they are.
pub fn linear_merging<T>(
    sorted_data: impl IntoIterator<Item = T>,
    merge_function: impl Fn(&T, &T) -> Option<T>,
) -> Vec<T> {
    let mut output: Vec<T> = vec![];
    for t in sorted_data {
        let Some(last_placed) = output.pop() else {
            output.push(t);
            continue;
        };

        if let Some(combined) = merge_function(&last_placed, &t) {
            output.push(combined);
        } else {
            output.push(last_placed);
            output.push(t);
        }
    }
    output
}

/// Combines elements in a circular fashion: a linear pass, then one more attempt to combine the
/// last element with the first one.
///
/// The loop-closing combination replaces the last element, so output stays sorted by start.
/// Search term "circular arc graph" may be relevant
pub fn circular_merging<T>(
    sorted_data: impl IntoIterator<Item = T>,
    merge_function: impl Fn(&T, &T) -> Option<T>,
    wraparound_merge_function: impl Fn(&T, &T) -> Option<T>,
) -> Vec<T> {
    let mut output = linear_merging(sorted_data, merge_function);
    if output.len() >= 2 {
        let last = &output[output.len() - 1];
        let first = &output[0];
        if let Some(combined) = wraparound_merge_function(last, first) {
            log::trace!("merged last element into first across the wraparound");
            output.pop();
            output.remove(0);
            output.push(combined);
        }
    }
    output
}
