//! Local maxima of sampled sequences.

/// Returns the indices of the local maxima of `samples`, in ascending order.
///
/// A sample is a peak if it is strictly greater than both of its neighbours.
/// A flat run of equal samples whose neighbours on either side are strictly
/// smaller counts as a single peak, reported at the middle of the run (the
/// lower middle for runs of even length). The first and last samples are
/// never peaks.
///
/// # Examples
///
/// ```
/// # use remez_nums::approx::find_peaks;
/// #
/// assert_eq!(find_peaks(&[0.0, 2.0, 1.0, 3.0, 3.0, 3.0, 0.0]), [1, 4]);
/// assert!(find_peaks(&[1.0, 2.0, 3.0]).is_empty());
/// ```
pub fn find_peaks(samples: &[f64]) -> Vec<usize> {
    let mut peaks = Vec::new();

    if samples.len() < 3 {
        return peaks;
    }

    let last = samples.len() - 1;
    let mut i = 1;

    while i < last {
        if samples[i - 1] < samples[i] {
            let mut ahead = i + 1;

            while ahead < last && samples[ahead] == samples[i] {
                ahead += 1;
            }

            if samples[ahead] < samples[i] {
                peaks.push((i + ahead - 1) / 2);
                i = ahead;
            }
        }

        i += 1;
    }

    peaks
}
