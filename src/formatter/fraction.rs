use std::iter;

/// Overwrite the run of '.' directly after the first '.' in `out` with the
/// leading digits of `nanos`, zero-padded to nine digits and then with '0'.
/// The first '.' stays as the decimal point. Later dots are left alone.
pub fn substitute(out: &mut String, nanos: u32) {
	let Some(point) = out.find('.') else {
		return;
	};
	let start = point + 1;
	let run = out[start..].bytes().take_while(|b| *b == b'.').count();
	if run == 0 {
		return;
	}

	let digits: String = format!("{:09}", nanos).chars()
		.chain(iter::repeat('0'))
		.take(run)
		.collect();
	out.replace_range(start..start + run, &digits);
}
