use std::sync::Mutex;
use std::thread;

use lazy_static::lazy_static;
use tmstr::{Formatter, DEFAULT_FORMAT, ERROR_SENTINEL, SORTABLE_FORMAT};

lazy_static! {
	// The process-wide format is shared by every test in this file
	static ref SERIAL: Mutex<()> = Mutex::new(());
}

fn serial() -> std::sync::MutexGuard<'static, ()> {
	SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

#[test]
fn test_fresh_formatter_uses_default_format() {
	let mut formatter = Formatter::new();
	assert_eq!(formatter.format(), DEFAULT_FORMAT);
	assert_ne!(formatter.now_or_sentinel(), ERROR_SENTINEL);
}

#[test]
fn test_now_twice_in_succession() {
	let _serial = serial();
	tmstr::set_format(DEFAULT_FORMAT);
	let first = tmstr::now();
	let second = tmstr::now();
	assert_ne!(first, ERROR_SENTINEL);
	assert_ne!(second, ERROR_SENTINEL);
	// Only the time-varying fields may differ
	assert_eq!(first.len(), second.len());
}

#[test]
fn test_sortable_format() {
	let _serial = serial();
	let recommended = tmstr::set_format(SORTABLE_FORMAT);
	assert_eq!(recommended, 19 + 9);

	let stamp = tmstr::now();
	assert_eq!(stamp.len(), 19);
	assert_eq!(&stamp[4..5], "-");
	assert_eq!(&stamp[10..11], " ");
	assert!(!stamp.contains('.'));
}

#[test]
fn test_invalid_prefix_yields_sentinel() {
	let _serial = serial();
	assert_eq!(tmstr::set_format("Q%F %T"), 0);
	assert_eq!(tmstr::now(), ERROR_SENTINEL);

	let mut buf = String::new();
	assert_eq!(tmstr::render(&mut buf, 64), ERROR_SENTINEL);
	assert!(buf.is_empty());

	// A valid format brings it back
	assert!(tmstr::set_format("U%T") > 0);
	assert_ne!(tmstr::now(), ERROR_SENTINEL);
}

#[test]
fn test_render_zero_capacity() {
	let _serial = serial();
	tmstr::set_format(SORTABLE_FORMAT);
	let mut buf = String::new();
	assert_eq!(tmstr::render(&mut buf, 0), ERROR_SENTINEL);

	let recommended = tmstr::set_format("U%T...");
	let stamp = tmstr::render(&mut buf, recommended).to_owned();
	assert_eq!(stamp.len(), 11);
	assert_eq!(buf, stamp);
}

#[test]
fn test_growing_format_keeps_old_copies() {
	let _serial = serial();
	tmstr::set_format("U%T");
	let short = tmstr::now();
	tmstr::set_format("U%A, %d %B %Y %H:%M:%S.......... %Z");
	let long = tmstr::now();
	assert_eq!(short.len(), 8);
	assert!(long.ends_with(" UTC"));
	assert!(long.len() > short.len());
}

#[test]
fn test_now_from_several_threads() {
	let _serial = serial();
	tmstr::set_format(SORTABLE_FORMAT);
	let handles: Vec<_> = (0..4)
		.map(|_| thread::spawn(|| (0..50).map(|_| tmstr::now()).collect::<Vec<_>>()))
		.collect();
	for handle in handles {
		for stamp in handle.join().unwrap() {
			assert_eq!(stamp.len(), 19);
		}
	}
}
