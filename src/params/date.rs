//! Date-window bounds that accept an absolute instant, a day count, or a second count.

// self
use crate::{_prelude::*, params::first_present};

/// One rendered form of a date bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateWindow {
	/// Absolute instant rendered as `HH:mm:ss dd/MM/yyyy G`.
	Absolute(OffsetDateTime),
	/// Relative bound in whole days, rendered as a bare integer.
	Days(u64),
	/// Relative bound in seconds, rendered as `<n>s`.
	Seconds(u64),
}
impl DateWindow {
	/// Renders the wire value.
	pub fn render(&self) -> String {
		match self {
			DateWindow::Absolute(at) => format_absolute(*at),
			DateWindow::Days(days) => days.to_string(),
			DateWindow::Seconds(seconds) => format!("{seconds}s"),
		}
	}
}
impl Display for DateWindow {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.render())
	}
}

/// Redundant representations of one bound; the absolute instant beats days, which beat seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateBound {
	/// Absolute instant.
	pub at: Option<OffsetDateTime>,
	/// Whole-day count.
	pub days: Option<u64>,
	/// Second count.
	pub seconds: Option<u64>,
}
impl DateBound {
	/// Picks the highest-precedence representation that is present.
	pub fn resolve(&self) -> Option<DateWindow> {
		first_present([
			self.at.map(DateWindow::Absolute),
			self.days.map(DateWindow::Days),
			self.seconds.map(DateWindow::Seconds),
		])
	}

	/// Returns `true` when no representation is set.
	pub fn is_unset(&self) -> bool {
		self.resolve().is_none()
	}
}

/// Formats `HH:mm:ss dd/MM/yyyy G` in the instant's own offset.
///
/// The year is the year-of-era: proleptic year `0` is `1 BC`. `time::format_description` has no
/// era component and its `[year]` is the signed proleptic year, so the whole value is assembled
/// here rather than splitting it between a format description and a manual era suffix.
pub fn format_absolute(at: OffsetDateTime) -> String {
	let year = at.year();
	let (year_of_era, era) = if year > 0 { (year, "AD") } else { (1 - year, "BC") };

	format!(
		"{:02}:{:02}:{:02} {:02}/{:02}/{year_of_era:04} {era}",
		at.hour(),
		at.minute(),
		at.second(),
		at.day(),
		u8::from(at.month()),
	)
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn absolute_instants_use_era_format() {
		assert_eq!(
			format_absolute(macros::datetime!(2015-03-07 04:05:06 UTC)),
			"04:05:06 07/03/2015 AD"
		);
		assert_eq!(
			format_absolute(macros::datetime!(2015-03-07 04:05:06 +02:00)),
			"04:05:06 07/03/2015 AD"
		);

		let year_zero = time::Date::from_calendar_date(0, time::Month::December, 31)
			.expect("Year zero should be representable.")
			.with_hms(23, 0, 0)
			.expect("Time fixture should be valid.")
			.assume_utc();

		assert_eq!(format_absolute(year_zero), "23:00:00 31/12/0001 BC");
	}

	#[test]
	fn precedence_prefers_absolute_then_days_then_seconds() {
		let at = macros::datetime!(2020-01-02 03:04:05 UTC);
		let full = DateBound { at: Some(at), days: Some(3), seconds: Some(86_400) };

		assert_eq!(full.resolve(), Some(DateWindow::Absolute(at)));
		assert_eq!(DateBound { at: None, ..full }.resolve(), Some(DateWindow::Days(3)));
		assert_eq!(
			DateBound { seconds: Some(86_400), ..Default::default() }
				.resolve()
				.map(|window| window.render()),
			Some("86400s".to_owned())
		);
		assert!(DateBound::default().is_unset());
	}
}
