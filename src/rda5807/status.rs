use std::fmt;

use crate::i2c::{
	I2cBus,
	I2cError,
};

// register 0x0a high byte
const SEEK_COMPLETE_BIT: u8 = 0b0100_0000;
const SEEK_FAILED_BIT: u8 = 0b0010_0000;

// the channel byte counts 0.1 MHz steps up from 87.5 MHz
const BAND_BASE_TENTHS: u16 = 875;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SeekStatus {
	Seeking,
	SeekComplete,
	SeekFailed,
}

/// Tuned frequency in tenths of a MHz.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Frequency(pub u16);

impl fmt::Display for Frequency {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}.{} MHz", self.0 / 10, self.0 % 10)
	}
}

pub fn decode_seek_status(frame: &[u8; 2]) -> SeekStatus {
	if 0 == (frame[0] & SEEK_COMPLETE_BIT) {
		SeekStatus::Seeking
	} else if 0 != (frame[0] & SEEK_FAILED_BIT) {
		SeekStatus::SeekFailed
	} else {
		SeekStatus::SeekComplete
	}
}

pub fn decode_frequency(frame: &[u8; 2]) -> Frequency {
	Frequency(BAND_BASE_TENTHS + u16::from(frame[1]))
}

/// Read the status/frequency register pair (one two-byte read starting at
/// register 0x0a) and decode both values.
pub fn read_status<B: I2cBus>(bus: &mut B) -> Result<(SeekStatus, Frequency), I2cError> {
	let mut frame = [0u8; 2];
	bus.read_frame(&mut frame)?;
	Ok((decode_seek_status(&frame), decode_frequency(&frame)))
}

/// The three fixed report lines of the original tool.
pub fn status_line(status: SeekStatus, frequency: Frequency) -> String {
	match status {
		SeekStatus::SeekFailed => format!("Seeking failed ! ( {} )", frequency),
		SeekStatus::SeekComplete => format!("Seeking OK ! ( {} )", frequency),
		SeekStatus::Seeking => format!("Seeking ... ( {} )", frequency),
	}
}

#[cfg(test)]
mod test {
	use crate::i2c::mock::MockBus;

	use super::{
		Frequency,
		SeekStatus,
		decode_frequency,
		decode_seek_status,
		read_status,
		status_line,
	};

	#[test]
	fn seek_status_bit_table() {
		// bit 6 clear: still seeking, bit 5 is meaningless
		assert_eq!(decode_seek_status(&[0b0000_0000, 0]), SeekStatus::Seeking);
		assert_eq!(decode_seek_status(&[0b0010_0000, 0]), SeekStatus::Seeking);
		// bit 6 set: done, bit 5 tells success from failure
		assert_eq!(decode_seek_status(&[0b0100_0000, 0]), SeekStatus::SeekComplete);
		assert_eq!(decode_seek_status(&[0b0110_0000, 0]), SeekStatus::SeekFailed);
		// unrelated bits don't matter
		assert_eq!(decode_seek_status(&[0b1101_1111, 0]), SeekStatus::SeekComplete);
	}

	#[test]
	fn frequency_is_linear_in_the_channel_byte() {
		for channel in 0..=255u8 {
			let frequency = decode_frequency(&[0, channel]);
			assert_eq!(frequency.0, 875 + u16::from(channel));
		}
	}

	#[test]
	fn frequency_formatting_keeps_the_tenths_digit() {
		assert_eq!(decode_frequency(&[0, 0]).to_string(), "87.5 MHz");
		assert_eq!(decode_frequency(&[0, 50]).to_string(), "92.5 MHz");
		assert_eq!(decode_frequency(&[0, 125]).to_string(), "100.0 MHz");
		assert_eq!(decode_frequency(&[0, 255]).to_string(), "113.0 MHz");
	}

	#[test]
	fn status_lines_match_the_original_templates() {
		let freq = Frequency(925);
		assert_eq!(status_line(SeekStatus::SeekFailed, freq), "Seeking failed ! ( 92.5 MHz )");
		assert_eq!(status_line(SeekStatus::SeekComplete, freq), "Seeking OK ! ( 92.5 MHz )");
		assert_eq!(status_line(SeekStatus::Seeking, freq), "Seeking ... ( 92.5 MHz )");
	}

	#[test]
	fn status_read_end_to_end() {
		let mut bus = MockBus::with_response(&[0x40, 0x32]);

		let (status, frequency) = read_status(&mut bus).unwrap();

		assert_eq!(status, SeekStatus::SeekComplete);
		assert_eq!(frequency, Frequency(925));
		assert_eq!(status_line(status, frequency), "Seeking OK ! ( 92.5 MHz )");
	}
}
